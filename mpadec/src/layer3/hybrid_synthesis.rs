// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Justification: Some loops are better expressed without a range loop.
#![allow(clippy::needless_range_loop)]

use std::f64;

use lazy_static::lazy_static;

use super::GranuleChannel;
use crate::common::*;

lazy_static! {
    /// IMDCT window coefficients for Long, Start, Short, and End blocks, in that order.
    ///
    /// ```text
    /// Long:  W[ 0..36] = sin(PI/36 * (i + 0.5))
    ///
    /// Start: W[ 0..18] = sin(PI/36 * (i + 0.5))
    ///        W[18..24] = 1.0
    ///        W[24..30] = sin(PI/12 * (i - 18 + 0.5))
    ///        W[30..36] = 0.0
    ///
    /// Short: W[ 0..12] = sin(PI/12 * (i + 0.5)), applied to each 12 sample window
    ///        W[12..36] = 0.0
    ///
    /// End:   W[ 0..6 ] = 0.0
    ///        W[ 6..12] = sin(PI/12 * (i - 6 + 0.5))
    ///        W[12..18] = 1.0
    ///        W[18..36] = sin(PI/36 * (i + 0.5))
    /// ```
    static ref IMDCT_WINDOWS: [[f32; 36]; 4] = {
        const PI_36: f64 = f64::consts::PI / 36.0;
        const PI_12: f64 = f64::consts::PI / 12.0;

        let long = |i: usize| (PI_36 * (i as f64 + 0.5)).sin() as f32;
        let short = |i: usize| (PI_12 * (i as f64 + 0.5)).sin() as f32;

        let mut windows = [[0f32; 36]; 4];

        for i in 0..36 {
            windows[0][i] = long(i);
        }

        for i in 0..18 {
            windows[1][i] = long(i);
        }
        for i in 18..24 {
            windows[1][i] = 1.0;
        }
        for i in 24..30 {
            windows[1][i] = short(i - 18);
        }

        for i in 0..12 {
            windows[2][i] = short(i);
        }

        for i in 6..12 {
            windows[3][i] = short(i - 6);
        }
        for i in 12..18 {
            windows[3][i] = 1.0;
        }
        for i in 18..36 {
            windows[3][i] = long(i);
        }

        windows
    };
}

lazy_static! {
    /// Pre- and post-scaling factors of the 36 point IMDCT factorization.
    ///
    /// ```text
    /// dct_iv[m]  = 2 * cos(PI/72 * (2m + 1)),    m = 0..18
    /// sdct_18[m] = 2 * cos(PI/36 * (2m + 1)),    m = 0..9
    /// sdct_9     = [-sqrt(3),
    ///               -2 * cos(8PI/9), -2 * cos(4PI/9), -2 * cos(2PI/9),
    ///               -2 * sin(8PI/9), -2 * sin(4PI/9), -2 * sin(2PI/9)]
    /// ```
    static ref IMDCT36_SCALE: ([f32; 18], [f32; 9], [f32; 7]) = {
        const PI: f64 = f64::consts::PI;

        let mut dct_iv = [0f32; 18];
        let mut sdct_18 = [0f32; 9];

        for (m, s) in dct_iv.iter_mut().enumerate() {
            *s = (2.0 * (PI / 72.0 * (2 * m + 1) as f64).cos()) as f32;
        }
        for (m, s) in sdct_18.iter_mut().enumerate() {
            *s = (2.0 * (PI / 36.0 * (2 * m + 1) as f64).cos()) as f32;
        }

        let sdct_9 = [
            -(3f64.sqrt()) as f32,
            (-2.0 * (8.0 * PI / 9.0).cos()) as f32,
            (-2.0 * (4.0 * PI / 9.0).cos()) as f32,
            (-2.0 * (2.0 * PI / 9.0).cos()) as f32,
            (-2.0 * (8.0 * PI / 9.0).sin()) as f32,
            (-2.0 * (4.0 * PI / 9.0).sin()) as f32,
            (-2.0 * (2.0 * PI / 9.0).sin()) as f32,
        ];

        (dct_iv, sdct_18, sdct_9)
    };
}

lazy_static! {
    /// DCT-IV coefficients for the 6 point transform of each short window.
    ///
    /// ```text
    /// cos6[n][k] = cos(PI/24 * (2n + 1) * (2k + 1))
    /// ```
    static ref DCT_IV_COS_6: [[f32; 6]; 6] = {
        let mut cos = [[0f32; 6]; 6];

        for (n, row) in cos.iter_mut().enumerate() {
            for (k, c) in row.iter_mut().enumerate() {
                *c = (f64::consts::PI / 24.0 * ((2 * n + 1) * (2 * k + 1)) as f64).cos() as f32;
            }
        }

        cos
    };
}

lazy_static! {
    /// Alias reduction butterfly coefficients, CS and CA, from the values of ISO/IEC 11172-3
    /// Table B.9.
    ///
    /// ```text
    /// cs[i] =    1 / sqrt(1 + c[i]^2)
    /// ca[i] = c[i] / sqrt(1 + c[i]^2)
    /// ```
    static ref ANTIALIAS_CS_CA: ([f32; 8], [f32; 8]) = {
        const C: [f64; 8] = [-0.6, -0.535, -0.33, -0.185, -0.095, -0.041, -0.0142, -0.0037];

        let mut cs = [0f32; 8];
        let mut ca = [0f32; 8];

        for i in 0..8 {
            let sqrt = f64::sqrt(1.0 + (C[i] * C[i]));
            cs[i] = (1.0 / sqrt) as f32;
            ca[i] = (C[i] / sqrt) as f32;
        }

        (cs, ca)
    };
}

/// The second half of the windowed IMDCT output of each sub-band, carried over to be added to the
/// first half of the next granule's output.
///
/// Two sets of blocks are kept. The previous granule's overlap is read while the current granule's
/// is written, then the roles are swapped.
#[derive(Default)]
pub struct Overlap {
    blocks: [[[f32; 18]; 32]; 2],
    prev: usize,
}

impl Overlap {
    /// Gets the previous granule's overlap, and the overlap to fill for the current granule.
    fn split(&mut self) -> (&[[f32; 18]; 32], &mut [[f32; 18]; 32]) {
        let (first, second) = self.blocks.split_at_mut(1);

        if self.prev == 0 {
            (&first[0], &mut second[0])
        }
        else {
            (&second[0], &mut first[0])
        }
    }

    fn swap(&mut self) {
        self.prev ^= 1;
    }

    /// Zeroes the overlap, as if no granule had been decoded.
    pub fn clear(&mut self) {
        self.blocks = [[[0f32; 18]; 32]; 2];
        self.prev = 0;
    }
}

/// Reorders the samples of short blocks from band order, where each window of a band is
/// contiguous, into sub-band order, where the 3 windows are interleaved sample by sample.
///
/// ```text
///   [ w0: 0 1 2 3 | w1: 4 5 6 7 | w2: 8 9 a b ]  =>  [ 0 4 8 1 5 9 2 6 a 3 7 b ]
/// ```
pub(super) fn reorder(header: &FrameHeader, channel: &GranuleChannel, buf: &mut [f32; 576]) {
    let bands = match channel.block_type {
        BlockType::Short { is_mixed: false } => &SFB_SHORT_BANDS[header.sample_rate_idx][..],
        BlockType::Short { is_mixed: true } => {
            let switch = SFB_MIXED_SWITCH_POINT[header.sample_rate_idx];
            &SFB_MIXED_BANDS[header.sample_rate_idx][switch..]
        }
        _ => return,
    };

    let start = bands[0];

    let mut reorder_buf = [0f32; 576];

    let mut i = start;

    for win in bands.windows(4).step_by(3) {
        let win0 = &buf[win[0]..win[1]];
        let win1 = &buf[win[1]..win[2]];
        let win2 = &buf[win[2]..win[3]];

        for ((&w0, &w1), &w2) in win0.iter().zip(win1).zip(win2) {
            reorder_buf[i] = w0;
            reorder_buf[i + 1] = w1;
            reorder_buf[i + 2] = w2;
            i += 3;
        }
    }

    buf[start..i].copy_from_slice(&reorder_buf[start..i]);
}

/// Applies the alias reduction butterflies to the boundaries between adjacent long block
/// sub-bands.
pub(super) fn antialias(channel: &GranuleChannel, samples: &mut [f32; 576]) {
    let sb_end = match channel.block_type {
        BlockType::Short { is_mixed: false } => return,
        // Only the boundary between the 2 long sub-bands of a mixed block.
        BlockType::Short { is_mixed: true } => 2 * 18,
        _ => 32 * 18,
    };

    let (cs, ca): &([f32; 8], [f32; 8]) = &ANTIALIAS_CS_CA;

    // For the sub-band starting at j, butterfly (j-1-i, j+i) for i in 0..8:
    //
    //   lower' = lower * cs[i] - upper * ca[i]
    //   upper' = upper * cs[i] + lower * ca[i]
    for sb in (18..sb_end).step_by(18) {
        for i in 0..8 {
            let li = sb - 1 - i;
            let ui = sb + i;
            let lower = samples[li];
            let upper = samples[ui];
            samples[li] = lower * cs[i] - upper * ca[i];
            samples[ui] = upper * cs[i] + lower * ca[i];
        }
    }
}

/// Computes the N = 2 * M point IMDCT of `x` from its M point DCT-IV, `dct`.
///
/// The IMDCT is `y[i] = SUM(k=0..M) x[k] * cos(PI/(2N) * (2i + 1 + M) * (2k + 1))` which, by the
/// symmetries of the cosine, unfolds from the DCT-IV as:
///
/// ```text
///  0          M/2                    3M/2          2M
///  +-----------+-----------------------+------------+
///  | d[M/2..M] | -d[0..M].rev()        | -d[0..M/2] |
///  +-----------+-----------------------+------------+
/// ```
#[inline(always)]
fn unfold(dct: &[f32], y: &mut [f32]) {
    let m = dct.len();
    let h = m / 2;

    for i in 0..h {
        y[i] = dct[i + h];
    }
    for i in h..3 * h {
        y[i] = -dct[3 * h - 1 - i];
    }
    for i in 3 * h..2 * m {
        y[i] = -dct[i - 3 * h];
    }
}

/// Computes the 36 point IMDCT of a long block sub-band.
///
/// The 18 point DCT-IV is reduced to an 18 point scaled DCT-II (SDCT-II), which is then split
/// into two 9 point SDCT-IIs over the sums and scaled differences of mirrored inputs. See S.-W.
/// Lee, "Improved algorithm for efficient computation of the forward and backward MDCT in MPEG
/// audio coder", IEEE Trans. Circuits Syst. II, vol. 48, no. 10, pp. 990-994, 2001.
fn imdct36(x: &[f32], y: &mut [f32; 36]) {
    let mut dct = [0f32; 18];

    dct_iv_18(x, &mut dct);

    unfold(&dct, y);
}

/// Computes the unscaled 18 point DCT-IV of `x` by way of an 18 point SDCT-II.
fn dct_iv_18(x: &[f32], y: &mut [f32; 18]) {
    let (scale, _, _) = &*IMDCT36_SCALE;

    let mut scaled = [0f32; 18];

    for ((s, &x), &c) in scaled.iter_mut().zip(x.iter()).zip(scale.iter()) {
        *s = c * x;
    }

    sdct_ii_18(&scaled, y);

    y[0] *= 0.5;
    for i in 1..18 {
        y[i] = 0.5 * y[i] - y[i - 1];
    }
}

/// Computes the 18 point SDCT-II of `x` from the 9 point SDCT-IIs of its even and odd halves.
fn sdct_ii_18(x: &[f32; 18], y: &mut [f32; 18]) {
    let (_, scale, _) = &*IMDCT36_SCALE;

    let mut even = [0f32; 9];
    let mut odd = [0f32; 9];

    for i in 0..9 {
        even[i] = x[i] + x[17 - i];
        odd[i] = scale[i] * (x[i] - x[17 - i]);
    }

    // Even outputs land on y[0], y[2], .., y[16] and odd outputs on y[1], y[3], .., y[17].
    sdct_ii_9(&even, &mut y[..]);
    sdct_ii_9(&odd, &mut y[1..]);

    for i in (3..18).step_by(2) {
        y[i] -= y[i - 2];
    }
}

/// Computes the 9 point SDCT-II of `x` into every other element of `y`.
fn sdct_ii_9(x: &[f32; 9], y: &mut [f32]) {
    let (_, _, d) = &*IMDCT36_SCALE;

    let s35 = x[3] + x[5];
    let d35 = x[3] - x[5];
    let s62 = x[6] + x[2];
    let d62 = x[6] - x[2];
    let s17 = x[1] + x[7];
    let d17 = x[1] - x[7];
    let s80 = x[8] + x[0];
    let d80 = x[8] - x[0];

    let t0 = x[4] + s17;
    let t1 = s35 + s62 + s80;
    let t2 = 2.0 * x[4] - s17;

    let m1 = d[0] * d17;
    let m2 = d[1] * (s62 - s80);
    let m3 = d[2] * (s35 - s80);
    let m4 = d[3] * (s35 - s62);
    let m5 = d[0] * (d35 - d62 + d80);
    let m6 = d[4] * (d62 + d80);
    let m7 = d[5] * (d35 - d80);
    let m8 = d[6] * (d35 + d62);

    y[0] = t0 + t1;
    y[2] = m8 - (m1 + m7);
    y[4] = m4 - (t2 + m2);
    y[6] = m5;
    y[8] = (t2 - m2) - m3;
    y[10] = (m1 - m6) - m7;
    y[12] = t1 - 2.0 * t0;
    y[14] = (m1 + m6) + m8;
    y[16] = (t2 + m3) + m4;
}

/// Computes the 12 point IMDCT of window `w` of an interleaved short block sub-band.
fn imdct12(x: &[f32], w: usize, y: &mut [f32; 12]) {
    let cos6: &[[f32; 6]; 6] = &DCT_IV_COS_6;

    let mut dct = [0f32; 6];

    for (d, row) in dct.iter_mut().zip(cos6.iter()) {
        *d = (0..6).map(|k| x[3 * k + w] * row[k]).sum();
    }

    unfold(&dct, y);
}

/// Windows the IMDCT of a long block sub-band into a 36 sample block.
fn long_block(x: &[f32], window: &[f32; 36], block: &mut [f32; 36]) {
    imdct36(x, block);

    for (s, &w) in block.iter_mut().zip(window.iter()) {
        *s *= w;
    }
}

/// Windows and overlaps the 3 IMDCTs of a short block sub-band into a 36 sample block.
///
/// ```text
/// 0      6          12         18         24         30      36
/// +------+----------+----------+----------+----------+-------+
/// |  0   | y0[0..6] | y0[6..]  | y1[6..]  | y2[6..]  |   0   |
/// |      |          | +y1[..6] | +y2[..6] |          |       |
/// +------+----------+----------+----------+----------+-------+
/// ```
fn short_block(x: &[f32], block: &mut [f32; 36]) {
    let window = &IMDCT_WINDOWS[2];

    *block = [0f32; 36];

    let mut y = [0f32; 12];

    for w in 0..3 {
        imdct12(x, w, &mut y);

        let offset = 6 + 6 * w;

        for i in 0..12 {
            block[offset + i] += y[i] * window[i];
        }
    }
}

/// Performs hybrid synthesis (IMDCT, windowing, and overlap-add) on all 32 sub-bands of a granule.
pub(super) fn hybrid_synthesis(
    channel: &GranuleChannel,
    overlap: &mut Overlap,
    samples: &mut [f32; 576],
) {
    // The number of leading sub-bands transformed as long blocks.
    let n_long_bands = match channel.block_type {
        BlockType::Short { is_mixed: false } => 0,
        BlockType::Short { is_mixed: true } => 2,
        _ => 32,
    };

    let window: &[f32; 36] = match channel.block_type {
        BlockType::Start => &IMDCT_WINDOWS[1],
        BlockType::End => &IMDCT_WINDOWS[3],
        _ => &IMDCT_WINDOWS[0],
    };

    let (prev, next) = overlap.split();

    let mut block = [0f32; 36];

    for (sb, ((sub_band, prev), next)) in
        samples.chunks_exact_mut(18).zip(prev.iter()).zip(next.iter_mut()).enumerate()
    {
        if sb < n_long_bands {
            long_block(sub_band, window, &mut block);
        }
        else {
            short_block(sub_band, &mut block);
        }

        for i in 0..18 {
            sub_band[i] = block[i] + prev[i];
            next[i] = block[18 + i];
        }
    }

    overlap.swap();
}

/// Negates the odd samples of odd sub-bands.
pub(super) fn frequency_inversion(samples: &mut [f32; 576]) {
    for sub_band in samples.chunks_exact_mut(18).skip(1).step_by(2) {
        for s in sub_band.iter_mut().skip(1).step_by(2) {
            *s = -*s;
        }
    }
}
