// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::max;
use std::{f32, f64};

use mpadec_core::errors::{decode_error, Result};

use lazy_static::lazy_static;

use super::{Granule, GranuleChannel};
use crate::common::*;

/// The first invalid intensity position for MPEG1 bitstreams.
const INTENSITY_INV_POS_MPEG1: u8 = 7;

lazy_static! {
    /// (Left, right) channel coefficients for decoding intensity stereo in MPEG1 bitstreams,
    /// indexed by the intensity position, is_pos (0 <= is_pos < 7). From ISO/IEC 11172-3
    /// section 2.4.3.4.9.3:
    ///
    /// ```text
    /// is_ratio = tan(is_pos * PI/12)
    /// k_l      = is_ratio / (1 + is_ratio)
    /// k_r      =        1 / (1 + is_ratio)
    /// ```
    static ref INTENSITY_STEREO_RATIOS_MPEG1: [(f32, f32); 7] = {
        const PI_12: f64 = f64::consts::PI / 12.0;

        let mut ratios = [(0.0, 0.0); 7];

        for (is_pos, ratio) in ratios.iter_mut().enumerate() {
            let is_ratio = (PI_12 * is_pos as f64).tan();
            *ratio = ((is_ratio / (1.0 + is_ratio)) as f32, (1.0 / (1.0 + is_ratio)) as f32);
        }

        // tan(PI/2) is infinite.
        ratios[6] = (1.0, 0.0);

        ratios
    };
}

lazy_static! {
    /// (Left, right) channel coefficients for decoding intensity stereo in MPEG2 and MPEG2.5
    /// bitstreams. From ISO/IEC 13818-3 section 2.4.3.2:
    ///
    /// ```text
    /// is_pos == 0     | k_l = 1.0                    | k_r = 1.0
    /// is_pos is odd   | k_l = i0 ^ ((is_pos + 1) / 2) | k_r = 1.0
    /// is_pos is even  | k_l = 1.0                    | k_r = i0 ^ (is_pos / 2)
    /// ```
    ///
    /// where i0 is 1/sqrt(sqrt(2)) if `scalefac_compress & 1 == 0`, or 1/sqrt(2) otherwise. The
    /// table is indexed by `scalefac_compress & 1`, then by is_pos.
    static ref INTENSITY_STEREO_RATIOS_MPEG2: [[(f32, f32); 32]; 2] = {
        let i0: [f64; 2] = [1.0 / f64::sqrt(f64::consts::SQRT_2), f64::consts::FRAC_1_SQRT_2];

        let mut ratios = [[(0.0, 0.0); 32]; 2];

        for (table, &i0) in ratios.iter_mut().zip(i0.iter()) {
            for (is_pos, ratio) in table.iter_mut().enumerate() {
                *ratio = if is_pos & 1 != 0 {
                    (i0.powf((is_pos + 1) as f64 / 2.0) as f32, 1.0)
                }
                else {
                    (1.0, i0.powf(is_pos as f64 / 2.0) as f32)
                };
            }
        }

        ratios
    };
}

/// Intensity stereo parameters of a granule.
struct Intensity<'a> {
    /// Channel coefficients, indexed by intensity position.
    ratios: &'a [(f32, f32)],
    /// The intensity position of each scale factor band or window.
    is_pos: [u8; 39],
    /// The first invalid intensity position of each scale factor band or window.
    limit: [u8; 39],
    /// Fall back to mid-side stereo for bands with an invalid intensity position.
    mid_side: bool,
}

impl<'a> Intensity<'a> {
    /// Gets the intensity positions from the scale factors of `channel`, the right channel. The
    /// `width` positions preceeding `len` belong to the last band, which is never coded, and are
    /// copied from the band before it.
    fn new(
        header: &FrameHeader,
        channel: &GranuleChannel,
        len: usize,
        width: usize,
        mid_side: bool,
    ) -> Self {
        let (ratios, mut limit) = if header.is_mpeg1() {
            (&INTENSITY_STEREO_RATIOS_MPEG1[..], [INTENSITY_INV_POS_MPEG1; 39])
        }
        else {
            let i0 = usize::from(channel.scalefac_compress & 1);
            (&INTENSITY_STEREO_RATIOS_MPEG2[i0][..], channel.is_pos_limit)
        };

        let mut is_pos = channel.scalefacs;

        for i in len - width..len {
            is_pos[i] = is_pos[i - width];
            limit[i] = limit[i - width];
        }

        Intensity { ratios, is_pos, limit, mid_side }
    }

    /// Decodes one band or window using the intensity position at `sfi`.
    ///
    /// ```text
    /// l[i] = ch0[i] * k_l
    /// r[i] = ch0[i] * k_r
    /// ```
    fn process(&self, sfi: usize, ch0: &mut [f32], ch1: &mut [f32]) {
        let is_pos = self.is_pos[sfi];

        match self.ratios.get(usize::from(is_pos)) {
            Some(&(ratio_l, ratio_r)) if is_pos < self.limit[sfi] => {
                for (l, r) in ch0.iter_mut().zip(ch1) {
                    let is = *l;
                    *l = ratio_l * is;
                    *r = ratio_r * is;
                }
            }
            _ if self.mid_side => process_mid_side(ch0, ch1),
            _ => (),
        }
    }
}

/// Converts mid and side channels into left and right channels, in place.
///
/// ```text
/// l[i] = (m[i] + s[i]) / sqrt(2)
/// r[i] = (m[i] - s[i]) / sqrt(2)
/// ```
fn process_mid_side(mid: &mut [f32], side: &mut [f32]) {
    debug_assert!(mid.len() == side.len());

    for (m, s) in mid.iter_mut().zip(side) {
        let left = (*m + *s) * f32::consts::FRAC_1_SQRT_2;
        let right = (*m - *s) * f32::consts::FRAC_1_SQRT_2;
        *m = left;
        *s = right;
    }
}

#[inline(always)]
fn is_zero_band(band: &[f32]) -> bool {
    !band.iter().any(|&x| x != 0.0)
}

/// Decodes the intensity coded bands of a long block and returns the intensity bound.
///
/// All bands after the last non-zero band of channel 1 are intensity coded.
fn process_intensity_long_block(
    header: &FrameHeader,
    channel: &GranuleChannel,
    mid_side: bool,
    max_bound: usize,
    ch0: &mut [f32; 576],
    ch1: &mut [f32; 576],
) -> usize {
    let bands = &SFB_LONG_BANDS[header.sample_rate_idx];

    let intensity = Intensity::new(header, channel, 22, 1, mid_side);

    let mut bound = max_bound;

    for (sfb, band) in bands.windows(2).enumerate().rev() {
        let (start, end) = (band[0], band[1]);

        // Bands starting past rzero are always zero. Bands before it must be checked.
        if start < channel.rzero && !is_zero_band(&ch1[start..end]) {
            break;
        }

        intensity.process(sfb, &mut ch0[start..end], &mut ch1[start..end]);

        bound = start;
    }

    bound
}

/// Decodes the intensity coded windows of a short or mixed block and returns the intensity bound.
///
/// Each of the 3 windows has its own bound, after the last non-zero band of that window in channel
/// 1. Windows below their bound are mid-side coded, if enabled. The long bands of a mixed block
/// may only be intensity coded if all short windows are.
fn process_intensity_short_block(
    header: &FrameHeader,
    channel: &GranuleChannel,
    is_mixed: bool,
    mid_side: bool,
    max_bound: usize,
    ch0: &mut [f32; 576],
    ch1: &mut [f32; 576],
) -> usize {
    let (short_bands, long_bands, switch) = if is_mixed {
        let bands = SFB_MIXED_BANDS[header.sample_rate_idx];
        let switch = SFB_MIXED_SWITCH_POINT[header.sample_rate_idx];
        (&bands[switch..], &bands[..=switch], switch)
    }
    else {
        (&SFB_SHORT_BANDS[header.sample_rate_idx][..], &[][..], 0)
    };

    let intensity = Intensity::new(header, channel, switch + short_bands.len() - 1, 3, mid_side);

    let mut window_is_zero = [true; 3];

    let mut bound = max_bound;

    for (band, win) in short_bands.windows(4).step_by(3).enumerate().rev() {
        for w in (0..3).rev() {
            let (start, end) = (win[w], win[w + 1]);

            window_is_zero[w] = window_is_zero[w] && is_zero_band(&ch1[start..end]);

            if window_is_zero[w] {
                intensity.process(switch + 3 * band + w, &mut ch0[start..end], &mut ch1[start..end]);
            }
            else if mid_side {
                process_mid_side(&mut ch0[start..end], &mut ch1[start..end]);
            }
        }

        // Every window of this band is now decoded.
        bound = win[0];

        if window_is_zero.iter().all(|&is_zero| !is_zero) {
            return bound;
        }
    }

    if window_is_zero.iter().all(|&is_zero| is_zero) {
        for (sfb, band) in long_bands.windows(2).enumerate().rev() {
            let (start, end) = (band[0], band[1]);

            if !is_zero_band(&ch1[start..end]) {
                break;
            }

            intensity.process(sfb, &mut ch0[start..end], &mut ch1[start..end]);

            bound = start;
        }
    }

    bound
}

/// Performs joint stereo decoding on the channel pair of a granule.
pub(super) fn stereo(
    header: &FrameHeader,
    granule: &mut Granule,
    ch: &mut [[f32; 576]; 2],
) -> Result<()> {
    let (mid_side, intensity) = match header.channel_mode {
        ChannelMode::JointStereo(Mode::Layer3 { mid_side, intensity }) => (mid_side, intensity),
        _ => return Ok(()),
    };

    if granule.channels[0].block_type != granule.channels[1].block_type {
        return decode_error("mpa: stereo channel pair block_type mismatch");
    }

    let [ch0, ch1] = ch;

    // After stereo decoding, both channels are non-zero up to the larger rzero.
    let end = max(granule.channels[0].rzero, granule.channels[1].rzero);

    let right = &granule.channels[1];

    let is_bound = if intensity {
        match right.block_type {
            BlockType::Short { is_mixed } => {
                process_intensity_short_block(header, right, is_mixed, mid_side, end, ch0, ch1)
            }
            _ => process_intensity_long_block(header, right, mid_side, end, ch0, ch1),
        }
    }
    else {
        end
    };

    // Everything below the intensity bound is mid-side coded.
    if mid_side && is_bound > 0 {
        process_mid_side(&mut ch0[..is_bound], &mut ch1[..is_bound]);
    }

    if intensity || mid_side {
        granule.channels[0].rzero = end;
        granule.channels[1].rzero = end;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_frame_header;

    const FRAC_1_SQRT_2: f32 = f32::consts::FRAC_1_SQRT_2;

    fn granule(block_type: BlockType, rzero: [usize; 2]) -> Granule {
        let mut granule: Granule = Default::default();
        for (channel, &rzero) in granule.channels.iter_mut().zip(rzero.iter()) {
            channel.block_type = block_type;
            channel.rzero = rzero;
        }
        granule
    }

    #[test]
    fn verify_mpeg1_ratios() {
        let ratios = &INTENSITY_STEREO_RATIOS_MPEG1;

        assert_eq!(ratios[0], (0.0, 1.0));
        assert_eq!(ratios[6], (1.0, 0.0));

        // tan(PI/4) = 1 splits the signal evenly.
        assert!((ratios[3].0 - 0.5).abs() < 1e-6);
        assert!((ratios[3].1 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn verify_mpeg2_ratios() {
        let ratios = &INTENSITY_STEREO_RATIOS_MPEG2;

        assert_eq!(ratios[0][0], (1.0, 1.0));
        assert_eq!(ratios[1][0], (1.0, 1.0));

        // i0 = 1/sqrt(2) for odd scalefac_compress.
        assert!((ratios[1][1].0 - FRAC_1_SQRT_2).abs() < 1e-6);
        assert_eq!(ratios[1][1].1, 1.0);
        assert_eq!(ratios[1][2].0, 1.0);
        assert!((ratios[1][2].1 - FRAC_1_SQRT_2).abs() < 1e-6);

        // i0 = 1/sqrt(sqrt(2)) for even scalefac_compress.
        assert!((ratios[0][4].1 - 0.5f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn verify_mid_side() {
        // MPEG1 layer 3, joint stereo, mid-side only.
        let header = parse_frame_header(0xfffb_9064).unwrap();

        let mut granule = granule(BlockType::Long, [2, 1]);

        let mut samples = [[0f32; 576]; 2];
        samples[0][..2].copy_from_slice(&[1.0, 1.0]);
        samples[1][..1].copy_from_slice(&[1.0]);

        stereo(&header, &mut granule, &mut samples).unwrap();

        assert!((samples[0][0] - 2.0 * FRAC_1_SQRT_2).abs() < 1e-6);
        assert!(samples[1][0].abs() < 1e-6);
        assert!((samples[0][1] - FRAC_1_SQRT_2).abs() < 1e-6);
        assert!((samples[1][1] - FRAC_1_SQRT_2).abs() < 1e-6);

        assert_eq!(granule.channels[0].rzero, 2);
        assert_eq!(granule.channels[1].rzero, 2);
    }

    #[test]
    fn verify_intensity_long_block() {
        // MPEG1 layer 3, joint stereo, intensity only.
        let header = parse_frame_header(0xfffb_9054).unwrap();

        // Channel 1 has data in band 0 only. The rest is intensity coded.
        let mut granule = granule(BlockType::Long, [576, 4]);
        granule.channels[1].scalefacs[1] = 6;
        granule.channels[1].scalefacs[2] = 0;
        granule.channels[1].scalefacs[3] = 7;

        let mut samples = [[1f32; 576], [0f32; 576]];
        samples[1][..4].copy_from_slice(&[0.5; 4]);

        stereo(&header, &mut granule, &mut samples).unwrap();

        // Band 0 is coded as left and right.
        assert_eq!(samples[0][..4], [1.0; 4]);
        assert_eq!(samples[1][..4], [0.5; 4]);
        // Band 1, is_pos 6, pans fully left.
        assert_eq!(samples[0][4..8], [1.0; 4]);
        assert_eq!(samples[1][4..8], [0.0; 4]);
        // Band 2, is_pos 0, pans fully right.
        assert_eq!(samples[0][8..12], [0.0; 4]);
        assert_eq!(samples[1][8..12], [1.0; 4]);
        // Band 3 has an invalid position, and mid-side is disabled.
        assert_eq!(samples[0][12..16], [1.0; 4]);
        assert_eq!(samples[1][12..16], [0.0; 4]);
    }

    #[test]
    fn verify_mpeg2_invalid_position_falls_back_to_mid_side() {
        // MPEG2 layer 3, 24 kHz, joint stereo, mid-side and intensity.
        let header = parse_frame_header(0xfff3_8474).unwrap();

        let mut granule = granule(BlockType::Long, [576, 0]);

        let right = &mut granule.channels[1];
        right.scalefac_compress = 1;

        for (sfb, (pos, limit)) in
            right.scalefacs.iter_mut().zip(right.is_pos_limit.iter_mut()).enumerate()
        {
            // Band 0 has the largest position of its scale factor length, which is invalid.
            *pos = if sfb == 0 { 7 } else { 1 };
            *limit = 7;
        }

        let mut samples = [[1f32; 576], [0f32; 576]];

        stereo(&header, &mut granule, &mut samples).unwrap();

        // Band 0 (6 samples at 24 kHz) is mid-side decoded.
        assert!(samples[0][..6].iter().all(|&s| (s - FRAC_1_SQRT_2).abs() < 1e-6));
        assert!(samples[1][..6].iter().all(|&s| (s - FRAC_1_SQRT_2).abs() < 1e-6));
        // Band 1 is intensity decoded with is_pos 1.
        assert!(samples[0][6..12].iter().all(|&s| (s - FRAC_1_SQRT_2).abs() < 1e-6));
        assert!(samples[1][6..12].iter().all(|&s| s == 1.0));
    }

    #[test]
    fn verify_intensity_short_block_windows() {
        // MPEG1 layer 3, joint stereo, intensity only.
        let header = parse_frame_header(0xfffb_9054).unwrap();

        // All intensity positions are 0, which pans fully right.
        let mut granule = granule(BlockType::Short { is_mixed: false }, [576, 576]);

        // Window 1 of band 1 has data in channel 1. All other windows are zero.
        let mut samples = [[1f32; 576], [0f32; 576]];
        samples[1][16..20].copy_from_slice(&[0.5; 4]);

        stereo(&header, &mut granule, &mut samples).unwrap();

        // Window 1 of bands 0 and 1 are coded as left and right.
        assert_eq!(samples[0][4..8], [1.0; 4]);
        assert_eq!(samples[1][4..8], [0.0; 4]);
        assert_eq!(samples[0][16..20], [1.0; 4]);
        assert_eq!(samples[1][16..20], [0.5; 4]);
        // Window 0 of band 0 is intensity coded.
        assert_eq!(samples[0][..4], [0.0; 4]);
        assert_eq!(samples[1][..4], [1.0; 4]);
        // Window 1 of band 2 is intensity coded.
        assert_eq!(samples[0][28..32], [0.0; 4]);
        assert_eq!(samples[1][28..32], [1.0; 4]);
    }

    #[test]
    fn verify_block_type_mismatch() {
        let header = parse_frame_header(0xfffb_9064).unwrap();

        let mut granule = granule(BlockType::Long, [0, 0]);
        granule.channels[1].block_type = BlockType::Start;

        let mut samples = [[0f32; 576]; 2];
        assert!(stereo(&header, &mut granule, &mut samples).is_err());
    }
}
