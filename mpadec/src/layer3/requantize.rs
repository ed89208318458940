// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::min;

use mpadec_core::errors::Result;
use mpadec_core::io::huffman::{HuffmanTable, H8};
use mpadec_core::io::ReadBitsLtr;

use lazy_static::lazy_static;
use log::info;

use super::GranuleChannel;
use crate::common::*;
use crate::huffman_tables::*;

/// The largest magnitude of a decoded sample: 15 plus 13 linbits.
const MAX_SAMPLE: usize = 15 + (1 << 13) - 1;

lazy_static! {
    /// Lookup table for computing x(i) = s(i)^(4/3) where s(i) is a decoded Huffman sample.
    static ref REQUANTIZE_POW43: [f32; MAX_SAMPLE + 1] = {
        let mut pow43 = [0f32; MAX_SAMPLE + 1];
        for (i, x) in pow43.iter_mut().enumerate() {
            *x = (i as f64).powf(4.0 / 3.0) as f32;
        }
        pow43
    };
}

/// The Huffman table and number of linbits for each table_select value. Tables 4 and 14 are not
/// used and decode nothing.
const HUFFMAN_TABLES: [(&HuffmanTable<H8>, u32); 32] = [
    (&HUFFMAN_TABLE_0, 0),
    (&HUFFMAN_TABLE_1, 0),
    (&HUFFMAN_TABLE_2, 0),
    (&HUFFMAN_TABLE_3, 0),
    (&HUFFMAN_TABLE_0, 0),
    (&HUFFMAN_TABLE_5, 0),
    (&HUFFMAN_TABLE_6, 0),
    (&HUFFMAN_TABLE_7, 0),
    (&HUFFMAN_TABLE_8, 0),
    (&HUFFMAN_TABLE_9, 0),
    (&HUFFMAN_TABLE_10, 0),
    (&HUFFMAN_TABLE_11, 0),
    (&HUFFMAN_TABLE_12, 0),
    (&HUFFMAN_TABLE_13, 0),
    (&HUFFMAN_TABLE_0, 0),
    (&HUFFMAN_TABLE_15, 0),
    (&HUFFMAN_TABLE_16, 1),
    (&HUFFMAN_TABLE_16, 2),
    (&HUFFMAN_TABLE_16, 3),
    (&HUFFMAN_TABLE_16, 4),
    (&HUFFMAN_TABLE_16, 6),
    (&HUFFMAN_TABLE_16, 8),
    (&HUFFMAN_TABLE_16, 10),
    (&HUFFMAN_TABLE_16, 13),
    (&HUFFMAN_TABLE_24, 4),
    (&HUFFMAN_TABLE_24, 5),
    (&HUFFMAN_TABLE_24, 6),
    (&HUFFMAN_TABLE_24, 7),
    (&HUFFMAN_TABLE_24, 8),
    (&HUFFMAN_TABLE_24, 9),
    (&HUFFMAN_TABLE_24, 11),
    (&HUFFMAN_TABLE_24, 13),
];

/// The pre-emphasis amount of each long scale factor band, from ISO/IEC 11172-3 Table B.6.
const PRE_EMPHASIS: [u8; 22] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 3, 3, 3, 2, 0];

/// Completes one sample of a big_values pair: reads the linbits extension of a saturated value
/// and the sign bit of a non-zero value, and returns the value raised to the 4/3 power.
#[inline(always)]
fn read_big_value<B: ReadBitsLtr>(
    bs: &mut B,
    mut value: usize,
    linbits: u32,
    pow43: &[f32; MAX_SAMPLE + 1],
    bits_read: &mut u32,
) -> Result<f32> {
    if value == 0 {
        return Ok(0.0);
    }

    if value == 15 && linbits > 0 {
        value += bs.read_bits_leq32(linbits)? as usize;
        *bits_read += linbits;
    }

    *bits_read += 1;

    Ok(if bs.read_bit()? { -pow43[value] } else { pow43[value] })
}

/// Reads a count1 sample: 0, or +/-1 followed by its sign bit.
#[inline(always)]
fn read_count1_value<B: ReadBitsLtr>(bs: &mut B, is_set: bool, bits_read: &mut u32) -> Result<f32> {
    if !is_set {
        return Ok(0.0);
    }

    *bits_read += 1;

    Ok(if bs.read_bit()? { -1.0 } else { 1.0 })
}

/// Reads the Huffman coded spectral samples of a channel in a granule into `buf`, raising each to
/// the 4/3 power. Returns the number of decoded samples, which is the starting index of the rzero
/// partition.
pub(super) fn read_huffman_samples<B: ReadBitsLtr>(
    bs: &mut B,
    channel: &GranuleChannel,
    part3_bits: u32,
    buf: &mut [f32; 576],
) -> Result<usize> {
    if part3_bits == 0 {
        for sample in buf.iter_mut() {
            *sample = 0.0;
        }
        return Ok(0);
    }

    let pow43: &[f32; MAX_SAMPLE + 1] = &REQUANTIZE_POW43;

    let mut bits_read = 0;
    let mut i = 0;

    let big_values_len = 2 * usize::from(channel.big_values);

    // The big_values partition is split into up to 3 regions, each with their own table.
    let regions = [
        min(channel.region1_start, big_values_len),
        min(channel.region2_start, big_values_len),
        big_values_len,
    ];

    for (&region_end, &table_select) in regions.iter().zip(channel.table_select.iter()) {
        let (table, linbits) = HUFFMAN_TABLES[usize::from(table_select)];

        // Table 0 codes a region of zeros without using any bits.
        if table.data.is_empty() {
            while i < region_end {
                buf[i] = 0.0;
                i += 1;
            }
            continue;
        }

        while i < region_end && bits_read < part3_bits {
            let (value, code_len) = bs.read_huffman(table)?;
            bits_read += code_len;

            // Each code is a pair of 4-bit values.
            let x = usize::from(value >> 4);
            let y = usize::from(value & 0xf);

            buf[i] = read_big_value(bs, x, linbits, pow43, &mut bits_read)?;
            buf[i + 1] = read_big_value(bs, y, linbits, pow43, &mut bits_read)?;
            i += 2;
        }
    }

    let count1_table =
        if channel.count1table_select == 0 { &QUADS_HUFFMAN_TABLE_A } else { &QUADS_HUFFMAN_TABLE_B };

    // The count1 partition continues until part3 is exhausted. Each code is a quad of 1-bit values.
    while i <= 572 && bits_read < part3_bits {
        let (value, code_len) = bs.read_huffman(count1_table)?;
        bits_read += code_len;

        buf[i] = read_count1_value(bs, value & 0x8 != 0, &mut bits_read)?;
        buf[i + 1] = read_count1_value(bs, value & 0x4 != 0, &mut bits_read)?;
        buf[i + 2] = read_count1_value(bs, value & 0x2 != 0, &mut bits_read)?;
        buf[i + 3] = read_count1_value(bs, value & 0x1 != 0, &mut bits_read)?;
        i += 4;
    }

    // Some encoders declare a part2_3_length that falls a few bits short of the last quad. The
    // quad was decoded from the bits of whatever follows, so discard it. Unused trailing bits
    // need no handling since the next channel starts at its own offset.
    if bits_read > part3_bits {
        info!("mpa: count1 overrun, malformed bitstream");
        i = i.saturating_sub(4);
    }

    for sample in buf[i..].iter_mut() {
        *sample = 0.0;
    }

    Ok(i)
}

/// Computes 2^(A/4) * 2^(-B/4), as used by requantization.
#[inline(always)]
fn pow2_quarter(a: i32, b: i32) -> f32 {
    (0.25 * f64::from(a - b)).exp2() as f32
}

/// Requantize long block samples in `buf`.
///
/// For long blocks, `xr(i) = s(i)^(4/3) * 2^(0.25 * A) * 2^(-B)` where
/// `A = global_gain - 210` and `B = scalefac_multiplier * (scalefac + preflag * pretab)`.
fn requantize_long(channel: &GranuleChannel, bands: &[usize], buf: &mut [f32; 576]) {
    let a = i32::from(channel.global_gain) - 210;

    // B is multiplied by 4 to share the quarter of A.
    let scalefac_shift = if channel.scalefac_scale { 2 } else { 1 };

    for (sfb, band) in bands.windows(2).enumerate() {
        let (start, end) = (band[0], band[1]);

        if start >= channel.rzero {
            break;
        }

        let pre_emphasis = if channel.preflag { PRE_EMPHASIS[sfb] } else { 0 };

        let b = (i32::from(channel.scalefacs[sfb]) + i32::from(pre_emphasis)) << scalefac_shift;

        let scale = pow2_quarter(a, b);

        for sample in buf[start..min(end, channel.rzero)].iter_mut() {
            *sample *= scale;
        }
    }
}

/// Requantize short block samples in `buf`. `bands` are the window boundaries starting at the first
/// short band, and `switch` is the index of its scale factor.
///
/// For short blocks, `xr(i) = s(i)^(4/3) * 2^(0.25 * A) * 2^(-B)` where
/// `A = global_gain - 210 - 8 * subblock_gain[win]` and `B = scalefac_multiplier * scalefac`.
fn requantize_short(channel: &GranuleChannel, bands: &[usize], switch: usize, buf: &mut [f32; 576]) {
    let gain = i32::from(channel.global_gain) - 210;

    let a = [
        gain - 8 * i32::from(channel.subblock_gain[0]),
        gain - 8 * i32::from(channel.subblock_gain[1]),
        gain - 8 * i32::from(channel.subblock_gain[2]),
    ];

    let scalefac_shift = if channel.scalefac_scale { 2 } else { 1 };

    for (i, win) in bands.windows(2).enumerate() {
        let (start, end) = (win[0], win[1]);

        if start >= channel.rzero {
            break;
        }

        let b = i32::from(channel.scalefacs[switch + i]) << scalefac_shift;

        let scale = pow2_quarter(a[i % 3], b);

        for sample in buf[start..min(end, channel.rzero)].iter_mut() {
            *sample *= scale;
        }
    }
}

/// Requantize samples in `buf` regardless of block type.
pub(super) fn requantize(header: &FrameHeader, channel: &GranuleChannel, buf: &mut [f32; 576]) {
    match channel.block_type {
        BlockType::Short { is_mixed: false } => {
            requantize_short(channel, &SFB_SHORT_BANDS[header.sample_rate_idx], 0, buf);
        }
        BlockType::Short { is_mixed: true } => {
            // The long bands of a mixed block end where the first short band begins.
            let bands = SFB_MIXED_BANDS[header.sample_rate_idx];
            let switch = SFB_MIXED_SWITCH_POINT[header.sample_rate_idx];

            requantize_long(channel, &bands[..=switch], buf);
            requantize_short(channel, &bands[switch..], switch, buf);
        }
        _ => {
            requantize_long(channel, &SFB_LONG_BANDS[header.sample_rate_idx], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::BitWriter;
    use crate::header::parse_frame_header;

    use mpadec_core::io::BitReaderLtr;

    fn long_channel(big_values: u16, table: u8) -> GranuleChannel {
        GranuleChannel {
            big_values,
            table_select: [table; 3],
            region1_start: 576,
            region2_start: 576,
            ..Default::default()
        }
    }

    #[test]
    fn verify_pow43() {
        assert_eq!(REQUANTIZE_POW43[0], 0.0);
        assert_eq!(REQUANTIZE_POW43[1], 1.0);
        assert!((REQUANTIZE_POW43[8] - 16.0).abs() < 1e-4);
        assert!((REQUANTIZE_POW43[MAX_SAMPLE] - (MAX_SAMPLE as f32).powf(4.0 / 3.0)).abs() < 1.0);
    }

    #[test]
    fn verify_big_values_and_count1() {
        let channel = long_channel(2, 1);

        // Table 1: (1, 1) is "000", (0, 1) is "001". Each non-zero value has a sign bit.
        let mut bits = BitWriter::new();
        bits.put(0b000, 3);
        bits.put(0b1, 1);
        bits.put(0b0, 1);
        bits.put(0b001, 3);
        bits.put(0b0, 1);
        // Quad table A: y = 1 only is "0101", followed by the sign bit.
        bits.put(0b0101, 4);
        bits.put(0b1, 1);

        let part3_bits = bits.n_bits() as u32;
        let buf = bits.into_bytes(8);

        let mut samples = [1f32; 576];
        let rzero =
            read_huffman_samples(&mut BitReaderLtr::new(&buf), &channel, part3_bits, &mut samples)
                .unwrap();

        assert_eq!(rzero, 8);
        assert_eq!(samples[..8], [-1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0]);
        assert!(samples[8..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn verify_linbits() {
        // Table 16 with 1 linbit. (15, 0) is coded as "000001100".
        let channel = long_channel(1, 16);

        let mut bits = BitWriter::new();
        bits.put(0b000001100, 9);
        bits.put(1, 1);
        bits.put(0, 1);

        let part3_bits = bits.n_bits() as u32;
        let buf = bits.into_bytes(4);

        let mut samples = [0f32; 576];
        let rzero =
            read_huffman_samples(&mut BitReaderLtr::new(&buf), &channel, part3_bits, &mut samples)
                .unwrap();

        assert_eq!(rzero, 2);
        assert_eq!(samples[0], REQUANTIZE_POW43[16]);
        assert_eq!(samples[1], 0.0);
    }

    #[test]
    fn verify_count1_overrun_is_discarded() {
        let channel = long_channel(0, 0);

        // Quad table A: "1" decodes to all zeros. The second quad "0101" + sign overruns part3.
        let mut bits = BitWriter::new();
        bits.put(0b1, 1);
        bits.put(0b0101, 4);
        bits.put(0b0, 1);

        let buf = bits.into_bytes(4);

        let mut samples = [0f32; 576];
        let rzero =
            read_huffman_samples(&mut BitReaderLtr::new(&buf), &channel, 3, &mut samples).unwrap();

        assert_eq!(rzero, 4);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn verify_requantize_long() {
        // MPEG1, 44.1 kHz.
        let header = parse_frame_header(0xfffb_9064).unwrap();

        let mut channel = long_channel(0, 0);
        channel.global_gain = 214;
        channel.scalefac_scale = true;
        channel.scalefacs[1] = 1;
        channel.rzero = 12;

        let mut samples = [1f32; 576];
        requantize(&header, &channel, &mut samples);

        // Band 0 is scaled by 2^(4/4), band 1 by 2^((4 - 4)/4), band 2 by 2^1. Samples past rzero
        // are untouched.
        assert!(samples[..4].iter().all(|&s| (s - 2.0).abs() < 1e-6));
        assert!(samples[4..8].iter().all(|&s| (s - 1.0).abs() < 1e-6));
        assert!(samples[8..12].iter().all(|&s| (s - 2.0).abs() < 1e-6));
        assert!(samples[12..].iter().all(|&s| s == 1.0));
    }

    #[test]
    fn verify_requantize_short() {
        let header = parse_frame_header(0xfffb_9064).unwrap();

        let mut channel = long_channel(0, 0);
        channel.block_type = BlockType::Short { is_mixed: false };
        channel.global_gain = 210;
        channel.subblock_gain = [0, 1, 0];
        channel.rzero = 576;

        let mut samples = [1f32; 576];
        requantize(&header, &channel, &mut samples);

        // Window 1 of each band is attenuated by 2^(-8/4).
        assert!(samples[..4].iter().all(|&s| (s - 1.0).abs() < 1e-6));
        assert!(samples[4..8].iter().all(|&s| (s - 0.25).abs() < 1e-6));
        assert!(samples[8..12].iter().all(|&s| (s - 1.0).abs() < 1e-6));
    }
}
