// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mpadec_core::errors::{decode_error, Result};
use mpadec_core::io::ReadBitsLtr;

use crate::common::*;

use super::{FrameData, GranuleChannel};

/// Pairs of bit lengths (slen1, slen2) for MPEG1 scale factors, indexed by scalefac_compress.
const SCALE_FACTOR_SLEN: [(u32, u32); 16] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (3, 0),
    (1, 1),
    (1, 2),
    (1, 3),
    (2, 1),
    (2, 2),
    (2, 3),
    (3, 1),
    (3, 2),
    (3, 3),
    (4, 2),
    (4, 3),
];

/// The MPEG1 long scale factor bands sharing one scfsi bit.
const SCFSI_BANDS: [(usize, usize); 4] = [(0, 6), (6, 11), (11, 16), (16, 21)];

/// For MPEG2 and MPEG2.5, the number of scale factors that are coded with each of the 4 bit
/// lengths (slen1 to slen4), as per ISO/IEC 13818-3 Table B.1.
///
/// Indexed by the scalefac_compress range, then by block type (long, short, mixed). The first 3
/// rows apply to the intensity stereo coded channel, the last 3 to all other channels.
const SCALE_FACTOR_MPEG2_NSFB: [[[usize; 4]; 3]; 6] = [
    [[7, 7, 7, 0], [12, 12, 12, 0], [6, 15, 12, 0]],
    [[6, 6, 6, 3], [12, 9, 9, 6], [6, 12, 9, 6]],
    [[8, 8, 5, 0], [15, 12, 9, 0], [6, 18, 9, 0]],
    [[6, 5, 5, 5], [9, 9, 9, 9], [6, 9, 9, 9]],
    [[6, 5, 7, 3], [9, 9, 12, 6], [6, 9, 12, 6]],
    [[11, 10, 0, 0], [18, 18, 0, 0], [15, 18, 0, 0]],
];

/// Reads the side_info for a single channel in a granule.
fn read_granule_channel_side_info<B: ReadBitsLtr>(
    bs: &mut B,
    channel: &mut GranuleChannel,
    header: &FrameHeader,
) -> Result<()> {
    channel.part2_3_length = bs.read_bits_leq32(12)? as u16;
    channel.big_values = bs.read_bits_leq32(9)? as u16;

    // One big_value decodes to 2 of the 576 samples in a granule.
    if channel.big_values > 288 {
        return decode_error("mpa: granule big_values > 288");
    }

    channel.global_gain = bs.read_bits_leq32(8)? as u8;

    channel.scalefac_compress =
        if header.is_mpeg1() { bs.read_bits_leq32(4) } else { bs.read_bits_leq32(9) }? as u16;

    let window_switching = bs.read_bit()?;

    if window_switching {
        let block_type_enc = bs.read_bits_leq32(2)?;

        let is_mixed = bs.read_bit()?;

        channel.block_type = match block_type_enc {
            0b01 => BlockType::Start,
            0b10 => BlockType::Short { is_mixed },
            0b11 => BlockType::End,
            // A normal long block cannot be signalled with window switching.
            _ => return decode_error("mpa: invalid block_type"),
        };

        // Only two regions are coded with window switching.
        for table_select in channel.table_select[..2].iter_mut() {
            *table_select = bs.read_bits_leq32(5)? as u8;
        }

        for gain in channel.subblock_gain.iter_mut() {
            *gain = bs.read_bits_leq32(3)? as u8;
        }

        // The region boundaries are implicit with window switching. Region0 spans 8 long bands
        // (region0_count = 7), or 3 short bands of 3 windows each for short blocks
        // (region0_count = 8).
        channel.region1_start = if header.is_mpeg2p5() {
            match channel.block_type {
                BlockType::Short { is_mixed: false } => SFB_LONG_BANDS[header.sample_rate_idx][6],
                _ => SFB_LONG_BANDS[header.sample_rate_idx][8],
            }
        }
        else if header.is_mpeg1() || block_type_enc == 0b10 {
            // These bands always span 36 samples, regardless of the sample rate.
            36
        }
        else {
            // The first 8 MPEG2 long bands always span 54 samples.
            54
        };

        // Region1 spans all remaining big_values, region2 is empty.
        channel.region2_start = SAMPLES_PER_GRANULE;
    }
    else {
        channel.block_type = BlockType::Long;

        for table_select in channel.table_select.iter_mut() {
            *table_select = bs.read_bits_leq32(5)? as u8;
        }

        // The number of long bands in region0 and region1, each coded as one less than the actual
        // count.
        let region0_count = bs.read_bits_leq32(4)? as usize + 1;
        let region0_1_count = bs.read_bits_leq32(3)? as usize + region0_count + 1;

        let bands = &SFB_LONG_BANDS[header.sample_rate_idx];

        channel.region1_start = bands[region0_count];

        // The sum of both counts may run past the last long band.
        channel.region2_start = match bands.get(region0_1_count) {
            Some(&start) => start,
            None => SAMPLES_PER_GRANULE,
        };
    }

    // MPEG2 derives the preflag from scalefac_compress when reading the scale factors.
    channel.preflag = if header.is_mpeg1() { bs.read_bit()? } else { false };

    channel.scalefac_scale = bs.read_bit()?;
    channel.count1table_select = bs.read_bit()? as u8;

    Ok(())
}

/// Reads the side_info of a MPEG audio frame into `FrameData`.
pub(super) fn read_side_info<B: ReadBitsLtr>(
    bs: &mut B,
    header: &FrameHeader,
    frame_data: &mut FrameData,
) -> Result<()> {
    let n_channels = header.n_channels();

    if header.is_mpeg1() {
        frame_data.main_data_begin = bs.read_bits_leq32(9)? as u16;

        // Private bits.
        bs.ignore_bits(if n_channels == 1 { 5 } else { 3 })?;

        for scfsi in frame_data.scfsi[..n_channels].iter_mut() {
            for band in scfsi.iter_mut() {
                *band = bs.read_bit()?;
            }
        }
    }
    else {
        frame_data.main_data_begin = bs.read_bits_leq32(8)? as u16;

        // Private bits.
        bs.ignore_bits(if n_channels == 1 { 1 } else { 2 })?;
    }

    for granule in frame_data.granules[..header.n_granules()].iter_mut() {
        for channel in granule.channels[..n_channels].iter_mut() {
            read_granule_channel_side_info(bs, channel, header)?;
        }
    }

    Ok(())
}

/// Reads the scale factors for a single channel in a granule of a MPEG1 frame. Returns the number
/// of bits read.
pub(super) fn read_scale_factors_mpeg1<B: ReadBitsLtr>(
    bs: &mut B,
    gr: usize,
    ch: usize,
    frame_data: &mut FrameData,
) -> Result<u32> {
    let scfsi = frame_data.scfsi[ch];

    // The scale factors of granule 0 may be shared with granule 1.
    let [granule0, granule1] = &mut frame_data.granules;

    let (channel, shared) = if gr == 0 {
        (&mut granule0.channels[ch], None)
    }
    else {
        (&mut granule1.channels[ch], Some(&granule0.channels[ch]))
    };

    let (slen1, slen2) = SCALE_FACTOR_SLEN[usize::from(channel.scalefac_compress)];

    let mut bits_read = 0;

    if let BlockType::Short { is_mixed } = channel.block_type {
        // Mixed blocks code 8 long bands and short bands 3..6 with slen1, non-mixed blocks code
        // short bands 0..6 with slen1. Both code short bands 6..12 with slen2. Each short band has
        // one scale factor per window.
        let n_slen1 = if is_mixed { 8 + 3 * 3 } else { 6 * 3 };

        for (i, sf) in channel.scalefacs[..n_slen1 + 6 * 3].iter_mut().enumerate() {
            let slen = if i < n_slen1 { slen1 } else { slen2 };

            *sf = bs.read_bits_leq32(slen)? as u8;
            bits_read += slen;
        }
    }
    else {
        for (i, &(start, end)) in SCFSI_BANDS.iter().enumerate() {
            let slen = if i < 2 { slen1 } else { slen2 };

            match shared {
                Some(first) if scfsi[i] => {
                    channel.scalefacs[start..end].copy_from_slice(&first.scalefacs[start..end]);
                }
                _ => {
                    for sf in channel.scalefacs[start..end].iter_mut() {
                        *sf = bs.read_bits_leq32(slen)? as u8;
                    }
                    bits_read += slen * (end - start) as u32;
                }
            }
        }
    }

    Ok(bits_read)
}

/// Reads the scale factors for a single channel in a granule of a MPEG2 or MPEG2.5 frame. Returns
/// the number of bits read.
pub(super) fn read_scale_factors_mpeg2<B: ReadBitsLtr>(
    bs: &mut B,
    is_intensity_stereo: bool,
    channel: &mut GranuleChannel,
) -> Result<u32> {
    let block_index = match channel.block_type {
        BlockType::Short { is_mixed: true } => 2,
        BlockType::Short { is_mixed: false } => 1,
        _ => 0,
    };

    // Derive the 4 scale factor bit lengths and select the band partitioning from the range
    // scalefac_compress falls in, as per ISO/IEC 13818-3 section 2.4.3.2.
    let (slen, nsfb) = if is_intensity_stereo {
        // The least significant bit selects the intensity scale instead.
        let sfc = u32::from(channel.scalefac_compress) >> 1;

        channel.preflag = false;

        if sfc < 180 {
            ([sfc / 36, (sfc % 36) / 6, (sfc % 36) % 6, 0], &SCALE_FACTOR_MPEG2_NSFB[0])
        }
        else if sfc < 244 {
            let sfc = sfc - 180;
            ([(sfc % 64) >> 4, (sfc % 16) >> 2, sfc % 4, 0], &SCALE_FACTOR_MPEG2_NSFB[1])
        }
        else {
            let sfc = sfc - 244;
            ([sfc / 3, sfc % 3, 0, 0], &SCALE_FACTOR_MPEG2_NSFB[2])
        }
    }
    else {
        let sfc = u32::from(channel.scalefac_compress);

        channel.preflag = sfc >= 500;

        if sfc < 400 {
            ([(sfc >> 4) / 5, (sfc >> 4) % 5, (sfc % 16) >> 2, sfc % 4], &SCALE_FACTOR_MPEG2_NSFB[3])
        }
        else if sfc < 500 {
            let sfc = sfc - 400;
            ([(sfc >> 2) / 5, (sfc >> 2) % 5, sfc % 4, 0], &SCALE_FACTOR_MPEG2_NSFB[4])
        }
        else {
            let sfc = sfc - 500;
            ([sfc / 3, sfc % 3, 0, 0], &SCALE_FACTOR_MPEG2_NSFB[5])
        }
    };

    let mut bits_read = 0;
    let mut start = 0;

    for (&slen, &n_sfb) in slen.iter().zip(nsfb[block_index].iter()) {
        let end = start + n_sfb;

        for sf in channel.scalefacs[start..end].iter_mut() {
            *sf = bs.read_bits_leq32(slen)? as u8;
        }

        // The largest value a scale factor of the intensity coded channel can take marks an
        // invalid intensity position.
        if is_intensity_stereo {
            for limit in channel.is_pos_limit[start..end].iter_mut() {
                *limit = ((1u32 << slen) - 1) as u8;
            }
        }

        bits_read += slen * n_sfb as u32;
        start = end;
    }

    // Uncoded scale factors are 0.
    for sf in channel.scalefacs[start..].iter_mut() {
        *sf = 0;
    }

    Ok(bits_read)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::BitWriter;
    use crate::header::parse_frame_header;

    use mpadec_core::errors::Error;
    use mpadec_core::io::BitReaderLtr;

    #[test]
    fn verify_read_side_info_mpeg1_mono() {
        // MPEG1 layer 3, 128 kbps, 48 kHz, mono.
        let header = parse_frame_header(0xfffb_94c0).unwrap();

        let mut bits = BitWriter::new();
        bits.put(300, 9);
        bits.put(0, 5);
        bits.put(0b1010, 4);

        // Granule 0: a short mixed block.
        bits.put(1000, 12);
        bits.put(100, 9);
        bits.put(180, 8);
        bits.put(7, 4);
        bits.put(1, 1);
        bits.put(0b10, 2);
        bits.put(1, 1);
        bits.put(5, 5);
        bits.put(24, 5);
        bits.put(1, 3);
        bits.put(2, 3);
        bits.put(3, 3);
        bits.put(0b101, 3);

        // Granule 1: a long block.
        bits.put(2000, 12);
        bits.put(288, 9);
        bits.put(200, 8);
        bits.put(15, 4);
        bits.put(0, 1);
        bits.put(1, 5);
        bits.put(2, 5);
        bits.put(3, 5);
        bits.put(3, 4);
        bits.put(2, 3);
        bits.put(0b011, 3);

        assert_eq!(bits.n_bits(), 136);

        let buf = bits.into_bytes(17);

        let mut frame_data = FrameData::default();
        read_side_info(&mut BitReaderLtr::new(&buf), &header, &mut frame_data).unwrap();

        assert_eq!(frame_data.main_data_begin, 300);
        assert_eq!(frame_data.scfsi[0], [true, false, true, false]);

        let ch = &frame_data.granules[0].channels[0];
        assert_eq!(ch.part2_3_length, 1000);
        assert_eq!(ch.big_values, 100);
        assert_eq!(ch.global_gain, 180);
        assert_eq!(ch.scalefac_compress, 7);
        assert_eq!(ch.block_type, BlockType::Short { is_mixed: true });
        assert_eq!(ch.table_select[..2], [5, 24]);
        assert_eq!(ch.subblock_gain, [1, 2, 3]);
        assert_eq!(ch.region1_start, 36);
        assert_eq!(ch.region2_start, 576);
        assert!(ch.preflag);
        assert!(!ch.scalefac_scale);
        assert_eq!(ch.count1table_select, 1);

        let ch = &frame_data.granules[1].channels[0];
        assert_eq!(ch.block_type, BlockType::Long);
        assert_eq!(ch.table_select, [1, 2, 3]);
        // 48 kHz long bands 4 and 7.
        assert_eq!(ch.region1_start, 16);
        assert_eq!(ch.region2_start, 30);
        assert!(!ch.preflag);
        assert!(ch.scalefac_scale);
        assert_eq!(ch.count1table_select, 1);
    }

    #[test]
    fn verify_reject_invalid_side_info() {
        let header = parse_frame_header(0xfffb_94c0).unwrap();

        // Too many big_values.
        let mut bits = BitWriter::new();
        bits.put(0, 18);
        bits.put(0, 12);
        bits.put(289, 9);

        let buf = bits.into_bytes(17);
        let mut frame_data = FrameData::default();
        assert!(matches!(
            read_side_info(&mut BitReaderLtr::new(&buf), &header, &mut frame_data),
            Err(Error::DecodeError(_))
        ));

        // Window switching with the reserved block type.
        let mut bits = BitWriter::new();
        bits.put(0, 18);
        bits.put(0, 12 + 9);
        bits.put(0, 8 + 4);
        bits.put(1, 1);
        bits.put(0b00, 2);

        let buf = bits.into_bytes(17);
        let mut frame_data = FrameData::default();
        assert!(matches!(
            read_side_info(&mut BitReaderLtr::new(&buf), &header, &mut frame_data),
            Err(Error::DecodeError(_))
        ));
    }

    #[test]
    fn verify_scale_factors_mpeg1_scfsi() {
        let mut frame_data = FrameData::default();
        frame_data.scfsi[0] = [true, false, false, true];

        // slen1 = 2, slen2 = 3 for both granules.
        frame_data.granules[0].channels[0].scalefac_compress = 10;
        frame_data.granules[1].channels[0].scalefac_compress = 10;

        let mut bits = BitWriter::new();
        for sfb in 0..21 {
            bits.put(sfb % 4, if sfb < 11 { 2 } else { 3 });
        }
        // Granule 1 only codes bands 6..16.
        for sfb in 6..16 {
            bits.put(1, if sfb < 11 { 2 } else { 3 });
        }

        let buf = bits.into_bytes(32);
        let mut bs = BitReaderLtr::new(&buf);

        let bits0 = read_scale_factors_mpeg1(&mut bs, 0, 0, &mut frame_data).unwrap();
        assert_eq!(bits0, 11 * 2 + 10 * 3);

        let bits1 = read_scale_factors_mpeg1(&mut bs, 1, 0, &mut frame_data).unwrap();
        assert_eq!(bits1, 5 * 2 + 5 * 3);

        let sf0 = frame_data.granules[0].channels[0].scalefacs;
        let sf1 = frame_data.granules[1].channels[0].scalefacs;

        assert_eq!(sf1[..6], sf0[..6]);
        assert!(sf1[6..16].iter().all(|&sf| sf == 1));
        assert_eq!(sf1[16..21], sf0[16..21]);
    }

    #[test]
    fn verify_scale_factors_mpeg2_intensity_limits() {
        let mut channel = GranuleChannel::default();

        // sfc = 2 * 37: slen = [1, 0, 1, 0] over [7, 7, 7, 0] long bands.
        channel.scalefac_compress = 2 * 37 + 1;

        let mut bits = BitWriter::new();
        for _ in 0..14 {
            bits.put(1, 1);
        }

        let buf = bits.into_bytes(4);
        let n_bits =
            read_scale_factors_mpeg2(&mut BitReaderLtr::new(&buf), true, &mut channel).unwrap();

        assert_eq!(n_bits, 14);
        assert!(channel.scalefacs[..7].iter().all(|&sf| sf == 1));
        assert!(channel.scalefacs[7..14].iter().all(|&sf| sf == 0));
        assert!(channel.scalefacs[14..21].iter().all(|&sf| sf == 1));
        assert!(channel.is_pos_limit[..7].iter().all(|&limit| limit == 1));
        assert!(channel.is_pos_limit[7..14].iter().all(|&limit| limit == 0));
        assert!(!channel.preflag);
    }

    #[test]
    fn verify_scale_factors_mpeg2_preflag() {
        let mut channel = GranuleChannel::default();

        // sfc = 500 + 3 * 2 + 1: slen = [2, 1, 0, 0] over [11, 10, 0, 0] long bands.
        channel.scalefac_compress = 507;

        let buf = [0xff; 8];
        let n_bits =
            read_scale_factors_mpeg2(&mut BitReaderLtr::new(&buf), false, &mut channel).unwrap();

        assert_eq!(n_bits, 11 * 2 + 10);
        assert!(channel.preflag);
        assert!(channel.scalefacs[..11].iter().all(|&sf| sf == 3));
        assert!(channel.scalefacs[11..21].iter().all(|&sf| sf == 1));
    }
}
