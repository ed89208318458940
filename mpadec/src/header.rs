// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mpadec_core::errors::{decode_error, Result};

use crate::common::*;

/// The length in bytes of a MPEG frame header word.
pub const MPEG_HEADER_LEN: usize = 4;

/// Bit-rate lookup table for MPEG version 1 layer 1.
const BIT_RATES_MPEG1_L1: [u32; 15] = [
    0, 32_000, 64_000, 96_000, 128_000, 160_000, 192_000, 224_000, 256_000, 288_000, 320_000,
    352_000, 384_000, 416_000, 448_000,
];

/// Bit-rate lookup table for MPEG version 1 layer 2.
const BIT_RATES_MPEG1_L2: [u32; 15] = [
    0, 32_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000, 128_000, 160_000, 192_000, 224_000,
    256_000, 320_000, 384_000,
];

/// Bit-rate lookup table for MPEG version 1 layer 3.
const BIT_RATES_MPEG1_L3: [u32; 15] = [
    0, 32_000, 40_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000, 128_000, 160_000, 192_000,
    224_000, 256_000, 320_000,
];

/// Bit-rate lookup table for MPEG version 2 & 2.5 audio layer 1.
const BIT_RATES_MPEG2_L1: [u32; 15] = [
    0, 32_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000, 128_000, 144_000, 160_000, 176_000,
    192_000, 224_000, 256_000,
];

/// Bit-rate lookup table for MPEG version 2 & 2.5 audio layers 2 & 3.
const BIT_RATES_MPEG2_L23: [u32; 15] = [
    0, 8_000, 16_000, 24_000, 32_000, 40_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000,
    128_000, 144_000, 160_000,
];

/// Quickly check if a header sync word may be valid.
#[inline]
pub fn check_header(header: u32) -> bool {
    // Version (0x1 is not allowed).
    if (header >> 19) & 0x3 == 0x1 {
        return false;
    }
    // Layer (0x0 is not allowed).
    if (header >> 17) & 0x3 == 0x0 {
        return false;
    }
    // Bitrate (0xf is not allowed).
    if (header >> 12) & 0xf == 0xf {
        return false;
    }
    // Sample rate (0x3 is not allowed).
    if (header >> 10) & 0x3 == 0x3 {
        return false;
    }
    true
}

/// Returns true if the provided frame header word is synced.
#[inline(always)]
pub fn is_frame_header_word_synced(sync: u32) -> bool {
    (sync & 0xffe0_0000) == 0xffe0_0000
}

/// Parses a frame header word. Free format frames (bit-rate index 0) are accepted, but their
/// length is unknown until the next frame is found.
pub fn parse_frame_header(header: u32) -> Result<FrameHeader> {
    // The MPEG audio header is structured as follows:
    //
    // 0b1111_1111 0b111v_vlly 0brrrr_hhpx 0bmmmm_coee
    // where:
    //     vv   = version, ll = layer      , y = crc
    //     rrrr = bitrate, hh = sample rate, p = padding , x  = private bit
    //     mmmm = mode   , c  = copyright  , o = original, ee = emphasis

    if !is_frame_header_word_synced(header) {
        return decode_error("mpa: invalid frame sync");
    }

    let version = match (header & 0x18_0000) >> 19 {
        0b00 => MpegVersion::Mpeg2p5,
        0b10 => MpegVersion::Mpeg2,
        0b11 => MpegVersion::Mpeg1,
        _ => return decode_error("mpa: invalid MPEG version"),
    };

    let layer = match (header & 0x6_0000) >> 17 {
        0b01 => MpegLayer::Layer3,
        0b10 => MpegLayer::Layer2,
        0b11 => MpegLayer::Layer1,
        _ => return decode_error("mpa: invalid MPEG layer"),
    };

    let bitrate_idx = (header & 0xf000) >> 12;

    let bitrate = match (bitrate_idx, version, layer) {
        // "Free" bit-rate. Note, this is NOT variable bit-rate. The frame length must be measured.
        (0b0000, _, _) => 0,
        // Invalid bit-rate.
        (0b1111, _, _) => return decode_error("mpa: invalid bit-rate"),
        // MPEG 1 bit-rates.
        (i, MpegVersion::Mpeg1, MpegLayer::Layer1) => BIT_RATES_MPEG1_L1[i as usize],
        (i, MpegVersion::Mpeg1, MpegLayer::Layer2) => BIT_RATES_MPEG1_L2[i as usize],
        (i, MpegVersion::Mpeg1, MpegLayer::Layer3) => BIT_RATES_MPEG1_L3[i as usize],
        // MPEG 2 bit-rates.
        (i, _, MpegLayer::Layer1) => BIT_RATES_MPEG2_L1[i as usize],
        (i, _, _) => BIT_RATES_MPEG2_L23[i as usize],
    };

    let (sample_rate, sample_rate_idx) = match ((header & 0xc00) >> 10, version) {
        (0b00, MpegVersion::Mpeg1) => (44_100, 0),
        (0b01, MpegVersion::Mpeg1) => (48_000, 1),
        (0b10, MpegVersion::Mpeg1) => (32_000, 2),
        (0b00, MpegVersion::Mpeg2) => (22_050, 3),
        (0b01, MpegVersion::Mpeg2) => (24_000, 4),
        (0b10, MpegVersion::Mpeg2) => (16_000, 5),
        (0b00, MpegVersion::Mpeg2p5) => (11_025, 6),
        (0b01, MpegVersion::Mpeg2p5) => (12_000, 7),
        (0b10, MpegVersion::Mpeg2p5) => (8_000, 8),
        _ => return decode_error("mpa: invalid sample rate"),
    };

    let mode_extension = (header & 0x30) >> 4;

    let channel_mode = match ((header & 0xc0) >> 6, layer) {
        // Stereo, for layers 1, 2, and 3.
        (0b00, _) => ChannelMode::Stereo,
        // Dual mono, for layers 1, 2, and 3.
        (0b10, _) => ChannelMode::DualMono,
        // Mono, for layers 1, 2, and 3.
        (0b11, _) => ChannelMode::Mono,
        // Joint stereo mode for layer 3 supports a combination of Mid-Side and Intensity Stereo
        // depending on the mode extension bits.
        (0b01, MpegLayer::Layer3) => ChannelMode::JointStereo(Mode::Layer3 {
            mid_side: header & 0x20 != 0x0,
            intensity: header & 0x10 != 0x0,
        }),
        // Joint stereo mode for layers 1 and 2 only supports Intensity Stereo. The mode extension
        // bits indicate for which sub-bands intensity stereo coding is applied.
        _ => ChannelMode::JointStereo(Mode::Intensity { bound: (1 + mode_extension) << 2 }),
    };

    // Some layer 2 channel and bit-rate combinations are not allowed. Check that the frame does not
    // use them.
    if layer == MpegLayer::Layer2 && version == MpegVersion::Mpeg1 && bitrate != 0 {
        if channel_mode == ChannelMode::Mono {
            if bitrate == 224_000 || bitrate == 256_000 || bitrate == 320_000 || bitrate == 384_000
            {
                return decode_error("mpa: invalid Layer 2 bitrate for mono channel mode");
            }
        }
        else if bitrate == 32_000 || bitrate == 48_000 || bitrate == 56_000 || bitrate == 80_000 {
            return decode_error("mpa: invalid Layer 2 bitrate for non-mono channel mode");
        }
    }

    let emphasis = match header & 0x3 {
        0b01 => Emphasis::Fifty15,
        0b11 => Emphasis::CcitJ17,
        _ => Emphasis::None,
    };

    let mut flags = HeaderFlags::empty();

    flags.set(HeaderFlags::CRC, header & 0x1_0000 == 0);
    flags.set(HeaderFlags::PADDING, header & 0x200 != 0);
    flags.set(HeaderFlags::PRIVATE, header & 0x100 != 0);
    flags.set(HeaderFlags::COPYRIGHTED, header & 0x8 != 0);
    flags.set(HeaderFlags::ORIGINAL, header & 0x4 != 0);

    let frame_size = if bitrate > 0 {
        Some(frame_size_from_bitrate(version, layer, bitrate, sample_rate, flags))
    }
    else {
        None
    };

    Ok(FrameHeader {
        word: header,
        version,
        layer,
        bitrate_idx,
        bitrate,
        sample_rate,
        sample_rate_idx,
        channel_mode,
        mode_extension,
        emphasis,
        flags,
        frame_size,
    })
}

/// Calculates the total frame size in bytes, including the header word.
fn frame_size_from_bitrate(
    version: MpegVersion,
    layer: MpegLayer,
    bitrate: u32,
    sample_rate: u32,
    flags: HeaderFlags,
) -> usize {
    // Constants provided for size calculation in section ISO-11172 section 2.4.3.1.
    let factor = match layer {
        MpegLayer::Layer1 => 12,
        MpegLayer::Layer2 => 144,
        MpegLayer::Layer3 if version == MpegVersion::Mpeg1 => 144,
        MpegLayer::Layer3 => 72,
    };

    // The header specifies the total frame size in "slots". For layers 2 & 3 a slot is 1 byte,
    // however for layer 1 a slot is 4 bytes.
    let slot_size = match layer {
        MpegLayer::Layer1 => 4,
        _ => 1,
    };

    let frame_size_slots = (factor * u64::from(bitrate) / u64::from(sample_rate)) as usize
        + usize::from(flags.contains(HeaderFlags::PADDING));

    frame_size_slots * slot_size
}

/// Returns the length of one slot in bytes.
#[inline(always)]
pub fn slot_size(layer: MpegLayer) -> usize {
    match layer {
        MpegLayer::Layer1 => 4,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_parse_mpeg1_layer3() {
        // 128 kbit/s, 44.1 kHz, joint stereo (mid-side), original.
        let header = parse_frame_header(0xfffb_9064).unwrap();

        assert_eq!(header.version, MpegVersion::Mpeg1);
        assert_eq!(header.layer, MpegLayer::Layer3);
        assert_eq!(header.bitrate, 128_000);
        assert_eq!(header.sample_rate, 44_100);
        assert_eq!(
            header.channel_mode,
            ChannelMode::JointStereo(Mode::Layer3 { mid_side: true, intensity: false })
        );
        assert!(!header.has_crc());
        assert!(header.flags.contains(HeaderFlags::ORIGINAL));
        assert_eq!(header.frame_size, Some(417));
        assert_eq!(header.samples_per_frame(), 1152);
        assert_eq!(header.side_info_len(), 32);
    }

    #[test]
    fn verify_parse_padding_and_crc() {
        // 128 kbit/s, 44.1 kHz, stereo, padded, CRC protected.
        let header = parse_frame_header(0xfffa_9200).unwrap();

        assert!(header.has_crc());
        assert!(header.has_padding());
        assert_eq!(header.frame_size, Some(418));
    }

    #[test]
    fn verify_parse_layer1_and_layer2() {
        // Layer 1, 384 kbit/s, 48 kHz, joint stereo with bound 8.
        let header = parse_frame_header(0xffff_c450).unwrap();

        assert_eq!(header.layer, MpegLayer::Layer1);
        assert_eq!(header.frame_size, Some(384));
        assert_eq!(header.samples_per_frame(), 384);
        assert_eq!(header.channel_mode, ChannelMode::JointStereo(Mode::Intensity { bound: 8 }));

        // Layer 2, 192 kbit/s, 48 kHz, stereo.
        let header = parse_frame_header(0xfffd_a400).unwrap();

        assert_eq!(header.layer, MpegLayer::Layer2);
        assert_eq!(header.frame_size, Some(576));
        assert_eq!(header.samples_per_frame(), 1152);

        // Layer 2, 384 kbit/s is not allowed for mono.
        assert!(parse_frame_header(0xfffd_e4c0).is_err());
    }

    #[test]
    fn verify_parse_lsf() {
        // MPEG2 layer 3, 64 kbit/s, 22.05 kHz, mono.
        let header = parse_frame_header(0xfff3_80c0).unwrap();

        assert_eq!(header.version, MpegVersion::Mpeg2);
        assert_eq!(header.sample_rate, 22_050);
        assert_eq!(header.n_granules(), 1);
        assert_eq!(header.samples_per_frame(), 576);
        assert_eq!(header.side_info_len(), 9);
        assert_eq!(header.frame_size, Some(208));

        // MPEG2.5 layer 3, 8 kHz.
        let header = parse_frame_header(0xffe3_18c0).unwrap();

        assert!(header.is_mpeg2p5());
        assert_eq!(header.sample_rate, 8_000);
    }

    #[test]
    fn verify_parse_free_format() {
        let header = parse_frame_header(0xfffb_0064).unwrap();

        assert!(header.is_free_format());
        assert_eq!(header.bitrate, 0);
        assert_eq!(header.frame_size, None);
    }

    #[test]
    fn verify_reject_invalid_headers() {
        // Reserved version.
        assert!(!check_header(0xffeb_9064));
        assert!(parse_frame_header(0xffeb_9064).is_err());
        // Reserved layer.
        assert!(!check_header(0xfff9_9064));
        // Bad bit-rate.
        assert!(!check_header(0xfffb_f064));
        assert!(parse_frame_header(0xfffb_f064).is_err());
        // Reserved sample rate.
        assert!(!check_header(0xfffb_9c64));
        assert!(parse_frame_header(0xfffb_9c64).is_err());
        // Not synced.
        assert!(!is_frame_header_word_synced(0xff7b_9064));
        assert!(parse_frame_header(0x7ffb_9064).is_err());
    }
}
