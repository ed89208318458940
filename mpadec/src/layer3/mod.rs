// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use mpadec_core::errors::{decode_error, Result};
use mpadec_core::io::{BitReaderLtr, BufReader, ReadBitsLtr, ReadBytes};

use crate::common::*;
use crate::reservoir::BitReservoir;
use crate::synthesis::{self, SynthesisState};

mod bitstream;
mod hybrid_synthesis;
mod requantize;
mod stereo;

use hybrid_synthesis::Overlap;

/// `FrameData` contains the side_info and main_data portions of a MPEG audio frame.
#[derive(Default, Debug)]
struct FrameData {
    /// The byte offset into the bit reservoir indicating the location of the first bit of
    /// main_data. If 0, main_data begins after the side_info of this frame.
    main_data_begin: u16,
    /// Scale factor selector information, per channel. Each channel has 4 groups of bands that may
    /// share the scale factors of granule 0 in granule 1.
    ///
    /// Mapping of array indicies to bands [0..6, 6..11, 11..16, 16..21].
    scfsi: [[bool; 4]; 2],
    /// The granules. Only the first is used by MPEG2 and MPEG2.5.
    granules: [Granule; 2],
}

#[derive(Default, Debug)]
struct Granule {
    /// Channels in the granule.
    channels: [GranuleChannel; 2],
}

struct GranuleChannel {
    /// Total number of bits used for scale factors (part2) and Huffman encoded data (part3).
    part2_3_length: u16,
    /// HALF the number of samples in the big_values partition.
    big_values: u16,
    /// Logarithmic quantization step size.
    global_gain: u8,
    /// A 4-bit (MPEG1) or 9-bit (MPEG2/2.5) value from which the scale factor bit lengths are
    /// derived.
    scalefac_compress: u16,
    /// The block type (type of window) for the channel in the granule.
    block_type: BlockType,
    /// Gain factors for each short window.
    subblock_gain: [u8; 3],
    /// The Huffman table to use for decoding `region[0..3]` of big_values.
    table_select: [u8; 3],
    /// The index of the first sample in region1 of big_values.
    region1_start: usize,
    /// The index of the first sample in region2 of big_values.
    region2_start: usize,
    /// Add the pre-emphasis amount to each scale factor before requantization.
    preflag: bool,
    /// A 0.5x (false) or 1x (true) multiplier for scale factors.
    scalefac_scale: bool,
    /// Use Huffman Quads table A (0) or B (1), for decoding the count1 partition.
    count1table_select: u8,
    /// Long and short window scale factors, in band order. For mixed blocks, the long band scale
    /// factors come first, followed by the short band scale factors with the 3 windows of each band
    /// adjacent. The scale factors of the last short band, `scalefacs[36..39]`, are never coded.
    scalefacs: [u8; 39],
    /// The largest valid intensity position of each scale factor. Only set for the intensity
    /// coded channel of MPEG2/2.5 frames, where the maximum value a scale factor can hold is an
    /// invalid position.
    is_pos_limit: [u8; 39],
    /// The starting sample index of the rzero partition, or the count of big_values and count1
    /// samples.
    rzero: usize,
}

impl Default for GranuleChannel {
    fn default() -> Self {
        GranuleChannel {
            part2_3_length: 0,
            big_values: 0,
            global_gain: 0,
            scalefac_compress: 0,
            block_type: BlockType::Long,
            subblock_gain: [0; 3],
            table_select: [0; 3],
            region1_start: 0,
            region2_start: 0,
            preflag: false,
            scalefac_scale: false,
            count1table_select: 0,
            scalefacs: [0; 39],
            is_pos_limit: [0; 39],
            rzero: 0,
        }
    }
}

impl fmt::Debug for GranuleChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GranuleChannel")
            .field("part2_3_length", &self.part2_3_length)
            .field("big_values", &self.big_values)
            .field("global_gain", &self.global_gain)
            .field("scalefac_compress", &self.scalefac_compress)
            .field("block_type", &self.block_type)
            .field("subblock_gain", &self.subblock_gain)
            .field("table_select", &self.table_select)
            .field("region1_start", &self.region1_start)
            .field("region2_start", &self.region2_start)
            .field("preflag", &self.preflag)
            .field("scalefac_scale", &self.scalefac_scale)
            .field("count1table_select", &self.count1table_select)
            .field("scalefacs", &&self.scalefacs[..])
            .field("rzero", &self.rzero)
            .finish()
    }
}

/// Reads the `main_data_begin` field of a layer 3 frame. The reader must be positioned after the
/// header word and is advanced past the field.
pub fn read_main_data_begin<B: ReadBytes>(reader: &mut B, header: &FrameHeader) -> Result<u16> {
    // The side_info follows the optional CRC word.
    if header.has_crc() {
        reader.ignore_bytes(2)?;
    }

    let value = reader.read_be_u16()?;

    // MPEG1 has a 9 bit field, MPEG2 and MPEG2.5 an 8 bit field.
    let main_data_begin = if header.is_mpeg1() { value >> 7 } else { value >> 8 };

    Ok(main_data_begin)
}

/// Reads the scale factors and Huffman coded samples of one channel in a granule. Returns the
/// starting index of the rzero partition.
fn read_granule_channel(
    header: &FrameHeader,
    main_data: &[u8],
    part2_3_begin: usize,
    gr: usize,
    ch: usize,
    frame_data: &mut FrameData,
    samples: &mut [f32; 576],
) -> Result<usize> {
    // Each granule channel starts exactly where the previous one ended according to its
    // part2_3_length, regardless of how many bits decoding the previous one actually consumed.
    let buf = match main_data.get(part2_3_begin >> 3..) {
        Some(buf) => buf,
        None => return decode_error("mpa: invalid main_data offset"),
    };

    let mut bs = BitReaderLtr::new(buf);

    let bit_index = part2_3_begin & 0x7;

    if bit_index > 0 {
        bs.ignore_bits(bit_index as u32)?;
    }

    // Read the scale factors (part2) and get the number of bits read.
    let part2_len = if header.is_mpeg1() {
        bitstream::read_scale_factors_mpeg1(&mut bs, gr, ch, frame_data)
    }
    else {
        bitstream::read_scale_factors_mpeg2(
            &mut bs,
            ch > 0 && header.is_intensity_stereo(),
            &mut frame_data.granules[gr].channels[ch],
        )
    }?;

    let channel = &frame_data.granules[gr].channels[ch];

    let part2_3_length = u32::from(channel.part2_3_length);

    if part2_len > part2_3_length {
        return decode_error("mpa: part2_3_length is not valid");
    }

    requantize::read_huffman_samples(&mut bs, channel, part2_3_length - part2_len, samples)
}

/// Reads the main_data portion of a MPEG audio frame into `FrameData` and the spectral sample
/// buffers. Returns the number of main_data bytes used.
fn read_main_data(
    header: &FrameHeader,
    main_data: &[u8],
    frame_data: &mut FrameData,
    samples: &mut [[[f32; 576]; 2]; 2],
) -> Result<usize> {
    // The bit offset of the current granule channel's part2_3 data within main_data.
    let mut part2_3_begin = 0;

    for gr in 0..header.n_granules() {
        for ch in 0..header.n_channels() {
            let result = read_granule_channel(
                header,
                main_data,
                part2_3_begin,
                gr,
                ch,
                frame_data,
                &mut samples[gr][ch],
            );

            let channel = &mut frame_data.granules[gr].channels[ch];

            channel.rzero = result?;

            part2_3_begin += usize::from(channel.part2_3_length);
        }
    }

    Ok((part2_3_begin + 7) >> 3)
}

/// The layer 3 decoder.
pub struct Layer3 {
    reservoir: BitReservoir,
    /// Spectral samples, indexed by granule, then channel.
    samples: [[[f32; 576]; 2]; 2],
    overlap: [Overlap; 2],
    synthesis: [SynthesisState; 2],
}

impl Layer3 {
    pub fn new() -> Self {
        Layer3 {
            reservoir: BitReservoir::new(),
            samples: [[[0f32; 576]; 2]; 2],
            overlap: Default::default(),
            synthesis: Default::default(),
        }
    }

    /// Reads and validates the side_info, then moves the main_data of the frame into the bit
    /// reservoir. Returns `None` if the frame references main_data that is not available.
    fn read_frame_data(
        &mut self,
        reader: &mut BufReader<'_>,
        header: &FrameHeader,
        params: &DecodeParams<'_>,
    ) -> Result<Option<FrameData>> {
        let crc = if header.has_crc() { Some(reader.read_be_u16()?) } else { None };

        let buf = reader.read_buf_bytes_available_ref();

        let side_info_len = header.side_info_len();

        if buf.len() < side_info_len {
            return decode_error("mpa: frame too short for side_info");
        }

        // The CRC protects the entire side_info.
        if let Some(crc) = crc {
            check_crc(header, crc, buf, 8 * side_info_len, params.verify)?;
        }

        let mut frame_data: FrameData = Default::default();

        bitstream::read_side_info(
            &mut BitReaderLtr::new(&buf[..side_info_len]),
            header,
            &mut frame_data,
        )?;

        let is_filled =
            self.reservoir.fill(&buf[side_info_len..], usize::from(frame_data.main_data_begin))?;

        Ok(if is_filled { Some(frame_data) } else { None })
    }
}

impl Layer for Layer3 {
    fn decode(
        &mut self,
        reader: &mut BufReader<'_>,
        header: &FrameHeader,
        params: &DecodeParams<'_>,
        out: &mut [[f32; MAX_SAMPLES_PER_FRAME]; 2],
    ) -> Result<usize> {
        let mut frame_data = match self.read_frame_data(reader, header, params) {
            Ok(Some(frame_data)) => frame_data,
            // Not enough main_data in the reservoir. The frame produces no audio.
            Ok(None) => return Ok(0),
            Err(e) => {
                // The following frame could reference main_data of this frame, which was never
                // buffered. Discard the reservoir so it is not misinterpreted.
                self.reservoir.clear();
                return Err(e);
            }
        };

        match read_main_data(header, self.reservoir.bytes_ref(), &mut frame_data, &mut self.samples)
        {
            Ok(len) => self.reservoir.consume(len),
            Err(e) => {
                self.reservoir.clear();
                return Err(e);
            }
        }

        let n_channels = header.n_channels();

        for gr in 0..header.n_granules() {
            let granule = &mut frame_data.granules[gr];
            let samples = &mut self.samples[gr];

            for ch in 0..n_channels {
                requantize::requantize(header, &granule.channels[ch], &mut samples[ch]);
            }

            if n_channels == 2 {
                stereo::stereo(header, granule, samples)?;
            }

            for ch in 0..n_channels {
                let channel = &granule.channels[ch];

                hybrid_synthesis::reorder(header, channel, &mut samples[ch]);
                hybrid_synthesis::antialias(channel, &mut samples[ch]);
                hybrid_synthesis::hybrid_synthesis(channel, &mut self.overlap[ch], &mut samples[ch]);
                hybrid_synthesis::frequency_inversion(&mut samples[ch]);

                let start = gr * SAMPLES_PER_GRANULE;

                synthesis::synthesis(
                    &mut self.synthesis[ch],
                    18,
                    &samples[ch],
                    params.eq,
                    &mut out[ch][start..start + SAMPLES_PER_GRANULE],
                );
            }
        }

        Ok(header.n_granules() * SAMPLES_PER_GRANULE)
    }

    fn reset(&mut self) {
        self.reservoir.clear();

        for overlap in self.overlap.iter_mut() {
            overlap.clear();
        }

        for state in self.synthesis.iter_mut() {
            state.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::BitWriter;
    use crate::header::parse_frame_header;

    use mpadec_core::checksum::Crc16Ansi;
    use mpadec_core::io::Monitor;

    // MPEG1 layer 3, 128 kbps, 44.1 kHz, joint stereo (mid-side). No padding, 417 bytes long.
    const STEREO_HEADER: u32 = 0xfffb_9064;

    // MPEG1 layer 3, 128 kbps, 48 kHz, mono. 384 bytes long.
    const MONO_HEADER: u32 = 0xfffb_94c0;

    // As above, but CRC protected.
    const MONO_CRC_HEADER: u32 = 0xfffa_94c0;

    // MPEG2 layer 3, 64 kbps, 24 kHz, mono. 192 bytes long.
    const LSF_MONO_HEADER: u32 = 0xfff3_84c0;

    fn decode_with(
        layer: &mut Layer3,
        word: u32,
        payload: &[u8],
        verify: bool,
    ) -> Result<(usize, [[f32; 1152]; 2])> {
        let header = parse_frame_header(word)?;
        let params = DecodeParams { verify, eq: None };

        let mut out = [[0f32; MAX_SAMPLES_PER_FRAME]; 2];

        let n = layer.decode(&mut BufReader::new(payload), &header, &params, &mut out)?;
        Ok((n, out))
    }

    /// Writes the side_info of a mono MPEG1 frame where both granules code a single non-zero
    /// big_value pair using Huffman table 1.
    fn write_mono_side_info(bits: &mut BitWriter, main_data_begin: u32) {
        bits.put(main_data_begin, 9);
        // Private bits and scfsi.
        bits.put(0, 5);
        bits.put(0, 4);

        for _ in 0..2 {
            // part2_3_length, big_values, global_gain, scalefac_compress.
            bits.put(3, 12);
            bits.put(1, 9);
            bits.put(210, 8);
            bits.put(0, 4);
            // No window switching, table_select, region0_count, region1_count.
            bits.put(0, 1);
            bits.put(1, 5);
            bits.put(0, 5);
            bits.put(0, 5);
            bits.put(0, 4);
            bits.put(0, 3);
            // preflag, scalefac_scale, count1table_select.
            bits.put(0, 3);
        }
    }

    /// Writes the main data for the side_info above. The pair (1, 0) is coded as "01" in table 1,
    /// followed by the sign bit of x.
    fn write_mono_main_data(bits: &mut BitWriter) {
        for _ in 0..2 {
            bits.put(0b01, 2);
            bits.put(0, 1);
        }
    }

    #[test]
    fn verify_read_main_data_begin() {
        let mpeg1 = parse_frame_header(MONO_HEADER).unwrap();
        let mpeg1_crc = parse_frame_header(MONO_CRC_HEADER).unwrap();
        let mpeg2 = parse_frame_header(LSF_MONO_HEADER).unwrap();

        let buf = [0xab, 0xcd, 0xef, 0x80];

        assert_eq!(read_main_data_begin(&mut BufReader::new(&buf), &mpeg1).unwrap(), 0x157);
        assert_eq!(read_main_data_begin(&mut BufReader::new(&buf), &mpeg2).unwrap(), 0xab);
        assert_eq!(read_main_data_begin(&mut BufReader::new(&buf), &mpeg1_crc).unwrap(), 0x1df);
    }

    #[test]
    fn verify_silent_frames() {
        let mut layer = Layer3::new();

        let (n, out) = decode_with(&mut layer, STEREO_HEADER, &[0u8; 413], false).unwrap();
        assert_eq!(n, 1152);
        assert!(out.iter().all(|ch| ch.iter().all(|&s| s == 0.0)));

        let mut layer = Layer3::new();

        let (n, out) = decode_with(&mut layer, LSF_MONO_HEADER, &[0u8; 188], false).unwrap();
        assert_eq!(n, 576);
        assert!(out[0][..576].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn verify_tone_frame() {
        let mut bits = BitWriter::new();
        write_mono_side_info(&mut bits, 0);
        write_mono_main_data(&mut bits);

        let mut layer = Layer3::new();

        let (n, out) = decode_with(&mut layer, MONO_HEADER, &bits.into_bytes(380), false).unwrap();

        assert_eq!(n, 1152);
        assert!(out[0][..1152].iter().any(|&s| s != 0.0));
        assert!(out[0][..1152].iter().all(|s| s.is_finite()));

        // Decoding is deterministic.
        let mut bits = BitWriter::new();
        write_mono_side_info(&mut bits, 0);
        write_mono_main_data(&mut bits);

        let mut layer = Layer3::new();

        let (_, again) = decode_with(&mut layer, MONO_HEADER, &bits.into_bytes(380), false).unwrap();
        assert_eq!(&out[0][..], &again[0][..]);
    }

    #[test]
    fn verify_reservoir_underflow_yields_no_samples() {
        let mut bits = BitWriter::new();
        write_mono_side_info(&mut bits, 100);

        let mut layer = Layer3::new();

        let (n, _) = decode_with(&mut layer, MONO_HEADER, &bits.into_bytes(380), false).unwrap();
        assert_eq!(n, 0);

        // The following frame can borrow the main_data of the underflowed frame.
        let mut bits = BitWriter::new();
        write_mono_side_info(&mut bits, 100);

        let (n, _) = decode_with(&mut layer, MONO_HEADER, &bits.into_bytes(380), false).unwrap();
        assert_eq!(n, 1152);
    }

    #[test]
    fn verify_reservoir_carries_main_data() {
        // The first frame carries the main data of the second frame at its very end.
        let mut bits = BitWriter::new();
        write_mono_side_info(&mut bits, 0);
        let mut first = bits.into_bytes(380 - 2);

        let mut tail = BitWriter::new();
        write_mono_main_data(&mut tail);
        first.extend_from_slice(&tail.into_bytes(2));

        let mut bits = BitWriter::new();
        write_mono_side_info(&mut bits, 2);
        let second = bits.into_bytes(380);

        let mut layer = Layer3::new();

        let (n, _) = decode_with(&mut layer, MONO_HEADER, &first, false).unwrap();
        assert_eq!(n, 1152);

        let (n, out) = decode_with(&mut layer, MONO_HEADER, &second, false).unwrap();
        assert_eq!(n, 1152);
        assert!(out[0][..1152].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn verify_side_info_crc() {
        let mut bits = BitWriter::new();
        write_mono_side_info(&mut bits, 0);
        write_mono_main_data(&mut bits);
        let payload = bits.into_bytes(378);

        // The CRC covers the last two header bytes and the 17 byte side_info.
        let mut crc = Crc16Ansi::new(0xffff);
        crc.process_double_bytes((MONO_CRC_HEADER as u16).to_be_bytes());
        crc.process_buf_bytes(&payload[..17]);

        let mut frame = crc.crc().to_be_bytes().to_vec();
        frame.extend_from_slice(&payload);

        assert!(decode_with(&mut Layer3::new(), MONO_CRC_HEADER, &frame, true).is_ok());

        frame[0] ^= 0x01;

        assert!(decode_with(&mut Layer3::new(), MONO_CRC_HEADER, &frame, true).is_err());
        assert!(decode_with(&mut Layer3::new(), MONO_CRC_HEADER, &frame, false).is_ok());
    }

    #[test]
    fn verify_truncated_frame_is_an_error() {
        let mut layer = Layer3::new();

        assert!(decode_with(&mut layer, MONO_HEADER, &[0u8; 10], false).is_err());
    }

    #[test]
    fn verify_reset() {
        let mut bits = BitWriter::new();
        write_mono_side_info(&mut bits, 0);
        write_mono_main_data(&mut bits);
        let frame = bits.into_bytes(380);

        let mut layer = Layer3::new();

        let (_, first) = decode_with(&mut layer, MONO_HEADER, &frame, false).unwrap();
        let (_, second) = decode_with(&mut layer, MONO_HEADER, &frame, false).unwrap();

        // The overlap and filterbank history make the second frame differ from the first.
        assert_ne!(&first[0][..], &second[0][..]);

        layer.reset();

        let (_, after_reset) = decode_with(&mut layer, MONO_HEADER, &frame, false).unwrap();
        assert_eq!(&first[0][..], &after_reset[0][..]);
    }
}
