// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mpadec_core::errors::Result;
use mpadec_core::io::{BitReaderLtr, BufReader, FiniteBitStream, ReadBitsLtr, ReadBytes};

use crate::common::*;
use crate::layer12::*;
use crate::synthesis;

/// The number of granules (of 3 samples per sub-band) in a layer 2 frame.
const GRANULES: usize = 12;

/// The number of samples per sub-band in a layer 2 frame.
const SAMPLES_PER_SUBBAND: usize = 3 * GRANULES;

/// A quantization class of layer 2 samples.
#[derive(Copy, Clone, Debug)]
struct QuantClass {
    /// The number of quantization steps.
    levels: u32,
    /// If true, three consecutive samples are coded together in one code word.
    grouped: bool,
    /// The number of bits of a code word.
    bits: u32,
}

macro_rules! class {
    ($levels:expr, $grouped:expr, $bits:expr) => {
        QuantClass { levels: $levels, grouped: $grouped, bits: $bits }
    };
}

/// All quantization classes, ISO/IEC 11172-3 Table B.4.
const QUANT_CLASSES: [QuantClass; 17] = [
    class!(3, true, 5),
    class!(5, true, 7),
    class!(7, false, 3),
    class!(9, true, 10),
    class!(15, false, 4),
    class!(31, false, 5),
    class!(63, false, 6),
    class!(127, false, 7),
    class!(255, false, 8),
    class!(511, false, 9),
    class!(1023, false, 10),
    class!(2047, false, 11),
    class!(4095, false, 12),
    class!(8191, false, 13),
    class!(16383, false, 14),
    class!(32767, false, 15),
    class!(65535, false, 16),
];

/// The number of allocation bits of a sub-band, and the row of `ALLOC_CLASSES` mapping an
/// allocation value to a quantization class.
const BIT_ALLOC: [(u32, usize); 8] =
    [(2, 0), (2, 3), (3, 3), (3, 1), (4, 2), (4, 3), (4, 4), (4, 5)];

/// Quantization classes selected by an allocation value. Allocation value `v > 0` selects the
/// class at index `v - 1` of a row.
const ALLOC_CLASSES: [[u8; 15]; 6] = [
    [0, 1, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 2, 3, 4, 5, 16, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
    [0, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 16],
    [0, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
];

/// Per sub-band indicies into `BIT_ALLOC` for each allocation table.
///
/// - 0: ISO/IEC 11172-3 Table B.2a, high rate, 27 sub-bands.
/// - 1: Table B.2b, high rate, 30 sub-bands.
/// - 2: Table B.2c, low rate, 8 sub-bands.
/// - 3: Table B.2d, low rate, 12 sub-bands.
/// - 4: ISO/IEC 13818-3 Table B.1, low sampling frequencies, 30 sub-bands.
const ALLOC_TABLES: [&[u8]; 5] = [
    &[7, 7, 7, 6, 6, 6, 6, 6, 6, 6, 6, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0],
    &[7, 7, 7, 6, 6, 6, 6, 6, 6, 6, 6, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0],
    &[5, 5, 2, 2, 2, 2, 2, 2],
    &[5, 5, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    &[4, 4, 4, 4, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Selects the allocation table for a frame.
fn select_alloc_table(header: &FrameHeader) -> usize {
    if !header.is_mpeg1() {
        return 4;
    }

    // Free format frames are assumed to use a high bit-rate.
    let bitrate_per_channel = if header.is_free_format() {
        u32::MAX
    }
    else {
        header.bitrate / header.n_channels() as u32
    };

    if bitrate_per_channel <= 48_000 {
        if header.sample_rate == 32_000 {
            3
        }
        else {
            2
        }
    }
    else if bitrate_per_channel <= 80_000 {
        0
    }
    else if header.sample_rate == 48_000 {
        0
    }
    else {
        1
    }
}

pub struct Layer2 {
    synthesis: [synthesis::SynthesisState; 2],
}

impl Layer2 {
    pub fn new() -> Self {
        Self { synthesis: Default::default() }
    }
}

impl Layer for Layer2 {
    fn decode(
        &mut self,
        reader: &mut BufReader<'_>,
        header: &FrameHeader,
        params: &DecodeParams<'_>,
        out: &mut [[f32; MAX_SAMPLES_PER_FRAME]; 2],
    ) -> Result<usize> {
        let crc = if header.has_crc() { Some(reader.read_be_u16()?) } else { None };

        let buf = reader.read_buf_bytes_available_ref();

        let mut bs = BitReaderLtr::new(buf);

        let table = ALLOC_TABLES[select_alloc_table(header)];
        let sblimit = table.len();

        let n_channels = header.n_channels();
        let bound = intensity_bound(header).min(sblimit);

        // The quantization class of each sub-band, if any samples are coded.
        let mut alloc: [[Option<QuantClass>; 32]; 2] = [[None; 32]; 2];

        for sb in 0..sblimit {
            let (n_bits, row) = BIT_ALLOC[usize::from(table[sb])];

            let n_coded = if sb < bound { n_channels } else { 1 };

            for ch in 0..n_coded {
                let value = bs.read_bits_leq32(n_bits)? as usize;

                if value > 0 {
                    alloc[ch][sb] = Some(QUANT_CLASSES[usize::from(ALLOC_CLASSES[row][value - 1])]);
                }
            }

            if sb >= bound {
                alloc[1][sb] = alloc[0][sb];
            }
        }

        // Scale factor selection information.
        let mut scfsi = [[0u32; 32]; 2];

        for sb in 0..sblimit {
            for ch in 0..n_channels {
                if alloc[ch][sb].is_some() {
                    scfsi[ch][sb] = bs.read_bits_leq32(2)?;
                }
            }
        }

        // The CRC protects the bit allocations and scale factor selection information.
        if let Some(crc) = crc {
            let n_bits = 8 * buf.len() - bs.bits_left() as usize;
            check_crc(header, crc, buf, n_bits, params.verify)?;
        }

        // Up-to three scale factors per sub-band, each covering a third of the granules.
        let mut scalefacs = [[[0f32; 3]; 32]; 2];

        for sb in 0..sblimit {
            for ch in 0..n_channels {
                if alloc[ch][sb].is_none() {
                    continue;
                }

                let mut indicies = [SCALEFACTOR_SILENT; 3];

                match scfsi[ch][sb] {
                    0 => {
                        for index in indicies.iter_mut() {
                            *index = bs.read_bits_leq32(6)? as usize;
                        }
                    }
                    1 => {
                        let a = bs.read_bits_leq32(6)? as usize;
                        let b = bs.read_bits_leq32(6)? as usize;
                        indicies = [a, a, b];
                    }
                    2 => {
                        let a = bs.read_bits_leq32(6)? as usize;
                        indicies = [a, a, a];
                    }
                    _ => {
                        let a = bs.read_bits_leq32(6)? as usize;
                        let b = bs.read_bits_leq32(6)? as usize;
                        indicies = [a, b, b];
                    }
                }

                for (sf, &index) in scalefacs[ch][sb].iter_mut().zip(&indicies) {
                    *sf = LAYER12_SCALEFACTORS[index];
                }
            }
        }

        let mut samples = [[0f32; 32 * SAMPLES_PER_SUBBAND]; 2];

        for gr in 0..GRANULES {
            let part = gr / 4;

            for sb in 0..sblimit {
                let n_coded = if sb < bound { n_channels } else { 1 };

                for ch in 0..n_coded {
                    let class = match alloc[ch][sb] {
                        Some(class) => class,
                        None => continue,
                    };

                    let mut triplet = [0f32; 3];

                    if class.grouped {
                        let code = bs.read_bits_leq32(class.bits)?;

                        for (s, value) in triplet.iter_mut().zip(&ungroup(class.levels, code)) {
                            *s = dequantize_grouped(class.levels, *value);
                        }
                    }
                    else {
                        for s in triplet.iter_mut() {
                            *s = dequantize(class.bits, bs.read_bits_leq32(class.bits)?);
                        }
                    }

                    // Intensity coded sub-bands share samples, but not scale factors.
                    let channels = if sb < bound { ch..ch + 1 } else { 0..n_channels };

                    for ch in channels {
                        let scalefac = scalefacs[ch][sb][part];
                        let start = SAMPLES_PER_SUBBAND * sb + 3 * gr;

                        for (out, s) in samples[ch][start..start + 3].iter_mut().zip(&triplet) {
                            *out = scalefac * s;
                        }
                    }
                }
            }
        }

        for (ch, samples) in samples.iter().enumerate().take(n_channels) {
            synthesis::synthesis(
                &mut self.synthesis[ch],
                SAMPLES_PER_SUBBAND,
                samples,
                params.eq,
                &mut out[ch][..32 * SAMPLES_PER_SUBBAND],
            );
        }

        Ok(32 * SAMPLES_PER_SUBBAND)
    }

    fn reset(&mut self) {
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
    use crate::synthesis::{synthesis, SynthesisState};

    // MPEG1 layer 2, 192 kbps, 48 kHz, mono. The frame is 576 bytes long.
    const MONO_HEADER: u32 = 0xfffd_a4c0;

    // MPEG1 layer 2, 192 kbps, 48 kHz, joint stereo with intensity coding from sub-band 4.
    const JOINT_HEADER: u32 = 0xfffd_a440;

    fn decode(word: u32, payload: &[u8]) -> Result<(usize, [[f32; 1152]; 2])> {
        let header = parse_frame_header(word)?;
        let params = DecodeParams { verify: false, eq: None };

        let mut out = [[0f32; MAX_SAMPLES_PER_FRAME]; 2];
        let mut layer = Layer2::new();

        let n = layer.decode(&mut BufReader::new(payload), &header, &params, &mut out)?;
        Ok((n, out))
    }

    fn alloc_bits(table: &[u8], sb: usize) -> u32 {
        BIT_ALLOC[usize::from(table[sb])].0
    }

    #[test]
    fn verify_alloc_table_selection() {
        let table = |word| select_alloc_table(&parse_frame_header(word).unwrap());

        // 192 kbps mono, 48 kHz.
        assert_eq!(table(0xfffd_a4c0), 0);
        // 192 kbps mono, 44.1 kHz.
        assert_eq!(table(0xfffd_a0c0), 1);
        // 64 kbps stereo, 44.1 kHz.
        assert_eq!(table(0xfffd_4000), 2);
        // 64 kbps stereo, 32 kHz.
        assert_eq!(table(0xfffd_4800), 3);
        // 128 kbps stereo, 44.1 kHz.
        assert_eq!(table(0xfffd_8000), 0);
        // Free format.
        assert_eq!(table(0xfffd_0800), 1);
        // MPEG2, 64 kbps stereo, 22.05 kHz.
        assert_eq!(table(0xfff5_8000), 4);
    }

    #[test]
    fn verify_alloc_tables() {
        let lens: Vec<usize> = ALLOC_TABLES.iter().map(|t| t.len()).collect();
        assert_eq!(lens, [27, 30, 8, 12, 30]);

        // Every allocation value must map to a valid row entry.
        for &(n_bits, row) in BIT_ALLOC.iter() {
            let n_values = (1usize << n_bits) - 1;
            assert!(ALLOC_CLASSES[row][..n_values].iter().all(|&c| usize::from(c) < 17));
        }
    }

    #[test]
    fn verify_silent_frame() {
        let (n, out) = decode(MONO_HEADER, &[0u8; 572]).unwrap();

        assert_eq!(n, 1152);
        assert!(out[0].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn verify_grouped_tone_frame() {
        let table = ALLOC_TABLES[0];

        let mut bits = BitWriter::new();

        // Sub-band 0 uses the first quantization class (3 levels, grouped).
        bits.put(1, alloc_bits(table, 0));
        for sb in 1..table.len() {
            bits.put(0, alloc_bits(table, sb));
        }
        // One scale factor for all granules, unity.
        bits.put(2, 2);
        bits.put(3, 6);
        // All samples are the largest level.
        for _ in 0..12 {
            bits.put(2 + 2 * 3 + 2 * 9, 5);
        }

        let (n, out) = decode(MONO_HEADER, &bits.into_bytes(572)).unwrap();

        let mut expected_in = [0f32; 1152];
        for s in expected_in[..36].iter_mut() {
            *s = dequantize_grouped(3, 2);
        }

        let mut expected = [0f32; 1152];
        synthesis(&mut SynthesisState::default(), 36, &expected_in, None, &mut expected);

        assert_eq!(n, 1152);
        assert_eq!(&out[0][..], &expected[..]);
        assert!(out[0].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn verify_intensity_coded_frame() {
        let table = ALLOC_TABLES[0];

        let mut bits = BitWriter::new();

        // Sub-bands 0..4 are coded per channel. Only sub-band 4 is allocated, and it is intensity
        // coded with 15 levels (row 4, value 5).
        for sb in 0..table.len() {
            let n_coded = if sb < 4 { 2 } else { 1 };
            let value = if sb == 4 { 5 } else { 0 };
            for _ in 0..n_coded {
                bits.put(value, alloc_bits(table, sb));
            }
        }
        // Both channels have one scale factor, with the right channel at half the gain.
        bits.put(2, 2);
        bits.put(2, 2);
        bits.put(3, 6);
        bits.put(6, 6);
        for _ in 0..36 {
            bits.put(13, 4);
        }

        let (n, out) = decode(JOINT_HEADER, &bits.into_bytes(572)).unwrap();

        assert_eq!(n, 1152);
        assert!(out[0].iter().any(|&s| s != 0.0));
        for (l, r) in out[0].iter().zip(&out[1][..]) {
            assert!((0.5 * l - r).abs() < 1e-6);
        }
    }
}
