// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mpadec_core::errors::{decode_error, Result};
use mpadec_core::io::{BitReaderLtr, BufReader, FiniteBitStream, ReadBitsLtr, ReadBytes};

use crate::common::*;
use crate::layer12::{dequantize, intensity_bound, LAYER12_SCALEFACTORS};
use crate::synthesis;

/// The number of samples per sub-band in a layer 1 frame.
const SAMPLES_PER_SUBBAND: usize = 12;

pub struct Layer1 {
    synthesis: [synthesis::SynthesisState; 2],
}

impl Layer1 {
    pub fn new() -> Self {
        Self { synthesis: Default::default() }
    }
}

impl Layer for Layer1 {
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

        let mut alloc = [[0u32; 32]; 2];
        let mut scalefacs = [[0f32; 32]; 2];

        let n_channels = header.n_channels();
        let bound = intensity_bound(header);

        // Read the bit allocations. Intensity coded sub-bands share one allocation.
        for sb in 0..SB_LIMIT {
            let n_coded = if sb < bound { n_channels } else { 1 };

            for ch in 0..n_coded {
                let bits = bs.read_bits_leq32(4)?;

                if bits == 0xf {
                    return decode_error("mpa: invalid layer 1 bit allocation");
                }

                alloc[ch][sb] = if bits != 0 { bits + 1 } else { 0 };
            }

            if sb >= bound {
                alloc[1][sb] = alloc[0][sb];
            }
        }

        // The CRC protects the bit allocations.
        if let Some(crc) = crc {
            let n_bits = 8 * buf.len() - bs.bits_left() as usize;
            check_crc(header, crc, buf, n_bits, params.verify)?;
        }

        // Read a scale factor for each allocated sub-band.
        for sb in 0..SB_LIMIT {
            for ch in 0..n_channels {
                if alloc[ch][sb] != 0 {
                    let index = bs.read_bits_leq32(6)? as usize;

                    scalefacs[ch][sb] = LAYER12_SCALEFACTORS[index];
                }
            }
        }

        let mut samples = [[0f32; 32 * SAMPLES_PER_SUBBAND]; 2];

        for s in 0..SAMPLES_PER_SUBBAND {
            for sb in 0..SB_LIMIT {
                if sb < bound {
                    for ch in 0..n_channels {
                        let bits = alloc[ch][sb];

                        if bits != 0 {
                            let sample = dequantize(bits, bs.read_bits_leq32(bits)?);

                            samples[ch][SAMPLES_PER_SUBBAND * sb + s] = scalefacs[ch][sb] * sample;
                        }
                    }
                }
                else {
                    // One sample is coded for both channels, each with their own scale factor.
                    let bits = alloc[0][sb];

                    if bits != 0 {
                        let sample = dequantize(bits, bs.read_bits_leq32(bits)?);

                        for ch in 0..n_channels {
                            samples[ch][SAMPLES_PER_SUBBAND * sb + s] =
                                scalefacs[ch][sb] * sample;
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

    use mpadec_core::checksum::Crc16Ansi;
    use mpadec_core::io::Monitor;

    // MPEG1 layer 1, 384 kbps, 48 kHz, mono. The frame is 384 bytes long.
    const MONO_HEADER: u32 = 0xffff_c4c0;

    // As above, but CRC protected.
    const MONO_CRC_HEADER: u32 = 0xfffe_c4c0;

    fn decode(word: u32, payload: &[u8], verify: bool) -> Result<(usize, [[f32; 1152]; 2])> {
        let header = parse_frame_header(word)?;
        let params = DecodeParams { verify, eq: None };

        let mut out = [[0f32; MAX_SAMPLES_PER_FRAME]; 2];
        let mut layer = Layer1::new();

        let n = layer.decode(&mut BufReader::new(payload), &header, &params, &mut out)?;
        Ok((n, out))
    }

    /// Writes a mono payload with a single allocated sub-band.
    fn tone_payload(bits: &mut BitWriter) {
        // Sub-band 0 has 4 bit samples, all other sub-bands are silent.
        bits.put(3, 4);
        for _ in 1..32 {
            bits.put(0, 4);
        }
        // Scale factor 3 is unity.
        bits.put(3, 6);
        for _ in 0..12 {
            bits.put(14, 4);
        }
    }

    #[test]
    fn verify_silent_frame() {
        let (n, out) = decode(MONO_HEADER, &[0u8; 380], false).unwrap();

        assert_eq!(n, 384);
        assert!(out[0][..384].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn verify_invalid_allocation() {
        let mut bits = BitWriter::new();
        bits.put(0xf, 4);

        assert!(decode(MONO_HEADER, &bits.into_bytes(380), false).is_err());
    }

    #[test]
    fn verify_tone_frame() {
        let mut bits = BitWriter::new();
        tone_payload(&mut bits);

        let (n, out) = decode(MONO_HEADER, &bits.into_bytes(380), false).unwrap();

        // The decoded sub-band samples run through the same filterbank.
        let mut expected_in = [0f32; 384];
        for s in expected_in[..12].iter_mut() {
            *s = 14.0 / 15.0;
        }

        let mut expected = [0f32; 384];
        synthesis(&mut SynthesisState::default(), 12, &expected_in, None, &mut expected);

        assert_eq!(n, 384);
        for (a, b) in out[0][..384].iter().zip(&expected[..]) {
            assert!((a - b).abs() < 1e-6);
        }
        assert!(out[0][..384].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn verify_crc() {
        let mut bits = BitWriter::new();
        tone_payload(&mut bits);
        let payload = bits.into_bytes(378);

        // The CRC covers the last two header bytes and the 128 allocation bits.
        let mut crc = Crc16Ansi::new(0xffff);
        crc.process_double_bytes((MONO_CRC_HEADER as u16).to_be_bytes());
        crc.process_buf_bytes(&payload[..16]);

        let mut frame = crc.crc().to_be_bytes().to_vec();
        frame.extend_from_slice(&payload);

        assert!(decode(MONO_CRC_HEADER, &frame, true).is_ok());

        frame[0] ^= 0xff;

        assert!(decode(MONO_CRC_HEADER, &frame, true).is_err());
        assert!(decode(MONO_CRC_HEADER, &frame, false).is_ok());
    }
}
