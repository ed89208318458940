// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Support shared by the layer 1 and layer 2 decoders.

use mpadec_core::util::bits::sign_extend_leq32_to_i32;

use lazy_static::lazy_static;

use crate::common::*;

/// The scale factor index signalling an unused scale factor.
pub const SCALEFACTOR_SILENT: usize = 63;

lazy_static! {
    /// Scale factors of layers 1 and 2 as per ISO/IEC 11172-3 Table B.1. Index 63 is not a valid
    /// scale factor and silences the sub-band.
    pub static ref LAYER12_SCALEFACTORS: [f32; 64] = {
        let mut scalefactors = [0f32; 64];

        for (i, sf) in scalefactors.iter_mut().enumerate().take(SCALEFACTOR_SILENT) {
            *sf = 2.0 * (-(i as f64) / 3.0).exp2() as f32;
        }

        scalefactors
    };

    /// Dequantization factors for nb-bit samples, indexed by nb.
    static ref FACTOR: [f32; 17] = {
        let mut factor = [0f32; 17];

        for (i, factor) in factor.iter_mut().enumerate().skip(2) {
            // As per ISO/IEC 11172-3, given the nb-bit signed raw sample, val, dequantization is
            // defined as follows.
            //
            // fractional = val / 2^(nb - 1)
            // dequantized = (2^nb) / (2^nb - 1) * (fractional + 2^(-nb + 1))
            //
            // Which simplifies to a single multiplication:
            //
            // [(2^nb) / ((2^nb) - 1)] * 2^(-nb + 1) * (val + 1)
            // -------------------------------------
            //                 factor
            let a = (1u32 << i) as f32;
            let b = (1u32 << (i - 1)) as f32;

            *factor = (a / (a - 1.0)) * b.recip();
        }

        factor
    };
}

/// Dequantize a sample, `raw`, of length `bits` bits, where `2 <= bits <= 16`.
#[inline(always)]
pub fn dequantize(bits: u32, raw: u32) -> f32 {
    // Invert the most significant bit.
    let inv = raw ^ 1 << (bits - 1);

    // Sign extend the sample.
    let a = sign_extend_leq32_to_i32(inv, bits);

    FACTOR[bits as usize] * (a + 1) as f32
}

/// Dequantize a sample of a grouped quantization class with `levels` levels (3, 5, or 9).
///
/// The result is equal to the fractional form of the standard with `D = 0.5`, but does not
/// depend on the bit length of the sample.
#[inline(always)]
pub fn dequantize_grouped(levels: u32, value: u32) -> f32 {
    let center = ((levels - 1) / 2) as f32;

    2.0 * (value as f32 - center) / levels as f32
}

/// Splits a grouped sample code into its three samples.
#[inline(always)]
pub fn ungroup(levels: u32, mut code: u32) -> [u32; 3] {
    let mut values = [0; 3];

    for value in values.iter_mut() {
        *value = code % levels;
        code /= levels;
    }

    values
}

/// Gets the first sub-band that is intensity coded, or 32 if there are none.
#[inline(always)]
pub fn intensity_bound(header: &FrameHeader) -> usize {
    match header.channel_mode {
        ChannelMode::JointStereo(Mode::Intensity { bound }) => bound as usize,
        _ => SB_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_scalefactors() {
        assert_eq!(LAYER12_SCALEFACTORS[0], 2.0);
        assert_eq!(LAYER12_SCALEFACTORS[3], 1.0);
        assert!((LAYER12_SCALEFACTORS[1] - 1.587_401).abs() < 1e-6);
        assert!((LAYER12_SCALEFACTORS[62] - 0.000_001_201_554).abs() < 1e-10);
        assert_eq!(LAYER12_SCALEFACTORS[SCALEFACTOR_SILENT], 0.0);
    }

    #[test]
    fn verify_dequantize() {
        // 4-bit samples span [-14/15, 14/15].
        assert!((dequantize(4, 0) + 14.0 / 15.0).abs() < 1e-6);
        assert!((dequantize(4, 14) - 14.0 / 15.0).abs() < 1e-6);
        assert_eq!(dequantize(4, 7), 0.0);

        // Symmetric about the center code for all bit lengths.
        for bits in 2..=16 {
            let max = (1u32 << bits) - 2;
            assert!((dequantize(bits, 0) + dequantize(bits, max)).abs() < 1e-6);
            assert_eq!(dequantize(bits, max / 2), 0.0);
        }
    }

    #[test]
    fn verify_dequantize_grouped() {
        // Compare against C * (fraction + D) with D = 0.5, where fraction is the sample with its
        // most significant bit inverted, interpreted as a two's complement fraction.
        for &(levels, bits) in &[(3u32, 2u32), (5, 3), (9, 4)] {
            let c = (1u32 << (bits - 1)) as f32 / levels as f32 * 2.0;

            for value in 0..levels {
                let inv = value ^ 1 << (bits - 1);
                let fraction =
                    sign_extend_leq32_to_i32(inv, bits) as f32 / (1u32 << (bits - 1)) as f32;

                let expected = c * (fraction + 0.5);

                assert!((dequantize_grouped(levels, value) - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn verify_ungroup() {
        assert_eq!(ungroup(3, 0), [0, 0, 0]);
        assert_eq!(ungroup(3, 26), [2, 2, 2]);
        assert_eq!(ungroup(5, 1 + 2 * 5 + 3 * 25), [1, 2, 3]);
        assert_eq!(ungroup(9, 8 + 7 * 81), [8, 0, 7]);
    }
}
