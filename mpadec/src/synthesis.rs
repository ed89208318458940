// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `synthesis` module implements the polyphase synthesis filterbank shared by all layers.

use lazy_static::lazy_static;

/// Synthesis window D[i], defined in Table B.3 of ISO/IEC 11172-3.
#[allow(clippy::unreadable_literal)]
#[rustfmt::skip]
const SYNTHESIS_D: [f32; 512] = [
     0.000000000, -0.000015259, -0.000015259, -0.000015259,
    -0.000015259, -0.000015259, -0.000015259, -0.000030518,
    -0.000030518, -0.000030518, -0.000030518, -0.000045776,
    -0.000045776, -0.000061035, -0.000061035, -0.000076294,
    -0.000076294, -0.000091553, -0.000106812, -0.000106812,
    -0.000122070, -0.000137329, -0.000152588, -0.000167847,
    -0.000198364, -0.000213623, -0.000244141, -0.000259399,
    -0.000289917, -0.000320435, -0.000366211, -0.000396729,
    -0.000442505, -0.000473022, -0.000534058, -0.000579834,
    -0.000625610, -0.000686646, -0.000747681, -0.000808716,
    -0.000885010, -0.000961304, -0.001037598, -0.001113892,
    -0.001205444, -0.001296997, -0.001388550, -0.001480103,
    -0.001586914, -0.001693726, -0.001785278, -0.001907349,
    -0.002014160, -0.002120972, -0.002243042, -0.002349854,
    -0.002456665, -0.002578735, -0.002685547, -0.002792358,
    -0.002899170, -0.002990723, -0.003082275, -0.003173828,
     0.003250122,  0.003326416,  0.003387451,  0.003433228,
     0.003463745,  0.003479004,  0.003479004,  0.003463745,
     0.003417969,  0.003372192,  0.003280640,  0.003173828,
     0.003051758,  0.002883911,  0.002700806,  0.002487183,
     0.002227783,  0.001937866,  0.001617432,  0.001266479,
     0.000869751,  0.000442505, -0.000030518, -0.000549316,
    -0.001098633, -0.001693726, -0.002334595, -0.003005981,
    -0.003723145, -0.004486084, -0.005294800, -0.006118774,
    -0.007003784, -0.007919312, -0.008865356, -0.009841919,
    -0.010848999, -0.011886597, -0.012939453, -0.014022827,
    -0.015121460, -0.016235352, -0.017349243, -0.018463135,
    -0.019577026, -0.020690918, -0.021789551, -0.022857666,
    -0.023910522, -0.024932861, -0.025909424, -0.026840210,
    -0.027725220, -0.028533936, -0.029281616, -0.029937744,
    -0.030532837, -0.031005859, -0.031387329, -0.031661987,
    -0.031814575, -0.031845093, -0.031738281, -0.031478882,
     0.031082153,  0.030517578,  0.029785156,  0.028884888,
     0.027801514,  0.026535034,  0.025085449,  0.023422241,
     0.021575928,  0.019531250,  0.017257690,  0.014801025,
     0.012115479,  0.009231567,  0.006134033,  0.002822876,
    -0.000686646, -0.004394531, -0.008316040, -0.012420654,
    -0.016708374, -0.021179199, -0.025817871, -0.030609131,
    -0.035552979, -0.040634155, -0.045837402, -0.051132202,
    -0.056533813, -0.061996460, -0.067520142, -0.073059082,
    -0.078628540, -0.084182739, -0.089706421, -0.095169067,
    -0.100540161, -0.105819702, -0.110946655, -0.115921021,
    -0.120697021, -0.125259399, -0.129562378, -0.133590698,
    -0.137298584, -0.140670776, -0.143676758, -0.146255493,
    -0.148422241, -0.150115967, -0.151306152, -0.151962280,
    -0.152069092, -0.151596069, -0.150497437, -0.148773193,
    -0.146362305, -0.143264771, -0.139450073, -0.134887695,
    -0.129577637, -0.123474121, -0.116577148, -0.108856201,
     0.100311279,  0.090927124,  0.080688477,  0.069595337,
     0.057617187,  0.044784546,  0.031082153,  0.016510010,
     0.001068115, -0.015228271, -0.032379150, -0.050354004,
    -0.069168091, -0.088775635, -0.109161377, -0.130310059,
    -0.152206421, -0.174789429, -0.198059082, -0.221984863,
    -0.246505737, -0.271591187, -0.297210693, -0.323318481,
    -0.349868774, -0.376800537, -0.404083252, -0.431655884,
    -0.459472656, -0.487472534, -0.515609741, -0.543823242,
    -0.572036743, -0.600219727, -0.628295898, -0.656219482,
    -0.683914185, -0.711318970, -0.738372803, -0.765029907,
    -0.791213989, -0.816864014, -0.841949463, -0.866363525,
    -0.890090942, -0.913055420, -0.935195923, -0.956481934,
    -0.976852417, -0.996246338, -1.014617920, -1.031936646,
    -1.048156738, -1.063217163, -1.077117920, -1.089782715,
    -1.101211548, -1.111373901, -1.120223999, -1.127746582,
    -1.133926392, -1.138763428, -1.142211914, -1.144287109,
     1.144989014,  1.144287109,  1.142211914,  1.138763428,
     1.133926392,  1.127746582,  1.120223999,  1.111373901,
     1.101211548,  1.089782715,  1.077117920,  1.063217163,
     1.048156738,  1.031936646,  1.014617920,  0.996246338,
     0.976852417,  0.956481934,  0.935195923,  0.913055420,
     0.890090942,  0.866363525,  0.841949463,  0.816864014,
     0.791213989,  0.765029907,  0.738372803,  0.711318970,
     0.683914185,  0.656219482,  0.628295898,  0.600219727,
     0.572036743,  0.543823242,  0.515609741,  0.487472534,
     0.459472656,  0.431655884,  0.404083252,  0.376800537,
     0.349868774,  0.323318481,  0.297210693,  0.271591187,
     0.246505737,  0.221984863,  0.198059082,  0.174789429,
     0.152206421,  0.130310059,  0.109161377,  0.088775635,
     0.069168091,  0.050354004,  0.032379150,  0.015228271,
    -0.001068115, -0.016510010, -0.031082153, -0.044784546,
    -0.057617187, -0.069595337, -0.080688477, -0.090927124,
     0.100311279,  0.108856201,  0.116577148,  0.123474121,
     0.129577637,  0.134887695,  0.139450073,  0.143264771,
     0.146362305,  0.148773193,  0.150497437,  0.151596069,
     0.152069092,  0.151962280,  0.151306152,  0.150115967,
     0.148422241,  0.146255493,  0.143676758,  0.140670776,
     0.137298584,  0.133590698,  0.129562378,  0.125259399,
     0.120697021,  0.115921021,  0.110946655,  0.105819702,
     0.100540161,  0.095169067,  0.089706421,  0.084182739,
     0.078628540,  0.073059082,  0.067520142,  0.061996460,
     0.056533813,  0.051132202,  0.045837402,  0.040634155,
     0.035552979,  0.030609131,  0.025817871,  0.021179199,
     0.016708374,  0.012420654,  0.008316040,  0.004394531,
     0.000686646, -0.002822876, -0.006134033, -0.009231567,
    -0.012115479, -0.014801025, -0.017257690, -0.019531250,
    -0.021575928, -0.023422241, -0.025085449, -0.026535034,
    -0.027801514, -0.028884888, -0.029785156, -0.030517578,
     0.031082153,  0.031478882,  0.031738281,  0.031845093,
     0.031814575,  0.031661987,  0.031387329,  0.031005859,
     0.030532837,  0.029937744,  0.029281616,  0.028533936,
     0.027725220,  0.026840210,  0.025909424,  0.024932861,
     0.023910522,  0.022857666,  0.021789551,  0.020690918,
     0.019577026,  0.018463135,  0.017349243,  0.016235352,
     0.015121460,  0.014022827,  0.012939453,  0.011886597,
     0.010848999,  0.009841919,  0.008865356,  0.007919312,
     0.007003784,  0.006118774,  0.005294800,  0.004486084,
     0.003723145,  0.003005981,  0.002334595,  0.001693726,
     0.001098633,  0.000549316,  0.000030518, -0.000442505,
    -0.000869751, -0.001266479, -0.001617432, -0.001937866,
    -0.002227783, -0.002487183, -0.002700806, -0.002883911,
    -0.003051758, -0.003173828, -0.003280640, -0.003372192,
    -0.003417969, -0.003463745, -0.003479004, -0.003479004,
    -0.003463745, -0.003433228, -0.003387451, -0.003326416,
     0.003250122,  0.003173828,  0.003082275,  0.002990723,
     0.002899170,  0.002792358,  0.002685547,  0.002578735,
     0.002456665,  0.002349854,  0.002243042,  0.002120972,
     0.002014160,  0.001907349,  0.001785278,  0.001693726,
     0.001586914,  0.001480103,  0.001388550,  0.001296997,
     0.001205444,  0.001113892,  0.001037598,  0.000961304,
     0.000885010,  0.000808716,  0.000747681,  0.000686646,
     0.000625610,  0.000579834,  0.000534058,  0.000473022,
     0.000442505,  0.000396729,  0.000366211,  0.000320435,
     0.000289917,  0.000259399,  0.000244141,  0.000213623,
     0.000198364,  0.000167847,  0.000152588,  0.000137329,
     0.000122070,  0.000106812,  0.000106812,  0.000091553,
     0.000076294,  0.000076294,  0.000061035,  0.000061035,
     0.000045776,  0.000045776,  0.000030518,  0.000030518,
     0.000030518,  0.000030518,  0.000015259,  0.000015259,
     0.000015259,  0.000015259,  0.000015259,  0.000015259,
];

lazy_static! {
    /// Butterfly factors of the fast DCT, `1 / (2 * cos((2i + 1) * PI / 2N))` for `i = 0..N/2`.
    /// The factors for N = 32, 16, 8, 4, and 2 are laid end to end, so the factors of an N-point
    /// stage start at index `32 - N`.
    static ref DCT_COS: [f32; 31] = {
        let mut cos = [0f32; 31];

        let mut n = 32;
        while n > 1 {
            let start = 32 - n;

            for i in 0..n / 2 {
                let angle = std::f64::consts::PI * (2 * i + 1) as f64 / (2 * n) as f64;
                cos[start + i] = (1.0 / (2.0 * angle.cos())) as f32;
            }

            n >>= 1;
        }

        cos
    };
}

/// `SynthesisState` is the persistent state of the filterbank for one channel.
///
/// The history holds the 16 most recent 32-point DCT outputs in a circular buffer. The newest
/// block starts at `offset`, the block before it at `offset + 32`, and so on, wrapping at 512.
pub struct SynthesisState {
    history: [f32; 512],
    offset: usize,
}

impl Default for SynthesisState {
    fn default() -> Self {
        SynthesisState { history: [0f32; 512], offset: 0 }
    }
}

impl SynthesisState {
    /// Clears the history.
    pub fn reset(&mut self) {
        self.history = [0f32; 512];
        self.offset = 0;
    }
}

/// Transforms 32 sub-bands of `n_frames` samples each into `n_frames` blocks of 32 PCM samples.
///
/// The input is sub-band major: sample `b` of sub-band `sb` is `in_samples[n_frames * sb + b]`.
/// If provided, `eq` scales each sub-band before the transform. The output is not clamped.
pub fn synthesis(
    state: &mut SynthesisState,
    n_frames: usize,
    in_samples: &[f32],
    eq: Option<&[f32; 32]>,
    out: &mut [f32],
) {
    debug_assert!(in_samples.len() >= 32 * n_frames);
    debug_assert!(out.len() >= 32 * n_frames);

    let mut s_vec = [0f32; 32];
    let mut d_vec = [0f32; 32];

    for b in 0..n_frames {
        for (sb, s) in s_vec.iter_mut().enumerate() {
            *s = in_samples[n_frames * sb + b];
        }

        if let Some(eq) = eq {
            for (s, gain) in s_vec.iter_mut().zip(eq) {
                *s *= gain;
            }
        }

        // The matrixing of the standard is a 64-point output from 32 inputs, but only 32 of the
        // points are unique. They are exactly the result of a 32-point DCT. Store only the DCT,
        // and rebuild the other points while windowing.
        dct32(&s_vec, &mut d_vec);

        state.offset = (state.offset + 512 - 32) & 511;
        state.history[state.offset..state.offset + 32].copy_from_slice(&d_vec);

        let mut u_vec = [0f32; 512];

        for j in 0..8 {
            let u = &mut u_vec[64 * j..64 * (j + 1)];

            // Even blocks contribute the first half of their 64-point matrixing output.
            let even = (state.offset + 64 * j) & 511;
            let d0 = &state.history[even..even + 32];

            u[0] = d0[16];
            for i in 1..16 {
                u[i] = d0[16 + i];
            }
            u[16] = 0.0;
            for i in 17..32 {
                u[i] = -d0[48 - i];
            }

            // Odd blocks contribute the second half.
            let odd = (state.offset + 64 * j + 32) & 511;
            let d1 = &state.history[odd..odd + 32];

            u[32] = -d1[16];
            for i in 33..48 {
                u[i] = -d1[48 - i];
            }
            u[48] = -d1[0];
            for i in 49..64 {
                u[i] = -d1[i - 48];
            }
        }

        // Window, and sum the 16 partial products of each output sample.
        let pcm = &mut out[32 * b..32 * (b + 1)];

        for (i, o) in pcm.iter_mut().enumerate() {
            let mut sum = 0f32;
            for j in 0..16 {
                let k = 32 * j + i;
                sum += u_vec[k] * SYNTHESIS_D[k];
            }
            *o = sum;
        }
    }
}

/// Computes one stage of the fast DCT of B.G. Lee [1] in place, recursing into two DCTs of half
/// the length. `scratch` must be as long as `x`.
///
/// [1] B.G. Lee, "A new algorithm to compute the discrete cosine transform", IEEE Transactions
/// on Acoustics, Speech, and Signal Processing, vol. 32, no. 6, pp. 1243-1245, 1984.
fn dct_stage(x: &mut [f32], scratch: &mut [f32]) {
    let n = x.len();

    if n == 1 {
        return;
    }

    let half = n / 2;
    let cos = &DCT_COS[32 - n..32 - half];

    let (even, odd) = scratch[..n].split_at_mut(half);

    for i in 0..half {
        let (lo, hi) = (x[i], x[n - 1 - i]);
        even[i] = lo + hi;
        odd[i] = (lo - hi) * cos[i];
    }

    {
        let (x_even, x_odd) = x.split_at_mut(half);
        dct_stage(even, x_even);
        dct_stage(odd, x_odd);
    }

    for k in 0..half {
        x[2 * k] = even[k];
    }
    for k in 0..half - 1 {
        x[2 * k + 1] = odd[k] + odd[k + 1];
    }
    x[n - 1] = odd[half - 1];
}

/// Performs an unscaled 32-point DCT-II.
fn dct32(x: &[f32; 32], y: &mut [f32; 32]) {
    let mut scratch = [0f32; 32];

    y.copy_from_slice(x);
    dct_stage(y, &mut scratch);
}

#[cfg(test)]
mod tests {
    use super::{dct32, synthesis, SynthesisState};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::f64;

    fn dct32_analytical(x: &[f32; 32]) -> [f32; 32] {
        const PI_32: f64 = f64::consts::PI / 32.0;

        let mut result = [0f32; 32];
        for (i, item) in result.iter_mut().enumerate() {
            *item = x
                .iter()
                .enumerate()
                .map(|(j, &jtem)| jtem * (PI_32 * (i as f64) * ((j as f64) + 0.5)).cos() as f32)
                .sum();
        }

        result
    }

    #[test]
    fn verify_dct32() {
        const TEST_VECTOR: [f32; 32] = [
            0.1710, 0.1705, 0.3476, 0.1866, 0.4784, 0.6525, 0.2690, 0.9996, //
            0.1864, 0.7277, 0.1163, 0.6620, 0.0911, 0.3225, 0.1126, 0.5344, //
            0.7839, 0.9741, 0.8757, 0.5763, 0.5926, 0.2756, 0.1757, 0.6531, //
            0.7101, 0.7376, 0.1924, 0.0351, 0.8044, 0.2409, 0.9347, 0.9417, //
        ];

        let mut test_result = [0f32; 32];
        dct32(&TEST_VECTOR, &mut test_result);

        let actual_result = dct32_analytical(&TEST_VECTOR);
        for i in 0..32 {
            assert!((actual_result[i] - test_result[i]).abs() < 0.0001);
        }
    }

    /// The synthesis subband filter exactly as written in ISO/IEC 11172-3, section A.2.
    struct ReferenceFilter {
        v: [f64; 1024],
    }

    impl ReferenceFilter {
        fn new() -> Self {
            ReferenceFilter { v: [0f64; 1024] }
        }

        fn process(&mut self, s: &[f32; 32]) -> [f32; 32] {
            self.v.copy_within(0..1024 - 64, 64);

            for i in 0..64 {
                self.v[i] = (0..32)
                    .map(|k| {
                        let n = ((16 + i) * (2 * k + 1)) as f64 * f64::consts::PI / 64.0;
                        n.cos() * f64::from(s[k])
                    })
                    .sum();
            }

            let mut u = [0f64; 512];
            for i in 0..8 {
                for j in 0..32 {
                    u[64 * i + j] = self.v[128 * i + j];
                    u[64 * i + 32 + j] = self.v[128 * i + 96 + j];
                }
            }

            let mut out = [0f32; 32];
            for (j, o) in out.iter_mut().enumerate() {
                let sum: f64 =
                    (0..16).map(|i| u[j + 32 * i] * f64::from(super::SYNTHESIS_D[j + 32 * i])).sum();
                *o = sum as f32;
            }
            out
        }
    }

    #[test]
    fn verify_synthesis_against_reference() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);

        let mut state = SynthesisState::default();
        let mut reference = ReferenceFilter::new();

        // Enough blocks to wrap the history several times.
        for _ in 0..4 {
            let mut input = [0f32; 32 * 18];
            for s in input.iter_mut() {
                *s = rng.random_range(-1.0..1.0);
            }

            let mut output = [0f32; 32 * 18];
            synthesis(&mut state, 18, &input, None, &mut output);

            for b in 0..18 {
                let mut s_vec = [0f32; 32];
                for (sb, s) in s_vec.iter_mut().enumerate() {
                    *s = input[18 * sb + b];
                }

                let expected = reference.process(&s_vec);

                for i in 0..32 {
                    assert!((expected[i] - output[32 * b + i]).abs() < 0.001);
                }
            }
        }
    }

    #[test]
    fn verify_synthesis_eq() {
        let mut rng = SmallRng::seed_from_u64(42);

        let mut input = [0f32; 32 * 12];
        for s in input.iter_mut() {
            *s = rng.random_range(-1.0..1.0);
        }

        // A flat gain of 0.5 halves the output.
        let eq = [0.5f32; 32];

        let mut plain = [0f32; 32 * 12];
        let mut halved = [0f32; 32 * 12];

        synthesis(&mut SynthesisState::default(), 12, &input, None, &mut plain);
        synthesis(&mut SynthesisState::default(), 12, &input, Some(&eq), &mut halved);

        for (p, h) in plain.iter().zip(&halved[..]) {
            assert!((0.5 * p - h).abs() < 0.00001);
        }
    }

    #[test]
    fn verify_synthesis_reset() {
        let input = [0.25f32; 32 * 12];

        let mut state = SynthesisState::default();
        let mut first = [0f32; 32 * 12];
        synthesis(&mut state, 12, &input, None, &mut first);

        let mut second = [0f32; 32 * 12];
        state.reset();
        synthesis(&mut state, 12, &input, None, &mut second);

        assert_eq!(&first[..], &second[..]);
    }
}
