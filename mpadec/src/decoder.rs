// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io;

use mpadec_core::errors::{decode_error, unsupported_error, Error, Result};
use mpadec_core::io::{BufReader, ReadBytes};

use log::debug;

use crate::common::*;
use crate::header;

#[cfg(feature = "mp1")]
use crate::layer1::Layer1;
#[cfg(feature = "mp2")]
use crate::layer2::Layer2;
#[cfg(feature = "mp3")]
use crate::layer3::Layer3;

/// Selects which channels of a stereo stream are output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StereoMode {
    /// Output every channel of the stream.
    Both,
    /// Output only the left channel.
    LeftOnly,
    /// Output only the right channel.
    RightOnly,
    /// Output the average of the left and right channels.
    DownmixToMono,
}

impl Default for StereoMode {
    fn default() -> Self {
        StereoMode::Both
    }
}

impl StereoMode {
    /// Gets the number of output channels for a stream with `n_channels` channels.
    pub fn output_channels(&self, n_channels: usize) -> usize {
        match self {
            StereoMode::Both => n_channels,
            _ => 1,
        }
    }
}

/// `DecoderOptions` is a common set of options that all layer decoders use.
#[derive(Clone, Debug, Default)]
pub struct DecoderOptions {
    /// Verify the CRC of protected frames. A frame with a mismatched CRC fails to decode.
    pub verify: bool,
    /// The initial stereo mode.
    pub stereo_mode: StereoMode,
    /// An initial 32-band equalizer, with the gain of each sub-band in dB.
    pub eq: Option<Vec<f32>>,
}

/// Converts equalizer gains in dB to sub-band scale factors. Returns `None` unless there are
/// exactly 32 gains.
fn eq_factors(eq_db: &[f32]) -> Option<[f32; 32]> {
    if eq_db.len() != SB_LIMIT {
        return None;
    }

    let mut factors = [0f32; 32];

    for (factor, &db) in factors.iter_mut().zip(eq_db) {
        *factor = (db / 6.0).exp2();
    }

    Some(factors)
}

/// Instantiates the decoder for a layer, if its support is enabled.
fn try_new_layer(layer: MpegLayer) -> Result<Box<dyn Layer + Send>> {
    match layer {
        #[cfg(feature = "mp1")]
        MpegLayer::Layer1 => Ok(Box::new(Layer1::new())),
        #[cfg(feature = "mp2")]
        MpegLayer::Layer2 => Ok(Box::new(Layer2::new())),
        #[cfg(feature = "mp3")]
        MpegLayer::Layer3 => Ok(Box::new(Layer3::new())),
        #[allow(unreachable_patterns)]
        _ => unsupported_error("mpa: mpeg audio layer support is not enabled"),
    }
}

/// `FrameDecoder` decodes whole MPEG audio frames into interleaved PCM.
///
/// A decoder for each layer is created on first use and kept for the life of the `FrameDecoder`.
pub struct FrameDecoder {
    layers: [Option<Box<dyn Layer + Send>>; 3],
    verify: bool,
    stereo_mode: StereoMode,
    eq: Option<[f32; 32]>,
    /// Planar output of the last decoded frame.
    planar: Box<[[f32; MAX_SAMPLES_PER_FRAME]; 2]>,
    /// The number of samples and channels in `planar`.
    n_samples: usize,
    n_channels: usize,
    /// Interleaved output of the last decoded frame.
    buf: Vec<f32>,
}

impl FrameDecoder {
    pub fn new(options: &DecoderOptions) -> Self {
        FrameDecoder {
            layers: [None, None, None],
            verify: options.verify,
            stereo_mode: options.stereo_mode,
            eq: options.eq.as_deref().and_then(eq_factors),
            planar: Box::new([[0f32; MAX_SAMPLES_PER_FRAME]; 2]),
            n_samples: 0,
            n_channels: 0,
            buf: Vec::with_capacity(2 * MAX_SAMPLES_PER_FRAME),
        }
    }

    /// Decodes a complete frame, starting with its header word. Returns the number of samples per
    /// channel. The samples are available from [`FrameDecoder::output`].
    ///
    /// A Layer III frame whose main data is not yet available decodes to 0 samples.
    pub fn decode(&mut self, frame: &[u8]) -> Result<usize> {
        self.n_samples = 0;
        self.buf.clear();

        let mut reader = BufReader::new(frame);

        let header = header::parse_frame_header(reader.read_be_u32()?)?;

        let slot = match header.layer {
            MpegLayer::Layer1 => 0,
            MpegLayer::Layer2 => 1,
            MpegLayer::Layer3 => 2,
        };

        let layer = match &mut self.layers[slot] {
            Some(layer) => layer,
            empty => empty.get_or_insert(try_new_layer(header.layer)?),
        };

        let params = DecodeParams { verify: self.verify, eq: self.eq.as_ref() };

        // Running out of bits inside a complete frame is a malformed frame, not an IO failure.
        let n_samples = match layer.decode(&mut reader, &header, &params, &mut self.planar) {
            Ok(n_samples) => n_samples,
            Err(Error::IoError(err)) if err.kind() == io::ErrorKind::Other => {
                return decode_error("mpa: frame overruns its bitstream");
            }
            Err(err) => return Err(err),
        };

        self.n_samples = n_samples;
        self.n_channels = header.n_channels();

        self.interleave();

        Ok(n_samples)
    }

    /// Gets the interleaved output of the last decoded frame, arranged by the stereo mode.
    pub fn output(&self) -> &[f32] {
        &self.buf
    }

    /// Rebuilds the interleaved output from the planar output.
    fn interleave(&mut self) {
        let n = self.n_samples;
        let [left, right] = &*self.planar;

        let left = &left[..n];
        let right = &right[..n];

        self.buf.clear();

        if self.n_channels == 1 {
            self.buf.extend_from_slice(left);
            return;
        }

        match self.stereo_mode {
            StereoMode::Both => {
                for (&l, &r) in left.iter().zip(right) {
                    self.buf.push(l);
                    self.buf.push(r);
                }
            }
            StereoMode::LeftOnly => self.buf.extend_from_slice(left),
            StereoMode::RightOnly => self.buf.extend_from_slice(right),
            StereoMode::DownmixToMono => {
                self.buf.extend(left.iter().zip(right).map(|(&l, &r)| 0.5 * (l + r)));
            }
        }
    }

    pub fn stereo_mode(&self) -> StereoMode {
        self.stereo_mode
    }

    /// Sets the stereo mode. The output of the last decoded frame is rearranged to match.
    pub fn set_stereo_mode(&mut self, mode: StereoMode) {
        if mode != self.stereo_mode {
            self.stereo_mode = mode;
            self.interleave();
        }
    }

    /// Sets the 32-band equalizer from gains in dB. An empty slice disables the equalizer. Any
    /// length other than 0 or 32 is ignored.
    pub fn set_eq(&mut self, eq_db: &[f32]) {
        if eq_db.is_empty() {
            self.eq = None;
        }
        else if let Some(factors) = eq_factors(eq_db) {
            self.eq = Some(factors);
        }
        else {
            debug!("mpa: ignoring equalizer with {} bands", eq_db.len());
        }
    }

    /// Clears the state of every layer decoder, and the output.
    pub fn reset(&mut self) {
        for layer in self.layers.iter_mut().flatten() {
            layer.reset();
        }

        self.n_samples = 0;
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A silent MPEG1 layer 1, 32 kbit/s, 32 kHz, stereo frame. Every bit allocation is 0.
    fn silent_layer1_stereo() -> Vec<u8> {
        let mut frame = vec![0u8; 48];
        frame[..4].copy_from_slice(&0xffff_1800u32.to_be_bytes());
        frame
    }

    #[test]
    fn verify_eq_factors() {
        assert!(eq_factors(&[0.0; 31]).is_none());

        let factors = eq_factors(&[6.0; 32]).unwrap();
        assert!(factors.iter().all(|&f| (f - 2.0).abs() < 1e-6));

        let factors = eq_factors(&[-12.0; 32]).unwrap();
        assert!(factors.iter().all(|&f| (f - 0.25).abs() < 1e-6));
    }

    #[test]
    fn verify_set_eq() {
        let mut decoder = FrameDecoder::new(&Default::default());
        assert!(decoder.eq.is_none());

        decoder.set_eq(&[0.0; 32]);
        assert_eq!(decoder.eq, Some([1.0; 32]));

        // Malformed lengths are ignored.
        decoder.set_eq(&[6.0; 16]);
        assert_eq!(decoder.eq, Some([1.0; 32]));

        decoder.set_eq(&[]);
        assert!(decoder.eq.is_none());
    }

    #[test]
    fn verify_stereo_mode_output_channels() {
        assert_eq!(StereoMode::Both.output_channels(2), 2);
        assert_eq!(StereoMode::Both.output_channels(1), 1);
        assert_eq!(StereoMode::LeftOnly.output_channels(2), 1);
        assert_eq!(StereoMode::DownmixToMono.output_channels(2), 1);
    }

    #[test]
    fn verify_interleave_and_downmix() {
        let mut decoder = FrameDecoder::new(&Default::default());

        decoder.n_samples = 2;
        decoder.n_channels = 2;
        decoder.planar[0][..2].copy_from_slice(&[1.0, 2.0]);
        decoder.planar[1][..2].copy_from_slice(&[3.0, -4.0]);

        decoder.interleave();
        assert_eq!(decoder.output(), &[1.0, 3.0, 2.0, -4.0]);

        decoder.set_stereo_mode(StereoMode::LeftOnly);
        assert_eq!(decoder.output(), &[1.0, 2.0]);

        decoder.set_stereo_mode(StereoMode::RightOnly);
        assert_eq!(decoder.output(), &[3.0, -4.0]);

        decoder.set_stereo_mode(StereoMode::DownmixToMono);
        assert_eq!(decoder.output(), &[2.0, -1.0]);
    }

    #[test]
    fn verify_decode_silent_frame() {
        let mut decoder = FrameDecoder::new(&Default::default());

        let frame = silent_layer1_stereo();

        assert_eq!(decoder.decode(&frame).unwrap(), 384);
        assert_eq!(decoder.output().len(), 2 * 384);
        assert!(decoder.output().iter().all(|&s| s == 0.0));

        decoder.reset();
        assert!(decoder.output().is_empty());
    }

    #[test]
    fn verify_decode_overrun_is_a_decode_error() {
        let mut decoder = FrameDecoder::new(&Default::default());

        // 40 allocations of 8 bits need more scale factor bits than the frame holds.
        let mut frame = silent_layer1_stereo();
        frame[4..24].copy_from_slice(&[0x77; 20]);

        match decoder.decode(&frame) {
            Err(Error::DecodeError(_)) => (),
            _ => panic!("expected a decode error"),
        }

        // The decoder recovers on the next frame.
        assert_eq!(decoder.decode(&silent_layer1_stereo()).unwrap(), 384);
    }

    #[test]
    fn verify_decode_invalid_header() {
        let mut decoder = FrameDecoder::new(&Default::default());
        assert!(decoder.decode(&[0x00, 0x11, 0x22, 0x33]).is_err());
        assert!(decoder.decode(&[0xff]).is_err());
    }
}
