// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use mpadec_core::errors::{seek_error, Error, Result, SeekErrorKind};
use mpadec_core::io::{BufReader, MediaSource};

use log::{debug, info, warn};

use crate::common::{FrameHeader, MpegLayer};
use crate::decoder::{DecoderOptions, FrameDecoder, StereoMode};
use crate::header::MPEG_HEADER_LEN;
use crate::reader::{Frame, ReaderOptions, StreamReader};

/// The maximum number of preceding frames a layer 3 frame's main_data may begin in.
const MAX_RESERVOIR_FRAMES: u64 = 4;

/// Reads the main_data_begin of the layer 3 frame in `buf`, or 0 if `buf` is too short.
#[cfg(feature = "mp3")]
fn layer3_main_data_begin(buf: &[u8], frame: &Frame) -> u16 {
    let mut bytes = BufReader::new(buf.get(MPEG_HEADER_LEN..).unwrap_or_default());

    match crate::layer3::read_main_data_begin(&mut bytes, &frame.header) {
        Ok(main_data_begin) => main_data_begin,
        Err(err) => {
            warn!("mpa: no main_data_begin in frame {}: {}", frame.index, err);
            0
        }
    }
}

/// `MpegFileOptions` configures a [`MpegFile`].
#[derive(Clone, Debug, Default)]
pub struct MpegFileOptions {
    pub reader: ReaderOptions,
    pub decoder: DecoderOptions,
}

/// `MpegFile` decodes an MPEG audio stream into interleaved PCM samples.
///
/// All positions are in samples per channel, regardless of the [`StereoMode`].
pub struct MpegFile {
    reader: Arc<StreamReader>,
    decoder: FrameDecoder,
    header: FrameHeader,
    /// The index of the next frame to decode.
    next_frame: u64,
    /// The position of the next sample returned by `read_samples`.
    position: u64,
    /// The number of samples per channel of the decoder output already consumed.
    consumed: usize,
    /// After a seek, the frame containing the target position, and the number of its samples
    /// to skip. Output of frames before it is discarded.
    seek_target: Option<(u64, u64)>,
    frame_buf: Vec<u8>,
    eof: bool,
}

/// Returns true if the error is the end of the stream.
fn is_end_of_stream(err: &Error) -> bool {
    matches!(err, Error::IoError(err) if err.kind() == io::ErrorKind::UnexpectedEof)
}

fn samples_to_duration(samples: u64, sample_rate: u32) -> Duration {
    let sample_rate = u64::from(sample_rate);
    let nanos = (samples % sample_rate) * 1_000_000_000 / sample_rate;

    Duration::new(samples / sample_rate, nanos as u32)
}

impl MpegFile {
    /// Opens the MPEG audio file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(Box::new(file))
    }

    /// Instantiates a `MpegFile` with the default options. Fails if the source contains no MPEG
    /// audio.
    pub fn new(source: Box<dyn MediaSource>) -> Result<Self> {
        Self::with_options(source, &Default::default())
    }

    pub fn with_options(source: Box<dyn MediaSource>, options: &MpegFileOptions) -> Result<Self> {
        let reader = StreamReader::new(source, options.reader.clone())?;
        let header = *reader.first_header();

        Ok(MpegFile {
            reader: Arc::new(reader),
            decoder: FrameDecoder::new(&options.decoder),
            header,
            next_frame: 0,
            position: 0,
            consumed: 0,
            seek_target: None,
            frame_buf: Vec::new(),
            eof: false,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.header.sample_rate
    }

    /// Gets the number of channels in the stream.
    pub fn channels(&self) -> usize {
        self.header.n_channels()
    }

    /// Gets the number of interleaved channels `read_samples` outputs.
    pub fn output_channels(&self) -> usize {
        self.decoder.stereo_mode().output_channels(self.channels())
    }

    pub fn can_seek(&self) -> bool {
        self.reader.is_seekable()
    }

    /// Gets the stream reader, which may be used to scan the stream from another thread.
    pub fn reader(&self) -> Arc<StreamReader> {
        Arc::clone(&self.reader)
    }

    /// Gets the total number of samples per channel, if known. See
    /// [`StreamReader::sample_count`].
    pub fn sample_count(&self) -> Result<Option<u64>> {
        self.reader.sample_count()
    }

    /// Gets the duration of the stream, if known.
    pub fn duration(&self) -> Result<Option<Duration>> {
        Ok(self.sample_count()?.map(|count| samples_to_duration(count, self.sample_rate())))
    }

    /// Gets the position of the next sample to be read.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Sets the position of the next sample to be read. The source must be seekable.
    ///
    /// Decoding restarts enough frames before the target for the decoder state to settle.
    pub fn set_position(&mut self, position: u64) -> Result<()> {
        if !self.can_seek() {
            return seek_error(SeekErrorKind::Unseekable);
        }

        if let Some(count) = self.sample_count()? {
            if position > count {
                return seek_error(SeekErrorKind::OutOfRange);
            }
        }

        self.decoder.reset();
        self.consumed = 0;
        self.position = position;
        self.eof = false;

        let frame = match self.reader.frame_for_sample(position)? {
            Some(frame) => frame,
            None => {
                // The end of the stream.
                self.next_frame = self.reader.frames_found();
                self.seek_target = None;
                return Ok(());
            }
        };

        let preroll = self.preroll(&frame)?.min(frame.index);

        debug!(
            "mpa: seeking to sample {} in frame {} with {} frames of preroll",
            position, frame.index, preroll
        );

        self.next_frame = frame.index - preroll;
        self.seek_target = Some((frame.index, position - frame.sample_offset));

        Ok(())
    }

    /// Gets the number of frames to decode before `frame` to rebuild the decoder state.
    fn preroll(&mut self, frame: &Frame) -> Result<u64> {
        let preroll = match frame.header.layer {
            // The synthesis filterbank spans more than one layer 1 frame.
            MpegLayer::Layer1 => 2,
            MpegLayer::Layer2 => 1,
            #[cfg(feature = "mp3")]
            MpegLayer::Layer3 => self.layer3_preroll(frame)?,
            #[cfg(not(feature = "mp3"))]
            MpegLayer::Layer3 => 1,
        };

        Ok(preroll)
    }

    /// Gets the number of frames holding the main_data of a layer 3 frame, plus one for the
    /// overlap of its first granule.
    #[cfg(feature = "mp3")]
    fn layer3_preroll(&mut self, frame: &Frame) -> Result<u64> {
        self.reader.read_frame_data(frame, &mut self.frame_buf)?;

        let main_data_begin = layer3_main_data_begin(&self.frame_buf, frame);

        // Walk back until the preceding frames hold all of the main_data.
        let mut needed = usize::from(main_data_begin);
        let mut count = 0;

        while needed > 0 && count < MAX_RESERVOIR_FRAMES && count < frame.index {
            count += 1;

            let prev = match self.reader.frame(frame.index - count)? {
                Some(prev) => prev,
                None => break,
            };

            let crc_len = if prev.header.has_crc() { 2 } else { 0 };
            let side_len = MPEG_HEADER_LEN + crc_len + prev.header.side_info_len();

            needed = needed.saturating_sub(prev.len.saturating_sub(side_len));
        }

        Ok(count + 1)
    }

    /// Gets the position as a time.
    pub fn time(&self) -> Duration {
        samples_to_duration(self.position, self.sample_rate())
    }

    /// Sets the position to the sample at, or just before, `time`.
    pub fn set_time(&mut self, time: Duration) -> Result<()> {
        let position = (time.as_secs_f64() * f64::from(self.sample_rate())) as u64;
        self.set_position(position)
    }

    /// Sets the 32-band equalizer from gains in dB. An empty slice disables the equalizer. Any
    /// other length than 32 is ignored.
    pub fn set_eq(&mut self, eq_db: &[f32]) {
        self.decoder.set_eq(eq_db);
    }

    pub fn stereo_mode(&self) -> StereoMode {
        self.decoder.stereo_mode()
    }

    /// Sets the stereo mode. Samples already decoded but not yet read are output in the new mode.
    pub fn set_stereo_mode(&mut self, mode: StereoMode) {
        self.decoder.set_stereo_mode(mode);
    }

    /// Reads interleaved samples into `buf`, and returns the number of values written. Only
    /// whole sample frames are written. Returns 0 at the end of the stream.
    pub fn read_samples(&mut self, buf: &mut [f32]) -> Result<usize> {
        let n_channels = self.output_channels();
        let mut written = 0;

        while buf.len() - written >= n_channels {
            let output = self.decoder.output();
            let available = output.len() / n_channels - self.consumed;

            if available > 0 {
                let count = available.min((buf.len() - written) / n_channels);

                let src = &output[n_channels * self.consumed..n_channels * (self.consumed + count)];

                buf[written..written + src.len()].copy_from_slice(src);

                written += src.len();
                self.consumed += count;
                self.position += count as u64;
            }
            else if !self.decode_next()? {
                break;
            }
        }

        Ok(written)
    }

    /// Decodes frames until one produces samples to output. Returns false at the end of the
    /// stream.
    fn decode_next(&mut self) -> Result<bool> {
        while !self.eof {
            let frame = match self.reader.frame(self.next_frame) {
                Ok(Some(frame)) => frame,
                Ok(None) => break,
                Err(err) if is_end_of_stream(&err) => break,
                Err(err) => return Err(err),
            };

            self.next_frame += 1;

            let result = self.reader.read_frame_data(&frame, &mut self.frame_buf);

            self.reader.release(&frame);

            match result {
                Ok(()) => (),
                Err(err) if is_end_of_stream(&err) => break,
                Err(err) => return Err(err),
            }

            let n_samples = match self.decoder.decode(&self.frame_buf) {
                Ok(n_samples) => n_samples,
                Err(Error::DecodeError(msg)) => {
                    info!("mpa: skipping malformed frame {}: {}", frame.index, msg);
                    continue;
                }
                Err(err) if is_end_of_stream(&err) => {
                    info!("mpa: skipping truncated frame {}", frame.index);
                    continue;
                }
                Err(err) => return Err(err),
            };

            self.consumed = match self.seek_target {
                Some((target, _)) if frame.index < target => n_samples,
                // A target frame without samples, such as one whose main_data is lost, passes the
                // seek on to the next frame that has samples.
                Some(_) if n_samples == 0 => 0,
                Some((target, skip)) => {
                    self.seek_target = None;

                    if frame.index == target {
                        n_samples.min(skip as usize)
                    }
                    else {
                        0
                    }
                }
                None => 0,
            };

            if self.consumed < n_samples {
                // Frames without samples, or skipped as malformed, still advance the position.
                self.position = frame.sample_offset + self.consumed as u64;
                return Ok(true);
            }
        }

        self.eof = true;
        Ok(false)
    }
}

impl Drop for MpegFile {
    fn drop(&mut self) {
        self.reader.close();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use mpadec_core::io::ReadOnlySource;

    use super::*;

    /// MPEG1 layer 1, 32 kbit/s, 32 kHz, stereo. 48 bytes, 384 samples.
    fn silent_stream(n_frames: usize) -> Vec<u8> {
        let mut frame = vec![0u8; 48];
        frame[..4].copy_from_slice(&0xffff_1800u32.to_be_bytes());
        frame.repeat(n_frames)
    }

    /// MPEG1 layer 3, 128 kbit/s, 44.1 kHz, mono. 417 bytes, 1152 samples. Every frame has a
    /// main_data_begin of 100 bytes and silent granules, so the first frame underflows.
    fn borrowing_layer3_stream(n_frames: usize) -> Vec<u8> {
        let mut frame = vec![0u8; 417];
        frame[..4].copy_from_slice(&0xfffb_90c0u32.to_be_bytes());
        frame[4] = 100 >> 1;
        frame.repeat(n_frames)
    }

    fn read_all(file: &mut MpegFile) -> usize {
        let mut buf = [0f32; 1000];
        let mut total = 0;
        loop {
            let n = file.read_samples(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            total += n;
        }
        total
    }

    #[test]
    fn verify_stream_properties() {
        let file = MpegFile::new(Box::new(Cursor::new(silent_stream(4)))).unwrap();

        assert_eq!(file.sample_rate(), 32_000);
        assert_eq!(file.channels(), 2);
        assert_eq!(file.output_channels(), 2);
        assert!(file.can_seek());
        assert_eq!(file.sample_count().unwrap(), Some(4 * 384));
        assert_eq!(file.duration().unwrap(), Some(Duration::from_millis(48)));
    }

    #[test]
    fn verify_read_samples() {
        let mut file = MpegFile::new(Box::new(Cursor::new(silent_stream(4)))).unwrap();

        // Odd buffer lengths only receive whole sample frames.
        let mut buf = [1f32; 7];
        assert_eq!(file.read_samples(&mut buf).unwrap(), 6);
        assert_eq!(file.position(), 3);
        assert_eq!(buf[6], 1.0);

        assert_eq!(read_all(&mut file), 2 * 4 * 384 - 6);
        assert_eq!(file.position(), 4 * 384);
        assert_eq!(file.read_samples(&mut buf).unwrap(), 0);
    }

    #[test]
    fn verify_stereo_mode_output() {
        let mut file = MpegFile::new(Box::new(Cursor::new(silent_stream(2)))).unwrap();

        file.set_stereo_mode(StereoMode::DownmixToMono);
        assert_eq!(file.output_channels(), 1);
        assert_eq!(read_all(&mut file), 2 * 384);
        assert_eq!(file.position(), 2 * 384);
    }

    #[test]
    fn verify_set_position() {
        let mut file = MpegFile::new(Box::new(Cursor::new(silent_stream(4)))).unwrap();

        file.set_position(1000).unwrap();
        assert_eq!(file.position(), 1000);
        assert_eq!(read_all(&mut file), 2 * (4 * 384 - 1000));

        // Seeking to the end is allowed, but past it is not.
        file.set_position(4 * 384).unwrap();
        assert_eq!(read_all(&mut file), 0);

        match file.set_position(4 * 384 + 1) {
            Err(Error::SeekError(SeekErrorKind::OutOfRange)) => (),
            _ => panic!("expected an out-of-range seek error"),
        }

        file.set_position(0).unwrap();
        assert_eq!(read_all(&mut file), 2 * 4 * 384);
    }

    #[cfg(feature = "mp3")]
    #[test]
    fn verify_seek_into_lost_frame() {
        let mut file = MpegFile::new(Box::new(Cursor::new(borrowing_layer3_stream(4)))).unwrap();

        // The first frame has no main_data, so the first sample returned is that of frame 1.
        file.set_position(100).unwrap();

        let mut buf = [0f32; 10];
        assert_eq!(file.read_samples(&mut buf).unwrap(), 10);
        assert_eq!(file.position(), 1152 + 10);
        assert_eq!(read_all(&mut file), 3 * 1152 - 10);
        assert_eq!(file.position(), 4 * 1152);

        // Decoding from the start agrees.
        file.set_position(0).unwrap();
        assert_eq!(file.read_samples(&mut buf).unwrap(), 10);
        assert_eq!(file.position(), 1152 + 10);

        // A seek past the lost frame lands where requested.
        file.set_position(1152 + 500).unwrap();
        assert_eq!(file.read_samples(&mut buf).unwrap(), 10);
        assert_eq!(file.position(), 1152 + 510);
    }

    #[cfg(feature = "mp3")]
    #[test]
    fn verify_layer3_main_data_begin() {
        let stream = borrowing_layer3_stream(2);
        let file = MpegFile::new(Box::new(Cursor::new(stream.clone()))).unwrap();

        let frame = file.reader().frame(0).unwrap().unwrap();

        assert_eq!(layer3_main_data_begin(&stream[..417], &frame), 100);

        // Too short to hold the side_info.
        assert_eq!(layer3_main_data_begin(&stream[..5], &frame), 0);
        assert_eq!(layer3_main_data_begin(&stream[..2], &frame), 0);
    }

    #[test]
    fn verify_time() {
        let mut file = MpegFile::new(Box::new(Cursor::new(silent_stream(4)))).unwrap();

        file.set_time(Duration::from_millis(20)).unwrap();
        assert_eq!(file.position(), 640);
        assert_eq!(file.time(), Duration::from_millis(20));
    }

    #[test]
    fn verify_forward_only_source() {
        let source = ReadOnlySource::new(Cursor::new(silent_stream(3)));
        let mut file = MpegFile::new(Box::new(source)).unwrap();

        assert!(!file.can_seek());
        assert_eq!(file.sample_count().unwrap(), None);

        match file.set_position(0) {
            Err(Error::SeekError(SeekErrorKind::Unseekable)) => (),
            _ => panic!("expected an unseekable error"),
        }

        assert_eq!(read_all(&mut file), 2 * 3 * 384);
        assert_eq!(file.sample_count().unwrap(), Some(3 * 384));
    }
}
