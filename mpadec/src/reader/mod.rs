// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `reader` module locates MPEG audio frames in a byte stream.
//!
//! A [`StreamReader`] scans its source for frame headers, skipping ID3v1, ID3v2, and RIFF/WAVE
//! regions, and builds an indexed list of [`Frame`]s as decoding proceeds. The list and the
//! byte buffer are guarded by separate locks so that one thread may read ahead with
//! [`StreamReader::read_to_end`] while another reads frames.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use mpadec_core::errors::{end_of_stream_error, format_error, seek_error, Result, SeekErrorKind};
use mpadec_core::io::MediaSource;

use log::debug;

use crate::common::FrameHeader;
use crate::header::{self, MPEG_HEADER_LEN};

mod buffer;
mod tags;
mod vbr;

use buffer::ReadBuffer;

pub use vbr::{VbrInfo, VbrTag};

/// The longest free format frame that can be measured.
const MAX_FREE_FORMAT_LEN: usize = 8192;

/// The number of bytes a seekable source may buffer before bytes behind the scan are dropped.
const SEEKABLE_WINDOW: usize = 1 << 16;

/// Header bits that are constant across the free format frames of a stream: sync, version,
/// layer, protection, bit-rate, and sample rate.
const FREE_FORMAT_MASK: u32 = 0xffff_fc00;

/// `ReaderOptions` configures buffering of a [`StreamReader`].
#[derive(Clone, Debug)]
pub struct ReaderOptions {
    /// The number of bytes a forward-only source may buffer ahead of the decoder before
    /// [`StreamReader::read_to_end`] waits. The length of a leading ID3v2 tag is added to this
    /// bound.
    pub max_read_ahead: usize,
    /// The delay between checks of the read-ahead bound.
    pub poll_interval: Duration,
    /// The initial capacity of the read buffer, and the minimum length of each read from the
    /// source.
    pub buffer_len: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            max_read_ahead: 40_000,
            poll_interval: Duration::from_millis(500),
            buffer_len: 2048,
        }
    }
}

/// A located MPEG audio frame.
#[derive(Copy, Clone, Debug)]
pub struct Frame {
    /// The sequence number of the frame, starting at 0.
    pub index: u64,
    /// The offset of the header word in the stream.
    pub offset: u64,
    /// The total length of the frame in bytes.
    pub len: usize,
    pub header: FrameHeader,
    /// The number of samples per channel in all preceding frames.
    pub sample_offset: u64,
}

impl Frame {
    /// Gets the number of samples per channel the frame decodes to.
    #[inline(always)]
    pub fn n_samples(&self) -> u64 {
        self.header.samples_per_frame() as u64
    }

    /// Gets the offset one past the end of the frame.
    #[inline(always)]
    pub fn end(&self) -> u64 {
        self.offset + self.len as u64
    }
}

/// The frames located so far, and the state of the scan.
struct FrameList {
    /// Located frames. For forward-only sources, released frames are removed.
    frames: Vec<Frame>,
    /// The index of `frames[0]`.
    first_index: u64,
    /// The total number of frames located.
    n_frames: u64,
    /// The sample offset of the next frame.
    next_sample: u64,
    /// The offset the scan resumes from.
    scan_offset: u64,
    /// Bytes were skipped since the last frame.
    resync: bool,
    end_found: bool,
    first_header: Option<FrameHeader>,
    /// The length of an unpadded free format frame, once measured.
    free_format_len: Option<usize>,
    vbr: Option<VbrInfo>,
    /// The length of the ID3v2 tags preceding the first frame.
    id3v2_len: u64,
    sample_count: Option<u64>,
}

impl FrameList {
    fn new(scan_offset: u64) -> Self {
        FrameList {
            frames: Vec::new(),
            first_index: 0,
            n_frames: 0,
            next_sample: 0,
            scan_offset,
            resync: true,
            end_found: false,
            first_header: None,
            free_format_len: None,
            vbr: None,
            id3v2_len: 0,
            sample_count: None,
        }
    }

    fn push(&mut self, offset: u64, len: usize, header: FrameHeader) {
        let frame = Frame {
            index: self.n_frames,
            offset,
            len,
            header,
            sample_offset: self.next_sample,
        };

        self.frames.push(frame);
        self.n_frames += 1;
        self.next_sample += frame.n_samples();
        self.scan_offset = frame.end();
        self.resync = false;
    }
}

#[inline]
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// `StreamReader` reads MPEG audio frames from a [`MediaSource`].
///
/// The frame list lock is always taken before the buffer lock.
pub struct StreamReader {
    options: ReaderOptions,
    seekable: bool,
    header: FrameHeader,
    list: Mutex<FrameList>,
    buffer: Mutex<ReadBuffer>,
    closed: AtomicBool,
}

impl StreamReader {
    /// Instantiates a `StreamReader` and locates the first frame. Fails if the source contains
    /// no MPEG audio frames.
    pub fn new(source: Box<dyn MediaSource>, options: ReaderOptions) -> Result<Self> {
        let mut buffer = ReadBuffer::new(source, options.buffer_len);
        let seekable = buffer.is_seekable();

        let mut list = FrameList::new(buffer.start());

        while list.n_frames == 0 && !list.end_found {
            find_next_frame(seekable, &mut list, &mut buffer)?;
        }

        let header = match (list.n_frames, list.first_header) {
            (n, Some(header)) if n > 0 => header,
            _ => return format_error("mpa: not a valid mpeg audio stream"),
        };

        Ok(StreamReader {
            options,
            seekable,
            header,
            list: Mutex::new(list),
            buffer: Mutex::new(buffer),
            closed: AtomicBool::new(false),
        })
    }

    /// Gets the header of the first frame.
    pub fn first_header(&self) -> &FrameHeader {
        &self.header
    }

    pub fn is_seekable(&self) -> bool {
        self.seekable
    }

    /// Gets the VBR info of the stream, if the first frame carried it.
    pub fn vbr_info(&self) -> Option<VbrInfo> {
        lock(&self.list).vbr
    }

    /// Gets the length of the ID3v2 tags preceding the first frame.
    pub fn id3v2_len(&self) -> u64 {
        lock(&self.list).id3v2_len
    }

    /// Gets the number of frames located so far.
    pub fn frames_found(&self) -> u64 {
        lock(&self.list).n_frames
    }

    /// Gets the frame with the given index, scanning forward as needed. Returns `None` past the
    /// last frame.
    ///
    /// Released frames of a forward-only source can no longer be read.
    pub fn frame(&self, index: u64) -> Result<Option<Frame>> {
        let mut list = lock(&self.list);

        if index < list.first_index {
            return seek_error(SeekErrorKind::ForwardOnly);
        }

        if index >= list.n_frames && !list.end_found {
            let mut buffer = lock(&self.buffer);

            while index >= list.n_frames && !list.end_found {
                find_next_frame(self.seekable, &mut list, &mut buffer)?;
            }
        }

        Ok(list.frames.get((index - list.first_index) as usize).copied())
    }

    /// Gets the frame that contains the sample `ts`. Returns `None` if the stream ends first.
    pub fn frame_for_sample(&self, ts: u64) -> Result<Option<Frame>> {
        let mut list = lock(&self.list);

        if !list.end_found && list.next_sample <= ts {
            let mut buffer = lock(&self.buffer);

            while !list.end_found && list.next_sample <= ts {
                find_next_frame(self.seekable, &mut list, &mut buffer)?;
            }
        }

        if list.frames.first().map_or(false, |first| ts < first.sample_offset) {
            return seek_error(SeekErrorKind::ForwardOnly);
        }

        let idx = list.frames.partition_point(|frame| frame.sample_offset + frame.n_samples() <= ts);

        Ok(list.frames.get(idx).copied())
    }

    /// Copies the bytes of a frame, including its header, into `buf`.
    pub fn read_frame_data(&self, frame: &Frame, buf: &mut Vec<u8>) -> Result<()> {
        let mut buffer = lock(&self.buffer);

        let data = buffer.bytes(frame.offset, frame.len)?;

        if data.len() < frame.len {
            return end_of_stream_error();
        }

        buf.clear();
        buf.extend_from_slice(data);

        Ok(())
    }

    /// Releases a frame, and all frames before it, once its bytes are no longer needed.
    pub fn release(&self, frame: &Frame) {
        let mut list = lock(&self.list);

        if !self.seekable {
            let count = list.frames.partition_point(|f| f.index <= frame.index);

            list.frames.drain(..count);
            list.first_index = list.first_index.max(frame.index + 1);
        }

        lock(&self.buffer).discard_before(frame.end());
    }

    /// Scans the remainder of the stream.
    ///
    /// For a forward-only source, the scan waits whenever the bytes buffered ahead of the decoder
    /// exceed the read-ahead bound. It is intended to run on its own thread, and returns early
    /// once the reader is closed.
    pub fn read_to_end(&self) -> Result<()> {
        let limit = self.options.max_read_ahead + self.id3v2_len() as usize;

        while !self.is_closed() {
            {
                let mut list = lock(&self.list);

                if list.end_found {
                    break;
                }

                let mut buffer = lock(&self.buffer);
                find_next_frame(self.seekable, &mut list, &mut buffer)?;
            }

            while !self.seekable && !self.is_closed() && self.buffered_len() >= limit {
                thread::sleep(self.options.poll_interval);
            }
        }

        Ok(())
    }

    /// Gets the total number of samples per channel in the stream.
    ///
    /// The count is taken from the VBR info if available. Otherwise, a seekable source is scanned
    /// to its end. Returns `None` for a forward-only source that has not been fully scanned.
    pub fn sample_count(&self) -> Result<Option<u64>> {
        let mut list = lock(&self.list);

        if list.sample_count.is_some() {
            return Ok(list.sample_count);
        }

        if let Some(frames) = list.vbr.and_then(|vbr| vbr.frames).filter(|&frames| frames > 0) {
            let count = u64::from(frames) * self.header.samples_per_frame() as u64;
            list.sample_count = Some(count);
            return Ok(Some(count));
        }

        if !self.seekable && !list.end_found {
            return Ok(None);
        }

        if !list.end_found {
            let mut buffer = lock(&self.buffer);

            while !list.end_found {
                find_next_frame(self.seekable, &mut list, &mut buffer)?;
            }
        }

        list.sample_count = Some(list.next_sample);

        Ok(list.sample_count)
    }

    /// Stops any ongoing [`StreamReader::read_to_end`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::Relaxed);
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }

    fn buffered_len(&self) -> usize {
        lock(&self.buffer).buffered_len()
    }
}

/// Drops buffered bytes that can no longer be read.
fn trim(seekable: bool, list: &FrameList, buffer: &mut ReadBuffer) {
    if seekable {
        if buffer.buffered_len() > SEEKABLE_WINDOW {
            buffer.discard_before(list.scan_offset);
        }
    }
    else if list.frames.is_empty() {
        buffer.discard_before(list.scan_offset);
    }
}

/// Scans for the next frame and appends it to the list. Returns false if the stream ended first.
fn find_next_frame(seekable: bool, list: &mut FrameList, buffer: &mut ReadBuffer) -> Result<bool> {
    while !list.end_found {
        trim(seekable, list, buffer);

        let offset = list.scan_offset;

        let word = match buffer.read_be_u32(offset)? {
            Some(word) => word,
            None => {
                list.end_found = true;
                break;
            }
        };

        if tags::is_id3v2_sync(word) {
            if let Some(len) = tags::id3v2_len(buffer.bytes(offset, tags::ID3V2_HEADER_LEN)?) {
                debug!("mpa: skipping id3v2 tag at {}, {} bytes", offset, len);

                if list.n_frames == 0 {
                    list.id3v2_len += len;
                }

                list.scan_offset += len;
                continue;
            }
        }
        else if tags::is_id3v1_sync(word) {
            if buffer.bytes(offset, tags::ID3V1_LEN)?.len() == tags::ID3V1_LEN {
                debug!("mpa: skipping id3v1 tag at {}", offset);

                list.scan_offset += tags::ID3V1_LEN as u64;
                continue;
            }
        }
        else if tags::is_riff_sync(word) && list.n_frames == 0 {
            if let Some(len) = tags::riff_header_len(buffer, offset)? {
                debug!("mpa: skipping riff header at {}, {} bytes", offset, len);

                list.scan_offset += len;
                continue;
            }
        }
        else if let Some(header) = try_frame_header(list, word) {
            match try_frame(list, buffer, &header, offset)? {
                Candidate::Audio(len) => {
                    list.push(offset, len, header);
                    return Ok(true);
                }
                Candidate::Info(len) => {
                    list.scan_offset += len as u64;
                    list.resync = false;
                    continue;
                }
                Candidate::Invalid => (),
            }
        }

        // Not a frame or a tag. Resynchronize one byte forward.
        list.scan_offset += 1;
        list.resync = true;
    }

    Ok(false)
}

/// Parses a header word found by the scan. The header must be consistent with the first frame.
fn try_frame_header(list: &FrameList, word: u32) -> Option<FrameHeader> {
    if !header::is_frame_header_word_synced(word) || !header::check_header(word) {
        return None;
    }

    let header = header::parse_frame_header(word).ok()?;

    match list.first_header {
        Some(first) if !first.is_compatible(&header) => None,
        _ => Some(header),
    }
}

enum Candidate {
    /// An audio frame of the given length.
    Audio(usize),
    /// A VBR info frame of the given length.
    Info(usize),
    /// Not a frame.
    Invalid,
}

/// Validates a frame candidate at `offset`.
fn try_frame(
    list: &mut FrameList,
    buffer: &mut ReadBuffer,
    header: &FrameHeader,
    offset: u64,
) -> Result<Candidate> {
    let len = match frame_len(list, buffer, header, offset)? {
        Some(len) => len,
        None => return Ok(Candidate::Invalid),
    };

    // A frame cut short by the end of the stream is not decodable.
    if buffer.bytes(offset, len)?.len() < len {
        return Ok(Candidate::Invalid);
    }

    // The first frame, and the first after a resync, must be followed by a compatible frame
    // unless the stream ends.
    if list.resync && !is_confirmed(buffer, header, offset + len as u64)? {
        return Ok(Candidate::Invalid);
    }

    if list.first_header.is_none() {
        list.first_header = Some(*header);

        if let Some(info) = vbr::read_vbr_info(header, buffer.bytes(offset, len)?) {
            debug!(
                "mpa: found {:?} vbr header, frames={:?}, bytes={:?}",
                info.tag, info.frames, info.bytes
            );
            list.vbr = Some(info);
            return Ok(Candidate::Info(len));
        }
    }

    Ok(Candidate::Audio(len))
}

/// Returns true if the bytes at `next` begin a frame compatible with `header`, a tag, or the end
/// of the stream.
fn is_confirmed(buffer: &mut ReadBuffer, header: &FrameHeader, next: u64) -> Result<bool> {
    let word = match buffer.read_be_u32(next)? {
        Some(word) => word,
        None => return Ok(true),
    };

    if tags::is_id3v1_sync(word) || tags::is_id3v2_sync(word) {
        return Ok(true);
    }

    if !header::is_frame_header_word_synced(word) || !header::check_header(word) {
        return Ok(false);
    }

    Ok(header::parse_frame_header(word).map_or(false, |next| next.is_compatible(header)))
}

/// Gets the length of a frame. The length of the first free format frame is measured as the
/// distance to the next free format frame.
fn frame_len(
    list: &mut FrameList,
    buffer: &mut ReadBuffer,
    header: &FrameHeader,
    offset: u64,
) -> Result<Option<usize>> {
    if let Some(size) = header.frame_size {
        return Ok(Some(size));
    }

    let padding = if header.has_padding() { header::slot_size(header.layer) } else { 0 };

    if let Some(base) = list.free_format_len {
        return Ok(Some(base + padding));
    }

    let window = buffer.bytes(offset, MAX_FREE_FORMAT_LEN + MPEG_HEADER_LEN)?;

    for (len, bytes) in window.windows(MPEG_HEADER_LEN).enumerate().skip(MPEG_HEADER_LEN) {
        let word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

        if (word ^ header.word) & FREE_FORMAT_MASK != 0 || len <= padding {
            continue;
        }

        match header::parse_frame_header(word) {
            Ok(next) if next.is_compatible(header) => {
                debug!("mpa: free format frame at {} is {} bytes", offset, len);

                list.free_format_len = Some(len - padding);
                return Ok(Some(len));
            }
            _ => (),
        }
    }

    Ok(None)
}
