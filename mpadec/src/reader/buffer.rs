// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io;
use std::io::{Read, Seek, SeekFrom};

use mpadec_core::errors::{seek_error, Result, SeekErrorKind};
use mpadec_core::io::MediaSource;

/// `ReadBuffer` is a window of bytes over a [`MediaSource`] addressed by absolute stream offset.
///
/// Bytes are kept until they are explicitly discarded. A seekable source may be read again at any
/// offset, but a forward-only source fails to read any byte before the start of the window.
pub struct ReadBuffer {
    source: Box<dyn MediaSource>,
    seekable: bool,
    /// The minimum number of bytes requested from the source per read.
    chunk_len: usize,
    buf: Vec<u8>,
    /// The stream offset of `buf[0]`.
    base: u64,
    /// The stream offset of the source's read cursor.
    src_pos: u64,
    /// The source has no more bytes at `src_pos`.
    eof: bool,
    start: u64,
}

impl ReadBuffer {
    pub fn new(source: Box<dyn MediaSource>, buffer_len: usize) -> Self {
        let seekable = source.is_seekable();
        let chunk_len = buffer_len.max(16);

        let mut source = source;
        let src_pos = if seekable { source.stream_position().unwrap_or(0) } else { 0 };

        ReadBuffer {
            source,
            seekable,
            chunk_len,
            buf: Vec::with_capacity(chunk_len),
            base: src_pos,
            src_pos,
            eof: false,
            start: src_pos,
        }
    }

    pub fn is_seekable(&self) -> bool {
        self.seekable
    }

    /// Gets the stream offset the source was at when the buffer was created. Forward-only sources
    /// always start at 0.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Gets the number of bytes held in the window.
    pub fn buffered_len(&self) -> usize {
        self.buf.len()
    }

    /// Gets the stream offset one past the last buffered byte.
    fn end(&self) -> u64 {
        self.base + self.buf.len() as u64
    }

    /// Gets up to `len` bytes starting at `offset`. Fewer bytes are returned only if the stream
    /// ends first.
    pub fn bytes(&mut self, offset: u64, len: usize) -> Result<&[u8]> {
        if offset < self.base {
            if !self.seekable {
                return seek_error(SeekErrorKind::ForwardOnly);
            }
            self.buf.clear();
            self.base = offset;
            self.eof = false;
        }
        else if offset > self.end() && self.seekable {
            self.discard_before(offset);
        }

        self.fill_to(offset + len as u64)?;

        let start = ((offset - self.base) as usize).min(self.buf.len());
        let end = (start + len).min(self.buf.len());

        Ok(&self.buf[start..end])
    }

    /// Reads the big-endian word at `offset`, or `None` if the stream ends first.
    pub fn read_be_u32(&mut self, offset: u64) -> Result<Option<u32>> {
        let bytes = self.bytes(offset, 4)?;

        if bytes.len() < 4 {
            return Ok(None);
        }

        Ok(Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])))
    }

    /// Reads the little-endian word at `offset`, or `None` if the stream ends first.
    pub fn read_u32(&mut self, offset: u64) -> Result<Option<u32>> {
        Ok(self.read_be_u32(offset)?.map(u32::swap_bytes))
    }

    /// Drops every buffered byte before `offset`. Discarding past the end of the window makes the
    /// next read skip the source forward.
    pub fn discard_before(&mut self, offset: u64) {
        if offset <= self.base {
            return;
        }

        if offset > self.end() && self.seekable {
            self.eof = false;
        }

        let count = ((offset - self.base) as usize).min(self.buf.len());

        self.buf.drain(..count);
        self.base = offset;
    }

    /// Reads from the source until the window reaches `target`, or the stream ends.
    fn fill_to(&mut self, target: u64) -> Result<()> {
        while self.end() < target && !self.eof {
            self.sync_source()?;

            if self.eof {
                break;
            }

            let want = ((target - self.end()) as usize).max(self.chunk_len);
            let start = self.buf.len();

            self.buf.resize(start + want, 0);

            match self.source.read(&mut self.buf[start..]) {
                Ok(0) => {
                    self.buf.truncate(start);
                    self.eof = true;
                }
                Ok(n) => {
                    self.buf.truncate(start + n);
                    self.src_pos += n as u64;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                    self.buf.truncate(start);
                }
                Err(err) => {
                    self.buf.truncate(start);
                    return Err(err.into());
                }
            }
        }

        Ok(())
    }

    /// Moves the source's read cursor to the end of the window.
    fn sync_source(&mut self) -> Result<()> {
        let end = self.end();

        if self.src_pos == end {
            return Ok(());
        }

        if self.seekable {
            self.src_pos = self.source.seek(SeekFrom::Start(end))?;
        }
        else if self.src_pos < end {
            let count = end - self.src_pos;
            let skipped = io::copy(&mut self.source.by_ref().take(count), &mut io::sink())?;

            self.src_pos += skipped;

            if skipped < count {
                self.eof = true;
            }
        }
        else {
            return seek_error(SeekErrorKind::ForwardOnly);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use mpadec_core::errors::Error;
    use mpadec_core::io::ReadOnlySource;

    use super::*;

    fn ramp(len: usize) -> Vec<u8> {
        (0..len).map(|i| i as u8).collect()
    }

    #[test]
    fn verify_bytes_and_words() {
        let mut buf = ReadBuffer::new(Box::new(Cursor::new(ramp(64))), 16);

        assert_eq!(buf.bytes(2, 3).unwrap(), &[2, 3, 4]);
        assert_eq!(buf.read_be_u32(4).unwrap(), Some(0x0405_0607));
        assert_eq!(buf.read_u32(4).unwrap(), Some(0x0706_0504));

        // Reads are short at the end of the stream.
        assert_eq!(buf.bytes(62, 8).unwrap(), &[62, 63]);
        assert_eq!(buf.read_be_u32(61).unwrap(), None);
        assert!(buf.bytes(100, 4).unwrap().is_empty());
    }

    #[test]
    fn verify_seekable_rereads_discarded_bytes() {
        let mut buf = ReadBuffer::new(Box::new(Cursor::new(ramp(256))), 16);

        assert_eq!(buf.bytes(100, 2).unwrap(), &[100, 101]);

        buf.discard_before(120);
        assert_eq!(buf.buffered_len(), 0);

        assert_eq!(buf.bytes(10, 2).unwrap(), &[10, 11]);
        assert_eq!(buf.bytes(250, 4).unwrap(), &[250, 251, 252, 253]);
    }

    #[test]
    fn verify_forward_only_window() {
        let source = ReadOnlySource::new(Cursor::new(ramp(256)));
        let mut buf = ReadBuffer::new(Box::new(source), 16);

        assert_eq!(buf.bytes(8, 2).unwrap(), &[8, 9]);

        buf.discard_before(8);
        assert_eq!(buf.bytes(8, 1).unwrap(), &[8]);

        match buf.bytes(4, 1) {
            Err(Error::SeekError(SeekErrorKind::ForwardOnly)) => (),
            _ => panic!("expected a forward-only seek error"),
        }

        // Discarding past the window skips the source forward.
        buf.discard_before(200);
        assert_eq!(buf.buffered_len(), 0);
        assert_eq!(buf.bytes(200, 2).unwrap(), &[200, 201]);

        buf.discard_before(1000);
        assert!(buf.bytes(1000, 2).unwrap().is_empty());
    }
}
