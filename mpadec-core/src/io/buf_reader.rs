// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io;

use super::ReadBytes;

#[inline(always)]
fn underrun_error<T>() -> io::Result<T> {
    Err(io::Error::new(io::ErrorKind::UnexpectedEof, "buffer underrun"))
}

/// A `BufReader` reads bytes from a byte buffer, such as a complete frame.
pub struct BufReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BufReader<'a> {
    /// Instantiate a new `BufReader` with a given byte buffer.
    pub fn new(buf: &'a [u8]) -> Self {
        BufReader { buf, pos: 0 }
    }

    /// Returns a reference to the remaining bytes in the buffer and advances the stream to the end.
    pub fn read_buf_bytes_available_ref(&mut self) -> &'a [u8] {
        let pos = self.pos;
        self.pos = self.buf.len();
        &self.buf[pos..]
    }

    /// Gets the number of unread bytes.
    #[inline(always)]
    pub fn bytes_available(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Takes the next `N` bytes.
    #[inline(always)]
    fn take<const N: usize>(&mut self) -> io::Result<[u8; N]> {
        if self.bytes_available() < N {
            return underrun_error();
        }

        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        self.pos += N;

        Ok(bytes)
    }
}

impl ReadBytes for BufReader<'_> {
    #[inline(always)]
    fn read_byte(&mut self) -> io::Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    #[inline(always)]
    fn read_double_bytes(&mut self) -> io::Result<[u8; 2]> {
        self.take()
    }

    #[inline(always)]
    fn read_quad_bytes(&mut self) -> io::Result<[u8; 4]> {
        self.take()
    }

    fn ignore_bytes(&mut self, count: u64) -> io::Result<()> {
        if (self.bytes_available() as u64) < count {
            return underrun_error();
        }

        self.pos += count as usize;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BufReader, ReadBytes};

    #[test]
    fn verify_read_integers() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x01];
        let mut reader = BufReader::new(&data);

        assert_eq!(reader.read_be_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_byte().unwrap(), 0x56);
        assert_eq!(reader.read_be_u32().unwrap(), 0x789abcde);
        assert_eq!(reader.bytes_available(), 2);

        // A failed read consumes nothing.
        assert!(reader.read_be_u32().is_err());
        assert_eq!(reader.bytes_available(), 2);
    }

    #[test]
    fn verify_ignore_and_take_remainder() {
        let data = [1u8, 2, 3, 4, 5];
        let mut reader = BufReader::new(&data);

        reader.ignore_bytes(3).unwrap();
        assert!(reader.ignore_bytes(3).is_err());
        assert_eq!(reader.read_buf_bytes_available_ref(), &[4, 5]);
        assert_eq!(reader.bytes_available(), 0);
        assert!(reader.read_byte().is_err());
    }
}
