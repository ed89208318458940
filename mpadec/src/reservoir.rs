// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mpadec_core::errors::{decode_error, Result};

use log::warn;

/// The capacity of the reservoir in bytes. A `main_data_begin` offset is at most 511 bytes, and
/// the largest free format frame fits in the remainder.
const RESERVOIR_LEN: usize = 4096;

/// `BitReservoir` implements the bit reservoir mechanism for Layer III main data. Since frames
/// have a deterministic length based on the bit-rate, low-complexity portions of the audio may not
/// need every byte allocated to the frame. The bit reservoir allows these unused portions of
/// frames to be used by future frames.
///
/// The reservoir never holds more than the unread tail of the previous frames plus the main data
/// of the current frame.
pub struct BitReservoir {
    buf: Box<[u8]>,
    len: usize,
    consumed: usize,
}

impl BitReservoir {
    pub fn new() -> Self {
        BitReservoir { buf: vec![0u8; RESERVOIR_LEN].into_boxed_slice(), len: 0, consumed: 0 }
    }

    /// Appends the main data of a frame to the reservoir, keeping the last `main_data_begin`
    /// bytes of previous frames in front of it.
    ///
    /// Returns `false` if the reservoir does not hold `main_data_begin` unread bytes. The frame
    /// cannot be decoded in that case, but its main data is still kept for the frames following
    /// it.
    pub fn fill(&mut self, main_data: &[u8], main_data_begin: usize) -> Result<bool> {
        let main_data_len = main_data.len();

        let main_data_end = main_data_begin + main_data_len;

        if main_data_end > self.buf.len() {
            self.clear();
            return decode_error("mpa: invalid main_data length, will exceed reservoir buffer");
        }

        let unread = self.len - self.consumed;

        if main_data_begin <= unread {
            // Move the re-used bytes to the front of the reservoir, then append the new data.
            self.buf.copy_within(self.len - main_data_begin..self.len, 0);
            self.buf[main_data_begin..main_data_end].copy_from_slice(main_data);
            self.len = main_data_end;
            self.consumed = 0;

            Ok(true)
        }
        else {
            // Typical after a seek, or when starting in the middle of a stream. Keep everything
            // unread so that the next frame may still reference it.
            self.buf.copy_within(self.len - unread..self.len, 0);
            self.buf[unread..unread + main_data_len].copy_from_slice(main_data);
            self.len = unread + main_data_len;
            self.consumed = 0;

            warn!("mpa: invalid main_data_begin, underflow by {} bytes", main_data_begin - unread);

            Ok(false)
        }
    }

    /// Marks `len` bytes of main data as read.
    pub fn consume(&mut self, len: usize) {
        self.consumed = self.len.min(self.consumed + len);
    }

    /// Gets the unread main data.
    pub fn bytes_ref(&self) -> &[u8] {
        &self.buf[self.consumed..self.len]
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.consumed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::BitReservoir;

    #[test]
    fn verify_fill_without_history() {
        let mut reservoir = BitReservoir::new();

        assert!(reservoir.fill(&[1, 2, 3, 4], 0).unwrap());
        assert_eq!(reservoir.bytes_ref(), &[1, 2, 3, 4]);
    }

    #[test]
    fn verify_fill_borrows_previous_tail() {
        let mut reservoir = BitReservoir::new();

        assert!(reservoir.fill(&[1, 2, 3, 4, 5], 0).unwrap());
        // The first frame only used 3 bytes.
        reservoir.consume(3);

        assert!(reservoir.fill(&[6, 7], 2).unwrap());
        assert_eq!(reservoir.bytes_ref(), &[4, 5, 6, 7]);

        // Borrowing less than what is unread skips the stale bytes.
        reservoir.consume(3);
        assert!(reservoir.fill(&[8], 1).unwrap());
        assert_eq!(reservoir.bytes_ref(), &[7, 8]);
    }

    #[test]
    fn verify_fill_underflow() {
        let mut reservoir = BitReservoir::new();

        assert!(!reservoir.fill(&[1, 2, 3], 10).unwrap());

        // The following frame may borrow the data of the underflowed frame.
        assert!(reservoir.fill(&[4], 3).unwrap());
        assert_eq!(reservoir.bytes_ref(), &[1, 2, 3, 4]);
    }

    #[test]
    fn verify_consume_is_bounded() {
        let mut reservoir = BitReservoir::new();

        assert!(reservoir.fill(&[1, 2], 0).unwrap());
        reservoir.consume(100);
        assert!(reservoir.bytes_ref().is_empty());

        // Fully consumed data cannot be borrowed.
        assert!(!reservoir.fill(&[3], 1).unwrap());
    }

    #[test]
    fn verify_fill_overflow_is_an_error() {
        let mut reservoir = BitReservoir::new();

        let big = vec![0u8; 4000];
        assert!(reservoir.fill(&big, 0).unwrap());
        assert!(reservoir.fill(&big, 200).is_err());

        // The reservoir is discarded after an error.
        assert!(reservoir.bytes_ref().is_empty());
    }

    #[test]
    fn verify_clear() {
        let mut reservoir = BitReservoir::new();

        assert!(reservoir.fill(&[1, 2, 3], 0).unwrap());
        reservoir.clear();
        assert!(reservoir.bytes_ref().is_empty());
        assert!(!reservoir.fill(&[4], 1).unwrap());
    }
}
