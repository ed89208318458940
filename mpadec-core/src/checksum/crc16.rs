// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::io::Monitor;

const POLY: u16 = 0x8005;

// Lookup table for the non-reflected polynomial 0x8005.
const CRC16_ANSI_TABLE: [u16; 256] = {
    let mut table = [0u16; 256];
    let mut i = 0u16;
    while i < 256 {
        let mut crc = i << 8;
        let mut j = 0;
        while j < 8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLY;
            }
            else {
                crc <<= 1;
            }
            j += 1;
        }
        table[i as usize] = crc;
        i += 1;
    }
    table
};

/// `Crc16Ansi` implements the CRC-16 algorithm using the ANSI polynomial (0x8005), processing
/// bits most-significant first and without reflection. This is the checksum protecting MPEG audio
/// frames, where the initial state is `0xffff`.
pub struct Crc16Ansi {
    state: u16,
}

impl Crc16Ansi {
    /// Instantiate a `Crc16Ansi` instance with an initial state.
    pub fn new(state: u16) -> Self {
        Crc16Ansi { state }
    }

    /// Returns the computed CRC.
    pub fn crc(&self) -> u16 {
        self.state
    }

    /// Processes the first `n_bits` bits of `buf`, most-significant bit first. Whole bytes are
    /// processed a byte at a time, and any trailing bits of the final partial byte individually.
    pub fn process_buf_bits(&mut self, buf: &[u8], n_bits: usize) {
        let n_bytes = n_bits >> 3;

        self.process_buf_bytes(&buf[..n_bytes]);

        let rem = n_bits & 0x7;

        if rem > 0 {
            let byte = buf[n_bytes];

            for i in 0..rem {
                let bit = u16::from(byte >> (7 - i)) & 1;
                let top = self.state >> 15;

                self.state <<= 1;

                if top ^ bit != 0 {
                    self.state ^= POLY;
                }
            }
        }
    }
}

impl Monitor for Crc16Ansi {
    #[inline(always)]
    fn process_byte(&mut self, byte: u8) {
        self.state =
            (self.state << 8) ^ CRC16_ANSI_TABLE[((self.state >> 8) as u8 ^ byte) as usize];
    }

    fn process_buf_bytes(&mut self, buf: &[u8]) {
        for &byte in buf {
            self.process_byte(byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECK: &[u8] = b"123456789";

    #[test]
    fn verify_crc16_ansi() {
        let mut crc = Crc16Ansi::new(0);
        crc.process_buf_bytes(CHECK);
        assert_eq!(crc.crc(), 0xfee8);

        let mut crc = Crc16Ansi::new(0xffff);
        crc.process_buf_bytes(CHECK);
        assert_eq!(crc.crc(), 0xaee7);
    }

    #[test]
    fn verify_crc16_ansi_double_bytes() {
        let mut a = Crc16Ansi::new(0xffff);
        a.process_double_bytes([0x12, 0x34]);

        let mut b = Crc16Ansi::new(0xffff);
        b.process_buf_bytes(&[0x12, 0x34]);

        assert_eq!(a.crc(), b.crc());
    }

    #[test]
    fn verify_crc16_ansi_partial_bits() {
        // Processing whole bytes bit-by-bit must agree with the lookup table.
        let mut bytewise = Crc16Ansi::new(0xffff);
        bytewise.process_buf_bytes(CHECK);

        let mut bitwise = Crc16Ansi::new(0xffff);
        bitwise.process_buf_bits(CHECK, 8 * CHECK.len());
        assert_eq!(bitwise.crc(), bytewise.crc());

        // 20 bits is two whole bytes followed by the top nibble of the third. The low nibble of
        // the third byte is not part of the message.
        let mut partial = Crc16Ansi::new(0xffff);
        partial.process_buf_bits(&[0xab, 0xcd, 0xe7], 20);

        let mut whole = Crc16Ansi::new(0xffff);
        whole.process_buf_bits(&[0xab, 0xcd, 0xe0], 20);

        assert_eq!(partial.crc(), whole.crc());

        let mut single = Crc16Ansi::new(0);
        single.process_buf_bits(&[0x80], 1);
        assert_eq!(single.crc(), POLY);
    }
}
