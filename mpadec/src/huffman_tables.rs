// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layer III Huffman code tables (ISO/IEC 11172-3 Annex B, Table B.7).
//!
//! Each table is flattened into a table-of-tables for `ReadBitsLtr::read_huffman`. Big-value
//! tables decode to `(x << 4) | y`. The count1 (quadruples) tables decode to the 4-bit value
//! `vwxy`.
//!
//! Tables 4 and 14 are not defined by the standard. Tables 17 through 23 reuse the codes of
//! table 16, and tables 25 through 31 reuse the codes of table 24, differing only in linbits.

use mpadec_core::io::huffman::{HuffmanTable, H8};
use mpadec_core::{jmp8, val8};

/// Table 0 codes nothing; every sample in a region using it is 0.
pub const HUFFMAN_TABLE_0: HuffmanTable<H8> = HuffmanTable {
    data: &[],
    n_init_bits: 0,
    n_table_bits: 0,
};

/// Table 1.
pub const HUFFMAN_TABLE_1: HuffmanTable<H8> = HuffmanTable {
    data: &[
        val8!(0x11, 3),    // 0: 0b000
        val8!(0x01, 3),    // 1: 0b001
        val8!(0x10, 2),    // 2: 0b010
        val8!(0x10, 2),    // 3: 0b011
        val8!(0x00, 1),    // 4: 0b100
        val8!(0x00, 1),    // 5: 0b101
        val8!(0x00, 1),    // 6: 0b110
        val8!(0x00, 1),    // 7: 0b111
    ],
    n_init_bits: 3,
    n_table_bits: 3,
};

/// Table 2.
pub const HUFFMAN_TABLE_2: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 1),      // 0: 0b00000
        val8!(0x12, 5),    // 1: 0b00001
        val8!(0x21, 5),    // 2: 0b00010
        val8!(0x20, 5),    // 3: 0b00011
        val8!(0x11, 3),    // 4: 0b00100
        val8!(0x11, 3),    // 5: 0b00101
        val8!(0x11, 3),    // 6: 0b00110
        val8!(0x11, 3),    // 7: 0b00111
        val8!(0x01, 3),    // 8: 0b01000
        val8!(0x01, 3),    // 9: 0b01001
        val8!(0x01, 3),    // 10: 0b01010
        val8!(0x01, 3),    // 11: 0b01011
        val8!(0x10, 3),    // 12: 0b01100
        val8!(0x10, 3),    // 13: 0b01101
        val8!(0x10, 3),    // 14: 0b01110
        val8!(0x10, 3),    // 15: 0b01111
        val8!(0x00, 1),    // 16: 0b10000
        val8!(0x00, 1),    // 17: 0b10001
        val8!(0x00, 1),    // 18: 0b10010
        val8!(0x00, 1),    // 19: 0b10011
        val8!(0x00, 1),    // 20: 0b10100
        val8!(0x00, 1),    // 21: 0b10101
        val8!(0x00, 1),    // 22: 0b10110
        val8!(0x00, 1),    // 23: 0b10111
        val8!(0x00, 1),    // 24: 0b11000
        val8!(0x00, 1),    // 25: 0b11001
        val8!(0x00, 1),    // 26: 0b11010
        val8!(0x00, 1),    // 27: 0b11011
        val8!(0x00, 1),    // 28: 0b11100
        val8!(0x00, 1),    // 29: 0b11101
        val8!(0x00, 1),    // 30: 0b11110
        val8!(0x00, 1),    // 31: 0b11111
        val8!(0x22, 1),    // 32: 0b000000
        val8!(0x02, 1),    // 33: 0b000001
    ],
    n_init_bits: 5,
    n_table_bits: 6,
};

/// Table 3.
pub const HUFFMAN_TABLE_3: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 1),      // 0: 0b00000
        val8!(0x12, 5),    // 1: 0b00001
        val8!(0x21, 5),    // 2: 0b00010
        val8!(0x20, 5),    // 3: 0b00011
        val8!(0x10, 3),    // 4: 0b00100
        val8!(0x10, 3),    // 5: 0b00101
        val8!(0x10, 3),    // 6: 0b00110
        val8!(0x10, 3),    // 7: 0b00111
        val8!(0x11, 2),    // 8: 0b01000
        val8!(0x11, 2),    // 9: 0b01001
        val8!(0x11, 2),    // 10: 0b01010
        val8!(0x11, 2),    // 11: 0b01011
        val8!(0x11, 2),    // 12: 0b01100
        val8!(0x11, 2),    // 13: 0b01101
        val8!(0x11, 2),    // 14: 0b01110
        val8!(0x11, 2),    // 15: 0b01111
        val8!(0x01, 2),    // 16: 0b10000
        val8!(0x01, 2),    // 17: 0b10001
        val8!(0x01, 2),    // 18: 0b10010
        val8!(0x01, 2),    // 19: 0b10011
        val8!(0x01, 2),    // 20: 0b10100
        val8!(0x01, 2),    // 21: 0b10101
        val8!(0x01, 2),    // 22: 0b10110
        val8!(0x01, 2),    // 23: 0b10111
        val8!(0x00, 2),    // 24: 0b11000
        val8!(0x00, 2),    // 25: 0b11001
        val8!(0x00, 2),    // 26: 0b11010
        val8!(0x00, 2),    // 27: 0b11011
        val8!(0x00, 2),    // 28: 0b11100
        val8!(0x00, 2),    // 29: 0b11101
        val8!(0x00, 2),    // 30: 0b11110
        val8!(0x00, 2),    // 31: 0b11111
        val8!(0x22, 1),    // 32: 0b000000
        val8!(0x02, 1),    // 33: 0b000001
    ],
    n_init_bits: 5,
    n_table_bits: 6,
};

/// Table 5.
pub const HUFFMAN_TABLE_5: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 3),      // 0: 0b00000
        jmp8!(40, 2),      // 1: 0b00001
        jmp8!(44, 1),      // 2: 0b00010
        jmp8!(46, 1),      // 3: 0b00011
        val8!(0x11, 3),    // 4: 0b00100
        val8!(0x11, 3),    // 5: 0b00101
        val8!(0x11, 3),    // 6: 0b00110
        val8!(0x11, 3),    // 7: 0b00111
        val8!(0x01, 3),    // 8: 0b01000
        val8!(0x01, 3),    // 9: 0b01001
        val8!(0x01, 3),    // 10: 0b01010
        val8!(0x01, 3),    // 11: 0b01011
        val8!(0x10, 3),    // 12: 0b01100
        val8!(0x10, 3),    // 13: 0b01101
        val8!(0x10, 3),    // 14: 0b01110
        val8!(0x10, 3),    // 15: 0b01111
        val8!(0x00, 1),    // 16: 0b10000
        val8!(0x00, 1),    // 17: 0b10001
        val8!(0x00, 1),    // 18: 0b10010
        val8!(0x00, 1),    // 19: 0b10011
        val8!(0x00, 1),    // 20: 0b10100
        val8!(0x00, 1),    // 21: 0b10101
        val8!(0x00, 1),    // 22: 0b10110
        val8!(0x00, 1),    // 23: 0b10111
        val8!(0x00, 1),    // 24: 0b11000
        val8!(0x00, 1),    // 25: 0b11001
        val8!(0x00, 1),    // 26: 0b11010
        val8!(0x00, 1),    // 27: 0b11011
        val8!(0x00, 1),    // 28: 0b11100
        val8!(0x00, 1),    // 29: 0b11101
        val8!(0x00, 1),    // 30: 0b11110
        val8!(0x00, 1),    // 31: 0b11111
        val8!(0x33, 3),    // 32: 0b00000000
        val8!(0x23, 3),    // 33: 0b00000001
        val8!(0x32, 2),    // 34: 0b00000010
        val8!(0x32, 2),    // 35: 0b00000011
        val8!(0x31, 1),    // 36: 0b00000100
        val8!(0x31, 1),    // 37: 0b00000101
        val8!(0x31, 1),    // 38: 0b00000110
        val8!(0x31, 1),    // 39: 0b00000111
        val8!(0x13, 2),    // 40: 0b0000100
        val8!(0x03, 2),    // 41: 0b0000101
        val8!(0x30, 2),    // 42: 0b0000110
        val8!(0x22, 2),    // 43: 0b0000111
        val8!(0x12, 1),    // 44: 0b000100
        val8!(0x21, 1),    // 45: 0b000101
        val8!(0x02, 1),    // 46: 0b000110
        val8!(0x20, 1),    // 47: 0b000111
    ],
    n_init_bits: 5,
    n_table_bits: 8,
};

/// Table 6.
pub const HUFFMAN_TABLE_6: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 2),      // 0: 0b00000
        jmp8!(36, 1),      // 1: 0b00001
        val8!(0x13, 5),    // 2: 0b00010
        val8!(0x31, 5),    // 3: 0b00011
        val8!(0x22, 5),    // 4: 0b00100
        val8!(0x02, 5),    // 5: 0b00101
        val8!(0x12, 4),    // 6: 0b00110
        val8!(0x12, 4),    // 7: 0b00111
        val8!(0x21, 4),    // 8: 0b01000
        val8!(0x21, 4),    // 9: 0b01001
        val8!(0x20, 4),    // 10: 0b01010
        val8!(0x20, 4),    // 11: 0b01011
        val8!(0x01, 3),    // 12: 0b01100
        val8!(0x01, 3),    // 13: 0b01101
        val8!(0x01, 3),    // 14: 0b01110
        val8!(0x01, 3),    // 15: 0b01111
        val8!(0x11, 2),    // 16: 0b10000
        val8!(0x11, 2),    // 17: 0b10001
        val8!(0x11, 2),    // 18: 0b10010
        val8!(0x11, 2),    // 19: 0b10011
        val8!(0x11, 2),    // 20: 0b10100
        val8!(0x11, 2),    // 21: 0b10101
        val8!(0x11, 2),    // 22: 0b10110
        val8!(0x11, 2),    // 23: 0b10111
        val8!(0x10, 3),    // 24: 0b11000
        val8!(0x10, 3),    // 25: 0b11001
        val8!(0x10, 3),    // 26: 0b11010
        val8!(0x10, 3),    // 27: 0b11011
        val8!(0x00, 3),    // 28: 0b11100
        val8!(0x00, 3),    // 29: 0b11101
        val8!(0x00, 3),    // 30: 0b11110
        val8!(0x00, 3),    // 31: 0b11111
        val8!(0x33, 2),    // 32: 0b0000000
        val8!(0x03, 2),    // 33: 0b0000001
        val8!(0x23, 1),    // 34: 0b0000010
        val8!(0x23, 1),    // 35: 0b0000011
        val8!(0x32, 1),    // 36: 0b000010
        val8!(0x30, 1),    // 37: 0b000011
    ],
    n_init_bits: 5,
    n_table_bits: 7,
};

/// Table 7.
pub const HUFFMAN_TABLE_7: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 5),      // 0: 0b00000
        jmp8!(64, 3),      // 1: 0b00001
        jmp8!(72, 3),      // 2: 0b00010
        jmp8!(80, 2),      // 3: 0b00011
        val8!(0x21, 5),    // 4: 0b00100
        jmp8!(84, 1),      // 5: 0b00101
        val8!(0x11, 4),    // 6: 0b00110
        val8!(0x11, 4),    // 7: 0b00111
        val8!(0x01, 3),    // 8: 0b01000
        val8!(0x01, 3),    // 9: 0b01001
        val8!(0x01, 3),    // 10: 0b01010
        val8!(0x01, 3),    // 11: 0b01011
        val8!(0x10, 3),    // 12: 0b01100
        val8!(0x10, 3),    // 13: 0b01101
        val8!(0x10, 3),    // 14: 0b01110
        val8!(0x10, 3),    // 15: 0b01111
        val8!(0x00, 1),    // 16: 0b10000
        val8!(0x00, 1),    // 17: 0b10001
        val8!(0x00, 1),    // 18: 0b10010
        val8!(0x00, 1),    // 19: 0b10011
        val8!(0x00, 1),    // 20: 0b10100
        val8!(0x00, 1),    // 21: 0b10101
        val8!(0x00, 1),    // 22: 0b10110
        val8!(0x00, 1),    // 23: 0b10111
        val8!(0x00, 1),    // 24: 0b11000
        val8!(0x00, 1),    // 25: 0b11001
        val8!(0x00, 1),    // 26: 0b11010
        val8!(0x00, 1),    // 27: 0b11011
        val8!(0x00, 1),    // 28: 0b11100
        val8!(0x00, 1),    // 29: 0b11101
        val8!(0x00, 1),    // 30: 0b11110
        val8!(0x00, 1),    // 31: 0b11111
        val8!(0x55, 5),    // 32: 0b0000000000
        val8!(0x45, 5),    // 33: 0b0000000001
        val8!(0x54, 5),    // 34: 0b0000000010
        val8!(0x53, 5),    // 35: 0b0000000011
        val8!(0x35, 4),    // 36: 0b0000000100
        val8!(0x35, 4),    // 37: 0b0000000101
        val8!(0x44, 4),    // 38: 0b0000000110
        val8!(0x44, 4),    // 39: 0b0000000111
        val8!(0x25, 4),    // 40: 0b0000001000
        val8!(0x25, 4),    // 41: 0b0000001001
        val8!(0x52, 4),    // 42: 0b0000001010
        val8!(0x52, 4),    // 43: 0b0000001011
        val8!(0x15, 3),    // 44: 0b0000001100
        val8!(0x15, 3),    // 45: 0b0000001101
        val8!(0x15, 3),    // 46: 0b0000001110
        val8!(0x15, 3),    // 47: 0b0000001111
        val8!(0x51, 3),    // 48: 0b0000010000
        val8!(0x51, 3),    // 49: 0b0000010001
        val8!(0x51, 3),    // 50: 0b0000010010
        val8!(0x51, 3),    // 51: 0b0000010011
        val8!(0x05, 4),    // 52: 0b0000010100
        val8!(0x05, 4),    // 53: 0b0000010101
        val8!(0x34, 4),    // 54: 0b0000010110
        val8!(0x34, 4),    // 55: 0b0000010111
        val8!(0x50, 3),    // 56: 0b0000011000
        val8!(0x50, 3),    // 57: 0b0000011001
        val8!(0x50, 3),    // 58: 0b0000011010
        val8!(0x50, 3),    // 59: 0b0000011011
        val8!(0x43, 4),    // 60: 0b0000011100
        val8!(0x43, 4),    // 61: 0b0000011101
        val8!(0x33, 4),    // 62: 0b0000011110
        val8!(0x33, 4),    // 63: 0b0000011111
        val8!(0x24, 3),    // 64: 0b00001000
        val8!(0x42, 3),    // 65: 0b00001001
        val8!(0x14, 2),    // 66: 0b00001010
        val8!(0x14, 2),    // 67: 0b00001011
        val8!(0x41, 2),    // 68: 0b00001100
        val8!(0x41, 2),    // 69: 0b00001101
        val8!(0x40, 2),    // 70: 0b00001110
        val8!(0x40, 2),    // 71: 0b00001111
        val8!(0x04, 3),    // 72: 0b00010000
        val8!(0x23, 3),    // 73: 0b00010001
        val8!(0x32, 3),    // 74: 0b00010010
        val8!(0x03, 3),    // 75: 0b00010011
        val8!(0x13, 2),    // 76: 0b00010100
        val8!(0x13, 2),    // 77: 0b00010101
        val8!(0x31, 2),    // 78: 0b00010110
        val8!(0x31, 2),    // 79: 0b00010111
        val8!(0x30, 2),    // 80: 0b0001100
        val8!(0x22, 2),    // 81: 0b0001101
        val8!(0x12, 1),    // 82: 0b0001110
        val8!(0x12, 1),    // 83: 0b0001111
        val8!(0x02, 1),    // 84: 0b001010
        val8!(0x20, 1),    // 85: 0b001011
    ],
    n_init_bits: 5,
    n_table_bits: 10,
};

/// Table 8.
pub const HUFFMAN_TABLE_8: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 6),      // 0: 0b00000
        jmp8!(96, 3),      // 1: 0b00001
        jmp8!(104, 3),     // 2: 0b00010
        jmp8!(112, 1),     // 3: 0b00011
        val8!(0x12, 4),    // 4: 0b00100
        val8!(0x12, 4),    // 5: 0b00101
        val8!(0x21, 4),    // 6: 0b00110
        val8!(0x21, 4),    // 7: 0b00111
        val8!(0x11, 2),    // 8: 0b01000
        val8!(0x11, 2),    // 9: 0b01001
        val8!(0x11, 2),    // 10: 0b01010
        val8!(0x11, 2),    // 11: 0b01011
        val8!(0x11, 2),    // 12: 0b01100
        val8!(0x11, 2),    // 13: 0b01101
        val8!(0x11, 2),    // 14: 0b01110
        val8!(0x11, 2),    // 15: 0b01111
        val8!(0x01, 3),    // 16: 0b10000
        val8!(0x01, 3),    // 17: 0b10001
        val8!(0x01, 3),    // 18: 0b10010
        val8!(0x01, 3),    // 19: 0b10011
        val8!(0x10, 3),    // 20: 0b10100
        val8!(0x10, 3),    // 21: 0b10101
        val8!(0x10, 3),    // 22: 0b10110
        val8!(0x10, 3),    // 23: 0b10111
        val8!(0x00, 2),    // 24: 0b11000
        val8!(0x00, 2),    // 25: 0b11001
        val8!(0x00, 2),    // 26: 0b11010
        val8!(0x00, 2),    // 27: 0b11011
        val8!(0x00, 2),    // 28: 0b11100
        val8!(0x00, 2),    // 29: 0b11101
        val8!(0x00, 2),    // 30: 0b11110
        val8!(0x00, 2),    // 31: 0b11111
        val8!(0x55, 6),    // 32: 0b00000000000
        val8!(0x54, 6),    // 33: 0b00000000001
        val8!(0x45, 5),    // 34: 0b00000000010
        val8!(0x45, 5),    // 35: 0b00000000011
        val8!(0x53, 4),    // 36: 0b00000000100
        val8!(0x53, 4),    // 37: 0b00000000101
        val8!(0x53, 4),    // 38: 0b00000000110
        val8!(0x53, 4),    // 39: 0b00000000111
        val8!(0x35, 5),    // 40: 0b00000001000
        val8!(0x35, 5),    // 41: 0b00000001001
        val8!(0x44, 5),    // 42: 0b00000001010
        val8!(0x44, 5),    // 43: 0b00000001011
        val8!(0x25, 4),    // 44: 0b00000001100
        val8!(0x25, 4),    // 45: 0b00000001101
        val8!(0x25, 4),    // 46: 0b00000001110
        val8!(0x25, 4),    // 47: 0b00000001111
        val8!(0x52, 4),    // 48: 0b00000010000
        val8!(0x52, 4),    // 49: 0b00000010001
        val8!(0x52, 4),    // 50: 0b00000010010
        val8!(0x52, 4),    // 51: 0b00000010011
        val8!(0x05, 4),    // 52: 0b00000010100
        val8!(0x05, 4),    // 53: 0b00000010101
        val8!(0x05, 4),    // 54: 0b00000010110
        val8!(0x05, 4),    // 55: 0b00000010111
        val8!(0x15, 3),    // 56: 0b00000011000
        val8!(0x15, 3),    // 57: 0b00000011001
        val8!(0x15, 3),    // 58: 0b00000011010
        val8!(0x15, 3),    // 59: 0b00000011011
        val8!(0x15, 3),    // 60: 0b00000011100
        val8!(0x15, 3),    // 61: 0b00000011101
        val8!(0x15, 3),    // 62: 0b00000011110
        val8!(0x15, 3),    // 63: 0b00000011111
        val8!(0x51, 3),    // 64: 0b00000100000
        val8!(0x51, 3),    // 65: 0b00000100001
        val8!(0x51, 3),    // 66: 0b00000100010
        val8!(0x51, 3),    // 67: 0b00000100011
        val8!(0x51, 3),    // 68: 0b00000100100
        val8!(0x51, 3),    // 69: 0b00000100101
        val8!(0x51, 3),    // 70: 0b00000100110
        val8!(0x51, 3),    // 71: 0b00000100111
        val8!(0x34, 4),    // 72: 0b00000101000
        val8!(0x34, 4),    // 73: 0b00000101001
        val8!(0x34, 4),    // 74: 0b00000101010
        val8!(0x34, 4),    // 75: 0b00000101011
        val8!(0x43, 4),    // 76: 0b00000101100
        val8!(0x43, 4),    // 77: 0b00000101101
        val8!(0x43, 4),    // 78: 0b00000101110
        val8!(0x43, 4),    // 79: 0b00000101111
        val8!(0x50, 4),    // 80: 0b00000110000
        val8!(0x50, 4),    // 81: 0b00000110001
        val8!(0x50, 4),    // 82: 0b00000110010
        val8!(0x50, 4),    // 83: 0b00000110011
        val8!(0x33, 4),    // 84: 0b00000110100
        val8!(0x33, 4),    // 85: 0b00000110101
        val8!(0x33, 4),    // 86: 0b00000110110
        val8!(0x33, 4),    // 87: 0b00000110111
        val8!(0x24, 3),    // 88: 0b00000111000
        val8!(0x24, 3),    // 89: 0b00000111001
        val8!(0x24, 3),    // 90: 0b00000111010
        val8!(0x24, 3),    // 91: 0b00000111011
        val8!(0x24, 3),    // 92: 0b00000111100
        val8!(0x24, 3),    // 93: 0b00000111101
        val8!(0x24, 3),    // 94: 0b00000111110
        val8!(0x24, 3),    // 95: 0b00000111111
        val8!(0x42, 3),    // 96: 0b00001000
        val8!(0x14, 3),    // 97: 0b00001001
        val8!(0x41, 2),    // 98: 0b00001010
        val8!(0x41, 2),    // 99: 0b00001011
        val8!(0x04, 3),    // 100: 0b00001100
        val8!(0x40, 3),    // 101: 0b00001101
        val8!(0x23, 3),    // 102: 0b00001110
        val8!(0x32, 3),    // 103: 0b00001111
        val8!(0x13, 3),    // 104: 0b00010000
        val8!(0x31, 3),    // 105: 0b00010001
        val8!(0x03, 3),    // 106: 0b00010010
        val8!(0x30, 3),    // 107: 0b00010011
        val8!(0x22, 1),    // 108: 0b00010100
        val8!(0x22, 1),    // 109: 0b00010101
        val8!(0x22, 1),    // 110: 0b00010110
        val8!(0x22, 1),    // 111: 0b00010111
        val8!(0x02, 1),    // 112: 0b000110
        val8!(0x20, 1),    // 113: 0b000111
    ],
    n_init_bits: 5,
    n_table_bits: 11,
};

/// Table 9.
pub const HUFFMAN_TABLE_9: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 4),      // 0: 0b00000
        jmp8!(48, 3),      // 1: 0b00001
        jmp8!(56, 2),      // 2: 0b00010
        jmp8!(60, 1),      // 3: 0b00011
        jmp8!(62, 1),      // 4: 0b00100
        val8!(0x13, 5),    // 5: 0b00101
        val8!(0x31, 5),    // 6: 0b00110
        jmp8!(64, 1),      // 7: 0b00111
        val8!(0x22, 5),    // 8: 0b01000
        val8!(0x02, 5),    // 9: 0b01001
        val8!(0x12, 4),    // 10: 0b01010
        val8!(0x12, 4),    // 11: 0b01011
        val8!(0x21, 4),    // 12: 0b01100
        val8!(0x21, 4),    // 13: 0b01101
        val8!(0x20, 4),    // 14: 0b01110
        val8!(0x20, 4),    // 15: 0b01111
        val8!(0x11, 3),    // 16: 0b10000
        val8!(0x11, 3),    // 17: 0b10001
        val8!(0x11, 3),    // 18: 0b10010
        val8!(0x11, 3),    // 19: 0b10011
        val8!(0x01, 3),    // 20: 0b10100
        val8!(0x01, 3),    // 21: 0b10101
        val8!(0x01, 3),    // 22: 0b10110
        val8!(0x01, 3),    // 23: 0b10111
        val8!(0x10, 3),    // 24: 0b11000
        val8!(0x10, 3),    // 25: 0b11001
        val8!(0x10, 3),    // 26: 0b11010
        val8!(0x10, 3),    // 27: 0b11011
        val8!(0x00, 3),    // 28: 0b11100
        val8!(0x00, 3),    // 29: 0b11101
        val8!(0x00, 3),    // 30: 0b11110
        val8!(0x00, 3),    // 31: 0b11111
        val8!(0x55, 4),    // 32: 0b000000000
        val8!(0x45, 4),    // 33: 0b000000001
        val8!(0x35, 3),    // 34: 0b000000010
        val8!(0x35, 3),    // 35: 0b000000011
        val8!(0x53, 3),    // 36: 0b000000100
        val8!(0x53, 3),    // 37: 0b000000101
        val8!(0x54, 4),    // 38: 0b000000110
        val8!(0x05, 4),    // 39: 0b000000111
        val8!(0x44, 3),    // 40: 0b000001000
        val8!(0x44, 3),    // 41: 0b000001001
        val8!(0x25, 3),    // 42: 0b000001010
        val8!(0x25, 3),    // 43: 0b000001011
        val8!(0x52, 3),    // 44: 0b000001100
        val8!(0x52, 3),    // 45: 0b000001101
        val8!(0x15, 3),    // 46: 0b000001110
        val8!(0x15, 3),    // 47: 0b000001111
        val8!(0x51, 2),    // 48: 0b00001000
        val8!(0x51, 2),    // 49: 0b00001001
        val8!(0x34, 2),    // 50: 0b00001010
        val8!(0x34, 2),    // 51: 0b00001011
        val8!(0x43, 2),    // 52: 0b00001100
        val8!(0x43, 2),    // 53: 0b00001101
        val8!(0x50, 3),    // 54: 0b00001110
        val8!(0x04, 3),    // 55: 0b00001111
        val8!(0x24, 2),    // 56: 0b0001000
        val8!(0x42, 2),    // 57: 0b0001001
        val8!(0x33, 2),    // 58: 0b0001010
        val8!(0x40, 2),    // 59: 0b0001011
        val8!(0x14, 1),    // 60: 0b000110
        val8!(0x41, 1),    // 61: 0b000111
        val8!(0x23, 1),    // 62: 0b001000
        val8!(0x32, 1),    // 63: 0b001001
        val8!(0x03, 1),    // 64: 0b001110
        val8!(0x30, 1),    // 65: 0b001111
    ],
    n_init_bits: 5,
    n_table_bits: 9,
};

/// Table 10.
pub const HUFFMAN_TABLE_10: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 6),      // 0: 0b00000
        jmp8!(96, 5),      // 1: 0b00001
        jmp8!(128, 4),     // 2: 0b00010
        jmp8!(144, 2),     // 3: 0b00011
        jmp8!(148, 1),     // 4: 0b00100
        jmp8!(150, 1),     // 5: 0b00101
        val8!(0x11, 4),    // 6: 0b00110
        val8!(0x11, 4),    // 7: 0b00111
        val8!(0x01, 3),    // 8: 0b01000
        val8!(0x01, 3),    // 9: 0b01001
        val8!(0x01, 3),    // 10: 0b01010
        val8!(0x01, 3),    // 11: 0b01011
        val8!(0x10, 3),    // 12: 0b01100
        val8!(0x10, 3),    // 13: 0b01101
        val8!(0x10, 3),    // 14: 0b01110
        val8!(0x10, 3),    // 15: 0b01111
        val8!(0x00, 1),    // 16: 0b10000
        val8!(0x00, 1),    // 17: 0b10001
        val8!(0x00, 1),    // 18: 0b10010
        val8!(0x00, 1),    // 19: 0b10011
        val8!(0x00, 1),    // 20: 0b10100
        val8!(0x00, 1),    // 21: 0b10101
        val8!(0x00, 1),    // 22: 0b10110
        val8!(0x00, 1),    // 23: 0b10111
        val8!(0x00, 1),    // 24: 0b11000
        val8!(0x00, 1),    // 25: 0b11001
        val8!(0x00, 1),    // 26: 0b11010
        val8!(0x00, 1),    // 27: 0b11011
        val8!(0x00, 1),    // 28: 0b11100
        val8!(0x00, 1),    // 29: 0b11101
        val8!(0x00, 1),    // 30: 0b11110
        val8!(0x00, 1),    // 31: 0b11111
        val8!(0x77, 6),    // 32: 0b00000000000
        val8!(0x67, 6),    // 33: 0b00000000001
        val8!(0x76, 6),    // 34: 0b00000000010
        val8!(0x57, 6),    // 35: 0b00000000011
        val8!(0x75, 6),    // 36: 0b00000000100
        val8!(0x66, 6),    // 37: 0b00000000101
        val8!(0x47, 5),    // 38: 0b00000000110
        val8!(0x47, 5),    // 39: 0b00000000111
        val8!(0x74, 5),    // 40: 0b00000001000
        val8!(0x74, 5),    // 41: 0b00000001001
        val8!(0x56, 5),    // 42: 0b00000001010
        val8!(0x56, 5),    // 43: 0b00000001011
        val8!(0x65, 5),    // 44: 0b00000001100
        val8!(0x65, 5),    // 45: 0b00000001101
        val8!(0x37, 5),    // 46: 0b00000001110
        val8!(0x37, 5),    // 47: 0b00000001111
        val8!(0x73, 5),    // 48: 0b00000010000
        val8!(0x73, 5),    // 49: 0b00000010001
        val8!(0x46, 5),    // 50: 0b00000010010
        val8!(0x46, 5),    // 51: 0b00000010011
        val8!(0x55, 6),    // 52: 0b00000010100
        val8!(0x54, 6),    // 53: 0b00000010101
        val8!(0x63, 5),    // 54: 0b00000010110
        val8!(0x63, 5),    // 55: 0b00000010111
        val8!(0x27, 4),    // 56: 0b00000011000
        val8!(0x27, 4),    // 57: 0b00000011001
        val8!(0x27, 4),    // 58: 0b00000011010
        val8!(0x27, 4),    // 59: 0b00000011011
        val8!(0x72, 4),    // 60: 0b00000011100
        val8!(0x72, 4),    // 61: 0b00000011101
        val8!(0x72, 4),    // 62: 0b00000011110
        val8!(0x72, 4),    // 63: 0b00000011111
        val8!(0x64, 5),    // 64: 0b00000100000
        val8!(0x64, 5),    // 65: 0b00000100001
        val8!(0x07, 5),    // 66: 0b00000100010
        val8!(0x07, 5),    // 67: 0b00000100011
        val8!(0x70, 4),    // 68: 0b00000100100
        val8!(0x70, 4),    // 69: 0b00000100101
        val8!(0x70, 4),    // 70: 0b00000100110
        val8!(0x70, 4),    // 71: 0b00000100111
        val8!(0x62, 4),    // 72: 0b00000101000
        val8!(0x62, 4),    // 73: 0b00000101001
        val8!(0x62, 4),    // 74: 0b00000101010
        val8!(0x62, 4),    // 75: 0b00000101011
        val8!(0x45, 5),    // 76: 0b00000101100
        val8!(0x45, 5),    // 77: 0b00000101101
        val8!(0x35, 5),    // 78: 0b00000101110
        val8!(0x35, 5),    // 79: 0b00000101111
        val8!(0x06, 4),    // 80: 0b00000110000
        val8!(0x06, 4),    // 81: 0b00000110001
        val8!(0x06, 4),    // 82: 0b00000110010
        val8!(0x06, 4),    // 83: 0b00000110011
        val8!(0x53, 5),    // 84: 0b00000110100
        val8!(0x53, 5),    // 85: 0b00000110101
        val8!(0x44, 5),    // 86: 0b00000110110
        val8!(0x44, 5),    // 87: 0b00000110111
        val8!(0x17, 3),    // 88: 0b00000111000
        val8!(0x17, 3),    // 89: 0b00000111001
        val8!(0x17, 3),    // 90: 0b00000111010
        val8!(0x17, 3),    // 91: 0b00000111011
        val8!(0x17, 3),    // 92: 0b00000111100
        val8!(0x17, 3),    // 93: 0b00000111101
        val8!(0x17, 3),    // 94: 0b00000111110
        val8!(0x17, 3),    // 95: 0b00000111111
        val8!(0x71, 3),    // 96: 0b0000100000
        val8!(0x71, 3),    // 97: 0b0000100001
        val8!(0x71, 3),    // 98: 0b0000100010
        val8!(0x71, 3),    // 99: 0b0000100011
        val8!(0x36, 4),    // 100: 0b0000100100
        val8!(0x36, 4),    // 101: 0b0000100101
        val8!(0x26, 4),    // 102: 0b0000100110
        val8!(0x26, 4),    // 103: 0b0000100111
        val8!(0x25, 5),    // 104: 0b0000101000
        val8!(0x52, 5),    // 105: 0b0000101001
        val8!(0x15, 4),    // 106: 0b0000101010
        val8!(0x15, 4),    // 107: 0b0000101011
        val8!(0x51, 4),    // 108: 0b0000101100
        val8!(0x51, 4),    // 109: 0b0000101101
        val8!(0x34, 5),    // 110: 0b0000101110
        val8!(0x43, 5),    // 111: 0b0000101111
        val8!(0x16, 3),    // 112: 0b0000110000
        val8!(0x16, 3),    // 113: 0b0000110001
        val8!(0x16, 3),    // 114: 0b0000110010
        val8!(0x16, 3),    // 115: 0b0000110011
        val8!(0x61, 3),    // 116: 0b0000110100
        val8!(0x61, 3),    // 117: 0b0000110101
        val8!(0x61, 3),    // 118: 0b0000110110
        val8!(0x61, 3),    // 119: 0b0000110111
        val8!(0x60, 3),    // 120: 0b0000111000
        val8!(0x60, 3),    // 121: 0b0000111001
        val8!(0x60, 3),    // 122: 0b0000111010
        val8!(0x60, 3),    // 123: 0b0000111011
        val8!(0x05, 4),    // 124: 0b0000111100
        val8!(0x05, 4),    // 125: 0b0000111101
        val8!(0x50, 4),    // 126: 0b0000111110
        val8!(0x50, 4),    // 127: 0b0000111111
        val8!(0x24, 4),    // 128: 0b000100000
        val8!(0x42, 4),    // 129: 0b000100001
        val8!(0x33, 4),    // 130: 0b000100010
        val8!(0x04, 4),    // 131: 0b000100011
        val8!(0x14, 3),    // 132: 0b000100100
        val8!(0x14, 3),    // 133: 0b000100101
        val8!(0x41, 3),    // 134: 0b000100110
        val8!(0x41, 3),    // 135: 0b000100111
        val8!(0x40, 3),    // 136: 0b000101000
        val8!(0x40, 3),    // 137: 0b000101001
        val8!(0x23, 3),    // 138: 0b000101010
        val8!(0x23, 3),    // 139: 0b000101011
        val8!(0x32, 3),    // 140: 0b000101100
        val8!(0x32, 3),    // 141: 0b000101101
        val8!(0x03, 3),    // 142: 0b000101110
        val8!(0x03, 3),    // 143: 0b000101111
        val8!(0x13, 2),    // 144: 0b0001100
        val8!(0x31, 2),    // 145: 0b0001101
        val8!(0x30, 2),    // 146: 0b0001110
        val8!(0x22, 2),    // 147: 0b0001111
        val8!(0x12, 1),    // 148: 0b001000
        val8!(0x21, 1),    // 149: 0b001001
        val8!(0x02, 1),    // 150: 0b001010
        val8!(0x20, 1),    // 151: 0b001011
    ],
    n_init_bits: 5,
    n_table_bits: 11,
};

/// Table 11.
pub const HUFFMAN_TABLE_11: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 6),      // 0: 0b00000
        jmp8!(96, 4),      // 1: 0b00001
        jmp8!(112, 4),     // 2: 0b00010
        jmp8!(128, 4),     // 3: 0b00011
        jmp8!(144, 3),     // 4: 0b00100
        jmp8!(152, 1),     // 5: 0b00101
        jmp8!(154, 2),     // 6: 0b00110
        val8!(0x21, 5),    // 7: 0b00111
        val8!(0x12, 4),    // 8: 0b01000
        val8!(0x12, 4),    // 9: 0b01001
        val8!(0x02, 5),    // 10: 0b01010
        val8!(0x20, 5),    // 11: 0b01011
        val8!(0x11, 3),    // 12: 0b01100
        val8!(0x11, 3),    // 13: 0b01101
        val8!(0x11, 3),    // 14: 0b01110
        val8!(0x11, 3),    // 15: 0b01111
        val8!(0x01, 3),    // 16: 0b10000
        val8!(0x01, 3),    // 17: 0b10001
        val8!(0x01, 3),    // 18: 0b10010
        val8!(0x01, 3),    // 19: 0b10011
        val8!(0x10, 3),    // 20: 0b10100
        val8!(0x10, 3),    // 21: 0b10101
        val8!(0x10, 3),    // 22: 0b10110
        val8!(0x10, 3),    // 23: 0b10111
        val8!(0x00, 2),    // 24: 0b11000
        val8!(0x00, 2),    // 25: 0b11001
        val8!(0x00, 2),    // 26: 0b11010
        val8!(0x00, 2),    // 27: 0b11011
        val8!(0x00, 2),    // 28: 0b11100
        val8!(0x00, 2),    // 29: 0b11101
        val8!(0x00, 2),    // 30: 0b11110
        val8!(0x00, 2),    // 31: 0b11111
        val8!(0x77, 5),    // 32: 0b00000000000
        val8!(0x77, 5),    // 33: 0b00000000001
        val8!(0x67, 5),    // 34: 0b00000000010
        val8!(0x67, 5),    // 35: 0b00000000011
        val8!(0x76, 5),    // 36: 0b00000000100
        val8!(0x76, 5),    // 37: 0b00000000101
        val8!(0x75, 5),    // 38: 0b00000000110
        val8!(0x75, 5),    // 39: 0b00000000111
        val8!(0x66, 5),    // 40: 0b00000001000
        val8!(0x66, 5),    // 41: 0b00000001001
        val8!(0x47, 5),    // 42: 0b00000001010
        val8!(0x47, 5),    // 43: 0b00000001011
        val8!(0x74, 5),    // 44: 0b00000001100
        val8!(0x74, 5),    // 45: 0b00000001101
        val8!(0x57, 6),    // 46: 0b00000001110
        val8!(0x55, 6),    // 47: 0b00000001111
        val8!(0x56, 5),    // 48: 0b00000010000
        val8!(0x56, 5),    // 49: 0b00000010001
        val8!(0x65, 5),    // 50: 0b00000010010
        val8!(0x65, 5),    // 51: 0b00000010011
        val8!(0x37, 4),    // 52: 0b00000010100
        val8!(0x37, 4),    // 53: 0b00000010101
        val8!(0x37, 4),    // 54: 0b00000010110
        val8!(0x37, 4),    // 55: 0b00000010111
        val8!(0x73, 4),    // 56: 0b00000011000
        val8!(0x73, 4),    // 57: 0b00000011001
        val8!(0x73, 4),    // 58: 0b00000011010
        val8!(0x73, 4),    // 59: 0b00000011011
        val8!(0x46, 4),    // 60: 0b00000011100
        val8!(0x46, 4),    // 61: 0b00000011101
        val8!(0x46, 4),    // 62: 0b00000011110
        val8!(0x46, 4),    // 63: 0b00000011111
        val8!(0x45, 5),    // 64: 0b00000100000
        val8!(0x45, 5),    // 65: 0b00000100001
        val8!(0x54, 5),    // 66: 0b00000100010
        val8!(0x54, 5),    // 67: 0b00000100011
        val8!(0x35, 5),    // 68: 0b00000100100
        val8!(0x35, 5),    // 69: 0b00000100101
        val8!(0x53, 5),    // 70: 0b00000100110
        val8!(0x53, 5),    // 71: 0b00000100111
        val8!(0x27, 3),    // 72: 0b00000101000
        val8!(0x27, 3),    // 73: 0b00000101001
        val8!(0x27, 3),    // 74: 0b00000101010
        val8!(0x27, 3),    // 75: 0b00000101011
        val8!(0x27, 3),    // 76: 0b00000101100
        val8!(0x27, 3),    // 77: 0b00000101101
        val8!(0x27, 3),    // 78: 0b00000101110
        val8!(0x27, 3),    // 79: 0b00000101111
        val8!(0x72, 3),    // 80: 0b00000110000
        val8!(0x72, 3),    // 81: 0b00000110001
        val8!(0x72, 3),    // 82: 0b00000110010
        val8!(0x72, 3),    // 83: 0b00000110011
        val8!(0x72, 3),    // 84: 0b00000110100
        val8!(0x72, 3),    // 85: 0b00000110101
        val8!(0x72, 3),    // 86: 0b00000110110
        val8!(0x72, 3),    // 87: 0b00000110111
        val8!(0x64, 4),    // 88: 0b00000111000
        val8!(0x64, 4),    // 89: 0b00000111001
        val8!(0x64, 4),    // 90: 0b00000111010
        val8!(0x64, 4),    // 91: 0b00000111011
        val8!(0x07, 4),    // 92: 0b00000111100
        val8!(0x07, 4),    // 93: 0b00000111101
        val8!(0x07, 4),    // 94: 0b00000111110
        val8!(0x07, 4),    // 95: 0b00000111111
        val8!(0x71, 2),    // 96: 0b000010000
        val8!(0x71, 2),    // 97: 0b000010001
        val8!(0x71, 2),    // 98: 0b000010010
        val8!(0x71, 2),    // 99: 0b000010011
        val8!(0x17, 3),    // 100: 0b000010100
        val8!(0x17, 3),    // 101: 0b000010101
        val8!(0x70, 3),    // 102: 0b000010110
        val8!(0x70, 3),    // 103: 0b000010111
        val8!(0x36, 3),    // 104: 0b000011000
        val8!(0x36, 3),    // 105: 0b000011001
        val8!(0x63, 3),    // 106: 0b000011010
        val8!(0x63, 3),    // 107: 0b000011011
        val8!(0x60, 3),    // 108: 0b000011100
        val8!(0x60, 3),    // 109: 0b000011101
        val8!(0x44, 4),    // 110: 0b000011110
        val8!(0x25, 4),    // 111: 0b000011111
        val8!(0x52, 4),    // 112: 0b000100000
        val8!(0x05, 4),    // 113: 0b000100001
        val8!(0x15, 3),    // 114: 0b000100010
        val8!(0x15, 3),    // 115: 0b000100011
        val8!(0x62, 2),    // 116: 0b000100100
        val8!(0x62, 2),    // 117: 0b000100101
        val8!(0x62, 2),    // 118: 0b000100110
        val8!(0x62, 2),    // 119: 0b000100111
        val8!(0x26, 3),    // 120: 0b000101000
        val8!(0x26, 3),    // 121: 0b000101001
        val8!(0x06, 3),    // 122: 0b000101010
        val8!(0x06, 3),    // 123: 0b000101011
        val8!(0x16, 2),    // 124: 0b000101100
        val8!(0x16, 2),    // 125: 0b000101101
        val8!(0x16, 2),    // 126: 0b000101110
        val8!(0x16, 2),    // 127: 0b000101111
        val8!(0x61, 2),    // 128: 0b000110000
        val8!(0x61, 2),    // 129: 0b000110001
        val8!(0x61, 2),    // 130: 0b000110010
        val8!(0x61, 2),    // 131: 0b000110011
        val8!(0x51, 3),    // 132: 0b000110100
        val8!(0x51, 3),    // 133: 0b000110101
        val8!(0x34, 3),    // 134: 0b000110110
        val8!(0x34, 3),    // 135: 0b000110111
        val8!(0x50, 3),    // 136: 0b000111000
        val8!(0x50, 3),    // 137: 0b000111001
        val8!(0x43, 4),    // 138: 0b000111010
        val8!(0x33, 4),    // 139: 0b000111011
        val8!(0x24, 3),    // 140: 0b000111100
        val8!(0x24, 3),    // 141: 0b000111101
        val8!(0x42, 3),    // 142: 0b000111110
        val8!(0x42, 3),    // 143: 0b000111111
        val8!(0x14, 3),    // 144: 0b00100000
        val8!(0x41, 3),    // 145: 0b00100001
        val8!(0x04, 3),    // 146: 0b00100010
        val8!(0x40, 3),    // 147: 0b00100011
        val8!(0x23, 2),    // 148: 0b00100100
        val8!(0x23, 2),    // 149: 0b00100101
        val8!(0x32, 2),    // 150: 0b00100110
        val8!(0x32, 2),    // 151: 0b00100111
        val8!(0x13, 1),    // 152: 0b001010
        val8!(0x31, 1),    // 153: 0b001011
        val8!(0x03, 2),    // 154: 0b0011000
        val8!(0x30, 2),    // 155: 0b0011001
        val8!(0x22, 1),    // 156: 0b0011010
        val8!(0x22, 1),    // 157: 0b0011011
    ],
    n_init_bits: 5,
    n_table_bits: 11,
};

/// Table 12.
pub const HUFFMAN_TABLE_12: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 5),      // 0: 0b00000
        jmp8!(64, 4),      // 1: 0b00001
        jmp8!(80, 4),      // 2: 0b00010
        jmp8!(96, 3),      // 3: 0b00011
        jmp8!(104, 2),     // 4: 0b00100
        jmp8!(108, 3),     // 5: 0b00101
        jmp8!(116, 1),     // 6: 0b00110
        jmp8!(118, 1),     // 7: 0b00111
        jmp8!(120, 2),     // 8: 0b01000
        val8!(0x13, 5),    // 9: 0b01001
        val8!(0x31, 5),    // 10: 0b01010
        val8!(0x22, 5),    // 11: 0b01011
        val8!(0x12, 4),    // 12: 0b01100
        val8!(0x12, 4),    // 13: 0b01101
        val8!(0x21, 4),    // 14: 0b01110
        val8!(0x21, 4),    // 15: 0b01111
        val8!(0x02, 5),    // 16: 0b10000
        val8!(0x20, 5),    // 17: 0b10001
        val8!(0x00, 4),    // 18: 0b10010
        val8!(0x00, 4),    // 19: 0b10011
        val8!(0x11, 3),    // 20: 0b10100
        val8!(0x11, 3),    // 21: 0b10101
        val8!(0x11, 3),    // 22: 0b10110
        val8!(0x11, 3),    // 23: 0b10111
        val8!(0x01, 3),    // 24: 0b11000
        val8!(0x01, 3),    // 25: 0b11001
        val8!(0x01, 3),    // 26: 0b11010
        val8!(0x01, 3),    // 27: 0b11011
        val8!(0x10, 3),    // 28: 0b11100
        val8!(0x10, 3),    // 29: 0b11101
        val8!(0x10, 3),    // 30: 0b11110
        val8!(0x10, 3),    // 31: 0b11111
        val8!(0x77, 5),    // 32: 0b0000000000
        val8!(0x67, 5),    // 33: 0b0000000001
        val8!(0x76, 4),    // 34: 0b0000000010
        val8!(0x76, 4),    // 35: 0b0000000011
        val8!(0x57, 4),    // 36: 0b0000000100
        val8!(0x57, 4),    // 37: 0b0000000101
        val8!(0x75, 4),    // 38: 0b0000000110
        val8!(0x75, 4),    // 39: 0b0000000111
        val8!(0x66, 4),    // 40: 0b0000001000
        val8!(0x66, 4),    // 41: 0b0000001001
        val8!(0x47, 4),    // 42: 0b0000001010
        val8!(0x47, 4),    // 43: 0b0000001011
        val8!(0x74, 4),    // 44: 0b0000001100
        val8!(0x74, 4),    // 45: 0b0000001101
        val8!(0x65, 4),    // 46: 0b0000001110
        val8!(0x65, 4),    // 47: 0b0000001111
        val8!(0x56, 3),    // 48: 0b0000010000
        val8!(0x56, 3),    // 49: 0b0000010001
        val8!(0x56, 3),    // 50: 0b0000010010
        val8!(0x56, 3),    // 51: 0b0000010011
        val8!(0x37, 3),    // 52: 0b0000010100
        val8!(0x37, 3),    // 53: 0b0000010101
        val8!(0x37, 3),    // 54: 0b0000010110
        val8!(0x37, 3),    // 55: 0b0000010111
        val8!(0x73, 4),    // 56: 0b0000011000
        val8!(0x73, 4),    // 57: 0b0000011001
        val8!(0x55, 4),    // 58: 0b0000011010
        val8!(0x55, 4),    // 59: 0b0000011011
        val8!(0x27, 3),    // 60: 0b0000011100
        val8!(0x27, 3),    // 61: 0b0000011101
        val8!(0x27, 3),    // 62: 0b0000011110
        val8!(0x27, 3),    // 63: 0b0000011111
        val8!(0x72, 3),    // 64: 0b000010000
        val8!(0x72, 3),    // 65: 0b000010001
        val8!(0x46, 3),    // 66: 0b000010010
        val8!(0x46, 3),    // 67: 0b000010011
        val8!(0x64, 3),    // 68: 0b000010100
        val8!(0x64, 3),    // 69: 0b000010101
        val8!(0x17, 3),    // 70: 0b000010110
        val8!(0x17, 3),    // 71: 0b000010111
        val8!(0x71, 3),    // 72: 0b000011000
        val8!(0x71, 3),    // 73: 0b000011001
        val8!(0x07, 4),    // 74: 0b000011010
        val8!(0x70, 4),    // 75: 0b000011011
        val8!(0x36, 3),    // 76: 0b000011100
        val8!(0x36, 3),    // 77: 0b000011101
        val8!(0x63, 3),    // 78: 0b000011110
        val8!(0x63, 3),    // 79: 0b000011111
        val8!(0x45, 3),    // 80: 0b000100000
        val8!(0x45, 3),    // 81: 0b000100001
        val8!(0x54, 3),    // 82: 0b000100010
        val8!(0x54, 3),    // 83: 0b000100011
        val8!(0x44, 3),    // 84: 0b000100100
        val8!(0x44, 3),    // 85: 0b000100101
        val8!(0x06, 4),    // 86: 0b000100110
        val8!(0x05, 4),    // 87: 0b000100111
        val8!(0x26, 2),    // 88: 0b000101000
        val8!(0x26, 2),    // 89: 0b000101001
        val8!(0x26, 2),    // 90: 0b000101010
        val8!(0x26, 2),    // 91: 0b000101011
        val8!(0x62, 2),    // 92: 0b000101100
        val8!(0x62, 2),    // 93: 0b000101101
        val8!(0x62, 2),    // 94: 0b000101110
        val8!(0x62, 2),    // 95: 0b000101111
        val8!(0x61, 2),    // 96: 0b00011000
        val8!(0x61, 2),    // 97: 0b00011001
        val8!(0x16, 3),    // 98: 0b00011010
        val8!(0x60, 3),    // 99: 0b00011011
        val8!(0x35, 3),    // 100: 0b00011100
        val8!(0x53, 3),    // 101: 0b00011101
        val8!(0x25, 3),    // 102: 0b00011110
        val8!(0x52, 3),    // 103: 0b00011111
        val8!(0x15, 2),    // 104: 0b0010000
        val8!(0x51, 2),    // 105: 0b0010001
        val8!(0x34, 2),    // 106: 0b0010010
        val8!(0x43, 2),    // 107: 0b0010011
        val8!(0x50, 3),    // 108: 0b00101000
        val8!(0x04, 3),    // 109: 0b00101001
        val8!(0x24, 2),    // 110: 0b00101010
        val8!(0x24, 2),    // 111: 0b00101011
        val8!(0x42, 2),    // 112: 0b00101100
        val8!(0x42, 2),    // 113: 0b00101101
        val8!(0x14, 2),    // 114: 0b00101110
        val8!(0x14, 2),    // 115: 0b00101111
        val8!(0x33, 1),    // 116: 0b001100
        val8!(0x41, 1),    // 117: 0b001101
        val8!(0x23, 1),    // 118: 0b001110
        val8!(0x32, 1),    // 119: 0b001111
        val8!(0x40, 2),    // 120: 0b0100000
        val8!(0x03, 2),    // 121: 0b0100001
        val8!(0x30, 1),    // 122: 0b0100010
        val8!(0x30, 1),    // 123: 0b0100011
    ],
    n_init_bits: 5,
    n_table_bits: 10,
};

/// Table 13.
pub const HUFFMAN_TABLE_13: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 7),      // 0: 0b00000
        jmp8!(398, 6),     // 1: 0b00001
        jmp8!(462, 5),     // 2: 0b00010
        jmp8!(494, 5),     // 3: 0b00011
        jmp8!(526, 3),     // 4: 0b00100
        jmp8!(534, 2),     // 5: 0b00101
        jmp8!(538, 1),     // 6: 0b00110
        jmp8!(540, 1),     // 7: 0b00111
        val8!(0x11, 4),    // 8: 0b01000
        val8!(0x11, 4),    // 9: 0b01001
        val8!(0x01, 4),    // 10: 0b01010
        val8!(0x01, 4),    // 11: 0b01011
        val8!(0x10, 3),    // 12: 0b01100
        val8!(0x10, 3),    // 13: 0b01101
        val8!(0x10, 3),    // 14: 0b01110
        val8!(0x10, 3),    // 15: 0b01111
        val8!(0x00, 1),    // 16: 0b10000
        val8!(0x00, 1),    // 17: 0b10001
        val8!(0x00, 1),    // 18: 0b10010
        val8!(0x00, 1),    // 19: 0b10011
        val8!(0x00, 1),    // 20: 0b10100
        val8!(0x00, 1),    // 21: 0b10101
        val8!(0x00, 1),    // 22: 0b10110
        val8!(0x00, 1),    // 23: 0b10111
        val8!(0x00, 1),    // 24: 0b11000
        val8!(0x00, 1),    // 25: 0b11001
        val8!(0x00, 1),    // 26: 0b11010
        val8!(0x00, 1),    // 27: 0b11011
        val8!(0x00, 1),    // 28: 0b11100
        val8!(0x00, 1),    // 29: 0b11101
        val8!(0x00, 1),    // 30: 0b11110
        val8!(0x00, 1),    // 31: 0b11111
        jmp8!(160, 7),     // 32: 0b000000000000
        jmp8!(288, 4),     // 33: 0b000000000001
        jmp8!(304, 4),     // 34: 0b000000000010
        jmp8!(320, 3),     // 35: 0b000000000011
        jmp8!(328, 2),     // 36: 0b000000000100
        jmp8!(332, 2),     // 37: 0b000000000101
        jmp8!(336, 3),     // 38: 0b000000000110
        jmp8!(344, 2),     // 39: 0b000000000111
        jmp8!(348, 1),     // 40: 0b000000001000
        jmp8!(350, 2),     // 41: 0b000000001001
        jmp8!(354, 2),     // 42: 0b000000001010
        jmp8!(358, 2),     // 43: 0b000000001011
        jmp8!(362, 2),     // 44: 0b000000001100
        jmp8!(366, 2),     // 45: 0b000000001101
        val8!(0x1f, 7),    // 46: 0b000000001110
        val8!(0xf1, 7),    // 47: 0b000000001111
        val8!(0xf0, 7),    // 48: 0b000000010000
        jmp8!(370, 1),     // 49: 0b000000010001
        jmp8!(372, 1),     // 50: 0b000000010010
        jmp8!(374, 1),     // 51: 0b000000010011
        val8!(0xe2, 7),    // 52: 0b000000010100
        jmp8!(376, 1),     // 53: 0b000000010101
        val8!(0x1e, 7),    // 54: 0b000000010110
        val8!(0xe1, 7),    // 55: 0b000000010111
        jmp8!(378, 1),     // 56: 0b000000011000
        jmp8!(380, 1),     // 57: 0b000000011001
        jmp8!(382, 1),     // 58: 0b000000011010
        jmp8!(384, 1),     // 59: 0b000000011011
        jmp8!(386, 1),     // 60: 0b000000011100
        jmp8!(388, 1),     // 61: 0b000000011101
        val8!(0xc6, 7),    // 62: 0b000000011110
        val8!(0x3d, 7),    // 63: 0b000000011111
        jmp8!(390, 1),     // 64: 0b000000100000
        val8!(0x2d, 7),    // 65: 0b000000100001
        val8!(0xd2, 7),    // 66: 0b000000100010
        val8!(0x1d, 7),    // 67: 0b000000100011
        val8!(0xb7, 7),    // 68: 0b000000100100
        jmp8!(392, 1),     // 69: 0b000000100101
        jmp8!(394, 1),     // 70: 0b000000100110
        val8!(0xc3, 7),    // 71: 0b000000100111
        jmp8!(396, 1),     // 72: 0b000000101000
        val8!(0x4b, 7),    // 73: 0b000000101001
        val8!(0xd1, 6),    // 74: 0b000000101010
        val8!(0xd1, 6),    // 75: 0b000000101011
        val8!(0x0d, 7),    // 76: 0b000000101100
        val8!(0xd0, 7),    // 77: 0b000000101101
        val8!(0x8a, 7),    // 78: 0b000000101110
        val8!(0xa8, 7),    // 79: 0b000000101111
        val8!(0x4c, 7),    // 80: 0b000000110000
        val8!(0xc4, 7),    // 81: 0b000000110001
        val8!(0x6b, 7),    // 82: 0b000000110010
        val8!(0xb6, 7),    // 83: 0b000000110011
        val8!(0x3c, 6),    // 84: 0b000000110100
        val8!(0x3c, 6),    // 85: 0b000000110101
        val8!(0x2c, 6),    // 86: 0b000000110110
        val8!(0x2c, 6),    // 87: 0b000000110111
        val8!(0xc2, 6),    // 88: 0b000000111000
        val8!(0xc2, 6),    // 89: 0b000000111001
        val8!(0x5b, 6),    // 90: 0b000000111010
        val8!(0x5b, 6),    // 91: 0b000000111011
        val8!(0xb5, 7),    // 92: 0b000000111100
        val8!(0x89, 7),    // 93: 0b000000111101
        val8!(0x1c, 6),    // 94: 0b000000111110
        val8!(0x1c, 6),    // 95: 0b000000111111
        val8!(0xc1, 6),    // 96: 0b000001000000
        val8!(0xc1, 6),    // 97: 0b000001000001
        val8!(0x98, 7),    // 98: 0b000001000010
        val8!(0x0c, 7),    // 99: 0b000001000011
        val8!(0xc0, 6),    // 100: 0b000001000100
        val8!(0xc0, 6),    // 101: 0b000001000101
        val8!(0xb4, 7),    // 102: 0b000001000110
        val8!(0x6a, 7),    // 103: 0b000001000111
        val8!(0xa6, 7),    // 104: 0b000001001000
        val8!(0x79, 7),    // 105: 0b000001001001
        val8!(0x3b, 6),    // 106: 0b000001001010
        val8!(0x3b, 6),    // 107: 0b000001001011
        val8!(0xb3, 6),    // 108: 0b000001001100
        val8!(0xb3, 6),    // 109: 0b000001001101
        val8!(0x88, 7),    // 110: 0b000001001110
        val8!(0x5a, 7),    // 111: 0b000001001111
        val8!(0x2b, 6),    // 112: 0b000001010000
        val8!(0x2b, 6),    // 113: 0b000001010001
        val8!(0xa5, 7),    // 114: 0b000001010010
        val8!(0x69, 7),    // 115: 0b000001010011
        val8!(0xa4, 6),    // 116: 0b000001010100
        val8!(0xa4, 6),    // 117: 0b000001010101
        val8!(0x78, 7),    // 118: 0b000001010110
        val8!(0x87, 7),    // 119: 0b000001010111
        val8!(0x94, 6),    // 120: 0b000001011000
        val8!(0x94, 6),    // 121: 0b000001011001
        val8!(0x77, 7),    // 122: 0b000001011010
        val8!(0x76, 7),    // 123: 0b000001011011
        val8!(0xb2, 5),    // 124: 0b000001011100
        val8!(0xb2, 5),    // 125: 0b000001011101
        val8!(0xb2, 5),    // 126: 0b000001011110
        val8!(0xb2, 5),    // 127: 0b000001011111
        val8!(0x1b, 5),    // 128: 0b000001100000
        val8!(0x1b, 5),    // 129: 0b000001100001
        val8!(0x1b, 5),    // 130: 0b000001100010
        val8!(0x1b, 5),    // 131: 0b000001100011
        val8!(0xb1, 5),    // 132: 0b000001100100
        val8!(0xb1, 5),    // 133: 0b000001100101
        val8!(0xb1, 5),    // 134: 0b000001100110
        val8!(0xb1, 5),    // 135: 0b000001100111
        val8!(0x0b, 6),    // 136: 0b000001101000
        val8!(0x0b, 6),    // 137: 0b000001101001
        val8!(0xb0, 6),    // 138: 0b000001101010
        val8!(0xb0, 6),    // 139: 0b000001101011
        val8!(0x96, 6),    // 140: 0b000001101100
        val8!(0x96, 6),    // 141: 0b000001101101
        val8!(0x4a, 6),    // 142: 0b000001101110
        val8!(0x4a, 6),    // 143: 0b000001101111
        val8!(0x3a, 6),    // 144: 0b000001110000
        val8!(0x3a, 6),    // 145: 0b000001110001
        val8!(0xa3, 6),    // 146: 0b000001110010
        val8!(0xa3, 6),    // 147: 0b000001110011
        val8!(0x59, 6),    // 148: 0b000001110100
        val8!(0x59, 6),    // 149: 0b000001110101
        val8!(0x95, 6),    // 150: 0b000001110110
        val8!(0x95, 6),    // 151: 0b000001110111
        val8!(0x2a, 5),    // 152: 0b000001111000
        val8!(0x2a, 5),    // 153: 0b000001111001
        val8!(0x2a, 5),    // 154: 0b000001111010
        val8!(0x2a, 5),    // 155: 0b000001111011
        val8!(0xa2, 5),    // 156: 0b000001111100
        val8!(0xa2, 5),    // 157: 0b000001111101
        val8!(0xa2, 5),    // 158: 0b000001111110
        val8!(0xa2, 5),    // 159: 0b000001111111
        val8!(0xfe, 7),    // 160: 0b0000000000000000000
        val8!(0xfc, 7),    // 161: 0b0000000000000000001
        val8!(0xfd, 6),    // 162: 0b0000000000000000010
        val8!(0xfd, 6),    // 163: 0b0000000000000000011
        val8!(0xed, 5),    // 164: 0b0000000000000000100
        val8!(0xed, 5),    // 165: 0b0000000000000000101
        val8!(0xed, 5),    // 166: 0b0000000000000000110
        val8!(0xed, 5),    // 167: 0b0000000000000000111
        val8!(0xff, 4),    // 168: 0b0000000000000001000
        val8!(0xff, 4),    // 169: 0b0000000000000001001
        val8!(0xff, 4),    // 170: 0b0000000000000001010
        val8!(0xff, 4),    // 171: 0b0000000000000001011
        val8!(0xff, 4),    // 172: 0b0000000000000001100
        val8!(0xff, 4),    // 173: 0b0000000000000001101
        val8!(0xff, 4),    // 174: 0b0000000000000001110
        val8!(0xff, 4),    // 175: 0b0000000000000001111
        val8!(0xef, 4),    // 176: 0b0000000000000010000
        val8!(0xef, 4),    // 177: 0b0000000000000010001
        val8!(0xef, 4),    // 178: 0b0000000000000010010
        val8!(0xef, 4),    // 179: 0b0000000000000010011
        val8!(0xef, 4),    // 180: 0b0000000000000010100
        val8!(0xef, 4),    // 181: 0b0000000000000010101
        val8!(0xef, 4),    // 182: 0b0000000000000010110
        val8!(0xef, 4),    // 183: 0b0000000000000010111
        val8!(0xdf, 4),    // 184: 0b0000000000000011000
        val8!(0xdf, 4),    // 185: 0b0000000000000011001
        val8!(0xdf, 4),    // 186: 0b0000000000000011010
        val8!(0xdf, 4),    // 187: 0b0000000000000011011
        val8!(0xdf, 4),    // 188: 0b0000000000000011100
        val8!(0xdf, 4),    // 189: 0b0000000000000011101
        val8!(0xdf, 4),    // 190: 0b0000000000000011110
        val8!(0xdf, 4),    // 191: 0b0000000000000011111
        val8!(0xee, 4),    // 192: 0b0000000000000100000
        val8!(0xee, 4),    // 193: 0b0000000000000100001
        val8!(0xee, 4),    // 194: 0b0000000000000100010
        val8!(0xee, 4),    // 195: 0b0000000000000100011
        val8!(0xee, 4),    // 196: 0b0000000000000100100
        val8!(0xee, 4),    // 197: 0b0000000000000100101
        val8!(0xee, 4),    // 198: 0b0000000000000100110
        val8!(0xee, 4),    // 199: 0b0000000000000100111
        val8!(0xcf, 4),    // 200: 0b0000000000000101000
        val8!(0xcf, 4),    // 201: 0b0000000000000101001
        val8!(0xcf, 4),    // 202: 0b0000000000000101010
        val8!(0xcf, 4),    // 203: 0b0000000000000101011
        val8!(0xcf, 4),    // 204: 0b0000000000000101100
        val8!(0xcf, 4),    // 205: 0b0000000000000101101
        val8!(0xcf, 4),    // 206: 0b0000000000000101110
        val8!(0xcf, 4),    // 207: 0b0000000000000101111
        val8!(0xde, 4),    // 208: 0b0000000000000110000
        val8!(0xde, 4),    // 209: 0b0000000000000110001
        val8!(0xde, 4),    // 210: 0b0000000000000110010
        val8!(0xde, 4),    // 211: 0b0000000000000110011
        val8!(0xde, 4),    // 212: 0b0000000000000110100
        val8!(0xde, 4),    // 213: 0b0000000000000110101
        val8!(0xde, 4),    // 214: 0b0000000000000110110
        val8!(0xde, 4),    // 215: 0b0000000000000110111
        val8!(0xbf, 4),    // 216: 0b0000000000000111000
        val8!(0xbf, 4),    // 217: 0b0000000000000111001
        val8!(0xbf, 4),    // 218: 0b0000000000000111010
        val8!(0xbf, 4),    // 219: 0b0000000000000111011
        val8!(0xbf, 4),    // 220: 0b0000000000000111100
        val8!(0xbf, 4),    // 221: 0b0000000000000111101
        val8!(0xbf, 4),    // 222: 0b0000000000000111110
        val8!(0xbf, 4),    // 223: 0b0000000000000111111
        val8!(0xfb, 4),    // 224: 0b0000000000001000000
        val8!(0xfb, 4),    // 225: 0b0000000000001000001
        val8!(0xfb, 4),    // 226: 0b0000000000001000010
        val8!(0xfb, 4),    // 227: 0b0000000000001000011
        val8!(0xfb, 4),    // 228: 0b0000000000001000100
        val8!(0xfb, 4),    // 229: 0b0000000000001000101
        val8!(0xfb, 4),    // 230: 0b0000000000001000110
        val8!(0xfb, 4),    // 231: 0b0000000000001000111
        val8!(0xce, 4),    // 232: 0b0000000000001001000
        val8!(0xce, 4),    // 233: 0b0000000000001001001
        val8!(0xce, 4),    // 234: 0b0000000000001001010
        val8!(0xce, 4),    // 235: 0b0000000000001001011
        val8!(0xce, 4),    // 236: 0b0000000000001001100
        val8!(0xce, 4),    // 237: 0b0000000000001001101
        val8!(0xce, 4),    // 238: 0b0000000000001001110
        val8!(0xce, 4),    // 239: 0b0000000000001001111
        val8!(0xdc, 4),    // 240: 0b0000000000001010000
        val8!(0xdc, 4),    // 241: 0b0000000000001010001
        val8!(0xdc, 4),    // 242: 0b0000000000001010010
        val8!(0xdc, 4),    // 243: 0b0000000000001010011
        val8!(0xdc, 4),    // 244: 0b0000000000001010100
        val8!(0xdc, 4),    // 245: 0b0000000000001010101
        val8!(0xdc, 4),    // 246: 0b0000000000001010110
        val8!(0xdc, 4),    // 247: 0b0000000000001010111
        val8!(0xaf, 5),    // 248: 0b0000000000001011000
        val8!(0xaf, 5),    // 249: 0b0000000000001011001
        val8!(0xaf, 5),    // 250: 0b0000000000001011010
        val8!(0xaf, 5),    // 251: 0b0000000000001011011
        val8!(0xe9, 5),    // 252: 0b0000000000001011100
        val8!(0xe9, 5),    // 253: 0b0000000000001011101
        val8!(0xe9, 5),    // 254: 0b0000000000001011110
        val8!(0xe9, 5),    // 255: 0b0000000000001011111
        val8!(0xec, 3),    // 256: 0b0000000000001100000
        val8!(0xec, 3),    // 257: 0b0000000000001100001
        val8!(0xec, 3),    // 258: 0b0000000000001100010
        val8!(0xec, 3),    // 259: 0b0000000000001100011
        val8!(0xec, 3),    // 260: 0b0000000000001100100
        val8!(0xec, 3),    // 261: 0b0000000000001100101
        val8!(0xec, 3),    // 262: 0b0000000000001100110
        val8!(0xec, 3),    // 263: 0b0000000000001100111
        val8!(0xec, 3),    // 264: 0b0000000000001101000
        val8!(0xec, 3),    // 265: 0b0000000000001101001
        val8!(0xec, 3),    // 266: 0b0000000000001101010
        val8!(0xec, 3),    // 267: 0b0000000000001101011
        val8!(0xec, 3),    // 268: 0b0000000000001101100
        val8!(0xec, 3),    // 269: 0b0000000000001101101
        val8!(0xec, 3),    // 270: 0b0000000000001101110
        val8!(0xec, 3),    // 271: 0b0000000000001101111
        val8!(0xdd, 3),    // 272: 0b0000000000001110000
        val8!(0xdd, 3),    // 273: 0b0000000000001110001
        val8!(0xdd, 3),    // 274: 0b0000000000001110010
        val8!(0xdd, 3),    // 275: 0b0000000000001110011
        val8!(0xdd, 3),    // 276: 0b0000000000001110100
        val8!(0xdd, 3),    // 277: 0b0000000000001110101
        val8!(0xdd, 3),    // 278: 0b0000000000001110110
        val8!(0xdd, 3),    // 279: 0b0000000000001110111
        val8!(0xdd, 3),    // 280: 0b0000000000001111000
        val8!(0xdd, 3),    // 281: 0b0000000000001111001
        val8!(0xdd, 3),    // 282: 0b0000000000001111010
        val8!(0xdd, 3),    // 283: 0b0000000000001111011
        val8!(0xdd, 3),    // 284: 0b0000000000001111100
        val8!(0xdd, 3),    // 285: 0b0000000000001111101
        val8!(0xdd, 3),    // 286: 0b0000000000001111110
        val8!(0xdd, 3),    // 287: 0b0000000000001111111
        val8!(0xfa, 4),    // 288: 0b0000000000010000
        val8!(0xcd, 4),    // 289: 0b0000000000010001
        val8!(0xbe, 3),    // 290: 0b0000000000010010
        val8!(0xbe, 3),    // 291: 0b0000000000010011
        val8!(0xeb, 3),    // 292: 0b0000000000010100
        val8!(0xeb, 3),    // 293: 0b0000000000010101
        val8!(0x9f, 3),    // 294: 0b0000000000010110
        val8!(0x9f, 3),    // 295: 0b0000000000010111
        val8!(0xf9, 3),    // 296: 0b0000000000011000
        val8!(0xf9, 3),    // 297: 0b0000000000011001
        val8!(0xea, 3),    // 298: 0b0000000000011010
        val8!(0xea, 3),    // 299: 0b0000000000011011
        val8!(0xbd, 3),    // 300: 0b0000000000011100
        val8!(0xbd, 3),    // 301: 0b0000000000011101
        val8!(0xdb, 3),    // 302: 0b0000000000011110
        val8!(0xdb, 3),    // 303: 0b0000000000011111
        val8!(0x8f, 3),    // 304: 0b0000000000100000
        val8!(0x8f, 3),    // 305: 0b0000000000100001
        val8!(0xf8, 3),    // 306: 0b0000000000100010
        val8!(0xf8, 3),    // 307: 0b0000000000100011
        val8!(0xcc, 3),    // 308: 0b0000000000100100
        val8!(0xcc, 3),    // 309: 0b0000000000100101
        val8!(0xae, 4),    // 310: 0b0000000000100110
        val8!(0x9e, 4),    // 311: 0b0000000000100111
        val8!(0x8e, 3),    // 312: 0b0000000000101000
        val8!(0x8e, 3),    // 313: 0b0000000000101001
        val8!(0x7f, 4),    // 314: 0b0000000000101010
        val8!(0x7e, 4),    // 315: 0b0000000000101011
        val8!(0xf7, 2),    // 316: 0b0000000000101100
        val8!(0xf7, 2),    // 317: 0b0000000000101101
        val8!(0xf7, 2),    // 318: 0b0000000000101110
        val8!(0xf7, 2),    // 319: 0b0000000000101111
        val8!(0xda, 2),    // 320: 0b000000000011000
        val8!(0xda, 2),    // 321: 0b000000000011001
        val8!(0xad, 3),    // 322: 0b000000000011010
        val8!(0xbc, 3),    // 323: 0b000000000011011
        val8!(0xcb, 3),    // 324: 0b000000000011100
        val8!(0xf6, 3),    // 325: 0b000000000011101
        val8!(0x6f, 2),    // 326: 0b000000000011110
        val8!(0x6f, 2),    // 327: 0b000000000011111
        val8!(0xe8, 2),    // 328: 0b00000000010000
        val8!(0x5f, 2),    // 329: 0b00000000010001
        val8!(0x9d, 2),    // 330: 0b00000000010010
        val8!(0xd9, 2),    // 331: 0b00000000010011
        val8!(0xf5, 2),    // 332: 0b00000000010100
        val8!(0xe7, 2),    // 333: 0b00000000010101
        val8!(0xac, 2),    // 334: 0b00000000010110
        val8!(0xbb, 2),    // 335: 0b00000000010111
        val8!(0x4f, 2),    // 336: 0b000000000110000
        val8!(0x4f, 2),    // 337: 0b000000000110001
        val8!(0xf4, 2),    // 338: 0b000000000110010
        val8!(0xf4, 2),    // 339: 0b000000000110011
        val8!(0xca, 3),    // 340: 0b000000000110100
        val8!(0xe6, 3),    // 341: 0b000000000110101
        val8!(0xf3, 2),    // 342: 0b000000000110110
        val8!(0xf3, 2),    // 343: 0b000000000110111
        val8!(0x3f, 1),    // 344: 0b00000000011100
        val8!(0x3f, 1),    // 345: 0b00000000011101
        val8!(0x8d, 2),    // 346: 0b00000000011110
        val8!(0xd8, 2),    // 347: 0b00000000011111
        val8!(0x2f, 1),    // 348: 0b0000000010000
        val8!(0xf2, 1),    // 349: 0b0000000010001
        val8!(0x6e, 2),    // 350: 0b00000000100100
        val8!(0x9c, 2),    // 351: 0b00000000100101
        val8!(0x0f, 1),    // 352: 0b00000000100110
        val8!(0x0f, 1),    // 353: 0b00000000100111
        val8!(0xc9, 2),    // 354: 0b00000000101000
        val8!(0x5e, 2),    // 355: 0b00000000101001
        val8!(0xab, 1),    // 356: 0b00000000101010
        val8!(0xab, 1),    // 357: 0b00000000101011
        val8!(0x7d, 2),    // 358: 0b00000000101100
        val8!(0xd7, 2),    // 359: 0b00000000101101
        val8!(0x4e, 1),    // 360: 0b00000000101110
        val8!(0x4e, 1),    // 361: 0b00000000101111
        val8!(0xc8, 2),    // 362: 0b00000000110000
        val8!(0xd6, 2),    // 363: 0b00000000110001
        val8!(0x3e, 1),    // 364: 0b00000000110010
        val8!(0x3e, 1),    // 365: 0b00000000110011
        val8!(0xb9, 1),    // 366: 0b00000000110100
        val8!(0xb9, 1),    // 367: 0b00000000110101
        val8!(0x9b, 2),    // 368: 0b00000000110110
        val8!(0xaa, 2),    // 369: 0b00000000110111
        val8!(0xba, 1),    // 370: 0b0000000100010
        val8!(0xe5, 1),    // 371: 0b0000000100011
        val8!(0xe4, 1),    // 372: 0b0000000100100
        val8!(0x8c, 1),    // 373: 0b0000000100101
        val8!(0x6d, 1),    // 374: 0b0000000100110
        val8!(0xe3, 1),    // 375: 0b0000000100111
        val8!(0x2e, 1),    // 376: 0b0000000101010
        val8!(0x0e, 1),    // 377: 0b0000000101011
        val8!(0xe0, 1),    // 378: 0b0000000110000
        val8!(0x5d, 1),    // 379: 0b0000000110001
        val8!(0xd5, 1),    // 380: 0b0000000110010
        val8!(0x7c, 1),    // 381: 0b0000000110011
        val8!(0xc7, 1),    // 382: 0b0000000110100
        val8!(0x4d, 1),    // 383: 0b0000000110101
        val8!(0x8b, 1),    // 384: 0b0000000110110
        val8!(0xb8, 1),    // 385: 0b0000000110111
        val8!(0xd4, 1),    // 386: 0b0000000111000
        val8!(0x9a, 1),    // 387: 0b0000000111001
        val8!(0xa9, 1),    // 388: 0b0000000111010
        val8!(0x6c, 1),    // 389: 0b0000000111011
        val8!(0xd3, 1),    // 390: 0b0000001000000
        val8!(0x7b, 1),    // 391: 0b0000001000001
        val8!(0x5c, 1),    // 392: 0b0000001001010
        val8!(0xc5, 1),    // 393: 0b0000001001011
        val8!(0x99, 1),    // 394: 0b0000001001100
        val8!(0x7a, 1),    // 395: 0b0000001001101
        val8!(0xa7, 1),    // 396: 0b0000001010000
        val8!(0x97, 1),    // 397: 0b0000001010001
        val8!(0x1a, 5),    // 398: 0b00001000000
        val8!(0x1a, 5),    // 399: 0b00001000001
        val8!(0xa1, 5),    // 400: 0b00001000010
        val8!(0xa1, 5),    // 401: 0b00001000011
        val8!(0x0a, 6),    // 402: 0b00001000100
        val8!(0x68, 6),    // 403: 0b00001000101
        val8!(0xa0, 5),    // 404: 0b00001000110
        val8!(0xa0, 5),    // 405: 0b00001000111
        val8!(0x86, 6),    // 406: 0b00001001000
        val8!(0x49, 6),    // 407: 0b00001001001
        val8!(0x93, 5),    // 408: 0b00001001010
        val8!(0x93, 5),    // 409: 0b00001001011
        val8!(0x39, 6),    // 410: 0b00001001100
        val8!(0x58, 6),    // 411: 0b00001001101
        val8!(0x85, 6),    // 412: 0b00001001110
        val8!(0x67, 6),    // 413: 0b00001001111
        val8!(0x29, 5),    // 414: 0b00001010000
        val8!(0x29, 5),    // 415: 0b00001010001
        val8!(0x92, 5),    // 416: 0b00001010010
        val8!(0x92, 5),    // 417: 0b00001010011
        val8!(0x57, 6),    // 418: 0b00001010100
        val8!(0x75, 6),    // 419: 0b00001010101
        val8!(0x38, 5),    // 420: 0b00001010110
        val8!(0x38, 5),    // 421: 0b00001010111
        val8!(0x83, 5),    // 422: 0b00001011000
        val8!(0x83, 5),    // 423: 0b00001011001
        val8!(0x66, 6),    // 424: 0b00001011010
        val8!(0x47, 6),    // 425: 0b00001011011
        val8!(0x74, 6),    // 426: 0b00001011100
        val8!(0x56, 6),    // 427: 0b00001011101
        val8!(0x65, 6),    // 428: 0b00001011110
        val8!(0x73, 6),    // 429: 0b00001011111
        val8!(0x19, 4),    // 430: 0b00001100000
        val8!(0x19, 4),    // 431: 0b00001100001
        val8!(0x19, 4),    // 432: 0b00001100010
        val8!(0x19, 4),    // 433: 0b00001100011
        val8!(0x91, 4),    // 434: 0b00001100100
        val8!(0x91, 4),    // 435: 0b00001100101
        val8!(0x91, 4),    // 436: 0b00001100110
        val8!(0x91, 4),    // 437: 0b00001100111
        val8!(0x09, 5),    // 438: 0b00001101000
        val8!(0x09, 5),    // 439: 0b00001101001
        val8!(0x90, 5),    // 440: 0b00001101010
        val8!(0x90, 5),    // 441: 0b00001101011
        val8!(0x48, 5),    // 442: 0b00001101100
        val8!(0x48, 5),    // 443: 0b00001101101
        val8!(0x84, 5),    // 444: 0b00001101110
        val8!(0x84, 5),    // 445: 0b00001101111
        val8!(0x72, 5),    // 446: 0b00001110000
        val8!(0x72, 5),    // 447: 0b00001110001
        val8!(0x46, 6),    // 448: 0b00001110010
        val8!(0x64, 6),    // 449: 0b00001110011
        val8!(0x28, 4),    // 450: 0b00001110100
        val8!(0x28, 4),    // 451: 0b00001110101
        val8!(0x28, 4),    // 452: 0b00001110110
        val8!(0x28, 4),    // 453: 0b00001110111
        val8!(0x82, 4),    // 454: 0b00001111000
        val8!(0x82, 4),    // 455: 0b00001111001
        val8!(0x82, 4),    // 456: 0b00001111010
        val8!(0x82, 4),    // 457: 0b00001111011
        val8!(0x18, 4),    // 458: 0b00001111100
        val8!(0x18, 4),    // 459: 0b00001111101
        val8!(0x18, 4),    // 460: 0b00001111110
        val8!(0x18, 4),    // 461: 0b00001111111
        val8!(0x37, 5),    // 462: 0b0001000000
        val8!(0x27, 5),    // 463: 0b0001000001
        val8!(0x17, 4),    // 464: 0b0001000010
        val8!(0x17, 4),    // 465: 0b0001000011
        val8!(0x71, 4),    // 466: 0b0001000100
        val8!(0x71, 4),    // 467: 0b0001000101
        val8!(0x55, 5),    // 468: 0b0001000110
        val8!(0x07, 5),    // 469: 0b0001000111
        val8!(0x70, 5),    // 470: 0b0001001000
        val8!(0x36, 5),    // 471: 0b0001001001
        val8!(0x63, 5),    // 472: 0b0001001010
        val8!(0x45, 5),    // 473: 0b0001001011
        val8!(0x54, 5),    // 474: 0b0001001100
        val8!(0x26, 5),    // 475: 0b0001001101
        val8!(0x62, 5),    // 476: 0b0001001110
        val8!(0x35, 5),    // 477: 0b0001001111
        val8!(0x81, 3),    // 478: 0b0001010000
        val8!(0x81, 3),    // 479: 0b0001010001
        val8!(0x81, 3),    // 480: 0b0001010010
        val8!(0x81, 3),    // 481: 0b0001010011
        val8!(0x08, 4),    // 482: 0b0001010100
        val8!(0x08, 4),    // 483: 0b0001010101
        val8!(0x80, 4),    // 484: 0b0001010110
        val8!(0x80, 4),    // 485: 0b0001010111
        val8!(0x16, 4),    // 486: 0b0001011000
        val8!(0x16, 4),    // 487: 0b0001011001
        val8!(0x61, 4),    // 488: 0b0001011010
        val8!(0x61, 4),    // 489: 0b0001011011
        val8!(0x06, 4),    // 490: 0b0001011100
        val8!(0x06, 4),    // 491: 0b0001011101
        val8!(0x60, 4),    // 492: 0b0001011110
        val8!(0x60, 4),    // 493: 0b0001011111
        val8!(0x53, 5),    // 494: 0b0001100000
        val8!(0x44, 5),    // 495: 0b0001100001
        val8!(0x25, 4),    // 496: 0b0001100010
        val8!(0x25, 4),    // 497: 0b0001100011
        val8!(0x52, 4),    // 498: 0b0001100100
        val8!(0x52, 4),    // 499: 0b0001100101
        val8!(0x05, 4),    // 500: 0b0001100110
        val8!(0x05, 4),    // 501: 0b0001100111
        val8!(0x15, 3),    // 502: 0b0001101000
        val8!(0x15, 3),    // 503: 0b0001101001
        val8!(0x15, 3),    // 504: 0b0001101010
        val8!(0x15, 3),    // 505: 0b0001101011
        val8!(0x51, 3),    // 506: 0b0001101100
        val8!(0x51, 3),    // 507: 0b0001101101
        val8!(0x51, 3),    // 508: 0b0001101110
        val8!(0x51, 3),    // 509: 0b0001101111
        val8!(0x34, 4),    // 510: 0b0001110000
        val8!(0x34, 4),    // 511: 0b0001110001
        val8!(0x43, 4),    // 512: 0b0001110010
        val8!(0x43, 4),    // 513: 0b0001110011
        val8!(0x50, 4),    // 514: 0b0001110100
        val8!(0x50, 4),    // 515: 0b0001110101
        val8!(0x24, 4),    // 516: 0b0001110110
        val8!(0x24, 4),    // 517: 0b0001110111
        val8!(0x42, 4),    // 518: 0b0001111000
        val8!(0x42, 4),    // 519: 0b0001111001
        val8!(0x33, 4),    // 520: 0b0001111010
        val8!(0x33, 4),    // 521: 0b0001111011
        val8!(0x14, 3),    // 522: 0b0001111100
        val8!(0x14, 3),    // 523: 0b0001111101
        val8!(0x14, 3),    // 524: 0b0001111110
        val8!(0x14, 3),    // 525: 0b0001111111
        val8!(0x41, 2),    // 526: 0b00100000
        val8!(0x41, 2),    // 527: 0b00100001
        val8!(0x04, 3),    // 528: 0b00100010
        val8!(0x40, 3),    // 529: 0b00100011
        val8!(0x23, 3),    // 530: 0b00100100
        val8!(0x32, 3),    // 531: 0b00100101
        val8!(0x13, 2),    // 532: 0b00100110
        val8!(0x13, 2),    // 533: 0b00100111
        val8!(0x31, 2),    // 534: 0b0010100
        val8!(0x03, 2),    // 535: 0b0010101
        val8!(0x30, 2),    // 536: 0b0010110
        val8!(0x22, 2),    // 537: 0b0010111
        val8!(0x12, 1),    // 538: 0b001100
        val8!(0x21, 1),    // 539: 0b001101
        val8!(0x02, 1),    // 540: 0b001110
        val8!(0x20, 1),    // 541: 0b001111
    ],
    n_init_bits: 5,
    n_table_bits: 19,
};

/// Table 15.
pub const HUFFMAN_TABLE_15: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 7),      // 0: 0b00000
        jmp8!(174, 6),     // 1: 0b00001
        jmp8!(238, 5),     // 2: 0b00010
        jmp8!(270, 5),     // 3: 0b00011
        jmp8!(302, 4),     // 4: 0b00100
        jmp8!(318, 4),     // 5: 0b00101
        jmp8!(334, 4),     // 6: 0b00110
        jmp8!(350, 4),     // 7: 0b00111
        jmp8!(366, 3),     // 8: 0b01000
        jmp8!(374, 3),     // 9: 0b01001
        jmp8!(382, 2),     // 10: 0b01010
        jmp8!(386, 2),     // 11: 0b01011
        jmp8!(390, 1),     // 12: 0b01100
        jmp8!(392, 2),     // 13: 0b01101
        jmp8!(396, 1),     // 14: 0b01110
        val8!(0x22, 5),    // 15: 0b01111
        val8!(0x12, 5),    // 16: 0b10000
        val8!(0x21, 5),    // 17: 0b10001
        val8!(0x02, 5),    // 18: 0b10010
        val8!(0x20, 5),    // 19: 0b10011
        val8!(0x11, 3),    // 20: 0b10100
        val8!(0x11, 3),    // 21: 0b10101
        val8!(0x11, 3),    // 22: 0b10110
        val8!(0x11, 3),    // 23: 0b10111
        val8!(0x01, 4),    // 24: 0b11000
        val8!(0x01, 4),    // 25: 0b11001
        val8!(0x10, 4),    // 26: 0b11010
        val8!(0x10, 4),    // 27: 0b11011
        val8!(0x00, 3),    // 28: 0b11100
        val8!(0x00, 3),    // 29: 0b11101
        val8!(0x00, 3),    // 30: 0b11110
        val8!(0x00, 3),    // 31: 0b11111
        jmp8!(160, 1),     // 32: 0b000000000000
        jmp8!(162, 1),     // 33: 0b000000000001
        val8!(0xee, 7),    // 34: 0b000000000010
        jmp8!(164, 1),     // 35: 0b000000000011
        jmp8!(166, 1),     // 36: 0b000000000100
        jmp8!(168, 1),     // 37: 0b000000000101
        val8!(0xfb, 7),    // 38: 0b000000000110
        jmp8!(170, 1),     // 39: 0b000000000111
        val8!(0xdd, 7),    // 40: 0b000000001000
        val8!(0xaf, 7),    // 41: 0b000000001001
        val8!(0xfa, 7),    // 42: 0b000000001010
        val8!(0xbe, 7),    // 43: 0b000000001011
        val8!(0xeb, 7),    // 44: 0b000000001100
        val8!(0xcd, 7),    // 45: 0b000000001101
        val8!(0xdc, 7),    // 46: 0b000000001110
        val8!(0x9f, 7),    // 47: 0b000000001111
        val8!(0xf9, 7),    // 48: 0b000000010000
        val8!(0xea, 7),    // 49: 0b000000010001
        val8!(0xbd, 7),    // 50: 0b000000010010
        val8!(0xdb, 7),    // 51: 0b000000010011
        val8!(0x8f, 7),    // 52: 0b000000010100
        val8!(0xf8, 7),    // 53: 0b000000010101
        val8!(0xcc, 7),    // 54: 0b000000010110
        val8!(0x9e, 7),    // 55: 0b000000010111
        val8!(0xe9, 7),    // 56: 0b000000011000
        val8!(0x7f, 7),    // 57: 0b000000011001
        val8!(0xf7, 7),    // 58: 0b000000011010
        val8!(0xad, 7),    // 59: 0b000000011011
        val8!(0xda, 7),    // 60: 0b000000011100
        val8!(0xbc, 7),    // 61: 0b000000011101
        val8!(0x6f, 7),    // 62: 0b000000011110
        jmp8!(172, 1),     // 63: 0b000000011111
        val8!(0xcb, 6),    // 64: 0b000000100000
        val8!(0xcb, 6),    // 65: 0b000000100001
        val8!(0xf6, 6),    // 66: 0b000000100010
        val8!(0xf6, 6),    // 67: 0b000000100011
        val8!(0x8e, 7),    // 68: 0b000000100100
        val8!(0xe8, 7),    // 69: 0b000000100101
        val8!(0x5f, 7),    // 70: 0b000000100110
        val8!(0x9d, 7),    // 71: 0b000000100111
        val8!(0xf5, 6),    // 72: 0b000000101000
        val8!(0xf5, 6),    // 73: 0b000000101001
        val8!(0x7e, 6),    // 74: 0b000000101010
        val8!(0x7e, 6),    // 75: 0b000000101011
        val8!(0xe7, 6),    // 76: 0b000000101100
        val8!(0xe7, 6),    // 77: 0b000000101101
        val8!(0xac, 6),    // 78: 0b000000101110
        val8!(0xac, 6),    // 79: 0b000000101111
        val8!(0xca, 6),    // 80: 0b000000110000
        val8!(0xca, 6),    // 81: 0b000000110001
        val8!(0xbb, 6),    // 82: 0b000000110010
        val8!(0xbb, 6),    // 83: 0b000000110011
        val8!(0xd9, 7),    // 84: 0b000000110100
        val8!(0x8d, 7),    // 85: 0b000000110101
        val8!(0x4f, 6),    // 86: 0b000000110110
        val8!(0x4f, 6),    // 87: 0b000000110111
        val8!(0xf4, 6),    // 88: 0b000000111000
        val8!(0xf4, 6),    // 89: 0b000000111001
        val8!(0x3f, 6),    // 90: 0b000000111010
        val8!(0x3f, 6),    // 91: 0b000000111011
        val8!(0xf3, 6),    // 92: 0b000000111100
        val8!(0xf3, 6),    // 93: 0b000000111101
        val8!(0xd8, 6),    // 94: 0b000000111110
        val8!(0xd8, 6),    // 95: 0b000000111111
        val8!(0xe6, 6),    // 96: 0b000001000000
        val8!(0xe6, 6),    // 97: 0b000001000001
        val8!(0x2f, 6),    // 98: 0b000001000010
        val8!(0x2f, 6),    // 99: 0b000001000011
        val8!(0xf2, 6),    // 100: 0b000001000100
        val8!(0xf2, 6),    // 101: 0b000001000101
        val8!(0x6e, 7),    // 102: 0b000001000110
        val8!(0xf0, 7),    // 103: 0b000001000111
        val8!(0x1f, 6),    // 104: 0b000001001000
        val8!(0x1f, 6),    // 105: 0b000001001001
        val8!(0xf1, 6),    // 106: 0b000001001010
        val8!(0xf1, 6),    // 107: 0b000001001011
        val8!(0x9c, 6),    // 108: 0b000001001100
        val8!(0x9c, 6),    // 109: 0b000001001101
        val8!(0xc9, 6),    // 110: 0b000001001110
        val8!(0xc9, 6),    // 111: 0b000001001111
        val8!(0x5e, 6),    // 112: 0b000001010000
        val8!(0x5e, 6),    // 113: 0b000001010001
        val8!(0xab, 6),    // 114: 0b000001010010
        val8!(0xab, 6),    // 115: 0b000001010011
        val8!(0xba, 6),    // 116: 0b000001010100
        val8!(0xba, 6),    // 117: 0b000001010101
        val8!(0xe5, 6),    // 118: 0b000001010110
        val8!(0xe5, 6),    // 119: 0b000001010111
        val8!(0x7d, 6),    // 120: 0b000001011000
        val8!(0x7d, 6),    // 121: 0b000001011001
        val8!(0xd7, 6),    // 122: 0b000001011010
        val8!(0xd7, 6),    // 123: 0b000001011011
        val8!(0x4e, 6),    // 124: 0b000001011100
        val8!(0x4e, 6),    // 125: 0b000001011101
        val8!(0xe4, 6),    // 126: 0b000001011110
        val8!(0xe4, 6),    // 127: 0b000001011111
        val8!(0x8c, 6),    // 128: 0b000001100000
        val8!(0x8c, 6),    // 129: 0b000001100001
        val8!(0xc8, 6),    // 130: 0b000001100010
        val8!(0xc8, 6),    // 131: 0b000001100011
        val8!(0x3e, 6),    // 132: 0b000001100100
        val8!(0x3e, 6),    // 133: 0b000001100101
        val8!(0x6d, 6),    // 134: 0b000001100110
        val8!(0x6d, 6),    // 135: 0b000001100111
        val8!(0xd6, 6),    // 136: 0b000001101000
        val8!(0xd6, 6),    // 137: 0b000001101001
        val8!(0xe3, 6),    // 138: 0b000001101010
        val8!(0xe3, 6),    // 139: 0b000001101011
        val8!(0x9b, 6),    // 140: 0b000001101100
        val8!(0x9b, 6),    // 141: 0b000001101101
        val8!(0xb9, 6),    // 142: 0b000001101110
        val8!(0xb9, 6),    // 143: 0b000001101111
        val8!(0x2e, 6),    // 144: 0b000001110000
        val8!(0x2e, 6),    // 145: 0b000001110001
        val8!(0xaa, 6),    // 146: 0b000001110010
        val8!(0xaa, 6),    // 147: 0b000001110011
        val8!(0xe2, 6),    // 148: 0b000001110100
        val8!(0xe2, 6),    // 149: 0b000001110101
        val8!(0x1e, 6),    // 150: 0b000001110110
        val8!(0x1e, 6),    // 151: 0b000001110111
        val8!(0xe1, 6),    // 152: 0b000001111000
        val8!(0xe1, 6),    // 153: 0b000001111001
        val8!(0x0e, 7),    // 154: 0b000001111010
        val8!(0xe0, 7),    // 155: 0b000001111011
        val8!(0x5d, 6),    // 156: 0b000001111100
        val8!(0x5d, 6),    // 157: 0b000001111101
        val8!(0xd5, 6),    // 158: 0b000001111110
        val8!(0xd5, 6),    // 159: 0b000001111111
        val8!(0xff, 1),    // 160: 0b0000000000000
        val8!(0xef, 1),    // 161: 0b0000000000001
        val8!(0xfe, 1),    // 162: 0b0000000000010
        val8!(0xdf, 1),    // 163: 0b0000000000011
        val8!(0xfd, 1),    // 164: 0b0000000000110
        val8!(0xcf, 1),    // 165: 0b0000000000111
        val8!(0xfc, 1),    // 166: 0b0000000001000
        val8!(0xde, 1),    // 167: 0b0000000001001
        val8!(0xed, 1),    // 168: 0b0000000001010
        val8!(0xbf, 1),    // 169: 0b0000000001011
        val8!(0xce, 1),    // 170: 0b0000000001110
        val8!(0xec, 1),    // 171: 0b0000000001111
        val8!(0xae, 1),    // 172: 0b0000000111110
        val8!(0x0f, 1),    // 173: 0b0000000111111
        val8!(0x7c, 6),    // 174: 0b00001000000
        val8!(0xc7, 6),    // 175: 0b00001000001
        val8!(0x4d, 6),    // 176: 0b00001000010
        val8!(0x8b, 6),    // 177: 0b00001000011
        val8!(0xd4, 5),    // 178: 0b00001000100
        val8!(0xd4, 5),    // 179: 0b00001000101
        val8!(0xb8, 6),    // 180: 0b00001000110
        val8!(0x9a, 6),    // 181: 0b00001000111
        val8!(0xa9, 6),    // 182: 0b00001001000
        val8!(0x6c, 6),    // 183: 0b00001001001
        val8!(0xc6, 6),    // 184: 0b00001001010
        val8!(0x3d, 6),    // 185: 0b00001001011
        val8!(0xd3, 5),    // 186: 0b00001001100
        val8!(0xd3, 5),    // 187: 0b00001001101
        val8!(0xd2, 5),    // 188: 0b00001001110
        val8!(0xd2, 5),    // 189: 0b00001001111
        val8!(0x2d, 6),    // 190: 0b00001010000
        val8!(0x0d, 6),    // 191: 0b00001010001
        val8!(0x1d, 5),    // 192: 0b00001010010
        val8!(0x1d, 5),    // 193: 0b00001010011
        val8!(0x7b, 5),    // 194: 0b00001010100
        val8!(0x7b, 5),    // 195: 0b00001010101
        val8!(0xb7, 5),    // 196: 0b00001010110
        val8!(0xb7, 5),    // 197: 0b00001010111
        val8!(0xd1, 5),    // 198: 0b00001011000
        val8!(0xd1, 5),    // 199: 0b00001011001
        val8!(0x5c, 6),    // 200: 0b00001011010
        val8!(0xd0, 6),    // 201: 0b00001011011
        val8!(0xc5, 5),    // 202: 0b00001011100
        val8!(0xc5, 5),    // 203: 0b00001011101
        val8!(0x8a, 5),    // 204: 0b00001011110
        val8!(0x8a, 5),    // 205: 0b00001011111
        val8!(0xa8, 5),    // 206: 0b00001100000
        val8!(0xa8, 5),    // 207: 0b00001100001
        val8!(0x4c, 5),    // 208: 0b00001100010
        val8!(0x4c, 5),    // 209: 0b00001100011
        val8!(0xc4, 5),    // 210: 0b00001100100
        val8!(0xc4, 5),    // 211: 0b00001100101
        val8!(0x6b, 5),    // 212: 0b00001100110
        val8!(0x6b, 5),    // 213: 0b00001100111
        val8!(0xb6, 5),    // 214: 0b00001101000
        val8!(0xb6, 5),    // 215: 0b00001101001
        val8!(0x99, 6),    // 216: 0b00001101010
        val8!(0x0c, 6),    // 217: 0b00001101011
        val8!(0x3c, 5),    // 218: 0b00001101100
        val8!(0x3c, 5),    // 219: 0b00001101101
        val8!(0xc3, 5),    // 220: 0b00001101110
        val8!(0xc3, 5),    // 221: 0b00001101111
        val8!(0x7a, 5),    // 222: 0b00001110000
        val8!(0x7a, 5),    // 223: 0b00001110001
        val8!(0xa7, 5),    // 224: 0b00001110010
        val8!(0xa7, 5),    // 225: 0b00001110011
        val8!(0xa6, 5),    // 226: 0b00001110100
        val8!(0xa6, 5),    // 227: 0b00001110101
        val8!(0xc0, 6),    // 228: 0b00001110110
        val8!(0x0b, 6),    // 229: 0b00001110111
        val8!(0xc2, 4),    // 230: 0b00001111000
        val8!(0xc2, 4),    // 231: 0b00001111001
        val8!(0xc2, 4),    // 232: 0b00001111010
        val8!(0xc2, 4),    // 233: 0b00001111011
        val8!(0x2c, 5),    // 234: 0b00001111100
        val8!(0x2c, 5),    // 235: 0b00001111101
        val8!(0x5b, 5),    // 236: 0b00001111110
        val8!(0x5b, 5),    // 237: 0b00001111111
        val8!(0xb5, 5),    // 238: 0b0001000000
        val8!(0x1c, 5),    // 239: 0b0001000001
        val8!(0x89, 5),    // 240: 0b0001000010
        val8!(0x98, 5),    // 241: 0b0001000011
        val8!(0xc1, 5),    // 242: 0b0001000100
        val8!(0x4b, 5),    // 243: 0b0001000101
        val8!(0xb4, 5),    // 244: 0b0001000110
        val8!(0x6a, 5),    // 245: 0b0001000111
        val8!(0x3b, 5),    // 246: 0b0001001000
        val8!(0x79, 5),    // 247: 0b0001001001
        val8!(0xb3, 4),    // 248: 0b0001001010
        val8!(0xb3, 4),    // 249: 0b0001001011
        val8!(0x97, 5),    // 250: 0b0001001100
        val8!(0x88, 5),    // 251: 0b0001001101
        val8!(0x2b, 5),    // 252: 0b0001001110
        val8!(0x5a, 5),    // 253: 0b0001001111
        val8!(0xb2, 4),    // 254: 0b0001010000
        val8!(0xb2, 4),    // 255: 0b0001010001
        val8!(0xa5, 5),    // 256: 0b0001010010
        val8!(0x1b, 5),    // 257: 0b0001010011
        val8!(0xb1, 4),    // 258: 0b0001010100
        val8!(0xb1, 4),    // 259: 0b0001010101
        val8!(0xb0, 5),    // 260: 0b0001010110
        val8!(0x69, 5),    // 261: 0b0001010111
        val8!(0x96, 5),    // 262: 0b0001011000
        val8!(0x4a, 5),    // 263: 0b0001011001
        val8!(0xa4, 5),    // 264: 0b0001011010
        val8!(0x78, 5),    // 265: 0b0001011011
        val8!(0x87, 5),    // 266: 0b0001011100
        val8!(0x3a, 5),    // 267: 0b0001011101
        val8!(0xa3, 4),    // 268: 0b0001011110
        val8!(0xa3, 4),    // 269: 0b0001011111
        val8!(0x59, 4),    // 270: 0b0001100000
        val8!(0x59, 4),    // 271: 0b0001100001
        val8!(0x95, 4),    // 272: 0b0001100010
        val8!(0x95, 4),    // 273: 0b0001100011
        val8!(0x2a, 4),    // 274: 0b0001100100
        val8!(0x2a, 4),    // 275: 0b0001100101
        val8!(0xa2, 4),    // 276: 0b0001100110
        val8!(0xa2, 4),    // 277: 0b0001100111
        val8!(0x1a, 4),    // 278: 0b0001101000
        val8!(0x1a, 4),    // 279: 0b0001101001
        val8!(0xa1, 4),    // 280: 0b0001101010
        val8!(0xa1, 4),    // 281: 0b0001101011
        val8!(0x0a, 5),    // 282: 0b0001101100
        val8!(0xa0, 5),    // 283: 0b0001101101
        val8!(0x68, 4),    // 284: 0b0001101110
        val8!(0x68, 4),    // 285: 0b0001101111
        val8!(0x86, 4),    // 286: 0b0001110000
        val8!(0x86, 4),    // 287: 0b0001110001
        val8!(0x49, 4),    // 288: 0b0001110010
        val8!(0x49, 4),    // 289: 0b0001110011
        val8!(0x94, 4),    // 290: 0b0001110100
        val8!(0x94, 4),    // 291: 0b0001110101
        val8!(0x39, 4),    // 292: 0b0001110110
        val8!(0x39, 4),    // 293: 0b0001110111
        val8!(0x93, 4),    // 294: 0b0001111000
        val8!(0x93, 4),    // 295: 0b0001111001
        val8!(0x77, 5),    // 296: 0b0001111010
        val8!(0x09, 5),    // 297: 0b0001111011
        val8!(0x58, 4),    // 298: 0b0001111100
        val8!(0x58, 4),    // 299: 0b0001111101
        val8!(0x85, 4),    // 300: 0b0001111110
        val8!(0x85, 4),    // 301: 0b0001111111
        val8!(0x29, 4),    // 302: 0b001000000
        val8!(0x67, 4),    // 303: 0b001000001
        val8!(0x76, 4),    // 304: 0b001000010
        val8!(0x92, 4),    // 305: 0b001000011
        val8!(0x91, 3),    // 306: 0b001000100
        val8!(0x91, 3),    // 307: 0b001000101
        val8!(0x19, 4),    // 308: 0b001000110
        val8!(0x90, 4),    // 309: 0b001000111
        val8!(0x48, 4),    // 310: 0b001001000
        val8!(0x84, 4),    // 311: 0b001001001
        val8!(0x57, 4),    // 312: 0b001001010
        val8!(0x75, 4),    // 313: 0b001001011
        val8!(0x38, 4),    // 314: 0b001001100
        val8!(0x83, 4),    // 315: 0b001001101
        val8!(0x66, 4),    // 316: 0b001001110
        val8!(0x47, 4),    // 317: 0b001001111
        val8!(0x28, 3),    // 318: 0b001010000
        val8!(0x28, 3),    // 319: 0b001010001
        val8!(0x82, 3),    // 320: 0b001010010
        val8!(0x82, 3),    // 321: 0b001010011
        val8!(0x18, 3),    // 322: 0b001010100
        val8!(0x18, 3),    // 323: 0b001010101
        val8!(0x81, 3),    // 324: 0b001010110
        val8!(0x81, 3),    // 325: 0b001010111
        val8!(0x74, 4),    // 326: 0b001011000
        val8!(0x08, 4),    // 327: 0b001011001
        val8!(0x80, 4),    // 328: 0b001011010
        val8!(0x56, 4),    // 329: 0b001011011
        val8!(0x65, 4),    // 330: 0b001011100
        val8!(0x37, 4),    // 331: 0b001011101
        val8!(0x73, 4),    // 332: 0b001011110
        val8!(0x46, 4),    // 333: 0b001011111
        val8!(0x27, 3),    // 334: 0b001100000
        val8!(0x27, 3),    // 335: 0b001100001
        val8!(0x72, 3),    // 336: 0b001100010
        val8!(0x72, 3),    // 337: 0b001100011
        val8!(0x64, 3),    // 338: 0b001100100
        val8!(0x64, 3),    // 339: 0b001100101
        val8!(0x17, 3),    // 340: 0b001100110
        val8!(0x17, 3),    // 341: 0b001100111
        val8!(0x55, 3),    // 342: 0b001101000
        val8!(0x55, 3),    // 343: 0b001101001
        val8!(0x71, 3),    // 344: 0b001101010
        val8!(0x71, 3),    // 345: 0b001101011
        val8!(0x07, 4),    // 346: 0b001101100
        val8!(0x70, 4),    // 347: 0b001101101
        val8!(0x36, 3),    // 348: 0b001101110
        val8!(0x36, 3),    // 349: 0b001101111
        val8!(0x63, 3),    // 350: 0b001110000
        val8!(0x63, 3),    // 351: 0b001110001
        val8!(0x45, 3),    // 352: 0b001110010
        val8!(0x45, 3),    // 353: 0b001110011
        val8!(0x54, 3),    // 354: 0b001110100
        val8!(0x54, 3),    // 355: 0b001110101
        val8!(0x26, 3),    // 356: 0b001110110
        val8!(0x26, 3),    // 357: 0b001110111
        val8!(0x62, 3),    // 358: 0b001111000
        val8!(0x62, 3),    // 359: 0b001111001
        val8!(0x16, 3),    // 360: 0b001111010
        val8!(0x16, 3),    // 361: 0b001111011
        val8!(0x06, 4),    // 362: 0b001111100
        val8!(0x60, 4),    // 363: 0b001111101
        val8!(0x35, 3),    // 364: 0b001111110
        val8!(0x35, 3),    // 365: 0b001111111
        val8!(0x61, 2),    // 366: 0b01000000
        val8!(0x61, 2),    // 367: 0b01000001
        val8!(0x53, 3),    // 368: 0b01000010
        val8!(0x44, 3),    // 369: 0b01000011
        val8!(0x25, 2),    // 370: 0b01000100
        val8!(0x25, 2),    // 371: 0b01000101
        val8!(0x52, 2),    // 372: 0b01000110
        val8!(0x52, 2),    // 373: 0b01000111
        val8!(0x15, 2),    // 374: 0b01001000
        val8!(0x15, 2),    // 375: 0b01001001
        val8!(0x51, 2),    // 376: 0b01001010
        val8!(0x51, 2),    // 377: 0b01001011
        val8!(0x05, 3),    // 378: 0b01001100
        val8!(0x50, 3),    // 379: 0b01001101
        val8!(0x34, 2),    // 380: 0b01001110
        val8!(0x34, 2),    // 381: 0b01001111
        val8!(0x43, 2),    // 382: 0b0101000
        val8!(0x24, 2),    // 383: 0b0101001
        val8!(0x42, 2),    // 384: 0b0101010
        val8!(0x33, 2),    // 385: 0b0101011
        val8!(0x41, 1),    // 386: 0b0101100
        val8!(0x41, 1),    // 387: 0b0101101
        val8!(0x14, 2),    // 388: 0b0101110
        val8!(0x04, 2),    // 389: 0b0101111
        val8!(0x23, 1),    // 390: 0b011000
        val8!(0x32, 1),    // 391: 0b011001
        val8!(0x40, 2),    // 392: 0b0110100
        val8!(0x03, 2),    // 393: 0b0110101
        val8!(0x13, 1),    // 394: 0b0110110
        val8!(0x13, 1),    // 395: 0b0110111
        val8!(0x31, 1),    // 396: 0b011100
        val8!(0x30, 1),    // 397: 0b011101
    ],
    n_init_bits: 5,
    n_table_bits: 13,
};

/// Table 16 (linbits 1 through 13).
pub const HUFFMAN_TABLE_16: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 7),      // 0: 0b00000
        jmp8!(216, 7),     // 1: 0b00001
        jmp8!(410, 7),     // 2: 0b00010
        jmp8!(538, 5),     // 3: 0b00011
        jmp8!(570, 4),     // 4: 0b00100
        jmp8!(586, 3),     // 5: 0b00101
        jmp8!(594, 1),     // 6: 0b00110
        jmp8!(596, 1),     // 7: 0b00111
        val8!(0x11, 4),    // 8: 0b01000
        val8!(0x11, 4),    // 9: 0b01001
        val8!(0x01, 4),    // 10: 0b01010
        val8!(0x01, 4),    // 11: 0b01011
        val8!(0x10, 3),    // 12: 0b01100
        val8!(0x10, 3),    // 13: 0b01101
        val8!(0x10, 3),    // 14: 0b01110
        val8!(0x10, 3),    // 15: 0b01111
        val8!(0x00, 1),    // 16: 0b10000
        val8!(0x00, 1),    // 17: 0b10001
        val8!(0x00, 1),    // 18: 0b10010
        val8!(0x00, 1),    // 19: 0b10011
        val8!(0x00, 1),    // 20: 0b10100
        val8!(0x00, 1),    // 21: 0b10101
        val8!(0x00, 1),    // 22: 0b10110
        val8!(0x00, 1),    // 23: 0b10111
        val8!(0x00, 1),    // 24: 0b11000
        val8!(0x00, 1),    // 25: 0b11001
        val8!(0x00, 1),    // 26: 0b11010
        val8!(0x00, 1),    // 27: 0b11011
        val8!(0x00, 1),    // 28: 0b11100
        val8!(0x00, 1),    // 29: 0b11101
        val8!(0x00, 1),    // 30: 0b11110
        val8!(0x00, 1),    // 31: 0b11111
        val8!(0xef, 6),    // 32: 0b000000000000
        val8!(0xef, 6),    // 33: 0b000000000001
        val8!(0xfe, 6),    // 34: 0b000000000010
        val8!(0xfe, 6),    // 35: 0b000000000011
        val8!(0xdf, 6),    // 36: 0b000000000100
        val8!(0xdf, 6),    // 37: 0b000000000101
        val8!(0xfd, 6),    // 38: 0b000000000110
        val8!(0xfd, 6),    // 39: 0b000000000111
        val8!(0xcf, 6),    // 40: 0b000000001000
        val8!(0xcf, 6),    // 41: 0b000000001001
        val8!(0xfc, 6),    // 42: 0b000000001010
        val8!(0xfc, 6),    // 43: 0b000000001011
        val8!(0xbf, 6),    // 44: 0b000000001100
        val8!(0xbf, 6),    // 45: 0b000000001101
        val8!(0xfb, 6),    // 46: 0b000000001110
        val8!(0xfb, 6),    // 47: 0b000000001111
        val8!(0xaf, 5),    // 48: 0b000000010000
        val8!(0xaf, 5),    // 49: 0b000000010001
        val8!(0xaf, 5),    // 50: 0b000000010010
        val8!(0xaf, 5),    // 51: 0b000000010011
        val8!(0xfa, 6),    // 52: 0b000000010100
        val8!(0xfa, 6),    // 53: 0b000000010101
        val8!(0x9f, 6),    // 54: 0b000000010110
        val8!(0x9f, 6),    // 55: 0b000000010111
        val8!(0xf9, 6),    // 56: 0b000000011000
        val8!(0xf9, 6),    // 57: 0b000000011001
        val8!(0xf8, 6),    // 58: 0b000000011010
        val8!(0xf8, 6),    // 59: 0b000000011011
        val8!(0x8f, 5),    // 60: 0b000000011100
        val8!(0x8f, 5),    // 61: 0b000000011101
        val8!(0x8f, 5),    // 62: 0b000000011110
        val8!(0x8f, 5),    // 63: 0b000000011111
        val8!(0x7f, 5),    // 64: 0b000000100000
        val8!(0x7f, 5),    // 65: 0b000000100001
        val8!(0x7f, 5),    // 66: 0b000000100010
        val8!(0x7f, 5),    // 67: 0b000000100011
        val8!(0xf7, 5),    // 68: 0b000000100100
        val8!(0xf7, 5),    // 69: 0b000000100101
        val8!(0xf7, 5),    // 70: 0b000000100110
        val8!(0xf7, 5),    // 71: 0b000000100111
        val8!(0x6f, 5),    // 72: 0b000000101000
        val8!(0x6f, 5),    // 73: 0b000000101001
        val8!(0x6f, 5),    // 74: 0b000000101010
        val8!(0x6f, 5),    // 75: 0b000000101011
        val8!(0xf6, 5),    // 76: 0b000000101100
        val8!(0xf6, 5),    // 77: 0b000000101101
        val8!(0xf6, 5),    // 78: 0b000000101110
        val8!(0xf6, 5),    // 79: 0b000000101111
        val8!(0xff, 3),    // 80: 0b000000110000
        val8!(0xff, 3),    // 81: 0b000000110001
        val8!(0xff, 3),    // 82: 0b000000110010
        val8!(0xff, 3),    // 83: 0b000000110011
        val8!(0xff, 3),    // 84: 0b000000110100
        val8!(0xff, 3),    // 85: 0b000000110101
        val8!(0xff, 3),    // 86: 0b000000110110
        val8!(0xff, 3),    // 87: 0b000000110111
        val8!(0xff, 3),    // 88: 0b000000111000
        val8!(0xff, 3),    // 89: 0b000000111001
        val8!(0xff, 3),    // 90: 0b000000111010
        val8!(0xff, 3),    // 91: 0b000000111011
        val8!(0xff, 3),    // 92: 0b000000111100
        val8!(0xff, 3),    // 93: 0b000000111101
        val8!(0xff, 3),    // 94: 0b000000111110
        val8!(0xff, 3),    // 95: 0b000000111111
        val8!(0x5f, 5),    // 96: 0b000001000000
        val8!(0x5f, 5),    // 97: 0b000001000001
        val8!(0x5f, 5),    // 98: 0b000001000010
        val8!(0x5f, 5),    // 99: 0b000001000011
        val8!(0xf5, 5),    // 100: 0b000001000100
        val8!(0xf5, 5),    // 101: 0b000001000101
        val8!(0xf5, 5),    // 102: 0b000001000110
        val8!(0xf5, 5),    // 103: 0b000001000111
        val8!(0x4f, 4),    // 104: 0b000001001000
        val8!(0x4f, 4),    // 105: 0b000001001001
        val8!(0x4f, 4),    // 106: 0b000001001010
        val8!(0x4f, 4),    // 107: 0b000001001011
        val8!(0x4f, 4),    // 108: 0b000001001100
        val8!(0x4f, 4),    // 109: 0b000001001101
        val8!(0x4f, 4),    // 110: 0b000001001110
        val8!(0x4f, 4),    // 111: 0b000001001111
        val8!(0xf4, 4),    // 112: 0b000001010000
        val8!(0xf4, 4),    // 113: 0b000001010001
        val8!(0xf4, 4),    // 114: 0b000001010010
        val8!(0xf4, 4),    // 115: 0b000001010011
        val8!(0xf4, 4),    // 116: 0b000001010100
        val8!(0xf4, 4),    // 117: 0b000001010101
        val8!(0xf4, 4),    // 118: 0b000001010110
        val8!(0xf4, 4),    // 119: 0b000001010111
        val8!(0xf3, 4),    // 120: 0b000001011000
        val8!(0xf3, 4),    // 121: 0b000001011001
        val8!(0xf3, 4),    // 122: 0b000001011010
        val8!(0xf3, 4),    // 123: 0b000001011011
        val8!(0xf3, 4),    // 124: 0b000001011100
        val8!(0xf3, 4),    // 125: 0b000001011101
        val8!(0xf3, 4),    // 126: 0b000001011110
        val8!(0xf3, 4),    // 127: 0b000001011111
        val8!(0xf0, 4),    // 128: 0b000001100000
        val8!(0xf0, 4),    // 129: 0b000001100001
        val8!(0xf0, 4),    // 130: 0b000001100010
        val8!(0xf0, 4),    // 131: 0b000001100011
        val8!(0xf0, 4),    // 132: 0b000001100100
        val8!(0xf0, 4),    // 133: 0b000001100101
        val8!(0xf0, 4),    // 134: 0b000001100110
        val8!(0xf0, 4),    // 135: 0b000001100111
        val8!(0x3f, 5),    // 136: 0b000001101000
        val8!(0x3f, 5),    // 137: 0b000001101001
        val8!(0x3f, 5),    // 138: 0b000001101010
        val8!(0x3f, 5),    // 139: 0b000001101011
        jmp8!(160, 5),     // 140: 0b000001101100
        jmp8!(192, 3),     // 141: 0b000001101101
        jmp8!(200, 3),     // 142: 0b000001101110
        jmp8!(208, 3),     // 143: 0b000001101111
        val8!(0xf2, 3),    // 144: 0b000001110000
        val8!(0xf2, 3),    // 145: 0b000001110001
        val8!(0xf2, 3),    // 146: 0b000001110010
        val8!(0xf2, 3),    // 147: 0b000001110011
        val8!(0xf2, 3),    // 148: 0b000001110100
        val8!(0xf2, 3),    // 149: 0b000001110101
        val8!(0xf2, 3),    // 150: 0b000001110110
        val8!(0xf2, 3),    // 151: 0b000001110111
        val8!(0xf2, 3),    // 152: 0b000001111000
        val8!(0xf2, 3),    // 153: 0b000001111001
        val8!(0xf2, 3),    // 154: 0b000001111010
        val8!(0xf2, 3),    // 155: 0b000001111011
        val8!(0xf2, 3),    // 156: 0b000001111100
        val8!(0xf2, 3),    // 157: 0b000001111101
        val8!(0xf2, 3),    // 158: 0b000001111110
        val8!(0xf2, 3),    // 159: 0b000001111111
        val8!(0xce, 4),    // 160: 0b00000110110000000
        val8!(0xce, 4),    // 161: 0b00000110110000001
        val8!(0xec, 5),    // 162: 0b00000110110000010
        val8!(0xdd, 5),    // 163: 0b00000110110000011
        val8!(0xde, 3),    // 164: 0b00000110110000100
        val8!(0xde, 3),    // 165: 0b00000110110000101
        val8!(0xde, 3),    // 166: 0b00000110110000110
        val8!(0xde, 3),    // 167: 0b00000110110000111
        val8!(0xe9, 3),    // 168: 0b00000110110001000
        val8!(0xe9, 3),    // 169: 0b00000110110001001
        val8!(0xe9, 3),    // 170: 0b00000110110001010
        val8!(0xe9, 3),    // 171: 0b00000110110001011
        val8!(0xea, 4),    // 172: 0b00000110110001100
        val8!(0xea, 4),    // 173: 0b00000110110001101
        val8!(0xd9, 4),    // 174: 0b00000110110001110
        val8!(0xd9, 4),    // 175: 0b00000110110001111
        val8!(0xee, 2),    // 176: 0b00000110110010000
        val8!(0xee, 2),    // 177: 0b00000110110010001
        val8!(0xee, 2),    // 178: 0b00000110110010010
        val8!(0xee, 2),    // 179: 0b00000110110010011
        val8!(0xee, 2),    // 180: 0b00000110110010100
        val8!(0xee, 2),    // 181: 0b00000110110010101
        val8!(0xee, 2),    // 182: 0b00000110110010110
        val8!(0xee, 2),    // 183: 0b00000110110010111
        val8!(0xed, 3),    // 184: 0b00000110110011000
        val8!(0xed, 3),    // 185: 0b00000110110011001
        val8!(0xed, 3),    // 186: 0b00000110110011010
        val8!(0xed, 3),    // 187: 0b00000110110011011
        val8!(0xeb, 3),    // 188: 0b00000110110011100
        val8!(0xeb, 3),    // 189: 0b00000110110011101
        val8!(0xeb, 3),    // 190: 0b00000110110011110
        val8!(0xeb, 3),    // 191: 0b00000110110011111
        val8!(0xbe, 2),    // 192: 0b000001101101000
        val8!(0xbe, 2),    // 193: 0b000001101101001
        val8!(0xcd, 2),    // 194: 0b000001101101010
        val8!(0xcd, 2),    // 195: 0b000001101101011
        val8!(0xdc, 3),    // 196: 0b000001101101100
        val8!(0xdb, 3),    // 197: 0b000001101101101
        val8!(0xae, 2),    // 198: 0b000001101101110
        val8!(0xae, 2),    // 199: 0b000001101101111
        val8!(0xcc, 2),    // 200: 0b000001101110000
        val8!(0xcc, 2),    // 201: 0b000001101110001
        val8!(0xad, 3),    // 202: 0b000001101110010
        val8!(0xda, 3),    // 203: 0b000001101110011
        val8!(0x7e, 3),    // 204: 0b000001101110100
        val8!(0xac, 3),    // 205: 0b000001101110101
        val8!(0xca, 2),    // 206: 0b000001101110110
        val8!(0xca, 2),    // 207: 0b000001101110111
        val8!(0xc9, 3),    // 208: 0b000001101111000
        val8!(0x7d, 3),    // 209: 0b000001101111001
        val8!(0x5e, 2),    // 210: 0b000001101111010
        val8!(0x5e, 2),    // 211: 0b000001101111011
        val8!(0xbd, 1),    // 212: 0b000001101111100
        val8!(0xbd, 1),    // 213: 0b000001101111101
        val8!(0xbd, 1),    // 214: 0b000001101111110
        val8!(0xbd, 1),    // 215: 0b000001101111111
        val8!(0x2f, 4),    // 216: 0b000010000000
        val8!(0x2f, 4),    // 217: 0b000010000001
        val8!(0x2f, 4),    // 218: 0b000010000010
        val8!(0x2f, 4),    // 219: 0b000010000011
        val8!(0x2f, 4),    // 220: 0b000010000100
        val8!(0x2f, 4),    // 221: 0b000010000101
        val8!(0x2f, 4),    // 222: 0b000010000110
        val8!(0x2f, 4),    // 223: 0b000010000111
        val8!(0x0f, 4),    // 224: 0b000010001000
        val8!(0x0f, 4),    // 225: 0b000010001001
        val8!(0x0f, 4),    // 226: 0b000010001010
        val8!(0x0f, 4),    // 227: 0b000010001011
        val8!(0x0f, 4),    // 228: 0b000010001100
        val8!(0x0f, 4),    // 229: 0b000010001101
        val8!(0x0f, 4),    // 230: 0b000010001110
        val8!(0x0f, 4),    // 231: 0b000010001111
        val8!(0x1f, 3),    // 232: 0b000010010000
        val8!(0x1f, 3),    // 233: 0b000010010001
        val8!(0x1f, 3),    // 234: 0b000010010010
        val8!(0x1f, 3),    // 235: 0b000010010011
        val8!(0x1f, 3),    // 236: 0b000010010100
        val8!(0x1f, 3),    // 237: 0b000010010101
        val8!(0x1f, 3),    // 238: 0b000010010110
        val8!(0x1f, 3),    // 239: 0b000010010111
        val8!(0x1f, 3),    // 240: 0b000010011000
        val8!(0x1f, 3),    // 241: 0b000010011001
        val8!(0x1f, 3),    // 242: 0b000010011010
        val8!(0x1f, 3),    // 243: 0b000010011011
        val8!(0x1f, 3),    // 244: 0b000010011100
        val8!(0x1f, 3),    // 245: 0b000010011101
        val8!(0x1f, 3),    // 246: 0b000010011110
        val8!(0x1f, 3),    // 247: 0b000010011111
        val8!(0xf1, 3),    // 248: 0b000010100000
        val8!(0xf1, 3),    // 249: 0b000010100001
        val8!(0xf1, 3),    // 250: 0b000010100010
        val8!(0xf1, 3),    // 251: 0b000010100011
        val8!(0xf1, 3),    // 252: 0b000010100100
        val8!(0xf1, 3),    // 253: 0b000010100101
        val8!(0xf1, 3),    // 254: 0b000010100110
        val8!(0xf1, 3),    // 255: 0b000010100111
        val8!(0xf1, 3),    // 256: 0b000010101000
        val8!(0xf1, 3),    // 257: 0b000010101001
        val8!(0xf1, 3),    // 258: 0b000010101010
        val8!(0xf1, 3),    // 259: 0b000010101011
        val8!(0xf1, 3),    // 260: 0b000010101100
        val8!(0xf1, 3),    // 261: 0b000010101101
        val8!(0xf1, 3),    // 262: 0b000010101110
        val8!(0xf1, 3),    // 263: 0b000010101111
        jmp8!(344, 2),     // 264: 0b000010110000
        jmp8!(348, 2),     // 265: 0b000010110001
        jmp8!(352, 2),     // 266: 0b000010110010
        jmp8!(356, 1),     // 267: 0b000010110011
        jmp8!(358, 2),     // 268: 0b000010110100
        jmp8!(362, 2),     // 269: 0b000010110101
        jmp8!(366, 1),     // 270: 0b000010110110
        jmp8!(368, 2),     // 271: 0b000010110111
        jmp8!(372, 2),     // 272: 0b000010111000
        jmp8!(376, 2),     // 273: 0b000010111001
        jmp8!(380, 2),     // 274: 0b000010111010
        val8!(0xe3, 7),    // 275: 0b000010111011
        jmp8!(384, 1),     // 276: 0b000010111100
        jmp8!(386, 1),     // 277: 0b000010111101
        jmp8!(388, 1),     // 278: 0b000010111110
        jmp8!(390, 1),     // 279: 0b000010111111
        jmp8!(392, 1),     // 280: 0b000011000000
        jmp8!(394, 1),     // 281: 0b000011000001
        jmp8!(396, 1),     // 282: 0b000011000010
        val8!(0x0d, 7),    // 283: 0b000011000011
        jmp8!(398, 1),     // 284: 0b000011000100
        jmp8!(400, 1),     // 285: 0b000011000101
        jmp8!(402, 1),     // 286: 0b000011000110
        val8!(0x3c, 7),    // 287: 0b000011000111
        jmp8!(404, 1),     // 288: 0b000011001000
        val8!(0x1c, 7),    // 289: 0b000011001001
        val8!(0xc0, 7),    // 290: 0b000011001010
        jmp8!(406, 1),     // 291: 0b000011001011
        val8!(0xe2, 6),    // 292: 0b000011001100
        val8!(0xe2, 6),    // 293: 0b000011001101
        val8!(0x2e, 7),    // 294: 0b000011001110
        val8!(0x1e, 7),    // 295: 0b000011001111
        val8!(0xd3, 7),    // 296: 0b000011010000
        val8!(0x2d, 7),    // 297: 0b000011010001
        val8!(0xd2, 7),    // 298: 0b000011010010
        val8!(0xd1, 7),    // 299: 0b000011010011
        val8!(0x3b, 7),    // 300: 0b000011010100
        jmp8!(408, 1),     // 301: 0b000011010101
        val8!(0x1d, 6),    // 302: 0b000011010110
        val8!(0x1d, 6),    // 303: 0b000011010111
        val8!(0xc4, 7),    // 304: 0b000011011000
        val8!(0x6b, 7),    // 305: 0b000011011001
        val8!(0xc3, 7),    // 306: 0b000011011010
        val8!(0xa7, 7),    // 307: 0b000011011011
        val8!(0x2c, 6),    // 308: 0b000011011100
        val8!(0x2c, 6),    // 309: 0b000011011101
        val8!(0xc2, 7),    // 310: 0b000011011110
        val8!(0xb5, 7),    // 311: 0b000011011111
        val8!(0xc1, 7),    // 312: 0b000011100000
        val8!(0x0c, 7),    // 313: 0b000011100001
        val8!(0x4b, 7),    // 314: 0b000011100010
        val8!(0xb4, 7),    // 315: 0b000011100011
        val8!(0x6a, 7),    // 316: 0b000011100100
        val8!(0xa6, 7),    // 317: 0b000011100101
        val8!(0xb3, 6),    // 318: 0b000011100110
        val8!(0xb3, 6),    // 319: 0b000011100111
        val8!(0x5a, 7),    // 320: 0b000011101000
        val8!(0xa5, 7),    // 321: 0b000011101001
        val8!(0x2b, 6),    // 322: 0b000011101010
        val8!(0x2b, 6),    // 323: 0b000011101011
        val8!(0xb2, 6),    // 324: 0b000011101100
        val8!(0xb2, 6),    // 325: 0b000011101101
        val8!(0x1b, 6),    // 326: 0b000011101110
        val8!(0x1b, 6),    // 327: 0b000011101111
        val8!(0xb1, 6),    // 328: 0b000011110000
        val8!(0xb1, 6),    // 329: 0b000011110001
        val8!(0x0b, 7),    // 330: 0b000011110010
        val8!(0xb0, 7),    // 331: 0b000011110011
        val8!(0x69, 7),    // 332: 0b000011110100
        val8!(0x96, 7),    // 333: 0b000011110101
        val8!(0x4a, 7),    // 334: 0b000011110110
        val8!(0xa4, 7),    // 335: 0b000011110111
        val8!(0x78, 7),    // 336: 0b000011111000
        val8!(0x87, 7),    // 337: 0b000011111001
        val8!(0xa3, 6),    // 338: 0b000011111010
        val8!(0xa3, 6),    // 339: 0b000011111011
        val8!(0x3a, 7),    // 340: 0b000011111100
        val8!(0x59, 7),    // 341: 0b000011111101
        val8!(0x2a, 6),    // 342: 0b000011111110
        val8!(0x2a, 6),    // 343: 0b000011111111
        val8!(0x9e, 1),    // 344: 0b00001011000000
        val8!(0x9e, 1),    // 345: 0b00001011000001
        val8!(0xbc, 2),    // 346: 0b00001011000010
        val8!(0xcb, 2),    // 347: 0b00001011000011
        val8!(0x8e, 2),    // 348: 0b00001011000100
        val8!(0xe8, 2),    // 349: 0b00001011000101
        val8!(0x9d, 2),    // 350: 0b00001011000110
        val8!(0xe7, 2),    // 351: 0b00001011000111
        val8!(0xbb, 2),    // 352: 0b00001011001000
        val8!(0x8d, 2),    // 353: 0b00001011001001
        val8!(0xd8, 2),    // 354: 0b00001011001010
        val8!(0x6e, 2),    // 355: 0b00001011001011
        val8!(0xe6, 1),    // 356: 0b0000101100110
        val8!(0x9c, 1),    // 357: 0b0000101100111
        val8!(0xab, 2),    // 358: 0b00001011010000
        val8!(0xba, 2),    // 359: 0b00001011010001
        val8!(0xe5, 2),    // 360: 0b00001011010010
        val8!(0xd7, 2),    // 361: 0b00001011010011
        val8!(0x4e, 1),    // 362: 0b00001011010100
        val8!(0x4e, 1),    // 363: 0b00001011010101
        val8!(0xe4, 2),    // 364: 0b00001011010110
        val8!(0x8c, 2),    // 365: 0b00001011010111
        val8!(0xc8, 1),    // 366: 0b0000101101100
        val8!(0x3e, 1),    // 367: 0b0000101101101
        val8!(0x6d, 1),    // 368: 0b00001011011100
        val8!(0x6d, 1),    // 369: 0b00001011011101
        val8!(0xd6, 2),    // 370: 0b00001011011110
        val8!(0x9b, 2),    // 371: 0b00001011011111
        val8!(0xb9, 2),    // 372: 0b00001011100000
        val8!(0xaa, 2),    // 373: 0b00001011100001
        val8!(0xe1, 1),    // 374: 0b00001011100010
        val8!(0xe1, 1),    // 375: 0b00001011100011
        val8!(0xd4, 1),    // 376: 0b00001011100100
        val8!(0xd4, 1),    // 377: 0b00001011100101
        val8!(0xb8, 2),    // 378: 0b00001011100110
        val8!(0xa9, 2),    // 379: 0b00001011100111
        val8!(0x7b, 1),    // 380: 0b00001011101000
        val8!(0x7b, 1),    // 381: 0b00001011101001
        val8!(0xb7, 2),    // 382: 0b00001011101010
        val8!(0xd0, 2),    // 383: 0b00001011101011
        val8!(0x0e, 1),    // 384: 0b0000101111000
        val8!(0xe0, 1),    // 385: 0b0000101111001
        val8!(0x5d, 1),    // 386: 0b0000101111010
        val8!(0xd5, 1),    // 387: 0b0000101111011
        val8!(0x7c, 1),    // 388: 0b0000101111100
        val8!(0xc7, 1),    // 389: 0b0000101111101
        val8!(0x4d, 1),    // 390: 0b0000101111110
        val8!(0x8b, 1),    // 391: 0b0000101111111
        val8!(0x9a, 1),    // 392: 0b0000110000000
        val8!(0x6c, 1),    // 393: 0b0000110000001
        val8!(0xc6, 1),    // 394: 0b0000110000010
        val8!(0x3d, 1),    // 395: 0b0000110000011
        val8!(0x5c, 1),    // 396: 0b0000110000100
        val8!(0xc5, 1),    // 397: 0b0000110000101
        val8!(0x8a, 1),    // 398: 0b0000110001000
        val8!(0xa8, 1),    // 399: 0b0000110001001
        val8!(0x99, 1),    // 400: 0b0000110001010
        val8!(0x4c, 1),    // 401: 0b0000110001011
        val8!(0xb6, 1),    // 402: 0b0000110001100
        val8!(0x7a, 1),    // 403: 0b0000110001101
        val8!(0x5b, 1),    // 404: 0b0000110010000
        val8!(0x89, 1),    // 405: 0b0000110010001
        val8!(0x98, 1),    // 406: 0b0000110010110
        val8!(0x79, 1),    // 407: 0b0000110010111
        val8!(0x97, 1),    // 408: 0b0000110101010
        val8!(0x88, 1),    // 409: 0b0000110101011
        val8!(0x95, 7),    // 410: 0b000100000000
        val8!(0x68, 7),    // 411: 0b000100000001
        val8!(0xa1, 6),    // 412: 0b000100000010
        val8!(0xa1, 6),    // 413: 0b000100000011
        val8!(0x86, 7),    // 414: 0b000100000100
        val8!(0x77, 7),    // 415: 0b000100000101
        val8!(0x94, 6),    // 416: 0b000100000110
        val8!(0x94, 6),    // 417: 0b000100000111
        val8!(0x49, 7),    // 418: 0b000100001000
        val8!(0x57, 7),    // 419: 0b000100001001
        val8!(0x67, 6),    // 420: 0b000100001010
        val8!(0x67, 6),    // 421: 0b000100001011
        val8!(0xa2, 5),    // 422: 0b000100001100
        val8!(0xa2, 5),    // 423: 0b000100001101
        val8!(0xa2, 5),    // 424: 0b000100001110
        val8!(0xa2, 5),    // 425: 0b000100001111
        val8!(0x1a, 5),    // 426: 0b000100010000
        val8!(0x1a, 5),    // 427: 0b000100010001
        val8!(0x1a, 5),    // 428: 0b000100010010
        val8!(0x1a, 5),    // 429: 0b000100010011
        val8!(0x0a, 6),    // 430: 0b000100010100
        val8!(0x0a, 6),    // 431: 0b000100010101
        val8!(0xa0, 6),    // 432: 0b000100010110
        val8!(0xa0, 6),    // 433: 0b000100010111
        val8!(0x39, 6),    // 434: 0b000100011000
        val8!(0x39, 6),    // 435: 0b000100011001
        val8!(0x93, 6),    // 436: 0b000100011010
        val8!(0x93, 6),    // 437: 0b000100011011
        val8!(0x58, 6),    // 438: 0b000100011100
        val8!(0x58, 6),    // 439: 0b000100011101
        val8!(0x85, 6),    // 440: 0b000100011110
        val8!(0x85, 6),    // 441: 0b000100011111
        val8!(0x29, 5),    // 442: 0b000100100000
        val8!(0x29, 5),    // 443: 0b000100100001
        val8!(0x29, 5),    // 444: 0b000100100010
        val8!(0x29, 5),    // 445: 0b000100100011
        val8!(0x92, 5),    // 446: 0b000100100100
        val8!(0x92, 5),    // 447: 0b000100100101
        val8!(0x92, 5),    // 448: 0b000100100110
        val8!(0x92, 5),    // 449: 0b000100100111
        val8!(0x76, 6),    // 450: 0b000100101000
        val8!(0x76, 6),    // 451: 0b000100101001
        val8!(0x09, 6),    // 452: 0b000100101010
        val8!(0x09, 6),    // 453: 0b000100101011
        val8!(0x19, 5),    // 454: 0b000100101100
        val8!(0x19, 5),    // 455: 0b000100101101
        val8!(0x19, 5),    // 456: 0b000100101110
        val8!(0x19, 5),    // 457: 0b000100101111
        val8!(0x91, 5),    // 458: 0b000100110000
        val8!(0x91, 5),    // 459: 0b000100110001
        val8!(0x91, 5),    // 460: 0b000100110010
        val8!(0x91, 5),    // 461: 0b000100110011
        val8!(0x90, 6),    // 462: 0b000100110100
        val8!(0x90, 6),    // 463: 0b000100110101
        val8!(0x48, 6),    // 464: 0b000100110110
        val8!(0x48, 6),    // 465: 0b000100110111
        val8!(0x84, 6),    // 466: 0b000100111000
        val8!(0x84, 6),    // 467: 0b000100111001
        val8!(0x75, 6),    // 468: 0b000100111010
        val8!(0x75, 6),    // 469: 0b000100111011
        val8!(0x38, 6),    // 470: 0b000100111100
        val8!(0x38, 6),    // 471: 0b000100111101
        val8!(0x83, 6),    // 472: 0b000100111110
        val8!(0x83, 6),    // 473: 0b000100111111
        val8!(0x66, 6),    // 474: 0b000101000000
        val8!(0x66, 6),    // 475: 0b000101000001
        val8!(0x28, 6),    // 476: 0b000101000010
        val8!(0x28, 6),    // 477: 0b000101000011
        val8!(0x82, 5),    // 478: 0b000101000100
        val8!(0x82, 5),    // 479: 0b000101000101
        val8!(0x82, 5),    // 480: 0b000101000110
        val8!(0x82, 5),    // 481: 0b000101000111
        val8!(0x47, 6),    // 482: 0b000101001000
        val8!(0x47, 6),    // 483: 0b000101001001
        val8!(0x74, 6),    // 484: 0b000101001010
        val8!(0x74, 6),    // 485: 0b000101001011
        val8!(0x18, 5),    // 486: 0b000101001100
        val8!(0x18, 5),    // 487: 0b000101001101
        val8!(0x18, 5),    // 488: 0b000101001110
        val8!(0x18, 5),    // 489: 0b000101001111
        val8!(0x81, 5),    // 490: 0b000101010000
        val8!(0x81, 5),    // 491: 0b000101010001
        val8!(0x81, 5),    // 492: 0b000101010010
        val8!(0x81, 5),    // 493: 0b000101010011
        val8!(0x80, 5),    // 494: 0b000101010100
        val8!(0x80, 5),    // 495: 0b000101010101
        val8!(0x80, 5),    // 496: 0b000101010110
        val8!(0x80, 5),    // 497: 0b000101010111
        val8!(0x08, 6),    // 498: 0b000101011000
        val8!(0x08, 6),    // 499: 0b000101011001
        val8!(0x56, 6),    // 500: 0b000101011010
        val8!(0x56, 6),    // 501: 0b000101011011
        val8!(0x37, 5),    // 502: 0b000101011100
        val8!(0x37, 5),    // 503: 0b000101011101
        val8!(0x37, 5),    // 504: 0b000101011110
        val8!(0x37, 5),    // 505: 0b000101011111
        val8!(0x73, 5),    // 506: 0b000101100000
        val8!(0x73, 5),    // 507: 0b000101100001
        val8!(0x73, 5),    // 508: 0b000101100010
        val8!(0x73, 5),    // 509: 0b000101100011
        val8!(0x65, 6),    // 510: 0b000101100100
        val8!(0x65, 6),    // 511: 0b000101100101
        val8!(0x46, 6),    // 512: 0b000101100110
        val8!(0x46, 6),    // 513: 0b000101100111
        val8!(0x27, 5),    // 514: 0b000101101000
        val8!(0x27, 5),    // 515: 0b000101101001
        val8!(0x27, 5),    // 516: 0b000101101010
        val8!(0x27, 5),    // 517: 0b000101101011
        val8!(0x72, 5),    // 518: 0b000101101100
        val8!(0x72, 5),    // 519: 0b000101101101
        val8!(0x72, 5),    // 520: 0b000101101110
        val8!(0x72, 5),    // 521: 0b000101101111
        val8!(0x64, 6),    // 522: 0b000101110000
        val8!(0x64, 6),    // 523: 0b000101110001
        val8!(0x55, 6),    // 524: 0b000101110010
        val8!(0x55, 6),    // 525: 0b000101110011
        val8!(0x07, 5),    // 526: 0b000101110100
        val8!(0x07, 5),    // 527: 0b000101110101
        val8!(0x07, 5),    // 528: 0b000101110110
        val8!(0x07, 5),    // 529: 0b000101110111
        val8!(0x17, 4),    // 530: 0b000101111000
        val8!(0x17, 4),    // 531: 0b000101111001
        val8!(0x17, 4),    // 532: 0b000101111010
        val8!(0x17, 4),    // 533: 0b000101111011
        val8!(0x17, 4),    // 534: 0b000101111100
        val8!(0x17, 4),    // 535: 0b000101111101
        val8!(0x17, 4),    // 536: 0b000101111110
        val8!(0x17, 4),    // 537: 0b000101111111
        val8!(0x71, 4),    // 538: 0b0001100000
        val8!(0x71, 4),    // 539: 0b0001100001
        val8!(0x70, 5),    // 540: 0b0001100010
        val8!(0x36, 5),    // 541: 0b0001100011
        val8!(0x63, 5),    // 542: 0b0001100100
        val8!(0x45, 5),    // 543: 0b0001100101
        val8!(0x54, 5),    // 544: 0b0001100110
        val8!(0x26, 5),    // 545: 0b0001100111
        val8!(0x62, 4),    // 546: 0b0001101000
        val8!(0x62, 4),    // 547: 0b0001101001
        val8!(0x16, 4),    // 548: 0b0001101010
        val8!(0x16, 4),    // 549: 0b0001101011
        val8!(0x61, 4),    // 550: 0b0001101100
        val8!(0x61, 4),    // 551: 0b0001101101
        val8!(0x06, 5),    // 552: 0b0001101110
        val8!(0x60, 5),    // 553: 0b0001101111
        val8!(0x53, 4),    // 554: 0b0001110000
        val8!(0x53, 4),    // 555: 0b0001110001
        val8!(0x35, 5),    // 556: 0b0001110010
        val8!(0x44, 5),    // 557: 0b0001110011
        val8!(0x25, 4),    // 558: 0b0001110100
        val8!(0x25, 4),    // 559: 0b0001110101
        val8!(0x52, 4),    // 560: 0b0001110110
        val8!(0x52, 4),    // 561: 0b0001110111
        val8!(0x51, 3),    // 562: 0b0001111000
        val8!(0x51, 3),    // 563: 0b0001111001
        val8!(0x51, 3),    // 564: 0b0001111010
        val8!(0x51, 3),    // 565: 0b0001111011
        val8!(0x15, 4),    // 566: 0b0001111100
        val8!(0x15, 4),    // 567: 0b0001111101
        val8!(0x05, 4),    // 568: 0b0001111110
        val8!(0x05, 4),    // 569: 0b0001111111
        val8!(0x34, 4),    // 570: 0b001000000
        val8!(0x43, 4),    // 571: 0b001000001
        val8!(0x50, 4),    // 572: 0b001000010
        val8!(0x24, 4),    // 573: 0b001000011
        val8!(0x42, 4),    // 574: 0b001000100
        val8!(0x33, 4),    // 575: 0b001000101
        val8!(0x14, 3),    // 576: 0b001000110
        val8!(0x14, 3),    // 577: 0b001000111
        val8!(0x41, 3),    // 578: 0b001001000
        val8!(0x41, 3),    // 579: 0b001001001
        val8!(0x04, 4),    // 580: 0b001001010
        val8!(0x40, 4),    // 581: 0b001001011
        val8!(0x23, 3),    // 582: 0b001001100
        val8!(0x23, 3),    // 583: 0b001001101
        val8!(0x32, 3),    // 584: 0b001001110
        val8!(0x32, 3),    // 585: 0b001001111
        val8!(0x13, 2),    // 586: 0b00101000
        val8!(0x13, 2),    // 587: 0b00101001
        val8!(0x31, 2),    // 588: 0b00101010
        val8!(0x31, 2),    // 589: 0b00101011
        val8!(0x03, 3),    // 590: 0b00101100
        val8!(0x30, 3),    // 591: 0b00101101
        val8!(0x22, 2),    // 592: 0b00101110
        val8!(0x22, 2),    // 593: 0b00101111
        val8!(0x12, 1),    // 594: 0b001100
        val8!(0x21, 1),    // 595: 0b001101
        val8!(0x02, 1),    // 596: 0b001110
        val8!(0x20, 1),    // 597: 0b001111
    ],
    n_init_bits: 5,
    n_table_bits: 17,
};

/// Table 24 (linbits 4 through 13).
pub const HUFFMAN_TABLE_24: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(32, 3),      // 0: 0b00000
        jmp8!(40, 3),      // 1: 0b00001
        jmp8!(48, 3),      // 2: 0b00010
        jmp8!(56, 2),      // 3: 0b00011
        jmp8!(60, 2),      // 4: 0b00100
        jmp8!(64, 6),      // 5: 0b00101
        val8!(0xff, 4),    // 6: 0b00110
        val8!(0xff, 4),    // 7: 0b00111
        jmp8!(128, 7),     // 8: 0b01000
        jmp8!(256, 6),     // 9: 0b01001
        jmp8!(320, 6),     // 10: 0b01010
        jmp8!(384, 5),     // 11: 0b01011
        jmp8!(416, 4),     // 12: 0b01100
        jmp8!(432, 5),     // 13: 0b01101
        jmp8!(464, 3),     // 14: 0b01110
        jmp8!(472, 4),     // 15: 0b01111
        jmp8!(488, 4),     // 16: 0b10000
        jmp8!(504, 2),     // 17: 0b10001
        jmp8!(508, 3),     // 18: 0b10010
        jmp8!(516, 1),     // 19: 0b10011
        jmp8!(518, 2),     // 20: 0b10100
        val8!(0x12, 5),    // 21: 0b10101
        val8!(0x21, 5),    // 22: 0b10110
        jmp8!(522, 1),     // 23: 0b10111
        val8!(0x11, 4),    // 24: 0b11000
        val8!(0x11, 4),    // 25: 0b11001
        val8!(0x01, 4),    // 26: 0b11010
        val8!(0x01, 4),    // 27: 0b11011
        val8!(0x10, 4),    // 28: 0b11100
        val8!(0x10, 4),    // 29: 0b11101
        val8!(0x00, 4),    // 30: 0b11110
        val8!(0x00, 4),    // 31: 0b11111
        val8!(0xef, 3),    // 32: 0b00000000
        val8!(0xfe, 3),    // 33: 0b00000001
        val8!(0xdf, 3),    // 34: 0b00000010
        val8!(0xfd, 3),    // 35: 0b00000011
        val8!(0xcf, 3),    // 36: 0b00000100
        val8!(0xfc, 3),    // 37: 0b00000101
        val8!(0xbf, 3),    // 38: 0b00000110
        val8!(0xfb, 3),    // 39: 0b00000111
        val8!(0xfa, 2),    // 40: 0b00001000
        val8!(0xfa, 2),    // 41: 0b00001001
        val8!(0xaf, 3),    // 42: 0b00001010
        val8!(0x9f, 3),    // 43: 0b00001011
        val8!(0xf9, 2),    // 44: 0b00001100
        val8!(0xf9, 2),    // 45: 0b00001101
        val8!(0xf8, 2),    // 46: 0b00001110
        val8!(0xf8, 2),    // 47: 0b00001111
        val8!(0x8f, 3),    // 48: 0b00010000
        val8!(0x7f, 3),    // 49: 0b00010001
        val8!(0xf7, 2),    // 50: 0b00010010
        val8!(0xf7, 2),    // 51: 0b00010011
        val8!(0x6f, 2),    // 52: 0b00010100
        val8!(0x6f, 2),    // 53: 0b00010101
        val8!(0xf6, 2),    // 54: 0b00010110
        val8!(0xf6, 2),    // 55: 0b00010111
        val8!(0x5f, 2),    // 56: 0b0001100
        val8!(0xf5, 2),    // 57: 0b0001101
        val8!(0x4f, 2),    // 58: 0b0001110
        val8!(0xf4, 2),    // 59: 0b0001111
        val8!(0x3f, 2),    // 60: 0b0010000
        val8!(0xf3, 2),    // 61: 0b0010001
        val8!(0x2f, 2),    // 62: 0b0010010
        val8!(0xf2, 2),    // 63: 0b0010011
        val8!(0xf1, 2),    // 64: 0b00101000000
        val8!(0xf1, 2),    // 65: 0b00101000001
        val8!(0xf1, 2),    // 66: 0b00101000010
        val8!(0xf1, 2),    // 67: 0b00101000011
        val8!(0xf1, 2),    // 68: 0b00101000100
        val8!(0xf1, 2),    // 69: 0b00101000101
        val8!(0xf1, 2),    // 70: 0b00101000110
        val8!(0xf1, 2),    // 71: 0b00101000111
        val8!(0xf1, 2),    // 72: 0b00101001000
        val8!(0xf1, 2),    // 73: 0b00101001001
        val8!(0xf1, 2),    // 74: 0b00101001010
        val8!(0xf1, 2),    // 75: 0b00101001011
        val8!(0xf1, 2),    // 76: 0b00101001100
        val8!(0xf1, 2),    // 77: 0b00101001101
        val8!(0xf1, 2),    // 78: 0b00101001110
        val8!(0xf1, 2),    // 79: 0b00101001111
        val8!(0x1f, 3),    // 80: 0b00101010000
        val8!(0x1f, 3),    // 81: 0b00101010001
        val8!(0x1f, 3),    // 82: 0b00101010010
        val8!(0x1f, 3),    // 83: 0b00101010011
        val8!(0x1f, 3),    // 84: 0b00101010100
        val8!(0x1f, 3),    // 85: 0b00101010101
        val8!(0x1f, 3),    // 86: 0b00101010110
        val8!(0x1f, 3),    // 87: 0b00101010111
        val8!(0xf0, 3),    // 88: 0b00101011000
        val8!(0xf0, 3),    // 89: 0b00101011001
        val8!(0xf0, 3),    // 90: 0b00101011010
        val8!(0xf0, 3),    // 91: 0b00101011011
        val8!(0xf0, 3),    // 92: 0b00101011100
        val8!(0xf0, 3),    // 93: 0b00101011101
        val8!(0xf0, 3),    // 94: 0b00101011110
        val8!(0xf0, 3),    // 95: 0b00101011111
        val8!(0x0f, 4),    // 96: 0b00101100000
        val8!(0x0f, 4),    // 97: 0b00101100001
        val8!(0x0f, 4),    // 98: 0b00101100010
        val8!(0x0f, 4),    // 99: 0b00101100011
        val8!(0xee, 6),    // 100: 0b00101100100
        val8!(0xde, 6),    // 101: 0b00101100101
        val8!(0xed, 6),    // 102: 0b00101100110
        val8!(0xce, 6),    // 103: 0b00101100111
        val8!(0xec, 6),    // 104: 0b00101101000
        val8!(0xdd, 6),    // 105: 0b00101101001
        val8!(0xbe, 6),    // 106: 0b00101101010
        val8!(0xeb, 6),    // 107: 0b00101101011
        val8!(0xcd, 6),    // 108: 0b00101101100
        val8!(0xdc, 6),    // 109: 0b00101101101
        val8!(0xae, 6),    // 110: 0b00101101110
        val8!(0xea, 6),    // 111: 0b00101101111
        val8!(0xbd, 6),    // 112: 0b00101110000
        val8!(0xdb, 6),    // 113: 0b00101110001
        val8!(0xcc, 6),    // 114: 0b00101110010
        val8!(0x9e, 6),    // 115: 0b00101110011
        val8!(0xe9, 6),    // 116: 0b00101110100
        val8!(0xad, 6),    // 117: 0b00101110101
        val8!(0xda, 6),    // 118: 0b00101110110
        val8!(0xbc, 6),    // 119: 0b00101110111
        val8!(0xcb, 6),    // 120: 0b00101111000
        val8!(0x8e, 6),    // 121: 0b00101111001
        val8!(0xe8, 6),    // 122: 0b00101111010
        val8!(0x9d, 6),    // 123: 0b00101111011
        val8!(0xd9, 6),    // 124: 0b00101111100
        val8!(0x7e, 6),    // 125: 0b00101111101
        val8!(0xe7, 6),    // 126: 0b00101111110
        val8!(0xac, 6),    // 127: 0b00101111111
        val8!(0xca, 6),    // 128: 0b010000000000
        val8!(0xca, 6),    // 129: 0b010000000001
        val8!(0xbb, 6),    // 130: 0b010000000010
        val8!(0xbb, 6),    // 131: 0b010000000011
        val8!(0x8d, 6),    // 132: 0b010000000100
        val8!(0x8d, 6),    // 133: 0b010000000101
        val8!(0xd8, 6),    // 134: 0b010000000110
        val8!(0xd8, 6),    // 135: 0b010000000111
        val8!(0x0e, 7),    // 136: 0b010000001000
        val8!(0xe0, 7),    // 137: 0b010000001001
        val8!(0x0d, 6),    // 138: 0b010000001010
        val8!(0x0d, 6),    // 139: 0b010000001011
        val8!(0xe6, 5),    // 140: 0b010000001100
        val8!(0xe6, 5),    // 141: 0b010000001101
        val8!(0xe6, 5),    // 142: 0b010000001110
        val8!(0xe6, 5),    // 143: 0b010000001111
        val8!(0x6e, 6),    // 144: 0b010000010000
        val8!(0x6e, 6),    // 145: 0b010000010001
        val8!(0x9c, 6),    // 146: 0b010000010010
        val8!(0x9c, 6),    // 147: 0b010000010011
        val8!(0xc9, 5),    // 148: 0b010000010100
        val8!(0xc9, 5),    // 149: 0b010000010101
        val8!(0xc9, 5),    // 150: 0b010000010110
        val8!(0xc9, 5),    // 151: 0b010000010111
        val8!(0x5e, 5),    // 152: 0b010000011000
        val8!(0x5e, 5),    // 153: 0b010000011001
        val8!(0x5e, 5),    // 154: 0b010000011010
        val8!(0x5e, 5),    // 155: 0b010000011011
        val8!(0xba, 5),    // 156: 0b010000011100
        val8!(0xba, 5),    // 157: 0b010000011101
        val8!(0xba, 5),    // 158: 0b010000011110
        val8!(0xba, 5),    // 159: 0b010000011111
        val8!(0xe5, 5),    // 160: 0b010000100000
        val8!(0xe5, 5),    // 161: 0b010000100001
        val8!(0xe5, 5),    // 162: 0b010000100010
        val8!(0xe5, 5),    // 163: 0b010000100011
        val8!(0xab, 6),    // 164: 0b010000100100
        val8!(0xab, 6),    // 165: 0b010000100101
        val8!(0x7d, 6),    // 166: 0b010000100110
        val8!(0x7d, 6),    // 167: 0b010000100111
        val8!(0xd7, 5),    // 168: 0b010000101000
        val8!(0xd7, 5),    // 169: 0b010000101001
        val8!(0xd7, 5),    // 170: 0b010000101010
        val8!(0xd7, 5),    // 171: 0b010000101011
        val8!(0xe4, 5),    // 172: 0b010000101100
        val8!(0xe4, 5),    // 173: 0b010000101101
        val8!(0xe4, 5),    // 174: 0b010000101110
        val8!(0xe4, 5),    // 175: 0b010000101111
        val8!(0x8c, 5),    // 176: 0b010000110000
        val8!(0x8c, 5),    // 177: 0b010000110001
        val8!(0x8c, 5),    // 178: 0b010000110010
        val8!(0x8c, 5),    // 179: 0b010000110011
        val8!(0xc8, 5),    // 180: 0b010000110100
        val8!(0xc8, 5),    // 181: 0b010000110101
        val8!(0xc8, 5),    // 182: 0b010000110110
        val8!(0xc8, 5),    // 183: 0b010000110111
        val8!(0x4e, 6),    // 184: 0b010000111000
        val8!(0x4e, 6),    // 185: 0b010000111001
        val8!(0x2e, 6),    // 186: 0b010000111010
        val8!(0x2e, 6),    // 187: 0b010000111011
        val8!(0x3e, 5),    // 188: 0b010000111100
        val8!(0x3e, 5),    // 189: 0b010000111101
        val8!(0x3e, 5),    // 190: 0b010000111110
        val8!(0x3e, 5),    // 191: 0b010000111111
        val8!(0x6d, 5),    // 192: 0b010001000000
        val8!(0x6d, 5),    // 193: 0b010001000001
        val8!(0x6d, 5),    // 194: 0b010001000010
        val8!(0x6d, 5),    // 195: 0b010001000011
        val8!(0xd6, 5),    // 196: 0b010001000100
        val8!(0xd6, 5),    // 197: 0b010001000101
        val8!(0xd6, 5),    // 198: 0b010001000110
        val8!(0xd6, 5),    // 199: 0b010001000111
        val8!(0xe3, 5),    // 200: 0b010001001000
        val8!(0xe3, 5),    // 201: 0b010001001001
        val8!(0xe3, 5),    // 202: 0b010001001010
        val8!(0xe3, 5),    // 203: 0b010001001011
        val8!(0x9b, 5),    // 204: 0b010001001100
        val8!(0x9b, 5),    // 205: 0b010001001101
        val8!(0x9b, 5),    // 206: 0b010001001110
        val8!(0x9b, 5),    // 207: 0b010001001111
        val8!(0xb9, 5),    // 208: 0b010001010000
        val8!(0xb9, 5),    // 209: 0b010001010001
        val8!(0xb9, 5),    // 210: 0b010001010010
        val8!(0xb9, 5),    // 211: 0b010001010011
        val8!(0xaa, 5),    // 212: 0b010001010100
        val8!(0xaa, 5),    // 213: 0b010001010101
        val8!(0xaa, 5),    // 214: 0b010001010110
        val8!(0xaa, 5),    // 215: 0b010001010111
        val8!(0xe2, 5),    // 216: 0b010001011000
        val8!(0xe2, 5),    // 217: 0b010001011001
        val8!(0xe2, 5),    // 218: 0b010001011010
        val8!(0xe2, 5),    // 219: 0b010001011011
        val8!(0x1e, 5),    // 220: 0b010001011100
        val8!(0x1e, 5),    // 221: 0b010001011101
        val8!(0x1e, 5),    // 222: 0b010001011110
        val8!(0x1e, 5),    // 223: 0b010001011111
        val8!(0xe1, 5),    // 224: 0b010001100000
        val8!(0xe1, 5),    // 225: 0b010001100001
        val8!(0xe1, 5),    // 226: 0b010001100010
        val8!(0xe1, 5),    // 227: 0b010001100011
        val8!(0x5d, 5),    // 228: 0b010001100100
        val8!(0x5d, 5),    // 229: 0b010001100101
        val8!(0x5d, 5),    // 230: 0b010001100110
        val8!(0x5d, 5),    // 231: 0b010001100111
        val8!(0xd5, 5),    // 232: 0b010001101000
        val8!(0xd5, 5),    // 233: 0b010001101001
        val8!(0xd5, 5),    // 234: 0b010001101010
        val8!(0xd5, 5),    // 235: 0b010001101011
        val8!(0x7c, 5),    // 236: 0b010001101100
        val8!(0x7c, 5),    // 237: 0b010001101101
        val8!(0x7c, 5),    // 238: 0b010001101110
        val8!(0x7c, 5),    // 239: 0b010001101111
        val8!(0xc7, 5),    // 240: 0b010001110000
        val8!(0xc7, 5),    // 241: 0b010001110001
        val8!(0xc7, 5),    // 242: 0b010001110010
        val8!(0xc7, 5),    // 243: 0b010001110011
        val8!(0x4d, 5),    // 244: 0b010001110100
        val8!(0x4d, 5),    // 245: 0b010001110101
        val8!(0x4d, 5),    // 246: 0b010001110110
        val8!(0x4d, 5),    // 247: 0b010001110111
        val8!(0x8b, 5),    // 248: 0b010001111000
        val8!(0x8b, 5),    // 249: 0b010001111001
        val8!(0x8b, 5),    // 250: 0b010001111010
        val8!(0x8b, 5),    // 251: 0b010001111011
        val8!(0xb8, 5),    // 252: 0b010001111100
        val8!(0xb8, 5),    // 253: 0b010001111101
        val8!(0xb8, 5),    // 254: 0b010001111110
        val8!(0xb8, 5),    // 255: 0b010001111111
        val8!(0xd4, 5),    // 256: 0b01001000000
        val8!(0xd4, 5),    // 257: 0b01001000001
        val8!(0x9a, 5),    // 258: 0b01001000010
        val8!(0x9a, 5),    // 259: 0b01001000011
        val8!(0xa9, 5),    // 260: 0b01001000100
        val8!(0xa9, 5),    // 261: 0b01001000101
        val8!(0x6c, 5),    // 262: 0b01001000110
        val8!(0x6c, 5),    // 263: 0b01001000111
        val8!(0xc6, 5),    // 264: 0b01001001000
        val8!(0xc6, 5),    // 265: 0b01001001001
        val8!(0x3d, 5),    // 266: 0b01001001010
        val8!(0x3d, 5),    // 267: 0b01001001011
        val8!(0xd3, 5),    // 268: 0b01001001100
        val8!(0xd3, 5),    // 269: 0b01001001101
        val8!(0x2d, 5),    // 270: 0b01001001110
        val8!(0x2d, 5),    // 271: 0b01001001111
        val8!(0xd2, 5),    // 272: 0b01001010000
        val8!(0xd2, 5),    // 273: 0b01001010001
        val8!(0x1d, 5),    // 274: 0b01001010010
        val8!(0x1d, 5),    // 275: 0b01001010011
        val8!(0x7b, 5),    // 276: 0b01001010100
        val8!(0x7b, 5),    // 277: 0b01001010101
        val8!(0xb7, 5),    // 278: 0b01001010110
        val8!(0xb7, 5),    // 279: 0b01001010111
        val8!(0xd1, 5),    // 280: 0b01001011000
        val8!(0xd1, 5),    // 281: 0b01001011001
        val8!(0x5c, 5),    // 282: 0b01001011010
        val8!(0x5c, 5),    // 283: 0b01001011011
        val8!(0xc5, 5),    // 284: 0b01001011100
        val8!(0xc5, 5),    // 285: 0b01001011101
        val8!(0x8a, 5),    // 286: 0b01001011110
        val8!(0x8a, 5),    // 287: 0b01001011111
        val8!(0xa8, 5),    // 288: 0b01001100000
        val8!(0xa8, 5),    // 289: 0b01001100001
        val8!(0x99, 5),    // 290: 0b01001100010
        val8!(0x99, 5),    // 291: 0b01001100011
        val8!(0x4c, 5),    // 292: 0b01001100100
        val8!(0x4c, 5),    // 293: 0b01001100101
        val8!(0xc4, 5),    // 294: 0b01001100110
        val8!(0xc4, 5),    // 295: 0b01001100111
        val8!(0x6b, 5),    // 296: 0b01001101000
        val8!(0x6b, 5),    // 297: 0b01001101001
        val8!(0xb6, 5),    // 298: 0b01001101010
        val8!(0xb6, 5),    // 299: 0b01001101011
        val8!(0xd0, 6),    // 300: 0b01001101100
        val8!(0x0c, 6),    // 301: 0b01001101101
        val8!(0x3c, 5),    // 302: 0b01001101110
        val8!(0x3c, 5),    // 303: 0b01001101111
        val8!(0xc3, 5),    // 304: 0b01001110000
        val8!(0xc3, 5),    // 305: 0b01001110001
        val8!(0x7a, 5),    // 306: 0b01001110010
        val8!(0x7a, 5),    // 307: 0b01001110011
        val8!(0xa7, 5),    // 308: 0b01001110100
        val8!(0xa7, 5),    // 309: 0b01001110101
        val8!(0x2c, 5),    // 310: 0b01001110110
        val8!(0x2c, 5),    // 311: 0b01001110111
        val8!(0xc2, 5),    // 312: 0b01001111000
        val8!(0xc2, 5),    // 313: 0b01001111001
        val8!(0x5b, 5),    // 314: 0b01001111010
        val8!(0x5b, 5),    // 315: 0b01001111011
        val8!(0xb5, 5),    // 316: 0b01001111100
        val8!(0xb5, 5),    // 317: 0b01001111101
        val8!(0x1c, 5),    // 318: 0b01001111110
        val8!(0x1c, 5),    // 319: 0b01001111111
        val8!(0x89, 5),    // 320: 0b01010000000
        val8!(0x89, 5),    // 321: 0b01010000001
        val8!(0x98, 5),    // 322: 0b01010000010
        val8!(0x98, 5),    // 323: 0b01010000011
        val8!(0xc1, 5),    // 324: 0b01010000100
        val8!(0xc1, 5),    // 325: 0b01010000101
        val8!(0x4b, 5),    // 326: 0b01010000110
        val8!(0x4b, 5),    // 327: 0b01010000111
        val8!(0xc0, 6),    // 328: 0b01010001000
        val8!(0x0b, 6),    // 329: 0b01010001001
        val8!(0x3b, 5),    // 330: 0b01010001010
        val8!(0x3b, 5),    // 331: 0b01010001011
        val8!(0xb0, 6),    // 332: 0b01010001100
        val8!(0x0a, 6),    // 333: 0b01010001101
        val8!(0x1a, 5),    // 334: 0b01010001110
        val8!(0x1a, 5),    // 335: 0b01010001111
        val8!(0xb4, 4),    // 336: 0b01010010000
        val8!(0xb4, 4),    // 337: 0b01010010001
        val8!(0xb4, 4),    // 338: 0b01010010010
        val8!(0xb4, 4),    // 339: 0b01010010011
        val8!(0x6a, 5),    // 340: 0b01010010100
        val8!(0x6a, 5),    // 341: 0b01010010101
        val8!(0xa6, 5),    // 342: 0b01010010110
        val8!(0xa6, 5),    // 343: 0b01010010111
        val8!(0x79, 5),    // 344: 0b01010011000
        val8!(0x79, 5),    // 345: 0b01010011001
        val8!(0x97, 5),    // 346: 0b01010011010
        val8!(0x97, 5),    // 347: 0b01010011011
        val8!(0xa0, 6),    // 348: 0b01010011100
        val8!(0x09, 6),    // 349: 0b01010011101
        val8!(0x90, 5),    // 350: 0b01010011110
        val8!(0x90, 5),    // 351: 0b01010011111
        val8!(0xb3, 4),    // 352: 0b01010100000
        val8!(0xb3, 4),    // 353: 0b01010100001
        val8!(0xb3, 4),    // 354: 0b01010100010
        val8!(0xb3, 4),    // 355: 0b01010100011
        val8!(0x88, 4),    // 356: 0b01010100100
        val8!(0x88, 4),    // 357: 0b01010100101
        val8!(0x88, 4),    // 358: 0b01010100110
        val8!(0x88, 4),    // 359: 0b01010100111
        val8!(0x2b, 5),    // 360: 0b01010101000
        val8!(0x2b, 5),    // 361: 0b01010101001
        val8!(0x5a, 5),    // 362: 0b01010101010
        val8!(0x5a, 5),    // 363: 0b01010101011
        val8!(0xb2, 4),    // 364: 0b01010101100
        val8!(0xb2, 4),    // 365: 0b01010101101
        val8!(0xb2, 4),    // 366: 0b01010101110
        val8!(0xb2, 4),    // 367: 0b01010101111
        val8!(0xa5, 5),    // 368: 0b01010110000
        val8!(0xa5, 5),    // 369: 0b01010110001
        val8!(0x1b, 5),    // 370: 0b01010110010
        val8!(0x1b, 5),    // 371: 0b01010110011
        val8!(0xb1, 5),    // 372: 0b01010110100
        val8!(0xb1, 5),    // 373: 0b01010110101
        val8!(0x69, 5),    // 374: 0b01010110110
        val8!(0x69, 5),    // 375: 0b01010110111
        val8!(0x96, 4),    // 376: 0b01010111000
        val8!(0x96, 4),    // 377: 0b01010111001
        val8!(0x96, 4),    // 378: 0b01010111010
        val8!(0x96, 4),    // 379: 0b01010111011
        val8!(0xa4, 4),    // 380: 0b01010111100
        val8!(0xa4, 4),    // 381: 0b01010111101
        val8!(0xa4, 4),    // 382: 0b01010111110
        val8!(0xa4, 4),    // 383: 0b01010111111
        val8!(0x4a, 5),    // 384: 0b0101100000
        val8!(0x78, 5),    // 385: 0b0101100001
        val8!(0x87, 4),    // 386: 0b0101100010
        val8!(0x87, 4),    // 387: 0b0101100011
        val8!(0x3a, 4),    // 388: 0b0101100100
        val8!(0x3a, 4),    // 389: 0b0101100101
        val8!(0xa3, 4),    // 390: 0b0101100110
        val8!(0xa3, 4),    // 391: 0b0101100111
        val8!(0x59, 4),    // 392: 0b0101101000
        val8!(0x59, 4),    // 393: 0b0101101001
        val8!(0x95, 4),    // 394: 0b0101101010
        val8!(0x95, 4),    // 395: 0b0101101011
        val8!(0x2a, 4),    // 396: 0b0101101100
        val8!(0x2a, 4),    // 397: 0b0101101101
        val8!(0xa2, 4),    // 398: 0b0101101110
        val8!(0xa2, 4),    // 399: 0b0101101111
        val8!(0xa1, 4),    // 400: 0b0101110000
        val8!(0xa1, 4),    // 401: 0b0101110001
        val8!(0x68, 4),    // 402: 0b0101110010
        val8!(0x68, 4),    // 403: 0b0101110011
        val8!(0x86, 4),    // 404: 0b0101110100
        val8!(0x86, 4),    // 405: 0b0101110101
        val8!(0x77, 4),    // 406: 0b0101110110
        val8!(0x77, 4),    // 407: 0b0101110111
        val8!(0x49, 4),    // 408: 0b0101111000
        val8!(0x49, 4),    // 409: 0b0101111001
        val8!(0x94, 4),    // 410: 0b0101111010
        val8!(0x94, 4),    // 411: 0b0101111011
        val8!(0x39, 4),    // 412: 0b0101111100
        val8!(0x39, 4),    // 413: 0b0101111101
        val8!(0x93, 4),    // 414: 0b0101111110
        val8!(0x93, 4),    // 415: 0b0101111111
        val8!(0x58, 4),    // 416: 0b011000000
        val8!(0x85, 4),    // 417: 0b011000001
        val8!(0x29, 4),    // 418: 0b011000010
        val8!(0x67, 4),    // 419: 0b011000011
        val8!(0x76, 4),    // 420: 0b011000100
        val8!(0x92, 4),    // 421: 0b011000101
        val8!(0x19, 4),    // 422: 0b011000110
        val8!(0x91, 4),    // 423: 0b011000111
        val8!(0x48, 4),    // 424: 0b011001000
        val8!(0x84, 4),    // 425: 0b011001001
        val8!(0x57, 4),    // 426: 0b011001010
        val8!(0x75, 4),    // 427: 0b011001011
        val8!(0x38, 4),    // 428: 0b011001100
        val8!(0x83, 4),    // 429: 0b011001101
        val8!(0x66, 4),    // 430: 0b011001110
        val8!(0x28, 4),    // 431: 0b011001111
        val8!(0x82, 4),    // 432: 0b0110100000
        val8!(0x82, 4),    // 433: 0b0110100001
        val8!(0x18, 4),    // 434: 0b0110100010
        val8!(0x18, 4),    // 435: 0b0110100011
        val8!(0x47, 4),    // 436: 0b0110100100
        val8!(0x47, 4),    // 437: 0b0110100101
        val8!(0x74, 4),    // 438: 0b0110100110
        val8!(0x74, 4),    // 439: 0b0110100111
        val8!(0x81, 4),    // 440: 0b0110101000
        val8!(0x81, 4),    // 441: 0b0110101001
        val8!(0x08, 5),    // 442: 0b0110101010
        val8!(0x80, 5),    // 443: 0b0110101011
        val8!(0x56, 4),    // 444: 0b0110101100
        val8!(0x56, 4),    // 445: 0b0110101101
        val8!(0x65, 4),    // 446: 0b0110101110
        val8!(0x65, 4),    // 447: 0b0110101111
        val8!(0x17, 4),    // 448: 0b0110110000
        val8!(0x17, 4),    // 449: 0b0110110001
        val8!(0x07, 5),    // 450: 0b0110110010
        val8!(0x70, 5),    // 451: 0b0110110011
        val8!(0x73, 3),    // 452: 0b0110110100
        val8!(0x73, 3),    // 453: 0b0110110101
        val8!(0x73, 3),    // 454: 0b0110110110
        val8!(0x73, 3),    // 455: 0b0110110111
        val8!(0x37, 4),    // 456: 0b0110111000
        val8!(0x37, 4),    // 457: 0b0110111001
        val8!(0x27, 4),    // 458: 0b0110111010
        val8!(0x27, 4),    // 459: 0b0110111011
        val8!(0x72, 3),    // 460: 0b0110111100
        val8!(0x72, 3),    // 461: 0b0110111101
        val8!(0x72, 3),    // 462: 0b0110111110
        val8!(0x72, 3),    // 463: 0b0110111111
        val8!(0x46, 3),    // 464: 0b01110000
        val8!(0x64, 3),    // 465: 0b01110001
        val8!(0x55, 3),    // 466: 0b01110010
        val8!(0x71, 3),    // 467: 0b01110011
        val8!(0x36, 3),    // 468: 0b01110100
        val8!(0x63, 3),    // 469: 0b01110101
        val8!(0x45, 3),    // 470: 0b01110110
        val8!(0x54, 3),    // 471: 0b01110111
        val8!(0x26, 3),    // 472: 0b011110000
        val8!(0x26, 3),    // 473: 0b011110001
        val8!(0x62, 3),    // 474: 0b011110010
        val8!(0x62, 3),    // 475: 0b011110011
        val8!(0x16, 3),    // 476: 0b011110100
        val8!(0x16, 3),    // 477: 0b011110101
        val8!(0x61, 3),    // 478: 0b011110110
        val8!(0x61, 3),    // 479: 0b011110111
        val8!(0x06, 4),    // 480: 0b011111000
        val8!(0x60, 4),    // 481: 0b011111001
        val8!(0x35, 3),    // 482: 0b011111010
        val8!(0x35, 3),    // 483: 0b011111011
        val8!(0x53, 3),    // 484: 0b011111100
        val8!(0x53, 3),    // 485: 0b011111101
        val8!(0x44, 3),    // 486: 0b011111110
        val8!(0x44, 3),    // 487: 0b011111111
        val8!(0x25, 3),    // 488: 0b100000000
        val8!(0x25, 3),    // 489: 0b100000001
        val8!(0x52, 3),    // 490: 0b100000010
        val8!(0x52, 3),    // 491: 0b100000011
        val8!(0x15, 3),    // 492: 0b100000100
        val8!(0x15, 3),    // 493: 0b100000101
        val8!(0x05, 4),    // 494: 0b100000110
        val8!(0x50, 4),    // 495: 0b100000111
        val8!(0x51, 2),    // 496: 0b100001000
        val8!(0x51, 2),    // 497: 0b100001001
        val8!(0x51, 2),    // 498: 0b100001010
        val8!(0x51, 2),    // 499: 0b100001011
        val8!(0x34, 3),    // 500: 0b100001100
        val8!(0x34, 3),    // 501: 0b100001101
        val8!(0x43, 3),    // 502: 0b100001110
        val8!(0x43, 3),    // 503: 0b100001111
        val8!(0x24, 2),    // 504: 0b1000100
        val8!(0x42, 2),    // 505: 0b1000101
        val8!(0x33, 2),    // 506: 0b1000110
        val8!(0x14, 2),    // 507: 0b1000111
        val8!(0x41, 2),    // 508: 0b10010000
        val8!(0x41, 2),    // 509: 0b10010001
        val8!(0x04, 3),    // 510: 0b10010010
        val8!(0x40, 3),    // 511: 0b10010011
        val8!(0x23, 2),    // 512: 0b10010100
        val8!(0x23, 2),    // 513: 0b10010101
        val8!(0x32, 2),    // 514: 0b10010110
        val8!(0x32, 2),    // 515: 0b10010111
        val8!(0x13, 1),    // 516: 0b100110
        val8!(0x31, 1),    // 517: 0b100111
        val8!(0x03, 2),    // 518: 0b1010000
        val8!(0x30, 2),    // 519: 0b1010001
        val8!(0x22, 1),    // 520: 0b1010010
        val8!(0x22, 1),    // 521: 0b1010011
        val8!(0x02, 1),    // 522: 0b101110
        val8!(0x20, 1),    // 523: 0b101111
    ],
    n_init_bits: 5,
    n_table_bits: 12,
};

/// Count1 table A (table 32).
pub const QUADS_HUFFMAN_TABLE_A: HuffmanTable<H8> = HuffmanTable {
    data: &[
        jmp8!(16, 2),      // 0: 0b0000
        jmp8!(20, 2),      // 1: 0b0001
        jmp8!(24, 1),      // 2: 0b0010
        jmp8!(26, 1),      // 3: 0b0011
        val8!(0x02, 4),    // 4: 0b0100
        val8!(0x01, 4),    // 5: 0b0101
        val8!(0x04, 4),    // 6: 0b0110
        val8!(0x08, 4),    // 7: 0b0111
        val8!(0x00, 1),    // 8: 0b1000
        val8!(0x00, 1),    // 9: 0b1001
        val8!(0x00, 1),    // 10: 0b1010
        val8!(0x00, 1),    // 11: 0b1011
        val8!(0x00, 1),    // 12: 0b1100
        val8!(0x00, 1),    // 13: 0b1101
        val8!(0x00, 1),    // 14: 0b1110
        val8!(0x00, 1),    // 15: 0b1111
        val8!(0x0b, 2),    // 16: 0b000000
        val8!(0x0f, 2),    // 17: 0b000001
        val8!(0x0d, 2),    // 18: 0b000010
        val8!(0x0e, 2),    // 19: 0b000011
        val8!(0x07, 2),    // 20: 0b000100
        val8!(0x05, 2),    // 21: 0b000101
        val8!(0x09, 1),    // 22: 0b000110
        val8!(0x09, 1),    // 23: 0b000111
        val8!(0x06, 1),    // 24: 0b00100
        val8!(0x03, 1),    // 25: 0b00101
        val8!(0x0a, 1),    // 26: 0b00110
        val8!(0x0c, 1),    // 27: 0b00111
    ],
    n_init_bits: 4,
    n_table_bits: 6,
};

/// Count1 table B (table 33).
pub const QUADS_HUFFMAN_TABLE_B: HuffmanTable<H8> = HuffmanTable {
    data: &[
        val8!(0x0f, 4),    // 0: 0b0000
        val8!(0x0e, 4),    // 1: 0b0001
        val8!(0x0d, 4),    // 2: 0b0010
        val8!(0x0c, 4),    // 3: 0b0011
        val8!(0x0b, 4),    // 4: 0b0100
        val8!(0x0a, 4),    // 5: 0b0101
        val8!(0x09, 4),    // 6: 0b0110
        val8!(0x08, 4),    // 7: 0b0111
        val8!(0x07, 4),    // 8: 0b1000
        val8!(0x06, 4),    // 9: 0b1001
        val8!(0x05, 4),    // 10: 0b1010
        val8!(0x04, 4),    // 11: 0b1011
        val8!(0x03, 4),    // 12: 0b1100
        val8!(0x02, 4),    // 13: 0b1101
        val8!(0x01, 4),    // 14: 0b1110
        val8!(0x00, 4),    // 15: 0b1111
    ],
    n_init_bits: 4,
    n_table_bits: 4,
};
