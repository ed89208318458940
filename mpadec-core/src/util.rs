// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `util` module provides a repository of commonly used utility functions.

pub mod bits {
    //! Utilities for bit manipulation.

    /// Sign extends an arbitrary, 32-bit or less, signed two's complement integer stored within an
    /// u32 to a full width i32.
    #[inline(always)]
    pub fn sign_extend_leq32_to_i32(value: u32, width: u32) -> i32 {
        // Rust uses an arithmetic shift right (the original sign bit is repeatedly shifted on) for
        // signed integer types. Therefore, shift the value to the right-hand side of the integer,
        // then shift it back to extend the sign bit.
        (value.wrapping_shl(32 - width) as i32).wrapping_shr(32 - width)
    }
}

#[cfg(test)]
mod tests {
    use super::bits::*;

    #[test]
    fn verify_sign_extend_leq32_to_i32() {
        assert_eq!(sign_extend_leq32_to_i32(0b0111, 4), 7);
        assert_eq!(sign_extend_leq32_to_i32(0b1000, 4), -8);
        assert_eq!(sign_extend_leq32_to_i32(0b1111, 4), -1);
        assert_eq!(sign_extend_leq32_to_i32(0x1, 2), 1);
        assert_eq!(sign_extend_leq32_to_i32(0x7fff, 16), 32767);
        assert_eq!(sign_extend_leq32_to_i32(0x8000, 16), -32768);
        assert_eq!(sign_extend_leq32_to_i32(0xffff_ffff, 32), -1);
    }
}
