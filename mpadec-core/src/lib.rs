// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! Shared plumbing for the `mpadec` MPEG audio decoder: byte sources, byte and bit readers,
//! Huffman decoding, checksums, and the common error type.

pub mod checksum;
pub mod errors;
pub mod io;
pub mod util;
