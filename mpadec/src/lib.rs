// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]
// The following lints are allowed in all mpadec crates. Please see the workspace Cargo.toml for
// their justification.
#![allow(clippy::comparison_chain)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::identity_op)]
#![allow(clippy::manual_range_contains)]

//! A pure Rust MPEG-1, MPEG-2, and MPEG-2.5 audio decoder for layers I, II, and III.
//!
//! [`MpegFile`] is the entry point. It locates frames in any [`MediaSource`], skipping ID3 tags
//! and RIFF/WAVE headers, and decodes them into interleaved `f32` samples.
//!
//! ```no_run
//! use mpadec::MpegFile;
//!
//! let mut file = MpegFile::open("music.mp3")?;
//! let mut buf = vec![0f32; 4096];
//!
//! loop {
//!     let n = file.read_samples(&mut buf)?;
//!     if n == 0 {
//!         break;
//!     }
//!     // Use buf[..n].
//! }
//! # Ok::<(), mpadec::Error>(())
//! ```

// Shared modules.
mod common;
mod header;

// Stream reader and public API modules.
mod decoder;
mod file;
mod reader;
mod synthesis;

// Shared layer 1 & 2 decoder support module.
#[cfg(any(feature = "mp1", feature = "mp2"))]
mod layer12;

// Layer-specific decoder support modules.
#[cfg(feature = "mp1")]
mod layer1;
#[cfg(feature = "mp2")]
mod layer2;
#[cfg(feature = "mp3")]
mod huffman_tables;
#[cfg(feature = "mp3")]
mod layer3;
#[cfg(feature = "mp3")]
mod reservoir;

pub use common::{ChannelMode, Emphasis, FrameHeader, HeaderFlags, Mode, MpegLayer, MpegVersion};
pub use decoder::{DecoderOptions, FrameDecoder, StereoMode};
pub use file::{MpegFile, MpegFileOptions};
pub use reader::{Frame, ReaderOptions, StreamReader, VbrInfo, VbrTag};

pub use mpadec_core::errors::{Error, Result, SeekErrorKind};
pub use mpadec_core::io::{MediaSource, ReadOnlySource};
