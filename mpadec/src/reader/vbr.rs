// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io;

use mpadec_core::io::{BufReader, ReadBytes};

use crate::common::{FrameHeader, MpegLayer};
use crate::header::MPEG_HEADER_LEN;

/// The offset of a VBRI tag from the start of the frame.
const VBRI_OFFSET: usize = MPEG_HEADER_LEN + 32;

/// The encoder that wrote a VBR info frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbrTag {
    /// A Xing tag, written by VBR encoders.
    Xing,
    /// An Info tag. The same layout as Xing, written by CBR encoders.
    Info,
    /// A Fraunhofer VBRI tag.
    Vbri,
}

/// Stream information carried by the first frame of a stream in place of audio.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VbrInfo {
    pub tag: VbrTag,
    /// The number of audio frames in the stream.
    pub frames: Option<u32>,
    /// The number of bytes of audio in the stream.
    pub bytes: Option<u32>,
    /// The encoder delay in samples.
    pub delay: Option<u16>,
}

/// Reads the VBR info of a frame, if it is an info frame. `frame` is the whole frame, starting
/// with the header word.
pub fn read_vbr_info(header: &FrameHeader, frame: &[u8]) -> Option<VbrInfo> {
    // Only layer 3 frames carry VBR info.
    if header.layer != MpegLayer::Layer3 {
        return None;
    }

    let crc_len = if header.has_crc() { 2 } else { 0 };
    let xing_offset = MPEG_HEADER_LEN + crc_len + header.side_info_len();

    if let Some(buf) = frame.get(xing_offset..) {
        if let Ok(Some(info)) = read_xing(&mut BufReader::new(buf)) {
            return Some(info);
        }
    }

    if let Some(buf) = frame.get(VBRI_OFFSET..) {
        if let Ok(Some(info)) = read_vbri(&mut BufReader::new(buf)) {
            return Some(info);
        }
    }

    None
}

fn read_xing<B: ReadBytes>(reader: &mut B) -> io::Result<Option<VbrInfo>> {
    let tag = match &reader.read_quad_bytes()? {
        b"Xing" => VbrTag::Xing,
        b"Info" => VbrTag::Info,
        _ => return Ok(None),
    };

    let flags = reader.read_be_u32()?;

    let frames = if flags & 0x1 != 0 { Some(reader.read_be_u32()?) } else { None };
    let bytes = if flags & 0x2 != 0 { Some(reader.read_be_u32()?) } else { None };

    Ok(Some(VbrInfo { tag, frames, bytes, delay: None }))
}

fn read_vbri<B: ReadBytes>(reader: &mut B) -> io::Result<Option<VbrInfo>> {
    if &reader.read_quad_bytes()? != b"VBRI" {
        return Ok(None);
    }

    let _version = reader.read_be_u16()?;
    let delay = reader.read_be_u16()?;
    let _quality = reader.read_be_u16()?;
    let bytes = reader.read_be_u32()?;
    let frames = reader.read_be_u32()?;

    Ok(Some(VbrInfo { tag: VbrTag::Vbri, frames: Some(frames), bytes: Some(bytes), delay: Some(delay) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_frame_header;

    /// A MPEG1 layer 3, 128 kbit/s, 48 kHz, mono frame.
    fn mono_frame(word: u32) -> (FrameHeader, Vec<u8>) {
        let header = parse_frame_header(word).unwrap();
        let mut frame = vec![0u8; header.frame_size.unwrap()];
        frame[..4].copy_from_slice(&word.to_be_bytes());
        (header, frame)
    }

    #[test]
    fn verify_xing() {
        let (header, mut frame) = mono_frame(0xfffb_94c0);

        // Mono MPEG1 side info is 17 bytes long.
        frame[21..25].copy_from_slice(b"Xing");
        frame[25..29].copy_from_slice(&3u32.to_be_bytes());
        frame[29..33].copy_from_slice(&1000u32.to_be_bytes());
        frame[33..37].copy_from_slice(&417_000u32.to_be_bytes());

        let info = read_vbr_info(&header, &frame).unwrap();

        assert_eq!(info.tag, VbrTag::Xing);
        assert_eq!(info.frames, Some(1000));
        assert_eq!(info.bytes, Some(417_000));
        assert_eq!(info.delay, None);
    }

    #[test]
    fn verify_info_with_crc() {
        let (header, mut frame) = mono_frame(0xfffa_94c0);

        // Only the byte count is present.
        frame[23..27].copy_from_slice(b"Info");
        frame[27..31].copy_from_slice(&2u32.to_be_bytes());
        frame[31..35].copy_from_slice(&5000u32.to_be_bytes());

        let info = read_vbr_info(&header, &frame).unwrap();

        assert_eq!(info.tag, VbrTag::Info);
        assert_eq!(info.frames, None);
        assert_eq!(info.bytes, Some(5000));
    }

    #[test]
    fn verify_vbri() {
        let (header, mut frame) = mono_frame(0xfffb_94c0);

        frame[36..40].copy_from_slice(b"VBRI");
        frame[40..42].copy_from_slice(&1u16.to_be_bytes());
        frame[42..44].copy_from_slice(&576u16.to_be_bytes());
        frame[44..46].copy_from_slice(&75u16.to_be_bytes());
        frame[46..50].copy_from_slice(&20_000u32.to_be_bytes());
        frame[50..54].copy_from_slice(&48u32.to_be_bytes());

        let info = read_vbr_info(&header, &frame).unwrap();

        assert_eq!(info.tag, VbrTag::Vbri);
        assert_eq!(info.frames, Some(48));
        assert_eq!(info.bytes, Some(20_000));
        assert_eq!(info.delay, Some(576));
    }

    #[test]
    fn verify_audio_frame_has_no_info() {
        let (header, frame) = mono_frame(0xfffb_94c0);
        assert!(read_vbr_info(&header, &frame).is_none());

        // Truncated frames are not info frames.
        assert!(read_vbr_info(&header, &frame[..30]).is_none());
    }
}
