// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Detection of the non-audio regions that may surround or precede MPEG audio frames.

use mpadec_core::errors::Result;

use super::buffer::ReadBuffer;

/// The length of an ID3v2 tag header (and footer).
pub const ID3V2_HEADER_LEN: usize = 10;

/// The length of an ID3v1 tag.
pub const ID3V1_LEN: usize = 128;

/// The maximum number of chunks walked to find the data chunk of a RIFF/WAVE file.
const MAX_RIFF_CHUNKS: usize = 64;

/// Returns true if `word` begins an ID3v2 tag.
#[inline(always)]
pub fn is_id3v2_sync(word: u32) -> bool {
    word >> 8 == 0x49_44_33
}

/// Returns true if `word` begins an ID3v1 tag.
#[inline(always)]
pub fn is_id3v1_sync(word: u32) -> bool {
    word >> 8 == 0x54_41_47
}

/// Returns true if `word` begins a RIFF file.
#[inline(always)]
pub fn is_riff_sync(word: u32) -> bool {
    word == 0x52_49_46_46
}

/// Gets the total length of the ID3v2 tag whose header is `buf`, or `None` if the header is
/// invalid.
pub fn id3v2_len(buf: &[u8]) -> Option<u64> {
    if buf.len() < ID3V2_HEADER_LEN || &buf[..3] != b"ID3" {
        return None;
    }

    // The version bytes are never 0xff.
    if buf[3] == 0xff || buf[4] == 0xff {
        return None;
    }

    // The tag size is a 28-bit synchsafe integer.
    let mut size = 0u64;

    for &byte in &buf[6..10] {
        if byte & 0x80 != 0 {
            return None;
        }
        size = (size << 7) | u64::from(byte);
    }

    let footer = if buf[5] & 0x10 != 0 { ID3V2_HEADER_LEN as u64 } else { 0 };

    Some(ID3V2_HEADER_LEN as u64 + size + footer)
}

/// Gets the length of the RIFF/WAVE header starting at `offset`, up to the start of the payload
/// of its data chunk. Returns `None` if the header is not a WAVE file, or the stream ends first.
pub fn riff_header_len(reader: &mut ReadBuffer, offset: u64) -> Result<Option<u64>> {
    const WAVE: u32 = 0x57_41_56_45;
    const FMT: u32 = 0x66_6d_74_20;
    const DATA: u32 = 0x64_61_74_61;

    if reader.read_be_u32(offset + 8)? != Some(WAVE) {
        return Ok(None);
    }

    // The format chunk comes first.
    if reader.read_be_u32(offset + 12)? != Some(FMT) {
        return Ok(None);
    }

    let mut pos = offset + 12;

    for _ in 0..MAX_RIFF_CHUNKS {
        let id = match reader.read_be_u32(pos)? {
            Some(id) => id,
            None => return Ok(None),
        };

        let size = match reader.read_u32(pos + 4)? {
            Some(size) => u64::from(size),
            None => return Ok(None),
        };

        if id == DATA {
            return Ok(Some(pos + 8 - offset));
        }

        // Chunks are padded to an even length.
        pos += 8 + size + (size & 1);
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn verify_syncs() {
        assert!(is_id3v2_sync(u32::from_be_bytes(*b"ID3\x04")));
        assert!(is_id3v1_sync(u32::from_be_bytes(*b"TAGx")));
        assert!(is_riff_sync(u32::from_be_bytes(*b"RIFF")));
        assert!(!is_id3v2_sync(0xfffb_9064));
    }

    #[test]
    fn verify_id3v2_len() {
        // Size 0x0201 in synchsafe form is 257 bytes.
        let header = *b"ID3\x04\x00\x00\x00\x00\x02\x01";
        assert_eq!(id3v2_len(&header), Some(10 + 257));

        // A footer adds another 10 bytes.
        let header = *b"ID3\x04\x00\x10\x00\x00\x00\x10";
        assert_eq!(id3v2_len(&header), Some(10 + 16 + 10));

        // Sizes are synchsafe.
        let header = *b"ID3\x04\x00\x00\x00\x00\x00\x80";
        assert_eq!(id3v2_len(&header), None);

        assert_eq!(id3v2_len(b"ID3\x04"), None);
    }

    fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut buf = id.to_vec();
        buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        buf.extend_from_slice(payload);
        if payload.len() & 1 == 1 {
            buf.push(0);
        }
        buf
    }

    #[test]
    fn verify_riff_header_len() {
        let mut file = b"RIFF\x00\x00\x00\x00WAVE".to_vec();
        file.extend(chunk(b"fmt ", &[0; 16]));
        file.extend(chunk(b"fact", &[0; 3]));
        file.extend(chunk(b"data", &[0xff; 8]));

        let mut reader = ReadBuffer::new(Box::new(Cursor::new(file)), 16);

        // RIFF header (12) + fmt (24) + fact (12) + data chunk header (8).
        assert_eq!(riff_header_len(&mut reader, 0).unwrap(), Some(56));
    }

    #[test]
    fn verify_riff_header_len_rejects_other_forms() {
        let mut file = b"RIFF\x00\x00\x00\x00AVI ".to_vec();
        file.extend(chunk(b"fmt ", &[0; 16]));

        let mut reader = ReadBuffer::new(Box::new(Cursor::new(file)), 16);
        assert_eq!(riff_header_len(&mut reader, 0).unwrap(), None);

        // No data chunk before the end of the stream.
        let mut file = b"RIFF\x00\x00\x00\x00WAVE".to_vec();
        file.extend(chunk(b"fmt ", &[0; 16]));

        let mut reader = ReadBuffer::new(Box::new(Cursor::new(file)), 16);
        assert_eq!(riff_header_len(&mut reader, 0).unwrap(), None);
    }
}
