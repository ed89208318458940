use std::io::Cursor;
use std::thread;
use std::time::Duration;

use mpadec::{
    DecoderOptions, Error, MpegFile, MpegFileOptions, ReadOnlySource, ReaderOptions,
    SeekErrorKind, StereoMode, VbrTag,
};
use mpadec_core::checksum::Crc16Ansi;
use mpadec_core::io::Monitor;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// MPEG1 layer 1, 32 kbit/s, 32 kHz, stereo. 48 bytes.
const L1_STEREO: u32 = 0xffff_1800;
/// MPEG1 layer 1, 448 kbit/s, 32 kHz, joint stereo with an intensity bound of 4. 672 bytes.
const L1_JOINT: u32 = 0xffff_e840;
/// MPEG1 layer 1, 384 kbit/s, 48 kHz, mono, CRC protected. 384 bytes.
const L1_MONO_CRC: u32 = 0xfffe_c4c0;
/// MPEG1 layer 1, free format, 32 kHz, mono.
const L1_FREE_MONO: u32 = 0xffff_08c0;
/// MPEG1 layer 2, 128 kbit/s, 44.1 kHz, stereo. 417 bytes.
const L2_STEREO: u32 = 0xfffd_8000;
/// MPEG1 layer 3, 128 kbit/s, 44.1 kHz, joint stereo (mid-side). 417 bytes.
const L3_JOINT: u32 = 0xfffb_9064;
/// MPEG1 layer 3, 128 kbit/s, 44.1 kHz, joint stereo (intensity and mid-side). 417 bytes.
const L3_JOINT_IS: u32 = 0xfffb_9074;
/// MPEG1 layer 3, 128 kbit/s, 44.1 kHz, mono. 417 bytes.
const L3_MONO: u32 = 0xfffb_90c0;

/// Writes bits most-significant first.
#[derive(Default)]
struct BitWriter {
    buf: Vec<u8>,
    n_bits: usize,
}

impl BitWriter {
    fn put(&mut self, value: u32, bits: u32) {
        for i in (0..bits).rev() {
            if self.n_bits % 8 == 0 {
                self.buf.push(0);
            }
            if (value >> i) & 1 != 0 {
                *self.buf.last_mut().unwrap() |= 0x80 >> (self.n_bits % 8);
            }
            self.n_bits += 1;
        }
    }

    fn into_bytes(mut self, len: usize) -> Vec<u8> {
        assert!(self.buf.len() <= len);
        self.buf.resize(len, 0);
        self.buf
    }
}

fn frame(word: u32, payload: &[u8]) -> Vec<u8> {
    let mut frame = word.to_be_bytes().to_vec();
    frame.extend_from_slice(payload);
    frame
}

fn silent(word: u32, len: usize, n_frames: usize) -> Vec<u8> {
    frame(word, &vec![0; len - 4]).repeat(n_frames)
}

/// A layer 1 joint stereo frame with random allocations, scale factors, and samples in the lower
/// 8 sub-bands.
fn random_layer1_frame(rng: &mut SmallRng) -> Vec<u8> {
    const BOUND: usize = 4;

    let mut alloc = [[0u32; 32]; 2];
    let mut bits = BitWriter::default();

    for sb in 0..32 {
        let n_coded = if sb < BOUND { 2 } else { 1 };

        for ch in 0..n_coded {
            let code = if sb < 8 { rng.random_range(0..4) } else { 0 };
            bits.put(code, 4);
            alloc[ch][sb] = if code != 0 { code + 1 } else { 0 };
        }

        if sb >= BOUND {
            alloc[1][sb] = alloc[0][sb];
        }
    }

    for sb in 0..32 {
        for ch in 0..2 {
            if alloc[ch][sb] != 0 {
                bits.put(rng.random_range(0..63), 6);
            }
        }
    }

    for _ in 0..12 {
        for sb in 0..32 {
            let n_coded = if sb < BOUND { 2 } else { 1 };

            for ch in 0..n_coded {
                let n = alloc[ch][sb];
                if n != 0 {
                    bits.put(rng.random_range(0..(1 << n) - 1), n);
                }
            }
        }
    }

    frame(L1_JOINT, &bits.into_bytes(668))
}

fn random_stream(seed: u64, n_frames: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n_frames).flat_map(|_| random_layer1_frame(&mut rng)).collect()
}

fn open(stream: Vec<u8>) -> MpegFile {
    MpegFile::new(Box::new(Cursor::new(stream))).unwrap()
}

fn open_with(stream: Vec<u8>, options: &MpegFileOptions) -> MpegFile {
    MpegFile::with_options(Box::new(Cursor::new(stream)), options).unwrap()
}

fn decode_all(file: &mut MpegFile) -> Vec<f32> {
    let mut out = Vec::new();
    let mut buf = vec![0f32; 1000];

    loop {
        let n = file.read_samples(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }

    out
}

fn assert_close(a: &[f32], b: &[f32]) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!((x - y).abs() < 1e-4, "sample {} differs: {} != {}", i, x, y);
    }
}

#[test]
fn silent_layer1_stream() {
    let mut file = open(silent(L1_STEREO, 48, 10));

    assert_eq!(file.sample_rate(), 32_000);
    assert_eq!(file.channels(), 2);

    let samples = decode_all(&mut file);

    assert_eq!(samples.len(), 2 * 10 * 384);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn silent_layer2_stream() {
    let mut file = open(silent(L2_STEREO, 417, 5));

    assert_eq!(file.sample_rate(), 44_100);
    assert_eq!(file.sample_count().unwrap(), Some(5 * 1152));

    let samples = decode_all(&mut file);

    assert_eq!(samples.len(), 2 * 5 * 1152);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn one_second_layer3_stream() {
    // 38 frames of 1152 samples is just under 1 second at 44.1 kHz.
    let mut file = open(silent(L3_JOINT, 417, 38));

    assert_eq!(file.sample_rate(), 44_100);
    assert_eq!(file.channels(), 2);

    let duration = file.duration().unwrap().unwrap();
    let frame_duration = Duration::from_secs_f64(1152.0 / 44_100.0);
    assert!(duration <= Duration::from_secs(1));
    assert!(duration + frame_duration >= Duration::from_secs(1));

    let samples = decode_all(&mut file);

    assert_eq!(samples.len(), 2 * 38 * 1152);
    assert!(samples.iter().all(|&s| s == 0.0));
    assert!((samples.len() as i64 - 2 * 44_100).abs() <= 2 * 1152);
}

#[test]
fn layer3_seek() {
    let mut file = open(silent(L3_JOINT, 417, 10));

    file.set_position(5000).unwrap();
    assert_eq!(decode_all(&mut file).len(), 2 * (10 * 1152 - 5000));
    assert_eq!(file.position(), 10 * 1152);
}

#[test]
fn xing_frame_is_not_audio() {
    let mut info = vec![0u8; 417 - 4];
    // The Xing tag follows the 32 bytes of stereo side info.
    info[32..36].copy_from_slice(b"Xing");
    info[36..40].copy_from_slice(&1u32.to_be_bytes());
    info[40..44].copy_from_slice(&3u32.to_be_bytes());

    let mut stream = frame(L3_JOINT, &info);
    stream.extend(silent(L3_JOINT, 417, 3));

    let mut file = open(stream);

    let vbr = file.reader().vbr_info().unwrap();
    assert_eq!(vbr.tag, VbrTag::Xing);
    assert_eq!(file.sample_count().unwrap(), Some(3 * 1152));
    assert_eq!(decode_all(&mut file).len(), 2 * 3 * 1152);
}

/// A mono layer 1 payload with a tone in sub-band 0.
fn tone_payload() -> Vec<u8> {
    let mut bits = BitWriter::default();

    bits.put(3, 4);
    for _ in 1..32 {
        bits.put(0, 4);
    }
    bits.put(3, 6);
    for _ in 0..12 {
        bits.put(14, 4);
    }

    bits.into_bytes(378)
}

fn crc_frame(corrupt: bool) -> Vec<u8> {
    let payload = tone_payload();

    let mut crc = Crc16Ansi::new(0xffff);
    crc.process_double_bytes((L1_MONO_CRC as u16).to_be_bytes());
    crc.process_buf_bytes(&payload[..16]);

    let mut crc = crc.crc();
    if corrupt {
        crc ^= 0x5a5a;
    }

    let mut body = crc.to_be_bytes().to_vec();
    body.extend_from_slice(&payload);

    frame(L1_MONO_CRC, &body)
}

#[test]
fn crc_protected_frames() {
    let mut stream = crc_frame(false);
    stream.extend(crc_frame(true));
    stream.extend(crc_frame(false));

    // Without verification, every frame decodes.
    let mut file = open(stream.clone());
    assert_eq!(file.channels(), 1);
    assert_eq!(decode_all(&mut file).len(), 3 * 384);

    // With verification, the corrupt frame is skipped.
    let options = MpegFileOptions {
        decoder: DecoderOptions { verify: true, ..Default::default() },
        ..Default::default()
    };

    let mut file = open_with(stream, &options);
    let samples = decode_all(&mut file);

    assert_eq!(samples.len(), 2 * 384);
    assert!(samples.iter().any(|&s| s != 0.0));
}

#[test]
fn free_format_stream() {
    let mut file = open(silent(L1_FREE_MONO, 40, 5));

    assert_eq!(file.channels(), 1);
    assert_eq!(file.sample_count().unwrap(), Some(5 * 384));
    assert_eq!(decode_all(&mut file).len(), 5 * 384);
}

#[test]
fn id3_tags_are_skipped() {
    // A 100 byte ID3v2 tag filled with bytes that look like frame sync.
    let mut stream = b"ID3\x03\x00\x00\x00\x00\x00\x5a".to_vec();
    stream.extend_from_slice(&[0xff; 90]);
    stream.extend(silent(L1_STEREO, 48, 4));
    stream.extend_from_slice(b"TAG");
    stream.extend_from_slice(&[0xff; 125]);

    let mut file = open(stream);

    assert_eq!(file.reader().id3v2_len(), 100);
    assert_eq!(decode_all(&mut file).len(), 2 * 4 * 384);
}

#[test]
fn riff_header_is_skipped() {
    let audio = silent(L1_STEREO, 48, 4);

    let mut stream = b"RIFF\x00\x00\x00\x00WAVEfmt ".to_vec();
    stream.extend_from_slice(&30u32.to_le_bytes());
    stream.extend_from_slice(&[0x55; 30]);
    stream.extend_from_slice(b"data");
    stream.extend_from_slice(&(audio.len() as u32).to_le_bytes());
    stream.extend(audio);

    let mut file = open(stream);

    assert_eq!(decode_all(&mut file).len(), 2 * 4 * 384);
}

#[test]
fn corrupted_bytes_resync() {
    let mut stream = silent(L1_STEREO, 48, 6);
    stream.extend_from_slice(&[0x12, 0x34, 0x56]);
    stream.extend(silent(L1_STEREO, 48, 4));

    // Destroy the header of the third frame.
    stream[96..100].copy_from_slice(&[0x00, 0x11, 0x22, 0x33]);

    let mut file = open(stream);

    assert_eq!(decode_all(&mut file).len(), 2 * 9 * 384);
}

#[test]
fn corrupted_payloads_are_skipped() {
    for &(word, len, n_samples) in &[(L1_STEREO, 48, 384), (L2_STEREO, 417, 1152)] {
        let mut stream = silent(word, len, 5);

        // Large allocations in the third frame need far more bits than the frame holds.
        let payload = 2 * len + 4;
        stream[payload..payload + 20].fill(0x77);

        let mut file = open(stream);

        assert_eq!(file.sample_count().unwrap(), Some(5 * n_samples));

        let samples = decode_all(&mut file);

        assert_eq!(samples.len(), 2 * 4 * n_samples as usize);
        assert!(samples.iter().all(|&s| s == 0.0));
        assert_eq!(file.position(), 5 * n_samples);
    }
}

/// Writes a layer 3 big_values pair with Huffman table 1, and returns the number of bits written.
fn put_table1_pair(bits: &mut BitWriter, rng: &mut SmallRng, x: u32, y: u32) -> u32 {
    match (x, y) {
        (0, 0) => bits.put(0b1, 1),
        (1, 0) => bits.put(0b01, 2),
        (0, 1) => bits.put(0b001, 3),
        _ => bits.put(0b000, 3),
    }

    let code_len = match (x, y) {
        (0, 0) => 1,
        (1, 0) => 2,
        _ => 3,
    };

    // Sign bits.
    let n_signs = x + y;
    bits.put(rng.random_range(0..1 << n_signs), n_signs);

    code_len + n_signs
}

/// Writes the side info of one long block granule channel using Huffman table 1 everywhere.
fn put_granule_channel(bits: &mut BitWriter, part2_3_length: u32, big_values: u32, gain: u32) {
    bits.put(part2_3_length, 12);
    bits.put(big_values, 9);
    bits.put(gain, 8);
    // scalefac_compress 0 has no scale factor bits, and the block is long.
    bits.put(0, 4);
    bits.put(0, 1);
    for _ in 0..3 {
        bits.put(1, 5);
    }
    // region0_count, region1_count.
    bits.put(7, 4);
    bits.put(7, 3);
    // preflag, scalefac_scale, count1table_select.
    bits.put(0, 3);
}

/// A joint stereo frame with intensity and mid-side stereo. The side channel codes only its first
/// line, so sub-band 0 is mid-side coded and everything above is intensity coded.
fn layer3_joint_frame(rng: &mut SmallRng) -> Vec<u8> {
    let mut main_data = BitWriter::default();
    let mut lengths = [[0u32; 2]; 2];

    for gr in 0..2 {
        // The mid channel codes 4 pairs of random values.
        for _ in 0..4 {
            let (x, y) = (rng.random_range(0..2), rng.random_range(0..2));
            lengths[gr][0] += put_table1_pair(&mut main_data, rng, x, y);
        }

        lengths[gr][1] = put_table1_pair(&mut main_data, rng, 1, 0);
    }

    let mut bits = BitWriter::default();

    // main_data_begin, private bits, scfsi.
    bits.put(0, 9);
    bits.put(0, 3);
    bits.put(0, 8);

    for gr in 0..2 {
        let gain = rng.random_range(190..206);
        put_granule_channel(&mut bits, lengths[gr][0], 4, gain);
        put_granule_channel(&mut bits, lengths[gr][1], 1, gain);
    }

    let mut payload = bits.into_bytes(32);
    payload.extend(main_data.into_bytes(413 - 32));

    frame(L3_JOINT_IS, &payload)
}

#[test]
fn layer3_intensity_and_mid_side_stream() {
    let mut rng = SmallRng::seed_from_u64(0x4c33);
    let stream: Vec<u8> = (0..6).flat_map(|_| layer3_joint_frame(&mut rng)).collect();

    let mut file = open(stream);
    assert_eq!(file.channels(), 2);

    let samples = decode_all(&mut file);

    assert_eq!(samples.len(), 2 * 6 * 1152);
    assert!(samples.iter().all(|s| s.is_finite()));

    let left: Vec<f32> = samples.iter().step_by(2).copied().collect();
    let right: Vec<f32> = samples.iter().skip(1).step_by(2).copied().collect();

    assert!(left.iter().any(|&s| s != 0.0));
    assert!(right.iter().any(|&s| s != 0.0));
    assert!(left.iter().zip(&right).any(|(l, r)| (l - r).abs() > 1e-4));
}

/// A mono layer 3 stream in which the main_data of every frame begins 100 bytes into the tail of
/// the frame before it. The first frame has nothing to borrow from and decodes no samples.
fn borrowing_layer3_stream(seed: u64, n_frames: usize) -> Vec<u8> {
    const MAIN_DATA_BEGIN: usize = 100;
    const MAIN_DATA_LEN: usize = 417 - 4 - 17;

    let mut rng = SmallRng::seed_from_u64(seed);

    // Unused main_data is random.
    let mut main_data: Vec<Vec<u8>> =
        (0..n_frames).map(|_| (0..MAIN_DATA_LEN).map(|_| rng.random()).collect()).collect();

    let mut side_info = Vec::new();

    for k in 0..n_frames {
        let mut granules = BitWriter::default();
        let mut bits = BitWriter::default();

        bits.put(MAIN_DATA_BEGIN as u32, 9);
        // Private bits, scfsi.
        bits.put(0, 5);
        bits.put(0, 4);

        for _ in 0..2 {
            let n_pairs = rng.random_range(1..=40);
            let mut len = 0;

            for _ in 0..n_pairs {
                let (x, y) = (rng.random_range(0..2), rng.random_range(0..2));
                len += put_table1_pair(&mut granules, &mut rng, x, y);
            }

            put_granule_channel(&mut bits, len, n_pairs, rng.random_range(190..206));
        }

        side_info.push(bits.into_bytes(17));

        if k > 0 {
            let start = MAIN_DATA_LEN - MAIN_DATA_BEGIN;
            main_data[k - 1][start..].copy_from_slice(&granules.into_bytes(MAIN_DATA_BEGIN));
        }
    }

    side_info
        .into_iter()
        .zip(main_data)
        .flat_map(|(mut payload, main_data)| {
            payload.extend(main_data);
            frame(L3_MONO, &payload)
        })
        .collect()
}

#[test]
fn layer3_seek_with_borrowed_main_data() {
    let mut file = open(borrowing_layer3_stream(0x5eed, 12));

    assert_eq!(file.sample_count().unwrap(), Some(12 * 1152));

    let all = decode_all(&mut file);

    // The first frame underflows the bit reservoir.
    assert_eq!(all.len(), 11 * 1152);
    assert!(all.iter().all(|s| s.is_finite()));
    assert!(all.iter().any(|&s| s != 0.0));
    assert_eq!(file.position(), 12 * 1152);

    for &position in &[0, 100, 1152 + 37, 5 * 1152 + 300, 11 * 1152 + 1] {
        file.set_position(position).unwrap();

        // Samples of the lost frame are never returned.
        let start = position.max(1152);

        let mut buf = [0f32; 6];
        assert_eq!(file.read_samples(&mut buf).unwrap(), 6);
        assert_eq!(file.position(), start + 6);

        let mut samples = buf.to_vec();
        samples.extend(decode_all(&mut file));

        assert_close(&samples, &all[(start - 1152) as usize..]);
        assert_eq!(file.position(), 12 * 1152);
    }
}

#[test]
fn not_an_mpeg_stream() {
    let stream = b"This is plain text, not MPEG audio. ".repeat(100);

    match MpegFile::new(Box::new(Cursor::new(stream))) {
        Err(Error::FormatError(_)) => (),
        _ => panic!("expected a format error"),
    }
}

#[test]
fn decoding_is_deterministic() {
    let stream = random_stream(1, 20);

    let first = decode_all(&mut open(stream.clone()));
    let second = decode_all(&mut open(stream));

    assert_eq!(first.len(), 2 * 20 * 384);
    assert!(first.iter().any(|&s| s != 0.0));
    assert_eq!(first, second);
}

#[test]
fn seek_matches_sequential_decode() {
    let stream = random_stream(2, 20);

    let mut file = open(stream);
    let sequential = decode_all(&mut file);

    for &position in &[0u64, 1, 383, 384, 1000, 2500, 5000, 20 * 384 - 1, 20 * 384] {
        file.set_position(position).unwrap();
        assert_eq!(file.position(), position);

        let samples = decode_all(&mut file);

        assert_close(&samples, &sequential[2 * position as usize..]);
    }
}

#[test]
fn time_based_seek() {
    let mut file = open(random_stream(3, 10));

    file.set_time(Duration::from_millis(100)).unwrap();

    assert_eq!(file.position(), 3200);
    assert_eq!(file.time(), Duration::from_millis(100));
    assert_eq!(decode_all(&mut file).len(), 2 * (10 * 384 - 3200));
}

#[test]
fn seek_errors() {
    let mut file = open(silent(L1_STEREO, 48, 4));

    match file.set_position(4 * 384 + 1) {
        Err(Error::SeekError(SeekErrorKind::OutOfRange)) => (),
        _ => panic!("expected an out-of-range error"),
    }

    let source = ReadOnlySource::new(Cursor::new(silent(L1_STEREO, 48, 4)));
    let mut file = MpegFile::new(Box::new(source)).unwrap();

    match file.set_position(0) {
        Err(Error::SeekError(SeekErrorKind::Unseekable)) => (),
        _ => panic!("expected an unseekable error"),
    }
}

#[test]
fn downmix_is_average_of_left_and_right() {
    let stream = random_stream(4, 8);

    let decode_mode = |mode: StereoMode| {
        let options = MpegFileOptions {
            decoder: DecoderOptions { stereo_mode: mode, ..Default::default() },
            ..Default::default()
        };

        let mut file = open_with(stream.clone(), &options);
        assert_eq!(file.output_channels(), 1);
        decode_all(&mut file)
    };

    let left = decode_mode(StereoMode::LeftOnly);
    let right = decode_mode(StereoMode::RightOnly);
    let downmix = decode_mode(StereoMode::DownmixToMono);

    assert_eq!(downmix.len(), 8 * 384);
    assert!(left != right);

    for ((&l, &r), &m) in left.iter().zip(&right).zip(&downmix) {
        assert_eq!(m, (l + r) / 2.0);
    }
}

#[test]
fn stereo_mode_change_keeps_position() {
    let stream = random_stream(5, 4);

    let both = decode_all(&mut open(stream.clone()));

    let mut file = open(stream);
    let mut buf = vec![0f32; 500];

    // 250 sample frames in stereo, then the remainder of the stream from the left channel.
    assert_eq!(file.read_samples(&mut buf).unwrap(), 500);
    assert_eq!(file.position(), 250);

    file.set_stereo_mode(StereoMode::LeftOnly);
    assert_eq!(file.output_channels(), 1);

    let left = decode_all(&mut file);

    assert_eq!(left.len(), 4 * 384 - 250);
    assert_eq!(file.position(), 4 * 384);

    for (i, &l) in left.iter().enumerate() {
        assert_eq!(l, both[2 * (250 + i)]);
    }
}

#[test]
fn equalizer_scales_sub_bands() {
    let stream = random_stream(6, 6);

    let reference = decode_all(&mut open(stream.clone()));

    // 0 dB in every band is the identity.
    let mut file = open(stream.clone());
    file.set_eq(&[0.0; 32]);
    assert_eq!(decode_all(&mut file), reference);

    // -6 dB in every band halves the output.
    let mut file = open(stream.clone());
    file.set_eq(&[-6.0; 32]);
    let halved: Vec<f32> = reference.iter().map(|&s| 0.5 * s).collect();
    assert_close(&decode_all(&mut file), &halved);

    // Equalizers without 32 bands are ignored.
    let mut file = open(stream);
    file.set_eq(&[-6.0; 10]);
    assert_eq!(decode_all(&mut file), reference);
}

#[test]
fn forward_only_with_read_ahead_thread() {
    let options = MpegFileOptions {
        reader: ReaderOptions {
            max_read_ahead: 1000,
            poll_interval: Duration::from_millis(1),
            ..Default::default()
        },
        ..Default::default()
    };

    let source = ReadOnlySource::new(Cursor::new(silent(L1_STEREO, 48, 200)));
    let mut file = MpegFile::with_options(Box::new(source), &options).unwrap();

    assert!(!file.can_seek());
    assert_eq!(file.sample_count().unwrap(), None);

    let reader = file.reader();
    let scanner = thread::spawn(move || reader.read_to_end());

    assert_eq!(decode_all(&mut file).len(), 2 * 200 * 384);

    scanner.join().unwrap().unwrap();

    assert_eq!(file.sample_count().unwrap(), Some(200 * 384));
}
