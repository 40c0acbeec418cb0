//! Reads encoder output back with independent tools: CRCs with `crc32fast`,
//! image data with `flate2`.

use std::io::Read;

use flate2::read::ZlibDecoder;
use hexpng::{Color, EncodeError, PngEncoder};

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

struct Decoded {
    width: u32,
    height: u32,
    depth: u8,
    color_type: u8,
    header: Vec<u8>,
    kinds: Vec<[u8; 4]>,
    /// Inflated IDAT
    raw: Vec<u8>,
}

fn decode(png: &[u8]) -> Decoded {
    assert_eq!(png[..8], SIGNATURE);

    let mut rest = &png[8..];
    let mut kinds = Vec::new();
    let mut header = Vec::new();
    let mut idat = Vec::new();
    while !rest.is_empty() {
        let len = u32::from_be_bytes(rest[..4].try_into().unwrap()) as usize;
        let kind: [u8; 4] = rest[4..8].try_into().unwrap();
        let data = &rest[8..8 + len];
        let crc = u32::from_be_bytes(rest[8 + len..12 + len].try_into().unwrap());

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&kind);
        hasher.update(data);
        assert_eq!(crc, hasher.finalize(), "crc of {:?}", std::str::from_utf8(&kind));

        match &kind {
            b"IHDR" => header = data.to_vec(),
            b"IDAT" => idat.extend_from_slice(data),
            b"IEND" => assert!(data.is_empty()),
            _ => panic!("unexpected chunk"),
        }
        kinds.push(kind);
        rest = &rest[12 + len..];
    }

    let mut raw = Vec::new();
    ZlibDecoder::new(&idat[..]).read_to_end(&mut raw).unwrap();

    Decoded {
        width: u32::from_be_bytes(header[..4].try_into().unwrap()),
        height: u32::from_be_bytes(header[4..8].try_into().unwrap()),
        depth: header[8],
        color_type: header[9],
        header,
        kinds,
        raw,
    }
}

impl Decoded {
    fn channels(&self) -> usize {
        match self.color_type {
            0 => 1,
            2 => 3,
            4 => 2,
            6 => 4,
            t => panic!("color type {t}"),
        }
    }

    /// Samples of every row widened back to 16 bits
    fn rows(&self) -> Vec<Vec<u16>> {
        let depth = self.depth as usize;
        let samples = self.width as usize * self.channels();
        let stride = (samples * depth).div_ceil(8) + 1;
        assert_eq!(self.raw.len(), stride * self.height as usize);

        self.raw
            .chunks(stride)
            .map(|line| {
                assert_eq!(line[0], 0, "filter type");
                let data = &line[1..];
                (0..samples)
                    .map(|i| {
                        let mut value = 0u32;
                        for bit in i * depth..(i + 1) * depth {
                            let set = data[bit / 8] >> (7 - bit % 8) & 1;
                            value = value << 1 | u32::from(set);
                        }
                        let mut wide = value;
                        let mut filled = depth;
                        while filled < 16 {
                            wide = wide << filled | wide;
                            filled *= 2;
                        }
                        wide as u16
                    })
                    .collect()
            })
            .collect()
    }

    /// Rgba of every pixel as the file describes it
    fn colors(&self) -> Vec<Vec<Color>> {
        let n = self.channels();
        self.rows()
            .iter()
            .map(|row| {
                row.chunks(n)
                    .map(|s| match self.color_type {
                        0 => Color::new_opaque(s[0], s[0], s[0]),
                        2 => Color::new_opaque(s[0], s[1], s[2]),
                        4 => Color::new(s[0], s[0], s[0], s[1]),
                        _ => Color::new(s[0], s[1], s[2], s[3]),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Everything but fully transparent pixels must come back exactly
fn assert_lossless(image: &[&[&str]]) -> Decoded {
    let decoded = decode(&hexpng::encode(image).unwrap());
    for (row, decoded_row) in image.iter().zip(decoded.colors()) {
        for (hex, got) in row.iter().zip(decoded_row) {
            let want = Color::from_hex(hex).unwrap();
            if want.alpha() == 0 {
                assert_eq!(got.alpha(), 0, "{hex}");
            } else {
                assert_eq!(got, want, "{hex}");
            }
        }
    }
    decoded
}

#[test]
fn test_single_white_pixel() {
    let decoded = decode(&hexpng::encode(&[["#ffffff"]]).unwrap());
    assert_eq!(decoded.kinds, [*b"IHDR", *b"IDAT", *b"IEND"]);
    assert_eq!(decoded.header, [0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0]);
    assert_eq!(decoded.raw, [0, 0b1000_0000]);
}

#[test]
fn test_greyscale_depths() {
    assert_eq!(assert_lossless(&[&["#000", "#fff"]]).depth, 1);
    assert_eq!(assert_lossless(&[&["#000", "#555"], &["#aaa", "#fff"]]).depth, 2);
    assert_eq!(assert_lossless(&[&["#123123", "#888"]]).color_type, 2);
    let decoded = assert_lossless(&[&["#111", "#eee", "#777"]]);
    assert_eq!((decoded.depth, decoded.color_type), (4, 0));
    let decoded = assert_lossless(&[&["#808080"], &["#7f7f7f"]]);
    assert_eq!((decoded.depth, decoded.color_type), (8, 0));
}

#[test]
fn test_mixed_color_types() {
    let decoded = assert_lossless(&[&["#ff0000", "#808080"]]);
    assert_eq!((decoded.depth, decoded.color_type), (8, 2));

    let decoded = assert_lossless(&[&["#0008", "#fff"]]);
    assert_eq!((decoded.depth, decoded.color_type), (8, 4));

    let decoded = assert_lossless(&[&["#12345600", "#abc"], &["#fe01fe80", "#000"]]);
    assert_eq!((decoded.depth, decoded.color_type), (8, 6));
}

#[test]
fn test_dimensions_and_padding() {
    let row = ["#000", "#fff", "#000", "#fff", "#000", "#fff", "#000", "#fff", "#000"];
    let image = [&row[..], &row[..], &row[..]];
    let decoded = assert_lossless(&image);
    assert_eq!((decoded.width, decoded.height), (9, 3));
    // 9 one bit samples pad to two bytes per row
    assert_eq!(decoded.raw.len(), 3 * 3);
}

#[test]
fn test_errors() {
    let ragged = [vec!["#000"; 2], vec!["#000"; 2], vec!["#000"; 3]];
    assert!(matches!(
        hexpng::encode(&ragged),
        Err(EncodeError::NonRectangularImage { row: 2, .. })
    ));
    assert!(matches!(
        hexpng::encode(&[["#00"]]),
        Err(EncodeError::InvalidColorFormat(_))
    ));
}

#[test]
fn test_custom_compressor() {
    use flate2::{write::ZlibEncoder, Compression};
    use std::io::Write;

    let calls = std::cell::Cell::new(0);
    let encoder = PngEncoder::with_compressor(|data: &[u8]| -> std::io::Result<Vec<u8>> {
        calls.set(calls.get() + 1);
        let mut z = ZlibEncoder::new(Vec::new(), Compression::none());
        z.write_all(data)?;
        z.finish()
    });
    let decoded = decode(&encoder.encode(&[["#abc", "#def"]]).unwrap());
    assert_eq!(calls.get(), 1);
    assert_eq!(decoded.raw, [0, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
}
