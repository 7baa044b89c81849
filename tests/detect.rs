mod common;

use std::io::Cursor;

use common::rgb_png;
use lib_gfx::{ImageCodec, PngCodec};

#[test]
fn detect_accepts_png_signature() {
    let png = rgb_png(&[1, 2, 3], 1, 1);
    assert!(PngCodec.detect(&mut Cursor::new(&png)));
}

#[test]
fn detect_accepts_signature_with_arbitrary_tail() {
    let data = b"\x89PNG\r\n\x1a\nnot actually chunk data";
    assert!(PngCodec.detect(&mut Cursor::new(&data[..])));
}

#[test]
fn detect_rejects_other_signatures() {
    // BMP and JPEG magic numbers.
    assert!(!PngCodec.detect(&mut Cursor::new(&b"BM\x46\x00\x00\x00\x00\x00"[..])));
    assert!(!PngCodec.detect(&mut Cursor::new(&b"\xff\xd8\xff\xe0\x00\x10JF"[..])));
}

#[test]
fn detect_rejects_short_streams() {
    assert!(!PngCodec.detect(&mut Cursor::new(&b"\x89PNG"[..])));
    assert!(!PngCodec.detect(&mut Cursor::new(&b""[..])));
}

#[test]
fn detect_rejects_near_miss_signature() {
    assert!(!PngCodec.detect(&mut Cursor::new(&b"\x89PNG\r\n\x1a\x00"[..])));
}

#[test]
fn mimetype_is_png() {
    assert_eq!(PngCodec.mimetype(), "png");
}
