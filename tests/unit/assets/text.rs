use super::*;

fn engine() -> TextLayoutEngine {
    let bytes = std::fs::read(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/data/fonts/DejaVuSans.ttf"
    ))
    .unwrap();
    TextLayoutEngine::from_font_bytes(bytes).unwrap()
}

#[test]
fn registers_family_from_bytes() {
    let e = engine();
    assert!(e.family_name().contains("DejaVu"), "{}", e.family_name());
}

#[test]
fn rejects_non_font_bytes() {
    assert!(TextLayoutEngine::from_font_bytes(b"not a font".to_vec()).is_err());
}

#[test]
fn long_text_wraps_within_width() {
    let mut e = engine();
    let text = "In the beginning was the Word, and the Word was with God, and the Word was God.";
    let shaped = e
        .shape(text, 24.0, TextBrushRgba8::default(), Some(200.0))
        .unwrap();
    let lines = shaped.lines();
    assert!(lines.len() > 2, "expected wrapping, got {} lines", lines.len());
    for l in &lines {
        assert!(l.width <= 200.0 + 0.5, "line too wide: {}", l.width);
        assert!(l.width > 0.0);
    }
    assert_eq!(shaped.font_size, 24.0);
}

#[test]
fn no_width_means_single_line() {
    let mut e = engine();
    let shaped = e
        .shape("John 1:1", 20.0, TextBrushRgba8::default(), None)
        .unwrap();
    assert_eq!(shaped.lines().len(), 1);
}

#[test]
fn invalid_size_is_rejected() {
    let mut e = engine();
    assert!(e.shape("x", 0.0, TextBrushRgba8::default(), None).is_err());
    assert!(e.shape("x", f32::NAN, TextBrushRgba8::default(), None).is_err());
}
