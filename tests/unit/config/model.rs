use super::*;

#[test]
fn decodes_external_key_names() {
    let doc = SpecDocument::from_toml_str(
        r#"
[setup]
width = 1920
height = 1080
size = 240
border = 20
left_border = 300
right_border = 40
top_border = 10
background = "bg.png"
icon = "logo.png"
font = "font.ttf"
font_color = "white"
verse_size = 48
title_size = 72
center_verse = true
logo_width = 280

[speaker]
name = "Jane Doe"
role = "Pastor"

[[slide]]
title = "Point one"

[[slide]]
text = "In the beginning"
ref = "Gen 1:1"

[[slide]]
image = "photo.jpg"
"#,
    )
    .unwrap();

    let s = &doc.setup;
    assert_eq!((s.width, s.height, s.size), (1920, 1080, 240));
    assert_eq!(
        (s.border, s.left_border, s.right_border, s.top_border),
        (20, 300, 40, 10)
    );
    assert_eq!((s.verse_size, s.title_size, s.logo_width), (48, 72, 280));
    assert!(s.center_verse);
    assert_eq!(s.font_color, "white");
    assert_eq!(doc.speaker.name, "Jane Doe");
    assert_eq!(doc.speaker.role, "Pastor");

    assert_eq!(doc.slide.len(), 3);
    assert_eq!(doc.slide[0].title, "Point one");
    assert_eq!(doc.slide[1].reference, "Gen 1:1");
    assert_eq!(doc.slide[2].image, "photo.jpg");
}

#[test]
fn missing_tables_default_to_empty() {
    let doc = SpecDocument::from_toml_str("").unwrap();
    assert_eq!(doc, SpecDocument::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let doc = SpecDocument::from_toml_str(
        r#"
[setup]
width = 10
mystery = "x"
"#,
    )
    .unwrap();
    assert_eq!(doc.setup.width, 10);
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = SpecDocument::from_toml_str("[setup\nwidth = ").unwrap_err();
    assert!(matches!(err, ImagegenError::Config(_)));

    let err = SpecDocument::from_toml_str("[setup]\nwidth = \"wide\"").unwrap_err();
    assert!(matches!(err, ImagegenError::Config(_)));
}

#[test]
fn read_reports_missing_file() {
    let err = SpecDocument::read(Path::new("definitely/not/here.toml")).unwrap_err();
    assert!(err.to_string().contains("definitely/not/here.toml"));
}
