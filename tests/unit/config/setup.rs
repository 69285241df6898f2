use super::*;

fn base() -> SetupDef {
    SetupDef {
        width: 1920,
        height: 1080,
        size: 200,
        background: "bg.png".to_string(),
        border: 10,
        font: "font.ttf".to_string(),
        verse_size: 40,
        title_size: 60,
        ..SetupDef::default()
    }
}

const ALL: SetupUsage = SetupUsage {
    band: true,
    verse: true,
    main_point: true,
    image: true,
};

#[test]
fn logo_width_prefers_explicit_then_left_border_then_size() {
    let mut def = base();
    assert_eq!(resolve_logo_width(&def), 200);

    // The logo itself does not change the slot.
    def.icon = "logo.png".to_string();
    assert_eq!(resolve_logo_width(&def), 200);

    def.left_border = 300;
    assert_eq!(resolve_logo_width(&def), 300);

    def.logo_width = 250;
    assert_eq!(resolve_logo_width(&def), 250);
}

#[test]
fn resolves_defaults_once() {
    let setup = Setup::resolve(&base(), ALL).unwrap();
    assert_eq!(setup.canvas, Canvas::new(1920, 1080).unwrap());
    assert_eq!(setup.band_height, 200);
    assert_eq!(setup.logo_width, 200);
    assert_eq!(setup.font_color, DEFAULT_FONT_COLOR);
    assert_eq!(setup.icon, None);
    assert_eq!(setup.background, Some(PathBuf::from("bg.png")));
    assert_eq!(setup.verse_size, 40.0);
    assert!(!setup.center_verse);
}

#[test]
fn icon_without_room_is_rejected() {
    let mut def = base();
    def.icon = "logo.png".to_string();
    def.left_border = 20;
    let err = Setup::resolve(&def, ALL).unwrap_err();
    assert!(err.to_string().contains("setup.icon"));

    def.left_border = 21;
    assert!(Setup::resolve(&def, ALL).is_ok());
}

#[test]
fn logo_slot_defaults_to_band_height_without_icon() {
    let def = SetupDef {
        width: 640,
        height: 360,
        size: 120,
        ..SetupDef::default()
    };
    let setup = Setup::resolve(&def, SetupUsage::default()).unwrap();
    assert_eq!(setup.icon, None);
    assert_eq!(setup.logo_width, 120);
}

#[test]
fn full_height_band_rejects_image_slides() {
    let mut def = base();
    def.size = def.height;
    let image_only = SetupUsage {
        band: true,
        image: true,
        ..SetupUsage::default()
    };
    let err = Setup::resolve(&def, image_only).unwrap_err();
    assert!(matches!(err, ImagegenError::Config(_)));
    assert!(err.to_string().contains("setup.size"), "{err}");

    let text_only = SetupUsage {
        image: false,
        ..ALL
    };
    assert!(Setup::resolve(&def, text_only).is_ok());
}

#[test]
fn band_taller_than_canvas_is_rejected() {
    let mut def = base();
    def.size = 2000;
    assert!(Setup::resolve(&def, ALL).is_err());
}

#[test]
fn required_keys_depend_on_usage() {
    let mut def = base();
    def.font.clear();
    def.background.clear();
    def.verse_size = 0;
    def.title_size = 0;

    assert!(Setup::resolve(&def, SetupUsage::default()).is_ok());

    let band_only = SetupUsage {
        band: true,
        ..SetupUsage::default()
    };
    let err = Setup::resolve(&def, band_only).unwrap_err();
    assert!(err.to_string().contains("setup.background"));

    def.background = "bg.png".to_string();
    assert!(Setup::resolve(&def, band_only).is_ok());

    let err = Setup::resolve(&def, ALL).unwrap_err();
    assert!(err.to_string().contains("setup.font"));

    def.font = "font.ttf".to_string();
    let err = Setup::resolve(&def, ALL).unwrap_err();
    assert!(err.to_string().contains("setup.verse_size"));
}

#[test]
fn text_needs_positive_width() {
    let mut def = base();
    def.width = 100;
    def.left_border = 60;
    def.right_border = 20;
    assert!(Setup::resolve(&def, ALL).is_err());
    assert!(
        Setup::resolve(
            &def,
            SetupUsage {
                band: true,
                ..SetupUsage::default()
            }
        )
        .is_ok()
    );
}

#[test]
fn speaker_is_carried() {
    let s = Speaker::from(&SpeakerDef {
        name: "A".to_string(),
        role: "B".to_string(),
    });
    assert_eq!((s.name.as_str(), s.role.as_str()), ("A", "B"));
}
