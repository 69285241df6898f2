use super::*;

const EPS: f64 = 1e-9;

fn cases() -> Vec<(u32, u32, Rect)> {
    let mut out = Vec::new();
    for &(iw, ih) in &[(1u32, 1u32), (640, 480), (17, 300), (1920, 1080), (3, 2)] {
        for &r in &[
            Rect::new(0.0, 0.0, 960.0, 880.0),
            Rect::new(10.0, 890.0, 290.0, 1070.0),
            Rect::new(5.5, 3.25, 6.5, 103.25),
            Rect::new(100.0, 0.0, 1820.0, 20.0),
        ] {
            out.push((iw, ih, r));
        }
    }
    out
}

#[test]
fn scale_fits_and_is_tight_on_one_axis() {
    for (iw, ih, r) in cases() {
        let fit = BoxFit::compute(iw, ih, r, Anchor::CENTER).unwrap();
        let sw = fit.scale * f64::from(iw);
        let sh = fit.scale * f64::from(ih);
        assert!(sw <= r.width() + EPS, "{iw}x{ih} in {r:?}");
        assert!(sh <= r.height() + EPS, "{iw}x{ih} in {r:?}");
        assert!(
            (sw - r.width()).abs() < EPS || (sh - r.height()).abs() < EPS,
            "{iw}x{ih} in {r:?} is not tight"
        );
    }
}

#[test]
fn center_anchor_splits_slack_evenly() {
    for (iw, ih, r) in cases() {
        let placed = BoxFit::compute(iw, ih, r, Anchor::CENTER)
            .unwrap()
            .placed_rect();
        let (left, right) = (placed.x0 - r.x0, r.x1 - placed.x1);
        let (top, bottom) = (placed.y0 - r.y0, r.y1 - placed.y1);
        assert!((left - right).abs() < 1e-6, "{left} vs {right}");
        assert!((top - bottom).abs() < 1e-6, "{top} vs {bottom}");
    }
}

#[test]
fn corner_anchors_touch_their_edges() {
    for (iw, ih, r) in cases() {
        let near = BoxFit::compute(iw, ih, r, Anchor::TOP_LEFT)
            .unwrap()
            .placed_rect();
        assert!((near.x0 - r.x0).abs() < 1e-6);
        assert!((near.y0 - r.y0).abs() < 1e-6);

        let far = BoxFit::compute(iw, ih, r, Anchor::BOTTOM_RIGHT)
            .unwrap()
            .placed_rect();
        assert!((far.x1 - r.x1).abs() < 1e-6);
        assert!((far.y1 - r.y1).abs() < 1e-6);
    }
}

#[test]
fn origin_is_expressed_before_scaling() {
    // 100x50 into a 200x200 box at (10, 20): scale 2, vertical slack 100 split 50/50.
    let fit = BoxFit::compute(100, 50, Rect::new(10.0, 20.0, 210.0, 220.0), Anchor::CENTER)
        .unwrap();
    assert_eq!(fit.scale, 2.0);
    assert_eq!(fit.origin, Point::new(5.0, 35.0));
    assert_eq!(fit.placed_rect(), Rect::new(10.0, 70.0, 210.0, 170.0));
    assert_eq!(fit.transform() * Point::new(0.0, 0.0), Point::new(10.0, 70.0));
}

#[test]
fn left_center_anchor_matches_image_slot_layout() {
    // Landscape image in a tall slot: fills width, centered vertically.
    let fit = BoxFit::compute(400, 100, Rect::new(0.0, 0.0, 200.0, 300.0), Anchor::LEFT_CENTER)
        .unwrap();
    assert_eq!(fit.placed_rect(), Rect::new(0.0, 125.0, 200.0, 175.0));

    // Portrait image: fills height, pinned left.
    let fit = BoxFit::compute(100, 400, Rect::new(0.0, 0.0, 200.0, 300.0), Anchor::LEFT_CENTER)
        .unwrap();
    assert_eq!(fit.placed_rect(), Rect::new(0.0, 0.0, 75.0, 300.0));
}

#[test]
fn degenerate_inputs_fail_loudly() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(matches!(
        BoxFit::compute(0, 10, r, Anchor::CENTER),
        Err(ImagegenError::Geometry(_))
    ));
    assert!(matches!(
        BoxFit::compute(10, 0, r, Anchor::CENTER),
        Err(ImagegenError::Geometry(_))
    ));
    assert!(matches!(
        BoxFit::compute(10, 10, Rect::new(0.0, 0.0, 0.0, 10.0), Anchor::CENTER),
        Err(ImagegenError::Geometry(_))
    ));
    assert!(BoxFit::compute(10, 10, r, Anchor::new(1.5, 0.0)).is_err());
}
