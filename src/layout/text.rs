use crate::foundation::core::Point;

/// Distance between consecutive baselines, in nominal line heights.
pub const LINE_SPACING: f64 = 1.5;

/// Nominal line height per pixel of font size (a point size set out at 72 dpi and measured
/// at 96 dpi).
pub const NOMINAL_HEIGHT_RATIO: f64 = 72.0 / 96.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
}

/// Per-line pen positions (`x` = line start, `y` = baseline) in canvas pixels.
pub type LineOrigins = Vec<Point>;

pub fn nominal_line_height(font_size: f64) -> f64 {
    font_size * NOMINAL_HEIGHT_RATIO
}

/// Baseline-to-baseline distance at `font_size`.
pub fn line_pitch(font_size: f64) -> f64 {
    LINE_SPACING * nominal_line_height(font_size)
}

/// Height of `lines` lines at `font_size`: full pitch between lines, one nominal line
/// height for the last.
pub fn block_height(lines: usize, font_size: f64) -> f64 {
    match lines {
        0 => 0.0,
        n => (n - 1) as f64 * line_pitch(font_size) + nominal_line_height(font_size),
    }
}

/// Lines flowing down from `top` inside a column starting at `left` and `width` wide. The
/// first baseline sits one nominal line height below `top`.
pub fn column_origins(
    line_widths: &[f64],
    font_size: f64,
    left: f64,
    top: f64,
    width: f64,
    align: TextAlign,
) -> LineOrigins {
    let first = top + nominal_line_height(font_size);
    line_widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let x = match align {
                TextAlign::Start => left,
                TextAlign::Center => left + (width - w) / 2.0,
            };
            Point::new(x, first + i as f64 * line_pitch(font_size))
        })
        .collect()
}

/// Every line centered on `center.x`, the block as a whole centered on `center.y`.
pub fn centered_origins(line_widths: &[f64], font_size: f64, center: Point) -> LineOrigins {
    let top = center.y - block_height(line_widths.len(), font_size) / 2.0;
    let first = top + nominal_line_height(font_size);
    line_widths
        .iter()
        .enumerate()
        .map(|(i, &w)| Point::new(center.x - w / 2.0, first + i as f64 * line_pitch(font_size)))
        .collect()
}

/// A single line whose baseline passes through `at`; `anchor_x` splits the line around it
/// (0 = starts at `at`, 1 = ends at `at`).
pub fn anchored_origin(line_width: f64, at: Point, anchor_x: f64) -> Point {
    Point::new(at.x - line_width * anchor_x, at.y)
}
