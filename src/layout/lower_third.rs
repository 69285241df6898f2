//! Fixed lower-third geometry derived from a resolved [`Setup`].

use crate::config::setup::Setup;
use crate::foundation::core::{Anchor, Point, Rect};

/// Where the logo sits inside its slot.
pub const LOGO_ANCHOR: Anchor = Anchor::CENTER;
/// Slide images hug the left edge and float vertically.
pub const SLIDE_IMAGE_ANCHOR: Anchor = Anchor::LEFT_CENTER;
/// Citations end at their anchor point.
pub const REFERENCE_ANCHOR_X: f64 = 1.0;

/// Every rectangle and point the compositors draw into, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LowerThird {
    /// Full-width band at the bottom of the canvas.
    pub band: Rect,
    /// Logo slot inside the band.
    pub logo: Rect,
    /// Column for verse text; its bottom is the band bottom, overflow is not clipped.
    pub verse: Rect,
    /// Wrap width shared by verse and title text.
    pub text_width: f64,
    /// Center of the title block.
    pub title_center: Point,
    /// Right end of the citation baseline.
    pub reference: Point,
    /// Left half of the area above the band.
    pub slide_image: Rect,
}

impl LowerThird {
    pub fn new(setup: &Setup) -> Self {
        let width = f64::from(setup.canvas.width);
        let height = f64::from(setup.canvas.height);
        let size = f64::from(setup.band_height);
        let border = f64::from(setup.border);
        let logo_width = f64::from(setup.logo_width);
        let right_border = f64::from(setup.right_border);
        let top_border = f64::from(setup.top_border);

        let band_top = height - size;
        let text_width = width - logo_width - right_border - 2.0 * border;
        let verse_left = logo_width + border;

        Self {
            band: Rect::new(0.0, band_top, width, height),
            logo: Rect::new(
                border,
                band_top + border,
                logo_width - border,
                height - border,
            ),
            verse: Rect::new(
                verse_left,
                band_top + top_border + border,
                verse_left + text_width,
                height,
            ),
            text_width,
            title_center: Point::new(
                logo_width + (width - logo_width - right_border) / 2.0,
                height - (size - top_border) / 2.0,
            ),
            reference: Point::new(width - right_border - border, height - border),
            slide_image: Rect::new(0.0, 0.0, width / 2.0, band_top),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/lower_third.rs"]
mod tests;
