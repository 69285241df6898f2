use crate::foundation::core::{Affine, Anchor, Point, Rect, Vec2};
use crate::foundation::error::{ImagegenError, ImagegenResult};

/// Uniform scale and placement of an `iw x ih` image inside a target rectangle.
///
/// `origin` is in pre-scale coordinates: the surface is scaled by `scale` as a whole and the
/// image is drawn at `origin` in that scaled space, so `transform()` is
/// `scale(s) * translate(origin)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxFit {
    pub scale: f64,
    pub origin: Point,
    pub image_width: u32,
    pub image_height: u32,
}

impl BoxFit {
    /// Fit an image of intrinsic size `iw x ih` into `target`, splitting leftover space by
    /// `anchor`. Never distorts; the constraining axis is filled exactly.
    pub fn compute(iw: u32, ih: u32, target: Rect, anchor: Anchor) -> ImagegenResult<Self> {
        if iw == 0 || ih == 0 {
            return Err(ImagegenError::geometry(format!(
                "cannot fit a {iw}x{ih} image: source has no area"
            )));
        }
        let anchor = anchor.validate()?;
        let (w, h) = (target.width(), target.height());
        let (iw_f, ih_f) = (f64::from(iw), f64::from(ih));

        let scale = (w / iw_f).min(h / ih_f);
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ImagegenError::geometry(format!(
                "cannot fit a {iw}x{ih} image into a {w}x{h} box"
            )));
        }

        let origin = Point::new(
            target.x0 / scale + (w / scale - iw_f) * anchor.x,
            target.y0 / scale + (h / scale - ih_f) * anchor.y,
        );
        Ok(Self {
            scale,
            origin,
            image_width: iw,
            image_height: ih,
        })
    }

    /// Surface transform to apply while drawing the image at its local `(0, 0)`.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale) * Affine::translate(self.origin.to_vec2())
    }

    /// Where the image lands, in device pixels.
    pub fn placed_rect(&self) -> Rect {
        let p0 = self.origin.to_vec2() * self.scale;
        let size = Vec2::new(
            f64::from(self.image_width) * self.scale,
            f64::from(self.image_height) * self.scale,
        );
        Rect::from_origin_size(p0.to_point(), size.to_size())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
