//! Slide-type drawing routines on top of [`Surface`].

use crate::assets::store::{ImageAsset, SharedAssets};
use crate::assets::text::{ShapedText, TextBrushRgba8};
use crate::config::setup::Setup;
use crate::config::slide::{MainPointSlide, VerseSlide};
use crate::foundation::core::{Affine, Anchor, Point, Rect};
use crate::foundation::error::ImagegenResult;
use crate::layout::fit::BoxFit;
use crate::layout::lower_third::{
    LOGO_ANCHOR, LowerThird, REFERENCE_ANCHOR_X, SLIDE_IMAGE_ANCHOR,
};
use crate::layout::text::{
    TextAlign, anchored_origin, centered_origins, column_origins, line_pitch,
};
use crate::render::surface::Surface;

/// Box-fit `asset` into `target` and draw it. The surface transform is back to what it was
/// on return, also when fitting fails.
pub fn draw_box_fit(
    surface: &mut Surface,
    asset: &ImageAsset,
    target: Rect,
    anchor: Anchor,
) -> ImagegenResult<()> {
    let (iw, ih) = asset.intrinsic_size()?;
    let fit = BoxFit::compute(iw, ih, target, anchor)?;
    let placed = fit.placed_rect();
    let pixels = asset.pixels_at(
        placed.width().ceil() as u32,
        placed.height().ceil() as u32,
    )?;

    // Pixels may come at a different resolution than the intrinsic size (SVG).
    let resample = Affine::scale_non_uniform(
        f64::from(iw) / f64::from(pixels.width),
        f64::from(ih) / f64::from(pixels.height),
    );
    let mut scope = surface.push_transform(fit.transform() * resample);
    scope.draw_image(&pixels)
}

/// Draws the parts of one slide. Holds the geometry derived from the setup.
pub struct SlideCompositor<'a> {
    setup: &'a Setup,
    layout: LowerThird,
    brush: TextBrushRgba8,
}

impl<'a> SlideCompositor<'a> {
    pub fn new(setup: &'a Setup) -> Self {
        Self {
            setup,
            layout: LowerThird::new(setup),
            brush: TextBrushRgba8::from(setup.font_color),
        }
    }

    pub fn layout(&self) -> &LowerThird {
        &self.layout
    }

    /// Tiled band across the bottom, then the logo if one is configured.
    pub fn draw_background(
        &self,
        surface: &mut Surface,
        assets: &SharedAssets,
    ) -> ImagegenResult<()> {
        surface.fill_tiled(self.layout.band, assets.background()?)?;
        if let Some(icon) = &assets.icon {
            draw_box_fit(surface, icon, self.layout.logo, LOGO_ANCHOR)?;
        }
        Ok(())
    }

    /// Wrapped verse text in the text column, plus the citation at the bottom right.
    pub fn draw_verse(
        &self,
        surface: &mut Surface,
        assets: &mut SharedAssets,
        verse: &VerseSlide,
    ) -> ImagegenResult<()> {
        let size = self.setup.verse_size;
        let engine = assets.text_mut()?;

        if !verse.text.is_empty() {
            let shaped = engine.shape(
                &verse.text,
                size,
                self.brush,
                Some(self.layout.text_width as f32),
            )?;
            let align = if self.setup.center_verse {
                TextAlign::Center
            } else {
                TextAlign::Start
            };
            let origins = column_origins(
                &line_widths(&shaped),
                f64::from(size),
                self.layout.verse.x0,
                self.layout.verse.y0,
                self.layout.text_width,
                align,
            );
            surface.draw_text(&shaped, &origins, engine.font())?;
        }

        if let Some(reference) = &verse.reference {
            let shaped = engine.shape(reference, size, self.brush, None)?;
            let origins = reference_origins(&shaped, self.layout.reference, f64::from(size));
            surface.draw_text(&shaped, &origins, engine.font())?;
        }
        Ok(())
    }

    /// Title wrapped to the text width and centered in the band.
    pub fn draw_main_point(
        &self,
        surface: &mut Surface,
        assets: &mut SharedAssets,
        main_point: &MainPointSlide,
    ) -> ImagegenResult<()> {
        let size = self.setup.title_size;
        let engine = assets.text_mut()?;
        let shaped = engine.shape(
            &main_point.title,
            size,
            self.brush,
            Some(self.layout.text_width as f32),
        )?;
        let origins = centered_origins(
            &line_widths(&shaped),
            f64::from(size),
            self.layout.title_center,
        );
        surface.draw_text(&shaped, &origins, engine.font())
    }

    /// Slide picture in the left half above the band.
    pub fn draw_slide_image(&self, surface: &mut Surface, image: &ImageAsset) -> ImagegenResult<()> {
        draw_box_fit(surface, image, self.layout.slide_image, SLIDE_IMAGE_ANCHOR)
    }
}

fn line_widths(shaped: &ShapedText) -> Vec<f64> {
    shaped.lines().iter().map(|l| l.width).collect()
}

/// Citation lines end at `at`; the last line sits on its baseline, earlier ones stack above.
fn reference_origins(shaped: &ShapedText, at: Point, font_size: f64) -> Vec<Point> {
    let lines = shaped.lines();
    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let rise = (last - i) as f64 * line_pitch(font_size);
            anchored_origin(l.width, Point::new(at.x, at.y - rise), REFERENCE_ANCHOR_X)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
