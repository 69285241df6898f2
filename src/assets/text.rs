use std::borrow::Cow;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{ImagegenError, ImagegenResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley styles.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Horizontal extent and vertical metrics of one laid out line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineExtent {
    /// Visible advance, trailing whitespace excluded.
    pub width: f64,
    /// Baseline position Parley assigned inside its own layout box.
    pub layout_baseline: f64,
}

/// Shaped paragraph, broken into lines but not yet positioned on the canvas.
pub struct ShapedText {
    pub layout: parley::Layout<TextBrushRgba8>,
    pub font_size: f32,
}

impl ShapedText {
    pub fn lines(&self) -> Vec<LineExtent> {
        self.layout
            .lines()
            .map(|line| {
                let m = line.metrics();
                LineExtent {
                    width: f64::from((m.advance - m.trailing_whitespace).max(0.0)),
                    layout_baseline: f64::from(m.baseline),
                }
            })
            .collect()
    }
}

/// Parley contexts bound to the single font a deck uses.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

impl TextLayoutEngine {
    /// Register `font_bytes` (TTF/OTF) and keep a rasterizer handle to the same data.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> ImagegenResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ImagegenError::config("no font families found in font data"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ImagegenError::config("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Glyph source for the rasterizer.
    pub fn font(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    /// Shape `text` and break it into lines no wider than `max_width_px`. Lines are left at
    /// the layout's start edge; placement on the canvas is up to the caller.
    pub fn shape(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
        max_width_px: Option<f32>,
    ) -> ImagegenResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ImagegenError::config("font size must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(max_width_px);
        layout.align(
            max_width_px,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );

        Ok(ShapedText {
            layout,
            font_size: size_px,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
