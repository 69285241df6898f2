//! A CPU raster canvas with a tracked current transform.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::assets::store::PreparedImage;
use crate::assets::text::ShapedText;
use crate::foundation::core::{Affine, Canvas, Point, Rect, Vec2};
use crate::foundation::error::{ImagegenError, ImagegenResult};
use crate::render::frame::FrameRGBA;

/// Drawing target for one slide. Starts fully transparent.
pub struct Surface {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    transform: Affine,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("canvas", &self.canvas)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

/// Restores the surface transform it was created from when dropped.
///
/// Derefs to the surface so drawing continues through the guard.
pub struct TransformScope<'a> {
    surface: &'a mut Surface,
    saved: Affine,
}

impl Deref for TransformScope<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        self.surface
    }
}

impl DerefMut for TransformScope<'_> {
    fn deref_mut(&mut self) -> &mut Surface {
        self.surface
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.surface.transform = self.saved;
    }
}

impl Surface {
    pub fn new(canvas: Canvas) -> ImagegenResult<Self> {
        let (w, h) = canvas_u16(canvas)?;
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(w, h),
            transform: Affine::IDENTITY,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Current user-to-device transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Compose `t` onto the current transform until the returned guard is dropped.
    pub fn push_transform(&mut self, t: Affine) -> TransformScope<'_> {
        let saved = self.transform;
        self.transform = saved * t;
        TransformScope {
            surface: self,
            saved,
        }
    }

    /// Fill `rect` (device pixels) with `tile` repeated in both directions, the pattern
    /// anchored at the canvas origin.
    pub fn fill_tiled(&mut self, rect: Rect, tile: &PreparedImage) -> ImagegenResult<()> {
        let sampler = vello_cpu::peniko::ImageSampler {
            x_extend: vello_cpu::peniko::Extend::Repeat,
            y_extend: vello_cpu::peniko::Extend::Repeat,
            ..vello_cpu::peniko::ImageSampler::default()
        };
        let paint = image_paint(tile, sampler)?;

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&rect_to_cpu(rect));
        Ok(())
    }

    /// Draw `image` with its top-left pixel at the local origin, under the current transform.
    pub fn draw_image(&mut self, image: &PreparedImage) -> ImagegenResult<()> {
        let paint = image_paint(image, vello_cpu::peniko::ImageSampler::default())?;

        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
        Ok(())
    }

    /// Draw shaped text; line `i` starts at `origins[i]` (`x` = line start, `y` = baseline),
    /// relative to the current transform.
    pub fn draw_text(
        &mut self,
        text: &ShapedText,
        origins: &[Point],
        font: &vello_cpu::peniko::FontData,
    ) -> ImagegenResult<()> {
        let line_count = text.layout.lines().count();
        if origins.len() != line_count {
            return Err(ImagegenError::render(format!(
                "{} line origins for {line_count} lines",
                origins.len()
            )));
        }

        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        for (line, origin) in text.layout.lines().zip(origins) {
            let shift = Vec2::new(origin.x, origin.y - f64::from(line.metrics().baseline));
            self.ctx
                .set_transform(affine_to_cpu(self.transform * Affine::translate(shift)));

            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> ImagegenResult<FrameRGBA> {
        let (w, h) = canvas_u16(self.canvas)?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn canvas_u16(canvas: Canvas) -> ImagegenResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| ImagegenError::render("surface width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| ImagegenError::render("surface height exceeds u16"))?;
    Ok((w, h))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn image_paint(
    image: &PreparedImage,
    sampler: vello_cpu::peniko::ImageSampler,
) -> ImagegenResult<vello_cpu::Image> {
    let pixmap = premul_bytes_to_pixmap(image.rgba8_premul.as_slice(), image.width, image.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler,
    })
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> ImagegenResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ImagegenError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ImagegenError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(ImagegenError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
