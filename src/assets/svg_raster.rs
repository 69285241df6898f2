use std::sync::Arc;

use crate::assets::store::PreparedImage;
use crate::foundation::error::{ImagegenError, ImagegenResult};

/// Rasterization guard against runaway allocations.
pub const MAX_SVG_DIM: u32 = 16_384;

/// Intrinsic size of an SVG document in whole pixels (rounded up).
pub fn svg_pixel_size(tree: &usvg::Tree) -> ImagegenResult<(u32, u32)> {
    let size = tree.size();
    let to_px = |v: f32| -> ImagegenResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ImagegenError::geometry("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    };
    Ok((to_px(size.width())?, to_px(size.height())?))
}

/// Render `tree` stretched to exactly `width x height` pixels.
pub fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> ImagegenResult<PreparedImage> {
    if width == 0 || height == 0 || width > MAX_SVG_DIM || height > MAX_SVG_DIM {
        return Err(ImagegenError::geometry(format!(
            "svg raster size {width}x{height} outside 1..={MAX_SVG_DIM}"
        )));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ImagegenError::render("failed to allocate svg pixmap"))?;

    let sx = width as f32 / tree.size().width();
    let sy = height as f32 / tree.size().height();
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    // tiny-skia already stores premultiplied RGBA8.
    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.take()),
    })
}
