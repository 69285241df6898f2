use std::path::Path;
use std::sync::Arc;

use crate::assets::decode::{decode_image, parse_svg};
use crate::assets::svg_raster::{rasterize_svg, svg_pixel_size};
use crate::assets::text::TextLayoutEngine;
use crate::config::setup::{Setup, SetupUsage};
use crate::foundation::error::{ImagegenError, ImagegenResult};

#[derive(Clone, Debug)]
/// Raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

#[derive(Clone, Debug)]
/// Parsed SVG document, rasterized on demand at the size it is drawn.
pub struct PreparedSvg {
    pub tree: Arc<usvg::Tree>,
}

/// A decoded picture: background tile, logo, or slide image.
#[derive(Clone, Debug)]
pub enum ImageAsset {
    Raster(PreparedImage),
    Svg(PreparedSvg),
}

impl ImageAsset {
    /// Read and decode `path`. `key` names the setting it came from (`setup.icon`, `slide 3`)
    /// and is carried into the error.
    pub fn load(path: &Path, key: &str) -> ImagegenResult<Self> {
        let context = || format!("{key} '{}'", path.display());
        let bytes = std::fs::read(path).map_err(|e| ImagegenError::resource(context(), e))?;

        let decoded = if is_svg(path) {
            parse_svg(&bytes, path.parent()).map(ImageAsset::Svg)
        } else {
            decode_image(&bytes).map(ImageAsset::Raster)
        };
        let asset = decoded.map_err(|e| ImagegenError::resource(context(), e))?;
        let (w, h) = asset.intrinsic_size()?;
        tracing::debug!(key, path = %path.display(), width = w, height = h, "image loaded");
        Ok(asset)
    }

    /// Natural size used for box fitting.
    pub fn intrinsic_size(&self) -> ImagegenResult<(u32, u32)> {
        match self {
            ImageAsset::Raster(img) => Ok((img.width, img.height)),
            ImageAsset::Svg(svg) => svg_pixel_size(&svg.tree),
        }
    }

    /// Pixels at intrinsic size.
    pub fn intrinsic_pixels(&self) -> ImagegenResult<PreparedImage> {
        let (w, h) = self.intrinsic_size()?;
        self.pixels_at(w, h)
    }

    /// Pixels for an on-screen footprint of `width x height`. Raster sources are returned
    /// untouched and left to the sampler; SVGs are rendered at that size to stay sharp.
    pub fn pixels_at(&self, width: u32, height: u32) -> ImagegenResult<PreparedImage> {
        match self {
            ImageAsset::Raster(img) => Ok(img.clone()),
            ImageAsset::Svg(svg) => rasterize_svg(&svg.tree, width.max(1), height.max(1)),
        }
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

/// Background tile, logo and font, decoded once for the whole deck.
pub struct SharedAssets {
    pub background: Option<PreparedImage>,
    pub icon: Option<ImageAsset>,
    pub text: Option<TextLayoutEngine>,
}

impl std::fmt::Debug for SharedAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedAssets")
            .field("background", &self.background.as_ref().map(|b| (b.width, b.height)))
            .field("icon", &self.icon.is_some())
            .field(
                "font_family",
                &self.text.as_ref().map(TextLayoutEngine::family_name),
            )
            .finish()
    }
}

impl SharedAssets {
    /// Load only what `usage` says some slide will draw.
    #[tracing::instrument(level = "debug", skip(setup))]
    pub fn prepare(setup: &Setup, usage: SetupUsage) -> ImagegenResult<Self> {
        let mut out = Self {
            background: None,
            icon: None,
            text: None,
        };

        if usage.band {
            if let Some(path) = &setup.background {
                let tile = ImageAsset::load(path, "setup.background")?.intrinsic_pixels()?;
                if tile.width == 0 || tile.height == 0 {
                    return Err(ImagegenError::geometry(format!(
                        "setup.background '{}' has no pixels",
                        path.display()
                    )));
                }
                out.background = Some(tile);
            }
            if let Some(path) = &setup.icon {
                out.icon = Some(ImageAsset::load(path, "setup.icon")?);
            }
        }

        if usage.text() {
            if let Some(path) = &setup.font {
                let bytes = std::fs::read(path).map_err(|e| {
                    ImagegenError::resource(format!("setup.font '{}'", path.display()), e)
                })?;
                let engine = TextLayoutEngine::from_font_bytes(bytes).map_err(|e| {
                    ImagegenError::resource(format!("setup.font '{}'", path.display()), e)
                })?;
                tracing::debug!(family = engine.family_name(), "font registered");
                out.text = Some(engine);
            }
        }

        Ok(out)
    }

    pub fn background(&self) -> ImagegenResult<&PreparedImage> {
        self.background
            .as_ref()
            .ok_or_else(|| ImagegenError::render("background tile was not prepared"))
    }

    pub fn text_mut(&mut self) -> ImagegenResult<&mut TextLayoutEngine> {
        self.text
            .as_mut()
            .ok_or_else(|| ImagegenError::render("font was not prepared"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
