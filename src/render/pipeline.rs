use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::store::{ImageAsset, SharedAssets};
use crate::config::deck::Deck;
use crate::config::setup::Setup;
use crate::config::slide::{CaptionRef, Slide};
use crate::foundation::error::ImagegenResult;
use crate::render::compositor::SlideCompositor;
use crate::render::frame::FrameRGBA;
use crate::render::surface::Surface;

/// Files touched by one [`render_deck`] run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// One PNG per slide, in slide order.
    pub written: Vec<PathBuf>,
    /// Leftovers from an earlier, longer deck.
    pub removed: Vec<PathBuf>,
}

/// `<dir>/slideNN.png` for 1-based slide `number`.
pub fn output_path(dir: &Path, number: usize) -> PathBuf {
    dir.join(format!("slide{number:02}.png"))
}

/// Composite one slide onto a fresh transparent canvas.
///
/// Order: band (tile + logo), caption text, then the slide image on top.
pub fn render_slide(
    slide: &Slide,
    number: usize,
    setup: &Setup,
    assets: &mut SharedAssets,
) -> ImagegenResult<FrameRGBA> {
    let mut surface = Surface::new(setup.canvas)?;
    let compositor = SlideCompositor::new(setup);

    if slide.draws_band() {
        compositor.draw_background(&mut surface, assets)?;
    }
    match slide.caption() {
        Some(CaptionRef::Verse(verse)) => compositor.draw_verse(&mut surface, assets, verse)?,
        Some(CaptionRef::MainPoint(main_point)) => {
            compositor.draw_main_point(&mut surface, assets, main_point)?
        }
        None => {}
    }
    if let Some(image) = slide.image() {
        let asset = ImageAsset::load(&image.path, &format!("slide {number}"))?;
        compositor.draw_slide_image(&mut surface, &asset)?;
    }

    surface.finish()
}

/// Render every slide of `deck` into `out_dir`, then delete stale higher-numbered outputs.
///
/// Shared assets are loaded before the directory is touched, so a bad background, logo or font
/// leaves no output behind.
#[tracing::instrument(skip(deck), fields(slides = deck.slides.len()))]
pub fn render_deck(deck: &Deck, out_dir: &Path) -> ImagegenResult<RenderOutput> {
    let mut assets = SharedAssets::prepare(&deck.setup, deck.usage())?;
    ensure_output_dir(out_dir)?;

    let mut out = RenderOutput::default();
    for (idx, slide) in deck.slides.iter().enumerate() {
        let number = idx + 1;
        let frame = render_slide(slide, number, &deck.setup, &mut assets)?;
        let path = output_path(out_dir, number);
        frame.save_png(&path)?;
        tracing::debug!(path = %path.display(), "slide written");
        out.written.push(path);
    }

    out.removed = remove_stale_outputs(out_dir, deck.slides.len() + 1)?;
    Ok(out)
}

/// Create `dir` (and parents) if needed. An existing directory is fine.
pub fn ensure_output_dir(dir: &Path) -> ImagegenResult<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt as _;
        builder.mode(0o777);
    }
    builder
        .create(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

/// Delete `slide<first>.png`, `slide<first+1>.png`, ... until one is missing.
///
/// Numbering gaps stop the sweep; anything after a gap is left alone.
#[tracing::instrument]
pub fn remove_stale_outputs(dir: &Path, first: usize) -> ImagegenResult<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for number in first.. {
        let path = output_path(dir, number);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed stale slide");
                removed.push(path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => break,
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("remove stale '{}'", path.display()))
                    .into());
            }
        }
    }
    Ok(removed)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
