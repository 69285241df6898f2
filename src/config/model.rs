//! Raw document shapes, exactly as they appear in the TOML spec file.
//!
//! Nothing here is validated. [`crate::Deck::from_document`] turns a [`SpecDocument`] into
//! the resolved, immutable form used for rendering.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::foundation::error::{ImagegenError, ImagegenResult};

/// Top-level document: `[setup]`, `[speaker]` and `[[slide]]`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpecDocument {
    /// Canvas, band geometry, assets and fonts.
    pub setup: SetupDef,
    /// Current speaker (carried, not rendered).
    pub speaker: SpeakerDef,
    /// Slides in output order.
    pub slide: Vec<SlideDef>,
}

/// `[setup]` table. Zero and empty values mean "not set".
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SetupDef {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Height of the lower-third band.
    pub size: u32,
    /// Image tiled across the band.
    pub background: String,
    /// Uniform inset.
    pub border: u32,
    /// Reserved width left of the text.
    pub left_border: u32,
    /// Reserved width right of the text.
    pub right_border: u32,
    /// Extra inset from the top of the band.
    pub top_border: u32,
    /// Logo drawn in the left slot of the band.
    pub icon: String,
    /// TrueType/OpenType font file.
    pub font: String,
    /// Text color name.
    pub font_color: String,
    /// Verse font size in pixels.
    pub verse_size: u32,
    /// Title font size in pixels.
    pub title_size: u32,
    /// Center verse lines instead of left-aligning them.
    pub center_verse: bool,
    /// Explicit logo slot width.
    pub logo_width: u32,
}

/// `[speaker]` table.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpeakerDef {
    /// Speaker name.
    pub name: String,
    /// Speaker role or title.
    pub role: String,
}

/// One `[[slide]]` entry. Which fields are non-empty decides the slide kind.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SlideDef {
    /// Main point text.
    pub title: String,
    /// Verse or longer text block.
    pub text: String,
    /// Citation drawn at the bottom right.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Image drawn in the left half above the band.
    pub image: String,
}

impl SpecDocument {
    /// Decode a document from TOML source.
    pub fn from_toml_str(src: &str) -> ImagegenResult<Self> {
        toml::from_str(src).map_err(|e| ImagegenError::config(e.to_string()))
    }

    /// Read and decode a spec file.
    pub fn read(path: &Path) -> ImagegenResult<Self> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("read spec file '{}'", path.display()))?;
        Self::from_toml_str(&src).map_err(|e| match e {
            ImagegenError::Config(msg) => {
                ImagegenError::config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
