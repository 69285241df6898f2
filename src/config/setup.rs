use std::path::PathBuf;

use crate::config::color::resolve_font_color;
use crate::config::model::{SetupDef, SpeakerDef};
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{ImagegenError, ImagegenResult};

/// Text color used when `font_color` is not set.
pub const DEFAULT_FONT_COLOR: Rgba8 = Rgba8::WHITE;

/// What the slides of a deck will draw. Decides which setup keys are required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetupUsage {
    pub band: bool,
    pub verse: bool,
    pub main_point: bool,
    /// Some slide draws a picture above the band.
    pub image: bool,
}

impl SetupUsage {
    pub fn text(self) -> bool {
        self.verse || self.main_point
    }
}

/// Fully resolved, immutable setup. All defaults are applied here, once.
#[derive(Clone, Debug, PartialEq)]
pub struct Setup {
    pub canvas: Canvas,
    /// Height of the lower-third band (`size`).
    pub band_height: u32,
    pub border: u32,
    /// Width reserved at the left of the band for the logo (`logo_width`, else
    /// `left_border`, else `size`).
    pub logo_width: u32,
    pub right_border: u32,
    pub top_border: u32,
    /// `None` only when no slide paints the band.
    pub background: Option<PathBuf>,
    pub icon: Option<PathBuf>,
    /// `None` only when no slide draws text.
    pub font: Option<PathBuf>,
    pub font_color: Rgba8,
    pub verse_size: f32,
    pub title_size: f32,
    pub center_verse: bool,
}

/// Speaker details. Carried for a future name badge; nothing renders them yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Speaker {
    pub name: String,
    pub role: String,
}

impl From<&SpeakerDef> for Speaker {
    fn from(def: &SpeakerDef) -> Self {
        Self {
            name: def.name.clone(),
            role: def.role.clone(),
        }
    }
}

fn non_empty_path(s: &str) -> Option<PathBuf> {
    (!s.is_empty()).then(|| PathBuf::from(s))
}

/// Logo slot width: explicit `logo_width`, then `left_border`, then the band height.
pub fn resolve_logo_width(def: &SetupDef) -> u32 {
    if def.logo_width > 0 {
        def.logo_width
    } else if def.left_border > 0 {
        def.left_border
    } else {
        def.size
    }
}

impl Setup {
    /// Normalize and validate `def` for a deck whose slides need `usage`.
    pub fn resolve(def: &SetupDef, usage: SetupUsage) -> ImagegenResult<Self> {
        let canvas = Canvas::new(def.width, def.height)?;
        if def.size > def.height {
            return Err(ImagegenError::config(format!(
                "setup.size ({}) exceeds setup.height ({})",
                def.size, def.height
            )));
        }
        if usage.image && def.size >= def.height {
            return Err(ImagegenError::config(format!(
                "setup.size ({}) leaves no room above the band for slide images",
                def.size
            )));
        }

        let logo_width = resolve_logo_width(def);
        let icon = non_empty_path(&def.icon);
        if icon.is_some() {
            let slot_w = i64::from(logo_width) - 2 * i64::from(def.border);
            let slot_h = i64::from(def.size) - 2 * i64::from(def.border);
            if slot_w <= 0 || slot_h <= 0 {
                return Err(ImagegenError::config(format!(
                    "setup.icon needs a logo slot larger than twice 'border' ({}); \
                     set 'left_border' or 'logo_width' (slot is {slot_w}x{slot_h})",
                    def.border
                )));
            }
        }

        let background = non_empty_path(&def.background);
        if usage.band && background.is_none() {
            return Err(ImagegenError::config(
                "setup.background must be set to draw the lower-third band",
            ));
        }

        let font = non_empty_path(&def.font);
        if usage.text() {
            if font.is_none() {
                return Err(ImagegenError::config(
                    "setup.font must be set to draw text slides",
                ));
            }
            let text_w = i64::from(def.width)
                - i64::from(logo_width)
                - i64::from(def.right_border)
                - 2 * i64::from(def.border);
            if text_w <= 0 {
                return Err(ImagegenError::config(format!(
                    "no room for text: width - logo width - right_border - 2*border = {text_w}"
                )));
            }
        }
        if usage.verse && def.verse_size == 0 {
            return Err(ImagegenError::config(
                "setup.verse_size must be > 0 to draw verse slides",
            ));
        }
        if usage.main_point && def.title_size == 0 {
            return Err(ImagegenError::config(
                "setup.title_size must be > 0 to draw title slides",
            ));
        }

        Ok(Self {
            canvas,
            band_height: def.size,
            border: def.border,
            logo_width,
            right_border: def.right_border,
            top_border: def.top_border,
            background,
            icon,
            font,
            font_color: resolve_font_color(&def.font_color, DEFAULT_FONT_COLOR)?,
            verse_size: def.verse_size as f32,
            title_size: def.title_size as f32,
            center_verse: def.center_verse,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/setup.rs"]
mod tests;
