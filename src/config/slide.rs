use std::path::PathBuf;

use crate::config::model::SlideDef;
use crate::foundation::error::{ImagegenError, ImagegenResult};

/// Verse or text block, with an optional citation at the bottom right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerseSlide {
    /// Wrapped body text, possibly empty when only a citation is shown.
    pub text: String,
    pub reference: Option<String>,
}

/// Large centered main point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainPointSlide {
    pub title: String,
}

/// Picture fitted into the left half of the canvas, above the band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSlide {
    pub path: PathBuf,
}

/// Text drawn inside the lower-third band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Caption {
    Verse(VerseSlide),
    MainPoint(MainPointSlide),
}

impl Caption {
    pub fn borrowed(&self) -> CaptionRef<'_> {
        match self {
            Caption::Verse(v) => CaptionRef::Verse(v),
            Caption::MainPoint(m) => CaptionRef::MainPoint(m),
        }
    }
}

/// Borrowed view of a slide's caption, whichever variant holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionRef<'a> {
    Verse(&'a VerseSlide),
    MainPoint(&'a MainPointSlide),
}

/// A validated slide. Built once by [`Slide::from_def`]; drawing never re-inspects raw fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slide {
    /// No fields set: a fully transparent frame.
    Blank,
    Verse(VerseSlide),
    MainPoint(MainPointSlide),
    Image(ImageSlide),
    /// An image stacked over a captioned band.
    Composite { caption: Caption, image: ImageSlide },
}

impl Slide {
    /// Classify a raw `[[slide]]` entry. `number` is 1-based and only used in diagnostics.
    ///
    /// `title` cannot be combined with `text` or `ref`; `image` combines with either.
    pub fn from_def(number: usize, def: &SlideDef) -> ImagegenResult<Self> {
        let has_verse = !def.text.is_empty() || !def.reference.is_empty();
        let has_title = !def.title.is_empty();

        let caption = match (has_verse, has_title) {
            (true, true) => {
                return Err(ImagegenError::config(format!(
                    "slide {number}: can't use 'title' with 'text' or 'ref'"
                )));
            }
            (true, false) => Some(Caption::Verse(VerseSlide {
                text: def.text.clone(),
                reference: (!def.reference.is_empty()).then(|| def.reference.clone()),
            })),
            (false, true) => Some(Caption::MainPoint(MainPointSlide {
                title: def.title.clone(),
            })),
            (false, false) => None,
        };
        let image = (!def.image.is_empty()).then(|| ImageSlide {
            path: PathBuf::from(&def.image),
        });

        Ok(match (caption, image) {
            (None, None) => Slide::Blank,
            (None, Some(image)) => Slide::Image(image),
            (Some(Caption::Verse(v)), None) => Slide::Verse(v),
            (Some(Caption::MainPoint(m)), None) => Slide::MainPoint(m),
            (Some(caption), Some(image)) => Slide::Composite { caption, image },
        })
    }

    pub fn caption(&self) -> Option<CaptionRef<'_>> {
        match self {
            Slide::Verse(v) => Some(CaptionRef::Verse(v)),
            Slide::MainPoint(m) => Some(CaptionRef::MainPoint(m)),
            Slide::Composite { caption, .. } => Some(caption.borrowed()),
            Slide::Blank | Slide::Image(_) => None,
        }
    }

    pub fn image(&self) -> Option<&ImageSlide> {
        match self {
            Slide::Image(image) | Slide::Composite { image, .. } => Some(image),
            Slide::Blank | Slide::Verse(_) | Slide::MainPoint(_) => None,
        }
    }

    /// Whether the default lower-third band (tile + logo) is painted.
    pub fn draws_band(&self) -> bool {
        !matches!(self, Slide::Blank)
    }

    pub fn has_verse(&self) -> bool {
        matches!(self.caption(), Some(CaptionRef::Verse(_)))
    }

    pub fn has_main_point(&self) -> bool {
        matches!(self.caption(), Some(CaptionRef::MainPoint(_)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/slide.rs"]
mod tests;
