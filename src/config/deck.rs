use std::path::Path;

use crate::config::model::SpecDocument;
use crate::config::setup::{Setup, SetupUsage, Speaker};
use crate::config::slide::Slide;
use crate::foundation::error::ImagegenResult;

/// A validated spec: resolved setup plus every slide classified.
///
/// Building a `Deck` performs all configuration checks, so a deck that exists can only fail
/// later on resource loading or output IO.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    pub setup: Setup,
    pub speaker: Speaker,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Validate a decoded document.
    pub fn from_document(doc: &SpecDocument) -> ImagegenResult<Self> {
        let slides = doc
            .slide
            .iter()
            .enumerate()
            .map(|(idx, def)| Slide::from_def(idx + 1, def))
            .collect::<ImagegenResult<Vec<_>>>()?;
        let setup = Setup::resolve(&doc.setup, usage_of(&slides))?;
        Ok(Self {
            setup,
            speaker: Speaker::from(&doc.speaker),
            slides,
        })
    }

    /// Read, decode and validate a spec file.
    #[tracing::instrument]
    pub fn load(path: &Path) -> ImagegenResult<Self> {
        let doc = SpecDocument::read(path)?;
        let deck = Self::from_document(&doc)?;
        tracing::debug!(slides = deck.slides.len(), "spec loaded");
        Ok(deck)
    }

    pub fn usage(&self) -> SetupUsage {
        usage_of(&self.slides)
    }
}

fn usage_of(slides: &[Slide]) -> SetupUsage {
    slides.iter().fold(SetupUsage::default(), |acc, s| SetupUsage {
        band: acc.band || s.draws_band(),
        verse: acc.verse || s.has_verse(),
        main_point: acc.main_point || s.has_main_point(),
        image: acc.image || s.image().is_some(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/config/deck.rs"]
mod tests;
