//! Lower-third overlay images for a livestream, rendered from a TOML spec file.
//!
//! A spec describes the canvas, a tiled background band, an optional logo, a font and a list
//! of slides. Each slide becomes one transparent PNG (`output/slideNN.png`) that a video mixer
//! keys over the camera feed:
//!
//! - Load and validate a [`Deck`] (all configuration errors surface here)
//! - [`render_deck`] composites every slide and sweeps stale outputs from a longer previous run
#![forbid(unsafe_code)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod layout;
pub mod render;

pub use crate::config::deck::Deck;
pub use crate::config::model::SpecDocument;
pub use crate::config::setup::{Setup, Speaker};
pub use crate::config::slide::{Caption, ImageSlide, MainPointSlide, Slide, VerseSlide};
pub use crate::foundation::core::{Affine, Anchor, Canvas, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{ImagegenError, ImagegenResult};
pub use crate::layout::fit::BoxFit;
pub use crate::render::frame::FrameRGBA;
pub use crate::render::pipeline::{RenderOutput, output_path, render_deck, render_slide};
