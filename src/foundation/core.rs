use crate::foundation::error::{ImagegenError, ImagegenResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Largest edge the CPU rasterizer can address.
    pub const MAX_DIM: u32 = u16::MAX as u32;

    pub fn new(width: u32, height: u32) -> ImagegenResult<Self> {
        if width == 0 || height == 0 {
            return Err(ImagegenError::config(
                "setup.width and setup.height must be > 0",
            ));
        }
        if width > Self::MAX_DIM || height > Self::MAX_DIM {
            return Err(ImagegenError::config(format!(
                "canvas {width}x{height} exceeds {max}x{max}",
                max = Self::MAX_DIM
            )));
        }
        Ok(Self { width, height })
    }

    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Normalized placement anchor: how leftover space around a fitted element is split.
///
/// `x = 0` puts all horizontal slack after the element (left aligned), `x = 1` puts it all
/// before (right aligned). Same for `y` vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const TOP_LEFT: Self = Self::new(0.0, 0.0);
    pub const CENTER: Self = Self::new(0.5, 0.5);
    pub const LEFT_CENTER: Self = Self::new(0.0, 0.5);
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn validate(self) -> ImagegenResult<Self> {
        let ok = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !ok(self.x) || !ok(self.y) {
            return Err(ImagegenError::geometry(format!(
                "anchor ({}, {}) must lie in [0,1]x[0,1]",
                self.x, self.y
            )));
        }
        Ok(self)
    }
}
