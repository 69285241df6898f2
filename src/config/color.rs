use vello_cpu::peniko::color::{Srgb, parse_color};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{ImagegenError, ImagegenResult};

/// Resolve a `font_color` value to straight RGBA8.
///
/// Accepts CSS/SVG color names (`white`, `gold`, `cornflowerblue`, ...) and the other CSS
/// color syntaxes (`#rrggbb`, `rgb(...)`). An empty value resolves to `default`.
pub fn resolve_font_color(value: &str, default: Rgba8) -> ImagegenResult<Rgba8> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(default);
    }

    let parsed = parse_color(value).map_err(|e| {
        ImagegenError::config(format!("setup.font_color: unknown color \"{value}\" ({e})"))
    })?;
    let c = parsed.to_alpha_color::<Srgb>().to_rgba8();
    Ok(Rgba8 {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    })
}
