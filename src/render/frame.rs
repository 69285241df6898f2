use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{ImagegenError, ImagegenResult};

/// A rendered slide as RGBA8 pixels.
///
/// The rasterizer produces premultiplied alpha; PNG wants straight alpha, so
/// [`FrameRGBA::save_png`] converts first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Same pixels with straight alpha.
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            unpremultiply_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }

    fn check_len(&self) -> ImagegenResult<()> {
        let want = self.width as usize * self.height as usize * 4;
        if self.data.len() != want {
            return Err(ImagegenError::render(format!(
                "frame is {}x{} but holds {} bytes",
                self.width,
                self.height,
                self.data.len()
            )));
        }
        Ok(())
    }

    /// Encode as an 8-bit RGBA PNG in memory.
    pub fn encode_png(self) -> ImagegenResult<Vec<u8>> {
        self.check_len()?;
        let straight = self.into_straight();
        let img = image::RgbaImage::from_raw(straight.width, straight.height, straight.data)
            .ok_or_else(|| ImagegenError::render("frame buffer does not match its size"))?;

        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .context("encode png")?;
        Ok(out)
    }

    /// Write as an 8-bit RGBA PNG, replacing any existing file.
    pub fn save_png(self, path: &Path) -> ImagegenResult<()> {
        self.check_len()?;
        let straight = self.into_straight();
        image::save_buffer_with_format(
            path,
            &straight.data,
            straight.width,
            straight.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        match a {
            0 => px[..3].fill(0),
            255 => {}
            _ => {
                for c in &mut px[..3] {
                    *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
    }
}
