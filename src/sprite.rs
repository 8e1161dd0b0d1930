//! Sprite texture loading.
//!
//! The demo draws every particle with one small RGBA sprite. It is normally
//! loaded from a PNG/JPEG file; when the file is missing or unreadable the
//! demo degrades to a procedurally generated radial blob instead of
//! crashing (a blank-ish texture is an acceptable state for a visual demo).

use std::path::Path;

use crate::error::TextureError;

/// Raw RGBA sprite data ready for GPU upload.
#[derive(Debug, Clone)]
pub struct SpriteConfig {
    /// Raw RGBA pixel data (width * height * 4 bytes).
    pub data: Vec<u8>,
    /// Sprite width in pixels.
    pub width: u32,
    /// Sprite height in pixels.
    pub height: u32,
}

impl SpriteConfig {
    /// Create a sprite from raw RGBA data.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "RGBA data size mismatch"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Load a sprite from an image file (PNG or JPEG).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let img = image::open(path.as_ref())?.into_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            data: img.into_raw(),
            width,
            height,
        })
    }

    /// Load a sprite, falling back to [`SpriteConfig::radial_blob`] with a
    /// logged warning if the file cannot be read.
    pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(sprite) => sprite,
            Err(e) => {
                log::warn!(
                    "Could not load sprite '{}' ({}); using procedural fallback",
                    path.as_ref().display(),
                    e
                );
                Self::radial_blob(64)
            }
        }
    }

    /// Generate a white radial-falloff blob: opaque at the center, fully
    /// transparent at the corners. A stand-in for the particle sprite asset.
    pub fn radial_blob(size: u32) -> Self {
        let size = size.max(1);
        let mut data = Vec::with_capacity((size * size * 4) as usize);
        let center = (size - 1) as f32 / 2.0;
        let radius = size as f32 / 2.0;
        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                let d = (dx * dx + dy * dy).sqrt() / radius;
                let falloff = (1.0 - d).clamp(0.0, 1.0);
                // Squared falloff reads as a soft glow rather than a disc.
                let alpha = (falloff * falloff * 255.0).round() as u8;
                data.extend_from_slice(&[255, 255, 255, alpha]);
            }
        }
        Self {
            data,
            width: size,
            height: size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_blob_dimensions() {
        let sprite = SpriteConfig::radial_blob(64);
        assert_eq!(sprite.width, 64);
        assert_eq!(sprite.height, 64);
        assert_eq!(sprite.data.len(), 64 * 64 * 4);
    }

    #[test]
    fn test_radial_blob_alpha_profile() {
        let sprite = SpriteConfig::radial_blob(64);
        let alpha_at = |x: u32, y: u32| sprite.data[((y * 64 + x) * 4 + 3) as usize];

        // Near-opaque at the center, fully transparent at the corner.
        assert!(alpha_at(31, 31) > 200);
        assert_eq!(alpha_at(0, 0), 0);
        assert_eq!(alpha_at(63, 63), 0);
    }

    #[test]
    fn test_fallback_on_missing_file() {
        let sprite = SpriteConfig::load_or_fallback("no/such/sprite.png");
        assert_eq!(sprite.width, 64);
        assert_eq!(sprite.data.len(), 64 * 64 * 4);
    }

    #[test]
    fn test_from_rgba() {
        let sprite = SpriteConfig::from_rgba(vec![255; 16], 2, 2);
        assert_eq!(sprite.width, 2);
        assert_eq!(sprite.height, 2);
    }

    #[test]
    #[should_panic(expected = "RGBA data size mismatch")]
    fn test_from_rgba_size_mismatch_panics() {
        let _ = SpriteConfig::from_rgba(vec![255; 10], 2, 2);
    }
}
