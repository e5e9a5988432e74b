//! Glyph rasterization
//!
//! Rasterizes single characters with fontdue. Characters missing from the
//! primary font are looked up in a per-character fallback font found via
//! fontconfig; loaded fallbacks are cached by path.

use anyhow::{anyhow, Result};
use fontdue::{Font, FontSettings};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use super::fontconfig::{find_font_for_char, load_font_file, resolve_font};

/// 8-bit coverage bitmap of one glyph (row-major)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

/// Rasterizer with primary font and on-demand fallbacks
pub struct GlyphRasterizer {
    primary: Font,
    /// Fallback fonts by path (None = failed to load, don't retry)
    fallbacks: HashMap<PathBuf, Option<Font>>,
}

fn parse_font(data: &[u8]) -> Result<Font> {
    Font::from_bytes(data, FontSettings::default()).map_err(|e| anyhow!("Failed to load font: {}", e))
}

impl GlyphRasterizer {
    /// Create from raw font data
    pub fn new(font_data: &[u8]) -> Result<Self> {
        Ok(Self {
            primary: parse_font(font_data)?,
            fallbacks: HashMap::new(),
        })
    }

    /// Create from a font specifier (path, family name, or empty for default)
    pub fn from_specifier(specifier: &str) -> Result<Self> {
        let data = resolve_font(specifier)?;
        let rasterizer = Self::new(&data)?;
        info!("Glyph rasterizer ready");
        Ok(rasterizer)
    }

    /// Whether the primary font has a glyph for the character
    pub fn has_glyph(&self, ch: char) -> bool {
        self.primary.lookup_glyph_index(ch) != 0
    }

    /// Fallback font covering `ch`, loading it on first use
    fn fallback_for(&mut self, ch: char) -> Option<&Font> {
        let path = find_font_for_char(ch)?;
        let entry = self.fallbacks.entry(path.clone()).or_insert_with(|| {
            match load_font_file(&path).and_then(|data| parse_font(&data)) {
                Ok(font) => {
                    debug!("Fallback font loaded: {}", path.display());
                    Some(font)
                }
                Err(e) => {
                    warn!("Fallback font unusable {}: {}", path.display(), e);
                    None
                }
            }
        });
        entry.as_ref().filter(|font| font.lookup_glyph_index(ch) != 0)
    }

    /// Rasterize a character at `px` pixels.
    ///
    /// Returns None for glyphs with no ink (spaces) so callers can skip them.
    /// Characters no font covers render with the primary font's notdef glyph.
    pub fn rasterize(&mut self, ch: char, px: f32) -> Option<GlyphBitmap> {
        let (metrics, coverage) = if self.has_glyph(ch) {
            self.primary.rasterize(ch, px)
        } else {
            match self.fallback_for(ch) {
                Some(font) => font.rasterize(ch, px),
                None => {
                    debug!("No font covers U+{:04X}", ch as u32);
                    self.primary.rasterize(ch, px)
                }
            }
        };

        if metrics.width == 0 || metrics.height == 0 {
            return None;
        }
        Some(GlyphBitmap {
            width: metrics.width,
            height: metrics.height,
            coverage,
        })
    }
}

/// Anything that can produce glyph bitmaps for rendering.
///
/// Shared between async tasks, so implementations must be thread-safe.
pub trait GlyphSource: Send + Sync {
    fn glyph(&self, ch: char, px: f32) -> Option<GlyphBitmap>;
}

impl GlyphSource for Mutex<GlyphRasterizer> {
    fn glyph(&self, ch: char, px: f32) -> Option<GlyphBitmap> {
        // Held only for the rasterization itself
        let mut rasterizer = self.lock().ok()?;
        rasterizer.rasterize(ch, px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_font_data_is_error() {
        assert!(GlyphRasterizer::new(b"definitely not a font").is_err());
    }

    #[test]
    fn test_glyph_source_skips_blank() {
        struct Square;
        impl GlyphSource for Square {
            fn glyph(&self, ch: char, _px: f32) -> Option<GlyphBitmap> {
                (!ch.is_whitespace()).then(|| GlyphBitmap {
                    width: 2,
                    height: 2,
                    coverage: vec![255; 4],
                })
            }
        }
        assert!(Square.glyph(' ', 10.0).is_none());
        assert_eq!(Square.glyph('A', 10.0).map(|g| g.coverage.len()), Some(4));
    }
}
