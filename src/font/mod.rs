//! Font loading and glyph rasterization
//!
//! Handles:
//! - System font discovery (fontconfig / fc-match)
//! - Per-character fallback fonts
//! - Glyph rasterization (fontdue)

pub mod fontconfig;
pub mod glyph;

pub use glyph::{GlyphBitmap, GlyphRasterizer, GlyphSource};
