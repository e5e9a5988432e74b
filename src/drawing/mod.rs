//! Drawing surface
//!
//! Captures a glyph for shape recognition:
//! - Freehand strokes rendered as anti-aliased capsules (round cap/join)
//! - Uploaded images fitted to the canvas, with background removal
//! - PNG data URL export

pub mod background;
pub mod canvas;
pub mod geometry;

pub use canvas::{encode_png, Canvas, Stroke};
