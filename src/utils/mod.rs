//! Utility functions shared across glyphdex
//!
//! Common helpers that don't fit in specialized modules.

pub mod color;

pub use color::{blend_over, hex_to_rgba, parse_hex_color, rgb_within};
