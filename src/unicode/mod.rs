//! Unicode data
//!
//! Handles:
//! - Block table (named code-point ranges)
//! - Character record generation and rehydration
//! - Curated common names

pub mod categories;
pub mod character;
pub mod names;

pub use categories::CATEGORIES;
pub use character::{
    code_point_label, from_code_point, from_single_char, generate, parse_code_point,
    UnicodeCharacter,
};
