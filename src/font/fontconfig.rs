//! System font lookup
//!
//! Family names resolve through the fontconfig library; per-character
//! coverage queries use `fc-match`.

use anyhow::{anyhow, Context, Result};
use fontconfig::Fontconfig;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A font file chosen by fontconfig
#[derive(Debug, Clone, PartialEq)]
pub struct FontMatch {
    /// Font file path
    pub path: PathBuf,
    /// Font name
    pub family: String,
}

/// Families tried, in order, when no font is configured
const DEFAULT_FAMILIES: [&str; 5] = [
    "DejaVu Sans",
    "Noto Sans",
    "Liberation Sans",
    "Arial",
    "Helvetica",
];

/// Whether a returned family plausibly satisfies the request
/// (fontconfig always returns the "closest" match, even if unrelated)
fn family_matches(requested: &str, got: &str) -> bool {
    let req = requested.to_ascii_lowercase();
    let got = got.to_ascii_lowercase();
    !got.is_empty() && (got.contains(&req) || req.contains(&got))
}

/// Family lookups through the fontconfig library
pub struct FontFinder {
    fc: Fontconfig,
}

impl FontFinder {
    pub fn new() -> Result<Self> {
        let fc = Fontconfig::new().ok_or_else(|| anyhow!("fontconfig initialization failed"))?;
        Ok(Self { fc })
    }

    /// Search by family name, rejecting unrelated substitutes
    pub fn find_font(&self, family: &str) -> Option<FontMatch> {
        let font = self.fc.find(family, None)?;
        if !family_matches(family, &font.name) {
            warn!(
                "fontconfig: rejected false match for \"{}\": got \"{}\"",
                family, font.name
            );
            return None;
        }
        Some(FontMatch {
            path: font.path,
            family: font.name,
        })
    }

    /// First available general-purpose text font
    pub fn find_default(&self) -> Option<FontMatch> {
        if let Some(found) = DEFAULT_FAMILIES.iter().find_map(|name| self.find_font(name)) {
            return Some(found);
        }

        // Whatever fontconfig considers sans-serif, taken without the name check
        let generic = self.fc.find("sans-serif", None).map(|font| FontMatch {
            path: font.path,
            family: font.name,
        });
        if generic.is_none() {
            warn!("No default font found");
        }
        generic
    }
}

/// Default text font, or None when fontconfig is unavailable
pub fn find_default() -> Option<FontMatch> {
    match FontFinder::new() {
        Ok(finder) => finder.find_default(),
        Err(e) => {
            warn!("{:#}", e);
            None
        }
    }
}

/// Font file covering `ch`, for per-character fallback.
///
/// fontconfig's family search has no charset filter, so this one goes
/// through `fc-match` directly.
pub fn find_font_for_char(ch: char) -> Option<PathBuf> {
    let query = format!(":charset={:04X}", ch as u32);
    let output = Command::new("fc-match")
        .args(["-f", "%{file}", &query])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    Some(PathBuf::from(text.trim()))
        .filter(|path| !path.as_os_str().is_empty() && path.exists())
}

pub fn load_font_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read font file: {}", path.display()))
}

/// Font bytes for a config specifier: an existing path is read as is,
/// anything else is a family name, and an empty string picks the default.
pub fn resolve_font(specifier: &str) -> Result<Vec<u8>> {
    let specifier = specifier.trim();
    if specifier.is_empty() {
        let found = FontFinder::new()?
            .find_default()
            .ok_or_else(|| anyhow!("No system font found via fontconfig"))?;
        info!(
            "Default font: {} ({})",
            found.family,
            found.path.display()
        );
        return load_font_file(&found.path);
    }

    let path = Path::new(specifier);
    if path.exists() {
        info!("Using font file {}", specifier);
        return load_font_file(path);
    }

    let found = FontFinder::new()?
        .find_font(specifier)
        .ok_or_else(|| anyhow!("No font file or family named \"{}\"", specifier))?;
    info!(
        "Font family \"{}\" matched {} at {}",
        specifier,
        found.family,
        found.path.display()
    );
    load_font_file(&found.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_matches() {
        assert!(family_matches("DejaVu Sans", "DejaVu Sans"));
        assert!(family_matches("noto sans", "Noto Sans CJK JP"));
        assert!(!family_matches("Arial", "DejaVu Sans"));
        assert!(!family_matches("Arial", ""));
    }

    #[test]
    fn test_missing_path_is_error() {
        assert!(load_font_file(Path::new("/nonexistent/font.ttf")).is_err());
    }
}
