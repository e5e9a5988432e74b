//! Configuration file management
//!
//! Loads TOML configuration files and provides application settings.
//! Default config path: ~/.config/glyphdex/config.toml

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    DEFAULT_PROXY_URL, EXPORT_BACKGROUND, EXPORT_FOREGROUND, EXPORT_GLYPH_PX, EXPORT_PNG_SIZE,
    GRID_BATCH_SIZE, GRID_COLUMNS, GRID_DEBOUNCE_MS, GRID_LOAD_THRESHOLD, SEARCH_MAX_RESULTS,
    SHAPECATCHER_URL, WIKI_API_URL,
};
use crate::utils::parse_hex_color;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Character grid settings
    pub grid: GridConfig,
    /// Search settings
    pub search: SearchConfig,
    /// Similar-character lookup settings
    pub similarity: SimilarityConfig,
    /// Wikipedia probe settings
    pub wiki: WikiConfig,
    /// Export settings
    pub export: ExportConfig,
}

/// Character grid settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells revealed initially and per batch
    pub batch_size: usize,
    /// Remaining distance to the bottom that triggers the next batch
    pub load_threshold: f32,
    /// Minimum time between batch reveals (milliseconds)
    pub debounce_ms: u64,
    /// Cells per rendered row
    pub columns: usize,
}

/// Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Global result cap
    pub max_results: usize,
}

/// Recognition backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityBackend {
    /// JSON proxy service (`{imageData}` -> `{characters}`)
    Proxy,
    /// Talk to shapecatcher.com directly
    Shapecatcher,
}

/// Similar-character lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// "proxy" (default) or "shapecatcher"
    pub backend: SimilarityBackend,
    /// Proxy endpoint
    pub proxy_url: String,
    /// Shapecatcher endpoint
    pub shapecatcher_url: String,
    /// Seed the cache with built-in look-alikes
    pub use_builtin_cache: bool,
}

/// Wikipedia probe settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// MediaWiki API endpoint
    pub api_url: String,
    /// Probe article existence in `show`
    pub enabled: bool,
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Font family name or file path (system default if empty)
    pub font: String,
    /// PNG edge length in pixels
    pub png_size: u32,
    /// Glyph size in pixels
    pub glyph_px: f32,
    /// Solid PNG background (RRGGBB)
    pub background: String,
    /// Solid PNG glyph color (RRGGBB)
    pub foreground: String,
    /// SVG text fill (any SVG color)
    pub svg_fill: String,
    /// Output directory (current directory if empty)
    pub output_dir: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            batch_size: GRID_BATCH_SIZE,
            load_threshold: GRID_LOAD_THRESHOLD,
            debounce_ms: GRID_DEBOUNCE_MS,
            columns: GRID_COLUMNS,
        }
    }
}

impl GridConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: SEARCH_MAX_RESULTS,
        }
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            backend: SimilarityBackend::Proxy,
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            shapecatcher_url: SHAPECATCHER_URL.to_string(),
            use_builtin_cache: true,
        }
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: WIKI_API_URL.to_string(),
            enabled: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            font: String::new(),
            png_size: EXPORT_PNG_SIZE,
            glyph_px: EXPORT_GLYPH_PX,
            background: EXPORT_BACKGROUND.to_string(),
            foreground: EXPORT_FOREGROUND.to_string(),
            svg_fill: "white".to_string(),
            output_dir: String::new(),
        }
    }
}

impl ExportConfig {
    /// Output directory, falling back to the current directory
    pub fn output_dir(&self) -> PathBuf {
        if self.output_dir.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(self.output_dir.trim())
        }
    }
}

impl Config {
    /// System-wide config path
    const SYSTEM_CONFIG_PATH: &'static str = "/etc/glyphdex/config.toml";

    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        // 1. --config flag
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        // 2. GLYPHDEX_CONFIG environment variable
        if let Ok(path) = std::env::var("GLYPHDEX_CONFIG") {
            let p = Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
        }

        // 3. User config: ~/.config/glyphdex/config.toml
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // 4. System config: /etc/glyphdex/config.toml
        let system_config = Path::new(Self::SYSTEM_CONFIG_PATH);
        if system_config.exists() {
            return Some(system_config.to_path_buf());
        }

        None
    }

    /// Load configuration with priority:
    /// 1. --config PATH
    /// 2. GLYPHDEX_CONFIG environment variable
    /// 3. ~/.config/glyphdex/config.toml (user config)
    /// 4. /etc/glyphdex/config.toml (system config)
    /// 5. Built-in defaults
    pub fn load(explicit: Option<&Path>) -> Self {
        if let Some(path) = Self::config_path(explicit) {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {:#}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.warn_invalid();
        Ok(config)
    }

    /// Report values that will be replaced by fallbacks at use time
    fn warn_invalid(&self) {
        for (key, value) in [
            ("export.background", &self.export.background),
            ("export.foreground", &self.export.foreground),
        ] {
            if parse_hex_color(value).is_none() {
                warn!("Invalid color for {}: \"{}\" (using default)", key, value);
            }
        }
        if self.grid.batch_size == 0 {
            warn!("grid.batch_size = 0 reveals nothing");
        }
    }

    /// Write a commented template to `path` (default user path if None)
    pub fn write_template(path: Option<&Path>, force: bool) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path().ok_or_else(|| anyhow!("Config directory not found"))?,
        };

        if config_path.exists() && !force {
            return Err(anyhow!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            ));
        }
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        std::fs::write(&config_path, template())
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(config_path)
    }
}

/// Commented template with default values.
/// The export font line is filled in when fontconfig finds a default font.
fn template() -> String {
    let defaults = Config::default();

    let font_line = match crate::font::fontconfig::find_default() {
        Some(m) => format!("font = \"{}\"", m.family),
        None => "# font = \"\"              # Family name or path (e.g. \"DejaVu Sans\")".to_string(),
    };

    format!(
        r#"# glyphdex configuration
# Location: ~/.config/glyphdex/config.toml (or set GLYPHDEX_CONFIG)

[grid]
# Cells revealed at first and per batch while scrolling
batch_size = {batch_size}
# Reveal the next batch when this close to the bottom
load_threshold = {load_threshold:.1}
# Minimum milliseconds between reveals
debounce_ms = {debounce_ms}
# Cells per row in the terminal grid
columns = {columns}

[search]
# Results are capped across all scanned categories
max_results = {max_results}

[similarity]
# "proxy": JSON service at proxy_url
# "shapecatcher": query shapecatcher.com directly
backend = "proxy"
proxy_url = "{proxy_url}"
shapecatcher_url = "{shapecatcher_url}"
# Answer common look-alikes (O/0, Latin/Greek/Cyrillic) without a lookup
use_builtin_cache = {use_builtin_cache}

[wiki]
api_url = "{api_url}"
# Check whether a U+XXXX article exists when showing a character
enabled = {wiki_enabled}

[export]
{font_line}
png_size = {png_size}
glyph_px = {glyph_px:.1}
# Solid PNG colors (RRGGBB)
background = "{background}"
foreground = "{foreground}"
# SVG text fill
svg_fill = "{svg_fill}"
# Empty = current directory
output_dir = ""
"#,
        batch_size = defaults.grid.batch_size,
        load_threshold = defaults.grid.load_threshold,
        debounce_ms = defaults.grid.debounce_ms,
        columns = defaults.grid.columns,
        max_results = defaults.search.max_results,
        proxy_url = defaults.similarity.proxy_url,
        shapecatcher_url = defaults.similarity.shapecatcher_url,
        use_builtin_cache = defaults.similarity.use_builtin_cache,
        api_url = defaults.wiki.api_url,
        wiki_enabled = defaults.wiki.enabled,
        font_line = font_line,
        png_size = defaults.export.png_size,
        glyph_px = defaults.export.glyph_px,
        background = defaults.export.background,
        foreground = defaults.export.foreground,
        svg_fill = defaults.export.svg_fill,
    )
}

/// Get default config file path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("glyphdex").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.grid.batch_size, 200);
        assert_eq!(config.grid.debounce(), Duration::from_millis(100));
        assert_eq!(config.search.max_results, 500);
        assert_eq!(config.similarity.backend, SimilarityBackend::Proxy);
        assert!(config.similarity.use_builtin_cache);
        assert!(config.wiki.enabled);
        assert_eq!(config.export.png_size, 200);
        assert_eq!(config.export.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
[grid]
columns = 8

[similarity]
backend = "shapecatcher"
"#,
        )
        .unwrap();
        assert_eq!(config.grid.columns, 8);
        assert_eq!(config.grid.batch_size, 200);
        assert_eq!(config.similarity.backend, SimilarityBackend::Shapecatcher);
        assert_eq!(config.similarity.proxy_url, DEFAULT_PROXY_URL);
        assert_eq!(config.search.max_results, 500);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(toml::from_str::<Config>("[similarity]\nbackend = \"ocr\"\n").is_err());
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[search]\nmax_results = 42\n").unwrap();

        assert_eq!(Config::config_path(Some(&path)), Some(path.clone()));
        assert_eq!(Config::load(Some(&path)).search.max_results, 42);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[grid\ncolumns = ").unwrap();

        assert!(Config::load_from_file(&path).is_err());
        assert_eq!(Config::load(Some(&path)).grid.columns, 16);
    }

    #[test]
    fn test_template_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyphdex").join("config.toml");

        let written = Config::write_template(Some(&path), false).unwrap();
        assert_eq!(written, path);
        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.grid.batch_size, 200);
        assert_eq!(config.grid.load_threshold, 300.0);
        assert_eq!(config.export.background, "18181b");

        // Refuses to overwrite unless forced
        assert!(Config::write_template(Some(&path), false).is_err());
        assert!(Config::write_template(Some(&path), true).is_ok());
    }
}
