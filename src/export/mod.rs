//! Character export
//!
//! SVG and PNG renditions of characters, written singly or bundled into a
//! ZIP archive for bulk selections. PNG encoding runs on the blocking pool
//! in fixed-size batches.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::ValueEnum;
use futures_util::future::join_all;
use image::{Rgba, RgbaImage};
use log::{debug, info};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::config::ExportConfig;
use crate::constants::{
    EXPORT_BACKGROUND, EXPORT_BATCH_SIZE, EXPORT_FOREGROUND, EXPORT_GLYPH_PX, EXPORT_PNG_SIZE,
};
use crate::drawing::encode_png;
use crate::font::GlyphSource;
use crate::unicode::UnicodeCharacter;
use crate::utils::{blend_over, hex_to_rgba};

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Svg,
    Png,
    PngTransparent,
}

impl ExportFormat {
    pub fn png_style(self) -> Option<PngStyle> {
        match self {
            ExportFormat::Svg => None,
            ExportFormat::Png => Some(PngStyle::Solid),
            ExportFormat::PngTransparent => Some(PngStyle::Transparent),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngStyle {
    /// Light glyph on a dark square
    Solid,
    /// Black glyph, transparent background
    Transparent,
}

impl PngStyle {
    fn suffix(self) -> &'static str {
        match self {
            PngStyle::Solid => "",
            PngStyle::Transparent => "-transparent",
        }
    }
}

/// Resolved export parameters
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub png_size: u32,
    pub glyph_px: f32,
    pub background: [u8; 4],
    pub foreground: [u8; 4],
    pub svg_fill: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            png_size: EXPORT_PNG_SIZE,
            glyph_px: EXPORT_GLYPH_PX,
            background: hex_to_rgba(EXPORT_BACKGROUND, BLACK),
            foreground: hex_to_rgba(EXPORT_FOREGROUND, WHITE),
            svg_fill: "white".to_string(),
        }
    }
}

impl From<&ExportConfig> for ExportSettings {
    fn from(config: &ExportConfig) -> Self {
        Self {
            png_size: config.png_size.max(1),
            glyph_px: config.glyph_px,
            background: hex_to_rgba(&config.background, BLACK),
            foreground: hex_to_rgba(&config.foreground, WHITE),
            svg_fill: config.svg_fill.clone(),
        }
    }
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// 100x100 SVG with the character centered on x
pub fn svg_for(ch: char, fill: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\" width=\"100\" height=\"100\">\n  \
         <text x=\"50\" y=\"70\" font-size=\"60\" text-anchor=\"middle\" fill=\"{}\">{}</text>\n</svg>",
        xml_escape(fill),
        xml_escape(&ch.to_string())
    )
}

/// File name for a single-character export (hex not padded)
pub fn single_file_name(ch: &UnicodeCharacter, format: ExportFormat) -> String {
    file_name(&ch.hex_upper(), format)
}

/// File name inside a bulk archive (hex padded to 4 digits)
pub fn bulk_file_name(ch: &UnicodeCharacter, format: ExportFormat) -> String {
    file_name(&ch.hex_padded(), format)
}

fn file_name(hex: &str, format: ExportFormat) -> String {
    match format.png_style() {
        None => format!("unicode-{}.svg", hex),
        Some(style) => format!("unicode-{}{}.png", hex, style.suffix()),
    }
}

/// Archive name for a bulk export at `timestamp_ms`
pub fn archive_name(format: ExportFormat, timestamp_ms: i64) -> String {
    match format.png_style() {
        None => format!("unicode-characters-svg-{}.zip", timestamp_ms),
        Some(style) => format!("unicode-characters-png{}-{}.zip", style.suffix(), timestamp_ms),
    }
}

#[derive(Clone)]
pub struct Exporter {
    glyphs: Arc<dyn GlyphSource>,
    settings: Arc<ExportSettings>,
}

impl Exporter {
    pub fn new(glyphs: Arc<dyn GlyphSource>, settings: ExportSettings) -> Self {
        Self {
            glyphs,
            settings: Arc::new(settings),
        }
    }

    pub fn svg(&self, ch: char) -> String {
        svg_for(ch, &self.settings.svg_fill)
    }

    /// Square PNG with the glyph centered
    pub fn render_png(&self, ch: char, style: PngStyle) -> Result<Vec<u8>> {
        let size = self.settings.png_size;
        let (base, ink) = match style {
            PngStyle::Solid => (self.settings.background, self.settings.foreground),
            PngStyle::Transparent => ([0, 0, 0, 0], BLACK),
        };
        let mut image = RgbaImage::from_pixel(size, size, Rgba(base));

        if let Some(glyph) = self.glyphs.glyph(ch, self.settings.glyph_px) {
            let ox = (size as i64 - glyph.width as i64) / 2;
            let oy = (size as i64 - glyph.height as i64) / 2;
            for gy in 0..glyph.height {
                for gx in 0..glyph.width {
                    let coverage = glyph.coverage[gy * glyph.width + gx];
                    let (x, y) = (ox + gx as i64, oy + gy as i64);
                    if coverage == 0 || x < 0 || y < 0 || x >= size as i64 || y >= size as i64 {
                        continue;
                    }
                    let pixel = image.get_pixel_mut(x as u32, y as u32);
                    pixel.0 = match style {
                        PngStyle::Solid => {
                            blend_over(pixel.0, ink, coverage as f32 / 255.0)
                        }
                        PngStyle::Transparent => [ink[0], ink[1], ink[2], coverage],
                    };
                }
            }
        } else {
            debug!("export: U+{:04X} has no ink", ch as u32);
        }

        encode_png(&image).with_context(|| format!("failed to encode U+{:04X}", ch as u32))
    }

    /// Bytes for a single-character file
    pub fn render(&self, ch: char, format: ExportFormat) -> Result<Vec<u8>> {
        match format.png_style() {
            None => Ok(self.svg(ch).into_bytes()),
            Some(style) => self.render_png(ch, style),
        }
    }

    /// Bundle SVGs for the selection; None when the selection is empty
    pub fn export_svg_zip(&self, selection: &[UnicodeCharacter]) -> Result<Option<Vec<u8>>> {
        if selection.is_empty() {
            return Ok(None);
        }
        let entries = selection
            .iter()
            .map(|c| (bulk_file_name(c, ExportFormat::Svg), self.svg(c.ch).into_bytes()));
        build_zip(entries).map(Some)
    }

    /// Bundle PNGs for the selection, encoding one batch at a time
    pub async fn export_png_zip(
        &self,
        selection: &[UnicodeCharacter],
        style: PngStyle,
    ) -> Result<Option<Vec<u8>>> {
        if selection.is_empty() {
            return Ok(None);
        }
        let format = match style {
            PngStyle::Solid => ExportFormat::Png,
            PngStyle::Transparent => ExportFormat::PngTransparent,
        };

        let mut entries = Vec::with_capacity(selection.len());
        for (n, batch) in selection.chunks(EXPORT_BATCH_SIZE).enumerate() {
            let tasks = batch.iter().map(|c| {
                let exporter = self.clone();
                let ch = c.ch;
                tokio::task::spawn_blocking(move || exporter.render_png(ch, style))
            });
            let results = join_all(tasks).await;
            for (c, result) in batch.iter().zip(results) {
                let bytes = result.context("PNG task failed")??;
                entries.push((bulk_file_name(c, format), bytes));
            }
            debug!("export: batch {} done ({} files)", n + 1, entries.len());
        }

        build_zip(entries).map(Some)
    }

    /// Render the selection in `format` and write one file or one archive
    /// into `dir`. Returns the written path, or None for an empty selection.
    pub async fn export_to_dir(
        &self,
        selection: &[UnicodeCharacter],
        format: ExportFormat,
        dir: &Path,
    ) -> Result<Option<PathBuf>> {
        let (name, bytes) = match selection {
            [] => return Ok(None),
            [single] => (single_file_name(single, format), self.render(single.ch, format)?),
            _ => {
                let archive = match format.png_style() {
                    None => self.export_svg_zip(selection)?,
                    Some(style) => self.export_png_zip(selection, style).await?,
                };
                let Some(bytes) = archive else {
                    return Ok(None);
                };
                (archive_name(format, Utc::now().timestamp_millis()), bytes)
            }
        };

        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let path = dir.join(name);
        std::fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
        info!("Exported {} character(s) to {}", selection.len(), path.display());
        Ok(Some(path))
    }
}

fn build_zip(entries: impl IntoIterator<Item = (String, Vec<u8>)>) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, bytes) in entries {
        zip.start_file(name.as_str(), options)
            .with_context(|| format!("failed to add {}", name))?;
        zip.write_all(&bytes)?;
    }
    Ok(zip.finish().context("failed to finish archive")?.into_inner())
}
