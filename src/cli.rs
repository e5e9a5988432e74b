//! Command-line interface for glyphdex.
//!
//! Argument parsing and the handlers behind each subcommand.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::Config;
use crate::detail::CharacterDetail;
use crate::drawing::{Canvas, Stroke};
use crate::export::{ExportFormat, ExportSettings, Exporter};
use crate::font::{GlyphRasterizer, GlyphSource};
use crate::grid::{GridLoader, SelectionSet};
use crate::pager::Pager;
use crate::search::SearchEngine;
use crate::similarity::{SimilarityClient, SimilarityOutcome};
use crate::unicode::{
    categories, from_code_point, generate, parse_code_point, UnicodeCharacter, CATEGORIES,
};
use crate::wiki::{ArticleProbe, ProbeOutcome};

/// glyphdex - browse, search and export Unicode characters
#[derive(Parser)]
#[command(name = "glyphdex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (overrides GLYPHDEX_CONFIG and the default locations)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Category filter and paging options shared by browse and search
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Restrict to category id (repeatable; see `categories`)
    #[arg(short = 'c', long = "category", value_name = "ID")]
    pub categories: Vec<String>,

    /// Cells per row (overrides grid.columns)
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Print everything at once instead of paging
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the Unicode categories
    Categories,

    /// Browse characters of the selected categories
    Browse {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Search by character, name, entity or code point
    Search {
        /// Query text (e.g. "arrow", "U+2192", "&#8594;")
        query: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Show details for one character
    Show {
        /// Character or code point (A, U+0041, 0x41, 41)
        character: String,

        /// Skip the Wikipedia article check
        #[arg(long)]
        offline: bool,
    },

    /// Find characters that look similar
    Similar {
        /// Character or code point
        character: String,

        /// Ignore cached results
        #[arg(short, long)]
        force: bool,
    },

    /// Recognize a drawing or an image
    Draw {
        /// Stroke file ("x,y x,y; x,y ..." per stroke)
        #[arg(long, value_name = "FILE", conflicts_with = "image", required_unless_present = "image")]
        strokes: Option<PathBuf>,

        /// Image file (PNG or JPEG)
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,

        /// Save the canvas as PNG
        #[arg(long, value_name = "PNG")]
        save: Option<PathBuf>,
    },

    /// Export characters as SVG or PNG (several characters make a ZIP)
    Export {
        /// Characters or code points
        #[arg(required = true)]
        characters: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "svg")]
        format: ExportFormat,

        /// Output directory (overrides export.output_dir)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Write a commented config template
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Resolve a user-supplied character or code point
pub fn resolve_character(input: &str) -> Result<UnicodeCharacter> {
    parse_code_point(input)
        .and_then(from_code_point)
        .ok_or_else(|| anyhow!("Not a character or code point: \"{}\"", input))
}

/// Shared services, built on first use
pub struct App {
    config: Config,
    glyphs: Option<Arc<dyn GlyphSource>>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            glyphs: None,
        }
    }

    fn glyphs(&mut self) -> Result<Arc<dyn GlyphSource>> {
        if let Some(glyphs) = &self.glyphs {
            return Ok(Arc::clone(glyphs));
        }
        let rasterizer = GlyphRasterizer::from_specifier(&self.config.export.font)
            .context("Failed to load export font")?;
        let glyphs: Arc<dyn GlyphSource> = Arc::new(Mutex::new(rasterizer));
        self.glyphs = Some(Arc::clone(&glyphs));
        Ok(glyphs)
    }

    fn exporter(&mut self) -> Result<Exporter> {
        let glyphs = self.glyphs()?;
        Ok(Exporter::new(glyphs, ExportSettings::from(&self.config.export)))
    }

    fn grid(&self) -> GridLoader {
        let grid = &self.config.grid;
        GridLoader::new(grid.batch_size, grid.load_threshold, grid.debounce())
    }

    fn columns(&self, list: &ListArgs) -> usize {
        list.columns.unwrap_or(self.config.grid.columns).max(1)
    }

    pub async fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Categories => {
                self.categories();
                Ok(())
            }
            Commands::Browse { list } => self.browse(list).await,
            Commands::Search { query, list } => self.search(&query, list).await,
            Commands::Show {
                character,
                offline,
            } => self.show(&character, offline).await,
            Commands::Similar { character, force } => self.similar(&character, force).await,
            Commands::Draw {
                strokes,
                image,
                save,
            } => self.draw(strokes.as_deref(), image.as_deref(), save.as_deref()).await,
            Commands::Export {
                characters,
                format,
                output,
            } => self.export(&characters, format, output).await,
            // Handled before config loading
            Commands::InitConfig { .. } => Ok(()),
        }
    }

    fn categories(&self) {
        for category in CATEGORIES {
            println!(
                "{:<22} {:<40} U+{:04X}..U+{:04X} ({})",
                category.id,
                category.name,
                category.low,
                category.high,
                category.span()
            );
        }
    }

    fn check_categories(ids: &[String]) -> Result<()> {
        for id in ids {
            if categories::by_id(id).is_none() {
                return Err(anyhow!("Unknown category \"{}\" (see `glyphdex categories`)", id));
            }
        }
        Ok(())
    }

    async fn browse(&mut self, list: ListArgs) -> Result<()> {
        Self::check_categories(&list.categories)?;
        let items: Vec<UnicodeCharacter> = categories::select(Some(list.categories.as_slice()))
            .into_iter()
            .flat_map(generate)
            .collect();
        info!("Browsing {} characters", items.len());
        self.show_list(items, &list).await
    }

    async fn search(&mut self, query: &str, list: ListArgs) -> Result<()> {
        Self::check_categories(&list.categories)?;
        let query = query.trim();
        if query.is_empty() {
            return Err(anyhow!("Empty search query"));
        }
        let engine = SearchEngine::new(self.config.search.max_results);
        let results = engine.search(query, Some(list.categories.as_slice()));
        if results.is_empty() {
            println!("No characters match \"{}\"", query);
            return Ok(());
        }
        self.show_list(results, &list).await
    }

    async fn show_list(&mut self, items: Vec<UnicodeCharacter>, list: &ListArgs) -> Result<()> {
        let columns = self.columns(list);

        if list.all {
            // Everything revealed up front
            let mut grid = GridLoader::new(items.len().max(1), 0.0, Duration::ZERO);
            grid.set_items(items);
            for row in grid.render_text(columns, &SelectionSet::new()) {
                println!("{}", row);
            }
            println!("{}", grid.status_line());
            return Ok(());
        }

        let mut grid = self.grid();
        grid.set_items(items);
        let output_dir = self.config.export.output_dir();
        let exporter = match self.exporter() {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                warn!("Export unavailable: {:#}", e);
                None
            }
        };
        let mut pager = Pager::new(grid, columns, exporter, output_dir);
        pager.run().await
    }

    async fn show(&mut self, input: &str, offline: bool) -> Result<()> {
        let ch = resolve_character(input)?;
        let mut detail = CharacterDetail::new(&ch);

        if !offline && self.config.wiki.enabled {
            let probe = ArticleProbe::from_url(&self.config.wiki.api_url);
            if let ProbeOutcome::Committed(status) = probe.check(ch.code_point).await {
                detail.set_article_status(status);
            }
        }

        println!("{}", detail.render());
        Ok(())
    }

    async fn similar(&mut self, input: &str, force: bool) -> Result<()> {
        let ch = resolve_character(input)?;
        let glyphs = self.glyphs()?;
        let client = SimilarityClient::from_config(&self.config.similarity, glyphs);

        match client.find_similar(&ch, force).await {
            SimilarityOutcome::Committed(found) if found.is_empty() => {
                println!("No similar characters found for {}", ch.code_point_label());
            }
            SimilarityOutcome::Committed(found) => print_characters(&found),
            SimilarityOutcome::Superseded => {}
        }
        Ok(())
    }

    async fn draw(
        &mut self,
        strokes: Option<&Path>,
        image: Option<&Path>,
        save: Option<&Path>,
    ) -> Result<()> {
        let mut canvas = Canvas::new();
        match (strokes, image) {
            (Some(path), _) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let strokes = Stroke::parse_list(&text);
                if strokes.is_empty() {
                    return Err(anyhow!("No strokes in {}", path.display()));
                }
                canvas.draw_strokes(&strokes);
            }
            (None, Some(path)) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                canvas
                    .load_image(&bytes)
                    .with_context(|| format!("Failed to load {}", path.display()))?;
            }
            (None, None) => return Err(anyhow!("Nothing to draw (use --strokes or --image)")),
        }

        if !canvas.has_content() {
            return Err(anyhow!("Canvas is empty"));
        }

        if let Some(path) = save {
            let png = canvas.to_png()?;
            std::fs::write(path, png)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            let (w, h) = canvas.image().dimensions();
            info!("Canvas saved: {} ({}x{})", path.display(), w, h);
        }

        let glyphs = self.glyphs()?;
        let client = SimilarityClient::from_config(&self.config.similarity, glyphs);
        let found = client.recognize_drawing(&canvas).await;
        if found.is_empty() {
            println!("No characters recognized");
        } else {
            print_characters(&found);
        }
        Ok(())
    }

    async fn export(
        &mut self,
        inputs: &[String],
        format: ExportFormat,
        output: Option<PathBuf>,
    ) -> Result<()> {
        let selection = inputs
            .iter()
            .map(|s| resolve_character(s))
            .collect::<Result<Vec<_>>>()?;
        let dir = output.unwrap_or_else(|| self.config.export.output_dir());

        let exporter = self.exporter()?;
        if let Some(path) = exporter.export_to_dir(&selection, format, &dir).await? {
            println!("{}", path.display());
        }
        Ok(())
    }
}

fn print_characters(list: &[UnicodeCharacter]) {
    for c in list {
        let glyph = if c.ch.is_control() {
            '\u{FFFD}'
        } else {
            c.ch
        };
        let name = c.common_name.unwrap_or(c.name.as_str());
        println!("{}  {:<8} {}", glyph, c.code_point_label(), name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_character() {
        assert_eq!(resolve_character("U+0041").unwrap().ch, 'A');
        assert_eq!(resolve_character("€").unwrap().code_point, 0x20AC);
        assert!(resolve_character("U+D800").is_err());
        assert!(resolve_character("not-a-char").is_err());
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["glyphdex", "search", "arrow", "-c", "arrows", "--all"])
            .unwrap();
        match cli.command {
            Commands::Search { query, list } => {
                assert_eq!(query, "arrow");
                assert_eq!(list.categories, vec!["arrows"]);
                assert!(list.all);
            }
            _ => panic!("expected search"),
        }

        let cli = Cli::try_parse_from([
            "glyphdex",
            "export",
            "A",
            "B",
            "--format",
            "png-transparent",
            "--config",
            "/tmp/x.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
        match cli.command {
            Commands::Export {
                characters, format, ..
            } => {
                assert_eq!(characters, vec!["A", "B"]);
                assert_eq!(format, ExportFormat::PngTransparent);
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_draw_needs_input() {
        assert!(Cli::try_parse_from(["glyphdex", "draw"]).is_err());
        assert!(Cli::try_parse_from(["glyphdex", "draw", "--strokes", "a", "--image", "b"]).is_err());
        assert!(Cli::try_parse_from(["glyphdex", "draw", "--image", "b.png"]).is_ok());
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(App::check_categories(&["arrows".to_string()]).is_ok());
        assert!(App::check_categories(&["nope".to_string()]).is_err());
    }
}
