//! Interactive grid pager
//!
//! Line-oriented stand-in for a scrolling grid: each "more" command is a
//! scroll event pinned to the bottom of the revealed content, so batch
//! reveals and the debounce window behave exactly as they would under
//! real scrolling.

use anyhow::Result;
use clap::ValueEnum;
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::export::{ExportFormat, Exporter};
use crate::grid::{GridLoader, ScrollMetrics, SelectionSet};
use crate::unicode::{code_point_label, from_code_point, parse_code_point};

/// Rows treated as one screen for synthetic scroll events
const SCREEN_ROWS: f32 = 24.0;

const HELP: &str = "\
  <Enter>     show more
  s <char>    toggle selection (char or code point)
  a           select all shown
  c           clear selection
  e [format]  export selection (svg, png, png-transparent)
  q           quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerCommand {
    More,
    Toggle(u32),
    SelectAll,
    Clear,
    Export(ExportFormat),
    Help,
    Quit,
    Invalid(String),
}

impl PagerCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        match verb {
            "" => PagerCommand::More,
            "q" | "quit" => PagerCommand::Quit,
            "a" => PagerCommand::SelectAll,
            "c" => PagerCommand::Clear,
            "?" | "h" | "help" => PagerCommand::Help,
            "s" => match parse_code_point(arg) {
                Some(cp) if !arg.is_empty() => PagerCommand::Toggle(cp),
                _ => PagerCommand::Invalid(format!("not a character: \"{}\"", arg)),
            },
            "e" if arg.is_empty() => PagerCommand::Export(ExportFormat::Svg),
            "e" => match ExportFormat::from_str(arg, true) {
                Ok(format) => PagerCommand::Export(format),
                Err(_) => PagerCommand::Invalid(format!("unknown format: \"{}\"", arg)),
            },
            _ => PagerCommand::Invalid(format!("unknown command: \"{}\" (? for help)", line)),
        }
    }
}

/// What the input loop should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue(Vec<String>),
    Quit,
}

pub struct Pager {
    grid: GridLoader,
    selection: SelectionSet,
    columns: usize,
    exporter: Option<Exporter>,
    output_dir: PathBuf,
}

impl Pager {
    pub fn new(
        grid: GridLoader,
        columns: usize,
        exporter: Option<Exporter>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            grid,
            selection: SelectionSet::new(),
            columns: columns.max(1),
            exporter,
            output_dir,
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    fn content_rows(&self) -> f32 {
        self.grid.visible_len().div_ceil(self.columns) as f32
    }

    fn is_visible(&self, code_point: u32) -> bool {
        self.grid.visible().iter().any(|c| c.code_point == code_point)
    }

    /// First screen
    pub fn first_page(&self) -> Vec<String> {
        let mut lines = self.grid.render_text(self.columns, &self.selection);
        lines.push(self.prompt_status());
        lines
    }

    fn prompt_status(&self) -> String {
        let mut status = self.grid.status_line();
        if !self.selection.is_empty() {
            status.push_str(&format!(", {} selected", self.selection.len()));
        }
        status
    }

    pub async fn handle(&mut self, command: PagerCommand, now: Instant) -> Result<Step> {
        let lines = match command {
            PagerCommand::Quit => return Ok(Step::Quit),
            PagerCommand::More => {
                let before = self.grid.visible_len();
                let metrics = ScrollMetrics::at_bottom(self.content_rows(), SCREEN_ROWS);
                if self.grid.on_scroll(metrics, now) {
                    let mut lines = self.grid.render_text_from(before, self.columns, &self.selection);
                    lines.push(self.prompt_status());
                    lines
                } else if self.grid.has_more() {
                    debug!("pager: reveal dropped inside debounce window");
                    vec![]
                } else {
                    vec![format!("(end) {}", self.prompt_status())]
                }
            }
            PagerCommand::Toggle(cp) if !self.is_visible(cp) => {
                vec![format!("{} is not shown", code_point_label(cp))]
            }
            PagerCommand::Toggle(cp) => {
                let selected = self.selection.toggle(cp);
                vec![format!(
                    "{} {} ({} selected)",
                    if selected { "Selected" } else { "Deselected" },
                    code_point_label(cp),
                    self.selection.len()
                )]
            }
            PagerCommand::SelectAll => {
                let visible: Vec<u32> = self.grid.visible().iter().map(|c| c.code_point).collect();
                for cp in visible {
                    self.selection.insert(cp);
                }
                vec![format!("{} selected", self.selection.len())]
            }
            PagerCommand::Clear => {
                self.selection.clear();
                vec!["Selection cleared".to_string()]
            }
            PagerCommand::Export(format) => self.export(format).await,
            PagerCommand::Help => HELP.lines().map(str::to_string).collect(),
            PagerCommand::Invalid(message) => vec![message],
        };
        Ok(Step::Continue(lines))
    }

    async fn export(&mut self, format: ExportFormat) -> Vec<String> {
        if self.selection.is_empty() {
            return vec!["Nothing selected".to_string()];
        }
        let Some(exporter) = &self.exporter else {
            return vec!["Export unavailable (no font)".to_string()];
        };

        let chars: Vec<_> = self.selection.iter().filter_map(from_code_point).collect();
        match exporter.export_to_dir(&chars, format, &self.output_dir).await {
            Ok(Some(path)) => vec![format!("Wrote {}", path.display())],
            Ok(None) => vec!["Nothing selected".to_string()],
            Err(e) => {
                warn!("Export failed: {:#}", e);
                vec![format!("Export failed: {:#}", e)]
            }
        }
    }

    /// Read commands from stdin until quit or EOF
    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        for line in self.first_page() {
            println!("{}", line);
        }

        let stdin = io::stdin();
        loop {
            print!(": ");
            stdout.lock().flush()?;

            let mut input = String::new();
            if stdin.lock().read_line(&mut input)? == 0 {
                break;
            }
            match self.handle(PagerCommand::parse(&input), Instant::now()).await? {
                Step::Quit => break,
                Step::Continue(lines) => {
                    for line in lines {
                        println!("{}", line);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::UnicodeCharacter;
    use std::time::Duration;

    fn pager(n: u32, batch: usize) -> Pager {
        let items: Vec<UnicodeCharacter> = (0..n)
            .map(|i| from_code_point(0x2190 + i).unwrap())
            .collect();
        let mut grid = GridLoader::new(batch, 300.0, Duration::from_millis(100));
        grid.set_items(items);
        Pager::new(grid, 8, None, PathBuf::from("."))
    }

    fn lines(step: Step) -> Vec<String> {
        match step {
            Step::Continue(lines) => lines,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(PagerCommand::parse("\n"), PagerCommand::More);
        assert_eq!(PagerCommand::parse("q"), PagerCommand::Quit);
        assert_eq!(PagerCommand::parse("s U+2190"), PagerCommand::Toggle(0x2190));
        assert_eq!(PagerCommand::parse("s ←"), PagerCommand::Toggle(0x2190));
        assert_eq!(PagerCommand::parse("e"), PagerCommand::Export(ExportFormat::Svg));
        assert_eq!(
            PagerCommand::parse("e png-transparent"),
            PagerCommand::Export(ExportFormat::PngTransparent)
        );
        assert!(matches!(PagerCommand::parse("s"), PagerCommand::Invalid(_)));
        assert!(matches!(PagerCommand::parse("e gif"), PagerCommand::Invalid(_)));
        assert!(matches!(PagerCommand::parse("zz"), PagerCommand::Invalid(_)));
    }

    #[tokio::test]
    async fn test_more_reveals_batches() {
        let mut pager = pager(50, 20);
        let start = Instant::now();

        let out = lines(pager.handle(PagerCommand::More, start).await.unwrap());
        assert!(out.last().unwrap().contains("showing 40"));

        // Inside the debounce window: dropped
        let out = lines(
            pager
                .handle(PagerCommand::More, start + Duration::from_millis(10))
                .await
                .unwrap(),
        );
        assert!(out.is_empty());
        assert_eq!(pager.grid.visible_len(), 40);

        pager
            .handle(PagerCommand::More, start + Duration::from_millis(200))
            .await
            .unwrap();
        assert_eq!(pager.grid.visible_len(), 50);

        let out = lines(
            pager
                .handle(PagerCommand::More, start + Duration::from_millis(400))
                .await
                .unwrap(),
        );
        assert!(out[0].starts_with("(end)"));
    }

    #[tokio::test]
    async fn test_selection_commands() {
        let mut pager = pager(30, 10);
        let now = Instant::now();

        pager.handle(PagerCommand::Toggle(0x2191), now).await.unwrap();
        assert!(pager.selection().contains(0x2191));
        pager.handle(PagerCommand::Toggle(0x2191), now).await.unwrap();
        assert!(pager.selection().is_empty());

        // Not yet revealed
        let out = lines(pager.handle(PagerCommand::Toggle(0x21A0), now).await.unwrap());
        assert_eq!(out, vec!["U+21A0 is not shown"]);

        pager.handle(PagerCommand::SelectAll, now).await.unwrap();
        assert_eq!(pager.selection().len(), 10);
        pager.handle(PagerCommand::Clear, now).await.unwrap();
        assert!(pager.selection().is_empty());
    }

    #[tokio::test]
    async fn test_export_requires_selection_and_font() {
        let mut pager = pager(10, 10);
        let now = Instant::now();

        let out = lines(pager.handle(PagerCommand::Export(ExportFormat::Svg), now).await.unwrap());
        assert_eq!(out, vec!["Nothing selected"]);

        pager.handle(PagerCommand::SelectAll, now).await.unwrap();
        let out = lines(pager.handle(PagerCommand::Export(ExportFormat::Svg), now).await.unwrap());
        assert_eq!(out, vec!["Export unavailable (no font)"]);
    }

    #[tokio::test]
    async fn test_quit() {
        let mut pager = pager(1, 10);
        assert_eq!(
            pager.handle(PagerCommand::Quit, Instant::now()).await.unwrap(),
            Step::Quit
        );
    }
}
