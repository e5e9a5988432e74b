//! Character grid
//!
//! Windowed display of a (possibly large) character list:
//! - `GridLoader`: batch reveal driven by scroll position, with a
//!   time-based re-entrancy guard (events inside the window are dropped)
//! - `SelectionSet`: bulk-mode selection overlay
//! - `render`: text layout of the revealed cells for the terminal

pub mod render;
pub mod selection;

pub use selection::SelectionSet;

use log::{debug, trace};
use std::time::{Duration, Instant};

use crate::constants::{GRID_BATCH_SIZE, GRID_DEBOUNCE_MS, GRID_LOAD_THRESHOLD};
use crate::unicode::UnicodeCharacter;

/// Scroll container geometry at the time of a scroll event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ScrollMetrics {
    /// Viewport pinned to the bottom of `content_height`
    pub fn at_bottom(content_height: f32, client_height: f32) -> Self {
        Self {
            scroll_top: (content_height - client_height).max(0.0),
            scroll_height: content_height,
            client_height,
        }
    }

    /// Remaining distance from the viewport's bottom edge to the content end
    pub fn distance_from_bottom(&self) -> f32 {
        self.scroll_height - self.scroll_top - self.client_height
    }
}

/// One displayed cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Position in the full list (disambiguates duplicate code points)
    pub index: usize,
    pub ch: char,
    pub code_point: u32,
    /// Membership in the selection set
    pub selected: bool,
}

/// Batch-reveal state for a character list
#[derive(Debug)]
pub struct GridLoader {
    items: Vec<UnicodeCharacter>,
    /// Bumped on every list replacement
    generation: u64,
    revealed: usize,
    guard_until: Option<Instant>,
    batch_size: usize,
    threshold: f32,
    debounce: Duration,
}

impl Default for GridLoader {
    fn default() -> Self {
        Self::new(
            GRID_BATCH_SIZE,
            GRID_LOAD_THRESHOLD,
            Duration::from_millis(GRID_DEBOUNCE_MS),
        )
    }
}

impl GridLoader {
    pub fn new(batch_size: usize, threshold: f32, debounce: Duration) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            items: Vec::new(),
            generation: 0,
            revealed: batch_size,
            guard_until: None,
            batch_size,
            threshold,
            debounce,
        }
    }

    /// Replace the list; the reveal count resets to one batch
    pub fn set_items(&mut self, items: Vec<UnicodeCharacter>) {
        self.items = items;
        self.generation += 1;
        self.revealed = self.batch_size;
        debug!(
            "grid: {} items (generation {})",
            self.items.len(),
            self.generation
        );
    }

    /// Handle a scroll event. Returns true if more cells were revealed.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, now: Instant) -> bool {
        if let Some(until) = self.guard_until {
            if now < until {
                trace!("grid: scroll dropped (guarded)");
                return false;
            }
            self.guard_until = None;
        }

        if metrics.distance_from_bottom() >= self.threshold || !self.has_more() {
            return false;
        }

        self.revealed = (self.revealed + self.batch_size).min(self.items.len());
        self.guard_until = Some(now + self.debounce);
        debug!("grid: revealed {}/{}", self.revealed, self.items.len());
        true
    }

    /// Number of cells currently displayed
    pub fn visible_len(&self) -> usize {
        self.revealed.min(self.items.len())
    }

    /// Displayed prefix of the list
    pub fn visible(&self) -> &[UnicodeCharacter] {
        &self.items[..self.visible_len()]
    }

    /// Displayed cells with selection overlay
    pub fn cells(&self, selection: &SelectionSet) -> Vec<GridCell> {
        self.visible()
            .iter()
            .enumerate()
            .map(|(index, c)| GridCell {
                index,
                ch: c.ch,
                code_point: c.code_point,
                selected: selection.contains(c.code_point),
            })
            .collect()
    }

    /// Visible cells laid out as text rows
    pub fn render_text(&self, columns: usize, selection: &SelectionSet) -> Vec<String> {
        render::render_rows(&self.cells(selection), columns)
    }

    /// Rows for cells from `start` on (newly revealed part of the grid).
    /// `start` is rounded down to a row boundary.
    pub fn render_text_from(
        &self,
        start: usize,
        columns: usize,
        selection: &SelectionSet,
    ) -> Vec<String> {
        let columns = columns.max(1);
        let cells = self.cells(selection);
        let start = (start / columns * columns).min(cells.len());
        render::render_rows(&cells[start..], columns)
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_more(&self) -> bool {
        self.revealed < self.items.len()
    }

    /// "N characters (showing M)"
    pub fn status_line(&self) -> String {
        if self.has_more() {
            format!(
                "{} characters (showing {})",
                self.total(),
                self.visible_len()
            )
        } else {
            format!("{} characters", self.total())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::from_code_point;

    fn chars(n: usize) -> Vec<UnicodeCharacter> {
        (0..n as u32)
            .map(|i| from_code_point(0x4E00 + i).unwrap())
            .collect()
    }

    fn bottom() -> ScrollMetrics {
        ScrollMetrics::at_bottom(5000.0, 800.0)
    }

    #[test]
    fn test_batches_reach_end() {
        let mut grid = GridLoader::default();
        grid.set_items(chars(1000));
        assert_eq!(grid.visible_len(), 200);

        let mut now = Instant::now();
        for expected in [400, 600, 800, 1000] {
            now += Duration::from_millis(150);
            assert!(grid.on_scroll(bottom(), now));
            assert_eq!(grid.visible_len(), expected);
        }

        now += Duration::from_millis(150);
        assert!(!grid.on_scroll(bottom(), now));
        assert_eq!(grid.visible_len(), 1000);
        assert!(!grid.has_more());
    }

    #[test]
    fn test_events_inside_window_are_dropped() {
        let mut grid = GridLoader::default();
        grid.set_items(chars(1000));
        let t0 = Instant::now();

        assert!(grid.on_scroll(bottom(), t0));
        assert!(!grid.on_scroll(bottom(), t0 + Duration::from_millis(50)));
        assert!(!grid.on_scroll(bottom(), t0 + Duration::from_millis(99)));
        assert_eq!(grid.visible_len(), 400);

        // Dropped events are not replayed later
        assert!(grid.on_scroll(bottom(), t0 + Duration::from_millis(100)));
        assert_eq!(grid.visible_len(), 600);
    }

    #[test]
    fn test_threshold() {
        let mut grid = GridLoader::default();
        grid.set_items(chars(500));
        let far = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 5000.0,
            client_height: 800.0,
        };
        assert!(!grid.on_scroll(far, Instant::now()));

        let near = ScrollMetrics {
            scroll_top: 3901.0,
            scroll_height: 5000.0,
            client_height: 800.0,
        };
        assert!(near.distance_from_bottom() < 300.0);
        assert!(grid.on_scroll(near, Instant::now()));
    }

    #[test]
    fn test_reset_on_new_list() {
        let mut grid = GridLoader::default();
        grid.set_items(chars(1000));
        let t0 = Instant::now();
        grid.on_scroll(bottom(), t0);
        assert_eq!(grid.visible_len(), 400);

        let gen = grid.generation();
        grid.set_items(chars(50));
        assert_eq!(grid.generation(), gen + 1);
        assert_eq!(grid.visible_len(), 50);
        assert!(!grid.has_more());

        grid.set_items(chars(1000));
        assert_eq!(grid.visible_len(), 200);
    }

    #[test]
    fn test_cells_keep_duplicates_and_overlay() {
        let a = from_code_point(0x41).unwrap();
        let b = from_code_point(0x42).unwrap();
        let mut grid = GridLoader::default();
        grid.set_items(vec![a.clone(), b, a]);

        let mut selection = SelectionSet::new();
        selection.toggle(0x41);

        let cells = grid.cells(&selection);
        assert_eq!(cells.len(), 3);
        assert_eq!(
            cells.iter().map(|c| c.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(cells[0].selected && cells[2].selected);
        assert!(!cells[1].selected);
    }

    #[test]
    fn test_status_line() {
        let mut grid = GridLoader::default();
        grid.set_items(chars(1000));
        assert_eq!(grid.status_line(), "1000 characters (showing 200)");
        grid.set_items(chars(10));
        assert_eq!(grid.status_line(), "10 characters");
    }

    #[test]
    fn test_render_text_rows() {
        let mut grid = GridLoader::new(5, 300.0, Duration::from_millis(100));
        grid.set_items(chars(12));
        let mut selection = SelectionSet::new();
        selection.toggle(0x4E01);

        let rows = grid.render_text(4, &selection);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("     0 "));
        assert!(rows[0].contains("[\u{4E01}]"));

        assert!(grid.on_scroll(bottom(), Instant::now()));
        let fresh = grid.render_text_from(5, 4, &selection);
        // Starts at the row holding cell 5
        assert!(fresh[0].starts_with("     4 "));
        assert_eq!(fresh.len(), 2);
    }
}
