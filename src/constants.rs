//! Global constants for glyphdex
//!
//! Consolidates grid, search, drawing and export constants
//! to eliminate magic numbers throughout the codebase.

// ============================================================================
// Grid Constants
// ============================================================================

/// Number of cells revealed initially and per scroll-triggered batch
pub const GRID_BATCH_SIZE: usize = 200;

/// Remaining scroll distance (to the bottom edge) below which a batch is revealed
pub const GRID_LOAD_THRESHOLD: f32 = 300.0;

/// Re-entrancy guard window after a batch reveal, in milliseconds
pub const GRID_DEBOUNCE_MS: u64 = 100;

/// Default number of cells per rendered grid row
pub const GRID_COLUMNS: usize = 16;

// ============================================================================
// Search Constants
// ============================================================================

/// Global result cap across all scanned categories
pub const SEARCH_MAX_RESULTS: usize = 500;

// ============================================================================
// Drawing Constants
// ============================================================================

/// Canvas edge length (square) in pixels
pub const CANVAS_SIZE: u32 = 400;

/// Freehand stroke width in pixels
pub const STROKE_WIDTH: f32 = 4.0;

/// Anti-aliasing width for stroke edges
pub const STROKE_AA_WIDTH: f32 = 0.75;

/// Per-channel tolerance for background detection (0-255 scale, exclusive)
pub const BACKGROUND_TOLERANCE: u8 = 30;

/// Pixel size used when rasterizing a character onto the canvas for recognition
pub const RECOGNITION_GLYPH_PX: f32 = 280.0;

// ============================================================================
// Export Constants
// ============================================================================

/// PNG export edge length in pixels
pub const EXPORT_PNG_SIZE: u32 = 200;

/// PNG export glyph size in pixels
pub const EXPORT_GLYPH_PX: f32 = 120.0;

/// Characters encoded concurrently per bulk PNG batch
pub const EXPORT_BATCH_SIZE: usize = 10;

/// Solid PNG background (RRGGBB)
pub const EXPORT_BACKGROUND: &str = "18181b";

/// Solid PNG foreground (RRGGBB)
pub const EXPORT_FOREGROUND: &str = "ffffff";

// ============================================================================
// Network Constants
// ============================================================================

/// Default recognition proxy endpoint
pub const DEFAULT_PROXY_URL: &str = "http://localhost:3000/api/recognize";

/// Shape recognition engine endpoint
pub const SHAPECATCHER_URL: &str = "https://shapecatcher.com/engine/recognize";

/// Wikipedia query API endpoint
pub const WIKI_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Wikipedia article base URL
pub const WIKI_ARTICLE_URL: &str = "https://en.wikipedia.org/wiki/";

/// User-Agent sent with outgoing requests
pub const USER_AGENT: &str = concat!("glyphdex/", env!("CARGO_PKG_VERSION"));
