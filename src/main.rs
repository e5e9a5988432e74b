//! glyphdex - Unicode character explorer for the terminal
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                 CLI (clap)               │
//! ├──────────────────────────────────────────┤
//! │  Categories → Search → Grid / Pager      │
//! │                   ↓                      │
//! │  Detail · Similarity · Wiki · Export     │
//! │                   ↓                      │
//! │  Drawing canvas · Glyph rasterizer       │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Network round trips and PNG encoding run on tokio's blocking pool;
//! everything else stays on the single main thread.

mod cli;
mod config;
mod constants;
mod detail;
mod drawing;
mod export;
mod font;
mod grid;
mod http;
mod pager;
mod search;
mod similarity;
mod unicode;
mod utils;
mod wiki;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cli::{App, Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Config file generation mode
    if let Commands::InitConfig { force } = cli.command {
        let path = config::Config::write_template(cli.config.as_deref(), force)?;
        println!("Config file generated: {}", path.display());
        return Ok(());
    }

    let cfg = config::Config::load(cli.config.as_deref());
    info!("glyphdex {} starting", env!("CARGO_PKG_VERSION"));

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let mut app = App::new(cfg);
    rt.block_on(app.run(cli.command))
}
