//! xonstat-charts library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! query / layout / render modules behind it.

pub mod charts;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod reports;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Cli;
use config::{Config, Credentials};
use db::DbPool;
use errors::AppResult;
use std::path::Path;
use ui::messages::{header, info};

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    let year = utils::resolve_year(cli.year);

    // 2️⃣ load config once
    let cfg = Config::load()?;

    header(format!("XonStat charts for {year}"));
    info(format!(
        "Connecting to {} on {}:{}",
        cfg.database, cfg.host, cfg.port
    ));

    // 3️⃣ one connection, shared by every report in turn
    let mut pool = DbPool::connect(&cfg, &Credentials::from_env())?;

    // 4️⃣ charts land in the working directory
    reports::generate_all(&mut pool, year, Path::new("."))?;
    Ok(())
}
