// Copyright 2026 Martin Pool

//! Trace output on the terminal.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Send trace events at or above `console_trace_level` to stderr.
pub fn setup_global_trace(console_trace_level: Level) -> Result<()> {
    let level_filter = LevelFilter::from_level(console_trace_level);
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(level_filter);
    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .context("install trace subscriber")
}
