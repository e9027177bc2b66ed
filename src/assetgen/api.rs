//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for the CLI.
//! It loads inputs (the item table) and dispatches; generation logic lives in
//! `commands/*.rs`.
//!
//! `AssetgenApi<S: ArtifactSink>` is generic over where artifacts go:
//! - Production: `AssetgenApi<FileSink>`
//! - Testing: `AssetgenApi<MemorySink>`

use crate::commands;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::sink::ArtifactSink;
use crate::table::load_table;
use std::path::{Path, PathBuf};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct AssetgenApi<S: ArtifactSink> {
    sink: S,
    config: GeneratorConfig,
    config_path: PathBuf,
}

impl<S: ArtifactSink> AssetgenApi<S> {
    pub fn new(sink: S, config: GeneratorConfig, config_path: PathBuf) -> Self {
        Self {
            sink,
            config,
            config_path,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Generates the emoji artifacts. `table` overrides the configured table path.
    pub fn generate_emoji(&mut self, table: Option<&Path>) -> Result<CmdResult> {
        let table_path = table.unwrap_or(self.config.emoji.table.as_path());
        let table = load_table(table_path)?;
        commands::emoji::run(&mut self.sink, &table, &self.config.emoji)
    }

    pub fn color_constants(&self) -> Result<CmdResult> {
        commands::colors::run(&self.config.colors)
    }

    pub fn show_config(&self) -> Result<CmdResult> {
        commands::config::run(&self.config, &self.config_path)
    }
}
