//! # Output Layer
//!
//! Generated artifacts go through the [`ArtifactSink`] trait so commands never
//! touch the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileSink`]: writes each artifact as a file below an output directory,
//!   creating missing parent directories and overwriting existing files
//! - [`memory::MemorySink`]: keeps artifacts in memory for tests, and can be
//!   told to fail on a given artifact to exercise write failures
//!
//! A failed write is fatal for the run; nothing retries.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait ArtifactSink {
    /// Store `content` under the relative `name`, replacing anything already there.
    /// Returns where it ended up.
    fn write_artifact(&mut self, name: &str, content: &str) -> Result<PathBuf>;
}
