//! # Assetgen
//!
//! Assetgen generates the glue a Flutter app needs to ship a subset of the
//! OpenMoji emoji set, plus a Dart palette of the X11 named colors.
//!
//! From a JSON lookup table and a list of selectors it writes:
//!
//! - `download.sh`: a POSIX script fetching each SVG with `wget -nc`
//! - `pubspec_assets.yaml`: the `assets:` lines to paste into a pubspec
//! - `open_moji_svgs.dart`: one named `SvgPicture` constant per emoji
//!
//! Color constants are printed to stdout instead.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, sets up logging, prints, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Loads the table, dispatches to commands                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - catalog building, rendering, returns CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Output (sink/)                                             │
//! │  - ArtifactSink trait: FileSink, MemorySink (testing)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the CLI writes to stdout/stderr or exits the process. Non-fatal
//! problems (unknown selectors) travel back as messages in the `CmdResult`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade
//! - [`commands`]: emoji, colors and config commands
//! - [`catalog`]: selector resolution into an ordered catalog
//! - [`selector`]: selector forms accepted in configuration
//! - [`naming`]: constant names from free-text emoji names
//! - [`render`] / [`templates`]: artifact text
//! - [`sink`]: where artifacts are written
//! - [`config`]: `assetgen.json`
//! - [`palette`]: the default X11 colors
//! - [`table`] / [`model`]: input data
//! - [`error`]: error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod naming;
pub mod palette;
pub mod render;
pub mod selector;
pub mod sink;
pub mod table;
pub mod templates;
