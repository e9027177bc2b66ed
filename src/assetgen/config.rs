use crate::error::{AssetgenError, Result};
use crate::model::{ColorTable, ItemRecord};
use crate::naming::{default_entities, EntityRule};
use crate::palette::x11_color_table;
use crate::selector::Selector;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "assetgen.json";

const DEFAULT_TABLE: &str = "table.json";
const DEFAULT_ASSET_DIR: &str = "assets/open_moji";
const DEFAULT_BASE_URL: &str = "https://openmoji.org/data/color/svg/";
const DEFAULT_LOG_FILE: &str = "download.log";
const DEFAULT_PREFIX: &str = "openMojiSvg";
const DEFAULT_SCRIPT_FILE: &str = "download.sh";
const DEFAULT_MANIFEST_FILE: &str = "pubspec_assets.yaml";
const DEFAULT_BINDINGS_FILE: &str = "open_moji_svgs.dart";
const DEFAULT_BINDINGS_HEADER: &str = "// Generated by assetgen. Do not edit by hand.\n\
// OpenMoji graphics are licensed under CC BY-SA 4.0 (https://openmoji.org).\n\
\n\
import 'package:flutter_svg/flutter_svg.dart';";

const DEFAULT_COLOR_CLASS: &str = "X11Colors";
const DEFAULT_COLOR_VALUES: &str = "x11Colors";
const DEFAULT_COLOR_NAMES: &str = "x11ColorNames";
const DEFAULT_COLOR_HEADER: &str = "import 'package:flutter/material.dart';\n\
\n\
/// X11 colors (+RebeccaPurple)\n\
///\n\
/// from https://en.wikipedia.org/wiki/Web_colors#Extended_colors.";

/// Configuration for assetgen, read from `assetgen.json`.
///
/// Every field falls back to its default, so a config file only needs the
/// values it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub emoji: EmojiConfig,

    #[serde(default)]
    pub colors: ColorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmojiConfig {
    /// OpenMoji lookup table (JSON object keyed by index)
    pub table: PathBuf,
    /// Directory the assets live in, as seen by the Flutter project
    pub asset_dir: String,
    pub base_url: String,
    /// File the download script appends `wget` diagnostics to
    pub log_file: String,
    /// Namespace token prepended to every generated constant
    pub prefix: String,
    pub script_file: String,
    pub manifest_file: String,
    pub bindings_file: String,
    pub bindings_header: String,
    pub selectors: Vec<Selector>,
    /// Records appended after the table entries, in this order
    pub extras: Vec<ItemRecord>,
    pub entities: Vec<EntityRule>,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            table: PathBuf::from(DEFAULT_TABLE),
            asset_dir: DEFAULT_ASSET_DIR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            script_file: DEFAULT_SCRIPT_FILE.to_string(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            bindings_file: DEFAULT_BINDINGS_FILE.to_string(),
            bindings_header: DEFAULT_BINDINGS_HEADER.to_string(),
            selectors: default_selectors(),
            extras: Vec::new(),
            entities: default_entities(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColorConfig {
    /// Class that namespaces the individual constants
    pub class_name: String,
    /// Name of the aggregate list of values
    pub values_name: String,
    /// Name of the aggregate list of color names
    pub names_name: String,
    pub header: String,
    pub entries: ColorTable,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_COLOR_CLASS.to_string(),
            values_name: DEFAULT_COLOR_VALUES.to_string(),
            names_name: DEFAULT_COLOR_NAMES.to_string(),
            header: DEFAULT_COLOR_HEADER.to_string(),
            entries: x11_color_table(),
        }
    }
}

/// Crown, ghost, monkey faces, people and the animal block of the OpenMoji table.
fn default_selectors() -> Vec<Selector> {
    use Selector::Index;
    vec![
        Index(109),
        Index(112),
        Selector::range(125, 128),
        Index(350),
        Index(354),
        Index(358),
        Index(378),
        Index(380),
        Index(390),
        Index(395),
        Index(399),
        Selector::range(534, 554),
        Selector::range(556, 618),
        Selector::range(621, 641),
        Selector::range(642, 658),
        Selector::range(773, 778),
    ]
}

impl GeneratorConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| AssetgenError::DataLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GeneratorConfig = serde_json::from_str(&content)
            .map_err(|e| AssetgenError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let emoji = &self.emoji;
        for (key, value) in [
            ("emoji.asset_dir", &emoji.asset_dir),
            ("emoji.script_file", &emoji.script_file),
            ("emoji.manifest_file", &emoji.manifest_file),
            ("emoji.bindings_file", &emoji.bindings_file),
            ("colors.class_name", &self.colors.class_name),
            ("colors.values_name", &self.colors.values_name),
            ("colors.names_name", &self.colors.names_name),
        ] {
            if value.trim().is_empty() {
                return Err(AssetgenError::Config(format!("{} cannot be empty", key)));
            }
        }
        for (key, value) in [
            ("emoji.asset_dir", &emoji.asset_dir),
            ("emoji.base_url", &emoji.base_url),
            ("emoji.log_file", &emoji.log_file),
        ] {
            if !is_shell_word(value) {
                return Err(AssetgenError::Config(format!(
                    "{} {:?} cannot be used unquoted in a shell script",
                    key, value
                )));
            }
        }
        for (key, value) in [
            ("emoji.prefix", &emoji.prefix),
            ("colors.class_name", &self.colors.class_name),
            ("colors.values_name", &self.colors.values_name),
            ("colors.names_name", &self.colors.names_name),
        ] {
            if !is_identifier(value) {
                return Err(AssetgenError::Config(format!(
                    "{} {:?} is not a valid identifier",
                    key, value
                )));
            }
        }
        if let Some(entry) = self
            .colors
            .entries
            .entries()
            .iter()
            .find(|c| !is_identifier(&c.name))
        {
            return Err(AssetgenError::Config(format!(
                "color name {:?} is not a valid identifier",
                entry.name
            )));
        }
        if let Some(rule) = emoji.entities.iter().find(|r| r.entity.is_empty()) {
            return Err(AssetgenError::Config(format!(
                "entity rule with replacement {:?} has an empty entity",
                rule.replacement
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| AssetgenError::Config(e.to_string()))
    }
}

/// Characters that need no quoting in a POSIX shell word (paths and URLs).
fn is_shell_word(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "/._-:~+%=@,".contains(c))
}

/// ASCII letters, digits and `_`, not starting with a digit.
fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorEntry;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.emoji.asset_dir, "assets/open_moji");
        assert_eq!(config.emoji.prefix, "openMojiSvg");
        assert!(config.emoji.extras.is_empty());
        assert_eq!(config.emoji.entities.len(), 3);
        assert_eq!(config.colors.entries.entries()[0].name, "MediumVioletRed");
    }

    #[test]
    fn test_default_selectors_count() {
        let count: u32 = default_selectors()
            .iter()
            .map(|s| match s {
                Selector::Index(_) => 1,
                Selector::Range { start, end } => end - start,
                Selector::Unknown(_) => 0,
            })
            .sum();
        // 2 + 3 + 8 people + 20 + 62 + 20 + 16 + 5 animals
        assert_eq!(count, 136);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::load(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"{
                "emoji": {
                    "selectors": [1, [3, 5], "bogus"],
                    "extras": [{"name": "orca", "code": "1fa7b", "keywords": "whale"}]
                },
                "colors": {"entries": {"red": "0xFFFF0000"}}
            }"#,
        )
        .unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(
            config.emoji.selectors,
            vec![
                Selector::Index(1),
                Selector::range(3, 5),
                Selector::Unknown("\"bogus\"".into())
            ]
        );
        assert_eq!(config.emoji.extras[0].code, "1fa7b");
        assert_eq!(config.emoji.asset_dir, DEFAULT_ASSET_DIR);
        assert_eq!(config.colors.entries.len(), 1);
        assert_eq!(config.colors.class_name, DEFAULT_COLOR_CLASS);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{"colors": {"entries": {"red": "crimson"}}}"#).unwrap();
        assert!(matches!(
            GeneratorConfig::load(&path),
            Err(AssetgenError::Config(_))
        ));
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let mut config = GeneratorConfig::default();
        config.emoji.script_file = " ".into();
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.emoji.entities.push(EntityRule::new("", "nothing"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unsafe_shell_values_are_rejected() {
        let mut config = GeneratorConfig::default();
        config.emoji.asset_dir = "assets/open moji".into();
        assert!(matches!(config.validate(), Err(AssetgenError::Config(_))));

        let mut config = GeneratorConfig::default();
        config.emoji.log_file = "download.log; rm -rf assets".into();
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.emoji.base_url = "https://example.com/svg?v=$(id)".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_identifier_names_are_rejected() {
        let mut config = GeneratorConfig::default();
        config.colors.entries = ColorTable(vec![ColorEntry::new("Rosa's Red", 0xFFFF0000)]);
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.colors.class_name = "9Colors".into();
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.emoji.prefix = "open-moji".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_quoted_color_name_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{"colors": {"entries": {"it's": "0xFFFF0000"}}}"#).unwrap();
        assert!(matches!(
            GeneratorConfig::load(&path),
            Err(AssetgenError::Config(_))
        ));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = GeneratorConfig::default();
        let json = config.to_json().unwrap();
        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
