//! # Rendering
//!
//! Turns a catalog (or a color table) into the text of each artifact.
//!
//! Naming and path math stay in Rust; the templates in [`crate::templates`] only
//! lay the precomputed strings out. Rendering is pure: the same inputs always
//! give byte-identical output, so regenerating is safe.

use crate::config::{ColorConfig, EmojiConfig};
use crate::error::Result;
use crate::model::ItemRecord;
use crate::naming::{derive_name, lower_camel};
use crate::templates::{
    BINDINGS_TEMPLATE, COLORS_TEMPLATE, DOWNLOAD_SCRIPT_TEMPLATE, MANIFEST_TEMPLATE,
};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

const DOWNLOAD_SCRIPT: &str = "download_script";
const MANIFEST: &str = "manifest";
const BINDINGS: &str = "bindings";
const COLORS: &str = "colors";

/// Per-item strings shared by the emoji artifacts.
#[derive(Serialize)]
struct ItemLine {
    file_name: String,
    path: String,
    ident: String,
    comment: String,
}

#[derive(Serialize)]
struct ScriptData<'a> {
    asset_dir: &'a str,
    base_url: &'a str,
    log_file: &'a str,
    items: &'a [ItemLine],
}

#[derive(Serialize)]
struct ManifestData<'a> {
    items: &'a [ItemLine],
}

#[derive(Serialize)]
struct BindingsData<'a> {
    header: &'a str,
    items: &'a [ItemLine],
}

#[derive(Serialize)]
struct ColorLine {
    ident: String,
    name: String,
    value: String,
}

#[derive(Serialize)]
struct ColorsData<'a> {
    header: &'a str,
    class_name: &'a str,
    values_name: &'a str,
    names_name: &'a str,
    colors: Vec<ColorLine>,
}

/// The rendered emoji artifacts, in the order they are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiArtifacts {
    pub download_script: String,
    pub manifest: String,
    pub bindings: String,
}

/// A minijinja environment with every artifact template registered.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_template(DOWNLOAD_SCRIPT, DOWNLOAD_SCRIPT_TEMPLATE)?;
        env.add_template(MANIFEST, MANIFEST_TEMPLATE)?;
        env.add_template(BINDINGS, BINDINGS_TEMPLATE)?;
        env.add_template(COLORS, COLORS_TEMPLATE)?;
        Ok(Self { env })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }

    /// `#!/bin/sh`, `mkdir -p`, then one `wget -nc` line per item.
    pub fn render_download_script(
        &self,
        catalog: &[ItemRecord],
        settings: &EmojiConfig,
    ) -> Result<String> {
        let items = item_lines(catalog, settings);
        self.render_script_lines(&items, settings)
    }

    /// One `  - <path>` line per item, for the `assets:` list of a pubspec.
    pub fn render_manifest_fragment(
        &self,
        catalog: &[ItemRecord],
        settings: &EmojiConfig,
    ) -> Result<String> {
        let items = item_lines(catalog, settings);
        self.render(MANIFEST, &ManifestData { items: &items })
    }

    pub fn render_source_bindings(
        &self,
        catalog: &[ItemRecord],
        settings: &EmojiConfig,
    ) -> Result<String> {
        let items = item_lines(catalog, settings);
        self.render_bindings_lines(&items, settings)
    }

    /// Renders all three emoji artifacts, computing item strings once.
    pub fn render_emoji(
        &self,
        catalog: &[ItemRecord],
        settings: &EmojiConfig,
    ) -> Result<EmojiArtifacts> {
        let items = item_lines(catalog, settings);
        Ok(EmojiArtifacts {
            download_script: self.render_script_lines(&items, settings)?,
            manifest: self.render(MANIFEST, &ManifestData { items: &items })?,
            bindings: self.render_bindings_lines(&items, settings)?,
        })
    }

    /// Class of named constants, then the list of values and the list of names.
    pub fn render_color_constants(&self, settings: &ColorConfig) -> Result<String> {
        let colors = settings
            .entries
            .entries()
            .iter()
            .map(|c| ColorLine {
                ident: lower_camel(&c.name),
                name: c.name.clone(),
                value: c.value.to_string(),
            })
            .collect();
        let data = ColorsData {
            header: &settings.header,
            class_name: &settings.class_name,
            values_name: &settings.values_name,
            names_name: &settings.names_name,
            colors,
        };
        self.render(COLORS, &data)
    }

    fn render_script_lines(&self, items: &[ItemLine], settings: &EmojiConfig) -> Result<String> {
        let data = ScriptData {
            asset_dir: settings.asset_dir.trim_end_matches('/'),
            base_url: &settings.base_url,
            log_file: &settings.log_file,
            items,
        };
        self.render(DOWNLOAD_SCRIPT, &data)
    }

    fn render_bindings_lines(&self, items: &[ItemLine], settings: &EmojiConfig) -> Result<String> {
        let data = BindingsData {
            header: &settings.bindings_header,
            items,
        };
        self.render(BINDINGS, &data)
    }
}

fn item_lines(catalog: &[ItemRecord], settings: &EmojiConfig) -> Vec<ItemLine> {
    catalog
        .iter()
        .map(|item| ItemLine {
            file_name: item.file_name(),
            path: item.asset_path(&settings.asset_dir),
            ident: derive_name(&item.name, &settings.entities, &settings.prefix),
            comment: comment_for(item),
        })
        .collect()
}

fn comment_for(item: &ItemRecord) -> String {
    let keywords = item.keywords.trim();
    if keywords.is_empty() {
        item.name.clone()
    } else {
        format!("{}: {}", item.name, keywords)
    }
}
