//! # Catalog Building
//!
//! A catalog is the ordered list of records that every artifact is rendered from.
//! Order is selector declaration order; ranges expand ascending in place; extras
//! follow all table entries in their literal order. Nothing is deduplicated.
//!
//! Selectors that cannot be resolved into table keys do not stop the build.
//! They are collected as [`CatalogWarning`]s next to the catalog so callers
//! decide how to report them. A well-formed index missing from the table is
//! different: the table is the source of truth, so that is an error.

use crate::error::{AssetgenError, Result};
use crate::model::ItemRecord;
use crate::selector::Selector;
use crate::table::ItemTable;
use thiserror::Error;

/// Non-fatal problems met while building a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    #[error("Unknown selector {0}, skipped")]
    UnknownSelector(String),

    #[error("Empty range {start}..{end}, skipped")]
    EmptyRange { start: u32, end: u32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogBuild {
    pub catalog: Vec<ItemRecord>,
    pub warnings: Vec<CatalogWarning>,
}

pub fn build_item_catalog(
    table: &ItemTable,
    selectors: &[Selector],
    extras: &[ItemRecord],
) -> Result<CatalogBuild> {
    let mut build = CatalogBuild::default();

    for selector in selectors {
        match selector {
            Selector::Index(index) => build.catalog.push(lookup(table, *index)?),
            Selector::Range { start, end } if start >= end => {
                build.warnings.push(CatalogWarning::EmptyRange {
                    start: *start,
                    end: *end,
                });
            }
            Selector::Range { start, end } => {
                for index in *start..*end {
                    build.catalog.push(lookup(table, index)?);
                }
            }
            Selector::Unknown(raw) => {
                build
                    .warnings
                    .push(CatalogWarning::UnknownSelector(raw.clone()));
            }
        }
    }

    let resolved = build.catalog.len();
    build.catalog.extend(extras.iter().cloned());
    log::debug!(
        "catalog: {} table entries, {} extras, {} warnings",
        resolved,
        extras.len(),
        build.warnings.len()
    );

    Ok(build)
}

fn lookup(table: &ItemTable, index: u32) -> Result<ItemRecord> {
    table
        .get(index)
        .cloned()
        .ok_or(AssetgenError::MissingEntry(index))
}
