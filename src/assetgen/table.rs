use crate::error::{AssetgenError, Result};
use crate::model::ItemRecord;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The OpenMoji lookup table, keyed by string-encoded integer index.
#[derive(Debug, Clone, Default)]
pub struct ItemTable {
    entries: HashMap<String, ItemRecord>,
}

impl ItemTable {
    pub fn new(entries: HashMap<String, ItemRecord>) -> Self {
        Self { entries }
    }

    pub fn get(&self, index: u32) -> Option<&ItemRecord> {
        self.entries.get(&index.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, ItemRecord)> for ItemTable {
    fn from_iter<T: IntoIterator<Item = (u32, ItemRecord)>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

/// Reads and parses the table file. Nothing is written before this succeeds.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<ItemTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| AssetgenError::DataLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: HashMap<String, ItemRecord> =
        serde_json::from_str(&content).map_err(|source| AssetgenError::DataParse {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} table entries from {}", entries.len(), path.display());
    Ok(ItemTable::new(entries))
}
