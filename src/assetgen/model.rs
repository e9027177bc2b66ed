use crate::error::AssetgenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One OpenMoji record, either looked up in the table or given literally as an extra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub keywords: String,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, code: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            keywords: keywords.into(),
        }
    }

    /// `<CODE>.svg`, the name used both remotely and on disk.
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.code.to_uppercase())
    }

    /// Asset path of the item below `asset_dir`.
    pub fn asset_path(&self, asset_dir: &str) -> String {
        format!("{}/{}", asset_dir.trim_end_matches('/'), self.file_name())
    }
}

/// A packed 32-bit ARGB color, written as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl FromStr for Argb {
    type Err = AssetgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| AssetgenError::InvalidColor(s.to_string()))?;
        if hex.len() != 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AssetgenError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Argb)
            .map_err(|_| AssetgenError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    pub value: Argb,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value: Argb(value),
        }
    }
}

/// Color entries in declaration order.
///
/// Stored in JSON as an object from name to `"0xAARRGGBB"`; key order is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorTable(pub Vec<ColorEntry>);

impl ColorTable {
    pub fn entries(&self) -> &[ColorEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ColorTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.name, &entry.value.to_string())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let raw = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            let text = value
                .as_str()
                .ok_or_else(|| D::Error::custom(format!("color {} is not a string", name)))?;
            let value = text.parse::<Argb>().map_err(D::Error::custom)?;
            entries.push(ColorEntry { name, value });
        }
        Ok(ColorTable(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_uppercases_code() {
        let item = ItemRecord::new("cat", "1f408", "animal");
        assert_eq!(item.file_name(), "1F408.svg");
        assert_eq!(item.asset_path("assets/open_moji/"), "assets/open_moji/1F408.svg");
    }

    #[test]
    fn test_argb_parse_and_display() {
        let red: Argb = "0xFFFF0000".parse().unwrap();
        assert_eq!(red, Argb(0xFFFF0000));
        assert_eq!(red.to_string(), "0xFFFF0000");

        let lower: Argb = "0Xff00ff00".parse().unwrap();
        assert_eq!(lower.to_string(), "0xFF00FF00");
    }

    #[test]
    fn test_argb_rejects_malformed() {
        assert!("FFFF0000".parse::<Argb>().is_err());
        assert!("0xFF0000".parse::<Argb>().is_err());
        assert!("0xGGFF0000".parse::<Argb>().is_err());
        assert!("0x+FFF0000".parse::<Argb>().is_err());
    }

    #[test]
    fn test_color_table_keeps_declaration_order() {
        let table: ColorTable =
            serde_json::from_str(r#"{"zeta": "0xFF000001", "alpha": "0xFF000002"}"#).unwrap();
        let names: Vec<_> = table.entries().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);

        let back = serde_json::to_string(&table).unwrap();
        assert_eq!(back, r#"{"zeta":"0xFF000001","alpha":"0xFF000002"}"#);
    }

    #[test]
    fn test_color_table_rejects_bad_value() {
        let res: Result<ColorTable, _> = serde_json::from_str(r#"{"red": "red"}"#);
        assert!(res.is_err());
        let res: Result<ColorTable, _> = serde_json::from_str(r#"{"red": 42}"#);
        assert!(res.is_err());
    }
}
