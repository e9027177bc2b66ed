//! # Selectors
//!
//! A selector points into the item table by its integer key. Configuration files
//! write them loosely, so parsing never fails: anything that is neither a single
//! index nor a range becomes [`Selector::Unknown`] and is reported later, when
//! the catalog is built.
//!
//! Accepted forms:
//!
//! ```text
//! 109                      Index(109)
//! "109"                    Index(109)
//! [534, 554]               Range { start: 534, end: 554 }   (half-open)
//! {"start": 534, "end": 554}
//! "534..554"
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Selector {
    Index(u32),
    /// Half-open `[start, end)`.
    Range { start: u32, end: u32 },
    /// Raw JSON text of a selector that could not be understood.
    Unknown(String),
}

impl Selector {
    pub fn range(start: u32, end: u32) -> Self {
        Selector::Range { start, end }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(n) => write!(f, "{}", n),
            Selector::Range { start, end } => write!(f, "{}..{}", start, end),
            Selector::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

impl From<Value> for Selector {
    fn from(value: Value) -> Self {
        parse_value(&value).unwrap_or_else(|| Selector::Unknown(value.to_string()))
    }
}

impl From<Selector> for Value {
    fn from(selector: Selector) -> Self {
        match selector {
            Selector::Index(n) => json!(n),
            Selector::Range { start, end } => json!([start, end]),
            Selector::Unknown(raw) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
        }
    }
}

fn parse_value(value: &Value) -> Option<Selector> {
    match value {
        Value::Number(n) => as_index(n.as_u64()?).map(Selector::Index),
        Value::String(s) => parse_str(s),
        Value::Array(items) => match items.as_slice() {
            [start, end] => Some(Selector::range(as_u32(start)?, as_u32(end)?)),
            _ => None,
        },
        Value::Object(map) if map.len() == 2 => {
            Some(Selector::range(as_u32(map.get("start")?)?, as_u32(map.get("end")?)?))
        }
        _ => None,
    }
}

fn parse_str(s: &str) -> Option<Selector> {
    let s = s.trim();
    if let Some((start, end)) = s.split_once("..") {
        return Some(Selector::range(
            start.trim().parse().ok()?,
            end.trim().parse().ok()?,
        ));
    }
    s.parse().ok().map(Selector::Index)
}

fn as_u32(value: &Value) -> Option<u32> {
    as_index(value.as_u64()?)
}

fn as_index(n: u64) -> Option<u32> {
    u32::try_from(n).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Selector {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_index_forms() {
        assert_eq!(parse("109"), Selector::Index(109));
        assert_eq!(parse("\"109\""), Selector::Index(109));
    }

    #[test]
    fn test_range_forms() {
        let expected = Selector::range(534, 554);
        assert_eq!(parse("[534, 554]"), expected);
        assert_eq!(parse(r#"{"start": 534, "end": 554}"#), expected);
        assert_eq!(parse("\"534..554\""), expected);
    }

    #[test]
    fn test_unknown_forms_are_kept_raw() {
        assert_eq!(parse("-3"), Selector::Unknown("-3".into()));
        assert_eq!(parse("1.5"), Selector::Unknown("1.5".into()));
        assert_eq!(parse("\"crown\""), Selector::Unknown("\"crown\"".into()));
        assert_eq!(parse("[1, 2, 3]"), Selector::Unknown("[1,2,3]".into()));
        assert_eq!(parse("null"), Selector::Unknown("null".into()));
        assert_eq!(parse("true"), Selector::Unknown("true".into()));
    }

    #[test]
    fn test_serializes_back_to_compact_forms() {
        let selectors = vec![
            Selector::Index(7),
            Selector::range(1, 4),
            Selector::Unknown("\"crown\"".into()),
        ];
        let text = serde_json::to_string(&selectors).unwrap();
        assert_eq!(text, r#"[7,[1,4],"crown"]"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(Selector::Index(3).to_string(), "3");
        assert_eq!(Selector::range(3, 9).to_string(), "3..9");
    }
}
