//! Identifier derivation for generated constants.
//!
//! OpenMoji names are free text such as `"t-rex"`, `"man: red hair"` or
//! `"black &amp; white"`. They become identifiers in four steps:
//!
//! 1. literal substitution of each configured entity token (`&amp;` → `and`)
//! 2. title-casing
//! 3. removal of spaces and hyphens
//! 4. prefixing with the namespace token
//!
//! Entity handling is plain string replacement of the configured tokens, never
//! general HTML decoding. Other punctuation passes through untouched.

use serde::{Deserialize, Serialize};

/// One literal replacement applied to a name before title-casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRule {
    pub entity: String,
    pub replacement: String,
}

impl EntityRule {
    pub fn new(entity: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            replacement: replacement.into(),
        }
    }
}

pub fn default_entities() -> Vec<EntityRule> {
    vec![
        EntityRule::new("&amp;", "and"),
        EntityRule::new("&gt;", "greater than"),
        EntityRule::new("&lt;", "less than"),
    ]
}

/// Builds the constant name for an item name.
pub fn derive_name(name: &str, entities: &[EntityRule], prefix: &str) -> String {
    let decoded = entities
        .iter()
        .fold(name.to_string(), |acc, rule| acc.replace(&rule.entity, &rule.replacement));
    let stem: String = title_case(&decoded)
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();
    format!("{}{}", prefix, stem)
}

/// Uppercases every cased character that does not follow another cased
/// character and lowercases the rest. Digits and punctuation are uncased, so
/// `"3d glasses"` becomes `"3D Glasses"` and `"UFO"` becomes `"Ufo"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        let cased = is_cased(c);
        if cased && prev_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

/// `MediumVioletRed` → `mediumVioletRed`.
pub fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
