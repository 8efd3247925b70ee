//! Stone (pedra) domain types
//!
//! A stone is displayed from a `StoneDisplayRequest`: the caller hands one to
//! the details modal, which consumes it and keeps only the derived view.

pub mod inventory;
pub mod parse;

pub use inventory::Inventory;
pub use parse::{
    enhancement_label, parse_enhancement, parse_tier, tier_label, uid_label, DEFAULT_TIER,
};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A named status bonus, rendered as one table row
///
/// Both cells are shown as text; numbers and booleans are stringified and a
/// missing or null cell is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    #[serde(default, alias = "nome", alias = "statName", deserialize_with = "display_text")]
    pub name: String,
    #[serde(default, alias = "valor", alias = "statValue", deserialize_with = "display_text")]
    pub value: String,
}

fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

impl StatusEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Everything needed to show one stone in the details modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoneDisplayRequest {
    /// Opaque identifier; only a prefix is displayed
    #[serde(default)]
    pub uid: String,
    /// Display name, also carrying the tier and enhancement markers
    #[serde(default, alias = "nome")]
    pub name: String,
    /// Image source
    #[serde(default, alias = "imagem", alias = "img")]
    pub image_url: String,
    /// Status bonuses in display order
    #[serde(default, alias = "status")]
    pub status_list: Option<Vec<StatusEntry>>,
}

impl StoneDisplayRequest {
    pub fn new(
        uid: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        status_list: Option<Vec<StatusEntry>>,
    ) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            image_url: image_url.into(),
            status_list,
        }
    }

    /// Tier parsed from the name
    pub fn tier(&self) -> Option<u32> {
        parse_tier(&self.name)
    }

    /// Enhancement level parsed from the name
    pub fn enhancement(&self) -> Option<u32> {
        parse_enhancement(&self.name)
    }

    /// Number of status bonuses, zero when the list is absent
    pub fn status_count(&self) -> usize {
        self.status_list.as_ref().map_or(0, Vec::len)
    }
}
