//! Stone inventory loading

use std::cmp::Reverse;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

use super::{StoneDisplayRequest, DEFAULT_TIER};
use crate::error::AppResult;

/// Ordered list of stones available for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    stones: Vec<StoneDisplayRequest>,
}

impl Inventory {
    pub fn new(stones: Vec<StoneDisplayRequest>) -> Self {
        Self { stones }
    }

    /// Load a JSON array of stones
    ///
    /// A missing file yields an empty inventory; unreadable or malformed
    /// files are errors.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        debug!("Loading inventory from: {}", path.display());

        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Inventory file {} not found, starting empty", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let inventory = Self::from_json(&content)?;
        info!(
            "Loaded {} stones from {}",
            inventory.len(),
            path.display()
        );
        Ok(inventory)
    }

    /// Parse a JSON array of stones
    pub fn from_json(content: &str) -> AppResult<Self> {
        let stones: Vec<StoneDisplayRequest> = serde_json::from_str(content)?;
        Ok(Self::new(stones))
    }

    /// Order by tier (highest first), then enhancement (highest first,
    /// unenhanced last), then name
    pub fn sorted(mut self) -> Self {
        self.stones.sort_by(|a, b| {
            let key = |s: &StoneDisplayRequest| {
                (
                    Reverse(s.tier().unwrap_or(DEFAULT_TIER)),
                    Reverse(s.enhancement()),
                )
            };
            key(a).cmp(&key(b)).then_with(|| a.name.cmp(&b.name))
        });
        self
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StoneDisplayRequest> {
        self.stones.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoneDisplayRequest> {
        self.stones.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stone(name: &str) -> StoneDisplayRequest {
        StoneDisplayRequest::new("uid", name, "img.png", None)
    }

    #[test]
    fn test_sorted_by_tier_then_enhancement_then_name() {
        let inventory = Inventory::new(vec![
            stone("Opal"),
            stone("Ruby Tier 2 +3"),
            stone("Jade Tier 3"),
            stone("Amber Tier 2"),
            stone("Ruby Tier 2 +9"),
            stone("Agate"),
        ])
        .sorted();

        let names: Vec<&str> = inventory.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Jade Tier 3",
                "Ruby Tier 2 +9",
                "Ruby Tier 2 +3",
                "Amber Tier 2",
                "Agate",
                "Opal",
            ]
        );
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(Inventory::from_json(r#"{"name": "Ruby"}"#).is_err());
        assert!(Inventory::from_json("[]").unwrap().is_empty());
    }
}
