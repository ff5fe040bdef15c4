//! Menu: how much work an order takes.
//!
//! The work amount of an order is a deterministic function of its label: the
//! label's words joined with `_` are looked up in the menu, and labels that are
//! not on it either take the `fallback` amount or are refused.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CafeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MenuFile")]
pub struct Menu {
    items: BTreeMap<String, u32>,

    /// Work for labels that are not on the menu. `None` refuses them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fallback: Option<u32>,
}

/// Menu as written in a config file, before keys are normalized.
#[derive(Deserialize)]
struct MenuFile {
    #[serde(default)]
    items: BTreeMap<String, u32>,
    #[serde(default)]
    fallback: Option<u32>,
}

impl From<MenuFile> for Menu {
    fn from(file: MenuFile) -> Self {
        Menu::new(file.items, file.fallback)
    }
}

impl Menu {
    /// Entry names go through [`Menu::key`], so `hot chocolate` and
    /// `hot_chocolate` name the same item.
    pub fn new(items: impl IntoIterator<Item = (String, u32)>, fallback: Option<u32>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|(name, work)| (Self::key(&name), work))
                .collect(),
            fallback,
        }
    }

    /// Lookup key for a free-text label (`hot chocolate` -> `hot_chocolate`).
    pub fn key(label: &str) -> String {
        label.split_whitespace().collect::<Vec<_>>().join("_")
    }

    /// Work required by an order for `label`.
    pub fn work_for(&self, label: &str) -> Result<u32, CafeError> {
        self.items
            .get(&Self::key(label))
            .copied()
            .or(self.fallback)
            .ok_or_else(|| CafeError::UnknownItem(label.to_string()))
    }

    /// Menu entries sorted by name.
    pub fn items(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, work)| (name.as_str(), *work))
    }

    pub fn fallback(&self) -> Option<u32> {
        self.fallback
    }

    /// First entry (or the fallback) with zero work, if any.
    pub fn zero_work_entry(&self) -> Option<String> {
        if let Some((name, _)) = self.items.iter().find(|(_, work)| **work == 0) {
            return Some(name.clone());
        }
        match self.fallback {
            Some(0) => Some("fallback".to_string()),
            _ => None,
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        let items = [
            ("americano", 2),
            ("latte", 3),
            ("cappuccino", 3),
            ("mocha", 4),
            ("tea", 1),
            ("macchiato", 2),
            ("hot_chocolate", 4),
        ];
        Self::new(
            items.into_iter().map(|(name, work)| (name.to_string(), work)),
            None,
        )
    }
}
