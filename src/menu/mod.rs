//! The static menu catalog.
//!
//! A [`Menu`] maps lookup keys (what the customer types) to [`MenuEntry`]
//! values. The built-in catalog is used unless a JSON file is configured,
//! see [`Menu::load`].

pub mod error;

pub use error::*;

use rust_decimal::Decimal;
use crate::money::{Cents, DISPLAY_DECIMALS};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Kind of a menu entry. Decides which order item variant it becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Drink,
}

/// A single priced item on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Decimal,
    pub category: Category,
}

impl MenuEntry {
    /// Creates a new MenuEntry.
    pub fn new(name: impl Into<String>, unit_price: Decimal, category: Category) -> Self {
        Self {
            name: name.into(),
            unit_price,
            category,
        }
    }

    pub fn food(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self::new(name, unit_price, Category::Food)
    }

    pub fn drink(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self::new(name, unit_price, Category::Drink)
    }
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.name, Cents(self.unit_price))
    }
}

// Layout of one record in a menu file.
#[derive(Debug, Deserialize)]
struct MenuRecord {
    key: String,
    #[serde(flatten)]
    entry: MenuEntry,
}

#[derive(Debug, Deserialize)]
struct MenuFile {
    items: Vec<MenuRecord>,
}

/// Ordered catalog of menu entries keyed by lookup key.
///
/// Keys are stored lower-case; [`Menu::lookup`] trims and lower-cases its
/// argument so `" Pepsi "` finds `pepsi`.
#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<(String, MenuEntry)>,
}

impl Menu {
    /// Builds a menu from `(key, entry)` pairs, keeping their order.
    pub fn new<K: Into<String>>(entries: impl IntoIterator<Item = (K, MenuEntry)>) -> Result<Self, MenuError> {
        let mut menu = Self { entries: Vec::new() };
        for (key, entry) in entries {
            let key = key.into().trim().to_lowercase();
            if entry.unit_price <= Decimal::ZERO {
                return Err(MenuError::InvalidPrice(key));
            }
            // Prices are billed as written, so they must display without rounding.
            if entry.unit_price.normalize().scale() > DISPLAY_DECIMALS {
                return Err(MenuError::TooPrecise(key));
            }
            if menu.lookup(&key).is_some() {
                return Err(MenuError::DuplicateKey(key));
            }
            menu.entries.push((key, entry));
        }
        if menu.entries.is_empty() {
            return Err(MenuError::Empty);
        }
        Ok(menu)
    }

    /// Loads a menu from a JSON file.
    ///
    /// ```json
    /// {"items": [{"key": "burger", "name": "Burger", "price": "5.99", "category": "food"}]}
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, MenuError> {
        let file: MenuFile = serde_json::from_str(content)?;
        Self::new(file.items.into_iter().map(|record| (record.key, record.entry)))
    }

    pub fn lookup(&self, key: &str) -> Option<&MenuEntry> {
        let key = key.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, entry)| entry)
    }

    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Menu {
    /// The house menu.
    fn default() -> Self {
        Self {
            entries: vec![
                ("burger".into(), MenuEntry::food("Burger", Decimal::new(599, 2))),
                ("fries".into(), MenuEntry::food("Fries", Decimal::new(399, 2))),
                ("pizza".into(), MenuEntry::food("Pizza", Decimal::new(799, 2))),
                ("iced tea".into(), MenuEntry::drink("Iced Tea", Decimal::new(199, 2))),
                ("coca cola".into(), MenuEntry::drink("Coca Cola", Decimal::new(299, 2))),
                ("pepsi".into(), MenuEntry::drink("Pepsi", Decimal::new(299, 2))),
            ],
        }
    }
}
