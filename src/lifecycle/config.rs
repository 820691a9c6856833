//! Runtime configuration read from the environment.

use crate::menu::{Menu, MenuError};
use std::path::PathBuf;

pub const ORDER_NUMBER_VAR: &str = "RESTAURANT_ORDER_NUMBER";
pub const MENU_FILE_VAR: &str = "RESTAURANT_MENU_FILE";

const DEFAULT_ORDER_NUMBER: &str = "1";

/// Settings for one run of the console.
///
/// | Variable | Default | Meaning |
/// |---|---|---|
/// | `RESTAURANT_ORDER_NUMBER` | `1` | order number |
/// | `RESTAURANT_MENU_FILE` | unset | JSON menu, see [`Menu::load`] |
///
/// `main` loads a `.env` file with `dotenv` before reading these.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Number printed with the order and attached to its logs.
    pub order_number: String,
    /// JSON menu to use instead of the built-in one.
    pub menu_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            order_number: DEFAULT_ORDER_NUMBER.to_string(),
            menu_file: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv` first to honour `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            order_number: get(ORDER_NUMBER_VAR).unwrap_or_else(|| DEFAULT_ORDER_NUMBER.to_string()),
            menu_file: get(MENU_FILE_VAR).map(PathBuf::from),
        }
    }

    /// The configured menu, or the built-in one.
    pub fn load_menu(&self) -> Result<Menu, MenuError> {
        match &self.menu_file {
            Some(path) => Menu::load(path),
            None => Ok(Menu::default()),
        }
    }
}
