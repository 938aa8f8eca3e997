//! Console settings read from the environment.

use partstock_inventory::InventoryService;

/// Env var toggling the built-in sample records.
pub const SEED_VAR: &str = "PARTSTOCK_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Start from the sample records rather than an empty inventory.
    pub seed: bool,
    /// Set when a configured value could not be understood and a default was used.
    pub rejected: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            seed: true,
            rejected: None,
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.seed = true,
                "0" | "false" | "no" | "off" => config.seed = false,
                _ => config.rejected = Some(format!("{SEED_VAR}={raw:?}; using true")),
            }
        }
        config
    }

    /// The single inventory instance for this process.
    pub fn build_inventory(&self) -> InventoryService {
        if self.seed {
            InventoryService::seeded()
        } else {
            InventoryService::empty()
        }
    }
}
