//! Startup Settings
//!
//! The store configuration is embedded at build time.

use item_store::{seed, ConfigResult, StoreConfig};

const EMBEDDED_CONFIG: &str = include_str!("../config/storage_room.json");

pub fn load() -> ConfigResult<StoreConfig> {
    StoreConfig::from_json(EMBEDDED_CONFIG)
}

/// Random amount for the named seed set
pub fn random_amount() -> u32 {
    (js_sys::Math::random() * f64::from(seed::NAMED_AMOUNT_BOUND)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = load().expect("embedded config should parse");
        assert_eq!(config.max_displayed, item_store::DEFAULT_MAX_DISPLAYED);
    }
}
