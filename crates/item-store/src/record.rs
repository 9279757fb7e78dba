//! Record Entity
//!
//! A single stored item. Records are keyed by name.

use serde::{Deserialize, Serialize};

/// Contract for anything rendered as a keyed row
pub trait Keyed {
    /// Stable key, unique within one master list
    fn key(&self) -> &str;
}

/// A stored item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique name, used as the row key
    pub name: String,
    pub amount: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}

impl Record {
    pub fn new(name: impl Into<String>, amount: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            description: description.into(),
            bar_code: None,
            qr_code: None,
        }
    }

    pub fn with_bar_code(mut self, code: impl Into<String>) -> Self {
        self.bar_code = Some(code.into());
        self
    }

    pub fn with_qr_code(mut self, code: impl Into<String>) -> Self {
        self.qr_code = Some(code.into());
        self
    }
}

impl Keyed for Record {
    fn key(&self) -> &str {
        &self.name
    }
}
