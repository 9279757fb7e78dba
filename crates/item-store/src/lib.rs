//! Item Store
//!
//! Platform-independent core of the storage room UI:
//! - record: the domain entity and its key
//! - observable: single-threaded publish/subscribe value holder
//! - store: master list plus the displayed list and its commands
//! - order, rows, guards: UI-facing state derived from the displayed list
//! - seed, config: startup data and settings

mod config;
mod error;
mod guards;
mod observable;
mod order;
mod record;
mod rows;
pub mod seed;
mod store;

pub use config::{SeedKind, StoreConfig, DEFAULT_MAX_DISPLAYED};
pub use error::{ConfigError, ConfigResult};
pub use guards::CommandGuards;
pub use observable::{Observable, Subscription, SubscriptionId};
pub use order::SortOrder;
pub use record::{Keyed, Record};
pub use rows::ExpandedRows;
pub use store::{ItemStore, Snapshot};
