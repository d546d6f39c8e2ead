//! Card system: activity definitions and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Stable string key of a card
//! - `Category`: Study, Social, Work, Leisure, Event
//! - `CardDefinition`: Static card data with its stat effects
//! - `CardCatalog`: Card lookup, backed by `STANDARD_CARDS` by default

pub mod catalog;
pub mod definition;

pub use catalog::{CardCatalog, STANDARD_CARDS};
pub use definition::{count_category, CardDefinition, CardId, Category};
