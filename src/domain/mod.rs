//! Domain layer: catalog entities and pure hierarchy logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod error;
pub mod expansion;
pub mod filter;

pub use catalog::{Brand, CatalogStats, Category, Model, Part, SubCategory};
pub use error::{DomainError, DomainResult};
pub use expansion::ExpansionState;
pub use filter::filter;
