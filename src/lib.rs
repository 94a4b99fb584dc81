//! partscope: maritime spares catalog navigator.
//!
//! The catalog is a fixed 5-level hierarchy (Brand → Model → Category →
//! SubCategory → Part) fetched wholesale as a JSON snapshot. The core of the
//! crate is a pure filter engine over that hierarchy plus an orthogonal
//! expansion-state set; everything else (snapshot loading, tree rendering,
//! configuration, CLI) wraps those two.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
