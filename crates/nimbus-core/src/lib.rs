//! # Nimbus Core - The Translator
//!
//! Deterministic translator from the community systems sheet to the typed
//! star-chart model.
//!
//! The input is a raw 2-D grid of strings with a fixed column layout
//! ([`layout`]); how that grid was fetched is an app-layer concern. The
//! output is a [`StarChart`]: a name-keyed, last-writer-wins collection
//! of [`System`] values that viewers only read.
//!
//! ## Design
//!
//! - One linear pass, no I/O, no async, no shared mutable state beyond
//!   the running tier accumulator threaded through the row loop.
//! - `BTreeMap` only, for deterministic iteration.
//! - Lenient numeric decoding: a garbled cell in the hand-maintained
//!   sheet becomes the [`BAD_NUMBER`] sentinel instead of failing the
//!   whole load.
//!
//! ## Quick Start
//!
//! ```rust
//! use nimbus_core::translate_grid;
//!
//! let grid: Vec<Vec<String>> = vec![Vec::new(); 4]; // header rows
//! let chart = translate_grid(&grid);
//! assert!(chart.is_empty());
//! ```

pub mod cells;
pub mod layout;
pub mod summary;
pub mod system;
pub mod translate;

pub use cells::BAD_NUMBER;
pub use system::{Asteroid, Jovian, Planet, Signal, StarChart, System};
pub use translate::translate_grid;
