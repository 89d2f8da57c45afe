//! Static course catalog for LearnBridge.
//!
//! The catalog is read-only configuration data: loaded once at startup,
//! never mutated. Courses can come from the built-in set or from an
//! external JSON file.

#![warn(missing_docs)]

mod builtin;
mod catalog;

pub use catalog::{Catalog, CatalogError};
