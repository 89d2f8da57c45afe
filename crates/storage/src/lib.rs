//! Storage abstraction and implementations for LearnBridge progress state.
//!
//! This crate provides a trait-based store interface with a JSON
//! key-per-file reference implementation and an in-memory backend.

#![warn(missing_docs)]

pub mod json_store;
pub mod memory;
pub mod trait_;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use trait_::{ProgressStore, Result, StorageError};
