//! JSON-file backend for the Tend habit store.
//!
//! The whole collection lives in one JSON document on disk. Every mutation
//! rewrites the document through a write-temp-then-rename sequence, so an
//! observer of the target path never sees a partially written file.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonStore;
