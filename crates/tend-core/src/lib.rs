//! Core types and trait definitions for the Tend habit store.
//!
//! This crate is deliberately free of I/O dependencies. All other crates
//! depend on it; it depends on nothing beyond serde, chrono, and uuid.

pub mod habit;
pub mod store;
