//! Core types and trait definitions for the reef marine-species registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod query;
pub mod specie;
pub mod store;
pub mod taxonomy;

pub use error::{Error, Result};
