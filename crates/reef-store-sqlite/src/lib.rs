//! SQLite backend for the reef registry stores.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Because every store operation is a
//! single `call` against that thread, each operation is atomic with respect
//! to the others; there are no cross-operation transactions.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
