//! # parq-storage
//!
//! SQLite-backed execution layer for the parq workspace: the
//! [`ParametrizedQuery`] primitive that binds positional parameters and maps
//! result rows, and the [`Dao`] contract concrete table DAOs implement.
//!
//! The connection is always borrowed from the caller. This crate opens a
//! prepared statement per call and releases it when the call returns; it
//! never pools, caches, or shares anything across calls.

pub mod dao;
pub mod query;

use parq_core::errors::ParqError;

pub use dao::{AllianceDao, Dao, Entity};
pub use query::ParametrizedQuery;

/// Render a driver failure into the query-layer error kind.
///
/// Public so custom [`Entity`] mappers and binders can wrap the
/// `rusqlite` errors they hit the same way the built-in paths do.
pub fn to_query_err(e: rusqlite::Error) -> ParqError {
    ParqError::Query {
        message: e.to_string(),
    }
}
