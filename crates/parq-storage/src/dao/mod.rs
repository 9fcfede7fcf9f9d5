//! DAO contract and shared plumbing.

pub mod alliance_dao;

use rusqlite::{Row, Statement};

use parq_core::errors::{ParqError, ParqResult};

use crate::query::ParametrizedQuery;

pub use alliance_dao::AllianceDao;

/// The two capabilities a table entity supplies to the query layer:
/// converting a result row into itself, and binding its own fields to a
/// statement's placeholders in column order.
pub trait Entity: Sized {
    fn from_row(row: &Row<'_>) -> ParqResult<Self>;
    fn bind(&self, stmt: &mut Statement<'_>) -> ParqResult<()>;
}

/// CRUD contract every table DAO implements, plus shared helpers that
/// translate query-layer failures into the DAO-level error variant.
pub trait Dao {
    type Entity;

    fn table_name(&self) -> &'static str;
    fn table_alias(&self) -> &'static str;

    /// Look up by the id carried in the given entity. `None` when no row
    /// matches.
    fn find_by_id(&self, entity: &Self::Entity) -> ParqResult<Option<Self::Entity>>;

    fn insert(&self, entity: &Self::Entity) -> ParqResult<usize>;
    fn update(&self, entity: &Self::Entity) -> ParqResult<usize>;
    fn delete(&self, entity: &Self::Entity) -> ParqResult<usize>;

    /// `"<table> <alias>"`, for FROM clauses.
    fn table_and_alias(&self) -> String {
        format!("{} {}", self.table_name(), self.table_alias())
    }

    /// Run a query and keep only the first row, `None` when the result is
    /// empty.
    fn first_record<T>(&self, query: &ParametrizedQuery<'_, T>) -> ParqResult<Option<T>> {
        Ok(self.select(query)?.into_iter().next())
    }

    /// Forward to [`ParametrizedQuery::read`], wrapping any failure with the
    /// SQL that failed.
    fn select<T>(&self, query: &ParametrizedQuery<'_, T>) -> ParqResult<Vec<T>> {
        query.read().map_err(|e| {
            tracing::warn!(sql = %query.sql(), error = %e, "read failed");
            ParqError::dao("could not read", query.sql(), e)
        })
    }

    /// Forward to [`ParametrizedQuery::write`], wrapping any failure with
    /// the SQL that failed.
    fn persist<T>(&self, query: &ParametrizedQuery<'_, T>) -> ParqResult<usize> {
        query.write().map_err(|e| {
            tracing::warn!(sql = %query.sql(), error = %e, "persist failed");
            ParqError::dao("could not persist", query.sql(), e)
        })
    }
}
