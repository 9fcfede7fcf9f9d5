//! The parametrized query primitive: bind positional parameters, execute,
//! map rows to typed values.

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use rusqlite::{Connection, Row, Statement};

use parq_core::errors::{ParqError, ParqResult};
use parq_core::param::{Param, Scalar, ScalarKind, DATE_FORMAT};

use crate::dao::Entity;
use crate::to_query_err;

/// Converts one result row into one value.
pub type RowMapper<'a, T> = Box<dyn Fn(&Row<'_>) -> ParqResult<T> + 'a>;

/// Writes values into a prepared statement's positional placeholders.
pub type ParamBinder<'a> = Box<dyn Fn(&mut Statement<'_>) -> ParqResult<()> + 'a>;

/// A single executable statement: SQL text, ordered bind parameters, a
/// row-mapper, and optionally a custom binder.
///
/// [`read`](Self::read) runs the statement as a query and maps every row;
/// [`write`](Self::write) runs it as an insert/update/delete and returns the
/// affected-row count. The connection is borrowed; the prepared statement
/// lives for the single call only.
pub struct ParametrizedQuery<'a, T> {
    conn: &'a Connection,
    sql: String,
    params: Vec<Param>,
    fetch_size: Option<NonZeroUsize>,
    mapper: RowMapper<'a, T>,
    binder: Option<ParamBinder<'a>>,
}

impl<'a, T> ParametrizedQuery<'a, T> {
    /// Build a query with a caller-supplied row-mapper. Parameters are bound
    /// in list order by the default binder unless a custom binder is
    /// installed with [`with_binder`](Self::with_binder).
    pub fn new(
        conn: &'a Connection,
        sql: impl Into<String>,
        params: Vec<Param>,
        mapper: impl Fn(&Row<'_>) -> ParqResult<T> + 'a,
    ) -> Self {
        Self {
            conn,
            sql: sql.into(),
            params,
            fetch_size: None,
            mapper: Box::new(mapper),
            binder: None,
        }
    }

    /// Replace the default binder. The caller then owns the full placeholder
    /// layout, so the parameter-count check is skipped.
    pub fn with_binder(mut self, binder: impl Fn(&mut Statement<'_>) -> ParqResult<()> + 'a) -> Self {
        self.binder = Some(Box::new(binder));
        self
    }

    /// Driver fetch-size hint. SQLite ignores it; it is kept on the
    /// descriptor for diagnostics.
    pub fn with_fetch_size(mut self, rows: NonZeroUsize) -> Self {
        self.fetch_size = Some(rows);
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn fetch_size(&self) -> Option<NonZeroUsize> {
        self.fetch_size
    }

    /// Execute as a query. Returns all mapped rows in result order; an empty
    /// vector when nothing matches, never an error.
    pub fn read(&self) -> ParqResult<Vec<T>> {
        let mut stmt = self.prepare_bound()?;
        tracing::debug!(sql = %self.sql, fetch_size = ?self.fetch_size, "executing read");
        let mut rows = stmt.raw_query();
        let mut result = Vec::new();
        while let Some(row) = rows.next().map_err(to_query_err)? {
            result.push((self.mapper)(row)?);
        }
        Ok(result)
    }

    /// Execute as an insert/update/delete. Returns the affected-row count;
    /// touching zero rows is a count of 0, not an error.
    pub fn write(&self) -> ParqResult<usize> {
        let mut stmt = self.prepare_bound()?;
        tracing::debug!(sql = %self.sql, "executing write");
        stmt.raw_execute().map_err(to_query_err)
    }

    /// Prepare the statement and bind parameters.
    ///
    /// The empty-SQL check runs before any database round-trip. With the
    /// default binder the placeholder count must match the parameter list;
    /// a mismatch fails here instead of surfacing as a late driver error.
    fn prepare_bound(&self) -> ParqResult<Statement<'a>> {
        if self.sql.trim().is_empty() {
            return Err(ParqError::InvalidQuery);
        }
        let mut stmt = self.conn.prepare(&self.sql).map_err(to_query_err)?;
        match &self.binder {
            Some(bind) => bind(&mut stmt)?,
            None => {
                let expected = stmt.parameter_count();
                if expected != self.params.len() {
                    return Err(ParqError::ParameterCountMismatch {
                        expected,
                        supplied: self.params.len(),
                    });
                }
                for (index, param) in self.params.iter().enumerate() {
                    bind_param(&mut stmt, index + 1, param)?;
                }
            }
        }
        Ok(stmt)
    }
}

impl<'a> ParametrizedQuery<'a, Scalar> {
    /// Build a query with the default single-column mapper, selected by the
    /// result-type tag. Convenience for scalar queries (`SELECT count(*)`).
    pub fn scalar(
        conn: &'a Connection,
        kind: ScalarKind,
        sql: impl Into<String>,
        params: Vec<Param>,
    ) -> Self {
        Self::new(conn, sql, params, move |row| map_scalar(row, kind))
    }
}

impl<'a, E: Entity + 'a> ParametrizedQuery<'a, E> {
    /// Build a query mapped by the entity's own row-mapper.
    pub fn for_entity(conn: &'a Connection, sql: impl Into<String>, params: Vec<Param>) -> Self {
        Self::new(conn, sql, params, E::from_row)
    }
}

/// Bind one parameter to a one-based placeholder index, one arm per kind.
pub fn bind_param(stmt: &mut Statement<'_>, index: usize, param: &Param) -> ParqResult<()> {
    let bound = match param {
        Param::Text(v) => stmt.raw_bind_parameter(index, v),
        Param::Int(v) => stmt.raw_bind_parameter(index, v),
        Param::BigInt(v) => stmt.raw_bind_parameter(index, v),
        Param::Date(v) => stmt.raw_bind_parameter(index, v.format(DATE_FORMAT).to_string()),
    };
    bound.map_err(to_query_err)
}

/// Default mapper: column 0 of the row, converted per the result-type tag.
fn map_scalar(row: &Row<'_>, kind: ScalarKind) -> ParqResult<Scalar> {
    match kind {
        ScalarKind::Int => row.get::<_, i32>(0).map(Scalar::Int).map_err(to_query_err),
        ScalarKind::BigInt => row.get::<_, i64>(0).map(Scalar::BigInt).map_err(to_query_err),
        ScalarKind::Text => row.get::<_, String>(0).map(Scalar::Text).map_err(to_query_err),
        ScalarKind::Date => {
            let raw: String = row.get(0).map_err(to_query_err)?;
            parse_date(&raw).map(Scalar::Date)
        }
        ScalarKind::Blob => Err(ParqError::UnsupportedMapping {
            kind: kind.name().to_string(),
        }),
    }
}

/// Parse a date column stored as ISO-8601 text.
pub fn parse_date(raw: &str) -> ParqResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| ParqError::Query {
        message: format!("parse date '{raw}': {e}"),
    })
}
