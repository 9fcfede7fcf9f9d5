/// Error type shared by the query primitive and the DAO layer.
///
/// Low-level database failures are never swallowed: the query layer wraps
/// them in [`ParqError::Query`] and the DAO layer adds the failing SQL on
/// top in [`ParqError::Dao`]. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ParqError {
    /// No SQL text was supplied, or it was empty. Raised before any
    /// database round-trip is attempted.
    #[error("a query has not been specified")]
    InvalidQuery,

    /// The default mapper was asked for a kind it has no arm for.
    #[error("no default mapping for kind: {kind}")]
    UnsupportedMapping { kind: String },

    /// The statement's placeholder count does not match the supplied
    /// parameter list. Checked after prepare, before binding.
    #[error("statement expects {expected} parameters, {supplied} supplied")]
    ParameterCountMismatch { expected: usize, supplied: usize },

    /// SQLite reported a failure (syntax error, constraint violation,
    /// connectivity loss). The message carries the rendered driver error.
    #[error("SQLite error: {message}")]
    Query { message: String },

    /// DAO-level wrapper: which operation failed and on what SQL.
    #[error("{context} [{sql}]")]
    Dao {
        context: String,
        sql: String,
        #[source]
        source: Box<ParqError>,
    },
}

pub type ParqResult<T> = Result<T, ParqError>;

impl ParqError {
    /// Wrap a query-layer error with DAO context and the SQL that failed.
    pub fn dao(context: impl Into<String>, sql: impl Into<String>, source: ParqError) -> Self {
        ParqError::Dao {
            context: context.into(),
            sql: sql.into(),
            source: Box::new(source),
        }
    }
}
