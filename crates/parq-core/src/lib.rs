//! # parq-core
//!
//! Foundation crate for the parq query layer.
//! Defines the bind-parameter and scalar kinds, the error taxonomy, and the
//! entity model. The storage crate depends on this; this crate knows nothing
//! about the database driver.

pub mod entity;
pub mod errors;
pub mod param;

// Re-export the most commonly used types at the crate root.
pub use entity::Alliance;
pub use errors::{ParqError, ParqResult};
pub use param::{Param, Scalar, ScalarKind, DATE_FORMAT};
