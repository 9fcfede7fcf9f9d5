//! Entity model. One record type per table.

pub mod alliance;

pub use alliance::Alliance;
