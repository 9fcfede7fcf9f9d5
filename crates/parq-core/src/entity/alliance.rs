use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An alliance row: identifier, display name, and the date the row was
/// inserted. No relationships to other entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alliance {
    pub id: i64,
    pub name: String,
    pub inserted_on: NaiveDate,
}

impl Alliance {
    pub const TABLE: &'static str = "alliance";
    pub const ID: &'static str = "id";
    pub const NAME: &'static str = "name";
    pub const INSERTED_ON: &'static str = "inserted_on";

    pub fn new(id: i64, name: impl Into<String>, inserted_on: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            inserted_on,
        }
    }
}
