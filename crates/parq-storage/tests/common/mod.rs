//! Shared test plumbing: per-test connections, never a shared fixture.

use chrono::NaiveDate;
use rusqlite::Connection;

use parq_core::entity::Alliance;

/// Fresh in-memory database with the alliance table, owned by the test.
pub fn open_test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    create_alliance_table(&conn);
    conn
}

pub fn create_alliance_table(conn: &Connection) {
    conn.execute_batch(
        "CREATE TABLE alliance (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            inserted_on TEXT NOT NULL
        )",
    )
    .unwrap();
}

pub fn make_alliance(id: i64, name: &str) -> Alliance {
    Alliance::new(id, name, NaiveDate::from_ymd_opt(2026, 8, 23).unwrap())
}
