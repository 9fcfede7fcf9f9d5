//! Properties of the query primitive: binding order, empty results,
//! empty-SQL rejection, default mapper tags, early parameter-count checks.

mod common;

use std::num::NonZeroUsize;

use chrono::NaiveDate;

use parq_core::entity::Alliance;
use parq_core::errors::ParqError;
use parq_core::param::{Param, Scalar, ScalarKind};
use parq_storage::query::ParametrizedQuery;

// ── Binding ───────────────────────────────────────────────────────────────

#[test]
fn binds_supported_kinds_in_placeholder_order() {
    let conn = common::open_test_db();
    conn.execute_batch("CREATE TABLE kinds (t TEXT, i INTEGER, b INTEGER, d TEXT)")
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
    let insert = ParametrizedQuery::scalar(
        &conn,
        ScalarKind::BigInt,
        "INSERT INTO kinds (t, i, b, d) VALUES (?, ?, ?, ?)",
        vec![
            Param::from("alpha"),
            Param::Int(7),
            Param::BigInt(9_000_000_000),
            Param::Date(date),
        ],
    );
    assert_eq!(insert.write().unwrap(), 1);

    let read_one = |kind, sql: &str| {
        ParametrizedQuery::scalar(&conn, kind, sql, vec![])
            .read()
            .unwrap()
            .remove(0)
    };
    assert_eq!(read_one(ScalarKind::Text, "SELECT t FROM kinds"), Scalar::Text("alpha".into()));
    assert_eq!(read_one(ScalarKind::Int, "SELECT i FROM kinds"), Scalar::Int(7));
    assert_eq!(
        read_one(ScalarKind::BigInt, "SELECT b FROM kinds"),
        Scalar::BigInt(9_000_000_000)
    );
    assert_eq!(read_one(ScalarKind::Date, "SELECT d FROM kinds"), Scalar::Date(date));
}

#[test]
fn parameter_count_mismatch_is_detected_before_execution() {
    let conn = common::open_test_db();
    let query = ParametrizedQuery::scalar(
        &conn,
        ScalarKind::Text,
        "SELECT name FROM alliance WHERE id = ? AND name = ?",
        vec![Param::BigInt(1)],
    );
    let err = query.read().unwrap_err();
    assert!(
        matches!(err, ParqError::ParameterCountMismatch { expected: 2, supplied: 1 }),
        "got {err:?}"
    );
}

#[test]
fn custom_binder_owns_the_placeholder_layout() {
    let conn = common::open_test_db();
    let entity = common::make_alliance(11, "bound by hand");
    let insert = ParametrizedQuery::<Alliance>::for_entity(
        &conn,
        "INSERT INTO alliance (id, name, inserted_on) VALUES (?, ?, ?)",
        Vec::new(),
    )
    .with_binder(|stmt| parq_storage::Entity::bind(&entity, stmt));
    assert_eq!(insert.write().unwrap(), 1);
}

// ── Reading ───────────────────────────────────────────────────────────────

#[test]
fn read_with_no_matching_rows_returns_empty_vec() {
    let conn = common::open_test_db();
    let query = ParametrizedQuery::scalar(
        &conn,
        ScalarKind::Text,
        "SELECT name FROM alliance WHERE id = ?",
        vec![Param::BigInt(999)],
    );
    assert_eq!(query.read().unwrap(), Vec::<Scalar>::new());
}

#[test]
fn entity_mapper_reads_full_rows() {
    let conn = common::open_test_db();
    let entity = common::make_alliance(5, "mapped");
    let insert = ParametrizedQuery::<Alliance>::for_entity(
        &conn,
        "INSERT INTO alliance (id, name, inserted_on) VALUES (?, ?, ?)",
        vec![
            Param::BigInt(entity.id),
            Param::from(entity.name.clone()),
            Param::Date(entity.inserted_on),
        ],
    );
    assert_eq!(insert.write().unwrap(), 1);

    let rows = ParametrizedQuery::<Alliance>::for_entity(&conn, "SELECT * FROM alliance ali", vec![])
        .read()
        .unwrap();
    assert_eq!(rows, vec![entity]);
}

// ── Default scalar mapper ─────────────────────────────────────────────────

#[test]
fn big_int_tag_maps_an_integer_column() {
    let conn = common::open_test_db();
    for id in [1, 2] {
        let entity = common::make_alliance(id, "row");
        ParametrizedQuery::<Alliance>::for_entity(
            &conn,
            "INSERT INTO alliance (id, name, inserted_on) VALUES (?, ?, ?)",
            Vec::new(),
        )
        .with_binder(|stmt| parq_storage::Entity::bind(&entity, stmt))
        .write()
        .unwrap();
    }

    let counts = ParametrizedQuery::scalar(
        &conn,
        ScalarKind::BigInt,
        "SELECT count(*) FROM alliance",
        vec![],
    )
    .read()
    .unwrap();
    assert_eq!(counts[0].as_big_int(), Some(2));
}

#[test]
fn unsupported_tag_fails_naming_the_kind() {
    let conn = common::open_test_db();
    conn.execute(
        "INSERT INTO alliance (id, name, inserted_on) VALUES (1, 'x', '2026-08-23')",
        [],
    )
    .unwrap();

    let err = ParametrizedQuery::scalar(&conn, ScalarKind::Blob, "SELECT id FROM alliance", vec![])
        .read()
        .unwrap_err();
    match err {
        ParqError::UnsupportedMapping { kind } => assert_eq!(kind, "blob"),
        other => panic!("expected UnsupportedMapping, got {other:?}"),
    }
}

// ── Failure modes ─────────────────────────────────────────────────────────

#[test]
fn empty_sql_fails_before_any_round_trip() {
    let conn = common::open_test_db();
    for sql in ["", "   "] {
        let read_err = ParametrizedQuery::scalar(&conn, ScalarKind::Int, sql, vec![])
            .read()
            .unwrap_err();
        assert!(matches!(read_err, ParqError::InvalidQuery), "got {read_err:?}");

        let write_err = ParametrizedQuery::scalar(&conn, ScalarKind::Int, sql, vec![])
            .write()
            .unwrap_err();
        assert!(matches!(write_err, ParqError::InvalidQuery), "got {write_err:?}");
    }
}

#[test]
fn driver_failure_surfaces_as_query_error() {
    let conn = common::open_test_db();
    let err = ParametrizedQuery::scalar(&conn, ScalarKind::Int, "SELECT FROM nowhere", vec![])
        .read()
        .unwrap_err();
    assert!(matches!(err, ParqError::Query { .. }), "got {err:?}");
}

// ── Descriptor accessors ──────────────────────────────────────────────────

#[test]
fn descriptor_exposes_sql_params_and_fetch_size() {
    let conn = common::open_test_db();
    let query = ParametrizedQuery::scalar(
        &conn,
        ScalarKind::Text,
        "SELECT name FROM alliance WHERE id = ?",
        vec![Param::BigInt(3)],
    )
    .with_fetch_size(NonZeroUsize::new(100).unwrap());

    assert_eq!(query.sql(), "SELECT name FROM alliance WHERE id = ?");
    assert_eq!(query.params(), &[Param::BigInt(3)]);
    assert_eq!(query.fetch_size(), NonZeroUsize::new(100));
    assert_eq!(query.params()[0].kind(), "big integer");
}
