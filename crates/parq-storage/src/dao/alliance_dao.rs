//! CRUD for the `alliance` table.

use rusqlite::{Connection, Row, Statement};

use parq_core::entity::Alliance;
use parq_core::errors::ParqResult;
use parq_core::param::{Param, DATE_FORMAT};

use crate::dao::{Dao, Entity};
use crate::query::{parse_date, ParametrizedQuery};
use crate::to_query_err;

impl Entity for Alliance {
    fn from_row(row: &Row<'_>) -> ParqResult<Self> {
        let raw_date: String = row.get(Alliance::INSERTED_ON).map_err(to_query_err)?;
        Ok(Alliance {
            id: row.get(Alliance::ID).map_err(to_query_err)?,
            name: row.get(Alliance::NAME).map_err(to_query_err)?,
            inserted_on: parse_date(&raw_date)?,
        })
    }

    fn bind(&self, stmt: &mut Statement<'_>) -> ParqResult<()> {
        stmt.raw_bind_parameter(1, self.id).map_err(to_query_err)?;
        stmt.raw_bind_parameter(2, &self.name).map_err(to_query_err)?;
        stmt.raw_bind_parameter(3, self.inserted_on.format(DATE_FORMAT).to_string())
            .map_err(to_query_err)?;
        Ok(())
    }
}

/// DAO for [`Alliance`]. Borrows the connection; never owns it.
pub struct AllianceDao<'conn> {
    conn: &'conn Connection,
}

impl<'conn> AllianceDao<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl Dao for AllianceDao<'_> {
    type Entity = Alliance;

    fn table_name(&self) -> &'static str {
        Alliance::TABLE
    }

    fn table_alias(&self) -> &'static str {
        "ali"
    }

    fn find_by_id(&self, entity: &Alliance) -> ParqResult<Option<Alliance>> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = ?",
            self.table_and_alias(),
            Alliance::ID
        );
        let query =
            ParametrizedQuery::<Alliance>::for_entity(self.conn, sql, vec![Param::BigInt(entity.id)]);
        self.first_record(&query)
    }

    fn insert(&self, entity: &Alliance) -> ParqResult<usize> {
        let sql = format!(
            "INSERT INTO {} ({}, {}, {}) VALUES (?, ?, ?)",
            self.table_name(),
            Alliance::ID,
            Alliance::NAME,
            Alliance::INSERTED_ON
        );
        let query = ParametrizedQuery::<Alliance>::for_entity(self.conn, sql, Vec::new())
            .with_binder(|stmt| entity.bind(stmt));
        self.persist(&query)
    }

    fn update(&self, entity: &Alliance) -> ParqResult<usize> {
        let sql = format!(
            "UPDATE {} SET {} = ?, {} = ? WHERE {} = ?",
            self.table_name(),
            Alliance::NAME,
            Alliance::INSERTED_ON,
            Alliance::ID
        );
        // Non-id fields first, id last, matching placeholder order.
        let query = ParametrizedQuery::<Alliance>::for_entity(self.conn, sql, Vec::new())
            .with_binder(|stmt| {
                stmt.raw_bind_parameter(1, &entity.name).map_err(to_query_err)?;
                stmt.raw_bind_parameter(2, entity.inserted_on.format(DATE_FORMAT).to_string())
                    .map_err(to_query_err)?;
                stmt.raw_bind_parameter(3, entity.id).map_err(to_query_err)?;
                Ok(())
            });
        self.persist(&query)
    }

    fn delete(&self, entity: &Alliance) -> ParqResult<usize> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?",
            self.table_name(),
            Alliance::ID
        );
        let query =
            ParametrizedQuery::<Alliance>::for_entity(self.conn, sql, vec![Param::BigInt(entity.id)]);
        self.persist(&query)
    }
}
