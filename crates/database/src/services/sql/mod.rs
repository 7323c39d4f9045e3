//! Storage backed by hand-written parameterized SQL.
//!
//! Statements are plain SQL text run through [`ConnectionTrait`]. Placeholders
//! are written `$1`, `$2`, ... which PostgreSQL and SQLite both accept; every
//! statement binds its parameters in placeholder order.

mod equipment;
mod room;
mod trainer;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, QueryResult, Statement, Value};

pub struct SqlStorage {
    db: DatabaseConnection,
}

impl SqlStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Builds a statement for the dialect behind `conn`
fn statement<C, I>(conn: &C, sql: &str, values: I) -> Statement
where
    C: ConnectionTrait,
    I: IntoIterator<Item = Value>,
{
    Statement::from_sql_and_values(conn.get_database_backend(), sql, values)
}

/// Runs an `INSERT ... RETURNING id` statement and returns the new id
async fn insert_returning_id<C, I>(conn: &C, sql: &str, values: I) -> Result<i32, DbErr>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = Value>,
{
    let row = conn
        .query_one(statement(conn, sql, values))
        .await?
        .ok_or(DbErr::RecordNotInserted)?;

    row.try_get("", "id")
}

/// Whether `sql` (a single-row lookup) yields a row
async fn exists<C, I>(conn: &C, sql: &str, values: I) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = Value>,
{
    Ok(conn.query_one(statement(conn, sql, values)).await?.is_some())
}

fn room_from_row(row: &QueryResult) -> Result<models::Room, DbErr> {
    Ok(models::Room {
        id: row.try_get("", "id")?,
        name: row.try_get("", "name")?,
        location: row.try_get("", "location")?,
        capacity: row.try_get("", "capacity")?,
    })
}

fn trainer_from_row(row: &QueryResult) -> Result<models::Trainer, DbErr> {
    Ok(models::Trainer {
        id: row.try_get("", "id")?,
        name: row.try_get("", "name")?,
        specialization: row.try_get("", "specialization")?,
        experience_years: row.try_get("", "experience_years")?,
        room_id: row.try_get("", "room_id")?,
    })
}

fn equipment_from_row(row: &QueryResult) -> Result<models::Equipment, DbErr> {
    Ok(models::Equipment {
        id: row.try_get("", "id")?,
        name: row.try_get("", "name")?,
        kind: row.try_get("", "type")?,
        quantity: row.try_get("", "quantity")?,
    })
}
