//! Row decoding for the `todo` table.
//!
//! `SELECT *` returns whatever integer width the schema declares for `id`
//! (`SERIAL` is INT4, `BIGSERIAL` is INT8 on PostgreSQL), so the decoders widen
//! into `i64` instead of relying on the derive.

use crate::models::Todo;
use sqlx::postgres::PgRow;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

impl<'r> FromRow<'r, PgRow> for Todo {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id = match row.try_get::<i64, _>("id") {
            Ok(id) => id,
            Err(sqlx::Error::ColumnDecode { .. }) => match row.try_get::<i32, _>("id") {
                Ok(id) => i64::from(id),
                Err(sqlx::Error::ColumnDecode { .. }) => i64::from(row.try_get::<i16, _>("id")?),
                Err(e) => return Err(e),
            },
            Err(e) => return Err(e),
        };

        Ok(Todo {
            id,
            content: row.try_get("content")?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Todo {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        // SQLite stores every INTEGER as 64-bit
        Ok(Todo {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
        })
    }
}
