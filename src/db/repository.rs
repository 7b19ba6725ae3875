//! SQL statements for the `todo` table.
//!
//! Each operation issues exactly one statement. User input only ever reaches
//! the database as a bound `$N` parameter, never as SQL text.

use crate::db::pool::DbPool;
use crate::dispatch_pool;
use crate::error::{DbError, DbResult};
use crate::models::Todo;
use futures_util::TryStreamExt;
use tracing::debug;

pub const SELECT_ALL_SQL: &str = "SELECT * FROM todo";
pub const INSERT_SQL: &str = "INSERT INTO todo (content) VALUES ($1)";
pub const UPDATE_SQL: &str = "UPDATE todo SET content = $1 WHERE id = $2";
pub const DELETE_SQL: &str = "DELETE FROM todo WHERE id = $1";

/// Data access for todo items over a borrowed pool handle.
pub struct TodoRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> TodoRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Fetch every row, unfiltered and unordered.
    pub async fn list(&self) -> DbResult<Vec<Todo>> {
        let todos: Vec<Todo> = dispatch_pool!(self.pool, p => {
            sqlx::query_as::<_, Todo>(SELECT_ALL_SQL)
                .fetch(p)
                .try_collect()
                .await?
        });
        debug!(count = todos.len(), "Listed todo items");
        Ok(todos)
    }

    pub async fn create(&self, content: &str) -> DbResult<()> {
        let rows_affected = dispatch_pool!(self.pool, p => {
            sqlx::query(INSERT_SQL)
                .bind(content)
                .execute(p)
                .await?
                .rows_affected()
        });
        debug!(rows_affected, "Inserted todo item");
        Ok(())
    }

    /// Replace the content of item `id`. Zero affected rows is reported as not found.
    pub async fn update(&self, id: i64, content: &str) -> DbResult<()> {
        let rows_affected = dispatch_pool!(self.pool, p => {
            sqlx::query(UPDATE_SQL)
                .bind(content)
                .bind(id)
                .execute(p)
                .await?
                .rows_affected()
        });
        debug!(id, rows_affected, "Updated todo item");
        require_affected(id, rows_affected)
    }

    /// Delete item `id`. Zero affected rows is reported as not found.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let rows_affected = dispatch_pool!(self.pool, p => {
            sqlx::query(DELETE_SQL)
                .bind(id)
                .execute(p)
                .await?
                .rows_affected()
        });
        debug!(id, rows_affected, "Deleted todo item");
        require_affected(id, rows_affected)
    }
}

fn require_affected(id: i64, rows_affected: u64) -> DbResult<()> {
    if rows_affected == 0 {
        Err(DbError::not_found(id))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_affected() {
        assert!(require_affected(1, 1).is_ok());
        assert!(matches!(
            require_affected(99999, 0),
            Err(DbError::NotFound { id: 99999 })
        ));
    }

    #[test]
    fn test_statements_use_positional_parameters() {
        assert!(INSERT_SQL.contains("$1"));
        assert!(UPDATE_SQL.contains("$1") && UPDATE_SQL.contains("$2"));
        assert!(DELETE_SQL.contains("$1"));
    }
}
