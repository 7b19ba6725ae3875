//! Database dispatch macro.
//!
//! Statement text is identical across backends, but sqlx's executors are typed by
//! driver, so every call site still needs a match over `DbPool`. This macro expands
//! the same body once per variant.

/// Run `$body` against whichever concrete pool `$pool` holds, binding it as `$p`.
///
/// # Example
///
/// ```ignore
/// let result = dispatch_pool!(pool, p => sqlx::query(SQL).execute(p).await?.rows_affected());
/// ```
#[macro_export]
macro_rules! dispatch_pool {
    ($pool:expr, $p:ident => $body:expr) => {
        match $pool {
            $crate::db::pool::DbPool::Postgres($p) => $body,
            $crate::db::pool::DbPool::SQLite($p) => $body,
        }
    };
}
