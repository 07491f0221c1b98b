//! # pagelist-sqlx: SQLx backend for pagelist
//!
//! This crate provides a [SQLx](https://github.com/launchbadge/sqlx)-backed
//! [`QueryableSource`](pagelist::QueryableSource): tables (optionally
//! filtered and ordered) become sources that [`pagelist::PagedList`] can
//! page over with a `COUNT(*)` and a `LIMIT` / `OFFSET` read.
//!
//! # What's in this crate
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SqlxSource`] | Source wrapper holding an `sqlx::Pool<DB>` and prebuilt SQL |
//! | [`QueryBuilder`] | Builds the COUNT and SELECT statements, with identifier validation |
//! | [`BindValue`] | Typed filter value, bound as its own SQL type |
//! | [`Entity`] | Table name, id column and column list of a row type |
//! | [`SqlxErrorExt`] | Extension trait to convert `sqlx::Error` → `DataError` (`.into_data_error()`) |
//!
//! # Feature flags
//!
//! `SqlxSource` implements `QueryableSource` for each enabled driver:
//!
//! | Feature    | Driver |
//! |------------|--------|
//! | `sqlite`   | SQLite via `sqlx/sqlite` |
//! | `postgres` | PostgreSQL via `sqlx/postgres` |
//! | `mysql`    | MySQL via `sqlx/mysql` |
//!
//! # Quick start
//!
//! ```toml
//! [dependencies]
//! pagelist-sqlx = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! ```ignore
//! use pagelist::PagedList;
//! use pagelist_sqlx::{Dialect, QueryBuilder, SqlxSource};
//! use sqlx::Postgres;
//!
//! let query = QueryBuilder::new("posts")
//!     .dialect(Dialect::Postgres)
//!     .where_eq("author_id", 7)
//!     .order_by("created_at", false);
//! let source = SqlxSource::<Post, Postgres>::new(pool.clone(), &query)?;
//!
//! let page = PagedList::create(&source, 1, 20).await?;
//! ```

pub mod entity;
pub mod error;
pub mod query;
pub mod source;

pub use entity::Entity;
pub use error::SqlxErrorExt;
pub use query::{BindValue, Dialect, QueryBuilder, QueryError};
pub use source::SqlxSource;

/// Re-exports of the most commonly used types from both `pagelist` and this crate.
pub mod prelude {
    pub use crate::{BindValue, Dialect, Entity, QueryBuilder, SqlxErrorExt, SqlxSource};
    pub use pagelist::prelude::*;
}
