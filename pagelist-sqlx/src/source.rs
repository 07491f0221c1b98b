use crate::entity::Entity;
use crate::query::{Dialect, QueryBuilder, QueryError};
use sqlx::{Database, Pool};
use std::marker::PhantomData;

/// A [`QueryableSource`](pagelist::QueryableSource) reading rows of `T` from an `sqlx::Pool<DB>`.
///
/// The COUNT and SELECT statements are built once, from a [`QueryBuilder`],
/// when the source is created. Each page then issues the COUNT and the
/// SELECT with `LIMIT {limit} OFFSET {offset}` appended, as two separate
/// statements outside any transaction.
///
/// The order of pages is the `ORDER BY` of the builder. Without one the
/// database is free to return rows in any order.
///
/// # Example
///
/// ```ignore
/// let posts = SqlxSource::<Post, Sqlite>::for_entity(pool.clone(), Dialect::Sqlite)?;
/// let page = PagedList::create(&posts, 2, 30).await?;
/// ```
pub struct SqlxSource<T, DB: Database> {
    pool: Pool<DB>,
    count_sql: String,
    select_sql: String,
    params: Vec<crate::BindValue>,
    _marker: PhantomData<fn() -> T>,
}

impl<T, DB: Database> SqlxSource<T, DB> {
    pub fn new(pool: Pool<DB>, query: &QueryBuilder) -> Result<Self, QueryError> {
        let (count_sql, params) = query.build_count()?;
        let (select_sql, _) = query.build_select()?;
        Ok(Self {
            pool,
            count_sql,
            select_sql,
            params,
            _marker: PhantomData,
        })
    }

    /// Get the underlying pool reference.
    pub fn pool(&self) -> &Pool<DB> {
        &self.pool
    }

    pub fn count_sql(&self) -> &str {
        &self.count_sql
    }

    /// The SELECT statement for the window at `offset` of at most `limit` rows.
    pub fn range_sql(&self, offset: u64, limit: u64) -> String {
        let limit = limit.min(i64::MAX as u64);
        let offset = offset.min(i64::MAX as u64);
        format!("{} LIMIT {limit} OFFSET {offset}", self.select_sql)
    }
}

impl<T: Entity, DB: Database> SqlxSource<T, DB> {
    /// Page over every row of `T`'s table, ordered by its id column ascending.
    pub fn for_entity(pool: Pool<DB>, dialect: Dialect) -> Result<Self, QueryError> {
        let query = QueryBuilder::new(T::table_name())
            .dialect(dialect)
            .columns(T::columns())
            .order_by(T::id_column(), true);
        Self::new(pool, &query)
    }
}

impl<T, DB: Database> Clone for SqlxSource<T, DB> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            count_sql: self.count_sql.clone(),
            select_sql: self.select_sql.clone(),
            params: self.params.clone(),
            _marker: PhantomData,
        }
    }
}

/// Binds every filter value to `$query` as the Rust type of its variant.
#[allow(unused_macros)]
macro_rules! bind_params {
    ($query:expr, $params:expr) => {{
        let mut query = $query;
        for param in $params {
            query = match param {
                $crate::BindValue::Int(v) => query.bind(*v),
                $crate::BindValue::Float(v) => query.bind(*v),
                $crate::BindValue::Bool(v) => query.bind(*v),
                $crate::BindValue::Text(v) => query.bind(v.clone()),
            };
        }
        query
    }};
}

/// Implements `QueryableSource` for `SqlxSource<T, $db>`.
///
/// One impl per driver keeps the executor bounds concrete.
#[allow(unused_macros)]
macro_rules! impl_queryable_source {
    ($db:ty) => {
        impl<T> pagelist::QueryableSource for SqlxSource<T, $db>
        where
            T: for<'r> sqlx::FromRow<'r, <$db as sqlx::Database>::Row> + Send + Unpin + 'static,
        {
            type Item = T;

            async fn count(&self) -> Result<u64, pagelist::DataError> {
                tracing::trace!(sql = %self.count_sql, "count");
                let query = bind_params!(
                    sqlx::query_scalar::<$db, i64>(&self.count_sql),
                    &self.params
                );
                let total = query
                    .fetch_one(&self.pool)
                    .await
                    .map_err($crate::SqlxErrorExt::into_data_error)?;
                Ok(u64::try_from(total).unwrap_or(0))
            }

            async fn range_at(
                &self,
                offset: u64,
                limit: u64,
            ) -> Result<Vec<T>, pagelist::DataError> {
                let sql = self.range_sql(offset, limit);
                tracing::trace!(sql = %sql, "range");
                bind_params!(sqlx::query_as::<$db, T>(&sql), &self.params)
                    .fetch_all(&self.pool)
                    .await
                    .map_err($crate::SqlxErrorExt::into_data_error)
            }
        }
    };
}

#[cfg(feature = "sqlite")]
impl_queryable_source!(sqlx::Sqlite);
#[cfg(feature = "postgres")]
impl_queryable_source!(sqlx::Postgres);
#[cfg(feature = "mysql")]
impl_queryable_source!(sqlx::MySql);

