/// Builds the COUNT and base SELECT statements a [`SqlxSource`](crate::SqlxSource) pages over.
///
/// The window (`LIMIT` / `OFFSET`) is not part of the builder; the source
/// appends it per read.
///
/// # Example
///
/// ```ignore
/// let q = QueryBuilder::new("posts")
///     .dialect(Dialect::Postgres)
///     .columns(&["id", "title"])
///     .where_eq("author_id", 7)
///     .order_by("id", true);
/// let (sql, params) = q.build_select()?;
/// // SELECT id, title FROM posts WHERE author_id = $1 ORDER BY id ASC
/// // params == [BindValue::Int(7)]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Generic SQL using `?` placeholders.
    #[default]
    Generic,
    Sqlite,
    /// `?` placeholders with backtick quoting.
    MySql,
    /// `$1, $2, ...` placeholders.
    Postgres,
}

impl Dialect {
    fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::Generic | Dialect::Sqlite | Dialect::MySql => "?".to_string(),
        }
    }

    fn quote_char(self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Generic | Dialect::Sqlite | Dialect::Postgres => '"',
        }
    }
}

/// A value bound to a placeholder, carried with its SQL type.
///
/// Each variant binds as the matching Rust type, so an `Int` is sent as
/// `BIGINT` and compares against integer columns on strictly typed servers.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::Int(v)
    }
}

impl From<i32> for BindValue {
    fn from(v: i32) -> Self {
        BindValue::Int(i64::from(v))
    }
}

impl From<f64> for BindValue {
    fn from(v: f64) -> Self {
        BindValue::Float(v)
    }
}

impl From<bool> for BindValue {
    fn from(v: bool) -> Self {
        BindValue::Bool(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Text(v.to_string())
    }
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        BindValue::Text(v)
    }
}

#[derive(Debug, Clone)]
enum Condition {
    Compare {
        column: String,
        op: &'static str,
        value: BindValue,
    },
    IsNull(String),
    IsNotNull(String),
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: String,
    columns: Vec<String>,
    conditions: Vec<Condition>,
    order: Vec<(String, bool)>,
    dialect: Dialect,
    quote_identifiers: bool,
}

impl QueryBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: Vec::new(),
            conditions: Vec::new(),
            order: Vec::new(),
            dialect: Dialect::default(),
            quote_identifiers: false,
        }
    }

    /// Set the SQL dialect (affects placeholder style and quoting).
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Quote every identifier with the dialect's quoting style.
    pub fn quote_identifiers(mut self, quote: bool) -> Self {
        self.quote_identifiers = quote;
        self
    }

    /// Columns to select. Without this, the query selects `*`.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn where_eq(self, column: &str, value: impl Into<BindValue>) -> Self {
        self.compare(column, "=", value.into())
    }

    pub fn where_not_eq(self, column: &str, value: impl Into<BindValue>) -> Self {
        self.compare(column, "!=", value.into())
    }

    pub fn where_like(self, column: &str, pattern: &str) -> Self {
        self.compare(column, "LIKE", BindValue::from(pattern))
    }

    pub fn where_gt(self, column: &str, value: impl Into<BindValue>) -> Self {
        self.compare(column, ">", value.into())
    }

    pub fn where_lt(self, column: &str, value: impl Into<BindValue>) -> Self {
        self.compare(column, "<", value.into())
    }

    pub fn where_null(mut self, column: &str) -> Self {
        self.conditions.push(Condition::IsNull(column.to_string()));
        self
    }

    pub fn where_not_null(mut self, column: &str) -> Self {
        self.conditions
            .push(Condition::IsNotNull(column.to_string()));
        self
    }

    /// Append a sort key. Pages follow the order given here.
    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order.push((column.to_string(), ascending));
        self
    }

    fn compare(mut self, column: &str, op: &'static str, value: BindValue) -> Self {
        self.conditions.push(Condition::Compare {
            column: column.to_string(),
            op,
            value,
        });
        self
    }

    /// Build the SELECT statement (without window) returning `(sql, bind_values)`.
    pub fn build_select(&self) -> Result<(String, Vec<BindValue>), QueryError> {
        let table = self.identifier(&self.table, false, "table")?;
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns
                .iter()
                .map(|c| self.identifier(c, true, "column"))
                .collect::<Result<Vec<_>, _>>()?
                .join(", ")
        };

        let mut sql = format!("SELECT {columns} FROM {table}");
        let params = self.append_where(&mut sql)?;
        self.append_order(&mut sql)?;
        Ok((sql, params))
    }

    /// Build the matching `SELECT COUNT(*)` statement returning `(sql, bind_values)`.
    pub fn build_count(&self) -> Result<(String, Vec<BindValue>), QueryError> {
        let table = self.identifier(&self.table, false, "table")?;
        let mut sql = format!("SELECT COUNT(*) FROM {table}");
        let params = self.append_where(&mut sql)?;
        Ok((sql, params))
    }

    fn append_where(&self, sql: &mut String) -> Result<Vec<BindValue>, QueryError> {
        let mut params = Vec::new();
        if self.conditions.is_empty() {
            return Ok(params);
        }
        let mut clauses = Vec::with_capacity(self.conditions.len());
        for cond in &self.conditions {
            let clause = match cond {
                Condition::Compare { column, op, value } => {
                    let column = self.identifier(column, false, "column")?;
                    params.push(value.clone());
                    let placeholder = self.dialect.placeholder(params.len());
                    format!("{column} {op} {placeholder}")
                }
                Condition::IsNull(column) => {
                    format!("{} IS NULL", self.identifier(column, false, "column")?)
                }
                Condition::IsNotNull(column) => {
                    format!("{} IS NOT NULL", self.identifier(column, false, "column")?)
                }
            };
            clauses.push(clause);
        }
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
        Ok(params)
    }

    fn append_order(&self, sql: &mut String) -> Result<(), QueryError> {
        if self.order.is_empty() {
            return Ok(());
        }
        let mut clauses = Vec::with_capacity(self.order.len());
        for (column, ascending) in &self.order {
            let column = self.identifier(column, false, "column")?;
            let direction = if *ascending { "ASC" } else { "DESC" };
            clauses.push(format!("{column} {direction}"));
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(&clauses.join(", "));
        Ok(())
    }

    fn identifier(
        &self,
        ident: &str,
        allow_star: bool,
        kind: &'static str,
    ) -> Result<String, QueryError> {
        if !is_valid_identifier(ident, allow_star) {
            return Err(QueryError::InvalidIdentifier {
                kind,
                ident: ident.to_string(),
            });
        }
        if !self.quote_identifiers {
            return Ok(ident.to_string());
        }
        let quote = self.dialect.quote_char();
        Ok(ident
            .split('.')
            .map(|part| {
                if part == "*" {
                    part.to_string()
                } else {
                    format!("{quote}{part}{quote}")
                }
            })
            .collect::<Vec<_>>()
            .join("."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    InvalidIdentifier { kind: &'static str, ident: String },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidIdentifier { kind, ident } => {
                write!(f, "Invalid {kind} identifier: {ident}")
            }
        }
    }
}

impl std::error::Error for QueryError {}

// `name`, `schema.name`, and `*` / `alias.*` for selected columns.
fn is_valid_identifier(ident: &str, allow_star: bool) -> bool {
    let parts: Vec<&str> = ident.split('.').collect();
    let last = parts.len() - 1;
    parts.iter().enumerate().all(|(idx, part)| {
        (allow_star && idx == last && *part == "*") || is_valid_segment(part)
    })
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_select() {
        let (sql, params) = QueryBuilder::new("posts").build_select().unwrap();
        assert_eq!(sql, "SELECT * FROM posts");
        assert!(params.is_empty());
    }

    #[test]
    fn test_select_with_columns_and_order() {
        let (sql, params) = QueryBuilder::new("posts")
            .columns(&["id", "title"])
            .where_eq("author_id", 7)
            .where_like("title", "%Garden%")
            .order_by("upvotes", false)
            .order_by("id", true)
            .build_select()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT id, title FROM posts WHERE author_id = ? AND title LIKE ? ORDER BY upvotes DESC, id ASC"
        );
        assert_eq!(
            params,
            vec![BindValue::Int(7), BindValue::Text("%Garden%".into())]
        );
    }

    #[test]
    fn test_count_ignores_order_and_columns() {
        let (sql, params) = QueryBuilder::new("posts")
            .columns(&["id"])
            .where_not_null("title")
            .where_gt("upvotes", 10)
            .order_by("id", true)
            .build_count()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT COUNT(*) FROM posts WHERE title IS NOT NULL AND upvotes > ?"
        );
        assert_eq!(params, vec![BindValue::Int(10)]);
    }

    #[test]
    fn test_postgres_placeholders_count_bound_values_only() {
        let (sql, params) = QueryBuilder::new("posts")
            .dialect(Dialect::Postgres)
            .where_eq("author_id", 3)
            .where_null("deleted_at")
            .where_lt("downvotes", 50)
            .build_select()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM posts WHERE author_id = $1 AND deleted_at IS NULL AND downvotes < $2"
        );
        assert_eq!(params, vec![BindValue::Int(3), BindValue::Int(50)]);
    }

    #[test]
    fn test_values_keep_their_type() {
        let (_, params) = QueryBuilder::new("posts")
            .where_eq("title", "7")
            .where_eq("upvotes", 7)
            .where_not_eq("published", true)
            .where_gt("score", 0.5)
            .where_lt("title", String::from("m"))
            .build_count()
            .unwrap();
        assert_eq!(
            params,
            vec![
                BindValue::Text("7".into()),
                BindValue::Int(7),
                BindValue::Bool(true),
                BindValue::Float(0.5),
                BindValue::Text("m".into()),
            ]
        );
    }

    #[test]
    fn test_quoting() {
        let (sql, _) = QueryBuilder::new("blog.posts")
            .dialect(Dialect::MySql)
            .quote_identifiers(true)
            .columns(&["posts.*"])
            .where_not_eq("posts.title", "")
            .build_select()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT `posts`.* FROM `blog`.`posts` WHERE `posts`.`title` != ?"
        );
    }

    #[test]
    fn test_invalid_identifiers_rejected() {
        let err = QueryBuilder::new("posts;drop").build_count().unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidIdentifier {
                kind: "table",
                ident: "posts;drop".into()
            }
        );

        let err = QueryBuilder::new("posts")
            .order_by("id desc", true)
            .build_select()
            .unwrap_err();
        assert!(matches!(err, QueryError::InvalidIdentifier { kind: "column", .. }));

        assert!(QueryBuilder::new("*").build_select().is_err());
        assert!(QueryBuilder::new("").build_select().is_err());
        assert!(QueryBuilder::new("posts")
            .columns(&["*.id"])
            .build_select()
            .is_err());
    }
}
