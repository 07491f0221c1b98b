/// A table-backed row type that [`SqlxSource::for_entity`](crate::SqlxSource) can page over.
///
/// # Example
///
/// ```ignore
/// impl Entity for Post {
///     fn table_name() -> &'static str { "posts" }
///     fn id_column() -> &'static str { "id" }
///     fn columns() -> &'static [&'static str] { &["id", "title", "content"] }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    fn table_name() -> &'static str;
    /// Column giving the entity its stable order.
    fn id_column() -> &'static str;
    fn columns() -> &'static [&'static str];
}
