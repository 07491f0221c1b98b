use pagelist::DataError;

/// Maps `sqlx::Error` onto [`DataError::SourceUnavailable`].
///
/// Every sqlx failure (connection, pool, statement or decode) means the page
/// cannot be read, so all of them map to the same variant with the sqlx
/// error kept as the cause.
pub trait SqlxErrorExt {
    fn into_data_error(self) -> DataError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_data_error(self) -> DataError {
        DataError::unavailable(self)
    }
}
