use crate::error::DataError;
use crate::page::{PageRequest, PagedList};
use std::future::Future;
use std::sync::Arc;

/// An ordered, countable collection that can hand out contiguous windows.
///
/// Implementors define the order; callers never re-sort what they get back.
/// Uses RPITIT (return-position `impl Trait` in traits), no `async-trait` needed.
///
/// # Example
///
/// ```ignore
/// impl QueryableSource for PostStore {
///     type Item = Post;
///
///     async fn count(&self) -> Result<u64, DataError> {
///         Ok(self.client.count_posts().await.map_err(DataError::unavailable)?)
///     }
///
///     async fn range_at(&self, offset: u64, limit: u64) -> Result<Vec<Post>, DataError> {
///         self.client.posts(offset, limit).await.map_err(DataError::unavailable)
///     }
/// }
/// ```
pub trait QueryableSource: Send + Sync {
    type Item: Send;

    /// Total number of items in the source.
    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send;

    /// Up to `limit` items starting at `offset`, in source order.
    ///
    /// An `offset` past the end yields an empty list, as does `limit == 0`.
    fn range_at(
        &self,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Self::Item>, DataError>> + Send;
}

impl<S: QueryableSource + ?Sized> QueryableSource for &S {
    type Item = S::Item;

    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send {
        (**self).count()
    }

    fn range_at(
        &self,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Self::Item>, DataError>> + Send {
        (**self).range_at(offset, limit)
    }
}

impl<S: QueryableSource + ?Sized> QueryableSource for Arc<S> {
    type Item = S::Item;

    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send {
        (**self).count()
    }

    fn range_at(
        &self,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Self::Item>, DataError>> + Send {
        (**self).range_at(offset, limit)
    }
}

impl<S: QueryableSource + ?Sized> QueryableSource for Box<S> {
    type Item = S::Item;

    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send {
        (**self).count()
    }

    fn range_at(
        &self,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Self::Item>, DataError>> + Send {
        (**self).range_at(offset, limit)
    }
}

/// Pagination shortcuts available on every [`QueryableSource`].
pub trait QueryableSourceExt: QueryableSource {
    /// Build the page `page_number` of `page_size` items from this source.
    fn paginate(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> impl Future<Output = Result<PagedList<Self::Item>, DataError>> + Send {
        PagedList::create(self, page_number, page_size)
    }

    /// Build the page described by `request` from this source.
    fn paginate_request(
        &self,
        request: &PageRequest,
    ) -> impl Future<Output = Result<PagedList<Self::Item>, DataError>> + Send {
        PagedList::create(self, request.page, request.size)
    }
}

impl<S: QueryableSource + ?Sized> QueryableSourceExt for S {}
