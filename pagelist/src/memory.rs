//! In-memory [`QueryableSource`] implementations.
//!
//! Slices and `Vec`s page over their current contents. [`MemorySource`] is a
//! shared, mutable store for cases where items are added while pages are
//! being read (test fixtures, caches filled by a background task).

use crate::error::DataError;
use crate::source::QueryableSource;
use std::future::{ready, Future};
use std::sync::Arc;
use tokio::sync::RwLock;

fn window<T: Clone>(items: &[T], offset: u64, limit: u64) -> Vec<T> {
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(items.len());
    let take = usize::try_from(limit).unwrap_or(usize::MAX);
    items[start..].iter().take(take).cloned().collect()
}

impl<T: Clone + Send + Sync> QueryableSource for [T] {
    type Item = T;

    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send {
        ready(Ok(self.len() as u64))
    }

    fn range_at(
        &self,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<T>, DataError>> + Send {
        ready(Ok(window(self, offset, limit)))
    }
}

impl<T: Clone + Send + Sync> QueryableSource for Vec<T> {
    type Item = T;

    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send {
        self.as_slice().count()
    }

    fn range_at(
        &self,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<T>, DataError>> + Send {
        self.as_slice().range_at(offset, limit)
    }
}

/// A cloneable handle to a shared, growable list of items.
///
/// Clones share the same storage. `count` and `range_at` each take the read
/// lock on their own, so a write landing between them is visible to the
/// second read only.
///
/// # Example
///
/// ```ignore
/// let store = MemorySource::new();
/// store.extend(posts).await;
/// let page = store.paginate(1, 15).await?;
/// ```
#[derive(Debug)]
pub struct MemorySource<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> MemorySource<T> {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Append an item at the end of the sequence.
    pub async fn push(&self, item: T) {
        self.items.write().await.push(item);
    }

    pub async fn extend(&self, items: impl IntoIterator<Item = T>) {
        self.items.write().await.extend(items);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Copy of the current contents.
    pub async fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.read().await.clone()
    }
}

impl<T> Default for MemorySource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemorySource<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> From<Vec<T>> for MemorySource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Clone + Send + Sync> QueryableSource for MemorySource<T> {
    type Item = T;

    async fn count(&self) -> Result<u64, DataError> {
        Ok(self.items.read().await.len() as u64)
    }

    async fn range_at(&self, offset: u64, limit: u64) -> Result<Vec<T>, DataError> {
        let items = self.items.read().await;
        Ok(window(&items, offset, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamps_offset() {
        let items = [1, 2, 3];
        assert_eq!(window(&items, 1, 10), vec![2, 3]);
        assert_eq!(window(&items, 3, 10), Vec::<i32>::new());
        assert_eq!(window(&items, u64::MAX, u64::MAX), Vec::<i32>::new());
    }

    #[test]
    fn test_window_zero_limit() {
        assert!(window(&[1, 2, 3], 0, 0).is_empty());
    }

    #[tokio::test]
    async fn test_memory_source_clones_share_storage() {
        let store = MemorySource::from_vec(vec![1, 2]);
        let other = store.clone();
        other.push(3).await;
        assert_eq!(store.count().await.unwrap(), 3);
        assert_eq!(store.snapshot().await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_slice_range_in_order() {
        let items = vec!["a", "b", "c", "d"];
        assert_eq!(items.range_at(1, 2).await.unwrap(), vec!["b", "c"]);
        assert_eq!(items.count().await.unwrap(), 4);
    }
}
