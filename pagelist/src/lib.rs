//! # pagelist: pages over any ordered source
//!
//! [`PagedList::create`] reads a total count and one window from a
//! [`QueryableSource`] and returns the page with its navigation metadata.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PagedList`] | One page of items plus `total_count`, `has_previous_page`, `has_next_page` |
//! | [`QueryableSource`] | Async count + ranged read, implemented by backends |
//! | [`MemorySource`] | Shared in-memory source; slices and `Vec`s are sources too |
//! | [`PageRequest`] | Page number and size as supplied by a caller |
//! | [`PagingConfig`] | Default page size, loaded from YAML |
//!
//! ```ignore
//! use pagelist::prelude::*;
//!
//! let page = PagedList::create(&source, 2, 30).await?;
//! if page.has_next_page() {
//!     // link to page 3
//! }
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod page;
pub mod source;

pub use config::PagingConfig;
pub use error::{ConfigError, DataError};
pub use memory::MemorySource;
pub use page::{PageRequest, PagedList};
pub use source::{QueryableSource, QueryableSourceExt};

pub mod prelude {
    //! Re-exports of the most commonly used paging types.
    pub use crate::{
        DataError, MemorySource, PageRequest, PagedList, QueryableSource, QueryableSourceExt,
    };
}
