// src/storage/mod.rs

//! Storage abstraction over the post store.
//!
//! The cleaner only needs four operations: a count of published posts for
//! progress reporting, paginated reads ordered by a stable key, a keyed
//! content update, and a cache invalidation hook. Everything else about
//! the storage engine is out of scope.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Post;

// Re-export for convenience
pub use local::LocalStore;

/// Trait for post store backends.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Count of published posts at this moment.
    ///
    /// A snapshot taken at run start; concurrent writers may change the
    /// real total afterwards.
    async fn count_published(&self) -> Result<u64>;

    /// One page of published posts ordered by ascending id.
    ///
    /// Returns an empty page when `offset` is past the end.
    async fn page(&self, offset: u64, limit: u64) -> Result<Vec<Post>>;

    /// Replace the content of one post.
    async fn update_content(&self, id: u64, content: &str) -> Result<()>;

    /// Invalidate any downstream cache of one post.
    async fn invalidate_cache(&self, id: u64) -> Result<()>;
}
