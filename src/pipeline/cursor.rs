// src/pipeline/cursor.rs

//! Paginated cursor over the post store.

use crate::error::Result;
use crate::models::Post;
use crate::storage::PostStore;

/// Fixed-size page iterator over published posts.
///
/// Pages are ordered by ascending id and fetched with a monotonically
/// increasing offset, so the whole store is never held in memory. The
/// offset advances by the full page size after every non-empty page,
/// mirroring the backing query's LIMIT/OFFSET semantics.
///
/// Best-effort under concurrent writers: rows deleted behind the offset
/// shift later rows forward and may be skipped, and rows inserted behind
/// it may be missed. This is a documented limitation of offset
/// pagination, accepted by design.
pub struct BatchCursor<'a> {
    store: &'a dyn PostStore,
    offset: u64,
    page_size: u64,
    done: bool,
}

impl<'a> BatchCursor<'a> {
    /// Create a cursor with the given page size (must be > 0).
    pub fn new(store: &'a dyn PostStore, page_size: u64) -> Self {
        Self {
            store,
            offset: 0,
            page_size,
            done: false,
        }
    }

    /// Fetch the next page. An empty page signals completion and the
    /// cursor stays exhausted afterwards.
    pub async fn next_page(&mut self) -> Result<Vec<Post>> {
        if self.done {
            return Ok(Vec::new());
        }

        let page = self.store.page(self.offset, self.page_size).await?;
        if page.is_empty() {
            self.done = true;
        } else {
            self.offset += self.page_size;
        }
        Ok(page)
    }

    /// Current read offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}
