//! Local JSON-file post store.
//!
//! Holds the whole post table in a single `posts.json` file for
//! development and testing. Production deployments should wire a real
//! database behind the `PostStore` trait.
//!
//! The file is re-read on every page so edits by concurrent writers are
//! visible mid-run, matching the cursor's best-effort semantics. Updates
//! rewrite the file atomically (write to temp, then rename).

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::Post;
use crate::storage::PostStore;

/// File name holding the post table under the store root.
const POSTS_FILE: &str = "posts.json";

/// Local filesystem post store backend.
#[derive(Clone)]
pub struct LocalStore {
    root_dir: PathBuf,
}

impl LocalStore {
    /// Create a new LocalStore rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    fn posts_path(&self) -> PathBuf {
        self.root_dir.join(POSTS_FILE)
    }

    /// Read the full post table. A missing file is an empty table.
    async fn read_posts(&self) -> Result<Vec<Post>> {
        match tokio::fs::read(self.posts_path()).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Write the full post table atomically (write to temp, then rename).
    async fn write_posts(&self, posts: &[Post]) -> Result<()> {
        let path = self.posts_path();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(posts)?;
        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Seed the store with an initial post table.
    pub async fn seed(&self, posts: &[Post]) -> Result<()> {
        self.write_posts(posts).await
    }
}

#[async_trait]
impl PostStore for LocalStore {
    async fn count_published(&self) -> Result<u64> {
        let posts = self.read_posts().await?;
        Ok(posts.iter().filter(|p| p.is_published()).count() as u64)
    }

    async fn page(&self, offset: u64, limit: u64) -> Result<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .read_posts()
            .await?
            .into_iter()
            .filter(|p| p.is_published())
            .collect();
        posts.sort_by_key(|p| p.id);

        Ok(posts
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn update_content(&self, id: u64, content: &str) -> Result<()> {
        let mut posts = self.read_posts().await?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::store(format!("no post with id {id}")))?;
        post.content = content.to_string();
        self.write_posts(&posts).await
    }

    async fn invalidate_cache(&self, id: u64) -> Result<()> {
        // Nothing caches LocalStore reads; real backends hook their cache here.
        log::debug!("cache invalidated for post {id}");
        Ok(())
    }
}
