//! Post data structure.

use serde::{Deserialize, Serialize};

/// A post row from the backing store.
///
/// The store owns the post; the cleaner holds a transient copy for one
/// processing step and never retains it after persisting or discarding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Unique, stable post identifier
    pub id: u64,

    /// Publication status (only "publish" posts are processed)
    #[serde(default = "default_status")]
    pub status: String,

    /// Raw post content
    pub content: String,
}

fn default_status() -> String {
    "publish".to_string()
}

impl Post {
    /// Whether this post is published and eligible for processing.
    pub fn is_published(&self) -> bool {
        self.status == "publish"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_published() {
        let post = Post {
            id: 1,
            status: "publish".to_string(),
            content: "hello".to_string(),
        };
        assert!(post.is_published());

        let draft = Post {
            status: "draft".to_string(),
            ..post
        };
        assert!(!draft.is_published());
    }

    #[test]
    fn test_status_defaults_to_publish() {
        let post: Post = serde_json::from_str(r#"{"id": 7, "content": "x"}"#).unwrap();
        assert!(post.is_published());
    }
}
