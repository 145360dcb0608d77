//! Blacklist of URLs marked for unconditional removal.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

/// Set of URLs to remove regardless of reachability.
///
/// Loaded once per run and immutable afterwards. Membership is an
/// exact-string, case-sensitive match.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    urls: HashSet<String>,
}

impl Blacklist {
    /// Load a blacklist from a text file: one URL per line, lines trimmed,
    /// blank lines ignored.
    ///
    /// Fails if the file is missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::input(path.display().to_string(), e))?;
        Ok(Self::from_lines(content.lines()))
    }

    /// Build a blacklist from an iterator of lines.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let urls = lines
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { urls }
    }

    /// Exact membership test.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Number of blacklisted URLs.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the blacklist is empty.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
