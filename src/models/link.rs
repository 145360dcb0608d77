//! Transient link parse and classification types.

/// One anchor link discovered in a post's content.
///
/// Per-post parse result; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOccurrence {
    /// The full matched markup, from `<a` through `</a>`
    pub full_markup: String,

    /// The href target
    pub url: String,

    /// Visible text between the tags (may be empty)
    pub inner_text: String,
}

/// Decision for a single link occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Leave the markup untouched
    Keep,

    /// URL is on the removal list
    RemoveBlacklisted,

    /// Reachability probe failed or returned a rejected status
    RemoveUnreachable,
}

impl Classification {
    /// Whether this classification strips the link markup.
    pub fn is_removal(self) -> bool {
        !matches!(self, Classification::Keep)
    }
}

/// Record of one stripped link, emitted for the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// Post the link was removed from
    pub post_id: u64,

    /// The removed URL
    pub url: String,

    /// Why the link was removed (never `Keep`)
    pub reason: Classification,
}

impl Removal {
    /// Format the audit log line for this removal.
    pub fn audit_line(&self) -> String {
        format!("Removed URL in Post ID {}: {}", self.post_id, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_line_format() {
        let removal = Removal {
            post_id: 42,
            url: "http://bad.example".to_string(),
            reason: Classification::RemoveBlacklisted,
        };
        assert_eq!(
            removal.audit_line(),
            "Removed URL in Post ID 42: http://bad.example"
        );
    }

    #[test]
    fn test_is_removal() {
        assert!(!Classification::Keep.is_removal());
        assert!(Classification::RemoveBlacklisted.is_removal());
        assert!(Classification::RemoveUnreachable.is_removal());
    }
}
