// src/services/cleaner.rs

//! Link classification and content rewriting.
//!
//! Scans post content for anchor links, classifies each one against the
//! blacklist and a reachability probe, and rewrites the content replacing
//! removed-link markup with the link's visible text.

use std::sync::Arc;

use regex::Regex;

use crate::models::{Blacklist, Classification, LinkOccurrence, Removal};
use crate::services::reachability::{ReachabilityProbe, is_reachable};

/// Anchor pattern: opening tag with a single- or double-quoted href,
/// non-greedy inner text, matching closing tag. Case-insensitive.
/// Non-greedy inner text keeps multiple links in one post from being
/// merged into a single span. Unterminated anchors simply do not match.
const ANCHOR_PATTERN: &str = r#"(?i)<a\s+[^>]*?href=(?:"([^"]*)"|'([^']*)')[^>]*>(.*?)</a>"#;

/// Result of cleaning one post's content.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    /// Rewritten content (identical to the input when nothing was removed)
    pub content: String,

    /// Whether the content differs byte-for-byte from the input
    pub changed: bool,

    /// One entry per stripped link, in document order
    pub removals: Vec<Removal>,
}

/// Service that classifies and strips links from post content.
pub struct LinkCleaner {
    pattern: Regex,
    blacklist: Blacklist,
    probe: Arc<dyn ReachabilityProbe>,
}

impl LinkCleaner {
    /// Create a cleaner over a loaded blacklist and a reachability probe.
    pub fn new(blacklist: Blacklist, probe: Arc<dyn ReachabilityProbe>) -> Self {
        let pattern = Regex::new(ANCHOR_PATTERN).expect("anchor pattern must compile");
        Self {
            pattern,
            blacklist,
            probe,
        }
    }

    /// Extract every anchor link occurrence from content, in document order.
    pub fn extract_links(&self, content: &str) -> Vec<LinkOccurrence> {
        self.pattern
            .captures_iter(content)
            .map(|caps| LinkOccurrence {
                full_markup: caps[0].to_string(),
                url: Self::href(&caps).to_string(),
                inner_text: caps[3].to_string(),
            })
            .collect()
    }

    /// Classify a single occurrence.
    ///
    /// Blacklist membership wins without touching the network; otherwise
    /// the probe decides. Probe failures classify as unreachable, they are
    /// not retried and never abort the run.
    pub async fn classify(&self, occurrence: &LinkOccurrence) -> Classification {
        if self.blacklist.contains(&occurrence.url) {
            return Classification::RemoveBlacklisted;
        }
        let result = self.probe.head(&occurrence.url).await;
        if is_reachable(&result) {
            Classification::Keep
        } else {
            Classification::RemoveUnreachable
        }
    }

    /// Classify every link in `content` and strip the removed ones.
    ///
    /// Single pass, each occurrence classified independently. Kept links
    /// stay byte-identical; removed links collapse to their inner text
    /// (empty inner text collapses to nothing). `changed` is an exact
    /// string comparison against the input, so a rewrite that happens to
    /// reproduce the original counts as unchanged.
    pub async fn process(&self, content: &str, post_id: u64) -> CleanOutcome {
        let mut rewritten = String::with_capacity(content.len());
        let mut removals = Vec::new();
        let mut last_end = 0;

        for caps in self.pattern.captures_iter(content) {
            let matched = caps.get(0).expect("group 0 always present");
            let occurrence = LinkOccurrence {
                full_markup: matched.as_str().to_string(),
                url: Self::href(&caps).to_string(),
                inner_text: caps[3].to_string(),
            };

            rewritten.push_str(&content[last_end..matched.start()]);
            let classification = self.classify(&occurrence).await;
            if classification.is_removal() {
                rewritten.push_str(&occurrence.inner_text);
                removals.push(Removal {
                    post_id,
                    url: occurrence.url,
                    reason: classification,
                });
            } else {
                rewritten.push_str(&occurrence.full_markup);
            }
            last_end = matched.end();
        }
        rewritten.push_str(&content[last_end..]);

        let changed = rewritten != content;
        CleanOutcome {
            content: rewritten,
            changed,
            removals,
        }
    }

    /// The href value from whichever quote style matched.
    fn href<'c>(caps: &'c regex::Captures<'_>) -> &'c str {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use async_trait::async_trait;

    use crate::error::{AppError, Result};

    /// Probe with canned answers per URL; unknown URLs error.
    struct FakeProbe {
        statuses: HashMap<String, u16>,
    }

    impl FakeProbe {
        fn new(entries: &[(&str, u16)]) -> Self {
            Self {
                statuses: entries
                    .iter()
                    .map(|(url, status)| (url.to_string(), *status))
                    .collect(),
            }
        }

        fn all_ok() -> Self {
            Self {
                statuses: HashMap::new(),
            }
        }
    }

    #[async_trait]
    impl ReachabilityProbe for FakeProbe {
        async fn head(&self, url: &str) -> Result<u16> {
            if self.statuses.is_empty() {
                return Ok(200);
            }
            self.statuses
                .get(url)
                .copied()
                .ok_or_else(|| AppError::store(format!("no route to {url}")))
        }
    }

    fn cleaner(blacklist: &[&str], probe: FakeProbe) -> LinkCleaner {
        LinkCleaner::new(Blacklist::from_lines(blacklist.iter().copied()), Arc::new(probe))
    }

    #[tokio::test]
    async fn test_no_links_unchanged() {
        let cleaner = cleaner(&[], FakeProbe::all_ok());
        let outcome = cleaner.process("plain text, no markup here", 1).await;
        assert!(!outcome.changed);
        assert_eq!(outcome.content, "plain text, no markup here");
        assert!(outcome.removals.is_empty());
    }

    #[tokio::test]
    async fn test_blacklisted_link_collapses_to_text() {
        let cleaner = cleaner(&["http://blacklisted.example"], FakeProbe::all_ok());
        let outcome = cleaner
            .process(r#"<a href="http://blacklisted.example">Text</a>"#, 42)
            .await;
        assert_eq!(outcome.content, "Text");
        assert!(outcome.changed);
        assert_eq!(outcome.removals.len(), 1);
        assert_eq!(outcome.removals[0].post_id, 42);
        assert_eq!(outcome.removals[0].url, "http://blacklisted.example");
        assert_eq!(outcome.removals[0].reason, Classification::RemoveBlacklisted);
    }

    #[tokio::test]
    async fn test_mixed_reachable_and_probe_error() {
        let probe = FakeProbe::new(&[("http://ok.example/a", 200)]);
        let cleaner = cleaner(&[], probe);
        let input = concat!(
            r#"see <a href="http://ok.example/a">good</a> and "#,
            r#"<a href="http://dead.example/b">bad</a> links"#,
        );
        let outcome = cleaner.process(input, 5).await;
        assert_eq!(
            outcome.content,
            r#"see <a href="http://ok.example/a">good</a> and bad links"#
        );
        assert_eq!(outcome.removals.len(), 1);
        assert_eq!(outcome.removals[0].url, "http://dead.example/b");
        assert_eq!(outcome.removals[0].reason, Classification::RemoveUnreachable);
    }

    #[tokio::test]
    async fn test_rejected_status_is_removed() {
        let probe = FakeProbe::new(&[("http://gone.example", 404)]);
        let cleaner = cleaner(&[], probe);
        let outcome = cleaner
            .process(r#"<a href="http://gone.example">old page</a>"#, 9)
            .await;
        assert_eq!(outcome.content, "old page");
        assert_eq!(outcome.removals[0].reason, Classification::RemoveUnreachable);
    }

    #[tokio::test]
    async fn test_redirect_statuses_kept() {
        let probe = FakeProbe::new(&[
            ("http://moved.example", 301),
            ("http://found.example", 302),
        ]);
        let cleaner = cleaner(&[], probe);
        let input = concat!(
            r#"<a href="http://moved.example">m</a>"#,
            r#"<a href="http://found.example">f</a>"#,
        );
        let outcome = cleaner.process(input, 3).await;
        assert!(!outcome.changed);
        assert_eq!(outcome.content, input);
    }

    #[tokio::test]
    async fn test_unclosed_anchor_untouched() {
        let cleaner = cleaner(&["http://x.com"], FakeProbe::all_ok());
        let input = r#"<a href="http://x.com">Unclosed"#;
        let outcome = cleaner.process(input, 2).await;
        assert!(!outcome.changed);
        assert_eq!(outcome.content, input);
        assert!(outcome.removals.is_empty());
    }

    #[tokio::test]
    async fn test_empty_inner_text_collapses_to_nothing() {
        let cleaner = cleaner(&["http://bad.example"], FakeProbe::all_ok());
        let outcome = cleaner
            .process(r#"before <a href="http://bad.example"></a> after"#, 6)
            .await;
        assert_eq!(outcome.content, "before  after");
        assert_eq!(outcome.removals.len(), 1);
    }

    #[tokio::test]
    async fn test_single_quoted_href_and_case_insensitive_tag() {
        let cleaner = cleaner(&["http://bad.example"], FakeProbe::all_ok());
        let outcome = cleaner
            .process("<A HREF='http://bad.example' class=\"x\">Shout</A>", 8)
            .await;
        assert_eq!(outcome.content, "Shout");
    }

    #[tokio::test]
    async fn test_idempotent_on_cleaned_content() {
        let cleaner = cleaner(&["http://bad.example"], FakeProbe::all_ok());
        let first = cleaner
            .process(r#"x <a href="http://bad.example">y</a> z"#, 11)
            .await;
        assert!(first.changed);
        let second = cleaner.process(&first.content, 11).await;
        assert!(!second.changed);
        assert_eq!(second.content, first.content);
        assert!(second.removals.is_empty());
    }

    #[tokio::test]
    async fn test_extract_links_in_document_order() {
        let cleaner = cleaner(&[], FakeProbe::all_ok());
        let links = cleaner.extract_links(concat!(
            r#"<a href="http://one.example">1</a> mid "#,
            r#"<a href='http://two.example'>2</a>"#,
        ));
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "http://one.example");
        assert_eq!(links[0].inner_text, "1");
        assert_eq!(links[1].url, "http://two.example");
        assert_eq!(links[1].full_markup, r#"<a href='http://two.example'>2</a>"#);
    }

    #[tokio::test]
    async fn test_blacklist_wins_without_probing() {
        // The probe would report 200; blacklist membership removes anyway.
        let probe = FakeProbe::new(&[("http://bad.example", 200)]);
        let cleaner = cleaner(&["http://bad.example"], probe);
        let outcome = cleaner
            .process(r#"<a href="http://bad.example">t</a>"#, 4)
            .await;
        assert_eq!(outcome.removals[0].reason, Classification::RemoveBlacklisted);
    }
}
