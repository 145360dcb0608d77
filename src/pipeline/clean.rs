// src/pipeline/clean.rs

//! Link removal pipeline.
//!
//! Drives the full run: load the removal list, open the audit log, walk
//! the store page by page, classify and rewrite each post, persist only
//! changed posts, and report a summary. Strictly sequential: one probe
//! and one persist in flight at a time.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::audit::AuditLog;
use crate::error::{AppError, Result};
use crate::models::{Blacklist, Classification, Config};
use crate::pipeline::BatchCursor;
use crate::services::{LinkCleaner, ReachabilityProbe};
use crate::storage::PostStore;

/// Summary of a removal run.
#[derive(Debug, Clone)]
pub struct CleanStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    /// Published-post count snapshot taken at run start
    pub total_posts: u64,

    /// Posts pulled through the cursor
    pub processed: u64,

    /// Posts whose content changed and was persisted
    pub rewritten: u64,

    /// Links removed because they were on the removal list
    pub removed_blacklisted: u64,

    /// Links removed because the probe rejected them
    pub removed_unreachable: u64,

    /// Posts whose update failed (run continued)
    pub persist_failures: u64,
}

/// Run the link cleaner over every published post.
///
/// `removal_list` must name a readable file of URLs (one per line); the
/// run aborts before touching the store if it does not. The audit log at
/// `log_path` is created up front and receives one line per removal,
/// written before the corresponding persist, so a crash can leave an
/// over-logged post but never an unlogged mutation.
pub async fn run_cleaner(
    config: &Config,
    store: &dyn PostStore,
    probe: Arc<dyn ReachabilityProbe>,
    removal_list: &Path,
    log_path: &Path,
) -> Result<CleanStats> {
    let start_time = Utc::now();

    // Init: fail fast before any store access.
    if !removal_list.is_file() {
        return Err(AppError::input(
            removal_list.display().to_string(),
            "file not found or not readable",
        ));
    }

    // Loading: removal list and audit log.
    let blacklist = Blacklist::load(removal_list)?;
    log::info!(
        "Loaded {} URLs to remove from {}",
        blacklist.len(),
        removal_list.display()
    );

    let mut audit = AuditLog::create(log_path).await?;
    log::info!("Audit log: {}", log_path.display());

    let cleaner = LinkCleaner::new(blacklist, probe);

    // Processing.
    let total_posts = store.count_published().await?;
    log::info!("Processing {} published posts", total_posts);

    let mut stats = CleanStats {
        start_time,
        end_time: start_time,
        total_posts,
        processed: 0,
        rewritten: 0,
        removed_blacklisted: 0,
        removed_unreachable: 0,
        persist_failures: 0,
    };

    let delay = Duration::from_millis(config.batch.page_delay_ms);
    let mut cursor = BatchCursor::new(store, config.batch.page_size);

    loop {
        let page = cursor.next_page().await?;
        if page.is_empty() {
            break;
        }

        for post in &page {
            let outcome = cleaner.process(&post.content, post.id).await;

            // Log every removal before mutating the post.
            for removal in &outcome.removals {
                audit.append(&removal.audit_line()).await?;
                match removal.reason {
                    Classification::RemoveBlacklisted => stats.removed_blacklisted += 1,
                    Classification::RemoveUnreachable => stats.removed_unreachable += 1,
                    Classification::Keep => unreachable!("kept links are never removals"),
                }
            }

            if outcome.changed {
                match store.update_content(post.id, &outcome.content).await {
                    Ok(()) => {
                        stats.rewritten += 1;
                        if let Err(e) = store.invalidate_cache(post.id).await {
                            log::warn!("Cache invalidation failed for post {}: {}", post.id, e);
                        }
                    }
                    Err(e) => {
                        // A single bad row must not abort the batch.
                        log::error!("Failed to persist post {}: {}", post.id, e);
                        stats.persist_failures += 1;
                    }
                }
            }
            stats.processed += 1;
        }

        if config.logging.show_progress {
            log::info!("Processed {}/{} posts", stats.processed, stats.total_posts);
        }

        // Cooperative pause between pages to bound load on the store.
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    // Finished.
    stats.end_time = Utc::now();
    log::info!(
        "Finished removing unreachable links from posts: {} rewritten, {} links removed ({} blacklisted, {} unreachable), {} persist failures",
        stats.rewritten,
        stats.removed_blacklisted + stats.removed_unreachable,
        stats.removed_blacklisted,
        stats.removed_unreachable,
        stats.persist_failures,
    );

    Ok(stats)
}
