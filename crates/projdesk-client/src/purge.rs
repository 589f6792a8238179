//! Title-based purge of leftover items.
//!
//! One-off maintenance operation: search the items table for titles
//! containing known junk substrings and delete every match together with its
//! artifact-link rows. Deletions run strictly sequentially, one target row
//! at a time, with no parallelism and no rollback. A failure deleting one
//! row is logged and skipped, and processing continues with the next; the
//! operation itself never fails.

use crate::store::ItemStore;
use log::{error, info};

/// Title substrings the maintenance run searches for. The list is ad hoc:
/// it names the junk that has been observed in production, nothing more.
pub const DEFAULT_PURGE_PATTERNS: [&str; 3] = ["test item", "demo task", "lorem ipsum"];

/// Outcome of a purge run, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeReport {
    /// Patterns searched (including those with zero matches).
    pub patterns_searched: usize,
    /// Items matched across all patterns.
    pub items_matched: usize,
    /// Items actually deleted (artifact links and item row).
    pub items_deleted: usize,
    /// Failed searches plus failed per-item deletions.
    pub failures: usize,
}

/// Delete every item whose title contains one of the patterns,
/// case-insensitively, along with its artifact-link rows.
///
/// Per match the artifact links are deleted first, then the item row, so a
/// partial failure never leaves an item without its links. Every failure is
/// logged and skipped; the report carries the tallies.
pub async fn purge_titles<S: ItemStore + ?Sized>(store: &S, patterns: &[&str]) -> PurgeReport {
    let mut report = PurgeReport::default();

    for pattern in patterns {
        report.patterns_searched += 1;
        info!("searching items with title matching '{pattern}'");

        let matches = match store.find_items_by_title(pattern).await {
            Ok(matches) => matches,
            Err(e) => {
                error!("search for '{pattern}' failed, skipping pattern: {e}");
                report.failures += 1;
                continue;
            }
        };

        if matches.is_empty() {
            info!("no items match '{pattern}'");
            continue;
        }

        for item in matches {
            report.items_matched += 1;

            if let Err(e) = store.delete_item_artifacts(&item.id).await {
                error!(
                    "failed to delete artifact links of '{}' ({}), skipping item: {e}",
                    item.title, item.id
                );
                report.failures += 1;
                continue;
            }

            match store.delete_item(&item.id).await {
                Ok(_) => {
                    report.items_deleted += 1;
                    info!("deleted item '{}' ({})", item.title, item.id);
                }
                Err(e) => {
                    error!("failed to delete item '{}' ({}): {e}", item.title, item.id);
                    report.failures += 1;
                }
            }
        }
    }

    info!(
        "purge finished: {} pattern(s), {} matched, {} deleted, {} failure(s)",
        report.patterns_searched, report.items_matched, report.items_deleted, report.failures
    );
    report
}
