//! Storage seam between batch operations and the wire client.

use async_trait::async_trait;
use projdesk_core::{Item, Result};

/// The item operations batch jobs need from the backend.
///
/// [`RestClient`](crate::RestClient) implements this against the hosted
/// service; tests implement it in memory. Keeping the purge logic behind
/// this trait means it never knows about HTTP.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Find items whose title contains the substring, case-insensitively.
    async fn find_items_by_title(&self, pattern: &str) -> Result<Vec<Item>>;

    /// Delete the artifact-link rows of an item, returning how many were
    /// removed.
    async fn delete_item_artifacts(&self, item_id: &str) -> Result<u64>;

    /// Delete an item row, returning how many rows were removed (0 or 1).
    async fn delete_item(&self, item_id: &str) -> Result<u64>;
}
