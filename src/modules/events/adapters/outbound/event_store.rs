// Port between the use case handlers and whatever keeps the events.
//
// Ids are assigned by the store from a counter that never goes backwards, so
// a deleted id is never handed out again.

use crate::modules::events::core::event::{Event, EventDraft, EventId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn insert(&self, draft: EventDraft) -> Result<Event, EventStoreError>;

    /// All events in insertion order.
    async fn list_all(&self) -> Result<Vec<Event>, EventStoreError>;

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventStoreError>;

    /// Marks the event archived. Archiving twice is not an error.
    async fn archive(&self, id: EventId) -> Result<Option<Event>, EventStoreError>;

    /// Returns `false` when there was nothing to remove.
    async fn remove(&self, id: EventId) -> Result<bool, EventStoreError>;
}
