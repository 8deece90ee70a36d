use crate::modules::events::adapters::outbound::event_store::{EventStore, EventStoreError};
use crate::modules::events::core::event::{Event, EventDraft, EventId};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Inner {
    events: BTreeMap<EventId, Event>,
    next_id: EventId,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            events: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Process-local store. Ids grow monotonically, so key order is insertion order.
#[derive(Default)]
pub struct InMemoryEventStore {
    inner: RwLock<Inner>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.events.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn insert(&self, draft: EventDraft) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let id = guard.next_id;
        guard.next_id += 1;
        let event = draft.into_event(id);
        guard.events.insert(id, event.clone());
        Ok(event)
    }

    async fn list_all(&self) -> Result<Vec<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.events.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.events.get(&id).cloned())
    }

    async fn archive(&self, id: EventId) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        Ok(guard.events.get_mut(&id).map(|event| {
            event.archived = true;
            event.clone()
        }))
    }

    async fn remove(&self, id: EventId) -> Result<bool, EventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.write().await.events.remove(&id).is_some())
    }
}
