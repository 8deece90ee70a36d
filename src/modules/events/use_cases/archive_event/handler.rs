use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::errors::ApplicationError;
use std::sync::Arc;

pub struct ArchiveEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> ArchiveEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, id: EventId) -> Result<Event, ApplicationError> {
        match self.event_store.archive(id).await? {
            Some(event) => {
                tracing::info!(event_id = id, "event archived");
                Ok(event)
            }
            None => Err(ApplicationError::NotFound(id)),
        }
    }
}
