use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::event::EventId;
use crate::modules::events::errors::ApplicationError;
use std::sync::Arc;

pub struct DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, id: EventId) -> Result<(), ApplicationError> {
        if !self.event_store.remove(id).await? {
            return Err(ApplicationError::NotFound(id));
        }
        tracing::info!(event_id = id, "event deleted");
        Ok(())
    }
}
