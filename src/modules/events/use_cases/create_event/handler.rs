use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::event::Event;
use crate::modules::events::errors::ApplicationError;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::create_event::decide::decide_create;
use crate::modules::events::use_cases::create_event::decision::Decision;
use std::sync::Arc;

pub struct CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        match decide_create(command) {
            Decision::Accepted { draft } => {
                let event = self.event_store.insert(draft).await?;
                tracing::info!(
                    event_id = event.id,
                    category = %event.category,
                    "event created"
                );
                Ok(event)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "event rejected");
                Err(ApplicationError::Validation(reason))
            }
        }
    }
}
