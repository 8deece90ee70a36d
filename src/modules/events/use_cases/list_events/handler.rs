use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::event::Event;
use crate::modules::events::errors::ApplicationError;
use std::sync::Arc;

pub struct ListEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> ListEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Every event, earliest first. Events scheduled for the same minute keep
    /// their creation order.
    pub async fn handle(&self) -> Result<Vec<Event>, ApplicationError> {
        let mut events = self.event_store.list_all().await?;
        sort_by_schedule(&mut events);
        Ok(events)
    }
}

pub fn sort_by_schedule(events: &mut [Event]) {
    // stable
    events.sort_by_key(Event::scheduled_at);
}
