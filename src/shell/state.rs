use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::use_cases::archive_event::handler::ArchiveEventHandler;
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateEventHandler<InMemoryEventStore>>,
    pub list_handler: Arc<ListEventsHandler<InMemoryEventStore>>,
    pub archive_handler: Arc<ArchiveEventHandler<InMemoryEventStore>>,
    pub delete_handler: Arc<DeleteEventHandler<InMemoryEventStore>>,
}

impl AppState {
    /// All handlers share the one store instance.
    pub fn new(event_store: Arc<InMemoryEventStore>) -> Self {
        Self {
            create_handler: Arc::new(CreateEventHandler::new(event_store.clone())),
            list_handler: Arc::new(ListEventsHandler::new(event_store.clone())),
            archive_handler: Arc::new(ArchiveEventHandler::new(event_store.clone())),
            delete_handler: Arc::new(DeleteEventHandler::new(event_store)),
        }
    }
}
