use crate::modules::events::adapters::outbound::event_store::EventStoreError;
use crate::modules::events::core::event::EventId;
use crate::modules::events::use_cases::create_event::decision::DecideError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] DecideError),

    #[error("Event not found.")]
    NotFound(EventId),

    #[error(transparent)]
    Store(#[from] EventStoreError),
}
