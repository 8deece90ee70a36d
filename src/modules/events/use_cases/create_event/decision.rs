use crate::modules::events::core::event::EventDraft;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Title is required and must be a non-empty string.")]
    InvalidTitle,

    #[error("Date is required and must be valid.")]
    InvalidDate,

    #[error("Time is required and must be in HH:MM format.")]
    InvalidTime,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { draft: EventDraft },
    Rejected { reason: DecideError },
}
