use crate::modules::events::core::categorize::categorize;
use crate::modules::events::core::event::{EventDraft, parse_event_date, parse_event_time};
use crate::modules::events::use_cases::create_event::{
    command::CreateEvent,
    decision::{DecideError, Decision},
};

/// Validates title, then date, then time. The first failure wins.
pub fn decide_create(command: CreateEvent) -> Decision {
    let title = match command.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => {
            return Decision::Rejected {
                reason: DecideError::InvalidTitle,
            };
        }
    };

    let date = match command.date.as_deref().map(str::trim) {
        Some(date) if parse_event_date(date).is_some() => date.to_string(),
        _ => {
            return Decision::Rejected {
                reason: DecideError::InvalidDate,
            };
        }
    };

    let time = match command.time {
        Some(time) if parse_event_time(&time).is_some() => time,
        _ => {
            return Decision::Rejected {
                reason: DecideError::InvalidTime,
            };
        }
    };

    let notes = command.notes.unwrap_or_default();
    let category = categorize(&title, &notes);

    Decision::Accepted {
        draft: EventDraft {
            title,
            date,
            time,
            notes,
            archived: command.archived,
            category,
        },
    }
}
