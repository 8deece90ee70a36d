// Shared test fixture for the CreateEvent command.

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventDto {
    pub title: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        let dto: CreateEventDto =
            serde_json::from_str(include_str!("json/create_event.json")).unwrap();

        Self {
            inner: CreateEvent {
                title: Some(dto.title),
                date: Some(dto.date),
                time: Some(dto.time),
                notes: Some(dto.notes),
                archived: false,
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = Some(v.into());
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = Some(v.into());
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = Some(v.into());
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn no_notes(mut self) -> Self {
        self.inner.notes = None;
        self
    }

    pub fn archived(mut self, v: bool) -> Self {
        self.inner.archived = v;
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}

#[cfg(test)]
mod create_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateEventBuilder::default().build();
        assert_eq!(built.title.as_deref(), Some("Client meeting"));
        assert_eq!(built.date.as_deref(), Some("2025-01-01"));
        assert_eq!(built.time.as_deref(), Some("10:00"));
        assert_eq!(built.notes.as_deref(), Some("Quarterly review"));
        assert!(!built.archived);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CreateEventBuilder::new()
            .title("Gym")
            .date("2025-06-01")
            .time("7:15")
            .notes("legs")
            .archived(true)
            .build();

        assert_eq!(custom.title.as_deref(), Some("Gym"));
        assert_eq!(custom.date.as_deref(), Some("2025-06-01"));
        assert_eq!(custom.time.as_deref(), Some("7:15"));
        assert_eq!(custom.notes.as_deref(), Some("legs"));
        assert!(custom.archived);
    }
}
