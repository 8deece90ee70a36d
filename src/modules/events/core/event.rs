use crate::modules::events::core::category::Category;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

pub type EventId = u64;

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid time pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub archived: bool,
    pub category: Category,
}

impl Event {
    /// Date and time combined, used to order the listing.
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        let date = parse_event_date(&self.date)?;
        let time = parse_event_time(&self.time)?;
        Some(date.and_time(time))
    }
}

/// A validated event that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub archived: bool,
    pub category: Category,
}

impl EventDraft {
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            notes: self.notes,
            archived: self.archived,
            category: self.category,
        }
    }
}

/// Accepts a plain calendar date, a local date-time, or an RFC 3339 timestamp.
pub fn parse_event_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(value, format) {
            return Some(date_time.date());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|date_time| date_time.date_naive())
}

/// `H:MM` or `HH:MM` on a 24 hour clock.
pub fn parse_event_time(value: &str) -> Option<NaiveTime> {
    let captures = TIME_PATTERN.captures(value)?;
    let hour = captures[1].parse::<u32>().ok()?;
    let minute = captures[2].parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
