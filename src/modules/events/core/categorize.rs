use crate::modules::events::core::category::Category;

pub const WORK_KEYWORDS: &[&str] = &["meeting", "project", "client", "deadline", "presentation"];

pub const PERSONAL_KEYWORDS: &[&str] = &["birthday", "family", "anniversary", "party", "holiday"];

/// Assigns a category from the event's title and notes.
///
/// Matching is a case-insensitive substring test, so a keyword inside a longer
/// word still counts. Work keywords win over personal ones.
pub fn categorize(title: &str, notes: &str) -> Category {
    let text = format!("{title} {notes}").to_lowercase();

    if WORK_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return Category::Work;
    }
    if PERSONAL_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return Category::Personal;
    }
    Category::Other
}
