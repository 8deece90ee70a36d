/// Untrusted input for a new event, as it arrives at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateEvent {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub archived: bool,
}
