use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub archived: bool,
    pub category: String,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            date: e.date,
            time: e.time,
            notes: e.notes,
            archived: e.archived,
            category: e.category.to_string(),
        }
    }
}

#[derive(Default)]
pub struct EventsQuery;

#[Object]
impl EventsQuery {
    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .list_handler
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}
