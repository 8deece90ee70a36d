use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::list_events::inbound::graphql::GqlEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateEventMutation;

#[Object]
impl CreateEventMutation {
    async fn create_event(
        &self,
        context: &Context<'_>,
        title: String,
        date: String,
        time: String,
        notes: Option<String>,
        archived: Option<bool>,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();

        let command = CreateEvent {
            title: Some(title),
            date: Some(date),
            time: Some(time),
            notes,
            archived: archived.unwrap_or(false),
        };

        let event = state
            .create_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(event.into())
    }
}
