use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::use_cases::list_events::inbound::graphql::GqlEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ArchiveEventMutation;

#[Object]
impl ArchiveEventMutation {
    async fn archive_event(&self, context: &Context<'_>, id: u64) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .archive_handler
            .handle(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(event.into())
    }
}
