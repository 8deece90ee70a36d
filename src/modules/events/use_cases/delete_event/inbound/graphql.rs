use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteEventMutation;

#[Object]
impl DeleteEventMutation {
    async fn delete_event(&self, context: &Context<'_>, id: u64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
