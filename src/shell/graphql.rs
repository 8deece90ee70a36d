use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::events::use_cases::archive_event::inbound::graphql::ArchiveEventMutation;
use crate::modules::events::use_cases::create_event::inbound::graphql::CreateEventMutation;
use crate::modules::events::use_cases::delete_event::inbound::graphql::DeleteEventMutation;
pub use crate::modules::events::use_cases::list_events::inbound::graphql::EventsQuery as QueryRoot;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateEventMutation, ArchiveEventMutation, DeleteEventMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
