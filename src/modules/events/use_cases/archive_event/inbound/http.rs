use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::events::core::event::{Event, EventId};
use crate::shell::http::not_found;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ArchiveEventResponse {
    pub message: &'static str,
    pub event: Event,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let Ok(id) = id.parse::<EventId>() else {
        return not_found();
    };

    match state.archive_handler.handle(id).await {
        Ok(event) => Json(ArchiveEventResponse {
            message: "Event archived.",
            event,
        })
        .into_response(),
        Err(error) => error.into_response(),
    }
}
