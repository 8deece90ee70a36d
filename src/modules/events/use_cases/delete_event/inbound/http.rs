use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::events::core::event::EventId;
use crate::shell::http::not_found;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteEventResponse {
    pub message: &'static str,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let Ok(id) = id.parse::<EventId>() else {
        return not_found();
    };

    match state.delete_handler.handle(id).await {
        Ok(()) => Json(DeleteEventResponse {
            message: "Event deleted.",
        })
        .into_response(),
        Err(error) => error.into_response(),
    }
}
