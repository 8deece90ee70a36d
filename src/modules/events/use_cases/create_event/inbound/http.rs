use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Map, Value};

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shell::http::bad_request;
use crate::shell::state::AppState;

/// Only a JSON object is accepted. Its fields are read loosely so a wrong
/// type is reported against the field itself instead of as a malformed body.
#[derive(Debug, Default)]
pub struct CreateEventBody(pub Map<String, Value>);

impl From<CreateEventBody> for CreateEvent {
    fn from(CreateEventBody(mut fields): CreateEventBody) -> Self {
        Self {
            title: take_text(&mut fields, "title"),
            date: take_text(&mut fields, "date"),
            time: take_text(&mut fields, "time"),
            notes: take_text(&mut fields, "notes"),
            archived: fields.get("archived") == Some(&Value::Bool(true)),
        }
    }
}

fn take_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> impl IntoResponse {
    let Json(fields) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(%rejection, "create event body rejected");
            return bad_request("Request body must be a JSON object.");
        }
    };

    let command = CreateEventBody(fields).into();
    match state.create_handler.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(error) => error.into_response(),
    }
}
