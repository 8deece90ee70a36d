use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::events::errors::ApplicationError;
use crate::modules::events::use_cases::archive_event::inbound::http as archive_http;
use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

pub fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Event not found.")
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Validation(reason) => bad_request(reason.to_string()),
            ApplicationError::NotFound(_) => not_found(),
            ApplicationError::Store(error) => {
                tracing::error!(%error, "event store failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/events", get(list_http::handle).post(create_http::handle))
        .route(
            "/events/{id}",
            put(archive_http::handle).delete(delete_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .with_state(state)
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
