use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use nope_app::ProxyReply;

use crate::web::WebState;

/// `GET /api/nope`: forward to the upstream API.
pub async fn nope_handler(State(state): State<WebState>) -> impl IntoResponse {
    let reply = state.proxy.execute().await;
    let status = match reply {
        ProxyReply::Passthrough(_) => StatusCode::OK,
        ProxyReply::Failed => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(reply.into_body()))
}
