/*
 * Responsibility
 * - POST /api/v1/authorize
 * - gateway の authorizer event を受け、policy document をそのまま返す
 * - Deny も正常な判定なので常に 200 (理由は返さない)
 */
use axum::{Json, extract::State};

use crate::api::v1::dto::authorizer_event::AuthorizerEvent;
use crate::services::auth::AuthResponse;
use crate::state::AppState;

pub async fn authorize(
    State(state): State<AppState>,
    Json(event): Json<AuthorizerEvent>,
) -> Json<AuthResponse> {
    tracing::info!(
        kind = event.kind.as_deref().unwrap_or("TOKEN"),
        resource = event.method_arn.as_deref().unwrap_or("-"),
        "authorizer event received"
    );

    Json(state.authorizer.authorize(&event.into_request()))
}
