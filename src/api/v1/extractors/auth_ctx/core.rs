use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::AuthCtx;

/// access middleware が insert した AuthCtx を handler に渡す。
/// route に middleware が掛かっていなければ見つからないので、Deny と同じ 401 にする。
pub struct AuthCtxExtractor(pub AuthCtx);

impl FromRequestParts<AppState> for AuthCtxExtractor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthCtx>() {
            Some(ctx) => Ok(Self(ctx.clone())),
            None => {
                tracing::error!("AuthCtx missing: route is not behind the access middleware");
                Err(AppError::Unauthorized)
            }
        }
    }
}
