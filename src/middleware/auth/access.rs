//! Authorization header → TokenAuthorizer → AuthCtx を extensions に入れる
//!
//! gateway 向けの `/authorize` と同じ判定をそのまま使う。
//! - resource は `"<METHOD> <path>"`（nest 前の元パス）
//! - Deny は理由に関係なく一律 401（理由はログのみ）

use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, State},
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::AuthorizerRequest;
use crate::state::AppState;

/// 保護したい route 群に認可を掛ける。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    OriginalUri(original_uri): OriginalUri,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let resource = format!("{} {}", req.method(), original_uri.path());

    let decision = state
        .authorizer
        .authorize(&AuthorizerRequest::new(Some(resource), token));

    if !decision.is_allowed() {
        return Err(AppError::Unauthorized);
    }

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::from(decision));

    Ok(next.run(req).await)
}
