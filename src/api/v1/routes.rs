/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /authorize (gateway 向け、認可なし) と /me (access middleware 配下) を merge
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::v1::handlers::{authorize::authorize, me::me};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new().route("/me", get(me));
    let protected = middleware::auth::access::apply(protected, state);

    Router::new()
        .route("/authorize", post(authorize))
        .merge(protected)
}
