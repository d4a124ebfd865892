/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: authorizer: TokenAuthorizer
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::TokenAuthorizer;

#[derive(Clone, Debug)]
pub struct AppState {
    pub authorizer: Arc<TokenAuthorizer>,
}

impl AppState {
    pub fn new(authorizer: Arc<TokenAuthorizer>) -> Self {
        Self { authorizer }
    }
}
