/*
 * Responsibility
 * - Handler から見える「認可済みコンテキスト」の型
 * - middleware が authorizer の Allow 判定から作り、request extensions に格納する
 *
 * Notes
 * - JWT の検証ロジックは services 側の責務
 * - context は gateway に返すものと同じフラットな文字列 map
 */
use std::collections::BTreeMap;

use crate::services::auth::AuthResponse;

/// 認可済みのリクエストに付与されるコンテキスト
///
/// - `principal_id` は検証済みトークンの subject
/// - `context` は userId / email / role のうち存在するもの
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub principal_id: String,
    pub context: BTreeMap<String, String>,
}

impl From<AuthResponse> for AuthCtx {
    fn from(decision: AuthResponse) -> Self {
        Self {
            principal_id: decision.principal_id,
            context: decision.context.unwrap_or_default(),
        }
    }
}
