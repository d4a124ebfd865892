/*
 * Responsibility
 * - GET /api/v1/me
 * - middleware が許可した principal と context をそのまま返す (downstream 側の確認用)
 */
use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::AuthCtxExtractor;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub principal_id: String,
    pub context: BTreeMap<String, String>,
}

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse {
        principal_id: ctx.principal_id,
        context: ctx.context,
    })
}
