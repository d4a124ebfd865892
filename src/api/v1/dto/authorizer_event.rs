/*
 * Responsibility
 * - API Gateway の authorizer event (TOKEN / REQUEST) の受け口
 * - TOKEN: authorizationToken, REQUEST: headers.Authorization
 */
use std::collections::HashMap;

use serde::Deserialize;

use crate::services::auth::AuthorizerRequest;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerEvent {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub authorization_token: Option<String>,
    #[serde(default)]
    pub method_arn: Option<String>,
    #[serde(default)]
    pub headers: Option<HashMap<String, Option<String>>>,
}

impl AuthorizerEvent {
    /// `authorizationToken` wins; otherwise the `Authorization` header (any casing).
    pub fn token(&self) -> Option<&str> {
        if let Some(token) = self.authorization_token.as_deref() {
            return Some(token);
        }

        self.headers
            .as_ref()?
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("authorization"))
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn into_request(self) -> AuthorizerRequest {
        let token = self.token().map(str::to_owned);
        AuthorizerRequest::new(self.method_arn, token)
    }
}
