/// Factory: build `TokenAuthorizer` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::TokenAuthorizer;
use crate::services::auth::verifier::{TokenVerifier, VerifierSettings};

pub fn build_authorizer(config: &Config) -> Arc<TokenAuthorizer> {
    let settings = VerifierSettings {
        leeway_seconds: config.jwt_leeway_seconds,
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
    };
    let verifier = TokenVerifier::new(config.jwt_secret.as_bytes(), &settings);

    Arc::new(TokenAuthorizer::new(verifier))
}
