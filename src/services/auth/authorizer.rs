//! Token authorizer: bearer token in, gateway policy out.
//!
//! `authorize` never fails. Every verification problem becomes the same
//! `Deny` response for the default principal; the reason is only logged.
//! Decisions depend on nothing but the token, the resource and the clock,
//! so a gateway may cache them per token.

use tracing::{debug, info, warn};

use crate::services::auth::bearer;
use crate::services::auth::claims::VerifiedPrincipal;
use crate::services::auth::error::AuthError;
use crate::services::auth::policy::{AuthResponse, Effect};
use crate::services::auth::redact;
use crate::services::auth::verifier::TokenVerifier;

/// Principal reported on denials, where no verified subject exists.
pub const DEFAULT_PRINCIPAL: &str = "user";

/// One inbound authorization request as handed over by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizerRequest {
    /// Fully qualified operation locator (e.g. a method ARN).
    pub resource: Option<String>,
    /// Raw authorizer field, with or without the `Bearer` scheme.
    pub token: Option<String>,
}

impl AuthorizerRequest {
    pub fn new(resource: Option<String>, token: Option<String>) -> Self {
        Self { resource, token }
    }
}

#[derive(Debug, Clone)]
pub struct TokenAuthorizer {
    verifier: TokenVerifier,
}

impl TokenAuthorizer {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self { verifier }
    }

    /// Normalize and verify a raw authorizer field.
    pub fn verify(&self, raw: Option<&str>) -> Result<VerifiedPrincipal, AuthError> {
        let token = raw.and_then(bearer::normalize).ok_or(AuthError::NoToken)?;
        self.verifier.verify(token)
    }

    pub fn authorize(&self, request: &AuthorizerRequest) -> AuthResponse {
        let resource = request.resource.as_deref();
        debug!(
            resource = resource.unwrap_or("-"),
            has_token = request.token.is_some(),
            "authorizer invoked"
        );

        match self.verify(request.token.as_deref()) {
            Ok(principal) => {
                info!(
                    subject = %redact::fingerprint(&principal.subject),
                    resource = resource.unwrap_or("-"),
                    "token verified"
                );
                AuthResponse::new(principal.subject.as_str(), Effect::Allow, resource)
                    .with_context(principal.context())
            }
            Err(err) => {
                log_denial(err, resource);
                AuthResponse::new(DEFAULT_PRINCIPAL, Effect::Deny, resource)
            }
        }
    }
}

fn log_denial(err: AuthError, resource: Option<&str>) {
    let resource = resource.unwrap_or("-");
    match err {
        AuthError::NoToken => info!(resource, "authorization denied: no token provided"),
        AuthError::ExpiredToken => warn!(resource, "authorization denied: token expired"),
        AuthError::MalformedToken => warn!(resource, "authorization denied: invalid token"),
        AuthError::InvalidSignature => {
            warn!(resource, "authorization denied: signature mismatch")
        }
        AuthError::InvalidClaims(claim) => {
            warn!(resource, claim, "authorization denied: claim rejected")
        }
    }
}
