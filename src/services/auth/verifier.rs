use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::services::auth::claims::{TokenClaims, VerifiedPrincipal};
use crate::services::auth::error::AuthError;

/// HMAC algorithms accepted with the shared secret.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Optional claim checks layered on top of signature + `exp`.
#[derive(Debug, Clone, Default)]
pub struct VerifierSettings {
    pub leeway_seconds: u64,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

/// Shared-secret (HS*) JWT verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &[u8], settings: &VerifierSettings) -> Self {
        let decoding_key = DecodingKey::from_secret(secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        validation.leeway = settings.leeway_seconds;
        // Tokens are invalid from the `exp` second onward, and before `nbf`.
        validation.reject_tokens_expiring_in_less_than = 1;
        validation.validate_nbf = true;

        if let Some(issuer) = settings.issuer.as_deref() {
            validation.set_issuer(&[issuer]);
            validation.required_spec_claims.insert("iss".to_string());
        }
        match settings.audience.as_deref() {
            Some(audience) => {
                validation.set_audience(&[audience]);
                validation.required_spec_claims.insert("aud".to_string());
            }
            // Issuers commonly stamp `aud`; without a configured audience it is not checked.
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify signature and expiry, then lift the claims into a principal.
    ///
    /// `token` must already be normalized (no `Bearer` scheme).
    pub fn verify(&self, token: &str) -> Result<VerifiedPrincipal, AuthError> {
        let data =
            jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;

        data.claims.into_principal()
    }
}
