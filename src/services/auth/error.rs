use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Why a token was rejected.
///
/// Every variant ends in the same `Deny` decision. The distinction exists for
/// logs only and must never reach the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no token provided")]
    NoToken,

    #[error("malformed token")]
    MalformedToken,

    #[error("token expired")]
    ExpiredToken,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("claim rejected: {0}")]
    InvalidClaims(&'static str),
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::ExpiredToken,
            // A token signed with another algorithm family can never verify against the secret.
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => Self::InvalidSignature,
            ErrorKind::InvalidIssuer => Self::InvalidClaims("iss"),
            ErrorKind::InvalidAudience => Self::InvalidClaims("aud"),
            ErrorKind::ImmatureSignature => Self::InvalidClaims("nbf"),
            _ => Self::MalformedToken,
        }
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::errors::{Error, ErrorKind};

    use super::*;

    #[test]
    fn jwt_error_kinds_map_onto_the_taxonomy() {
        let cases = [
            (ErrorKind::ExpiredSignature, AuthError::ExpiredToken),
            (ErrorKind::InvalidSignature, AuthError::InvalidSignature),
            (ErrorKind::InvalidAlgorithm, AuthError::InvalidSignature),
            (ErrorKind::InvalidIssuer, AuthError::InvalidClaims("iss")),
            (ErrorKind::InvalidAudience, AuthError::InvalidClaims("aud")),
            (ErrorKind::ImmatureSignature, AuthError::InvalidClaims("nbf")),
            (ErrorKind::InvalidToken, AuthError::MalformedToken),
            (
                ErrorKind::MissingRequiredClaim("exp".to_string()),
                AuthError::MalformedToken,
            ),
        ];

        for (kind, expected) in cases {
            assert_eq!(AuthError::from(Error::from(kind)), expected);
        }
    }
}
