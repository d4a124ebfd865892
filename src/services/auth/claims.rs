use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::services::auth::error::AuthError;

/// Context key carrying the verified subject.
pub const CONTEXT_USER_ID: &str = "userId";
pub const CONTEXT_EMAIL: &str = "email";
pub const CONTEXT_ROLE: &str = "role";

/// Token payload as issued.
///
/// Issuers are loosely typed: the subject may arrive as a string or a number,
/// and older tokens carry it as `userId` instead of `sub`. Only the fields
/// below are read; anything else in the payload is ignored and never forwarded.
/// `exp` is enforced by `jsonwebtoken::Validation` before this type is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<Value>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub role: Option<Value>,
}

/// Claims after verification, every value already coerced to a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedPrincipal {
    pub subject: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl TokenClaims {
    /// Requires a scalar subject (`sub`, falling back to `userId`).
    pub fn into_principal(self) -> Result<VerifiedPrincipal, AuthError> {
        let subject = self
            .sub
            .as_ref()
            .and_then(coerce)
            .or_else(|| self.user_id.as_ref().and_then(coerce))
            .ok_or(AuthError::MalformedToken)?;

        Ok(VerifiedPrincipal {
            subject,
            email: self.email.as_ref().and_then(coerce),
            role: self.role.as_ref().and_then(coerce),
        })
    }
}

impl VerifiedPrincipal {
    /// Flat string map forwarded downstream. Absent fields are omitted.
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_USER_ID.to_string(), self.subject.clone());
        if let Some(email) = &self.email {
            context.insert(CONTEXT_EMAIL.to_string(), email.clone());
        }
        if let Some(role) = &self.role {
            context.insert(CONTEXT_ROLE.to_string(), role.clone());
        }
        context
    }
}

// Scalars become strings; null, blank strings, objects and arrays are treated as absent.
fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
