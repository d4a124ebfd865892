//! Authorization-policy document returned to the API gateway.
//!
//! Wire shape (field names are fixed by the gateway):
//!
//! ```json
//! {
//!   "principalId": "u1",
//!   "policyDocument": {
//!     "Version": "2012-10-17",
//!     "Statement": [{ "Action": "execute-api:Invoke", "Effect": "Allow", "Resource": "arn:..." }]
//!   },
//!   "context": { "userId": "u1" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

pub const POLICY_VERSION: &str = "2012-10-17";
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub principal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<PolicyDocument>,
    // Values must stay flat strings; the gateway rejects nested or typed values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl AuthResponse {
    /// Without a resource there is nothing to scope a statement to, so the
    /// policy document is left out.
    pub fn new(principal_id: impl Into<String>, effect: Effect, resource: Option<&str>) -> Self {
        let policy_document = resource
            .filter(|r| !r.is_empty())
            .map(|resource| PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![Statement {
                    action: INVOKE_ACTION.to_string(),
                    effect,
                    resource: resource.to_string(),
                }],
            });

        Self {
            principal_id: principal_id.into(),
            policy_document,
            context: None,
        }
    }

    pub fn with_context(mut self, context: BTreeMap<String, String>) -> Self {
        self.context = (!context.is_empty()).then_some(context);
        self
    }

    pub fn effect(&self) -> Option<Effect> {
        self.policy_document
            .as_ref()
            .and_then(|doc| doc.statement.first())
            .map(|statement| statement.effect)
    }

    /// Only an explicit `Allow` statement counts; a missing document is a denial.
    pub fn is_allowed(&self) -> bool {
        self.effect() == Some(Effect::Allow)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_to_gateway_shape() {
        let mut context = BTreeMap::new();
        context.insert("userId".to_string(), "u1".to_string());
        context.insert("role".to_string(), "admin".to_string());

        let response =
            AuthResponse::new("u1", Effect::Allow, Some("arn:aws:execute-api:x/GET/items"))
                .with_context(context);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "principalId": "u1",
                "policyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Action": "execute-api:Invoke",
                        "Effect": "Allow",
                        "Resource": "arn:aws:execute-api:x/GET/items"
                    }]
                },
                "context": { "role": "admin", "userId": "u1" }
            })
        );
    }

    #[test]
    fn empty_context_is_omitted() {
        let response =
            AuthResponse::new("user", Effect::Deny, Some("arn")).with_context(BTreeMap::new());
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("context").is_none());
        assert_eq!(value["policyDocument"]["Statement"][0]["Effect"], "Deny");
    }

    #[test]
    fn missing_resource_omits_policy_document() {
        for resource in [None, Some("")] {
            let response = AuthResponse::new("user", Effect::Allow, resource);
            let value = serde_json::to_value(&response).unwrap();

            assert_eq!(value, json!({ "principalId": "user" }));
            assert!(!response.is_allowed());
        }
    }
}
