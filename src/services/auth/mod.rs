pub mod authorizer;
pub mod bearer;
pub mod claims;
pub mod error;
pub mod factory;
pub mod policy;
pub mod redact;
pub mod verifier;

#[cfg(test)]
pub(crate) mod testing;

pub use authorizer::{AuthorizerRequest, TokenAuthorizer};
pub use factory::build_authorizer;
pub use policy::AuthResponse;
