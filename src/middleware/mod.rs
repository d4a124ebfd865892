/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::access (Bearer → authorizer → AuthCtx), http (request-id / trace / limit / timeout)
 */
pub mod auth;
pub mod http;
