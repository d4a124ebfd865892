/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → Authorizer 生成 → Router 組み立て
 * - Middleware の適用 (request-id / trace / limit / timeout)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{self, v1::handlers::health::health};
use crate::config::{Config, RECOMMENDED_SECRET_BYTES};
use crate::middleware;
use crate::services::auth::build_authorizer;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,token_authorizer=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so we notice immediately.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();

    // A missing secret must stop the process here, not deny every request later.
    let config = Config::from_env().inspect_err(|err| {
        tracing::error!(error = %err, "refusing to start");
    })?;

    init_panic_hook(!config.app_env.is_production());

    if config.has_weak_secret() {
        tracing::warn!(
            recommended_bytes = RECOMMENDED_SECRET_BYTES,
            "JWT_SECRET is shorter than recommended"
        );
    }

    tracing::info!(
        "starting token authorizer in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(config: &Config) -> AppState {
    AppState::new(build_authorizer(config))
}

fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    middleware::http::apply(router)
}
