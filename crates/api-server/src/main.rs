use std::net::SocketAddr;
use std::sync::Arc;

use api_server::http::{AppState, build_router};
use shared::clock::SystemClock;
use shared::config::{ApiConfig, DEFAULT_BIND_ADDR, LogFormat};
use shared::service::AdviceService;
use shared::session_memo::{InMemorySessionMemoStore, SessionMemoStore};
use tokio::signal;
use tracing::{error, info};

const DEFAULT_LOG_FILTER: &str = "api_server=debug,shared=info,axum=info,tower_http=info";

#[tokio::main]
async fn main() {
    let config = match ApiConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            init_tracing(LogFormat::Text);
            error!("failed to read config: {err}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    let memo_store: Arc<dyn SessionMemoStore> = match config.connect_redis_store().await {
        Ok(Some(store)) => {
            info!("session memos stored in redis");
            Arc::new(store)
        }
        Ok(None) => {
            info!("session memos stored in process memory");
            Arc::new(InMemorySessionMemoStore::new(config.session_ttl()))
        }
        Err(err) => {
            error!("failed to connect session memo store: {err}");
            std::process::exit(1);
        }
    };

    let app = build_router(AppState {
        advice: AdviceService::new(memo_store, Arc::new(SystemClock), config.session_ttl()),
        cors_allowed_origin: config.cors_allowed_origin.clone(),
    });

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(err) => {
            error!(
                "invalid bind address '{}': {err}; expected something like {DEFAULT_BIND_ADDR}",
                config.bind_addr
            );
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    info!(
        "petcoach api listening on {}",
        listener.local_addr().unwrap_or(addr)
    );
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server stopped with error: {err}");
        std::process::exit(1);
    }
    info!("petcoach api stopped");
}

fn init_tracing(format: LogFormat) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
