//! Application entry point.

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use payment_admin_dashboard::api::create_router;
use payment_admin_dashboard::app::AppState;
use payment_admin_dashboard::domain::Locale;
use payment_admin_dashboard::infra::{
    ApiClient, ApiClientConfig, HttpConfigRepository, HttpDashboardRepository,
    HttpDepositRepository, HttpUserRepository,
};

/// Application configuration
struct Config {
    api: ApiClientConfig,
    host: String,
    port: u16,
    /// Language of error messages returned to the dashboard
    locale: Locale,
}

impl Config {
    fn from_env() -> Result<Self> {
        let api = ApiClientConfig::from_env().context("PAYMENTS_API_URL not set")?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let locale = match env::var("DASHBOARD_LOCALE") {
            Ok(value) => value
                .parse::<Locale>()
                .map_err(anyhow::Error::msg)
                .context("DASHBOARD_LOCALE must be 'en' or 'pt-BR'")?,
            Err(_) => Locale::default(),
        };

        Ok(Self {
            api,
            host,
            port,
            locale,
        })
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    info!("Payment Admin Dashboard v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    info!("Initializing payments API client...");
    if config.api.token.is_none() {
        warn!("PAYMENTS_API_TOKEN not set; requests will be sent unauthenticated");
    }
    let base_url = config.api.base_url.clone();
    let client = ApiClient::new(config.api).context("Failed to create payments API client")?;
    info!(base_url = %base_url, "   ✓ Payments API client created");

    let app_state = AppState::new(
        Arc::new(HttpConfigRepository::new(client.clone())),
        Arc::new(HttpUserRepository::new(client.clone())),
        Arc::new(HttpDepositRepository::new(client.clone())),
        Arc::new(HttpDashboardRepository::new(client)),
    )
    .with_locale(config.locale);
    info!(locale = %config.locale, "   ✓ Use cases wired");

    let health = app_state.health_check().await;
    info!(upstream = ?health.upstream, "   ✓ Payments API probed");

    let router = create_router(Arc::new(app_state));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("🚀 Listening on http://{}", addr);
    info!("📖 Swagger UI at http://{}/swagger-ui", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}
