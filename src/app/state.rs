//! Application state management.

use std::sync::Arc;

use super::container::UseCases;
use crate::domain::{
    ConfigRepository, DashboardRepository, DepositRepository, HealthResponse, HealthStatus,
    Locale, UserRepository,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub use_cases: Arc<UseCases>,
    /// Used for upstream health probes
    pub dashboard_repository: Arc<dyn DashboardRepository>,
    /// Language of user-facing error messages
    pub locale: Locale,
}

impl AppState {
    /// Create a new application state
    #[must_use]
    pub fn new(
        config_repository: Arc<dyn ConfigRepository>,
        user_repository: Arc<dyn UserRepository>,
        deposit_repository: Arc<dyn DepositRepository>,
        dashboard_repository: Arc<dyn DashboardRepository>,
    ) -> Self {
        let use_cases = Arc::new(UseCases::new(
            config_repository,
            user_repository,
            deposit_repository,
            Arc::clone(&dashboard_repository),
        ));
        Self {
            use_cases,
            dashboard_repository,
            locale: Locale::default(),
        }
    }

    /// Set the message locale (builder pattern)
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Probe the payments API
    pub async fn health_check(&self) -> HealthResponse {
        let upstream = match self.dashboard_repository.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => {
                tracing::error!(error = %e, "Payments API health check failed");
                HealthStatus::Unhealthy
            }
        };
        HealthResponse::new(upstream)
    }
}
