//! System configuration use cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::UseCase;
use crate::domain::{Config, ConfigError, ConfigRepository, UpdateConfigRequest};

/// Load the current configuration
pub struct ListConfigUseCase {
    repository: Arc<dyn ConfigRepository>,
}

impl ListConfigUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ListConfigUseCase {
    type Request = ();
    type Output = Config;
    type Error = ConfigError;

    #[instrument(skip_all)]
    async fn execute(&self, _request: ()) -> Result<Config, ConfigError> {
        let payload = self.repository.fetch_config().await.map_err(|e| {
            warn!(error = %e, "Failed to fetch config");
            ConfigError::from(e)
        })?;
        Ok(Config::from(payload))
    }
}

/// Apply a partial configuration update
pub struct UpdateConfigUseCase {
    repository: Arc<dyn ConfigRepository>,
}

impl UpdateConfigUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for UpdateConfigUseCase {
    type Request = UpdateConfigRequest;
    type Output = Config;
    type Error = ConfigError;

    #[instrument(skip_all, fields(maintenance_mode = ?request.maintenance_mode))]
    async fn execute(&self, request: UpdateConfigRequest) -> Result<Config, ConfigError> {
        let payload = self.repository.update_config(&request).await.map_err(|e| {
            warn!(error = %e, "Failed to update config");
            ConfigError::from(e)
        })?;
        info!("Config updated");
        Ok(Config::from(payload))
    }
}
