use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use super::ApiClient;
use crate::domain::payloads::ConfigPayload;
use crate::domain::{ConfigRepository, RepositoryError, UpdateConfigRequest};

/// `ConfigRepository` over `/admin/config`
#[derive(Debug, Clone)]
pub struct HttpConfigRepository {
    client: ApiClient,
}

impl HttpConfigRepository {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConfigRepository for HttpConfigRepository {
    #[instrument(skip(self))]
    async fn fetch_config(&self) -> Result<ConfigPayload, RepositoryError> {
        let request = self.client.request(Method::GET, &["admin", "config"])?;
        self.client.send_json(request).await
    }

    #[instrument(skip(self))]
    async fn update_config(
        &self,
        request: &UpdateConfigRequest,
    ) -> Result<ConfigPayload, RepositoryError> {
        let builder = self
            .client
            .request(Method::PATCH, &["admin", "config"])?
            .json(request);
        self.client.send_json(builder).await
    }
}
