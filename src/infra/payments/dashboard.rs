use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use super::ApiClient;
use crate::domain::payloads::DashboardPayload;
use crate::domain::{DashboardRepository, RepositoryError};

/// `DashboardRepository` over `/admin/dashboard` and `/health`
#[derive(Debug, Clone)]
pub struct HttpDashboardRepository {
    client: ApiClient,
}

impl HttpDashboardRepository {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardRepository for HttpDashboardRepository {
    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<(), RepositoryError> {
        let builder = self.client.request(Method::GET, &["health"])?;
        self.client.send_empty(builder).await
    }

    #[instrument(skip(self))]
    async fn fetch_summary(&self) -> Result<DashboardPayload, RepositoryError> {
        let builder = self.client.request(Method::GET, &["admin", "dashboard"])?;
        self.client.send_json(builder).await
    }
}
