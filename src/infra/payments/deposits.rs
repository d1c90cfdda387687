use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use super::ApiClient;
use crate::domain::payloads::{DepositPayload, PagePayload};
use crate::domain::{DepositFilters, DepositRepository, PageRequest, RepositoryError};

/// `DepositRepository` over `/admin/deposits`
#[derive(Debug, Clone)]
pub struct HttpDepositRepository {
    client: ApiClient,
}

impl HttpDepositRepository {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DepositRepository for HttpDepositRepository {
    #[instrument(skip(self))]
    async fn list_deposits(
        &self,
        page: &PageRequest,
        filters: &DepositFilters,
    ) -> Result<PagePayload<DepositPayload>, RepositoryError> {
        let builder = self
            .client
            .request(Method::GET, &["admin", "deposits"])?
            .query(page)
            .query(filters);
        self.client.send_json(builder).await
    }

    #[instrument(skip(self))]
    async fn list_all_deposits(
        &self,
        filters: &DepositFilters,
    ) -> Result<Vec<DepositPayload>, RepositoryError> {
        let builder = self
            .client
            .request(Method::GET, &["admin", "deposits", "all"])?
            .query(filters);
        self.client.send_json(builder).await
    }

    #[instrument(skip(self))]
    async fn resend_deposit_order(&self, transaction_id: &str) -> Result<(), RepositoryError> {
        let builder = self
            .client
            .request(Method::POST, &["admin", "deposits", transaction_id, "resend"])?;
        self.client.send_empty(builder).await
    }
}
