use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use super::ApiClient;
use crate::domain::payloads::{BlockedUserPayload, PagePayload, UserPayload};
use crate::domain::{
    BlockUserRequest, PageRequest, RepositoryError, UnblockUserRequest, UserRepository,
};

/// `UserRepository` over `/admin/users`
#[derive(Debug, Clone)]
pub struct HttpUserRepository {
    client: ApiClient,
}

impl HttpUserRepository {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    #[instrument(skip(self))]
    async fn list_users(
        &self,
        page: &PageRequest,
    ) -> Result<PagePayload<UserPayload>, RepositoryError> {
        let builder = self
            .client
            .request(Method::GET, &["admin", "users"])?
            .query(page);
        self.client.send_json(builder).await
    }

    #[instrument(skip_all)]
    async fn block_user(&self, request: &BlockUserRequest) -> Result<(), RepositoryError> {
        let builder = self
            .client
            .request(Method::POST, &["admin", "users", "block"])?
            .json(request);
        self.client.send_empty(builder).await
    }

    #[instrument(skip_all)]
    async fn unblock_user(&self, request: &UnblockUserRequest) -> Result<(), RepositoryError> {
        let builder = self
            .client
            .request(Method::POST, &["admin", "users", "unblock"])?
            .json(request);
        self.client.send_empty(builder).await
    }

    #[instrument(skip(self))]
    async fn list_blocked_users(&self) -> Result<Vec<BlockedUserPayload>, RepositoryError> {
        let builder = self
            .client
            .request(Method::GET, &["admin", "users", "blocked"])?;
        self.client.send_json(builder).await
    }
}
