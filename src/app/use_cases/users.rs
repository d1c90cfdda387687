//! User management use cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};
use validator::Validate;

use super::UseCase;
use crate::domain::{
    BlockUserRequest, ListAllBlockedUser, ListedUser, Page, PageRequest, UnblockUserRequest,
    UserError, UserRepository,
};

/// Block a user by id, document or username.
///
/// The request is validated before anything else; a request without any
/// identifier never reaches the repository.
pub struct BlockUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl BlockUserUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for BlockUserUseCase {
    type Request = BlockUserRequest;
    type Output = ();
    type Error = UserError;

    #[instrument(skip_all, fields(user_id = ?request.user_id, username = ?request.username))]
    async fn execute(&self, request: BlockUserRequest) -> Result<(), UserError> {
        request.validate().map_err(|e| {
            warn!(error = %e, "Block request rejected");
            UserError::InvalidRequest(e.to_string())
        })?;

        self.repository.block_user(&request).await.map_err(|e| {
            warn!(error = %e, "Failed to block user");
            UserError::from(e)
        })?;

        info!(reason = ?request.reason, "User blocked");
        Ok(())
    }
}

/// Lift a block
pub struct UnblockUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UnblockUserUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for UnblockUserUseCase {
    type Request = UnblockUserRequest;
    type Output = ();
    type Error = UserError;

    #[instrument(skip_all, fields(user_id = ?request.user_id, username = ?request.username))]
    async fn execute(&self, request: UnblockUserRequest) -> Result<(), UserError> {
        request.validate().map_err(|e| {
            warn!(error = %e, "Unblock request rejected");
            UserError::InvalidRequest(e.to_string())
        })?;

        self.repository.unblock_user(&request).await.map_err(|e| {
            warn!(error = %e, "Failed to unblock user");
            UserError::from(e)
        })?;

        info!("User unblocked");
        Ok(())
    }
}

/// List users one page at a time
pub struct ListUsersUseCase {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ListUsersUseCase {
    type Request = PageRequest;
    type Output = Page<ListedUser>;
    type Error = UserError;

    #[instrument(skip(self))]
    async fn execute(&self, request: PageRequest) -> Result<Page<ListedUser>, UserError> {
        let request = request.clamped();
        let payload = self.repository.list_users(&request).await.map_err(|e| {
            warn!(error = %e, "Failed to list users");
            UserError::from(e)
        })?;

        Ok(Page::new(
            payload.items.into_iter().map(ListedUser::from).collect(),
            payload.total,
            payload.page,
            payload.page_size,
        ))
    }
}

/// List every blocked user
pub struct ListBlockedUsersUseCase {
    repository: Arc<dyn UserRepository>,
}

impl ListBlockedUsersUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ListBlockedUsersUseCase {
    type Request = ();
    type Output = Vec<ListAllBlockedUser>;
    type Error = UserError;

    #[instrument(skip_all)]
    async fn execute(&self, _request: ()) -> Result<Vec<ListAllBlockedUser>, UserError> {
        let payload = self.repository.list_blocked_users().await.map_err(|e| {
            warn!(error = %e, "Failed to list blocked users");
            UserError::from(e)
        })?;
        Ok(payload.into_iter().map(ListAllBlockedUser::from).collect())
    }
}
