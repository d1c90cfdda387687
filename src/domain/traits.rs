//! Repository contracts for the payments API.
//!
//! Each method performs exactly one remote call and returns the raw payload;
//! mapping into entities is the use case's job. Implementations must convert
//! every failure into a [`RepositoryError`] and never retry or cache.

use async_trait::async_trait;

use super::error::RepositoryError;
use super::payloads::{
    BlockedUserPayload, ConfigPayload, DashboardPayload, DepositPayload, PagePayload, UserPayload,
};
use super::types::{
    BlockUserRequest, DepositFilters, PageRequest, UnblockUserRequest, UpdateConfigRequest,
};

/// System configuration endpoints
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Fetch the current configuration
    async fn fetch_config(&self) -> Result<ConfigPayload, RepositoryError>;

    /// Apply a partial update and return the resulting configuration
    async fn update_config(
        &self,
        request: &UpdateConfigRequest,
    ) -> Result<ConfigPayload, RepositoryError>;
}

/// User management endpoints
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List users one page at a time
    async fn list_users(
        &self,
        page: &PageRequest,
    ) -> Result<PagePayload<UserPayload>, RepositoryError>;

    /// Block a user
    async fn block_user(&self, request: &BlockUserRequest) -> Result<(), RepositoryError>;

    /// Lift a block
    async fn unblock_user(&self, request: &UnblockUserRequest) -> Result<(), RepositoryError>;

    /// List every blocked user
    async fn list_blocked_users(&self) -> Result<Vec<BlockedUserPayload>, RepositoryError>;
}

/// Deposit report endpoints
#[async_trait]
pub trait DepositRepository: Send + Sync {
    /// List deposits matching `filters`, one page at a time
    async fn list_deposits(
        &self,
        page: &PageRequest,
        filters: &DepositFilters,
    ) -> Result<PagePayload<DepositPayload>, RepositoryError>;

    /// List every deposit matching `filters` (used for spreadsheet export)
    async fn list_all_deposits(
        &self,
        filters: &DepositFilters,
    ) -> Result<Vec<DepositPayload>, RepositoryError>;

    /// Ask the platform to resend the payment order of a deposit
    async fn resend_deposit_order(&self, transaction_id: &str) -> Result<(), RepositoryError>;
}

/// Dashboard summary and upstream reachability
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Check that the payments API answers
    async fn health_check(&self) -> Result<(), RepositoryError>;

    /// Fetch the landing page figures
    async fn fetch_summary(&self) -> Result<DashboardPayload, RepositoryError>;
}
