//! Use cases: one per business operation.
//!
//! Every use case holds a single repository, calls exactly one of its methods
//! per `execute`, re-maps the repository error into its domain error, and
//! reshapes the raw payload into entities. None of them keep state between
//! calls.

use async_trait::async_trait;

use crate::domain::DomainError;

pub mod config;
pub mod dashboard;
pub mod deposits;
pub mod users;

pub use config::{ListConfigUseCase, UpdateConfigUseCase};
pub use dashboard::GetDashboardSummaryUseCase;
pub use deposits::{
    ListAllDepositsUseCase, ListDepositsRequest, ListDepositsUseCase, ResendDepositOrderUseCase,
};
pub use users::{BlockUserUseCase, ListBlockedUsersUseCase, ListUsersUseCase, UnblockUserUseCase};

/// A single application operation
#[async_trait]
pub trait UseCase: Send + Sync {
    type Request: Send + 'static;
    type Output: Send;
    type Error: DomainError;

    async fn execute(&self, request: Self::Request) -> Result<Self::Output, Self::Error>;
}
