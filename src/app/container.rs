//! Use-case container wired once at startup and passed down by `Arc`.

use std::sync::Arc;

use super::use_cases::{
    BlockUserUseCase, GetDashboardSummaryUseCase, ListAllDepositsUseCase,
    ListBlockedUsersUseCase, ListConfigUseCase, ListDepositsUseCase, ListUsersUseCase,
    ResendDepositOrderUseCase, UnblockUserUseCase, UpdateConfigUseCase,
};
use crate::domain::{ConfigRepository, DashboardRepository, DepositRepository, UserRepository};

/// Every use case the dashboard exposes
pub struct UseCases {
    pub list_config: ListConfigUseCase,
    pub update_config: UpdateConfigUseCase,
    pub list_users: ListUsersUseCase,
    pub block_user: BlockUserUseCase,
    pub unblock_user: UnblockUserUseCase,
    pub list_blocked_users: ListBlockedUsersUseCase,
    pub list_deposits: ListDepositsUseCase,
    pub list_all_deposits: ListAllDepositsUseCase,
    pub resend_deposit_order: ResendDepositOrderUseCase,
    pub dashboard_summary: GetDashboardSummaryUseCase,
}

impl UseCases {
    #[must_use]
    pub fn new(
        config_repository: Arc<dyn ConfigRepository>,
        user_repository: Arc<dyn UserRepository>,
        deposit_repository: Arc<dyn DepositRepository>,
        dashboard_repository: Arc<dyn DashboardRepository>,
    ) -> Self {
        Self {
            list_config: ListConfigUseCase::new(Arc::clone(&config_repository)),
            update_config: UpdateConfigUseCase::new(config_repository),
            list_users: ListUsersUseCase::new(Arc::clone(&user_repository)),
            block_user: BlockUserUseCase::new(Arc::clone(&user_repository)),
            unblock_user: UnblockUserUseCase::new(Arc::clone(&user_repository)),
            list_blocked_users: ListBlockedUsersUseCase::new(user_repository),
            list_deposits: ListDepositsUseCase::new(Arc::clone(&deposit_repository)),
            list_all_deposits: ListAllDepositsUseCase::new(Arc::clone(&deposit_repository)),
            resend_deposit_order: ResendDepositOrderUseCase::new(deposit_repository),
            dashboard_summary: GetDashboardSummaryUseCase::new(dashboard_repository),
        }
    }
}
