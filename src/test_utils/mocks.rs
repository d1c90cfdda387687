//! Mock repositories for testing.
//!
//! Every mock counts the calls it receives so tests can assert that a use case
//! did, or did not, reach the repository.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::fixtures::{sample_config_payload, sample_dashboard_payload};
use crate::domain::payloads::{
    BlockedUserPayload, ConfigPayload, DashboardPayload, DepositPayload, PagePayload, UserPayload,
};
use crate::domain::{
    BlockUserRequest, ConfigRepository, DashboardRepository, DepositFilters, DepositRepository,
    PageRequest, RepositoryError, UnblockUserRequest, UpdateConfigRequest, UserRepository,
};

/// Configuration for mock behavior
#[derive(Debug, Default)]
pub struct MockConfig {
    pub failure: Option<RepositoryError>,
    /// Returned by the next call only, then cleared
    next_failure: Mutex<Option<RepositoryError>>,
}

impl MockConfig {
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failure(error: RepositoryError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn fail_next(&self, error: RepositoryError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }

    fn check_should_fail(&self) -> Result<(), RepositoryError> {
        if let Some(error) = self.next_failure.lock().unwrap().take() {
            return Err(error);
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

fn paginate<T: Clone>(items: &[T], page: &PageRequest) -> PagePayload<T> {
    let start = (page.page.saturating_sub(1) as usize).saturating_mul(page.page_size as usize);
    PagePayload {
        items: items
            .iter()
            .skip(start)
            .take(page.page_size as usize)
            .cloned()
            .collect(),
        total: items.len() as u64,
        page: page.page,
        page_size: page.page_size,
    }
}

/// Mock config repository backed by an in-memory payload
pub struct MockConfigRepository {
    storage: Mutex<ConfigPayload>,
    config: MockConfig,
    calls: AtomicUsize,
}

impl MockConfigRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::with_payload(sample_config_payload())
    }

    #[must_use]
    pub fn with_payload(payload: ConfigPayload) -> Self {
        Self {
            storage: Mutex::new(payload),
            config: MockConfig::success(),
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            config: MockConfig::failure(error),
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigRepository for MockConfigRepository {
    async fn fetch_config(&self) -> Result<ConfigPayload, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.config.check_should_fail()?;
        Ok(self.storage.lock().unwrap().clone())
    }

    async fn update_config(
        &self,
        request: &UpdateConfigRequest,
    ) -> Result<ConfigPayload, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.config.check_should_fail()?;
        let mut storage = self.storage.lock().unwrap();
        if let Some(value) = request.maintenance_mode {
            storage.maintenance_mode = value;
        }
        if let Some(value) = request.swap_peg_active {
            storage.swap_peg_active = value;
        }
        if let Some(value) = request.first_fee_threshold {
            storage.first_fee_threshold = value;
        }
        if let Some(value) = request.second_fee_threshold {
            storage.second_fee_threshold = value;
        }
        if let Some(value) = request.third_fee_threshold {
            storage.third_fee_threshold = value;
        }
        if let Some(value) = request.fee_value {
            storage.fee_value = value;
        }
        Ok(storage.clone())
    }
}

/// Mock user repository with block bookkeeping
pub struct MockUserRepository {
    users: Mutex<Vec<UserPayload>>,
    blocked: Mutex<Vec<BlockedUserPayload>>,
    config: MockConfig,
    calls: AtomicUsize,
}

impl MockUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    #[must_use]
    pub fn with_users(users: Vec<UserPayload>) -> Self {
        Self {
            users: Mutex::new(users),
            blocked: Mutex::new(Vec::new()),
            config: MockConfig::success(),
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            config: MockConfig::failure(error),
            ..Self::new()
        }
    }

    /// Make the next call fail with `error`
    pub fn fail_next(&self, error: RepositoryError) {
        self.config.fail_next(error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn find_user(
        &self,
        user_id: Option<&str>,
        document_id: Option<&str>,
        username: Option<&str>,
    ) -> Option<UserPayload> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| {
                user_id == Some(u.id.as_str())
                    || username == Some(u.username.as_str())
                    || u.documents.iter().any(|d| document_id == Some(d.number.as_str()))
            })
            .cloned()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn list_users(
        &self,
        page: &PageRequest,
    ) -> Result<PagePayload<UserPayload>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.config.check_should_fail()?;
        Ok(paginate(&self.users.lock().unwrap(), page))
    }

    async fn block_user(&self, request: &BlockUserRequest) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.config.check_should_fail()?;
        let user = self
            .find_user(
                request.user_id.as_deref(),
                request.document_id.as_deref(),
                request.username.as_deref(),
            )
            .ok_or_else(|| RepositoryError::NotFound("user".to_string()))?;

        let mut blocked = self.blocked.lock().unwrap();
        if blocked.iter().any(|b| b.user.id == user.id) {
            return Err(RepositoryError::AlreadyExists(user.id));
        }
        blocked.push(BlockedUserPayload {
            user,
            block_reason: request.reason.clone(),
            blocked_at: chrono::Utc::now(),
        });
        Ok(())
    }

    async fn unblock_user(&self, request: &UnblockUserRequest) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.config.check_should_fail()?;
        let user = self
            .find_user(
                request.user_id.as_deref(),
                request.document_id.as_deref(),
                request.username.as_deref(),
            )
            .ok_or_else(|| RepositoryError::NotFound("user".to_string()))?;

        let mut blocked = self.blocked.lock().unwrap();
        let before = blocked.len();
        blocked.retain(|b| b.user.id != user.id);
        if blocked.len() == before {
            return Err(RepositoryError::NotFound(user.id));
        }
        Ok(())
    }

    async fn list_blocked_users(&self) -> Result<Vec<BlockedUserPayload>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.config.check_should_fail()?;
        Ok(self.blocked.lock().unwrap().clone())
    }
}

/// Mock deposit repository with in-memory filtering
pub struct MockDepositRepository {
    deposits: Vec<DepositPayload>,
    resent: Mutex<Vec<String>>,
    config: MockConfig,
    calls: AtomicUsize,
}

impl MockDepositRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::with_deposits(Vec::new())
    }

    #[must_use]
    pub fn with_deposits(deposits: Vec<DepositPayload>) -> Self {
        Self {
            deposits,
            resent: Mutex::new(Vec::new()),
            config: MockConfig::success(),
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            config: MockConfig::failure(error),
            ..Self::new()
        }
    }

    /// Make the next call fail with `error`
    pub fn fail_next(&self, error: RepositoryError) {
        self.config.fail_next(error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Transaction ids whose orders were resent, in call order
    pub fn resent_orders(&self) -> Vec<String> {
        self.resent.lock().unwrap().clone()
    }

    fn filtered(&self, filters: &DepositFilters) -> Vec<DepositPayload> {
        self.deposits
            .iter()
            .filter(|d| filters.status.is_none_or(|s| d.status == s))
            .filter(|d| filters.crypto_type.is_none_or(|c| d.crypto_type == c))
            .filter(|d| {
                filters
                    .start_date
                    .is_none_or(|start| d.transaction_date.date_naive() >= start)
            })
            .filter(|d| {
                filters
                    .end_date
                    .is_none_or(|end| d.transaction_date.date_naive() <= end)
            })
            .filter(|d| {
                filters.search.as_deref().is_none_or(|term| {
                    d.username.contains(term) || d.transaction_id.contains(term)
                })
            })
            .cloned()
            .collect()
    }
}

impl Default for MockDepositRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DepositRepository for MockDepositRepository {
    async fn list_deposits(
        &self,
        page: &PageRequest,
        filters: &DepositFilters,
    ) -> Result<PagePayload<DepositPayload>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.config.check_should_fail()?;
        Ok(paginate(&self.filtered(filters), page))
    }

    async fn list_all_deposits(
        &self,
        filters: &DepositFilters,
    ) -> Result<Vec<DepositPayload>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.config.check_should_fail()?;
        Ok(self.filtered(filters))
    }

    async fn resend_deposit_order(&self, transaction_id: &str) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.config.check_should_fail()?;
        if !self.deposits.iter().any(|d| d.transaction_id == transaction_id) {
            return Err(RepositoryError::NotFound(transaction_id.to_string()));
        }
        self.resent.lock().unwrap().push(transaction_id.to_string());
        Ok(())
    }
}

/// Mock dashboard repository
pub struct MockDashboardRepository {
    summary: DashboardPayload,
    config: MockConfig,
    is_healthy: AtomicBool,
    calls: AtomicUsize,
}

impl MockDashboardRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            summary: sample_dashboard_payload(),
            config: MockConfig::success(),
            is_healthy: AtomicBool::new(true),
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            config: MockConfig::failure(error),
            ..Self::new()
        }
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.is_healthy.store(healthy, Ordering::Relaxed);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockDashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardRepository for MockDashboardRepository {
    async fn health_check(&self) -> Result<(), RepositoryError> {
        if !self.is_healthy.load(Ordering::Relaxed) {
            return Err(RepositoryError::Unknown("Unhealthy".to_string()));
        }
        Ok(())
    }

    async fn fetch_summary(&self) -> Result<DashboardPayload, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.config.check_should_fail()?;
        Ok(self.summary.clone())
    }
}
