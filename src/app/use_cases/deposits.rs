//! Deposit report use cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::UseCase;
use crate::domain::{
    DepositError, DepositFilters, DepositRepository, Page, PageRequest, ReportedDeposit,
    ResendDepositOrderRequest,
};

/// Page plus filters for the deposit report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDepositsRequest {
    pub page: PageRequest,
    pub filters: DepositFilters,
}

impl ListDepositsRequest {
    #[must_use]
    pub fn new(page: PageRequest, filters: DepositFilters) -> Self {
        Self { page, filters }
    }
}

/// List reported deposits one page at a time
pub struct ListDepositsUseCase {
    repository: Arc<dyn DepositRepository>,
}

impl ListDepositsUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn DepositRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ListDepositsUseCase {
    type Request = ListDepositsRequest;
    type Output = Page<ReportedDeposit>;
    type Error = DepositError;

    #[instrument(skip(self))]
    async fn execute(
        &self,
        request: ListDepositsRequest,
    ) -> Result<Page<ReportedDeposit>, DepositError> {
        let page = request.page.clamped();
        let payload = self
            .repository
            .list_deposits(&page, &request.filters)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to list deposits");
                DepositError::from(e)
            })?;

        Ok(Page::new(
            payload.items.into_iter().map(ReportedDeposit::from).collect(),
            payload.total,
            payload.page,
            payload.page_size,
        ))
    }
}

/// List every deposit matching the filters, for spreadsheet export
pub struct ListAllDepositsUseCase {
    repository: Arc<dyn DepositRepository>,
}

impl ListAllDepositsUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn DepositRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ListAllDepositsUseCase {
    type Request = DepositFilters;
    type Output = Vec<ReportedDeposit>;
    type Error = DepositError;

    #[instrument(skip(self))]
    async fn execute(&self, filters: DepositFilters) -> Result<Vec<ReportedDeposit>, DepositError> {
        let payload = self
            .repository
            .list_all_deposits(&filters)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to list all deposits");
                DepositError::from(e)
            })?;
        Ok(payload.into_iter().map(ReportedDeposit::from).collect())
    }
}

/// Resend the payment order of a deposit
pub struct ResendDepositOrderUseCase {
    repository: Arc<dyn DepositRepository>,
}

impl ResendDepositOrderUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn DepositRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ResendDepositOrderUseCase {
    type Request = ResendDepositOrderRequest;
    type Output = ();
    type Error = DepositError;

    #[instrument(skip_all, fields(transaction_id = %request.transaction_id))]
    async fn execute(&self, request: ResendDepositOrderRequest) -> Result<(), DepositError> {
        self.repository
            .resend_deposit_order(&request.transaction_id)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to resend deposit order");
                DepositError::from(e)
            })?;
        info!("Deposit order resent");
        Ok(())
    }
}
