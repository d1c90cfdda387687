use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::ErrorBanner;
use crate::app::export::DepositSpreadsheet;
use crate::app::use_cases::deposits::ListDepositsRequest;
use crate::app::{UseCase, UseCases};
use crate::domain::{
    DepositFilters, Locale, Page, PageRequest, ReportedDeposit, ResendDepositOrderRequest,
};

/// Deposit report: filtered, paginated list with resend and export actions
pub struct DepositReportScreen {
    use_cases: Arc<UseCases>,
    locale: Locale,
    page: PageRequest,
    filters: DepositFilters,
    deposits: Option<Page<ReportedDeposit>>,
    loading: bool,
    error: ErrorBanner,
}

impl DepositReportScreen {
    #[must_use]
    pub fn new(use_cases: Arc<UseCases>, locale: Locale) -> Self {
        Self {
            use_cases,
            locale,
            page: PageRequest::default(),
            filters: DepositFilters::default(),
            deposits: None,
            loading: false,
            error: ErrorBanner::default(),
        }
    }

    pub async fn load(&mut self) {
        self.fetch(self.page).await;
    }

    /// The current page only moves once `page` has loaded
    async fn fetch(&mut self, page: PageRequest) {
        self.loading = true;
        let request = ListDepositsRequest::new(page, self.filters.clone());
        match self.use_cases.list_deposits.execute(request).await {
            Ok(page) => {
                self.page = PageRequest::new(page.page, page.page_size);
                self.deposits = Some(page);
                self.error.dismiss();
            }
            Err(e) => self.error.show(&e, self.locale),
        }
        self.loading = false;
    }

    /// Replace the filters without loading; the next load starts at page 1
    pub fn set_filters(&mut self, filters: DepositFilters) {
        self.filters = filters;
        self.page.page = 1;
    }

    /// Replace the filters and reload from the first page
    pub async fn apply_filters(&mut self, filters: DepositFilters) {
        self.set_filters(filters);
        self.load().await;
    }

    pub async fn clear_filters(&mut self) {
        self.apply_filters(DepositFilters::default()).await;
    }

    pub async fn go_to_page(&mut self, page: u32) {
        self.fetch(PageRequest { page, ..self.page }).await;
    }

    pub async fn set_page_size(&mut self, page_size: u32) {
        self.fetch(PageRequest::new(1, page_size)).await;
    }

    pub async fn resend(&mut self, transaction_id: &str) -> bool {
        let request = ResendDepositOrderRequest::new(transaction_id);
        match self.use_cases.resend_deposit_order.execute(request).await {
            Ok(()) => {
                self.error.dismiss();
                true
            }
            Err(e) => {
                self.error.show(&e, self.locale);
                false
            }
        }
    }

    /// Build a spreadsheet of every deposit matching the current filters,
    /// not just the visible page.
    pub async fn export(&mut self, today: NaiveDate) -> Option<DepositSpreadsheet> {
        let result = self
            .use_cases
            .list_all_deposits
            .execute(self.filters.clone())
            .await
            .and_then(|deposits| DepositSpreadsheet::build(&deposits, today));
        match result {
            Ok(sheet) => {
                info!(rows = sheet.row_count(), file = sheet.filename(), "Deposit report exported");
                Some(sheet)
            }
            Err(e) => {
                self.error.show(&e, self.locale);
                None
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error.dismiss();
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn filters(&self) -> &DepositFilters {
        &self.filters
    }

    pub fn deposits(&self) -> Option<&Page<ReportedDeposit>> {
        self.deposits.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::testing::Harness;
    use crate::domain::{CryptoType, RepositoryError};
    use crate::test_utils::{MockDepositRepository, sample_deposit_payload};

    fn harness() -> Harness {
        let mut usdt = sample_deposit_payload("tx_3");
        usdt.crypto_type = CryptoType::Usdt;
        Harness {
            deposits: Arc::new(MockDepositRepository::with_deposits(vec![
                sample_deposit_payload("tx_1"),
                sample_deposit_payload("tx_2"),
                usdt,
            ])),
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[tokio::test]
    async fn test_filters_reset_to_first_page() {
        let harness = harness();
        let mut screen = DepositReportScreen::new(harness.use_cases(), Locale::English);
        screen.set_page_size(1).await;
        screen.go_to_page(3).await;
        assert_eq!(screen.page().page, 3);

        screen
            .apply_filters(DepositFilters {
                crypto_type: Some(CryptoType::Btc),
                ..Default::default()
            })
            .await;

        assert_eq!(screen.page().page, 1);
        assert_eq!(screen.deposits().unwrap().total, 2);
    }

    #[tokio::test]
    async fn test_failed_page_change_keeps_current_page() {
        let harness = harness();
        let mut screen = DepositReportScreen::new(harness.use_cases(), Locale::English);
        screen.set_page_size(1).await;

        harness
            .deposits
            .fail_next(RepositoryError::Unknown("timeout".to_string()));
        screen.go_to_page(2).await;
        assert_eq!(screen.page().page, 1);
        assert_eq!(screen.deposits().unwrap().items[0].transaction_id, "tx_1");
        assert!(screen.error().is_some());

        screen.go_to_page(2).await;
        assert_eq!(screen.page().page, 2);
        assert_eq!(screen.deposits().unwrap().items[0].transaction_id, "tx_2");
    }

    #[tokio::test]
    async fn test_export_covers_all_pages() {
        let harness = harness();
        let mut screen = DepositReportScreen::new(harness.use_cases(), Locale::English);
        screen.set_page_size(1).await;

        let sheet = screen.export(today()).await.unwrap();
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.filename(), "deposits-report-2026-10-16.csv");
    }

    #[tokio::test]
    async fn test_resend_records_order() {
        let harness = harness();
        let mut screen = DepositReportScreen::new(harness.use_cases(), Locale::English);

        assert!(screen.resend("tx_2").await);
        assert!(!screen.resend("tx_404").await);
        assert_eq!(harness.deposits.resent_orders(), vec!["tx_2".to_string()]);
        assert!(screen.error().is_some());
    }

    #[tokio::test]
    async fn test_export_failure_sets_error() {
        let harness = Harness {
            deposits: Arc::new(MockDepositRepository::failing(RepositoryError::Unknown(
                "connection refused".to_string(),
            ))),
            ..Default::default()
        };
        let mut screen = DepositReportScreen::new(harness.use_cases(), Locale::English);

        assert!(screen.export(today()).await.is_none());
        assert!(screen.error().is_some());
    }
}
