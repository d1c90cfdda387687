use std::sync::Arc;

use async_trait::async_trait;
use tracing::{instrument, warn};

use super::UseCase;
use crate::domain::{DashboardError, DashboardRepository, DashboardSummary};

/// Load the dashboard landing page figures
pub struct GetDashboardSummaryUseCase {
    repository: Arc<dyn DashboardRepository>,
}

impl GetDashboardSummaryUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for GetDashboardSummaryUseCase {
    type Request = ();
    type Output = DashboardSummary;
    type Error = DashboardError;

    #[instrument(skip_all)]
    async fn execute(&self, _request: ()) -> Result<DashboardSummary, DashboardError> {
        let payload = self.repository.fetch_summary().await.map_err(|e| {
            warn!(error = %e, "Failed to fetch dashboard summary");
            DashboardError::from(e)
        })?;
        Ok(DashboardSummary::from(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RepositoryError;
    use crate::test_utils::{MockDashboardRepository, sample_dashboard_payload};

    #[tokio::test]
    async fn test_summary_maps_payload() {
        let repo = Arc::new(MockDashboardRepository::new());
        let summary = GetDashboardSummaryUseCase::new(repo)
            .execute(())
            .await
            .unwrap();
        assert_eq!(summary, DashboardSummary::from(sample_dashboard_payload()));
    }

    #[tokio::test]
    async fn test_summary_failure_is_unknown() {
        let repo = Arc::new(MockDashboardRepository::failing(RepositoryError::Unknown(
            "503".to_string(),
        )));
        let result = GetDashboardSummaryUseCase::new(repo).execute(()).await;
        assert!(matches!(result, Err(DashboardError::Unknown(_))));
    }
}
