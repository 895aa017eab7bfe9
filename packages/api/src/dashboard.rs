//! Dashboard endpoints. Everything here is server-computed and read-only.

use crate::client::{ApiClient, ApiError};
use crate::types::{ChartData, DashboardSummary, RecentTransaction};

/// Period the gateway aggregates charts over when none is chosen.
pub const DEFAULT_CHART_PERIOD: &str = "6months";

impl ApiClient {
    /// GET `/api/v1/dashboard/summary`
    pub async fn dashboard_summary(&self, user_id: &str) -> Result<DashboardSummary, ApiError> {
        self.get_json(
            "/api/v1/dashboard/summary",
            &[("user_id", user_id.to_string())],
        )
        .await
    }

    /// GET `/api/v1/dashboard/charts`
    pub async fn dashboard_charts(
        &self,
        user_id: &str,
        period: &str,
    ) -> Result<ChartData, ApiError> {
        self.get_json(
            "/api/v1/dashboard/charts",
            &[
                ("user_id", user_id.to_string()),
                ("period", period.to_string()),
            ],
        )
        .await
    }

    /// GET `/api/v1/dashboard/recent-transactions` — the latest five.
    pub async fn recent_transactions(
        &self,
        user_id: &str,
    ) -> Result<Vec<RecentTransaction>, ApiError> {
        self.get_json(
            "/api/v1/dashboard/recent-transactions",
            &[("user_id", user_id.to_string())],
        )
        .await
    }
}
