// Analytics API trait - Read-only seam to the mocked backend
use crate::domain::analytics::{CostInsights, MealAnalysis, Report, Summary, WastageAnalytics};
use crate::domain::filters::{CostCategory, DateRange, ReportType, Venue};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Dashboard summary for a date range.
    async fn get_summary(&self, range: DateRange) -> anyhow::Result<Summary>;

    /// Waste analytics scoped to a venue; `Venue::All` returns the
    /// cross-venue payload with per-venue records populated.
    async fn get_wastage_analytics(
        &self,
        range: DateRange,
        venue: Venue,
    ) -> anyhow::Result<WastageAnalytics>;

    /// Served/wasted figures per meal, in service order.
    async fn get_meal_analysis(&self) -> anyhow::Result<MealAnalysis>;

    /// Cost metrics, trends, breakdown, opportunities, and alerts.
    async fn get_cost_insights(
        &self,
        range: DateRange,
        category: CostCategory,
    ) -> anyhow::Result<CostInsights>;

    /// Report payload for a granularity and date.
    async fn get_report(&self, kind: ReportType, date: NaiveDate) -> anyhow::Result<Report>;
}
