// Analytics payload entities - Shapes delivered by the analytics API
//
// Every entity is created fresh per fetch and replaced wholesale in the
// page store; nothing here is mutated in place.
use serde::{Deserialize, Serialize};

/// Dashboard summary for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_food_served: f64,
    pub total_food_wasted: f64,
    pub average_cost_of_waste: f64,
    pub most_efficient_day: DayEfficiency,
    pub least_efficient_day: DayEfficiency,
    pub top_wasted_item: WastedItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEfficiency {
    pub day: String,
    pub waste_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WastedItem {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

/// Waste analytics for a date range and venue scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WastageAnalytics {
    pub total_waste: f64,
    pub waste_cost: f64,
    pub efficiency: f64,
    pub most_wasted_item: WastedItem,
    pub most_wasted_items: Vec<WastedItem>,
    /// Chronological trend rows; order is preserved end to end.
    pub daily_trends: Vec<TrendPoint>,
    /// Per-venue figures, populated only for the all-venues scope.
    #[serde(default)]
    pub location_waste: Vec<VenueWaste>,
    #[serde(default)]
    pub venues: Vec<VenueRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub waste: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueWaste {
    pub venue: String,
    pub waste: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRecord {
    pub name: String,
    pub total_waste: f64,
    pub waste_cost: f64,
    pub efficiency: f64,
    pub most_wasted_item: WastedItem,
}

/// Served/wasted figures per meal, in service order (breakfast first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealServing {
    pub name: String,
    pub served: f64,
    pub waste: f64,
}

pub type MealAnalysis = Vec<MealServing>;

/// Cost insights for a date range and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInsights {
    pub cost_metrics: Vec<MetricSnapshot>,
    pub monthly_costs: Vec<MonthlyCost>,
    pub cost_breakdown: Vec<BreakdownEntry>,
    pub savings_opportunities: Vec<SavingsOpportunity>,
    pub cost_alerts: Vec<CostAlert>,
}

/// A labeled measurement with a signed percentage change versus the
/// prior period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSnapshot {
    pub title: String,
    pub amount: f64,
    pub trend: f64,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCost {
    pub month: String,
    pub food: f64,
    pub labor: f64,
    pub overhead: f64,
}

/// One slice of a partitioned total. Values need not sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsOpportunity {
    pub title: String,
    pub amount: f64,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAlert {
    pub message: String,
    pub severity: Priority,
}

/// Report payload for a report type and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: ReportSummary,
    /// Per-meal chart rows, populated for daily reports.
    #[serde(default)]
    pub meal_data: Vec<ReportChartRow>,
    /// Per-period chart rows, populated for weekly/monthly reports.
    #[serde(default)]
    pub trends: Vec<ReportChartRow>,
    pub detailed_report: Vec<ReportRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_served: f64,
    pub total_waste: f64,
    pub cost_saved: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportChartRow {
    pub label: String,
    pub served: f64,
    pub waste: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub meal_type: String,
    pub served: f64,
    pub waste: f64,
    pub efficiency: f64,
    pub cost_impact: f64,
}
