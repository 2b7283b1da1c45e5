// HTTP request handlers - One page refresh per request
use crate::application::costs_service::CostsView;
use crate::application::overview_service::OverviewView;
use crate::application::reports_service::ReportsView;
use crate::application::trends_service::TrendsView;
use crate::application::venues_service::VenuesView;
use crate::domain::filters::{CostCategory, DateRange, ReportType, Venue};
use crate::domain::view::PageBody;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCatalog {
    pub date_ranges: Vec<FilterOption>,
    pub venues: Vec<FilterOption>,
    pub cost_categories: Vec<FilterOption>,
    pub report_types: Vec<FilterOption>,
}

/// Filter catalogs with display labels for the dashboard shell.
pub async fn list_filters() -> Json<FilterCatalog> {
    Json(FilterCatalog {
        date_ranges: DateRange::ALL
            .iter()
            .map(|r| FilterOption {
                value: r.param(),
                label: r.label(),
            })
            .collect(),
        venues: Venue::ALL
            .iter()
            .map(|v| FilterOption {
                value: v.param(),
                label: v.label(),
            })
            .collect(),
        cost_categories: CostCategory::ALL
            .iter()
            .map(|c| FilterOption {
                value: c.param(),
                label: c.label(),
            })
            .collect(),
        report_types: ReportType::ALL
            .iter()
            .map(|k| FilterOption {
                value: k.param(),
                label: k.label(),
            })
            .collect(),
    })
}

#[derive(Deserialize)]
pub struct OverviewQuery {
    pub range: Option<String>,
}

pub async fn overview_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OverviewQuery>,
) -> Json<PageBody<OverviewView>> {
    let range = DateRange::from_param(query.range.as_deref());
    state.overview.refresh(range).await;
    Json(state.overview.body(range))
}

#[derive(Deserialize)]
pub struct TrendsQuery {
    pub range: Option<String>,
    pub venue: Option<String>,
}

pub async fn trends_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TrendsQuery>,
) -> Json<PageBody<TrendsView>> {
    let range = DateRange::from_param(query.range.as_deref());
    let venue = Venue::from_param(query.venue.as_deref());
    state.trends.refresh(range, venue).await;
    Json(state.trends.body(range, venue))
}

#[derive(Deserialize)]
pub struct CostsQuery {
    pub range: Option<String>,
    pub category: Option<String>,
}

pub async fn costs_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CostsQuery>,
) -> Json<PageBody<CostsView>> {
    let range = DateRange::from_param(query.range.as_deref());
    let category = CostCategory::from_param(query.category.as_deref());
    state.costs.refresh(range, category).await;
    Json(state.costs.body())
}

#[derive(Deserialize)]
pub struct VenuesQuery {
    pub venue: Option<String>,
    pub range: Option<String>,
}

pub async fn venues_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VenuesQuery>,
) -> Json<PageBody<VenuesView>> {
    let venue = Venue::from_param(query.venue.as_deref());
    let range = DateRange::from_param(query.range.as_deref());
    state.venues.refresh(range, venue).await;
    Json(state.venues.body(venue))
}

#[derive(Deserialize)]
pub struct ReportsQuery {
    pub kind: Option<String>,
    pub date: Option<NaiveDate>,
}

pub async fn reports_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportsQuery>,
) -> Json<PageBody<ReportsView>> {
    let kind = ReportType::from_param(query.kind.as_deref());
    let date = report_date(query.date);
    state.reports.refresh(kind, date).await;
    Json(state.reports.body(kind))
}

/// A missing report date falls back to the current local date.
fn report_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_date_defaults_to_today() {
        let explicit = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(report_date(Some(explicit)), explicit);
        assert_eq!(report_date(None), chrono::Local::now().date_naive());
    }

    #[test]
    fn test_reports_query_parses_iso_date() {
        let query: ReportsQuery =
            serde_json::from_value(serde_json::json!({"kind": "weekly", "date": "2024-03-15"}))
                .unwrap();
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(
            ReportType::from_param(query.kind.as_deref()),
            ReportType::Weekly
        );
    }
}
