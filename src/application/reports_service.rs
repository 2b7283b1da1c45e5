// Reports service - Use case for the daily/weekly/monthly reports page
use crate::application::analytics_api::AnalyticsApi;
use crate::domain::analytics::{Report, ReportChartRow, ReportRow};
use crate::domain::filters::ReportType;
use crate::domain::store::{FetchEvent, PageStore, StalePolicy};
use crate::domain::view::{page_body, rupees, wasted_percent, PageBody, StatCard, Tone};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

const FETCH_ERROR: &str = "Failed to fetch report data";

// Demo trend badges carried over from the source report cards.
const SERVED_TREND: f64 = 5.0;
const WASTE_TREND: f64 = -2.0;
const COST_TREND: f64 = -8.0;
const EFFICIENCY_TREND: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportChart {
    pub title: String,
    /// Key the chart reads for the x axis: `name`, `day`, or `week`.
    pub x_axis_key: String,
    pub rows: Vec<ReportChartRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsView {
    pub heading: String,
    pub cards: Vec<StatCard>,
    pub chart: ReportChart,
    pub table: Vec<ReportRow>,
}

#[derive(Clone)]
pub struct ReportsService {
    api: Arc<dyn AnalyticsApi>,
    store: Arc<PageStore<Report>>,
}

impl ReportsService {
    pub fn new(api: Arc<dyn AnalyticsApi>, policy: StalePolicy) -> Self {
        Self {
            api,
            store: Arc::new(PageStore::new(policy)),
        }
    }

    pub async fn refresh(&self, kind: ReportType, date: NaiveDate) {
        let seq = self.store.begin();
        tracing::debug!(kind = kind.param(), %date, seq, "refreshing report");

        match self.api.get_report(kind, date).await {
            Ok(report) => {
                self.store.complete(FetchEvent::Succeeded {
                    seq,
                    payload: report,
                });
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "report fetch failed");
                self.store.complete(FetchEvent::Failed {
                    seq,
                    message: FETCH_ERROR.to_string(),
                });
            }
        }
    }

    pub fn body(&self, kind: ReportType) -> PageBody<ReportsView> {
        page_body(&self.store.snapshot(), |report| {
            build_reports_view(report, kind)
        })
    }
}

fn build_reports_view(report: &Report, kind: ReportType) -> ReportsView {
    let summary = &report.summary;
    let percent = wasted_percent(summary.total_waste, summary.total_served);

    let cards = vec![
        StatCard::new("Total Meals Served", format!("{}", summary.total_served))
            .with_description(format!("meals this {}", kind.period_noun()))
            .with_trend(SERVED_TREND),
        StatCard::new("Food Waste", format!("{}kg", summary.total_waste))
            .with_description(format!("{percent:.1}% of total served"))
            .with_trend(WASTE_TREND)
            .with_tone(Tone::Red),
        StatCard::new("Cost Saved", rupees(summary.cost_saved))
            .with_description("vs. previous period")
            .with_trend(COST_TREND)
            .with_tone(Tone::Green),
        StatCard::new("Efficiency Rate", format!("{}%", summary.efficiency))
            .with_description("food utilization")
            .with_trend(EFFICIENCY_TREND)
            .with_tone(Tone::Blue),
    ];

    let (title, rows) = match kind {
        ReportType::Daily => ("Meal-wise Analysis".to_string(), report.meal_data.clone()),
        _ => (
            format!("{} Overview", kind.label()),
            report.trends.clone(),
        ),
    };

    ReportsView {
        heading: format!("{} Report", kind.label()),
        cards,
        chart: ReportChart {
            title,
            x_axis_key: kind.x_axis_key().to_string(),
            rows,
        },
        table: report.detailed_report.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::{
        CostInsights, MealAnalysis, ReportSummary, Summary, WastageAnalytics,
    };
    use crate::domain::filters::{CostCategory, DateRange, Venue};
    use async_trait::async_trait;

    fn sample_report(kind: ReportType) -> Report {
        let summary = ReportSummary {
            total_served: 1000.0,
            total_waste: 45.0,
            cost_saved: 12500.0,
            efficiency: 95.5,
        };
        let meal_data = if kind == ReportType::Daily {
            vec![
                ReportChartRow {
                    label: "Breakfast".to_string(),
                    served: 300.0,
                    waste: 12.0,
                },
                ReportChartRow {
                    label: "Lunch".to_string(),
                    served: 420.0,
                    waste: 20.0,
                },
            ]
        } else {
            vec![]
        };
        let trends = if kind == ReportType::Daily {
            vec![]
        } else {
            vec![ReportChartRow {
                label: "Mon".to_string(),
                served: 950.0,
                waste: 42.0,
            }]
        };
        Report {
            summary,
            meal_data,
            trends,
            detailed_report: vec![ReportRow {
                meal_type: "Lunch".to_string(),
                served: 420.0,
                waste: 20.0,
                efficiency: 95.2,
                cost_impact: 1600.0,
            }],
        }
    }

    struct FixedApi {
        fail: bool,
    }

    #[async_trait]
    impl AnalyticsApi for FixedApi {
        async fn get_summary(&self, _range: DateRange) -> anyhow::Result<Summary> {
            unreachable!("reports never requests the summary")
        }

        async fn get_wastage_analytics(
            &self,
            _range: DateRange,
            _venue: Venue,
        ) -> anyhow::Result<WastageAnalytics> {
            unreachable!("reports never requests wastage analytics")
        }

        async fn get_meal_analysis(&self) -> anyhow::Result<MealAnalysis> {
            unreachable!("reports never requests meal analysis")
        }

        async fn get_cost_insights(
            &self,
            _range: DateRange,
            _category: CostCategory,
        ) -> anyhow::Result<CostInsights> {
            unreachable!("reports never requests cost insights")
        }

        async fn get_report(&self, kind: ReportType, _date: NaiveDate) -> anyhow::Result<Report> {
            if self.fail {
                anyhow::bail!("backend unavailable");
            }
            Ok(sample_report(kind))
        }
    }

    fn service(fail: bool) -> ReportsService {
        ReportsService::new(Arc::new(FixedApi { fail }), StalePolicy::LastWriteWins)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[tokio::test]
    async fn test_daily_report_uses_meal_rows_and_name_axis() {
        let service = service(false);
        service.refresh(ReportType::Daily, date()).await;

        let PageBody::Ready { view } = service.body(ReportType::Daily) else {
            panic!("expected ready body");
        };
        assert_eq!(view.heading, "Daily Report");
        assert_eq!(view.chart.title, "Meal-wise Analysis");
        assert_eq!(view.chart.x_axis_key, "name");
        assert_eq!(view.chart.rows[0].label, "Breakfast");
    }

    #[tokio::test]
    async fn test_weekly_report_uses_trend_rows_and_day_axis() {
        let service = service(false);
        service.refresh(ReportType::Weekly, date()).await;

        let PageBody::Ready { view } = service.body(ReportType::Weekly) else {
            panic!("expected ready body");
        };
        assert_eq!(view.heading, "Weekly Report");
        assert_eq!(view.chart.title, "Weekly Overview");
        assert_eq!(view.chart.x_axis_key, "day");
        assert_eq!(view.chart.rows[0].label, "Mon");
        assert_eq!(view.cards[0].description.as_deref(), Some("meals this week"));
    }

    #[tokio::test]
    async fn test_waste_card_derives_percent_of_served() {
        let service = service(false);
        service.refresh(ReportType::Daily, date()).await;

        let PageBody::Ready { view } = service.body(ReportType::Daily) else {
            panic!("expected ready body");
        };
        let waste = &view.cards[1];
        assert_eq!(waste.value, "45kg");
        assert_eq!(waste.description.as_deref(), Some("4.5% of total served"));
    }

    #[tokio::test]
    async fn test_failure_stores_fixed_error_string() {
        let service = service(true);
        service.refresh(ReportType::Monthly, date()).await;

        assert_eq!(
            service.body(ReportType::Monthly),
            PageBody::Error {
                message: "Failed to fetch report data".to_string()
            }
        );
    }
}
