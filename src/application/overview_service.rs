// Overview service - Use case for the dashboard overview page
use crate::application::analytics_api::AnalyticsApi;
use crate::domain::analytics::{Summary, WastageAnalytics};
use crate::domain::filters::{DateRange, Venue};
use crate::domain::store::{FetchEvent, PageStore, StalePolicy};
use crate::domain::view::{page_body, rupees, wasted_percent, PageBody, StatCard, Tone, TrendChart};
use serde::Serialize;
use std::sync::Arc;

const FETCH_ERROR: &str = "Failed to fetch dashboard data";

/// Merged payload of the two parallel overview requests.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewData {
    pub summary: Summary,
    pub analytics: WastageAnalytics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub cards: Vec<StatCard>,
    pub waste_trend: TrendChart,
}

#[derive(Clone)]
pub struct OverviewService {
    api: Arc<dyn AnalyticsApi>,
    store: Arc<PageStore<OverviewData>>,
}

impl OverviewService {
    pub fn new(api: Arc<dyn AnalyticsApi>, policy: StalePolicy) -> Self {
        Self {
            api,
            store: Arc::new(PageStore::new(policy)),
        }
    }

    /// Fetch the summary and the cross-venue analytics in parallel and
    /// deliver the merged result to the page store.
    pub async fn refresh(&self, range: DateRange) {
        let seq = self.store.begin();
        tracing::debug!(range = range.param(), seq, "refreshing overview");

        let result = futures::try_join!(
            self.api.get_summary(range),
            self.api.get_wastage_analytics(range, Venue::All),
        );

        match result {
            Ok((summary, analytics)) => {
                self.store.complete(FetchEvent::Succeeded {
                    seq,
                    payload: OverviewData { summary, analytics },
                });
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "overview fetch failed");
                self.store.complete(FetchEvent::Failed {
                    seq,
                    message: FETCH_ERROR.to_string(),
                });
            }
        }
    }

    pub fn body(&self, range: DateRange) -> PageBody<OverviewView> {
        page_body(&self.store.snapshot(), |data| {
            build_overview_view(data, range)
        })
    }
}

fn build_overview_view(data: &OverviewData, range: DateRange) -> OverviewView {
    let summary = &data.summary;
    let percent = wasted_percent(summary.total_food_wasted, summary.total_food_served);

    let cards = vec![
        StatCard::new(
            "Total Food Served",
            format!("{} kg", summary.total_food_served),
        )
        .with_description(format!("{} total serving", range.possessive())),
        StatCard::new(
            "Total Food Wasted",
            format!("{} kg", summary.total_food_wasted),
        )
        .with_description(format!("{percent:.1}% of total food served"))
        .with_tone(Tone::Red),
        StatCard::new("Most Efficient Day", summary.most_efficient_day.day.clone())
            .with_description(format!(
                "Only {}% waste",
                summary.most_efficient_day.waste_percentage
            ))
            .with_tone(Tone::Green),
        StatCard::new("Top Wasted Item", summary.top_wasted_item.name.clone())
            .with_description(format!(
                "{}{} wasted",
                summary.top_wasted_item.amount, summary.top_wasted_item.unit
            ))
            .with_tone(Tone::Yellow),
        StatCard::new(
            "Average Cost of Waste",
            rupees(summary.average_cost_of_waste),
        )
        .with_description(format!("{} estimate", range.possessive()))
        .with_tone(Tone::Orange),
        StatCard::new(
            "Least Efficient Day",
            summary.least_efficient_day.day.clone(),
        )
        .with_description(format!(
            "{}% waste recorded",
            summary.least_efficient_day.waste_percentage
        ))
        .with_tone(Tone::Red),
    ];

    let title = match range {
        DateRange::Today => "Hourly Waste Trend",
        _ => "Daily Waste Trend",
    };

    OverviewView {
        cards,
        waste_trend: TrendChart {
            title: title.to_string(),
            points: data.analytics.daily_trends.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::{DayEfficiency, TrendPoint, WastedItem};
    use crate::domain::filters::{CostCategory, ReportType};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_summary(served: f64, wasted: f64) -> Summary {
        Summary {
            total_food_served: served,
            total_food_wasted: wasted,
            average_cost_of_waste: 2000.0,
            most_efficient_day: DayEfficiency {
                day: "Wednesday".to_string(),
                waste_percentage: 3.2,
            },
            least_efficient_day: DayEfficiency {
                day: "Saturday".to_string(),
                waste_percentage: 7.8,
            },
            top_wasted_item: WastedItem {
                name: "Rice".to_string(),
                amount: 8.5,
                unit: "kg".to_string(),
            },
        }
    }

    fn sample_analytics() -> WastageAnalytics {
        WastageAnalytics {
            total_waste: 45.0,
            waste_cost: 3600.0,
            efficiency: 93.5,
            most_wasted_item: WastedItem {
                name: "Rice".to_string(),
                amount: 12.0,
                unit: "kg".to_string(),
            },
            most_wasted_items: vec![],
            daily_trends: vec![
                TrendPoint {
                    date: "8 AM".to_string(),
                    waste: 2.0,
                },
                TrendPoint {
                    date: "12 PM".to_string(),
                    waste: 9.0,
                },
            ],
            location_waste: vec![],
            venues: vec![],
        }
    }

    struct FixedApi {
        summary: Summary,
        analytics: WastageAnalytics,
        summary_calls: AtomicUsize,
        analytics_calls: AtomicUsize,
        fail: bool,
    }

    impl FixedApi {
        fn new(summary: Summary, analytics: WastageAnalytics) -> Self {
            Self {
                summary,
                analytics,
                summary_calls: AtomicUsize::new(0),
                analytics_calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            let mut api = Self::new(sample_summary(1.0, 1.0), sample_analytics());
            api.fail = true;
            api
        }
    }

    #[async_trait]
    impl AnalyticsApi for FixedApi {
        async fn get_summary(&self, _range: DateRange) -> anyhow::Result<Summary> {
            self.summary_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("backend unavailable");
            }
            Ok(self.summary.clone())
        }

        async fn get_wastage_analytics(
            &self,
            _range: DateRange,
            _venue: Venue,
        ) -> anyhow::Result<WastageAnalytics> {
            self.analytics_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("backend unavailable");
            }
            Ok(self.analytics.clone())
        }

        async fn get_meal_analysis(&self) -> anyhow::Result<crate::domain::analytics::MealAnalysis> {
            unreachable!("overview never requests meal analysis")
        }

        async fn get_cost_insights(
            &self,
            _range: DateRange,
            _category: CostCategory,
        ) -> anyhow::Result<crate::domain::analytics::CostInsights> {
            unreachable!("overview never requests cost insights")
        }

        async fn get_report(
            &self,
            _kind: ReportType,
            _date: NaiveDate,
        ) -> anyhow::Result<crate::domain::analytics::Report> {
            unreachable!("overview never requests reports")
        }
    }

    #[tokio::test]
    async fn test_today_scenario_derives_wasted_percent_description() {
        let api = Arc::new(FixedApi::new(sample_summary(500.0, 25.0), sample_analytics()));
        let service = OverviewService::new(api, StalePolicy::LastWriteWins);

        service.refresh(DateRange::Today).await;

        let PageBody::Ready { view } = service.body(DateRange::Today) else {
            panic!("expected ready body");
        };
        let wasted = &view.cards[1];
        assert_eq!(wasted.value, "25 kg");
        assert_eq!(
            wasted.description.as_deref(),
            Some("5.0% of total food served")
        );
        assert_eq!(view.waste_trend.title, "Hourly Waste Trend");
        assert_eq!(view.waste_trend.points.len(), 2);
    }

    #[tokio::test]
    async fn test_week_range_switches_trend_title_and_possessive() {
        let api = Arc::new(FixedApi::new(
            sample_summary(3500.0, 180.0),
            sample_analytics(),
        ));
        let service = OverviewService::new(api, StalePolicy::LastWriteWins);

        service.refresh(DateRange::Week).await;

        let PageBody::Ready { view } = service.body(DateRange::Week) else {
            panic!("expected ready body");
        };
        assert_eq!(view.waste_trend.title, "Daily Waste Trend");
        assert_eq!(
            view.cards[0].description.as_deref(),
            Some("This week's total serving")
        );
    }

    #[tokio::test]
    async fn test_each_refresh_issues_exactly_one_fetch_pair() {
        let api = Arc::new(FixedApi::new(sample_summary(500.0, 25.0), sample_analytics()));
        let service = OverviewService::new(api.clone(), StalePolicy::LastWriteWins);

        service.refresh(DateRange::Today).await;
        service.refresh(DateRange::Week).await;

        assert_eq!(api.summary_calls.load(Ordering::SeqCst), 2);
        assert_eq!(api.analytics_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_stores_fixed_error_string() {
        let api = Arc::new(FixedApi::failing());
        let service = OverviewService::new(api, StalePolicy::LastWriteWins);

        service.refresh(DateRange::Today).await;

        assert_eq!(
            service.body(DateRange::Today),
            PageBody::Error {
                message: "Failed to fetch dashboard data".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_body_before_first_fetch_is_loading() {
        let api = Arc::new(FixedApi::new(sample_summary(500.0, 25.0), sample_analytics()));
        let service = OverviewService::new(api, StalePolicy::LastWriteWins);

        assert_eq!(service.body(DateRange::Today), PageBody::Loading);
    }
}
