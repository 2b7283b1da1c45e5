// Trends service - Use case for the waste trends page
use crate::application::analytics_api::AnalyticsApi;
use crate::domain::analytics::{MealAnalysis, WastageAnalytics};
use crate::domain::filters::{DateRange, Venue};
use crate::domain::store::{FetchEvent, PageStore, StalePolicy};
use crate::domain::view::{
    capitalize, page_body, rupees, NamedValue, PageBody, StatCard, Tone, TrendChart,
};
use serde::Serialize;
use std::sync::Arc;

const FETCH_ERROR: &str = "Failed to fetch waste trends data";

/// Merged payload of the two parallel trends requests.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendsData {
    pub analytics: WastageAnalytics,
    pub meals: MealAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsView {
    pub cards: Vec<StatCard>,
    pub trend_chart: TrendChart,
    pub meal_waste: Vec<NamedValue>,
    pub most_wasted: Vec<NamedValue>,
    /// Present only for the all-venues scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_waste: Option<Vec<NamedValue>>,
    pub recommendations: Vec<String>,
}

#[derive(Clone)]
pub struct TrendsService {
    api: Arc<dyn AnalyticsApi>,
    store: Arc<PageStore<TrendsData>>,
}

impl TrendsService {
    pub fn new(api: Arc<dyn AnalyticsApi>, policy: StalePolicy) -> Self {
        Self {
            api,
            store: Arc::new(PageStore::new(policy)),
        }
    }

    pub async fn refresh(&self, range: DateRange, venue: Venue) {
        let seq = self.store.begin();
        tracing::debug!(range = range.param(), venue = venue.param(), seq, "refreshing waste trends");

        let result = futures::try_join!(
            self.api.get_wastage_analytics(range, venue),
            self.api.get_meal_analysis(),
        );

        match result {
            Ok((analytics, meals)) => {
                self.store.complete(FetchEvent::Succeeded {
                    seq,
                    payload: TrendsData { analytics, meals },
                });
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "waste trends fetch failed");
                self.store.complete(FetchEvent::Failed {
                    seq,
                    message: FETCH_ERROR.to_string(),
                });
            }
        }
    }

    pub fn body(&self, range: DateRange, venue: Venue) -> PageBody<TrendsView> {
        page_body(&self.store.snapshot(), |data| {
            build_trends_view(data, range, venue)
        })
    }
}

fn build_trends_view(data: &TrendsData, range: DateRange, venue: Venue) -> TrendsView {
    let analytics = &data.analytics;

    let cards = vec![
        StatCard::new("Total Waste", format!("{} kg", analytics.total_waste))
            .with_description(format!(
                "{} waste at {}",
                range.possessive(),
                venue.label()
            ))
            .with_trend_caption(5.0, "vs last week"),
        StatCard::new("Waste Cost", rupees(analytics.waste_cost))
            .with_description(format!("{} cost impact", range.possessive()))
            .with_trend_caption(-2.0, "vs last week")
            .with_tone(Tone::Orange),
        StatCard::new("Most Wasted", analytics.most_wasted_item.name.clone())
            .with_description(format!("{}kg wasted", analytics.most_wasted_item.amount))
            .with_tone(Tone::Yellow),
        StatCard::new("Efficiency", format!("{}%", analytics.efficiency))
            .with_description("Food utilization rate")
            .with_trend_caption(-1.0, "vs last week")
            .with_tone(Tone::Green),
    ];

    let title = match range {
        DateRange::Today => "Hourly Waste Trend",
        DateRange::Week => "Daily Waste Trend",
        DateRange::Month => "Weekly Waste Trend",
    };

    let meal_waste = NamedValue::sequence(
        data.meals
            .iter()
            .map(|meal| (capitalize(&meal.name), meal.waste)),
    );

    let most_wasted = NamedValue::sequence(
        analytics
            .most_wasted_items
            .iter()
            .map(|item| (item.name.clone(), item.amount)),
    );

    let venue_waste = venue.is_all().then(|| {
        NamedValue::sequence(
            analytics
                .location_waste
                .iter()
                .map(|entry| (entry.venue.clone(), entry.waste)),
        )
    });

    let portion_advice = if venue.is_all() {
        "Implement portion control measures across all venues".to_string()
    } else {
        format!(
            "Optimize portion sizes at {} based on consumption patterns",
            venue.label()
        )
    };
    let recommendations = vec![
        portion_advice,
        format!(
            "Review {} preparation process to reduce waste",
            analytics.most_wasted_item.name
        ),
        format!(
            "Current efficiency rate of {}% can be improved through better inventory management",
            analytics.efficiency
        ),
    ];

    TrendsView {
        cards,
        trend_chart: TrendChart {
            title: title.to_string(),
            points: analytics.daily_trends.clone(),
        },
        meal_waste,
        most_wasted,
        venue_waste,
        recommendations,
    }
}
