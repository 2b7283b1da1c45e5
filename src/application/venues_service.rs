// Venues service - Use case for the venue analysis page
use crate::application::analytics_api::AnalyticsApi;
use crate::domain::analytics::WastageAnalytics;
use crate::domain::filters::{DateRange, Venue};
use crate::domain::store::{FetchEvent, PageStore, StalePolicy};
use crate::domain::view::{page_body, rupees, NamedValue, PageBody, StatCard, TrendChart};
use serde::Serialize;
use std::sync::Arc;

const FETCH_ERROR: &str = "Failed to fetch venue analysis data";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueCard {
    pub name: String,
    pub total_waste: String,
    pub waste_cost: String,
    pub efficiency: String,
    pub most_wasted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuesView {
    pub cards: Vec<StatCard>,
    pub waste_trend: TrendChart,
    pub most_wasted: Vec<NamedValue>,
    /// Radar-style triple: efficiency, waste control, cost management.
    pub performance: Vec<NamedValue>,
    /// Comparison cards, present only for the all-venues scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_cards: Option<Vec<VenueCard>>,
}

#[derive(Clone)]
pub struct VenuesService {
    api: Arc<dyn AnalyticsApi>,
    store: Arc<PageStore<WastageAnalytics>>,
}

impl VenuesService {
    pub fn new(api: Arc<dyn AnalyticsApi>, policy: StalePolicy) -> Self {
        Self {
            api,
            store: Arc::new(PageStore::new(policy)),
        }
    }

    pub async fn refresh(&self, range: DateRange, venue: Venue) {
        let seq = self.store.begin();
        tracing::debug!(range = range.param(), venue = venue.param(), seq, "refreshing venue analysis");

        match self.api.get_wastage_analytics(range, venue).await {
            Ok(analytics) => {
                self.store.complete(FetchEvent::Succeeded {
                    seq,
                    payload: analytics,
                });
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "venue analysis fetch failed");
                self.store.complete(FetchEvent::Failed {
                    seq,
                    message: FETCH_ERROR.to_string(),
                });
            }
        }
    }

    pub fn body(&self, venue: Venue) -> PageBody<VenuesView> {
        page_body(&self.store.snapshot(), |analytics| {
            build_venues_view(analytics, venue)
        })
    }

    #[cfg(test)]
    fn data(&self) -> Option<WastageAnalytics> {
        self.store.snapshot().data
    }
}

fn build_venues_view(analytics: &WastageAnalytics, venue: Venue) -> VenuesView {
    let cards = vec![
        StatCard::new("Total Waste", format!("{} kg", analytics.total_waste)),
        StatCard::new("Waste Cost", rupees(analytics.waste_cost)),
        StatCard::new("Efficiency Rate", format!("{}%", analytics.efficiency)),
    ];

    let most_wasted = NamedValue::sequence(
        analytics
            .most_wasted_items
            .iter()
            .map(|item| (item.name.clone(), item.amount)),
    );

    let performance = vec![
        NamedValue::new("Efficiency", analytics.efficiency),
        NamedValue::new("Waste Control", 100.0 - analytics.total_waste / 100.0),
        NamedValue::new("Cost Management", 100.0 - analytics.waste_cost / 1000.0),
    ];

    let venue_cards = venue.is_all().then(|| {
        analytics
            .venues
            .iter()
            .map(|record| VenueCard {
                name: record.name.clone(),
                total_waste: format!("{}kg", record.total_waste),
                waste_cost: rupees(record.waste_cost),
                efficiency: format!("{}%", record.efficiency),
                most_wasted: record.most_wasted_item.name.clone(),
            })
            .collect()
    });

    VenuesView {
        cards,
        waste_trend: TrendChart {
            title: "Waste Trends".to_string(),
            points: analytics.daily_trends.clone(),
        },
        most_wasted,
        performance,
        venue_cards,
    }
}
