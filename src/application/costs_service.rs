// Costs service - Use case for the cost insights page
use crate::application::analytics_api::AnalyticsApi;
use crate::domain::analytics::{CostInsights, MonthlyCost};
use crate::domain::filters::{CostCategory, DateRange};
use crate::domain::store::{FetchEvent, PageStore, StalePolicy};
use crate::domain::view::{page_body, rupees, NamedValue, PageBody, StatCard, Tone};
use serde::Serialize;
use std::sync::Arc;

const FETCH_ERROR: &str = "Failed to fetch cost insights data";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCard {
    pub title: String,
    pub amount: String,
    pub description: String,
    pub priority: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertLine {
    pub message: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostsView {
    pub cards: Vec<StatCard>,
    /// Stacked area rows, one per month, in chronological order.
    pub monthly_costs: Vec<MonthlyCost>,
    pub cost_breakdown: Vec<NamedValue>,
    pub opportunities: Vec<OpportunityCard>,
    pub alerts: Vec<AlertLine>,
}

#[derive(Clone)]
pub struct CostsService {
    api: Arc<dyn AnalyticsApi>,
    store: Arc<PageStore<CostInsights>>,
}

impl CostsService {
    pub fn new(api: Arc<dyn AnalyticsApi>, policy: StalePolicy) -> Self {
        Self {
            api,
            store: Arc::new(PageStore::new(policy)),
        }
    }

    pub async fn refresh(&self, range: DateRange, category: CostCategory) {
        let seq = self.store.begin();
        tracing::debug!(
            range = range.param(),
            category = category.param(),
            seq,
            "refreshing cost insights"
        );

        match self.api.get_cost_insights(range, category).await {
            Ok(insights) => {
                self.store.complete(FetchEvent::Succeeded {
                    seq,
                    payload: insights,
                });
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "cost insights fetch failed");
                self.store.complete(FetchEvent::Failed {
                    seq,
                    message: FETCH_ERROR.to_string(),
                });
            }
        }
    }

    pub fn body(&self) -> PageBody<CostsView> {
        page_body(&self.store.snapshot(), build_costs_view)
    }
}

fn build_costs_view(insights: &CostInsights) -> CostsView {
    let cards = insights
        .cost_metrics
        .iter()
        .map(|metric| {
            StatCard::new(metric.title.clone(), rupees(metric.amount))
                .with_description(format!("vs last {}", metric.period))
                .with_trend(metric.trend)
        })
        .collect();

    let cost_breakdown = NamedValue::sequence(
        insights
            .cost_breakdown
            .iter()
            .map(|entry| (entry.name.clone(), entry.value)),
    );

    let opportunities = insights
        .savings_opportunities
        .iter()
        .map(|opportunity| OpportunityCard {
            title: opportunity.title.clone(),
            amount: rupees(opportunity.amount),
            description: opportunity.description.clone(),
            priority: format!("{} Priority", opportunity.priority.label()),
            tone: Tone::for_priority(opportunity.priority),
        })
        .collect();

    let alerts = insights
        .cost_alerts
        .iter()
        .map(|alert| AlertLine {
            message: alert.message.clone(),
            tone: Tone::for_priority(alert.severity),
        })
        .collect();

    CostsView {
        cards,
        monthly_costs: insights.monthly_costs.clone(),
        cost_breakdown,
        opportunities,
        alerts,
    }
}
