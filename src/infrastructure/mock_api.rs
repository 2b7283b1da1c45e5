// Mock analytics backend - Deterministic in-process implementation
//
// Figures scale with the date range factor and each venue's share of
// the total, so the same filters always produce the same payload.
use crate::application::analytics_api::AnalyticsApi;
use crate::domain::analytics::{
    BreakdownEntry, CostAlert, CostInsights, DayEfficiency, MealAnalysis, MealServing,
    MetricSnapshot, MonthlyCost, Priority, Report, ReportChartRow, ReportRow, ReportSummary,
    SavingsOpportunity, Summary, TrendPoint, VenueRecord, VenueWaste, WastageAnalytics,
    WastedItem,
};
use crate::domain::filters::{CostCategory, DateRange, ReportType, Venue};
use crate::infrastructure::config::{ApiSettings, SampleProfile};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum MockApiError {
    #[error("simulated analytics outage")]
    Outage,
}

const HOURLY_LABELS: [&str; 7] = ["8 AM", "10 AM", "12 PM", "2 PM", "4 PM", "6 PM", "8 PM"];
const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEK_LABELS: [&str; 4] = ["Week 1", "Week 2", "Week 3", "Week 4"];
const MONTH_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

// Waste shares of the perennially worst items.
const WASTED_ITEMS: [(&str, f64); 4] = [
    ("Rice", 0.28),
    ("Bread", 0.22),
    ("Vegetables", 0.18),
    ("Curry", 0.12),
];

// Uneven-but-fixed weights that shape every trend series.
const TREND_WEIGHTS: [f64; 7] = [0.8, 1.2, 1.5, 1.0, 0.9, 1.1, 0.7];

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn range_factor(range: DateRange) -> f64 {
    match range {
        DateRange::Today => 1.0,
        DateRange::Week => 7.0,
        DateRange::Month => 30.0,
    }
}

fn venue_share(venue: Venue) -> f64 {
    match venue {
        Venue::All => 1.0,
        Venue::VenueA => 0.4,
        Venue::VenueB => 0.35,
        Venue::VenueC => 0.25,
    }
}

fn venue_efficiency(venue: Venue) -> f64 {
    match venue {
        Venue::All => 93.5,
        Venue::VenueA => 92.0,
        Venue::VenueB => 94.5,
        Venue::VenueC => 95.0,
    }
}

pub struct MockAnalyticsApi {
    profile: SampleProfile,
    latency: Duration,
    simulate_outage: bool,
}

impl MockAnalyticsApi {
    pub fn new(profile: SampleProfile, settings: &ApiSettings) -> Self {
        Self {
            profile,
            latency: Duration::from_millis(settings.latency_ms),
            simulate_outage: settings.simulate_outage,
        }
    }

    async fn simulate_backend(&self) -> anyhow::Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.simulate_outage {
            return Err(MockApiError::Outage.into());
        }
        Ok(())
    }

    fn wasted_items(&self, total_waste: f64) -> Vec<WastedItem> {
        WASTED_ITEMS
            .iter()
            .map(|(name, share)| WastedItem {
                name: name.to_string(),
                amount: round1(total_waste * share),
                unit: "kg".to_string(),
            })
            .collect()
    }

    fn trend_points(&self, range: DateRange, total_waste: f64) -> Vec<TrendPoint> {
        let labels: &[&str] = match range {
            DateRange::Today => &HOURLY_LABELS,
            DateRange::Week => &DAY_LABELS,
            DateRange::Month => &WEEK_LABELS,
        };
        let weight_sum: f64 = TREND_WEIGHTS[..labels.len()].iter().sum();
        labels
            .iter()
            .zip(TREND_WEIGHTS)
            .map(|(label, weight)| TrendPoint {
                date: label.to_string(),
                waste: round1(total_waste * weight / weight_sum),
            })
            .collect()
    }

    fn analytics_for(&self, range: DateRange, venue: Venue) -> WastageAnalytics {
        let factor = range_factor(range);
        let total_waste = round1(self.profile.wasted_today * factor * venue_share(venue));
        let waste_cost = round1(total_waste * self.profile.cost_per_kg);
        let most_wasted_items = self.wasted_items(total_waste);

        let (location_waste, venues) = if venue.is_all() {
            let scoped = [Venue::VenueA, Venue::VenueB, Venue::VenueC];
            let location_waste = scoped
                .iter()
                .map(|v| VenueWaste {
                    venue: v.label().to_string(),
                    waste: round1(total_waste * venue_share(*v)),
                })
                .collect();
            let venues = scoped
                .iter()
                .map(|v| {
                    let venue_total = round1(total_waste * venue_share(*v));
                    VenueRecord {
                        name: v.label().to_string(),
                        total_waste: venue_total,
                        waste_cost: round1(venue_total * self.profile.cost_per_kg),
                        efficiency: venue_efficiency(*v),
                        most_wasted_item: self.wasted_items(venue_total).swap_remove(0),
                    }
                })
                .collect();
            (location_waste, venues)
        } else {
            (Vec::new(), Vec::new())
        };

        WastageAnalytics {
            total_waste,
            waste_cost,
            efficiency: venue_efficiency(venue),
            most_wasted_item: most_wasted_items[0].clone(),
            most_wasted_items,
            daily_trends: self.trend_points(range, total_waste),
            location_waste,
            venues,
        }
    }
}

#[async_trait]
impl AnalyticsApi for MockAnalyticsApi {
    async fn get_summary(&self, range: DateRange) -> anyhow::Result<Summary> {
        self.simulate_backend().await?;

        let factor = range_factor(range);
        let served = round1(self.profile.served_today * factor);
        let wasted = round1(self.profile.wasted_today * factor);

        Ok(Summary {
            total_food_served: served,
            total_food_wasted: wasted,
            average_cost_of_waste: round1(wasted * self.profile.cost_per_kg),
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
                amount: round1(wasted * WASTED_ITEMS[0].1),
                unit: "kg".to_string(),
            },
        })
    }

    async fn get_wastage_analytics(
        &self,
        range: DateRange,
        venue: Venue,
    ) -> anyhow::Result<WastageAnalytics> {
        self.simulate_backend().await?;
        Ok(self.analytics_for(range, venue))
    }

    async fn get_meal_analysis(&self) -> anyhow::Result<MealAnalysis> {
        self.simulate_backend().await?;

        Ok(vec![
            MealServing {
                name: "breakfast".to_string(),
                served: 150.0,
                waste: 8.0,
            },
            MealServing {
                name: "lunch".to_string(),
                served: 220.0,
                waste: 15.0,
            },
            MealServing {
                name: "dinner".to_string(),
                served: 180.0,
                waste: 12.0,
            },
            MealServing {
                name: "snacks".to_string(),
                served: 90.0,
                waste: 4.0,
            },
        ])
    }

    async fn get_cost_insights(
        &self,
        range: DateRange,
        category: CostCategory,
    ) -> anyhow::Result<CostInsights> {
        self.simulate_backend().await?;

        let factor = range_factor(range);
        let food = round1(2500.0 * factor);
        let labor = round1(1800.0 * factor);
        let overhead = round1(700.0 * factor);
        let period = match range {
            DateRange::Today => "day",
            DateRange::Week => "week",
            DateRange::Month => "month",
        };

        let metric = |title: &str, amount: f64, trend: f64| MetricSnapshot {
            title: title.to_string(),
            amount,
            trend,
            period: period.to_string(),
        };
        let cost_metrics = match category {
            CostCategory::All => vec![
                metric("Total Cost", food + labor + overhead, 12.0),
                metric("Food Cost", food, -5.0),
                metric("Labor Cost", labor, 8.0),
                metric("Overhead", overhead, 3.0),
            ],
            CostCategory::Food => vec![metric("Food Cost", food, -5.0)],
            CostCategory::Labor => vec![metric("Labor Cost", labor, 8.0)],
            CostCategory::Overhead => vec![metric("Overhead", overhead, 3.0)],
        };

        let monthly_costs = MONTH_LABELS
            .iter()
            .zip(TREND_WEIGHTS)
            .map(|(month, weight)| MonthlyCost {
                month: month.to_string(),
                food: round1(70000.0 * weight),
                labor: round1(32000.0 * weight),
                overhead: round1(15000.0 * weight),
            })
            .collect();

        Ok(CostInsights {
            cost_metrics,
            monthly_costs,
            cost_breakdown: vec![
                BreakdownEntry {
                    name: "Food Cost".to_string(),
                    value: food,
                },
                BreakdownEntry {
                    name: "Labor".to_string(),
                    value: labor,
                },
                BreakdownEntry {
                    name: "Overhead".to_string(),
                    value: overhead,
                },
            ],
            savings_opportunities: vec![
                SavingsOpportunity {
                    title: "Portion Control".to_string(),
                    amount: round1(food * 0.08),
                    description: "Standardize serving sizes at lunch to cut over-serving"
                        .to_string(),
                    priority: Priority::High,
                },
                SavingsOpportunity {
                    title: "Inventory Rotation".to_string(),
                    amount: round1(food * 0.05),
                    description: "First-in-first-out stock handling for perishables".to_string(),
                    priority: Priority::Medium,
                },
                SavingsOpportunity {
                    title: "Off-peak Staffing".to_string(),
                    amount: round1(labor * 0.03),
                    description: "Trim afternoon staffing between meal services".to_string(),
                    priority: Priority::Low,
                },
            ],
            cost_alerts: vec![
                CostAlert {
                    message: "Food costs trending 12% above budget".to_string(),
                    severity: Priority::High,
                },
                CostAlert {
                    message: "Labor overtime approaching the monthly cap".to_string(),
                    severity: Priority::Medium,
                },
                CostAlert {
                    message: "Overhead steady versus the previous period".to_string(),
                    severity: Priority::Low,
                },
            ],
        })
    }

    async fn get_report(&self, kind: ReportType, date: NaiveDate) -> anyhow::Result<Report> {
        self.simulate_backend().await?;

        // Calendar-day wobble keeps reports per-date distinct but stable.
        let jitter = (date.ordinal() % 7) as f64;
        let kind_factor = match kind {
            ReportType::Daily => 1.0,
            ReportType::Weekly => 7.0,
            ReportType::Monthly => 30.0,
        };

        let total_served = round1((1000.0 + jitter * 20.0) * kind_factor);
        let total_waste = round1((45.0 + jitter) * kind_factor);
        let efficiency = round1(100.0 - total_waste / total_served * 100.0);

        let meals = [
            ("Breakfast", 0.25, 0.22),
            ("Lunch", 0.4, 0.45),
            ("Dinner", 0.28, 0.26),
            ("Snacks", 0.07, 0.07),
        ];

        let meal_data = if kind == ReportType::Daily {
            meals
                .iter()
                .map(|(name, served_share, waste_share)| ReportChartRow {
                    label: name.to_string(),
                    served: round1(total_served * served_share),
                    waste: round1(total_waste * waste_share),
                })
                .collect()
        } else {
            Vec::new()
        };

        let trends = match kind {
            ReportType::Daily => Vec::new(),
            ReportType::Weekly => trend_rows(&DAY_LABELS, total_served, total_waste),
            ReportType::Monthly => trend_rows(&WEEK_LABELS, total_served, total_waste),
        };

        let detailed_report = meals
            .iter()
            .map(|(name, served_share, waste_share)| {
                let served = round1(total_served * served_share);
                let waste = round1(total_waste * waste_share);
                ReportRow {
                    meal_type: name.to_string(),
                    served,
                    waste,
                    efficiency: round1(100.0 - waste / served * 100.0),
                    cost_impact: round1(waste * self.profile.cost_per_kg),
                }
            })
            .collect();

        Ok(Report {
            summary: ReportSummary {
                total_served,
                total_waste,
                cost_saved: round1(total_waste * self.profile.cost_per_kg * 0.6),
                efficiency,
            },
            meal_data,
            trends,
            detailed_report,
        })
    }
}

fn trend_rows(labels: &[&str], total_served: f64, total_waste: f64) -> Vec<ReportChartRow> {
    let weight_sum: f64 = TREND_WEIGHTS[..labels.len()].iter().sum();
    labels
        .iter()
        .zip(TREND_WEIGHTS)
        .map(|(label, weight)| ReportChartRow {
            label: label.to_string(),
            served: round1(total_served * weight / weight_sum),
            waste: round1(total_waste * weight / weight_sum),
        })
        .collect()
}
