// View atoms - Presentation-ready shapes shared by the page builders
use serde::Serialize;

use super::analytics::{Priority, TrendPoint};
use super::store::PageState;

/// Envelope every page renders into: exactly one of the three bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PageBody<V> {
    Loading,
    Error { message: String },
    Ready { view: V },
}

/// Pure render rule shared by every page: a stored error is exclusive,
/// otherwise a pending or empty store shows the loading body, otherwise
/// the view is built from the payload.
pub fn page_body<T, V>(state: &PageState<T>, build: impl FnOnce(&T) -> V) -> PageBody<V> {
    if let Some(message) = &state.error {
        return PageBody::Error {
            message: message.clone(),
        };
    }
    match &state.data {
        Some(data) if !state.loading => PageBody::Ready { view: build(data) },
        _ => PageBody::Loading,
    }
}

/// A `{name, value}` chart point, used for pie segments, bar entries,
/// and legends alike.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Order-preserving, lossless mapping into chart points.
    pub fn sequence<I>(entries: I) -> Vec<NamedValue>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        entries
            .into_iter()
            .map(|(name, value)| NamedValue { name, value })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendDirection {
    Up,
    Down,
}

/// Direction plus absolute magnitude of a signed percentage change.
/// Up means worse for cost and waste metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendBadge {
    pub direction: TrendDirection,
    pub percent: f64,
    /// Comparison caption shown next to the badge ("vs last week").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl TrendBadge {
    pub fn from_signed(trend: f64) -> Self {
        Self {
            direction: if trend >= 0.0 {
                TrendDirection::Up
            } else {
                TrendDirection::Down
            },
            percent: trend.abs(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Fixed color tone for priority and severity markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    Red,
    Yellow,
    Green,
    Orange,
    Blue,
}

impl Tone {
    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::High => Tone::Red,
            Priority::Medium => Tone::Yellow,
            Priority::Low => Tone::Green,
        }
    }
}

/// A summary/metric card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendBadge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

impl StatCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            description: None,
            trend: None,
            tone: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_trend(mut self, trend: f64) -> Self {
        self.trend = Some(TrendBadge::from_signed(trend));
        self
    }

    pub fn with_trend_caption(mut self, trend: f64, caption: impl Into<String>) -> Self {
        self.trend = Some(TrendBadge::from_signed(trend).with_caption(caption));
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }
}

/// A titled time-series section; rows keep their chronological source
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendChart {
    pub title: String,
    pub points: Vec<TrendPoint>,
}

/// Percentage of served food that was wasted, rounded to one decimal
/// for display only. Zero served is guarded to 0.0.
pub fn wasted_percent(wasted: f64, served: f64) -> f64 {
    if served == 0.0 {
        return 0.0;
    }
    (wasted / served * 1000.0).round() / 10.0
}

/// Format a rupee amount for card values.
pub fn rupees(amount: f64) -> String {
    format!("₹{}", amount.round() as i64)
}

/// Capitalize a lowercase source label ("breakfast" -> "Breakfast").
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasted_percent_is_pure_and_rounded() {
        assert_eq!(wasted_percent(45.0, 1000.0), 4.5);
        assert_eq!(wasted_percent(25.0, 500.0), 5.0);
        assert_eq!(wasted_percent(1.0, 3.0), 33.3);
        assert_eq!(wasted_percent(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_named_value_sequence_is_order_preserving_and_lossless() {
        let entries = vec![
            ("Breakfast".to_string(), 15.0),
            ("Lunch".to_string(), 25.0),
            ("Dinner".to_string(), 20.0),
            ("Snacks".to_string(), 8.0),
        ];
        let points = NamedValue::sequence(entries.clone());
        assert_eq!(points.len(), entries.len());
        for (point, (name, value)) in points.iter().zip(&entries) {
            assert_eq!(&point.name, name);
            assert_eq!(point.value, *value);
        }
    }

    #[test]
    fn test_loading_body_is_exclusive() {
        let state: PageState<i32> = PageState {
            loading: true,
            error: None,
            data: Some(1),
        };
        let body = page_body(&state, |_| "view");
        assert_eq!(body, PageBody::Loading);
    }

    #[test]
    fn test_error_body_carries_exact_message() {
        let state: PageState<i32> = PageState {
            loading: false,
            error: Some("Failed to fetch venue analysis data".to_string()),
            data: None,
        };
        let body = page_body(&state, |_| "view");
        assert_eq!(
            body,
            PageBody::Error {
                message: "Failed to fetch venue analysis data".to_string()
            }
        );
    }

    #[test]
    fn test_empty_store_renders_loading() {
        let state: PageState<i32> = PageState::default();
        assert_eq!(page_body(&state, |_| "view"), PageBody::<&str>::Loading);
    }

    #[test]
    fn test_trend_badge_from_signed() {
        let up = TrendBadge::from_signed(5.0);
        assert_eq!(up.direction, TrendDirection::Up);
        assert_eq!(up.percent, 5.0);
        assert_eq!(up.caption, None);

        let down = TrendBadge::from_signed(-2.0).with_caption("vs last week");
        assert_eq!(down.direction, TrendDirection::Down);
        assert_eq!(down.percent, 2.0);
        assert_eq!(down.caption.as_deref(), Some("vs last week"));
    }

    #[test]
    fn test_page_body_json_envelope() {
        let error: PageBody<Vec<NamedValue>> = PageBody::Error {
            message: "Failed to fetch dashboard data".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            serde_json::json!({
                "status": "error",
                "message": "Failed to fetch dashboard data",
            })
        );

        let ready = PageBody::Ready {
            view: vec![NamedValue::new("Rice", 12.0)],
        };
        assert_eq!(
            serde_json::to_value(&ready).unwrap(),
            serde_json::json!({
                "status": "ready",
                "view": [{"name": "Rice", "value": 12.0}],
            })
        );

        let loading: PageBody<Vec<NamedValue>> = PageBody::Loading;
        assert_eq!(
            serde_json::to_value(&loading).unwrap(),
            serde_json::json!({"status": "loading"})
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("breakfast"), "Breakfast");
        assert_eq!(capitalize(""), "");
    }
}
