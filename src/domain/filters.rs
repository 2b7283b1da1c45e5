// Filter enumerations - Closed sets with total label functions
use serde::Serialize;

/// Reporting window shared by most pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    Today,
    Week,
    Month,
}

impl DateRange {
    pub const ALL: [DateRange; 3] = [DateRange::Today, DateRange::Week, DateRange::Month];

    /// Parse a query-string value; unrecognized values fall back to the default.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("today") => DateRange::Today,
            Some("week") => DateRange::Week,
            Some("month") => DateRange::Month,
            _ => DateRange::default(),
        }
    }

    pub fn param(&self) -> &'static str {
        match self {
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Week => "This Week",
            DateRange::Month => "This Month",
        }
    }

    /// Possessive form used in card descriptions ("Today's total serving").
    pub fn possessive(&self) -> &'static str {
        match self {
            DateRange::Today => "Today's",
            DateRange::Week => "This week's",
            DateRange::Month => "This month's",
        }
    }
}

/// Food-service location filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Venue {
    #[default]
    All,
    VenueA,
    VenueB,
    VenueC,
}

impl Venue {
    pub const ALL: [Venue; 4] = [Venue::All, Venue::VenueA, Venue::VenueB, Venue::VenueC];

    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("all") => Venue::All,
            Some("venue-a") => Venue::VenueA,
            Some("venue-b") => Venue::VenueB,
            Some("venue-c") => Venue::VenueC,
            _ => Venue::default(),
        }
    }

    pub fn param(&self) -> &'static str {
        match self {
            Venue::All => "all",
            Venue::VenueA => "venue-a",
            Venue::VenueB => "venue-b",
            Venue::VenueC => "venue-c",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Venue::All => "All Venues",
            Venue::VenueA => "Venue A",
            Venue::VenueB => "Venue B",
            Venue::VenueC => "Venue C",
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Venue::All)
    }
}

/// Operational cost category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    #[default]
    All,
    Food,
    Labor,
    Overhead,
}

impl CostCategory {
    pub const ALL: [CostCategory; 4] = [
        CostCategory::All,
        CostCategory::Food,
        CostCategory::Labor,
        CostCategory::Overhead,
    ];

    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("all") => CostCategory::All,
            Some("food") => CostCategory::Food,
            Some("labor") => CostCategory::Labor,
            Some("overhead") => CostCategory::Overhead,
            _ => CostCategory::default(),
        }
    }

    pub fn param(&self) -> &'static str {
        match self {
            CostCategory::All => "all",
            CostCategory::Food => "food",
            CostCategory::Labor => "labor",
            CostCategory::Overhead => "overhead",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::All => "All Categories",
            CostCategory::Food => "Food Costs",
            CostCategory::Labor => "Labor Costs",
            CostCategory::Overhead => "Overhead",
        }
    }
}

/// Report granularity for the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [ReportType::Daily, ReportType::Weekly, ReportType::Monthly];

    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("daily") => ReportType::Daily,
            Some("weekly") => ReportType::Weekly,
            Some("monthly") => ReportType::Monthly,
            _ => ReportType::default(),
        }
    }

    pub fn param(&self) -> &'static str {
        match self {
            ReportType::Daily => "daily",
            ReportType::Weekly => "weekly",
            ReportType::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Daily => "Daily",
            ReportType::Weekly => "Weekly",
            ReportType::Monthly => "Monthly",
        }
    }

    /// X-axis key the composed report chart reads per granularity.
    pub fn x_axis_key(&self) -> &'static str {
        match self {
            ReportType::Daily => "name",
            ReportType::Weekly => "day",
            ReportType::Monthly => "week",
        }
    }

    /// Period noun for card descriptions ("meals this day/week/month").
    pub fn period_noun(&self) -> &'static str {
        match self {
            ReportType::Daily => "day",
            ReportType::Weekly => "week",
            ReportType::Monthly => "month",
        }
    }
}
