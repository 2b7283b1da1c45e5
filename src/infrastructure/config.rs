use crate::domain::store::StalePolicy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

/// Demo knobs for the mock backend: artificial latency and a simulated
/// outage that fails every request.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiSettings {
    #[serde(default)]
    pub latency_ms: u64,
    #[serde(default)]
    pub simulate_outage: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreSettings {
    #[serde(default)]
    pub stale_policy: StalePolicySetting,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicySetting {
    /// Source behavior: overlapping fetches race, last completion wins.
    #[default]
    LastWriteWins,
    /// Opt-in sequencing guard that discards superseded completions.
    DropStale,
}

impl StalePolicySetting {
    pub fn to_policy(self) -> StalePolicy {
        match self {
            StalePolicySetting::LastWriteWins => StalePolicy::LastWriteWins,
            StalePolicySetting::DropStale => StalePolicy::DropStale,
        }
    }
}

/// Base figures the mock scales by date range and venue share. The
/// defaults reproduce the demo dataset (500 kg served / 25 kg wasted
/// today).
#[derive(Debug, Deserialize, Clone)]
pub struct SampleProfile {
    #[serde(default = "default_served_today")]
    pub served_today: f64,
    #[serde(default = "default_wasted_today")]
    pub wasted_today: f64,
    #[serde(default = "default_cost_per_kg")]
    pub cost_per_kg: f64,
}

impl Default for SampleProfile {
    fn default() -> Self {
        Self {
            served_today: default_served_today(),
            wasted_today: default_wasted_today(),
            cost_per_kg: default_cost_per_kg(),
        }
    }
}

fn default_served_today() -> f64 {
    500.0
}

fn default_wasted_today() -> f64 {
    25.0
}

fn default_cost_per_kg() -> f64 {
    80.0
}

pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_sample_profile() -> anyhow::Result<SampleProfile> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/sample").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
