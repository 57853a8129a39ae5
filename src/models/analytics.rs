use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "Last 30 Days")]
    Last30Days,
    #[serde(rename = "Last 60 Days")]
    Last60Days,
    #[serde(rename = "Last 90 Days")]
    Last90Days,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Last30Days => "Last 30 Days",
            Timeframe::Last60Days => "Last 60 Days",
            Timeframe::Last90Days => "Last 90 Days",
        }
    }

    /// Exact label match; anything unrecognised selects the 30 day window
    pub fn from_label(label: &str) -> Self {
        match label {
            "Last 60 Days" => Timeframe::Last60Days,
            "Last 90 Days" => Timeframe::Last90Days,
            _ => Timeframe::Last30Days,
        }
    }

    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::Last30Days,
            Timeframe::Last60Days,
            Timeframe::Last90Days,
        ]
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterUsage {
    pub current_period_m3: f64,
    pub previous_period_m3: f64,
    pub savings_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationHistoryEntry {
    pub date: String,
    pub amount_mm: f64,
    pub duration_minutes: u32,
    pub efficiency_percent: f64,
}

impl IrrigationHistoryEntry {
    pub fn new(
        date: impl Into<String>,
        amount_mm: f64,
        duration_minutes: u32,
        efficiency_percent: f64,
    ) -> Self {
        Self {
            date: date.into(),
            amount_mm,
            duration_minutes,
            efficiency_percent,
        }
    }
}

/// Water-use summary for a reporting window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub timeframe: Timeframe,
    pub total_irrigation_mm: f64,
    pub total_rainfall_mm: f64,
    pub efficiency_percent: f64,
    pub water_applied_mm: f64,
    pub water_needed_mm: f64,
    pub water_lost_mm: f64,
    pub usage: WaterUsage,
    pub history: Vec<IrrigationHistoryEntry>,
}
