use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrrigationStatus {
    #[serde(rename = "Irrigate Today")]
    IrrigateToday,
    #[serde(rename = "Scheduled")]
    Scheduled,
    #[serde(rename = "No Irrigation")]
    NoIrrigation,
}

impl IrrigationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationStatus::IrrigateToday => "Irrigate Today",
            IrrigationStatus::Scheduled => "Scheduled",
            IrrigationStatus::NoIrrigation => "No Irrigation",
        }
    }

    /// Status for the entry at `day_index` given the gross depth applied
    pub fn for_day(day_index: usize, irrigation_mm: f64) -> Self {
        if irrigation_mm > 0.0 {
            if day_index == 0 {
                IrrigationStatus::IrrigateToday
            } else {
                IrrigationStatus::Scheduled
            }
        } else {
            IrrigationStatus::NoIrrigation
        }
    }

    pub fn is_irrigation(&self) -> bool {
        !matches!(self, IrrigationStatus::NoIrrigation)
    }
}

impl std::fmt::Display for IrrigationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One day of a computed irrigation schedule. All depths are mm/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: String,
    pub etc: f64,
    pub rain: f64,
    pub irrigation: f64,
    pub status: IrrigationStatus,
}

/// Totals over a computed schedule
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScheduleTotals {
    pub etc_mm: f64,
    pub rain_mm: f64,
    pub irrigation_mm: f64,
    pub irrigation_days: usize,
}

impl ScheduleTotals {
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, e| {
            acc.etc_mm += e.etc;
            acc.rain_mm += e.rain;
            acc.irrigation_mm += e.irrigation;
            if e.status.is_irrigation() {
                acc.irrigation_days += 1;
            }
            acc
        })
    }
}
