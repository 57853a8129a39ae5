pub mod cadence;
pub mod depletion;

pub use cadence::FixedCadence;
pub use depletion::DepletionTrigger;

/// Water demand for one forecast day, before any gating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyDemand {
    pub day_index: usize,
    /// Crop evapotranspiration, rounded to one decimal (mm)
    pub etc: f64,
    pub rain: f64,
    /// max(0, etc - rain)
    pub net: f64,
    /// Net scaled by system efficiency, rounded to one decimal (mm)
    pub gross: f64,
    pub efficiency_percent: f64,
}

/// Decides how much of each day's demand is actually applied
pub trait SchedulePolicy {
    /// Unique identifier for this policy
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Gross depth (mm) to apply on this day. Days are fed in order, once each.
    fn irrigation_for(&mut self, demand: &DailyDemand) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyKind {
    #[default]
    Cadence,
    Balance,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Cadence => "cadence",
            PolicyKind::Balance => "balance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cadence" | "fixed" | "interval" => Some(PolicyKind::Cadence),
            "balance" | "depletion" | "soil" => Some(PolicyKind::Balance),
            _ => None,
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_kind_from_str() {
        assert_eq!(PolicyKind::from_str("cadence"), Some(PolicyKind::Cadence));
        assert_eq!(PolicyKind::from_str("Balance"), Some(PolicyKind::Balance));
        assert_eq!(PolicyKind::from_str("depletion"), Some(PolicyKind::Balance));
        assert_eq!(PolicyKind::from_str("random"), None);
    }
}
