use serde::{Deserialize, Serialize};

/// Views the dashboard can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    IrrigationSchedule,
    GrossRequirement,
    Analytics,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::IrrigationSchedule => "Irrigation Schedule",
            Service::GrossRequirement => "Gross Irrigation Requirement",
            Service::Analytics => "Water-Use Analytics",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audience the dashboard is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Farmer,
    Agronomist,
    Enterprise,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Farmer => "Farmer",
            UserType::Agronomist => "Agronomist",
            UserType::Enterprise => "Enterprise",
        }
    }

    pub fn services(&self) -> &'static [Service] {
        match self {
            UserType::Farmer => &[Service::IrrigationSchedule],
            UserType::Agronomist => &[Service::IrrigationSchedule, Service::GrossRequirement],
            UserType::Enterprise => &[
                Service::IrrigationSchedule,
                Service::GrossRequirement,
                Service::Analytics,
            ],
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
