use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Clay,
    Loam,
    Sandy,
    SiltLoam,
    ClayLoam,
    SandyLoam,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Loam => "Loam",
            SoilType::Sandy => "Sandy",
            SoilType::SiltLoam => "Silt Loam",
            SoilType::ClayLoam => "Clay Loam",
            SoilType::SandyLoam => "Sandy Loam",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clay" => Some(SoilType::Clay),
            "loam" => Some(SoilType::Loam),
            "sandy" | "sand" => Some(SoilType::Sandy),
            "siltloam" | "silt loam" => Some(SoilType::SiltLoam),
            "clayloam" | "clay loam" => Some(SoilType::ClayLoam),
            "sandyloam" | "sandy loam" => Some(SoilType::SandyLoam),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field soil and irrigation system parameters. Percentages are volumetric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilProfile {
    pub soil_type: SoilType,
    pub field_capacity: f64,
    pub wilting_point: f64,
    pub available_water: f64,
    pub management_allowable_depletion: f64,
    pub root_zone_depth_cm: f64,
    pub efficiency_percent: f64,
}

impl SoilProfile {
    /// Typical values for a soil texture under a pressurised system
    pub fn for_soil(soil_type: SoilType) -> Self {
        let (fc, wp, mad, root_cm, eff) = match soil_type {
            SoilType::Clay => (42.0, 25.0, 40.0, 60.0, 80.0),
            SoilType::ClayLoam => (36.0, 20.0, 45.0, 75.0, 82.0),
            SoilType::Loam => (27.0, 12.0, 50.0, 90.0, 85.0),
            SoilType::SiltLoam => (33.0, 13.0, 50.0, 90.0, 85.0),
            SoilType::SandyLoam => (18.0, 8.0, 50.0, 75.0, 88.0),
            SoilType::Sandy => (10.0, 4.0, 55.0, 60.0, 90.0),
        };

        Self {
            soil_type,
            field_capacity: fc,
            wilting_point: wp,
            available_water: fc - wp,
            management_allowable_depletion: mad,
            root_zone_depth_cm: root_cm,
            efficiency_percent: eff,
        }
    }

    pub fn with_efficiency(mut self, efficiency_percent: f64) -> Self {
        self.efficiency_percent = efficiency_percent;
        self
    }

    /// Total available water held in the root zone (mm)
    pub fn total_available_water_mm(&self) -> f64 {
        self.available_water / 100.0 * self.root_zone_depth_cm * 10.0
    }

    /// Depletion (mm) the crop tolerates before irrigation is due
    pub fn readily_available_water_mm(&self) -> f64 {
        self.total_available_water_mm() * self.management_allowable_depletion / 100.0
    }
}

impl Default for SoilProfile {
    fn default() -> Self {
        Self::for_soil(SoilType::Loam)
    }
}
