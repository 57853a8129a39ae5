use crate::models::SoilProfile;

/// Running root-zone depletion carried day to day (FAO-56 water balance).
///
/// Depletion is measured in mm below field capacity and is kept within
/// `[0, total_available_water_mm]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilMoistureBalance {
    pub depletion_mm: f64,
    pub total_available_water_mm: f64,
    pub readily_available_water_mm: f64,
}

impl SoilMoistureBalance {
    /// Balance starting at field capacity
    pub fn new(soil: &SoilProfile) -> Self {
        Self {
            depletion_mm: 0.0,
            total_available_water_mm: soil.total_available_water_mm(),
            readily_available_water_mm: soil.readily_available_water_mm(),
        }
    }

    /// Apply one day of crop use and rainfall; returns the new depletion.
    /// Rain beyond field capacity drains and is lost.
    pub fn advance(&mut self, etc_mm: f64, rain_mm: f64) -> f64 {
        self.depletion_mm =
            (self.depletion_mm + etc_mm - rain_mm).clamp(0.0, self.total_available_water_mm);
        self.depletion_mm
    }

    /// Depletion has reached the management allowable threshold
    pub fn needs_irrigation(&self) -> bool {
        self.depletion_mm >= self.readily_available_water_mm
    }

    /// Refill the root zone to field capacity; returns the net depth required
    pub fn refill(&mut self) -> f64 {
        let net = self.depletion_mm;
        self.depletion_mm = 0.0;
        net
    }

    /// Soil water remaining as a fraction of total available water
    pub fn fraction_remaining(&self) -> f64 {
        if self.total_available_water_mm <= 0.0 {
            return 0.0;
        }
        1.0 - self.depletion_mm / self.total_available_water_mm
    }
}
