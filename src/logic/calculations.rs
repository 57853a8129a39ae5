use crate::models::SoilProfile;
use serde::Serialize;

/// Round to one decimal place, half away from zero
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Crop evapotranspiration ETc = ETo × Kc (mm/day), unrounded
pub fn crop_evapotranspiration(eto: f64, kc: f64) -> f64 {
    eto * kc
}

/// Net irrigation after rainfall. Excess rain is not carried to later days.
/// NaN passes through rather than being clamped to zero.
pub fn net_irrigation(etc: f64, rain: f64) -> f64 {
    let net = etc - rain;
    if net < 0.0 {
        0.0
    } else {
        net
    }
}

/// Gross depth the system must apply to deliver `net_mm` at the given efficiency, unrounded
pub fn gross_irrigation(net_mm: f64, efficiency_percent: f64) -> f64 {
    net_mm / (efficiency_percent / 100.0)
}

/// Scalar gross irrigation requirement for the current moment.
///
/// Unlike the daily schedule, ETc is not rounded before dividing by the
/// efficiency, so the two can differ by up to ~0.05 mm.
pub fn compute_gross_requirement(eto: f64, kc: f64, efficiency_percent: f64) -> f64 {
    round1(gross_irrigation(
        crop_evapotranspiration(eto, kc),
        efficiency_percent,
    ))
}

/// Current requirement as shown on the field settings view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RequirementSnapshot {
    pub eto: f64,
    pub kc: f64,
    pub etc: f64,
    pub efficiency_percent: f64,
    pub gross: f64,
}

pub fn current_requirement(eto: f64, kc: f64, soil: &SoilProfile) -> RequirementSnapshot {
    RequirementSnapshot {
        eto,
        kc,
        etc: round1(crop_evapotranspiration(eto, kc)),
        efficiency_percent: soil.efficiency_percent,
        gross: compute_gross_requirement(eto, kc, soil.efficiency_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SoilType;

    #[test]
    fn round1_known_values() {
        assert_eq!(round1(4.935), 4.9);
        assert_eq!(round1(5.7647), 5.8);
        assert_eq!(round1(2.25), 2.3);
        assert_eq!(round1(0.04), 0.0);
        assert_eq!(round1(0.0), 0.0);
        assert!(round1(f64::NAN).is_nan());
    }

    #[test]
    fn net_irrigation_never_negative() {
        assert_eq!(net_irrigation(4.6, 2.3), 4.6 - 2.3);
        assert_eq!(net_irrigation(1.0, 12.0), 0.0);
        assert_eq!(net_irrigation(3.0, 3.0), 0.0);
    }

    #[test]
    fn net_irrigation_propagates_nan() {
        assert!(net_irrigation(f64::NAN, 1.0).is_nan());
        assert!(net_irrigation(1.0, f64::NAN).is_nan());
    }

    #[test]
    fn gross_irrigation_scales_by_efficiency() {
        assert!((gross_irrigation(4.9, 85.0) - 5.764_705_882).abs() < 1e-6);
        assert_eq!(gross_irrigation(5.0, 100.0), 5.0);
        assert_eq!(gross_irrigation(4.0, 50.0), 8.0);
    }

    #[test]
    fn scalar_requirement_almonds_mid_season() {
        // 4.7 × 1.05 = 4.935 → / 0.85 = 5.806 → 5.8
        assert_eq!(compute_gross_requirement(4.7, 1.05, 85.0), 5.8);
    }

    #[test]
    fn scalar_requirement_skips_intermediate_rounding() {
        // schedule path: 4.15 → 4.2, 4.2 / 0.9 = 4.667 → 4.7
        // scalar path: 4.15 / 0.9 = 4.611 → 4.6
        let scalar = compute_gross_requirement(4.15, 1.0, 90.0);
        let schedule_style = round1(gross_irrigation(round1(4.15), 90.0));
        assert_eq!(scalar, 4.6);
        assert_eq!(schedule_style, 4.7);
    }

    #[test]
    fn snapshot_uses_soil_efficiency() {
        let soil = SoilProfile::for_soil(SoilType::Loam);
        let snap = current_requirement(4.7, 1.05, &soil);
        assert_eq!(snap.etc, 4.9);
        assert_eq!(snap.efficiency_percent, 85.0);
        assert_eq!(snap.gross, 5.8);
    }
}
