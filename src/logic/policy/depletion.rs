use super::{DailyDemand, SchedulePolicy};
use crate::logic::balance::SoilMoistureBalance;
use crate::logic::calculations::{gross_irrigation, round1};
use crate::models::SoilProfile;

/// Irrigate when root-zone depletion reaches the management allowable
/// depletion, refilling to field capacity.
///
/// Conditions:
/// - Depletion carried day to day from ETc and rainfall
/// - Trigger at depletion >= TAW × MAD
///
/// The applied gross depth is the refill depth divided by system efficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepletionTrigger {
    balance: SoilMoistureBalance,
}

impl DepletionTrigger {
    pub fn new(soil: &SoilProfile) -> Self {
        Self {
            balance: SoilMoistureBalance::new(soil),
        }
    }

    pub fn balance(&self) -> &SoilMoistureBalance {
        &self.balance
    }
}

impl SchedulePolicy for DepletionTrigger {
    fn id(&self) -> &'static str {
        "depletion_trigger"
    }

    fn name(&self) -> &'static str {
        "Soil Moisture Depletion"
    }

    fn irrigation_for(&mut self, demand: &DailyDemand) -> f64 {
        let depletion = self.balance.advance(demand.etc, demand.rain);
        if !self.balance.needs_irrigation() {
            return 0.0;
        }

        let remaining = self.balance.fraction_remaining();
        let net = self.balance.refill();
        let gross = round1(gross_irrigation(net, demand.efficiency_percent));
        tracing::debug!(
            day = demand.day_index,
            depletion_mm = depletion,
            fraction_remaining = remaining,
            gross_mm = gross,
            "Depletion threshold reached"
        );
        gross
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SoilType;

    fn demand(day_index: usize, etc: f64, rain: f64) -> DailyDemand {
        DailyDemand {
            day_index,
            etc,
            rain,
            net: (etc - rain).max(0.0),
            gross: 0.0,
            efficiency_percent: 90.0,
        }
    }

    #[test]
    fn waits_for_threshold_then_refills() {
        // Sandy soil: RAW 19.8 mm
        let mut policy = DepletionTrigger::new(&SoilProfile::for_soil(SoilType::Sandy));
        let applied: Vec<f64> = (0..5)
            .map(|i| policy.irrigation_for(&demand(i, 5.0, 0.0)))
            .collect();

        // depletion 5, 10, 15, 20 → trigger on day 3 with 20 mm net / 0.9
        assert_eq!(applied, vec![0.0, 0.0, 0.0, 22.2, 0.0]);
        assert!((policy.balance().depletion_mm - 5.0).abs() < 1e-9);
    }

    #[test]
    fn rain_delays_trigger() {
        let mut policy = DepletionTrigger::new(&SoilProfile::for_soil(SoilType::Sandy));
        let applied: Vec<f64> = [(5.0, 0.0), (5.0, 0.0), (5.0, 12.0), (5.0, 0.0)]
            .iter()
            .enumerate()
            .map(|(i, (etc, rain))| policy.irrigation_for(&demand(i, *etc, *rain)))
            .collect();
        assert!(applied.iter().all(|a| *a == 0.0));
    }
}
