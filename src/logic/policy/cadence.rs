use super::{DailyDemand, SchedulePolicy};

pub const DEFAULT_INTERVAL_DAYS: usize = 3;

/// Fixed-interval irrigation: water on day 0 and every `interval_days` after,
/// nothing in between regardless of demand.
///
/// This stands in for a soil-moisture trigger; see [`super::DepletionTrigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCadence {
    pub interval_days: usize,
}

impl FixedCadence {
    pub fn new(interval_days: usize) -> Self {
        Self {
            interval_days: interval_days.max(1),
        }
    }

    pub fn is_irrigation_day(&self, day_index: usize) -> bool {
        day_index % self.interval_days.max(1) == 0
    }
}

impl Default for FixedCadence {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_DAYS)
    }
}

impl SchedulePolicy for FixedCadence {
    fn id(&self) -> &'static str {
        "fixed_cadence"
    }

    fn name(&self) -> &'static str {
        "Fixed Cadence"
    }

    fn irrigation_for(&mut self, demand: &DailyDemand) -> f64 {
        if self.is_irrigation_day(demand.day_index) {
            demand.gross
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demand(day_index: usize, gross: f64) -> DailyDemand {
        DailyDemand {
            day_index,
            etc: gross,
            rain: 0.0,
            net: gross,
            gross,
            efficiency_percent: 100.0,
        }
    }

    #[test]
    fn default_interval_is_three_days() {
        let cadence = FixedCadence::default();
        assert_eq!(cadence.interval_days, 3);
        let days: Vec<bool> = (0..7).map(|i| cadence.is_irrigation_day(i)).collect();
        assert_eq!(days, vec![true, false, false, true, false, false, true]);
    }

    #[test]
    fn gates_off_days() {
        let mut cadence = FixedCadence::default();
        assert_eq!(cadence.irrigation_for(&demand(0, 5.8)), 5.8);
        assert_eq!(cadence.irrigation_for(&demand(1, 5.3)), 0.0);
        assert_eq!(cadence.irrigation_for(&demand(2, 5.0)), 0.0);
        assert_eq!(cadence.irrigation_for(&demand(3, 4.1)), 4.1);
    }

    #[test]
    fn zero_interval_waters_daily() {
        let cadence = FixedCadence::new(0);
        assert!((0..5).all(|i| cadence.is_irrigation_day(i)));
    }
}
