use super::calculations::{crop_evapotranspiration, gross_irrigation, net_irrigation, round1};
use super::coefficients::{lookup_coefficient, try_lookup_coefficient};
use super::policy::{DailyDemand, FixedCadence, SchedulePolicy};
use crate::error::{AgriWeatherError, Result};
use crate::models::{ForecastDay, IrrigationStatus, ScheduleEntry};

const TODAY_SUFFIX: &str = " (Today)";

/// Daily irrigation schedule for a crop over a forecast, gated by the
/// default three-day cadence.
///
/// One entry per forecast day, in order. Inputs are not validated: NaN in
/// ETo, rain or efficiency propagates into ETc and irrigation (and yields
/// "No Irrigation"). Use [`try_compute_schedule`] to reject such input.
pub fn compute_schedule(
    crop: &str,
    growth_stage: &str,
    efficiency_percent: f64,
    forecast: &[ForecastDay],
) -> Vec<ScheduleEntry> {
    let mut policy = FixedCadence::default();
    compute_schedule_with(&mut policy, crop, growth_stage, efficiency_percent, forecast)
}

/// Same as [`compute_schedule`] with a caller-chosen policy.
/// Pass a fresh policy per call; stateful policies carry state across days.
pub fn compute_schedule_with(
    policy: &mut dyn SchedulePolicy,
    crop: &str,
    growth_stage: &str,
    efficiency_percent: f64,
    forecast: &[ForecastDay],
) -> Vec<ScheduleEntry> {
    let kc = lookup_coefficient(crop, growth_stage);
    build_entries(policy, kc, efficiency_percent, forecast)
}

/// Validating variant: unknown crops, non-finite or negative weather values
/// and efficiencies outside (0, 100] are rejected before any calculation.
pub fn try_compute_schedule(
    policy: &mut dyn SchedulePolicy,
    crop: &str,
    growth_stage: &str,
    efficiency_percent: f64,
    forecast: &[ForecastDay],
) -> Result<Vec<ScheduleEntry>> {
    let kc = try_lookup_coefficient(crop, growth_stage)?;
    validate_efficiency(efficiency_percent)?;
    validate_forecast(forecast)?;
    Ok(build_entries(policy, kc, efficiency_percent, forecast))
}

fn build_entries(
    policy: &mut dyn SchedulePolicy,
    kc: f64,
    efficiency_percent: f64,
    forecast: &[ForecastDay],
) -> Vec<ScheduleEntry> {
    tracing::debug!(
        policy = policy.id(),
        kc,
        efficiency_percent,
        days = forecast.len(),
        "Computing irrigation schedule"
    );

    forecast
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let etc = round1(crop_evapotranspiration(day.eto, kc));
            let net = net_irrigation(etc, day.rain);
            let demand = DailyDemand {
                day_index: i,
                etc,
                rain: day.rain,
                net,
                gross: round1(gross_irrigation(net, efficiency_percent)),
                efficiency_percent,
            };
            let irrigation = policy.irrigation_for(&demand);

            ScheduleEntry {
                date: if i == 0 {
                    format!("{}{}", day.date, TODAY_SUFFIX)
                } else {
                    day.date.clone()
                },
                etc,
                rain: day.rain,
                irrigation,
                status: IrrigationStatus::for_day(i, irrigation),
            }
        })
        .collect()
}

pub fn validate_efficiency(efficiency_percent: f64) -> Result<()> {
    if !efficiency_percent.is_finite() || efficiency_percent <= 0.0 || efficiency_percent > 100.0
    {
        return Err(AgriWeatherError::InvalidNumericInput(format!(
            "efficiency must be in (0, 100], got {}",
            efficiency_percent
        )));
    }
    Ok(())
}

pub fn validate_forecast(forecast: &[ForecastDay]) -> Result<()> {
    for day in forecast {
        for (field, value) in [("eto", day.eto), ("rain", day.rain)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AgriWeatherError::InvalidNumericInput(format!(
                    "{} for {} must be a non-negative number, got {}",
                    field, day.date, value
                )));
            }
        }
    }
    Ok(())
}
