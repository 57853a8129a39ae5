use agriweather::logic::calculations::round1;
use agriweather::{compute_schedule, lookup_coefficient, ForecastDay, IrrigationStatus};
use proptest::prelude::*;

const CROPS: [&str; 5] = ["Almonds", "Tomatoes", "Corn", "Wheat", "Grapes"];

fn forecast_strategy() -> impl Strategy<Value = Vec<ForecastDay>> {
    prop::collection::vec((0.0f64..12.0, 0.0f64..30.0), 0..15).prop_map(|days| {
        days.into_iter()
            .enumerate()
            .map(|(i, (eto, rain))| ForecastDay::new(format!("Day {}", i + 1), eto, rain))
            .collect()
    })
}

fn stage_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Initial (Bud Break)",
        "Development (Leaf Out)",
        "Mid-season (Flowering)",
        "Late-season (Hull Split)",
    ])
}

proptest! {
    #[test]
    fn one_entry_per_day(
        forecast in forecast_strategy(),
        crop in prop::sample::select(CROPS.to_vec()),
        stage in stage_strategy(),
        efficiency in 10.0f64..=100.0,
    ) {
        let schedule = compute_schedule(crop, stage, efficiency, &forecast);
        prop_assert_eq!(schedule.len(), forecast.len());
        for (entry, day) in schedule.iter().zip(&forecast) {
            prop_assert_eq!(entry.rain, day.rain);
            prop_assert!(entry.date.starts_with(&day.date));
        }
    }

    #[test]
    fn same_input_same_schedule(
        forecast in forecast_strategy(),
        crop in prop::sample::select(CROPS.to_vec()),
        stage in stage_strategy(),
        efficiency in 10.0f64..=100.0,
    ) {
        let first = compute_schedule(crop, stage, efficiency, &forecast);
        let second = compute_schedule(crop, stage, efficiency, &forecast);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn amounts_are_non_negative_and_rounded(
        forecast in forecast_strategy(),
        crop in prop::sample::select(CROPS.to_vec()),
        stage in stage_strategy(),
        efficiency in 10.0f64..=100.0,
    ) {
        for entry in compute_schedule(crop, stage, efficiency, &forecast) {
            prop_assert!(entry.etc >= 0.0);
            prop_assert!(entry.irrigation >= 0.0);
            prop_assert_eq!(round1(entry.etc), entry.etc);
            prop_assert_eq!(round1(entry.irrigation), entry.irrigation);
        }
    }

    #[test]
    fn only_every_third_day_irrigates(
        forecast in forecast_strategy(),
        efficiency in 10.0f64..=100.0,
    ) {
        let schedule = compute_schedule("Corn", "Mid-season (Silking)", efficiency, &forecast);
        for (i, entry) in schedule.iter().enumerate() {
            if i % 3 != 0 {
                prop_assert_eq!(entry.irrigation, 0.0);
                prop_assert_eq!(entry.status, IrrigationStatus::NoIrrigation);
            } else if entry.irrigation > 0.0 {
                let expected = if i == 0 {
                    IrrigationStatus::IrrigateToday
                } else {
                    IrrigationStatus::Scheduled
                };
                prop_assert_eq!(entry.status, expected);
            }
        }
    }

    #[test]
    fn only_first_entry_is_labelled_today(forecast in forecast_strategy()) {
        let schedule = compute_schedule("Wheat", "Initial (Tillering)", 85.0, &forecast);
        for (i, entry) in schedule.iter().enumerate() {
            prop_assert_eq!(entry.date.ends_with(" (Today)"), i == 0);
        }
    }

    #[test]
    fn known_crops_have_tabulated_coefficients(
        crop in prop::sample::select(CROPS.to_vec()),
        stage in stage_strategy(),
    ) {
        let kc = lookup_coefficient(crop, stage);
        prop_assert!(kc > 0.0 && kc <= 1.2);
    }

    #[test]
    fn unlisted_crop_names_fall_back_to_one(crop in "[A-Za-z ]{1,12}", stage in stage_strategy()) {
        prop_assume!(!CROPS.contains(&crop.as_str()));
        prop_assert_eq!(lookup_coefficient(&crop, stage), 1.0);
    }
}
