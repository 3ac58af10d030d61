//! Integration tests for the forecast engine.
//!
//! These tests ensure that:
//! 1. Predictions stay inside the deterministic envelope despite jitter
//! 2. The weekend factor shows up in long-run averages
//! 3. Unknown venue and period labels use the documented fallbacks
//! 4. The deterministic core reproduces the known worked scenario

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

use canteen_rust::core::domain::{
    estimated_wait_minutes, CrowdLevel, MealPeriod, Venue,
};
use canteen_rust::forecast::{CrowdModel, FixedJitter, Forecaster};

// ==================== Helper Functions ====================

fn wednesday() -> NaiveDate {
    let date = NaiveDate::from_ymd_opt(2023, 1, 4).unwrap();
    assert_eq!(date.weekday(), Weekday::Wed);
    date
}

fn saturday() -> NaiveDate {
    let date = NaiveDate::from_ymd_opt(2023, 1, 7).unwrap();
    assert_eq!(date.weekday(), Weekday::Sat);
    date
}

/// Envelope bounds for a venue/period/date, from the fixed factor ranges.
fn envelope(venue: Venue, date: NaiveDate, period: MealPeriod) -> (u32, u32) {
    let model = CrowdModel::default();
    let k = model.base_rate(venue) * model.period_factor(period) * model.day_factor(date);
    ((k * 0.9).floor() as u32, (k * 1.1).floor() as u32)
}

// ==================== Envelope Property ====================

proptest! {
    #[test]
    fn predictions_stay_inside_the_deterministic_envelope(
        venue_idx in 0usize..5,
        period_idx in 0usize..4,
        year in 2020i32..2030,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let venue = Venue::ALL[venue_idx];
        let period = [
            MealPeriod::Breakfast,
            MealPeriod::Lunch,
            MealPeriod::Dinner,
            MealPeriod::Other,
        ][period_idx];
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();

        let mut forecaster = Forecaster::new();
        let prediction = forecaster.predict(venue, date, period);

        let (lower, upper) = envelope(venue, date, period);
        prop_assert!(
            prediction >= lower && prediction <= upper,
            "prediction {} outside [{}, {}] for {} {} {}",
            prediction, lower, upper, venue, date, period
        );
    }
}

// ==================== Weekend Factor ====================

#[test]
fn weekend_traffic_averages_seventy_percent_of_weekday() {
    const SAMPLES: u32 = 4000;

    let mut forecaster = Forecaster::new();
    let mut mean = |date: NaiveDate| -> f64 {
        let total: u64 = (0..SAMPLES)
            .map(|_| u64::from(forecaster.predict(Venue::First, date, MealPeriod::Lunch)))
            .sum();
        total as f64 / f64::from(SAMPLES)
    };

    let weekday_mean = mean(wednesday());
    let weekend_mean = mean(saturday());
    let ratio = weekend_mean / weekday_mean;

    assert!(
        (ratio - 0.7).abs() < 0.02,
        "weekend/weekday ratio {} outside 0.7 +/- 0.02",
        ratio
    );
}

// ==================== Lenient Fallbacks ====================

#[test]
fn unknown_labels_fall_back_to_documented_defaults() {
    let mut forecaster = Forecaster::new();

    // base 100, neutral period factor, weekday: floor(100 * j) for j in [0.9, 1.1)
    for _ in 0..200 {
        let prediction = forecaster.predict_label("NoSuchPlace", wednesday(), "gibberish");
        assert!(
            (90..=110).contains(&prediction),
            "weekday fallback {} outside [90, 110]",
            prediction
        );
    }

    // same draw on a weekend carries the 0.7 day factor
    for _ in 0..200 {
        let prediction = forecaster.predict_label("NoSuchPlace", saturday(), "gibberish");
        assert!(
            (63..=77).contains(&prediction),
            "weekend fallback {} outside [63, 77]",
            prediction
        );
    }
}

#[test]
fn known_labels_resolve_through_the_tables() {
    let mut forecaster =
        Forecaster::with_parts(CrowdModel::default(), Box::new(FixedJitter(1.0)));

    // 清真食堂 base 60, dinner factor 1.0, weekday
    assert_eq!(
        forecaster.predict_label("清真食堂", wednesday(), "晚餐 (18:00)"),
        60
    );
    // 第一食堂 base 150, breakfast factor 0.6, weekday
    assert_eq!(
        forecaster.predict_label("第一食堂", wednesday(), "早餐 (8:00)"),
        90
    );
}

// ==================== Worked Scenario ====================

#[test]
fn saturday_lunch_scenario_at_unit_jitter() {
    let mut forecaster =
        Forecaster::with_parts(CrowdModel::default(), Box::new(FixedJitter(1.0)));

    // floor(120 * 1.2 * 0.7 * 1.0) = 100
    let prediction = forecaster.predict_label("第二食堂", saturday(), "午餐 (12:00)");
    assert_eq!(prediction, 100);
    assert_eq!(CrowdLevel::from_headcount(prediction), CrowdLevel::Moderate);
    assert_eq!(estimated_wait_minutes(prediction), 10);
}
