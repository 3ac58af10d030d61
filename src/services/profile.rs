//! Daily occupancy profile over the time grid.

use chrono::NaiveDate;

use crate::core::domain::{MealPeriod, Venue};
use crate::forecast::Forecaster;
use crate::time::{TimeGrid, TimeSlot};

/// One grid slot's prediction within a daily profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfilePoint {
    pub slot: TimeSlot,
    pub period: MealPeriod,
    pub headcount: u32,
}

/// The ordered sequence of predictions across one venue's day.
#[derive(Debug, Clone)]
pub struct DailyProfile {
    pub venue: Venue,
    pub date: NaiveDate,
    pub points: Vec<ProfilePoint>,
}

/// Evaluate the engine once per grid slot for a fixed venue and date.
///
/// Each slot's meal period is inferred from its clock time; points are
/// chronological and independently randomized, with no smoothing across
/// the grid.
pub fn compute_daily_profile(
    forecaster: &mut Forecaster,
    venue: Venue,
    date: NaiveDate,
    grid: &TimeGrid,
) -> DailyProfile {
    let points: Vec<ProfilePoint> = grid
        .slots()
        .into_iter()
        .map(|slot| {
            let period = slot.meal_period();
            let headcount = forecaster.predict(venue, date, period);
            ProfilePoint {
                slot,
                period,
                headcount,
            }
        })
        .collect();

    log::debug!(
        "computed daily profile: venue={} date={} points={}",
        venue,
        date,
        points.len()
    );

    DailyProfile {
        venue,
        date,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{CrowdModel, FixedJitter, Forecaster};

    fn fixed_forecaster() -> Forecaster {
        Forecaster::with_parts(CrowdModel::default(), Box::new(FixedJitter(1.0)))
    }

    #[test]
    fn profile_covers_the_standard_grid_in_order() {
        let mut forecaster = fixed_forecaster();
        let date = NaiveDate::from_ymd_opt(2023, 1, 4).unwrap(); // Wednesday
        let profile =
            compute_daily_profile(&mut forecaster, Venue::Third, date, &TimeGrid::standard());

        assert_eq!(profile.points.len(), 13);
        for pair in profile.points.windows(2) {
            assert!(pair[0].slot < pair[1].slot);
        }
    }

    #[test]
    fn profile_headcounts_follow_period_factors() {
        let mut forecaster = fixed_forecaster();
        let date = NaiveDate::from_ymd_opt(2023, 1, 4).unwrap(); // Wednesday
        let profile =
            compute_daily_profile(&mut forecaster, Venue::Third, date, &TimeGrid::standard());

        // base 100, unit jitter, weekday: breakfast 60, lunch 120, off-peak 100
        for point in &profile.points {
            let expected = match point.period {
                MealPeriod::Breakfast => 60,
                MealPeriod::Lunch => 120,
                MealPeriod::Dinner => 100,
                MealPeriod::Other => 100,
            };
            assert_eq!(point.headcount, expected, "at {}", point.slot);
        }
    }
}
