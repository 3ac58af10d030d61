//! Cross-venue occupancy snapshot at a single instant.

use chrono::NaiveDate;

use crate::core::domain::{estimated_wait_minutes, CrowdLevel, MealPeriod, Venue};
use crate::forecast::Forecaster;
use crate::time::TimeSlot;

/// One venue's prediction within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub venue: Venue,
    pub headcount: u32,
}

impl SnapshotEntry {
    pub fn level(&self) -> CrowdLevel {
        CrowdLevel::from_headcount(self.headcount)
    }

    pub fn wait_minutes(&self) -> u32 {
        estimated_wait_minutes(self.headcount)
    }
}

/// Predictions for every venue at one instant's inferred meal period.
///
/// Entries follow the fixed venue enumeration order.
#[derive(Debug, Clone)]
pub struct VenueSnapshot {
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub period: MealPeriod,
    pub entries: Vec<SnapshotEntry>,
}

/// Evaluate the engine once per venue at the given instant.
pub fn compute_venue_snapshot(
    forecaster: &mut Forecaster,
    date: NaiveDate,
    slot: TimeSlot,
) -> VenueSnapshot {
    let period = slot.meal_period();
    let entries: Vec<SnapshotEntry> = Venue::ALL
        .iter()
        .map(|venue| SnapshotEntry {
            venue: *venue,
            headcount: forecaster.predict(*venue, date, period),
        })
        .collect();

    log::debug!(
        "computed venue snapshot: date={} slot={} period={}",
        date,
        slot,
        period
    );

    VenueSnapshot {
        date,
        slot,
        period,
        entries,
    }
}
