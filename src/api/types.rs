//! Display-facing Data Transfer Objects (DTOs).
//!
//! These types are the boundary surface consumed by the display layer.
//! They use only primitives (String, u32, Vec) and are isolated from the
//! internal domain types.
//!
//! ## Design Guidelines
//!
//! 1. **Primitives Only**: dates and clock times as strings, venues and
//!    periods as display labels
//! 2. **Flat Structures**: no deep nesting
//! 3. **Serializable**: every type derives `Serialize`/`Deserialize`
//! 4. **Converted at the boundary**: internal types map in via `From`

use serde::{Deserialize, Serialize};

use crate::services::{DailyProfile, Recommendation, VenueSnapshot};

/// One slot of a daily profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePointData {
    /// Clock label, e.g. `"12:00"`
    pub time: String,
    /// Meal period name, e.g. `"lunch"`
    pub period: String,
    /// Predicted headcount
    pub headcount: u32,
}

/// Daily occupancy profile for one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProfileData {
    /// Venue display label
    pub venue: String,
    /// ISO calendar date, e.g. `"2023-01-04"`
    pub date: String,
    /// Chronological predictions over the grid
    pub points: Vec<ProfilePointData>,
}

/// One venue's entry in a cross-venue snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntryData {
    /// Venue display label
    pub venue: String,
    /// Predicted headcount
    pub headcount: u32,
    /// Crowd-level name: `"comfortable"`, `"moderate"`, or `"crowded"`
    pub level: String,
    /// Estimated queueing time in minutes
    pub wait_minutes: u32,
}

/// Cross-venue predictions at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSnapshotData {
    /// ISO calendar date
    pub date: String,
    /// Clock label of the snapshot instant
    pub time: String,
    /// Inferred meal period name
    pub period: String,
    /// Entries in venue enumeration order
    pub entries: Vec<SnapshotEntryData>,
}

/// The "best choice" recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationData {
    /// Least crowded venue's display label
    pub best_venue: String,
    pub best_venue_headcount: u32,
    /// Clock label of the least crowded in-window slot
    pub best_time: String,
    pub best_time_headcount: u32,
    /// Headcount spread between the busiest and recommended venue
    pub people_saved: u32,
}

impl From<&DailyProfile> for DailyProfileData {
    fn from(profile: &DailyProfile) -> Self {
        DailyProfileData {
            venue: profile.venue.label().to_string(),
            date: profile.date.to_string(),
            points: profile
                .points
                .iter()
                .map(|p| ProfilePointData {
                    time: p.slot.label(),
                    period: p.period.as_str().to_string(),
                    headcount: p.headcount,
                })
                .collect(),
        }
    }
}

impl From<&VenueSnapshot> for VenueSnapshotData {
    fn from(snapshot: &VenueSnapshot) -> Self {
        VenueSnapshotData {
            date: snapshot.date.to_string(),
            time: snapshot.slot.label(),
            period: snapshot.period.as_str().to_string(),
            entries: snapshot
                .entries
                .iter()
                .map(|e| SnapshotEntryData {
                    venue: e.venue.label().to_string(),
                    headcount: e.headcount,
                    level: e.level().as_str().to_string(),
                    wait_minutes: e.wait_minutes(),
                })
                .collect(),
        }
    }
}

impl From<&Recommendation> for RecommendationData {
    fn from(rec: &Recommendation) -> Self {
        RecommendationData {
            best_venue: rec.best_venue.label().to_string(),
            best_venue_headcount: rec.best_venue_headcount,
            best_time: rec.best_slot.label(),
            best_time_headcount: rec.best_slot_headcount,
            people_saved: rec.people_saved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::Venue;
    use crate::forecast::{CrowdModel, FixedJitter, Forecaster};
    use crate::services::{compute_daily_profile, compute_venue_snapshot};
    use crate::time::{TimeGrid, TimeSlot};
    use chrono::NaiveDate;

    #[test]
    fn profile_converts_to_labeled_primitives() {
        let mut forecaster =
            Forecaster::with_parts(CrowdModel::default(), Box::new(FixedJitter(1.0)));
        let date = NaiveDate::from_ymd_opt(2023, 1, 4).unwrap();
        let profile =
            compute_daily_profile(&mut forecaster, Venue::Second, date, &TimeGrid::standard());

        let data = DailyProfileData::from(&profile);
        assert_eq!(data.venue, "第二食堂");
        assert_eq!(data.date, "2023-01-04");
        assert_eq!(data.points.len(), 13);
        assert_eq!(data.points[0].time, "7:00");
        assert_eq!(data.points[0].period, "breakfast");
    }

    #[test]
    fn snapshot_serializes_round_trip() {
        let mut forecaster =
            Forecaster::with_parts(CrowdModel::default(), Box::new(FixedJitter(1.0)));
        let date = NaiveDate::from_ymd_opt(2023, 1, 7).unwrap();
        let snapshot =
            compute_venue_snapshot(&mut forecaster, date, TimeSlot::new(12, 0).unwrap());

        let data = VenueSnapshotData::from(&snapshot);
        let json = serde_json::to_string(&data).unwrap();
        let back: VenueSnapshotData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
        assert_eq!(back.entries.len(), 5);
        assert_eq!(back.period, "lunch");
    }
}
