//! "Best choice" recommendation over a snapshot and a daily profile.

use crate::core::domain::Venue;
use crate::core::error::{ForecastError, ForecastResult};
use crate::services::profile::DailyProfile;
use crate::services::snapshot::VenueSnapshot;
use crate::time::TimeSlot;

/// The time range the "best time to eat" pick is drawn from.
///
/// A closed range filtered over the profile by slot membership, so a grid
/// resolution change cannot silently shift the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationWindow {
    pub start: TimeSlot,
    pub end: TimeSlot,
}

impl RecommendationWindow {
    /// The extended lunch window, 11:00–15:00 inclusive.
    pub fn lunch() -> RecommendationWindow {
        RecommendationWindow {
            start: TimeSlot::new(11, 0).expect("static window bound"),
            end: TimeSlot::new(15, 0).expect("static window bound"),
        }
    }

    pub fn contains(&self, slot: TimeSlot) -> bool {
        self.start <= slot && slot <= self.end
    }
}

impl Default for RecommendationWindow {
    fn default() -> Self {
        RecommendationWindow::lunch()
    }
}

/// Where and when to eat with least crowding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// Least crowded venue right now.
    pub best_venue: Venue,
    pub best_venue_headcount: u32,
    /// Least crowded slot within the recommendation window.
    pub best_slot: TimeSlot,
    pub best_slot_headcount: u32,
    /// Headcount spread across venues: queue positions saved by switching
    /// from the busiest venue to the recommended one.
    pub people_saved: u32,
}

/// Reduce a snapshot and a daily profile into a single recommendation.
///
/// Both argmins are stable: ties break on the first occurrence, in venue
/// enumeration order for the snapshot and chronological order for the
/// profile.
pub fn compute_recommendation(
    snapshot: &VenueSnapshot,
    profile: &DailyProfile,
    window: &RecommendationWindow,
) -> ForecastResult<Recommendation> {
    let best_entry = snapshot
        .entries
        .iter()
        .min_by_key(|e| e.headcount)
        .ok_or_else(|| ForecastError::EmptySelection("snapshot has no venues".to_string()))?;

    let busiest = snapshot
        .entries
        .iter()
        .map(|e| e.headcount)
        .max()
        .unwrap_or(best_entry.headcount);

    let best_point = profile
        .points
        .iter()
        .filter(|p| window.contains(p.slot))
        .min_by_key(|p| p.headcount)
        .ok_or_else(|| {
            ForecastError::EmptySelection(format!(
                "no profile slot inside window {}-{}",
                window.start, window.end
            ))
        })?;

    log::debug!(
        "recommendation: venue={} ({} people), slot={} ({} people)",
        best_entry.venue,
        best_entry.headcount,
        best_point.slot,
        best_point.headcount
    );

    Ok(Recommendation {
        best_venue: best_entry.venue,
        best_venue_headcount: best_entry.headcount,
        best_slot: best_point.slot,
        best_slot_headcount: best_point.headcount,
        people_saved: busiest - best_entry.headcount,
    })
}
