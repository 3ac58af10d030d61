//! Domain models for canteen occupancy forecasting.
//!
//! This module provides the core data structures shared across the engine:
//! the closed set of campus venues, meal periods, and the crowd-level
//! classification derived from a predicted headcount.

use serde::{Deserialize, Serialize};

/// Headcount below which a venue counts as comfortable.
pub const MODERATE_THRESHOLD: u32 = 80;
/// Headcount at which a venue counts as crowded.
pub const CROWDED_THRESHOLD: u32 = 120;

/// Headcount per additional step of estimated queueing.
const WAIT_BUCKET_PEOPLE: u32 = 10;
/// Minutes added per wait bucket.
const WAIT_STEP_MINUTES: u32 = 5;

/// One of the five campus canteens.
///
/// The set is closed and known at build time; `ALL` fixes the canonical
/// enumeration order used for snapshots and tie-breaking, matching the
/// display order of the frontend.
///
/// # Examples
///
/// ```
/// use canteen_rust::core::domain::Venue;
///
/// assert_eq!(Venue::Second.label(), "第二食堂");
/// assert_eq!(Venue::from_label("清真食堂"), Some(Venue::Halal));
/// assert_eq!(Venue::from_label("NoSuchPlace"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    First,
    Second,
    Third,
    Flavor,
    Halal,
}

impl Venue {
    /// All venues in canonical enumeration order.
    pub const ALL: [Venue; 5] = [
        Venue::First,
        Venue::Second,
        Venue::Third,
        Venue::Flavor,
        Venue::Halal,
    ];

    /// The display label for this venue.
    pub fn label(&self) -> &'static str {
        match self {
            Venue::First => "第一食堂",
            Venue::Second => "第二食堂",
            Venue::Third => "第三食堂",
            Venue::Flavor => "风味餐厅",
            Venue::Halal => "清真食堂",
        }
    }

    /// Resolve a display label back to a venue, or `None` if unknown.
    pub fn from_label(label: &str) -> Option<Venue> {
        Venue::ALL.iter().copied().find(|v| v.label() == label.trim())
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Meal period classification for a prediction request.
///
/// `Other` is the documented lenient fallback: a time of day (or period
/// label) outside the recognized breakfast/lunch/dinner windows still
/// yields a prediction, at the neutral factor.
///
/// # Examples
///
/// ```
/// use canteen_rust::core::domain::MealPeriod;
///
/// assert_eq!(MealPeriod::from_label("午餐 (12:00)"), MealPeriod::Lunch);
/// assert_eq!(MealPeriod::from_label("Dinner special"), MealPeriod::Dinner);
/// assert_eq!(MealPeriod::from_label("gibberish"), MealPeriod::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
    Other,
}

impl MealPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealPeriod::Breakfast => "breakfast",
            MealPeriod::Lunch => "lunch",
            MealPeriod::Dinner => "dinner",
            MealPeriod::Other => "other",
        }
    }

    /// Classify a free-form period label by marker containment.
    ///
    /// Recognizes the Chinese markers used by the frontend (早餐/午餐/晚餐)
    /// as well as the English period names, case-insensitively. Labels with
    /// no recognized marker fall back to `Other`.
    pub fn from_label(label: &str) -> MealPeriod {
        let lower = label.to_lowercase();
        if label.contains("早餐") || lower.contains("breakfast") {
            MealPeriod::Breakfast
        } else if label.contains("午餐") || lower.contains("lunch") {
            MealPeriod::Lunch
        } else if label.contains("晚餐") || lower.contains("dinner") {
            MealPeriod::Dinner
        } else {
            MealPeriod::Other
        }
    }
}

impl std::fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crowd-level classification of a predicted headcount.
///
/// Pure threshold function: comfortable below 80, moderate in 80–119,
/// crowded at 120 and above. No hysteresis.
///
/// # Examples
///
/// ```
/// use canteen_rust::core::domain::CrowdLevel;
///
/// assert_eq!(CrowdLevel::from_headcount(79), CrowdLevel::Comfortable);
/// assert_eq!(CrowdLevel::from_headcount(80), CrowdLevel::Moderate);
/// assert_eq!(CrowdLevel::from_headcount(120), CrowdLevel::Crowded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrowdLevel {
    Comfortable,
    Moderate,
    Crowded,
}

impl CrowdLevel {
    pub fn from_headcount(headcount: u32) -> CrowdLevel {
        if headcount < MODERATE_THRESHOLD {
            CrowdLevel::Comfortable
        } else if headcount < CROWDED_THRESHOLD {
            CrowdLevel::Moderate
        } else {
            CrowdLevel::Crowded
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdLevel::Comfortable => "comfortable",
            CrowdLevel::Moderate => "moderate",
            CrowdLevel::Crowded => "crowded",
        }
    }
}

impl std::fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated queueing time in minutes for a predicted headcount.
///
/// Step function over 10-person buckets above the comfortable threshold:
/// `max(0, floor((headcount - 80) / 10) * 5)`.
///
/// # Examples
///
/// ```
/// use canteen_rust::core::domain::estimated_wait_minutes;
///
/// assert_eq!(estimated_wait_minutes(79), 0);
/// assert_eq!(estimated_wait_minutes(90), 5);
/// assert_eq!(estimated_wait_minutes(100), 10);
/// ```
pub fn estimated_wait_minutes(headcount: u32) -> u32 {
    headcount.saturating_sub(MODERATE_THRESHOLD) / WAIT_BUCKET_PEOPLE * WAIT_STEP_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_labels_round_trip() {
        for venue in Venue::ALL {
            assert_eq!(Venue::from_label(venue.label()), Some(venue));
        }
        assert_eq!(Venue::from_label("NoSuchPlace"), None);
    }

    #[test]
    fn venue_enumeration_order_is_fixed() {
        let labels: Vec<&str> = Venue::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(
            labels,
            vec!["第一食堂", "第二食堂", "第三食堂", "风味餐厅", "清真食堂"]
        );
    }

    #[test]
    fn period_label_markers() {
        assert_eq!(MealPeriod::from_label("早餐 (7:00-9:00)"), MealPeriod::Breakfast);
        assert_eq!(MealPeriod::from_label("午餐 (11:00-13:00)"), MealPeriod::Lunch);
        assert_eq!(MealPeriod::from_label("晚餐 (17:00-19:00)"), MealPeriod::Dinner);
        assert_eq!(MealPeriod::from_label("LUNCH rush"), MealPeriod::Lunch);
        assert_eq!(MealPeriod::from_label(""), MealPeriod::Other);
        assert_eq!(MealPeriod::from_label("夜宵"), MealPeriod::Other);
    }

    #[test]
    fn crowd_level_boundaries() {
        assert_eq!(CrowdLevel::from_headcount(0), CrowdLevel::Comfortable);
        assert_eq!(CrowdLevel::from_headcount(79), CrowdLevel::Comfortable);
        assert_eq!(CrowdLevel::from_headcount(80), CrowdLevel::Moderate);
        assert_eq!(CrowdLevel::from_headcount(119), CrowdLevel::Moderate);
        assert_eq!(CrowdLevel::from_headcount(120), CrowdLevel::Crowded);
        assert_eq!(CrowdLevel::from_headcount(500), CrowdLevel::Crowded);
    }

    #[test]
    fn wait_minutes_step_function() {
        assert_eq!(estimated_wait_minutes(0), 0);
        assert_eq!(estimated_wait_minutes(79), 0);
        assert_eq!(estimated_wait_minutes(80), 0);
        assert_eq!(estimated_wait_minutes(89), 0);
        assert_eq!(estimated_wait_minutes(90), 5);
        assert_eq!(estimated_wait_minutes(100), 10);
        assert_eq!(estimated_wait_minutes(110), 15);
        assert_eq!(estimated_wait_minutes(120), 20);
    }
}
