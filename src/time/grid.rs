//! Daily time grid and clock-time to meal-period inference.

use crate::core::domain::MealPeriod;
use crate::core::error::{ForecastError, ForecastResult};

/// A point on the daily clock, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    /// Create a slot from hour and minute.
    ///
    /// Returns an error for out-of-range components.
    pub fn new(hour: u8, minute: u8) -> ForecastResult<TimeSlot> {
        if hour > 23 || minute > 59 {
            return Err(ForecastError::InvalidTime(format!("{}:{:02}", hour, minute)));
        }
        Ok(TimeSlot { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Display label in the frontend's `H:MM` form, e.g. `7:00`, `12:30`.
    pub fn label(&self) -> String {
        format!("{}:{:02}", self.hour, self.minute)
    }

    /// Parse a `H:MM` or `HH:MM` clock label.
    pub fn parse(label: &str) -> ForecastResult<TimeSlot> {
        let invalid = || ForecastError::InvalidTime(label.to_string());
        let (h, m) = label.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        TimeSlot::new(hour, minute).map_err(|_| invalid())
    }

    /// Infer the meal period for this time of day.
    ///
    /// Closed-range membership: [7:00, 9:00] breakfast, [11:00, 13:00]
    /// lunch, [17:00, 19:00] dinner, anything else `Other`.
    pub fn meal_period(&self) -> MealPeriod {
        let m = self.minutes_since_midnight();
        match m {
            420..=540 => MealPeriod::Breakfast,
            660..=780 => MealPeriod::Lunch,
            1020..=1140 => MealPeriod::Dinner,
            _ => MealPeriod::Other,
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// The fixed grid of slots a daily profile is computed over.
///
/// The standard grid spans 7:00–19:00 inclusive at hourly resolution,
/// giving 13 points. The step is explicit so a finer (e.g. half-hour)
/// grid stays expressible without touching any consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    start: TimeSlot,
    end: TimeSlot,
    step_minutes: u32,
}

impl TimeGrid {
    /// Grid opening hour, 7:00.
    pub const OPENING: TimeSlot = TimeSlot { hour: 7, minute: 0 };
    /// Grid closing hour, 19:00.
    pub const CLOSING: TimeSlot = TimeSlot { hour: 19, minute: 0 };

    /// The standard 13-point hourly grid, 7:00–19:00 inclusive.
    pub fn standard() -> TimeGrid {
        TimeGrid {
            start: Self::OPENING,
            end: Self::CLOSING,
            step_minutes: 60,
        }
    }

    /// A grid over the same span with a custom step in minutes.
    pub fn with_step(step_minutes: u32) -> ForecastResult<TimeGrid> {
        if step_minutes == 0 {
            return Err(ForecastError::InvalidTime("zero grid step".to_string()));
        }
        Ok(TimeGrid {
            start: Self::OPENING,
            end: Self::CLOSING,
            step_minutes,
        })
    }

    /// All grid slots in chronological order, endpoints inclusive.
    pub fn slots(&self) -> Vec<TimeSlot> {
        let mut slots = Vec::new();
        let mut m = self.start.minutes_since_midnight();
        let end = self.end.minutes_since_midnight();
        while m <= end {
            slots.push(TimeSlot {
                hour: (m / 60) as u8,
                minute: (m % 60) as u8,
            });
            m += self.step_minutes;
        }
        slots
    }
}
