//! Clock-time grid used by the daily profile and period inference.

pub mod grid;

pub use grid::{TimeGrid, TimeSlot};
