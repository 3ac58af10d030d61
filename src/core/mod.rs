//! Core domain models for canteen occupancy forecasting.
//!
//! This module defines the fundamental data structures used throughout the
//! engine, representing venues, meal periods, and derived crowd levels.

pub mod domain;
pub mod error;

pub use domain::{estimated_wait_minutes, CrowdLevel, MealPeriod, Venue};
pub use error::{ForecastError, ForecastResult};
