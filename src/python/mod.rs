//! Python bindings for the canteen forecasting engine.
//!
//! This module exposes the engine to the Streamlit frontend via PyO3. Each
//! function is a thin wrapper: parse primitives at the boundary, call the
//! services, serialize the resulting DTO to JSON for the Python side.
//!
//! The engine handle is process-global so repeated widget refreshes share
//! one jitter source instead of re-wiring the engine per call.

use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::api::{DailyProfileData, RecommendationData, VenueSnapshotData};
use crate::core::domain::Venue;
use crate::core::error::ForecastError;
use crate::forecast::Forecaster;
use crate::services::{
    compute_daily_profile, compute_recommendation, compute_venue_snapshot, RecommendationWindow,
};
use crate::time::{TimeGrid, TimeSlot};

static FORECASTER: Lazy<Mutex<Forecaster>> = Lazy::new(|| Mutex::new(Forecaster::new()));

fn engine() -> PyResult<std::sync::MutexGuard<'static, Forecaster>> {
    FORECASTER
        .lock()
        .map_err(|_| PyRuntimeError::new_err("forecaster lock poisoned"))
}

fn parse_date(date: &str) -> PyResult<NaiveDate> {
    date.trim().parse::<NaiveDate>().map_err(|_| {
        PyValueError::new_err(ForecastError::InvalidDate(date.to_string()).to_string())
    })
}

fn parse_slot(time: &str) -> PyResult<TimeSlot> {
    TimeSlot::parse(time).map_err(|e| PyValueError::new_err(e.to_string()))
}

fn parse_venue(canteen: &str) -> PyResult<Venue> {
    Venue::from_label(canteen).ok_or_else(|| {
        PyValueError::new_err(ForecastError::UnknownVenue(canteen.to_string()).to_string())
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// Predict the headcount for a canteen on a date during a meal window.
///
/// `canteen` and `time_slot` are display labels; unknown canteens use the
/// default base rate and unrecognized period markers the neutral factor,
/// matching the engine's lenient-default policy. `date` is ISO `YYYY-MM-DD`.
#[pyfunction]
pub fn predict_crowd(canteen: &str, date: &str, time_slot: &str) -> PyResult<u32> {
    let date = parse_date(date)?;
    Ok(engine()?.predict_label(canteen, date, time_slot))
}

/// Daily profile for one canteen over the standard 7:00-19:00 grid,
/// as a JSON payload.
#[pyfunction]
pub fn get_daily_profile(canteen: &str, date: &str) -> PyResult<String> {
    let venue = parse_venue(canteen)?;
    let date = parse_date(date)?;
    let profile = compute_daily_profile(&mut engine()?, venue, date, &TimeGrid::standard());
    to_json(&DailyProfileData::from(&profile))
}

/// Cross-venue snapshot at a clock instant, as a JSON payload.
#[pyfunction]
pub fn get_venue_snapshot(date: &str, time: &str) -> PyResult<String> {
    let date = parse_date(date)?;
    let slot = parse_slot(time)?;
    let snapshot = compute_venue_snapshot(&mut engine()?, date, slot);
    to_json(&VenueSnapshotData::from(&snapshot))
}

/// Best venue, best lunch-window time, and people saved, as a JSON payload.
#[pyfunction]
pub fn get_recommendation(canteen: &str, date: &str, time: &str) -> PyResult<String> {
    let venue = parse_venue(canteen)?;
    let date = parse_date(date)?;
    let slot = parse_slot(time)?;

    let mut forecaster = engine()?;
    let snapshot = compute_venue_snapshot(&mut forecaster, date, slot);
    let profile = compute_daily_profile(&mut forecaster, venue, date, &TimeGrid::standard());
    let rec = compute_recommendation(&snapshot, &profile, &RecommendationWindow::lunch())
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
    to_json(&RecommendationData::from(&rec))
}
