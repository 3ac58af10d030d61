//! Occupancy forecasting and recommendation engine for the smart canteen
//! assistant.
//!
//! The engine maps (venue, date, meal period) to a predicted headcount from
//! a base-rate table, multiplicative time-of-day and day-of-week factors,
//! and bounded random jitter. Services reduce batches of predictions into a
//! daily profile, a cross-venue snapshot, and a single "best choice"
//! recommendation for the display layer.

pub mod api;
pub mod core;
pub mod forecast;
pub mod services;
pub mod time;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Canteen Rust backend - occupancy forecasting for the Streamlit frontend.
#[cfg(feature = "python")]
#[pymodule]
fn canteen_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::predict_crowd, m)?)?;
    m.add_function(wrap_pyfunction!(python::get_daily_profile, m)?)?;
    m.add_function(wrap_pyfunction!(python::get_venue_snapshot, m)?)?;
    m.add_function(wrap_pyfunction!(python::get_recommendation, m)?)?;
    Ok(())
}
