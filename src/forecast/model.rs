//! The occupancy forecast engine.
//!
//! `CrowdModel` holds the deterministic parameters: per-venue base rates,
//! meal-period factors, and the weekend factor. `Forecaster` combines the
//! model with an injected [`JitterSource`] and produces integer headcounts.
//!
//! The current model is a baseline, not a trained one; it is intended to be
//! replaceable by a learned model behind the same interface.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::core::domain::{MealPeriod, Venue};
use crate::forecast::config::ModelConfig;
use crate::forecast::jitter::{JitterSource, UniformJitter};

/// Deterministic model parameters for the occupancy baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct CrowdModel {
    base_rates: [f64; 5],
    default_base_rate: f64,
    breakfast_factor: f64,
    lunch_factor: f64,
    dinner_factor: f64,
    weekend_factor: f64,
}

impl CrowdModel {
    /// Base rate applied when a venue label is not recognized.
    pub const DEFAULT_BASE_RATE: f64 = 100.0;

    /// Built-in nominal occupancy for a venue, independent of time and day.
    pub fn builtin_base_rate(venue: Venue) -> f64 {
        match venue {
            Venue::First => 150.0,
            Venue::Second => 120.0,
            Venue::Third => 100.0,
            Venue::Flavor => 80.0,
            Venue::Halal => 60.0,
        }
    }

    /// Build a model from configuration, falling back to built-in values
    /// for anything the config does not override.
    pub fn from_config(config: &ModelConfig) -> CrowdModel {
        let settings = &config.model;
        let mut base_rates = [0.0; 5];
        for (i, venue) in Venue::ALL.iter().enumerate() {
            base_rates[i] = settings
                .base_rates
                .get(venue.label())
                .copied()
                .unwrap_or_else(|| Self::builtin_base_rate(*venue));
        }
        CrowdModel {
            base_rates,
            default_base_rate: settings.default_base_rate,
            breakfast_factor: settings.breakfast_factor,
            lunch_factor: settings.lunch_factor,
            dinner_factor: settings.dinner_factor,
            weekend_factor: settings.weekend_factor,
        }
    }

    pub fn base_rate(&self, venue: Venue) -> f64 {
        let index = Venue::ALL.iter().position(|v| *v == venue).unwrap_or(0);
        self.base_rates[index]
    }

    /// Base rate for a display label.
    ///
    /// Unknown labels fall back to [`Self::DEFAULT_BASE_RATE`] rather than
    /// erroring. This lenient-default policy is deliberate and part of the
    /// engine contract.
    pub fn base_rate_for_label(&self, label: &str) -> f64 {
        match Venue::from_label(label) {
            Some(venue) => self.base_rate(venue),
            None => self.default_base_rate,
        }
    }

    pub fn period_factor(&self, period: MealPeriod) -> f64 {
        match period {
            MealPeriod::Breakfast => self.breakfast_factor,
            MealPeriod::Lunch => self.lunch_factor,
            MealPeriod::Dinner => self.dinner_factor,
            MealPeriod::Other => 1.0,
        }
    }

    /// Weekend days run at a reduced factor; weekdays at 1.0.
    pub fn day_factor(&self, date: NaiveDate) -> f64 {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => self.weekend_factor,
            _ => 1.0,
        }
    }
}

impl Default for CrowdModel {
    fn default() -> Self {
        CrowdModel::from_config(&ModelConfig::default())
    }
}

/// The forecast engine: deterministic core plus stochastic jitter.
///
/// Stateless apart from the injected random source; every prediction is
/// recomputed fresh from explicit parameters.
pub struct Forecaster {
    model: CrowdModel,
    jitter: Box<dyn JitterSource>,
}

impl Forecaster {
    /// Engine with built-in model parameters and uniform production jitter.
    pub fn new() -> Forecaster {
        Forecaster {
            model: CrowdModel::default(),
            jitter: Box::new(UniformJitter::default()),
        }
    }

    /// Engine over explicit model parameters and jitter source.
    pub fn with_parts(model: CrowdModel, jitter: Box<dyn JitterSource>) -> Forecaster {
        Forecaster { model, jitter }
    }

    /// Engine wired from a [`ModelConfig`].
    pub fn from_config(config: &ModelConfig) -> Forecaster {
        Forecaster {
            model: CrowdModel::from_config(config),
            jitter: Box::new(UniformJitter::new(
                config.model.jitter_low,
                config.model.jitter_high,
            )),
        }
    }

    pub fn model(&self) -> &CrowdModel {
        &self.model
    }

    /// Predict the headcount for a venue on a date during a meal period.
    ///
    /// `floor(base × period_factor × day_factor × jitter)`, clamped to be
    /// non-negative. Total over the input domain; no side effects beyond
    /// the jitter draw.
    pub fn predict(&mut self, venue: Venue, date: NaiveDate, period: MealPeriod) -> u32 {
        let base = self.model.base_rate(venue);
        self.combine(base, date, period)
    }

    /// Predict from display labels.
    ///
    /// Unknown venue labels use the default base rate; period labels are
    /// classified by marker containment with `Other` as fallback. See
    /// [`CrowdModel::base_rate_for_label`] and [`MealPeriod::from_label`].
    pub fn predict_label(&mut self, venue_label: &str, date: NaiveDate, period_label: &str) -> u32 {
        let base = self.model.base_rate_for_label(venue_label);
        let period = MealPeriod::from_label(period_label);
        self.combine(base, date, period)
    }

    fn combine(&mut self, base: f64, date: NaiveDate, period: MealPeriod) -> u32 {
        let raw = base
            * self.model.period_factor(period)
            * self.model.day_factor(date)
            * self.jitter.draw();
        // Non-negativity clamp: the fixed tables cannot produce a negative
        // value, but the contract promises a headcount >= 0 for any model.
        (raw.floor() as i64).max(0) as u32
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Forecaster::new()
    }
}
