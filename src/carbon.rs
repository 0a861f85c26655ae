//! Simulated carbon values and the rankings derived from them.
//!
//! Nothing here measures a real page. A [`CarbonSource`] hands out a value in
//! `[0, 1)` and the rest of the crate treats it as grams of CO2 per visit.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;

use crate::models::Entry;

/// Produces the carbon value for a new check.
pub trait CarbonSource: Send + Sync + 'static {
    fn next_carbon(&self) -> f64;
}

/// Uniform random carbon values with three decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCarbon;

impl CarbonSource for RandomCarbon {
    fn next_carbon(&self) -> f64 {
        let thousandths: u32 = rand::rng().random_range(0..1000);
        f64::from(thousandths) / 1000.0
    }
}

/// Hands out preset values in order, repeating the last one once exhausted.
#[derive(Debug)]
pub struct FixedCarbon {
    values: Mutex<VecDeque<f64>>,
}

impl FixedCarbon {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }
}

impl CarbonSource for FixedCarbon {
    fn next_carbon(&self) -> f64 {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        if values.len() > 1 {
            values.pop_front().unwrap_or_default()
        } else {
            values.front().copied().unwrap_or_default()
        }
    }
}

/// Round to three decimals, keeping the result inside `[0, 0.999]`.
pub fn round_carbon(value: f64) -> f64 {
    ((value * 1000.0).round() / 1000.0).clamp(0.0, 0.999)
}

/// Percentage of `existing` entries with strictly more carbon than `carbon`.
///
/// An empty history ranks the new value at 100.
pub fn percent_cleaner(carbon: f64, existing: &[Entry]) -> u8 {
    if existing.is_empty() {
        return 100;
    }
    let higher = existing.iter().filter(|e| e.carbon > carbon).count();
    (higher as f64 / existing.len() as f64 * 100.0).round() as u8
}
