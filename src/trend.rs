//! Trend classification from the two most recent readings
//!
//! Rate of change is (newest − previous) / minutes between them,
//! positive when rising, discretized into Nightscout's direction
//! categories. Identical or inverted timestamps make the rate
//! undefined; that case classifies as `None` and is logged, never
//! surfaced as a user-facing failure.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::MonitorError;
use crate::reading::Reading;

// Rate thresholds in mg/dL per minute, first match wins.
const VERY_FAST_RISE: f64 = 3.0;
const FAST_RISE: f64 = 2.0;
const MODERATE_RISE: f64 = 1.0;
const VERY_FAST_FALL: f64 = -3.0;
const FAST_FALL: f64 = -2.0;
const MODERATE_FALL: f64 = -1.0;

/// Discretized direction of glucose movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    None,
    DoubleUp,
    SingleUp,
    FortyFiveUp,
    Flat,
    FortyFiveDown,
    SingleDown,
    DoubleDown,
    /// Feed sentinel for directions the source could not compute.
    NotComputable,
    /// Feed sentinel for out-of-bound rates. No threshold path
    /// produces this; it stays representable for feed compatibility.
    RateOutOfRange,
}

impl Trend {
    /// Panel glyph for the direction.
    pub fn glyph(self) -> &'static str {
        match self {
            Trend::DoubleUp => "↑↑",
            Trend::SingleUp => "↑",
            Trend::FortyFiveUp => "↗",
            Trend::Flat | Trend::None => "→",
            Trend::FortyFiveDown => "↘",
            Trend::SingleDown => "↓",
            Trend::DoubleDown => "↓↓",
            Trend::RateOutOfRange => "⚠️",
            Trend::NotComputable => "?",
        }
    }

    /// Full name for the menu row, matching the feed's direction labels.
    pub fn label(self) -> &'static str {
        match self {
            Trend::None => "NONE",
            Trend::DoubleUp => "DoubleUp",
            Trend::SingleUp => "SingleUp",
            Trend::FortyFiveUp => "FortyFiveUp",
            Trend::Flat => "Flat",
            Trend::FortyFiveDown => "FortyFiveDown",
            Trend::SingleDown => "SingleDown",
            Trend::DoubleDown => "DoubleDown",
            Trend::NotComputable => "NOT COMPUTABLE",
            Trend::RateOutOfRange => "RATE OUT OF RANGE",
        }
    }
}

/// Rate of change between two readings, mg/dL per minute.
///
/// Errors when the timestamps are identical or inverted, since the
/// pair is required to be ordered newest first.
fn rate_of_change(current: &Reading, previous: &Reading) -> Result<f64, MonitorError> {
    let minutes = (current.timestamp - previous.timestamp).num_seconds() as f64 / 60.0;
    if minutes <= 0.0 {
        return Err(MonitorError::DegenerateTimeDelta);
    }
    Ok((f64::from(current.sgv) - f64::from(previous.sgv)) / minutes)
}

/// Classify the trend from readings ordered newest first.
///
/// Fewer than two readings, or a degenerate time delta, yields
/// `Trend::None`.
pub fn classify(readings: &[Reading]) -> Trend {
    let (current, previous) = match readings {
        [a, b, ..] => (a, b),
        _ => return Trend::None,
    };

    let rate = match rate_of_change(current, previous) {
        Ok(rate) => rate,
        Err(e) => {
            warn!("Trend not computable: {}", e);
            return Trend::None;
        }
    };

    if rate >= VERY_FAST_RISE {
        Trend::DoubleUp
    } else if rate >= FAST_RISE {
        Trend::SingleUp
    } else if rate >= MODERATE_RISE {
        Trend::FortyFiveUp
    } else if rate <= VERY_FAST_FALL {
        Trend::DoubleDown
    } else if rate <= FAST_FALL {
        Trend::SingleDown
    } else if rate <= MODERATE_FALL {
        Trend::FortyFiveDown
    } else {
        Trend::Flat
    }
}
