//! Severity banding for a single glucose value

use serde::{Deserialize, Serialize};

/// Alert thresholds in mg/dL. Assumed monotonic
/// (urgent_low < low < high < urgent_high) but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub urgent_high: u16,
    pub high: u16,
    pub low: u16,
    pub urgent_low: u16,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            urgent_high: 240,
            high: 180,
            low: 70,
            urgent_low: 54,
        }
    }
}

/// Ordered alert tiers, lowest to highest glucose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    UrgentLow,
    Low,
    Normal,
    High,
    UrgentHigh,
}

impl Severity {
    /// Display label for the band.
    pub fn label(self) -> &'static str {
        match self {
            Severity::UrgentLow => "Urgent Low",
            Severity::Low => "Low",
            Severity::Normal => "Normal",
            Severity::High => "High",
            Severity::UrgentHigh => "Urgent High",
        }
    }
}

impl Thresholds {
    /// Classify a value into its alert tier. All comparisons are
    /// inclusive. High-side checks take priority from the top, then
    /// low-side checks from the bottom: with overlapping thresholds a
    /// value matching both sides resolves to the high band. That
    /// tie-break is intentional, not something to normalize away.
    pub fn classify(&self, sgv: u16) -> Severity {
        if sgv >= self.urgent_high {
            Severity::UrgentHigh
        } else if sgv >= self.high {
            Severity::High
        } else if sgv <= self.urgent_low {
            Severity::UrgentLow
        } else if sgv <= self.low {
            Severity::Low
        } else {
            Severity::Normal
        }
    }
}
