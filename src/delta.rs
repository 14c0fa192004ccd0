//! Two-point glucose delta

use crate::reading::Reading;

/// Signed difference between the two most recent readings, mg/dL.
/// Absent when fewer than two readings exist.
pub fn compute(readings: &[Reading]) -> Option<i32> {
    match readings {
        [current, previous, ..] => Some(i32::from(current.sgv) - i32::from(previous.sgv)),
        _ => None,
    }
}

/// Format with an explicit leading `+` for rises; zero and falls
/// render as plain decimals.
pub fn format(delta: i32) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        format!("{}", delta)
    }
}
