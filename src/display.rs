//! Display-state composition
//!
//! One update cycle turns a fetched reading pair and a config
//! snapshot into an immutable `DisplayState`. Composition is pure:
//! the same readings, config, and clock always produce the same
//! state, and a failed cycle leaves the caller's previous state
//! untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::MonitorConfig;
use crate::delta;
use crate::elapsed;
use crate::error::MonitorError;
use crate::reading::Reading;
use crate::severity::Severity;
use crate::trend::{self, Trend};

pub const LOADING_TEXT: &str = "---";
pub const ERROR_TEXT: &str = "⚠️ Error";
pub const ERROR_COLOR: &str = "red";

/// Renderer-agnostic snapshot of everything the host shell displays.
///
/// Superseded, never mutated: each successful cycle produces a fresh
/// state and the previous one is simply dropped by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Panel line, e.g. `120 (+5) ↗ [2 minutes ago]`.
    pub panel_text: String,
    /// Severity color for the panel text. Always computed, even when
    /// every display toggle is off.
    pub color: String,
    pub severity: Severity,
    pub trend: Trend,
    pub delta: Option<i32>,
    pub elapsed_text: String,
    /// Menu rows: last reading, delta, trend, elapsed. The menu is an
    /// always-visible surface, so these ignore the display toggles.
    pub menu_rows: [String; 4],
    /// Passthrough of the show-icon toggle.
    pub show_icon: bool,
}

impl DisplayState {
    /// Degraded state for a total fetch failure: error glyph and
    /// alert color. Hosts render this in place of live data while
    /// keeping their previous state for the next successful cycle.
    pub fn error_state(config: &MonitorConfig) -> Self {
        Self {
            panel_text: ERROR_TEXT.to_string(),
            color: ERROR_COLOR.to_string(),
            severity: Severity::Normal,
            trend: Trend::NotComputable,
            delta: None,
            elapsed_text: LOADING_TEXT.to_string(),
            menu_rows: [
                format!("Last reading: {}", LOADING_TEXT),
                format!("Delta: {}", LOADING_TEXT),
                format!("Trend: {}", LOADING_TEXT),
                format!("Time: {}", LOADING_TEXT),
            ],
            show_icon: config.show_icon,
        }
    }
}

/// Host-side rendering capability, implemented per toolkit. The core
/// never references a toolkit type.
pub trait Renderer {
    fn render(&mut self, state: &DisplayState);
}

/// Compose the display state for one update cycle.
///
/// Readings are ordered newest first. An empty slice yields
/// `MonitorError::NoData`; the caller retains whatever it rendered
/// last. `now` is passed in rather than sampled so composition stays
/// referentially transparent.
pub fn compose(
    readings: &[Reading],
    config: &MonitorConfig,
    now: DateTime<Utc>,
) -> Result<DisplayState, MonitorError> {
    let latest = readings.first().ok_or(MonitorError::NoData)?;

    let trend = trend::classify(readings);
    let delta = delta::compute(readings);
    let severity = config.thresholds().classify(latest.sgv);
    let elapsed_text = elapsed::format(latest.timestamp, now);

    let mut panel_text = format!("{}", latest.sgv);
    if config.show_delta {
        if let Some(d) = delta {
            panel_text.push_str(&format!(" ({})", delta::format(d)));
        }
    }
    if config.show_trend {
        panel_text.push_str(&format!(" {}", trend.glyph()));
    }
    if config.show_time {
        panel_text.push_str(&format!(" [{}]", elapsed_text));
    }

    let menu_rows = [
        format!("Last reading: {} mg/dL", latest.sgv),
        match delta {
            Some(d) => format!("Delta: {} mg/dL", delta::format(d)),
            None => format!("Delta: {}", LOADING_TEXT),
        },
        format!("Trend: {}", trend.label()),
        format!("Time: {}", elapsed_text),
    ];

    Ok(DisplayState {
        panel_text,
        color: config.color_for(severity).to_string(),
        severity,
        trend,
        delta,
        elapsed_text,
        menu_rows,
        show_icon: config.show_icon,
    })
}

/// Run one fetch-and-classify cycle: compose from the fetched
/// readings and hand the result to the renderer. On failure the
/// renderer is not invoked, signalling the host to retain its
/// previous state.
pub fn run_cycle<R: Renderer>(
    readings: &[Reading],
    config: &MonitorConfig,
    now: DateTime<Utc>,
    renderer: &mut R,
) -> Result<DisplayState, MonitorError> {
    let state = compose(readings, config, now)?;
    renderer.render(&state);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn pair(current: u16, previous: u16) -> Vec<Reading> {
        vec![
            Reading::new(current, now() - Duration::minutes(2)),
            Reading::new(previous, now() - Duration::minutes(7)),
        ]
    }

    #[test]
    fn test_full_panel_line() {
        let config = MonitorConfig::default();
        let state = compose(&pair(120, 110), &config, now()).unwrap();
        // +10 over 5 min = 2.0/min, SingleUp
        assert_eq!(state.panel_text, "120 (+10) ↑ [2 minutes ago]");
        assert_eq!(state.severity, Severity::Normal);
        assert_eq!(state.color, config.normal_color);
        assert!(state.show_icon);
    }

    #[test]
    fn test_toggles_gate_panel_fragments_only() {
        let config = MonitorConfig {
            show_delta: false,
            show_trend: false,
            show_time: false,
            show_icon: false,
            ..MonitorConfig::default()
        };
        let state = compose(&pair(120, 110), &config, now()).unwrap();
        assert_eq!(state.panel_text, "120");
        assert!(!state.show_icon);
        // Menu rows keep their full values regardless of toggles
        assert_eq!(state.menu_rows[0], "Last reading: 120 mg/dL");
        assert_eq!(state.menu_rows[1], "Delta: +10 mg/dL");
        assert_eq!(state.menu_rows[2], "Trend: SingleUp");
        assert_eq!(state.menu_rows[3], "Time: 2 minutes ago");
        // Color is computed even with every toggle off
        assert_eq!(state.color, config.normal_color);
    }

    #[test]
    fn test_single_reading_degrades_delta_and_trend() {
        let config = MonitorConfig::default();
        let readings = vec![Reading::new(250, now() - Duration::minutes(1))];
        let state = compose(&readings, &config, now()).unwrap();
        assert_eq!(state.delta, None);
        assert_eq!(state.trend, Trend::None);
        assert_eq!(state.panel_text, "250 → [1 minute ago]");
        assert_eq!(state.menu_rows[1], "Delta: ---");
        assert_eq!(state.severity, Severity::UrgentHigh);
        assert_eq!(state.color, config.urgent_high_color);
    }

    #[test]
    fn test_empty_readings_signal_no_data() {
        let config = MonitorConfig::default();
        let previous = compose(&pair(120, 110), &config, now()).unwrap();
        let result = compose(&[], &config, now());
        assert!(matches!(result, Err(MonitorError::NoData)));
        // The caller's previous state is untouched by the failed cycle
        assert_eq!(previous, compose(&pair(120, 110), &config, now()).unwrap());
    }

    #[test]
    fn test_compose_is_idempotent() {
        let config = MonitorConfig::default();
        let readings = pair(95, 118);
        let a = compose(&readings, &config, now()).unwrap();
        let b = compose(&readings, &config, now()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_state() {
        let config = MonitorConfig::default();
        let state = DisplayState::error_state(&config);
        assert_eq!(state.panel_text, ERROR_TEXT);
        assert_eq!(state.color, ERROR_COLOR);
        assert_eq!(state.menu_rows[0], "Last reading: ---");
    }

    struct RecordingRenderer {
        rendered: Vec<DisplayState>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, state: &DisplayState) {
            self.rendered.push(state.clone());
        }
    }

    #[test]
    fn test_run_cycle_renders_on_success_only() {
        let config = MonitorConfig::default();
        let mut renderer = RecordingRenderer { rendered: Vec::new() };

        run_cycle(&pair(120, 110), &config, now(), &mut renderer).unwrap();
        assert_eq!(renderer.rendered.len(), 1);

        let result = run_cycle(&[], &config, now(), &mut renderer);
        assert!(matches!(result, Err(MonitorError::NoData)));
        assert_eq!(renderer.rendered.len(), 1);
    }
}
