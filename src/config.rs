//! Monitor configuration
//!
//! Mirrors the settings surface owned by the host shell: display
//! toggles, alert thresholds, band colors, and icon placement. The
//! core never caches a config; callers pass a snapshot into each
//! cycle, so settings changes take effect on the next update.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MonitorError;
use crate::severity::{Severity, Thresholds};

/// Placement of the panel icon relative to the value text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    Left,
    #[default]
    Right,
}

/// One configuration snapshot. Keys match the host shell's
/// kebab-case settings schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MonitorConfig {
    pub show_delta: bool,
    pub show_trend: bool,
    pub show_time: bool,
    pub show_icon: bool,
    pub icon_position: IconPosition,
    pub urgent_high_threshold: u16,
    pub high_threshold: u16,
    pub low_threshold: u16,
    pub urgent_low_threshold: u16,
    pub urgent_high_color: String,
    pub high_color: String,
    pub normal_color: String,
    pub low_color: String,
    pub urgent_low_color: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            show_delta: true,
            show_trend: true,
            show_time: true,
            show_icon: true,
            icon_position: IconPosition::default(),
            urgent_high_threshold: thresholds.urgent_high,
            high_threshold: thresholds.high,
            low_threshold: thresholds.low,
            urgent_low_threshold: thresholds.urgent_low,
            urgent_high_color: "#ff4040".to_string(),
            high_color: "#ffa500".to_string(),
            normal_color: "#00d000".to_string(),
            low_color: "#ffff00".to_string(),
            urgent_low_color: "#ff4040".to_string(),
        }
    }
}

impl MonitorConfig {
    /// Alert thresholds as one value for the severity classifier.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            urgent_high: self.urgent_high_threshold,
            high: self.high_threshold,
            low: self.low_threshold,
            urgent_low: self.urgent_low_threshold,
        }
    }

    /// Configured color for a severity band.
    pub fn color_for(&self, severity: Severity) -> &str {
        match severity {
            Severity::UrgentHigh => &self.urgent_high_color,
            Severity::High => &self.high_color,
            Severity::Normal => &self.normal_color,
            Severity::Low => &self.low_color,
            Severity::UrgentLow => &self.urgent_low_color,
        }
    }

    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MonitorError> {
        let body = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Default config file location.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nsmon")
        .join("config.json")
}
