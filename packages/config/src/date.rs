use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Format used when only the date portion of a sampled instant is wanted.
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Format used when only the time portion of a sampled instant is wanted.
pub const TIME_ONLY_FORMAT: &str = "%H:%M:%S";

/// Window and format for sampled date/time values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// strftime-style format for full date-time values.
    pub format: String,
    /// How many days into the past sampled instants may fall.
    pub past_days: u32,
    /// How many days into the future sampled instants may fall.
    pub future_days: u32,
    /// When set, every sampled instant is the current instant.
    pub use_current_time: bool,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            format: "%Y-%m-%d %H:%M:%S".to_string(),
            past_days: 365,
            future_days: 0,
            use_current_time: false,
        }
    }
}

impl DateConfig {
    /// Whether `format` is a usable strftime pattern.
    pub fn format_is_valid(&self) -> bool {
        !self.format.trim().is_empty()
            && !StrftimeItems::new(&self.format).any(|item| matches!(item, Item::Error))
    }

    /// Total sampling window in days.
    pub fn total_range_days(&self) -> u32 {
        self.past_days + self.future_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_valid() {
        assert!(DateConfig::default().format_is_valid());
    }

    #[test]
    fn test_bad_format_is_rejected() {
        let config = DateConfig {
            format: "%Q-nope".to_string(),
            ..Default::default()
        };
        assert!(!config.format_is_valid());

        let empty = DateConfig {
            format: "  ".to_string(),
            ..Default::default()
        };
        assert!(!empty.format_is_valid());
    }

    #[test]
    fn test_total_range() {
        let config = DateConfig {
            past_days: 30,
            future_days: 7,
            ..Default::default()
        };
        assert_eq!(config.total_range_days(), 37);
    }
}
