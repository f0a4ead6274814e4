use crate::mapping::MappingTable;
use crate::sample::SampleConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid settings: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Traversal limits for both generators. Defaults are the documented
/// ones: JSON walks depth 8 under a 10 s budget, interface generation
/// depth 12 under 15 s, and any one record expands at most 3 times per
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub json_max_depth: usize,
    pub interface_max_depth: usize,
    pub max_same_record_visits: usize,
    pub json_timeout_ms: u64,
    pub interface_timeout_ms: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            json_max_depth: 8,
            interface_max_depth: 12,
            max_same_record_visits: 3,
            json_timeout_ms: 10_000,
            interface_timeout_ms: 15_000,
        }
    }
}

/// Everything the generators consume, in one caller-owned bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub limits: Limits,
    pub sample: SampleConfig,
    pub mappings: MappingTable,
    /// Interface generation marks boxed wrapper fields optional. On by
    /// default; hosts that treat wrappers as always-present can turn it
    /// off.
    pub boxed_types_nullable: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            sample: SampleConfig::default(),
            mappings: MappingTable::default(),
            boxed_types_nullable: true,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every tunable for sane bounds, collecting all problems
    /// rather than stopping at the first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        for (label, depth) in [
            ("JSON max depth", self.limits.json_max_depth),
            ("interface max depth", self.limits.interface_max_depth),
        ] {
            if !(1..=20).contains(&depth) {
                problems.push(format!("{label} must be between 1 and 20, got {depth}"));
            }
        }
        if self.limits.max_same_record_visits == 0 {
            problems.push("same-record visit cap must be at least 1".to_string());
        }

        if !(1..=10).contains(&self.sample.array_max_len) {
            problems.push(format!(
                "array max size must be between 1 and 10, got {}",
                self.sample.array_max_len
            ));
        }
        if self.sample.array_min_len > self.sample.array_max_len {
            problems.push("array min size exceeds array max size".to_string());
        }
        if !(0.0..=1.0).contains(&self.sample.optional_none_probability) {
            problems.push("optional null probability must be within 0.0..=1.0".to_string());
        }
        if !self.sample.date.format_is_valid() {
            problems.push(format!(
                "invalid date format: '{}'",
                self.sample.date.format
            ));
        }

        for (i, mapping) in self.mappings.type_mappings.iter().enumerate() {
            if mapping.source_type.trim().is_empty() {
                problems.push(format!("type mapping #{} has an empty source type", i + 1));
            }
        }
        for (i, mapping) in self.mappings.package_mappings.iter().enumerate() {
            if mapping.package_pattern.trim().is_empty() {
                problems.push(format!("package mapping #{} has an empty pattern", i + 1));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::TypeMapping;

    #[test]
    fn test_defaults_validate() {
        assert!(Settings::new().validate().is_ok());
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let mut settings = Settings::new();
        settings.limits.json_max_depth = 0;
        settings.sample.array_max_len = 99;
        settings
            .mappings
            .type_mappings
            .push(TypeMapping::new("  ", "x", "y"));

        let ConfigError::Invalid(problems) = settings.validate().unwrap_err();
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings::new();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }

    #[test]
    fn test_partial_settings_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"limits": {"json_max_depth": 4}}"#).unwrap();
        assert_eq!(settings.limits.json_max_depth, 4);
        assert_eq!(settings.limits.interface_max_depth, 12);
    }
}
