use crate::date::DateConfig;
use serde::{Deserialize, Serialize};

/// Value ranges for the sampler. Owned by the caller, passed by reference
/// into generation, never mutated by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub date: DateConfig,
    /// Inclusive bounds on sampled array/collection lengths.
    pub array_min_len: usize,
    pub array_max_len: usize,
    /// Hard cap on sampled map entries, applied after the array-length
    /// sample.
    pub map_max_entries: usize,
    /// Exclusive upper bound for sampled ints (lower bound 0).
    pub max_int: i64,
    /// Exclusive upper bound for sampled longs (lower bound 0).
    pub max_long: i64,
    /// Upper bound for sampled decimals, rounded to two places.
    pub max_decimal: f64,
    /// Chance that an Optional value samples as `null` instead of its
    /// inner value.
    pub optional_none_probability: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            date: DateConfig::default(),
            array_min_len: 1,
            array_max_len: 3,
            map_max_entries: 3,
            max_int: 1_000,
            max_long: 1_000_000,
            max_decimal: 1_000.0,
            optional_none_probability: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_ranges() {
        let config = SampleConfig::default();
        assert_eq!((config.array_min_len, config.array_max_len), (1, 3));
        assert_eq!(config.map_max_entries, 3);
        assert_eq!(config.max_int, 1_000);
        assert!((config.optional_none_probability - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: SampleConfig = serde_json::from_str(r#"{"array_max_len": 5}"#).unwrap();
        assert_eq!(config.array_max_len, 5);
        assert_eq!(config.array_min_len, 1);
        assert_eq!(config.date, DateConfig::default());
    }
}
