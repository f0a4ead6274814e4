//! Random-but-plausible literal values, bounded by a [`SampleConfig`].

use chrono::{DateTime, Duration as ChronoDuration, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use typesketch_config::date::{DATE_ONLY_FORMAT, TIME_ONLY_FORMAT};
use typesketch_config::SampleConfig;
use typesketch_model::DateTimeKind;
use uuid::Uuid;

const SAMPLE_WORDS: [&str; 14] = [
    "Lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sample",
    "example",
    "test",
    "demo",
    "placeholder",
    "text",
];

const SAMPLE_EMAILS: [&str; 4] = [
    "user@example.com",
    "test@demo.org",
    "sample@test.net",
    "admin@company.com",
];

/// Placeholders understood by [`ValueSampler::expand_pattern`].
const PATTERN_PLACEHOLDERS: [&str; 11] = [
    "{{random_date}}",
    "{{random_datetime}}",
    "{{random_date_only}}",
    "{{random_time_only}}",
    "{{random_decimal}}",
    "{{random_integer}}",
    "{{random_int}}",
    "{{random_uuid}}",
    "{{random_string}}",
    "{{random_email}}",
    "{{random_boolean}}",
];

/// Owns the RNG for one generation call. Seeded construction keeps test
/// output reproducible; UUIDs are built from RNG bytes for the same
/// reason.
pub struct ValueSampler<'a> {
    config: &'a SampleConfig,
    rng: StdRng,
    format_valid: bool,
}

impl<'a> ValueSampler<'a> {
    pub fn new(config: &'a SampleConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: &'a SampleConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &'a SampleConfig, rng: StdRng) -> Self {
        Self {
            format_valid: config.date.format_is_valid(),
            config,
            rng,
        }
    }

    pub fn int(&mut self) -> i64 {
        self.rng.gen_range(0..self.config.max_int.max(1))
    }

    pub fn long(&mut self) -> i64 {
        self.rng.gen_range(0..self.config.max_long.max(1))
    }

    /// Decimal in `[0, max_decimal)`, rounded to two places.
    pub fn decimal(&mut self) -> f64 {
        let raw = self.rng.gen::<f64>() * self.config.max_decimal;
        (raw * 100.0).round() / 100.0
    }

    pub fn boolean(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Lorem word with a numeric suffix, e.g. `ipsum42`.
    pub fn word(&mut self) -> String {
        let word = SAMPLE_WORDS[self.rng.gen_range(0..SAMPLE_WORDS.len())];
        format!("{word}{}", self.rng.gen_range(0..1000))
    }

    pub fn email(&mut self) -> String {
        SAMPLE_EMAILS[self.rng.gen_range(0..SAMPLE_EMAILS.len())].to_string()
    }

    pub fn letter(&mut self) -> char {
        (b'a' + self.rng.gen_range(0..26u8)) as char
    }

    /// Whether an Optional samples as null this time.
    pub fn optional_is_none(&mut self) -> bool {
        self.rng
            .gen_bool(self.config.optional_none_probability.clamp(0.0, 1.0))
    }

    pub fn array_len(&mut self) -> usize {
        let min = self.config.array_min_len.min(self.config.array_max_len);
        self.rng.gen_range(min..=self.config.array_max_len)
    }

    pub fn map_len(&mut self) -> usize {
        self.array_len().min(self.config.map_max_entries)
    }

    pub fn uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    /// Pick one of `items`, or None when empty.
    pub fn choice<'s, T>(&mut self, items: &'s [T]) -> Option<&'s T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.gen_range(0..items.len()))
    }

    /// An instant inside the configured date window, with hour/minute
    /// jitter so values do not cluster on the current time of day.
    pub fn instant(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let date = &self.config.date;
        if date.use_current_time || date.total_range_days() == 0 {
            return now;
        }
        let offset_days = self
            .rng
            .gen_range(-(date.past_days as i64)..=date.future_days as i64);
        now + ChronoDuration::days(offset_days)
            - ChronoDuration::hours(self.rng.gen_range(0..24))
            - ChronoDuration::minutes(self.rng.gen_range(0..60))
    }

    /// Sampled instant formatted for the given date/time flavor.
    pub fn date_time_string(&mut self, kind: DateTimeKind) -> String {
        let instant = self.instant();
        match kind {
            DateTimeKind::DateTime => {
                let format = if self.format_valid {
                    self.config.date.format.as_str()
                } else {
                    "%Y-%m-%d %H:%M:%S"
                };
                instant.format(format).to_string()
            }
            DateTimeKind::DateOnly => instant.format(DATE_ONLY_FORMAT).to_string(),
            DateTimeKind::TimeOnly => instant.format(TIME_ONLY_FORMAT).to_string(),
            DateTimeKind::Instant => instant.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Expand every `{{random_*}}` placeholder in a mapping pattern with
    /// a fresh sample. Patterns without placeholders pass through
    /// verbatim.
    pub fn expand_pattern(&mut self, pattern: &str) -> String {
        let mut result = pattern.to_string();
        for placeholder in PATTERN_PLACEHOLDERS {
            while result.contains(placeholder) {
                let value = match placeholder {
                    "{{random_date}}" | "{{random_datetime}}" => {
                        self.date_time_string(DateTimeKind::DateTime)
                    }
                    "{{random_date_only}}" => self.date_time_string(DateTimeKind::DateOnly),
                    "{{random_time_only}}" => self.date_time_string(DateTimeKind::TimeOnly),
                    "{{random_decimal}}" => format!("{:.2}", self.decimal()),
                    "{{random_integer}}" => self.long().to_string(),
                    "{{random_int}}" => self.int().to_string(),
                    "{{random_uuid}}" => self.uuid().to_string(),
                    "{{random_string}}" => self.word(),
                    "{{random_email}}" => self.email(),
                    "{{random_boolean}}" => self.boolean().to_string(),
                    _ => unreachable!("placeholder table out of sync"),
                };
                result = result.replacen(placeholder, &value, 1);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typesketch_config::DateConfig;

    fn sampler(config: &SampleConfig) -> ValueSampler<'_> {
        ValueSampler::with_seed(config, 42)
    }

    #[test]
    fn test_int_and_long_stay_in_range() {
        let config = SampleConfig::default();
        let mut s = sampler(&config);
        for _ in 0..100 {
            assert!((0..1_000).contains(&s.int()));
            assert!((0..1_000_000).contains(&s.long()));
        }
    }

    #[test]
    fn test_decimal_has_two_places() {
        let config = SampleConfig::default();
        let mut s = sampler(&config);
        for _ in 0..100 {
            let value = s.decimal();
            assert!((0.0..=1_000.0).contains(&value));
            let scaled = value * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_array_len_respects_bounds() {
        let config = SampleConfig {
            array_min_len: 2,
            array_max_len: 5,
            ..Default::default()
        };
        let mut s = sampler(&config);
        for _ in 0..100 {
            assert!((2..=5).contains(&s.array_len()));
        }
    }

    #[test]
    fn test_map_len_is_capped() {
        let config = SampleConfig {
            array_min_len: 5,
            array_max_len: 9,
            map_max_entries: 3,
            ..Default::default()
        };
        let mut s = sampler(&config);
        for _ in 0..50 {
            assert!(s.map_len() <= 3);
        }
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let config = SampleConfig::default();
        let mut a = ValueSampler::with_seed(&config, 7);
        let mut b = ValueSampler::with_seed(&config, 7);
        for _ in 0..20 {
            assert_eq!(a.int(), b.int());
            assert_eq!(a.word(), b.word());
            assert_eq!(a.uuid(), b.uuid());
        }
    }

    #[test]
    fn test_date_string_within_window() {
        let config = SampleConfig {
            date: DateConfig {
                past_days: 10,
                future_days: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut s = sampler(&config);
        for _ in 0..50 {
            let instant = s.instant();
            let age = Utc::now() - instant;
            assert!(age >= ChronoDuration::zero());
            assert!(age <= ChronoDuration::days(11));
        }
    }

    #[test]
    fn test_use_current_time_pins_the_instant() {
        let config = SampleConfig {
            date: DateConfig {
                use_current_time: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut s = sampler(&config);
        let age = Utc::now() - s.instant();
        assert!(age < ChronoDuration::seconds(5));
    }

    #[test]
    fn test_invalid_format_falls_back() {
        let config = SampleConfig {
            date: DateConfig {
                format: "%Q-broken".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut s = sampler(&config);
        let value = s.date_time_string(DateTimeKind::DateTime);
        // Fallback default format: "YYYY-MM-DD HH:MM:SS".
        assert_eq!(value.len(), 19);
    }

    #[test]
    fn test_expand_pattern_replaces_each_occurrence() {
        let config = SampleConfig::default();
        let mut s = sampler(&config);
        let out = s.expand_pattern("\"{{random_uuid}}-{{random_uuid}}\"");
        assert!(out.starts_with('"') && out.ends_with('"'));
        // Two distinct 36-char UUIDs joined by a dash.
        assert_eq!(out.len(), 2 + 36 + 1 + 36);
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_expand_pattern_passes_literals_through() {
        let config = SampleConfig::default();
        let mut s = sampler(&config);
        assert_eq!(s.expand_pattern("\"FIXED\""), "\"FIXED\"");
    }
}
