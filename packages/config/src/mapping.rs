//! User-configurable type overrides, consulted by both generators before
//! default kind handling.

use serde::{Deserialize, Serialize};

/// Override for one named type: a literal pattern spliced into JSON
/// output (may contain `{{random_*}}` placeholders) and a replacement
/// TypeScript type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeMapping {
    /// Source type name, fully or partially qualified.
    pub source_type: String,
    /// Replacement JSON literal. Quotes included when the value should be
    /// a JSON string.
    pub json_value_pattern: String,
    /// Replacement TypeScript type name.
    pub ts_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl TypeMapping {
    pub fn new(
        source_type: impl Into<String>,
        json_value_pattern: impl Into<String>,
        ts_type: impl Into<String>,
    ) -> Self {
        Self {
            source_type: source_type.into(),
            json_value_pattern: json_value_pattern.into(),
            ts_type: ts_type.into(),
            description: None,
            enabled: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this mapping applies to `type_name`. Matches the exact
    /// name, or a dotted-suffix in either direction so that a mapping for
    /// `java.util.Date` also covers a field declared as bare `Date`.
    pub fn matches(&self, type_name: &str) -> bool {
        if !self.enabled || self.source_type.is_empty() || type_name.is_empty() {
            return false;
        }
        if self.source_type == type_name {
            return true;
        }
        (type_name.contains('.') && type_name.ends_with(&format!(".{}", self.source_type)))
            || (self.source_type.contains('.')
                && self.source_type.ends_with(&format!(".{type_name}")))
    }
}

/// Blanket override for every type inside a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageMapping {
    /// Package pattern; a trailing `*` matches the prefix.
    pub package_pattern: String,
    /// Target type used on the JSON side (`string`, `number`, ...).
    pub json_target_type: String,
    /// Target type used on the TypeScript side.
    pub ts_target_type: String,
    /// Whether a wildcard pattern also covers subpackages.
    #[serde(default = "default_enabled")]
    pub recursive: bool,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl PackageMapping {
    pub fn new(
        package_pattern: impl Into<String>,
        json_target_type: impl Into<String>,
        ts_target_type: impl Into<String>,
    ) -> Self {
        Self {
            package_pattern: package_pattern.into(),
            json_target_type: json_target_type.into(),
            ts_target_type: ts_target_type.into(),
            recursive: true,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether this mapping applies to the class named `class_name`.
    pub fn matches(&self, class_name: &str) -> bool {
        if !self.enabled || self.package_pattern.is_empty() || class_name.is_empty() {
            return false;
        }

        if let Some(base) = self.package_pattern.strip_suffix('*') {
            let Some(remaining) = class_name.strip_prefix(base) else {
                return false;
            };
            // Recursive wildcards cover subpackages; plain wildcards only
            // the immediate package.
            return self.recursive || !remaining.contains('.');
        }

        match class_name.rsplit_once('.') {
            Some((package, _)) => package == self.package_pattern,
            None => false,
        }
    }
}

/// Override lookup interface the generators consume. First enabled match
/// wins; type overrides are consulted before package overrides.
pub trait MappingPolicy {
    fn type_override(&self, type_name: &str) -> Option<&TypeMapping>;
    fn package_override(&self, class_name: &str) -> Option<&PackageMapping>;
}

/// Ordered override tables. `Default` seeds the stock date/decimal/uuid
/// entries; use [`MappingTable::empty`] for a clean slate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingTable {
    pub type_mappings: Vec<TypeMapping>,
    pub package_mappings: Vec<PackageMapping>,
}

impl MappingTable {
    pub fn empty() -> Self {
        Self {
            type_mappings: Vec::new(),
            package_mappings: Vec::new(),
        }
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self {
            type_mappings: vec![
                TypeMapping::new("java.util.Date", "\"{{random_date}}\"", "string")
                    .with_description("Standard Java Date"),
                TypeMapping::new("java.time.LocalDateTime", "\"{{random_datetime}}\"", "string")
                    .with_description("Java 8 LocalDateTime"),
                TypeMapping::new("java.time.LocalDate", "\"{{random_date_only}}\"", "string")
                    .with_description("Java 8 LocalDate"),
                TypeMapping::new("java.time.LocalTime", "\"{{random_time_only}}\"", "string")
                    .with_description("Java 8 LocalTime"),
                TypeMapping::new("java.math.BigDecimal", "{{random_decimal}}", "number")
                    .with_description("BigDecimal for precision"),
                TypeMapping::new("java.math.BigInteger", "{{random_integer}}", "number")
                    .with_description("BigInteger for large numbers"),
                TypeMapping::new("java.util.UUID", "\"{{random_uuid}}\"", "string")
                    .with_description("Universally Unique Identifier"),
            ],
            package_mappings: vec![
                PackageMapping::new("com.example.dto.*", "string", "string").disabled(),
                PackageMapping::new("org.springframework.data.domain.*", "any", "any").disabled(),
            ],
        }
    }
}

impl MappingPolicy for MappingTable {
    fn type_override(&self, type_name: &str) -> Option<&TypeMapping> {
        self.type_mappings.iter().find(|m| m.matches(type_name))
    }

    fn package_override(&self, class_name: &str) -> Option<&PackageMapping> {
        self.package_mappings.iter().find(|m| m.matches(class_name))
    }
}

/// Policy with no overrides at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl MappingPolicy for NoOverrides {
    fn type_override(&self, _type_name: &str) -> Option<&TypeMapping> {
        None
    }

    fn package_override(&self, _class_name: &str) -> Option<&PackageMapping> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mapping_exact_and_suffix_match() {
        let mapping = TypeMapping::new("java.util.Date", "\"x\"", "string");
        assert!(mapping.matches("java.util.Date"));
        assert!(mapping.matches("Date"));
        assert!(!mapping.matches("java.sql.Date2"));
        assert!(!mapping.matches("LocalDate"));
    }

    #[test]
    fn test_type_mapping_short_source_matches_qualified_name() {
        let mapping = TypeMapping::new("Date", "\"x\"", "string");
        assert!(mapping.matches("java.util.Date"));
        assert!(mapping.matches("Date"));
    }

    #[test]
    fn test_disabled_type_mapping_never_matches() {
        let mut mapping = TypeMapping::new("java.util.Date", "\"x\"", "string");
        mapping.enabled = false;
        assert!(!mapping.matches("java.util.Date"));
    }

    #[test]
    fn test_package_wildcard_recursive() {
        let mapping = PackageMapping::new("com.example.*", "string", "string");
        assert!(mapping.matches("com.example.Foo"));
        assert!(mapping.matches("com.example.deep.Bar"));
        assert!(!mapping.matches("org.example.Foo"));
    }

    #[test]
    fn test_package_wildcard_non_recursive() {
        let mut mapping = PackageMapping::new("com.example.*", "string", "string");
        mapping.recursive = false;
        assert!(mapping.matches("com.example.Foo"));
        assert!(!mapping.matches("com.example.deep.Bar"));
    }

    #[test]
    fn test_package_exact_match() {
        let mapping = PackageMapping::new("com.example", "string", "string");
        assert!(mapping.matches("com.example.Foo"));
        assert!(!mapping.matches("com.example.deep.Bar"));
        assert!(!mapping.matches("Foo"));
    }

    #[test]
    fn test_first_enabled_match_wins() {
        let table = MappingTable {
            type_mappings: vec![
                {
                    let mut m = TypeMapping::new("java.util.Date", "\"first\"", "First");
                    m.enabled = false;
                    m
                },
                TypeMapping::new("java.util.Date", "\"second\"", "Second"),
                TypeMapping::new("java.util.Date", "\"third\"", "Third"),
            ],
            package_mappings: Vec::new(),
        };
        let hit = table.type_override("java.util.Date").unwrap();
        assert_eq!(hit.ts_type, "Second");
    }

    #[test]
    fn test_default_table_covers_dates_and_uuid() {
        let table = MappingTable::default();
        assert!(table.type_override("java.util.Date").is_some());
        assert!(table.type_override("java.util.UUID").is_some());
        // Shipped package examples are disabled out of the box.
        assert!(table.package_override("com.example.dto.Foo").is_none());
    }
}
