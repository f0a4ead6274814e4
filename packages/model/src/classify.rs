//! One-time classification of raw declared type names into [`TypeKind`]s.
//!
//! The generators dispatch on kinds exclusively; the name tables below are
//! the only place in the system that compares type-name strings.

use crate::node::{DateTimeKind, PrimitiveKind, TypeKind, TypeNode};
use std::collections::{HashMap, HashSet};

/// User-declared type names visible to the classifier: records by
/// qualified name, enums with their constants. Built by the
/// [`GraphBuilder`](crate::GraphBuilder) from the declarations it was
/// given.
#[derive(Debug, Default)]
pub struct KnownTypes {
    records: HashSet<String>,
    record_by_simple: HashMap<String, String>,
    enums: HashMap<String, Vec<String>>,
    enum_by_simple: HashMap<String, String>,
}

impl KnownTypes {
    pub fn add_record(&mut self, qualified_name: &str) {
        let simple = simple_name(qualified_name);
        self.records.insert(qualified_name.to_string());
        self.record_by_simple
            .insert(simple.to_string(), qualified_name.to_string());
    }

    pub fn add_enum(&mut self, qualified_name: &str, constants: Vec<String>) {
        let simple = simple_name(qualified_name);
        self.enum_by_simple
            .insert(simple.to_string(), qualified_name.to_string());
        self.enums.insert(qualified_name.to_string(), constants);
    }

    fn resolve_record(&self, name: &str) -> Option<&str> {
        if let Some(stored) = self.records.get(name) {
            return Some(stored.as_str());
        }
        self.record_by_simple.get(name).map(String::as_str)
    }

    fn resolve_enum(&self, name: &str) -> Option<&Vec<String>> {
        self.enums
            .get(name)
            .or_else(|| self.enum_by_simple.get(name).and_then(|q| self.enums.get(q)))
    }
}

/// Classify one raw declared type string into a [`TypeNode`] tree.
///
/// Accepts canonical Java-style names with generic arguments and array
/// suffixes (`java.util.Map<java.lang.String, com.acme.Foo[]>`). Names
/// nothing matches classify as [`TypeKind::Unknown`].
pub fn classify(raw: &str, known: &KnownTypes) -> TypeNode {
    let raw = raw.trim();
    if raw.is_empty() {
        return TypeNode::unknown(raw);
    }

    // Array suffixes wrap whatever the rest classifies as.
    if let Some(component) = raw.strip_suffix("[]") {
        let element = classify(component, known);
        return TypeNode::new(raw, TypeKind::Array(Box::new(element)));
    }

    let (base, args) = split_generics(raw);

    if let Some(pk) = primitive_kind(base) {
        return TypeNode::new(raw, TypeKind::Primitive(pk));
    }
    if is_string(base) {
        return TypeNode::new(raw, TypeKind::Str);
    }
    if let Some(pk) = boxed_kind(base) {
        return TypeNode::new(raw, TypeKind::Boxed(pk));
    }
    if let Some(dk) = date_time_kind(base) {
        return TypeNode::new(raw, TypeKind::DateTime(dk));
    }
    if matches!(base, "java.math.BigDecimal" | "BigDecimal") {
        return TypeNode::new(raw, TypeKind::Decimal);
    }
    if matches!(base, "java.math.BigInteger" | "BigInteger") {
        return TypeNode::new(raw, TypeKind::BigInteger);
    }
    if matches!(base, "java.util.UUID" | "UUID") {
        return TypeNode::new(raw, TypeKind::Uuid);
    }

    if is_collection(base) {
        let element = args
            .first()
            .map(|a| classify(a, known))
            .unwrap_or_else(|| TypeNode::unknown(""));
        return TypeNode::new(raw, TypeKind::Collection(Box::new(element)));
    }
    if is_map(base) {
        let key = args
            .first()
            .map(|a| classify(a, known))
            .unwrap_or_else(|| TypeNode::unknown(""));
        let value = args
            .get(1)
            .map(|a| classify(a, known))
            .unwrap_or_else(|| TypeNode::unknown(""));
        return TypeNode::new(raw, TypeKind::Map(Box::new(key), Box::new(value)));
    }
    if matches!(base, "java.util.Optional" | "Optional") {
        let inner = args
            .first()
            .map(|a| classify(a, known))
            .unwrap_or_else(|| TypeNode::unknown(""));
        return TypeNode::new(raw, TypeKind::Optional(Box::new(inner)));
    }

    if let Some(constants) = known.resolve_enum(base) {
        return TypeNode::new(raw, TypeKind::Enum(constants.clone()));
    }
    if let Some(qualified) = known.resolve_record(base) {
        return TypeNode::new(raw, TypeKind::Record(qualified.to_string()));
    }

    TypeNode::unknown(raw)
}

/// Library/system namespaces that never become dependency interfaces.
pub fn is_system_name(name: &str) -> bool {
    name.starts_with("java.")
        || name.starts_with("javax.")
        || name.starts_with("sun.")
        || name.starts_with("com.sun.")
        || name.starts_with("org.springframework.")
        || name.starts_with("com.fasterxml.jackson.")
}

pub(crate) fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Split `Base<A, B<C, D>>` into the base name and its top-level type
/// arguments.
fn split_generics(raw: &str) -> (&str, Vec<&str>) {
    let Some(open) = raw.find('<') else {
        return (raw, Vec::new());
    };
    let Some(close) = raw.rfind('>') else {
        return (raw, Vec::new());
    };
    let base = raw[..open].trim();
    let inner = &raw[open + 1..close];

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = inner[start..].trim();
    if !last.is_empty() {
        args.push(last);
    }
    (base, args)
}

fn primitive_kind(base: &str) -> Option<PrimitiveKind> {
    Some(match base {
        "int" => PrimitiveKind::Int,
        "long" => PrimitiveKind::Long,
        "short" => PrimitiveKind::Short,
        "byte" => PrimitiveKind::Byte,
        "float" => PrimitiveKind::Float,
        "double" => PrimitiveKind::Double,
        "boolean" => PrimitiveKind::Bool,
        "char" => PrimitiveKind::Char,
        _ => return None,
    })
}

fn boxed_kind(base: &str) -> Option<PrimitiveKind> {
    Some(match base {
        "java.lang.Integer" | "Integer" => PrimitiveKind::Int,
        "java.lang.Long" | "Long" => PrimitiveKind::Long,
        "java.lang.Short" | "Short" => PrimitiveKind::Short,
        "java.lang.Byte" | "Byte" => PrimitiveKind::Byte,
        "java.lang.Float" | "Float" => PrimitiveKind::Float,
        "java.lang.Double" | "Double" => PrimitiveKind::Double,
        "java.lang.Boolean" | "Boolean" => PrimitiveKind::Bool,
        "java.lang.Character" | "Character" => PrimitiveKind::Char,
        _ => return None,
    })
}

fn is_string(base: &str) -> bool {
    matches!(base, "java.lang.String" | "String")
}

fn date_time_kind(base: &str) -> Option<DateTimeKind> {
    Some(match base {
        "java.util.Date" | "Date" => DateTimeKind::DateTime,
        "java.time.LocalDateTime" | "LocalDateTime" => DateTimeKind::DateTime,
        "java.time.LocalDate" | "LocalDate" => DateTimeKind::DateOnly,
        "java.time.LocalTime" | "LocalTime" => DateTimeKind::TimeOnly,
        "java.time.Instant" | "Instant" => DateTimeKind::Instant,
        _ => return None,
    })
}

/// Strip the `java.util.` prefix, or pass bare names through. Dotted
/// names outside `java.util` never match the container tables.
fn util_name(base: &str) -> Option<&str> {
    match base.strip_prefix("java.util.") {
        Some(bare) => Some(bare),
        None if !base.contains('.') => Some(base),
        None => None,
    }
}

fn is_collection(base: &str) -> bool {
    util_name(base).is_some_and(|bare| {
        matches!(
            bare,
            "List"
                | "Set"
                | "Collection"
                | "ArrayList"
                | "LinkedList"
                | "Vector"
                | "HashSet"
                | "LinkedHashSet"
                | "TreeSet"
                | "Queue"
                | "Deque"
                | "ArrayDeque"
        )
    })
}

fn is_map(base: &str) -> bool {
    util_name(base).is_some_and(|bare| {
        matches!(
            bare,
            "Map" | "HashMap"
                | "LinkedHashMap"
                | "TreeMap"
                | "ConcurrentHashMap"
                | "WeakHashMap"
                | "IdentityHashMap"
                | "EnumMap"
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> KnownTypes {
        let mut k = KnownTypes::default();
        k.add_record("com.acme.Address");
        k.add_enum(
            "com.acme.Status",
            vec!["ACTIVE".to_string(), "INACTIVE".to_string()],
        );
        k
    }

    #[test]
    fn test_classify_primitives_and_wrappers() {
        let k = known();
        assert_eq!(
            classify("int", &k).kind,
            TypeKind::Primitive(PrimitiveKind::Int)
        );
        assert_eq!(
            classify("java.lang.Integer", &k).kind,
            TypeKind::Boxed(PrimitiveKind::Int)
        );
        assert_eq!(
            classify("Boolean", &k).kind,
            TypeKind::Boxed(PrimitiveKind::Bool)
        );
        assert_eq!(classify("java.lang.String", &k).kind, TypeKind::Str);
    }

    #[test]
    fn test_classify_dates_and_ids() {
        let k = known();
        assert_eq!(
            classify("java.time.LocalDate", &k).kind,
            TypeKind::DateTime(DateTimeKind::DateOnly)
        );
        assert_eq!(classify("java.util.UUID", &k).kind, TypeKind::Uuid);
        assert_eq!(classify("java.math.BigDecimal", &k).kind, TypeKind::Decimal);
        assert_eq!(
            classify("java.math.BigInteger", &k).kind,
            TypeKind::BigInteger
        );
    }

    #[test]
    fn test_classify_containers() {
        let k = known();
        let list = classify("java.util.List<java.lang.String>", &k);
        match list.kind {
            TypeKind::Collection(el) => assert_eq!(el.kind, TypeKind::Str),
            other => panic!("expected collection, got {other:?}"),
        }

        let map = classify("java.util.Map<java.lang.Integer, com.acme.Address>", &k);
        match map.kind {
            TypeKind::Map(key, value) => {
                assert_eq!(key.kind, TypeKind::Boxed(PrimitiveKind::Int));
                assert_eq!(
                    value.kind,
                    TypeKind::Record("com.acme.Address".to_string())
                );
            }
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_nested_generics() {
        let k = known();
        let node = classify(
            "java.util.Map<java.lang.String, java.util.List<com.acme.Address>>",
            &k,
        );
        let TypeKind::Map(_, value) = node.kind else {
            panic!("expected map");
        };
        let TypeKind::Collection(element) = value.kind else {
            panic!("expected nested collection");
        };
        assert_eq!(
            element.kind,
            TypeKind::Record("com.acme.Address".to_string())
        );
    }

    #[test]
    fn test_classify_arrays() {
        let k = known();
        let node = classify("int[][]", &k);
        let TypeKind::Array(inner) = node.kind else {
            panic!("expected array");
        };
        let TypeKind::Array(component) = inner.kind else {
            panic!("expected nested array");
        };
        assert_eq!(component.kind, TypeKind::Primitive(PrimitiveKind::Int));
    }

    #[test]
    fn test_classify_optional() {
        let k = known();
        let node = classify("java.util.Optional<java.lang.String>", &k);
        let TypeKind::Optional(inner) = node.kind else {
            panic!("expected optional");
        };
        assert_eq!(inner.kind, TypeKind::Str);
    }

    #[test]
    fn test_classify_user_types_by_qualified_and_simple_name() {
        let k = known();
        assert_eq!(
            classify("com.acme.Address", &k).kind,
            TypeKind::Record("com.acme.Address".to_string())
        );
        assert_eq!(
            classify("Address", &k).kind,
            TypeKind::Record("com.acme.Address".to_string())
        );
        match classify("Status", &k).kind {
            TypeKind::Enum(constants) => assert_eq!(constants, ["ACTIVE", "INACTIVE"]),
            other => panic!("expected enum, got {other:?}"),
        }
    }

    #[test]
    fn test_unmatched_names_are_unknown() {
        let k = known();
        assert_eq!(classify("com.elsewhere.Widget", &k).kind, TypeKind::Unknown);
        assert_eq!(classify("", &k).kind, TypeKind::Unknown);
    }

    #[test]
    fn test_collection_prefix_is_not_fooled_by_other_packages() {
        let k = known();
        assert_eq!(classify("com.acme.List<int>", &k).kind, TypeKind::Unknown);
    }

    #[test]
    fn test_system_name_prefixes() {
        assert!(is_system_name("java.util.Date"));
        assert!(is_system_name("org.springframework.data.domain.Page"));
        assert!(!is_system_name("com.acme.Order"));
    }
}
