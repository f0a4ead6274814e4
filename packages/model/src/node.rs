use serde::{Deserialize, Serialize};

/// Unboxed scalar categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Int,
    Long,
    Short,
    Byte,
    Float,
    Double,
    Bool,
    Char,
}

impl PrimitiveKind {
    /// Whether values of this kind render as a bare number.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, PrimitiveKind::Bool | PrimitiveKind::Char)
    }
}

/// Date/time flavors. They only differ in which portion of a sampled
/// instant ends up in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateTimeKind {
    /// Full date + time (`java.util.Date`, `LocalDateTime`).
    DateTime,
    /// Date portion only (`LocalDate`).
    DateOnly,
    /// Time portion only (`LocalTime`).
    TimeOnly,
    /// Absolute instant, rendered RFC 3339.
    Instant,
}

/// The closed classification of one type occurrence.
///
/// New kinds are added here and in the two generator dispatch functions —
/// never by comparing name strings at use sites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    /// Unboxed primitive.
    Primitive(PrimitiveKind),

    /// String type.
    Str,

    /// Boxed wrapper around a primitive. The payload distinguishes
    /// boxed numerics from boxed booleans/chars; boxing matters for the
    /// interface generator's nullability heuristic.
    Boxed(PrimitiveKind),

    /// Date/time type.
    DateTime(DateTimeKind),

    /// Arbitrary-precision decimal.
    Decimal,

    /// Arbitrary-precision integer.
    BigInteger,

    /// UUID, rendered as a string.
    Uuid,

    /// Native array of an element type.
    Array(Box<TypeNode>),

    /// Sequence container (list/set/queue) of an element type.
    Collection(Box<TypeNode>),

    /// Keyed container. JSON object keys are always strings, so the key
    /// node only influences how keys are coerced.
    Map(Box<TypeNode>, Box<TypeNode>),

    /// Optional/nullable wrapper.
    Optional(Box<TypeNode>),

    /// Enumeration with its constants in declaration order.
    Enum(Vec<String>),

    /// User-defined record, referenced by qualified name into the
    /// [`RecordGraph`](crate::RecordGraph) arena.
    Record(String),

    /// Anything the classifier could not place.
    Unknown,
}

/// One classified type occurrence: a field's type, a container's element
/// type, a map key. `raw_name` keeps the declared canonical name so the
/// mapping policy can match overrides against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeNode {
    pub raw_name: String,
    pub kind: TypeKind,
}

impl TypeNode {
    pub fn new(raw_name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            raw_name: raw_name.into(),
            kind,
        }
    }

    /// A node for a name the classifier has no entry for.
    pub fn unknown(raw_name: impl Into<String>) -> Self {
        Self::new(raw_name, TypeKind::Unknown)
    }
}
