use crate::node::TypeNode;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One declared field of a record. Static and final fields are carried in
/// the model but excluded from generation — they are constants, not
/// instance data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: TypeNode,
    pub is_static: bool,
    pub is_final: bool,
    /// Set when the host marked the field with a nullability annotation.
    pub nullable: bool,
}

impl Field {
    /// Whether this field participates in generated output.
    pub fn is_instance_data(&self) -> bool {
        !self.is_static && !self.is_final
    }
}

/// A named, field-bearing record type. Identity is the qualified name:
/// two occurrences with the same qualified name are the same logical
/// type, which is what the traversal guards key on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRef {
    pub qualified_name: String,
    pub simple_name: String,
    pub fields: Vec<Field>,
    /// Qualified name of the supertype, if any. A name that does not
    /// resolve in the graph (the root-object sentinel) terminates the
    /// inheritance chain and contributes no fields.
    pub super_record: Option<String>,
}

/// Arena of records looked up by qualified name. Cycles between records
/// exist only as name references, never as owning pointers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordGraph {
    records: HashMap<String, RecordRef>,
}

impl RecordGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, record: RecordRef) {
        self.records.insert(record.qualified_name.clone(), record);
    }

    pub fn get(&self, qualified_name: &str) -> Option<&RecordRef> {
        self.records.get(qualified_name)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.records.contains_key(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All instance fields of `record`, own fields first, then the
    /// supertype chain. Unresolvable supertype names stop the walk, and a
    /// cyclic super chain is cut rather than looped.
    pub fn all_fields<'a>(&'a self, record: &'a RecordRef) -> Vec<&'a Field> {
        let mut fields = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = Some(record);

        while let Some(rec) = current {
            if !seen.insert(rec.qualified_name.as_str()) {
                break;
            }
            fields.extend(rec.fields.iter().filter(|f| f.is_instance_data()));
            current = rec
                .super_record
                .as_deref()
                .and_then(|name| self.records.get(name));
        }

        fields
    }
}
