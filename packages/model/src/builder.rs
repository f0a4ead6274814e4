//! Construction of a [`RecordGraph`] from declared records and enums.
//!
//! This is the seam where the host's type-resolution output enters the
//! core: declarations carry raw type-name strings, and `build()` runs the
//! classifier over every field exactly once.

use crate::classify::{classify, simple_name, KnownTypes};
use crate::record::{Field, RecordGraph, RecordRef};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Duplicate record declaration: {0}")]
    DuplicateRecord(String),

    #[error("Duplicate enum declaration: {0}")]
    DuplicateEnum(String),

    #[error("Record declaration has an empty name")]
    EmptyRecordName,

    #[error("Record '{record}' declares a field with an empty name")]
    EmptyFieldName { record: String },
}

/// One declared field, with its type still a raw name string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub nullable: bool,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_static: false,
            is_final: false,
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn static_field(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn final_field(mut self) -> Self {
        self.is_final = true;
        self
    }
}

/// One declared record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDecl {
    pub qualified_name: String,
    #[serde(default)]
    pub super_record: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl RecordDecl {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            super_record: None,
            fields: Vec::new(),
        }
    }

    pub fn with_super(mut self, super_record: impl Into<String>) -> Self {
        self.super_record = Some(super_record.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDecl>) -> Self {
        self.fields = fields;
        self
    }
}

/// One declared enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub qualified_name: String,
    #[serde(default)]
    pub constants: Vec<String>,
}

impl EnumDecl {
    pub fn new(
        qualified_name: impl Into<String>,
        constants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }
}

/// Collects declarations, then classifies every field type against the
/// full set of declared names.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    records: Vec<RecordDecl>,
    enums: Vec<EnumDecl>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, decl: RecordDecl) -> &mut Self {
        self.records.push(decl);
        self
    }

    pub fn add_enum(&mut self, decl: EnumDecl) -> &mut Self {
        self.enums.push(decl);
        self
    }

    pub fn build(self) -> Result<RecordGraph, SchemaError> {
        let mut known = KnownTypes::default();
        let mut seen = HashSet::new();

        for decl in &self.enums {
            if !seen.insert(decl.qualified_name.clone()) {
                return Err(SchemaError::DuplicateEnum(decl.qualified_name.clone()));
            }
            known.add_enum(&decl.qualified_name, decl.constants.clone());
        }
        for decl in &self.records {
            if decl.qualified_name.trim().is_empty() {
                return Err(SchemaError::EmptyRecordName);
            }
            if !seen.insert(decl.qualified_name.clone()) {
                return Err(SchemaError::DuplicateRecord(decl.qualified_name.clone()));
            }
            known.add_record(&decl.qualified_name);
        }

        let mut graph = RecordGraph::new();
        for decl in self.records {
            let mut fields = Vec::with_capacity(decl.fields.len());
            for field in decl.fields {
                if field.name.trim().is_empty() {
                    return Err(SchemaError::EmptyFieldName {
                        record: decl.qualified_name.clone(),
                    });
                }
                fields.push(Field {
                    ty: classify(&field.type_name, &known),
                    name: field.name,
                    is_static: field.is_static,
                    is_final: field.is_final,
                    nullable: field.nullable,
                });
            }
            graph.insert(RecordRef {
                simple_name: simple_name(&decl.qualified_name).to_string(),
                qualified_name: decl.qualified_name,
                fields,
                super_record: decl.super_record,
            });
        }
        Ok(graph)
    }
}
