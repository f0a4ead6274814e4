//! Schema files: the JSON description of records and enums the CLI feeds
//! into the graph builder.
//!
//! ```json
//! {
//!   "enums": [
//!     { "qualified_name": "com.acme.Status", "constants": ["ACTIVE", "INACTIVE"] }
//!   ],
//!   "records": [
//!     {
//!       "qualified_name": "com.acme.Order",
//!       "fields": [
//!         { "name": "id", "type_name": "java.util.UUID" },
//!         { "name": "status", "type_name": "com.acme.Status" },
//!         { "name": "lines", "type_name": "java.util.List<com.acme.OrderLine>" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use typesketch_model::{EnumDecl, GraphBuilder, RecordDecl, RecordGraph};

#[derive(Debug, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub records: Vec<RecordDecl>,
    #[serde(default)]
    pub enums: Vec<EnumDecl>,
}

pub fn load_graph(path: &Path) -> Result<RecordGraph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    let schema: SchemaFile = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse schema file {}", path.display()))?;

    let mut builder = GraphBuilder::new();
    for decl in schema.enums {
        builder.add_enum(decl);
    }
    for decl in schema.records {
        builder.add_record(decl);
    }
    builder
        .build()
        .with_context(|| format!("invalid schema in {}", path.display()))
}
