//! # Typesketch Type Model
//!
//! The abstract representation of record types consumed by the generators:
//! a closed [`TypeKind`] vocabulary, named [`RecordRef`]s held in a
//! [`RecordGraph`] arena, and a [`GraphBuilder`] that classifies raw
//! declared type names into kinds exactly once, at construction time.
//!
//! The graph may be cyclic (a record whose field references itself, or
//! mutually referential records). The model makes no attempt to be
//! acyclic — records point at each other by qualified name, and cycle
//! safety is entirely the traversal layer's job.
//!
//! ## Example
//!
//! ```rust
//! use typesketch_model::{FieldDecl, GraphBuilder, RecordDecl};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_record(RecordDecl::new("com.acme.User").with_fields(vec![
//!     FieldDecl::new("name", "java.lang.String"),
//!     FieldDecl::new("scores", "java.util.List<java.lang.Integer>"),
//! ]));
//! let graph = builder.build().unwrap();
//! let user = graph.get("com.acme.User").unwrap();
//! assert_eq!(graph.all_fields(user).len(), 2);
//! ```

pub mod builder;
pub mod classify;
pub mod node;
pub mod record;

pub use builder::{EnumDecl, FieldDecl, GraphBuilder, RecordDecl, SchemaError};
pub use node::{DateTimeKind, PrimitiveKind, TypeKind, TypeNode};
pub use record::{Field, RecordGraph, RecordRef};
