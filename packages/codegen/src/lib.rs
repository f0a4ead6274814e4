//! # Typesketch Code Generation
//!
//! Two generators share one traversal shape over the
//! [`typesketch_model`] record graph:
//!
//! - [`JsonSampleGenerator`] walks a record and emits a sample JSON
//!   document populated with plausible random values.
//! - [`InterfaceDeclarationGenerator`] walks the same graph twice
//!   (dependency discovery, then emission) and produces TypeScript
//!   `export interface` declarations, dependencies first.
//!
//! Both resolve their root by qualified name, consult a
//! [`MappingPolicy`](typesketch_config::MappingPolicy) before default
//! kind handling, keep all mutable traversal state in per-call contexts,
//! and always return a printable string — failures come back as an
//! `{"error": ...}` object or a `// Error: ...` comment, never as a
//! panic or an unhandled error.
//!
//! ## Example
//!
//! ```rust
//! use typesketch_codegen::{Generator, InterfaceDeclarationGenerator};
//! use typesketch_config::{NoOverrides, Settings};
//! use typesketch_model::{FieldDecl, GraphBuilder, RecordDecl};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_record(RecordDecl::new("com.acme.User").with_fields(vec![
//!     FieldDecl::new("name", "java.lang.String"),
//! ]));
//! let graph = builder.build().unwrap();
//! let settings = Settings::new();
//!
//! let ts = InterfaceDeclarationGenerator::new(&graph, &NoOverrides, &settings);
//! assert!(ts.generate("com.acme.User").contains("export interface User {"));
//! ```

pub mod error;
pub mod format;
pub mod guard;
pub mod json;
pub mod sampler;
pub mod typescript;

pub use error::{GenerateError, GenerateResult};
pub use json::JsonSampleGenerator;
pub use sampler::ValueSampler;
pub use typescript::InterfaceDeclarationGenerator;

/// Common contract of the two generators: resolve a root record by
/// qualified name, always come back with a printable string.
pub trait Generator {
    fn generate(&self, root: &str) -> String;
}

impl Generator for JsonSampleGenerator<'_> {
    fn generate(&self, root: &str) -> String {
        JsonSampleGenerator::generate(self, root)
    }
}

impl Generator for InterfaceDeclarationGenerator<'_> {
    fn generate(&self, root: &str) -> String {
        InterfaceDeclarationGenerator::generate(self, root)
    }
}
