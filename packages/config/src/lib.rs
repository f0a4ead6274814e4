//! # Typesketch Configuration
//!
//! Plain-data configuration consumed by the generators: value-sampling
//! ranges ([`SampleConfig`]), user override tables
//! ([`TypeMapping`]/[`PackageMapping`] behind the [`MappingPolicy`]
//! trait), traversal [`Limits`], and the aggregate [`Settings`] with
//! validation. Persistence of these values is a caller concern; the
//! types only derive serde so hosts can store them however they like.

pub mod date;
pub mod mapping;
pub mod sample;
pub mod settings;

pub use date::DateConfig;
pub use mapping::{MappingPolicy, MappingTable, NoOverrides, PackageMapping, TypeMapping};
pub use sample::SampleConfig;
pub use settings::{ConfigError, Limits, Settings};
