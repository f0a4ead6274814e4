//! Sample-JSON generation: walk a record's type graph and emit one
//! self-contained JSON value populated with plausible random data.

use crate::error::{sanitize_json_message, GenerateError, GenerateResult};
use crate::format::pretty_print;
use crate::guard::{GuardCheck, TraversalGuard};
use crate::sampler::ValueSampler;
use std::time::Duration;
use tracing::{debug, warn};
use typesketch_config::{MappingPolicy, Settings};
use typesketch_model::{PrimitiveKind, RecordGraph, RecordRef, TypeKind, TypeNode};

/// Everything one `generate()` call mutates, threaded through the
/// recursion by reference. Nothing here outlives the call.
struct RenderCtx<'a> {
    guard: TraversalGuard,
    sampler: ValueSampler<'a>,
}

/// Walks a record and produces a sample JSON document. The generator
/// itself is immutable shared state and can serve calls from multiple
/// threads; all per-call state lives in a [`RenderCtx`].
pub struct JsonSampleGenerator<'a> {
    graph: &'a RecordGraph,
    policy: &'a dyn MappingPolicy,
    settings: &'a Settings,
}

impl<'a> JsonSampleGenerator<'a> {
    pub fn new(
        graph: &'a RecordGraph,
        policy: &'a dyn MappingPolicy,
        settings: &'a Settings,
    ) -> Self {
        Self {
            graph,
            policy,
            settings,
        }
    }

    /// Generate a sample document for the record named `root`. Never
    /// fails past this boundary: every failure comes back as an
    /// `{"error": ...}` payload.
    pub fn generate(&self, root: &str) -> String {
        self.run(root, ValueSampler::new(&self.settings.sample))
    }

    /// Like [`generate`](Self::generate) with a fixed RNG seed, for
    /// reproducible output.
    pub fn generate_seeded(&self, root: &str, seed: u64) -> String {
        self.run(root, ValueSampler::with_seed(&self.settings.sample, seed))
    }

    fn run(&self, root: &str, sampler: ValueSampler<'a>) -> String {
        if root.trim().is_empty() {
            warn!("json generation invoked without a root record");
            return error_payload("Invalid input: no root record given");
        }
        let Some(record) = self.graph.get(root) else {
            warn!(root, "json generation invoked for an unknown record");
            return error_payload(&format!("Invalid input: record '{root}' not found"));
        };

        debug!(root = %record.qualified_name, "starting json generation");
        let mut ctx = RenderCtx {
            guard: TraversalGuard::new(
                self.settings.limits.json_max_depth,
                self.settings.limits.max_same_record_visits,
                Duration::from_millis(self.settings.limits.json_timeout_ms),
            ),
            sampler,
        };

        match self.render_record(record, &mut ctx) {
            Ok(body) => pretty_print(&body),
            Err(err) => {
                warn!(root = %record.qualified_name, %err, "json generation failed");
                error_payload(&err.to_string())
            }
        }
    }

    fn render_record(&self, record: &RecordRef, ctx: &mut RenderCtx<'a>) -> GenerateResult<String> {
        if ctx.guard.timed_out() {
            warn!(record = %record.qualified_name, "json generation timeout exceeded");
            return Err(GenerateError::Timeout(ctx.guard.budget_ms()));
        }

        match ctx.guard.try_enter(&record.qualified_name) {
            GuardCheck::CircularReference => {
                debug!(record = %record.qualified_name, "circular reference, emitting null");
                return Ok("null".to_string());
            }
            GuardCheck::LimitReached => {
                debug!(record = %record.qualified_name, "visit/depth limit, emitting null");
                return Ok("null".to_string());
            }
            GuardCheck::Entered => {}
        }

        let mut out = String::from("{");
        for (i, field) in self.graph.all_fields(record).iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push('"');
            out.push_str(&field.name);
            out.push_str("\": ");
            out.push_str(&self.render_value(&field.ty, ctx)?);
        }
        out.push('}');

        ctx.guard.finish(&record.qualified_name);
        Ok(out)
    }

    fn render_value(&self, node: &TypeNode, ctx: &mut RenderCtx<'a>) -> GenerateResult<String> {
        if let Some(mapping) = self.policy.type_override(&node.raw_name) {
            return Ok(ctx.sampler.expand_pattern(&mapping.json_value_pattern));
        }
        let package_name = match &node.kind {
            TypeKind::Record(qualified) => qualified.as_str(),
            _ => node.raw_name.as_str(),
        };
        if let Some(mapping) = self.policy.package_override(package_name) {
            return Ok(self.render_blanket(&mapping.json_target_type, ctx));
        }

        Ok(match &node.kind {
            TypeKind::Primitive(pk) | TypeKind::Boxed(pk) => self.render_primitive(*pk, ctx),
            TypeKind::Str => quoted(&ctx.sampler.word()),
            TypeKind::DateTime(kind) => quoted(&ctx.sampler.date_time_string(*kind)),
            TypeKind::Decimal => format!("{:.2}", ctx.sampler.decimal()),
            TypeKind::BigInteger => ctx.sampler.long().to_string(),
            TypeKind::Uuid => quoted(&ctx.sampler.uuid().to_string()),
            TypeKind::Array(element) | TypeKind::Collection(element) => {
                let mut out = String::from("[");
                for i in 0..ctx.sampler.array_len() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&self.render_value(element, ctx)?);
                }
                out.push(']');
                out
            }
            TypeKind::Map(key, value) => {
                let mut out = String::from("{");
                for i in 0..ctx.sampler.map_len() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&quoted(&self.render_map_key(key, ctx)));
                    out.push_str(": ");
                    out.push_str(&self.render_value(value, ctx)?);
                }
                out.push('}');
                out
            }
            TypeKind::Optional(inner) => {
                if ctx.sampler.optional_is_none() {
                    "null".to_string()
                } else {
                    self.render_value(inner, ctx)?
                }
            }
            TypeKind::Enum(constants) => match ctx.sampler.choice(constants) {
                Some(constant) => quoted(constant),
                None => quoted(&ctx.sampler.word()),
            },
            TypeKind::Record(qualified) => match self.graph.get(qualified) {
                Some(record) => self.render_record(record, ctx)?,
                None => "null".to_string(),
            },
            TypeKind::Unknown => "null".to_string(),
        })
    }

    fn render_primitive(&self, pk: PrimitiveKind, ctx: &mut RenderCtx<'a>) -> String {
        match pk {
            PrimitiveKind::Int | PrimitiveKind::Short | PrimitiveKind::Byte => {
                ctx.sampler.int().to_string()
            }
            PrimitiveKind::Long => ctx.sampler.long().to_string(),
            PrimitiveKind::Float | PrimitiveKind::Double => {
                format!("{:.2}", ctx.sampler.decimal())
            }
            PrimitiveKind::Bool => ctx.sampler.boolean().to_string(),
            PrimitiveKind::Char => quoted(&ctx.sampler.letter().to_string()),
        }
    }

    /// JSON object keys are always strings; the declared key kind only
    /// picks the flavor of string.
    fn render_map_key(&self, key: &TypeNode, ctx: &mut RenderCtx<'a>) -> String {
        match &key.kind {
            TypeKind::Str => ctx.sampler.word(),
            TypeKind::Primitive(pk) | TypeKind::Boxed(pk) if pk.is_numeric() => {
                ctx.sampler.int().to_string()
            }
            _ => format!("key{}", ctx.sampler.int()),
        }
    }

    /// Value for a package-level blanket override.
    fn render_blanket(&self, target: &str, ctx: &mut RenderCtx<'a>) -> String {
        match target {
            "string" => quoted(&ctx.sampler.word()),
            "number" => ctx.sampler.int().to_string(),
            "boolean" => ctx.sampler.boolean().to_string(),
            _ => "null".to_string(),
        }
    }
}

fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

fn error_payload(message: &str) -> String {
    format!("{{\n  \"error\": \"{}\"\n}}", sanitize_json_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use typesketch_config::NoOverrides;
    use typesketch_model::{FieldDecl, GraphBuilder, RecordDecl};

    fn settings() -> Settings {
        Settings::new()
    }

    fn graph_of(records: Vec<RecordDecl>) -> RecordGraph {
        let mut builder = GraphBuilder::new();
        for record in records {
            builder.add_record(record);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_scalar_fields_render_with_expected_json_types() {
        let graph = graph_of(vec![RecordDecl::new("a.Scalars").with_fields(vec![
            FieldDecl::new("count", "int"),
            FieldDecl::new("name", "java.lang.String"),
            FieldDecl::new("active", "boolean"),
        ])]);
        let settings = settings();
        let gen = JsonSampleGenerator::new(&graph, &NoOverrides, &settings);
        let out = gen.generate_seeded("a.Scalars", 1);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["count"].is_i64());
        assert!(value["name"].is_string());
        assert!(value["active"].is_boolean());
    }

    #[test]
    fn test_error_payload_is_valid_json() {
        let graph = RecordGraph::new();
        let settings = settings();
        let gen = JsonSampleGenerator::new(&graph, &NoOverrides, &settings);
        let out = gen.generate("a.Missing");

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["error"].as_str().unwrap().contains("a.Missing"));
    }

    #[test]
    fn test_self_reference_terminates_with_null() {
        let graph = graph_of(vec![RecordDecl::new("a.Node").with_fields(vec![
            FieldDecl::new("value", "int"),
            FieldDecl::new("next", "a.Node"),
        ])]);
        let settings = settings();
        let gen = JsonSampleGenerator::new(&graph, &NoOverrides, &settings);
        let out = gen.generate_seeded("a.Node", 3);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["next"].is_null());
    }

    #[test]
    fn test_timeout_budget_of_zero_reports_timeout() {
        let graph = graph_of(vec![
            RecordDecl::new("a.Rec").with_fields(vec![FieldDecl::new("x", "int")])
        ]);
        let mut settings = settings();
        settings.limits.json_timeout_ms = 0;
        let gen = JsonSampleGenerator::new(&graph, &NoOverrides, &settings);
        let out = gen.generate("a.Rec");

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["error"].as_str().unwrap().contains("timeout"));
    }
}
