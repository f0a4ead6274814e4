//! TypeScript interface generation.
//!
//! Two passes over the record graph: a discovery pass that proves the
//! reachable graph can be traversed inside the limits, then an emission
//! pass that renders dependency declarations into a side buffer as they
//! are first needed, so every declaration appears before the one that
//! references it and nothing is declared twice.

use crate::error::{sanitize_comment, GenerateError, GenerateResult};
use crate::guard::{GuardCheck, TraversalGuard};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, warn};
use typesketch_config::{MappingPolicy, Settings};
use typesketch_model::classify::is_system_name;
use typesketch_model::{PrimitiveKind, RecordGraph, RecordRef, TypeKind, TypeNode};

/// Per-call emission state, distinct from the discovery pass's guard.
struct EmitCtx {
    guard: TraversalGuard,
    /// Records whose declarations were already rendered this call. Keyed
    /// by qualified name; separate from the in-progress cycle set.
    emitted: HashSet<String>,
    /// Dependency declarations in first-discovered order.
    dependencies: Vec<String>,
}

/// Walks a record and produces its `export interface` declaration,
/// preceded by declarations for every user-defined record it references.
pub struct InterfaceDeclarationGenerator<'a> {
    graph: &'a RecordGraph,
    policy: &'a dyn MappingPolicy,
    settings: &'a Settings,
}

impl<'a> InterfaceDeclarationGenerator<'a> {
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

    /// Generate declarations for the record named `root`. Never fails
    /// past this boundary: every failure comes back as a `// Error: ...`
    /// comment line.
    pub fn generate(&self, root: &str) -> String {
        if root.trim().is_empty() {
            warn!("interface generation invoked without a root record");
            return error_comment("Invalid input: no root record given");
        }
        let Some(record) = self.graph.get(root) else {
            warn!(root, "interface generation invoked for an unknown record");
            return error_comment(&format!("Invalid input: record '{root}' not found"));
        };

        debug!(root = %record.qualified_name, "starting interface generation");

        // Pass 1: prove the reachable graph walks to completion (or
        // bails safely) before any output exists.
        let mut discovery_guard = self.new_guard();
        let mut discovered = Vec::new();
        if let Err(err) = self.collect_dependencies(record, &mut discovery_guard, &mut discovered)
        {
            warn!(root = %record.qualified_name, %err, "dependency discovery failed");
            return error_comment(&err.to_string());
        }
        debug!(
            root = %record.qualified_name,
            dependencies = discovered.len(),
            "dependency discovery complete"
        );

        // Pass 2: fresh guard state, render dependencies then the root.
        let mut ctx = EmitCtx {
            guard: self.new_guard(),
            emitted: HashSet::new(),
            dependencies: Vec::new(),
        };
        match self.render_interface(record, &mut ctx) {
            Ok(main) => {
                if ctx.dependencies.is_empty() {
                    main
                } else {
                    let mut out = ctx.dependencies.join("\n\n");
                    out.push_str("\n\n");
                    out.push_str(&main);
                    out
                }
            }
            Err(err) => {
                warn!(root = %record.qualified_name, %err, "interface generation failed");
                error_comment(&err.to_string())
            }
        }
    }

    fn new_guard(&self) -> TraversalGuard {
        TraversalGuard::new(
            self.settings.limits.interface_max_depth,
            self.settings.limits.max_same_record_visits,
            Duration::from_millis(self.settings.limits.interface_timeout_ms),
        )
    }

    fn collect_dependencies(
        &self,
        record: &RecordRef,
        guard: &mut TraversalGuard,
        discovered: &mut Vec<String>,
    ) -> GenerateResult<()> {
        if guard.timed_out() {
            warn!(record = %record.qualified_name, "interface generation timeout exceeded");
            return Err(GenerateError::Timeout(guard.budget_ms()));
        }
        if guard.try_enter(&record.qualified_name) != GuardCheck::Entered {
            return Ok(());
        }

        for field in self.graph.all_fields(record) {
            self.collect_from_type(&field.ty, guard, discovered)?;
        }

        guard.finish(&record.qualified_name);
        Ok(())
    }

    fn collect_from_type(
        &self,
        node: &TypeNode,
        guard: &mut TraversalGuard,
        discovered: &mut Vec<String>,
    ) -> GenerateResult<()> {
        match &node.kind {
            TypeKind::Array(element)
            | TypeKind::Collection(element)
            | TypeKind::Optional(element) => self.collect_from_type(element, guard, discovered),
            TypeKind::Map(key, value) => {
                self.collect_from_type(key, guard, discovered)?;
                self.collect_from_type(value, guard, discovered)
            }
            TypeKind::Record(qualified) if !is_system_name(qualified) => {
                if let Some(record) = self.graph.get(qualified) {
                    if !discovered.contains(qualified) {
                        discovered.push(qualified.clone());
                    }
                    self.collect_dependencies(record, guard, discovered)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Render one record's declaration. Returns just the simple name when
    /// the record is on the active stack or over the limits, so callers
    /// can tell a name-only fallback from a full declaration.
    fn render_interface(&self, record: &RecordRef, ctx: &mut EmitCtx) -> GenerateResult<String> {
        if ctx.guard.timed_out() {
            warn!(record = %record.qualified_name, "interface generation timeout exceeded");
            return Err(GenerateError::Timeout(ctx.guard.budget_ms()));
        }
        match ctx.guard.try_enter(&record.qualified_name) {
            GuardCheck::CircularReference | GuardCheck::LimitReached => {
                debug!(record = %record.qualified_name, "falling back to name-only reference");
                return Ok(record.simple_name.clone());
            }
            GuardCheck::Entered => {}
        }

        let mut decl = format!("export interface {} {{\n", record.simple_name);
        for field in self.graph.all_fields(record) {
            let mapped = self.map_type(&field.ty, ctx)?;
            let marker = if self.field_is_optional(field) { "?" } else { "" };
            decl.push_str(&format!("  {}{}: {};\n", field.name, marker, mapped));
        }
        decl.push('}');

        ctx.guard.finish(&record.qualified_name);
        Ok(decl)
    }

    fn field_is_optional(&self, field: &typesketch_model::Field) -> bool {
        if field.nullable {
            return true;
        }
        match field.ty.kind {
            TypeKind::Boxed(_) => self.settings.boxed_types_nullable,
            TypeKind::Optional(_) => true,
            _ => false,
        }
    }

    fn map_type(&self, node: &TypeNode, ctx: &mut EmitCtx) -> GenerateResult<String> {
        if let Some(mapping) = self.policy.type_override(&node.raw_name) {
            return Ok(mapping.ts_type.clone());
        }
        let package_name = match &node.kind {
            TypeKind::Record(qualified) => qualified.as_str(),
            _ => node.raw_name.as_str(),
        };
        if let Some(mapping) = self.policy.package_override(package_name) {
            return Ok(mapping.ts_target_type.clone());
        }

        Ok(match &node.kind {
            TypeKind::Primitive(pk) | TypeKind::Boxed(pk) => match pk {
                PrimitiveKind::Bool => "boolean".to_string(),
                PrimitiveKind::Char => "string".to_string(),
                _ => "number".to_string(),
            },
            TypeKind::Str | TypeKind::DateTime(_) | TypeKind::Uuid => "string".to_string(),
            TypeKind::Decimal | TypeKind::BigInteger => "number".to_string(),
            TypeKind::Array(element) | TypeKind::Collection(element) => {
                format!("{}[]", self.map_type(element, ctx)?)
            }
            TypeKind::Map(key, value) => {
                let value_type = self.map_type(value, ctx)?;
                // Unparameterized maps key by string.
                let key_type = match key.kind {
                    TypeKind::Unknown => "string".to_string(),
                    _ => self.map_type(key, ctx)?,
                };
                match key_type.as_str() {
                    "string" => format!("Record<string, {value_type}>"),
                    "number" => format!("Record<number, {value_type}>"),
                    other => format!("{{ [key: {other}]: {value_type} }}"),
                }
            }
            TypeKind::Optional(inner) => format!("{} | null", self.map_type(inner, ctx)?),
            TypeKind::Enum(constants) => {
                if constants.is_empty() {
                    "string".to_string()
                } else {
                    constants
                        .iter()
                        .map(|c| format!("\"{c}\""))
                        .collect::<Vec<_>>()
                        .join(" | ")
                }
            }
            TypeKind::Record(qualified) => {
                if is_system_name(qualified) {
                    "any".to_string()
                } else {
                    match self.graph.get(qualified) {
                        Some(record) => {
                            self.ensure_dependency(record, ctx)?;
                            record.simple_name.clone()
                        }
                        None => "any".to_string(),
                    }
                }
            }
            TypeKind::Unknown => "any".to_string(),
        })
    }

    /// Render a referenced record's declaration into the side buffer if
    /// it is not already there and not currently being rendered.
    fn ensure_dependency(&self, record: &RecordRef, ctx: &mut EmitCtx) -> GenerateResult<()> {
        if ctx.guard.entering(&record.qualified_name)
            || ctx.emitted.contains(&record.qualified_name)
        {
            return Ok(());
        }
        ctx.emitted.insert(record.qualified_name.clone());

        let rendered = self.render_interface(record, ctx)?;
        if rendered != record.simple_name {
            let header = format!("export interface {} {{", record.simple_name);
            if !ctx.dependencies.iter().any(|d| d.contains(&header)) {
                ctx.dependencies.push(rendered);
            }
        }
        Ok(())
    }
}

fn error_comment(message: &str) -> String {
    format!("// Error: {}", sanitize_comment(message))
}
