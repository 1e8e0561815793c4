//! Field descriptors
//!
//! A [`FieldDescriptor`] is everything the engine knows about one field of a
//! record: its Rust and wire names, its [`Shape`], the declared rules and
//! their compiled checks, custom messages, and schema documentation.
//!
//! Descriptors are built once per record type by the code that
//! `#[derive(Describe)]` generates. Building parses both annotations, runs the
//! applicability checker and compiles typed checks; any configuration problem
//! is logged at that moment and retained on the descriptor so it can be
//! inspected later through [`prepare`](crate::prepare).

use crate::core::error::Diagnostic;
use crate::core::shape::Shape;
use crate::rules::applicability::RuleKind;
use crate::rules::compile::{self, CompiledRule};
use crate::rules::grammar::{Rule, parse_rules};
use crate::rules::messages::Messages;

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// Derived metadata for one record field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: &'static str,
    wire_name: &'static str,
    shape: Shape,
    rules: Vec<Rule>,
    checks: Vec<CompiledRule>,
    messages: Messages,
    diagnostics: Vec<Diagnostic>,
    description: Option<&'static str>,
    example: Option<&'static str>,
    default: Option<&'static str>,
}

impl FieldDescriptor {
    /// Starts a descriptor for field `name`, exposed on the wire as `wire_name`.
    #[must_use]
    pub fn builder(name: &'static str, wire_name: &'static str, shape: Shape) -> FieldDescriptorBuilder {
        FieldDescriptorBuilder {
            name,
            wire_name,
            shape,
            rules: "",
            messages: "",
            description: None,
            example: None,
            default: None,
        }
    }

    /// Rust field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name as the decoder sees it, used for schemas and parameter lookup.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        self.wire_name
    }

    /// Name used in error paths: the wire name without the `@` that marks
    /// an XML attribute.
    #[must_use]
    pub fn path_name(&self) -> &'static str {
        self.wire_name.strip_prefix('@').unwrap_or(self.wire_name)
    }

    /// Field kind.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Rules as declared, including ones that were dropped.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules that survived checking, in declaration order.
    #[must_use]
    pub fn checks(&self) -> &[CompiledRule] {
        &self.checks
    }

    /// First compiled rule of the given kind.
    #[must_use]
    pub fn check(&self, kind: RuleKind) -> Option<&CompiledRule> {
        self.checks.iter().find(|c| c.kind == kind)
    }

    /// Whether a rule of the given kind is active on this field.
    #[must_use]
    pub fn has_rule(&self, kind: RuleKind) -> bool {
        self.check(kind).is_some()
    }

    /// Whether the field carries `required`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.has_rule(RuleKind::Required)
    }

    /// Custom message overrides.
    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Message for a failing `rule`: the custom override, else `fallback`.
    #[must_use]
    pub fn message(&self, rule: &str, fallback: String) -> String {
        self.messages.resolve(rule, fallback)
    }

    /// Configuration problems found while building the descriptor.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Field documentation.
    #[must_use]
    pub fn description(&self) -> Option<&'static str> {
        self.description
    }

    /// Example value, as a literal.
    #[must_use]
    pub fn example(&self) -> Option<&'static str> {
        self.example
    }

    /// Default value, as a literal.
    #[must_use]
    pub fn default_value(&self) -> Option<&'static str> {
        self.default
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder returned by [`FieldDescriptor::builder`].
#[derive(Debug, Clone)]
#[must_use = "builder does nothing until .build() is called"]
pub struct FieldDescriptorBuilder {
    name: &'static str,
    wire_name: &'static str,
    shape: Shape,
    rules: &'static str,
    messages: &'static str,
    description: Option<&'static str>,
    example: Option<&'static str>,
    default: Option<&'static str>,
}

impl FieldDescriptorBuilder {
    /// Rule annotation, e.g. `"required,minlength=2"`.
    pub fn rules(mut self, annotation: &'static str) -> Self {
        self.rules = annotation;
        self
    }

    /// Message annotation, e.g. `"required=Tell us your name"`.
    pub fn messages(mut self, annotation: &'static str) -> Self {
        self.messages = annotation;
        self
    }

    /// Field documentation.
    pub fn description(mut self, text: &'static str) -> Self {
        self.description = Some(text);
        self
    }

    /// Example literal for schemas.
    pub fn example(mut self, literal: &'static str) -> Self {
        self.example = Some(literal);
        self
    }

    /// Default literal for schemas.
    pub fn default_value(mut self, literal: &'static str) -> Self {
        self.default = Some(literal);
        self
    }

    /// Parses and compiles the annotations of a field on `record`.
    ///
    /// Never fails: rules that cannot be honoured are dropped (or made to
    /// fail closed) and reported through `tracing` and
    /// [`FieldDescriptor::diagnostics`].
    #[must_use]
    pub fn build(self, record: &'static str) -> FieldDescriptor {
        let rules = parse_rules(self.rules);
        let mut checks = Vec::with_capacity(rules.len());
        let mut diagnostics = Vec::new();

        for rule in &rules {
            let mut notes = Vec::new();
            if let Some(compiled) = compile::compile(rule, &self.shape, &mut notes) {
                checks.push(compiled);
            }
            diagnostics.extend(notes.into_iter().map(|reason| Diagnostic {
                record,
                field: self.name,
                rule: rule.to_string(),
                reason,
            }));
        }

        for diag in &diagnostics {
            if diag.is_informational() {
                tracing::debug!(
                    record = diag.record,
                    field = diag.field,
                    rule = %diag.rule,
                    "{}",
                    diag.reason
                );
            } else {
                tracing::warn!(
                    record = diag.record,
                    field = diag.field,
                    rule = %diag.rule,
                    "ignoring rule annotation: {}",
                    diag.reason
                );
            }
        }

        FieldDescriptor {
            name: self.name,
            wire_name: self.wire_name,
            shape: self.shape,
            rules,
            checks,
            messages: Messages::parse(self.messages),
            diagnostics,
            description: self.description,
            example: self.example,
            default: self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DiagnosticReason;

    #[test]
    fn inapplicable_rule_is_dropped_others_kept() {
        let desc = FieldDescriptor::builder(
            "age",
            "age",
            Shape::Integer {
                signed: true,
                bits: 32,
            },
        )
        .rules("required,minlength=3,min=0,max=120")
        .build("Person");

        let kinds: Vec<_> = desc.checks().iter().map(|c| c.kind).collect();
        assert_eq!(kinds, [RuleKind::Required, RuleKind::Min, RuleKind::Max]);
        assert_eq!(desc.diagnostics().len(), 1);
        assert_eq!(desc.diagnostics()[0].rule, "minlength=3");
        assert!(matches!(
            desc.diagnostics()[0].reason,
            DiagnosticReason::NotApplicable { .. }
        ));
    }

    #[test]
    fn messages_and_docs_are_kept() {
        let desc = FieldDescriptor::builder("name", "Name", Shape::String)
            .rules("required")
            .messages("required=Tell us your name")
            .description("Display name")
            .example("Ada")
            .build("Person");

        assert!(desc.is_required());
        assert_eq!(desc.wire_name(), "Name");
        assert_eq!(desc.message("required", "is required".into()), "Tell us your name");
        assert_eq!(desc.message("minlength", "fallback".into()), "fallback");
        assert_eq!(desc.description(), Some("Display name"));
        assert_eq!(desc.example(), Some("Ada"));
        assert_eq!(desc.default_value(), None);
    }

    #[test]
    fn attribute_marker_is_not_part_of_the_path() {
        let desc = FieldDescriptor::builder("id", "@id", Shape::String).build("Item");
        assert_eq!(desc.wire_name(), "@id");
        assert_eq!(desc.path_name(), "id");
    }

    #[test]
    fn declared_rules_survive_even_when_dropped() {
        let desc = FieldDescriptor::builder("flag", "flag", Shape::Bool)
            .rules("bogus,required")
            .build("Toggle");
        assert_eq!(desc.rules().len(), 2);
        assert_eq!(desc.checks().len(), 1);
        assert_eq!(desc.diagnostics()[0].reason, DiagnosticReason::UnknownRule);
    }
}
