//! Plain-text report
//!
//! One traversal serves both verbosity levels: summary stops after the entry names,
//! detailed continues into every field of each entry.

use serde::Serialize;

use super::Verbosity;
use crate::model::{MatchCondition, Rule, WebhookConfiguration, WebhookEntry};

/// First line of every report
pub const HEADER: &str = "Validating Webhook Configurations:";

/// Marker printed for an optional field the server did not set
pub const NOT_SET: &str = "<not set>";

const INDENT: &str = "  ";

/// Render `configs` in the order given.
pub fn render(configs: &[WebhookConfiguration], verbosity: Verbosity) -> String {
    let mut out = TextWriter::default();
    out.line(0, HEADER);
    for config in configs {
        out.line(0, &format!("- Name: {}", config.name));
        for entry in &config.webhooks {
            out.line(1, &format!("Webhook: {}", entry.name));
            if verbosity == Verbosity::Detailed {
                write_entry_details(&mut out, entry);
            }
        }
    }
    out.finish()
}

fn write_entry_details(out: &mut TextWriter, entry: &WebhookEntry) {
    out.field(2, "Client Config", &compact_json(&entry.client_config));
    out.field(
        2,
        "Admission Review Versions",
        &format_list(&entry.admission_review_versions),
    );
    write_rules(out, &entry.rules);
    out.field(2, "Failure Policy", &optional(entry.failure_policy.as_ref()));
    out.field(2, "Match Policy", &optional(entry.match_policy.as_ref()));
    out.field(
        2,
        "Namespace Selector",
        &optional_json(entry.namespace_selector.as_ref()),
    );
    out.field(
        2,
        "Object Selector",
        &optional_json(entry.object_selector.as_ref()),
    );
    out.field(2, "Side Effects", &optional(entry.side_effects.as_ref()));
    out.field(2, "Timeout Seconds", &optional(entry.timeout_seconds.as_ref()));
    write_match_conditions(out, entry.match_conditions.as_deref());
}

fn write_rules(out: &mut TextWriter, rules: &[Rule]) {
    if rules.is_empty() {
        out.field(2, "Rules", "[]");
        return;
    }
    out.line(2, "Rules:");
    for rule in rules {
        out.line(3, &format!("- Operations: {}", format_list(&rule.operations)));
        out.field(4, "APIGroups", &format_list(&rule.api_groups));
        out.field(4, "APIVersions", &format_list(&rule.api_versions));
        out.field(4, "Resources", &format_list(&rule.resources));
        out.field(4, "Scope", &optional(rule.scope.as_ref()));
    }
}

fn write_match_conditions(out: &mut TextWriter, conditions: Option<&[MatchCondition]>) {
    match conditions {
        None => out.field(2, "Match Conditions", NOT_SET),
        Some([]) => out.field(2, "Match Conditions", "[]"),
        Some(conditions) => {
            out.line(2, "Match Conditions:");
            for cond in conditions {
                out.line(3, &format!("- {}: {}", cond.name, cond.expression));
            }
        }
    }
}

/// Format a multi-valued field as `[a, b]`.
///
/// The empty string is quoted so the core API group stays visible.
pub fn format_list<T: ToString>(items: &[T]) -> String {
    let parts: Vec<String> = items
        .iter()
        .map(|item| {
            let s = item.to_string();
            if s.is_empty() { "\"\"".to_string() } else { s }
        })
        .collect();
    format!("[{}]", parts.join(", "))
}

fn optional<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| NOT_SET.to_string(), ToString::to_string)
}

fn optional_json<T: Serialize>(value: Option<&T>) -> String {
    value.map_or_else(|| NOT_SET.to_string(), compact_json)
}

fn compact_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unrenderable: {}>", e))
}

#[derive(Default)]
struct TextWriter {
    buf: String,
}

impl TextWriter {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn field(&mut self, depth: usize, label: &str, value: &str) {
        self.line(depth, &format!("{}: {}", label, value));
    }

    fn finish(self) -> String {
        self.buf
    }
}
