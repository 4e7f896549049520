//! Human-readable debug rendering of specs.
//!
//! The lines go to whatever `tracing` subscriber is installed, at debug level.

use serde_json::Value;
use tracing::debug;

use crate::Spec;

const RULE: &str = "============================================================";

/// Renders every field of `spec`, parameters included, one line per field.
pub fn render_spec_dump(spec: &Spec) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        format!("Spec: {}", spec.id),
        RULE.to_string(),
        format!("Name: {}", spec.name),
        format!("Bindable: {}", spec.bindable),
        format!("Description: {}", spec.description),
        format!("Async: {}", spec.r#async),
    ];

    for parameter in &spec.parameters {
        lines.push("ParameterDescriptor".to_string());
        lines.push(format!("  Name: {}", parameter.name));
        lines.push(format!("  Description: {}", parameter.description));
        lines.push(format!("  Type: {}", parameter.r#type));
        lines.push(format!("  Required: {}", parameter.required));
        lines.push(format!("  Default: {}", render_default(&parameter.default)));
    }
    lines
}

fn render_default(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Writes the rendering of `spec` to the debug log.
pub fn spec_log_dump(spec: &Spec) {
    for line in render_spec_dump(spec) {
        debug!("{line}");
    }
}

/// Writes the rendering of every spec to the debug log, in order.
pub fn specs_log_dump(specs: &[Spec]) {
    for spec in specs {
        spec_log_dump(spec);
    }
}
