//! Forwarding of metric records to the `metrics` facade.
//!
//! # Responsibilities
//! - Turn `metric` calls into gauge updates when forwarding is enabled
//! - Map free-form tags onto metric labels
//!
//! # Design Decisions
//! - Only finite numeric values are forwarded; others are logged only
//! - `key=value` tags become labels, bare tags become `tag=<text>`
//! - Without an installed recorder every update is a no-op

use ::metrics::Label;

/// Set a gauge named `name` to `value` if it is a finite number.
///
/// Returns whether an update was issued.
pub fn record_metric(name: &str, value: &str, tags: &[&str]) -> bool {
    let Ok(v) = value.trim().parse::<f64>() else {
        return false;
    };
    if !v.is_finite() {
        return false;
    }
    ::metrics::gauge!(name.to_string(), tag_labels(tags)).set(v);
    true
}

/// Convert tags into labels, keeping call order.
pub fn tag_labels(tags: &[&str]) -> Vec<Label> {
    tags.iter()
        .map(|tag| match tag.split_once('=') {
            Some((key, value)) if !key.is_empty() => Label::new(key.to_string(), value.to_string()),
            _ => Label::new("tag", tag.to_string()),
        })
        .collect()
}
