//! Irony veto.

use crate::resources::Resources;

/// Returns 0 when any irony indicator occurs in the text (case-insensitive), else 1.
pub fn multiplier(text: &str, resources: &Resources) -> f64 {
    let lowered = text.to_lowercase();
    let ironic = resources
        .irony_indicators()
        .iter()
        .any(|indicator| lowered.contains(indicator.as_str()));

    if ironic {
        0.0
    } else {
        1.0
    }
}
