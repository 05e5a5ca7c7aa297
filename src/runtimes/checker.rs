//! Completeness check of a design's parsed steps

use tracing::warn;

use super::schema::{Step, StepRuntimes};

/// Expected steps that have no runtime, in flow order
pub fn missing_steps(runtimes: &StepRuntimes) -> Vec<Step> {
    Step::ALL
        .into_iter()
        .filter(|step| !runtimes.contains(*step))
        .collect()
}

/// Warn about any steps missing from a design's log
///
/// Returns the missing steps. The design itself is left untouched.
pub fn check_completeness(design: &str, runtimes: &StepRuntimes) -> Vec<Step> {
    let missing = missing_steps(runtimes);
    if !missing.is_empty() {
        warn!(
            "Design '{}' is missing steps: {}",
            design,
            join_steps(&missing)
        );
    }
    missing
}

fn join_steps(steps: &[Step]) -> String {
    steps
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
