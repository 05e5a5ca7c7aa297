//! Extraction of per-step elapsed times from a Catapult log

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use super::schema::{Step, StepRuntimes};

/// Text Catapult prints when a synthesis step finishes
pub const COMPLETION_MARKER: &str = "Info: Completed transformation";

/// Matches "elapsed time 15.95 seconds" or "elapsed time 3 second"
static ELAPSED_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)elapsed time\s+([\d.]+)\s+seconds?").expect("elapsed time pattern is valid")
});

/// Parse a log file, returning `None` if it cannot be read
///
/// Failures are logged as warnings so that one bad log does not stop the
/// rest of a batch. A readable log without any completed steps gives an
/// empty `Some`.
pub fn parse_log(path: &Path) -> Option<StepRuntimes> {
    match try_parse_log(path) {
        Ok(runtimes) => Some(runtimes),
        Err(e) if is_not_found(&e) => {
            warn!("Could not read logfile {}", path.display());
            None
        }
        Err(e) => {
            warn!("Error reading {}: {:#}", path.display(), e);
            None
        }
    }
}

/// Parse a log file, propagating I/O errors
pub fn try_parse_log(path: &Path) -> Result<StepRuntimes> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    parse_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Scan lines from any reader; later lines for a step replace earlier ones
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<StepRuntimes> {
    let mut runtimes = StepRuntimes::new();

    for line in reader.lines() {
        let line = line?;
        if let Some((step, seconds)) = parse_line(&line) {
            debug!("{} took {}s", step, seconds);
            runtimes.record(step, seconds);
        }
    }

    Ok(runtimes)
}

/// Extract the step and runtime from a single completion line
///
/// The first expected step (in flow order) whose name appears in the line
/// claims it, even if no runtime can be read from it.
pub fn parse_line(line: &str) -> Option<(Step, f64)> {
    if !line.contains(COMPLETION_MARKER) {
        return None;
    }

    let lower = line.to_lowercase();
    let step = Step::ALL.into_iter().find(|s| lower.contains(s.as_str()))?;
    let seconds = parse_elapsed_seconds(line)?;
    Some((step, seconds))
}

/// Read the "elapsed time N seconds" value from a line
pub fn parse_elapsed_seconds(line: &str) -> Option<f64> {
    let caps = ELAPSED_TIME_REGEX.captures(line)?;
    caps.get(1)?.as_str().parse::<f64>().ok()
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}
