//! Data model for parsed synthesis runtimes

use std::collections::BTreeMap;
use std::fmt;

/// File name of the Catapult log written into each design directory
pub const LOG_FILE_NAME: &str = "catapult.log";

/// A named stage of the Catapult synthesis flow
///
/// Variants are declared in flow order, so the derived `Ord` matches
/// [`Step::ALL`] and maps keyed by `Step` iterate in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Analyze,
    Compile,
    Libraries,
    Assembly,
    Loops,
    Memories,
    Cluster,
    Architect,
    Allocate,
    Schedule,
    Dpfsm,
    Instance,
    Extract,
}

impl Step {
    /// Every expected step, in flow order
    pub const ALL: [Step; 13] = [
        Step::Analyze,
        Step::Compile,
        Step::Libraries,
        Step::Assembly,
        Step::Loops,
        Step::Memories,
        Step::Cluster,
        Step::Architect,
        Step::Allocate,
        Step::Schedule,
        Step::Dpfsm,
        Step::Instance,
        Step::Extract,
    ];

    /// Lowercase name as it appears in logs and CSV headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Analyze => "analyze",
            Step::Compile => "compile",
            Step::Libraries => "libraries",
            Step::Assembly => "assembly",
            Step::Loops => "loops",
            Step::Memories => "memories",
            Step::Cluster => "cluster",
            Step::Architect => "architect",
            Step::Allocate => "allocate",
            Step::Schedule => "schedule",
            Step::Dpfsm => "dpfsm",
            Step::Instance => "instance",
            Step::Extract => "extract",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Elapsed seconds per step for one design
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepRuntimes {
    steps: BTreeMap<Step, f64>,
}

impl StepRuntimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a runtime, replacing any earlier value for the same step
    pub fn record(&mut self, step: Step, seconds: f64) {
        self.steps.insert(step, seconds);
    }

    pub fn get(&self, step: Step) -> Option<f64> {
        self.steps.get(&step).copied()
    }

    pub fn contains(&self, step: Step) -> bool {
        self.steps.contains_key(&step)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Recorded steps in flow order
    pub fn iter(&self) -> impl Iterator<Item = (Step, f64)> + '_ {
        self.steps.iter().map(|(step, secs)| (*step, *secs))
    }

    /// Sum of the recorded steps; missing steps contribute nothing
    pub fn total(&self) -> f64 {
        self.steps.values().sum()
    }
}

impl FromIterator<(Step, f64)> for StepRuntimes {
    fn from_iter<I: IntoIterator<Item = (Step, f64)>>(iter: I) -> Self {
        let mut runtimes = StepRuntimes::new();
        for (step, secs) in iter {
            runtimes.record(step, secs);
        }
        runtimes
    }
}

/// Parsed runtimes for every design, ordered by design name
pub type RuntimeTable = BTreeMap<String, StepRuntimes>;

/// A discovered log file and the design it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignLog {
    /// Name of the directory holding the log
    pub design: String,
    /// Path to the log file
    pub path: std::path::PathBuf,
}
