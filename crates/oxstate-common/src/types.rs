use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single timestamped observation from a telemetry stream.
///
/// Carries a non-negative timestamp plus an open-ended set of metric
/// values. Unknown fields in the wire form are captured as metrics, so
/// producers can attach any number of channels without a schema change.
/// A metric the sample does not carry reads as NaN.
///
/// # Examples
///
/// ```
/// use oxstate_common::types::Sample;
///
/// let sample: Sample = serde_json::from_str(r#"{"ts": 12, "speed": 61.5}"#).unwrap();
/// assert_eq!(sample.ts, 12);
/// assert_eq!(sample.value("speed"), 61.5);
/// assert!(sample.value("angle").is_nan());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub ts: u64,
    #[serde(flatten)]
    pub metrics: HashMap<String, f64>,
}

impl Sample {
    pub fn new(ts: u64) -> Self {
        Self {
            ts,
            metrics: HashMap::new(),
        }
    }

    pub fn with_metric(mut self, metric: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(metric.into(), value);
        self
    }

    /// Value carried for `metric`, or NaN when absent.
    pub fn value(&self, metric: &str) -> f64 {
        self.metrics.get(metric).copied().unwrap_or(f64::NAN)
    }
}

/// Three-valued outcome of a rule condition.
///
/// `Undecided` marks a condition that can neither be proven nor
/// disproven yet: the window is not full, or a buffered value is NaN.
/// Keeping it distinct from `Violated` stops "not enough data" from
/// reading as a legitimate non-match.
///
/// # Examples
///
/// ```
/// use oxstate_common::types::TriState;
///
/// assert_eq!(TriState::Satisfied.and(TriState::Undecided), TriState::Undecided);
/// assert_eq!(TriState::Undecided.and(TriState::Violated), TriState::Violated);
/// assert_eq!(TriState::all([]), TriState::Satisfied);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    Satisfied,
    Violated,
    Undecided,
}

impl TriState {
    /// AND with dominance order `Violated` > `Undecided` > `Satisfied`.
    pub fn and(self, other: TriState) -> TriState {
        match (self, other) {
            (TriState::Violated, _) | (_, TriState::Violated) => TriState::Violated,
            (TriState::Undecided, _) | (_, TriState::Undecided) => TriState::Undecided,
            _ => TriState::Satisfied,
        }
    }

    /// Fold of [`TriState::and`]; an empty input is vacuously satisfied.
    pub fn all<I>(states: I) -> TriState
    where
        I: IntoIterator<Item = TriState>,
    {
        states.into_iter().fold(TriState::Satisfied, TriState::and)
    }

    pub fn is_satisfied(self) -> bool {
        self == TriState::Satisfied
    }
}

/// Last evaluation of one unit, keyed by the metric it watches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitResult {
    pub metric: String,
    pub result: TriState,
}

/// Diagnostic snapshot of the terminal node of a classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInfo {
    pub node_id: String,
    pub is_leaf: bool,
    /// Timestamp of the sample that produced this snapshot.
    pub timestamp: DateTime<Utc>,
    pub unit_results: Vec<UnitResult>,
}
