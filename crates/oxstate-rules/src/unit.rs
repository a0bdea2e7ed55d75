use crate::aggregate::Aggregation;
use crate::compare::{Interval, IntervalKind};
use crate::config::{UnitConfig, WindowMode};
use crate::error::ConfigError;
use crate::window::Window;
use oxstate_common::types::TriState;

/// One leaf condition: a metric fed through a sliding window, optionally
/// aggregated, and compared against an interval.
///
/// Structure is fixed at construction; only the window contents change
/// at runtime.
#[derive(Debug)]
pub struct Unit {
    metric: String,
    window: Window,
    aggregation: Option<Aggregation>,
    interval: Interval,
}

impl Unit {
    /// Resolves names, validates bounds, and sizes the window.
    ///
    /// Time-mode capacity is `max(1, pps*sec + 1)`; the extra point lets
    /// the window span both the first and last sample of the nominal
    /// duration at exact-rate sampling. Count mode uses the configured
    /// size directly.
    pub fn from_config(cfg: &UnitConfig, pps: u32) -> Result<Self, ConfigError> {
        let capacity = match cfg.window.mode {
            WindowMode::Time => {
                if cfg.window.sec == 0 {
                    return Err(ConfigError::InvalidWindow(format!(
                        "metric '{}': time window spans 0 seconds",
                        cfg.metric
                    )));
                }
                (pps as usize * cfg.window.sec as usize + 1).max(1)
            }
            WindowMode::Count => {
                if cfg.window.size == 0 {
                    return Err(ConfigError::InvalidWindow(format!(
                        "metric '{}': count window holds 0 points",
                        cfg.metric
                    )));
                }
                cfg.window.size as usize
            }
        };

        let aggregation = match cfg.aggregation.as_str() {
            "none" => None,
            name => Some(
                name.parse::<Aggregation>()
                    .map_err(|_| ConfigError::UnknownAggregation(name.to_string()))?,
            ),
        };

        let kind = cfg
            .comparator
            .kind
            .parse::<IntervalKind>()
            .map_err(|_| ConfigError::UnknownIntervalKind(cfg.comparator.kind.clone()))?;
        let (lower, upper) = cfg.comparator.bounds;
        let interval = Interval::new(kind, lower, upper)?;

        Ok(Self {
            metric: cfg.metric.clone(),
            window: Window::new(capacity),
            aggregation,
            interval,
        })
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn push(&mut self, value: f64) {
        self.window.push(value);
    }

    /// Tri-state check of the condition against the current window.
    ///
    /// Undecided until the window is full, and while any buffered value
    /// is NaN — one missing sample poisons the whole window's
    /// decidability. Without aggregation, every element must sit inside
    /// the interval for the condition to hold.
    pub fn evaluate(&self) -> TriState {
        if !self.window.is_ready() || self.window.iter().any(f64::is_nan) {
            return TriState::Undecided;
        }

        let values = self.window.values();
        let ok = match self.aggregation {
            Some(agg) => self.interval.contains(agg.apply(&values)),
            None => values.iter().all(|&v| self.interval.contains(v)),
        };
        if ok {
            TriState::Satisfied
        } else {
            TriState::Violated
        }
    }

    /// Clears the window; the next evaluation is undecided again.
    pub fn reset(&mut self) {
        self.window.reset();
    }
}
