use crate::error::ConfigError;
use std::str::FromStr;

/// Bound semantics of a numeric interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    /// `[a, b]`
    Closed,
    /// `(a, b)`
    Open,
    /// `[a, b)`
    LeftClosed,
    /// `(a, b]`
    RightClosed,
}

impl FromStr for IntervalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "closed" | "[]" => Ok(Self::Closed),
            "open" | "()" => Ok(Self::Open),
            "left_closed" | "[)" => Ok(Self::LeftClosed),
            "right_closed" | "(]" => Ok(Self::RightClosed),
            _ => Err(format!("unknown interval kind: {s}")),
        }
    }
}

/// An interval with resolved bound semantics.
///
/// `lower > upper` is rejected at construction so a misconfigured rule
/// can never read as a legitimate runtime non-match.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    kind: IntervalKind,
    lower: f64,
    upper: f64,
}

impl Interval {
    pub fn new(kind: IntervalKind, lower: f64, upper: f64) -> Result<Self, ConfigError> {
        if lower > upper {
            return Err(ConfigError::InvalidBounds { lower, upper });
        }
        Ok(Self { kind, lower, upper })
    }

    pub fn contains(&self, value: f64) -> bool {
        match self.kind {
            IntervalKind::Closed => self.lower <= value && value <= self.upper,
            IntervalKind::Open => self.lower < value && value < self.upper,
            IntervalKind::LeftClosed => self.lower <= value && value < self.upper,
            IntervalKind::RightClosed => self.lower < value && value <= self.upper,
        }
    }
}
