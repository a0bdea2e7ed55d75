use std::str::FromStr;

/// Statistic computed over a window snapshot.
///
/// Resolved once from the config name when a unit is built; unknown
/// names are configuration errors at that boundary. `none` is not a
/// variant: a unit without aggregation compares every raw element
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Mean,
    Max,
    Min,
    Rms,
    Ptp,
    RelVar,
    Std,
    Var,
    Slope,
}

impl FromStr for Aggregation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" | "avg" => Ok(Self::Mean),
            "max" | "vmax" => Ok(Self::Max),
            "min" | "vmin" => Ok(Self::Min),
            "rms" => Ok(Self::Rms),
            "ptp" => Ok(Self::Ptp),
            "rel_var" => Ok(Self::RelVar),
            "std" => Ok(Self::Std),
            "var" => Ok(Self::Var),
            "slope" => Ok(Self::Slope),
            _ => Err(format!("unknown aggregation: {s}")),
        }
    }
}

impl Aggregation {
    /// Reduces a snapshot to one statistic.
    ///
    /// An empty snapshot yields NaN for every variant except `Slope`,
    /// which is defined as exactly 0 below two points. Extremes are
    /// exact; the other statistics are reported at 2-decimal precision.
    pub fn apply(self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return match self {
                Self::Slope => 0.0,
                _ => f64::NAN,
            };
        }
        match self {
            Self::Mean => round2(mean(values)),
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Rms => {
                let n = values.len() as f64;
                round2((values.iter().map(|v| v * v).sum::<f64>() / n).sqrt())
            }
            Self::Ptp => round2(peak_to_peak(values)),
            Self::RelVar => {
                let m = mean(values);
                if m.abs() < f64::EPSILON {
                    // guards the division blow-up around a zero mean
                    0.0
                } else {
                    round2(peak_to_peak(values) / m)
                }
            }
            Self::Std => round2(population_variance(values).sqrt()),
            Self::Var => round2(population_variance(values)),
            Self::Slope => round2(slope(values)),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn peak_to_peak(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    max - min
}

fn population_variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Least-squares regression slope of value against element index.
fn slope(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denom = n * sum_x2 - sum_x * sum_x;
    if denom.abs() < f64::EPSILON {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denom
}
