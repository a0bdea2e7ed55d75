/// Errors detected while building a rule tree from its definition.
///
/// Construction is all-or-nothing: every problem found across the whole
/// definition is collected and reported together before the tree is
/// refused. Runtime data issues (missing metrics, NaN values) are never
/// errors; they surface as the undecided tri-state instead.
///
/// # Examples
///
/// ```rust
/// use oxstate_rules::error::ConfigError;
///
/// let err = ConfigError::UnknownAggregation("median".to_string());
/// assert!(err.to_string().contains("median"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The aggregation name is not in the supported set.
    #[error("rules: unknown aggregation '{0}'")]
    UnknownAggregation(String),

    /// The interval kind token is not in the supported set.
    #[error("rules: unknown interval kind '{0}'")]
    UnknownIntervalKind(String),

    /// Interval bounds are inverted.
    #[error("rules: invalid bounds: lower {lower} > upper {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    /// Window sizing resolves to zero points.
    #[error("rules: invalid window: {0}")]
    InvalidWindow(String),

    /// A unit-level error tagged with the id of the node that owns it.
    #[error("node '{node_id}': {source}")]
    Node {
        node_id: String,
        source: Box<ConfigError>,
    },

    /// Aggregate report of every problem found in one build pass.
    #[error("invalid rule definition ({} problem(s)): {}", .0.len(), list(.0))]
    Rejected(Vec<ConfigError>),

    /// The rule definition text could not be parsed.
    #[error("rules: malformed definition: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn list(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience `Result` alias for tree construction.
pub type Result<T> = std::result::Result<T, ConfigError>;
