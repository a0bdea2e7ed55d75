use crate::config::NodeConfig;
use crate::error::{ConfigError, Result};
use crate::node::Node;
use chrono::DateTime;
use oxstate_common::types::{NodeInfo, Sample};
use std::collections::BTreeSet;

/// Root orchestrator: owns the hierarchy, drives ingestion, and derives
/// the active root-to-node path after every sample.
#[derive(Debug)]
pub struct RuleTree {
    root: Node,
    required_metrics: Vec<String>,
    active_path: Vec<String>,
    reached_leaf: bool,
    last_node_info: Option<NodeInfo>,
}

impl RuleTree {
    /// Builds the hierarchy from an already-validated definition.
    ///
    /// All-or-nothing: every problem in the definition is collected and
    /// the whole set reported at once. After building, children are
    /// reordered so unconditional branches sort last; that order
    /// persists for the lifetime of the tree.
    pub fn from_config(cfg: &NodeConfig, pps: u32) -> Result<Self> {
        let mut errors = Vec::new();
        let mut root = Node::from_config(cfg, pps, &mut errors);
        if errors.len() == 1 {
            return Err(errors.remove(0));
        }
        if !errors.is_empty() {
            return Err(ConfigError::Rejected(errors));
        }

        root.sort_children();

        let mut metrics = BTreeSet::new();
        root.collect_metrics(&mut metrics);

        Ok(Self {
            root,
            required_metrics: metrics.into_iter().collect(),
            active_path: Vec::new(),
            reached_leaf: false,
            last_node_info: None,
        })
    }

    /// Parses a JSON rule definition and builds the tree.
    pub fn from_json(raw: &str, pps: u32) -> Result<Self> {
        let cfg: NodeConfig = serde_json::from_str(raw)?;
        Self::from_config(&cfg, pps)
    }

    /// Ingests one sample: refreshes every node in the hierarchy, then
    /// re-derives the active path.
    pub fn push(&mut self, sample: &Sample) {
        self.root.push(sample);
        self.update_active_path(sample);
    }

    /// Clears all window contents, the active path, and diagnostics.
    /// Structure and child ordering are untouched.
    pub fn reset(&mut self) {
        self.root.reset();
        self.active_path.clear();
        self.reached_leaf = false;
        self.last_node_info = None;
    }

    /// Every metric name referenced anywhere in the hierarchy, sorted.
    pub fn required_metrics(&self) -> &[String] {
        &self.required_metrics
    }

    /// Node ids from the root to the deepest currently satisfied branch.
    pub fn active_path(&self) -> &[String] {
        &self.active_path
    }

    /// True when the last classification terminated on a leaf.
    pub fn reached_leaf(&self) -> bool {
        self.reached_leaf
    }

    /// Snapshot of the terminal node of the last classification.
    pub fn last_node_info(&self) -> Option<&NodeInfo> {
        self.last_node_info.as_ref()
    }

    /// Top-down walk: at each level the first child, in the persisted
    /// priority order, whose state is satisfied extends the path. The
    /// walk stops on a leaf or when no child is satisfied.
    fn update_active_path(&mut self, sample: &Sample) {
        let mut path = vec![self.root.id().to_string()];
        let mut current = &self.root;
        while let Some(next) = current
            .children()
            .iter()
            .find(|child| child.is_active().is_satisfied())
        {
            path.push(next.id().to_string());
            current = next;
        }

        let reached_leaf = current.is_leaf();
        let info = NodeInfo {
            node_id: current.id().to_string(),
            is_leaf: reached_leaf,
            timestamp: DateTime::from_timestamp(sample.ts as i64, 0).unwrap_or_default(),
            unit_results: current.units_results(),
        };

        if path != self.active_path {
            tracing::debug!(path = ?path, reached_leaf, "active path changed");
        }

        self.active_path = path;
        self.reached_leaf = reached_leaf;
        self.last_node_info = Some(info);
    }
}
