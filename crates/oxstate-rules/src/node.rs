use crate::config::{NodeConfig, UnitsConfig};
use crate::error::ConfigError;
use crate::unit::Unit;
use oxstate_common::types::{Sample, TriState, UnitResult};
use std::collections::BTreeSet;

/// A rule-tree node: AND-combined units plus mutually exclusive child
/// branches.
///
/// Ownership is strictly tree-shaped — a node owns its units and its
/// children, and nothing else points at them.
#[derive(Debug)]
pub struct Node {
    id: String,
    unconditional: bool,
    units: Vec<Unit>,
    children: Vec<Node>,
    /// Per-unit tri-states, refreshed on every push.
    results: Vec<TriState>,
}

impl Node {
    /// Recursively builds the node, collecting every configuration
    /// problem into `errors` instead of stopping at the first one.
    pub fn from_config(cfg: &NodeConfig, pps: u32, errors: &mut Vec<ConfigError>) -> Node {
        let (unconditional, units) = match &cfg.units {
            UnitsConfig::Always(_) => (true, Vec::new()),
            UnitsConfig::Conditions(unit_cfgs) => {
                let mut units = Vec::with_capacity(unit_cfgs.len());
                for unit_cfg in unit_cfgs {
                    match Unit::from_config(unit_cfg, pps) {
                        Ok(unit) => units.push(unit),
                        Err(e) => errors.push(ConfigError::Node {
                            node_id: cfg.id.clone(),
                            source: Box::new(e),
                        }),
                    }
                }
                (false, units)
            }
        };

        let children = cfg
            .children
            .iter()
            .map(|child| Node::from_config(child, pps, errors))
            .collect();

        let results = units.iter().map(Unit::evaluate).collect();

        Node {
            id: cfg.id.clone(),
            unconditional,
            units,
            children,
            results,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_unconditional(&self) -> bool {
        self.unconditional
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Feeds the sample to every owned unit (NaN for absent metrics),
    /// refreshes the cached results, then cascades into every child —
    /// the whole hierarchy stays inspectable, active branch or not.
    pub fn push(&mut self, sample: &Sample) {
        if !self.unconditional {
            for unit in &mut self.units {
                unit.push(sample.value(unit.metric()));
            }
            self.results = self.units.iter().map(Unit::evaluate).collect();
        }
        for child in &mut self.children {
            child.push(sample);
        }
    }

    /// Tri-state AND over the cached unit results. Unconditional nodes
    /// are always satisfied; a node with zero units vacuously so.
    pub fn is_active(&self) -> TriState {
        if self.unconditional {
            return TriState::Satisfied;
        }
        TriState::all(self.results.iter().copied())
    }

    /// Last-computed per-unit results, keyed by metric name.
    pub fn units_results(&self) -> Vec<UnitResult> {
        self.units
            .iter()
            .zip(&self.results)
            .map(|(unit, &result)| UnitResult {
                metric: unit.metric().to_string(),
                result,
            })
            .collect()
    }

    /// Recursively resets units and children; cached results fall back
    /// to the not-ready state.
    pub fn reset(&mut self) {
        for unit in &mut self.units {
            unit.reset();
        }
        self.results = self.units.iter().map(Unit::evaluate).collect();
        for child in &mut self.children {
            child.reset();
        }
    }

    /// Stable reorder placing unconditional children last, so specific
    /// branches are always tried before catch-alls.
    pub(crate) fn sort_children(&mut self) {
        self.children.sort_by_key(Node::is_unconditional);
        for child in &mut self.children {
            child.sort_children();
        }
    }

    pub(crate) fn collect_metrics(&self, metrics: &mut BTreeSet<String>) {
        for unit in &self.units {
            metrics.insert(unit.metric().to_string());
        }
        for child in &self.children {
            child.collect_metrics(metrics);
        }
    }
}
