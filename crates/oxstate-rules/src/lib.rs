//! Rule-tree classification engine for streaming telemetry.
//!
//! A [`RuleTree`] is built once from a validated rule definition and
//! then fed timestamped samples. Every push refreshes the sliding
//! windows of the whole hierarchy and re-derives the active
//! root-to-node path: at each level the first satisfied child extends
//! the path, with unconditional catch-all branches always tried last.
//! Conditions evaluate to a tri-state, so "not enough data yet" stays
//! distinct from a real non-match.

pub mod aggregate;
pub mod compare;
pub mod config;
pub mod error;
pub mod node;
pub mod tree;
pub mod unit;
pub mod window;


pub use error::{ConfigError, Result};
pub use tree::RuleTree;
