//! Decision graph storage and traversal.
//!
//! The rule set is compiled into a binary decision diagram stored as a flat
//! array of `i32` triples `(condition, high, low)`. Nodes are numbered from 1;
//! node 1 is the terminal node `(-1, 1, -1)` and is never visited.
//!
//! A reference `r` names what to visit next:
//!
//! - `1` / `-1`: the TRUE / FALSE sentinels. Reaching one means the table
//!   is broken, since every well-formed path ends on a result.
//! - `r >= RESULT_OFFSET + 1`: result `r - RESULT_OFFSET - 1`.
//! - otherwise node `|r|`; a negative reference is a complemented edge, which
//!   swaps the node's high and low children.
//!
//! ```text
//!   ref ─► node |ref| ── condition(id) ─► outcome
//!                          │
//!     child = base + 2 - (complemented XOR outcome)
//!                          │
//!          high (base+1) ◄─┴─► low (base+2)
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{EndpointError, EndpointResult, GraphError};

/// Reference to the first real node.
pub const ROOT: i32 = 2;

/// References above this value are results.
pub const RESULT_OFFSET: i32 = 100_000_000;

/// TRUE sentinel reference.
pub const TRUE_REF: i32 = 1;

/// FALSE sentinel reference.
pub const FALSE_REF: i32 = -1;

/// The terminal node every table starts with.
const SENTINEL_NODE: [i32; 3] = [-1, TRUE_REF, FALSE_REF];

/// Externally generated decision graph, as produced by a rule compiler.
///
/// # Examples
///
/// ```
/// use rustack_s3_endpoint::graph::{DecisionGraph, GraphDefinition};
///
/// let json = r#"{ "root": 2, "nodes": [-1, 1, -1, 0, 100000001, 100000002] }"#;
/// let definition: GraphDefinition = serde_json::from_str(json).unwrap();
/// let graph = DecisionGraph::from_definition(definition).unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.walk(|_| Ok(false)).unwrap(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDefinition {
    /// Root reference, normally [`ROOT`].
    pub root: i32,
    /// Flat `(condition, high, low)` triples, sentinel node first.
    pub nodes: Vec<i32>,
}

/// A validated decision graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionGraph {
    nodes: Cow<'static, [i32]>,
    root: i32,
}

impl DecisionGraph {
    /// Wrap a compiled-in table without validating it.
    ///
    /// Only for tables generated alongside this crate; their validity is
    /// checked by tests rather than at startup.
    #[must_use]
    pub const fn from_static(nodes: &'static [i32], root: i32) -> Self {
        Self {
            nodes: Cow::Borrowed(nodes),
            root,
        }
    }

    /// Build a graph from an externally supplied definition.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if the node array is malformed or any
    /// reference points outside it.
    pub fn from_definition(definition: GraphDefinition) -> Result<Self, GraphError> {
        let graph = Self {
            nodes: Cow::Owned(definition.nodes),
            root: definition.root,
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Number of nodes, including the terminal node.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() / 3
    }

    /// Root reference.
    #[must_use]
    pub fn root(&self) -> i32 {
        self.root
    }

    /// Check the table shape and that every reference lands on a node,
    /// a sentinel or a result.
    pub fn validate(&self) -> Result<(), GraphError> {
        self.check(None)
    }

    /// Like [`validate`](Self::validate), and additionally require condition
    /// ids below `condition_count` and result indices below `result_count`.
    pub fn validate_bounds(
        &self,
        condition_count: usize,
        result_count: usize,
    ) -> Result<(), GraphError> {
        self.check(Some((condition_count, result_count)))
    }

    fn check(&self, bounds: Option<(usize, usize)>) -> Result<(), GraphError> {
        if self.nodes.len() % 3 != 0 {
            return Err(GraphError::Length(self.nodes.len()));
        }
        if self.nodes.is_empty() {
            return Err(GraphError::Empty);
        }
        if self.nodes[..3] != SENTINEL_NODE {
            return Err(GraphError::MissingSentinel);
        }

        let node_count = self.node_count();
        let result_limit = bounds.map(|(_, results)| results);
        let root_ok = !matches!(self.root, TRUE_REF | FALSE_REF)
            && reference_in_range(self.root, node_count, result_limit);
        if !root_ok {
            return Err(GraphError::InvalidRoot(self.root));
        }

        for (i, triple) in self.nodes.chunks_exact(3).enumerate().skip(1) {
            let node = i + 1;
            let condition = triple[0];
            let in_bounds = match (usize::try_from(condition), bounds) {
                (Err(_), _) => false,
                (Ok(id), Some((conditions, _))) => id < conditions,
                (Ok(_), None) => true,
            };
            if !in_bounds {
                return Err(GraphError::InvalidCondition { node, condition });
            }
            for &target in &triple[1..] {
                if !reference_in_range(target, node_count, result_limit) {
                    return Err(GraphError::DanglingReference { node, target });
                }
            }
        }
        Ok(())
    }

    /// Walk from the root, asking `condition` for each visited node's
    /// outcome, and return the index of the result reached.
    ///
    /// # Errors
    ///
    /// - [`EndpointError::NoResult`] if the walk ends on a sentinel.
    /// - [`EndpointError::StepLimit`] if it visits more nodes than the graph
    ///   holds, which only a cyclic table can do.
    /// - Any error returned by `condition`.
    pub fn walk<F>(&self, mut condition: F) -> EndpointResult<usize>
    where
        F: FnMut(i32) -> EndpointResult<bool>,
    {
        let limit = self.node_count();
        let mut reference = self.root;
        let mut steps = 0;

        while is_node_ref(reference) {
            if steps == limit {
                return Err(EndpointError::StepLimit { limit });
            }
            steps += 1;

            let node = reference.unsigned_abs() as usize;
            let complemented = reference < 0;
            let base = (node - 1) * 3;
            let triple = self.nodes.get(base..base + 3).ok_or(GraphError::DanglingReference {
                node,
                target: reference,
            })?;

            let outcome = condition(triple[0])?;
            let next = triple[2 - usize::from(complemented ^ outcome)];
            trace!(node, condition = triple[0], outcome, complemented, next, "visited node");
            reference = next;
        }

        if reference > RESULT_OFFSET {
            let result = (reference - RESULT_OFFSET - 1) as usize;
            debug!(result, steps, "decision graph reached result");
            Ok(result)
        } else {
            Err(EndpointError::NoResult)
        }
    }
}

fn is_node_ref(reference: i32) -> bool {
    (reference > TRUE_REF || reference < FALSE_REF) && reference < RESULT_OFFSET
}

fn reference_in_range(reference: i32, node_count: usize, result_limit: Option<usize>) -> bool {
    match reference {
        TRUE_REF | FALSE_REF => true,
        r if r > RESULT_OFFSET => {
            let index = (r - RESULT_OFFSET - 1) as usize;
            result_limit.is_none_or(|limit| index < limit)
        }
        r if is_node_ref(r) => (r.unsigned_abs() as usize) <= node_count,
        _ => false,
    }
}
