//! Error types for S3 endpoint resolution.
//!
//! Resolution fails in two very different ways. A [`EndpointError::Validation`]
//! is an expected outcome of the rule set: the client configuration or the
//! bucket name is invalid and the caller should be told why. Every other
//! variant means the decision graph and the runtime that walks it disagree,
//! which is a bug in the table or in this crate, never in the caller's input.
//!
//! # Usage
//!
//! ```
//! use rustack_s3_endpoint::error::EndpointError;
//!
//! let err = EndpointError::validation("Accelerate cannot be used with FIPS");
//! assert!(err.is_validation());
//! assert_eq!(err.to_string(), "Accelerate cannot be used with FIPS");
//!
//! assert!(!EndpointError::NoResult.is_validation());
//! ```

/// S3 endpoint resolution error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    // -----------------------------------------------------------------------
    // Caller-facing
    // -----------------------------------------------------------------------
    /// The rule set selected an error terminal for this input.
    #[error("{message}")]
    Validation {
        /// Message produced by the error template.
        message: String,
    },

    // -----------------------------------------------------------------------
    // Internal: table/runtime mismatch
    // -----------------------------------------------------------------------
    /// The walk ended on one of the boolean sentinels instead of a terminal.
    #[error("Rule engine did not reach an error or endpoint result")]
    NoResult,

    /// A condition or template read a derived value that was never computed
    /// on the path that reached it.
    #[error("derived value `{field}` was read before any condition computed it")]
    UnsetDerived {
        /// Name of the derived field.
        field: &'static str,
    },

    /// A template interpolated a parameter the caller did not supply.
    #[error("parameter `{name}` is required by the selected endpoint template")]
    MissingParameter {
        /// Name of the parameter.
        name: &'static str,
    },

    /// The graph referenced a condition id with no predicate behind it.
    #[error("unknown condition index {0}")]
    UnknownCondition(i32),

    /// The graph referenced a terminal index with no template behind it.
    #[error("unknown result index {0}")]
    UnknownResult(usize),

    /// The walk visited more nodes than the graph holds.
    #[error("decision graph walk exceeded {limit} steps")]
    StepLimit {
        /// Maximum number of steps allowed for the graph.
        limit: usize,
    },

    /// The decision graph itself is malformed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl EndpointError {
    /// Build a caller-facing validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error reports invalid input rather than a broken
    /// resolver/table pairing.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Structural problems found while loading a decision graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The flat node array is not a whole number of triples.
    #[error("decision graph length {0} is not a multiple of 3")]
    Length(usize),

    /// The graph holds no nodes at all.
    #[error("decision graph is empty")]
    Empty,

    /// Node 1 must be the terminal node `(-1, 1, -1)`.
    #[error("decision graph node 1 is not the terminal sentinel node")]
    MissingSentinel,

    /// The root is not a reference to a real node.
    #[error("decision graph root {0} does not reference a node")]
    InvalidRoot(i32),

    /// A child reference points outside the node array.
    #[error("node {node} references {target}, which is neither a node nor a result")]
    DanglingReference {
        /// 1-based index of the node holding the reference.
        node: usize,
        /// The offending reference.
        target: i32,
    },

    /// A node tests a negative condition id.
    #[error("node {node} has invalid condition id {condition}")]
    InvalidCondition {
        /// 1-based index of the node.
        node: usize,
        /// The offending condition id.
        condition: i32,
    },
}

/// Convenience result type for endpoint resolution.
pub type EndpointResult<T> = Result<T, EndpointError>;
