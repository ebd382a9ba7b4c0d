use std::convert::Infallible;

use thiserror::Error;

use crate::Float;

/// Errors which can occur while configuring or running a swarm.
///
/// Every configuration problem is reported before any particle is constructed or any objective
/// evaluation takes place. The generic `E` is the error type of the user's
/// [`CostFunction`](crate::traits::CostFunction).
#[derive(Error, Debug)]
pub enum SwarmError<E = Infallible> {
    /// The starting point has no parameters.
    #[error("the starting point must contain at least one parameter")]
    ZeroDimension,

    /// The number of bounds does not match the number of parameters.
    #[error("expected {expected} bounds (one per parameter), found {found}")]
    DimensionMismatch {
        /// Number of parameters in the starting point.
        expected: usize,
        /// Number of bounds given.
        found: usize,
    },

    /// The number of parameter names does not match the number of parameters.
    #[error("expected {expected} parameter names, found {found}")]
    ParameterNameMismatch {
        /// Number of parameters in the starting point.
        expected: usize,
        /// Number of names given.
        found: usize,
    },

    /// A bound has `lower > upper` or a `NaN` endpoint.
    #[error("invalid bound for parameter #{index}: ({lower}, {upper})")]
    InvalidBound {
        /// Index of the offending parameter.
        index: usize,
        /// Lower endpoint.
        lower: Float,
        /// Upper endpoint.
        upper: Float,
    },

    /// The swarm was configured with zero particles.
    #[error("the swarm must contain at least one particle")]
    EmptySwarm,

    /// A velocity weight is negative or not finite.
    #[error("the {name} weight must be finite and non-negative, found {value}")]
    InvalidWeight {
        /// Name of the weight (`"inertia"`, `"cognitive"` or `"social"`).
        name: &'static str,
        /// The rejected value.
        value: Float,
    },

    /// The objective returned `NaN` or an infinite value and the run was configured to reject
    /// such values.
    #[error("objective returned a non-finite value ({value}) at {x:?}")]
    NonFiniteObjective {
        /// The value returned by the objective.
        value: Float,
        /// The position at which the objective was evaluated.
        x: Vec<Float>,
    },

    /// The user's objective returned an error.
    #[error("objective evaluation failed: {0}")]
    Objective(E),
}
