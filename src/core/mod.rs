use serde::{Deserialize, Serialize};

use crate::Float;

/// Module containing [`Bound`] and [`Bounds`]
pub mod bound;
pub use bound::{Bound, Bounds};

/// Module containing the [`Engine`] which drives [`Algorithm`](crate::traits::Algorithm)s
pub mod engine;
pub use engine::Engine;

/// Module containing the crate's error type
pub mod error;
pub use error::SwarmError;

/// Module containing [`Point`]
pub mod point;
pub use point::Point;

/// Module containing [`SwarmSummary`]
pub mod summary;
pub use summary::SwarmSummary;

/// Module containing random sampling helpers and the warning switch
pub mod utils;

/// The direction of an optimization.
///
/// Internally every algorithm in this crate maximizes a *fitness*. In [`OptimizeMode::Minimize`]
/// the fitness is the negated objective value, in [`OptimizeMode::Maximize`] it is the objective
/// value itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimizeMode {
    /// Search for the smallest objective value
    #[default]
    Minimize,
    /// Search for the largest objective value
    Maximize,
}

impl OptimizeMode {
    /// Converts a raw objective value into a fitness.
    pub fn fitness(self, value: Float) -> Float {
        match self {
            Self::Minimize => -value,
            Self::Maximize => value,
        }
    }
    /// Converts a fitness back into the objective's own scale.
    pub fn objective_value(self, fitness: Float) -> Float {
        match self {
            Self::Minimize => -fitness,
            Self::Maximize => fitness,
        }
    }
}

impl std::fmt::Display for OptimizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimize => write!(f, "minimize"),
            Self::Maximize => write!(f, "maximize"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip_sign() {
        assert_eq!(OptimizeMode::Minimize.fitness(3.0), -3.0);
        assert_eq!(OptimizeMode::Maximize.fitness(3.0), 3.0);
        assert_eq!(OptimizeMode::Minimize.objective_value(-3.0), 3.0);
        assert_eq!(OptimizeMode::default(), OptimizeMode::Minimize);
    }
}
