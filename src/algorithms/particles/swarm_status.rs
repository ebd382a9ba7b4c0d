use crate::{
    algorithms::particles::Swarm,
    core::{OptimizeMode, Point},
    traits::Status,
    DVector, Float,
};
use serde::{Deserialize, Serialize};

/// A status for particle swarm optimization.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SwarmStatus {
    /// The global best position found by all particles, with its fitness. This is unset until the
    /// first evaluation.
    pub gbest: Point<DVector<Float>>,
    /// A message containing information about the condition of the swarm
    pub message: String,
    /// The swarm
    pub swarm: Swarm,
    /// The number of completed iterations
    pub iteration: usize,
    /// The number of objective evaluations
    pub n_f_evals: usize,
    /// The number of evaluations which produced a non-finite fitness
    pub n_non_finite: usize,
}

impl SwarmStatus {
    /// Get a copy of the global best position and its fitness.
    pub fn get_best(&self) -> Point<DVector<Float>> {
        self.gbest.clone()
    }
    /// The objective value at the global best in the caller's own sense, or [`None`] if nothing
    /// has been evaluated yet.
    pub fn best_objective_value(&self, mode: OptimizeMode) -> Option<Float> {
        self.gbest.fx.map(|fitness| mode.objective_value(fitness))
    }
}

impl Status for SwarmStatus {
    fn reset(&mut self) {
        self.message = String::new();
        self.gbest = Point::default();
        self.swarm = Swarm::default();
        self.iteration = 0;
        self.n_f_evals = 0;
        self.n_non_finite = 0;
    }
    fn message(&self) -> &str {
        &self.message
    }
    fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}
