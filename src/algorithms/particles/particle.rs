use crate::{
    core::{
        utils::{generate_random_vector, SampleFloat},
        Bounds, OptimizeMode, Point, SwarmError,
    },
    traits::CostFunction,
    DVector, Float,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};

use super::{NonFinitePolicy, VelocityWeights};

/// A particle with a position, a velocity, and the best position it has seen so far.
///
/// All particles of a swarm start at the same point; only their initial velocities differ. The
/// personal best is stored as a copy, so later moves of the particle never change it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwarmParticle {
    dimension: usize,
    position: DVector<Float>,
    velocity: DVector<Float>,
    best: Point,
    fitness: Option<Float>,
}

impl SwarmParticle {
    /// Create a new particle at `x0` with each velocity component drawn uniformly from `[-1, 1)`.
    ///
    /// The range is half-open because the draws come from [`fastrand`]'s `[0, 1)` generator; the
    /// missing endpoint has probability zero for a continuous draw.
    ///
    /// The personal best starts out unset.
    pub fn new(x0: &DVector<Float>, dimension: usize, rng: &mut Rng) -> Self {
        debug_assert_eq!(x0.len(), dimension);
        Self {
            dimension,
            position: x0.clone(),
            velocity: generate_random_vector(dimension, -1.0, 1.0, rng),
            best: Point {
                x: x0.clone(),
                fx: None,
            },
            fitness: None,
        }
    }
    /// The number of dimensions the particle moves in.
    pub const fn dimension(&self) -> usize {
        self.dimension
    }
    /// The particle's current position.
    pub const fn position(&self) -> &DVector<Float> {
        &self.position
    }
    /// The particle's current velocity.
    pub const fn velocity(&self) -> &DVector<Float> {
        &self.velocity
    }
    /// The best position (and its fitness) this particle has evaluated.
    pub const fn best(&self) -> &Point {
        &self.best
    }
    /// The fitness from the most recent evaluation, if any.
    pub const fn fitness(&self) -> Option<Float> {
        self.fitness
    }
    /// Evaluate the cost function at the particle's position and return the resulting fitness.
    ///
    /// The fitness is the objective value for [`OptimizeMode::Maximize`] and its negation for
    /// [`OptimizeMode::Minimize`]. If the personal best is unset or the fitness is strictly greater,
    /// the current position is copied into the personal best. Non-finite objective values are
    /// handled according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::Objective`] if the cost function fails, or
    /// [`SwarmError::NonFiniteObjective`] if it returns a non-finite value and `policy` is
    /// [`NonFinitePolicy::Reject`].
    pub fn evaluate<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        mode: OptimizeMode,
        policy: NonFinitePolicy,
        user_data: &mut U,
    ) -> Result<Float, SwarmError<E>> {
        let value = func
            .evaluate(&self.position, user_data)
            .map_err(SwarmError::Objective)?;
        let fitness = if value.is_finite() {
            mode.fitness(value)
        } else {
            match policy {
                NonFinitePolicy::Reject => {
                    return Err(SwarmError::NonFiniteObjective {
                        value,
                        x: self.position.iter().copied().collect(),
                    })
                }
                NonFinitePolicy::Penalize => Float::NEG_INFINITY,
                NonFinitePolicy::Propagate => mode.fitness(value),
            }
        };
        if self.best.is_improved_by(fitness) {
            self.best.record(&self.position, fitness);
        }
        self.fitness = Some(fitness);
        Ok(fitness)
    }
    /// Update the particle's velocity:
    ///
    /// ```math
    /// v_i \leftarrow \omega v_i + c_1 r_{1,i} (p_i - x_i) + c_2 r_{2,i} (g_i - x_i)
    /// ```
    /// where $`r_{1,i}`$ and $`r_{2,i}`$ are drawn uniformly from $`[0, 1)`$ for every dimension
    /// (in that order), $`p`$ is the personal best and $`g`$ is the global best.
    pub fn update_velocity(
        &mut self,
        global_best: &DVector<Float>,
        weights: &VelocityWeights,
        rng: &mut Rng,
    ) {
        for i in 0..self.dimension {
            let r1 = rng.float();
            let r2 = rng.float();
            let cognitive = weights.c1 * r1 * (self.best.x[i] - self.position[i]);
            let social = weights.c2 * r2 * (global_best[i] - self.position[i]);
            self.velocity[i] = weights.omega * self.velocity[i] + cognitive + social;
        }
    }
    /// Move the particle by its velocity and clamp the new position into `bounds`.
    ///
    /// Only the position is clamped. The velocity keeps whatever part of the step was blocked by
    /// the boundary.
    pub fn update_position(&mut self, bounds: &Bounds) {
        self.position += &self.velocity;
        bounds.clamp(&mut self.position);
    }
}
