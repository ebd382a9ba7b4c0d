use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    core::{Bounds, OptimizeMode, Point, SwarmError},
    traits::CostFunction,
    DVector, Float,
};

use super::{NonFinitePolicy, SwarmParticle, VelocityWeights};

/// A collection of [`SwarmParticle`]s which share a global best.
///
/// Each iteration has two phases. [`Swarm::evaluate`] evaluates every particle and folds the
/// results into the global best, then [`Swarm::update`] moves every particle using the global best
/// as it stood at the end of the first phase. No particle moves before all particles have been
/// evaluated.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Swarm {
    /// The particles, in creation order
    pub particles: Vec<SwarmParticle>,
    dimension: usize,
}

impl Swarm {
    /// Create `n_particles` particles at `x0`, each drawing its own random initial velocity.
    pub fn new(x0: &DVector<Float>, n_particles: usize, rng: &mut Rng) -> Self {
        let dimension = x0.len();
        Self {
            particles: (0..n_particles)
                .map(|_| SwarmParticle::new(x0, dimension, rng))
                .collect(),
            dimension,
        }
    }
    /// The number of particles in the swarm.
    pub fn len(&self) -> usize {
        self.particles.len()
    }
    /// Returns `true` if the swarm contains no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
    /// The dimension of the search space.
    pub const fn dimension(&self) -> usize {
        self.dimension
    }
    /// Iterate over the particles in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, SwarmParticle> {
        self.particles.iter()
    }
    /// Evaluate every particle in order and update `gbest` whenever a particle's fitness is
    /// strictly greater than it (or `gbest` is unset).
    ///
    /// Returns the number of non-finite fitness values seen in this pass.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`SwarmParticle::evaluate`]; particles after the failing
    /// one are not evaluated.
    pub fn evaluate<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        gbest: &mut Point,
        mode: OptimizeMode,
        policy: NonFinitePolicy,
        user_data: &mut U,
    ) -> Result<usize, SwarmError<E>> {
        let mut n_non_finite = 0;
        for particle in &mut self.particles {
            let fitness = particle.evaluate(func, mode, policy, user_data)?;
            if !fitness.is_finite() {
                n_non_finite += 1;
            }
            if gbest.is_improved_by(fitness) {
                gbest.record(particle.position(), fitness);
            }
        }
        Ok(n_non_finite)
    }
    /// Update every particle's velocity towards `global_best` and then its position, clamped into
    /// `bounds`.
    pub fn update(
        &mut self,
        global_best: &DVector<Float>,
        weights: &VelocityWeights,
        bounds: &Bounds,
        rng: &mut Rng,
    ) {
        for particle in &mut self.particles {
            particle.update_velocity(global_best, weights, rng);
            particle.update_position(bounds);
        }
    }
}

impl<'a> IntoIterator for &'a Swarm {
    type Item = &'a SwarmParticle;
    type IntoIter = std::slice::Iter<'a, SwarmParticle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
