/// Implementation of the Particle Swarm Optimization (PSO) algorithm
pub mod pso;
pub use pso::{optimize, optimize_with_rng, NonFinitePolicy, PSOConfig, VelocityWeights, PSO};

/// [`SwarmParticle`] type, a single member of a swarm.
pub mod particle;
pub use particle::SwarmParticle;

/// [`Swarm`] type, the population of particles.
pub mod swarm;
pub use swarm::Swarm;

/// [`SwarmStatus`] type for swarm-based optimizers.
pub mod swarm_status;
pub use swarm_status::SwarmStatus;

pub use crate::core::OptimizeMode;

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{core::Point, traits::Observer};

/// An [`Observer`] which stores the swarm particles' history as well as the
/// history of global best positions.
///
/// ```rust
/// use fastrand::Rng;
/// use swarmkit::prelude::*;
/// use swarmkit::algorithms::particles::TrackingSwarmObserver;
///
/// let tracker = TrackingSwarmObserver::build();
/// let mut engine: Engine<PSO, SwarmStatus> = Engine::new(PSO::new(Rng::with_seed(1))).setup(|e| {
///     e.configure(|c| c.with_x0([2.0]).with_bounds([(-3.0, 3.0)]).with_n_particles(4))
///         .with_observer(tracker.clone())
///         .with_max_steps(10)
/// });
/// engine.process(&|x: &DVector<Float>| x[0].abs()).unwrap();
/// assert_eq!(tracker.read().history.len(), 10);
/// assert_eq!(tracker.read().best_history.len(), 10);
/// ```
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct TrackingSwarmObserver {
    /// The history of the swarm particles
    pub history: Vec<Vec<SwarmParticle>>,
    /// The history of the best position in the swarm
    pub best_history: Vec<Point>,
}

impl TrackingSwarmObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}

impl<U> Observer<SwarmStatus, U> for TrackingSwarmObserver {
    fn observe(&mut self, _step: usize, status: &SwarmStatus, _user_data: &U) {
        self.history.push(status.swarm.particles.clone());
        self.best_history.push(status.get_best());
    }
}
