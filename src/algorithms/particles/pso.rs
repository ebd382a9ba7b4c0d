use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::particles::Swarm,
    core::{utils::maybe_warn, Bound, Bounds, Engine, OptimizeMode, Point, SwarmError, SwarmSummary},
    traits::{Algorithm, CostFunction, Status},
    DVector, Float,
};

use super::SwarmStatus;

/// The coefficients of the velocity update.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VelocityWeights {
    /// The inertial weight $`\omega`$ (default = `0.5`)
    pub omega: Float,
    /// The cognitive weight $`c_1`$, the pull towards a particle's personal best (default = `1.0`)
    pub c1: Float,
    /// The social weight $`c_2`$, the pull towards the global best (default = `2.0`)
    pub c2: Float,
}
impl Default for VelocityWeights {
    fn default() -> Self {
        Self {
            omega: 0.5,
            c1: 1.0,
            c2: 2.0,
        }
    }
}
impl VelocityWeights {
    fn validate<E>(&self) -> Result<(), SwarmError<E>> {
        for (name, value) in [
            ("inertia", self.omega),
            ("cognitive", self.c1),
            ("social", self.c2),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SwarmError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// What to do when the objective returns `NaN` or an infinite value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NonFinitePolicy {
    /// Stop the run with [`SwarmError::NonFiniteObjective`]
    #[default]
    Reject,
    /// Treat the value as the worst possible fitness ($`-\infty`$). If the best point found
    /// carries this penalty, [`SwarmSummary::fx`] is [`None`] since the objective gave no usable
    /// value there.
    Penalize,
    /// Use the value as-is. A `NaN` fitness never compares greater than anything, so it is only
    /// recorded as a best if nothing had been recorded before, and is then never replaced.
    Propagate,
}

/// The configuration struct for the [`PSO`] algorithm.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PSOConfig {
    x0: Vec<Float>,
    bounds: Bounds,
    n_particles: usize,
    weights: VelocityWeights,
    mode: OptimizeMode,
    non_finite_policy: NonFinitePolicy,
    parameter_names: Option<Vec<String>>,
}
impl Default for PSOConfig {
    fn default() -> Self {
        Self {
            x0: Vec::default(),
            bounds: Bounds::default(),
            n_particles: 20,
            weights: VelocityWeights::default(),
            mode: OptimizeMode::default(),
            non_finite_policy: NonFinitePolicy::default(),
            parameter_names: None,
        }
    }
}
impl PSOConfig {
    /// Sets the starting point shared by every particle.
    pub fn with_x0<I: IntoIterator<Item = Float>>(&mut self, x0: I) -> &mut Self {
        self.x0 = x0.into_iter().collect();
        self
    }
    /// Sets the bounds, one per parameter.
    pub fn with_bounds<I: IntoIterator<Item = B>, B: Into<Bound>>(&mut self, bounds: I) -> &mut Self {
        self.bounds = bounds.into_iter().collect();
        self
    }
    /// Sets the number of particles (default = `20`).
    pub fn with_n_particles(&mut self, n_particles: usize) -> &mut Self {
        self.n_particles = n_particles;
        self
    }
    /// Sets the inertial weight $`\omega`$ (default = `0.5`).
    pub fn with_omega(&mut self, value: Float) -> &mut Self {
        self.weights.omega = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency to move towards
    /// its personal best (default = `1.0`).
    pub fn with_c1(&mut self, value: Float) -> &mut Self {
        self.weights.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency to move towards the
    /// global best (default = `2.0`).
    pub fn with_c2(&mut self, value: Float) -> &mut Self {
        self.weights.c2 = value;
        self
    }
    /// Sets all three velocity weights at once.
    pub fn with_weights(&mut self, weights: VelocityWeights) -> &mut Self {
        self.weights = weights;
        self
    }
    /// Sets whether the objective is minimized or maximized (default = minimize).
    pub fn with_mode(&mut self, mode: OptimizeMode) -> &mut Self {
        self.mode = mode;
        self
    }
    /// Sets the handling of non-finite objective values (default = [`NonFinitePolicy::Reject`]).
    pub fn with_non_finite_policy(&mut self, policy: NonFinitePolicy) -> &mut Self {
        self.non_finite_policy = policy;
        self
    }
    /// Sets names for the parameters, used when displaying a [`SwarmSummary`].
    pub fn with_parameter_names<I: IntoIterator<Item = S>, S: AsRef<str>>(
        &mut self,
        names: I,
    ) -> &mut Self {
        self.parameter_names = Some(names.into_iter().map(|s| s.as_ref().to_string()).collect());
        self
    }
    /// The starting point.
    pub fn x0(&self) -> &[Float] {
        &self.x0
    }
    /// The bounds.
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }
    /// The number of particles.
    pub const fn n_particles(&self) -> usize {
        self.n_particles
    }
    /// The velocity weights.
    pub const fn weights(&self) -> &VelocityWeights {
        &self.weights
    }
    /// The optimization direction.
    pub const fn mode(&self) -> OptimizeMode {
        self.mode
    }
    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checked in this order: an empty starting point
    /// ([`SwarmError::ZeroDimension`]), a bounds count which differs from the dimension
    /// ([`SwarmError::DimensionMismatch`]), an invalid bound ([`SwarmError::InvalidBound`]), zero
    /// particles ([`SwarmError::EmptySwarm`]), a negative or non-finite velocity weight
    /// ([`SwarmError::InvalidWeight`]) and a parameter name count which differs from the dimension
    /// ([`SwarmError::ParameterNameMismatch`]).
    pub fn validate<E>(&self) -> Result<(), SwarmError<E>> {
        let dimension = self.x0.len();
        if dimension == 0 {
            return Err(SwarmError::ZeroDimension);
        }
        if self.bounds.len() != dimension {
            return Err(SwarmError::DimensionMismatch {
                expected: dimension,
                found: self.bounds.len(),
            });
        }
        self.bounds.validate()?;
        if self.n_particles == 0 {
            return Err(SwarmError::EmptySwarm);
        }
        self.weights.validate()?;
        if let Some(names) = &self.parameter_names {
            if names.len() != dimension {
                return Err(SwarmError::ParameterNameMismatch {
                    expected: dimension,
                    found: names.len(),
                });
            }
        }
        Ok(())
    }
}

/// Particle Swarm Optimizer
///
/// Every particle starts at the configured `x0` with a random velocity drawn uniformly from
/// $`[-1, 1)`$ in each dimension. Each step evaluates the whole swarm, updating the personal
/// bests and the global best, and then moves every particle:
///
/// ```math
/// v \leftarrow \omega v + c_1 r_1 \odot (p - x) + c_2 r_2 \odot (g - x),\qquad x \leftarrow \text{clamp}(x + v)
/// ```
/// where $`r_1`$ and $`r_2`$ are fresh uniform draws from $`[0, 1)`$ for every particle and
/// dimension, $`p`$ is the particle's personal best and $`g`$ the global best. Only positions are
/// clamped into the bounds.
///
/// Comparisons are made on the fitness, which the swarm maximizes. For
/// [`OptimizeMode::Minimize`] the fitness is the negated objective.
///
/// All randomness comes from the [`Rng`] given to [`PSO::new`], so two runs from equally seeded
/// generators are identical.
#[derive(Clone)]
pub struct PSO {
    rng: Rng,
    config: PSOConfig,
}

impl Default for PSO {
    fn default() -> Self {
        Self::new(Rng::new())
    }
}
impl PSO {
    /// Create a new Particle Swarm Optimizer with the given random number generator.
    pub fn new(rng: Rng) -> Self {
        Self {
            rng,
            config: PSOConfig::default(),
        }
    }
}

impl<U, E> Algorithm<SwarmStatus, U, E> for PSO {
    type Summary = SwarmSummary;
    type Config = PSOConfig;

    fn initialize(
        &mut self,
        config: &Self::Config,
        _func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        _user_data: &mut U,
    ) -> Result<(), SwarmError<E>> {
        config.validate()?;
        self.config = config.clone();
        let x0 = DVector::from_column_slice(&config.x0);
        if !config.bounds.contains(&x0) {
            maybe_warn(&format!(
                "the starting point {:?} lies outside the bounds, particles will be clamped into them after the first iteration",
                config.x0
            ));
        }
        status.swarm = Swarm::new(&x0, config.n_particles, &mut self.rng);
        status.gbest = Point::unset(x0.len());
        status.update_message("Initialized");
        Ok(())
    }

    fn step(
        &mut self,
        _current_step: usize,
        func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), SwarmError<E>> {
        let n_non_finite = status.swarm.evaluate(
            func,
            &mut status.gbest,
            self.config.mode,
            self.config.non_finite_policy,
            user_data,
        )?;
        status.n_f_evals += status.swarm.len();
        status.n_non_finite += n_non_finite;
        status.swarm.update(
            &status.gbest.x,
            &self.config.weights,
            &self.config.bounds,
            &mut self.rng,
        );
        status.iteration += 1;
        Ok(())
    }

    fn postprocessing(
        &mut self,
        _func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        _user_data: &mut U,
    ) -> Result<(), SwarmError<E>> {
        if status.n_non_finite > 0 {
            maybe_warn(&format!(
                "{} of {} objective evaluations were not finite ({:?})",
                status.n_non_finite, status.n_f_evals, self.config.non_finite_policy
            ));
        }
        Ok(())
    }

    fn summarize(
        &self,
        current_step: usize,
        _func: &dyn CostFunction<U, E>,
        status: &SwarmStatus,
        _user_data: &U,
    ) -> Result<Self::Summary, SwarmError<E>> {
        let mode = self.config.mode;
        let (x, fitness) = match status.get_best().destructure() {
            Some((x, fitness)) => (Some(x.iter().copied().collect()), Some(fitness)),
            None => (None, None),
        };
        Ok(SwarmSummary {
            bounds: self.config.bounds.clone(),
            parameter_names: self.config.parameter_names.clone(),
            message: status.message.clone(),
            mode,
            x0: self.config.x0.clone(),
            x,
            fx: fitness
                .filter(|f| {
                    !(self.config.non_finite_policy == NonFinitePolicy::Penalize
                        && *f == Float::NEG_INFINITY)
                })
                .map(|f| mode.objective_value(f)),
            fitness,
            n_particles: self.config.n_particles,
            iterations: current_step,
            cost_evals: status.n_f_evals,
        })
    }
}

/// Run a particle swarm on `objective` from `x0` within `bounds` and return the best point found.
///
/// This uses the default velocity weights, [`NonFinitePolicy::Reject`] and a generator seeded from
/// system entropy. See [`optimize_with_rng`] for reproducible runs and [`PSO`] with an [`Engine`]
/// for full control.
///
/// # Errors
///
/// Returns a [`SwarmError`] if the configuration is invalid (before any evaluation), if the
/// objective fails, or if it returns a non-finite value.
pub fn optimize<P, E, I, B>(
    objective: &P,
    x0: &[Float],
    bounds: I,
    n_particles: usize,
    max_iterations: usize,
    mode: OptimizeMode,
) -> Result<SwarmSummary, SwarmError<E>>
where
    P: CostFunction<(), E>,
    I: IntoIterator<Item = B>,
    B: Into<Bound>,
{
    optimize_with_rng(
        objective,
        x0,
        bounds,
        n_particles,
        max_iterations,
        mode,
        Rng::new(),
    )
}

/// The same as [`optimize`], but every random draw comes from `rng`.
///
/// # Errors
///
/// See [`optimize`].
pub fn optimize_with_rng<P, E, I, B>(
    objective: &P,
    x0: &[Float],
    bounds: I,
    n_particles: usize,
    max_iterations: usize,
    mode: OptimizeMode,
    rng: Rng,
) -> Result<SwarmSummary, SwarmError<E>>
where
    P: CostFunction<(), E>,
    I: IntoIterator<Item = B>,
    B: Into<Bound>,
{
    let mut engine: Engine<PSO, SwarmStatus, (), E> = Engine::new(PSO::new(rng)).setup(|e| {
        e.configure(|c| {
            c.with_x0(x0.iter().copied())
                .with_bounds(bounds)
                .with_n_particles(n_particles)
                .with_mode(mode)
        })
        .with_max_steps(max_iterations)
    });
    engine.process(objective)?;
    Ok(engine.result)
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, convert::Infallible, sync::Arc};

    use approx::assert_relative_eq;
    use parking_lot::RwLock;

    use super::*;
    use crate::{algorithms::particles::TrackingSwarmObserver, traits::Observer};

    struct CountingSphere {
        calls: Cell<usize>,
    }
    impl CountingSphere {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }
    impl CostFunction for CountingSphere {
        fn evaluate(&self, x: &DVector<Float>, _: &mut ()) -> Result<Float, Infallible> {
            self.calls.set(self.calls.get() + 1);
            Ok(x.dot(x))
        }
    }

    fn box_bounds(n: usize, lb: Float, ub: Float) -> Vec<(Float, Float)> {
        vec![(lb, ub); n]
    }

    fn engine_for(seed: u64) -> Engine<PSO, SwarmStatus> {
        Engine::new(PSO::new(Rng::with_seed(seed)))
    }

    #[test]
    fn test_config_errors_before_any_evaluation() {
        let f = CountingSphere::new();
        let run = |x0: &[Float], bounds: Vec<(Float, Float)>, n: usize| {
            optimize_with_rng(
                &f,
                x0,
                bounds,
                n,
                10,
                OptimizeMode::Minimize,
                Rng::with_seed(0),
            )
        };
        assert!(matches!(
            run(&[], vec![], 10),
            Err(SwarmError::ZeroDimension)
        ));
        assert!(matches!(
            run(&[1.0, 2.0], box_bounds(1, -1.0, 1.0), 10),
            Err(SwarmError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            run(&[1.0, 2.0], vec![(-1.0, 1.0), (5.0, -5.0)], 10),
            Err(SwarmError::InvalidBound { index: 1, .. })
        ));
        assert!(matches!(
            run(&[1.0], vec![(Float::NAN, 1.0)], 10),
            Err(SwarmError::InvalidBound { index: 0, .. })
        ));
        assert!(matches!(
            run(&[0.0], vec![(Float::INFINITY, Float::INFINITY)], 3),
            Err(SwarmError::InvalidBound { index: 0, .. })
        ));
        assert!(matches!(
            run(&[1.0], box_bounds(1, -1.0, 1.0), 0),
            Err(SwarmError::EmptySwarm)
        ));
        assert_eq!(f.calls.get(), 0);
    }

    #[test]
    fn test_invalid_weights_and_names() {
        let f = CountingSphere::new();
        let mut engine = engine_for(0).setup(|e| {
            e.configure(|c| {
                c.with_x0([1.0])
                    .with_bounds([(-1.0, 1.0)])
                    .with_omega(-0.1)
            })
        });
        assert!(matches!(
            engine.process(&f),
            Err(SwarmError::InvalidWeight { name: "inertia", .. })
        ));
        engine.configure(|c| c.with_omega(0.5).with_c2(Float::INFINITY));
        assert!(matches!(
            engine.process(&f),
            Err(SwarmError::InvalidWeight { name: "social", .. })
        ));
        engine.configure(|c| c.with_c2(2.0).with_parameter_names(["a", "b"]));
        assert!(matches!(
            engine.process(&f),
            Err(SwarmError::ParameterNameMismatch {
                expected: 1,
                found: 2
            })
        ));
        assert_eq!(f.calls.get(), 0);
    }

    #[test]
    fn test_zero_iterations_leave_best_unset() {
        let f = CountingSphere::new();
        let summary = optimize_with_rng(
            &f,
            &[1.0, 1.0],
            box_bounds(2, -2.0, 2.0),
            5,
            0,
            OptimizeMode::Minimize,
            Rng::with_seed(0),
        )
        .unwrap();
        assert!(summary.x.is_none());
        assert!(summary.fx.is_none());
        assert!(summary.fitness.is_none());
        assert!(summary.best().is_none());
        assert_eq!(summary.cost_evals, 0);
        assert_eq!(f.calls.get(), 0);
        assert_eq!(
            summary.message,
            "No steps taken, the objective was never evaluated"
        );
    }

    #[test]
    fn test_sphere_converges() {
        let f = CountingSphere::new();
        let summary = optimize_with_rng(
            &f,
            &[5.0, 5.0],
            box_bounds(2, -10.0, 10.0),
            20,
            100,
            OptimizeMode::Minimize,
            Rng::with_seed(0),
        )
        .unwrap();
        let x = summary.x.clone().unwrap();
        assert!(x[0].abs() < 0.5);
        assert!(x[1].abs() < 0.5);
        assert_eq!(f.calls.get(), 20 * 100);
        assert_eq!(summary.cost_evals, 20 * 100);
        assert_eq!(summary.iterations, 100);
        assert_eq!(summary.n_particles, 20);
        let fx = summary.fx.unwrap();
        assert!(fx >= 0.0);
        assert_relative_eq!(summary.fitness.unwrap(), -fx);
        assert_relative_eq!(fx, x[0] * x[0] + x[1] * x[1], epsilon = 1e-12);
        assert_eq!(summary.message, "Maximum number of steps reached (100)");
    }

    #[test]
    fn test_maximize() {
        let f = |x: &DVector<Float>| -> Float { -(x[0] - 1.0).powi(2) - (x[1] + 2.0).powi(2) + 3.0 };
        let summary = optimize_with_rng(
            &f,
            &[0.0, 0.0],
            box_bounds(2, -5.0, 5.0),
            20,
            100,
            OptimizeMode::Maximize,
            Rng::with_seed(1),
        )
        .unwrap();
        let (x, fx) = summary.best().unwrap();
        assert!((x[0] - 1.0).abs() < 0.1);
        assert!((x[1] + 2.0).abs() < 0.1);
        assert!(fx <= 3.0);
        assert_eq!(summary.fitness, summary.fx);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let run = || {
            let tracker = TrackingSwarmObserver::build();
            let mut engine = engine_for(42).setup(|e| {
                e.configure(|c| {
                    c.with_x0([3.0, -4.0, 1.0])
                        .with_bounds(box_bounds(3, -5.0, 5.0))
                        .with_n_particles(7)
                })
                .with_observer(tracker.clone())
                .with_max_steps(25)
            });
            engine.process(&|x: &DVector<Float>| x.dot(x)).unwrap();
            let history = tracker.read().clone();
            (engine.result, history)
        };
        let (summary_a, history_a) = run();
        let (summary_b, history_b) = run();
        assert_eq!(summary_a.x, summary_b.x);
        assert_eq!(summary_a.fitness, summary_b.fitness);
        assert_eq!(history_a.best_history, history_b.best_history);
        for (a, b) in history_a.history.iter().zip(&history_b.history) {
            for (pa, pb) in a.iter().zip(b) {
                assert_eq!(pa.position(), pb.position());
                assert_eq!(pa.velocity(), pb.velocity());
            }
        }
    }

    #[test]
    fn test_bests_never_get_worse_and_positions_stay_in_bounds() {
        let tracker = TrackingSwarmObserver::build();
        let bounds: Bounds = box_bounds(2, -1.0, 1.0).into_iter().collect();
        let mut engine = engine_for(5).setup(|e| {
            e.configure(|c| {
                c.with_x0([0.5, -0.5])
                    .with_bounds(box_bounds(2, -1.0, 1.0))
                    .with_n_particles(10)
            })
            .with_observer(tracker.clone())
            .with_max_steps(40)
        });
        // the unconstrained optimum lies outside the box
        let shifted = |x: &DVector<Float>| -> Float { (x[0] - 20.0).powi(2) + (x[1] + 20.0).powi(2) };
        engine.process(&shifted).unwrap();
        let tracker = tracker.read();
        assert_eq!(tracker.history.len(), 40);
        for pair in tracker.best_history.windows(2) {
            assert!(pair[1].fx.unwrap() >= pair[0].fx.unwrap());
        }
        for step in &tracker.history {
            for particle in step {
                assert!(bounds.contains(particle.position()));
            }
        }
        for i in 0..10 {
            for pair in tracker.history.windows(2) {
                assert!(pair[1][i].best().fx.unwrap() >= pair[0][i].best().fx.unwrap());
            }
        }
        let x = engine.result.x.clone().unwrap();
        assert_relative_eq!(x[0], 1.0);
        assert_relative_eq!(x[1], -1.0);
    }

    #[test]
    fn test_single_particle_constant_objective() {
        let tracker = TrackingSwarmObserver::build();
        let mut engine = engine_for(9).setup(|e| {
            e.configure(|c| {
                c.with_x0([1.0, -2.0])
                    .with_bounds(box_bounds(2, -10.0, 10.0))
                    .with_n_particles(1)
            })
            .with_observer(tracker.clone())
            .with_max_steps(200)
        });
        engine.process(&|_: &DVector<Float>| -> Float { 3.0 }).unwrap();
        assert_eq!(engine.result.x, Some(vec![1.0, -2.0]));
        assert_eq!(engine.result.fx, Some(3.0));
        assert_eq!(engine.result.fitness, Some(-3.0));
        for best in &tracker.read().best_history {
            assert_eq!(best.fx, Some(-3.0));
        }
        let particle = &engine.status.swarm.particles[0];
        assert_relative_eq!(particle.position()[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(particle.position()[1], -2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_start_outside_bounds_is_clamped() {
        crate::core::utils::disable_warnings();
        let mut engine = engine_for(3).setup(|e| {
            e.configure(|c| {
                c.with_x0([20.0, 0.0])
                    .with_bounds(box_bounds(2, -10.0, 10.0))
                    .with_n_particles(4)
            })
            .with_max_steps(1)
        });
        engine.process(&|x: &DVector<Float>| x.dot(x)).unwrap();
        // the first evaluation happens at the unclamped start
        assert_eq!(engine.result.x, Some(vec![20.0, 0.0]));
        assert_eq!(engine.result.x0, vec![20.0, 0.0]);
        for particle in &engine.status.swarm {
            assert!(engine.result.bounds.contains(particle.position()));
        }
    }

    #[test]
    fn test_non_finite_policies() {
        let nan_left = |x: &DVector<Float>| -> Float {
            if x[0] < 0.0 {
                Float::NAN
            } else {
                x.dot(x)
            }
        };
        let err = optimize_with_rng(
            &|_: &DVector<Float>| -> Float { Float::NAN },
            &[1.0],
            box_bounds(1, -1.0, 1.0),
            3,
            5,
            OptimizeMode::Minimize,
            Rng::with_seed(0),
        )
        .unwrap_err();
        assert!(matches!(err, SwarmError::NonFiniteObjective { .. }));

        let mut engine = engine_for(4).setup(|e| {
            e.configure(|c| {
                c.with_x0([2.0, 2.0])
                    .with_bounds(box_bounds(2, -5.0, 5.0))
                    .with_non_finite_policy(NonFinitePolicy::Penalize)
            })
            .with_max_steps(50)
        });
        engine.process(&nan_left).unwrap();
        let (x, fx) = engine.result.best().unwrap();
        assert!(fx.is_finite());
        assert!(x[0] >= 0.0);
        assert!(engine.status.n_non_finite > 0);

        let mut engine = engine_for(4).setup(|e| {
            e.configure(|c| {
                c.with_x0([1.0])
                    .with_bounds([(-1.0, 1.0)])
                    .with_n_particles(3)
                    .with_non_finite_policy(NonFinitePolicy::Penalize)
            })
            .with_max_steps(5)
        });
        engine
            .process(&|_: &DVector<Float>| -> Float { Float::NAN })
            .unwrap();
        assert_eq!(engine.result.fitness, Some(Float::NEG_INFINITY));
        assert!(engine.result.x.is_some());
        assert!(engine.result.fx.is_none());
        assert!(engine.result.best().is_none());
    }

    #[test]
    fn test_objective_errors_propagate() {
        struct Budget(usize);
        impl CostFunction<usize, String> for Budget {
            fn evaluate(&self, x: &DVector<Float>, calls: &mut usize) -> Result<Float, String> {
                *calls += 1;
                if *calls > self.0 {
                    return Err(format!("budget of {} evaluations exhausted", self.0));
                }
                Ok(x.dot(x))
            }
        }
        let mut engine: Engine<PSO, SwarmStatus, usize, String> =
            Engine::new(PSO::new(Rng::with_seed(0))).setup(|e| {
                e.configure(|c| {
                    c.with_x0([1.0])
                        .with_bounds([(-1.0, 1.0)])
                        .with_n_particles(10)
                })
                .with_user_data(0_usize)
                .with_max_steps(10)
            });
        let err = engine.process(&Budget(25)).unwrap_err();
        assert!(matches!(err, SwarmError::Objective(_)));
        assert_eq!(*engine.user_data(), 26);
        assert_eq!(engine.status.iteration, 2);
    }

    #[test]
    fn test_observer_called_after_every_step() {
        #[derive(Default)]
        struct Steps(Vec<usize>);
        impl<U> Observer<SwarmStatus, U> for Steps {
            fn observe(&mut self, step: usize, status: &SwarmStatus, _user_data: &U) {
                assert!(status.gbest.is_set());
                assert_eq!(status.iteration, step);
                self.0.push(step);
            }
        }
        let steps = Arc::new(RwLock::new(Steps::default()));
        let mut engine = engine_for(0).setup(|e| {
            e.configure(|c| c.with_x0([1.0]).with_bounds([(-1.0, 1.0)]))
                .with_observer(steps.clone())
                .with_max_steps(7)
        });
        engine.process(&|x: &DVector<Float>| x.dot(x)).unwrap();
        assert_eq!(steps.read().0, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_summary_keeps_parameter_names() {
        let mut engine = engine_for(0).setup(|e| {
            e.configure(|c| {
                c.with_x0([1.0, 1.0])
                    .with_bounds(box_bounds(2, -2.0, 2.0))
                    .with_parameter_names(["alpha", "beta"])
            })
            .with_max_steps(5)
        });
        engine.process(&|x: &DVector<Float>| x.dot(x)).unwrap();
        assert_eq!(
            engine.result.parameter_names,
            Some(vec!["alpha".to_string(), "beta".to_string()])
        );
        let table = engine.result.to_string();
        assert!(table.contains("SWARM RESULTS"));
        assert!(table.contains("alpha"));
    }
}
