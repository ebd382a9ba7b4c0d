use std::{fmt::Debug, sync::Arc};

use parking_lot::RwLock;

use super::Status;

/// A trait which holds an [`observe`](`Observer::observe`) function that is called with the
/// [`Status`] of an [`Algorithm`](`crate::traits::Algorithm`) after every step.
///
/// Observers only watch. They cannot stop or alter a run.
pub trait Observer<S: Status, U> {
    /// A function that is called after every step of an [`Algorithm`](`crate::traits::Algorithm`).
    fn observe(&mut self, step: usize, status: &S, user_data: &U);
}

/// A debugging observer which prints out the step, status, and any user data at the current step
/// in an algorithm.
///
/// # Usage:
///
/// ```rust
/// use swarmkit::prelude::*;
/// use swarmkit::traits::observer::DebugObserver;
/// use swarmkit::test_functions::Sphere;
///
/// let mut engine: Engine<PSO, SwarmStatus> = Engine::new(PSO::default()).setup(|e| {
///     e.configure(|c| c.with_x0([1.0, 1.0]).with_bounds([(-2.0, 2.0), (-2.0, 2.0)]))
///         .with_observer(DebugObserver::build())
///         .with_max_steps(3)
/// });
/// engine.process(&Sphere::default()).unwrap();
/// // ^ This will print debug messages for each step
/// ```
pub struct DebugObserver;
impl DebugObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl<S: Status + Debug, U: Debug> Observer<S, U> for DebugObserver {
    fn observe(&mut self, step: usize, status: &S, user_data: &U) {
        println!("Step: {}\n{:#?}\n{:#?}", step, status, user_data);
    }
}
