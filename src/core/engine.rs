use std::{convert::Infallible, marker::PhantomData, sync::Arc};

use parking_lot::RwLock;

use crate::{
    core::SwarmError,
    traits::{Algorithm, CostFunction, Observer, Status},
};

const DEFAULT_MAX_STEPS: usize = 100;

/// The main struct used for running [`Algorithm`]s on [`CostFunction`]s.
///
/// An [`Engine`] owns the algorithm, its configuration, any [`Observer`]s and the user data which
/// is handed to the cost function. Runs always take exactly [`Engine::with_max_steps`] steps.
pub struct Engine<A, S, U = (), E = Infallible>
where
    A: Algorithm<S, U, E>,
    S: Status,
{
    /// The [`Status`] of the [`Algorithm`], usually read after a run.
    pub status: S,
    /// The [`Algorithm::Summary`], usually read after a run.
    pub result: A::Summary,

    algorithm: A,
    config: A::Config,
    observers: Vec<Arc<RwLock<dyn Observer<S, U>>>>,
    user_data: U,
    max_steps: usize,
    _phantom: PhantomData<E>,
}

impl<A, S, U, E> Engine<A, S, U, E>
where
    A: Algorithm<S, U, E>,
    A::Summary: Default,
    A::Config: Default,
    S: Status,
    U: Default,
{
    /// Creates a new [`Engine`] with the given [`Algorithm`] and a default configuration.
    pub fn new(algorithm: A) -> Self {
        Self {
            status: S::default(),
            result: Default::default(),
            algorithm,
            config: Default::default(),
            observers: Vec::default(),
            user_data: Default::default(),
            max_steps: DEFAULT_MAX_STEPS,
            _phantom: PhantomData,
        }
    }
}

impl<A, S, U, E> Engine<A, S, U, E>
where
    A: Algorithm<S, U, E>,
    S: Status,
{
    /// Convenience method to use chainable methods to set up the [`Engine`].
    ///
    /// ```rust
    /// use swarmkit::prelude::*;
    ///
    /// let engine: Engine<PSO, SwarmStatus> = Engine::new(PSO::default()).setup(|e| {
    ///     e.configure(|c| c.with_x0([1.0, 2.0]).with_bounds([(-4.0, 4.0), (-4.0, 4.0)]))
    ///         .with_max_steps(50)
    /// });
    /// ```
    pub fn setup<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Self) -> &mut Self,
    {
        f(&mut self);
        self
    }

    /// Edit the [`Algorithm::Config`] of the [`Engine`].
    pub fn configure<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut A::Config) -> &mut A::Config,
    {
        f(&mut self.config);
        self
    }

    /// Read the current [`Algorithm::Config`].
    pub const fn config(&self) -> &A::Config {
        &self.config
    }

    /// Set the number of steps to perform (default: 100).
    pub fn with_max_steps(&mut self, max_steps: usize) -> &mut Self {
        self.max_steps = max_steps;
        self
    }

    /// Set user data for the [`Engine`].
    pub fn with_user_data<T: Into<U>>(&mut self, data: T) -> &mut Self {
        self.user_data = data.into();
        self
    }

    /// Read the user data after (or before) a run.
    pub const fn user_data(&self) -> &U {
        &self.user_data
    }

    /// Adds a single [`Observer`] to the [`Engine`].
    pub fn with_observer(&mut self, observer: Arc<RwLock<dyn Observer<S, U>>>) -> &mut Self {
        self.observers.push(observer);
        self
    }

    /// Run the [`Algorithm`] on the given [`CostFunction`].
    ///
    /// This method first resets the [`Status`] and runs [`Algorithm::initialize`], then runs
    /// [`Algorithm::step`] exactly `max_steps` times. Each step is followed by a sequential call to
    /// all given [`Observer`]s. Afterwards [`Algorithm::postprocessing`] is called and finally
    /// [`Algorithm::summarize`] stores a summary of the run in [`Engine::result`].
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError`] if the configuration is invalid or the cost function fails. See
    /// [`CostFunction::evaluate`] for more information. On error, [`Engine::result`] is left
    /// untouched.
    pub fn process<P>(&mut self, func: &P) -> Result<(), SwarmError<E>>
    where
        P: CostFunction<U, E>,
    {
        self.status.reset();
        self.algorithm
            .initialize(&self.config, func, &mut self.status, &mut self.user_data)?;
        let mut current_step = 0;
        while current_step < self.max_steps {
            self.algorithm
                .step(current_step, func, &mut self.status, &mut self.user_data)?;
            current_step += 1;
            for observer in &self.observers {
                observer
                    .write()
                    .observe(current_step, &self.status, &self.user_data);
            }
        }
        self.algorithm
            .postprocessing(func, &mut self.status, &mut self.user_data)?;
        if current_step == 0 {
            self.status
                .update_message("No steps taken, the objective was never evaluated");
        } else {
            self.status.update_message(&format!(
                "Maximum number of steps reached ({})",
                current_step
            ));
        }
        self.result =
            self.algorithm
                .summarize(current_step, func, &self.status, &self.user_data)?;
        Ok(())
    }
}
