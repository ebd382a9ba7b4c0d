use crate::{
    core::SwarmError,
    traits::{CostFunction, Status},
};
use std::convert::Infallible;

/// A trait representing an optimization algorithm.
///
/// This trait is implemented for the algorithms found in the [`algorithms`](crate::algorithms)
/// module, and contains all the methods needed to be run by an [`Engine`](crate::core::Engine).
/// The [`Engine`](crate::core::Engine) calls [`Algorithm::initialize`] once, then
/// [`Algorithm::step`] a fixed number of times, then [`Algorithm::postprocessing`] and finally
/// [`Algorithm::summarize`].
pub trait Algorithm<S: Status, U = (), E = Infallible> {
    /// A type which holds a summary of the algorithm's ending state.
    type Summary;
    /// The configuration struct for the algorithm.
    type Config;

    /// Any setup work done before the main steps of the algorithm should be done here, including
    /// validation of the [`Algorithm::Config`].
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError`] if the configuration is invalid or an evaluation fails.
    fn initialize(
        &mut self,
        config: &Self::Config,
        func: &dyn CostFunction<U, E>,
        status: &mut S,
        user_data: &mut U,
    ) -> Result<(), SwarmError<E>>;

    /// The main "step" of an algorithm, which is repeated a fixed number of times.
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError`] if an evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    fn step(
        &mut self,
        current_step: usize,
        func: &dyn CostFunction<U, E>,
        status: &mut S,
        user_data: &mut U,
    ) -> Result<(), SwarmError<E>>;

    /// Runs any steps needed by the [`Algorithm`] after the last step.
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError`] if an evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    #[allow(unused_variables)]
    fn postprocessing(
        &mut self,
        func: &dyn CostFunction<U, E>,
        status: &mut S,
        user_data: &mut U,
    ) -> Result<(), SwarmError<E>> {
        Ok(())
    }

    /// Generates a new [`Algorithm::Summary`] from the current state of the [`Algorithm`], which
    /// can be displayed or used elsewhere.
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError`] if any internal evaluation fails while creating the
    /// [`Algorithm::Summary`].
    fn summarize(
        &self,
        current_step: usize,
        func: &dyn CostFunction<U, E>,
        status: &S,
        user_data: &U,
    ) -> Result<Self::Summary, SwarmError<E>>;
}
