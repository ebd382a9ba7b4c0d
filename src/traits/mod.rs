/// Module containing the [`Algorithm`] trait.
pub mod algorithm;
/// Module containing the [`CostFunction`] trait.
pub mod cost_function;
/// Module containing the [`Observer`] trait and its implementations.
pub mod observer;
/// Module containing the [`Status`] trait.
pub mod status;

pub use algorithm::Algorithm;
pub use cost_function::CostFunction;
pub use observer::Observer;
pub use status::Status;
