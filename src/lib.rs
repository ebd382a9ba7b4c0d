//! `swarmkit` provides a particle swarm optimizer (PSO) for minimizing or maximizing a scalar
//! objective over a box-bounded continuous domain. The user implements the [`CostFunction`](crate::traits::CostFunction)
//! trait on some struct (or just passes a closure) which takes a vector of parameters and returns a
//! single value ($`f(\mathbb{R}^n) \to \mathbb{R}`$), and the swarm does the rest.
//!
//! <div class="warning">
//!
//! This crate is still in an early development phase, and the API is not stable.
//!
//! </div>
//!
//! # Table of Contents
//! - [Key Features](#key-features)
//! - [Quick Start](#quick-start)
//! - [Bounds](#bounds)
//! - [Fitness and Optimization Mode](#fitness-and-optimization-mode)
//! - [Warnings](#warnings)
//!
//! # Key Features
//! * A classic global-topology PSO with synchronous updates: every particle is evaluated before any
//!   particle moves.
//! * Minimization and maximization through a single internal "larger fitness is better" rule.
//! * Reproducible runs from a seeded [`fastrand::Rng`].
//! * [`Observer`](crate::traits::Observer)s which can watch (or record) the swarm after every
//!   iteration.
//!
//! # Quick Start
//!
//! The simplest entry point is [`optimize`](crate::algorithms::particles::optimize):
//!
//! ```rust
//! use swarmkit::prelude::*;
//!
//! fn main() -> Result<(), SwarmError> {
//!     let sphere = |x: &DVector<Float>| x.iter().map(|xi| xi * xi).sum::<Float>();
//!     let summary = optimize(
//!         &sphere,
//!         &[5.0, 5.0],
//!         [(-10.0, 10.0), (-10.0, 10.0)],
//!         20,
//!         100,
//!         OptimizeMode::Minimize,
//!     )?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```
//!
//! For more control (velocity weights, seeded generators, observers), build a [`PSO`](crate::algorithms::particles::PSO)
//! and run it with an [`Engine`](crate::core::Engine):
//!
//! ```rust
//! use fastrand::Rng;
//! use swarmkit::prelude::*;
//! use swarmkit::test_functions::Zakharov;
//!
//! fn main() -> Result<(), SwarmError> {
//!     let mut engine: Engine<PSO, SwarmStatus> = Engine::new(PSO::new(Rng::with_seed(0))).setup(|e| {
//!         e.configure(|c| {
//!             c.with_x0([0.8, 1.2])
//!                 .with_bounds([(-10.0, 10.0), (-10.0, 10.0)])
//!                 .with_n_particles(20)
//!                 .with_omega(0.5)
//!         })
//!         .with_max_steps(100)
//!     });
//!     engine.process(&Zakharov)?;
//!     assert!(engine.result.fx.is_some());
//!     Ok(())
//! }
//! ```
//!
//! # Bounds
//! Every parameter lives in a closed interval $`[x_\text{min}, x_\text{max}]`$. After each velocity
//! update a particle's position is clamped into this box, but its velocity is left untouched, so a
//! particle pressed against a wall keeps its momentum into later iterations. A start point outside
//! the box is allowed (a warning is printed) and is pulled into the box by the first position update.
//!
//! # Fitness and Optimization Mode
//! Internally the swarm always *maximizes* a fitness value. In [`OptimizeMode::Minimize`](crate::core::OptimizeMode)
//! the fitness is the negated objective. A [`SwarmSummary`](crate::core::SwarmSummary) reports both
//! the internal `fitness` and `fx`, the objective value in the caller's own sense.
//!
//! # Warnings
//! Diagnostics which do not stop a run are printed to stderr. They can be silenced with
//! [`disable_warnings`](crate::core::utils::disable_warnings) or with the environment variable
//! `SWARMKIT_WARNINGS=0`.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing optimization algorithms
pub mod algorithms;
/// Module containing core data types, the [`Engine`](crate::core::Engine) and errors
pub mod core;
/// Module containing standard functions for testing algorithms
pub mod test_functions;
/// Module containing the traits which connect problems, algorithms and observers
pub mod traits;

pub use nalgebra::DVector;

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled).
#[cfg(not(feature = "f32"))]
pub type Float = f64;
/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled).
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;
/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;

/// The mathematical constant $`e`$.
#[cfg(not(feature = "f32"))]
pub const E: Float = std::f64::consts::E;
/// The mathematical constant $`e`$.
#[cfg(feature = "f32")]
pub const E: Float = std::f32::consts::E;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes
pub mod prelude {
    pub use crate::{
        algorithms::particles::{
            optimize, optimize_with_rng, NonFinitePolicy, OptimizeMode, PSOConfig, SwarmStatus,
            PSO,
        },
        core::{Bound, Bounds, Engine, Point, SwarmError, SwarmSummary},
        traits::{Algorithm, CostFunction, Observer, Status},
        DVector, Float,
    };
}
