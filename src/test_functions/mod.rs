/// Module containing the sphere test function.
pub mod sphere;
pub use sphere::Sphere;

/// Module containing the Ackley test function.
pub mod ackley;
pub use ackley::Ackley;

/// Module containing the Zakharov test function.
pub mod zakharov;
pub use zakharov::Zakharov;

/// Module containing the Rastrigin test function.
pub mod rastrigin;
pub use rastrigin::Rastrigin;
