use crate::{traits::CostFunction, DVector, Float};
use std::convert::Infallible;

/// A scaled sphere, the simplest convex test function with its minimum $`f(\vec{0}) = 0`$.
///
/// ```math
/// f(\vec{x}) = s \sum_{i=1}^n x_i^2
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    /// The scale factor $`s`$ (default = `1.0`).
    pub scale: Float,
}
impl Default for Sphere {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
impl<U> CostFunction<U> for Sphere {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut U) -> Result<Float, Infallible> {
        Ok(self.scale * x.norm_squared())
    }
}
