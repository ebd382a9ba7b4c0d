use crate::{traits::CostFunction, DVector, Float, PI};
use std::convert::Infallible;

/// The Rastrigin function, a non-convex function with a single minimum but many local minima.
///
/// ```math
/// f(\vec{x}) = 10n + \sum_{i=1}^n (x_i^2 - 10\cos(2\pi x_i))
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Rastrigin;

impl<U> CostFunction<U> for Rastrigin {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut U) -> Result<Float, Infallible> {
        #[allow(clippy::suboptimal_flops)]
        Ok(10.0 * x.len() as Float
            + x.iter()
                .map(|xi| xi.powi(2) - 10.0 * Float::cos(2.0 * PI * xi))
                .sum::<Float>())
    }
}
