use crate::{traits::CostFunction, DVector, Float};
use std::convert::Infallible;

/// The Zakharov function, a plate-shaped function with its minimum $`f(\vec{0}) = 0`$.
///
/// ```math
/// f(\vec{x}) = \sum_{i=0}^{n-1} x_i^2 + \left(\frac{1}{2}\sum_{i=0}^{n-1} i x_i\right)^2 + \left(\frac{1}{2}\sum_{i=0}^{n-1} i x_i\right)^4
/// ```
///
/// The weights $`i`$ count from zero, so the first coordinate only enters through the sum of
/// squares.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zakharov;

impl<U> CostFunction<U> for Zakharov {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut U) -> Result<Float, Infallible> {
        let weighted = 0.5
            * x.iter()
                .enumerate()
                .map(|(i, xi)| i as Float * xi)
                .sum::<Float>();
        Ok(x.norm_squared() + weighted.powi(2) + weighted.powi(4))
    }
}
