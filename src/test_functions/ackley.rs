use crate::{traits::CostFunction, DVector, Float, E, PI};
use std::convert::Infallible;

/// The Ackley function, a nearly flat outer region around a deep hole at the origin, covered in
/// many shallow local minima.
///
/// ```math
/// f(\vec{x}) = s \left[-20 \exp\left(-0.2\sqrt{\frac{1}{n}\sum_{i=1}^n x_i^2}\right) - \exp\left(\frac{1}{n}\sum_{i=1}^n \cos(2\pi x_i)\right) + 20 + e\right]
/// ```
/// with a global minimum $`f(\vec{0}) = 0`$.
#[derive(Clone, Copy, Debug)]
pub struct Ackley {
    /// The scale factor $`s`$ (default = `1.0`).
    pub scale: Float,
}
impl Default for Ackley {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
impl<U> CostFunction<U> for Ackley {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut U) -> Result<Float, Infallible> {
        let n = x.len() as Float;
        let mean_square = x.norm_squared() / n;
        let mean_cos = x.iter().map(|xi| Float::cos(2.0 * PI * xi)).sum::<Float>() / n;
        Ok(self.scale
            * (-20.0 * Float::exp(-0.2 * mean_square.sqrt()) - Float::exp(mean_cos) + 20.0 + E))
    }
}
