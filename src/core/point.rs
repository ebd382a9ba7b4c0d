use crate::{DVector, Float};
use serde::{Deserialize, Serialize};

/// Describes a recorded point in parameter space together with its fitness.
///
/// Points are used for the personal best of each particle and for the global best of a swarm. A
/// point whose `fx` is [`None`] is *unset*: nothing has been recorded yet.
#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
pub struct Point<I = DVector<Float>> {
    /// the point's position
    pub x: I,
    /// the point's fitness (`None` if nothing has been recorded)
    pub fx: Option<Float>,
}
impl<I> Point<I> {
    /// Returns `true` if a fitness has been recorded.
    pub const fn is_set(&self) -> bool {
        self.fx.is_some()
    }
    /// Returns `true` if recording `fitness` would replace this point: either the point is unset
    /// or `fitness` is strictly greater than the recorded fitness.
    pub fn is_improved_by(&self, fitness: Float) -> bool {
        self.fx.map_or(true, |best| fitness > best)
    }
    /// Convert the [`Point`] into an optional `I`-`Float` tuple, [`None`] if the point is unset.
    pub fn destructure(self) -> Option<(I, Float)> {
        let fx = self.fx?;
        Some((self.x, fx))
    }
}
impl Point<DVector<Float>> {
    /// An unset point in a `dimension`-dimensional space.
    pub fn unset(dimension: usize) -> Self {
        Self {
            x: DVector::zeros(dimension),
            fx: None,
        }
    }
    /// Record `x` and `fitness`, copying the coordinates into the point's own storage.
    pub fn record(&mut self, x: &DVector<Float>, fitness: Float) {
        self.x.clone_from(x);
        self.fx = Some(fitness);
    }
}
