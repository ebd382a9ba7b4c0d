use crate::{core::SwarmError, DVector, Float};
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    ops::Deref,
};

/// An enum that describes a bound/limit on a parameter in an optimization.
///
/// Infinite endpoints are folded into the one-sided variants when converting from a tuple, so
/// `(Float::NEG_INFINITY, 3.0)` becomes [`Bound::UpperBound`]. A particle which leaves its bound
/// is placed back on the nearest endpoint.
#[derive(Default, Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Bound {
    #[default]
    /// `(-inf, +inf)`
    NoBound,
    /// `[min, +inf)`
    LowerBound(Float),
    /// `(-inf, max]`
    UpperBound(Float),
    /// `[min, max]`
    LowerAndUpperBound(Float, Float),
}
impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lower(), self.upper())
    }
}
impl From<(Float, Float)> for Bound {
    fn from(value: (Float, Float)) -> Self {
        // NaN endpoints and inverted pairs are kept as-is so that validation can report them
        if value.0.is_nan() || value.1.is_nan() || value.0 > value.1 {
            return Self::LowerAndUpperBound(value.0, value.1);
        }
        match (value.0.is_finite(), value.1.is_finite()) {
            (true, true) => Self::LowerAndUpperBound(value.0, value.1),
            (true, false) => Self::LowerBound(value.0),
            (false, true) => Self::UpperBound(value.1),
            (false, false) if value.0 < 0.0 && value.1 > 0.0 => Self::NoBound,
            // (+inf, +inf) and (-inf, -inf) contain no finite point
            (false, false) => Self::LowerAndUpperBound(value.0, value.1),
        }
    }
}
impl From<(Option<Float>, Option<Float>)> for Bound {
    fn from(value: (Option<Float>, Option<Float>)) -> Self {
        match (value.0, value.1) {
            (Some(lb), Some(ub)) => Self::LowerAndUpperBound(lb, ub),
            (Some(lb), None) => Self::LowerBound(lb),
            (None, Some(ub)) => Self::UpperBound(ub),
            (None, None) => Self::NoBound,
        }
    }
}

impl Bound {
    /// Checks whether the given `value` is compatible with the bounds.
    pub fn contains(&self, value: Float) -> bool {
        match self {
            Self::NoBound => true,
            Self::LowerBound(lb) => value >= *lb,
            Self::UpperBound(ub) => value <= *ub,
            Self::LowerAndUpperBound(lb, ub) => value >= *lb && value <= *ub,
        }
    }
    /// Returns the lower bound or `-inf` if there is none.
    pub const fn lower(&self) -> Float {
        match self {
            Self::NoBound => Float::NEG_INFINITY,
            Self::LowerBound(lb) => *lb,
            Self::UpperBound(_) => Float::NEG_INFINITY,
            Self::LowerAndUpperBound(lb, _) => *lb,
        }
    }
    /// Returns the upper bound or `+inf` if there is none.
    pub const fn upper(&self) -> Float {
        match self {
            Self::NoBound => Float::INFINITY,
            Self::LowerBound(_) => Float::INFINITY,
            Self::UpperBound(ub) => *ub,
            Self::LowerAndUpperBound(_, ub) => *ub,
        }
    }
    /// Checks if the given value is equal to one of the bounds.
    pub fn at_bound(&self, value: Float) -> bool {
        match self {
            Self::NoBound => false,
            Self::LowerBound(lb) => value == *lb,
            Self::UpperBound(ub) => value == *ub,
            Self::LowerAndUpperBound(lb, ub) => value == *lb || value == *ub,
        }
    }
    /// Moves `value` onto the nearest endpoint if it lies outside the bound.
    ///
    /// The upper endpoint is checked first, so for a (valid) bound this is the usual clamp.
    pub fn clamp(&self, value: Float) -> Float {
        let mut value = value;
        if value > self.upper() {
            value = self.upper();
        }
        if value < self.lower() {
            value = self.lower();
        }
        value
    }
    /// Returns `true` if the bound has no `NaN` endpoint, `lower <= upper`, and at least one
    /// finite value lies inside it.
    pub fn is_valid(&self) -> bool {
        let (lb, ub) = (self.lower(), self.upper());
        !lb.is_nan() && !ub.is_nan() && lb <= ub && lb < Float::INFINITY && ub > Float::NEG_INFINITY
    }
}

/// A set of [`Bound`]s, one per parameter.
#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bounds(Vec<Bound>);

impl Bounds {
    /// Checks that every bound is valid.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidBound`] for the first bound with `lower > upper`, a `NaN`
    /// endpoint, or both endpoints at the same infinity.
    pub fn validate<E>(&self) -> Result<(), SwarmError<E>> {
        match self.0.iter().enumerate().find(|(_, b)| !b.is_valid()) {
            Some((index, bound)) => Err(SwarmError::InvalidBound {
                index,
                lower: bound.lower(),
                upper: bound.upper(),
            }),
            None => Ok(()),
        }
    }
    /// Checks whether every coordinate of `x` lies within its bound.
    pub fn contains(&self, x: &DVector<Float>) -> bool {
        x.iter().zip(self.0.iter()).all(|(v, b)| b.contains(*v))
    }
    /// Clamps every coordinate of `x` into its bound in place.
    pub fn clamp(&self, x: &mut DVector<Float>) {
        x.iter_mut()
            .zip(self.0.iter())
            .for_each(|(v, b)| *v = b.clamp(*v));
    }
}

impl Deref for Bounds {
    type Target = Vec<Bound>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl From<Vec<Bound>> for Bounds {
    fn from(value: Vec<Bound>) -> Self {
        Self(value)
    }
}
impl<B: Into<Bound>> FromIterator<B> for Bounds {
    fn from_iter<T: IntoIterator<Item = B>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
