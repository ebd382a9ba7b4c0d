use crate::{DVector, Float};
use fastrand::Rng;
use fastrand_contrib::RngExt;
use parking_lot::Once;
use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) fn generate_random_vector(
    dimension: usize,
    lb: Float,
    ub: Float,
    rng: &mut Rng,
) -> DVector<Float> {
    DVector::from_vec((0..dimension).map(|_| rng.range(lb, ub)).collect())
}

/// A helper trait to get feature-gated floating-point random values
pub trait SampleFloat {
    /// Get a random value in a range
    fn range(&mut self, lower: Float, upper: Float) -> Float;
    /// Get a random value in the range [0, 1)
    fn float(&mut self) -> Float;
}
impl SampleFloat for Rng {
    #[cfg(not(feature = "f32"))]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        self.f64_range(lower..upper)
    }
    #[cfg(feature = "f32")]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        self.f32_range(lower..upper)
    }
    #[cfg(not(feature = "f32"))]
    fn float(&mut self) -> Float {
        self.f64()
    }
    #[cfg(feature = "f32")]
    fn float(&mut self) -> Float {
        self.f32()
    }
}

static WARNINGS_ENABLED: AtomicBool = AtomicBool::new(true);
static WARNINGS_SET_BY_ENV: AtomicBool = AtomicBool::new(false);
static WARNINGS_OVERRIDE: AtomicBool = AtomicBool::new(false);
static INIT: Once = Once::new();

fn init_env_override() {
    INIT.call_once(|| {
        if let Ok(val) = std::env::var("SWARMKIT_WARNINGS") {
            if val == "0" {
                WARNINGS_SET_BY_ENV.store(true, Ordering::Relaxed);
                WARNINGS_ENABLED.store(false, Ordering::Relaxed);
            }
            if val == "1" {
                WARNINGS_SET_BY_ENV.store(true, Ordering::Relaxed);
                WARNINGS_ENABLED.store(true, Ordering::Relaxed);
            }
        }
    });
}

fn try_set_warnings_override(value: bool) {
    init_env_override();
    if WARNINGS_SET_BY_ENV.load(Ordering::Relaxed) {
        return;
    }
    let already_set = WARNINGS_OVERRIDE.swap(true, Ordering::Relaxed);
    if !already_set {
        WARNINGS_ENABLED.store(value, Ordering::Relaxed);
    }
}

/// A method which can force-enable warnings which may be disabled by dependencies.
///
/// This method will still not enable warnings if the environment variable `SWARMKIT_WARNINGS=0`.
pub fn enable_warnings() {
    try_set_warnings_override(true);
}

/// A method which can force-disable warnings which may be enabled by dependencies.
///
/// This method will still not disable warnings if the environment variable `SWARMKIT_WARNINGS=1`.
pub fn disable_warnings() {
    try_set_warnings_override(false);
}

/// Returns `true` if warnings are enabled.
///
/// Warnings are enabled by default and can be disabled either by setting the environment variable
/// `SWARMKIT_WARNINGS=0` or by calling [`disable_warnings`] first. The first call of
/// [`enable_warnings`] or [`disable_warnings`] wins over any later call. Setting
/// `SWARMKIT_WARNINGS=1` will force-enable warnings regardless of any calls to
/// [`disable_warnings`]. In all cases, the environment variable takes precedence.
pub fn should_warn() -> bool {
    init_env_override();
    WARNINGS_ENABLED.load(Ordering::Relaxed)
}

/// Conditionally warns the user (warns by default).
///
/// See [`should_warn`] for details on how to conditionally enable and disable warnings.
pub fn maybe_warn(msg: &str) {
    if should_warn() {
        eprintln!("Warning: {msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_vector_in_range() {
        let mut rng = Rng::with_seed(0);
        let v = generate_random_vector(1000, -1.0, 1.0, &mut rng);
        assert_eq!(v.len(), 1000);
        assert!(v.iter().all(|vi| (-1.0..1.0).contains(vi)));
        // a thousand draws should not all land on one side of zero
        assert!(v.iter().any(|vi| *vi < 0.0));
        assert!(v.iter().any(|vi| *vi > 0.0));
    }

    #[test]
    fn test_float_in_unit_interval() {
        let mut rng = Rng::with_seed(1);
        for _ in 0..1000 {
            let u = rng.float();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        let va = generate_random_vector(16, -3.0, 3.0, &mut a);
        let vb = generate_random_vector(16, -3.0, 3.0, &mut b);
        assert_eq!(va, vb);
        assert_eq!(a.float(), b.float());
    }
}
