use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{core::OptimizeMode, Float};

use super::{Bound, Bounds};

/// A struct that holds the results of a swarm optimization run.
///
/// The best point is reported twice: `fitness` is the internal value the swarm maximized, and `fx`
/// is the objective's own value at `x` (for [`OptimizeMode::Minimize`] these differ in sign). All
/// three of `x`, `fx` and `fitness` are [`None`] when no evaluation took place (a run with zero
/// iterations).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SwarmSummary {
    /// The bounds of the parameters.
    pub bounds: Bounds,
    /// The names of the parameters. This is `None` if no names were set.
    pub parameter_names: Option<Vec<String>>,
    /// A message describing how the run ended.
    pub message: String,
    /// Whether the objective was minimized or maximized.
    pub mode: OptimizeMode,
    /// The starting point shared by all particles.
    pub x0: Vec<Float>,
    /// The best position found by the swarm.
    pub x: Option<Vec<Float>>,
    /// The objective value at [`SwarmSummary::x`]. This is also [`None`] when the best point only
    /// carries the penalty of [`NonFinitePolicy::Penalize`](crate::algorithms::particles::NonFinitePolicy::Penalize).
    pub fx: Option<Float>,
    /// The internal fitness at [`SwarmSummary::x`].
    pub fitness: Option<Float>,
    /// The number of particles in the swarm.
    pub n_particles: usize,
    /// The number of completed iterations.
    pub iterations: usize,
    /// The number of objective evaluations.
    pub cost_evals: usize,
}

impl SwarmSummary {
    /// Set the names associated with each parameter.
    pub fn with_parameter_names(mut self, parameter_names: &[String]) -> Self {
        self.parameter_names = Some(parameter_names.to_vec());
        self
    }
    /// Returns the best position and objective value, or [`None`] if the run never evaluated the
    /// objective.
    pub fn best(&self) -> Option<(&[Float], Float)> {
        match (&self.x, self.fx) {
            (Some(x), Some(fx)) => Some((x.as_slice(), fx)),
            _ => None,
        }
    }
}

fn fmt_opt(value: Option<Float>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| format!("{:+.5E}", v))
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = format!(
            "╒══════════════════════════════════════════════════════════════════════════════╕
│{:^78}│",
            "SWARM RESULTS",
        );
        let status = format!(
            "╞═════════════════════════╤══════════════════════════╤═══════════╤═════════════╡
│ Mode: {:<17} │ f(x): {:>18} │ #it: {:>4} │ #f: {:>7} │",
            self.mode,
            fmt_opt(self.fx),
            self.iterations,
            self.cost_evals,
        );
        let message = format!(
            "├─────────────────────────┴──────────────────────────┴───────────┴─────────────┤
│ Message: {:<67} │",
            self.message,
        );
        let header = "├──────────────╥────────────────┬────────────────┬────────────────┬───────────┤
│ Parameter    ║          Value │        Initial │  -Bound/+Bound │ At Limit? │
├──────────────╫────────────────┼────────────────┼────────────────┼───────────┤"
            .to_string();
        let names = self.parameter_names.clone().unwrap_or_else(|| {
            (0..self.x0.len())
                .map(|i| format!("x_{}", i))
                .collect::<Vec<_>>()
        });
        let mut rows: Vec<String> = vec![];
        for i in 0..self.x0.len() {
            let value = self.x.as_ref().and_then(|x| x.get(i).copied());
            let bound = self.bounds.get(i).copied().unwrap_or(Bound::NoBound);
            rows.push(format!(
                "│ {:<12} ║ {:>14} │ {:>+14.5E} │ {:>14} │ {:^9} │",
                names.get(i).map_or("", String::as_str),
                fmt_opt(value),
                self.x0[i],
                format!("{:.2}/{:.2}", bound.lower(), bound.upper()),
                if value.map_or(false, |v| bound.at_bound(v)) {
                    "yes"
                } else {
                    ""
                }
            ));
        }
        let bottom = "└──────────────╨────────────────┴────────────────┴────────────────┴───────────┘"
            .to_string();
        let out = [title, status, message, header, rows.join("\n"), bottom].join("\n");
        write!(f, "{}", out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let result = SwarmSummary {
            bounds: [(-10.0, 10.0), (-10.0, 10.0)].into_iter().collect(),
            parameter_names: None,
            message: "Maximum number of steps reached (100)".to_string(),
            mode: OptimizeMode::Minimize,
            x0: vec![0.8, 1.2],
            x: Some(vec![0.0, 10.0]),
            fx: Some(0.5),
            fitness: Some(-0.5),
            n_particles: 20,
            iterations: 100,
            cost_evals: 2000,
        };
        let s = result.to_string();
        assert!(s.contains("SWARM RESULTS"));
        assert!(s.contains("x_0"));
        assert!(s.contains("yes"));
        assert_eq!(result.best(), Some((&[0.0, 10.0][..], 0.5)));
    }

    #[test]
    fn test_unset_summary() {
        let result = SwarmSummary {
            x0: vec![1.0],
            ..Default::default()
        }
        .with_parameter_names(&["alpha".to_string()]);
        assert!(result.best().is_none());
        let s = result.to_string();
        assert!(s.contains("unset"));
        assert!(s.contains("alpha"));
    }
}
