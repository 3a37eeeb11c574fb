use twine_solvers::equation::bisection;

/// Solver configuration for inverting a dispersion curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the momentum distance, in r.l.u.
    pub q_tol: f64,

    /// Absolute tolerance on the energy residual, in meV.
    pub energy_tol: f64,

    /// Upper end of the searched momentum range `[0, q_max]`, in r.l.u.
    pub q_max: f64,
}

impl Default for InverseConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            q_tol: 1e-12,
            energy_tol: 1e-12,
            q_max: 10.0,
        }
    }
}

impl InverseConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.q_tol,
            x_rel_tol: 0.0,
            residual_tol: self.energy_tol,
        }
    }
}
