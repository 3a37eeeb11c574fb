use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while inverting a dispersion curve.
#[derive(Debug, Error)]
pub enum InverseError {
    /// The dispersion selector does not name a known dispersion.
    #[error("unrecognized dispersion selector {code}")]
    Unrecognized {
        /// The selector as the host set it.
        code: f64,
    },

    /// No momentum in the searched range reaches the requested energy.
    #[error("energy {energy} meV is not reached within the search range")]
    OutOfRange {
        /// The requested energy.
        energy: f64,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best energy residual achieved, in meV.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
