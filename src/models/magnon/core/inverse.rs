//! Inverse dispersion: the momentum distance at which a branch reaches a
//! given energy.
//!
//! Only the creation branch is inverted. The search runs over
//! `|Q − G| ∈ [0, q_max]`, so the result is a distance from the zone centre
//! rather than a point in reciprocal space.

mod config;
mod error;
mod problem;

pub use config::InverseConfig;
pub use error::InverseError;

use twine_solvers::equation::bisection;

use super::MagnonParams;

use problem::{DispersionCurve, TargetEnergy};

/// Finds `q ≥ 0` with `E(q) = energy` by bisection.
///
/// # Errors
///
/// Returns [`InverseError`] if the dispersion selector is unrecognized, if
/// the energy is not bracketed by `E(0)` and `E(q_max)`, or if the solver
/// fails to converge.
pub(in crate::models::magnon) fn momentum_at_energy(
    params: &MagnonParams,
    energy: f64,
    config: InverseConfig,
) -> Result<f64, InverseError> {
    let Some(kind) = params.dispersion.kind() else {
        return Err(InverseError::Unrecognized {
            code: params.dispersion.code(),
        });
    };

    let model = DispersionCurve::new(kind, params.stiffness, params.offset);
    let problem = TargetEnergy::new(energy);

    let at_zero = problem.residual(model.energy(0.0));
    let at_max = problem.residual(model.energy(config.q_max));

    if at_zero == 0.0 {
        return Ok(0.0);
    }
    if at_max == 0.0 {
        return Ok(config.q_max);
    }
    let bracketed = at_zero * at_max < 0.0;
    if !bracketed {
        return Err(InverseError::OutOfRange { energy });
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, config.q_max],
        &config.bisection(),
        |_: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(InverseError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.q)
}
