//! Magnon S(Q,E): symmetric spin-wave branches broadened by Gaussians,
//! weighted by the Bose factor, on top of an incoherent elastic line.
//!
//! ```text
//! S(Q,E) = S0 · Σ_b G(E; E_b, σ_b, w_b) · n(E, T) + G(E; 0, σ_inc, A_inc)
//! ```
//!
//! Branches with zero weight and an incoherent line with zero amplitude are
//! skipped entirely, so their widths are never checked.

mod inverse;
mod params;
mod vars;

pub use inverse::{InverseConfig, InverseError};
pub use params::MagnonParams;

pub(super) use inverse::momentum_at_energy;
pub(super) use vars::{set_var, vars};

use crate::support::{
    dispersion::Branches,
    evaluation::EvalError,
    lineshape::Gaussian,
    occupation::bose_cutoff,
    reciprocal::{Hkl, QePoint},
};

/// The zone centre `q` is measured from.
pub(super) fn zone_centre(params: &MagnonParams, q: Hkl) -> Hkl {
    if params.nearest_zone_centre {
        q.nearest_lattice_point()
    } else {
        params.zone_centre
    }
}

/// Momentum distance `|Q − G|`.
pub(super) fn reduced_momentum(params: &MagnonParams, q: Hkl) -> f64 {
    q.distance(zone_centre(params, q))
}

/// Dispersion branches at `q`.
///
/// An unrecognised dispersion selector yields [`Branches::none`].
pub(super) fn dispersion(params: &MagnonParams, q: Hkl) -> Branches {
    let Some(kind) = params.dispersion.kind() else {
        return Branches::none();
    };

    let energy = kind.energy(reduced_momentum(params, q), params.stiffness, params.offset);
    Branches::symmetric(energy, params.weights)
}

/// Scattering intensity at `point`.
///
/// With no active branch (an unrecognised dispersion selector, or both
/// weights zero) only the incoherent line is returned, so the temperature
/// and cutoff are not checked and `T = 0` still gives the incoherent value.
///
/// # Errors
///
/// Returns an [`EvalError`] for a non-positive linewidth or temperature, a
/// diverging Bose factor, or an invalid cutoff.
pub(super) fn intensity(params: &MagnonParams, point: QePoint) -> Result<f64, EvalError> {
    let energy = point.energy;
    let branches = dispersion(params, point.q);

    let mut magnetic = 0.0;
    for ((centre, weight), (width, sigma)) in branches.iter().zip(params.branch_sigmas()) {
        if weight == 0.0 {
            continue;
        }
        let peak = Gaussian::new(centre, sigma, weight).map_err(EvalError::linewidth(width))?;
        magnetic += peak.at(energy);
    }

    let incoherent = if params.inc_amp == 0.0 {
        0.0
    } else {
        Gaussian::new(0.0, params.inc_sigma, params.inc_amp)
            .map_err(EvalError::linewidth("inc_sigma"))?
            .at(energy)
    };

    if branches.is_none() {
        return Ok(incoherent);
    }

    let occupation = bose_cutoff(
        energy,
        params.temperature,
        params.bose_cutoff,
        params.occupation,
    )?;

    Ok(params.s0 * magnetic * occupation + incoherent)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{
        constraint::ConstraintError,
        dispersion::{DispersionKind, DispersionSelector},
        lineshape::gauss,
        occupation::{CutoffPolicy, Occupation, SignConvention},
    };

    fn at(h: f64, k: f64, l: f64, energy: f64) -> QePoint {
        QePoint::new(h, k, l, energy)
    }

    #[test]
    fn reference_point() {
        let params = MagnonParams::default();

        let branches = dispersion(&params, Hkl::new(1.1, 0.9, 0.0));
        assert_relative_eq!(branches.energies[0], 0.4, max_relative = 1e-12);
        assert_relative_eq!(branches.energies[1], -0.4, max_relative = 1e-12);
        assert_eq!(branches.weights, [1.0, 1.0]);

        let on_resonance = intensity(&params, at(1.1, 0.9, 0.0, 0.4)).unwrap();
        assert_relative_eq!(on_resonance, 1_299.181_245_002_001_6, max_relative = 1e-9);

        let off_resonance = intensity(&params, at(1.1, 0.9, 0.0, 1.0)).unwrap();
        assert!(off_resonance < 1e-100);
    }

    #[test]
    fn anti_stokes_side_is_weaker() {
        let params = MagnonParams::default();
        let stokes = intensity(&params, at(1.1, 0.9, 0.0, 0.4)).unwrap();
        let anti_stokes = intensity(&params, at(1.1, 0.9, 0.0, -0.4)).unwrap();

        assert_relative_eq!(anti_stokes, 1_279.234_130_981_929_9, max_relative = 1e-9);
        assert!(anti_stokes < stokes);
    }

    #[test]
    fn antiferromagnetic_branches_are_linear() {
        let params = MagnonParams {
            dispersion: DispersionKind::Antiferromagnetic.into(),
            stiffness: 10.0,
            offset: 0.5,
            ..MagnonParams::default()
        };

        let branches = dispersion(&params, Hkl::new(1.0, 1.3, 0.4));
        assert_relative_eq!(branches.energies[0], 10.0 * 0.5 + 0.5, max_relative = 1e-12);
        assert_relative_eq!(branches.energies[1], -5.5, max_relative = 1e-12);
    }

    #[test]
    fn nearest_zone_centre() {
        let params = MagnonParams {
            nearest_zone_centre: true,
            ..MagnonParams::default()
        };

        // Nearest lattice point to (2.1, 0, 0) is (2, 0, 0), not (1, 1, 0).
        assert_relative_eq!(
            reduced_momentum(&params, Hkl::new(2.1, 0.0, 0.0)),
            0.1,
            max_relative = 1e-9
        );
    }

    #[test]
    fn unrecognised_dispersion_leaves_incoherent_line() {
        let params = MagnonParams {
            dispersion: DispersionSelector::Unrecognized(3.0),
            ..MagnonParams::default()
        };

        assert_eq!(dispersion(&params, Hkl::new(1.1, 0.9, 0.0)), Branches::none());

        let s = intensity(&params, at(1.1, 0.9, 0.0, 0.01)).unwrap();
        assert_relative_eq!(s, gauss(0.01, 0.0, 0.02, 1.0).unwrap(), max_relative = 1e-14);
    }

    #[test]
    fn zero_linewidth_is_a_fault() {
        let params = MagnonParams {
            sigma: 0.0,
            ..MagnonParams::default()
        };

        assert_eq!(
            intensity(&params, at(1.1, 0.9, 0.0, 0.4)),
            Err(EvalError::Linewidth {
                width: "sigma",
                source: ConstraintError::Zero
            })
        );
    }

    #[test]
    fn zero_incoherent_width_is_a_fault_unless_disabled() {
        let mut params = MagnonParams {
            inc_sigma: 0.0,
            ..MagnonParams::default()
        };
        assert!(matches!(
            intensity(&params, at(1.1, 0.9, 0.0, 0.4)),
            Err(EvalError::Linewidth {
                width: "inc_sigma",
                ..
            })
        ));

        params.inc_amp = 0.0;
        assert!(intensity(&params, at(1.1, 0.9, 0.0, 0.4)).is_ok());
    }

    #[test]
    fn zero_temperature_without_branches_keeps_incoherent_line() {
        let params = MagnonParams {
            temperature: 0.0,
            weights: [0.0, 0.0],
            ..MagnonParams::default()
        };

        let s = intensity(&params, at(1.1, 0.9, 0.0, 0.0)).unwrap();
        assert_relative_eq!(s, gauss(0.0, 0.0, 0.02, 1.0).unwrap(), max_relative = 1e-14);
    }

    #[test]
    fn zero_temperature_is_a_fault() {
        let params = MagnonParams {
            temperature: 0.0,
            ..MagnonParams::default()
        };

        assert_eq!(
            intensity(&params, at(1.1, 0.9, 0.0, 0.4)),
            Err(EvalError::Temperature(ConstraintError::Zero))
        );
    }

    #[test]
    fn zero_weight_branch_is_skipped() {
        let params = MagnonParams {
            weights: [1.0, 0.0],
            sigma_annihilate: 0.0,
            single_sigma: false,
            ..MagnonParams::default()
        };

        let with_both = intensity(&MagnonParams::default(), at(1.1, 0.9, 0.0, 0.4)).unwrap();
        let creation_only = intensity(&params, at(1.1, 0.9, 0.0, 0.4)).unwrap();

        // The annihilation branch at −0.4 contributes nothing measurable at +0.4.
        assert_relative_eq!(creation_only, with_both, max_relative = 1e-12);
    }

    #[test]
    fn separate_linewidths() {
        let narrow = MagnonParams {
            single_sigma: false,
            sigma_annihilate: 0.01,
            ..MagnonParams::default()
        };
        let wide = MagnonParams {
            sigma_annihilate: 0.04,
            ..narrow.clone()
        };

        let point = at(1.1, 0.9, 0.0, -0.4);
        let s_narrow = intensity(&narrow, point).unwrap();
        let s_wide = intensity(&wide, point).unwrap();

        assert_relative_eq!(s_narrow / s_wide, 4.0, max_relative = 1e-6);
    }

    #[test]
    fn elastic_line_with_cutoff_is_finite() {
        let params = MagnonParams::default();
        let s = intensity(&params, at(1.0, 1.0, 0.0, 0.0)).unwrap();
        assert!(s.is_finite() && s > 0.0);

        let no_cutoff = MagnonParams {
            bose_cutoff: 0.0,
            ..MagnonParams::default()
        };
        assert_eq!(
            intensity(&no_cutoff, at(1.0, 1.0, 0.0, 0.0)),
            Err(EvalError::Divergent { energy: 0.0 })
        );
    }

    #[test]
    fn conventions_are_configurable() {
        let gain = MagnonParams {
            occupation: Occupation {
                convention: SignConvention::Gain,
                cutoff_policy: CutoffPolicy::Clamp,
            },
            ..MagnonParams::default()
        };

        let loss_side = intensity(&MagnonParams::default(), at(1.1, 0.9, 0.0, 0.4)).unwrap();
        let gain_side = intensity(&gain, at(1.1, 0.9, 0.0, -0.4)).unwrap();

        // Symmetric branches: flipping the convention mirrors the spectrum.
        assert_relative_eq!(gain_side, loss_side, max_relative = 1e-12);
    }
}
