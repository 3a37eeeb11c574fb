//! Bragg S(Q,E): a sum of resolution-broadened elastic peaks.
//!
//! ```text
//! S(Q,E) = Σ_i G(|Q − G_i|; 0, σ_q, A) · G(E; 0, σ_E, A)
//! ```

mod params;
mod vars;

pub use params::BraggParams;

pub(super) use vars::{set_var, vars};

use crate::support::{evaluation::EvalError, lineshape::Gaussian, reciprocal::QePoint};

/// Scattering intensity at `point`.
///
/// An empty peak list gives `0.0` without checking the widths.
///
/// # Errors
///
/// Returns [`EvalError::Linewidth`] if either width is not strictly positive.
pub(super) fn intensity(params: &BraggParams, point: QePoint) -> Result<f64, EvalError> {
    if params.peaks.is_empty() {
        return Ok(0.0);
    }

    let momentum = Gaussian::new(0.0, params.sigma_q, params.amp)
        .map_err(EvalError::linewidth("sigma_q"))?;
    let elastic = Gaussian::new(0.0, params.sigma_e, params.amp)
        .map_err(EvalError::linewidth("sigma_e"))?
        .at(point.energy);

    Ok(params
        .peaks
        .iter()
        .map(|&peak| momentum.at(point.q.distance(peak)) * elastic)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{constraint::ConstraintError, reciprocal::Hkl};

    #[test]
    fn on_a_lattice_point() {
        let params = BraggParams::default();
        let s = intensity(&params, QePoint::new(1.0, 0.0, 0.0, 0.0)).unwrap();

        // Every other peak is at least 1 r.l.u. away, far beyond σ_q.
        assert_relative_eq!(s, 1_591.549_430_918_953_7, max_relative = 1e-12);
    }

    #[test]
    fn between_peaks_is_dark() {
        let params = BraggParams::default();
        let s = intensity(&params, QePoint::new(0.5, 0.5, 0.0, 0.0)).unwrap();
        assert_eq!(s, 0.0);
    }

    #[test]
    fn energy_width_scales_the_peak() {
        let params = BraggParams {
            peaks: vec![Hkl::new(0.0, 0.0, 1.0)],
            ..BraggParams::default()
        };
        let point = QePoint::new(0.0, 0.0, 1.0, 0.01);

        let s = intensity(&params, point).unwrap();
        let expected = 1.0 / (0.01 * (2.0 * std::f64::consts::PI).sqrt());
        assert_relative_eq!(
            s,
            expected * expected * (-0.5_f64).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_width_is_a_fault() {
        let params = BraggParams {
            sigma_e: 0.0,
            ..BraggParams::default()
        };

        assert_eq!(
            intensity(&params, QePoint::new(1.0, 0.0, 0.0, 0.0)),
            Err(EvalError::Linewidth {
                width: "sigma_e",
                source: ConstraintError::Zero
            })
        );
    }

    #[test]
    fn no_peaks_no_intensity() {
        let params = BraggParams {
            peaks: Vec::new(),
            sigma_q: 0.0,
            ..BraggParams::default()
        };
        assert_eq!(intensity(&params, QePoint::new(1.0, 0.0, 0.0, 0.0)), Ok(0.0));
    }
}
