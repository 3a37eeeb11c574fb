//! Magnon (spin-wave) scattering model.
//!
//! [`Magnon`] implements [`SqwModel`] for a single pair of symmetric
//! ferromagnetic or antiferromagnetic branches. The computational core is in
//! the internal [`core`] module.

pub(crate) mod core;

pub use self::core::{InverseConfig, InverseError, MagnonParams};

use tracing::{info, trace};

use crate::support::{
    dispersion::Branches,
    evaluation::Outcome,
    host::{Var, VarError},
    reciprocal::{Hkl, QePoint},
};

use super::SqwModel;

/// Magnon S(Q,E) model.
///
/// ```
/// use sqw_models::{
///     models::{Magnon, SqwModel},
///     support::reciprocal::{Hkl, QePoint},
/// };
///
/// let mut magnon = Magnon::default();
/// magnon.set_var("T", "10").unwrap();
/// magnon.init();
///
/// let branches = magnon.dispersion(Hkl::new(1.1, 0.9, 0.0));
/// assert!((branches.energies[0] - 0.4).abs() < 1e-12);
///
/// let s = magnon.intensity(QePoint::new(1.1, 0.9, 0.0, 0.4));
/// assert!(s > 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Magnon {
    params: MagnonParams,
}

impl Magnon {
    #[must_use]
    pub fn new(params: MagnonParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &MagnonParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut MagnonParams {
        &mut self.params
    }

    /// Evaluates the intensity at `point`, keeping the reason for a fallback.
    #[must_use]
    pub fn evaluate(&self, point: QePoint) -> Outcome {
        let outcome = Outcome::from_result(core::intensity(&self.params, point));
        if let Outcome::Degenerate(err) = outcome {
            trace!(q = %point.q, energy = point.energy, %err, "degenerate magnon intensity");
        }
        outcome
    }

    /// Momentum distance from the zone centre at which the creation branch
    /// reaches `energy`.
    ///
    /// # Errors
    ///
    /// See [`InverseError`].
    pub fn momentum_at_energy(
        &self,
        energy: f64,
        config: InverseConfig,
    ) -> Result<f64, InverseError> {
        core::momentum_at_energy(&self.params, energy, config)
    }
}

impl SqwModel for Magnon {
    fn init(&self) {
        let params = &self.params;
        info!(
            zone_centre = %params.zone_centre,
            temperature = params.temperature,
            dispersion = params.dispersion.code(),
            "magnon model initialised"
        );
    }

    fn dispersion(&self, q: Hkl) -> Branches {
        core::dispersion(&self.params, q)
    }

    fn intensity(&self, point: QePoint) -> f64 {
        self.evaluate(point).value()
    }

    fn vars(&self) -> Vec<Var> {
        core::vars(&self.params)
    }

    fn set_var(&mut self, name: &str, value: &str) -> Result<bool, VarError> {
        core::set_var(&mut self.params, name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::evaluation::EvalError;

    #[test]
    fn host_reference_point() {
        let magnon = Magnon::default();
        magnon.init();

        let s = magnon.intensity(QePoint::new(1.1, 0.9, 0.0, 0.4));
        assert_relative_eq!(s, 1_299.181_245_002_001_6, max_relative = 1e-9);
    }

    #[test]
    fn zero_linewidth_evaluates_to_zero() {
        let mut magnon = Magnon::default();
        assert!(magnon.set_var("sig", "0").unwrap());

        let point = QePoint::new(1.1, 0.9, 0.0, 0.4);
        assert_eq!(magnon.intensity(point), 0.0);
        assert!(magnon.evaluate(point).is_degenerate());
    }

    #[test]
    fn zero_temperature_evaluates_to_zero() {
        let mut magnon = Magnon::default();
        assert!(magnon.set_var("T", "0").unwrap());

        let point = QePoint::new(1.1, 0.9, 0.0, 0.4);
        assert_eq!(magnon.intensity(point), 0.0);
        assert!(matches!(
            magnon.evaluate(point),
            Outcome::Degenerate(EvalError::Temperature(_))
        ));
    }

    #[test]
    fn vars_round_trip_between_models() {
        let mut source = Magnon::default();
        source
            .set_vars(&[
                Var::real("D", 7.5),
                Var::real("disp", 1.0),
                Var::choice("bose_policy", "widen"),
            ])
            .unwrap();

        let mut target = Magnon::default();
        target.set_vars(&source.vars()).unwrap();
        assert_eq!(target, source);
    }

    #[test]
    fn clones_are_independent_snapshots() {
        let original = Magnon::default();
        let mut copy = original.clone();
        copy.params_mut().temperature = 10.0;

        let point = QePoint::new(1.1, 0.9, 0.0, 0.4);
        assert!(copy.intensity(point) < original.intensity(point));
    }

    #[test]
    fn inverse_dispersion() {
        let magnon = Magnon::new(MagnonParams {
            stiffness: 25.0,
            ..MagnonParams::default()
        });

        let q = magnon.momentum_at_energy(1.0, InverseConfig::default()).unwrap();
        assert_relative_eq!(q, 0.2, epsilon = 1e-9);
    }
}
