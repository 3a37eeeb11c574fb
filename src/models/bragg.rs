//! Bragg-peak scattering model.
//!
//! [`Bragg`] implements [`SqwModel`] for a fixed list of elastic peaks. It has
//! no dispersion branches.

pub(crate) mod core;

pub use self::core::BraggParams;

use tracing::{info, trace};

use crate::support::{
    dispersion::Branches,
    evaluation::Outcome,
    host::{Var, VarError},
    reciprocal::{Hkl, QePoint, format_hkl_list},
};

use super::SqwModel;

/// Bragg-peak S(Q,E) model.
///
/// ```
/// use sqw_models::{
///     models::{Bragg, SqwModel},
///     support::reciprocal::QePoint,
/// };
///
/// let bragg = Bragg::default();
/// assert!(bragg.intensity(QePoint::new(1.0, 0.0, 0.0, 0.0)) > 1000.0);
/// assert_eq!(bragg.intensity(QePoint::new(0.5, 0.5, 0.0, 0.0)), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bragg {
    params: BraggParams,
}

impl Bragg {
    #[must_use]
    pub fn new(params: BraggParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &BraggParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut BraggParams {
        &mut self.params
    }

    /// Evaluates the intensity at `point`, keeping the reason for a fallback.
    #[must_use]
    pub fn evaluate(&self, point: QePoint) -> Outcome {
        let outcome = Outcome::from_result(core::intensity(&self.params, point));
        if let Outcome::Degenerate(err) = outcome {
            trace!(q = %point.q, energy = point.energy, %err, "degenerate Bragg intensity");
        }
        outcome
    }
}

impl SqwModel for Bragg {
    fn init(&self) {
        info!(
            peaks = %format_hkl_list(&self.params.peaks),
            "Bragg model initialised"
        );
    }

    fn dispersion(&self, _q: Hkl) -> Branches {
        Branches::none()
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
