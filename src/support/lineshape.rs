//! Gaussian lineshape.
//!
//! The same normalised Gaussian broadens the magnon branches in energy,
//! models the incoherent elastic line and, in the Bragg model, the mosaic
//! width in momentum.

use std::f64::consts::TAU;

use super::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// A normalised Gaussian peak with amplitude `amp`.
///
/// `amp · exp(−(x−x0)² / 2σ²) / (σ·√(2π))` integrates to `amp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    centre: f64,
    sigma: Constrained<f64, StrictlyPositive>,
    amp: f64,
}

impl Gaussian {
    /// Creates a Gaussian centred on `centre`.
    ///
    /// # Errors
    ///
    /// Returns an error if `sigma` is zero, negative or `NaN`.
    pub fn new(centre: f64, sigma: f64, amp: f64) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            centre,
            StrictlyPositive::new(sigma)?,
            amp,
        ))
    }

    /// Creates a Gaussian from a pre-validated width.
    #[must_use]
    pub fn from_constrained(
        centre: f64,
        sigma: Constrained<f64, StrictlyPositive>,
        amp: f64,
    ) -> Self {
        Self { centre, sigma, amp }
    }

    /// Evaluates the peak at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        let sigma = self.sigma.get();
        let z = (x - self.centre) / sigma;
        self.amp * (-0.5 * z * z).exp() / (TAU.sqrt() * sigma)
    }

    /// Returns the peak height, `amp / (σ·√(2π))`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.at(self.centre)
    }
}

/// Evaluates a normalised Gaussian at `x`.
///
/// ```
/// use sqw_models::support::lineshape::gauss;
///
/// let peak = gauss(0.4, 0.4, 0.02, 1.0).unwrap();
/// assert!((peak - 19.947_114).abs() < 1e-6);
///
/// assert!(gauss(0.0, 0.0, 0.0, 1.0).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if `sigma` is zero, negative or `NaN`.
pub fn gauss(x: f64, x0: f64, sigma: f64, amp: f64) -> ConstraintResult<f64> {
    Ok(Gaussian::new(x0, sigma, amp)?.at(x))
}
