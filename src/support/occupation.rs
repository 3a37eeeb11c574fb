//! Bose occupation (detailed-balance) factor.
//!
//! For an energy transfer `E` at temperature `T`,
//!
//! ```text
//! n(E, T) = 1 / (exp(|E| / k_B T) − 1)
//! ```
//!
//! with `1` added on the creation side, so the factor directly weights the
//! Stokes and anti-Stokes branches: `bose(+E) = bose(−E) + 1`.
//!
//! The factor diverges at `E → 0`. [`bose_cutoff`] keeps it bounded near the
//! elastic line by moving energies inside `|E| < E_cut` away from zero.
//!
//! Two conventions exist in the wild and both are supported through
//! [`Occupation`]:
//!
//! - [`SignConvention`]: which sign of `E` is the creation side.
//! - [`CutoffPolicy`]: whether energies inside the cutoff are clamped to
//!   `±E_cut` or smoothly widened.

use serde::{Deserialize, Serialize};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::{
    constraint::{NonNegative, StrictlyPositive},
    evaluation::EvalError,
    units::thermal_energy,
};

/// Which sign of the energy transfer gets the `+1` creation term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignConvention {
    /// Positive `E` is neutron energy loss: `+1` for `E ≥ 0`.
    #[default]
    Loss,

    /// Positive `E` is neutron energy gain: `+1` for `E ≤ 0`.
    Gain,
}

/// How energies inside the cutoff window are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutoffPolicy {
    /// Evaluate at `sgn(E)·E_cut` when `|E| < E_cut`, otherwise at `E`.
    #[default]
    Clamp,

    /// Evaluate at `sgn(E)·√(E² + E_cut²)` everywhere.
    ///
    /// Approaches [`CutoffPolicy::Clamp`] far from the elastic line but has no
    /// kink at `±E_cut`.
    Widen,
}

/// Occupation-factor conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Occupation {
    pub convention: SignConvention,
    pub cutoff_policy: CutoffPolicy,
}

impl SignConvention {
    /// Host-facing name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Loss => "loss",
            Self::Gain => "gain",
        }
    }

    /// Parses a host-facing name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "loss" => Some(Self::Loss),
            "gain" => Some(Self::Gain),
            _ => None,
        }
    }
}

impl CutoffPolicy {
    /// Host-facing name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::Widen => "widen",
        }
    }

    /// Parses a host-facing name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clamp" => Some(Self::Clamp),
            "widen" => Some(Self::Widen),
            _ => None,
        }
    }
}

/// Bose factor at energy `energy` (meV) and temperature `temperature` (K).
///
/// # Errors
///
/// Returns [`EvalError::Temperature`] if the temperature is not strictly
/// positive and [`EvalError::Divergent`] at `E = 0`.
pub fn bose(energy: f64, temperature: f64, convention: SignConvention) -> Result<f64, EvalError> {
    let temperature = StrictlyPositive::new(temperature).map_err(EvalError::Temperature)?;
    let kt = thermal_energy(ThermodynamicTemperature::new::<kelvin>(temperature.into_inner()));

    let denominator = (energy.abs() / kt).exp_m1();
    if denominator == 0.0 {
        return Err(EvalError::Divergent { energy });
    }

    let n = 1.0 / denominator;
    let creation = match convention {
        SignConvention::Loss => energy >= 0.0,
        SignConvention::Gain => energy <= 0.0,
    };

    Ok(if creation { n + 1.0 } else { n })
}

/// Bose factor kept finite near the elastic line.
///
/// The cutoff is used as `|cutoff|`; a cutoff of zero disables it.
/// An energy of exactly zero counts as positive.
///
/// ```
/// use sqw_models::support::occupation::{Occupation, bose_cutoff};
///
/// let at_zero = bose_cutoff(0.0, 300.0, 0.02, Occupation::default()).unwrap();
/// let at_cut = bose_cutoff(0.02, 300.0, 0.02, Occupation::default()).unwrap();
/// assert_eq!(at_zero, at_cut);
/// ```
///
/// # Errors
///
/// Returns an error under the same conditions as [`bose`], and
/// [`EvalError::Cutoff`] if the cutoff is `NaN`.
pub fn bose_cutoff(
    energy: f64,
    temperature: f64,
    cutoff: f64,
    occupation: Occupation,
) -> Result<f64, EvalError> {
    let cutoff = NonNegative::new(cutoff.abs())
        .map_err(EvalError::Cutoff)?
        .into_inner();

    let sign = if energy < 0.0 { -1.0 } else { 1.0 };
    let effective = match occupation.cutoff_policy {
        CutoffPolicy::Clamp if energy.abs() < cutoff => sign * cutoff,
        CutoffPolicy::Clamp => energy,
        CutoffPolicy::Widen => sign * energy.hypot(cutoff),
    };

    bose(effective, temperature, occupation.convention)
}
