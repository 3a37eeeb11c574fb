//! Magnon dispersion relations and the branch pair a dispersion query returns.

use serde::{Deserialize, Serialize};

/// The closed set of dispersion relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispersionKind {
    /// Quadratic: `E(q) = D·q² + Δ`.
    Ferromagnetic,

    /// Linear: `E(q) = D·q + Δ`.
    Antiferromagnetic,
}

impl DispersionKind {
    const ALL: [Self; 2] = [Self::Ferromagnetic, Self::Antiferromagnetic];

    /// The host's numeric selector for this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Ferromagnetic => 0,
            Self::Antiferromagnetic => 1,
        }
    }

    /// Looks up a kind by its numeric selector.
    ///
    /// Only exact matches count, so `1.0` selects
    /// [`DispersionKind::Antiferromagnetic`] and `0.5` selects nothing.
    #[must_use]
    pub fn from_code(code: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| f64::from(kind.code()) == code)
    }

    /// Excitation energy at momentum distance `q` from the zone centre.
    ///
    /// ```
    /// use sqw_models::support::dispersion::DispersionKind;
    ///
    /// assert_eq!(DispersionKind::Ferromagnetic.energy(0.5, 20.0, 1.0), 6.0);
    /// assert_eq!(DispersionKind::Antiferromagnetic.energy(0.5, 20.0, 1.0), 11.0);
    /// ```
    #[must_use]
    pub fn energy(self, q: f64, stiffness: f64, offset: f64) -> f64 {
        match self {
            Self::Ferromagnetic => stiffness * q * q + offset,
            Self::Antiferromagnetic => stiffness * q + offset,
        }
    }
}

/// A dispersion selector as the host sets it.
///
/// The host assigns a raw number; anything that is not exactly one of the
/// known codes is kept as [`DispersionSelector::Unrecognized`] and evaluates
/// to "no excitation".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub enum DispersionSelector {
    Known(DispersionKind),
    Unrecognized(f64),
}

impl DispersionSelector {
    /// Returns the selected kind, if recognised.
    #[must_use]
    pub fn kind(self) -> Option<DispersionKind> {
        match self {
            Self::Known(kind) => Some(kind),
            Self::Unrecognized(_) => None,
        }
    }

    /// The raw selector value.
    #[must_use]
    pub fn code(self) -> f64 {
        match self {
            Self::Known(kind) => f64::from(kind.code()),
            Self::Unrecognized(code) => code,
        }
    }
}

impl Default for DispersionSelector {
    fn default() -> Self {
        Self::Known(DispersionKind::Ferromagnetic)
    }
}

impl From<f64> for DispersionSelector {
    fn from(code: f64) -> Self {
        DispersionKind::from_code(code).map_or(Self::Unrecognized(code), Self::Known)
    }
}

impl From<DispersionSelector> for f64 {
    fn from(selector: DispersionSelector) -> Self {
        selector.code()
    }
}

impl From<DispersionKind> for DispersionSelector {
    fn from(kind: DispersionKind) -> Self {
        Self::Known(kind)
    }
}

/// Energies and spectral weights of the two dispersion branches.
///
/// Index 0 is the creation branch (`+E`), index 1 the annihilation branch
/// (`−E`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branches {
    pub energies: [f64; 2],
    pub weights: [f64; 2],
}

impl Branches {
    /// No excitation: zero energies with zero weight.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            energies: [0.0; 2],
            weights: [0.0; 2],
        }
    }

    /// Symmetric branches at `+energy` and `−energy`.
    #[must_use]
    pub fn symmetric(energy: f64, weights: [f64; 2]) -> Self {
        Self {
            energies: [energy, -energy],
            weights,
        }
    }

    /// Iterates over `(energy, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energies.iter().copied().zip(self.weights.iter().copied())
    }

    /// Returns `true` if every branch carries zero weight.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn ferromagnetic_is_monotonic() {
        let kind = DispersionKind::Ferromagnetic;
        let energies: Vec<f64> = (0..=100)
            .map(|i| kind.energy(f64::from(i) * 0.01, 20.0, 0.3))
            .collect();

        assert_eq!(energies[0], 0.3);
        assert!(energies.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn antiferromagnetic_is_linear() {
        let kind = DispersionKind::Antiferromagnetic;
        let slope = |q0: f64, q1: f64| {
            (kind.energy(q1, 7.5, 2.0) - kind.energy(q0, 7.5, 2.0)) / (q1 - q0)
        };

        assert_relative_eq!(slope(0.0, 0.1), 7.5, max_relative = 1e-12);
        assert_relative_eq!(slope(0.3, 1.7), 7.5, max_relative = 1e-12);
        assert_eq!(kind.energy(0.0, 7.5, 2.0), 2.0);
    }

    #[test]
    fn selector_codes() {
        assert_eq!(
            DispersionSelector::from(0.0),
            DispersionSelector::Known(DispersionKind::Ferromagnetic)
        );
        assert_eq!(
            DispersionSelector::from(1.0).kind(),
            Some(DispersionKind::Antiferromagnetic)
        );

        let unknown = DispersionSelector::from(7.0);
        assert_eq!(unknown, DispersionSelector::Unrecognized(7.0));
        assert_eq!(unknown.kind(), None);
        assert_eq!(f64::from(unknown), 7.0);
    }

    #[test]
    fn fractional_selector_is_unrecognized() {
        let selector = DispersionSelector::from(0.5);
        assert_eq!(selector, DispersionSelector::Unrecognized(0.5));
        assert_eq!(selector.code(), 0.5);
        assert_eq!(DispersionSelector::from(f64::NAN).kind(), None);
    }

    #[test]
    fn branch_pairs() {
        let branches = Branches::symmetric(0.4, [1.0, 0.5]);
        let pairs: Vec<_> = branches.iter().collect();
        assert_eq!(pairs, vec![(0.4, 1.0), (-0.4, 0.5)]);
        assert!(!branches.is_none());
        assert!(Branches::none().is_none());
    }
}
