use serde::{Deserialize, Serialize};

use crate::support::{
    config::{ConfigError, from_toml},
    dispersion::DispersionSelector,
    occupation::Occupation,
    reciprocal::Hkl,
};

/// Parameters of the magnon scattering model.
///
/// Values are stored exactly as the host sets them. Nothing is checked on
/// assignment; a zero linewidth or temperature makes evaluations degenerate
/// rather than failing here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MagnonParams {
    /// Zone centre (Bragg point) in r.l.u. the momentum distance is measured
    /// from. Defaults to (1, 1, 0).
    pub zone_centre: Hkl,

    /// Measure from the integer lattice point nearest Q instead of
    /// `zone_centre`. Off by default.
    pub nearest_zone_centre: bool,

    /// Spin-wave stiffness `D`, in meV·r.l.u.⁻² for the ferromagnetic
    /// dispersion and meV·r.l.u.⁻¹ for the antiferromagnetic one.
    pub stiffness: f64,

    /// Energy gap `Δ` in meV.
    pub offset: f64,

    /// Linewidth in meV of the creation branch, or of both branches when
    /// `single_sigma` is set.
    pub sigma: f64,

    /// Linewidth in meV of the annihilation branch.
    pub sigma_annihilate: f64,

    /// Use `sigma` for both branches.
    pub single_sigma: bool,

    /// Spectral weights of the creation and annihilation branches.
    pub weights: [f64; 2],

    /// Intensity scale `S0`.
    pub s0: f64,

    /// Width in meV of the incoherent elastic line.
    pub inc_sigma: f64,

    /// Amplitude of the incoherent elastic line; zero disables it.
    pub inc_amp: f64,

    /// Sample temperature in kelvin.
    pub temperature: f64,

    /// Bose-factor cutoff energy in meV, used as its absolute value.
    pub bose_cutoff: f64,

    /// Dispersion selector: 0 ferromagnetic, 1 antiferromagnetic.
    pub dispersion: DispersionSelector,

    /// Occupation-factor conventions.
    pub occupation: Occupation,
}

impl Default for MagnonParams {
    fn default() -> Self {
        Self {
            zone_centre: Hkl::new(1.0, 1.0, 0.0),
            nearest_zone_centre: false,
            stiffness: 20.0,
            offset: 0.0,
            sigma: 0.02,
            sigma_annihilate: 0.02,
            single_sigma: true,
            weights: [1.0, 1.0],
            s0: 1.0,
            inc_sigma: 0.02,
            inc_amp: 1.0,
            temperature: 300.0,
            bose_cutoff: 0.02,
            dispersion: DispersionSelector::default(),
            occupation: Occupation::default(),
        }
    }
}

impl MagnonParams {
    /// Loads a parameter snapshot from TOML; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] on malformed TOML or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        from_toml(text)
    }

    /// Linewidths of the creation and annihilation branches, with the name
    /// of the parameter each one comes from.
    pub(super) fn branch_sigmas(&self) -> [(&'static str, f64); 2] {
        if self.single_sigma {
            [("sigma", self.sigma), ("sigma", self.sigma)]
        } else {
            [
                ("sigma", self.sigma),
                ("sigma_annihilate", self.sigma_annihilate),
            ]
        }
    }
}
