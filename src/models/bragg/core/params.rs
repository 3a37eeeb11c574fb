use serde::{Deserialize, Serialize};

use crate::support::{
    config::{ConfigError, from_toml},
    reciprocal::Hkl,
};

/// Parameters of the Bragg-peak model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BraggParams {
    /// Reciprocal-lattice points carrying a peak, in r.l.u. The default set
    /// is (±1, 0, 0), (0, ±1, 0) and (±1, ±1, 0).
    pub peaks: Vec<Hkl>,

    /// Momentum width in r.l.u., covering mosaic and `Δd/d`.
    pub sigma_q: f64,

    /// Energy width in meV.
    pub sigma_e: f64,

    /// Amplitude applied to both the momentum and the energy Gaussian.
    pub amp: f64,
}

impl Default for BraggParams {
    fn default() -> Self {
        Self {
            peaks: vec![
                Hkl::new(1.0, 0.0, 0.0),
                Hkl::new(-1.0, 0.0, 0.0),
                Hkl::new(0.0, 1.0, 0.0),
                Hkl::new(0.0, -1.0, 0.0),
                Hkl::new(1.0, 1.0, 0.0),
                Hkl::new(-1.0, -1.0, 0.0),
                Hkl::new(1.0, -1.0, 0.0),
                Hkl::new(-1.0, 1.0, 0.0),
            ],
            sigma_q: 0.01,
            sigma_e: 0.01,
            amp: 1.0,
        }
    }
}

impl BraggParams {
    /// Loads a parameter snapshot from TOML; missing keys keep their defaults.
    ///
    /// ```
    /// use sqw_models::models::BraggParams;
    ///
    /// let params = BraggParams::from_toml("peaks = [[0.0, 0.0, 2.0]]\nsigma_e = 0.1").unwrap();
    /// assert_eq!(params.peaks.len(), 1);
    /// assert_eq!(params.sigma_q, 0.01);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] on malformed TOML or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        from_toml(text)
    }
}
