//! Unit helpers on top of [`uom`].
//!
//! Energies in this crate are plain `f64` values in meV, the working unit of
//! neutron spectroscopy. Temperatures enter through [`uom`] so the kelvin
//! conversion happens in one place.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

/// Boltzmann constant in meV/K (CODATA 2018, exact).
pub const BOLTZMANN_MEV_PER_KELVIN: f64 = 0.086_173_332_621_451_78;

/// Returns the thermal energy `k_B T` in meV.
///
/// ```
/// use sqw_models::support::units::thermal_energy;
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
///
/// let kt = thermal_energy(ThermodynamicTemperature::new::<kelvin>(300.0));
/// assert!((kt - 25.852).abs() < 1e-3);
/// ```
#[must_use]
pub fn thermal_energy(temperature: ThermodynamicTemperature) -> f64 {
    BOLTZMANN_MEV_PER_KELVIN * temperature.get::<kelvin>()
}
