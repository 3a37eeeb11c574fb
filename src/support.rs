//! Supporting utilities used by models.
//!
//! These modules are public because hosts and other models find them useful
//! (a Gaussian lineshape, a Bose factor), but their APIs are not stable.

pub mod config;
pub mod constraint;
pub mod dispersion;
pub mod evaluation;
pub mod host;
pub mod lineshape;
pub mod occupation;
pub mod reciprocal;
pub mod units;
