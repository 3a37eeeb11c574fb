//! Public S(Q,E) models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the physics lives. The public model type owns a parameter
//! snapshot and delegates to `core`; it is what a host holds and calls.
//!
//! Every model implements [`sqw::SqwModel`]. The generic
//! [`sqw::DispersionAdapter`] and [`sqw::IntensityAdapter`] expose any such
//! model as a [`twine_core::Model`].

pub mod bragg;
pub mod magnon;
pub mod sqw;

pub use bragg::{Bragg, BraggParams};
pub use magnon::{Magnon, MagnonParams};
pub use sqw::{DispersionAdapter, IntensityAdapter, SqwModel};
