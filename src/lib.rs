//! # S(Q,E) Models
//!
//! Scattering-function models for Monte-Carlo neutron-scattering hosts.
//!
//! A host (resolution convolution, instrument simulation) calls a model once
//! per simulated point: first for the dispersion branches at a momentum
//! transfer `Q`, then for the scattering intensity `S(Q,E)`.
//!
//! ## Crate layout
//!
//! - [`models`]: Host-facing models and the [`SqwModel`](models::sqw::SqwModel)
//!   boundary trait.
//! - [`support`]: Lineshapes, occupation factors, dispersion relations and the
//!   other building blocks the models are made of.
//!
//! ## Failure policy
//!
//! Evaluation helpers return `Result`s. Only the top-level intensity of each
//! model turns a fault (zero linewidth, zero temperature, diverging Bose
//! factor) into a `0.0` intensity, so a degenerate parameter set never aborts
//! a long sweep.

pub mod models;
pub mod support;
