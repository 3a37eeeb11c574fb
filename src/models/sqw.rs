//! The host boundary.
//!
//! A host holds a model behind [`SqwModel`], changes its parameters between
//! batches with [`SqwModel::set_var`], and calls [`SqwModel::dispersion`] and
//! [`SqwModel::intensity`] once per simulated point. Neither call can fail.
//!
//! Evaluation only borrows the model, so one parameter snapshot can be shared
//! by many worker threads; the host serialises parameter updates against
//! evaluation. Clone a model to hand a worker its own snapshot.

use std::convert::Infallible;

use twine_core::Model;

use crate::support::{
    dispersion::Branches,
    host::{Var, VarError},
    reciprocal::{Hkl, QePoint},
};

/// A scattering-function model as seen by a Monte-Carlo host.
pub trait SqwModel {
    /// Called after the host has changed parameters.
    ///
    /// Only reports the current parameters; it has no effect on evaluation.
    fn init(&self) {}

    /// Dispersion branches at momentum transfer `q`.
    fn dispersion(&self, q: Hkl) -> Branches;

    /// Scattering intensity `S(Q,E)`; faults evaluate to `0.0`.
    fn intensity(&self, point: QePoint) -> f64;

    /// All parameters as (name, kind, value) triples.
    fn vars(&self) -> Vec<Var>;

    /// Assigns the parameter `name` from its string form.
    ///
    /// Returns `Ok(false)` if the model has no parameter of that name.
    ///
    /// # Errors
    ///
    /// Returns a [`VarError`] if `value` does not parse; the parameter is left
    /// unchanged.
    fn set_var(&mut self, name: &str, value: &str) -> Result<bool, VarError>;

    /// Assigns a batch of parameters, skipping unknown names.
    ///
    /// # Errors
    ///
    /// Stops at the first value that does not parse. Earlier assignments in
    /// the batch stay applied.
    fn set_vars(&mut self, vars: &[Var]) -> Result<(), VarError> {
        for var in vars {
            self.set_var(&var.name, &var.value)?;
        }
        Ok(())
    }
}

/// Exposes a model's dispersion query as a [`twine_core::Model`].
#[derive(Debug, Clone, Copy)]
pub struct DispersionAdapter<'a, M>(pub &'a M);

impl<M: SqwModel> Model for DispersionAdapter<'_, M> {
    type Input = Hkl;
    type Output = Branches;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.0.dispersion(*input))
    }
}

/// Exposes a model's intensity query as a [`twine_core::Model`].
#[derive(Debug, Clone, Copy)]
pub struct IntensityAdapter<'a, M>(pub &'a M);

impl<M: SqwModel> Model for IntensityAdapter<'_, M> {
    type Input = QePoint;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.0.intensity(*input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{Bragg, Magnon};

    fn assert_shareable<T: Send + Sync + Clone>() {}

    #[test]
    fn models_can_be_shared_across_workers() {
        assert_shareable::<Magnon>();
        assert_shareable::<Bragg>();
    }

    #[test]
    fn adapters_delegate() {
        let magnon = Magnon::default();
        let q = Hkl::new(1.1, 0.9, 0.0);
        let point = QePoint { q, energy: 0.4 };

        assert_eq!(
            DispersionAdapter(&magnon).call(&q).unwrap(),
            magnon.dispersion(q)
        );
        assert_eq!(
            IntensityAdapter(&magnon).call(&point).unwrap(),
            magnon.intensity(point)
        );
    }

    #[test]
    fn set_vars_skips_unknown_names() {
        let mut magnon = Magnon::default();
        magnon
            .set_vars(&[
                Var::real("T", 10.0),
                Var::real("no_such_var", 1.0),
                Var::real("D", 5.0),
            ])
            .unwrap();

        assert_eq!(magnon.params().temperature, 10.0);
        assert_eq!(magnon.params().stiffness, 5.0);
    }

    #[test]
    fn set_vars_stops_at_bad_value() {
        let mut magnon = Magnon::default();
        let err = magnon
            .set_vars(&[
                Var::real("T", 10.0),
                Var::choice("D", "stiff"),
                Var::real("offs", 1.0),
            ])
            .unwrap_err();

        assert_eq!(err.name, "D");
        assert_eq!(magnon.params().temperature, 10.0);
        assert_eq!(magnon.params().offset, 0.0);
    }
}
