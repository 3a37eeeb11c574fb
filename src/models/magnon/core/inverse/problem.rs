//! Problem formulation for dispersion inversion.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::support::dispersion::DispersionKind;

/// A point on a dispersion curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct CurvePoint {
    pub(super) q: f64,
    pub(super) energy: f64,
}

/// Model adapter exposing the momentum distance as the sole input.
pub(super) struct DispersionCurve {
    kind: DispersionKind,
    stiffness: f64,
    offset: f64,
}

impl DispersionCurve {
    pub(super) fn new(kind: DispersionKind, stiffness: f64, offset: f64) -> Self {
        Self {
            kind,
            stiffness,
            offset,
        }
    }

    pub(super) fn energy(&self, q: f64) -> f64 {
        self.kind.energy(q, self.stiffness, self.offset)
    }
}

impl Model for DispersionCurve {
    type Input = f64;
    type Output = CurvePoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(CurvePoint {
            q: *input,
            energy: self.energy(*input),
        })
    }
}

/// Equation problem with residual `E(q) - target`.
pub(super) struct TargetEnergy {
    target: f64,
}

impl TargetEnergy {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }

    pub(super) fn residual(&self, energy: f64) -> f64 {
        energy - self.target
    }
}

impl EquationProblem<1> for TargetEnergy {
    type Input = f64;
    type Output = CurvePoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output.energy)])
    }
}
