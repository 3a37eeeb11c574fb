//! Evaluation faults and the tagged outcome of an intensity evaluation.

use thiserror::Error;

use super::constraint::ConstraintError;

/// Faults that make a single S(Q,E) evaluation undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    /// A Gaussian width is zero, negative or `NaN`.
    #[error("invalid linewidth `{width}`")]
    Linewidth {
        /// Name of the offending width parameter.
        width: &'static str,

        /// The violated constraint.
        source: ConstraintError,
    },

    /// The temperature is zero, negative or `NaN`.
    #[error("invalid temperature")]
    Temperature(#[source] ConstraintError),

    /// The Bose cutoff energy is `NaN`.
    #[error("invalid Bose cutoff energy")]
    Cutoff(#[source] ConstraintError),

    /// The Bose factor denominator vanished.
    ///
    /// Happens at `E = 0` when no cutoff keeps the energy away from the
    /// elastic line.
    #[error("occupation factor diverges at E={energy} meV")]
    Divergent {
        /// Energy at which the occupation factor was evaluated.
        energy: f64,
    },

    /// The combined intensity is `NaN` or infinite.
    #[error("intensity is not finite")]
    NonFinite,
}

impl EvalError {
    /// Builds a closure mapping a constraint failure to [`EvalError::Linewidth`].
    pub(crate) fn linewidth(width: &'static str) -> impl Fn(ConstraintError) -> Self {
        move |source| Self::Linewidth { width, source }
    }
}

/// The outcome of evaluating an intensity at one point.
///
/// A host only ever sees [`Outcome::value`]; the tag is kept so that callers
/// who care (tests, diagnostics) can tell a genuine zero from a degenerate
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A finite intensity.
    Computed(f64),

    /// The evaluation was undefined and falls back to zero intensity.
    Degenerate(EvalError),
}

impl Outcome {
    /// Tags a fallible evaluation.
    ///
    /// Non-finite values count as degenerate.
    #[must_use]
    pub fn from_result(result: Result<f64, EvalError>) -> Self {
        match result {
            Ok(value) if value.is_finite() => Self::Computed(value),
            Ok(_) => Self::Degenerate(EvalError::NonFinite),
            Err(err) => Self::Degenerate(err),
        }
    }

    /// Returns the intensity, or `0.0` for a degenerate evaluation.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Computed(value) => value,
            Self::Degenerate(_) => 0.0,
        }
    }

    /// Returns `true` if the evaluation fell back to zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate(_))
    }
}
