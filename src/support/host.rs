//! Named parameters as a host sees them.
//!
//! Hosts list and assign model parameters by name, with values carried as
//! strings: `("T", "real", "300")`. Assignment only parses; whether a value
//! makes physical sense is decided when the model evaluates it.

use std::fmt;

use thiserror::Error;

use super::reciprocal::{Hkl, format_hkl_list, parse_hkl_list};

/// The value type of a host variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Real,
    Bool,
    Vector,
    VectorList,
    /// One of a fixed set of names.
    Choice,
}

impl VarKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Bool => "bool",
            Self::Vector => "vector",
            Self::VectorList => "vector_list",
            Self::Choice => "choice",
        }
    }
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named model parameter with its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Var {
    pub name: String,
    pub kind: VarKind,
    pub value: String,
}

impl Var {
    #[must_use]
    pub fn real(name: &str, value: f64) -> Self {
        Self::new(name, VarKind::Real, value.to_string())
    }

    #[must_use]
    pub fn bool(name: &str, value: bool) -> Self {
        Self::new(name, VarKind::Bool, if value { "1" } else { "0" }.to_owned())
    }

    #[must_use]
    pub fn vector(name: &str, value: Hkl) -> Self {
        Self::new(name, VarKind::Vector, value.to_string())
    }

    #[must_use]
    pub fn vector_list(name: &str, value: &[Hkl]) -> Self {
        Self::new(name, VarKind::VectorList, format_hkl_list(value))
    }

    #[must_use]
    pub fn choice(name: &str, value: &str) -> Self {
        Self::new(name, VarKind::Choice, value.to_owned())
    }

    fn new(name: &str, kind: VarKind, value: String) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            value,
        }
    }
}

/// A host assigned a value that does not parse as the variable's kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value for `{name}`: {value:?}")]
pub struct VarError {
    pub name: String,
    pub kind: VarKind,
    pub value: String,
}

impl VarError {
    fn new(name: &str, kind: VarKind, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            value: value.to_owned(),
        }
    }
}

/// Parses a real value.
///
/// # Errors
///
/// Returns a [`VarError`] if `value` is not a number.
pub fn parse_real(name: &str, value: &str) -> Result<f64, VarError> {
    value
        .trim()
        .parse()
        .map_err(|_| VarError::new(name, VarKind::Real, value))
}

/// Parses `1`/`0`/`true`/`false`.
///
/// # Errors
///
/// Returns a [`VarError`] for anything else.
pub fn parse_bool(name: &str, value: &str) -> Result<bool, VarError> {
    match value.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(VarError::new(name, VarKind::Bool, value)),
    }
}

/// Parses a single vector.
///
/// # Errors
///
/// Returns a [`VarError`] if `value` is not a 3-vector.
pub fn parse_vector(name: &str, value: &str) -> Result<Hkl, VarError> {
    value
        .parse()
        .map_err(|_| VarError::new(name, VarKind::Vector, value))
}

/// Parses a `;`-separated vector list.
///
/// # Errors
///
/// Returns a [`VarError`] if any entry is not a 3-vector.
pub fn parse_vector_list(name: &str, value: &str) -> Result<Vec<Hkl>, VarError> {
    parse_hkl_list(value).map_err(|_| VarError::new(name, VarKind::VectorList, value))
}

/// Parses one of a fixed set of names using `lookup`.
///
/// # Errors
///
/// Returns a [`VarError`] if `lookup` rejects the name.
pub fn parse_choice<T>(
    name: &str,
    value: &str,
    lookup: impl FnOnce(&str) -> Option<T>,
) -> Result<T, VarError> {
    lookup(value.trim()).ok_or_else(|| VarError::new(name, VarKind::Choice, value))
}
