//! Reciprocal-lattice coordinates.
//!
//! Momentum transfers and Bragg points are `(h, k, l)` triples in
//! reciprocal-lattice units. Distances are Euclidean in these coordinates,
//! which is what the scattering models use for `|Q − G|`.

use std::{fmt, ops::Sub, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in reciprocal space, in reciprocal-lattice units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Hkl {
    pub h: f64,
    pub k: f64,
    pub l: f64,
}

impl Hkl {
    #[must_use]
    pub const fn new(h: f64, k: f64, l: f64) -> Self {
        Self { h, k, l }
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(self) -> f64 {
        (self.h * self.h + self.k * self.k + self.l * self.l).sqrt()
    }

    /// Distance `|self − other|`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).norm()
    }

    /// The integer lattice point closest to `self`.
    #[must_use]
    pub fn nearest_lattice_point(self) -> Self {
        Self::new(self.h.round(), self.k.round(), self.l.round())
    }
}

impl Sub for Hkl {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.h - rhs.h, self.k - rhs.k, self.l - rhs.l)
    }
}

impl From<[f64; 3]> for Hkl {
    fn from([h, k, l]: [f64; 3]) -> Self {
        Self::new(h, k, l)
    }
}

impl From<Hkl> for [f64; 3] {
    fn from(q: Hkl) -> Self {
        [q.h, q.k, q.l]
    }
}

impl fmt::Display for Hkl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.h, self.k, self.l)
    }
}

/// Errors from parsing an [`Hkl`] string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHklError {
    #[error("expected 3 components, found {0}")]
    Components(usize),

    #[error("invalid component `{0}`")]
    Component(String),
}

/// Parses `"1 1 0"`, `"1, 1, 0"` or `"[1, 1, 0]"`.
impl FromStr for Hkl {
    type Err = ParseHklError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches(['[', '(']).trim_end_matches([']', ')']);

        let components = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f64>()
                    .map_err(|_| ParseHklError::Component(part.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match components[..] {
            [h, k, l] => Ok(Self::new(h, k, l)),
            _ => Err(ParseHklError::Components(components.len())),
        }
    }
}

/// Parses a `;`-separated list of vectors, e.g. `"1 0 0; -1 0 0"`.
///
/// An empty or blank string is an empty list.
///
/// # Errors
///
/// Returns the first vector's parse error.
pub fn parse_hkl_list(s: &str) -> Result<Vec<Hkl>, ParseHklError> {
    s.split(';')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Formats a vector list in the form [`parse_hkl_list`] reads.
#[must_use]
pub fn format_hkl_list(list: &[Hkl]) -> String {
    list.iter()
        .map(|q| format!("{} {} {}", q.h, q.k, q.l))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single Monte-Carlo point: momentum transfer and energy transfer (meV).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QePoint {
    pub q: Hkl,
    pub energy: f64,
}

impl QePoint {
    #[must_use]
    pub const fn new(h: f64, k: f64, l: f64, energy: f64) -> Self {
        Self {
            q: Hkl::new(h, k, l),
            energy,
        }
    }
}
