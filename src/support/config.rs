//! Parameter snapshots from TOML.
//!
//! Model parameter structs derive `serde` with `#[serde(default)]`, so a
//! snapshot only needs to name the values it changes:
//!
//! ```toml
//! temperature = 10.0
//! stiffness = 35.0
//! zone_centre = [2.0, 0.0, 0.0]
//!
//! [occupation]
//! convention = "gain"
//! ```

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Errors from loading a parameter snapshot.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text is not valid TOML for the parameter struct.
    #[error("invalid parameter snapshot")]
    Parse(#[from] toml::de::Error),
}

/// Deserializes a parameter struct from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] on malformed TOML, unknown keys, or values
/// of the wrong type.
pub fn from_toml<T: DeserializeOwned>(text: &str) -> Result<T, ConfigError> {
    let params = toml::from_str(text)?;
    debug!(
        bytes = text.len(),
        target_type = std::any::type_name::<T>(),
        "loaded parameter snapshot"
    );
    Ok(params)
}
