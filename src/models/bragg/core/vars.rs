//! Host variable names for the Bragg model.

use tracing::debug;

use crate::support::host::{Var, VarError, parse_real, parse_vector_list};

use super::BraggParams;

pub(in crate::models::bragg) fn vars(params: &BraggParams) -> Vec<Var> {
    vec![
        Var::vector_list("Gs", &params.peaks),
        Var::real("sig_q", params.sigma_q),
        Var::real("sig_E", params.sigma_e),
        Var::real("amp", params.amp),
    ]
}

pub(in crate::models::bragg) fn set_var(
    params: &mut BraggParams,
    name: &str,
    value: &str,
) -> Result<bool, VarError> {
    match name {
        "Gs" => params.peaks = parse_vector_list(name, value)?,
        "sig_q" => params.sigma_q = parse_real(name, value)?,
        "sig_E" => params.sigma_e = parse_real(name, value)?,
        "amp" => params.amp = parse_real(name, value)?,
        _ => {
            debug!(name, "ignoring unknown Bragg variable");
            return Ok(false);
        }
    }
    Ok(true)
}
