//! Host variable names for the magnon model.

use tracing::debug;

use crate::support::{
    dispersion::DispersionSelector,
    host::{Var, VarError, parse_bool, parse_choice, parse_real, parse_vector},
    occupation::{CutoffPolicy, SignConvention},
};

use super::MagnonParams;

pub(in crate::models::magnon) fn vars(params: &MagnonParams) -> Vec<Var> {
    vec![
        Var::vector("G", params.zone_centre),
        Var::bool("nearest_G", params.nearest_zone_centre),
        Var::real("D", params.stiffness),
        Var::real("offs", params.offset),
        Var::real("sig", params.sigma),
        Var::real("sig_annihilate", params.sigma_annihilate),
        Var::bool("single_sig", params.single_sigma),
        Var::real("w_create", params.weights[0]),
        Var::real("w_annihilate", params.weights[1]),
        Var::real("S0", params.s0),
        Var::real("inc_sig", params.inc_sigma),
        Var::real("inc_amp", params.inc_amp),
        Var::real("T", params.temperature),
        Var::real("bose_cut", params.bose_cutoff),
        Var::real("disp", params.dispersion.code()),
        Var::choice("bose_sign", params.occupation.convention.name()),
        Var::choice("bose_policy", params.occupation.cutoff_policy.name()),
    ]
}

pub(in crate::models::magnon) fn set_var(
    params: &mut MagnonParams,
    name: &str,
    value: &str,
) -> Result<bool, VarError> {
    match name {
        "G" => params.zone_centre = parse_vector(name, value)?,
        "nearest_G" => params.nearest_zone_centre = parse_bool(name, value)?,
        "D" => params.stiffness = parse_real(name, value)?,
        "offs" => params.offset = parse_real(name, value)?,
        "sig" => params.sigma = parse_real(name, value)?,
        "sig_annihilate" => params.sigma_annihilate = parse_real(name, value)?,
        "single_sig" => params.single_sigma = parse_bool(name, value)?,
        "w_create" => params.weights[0] = parse_real(name, value)?,
        "w_annihilate" => params.weights[1] = parse_real(name, value)?,
        "S0" => params.s0 = parse_real(name, value)?,
        "inc_sig" => params.inc_sigma = parse_real(name, value)?,
        "inc_amp" => params.inc_amp = parse_real(name, value)?,
        "T" => params.temperature = parse_real(name, value)?,
        "bose_cut" => params.bose_cutoff = parse_real(name, value)?,
        "disp" => params.dispersion = DispersionSelector::from(parse_real(name, value)?),
        "bose_sign" => {
            params.occupation.convention = parse_choice(name, value, SignConvention::from_name)?;
        }
        "bose_policy" => {
            params.occupation.cutoff_policy = parse_choice(name, value, CutoffPolicy::from_name)?;
        }
        _ => {
            debug!(name, "ignoring unknown magnon variable");
            return Ok(false);
        }
    }
    Ok(true)
}
