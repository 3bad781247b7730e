//! Conversion steps shared by the binary and the tests

use std::path::Path;

use crate::ConvertError;
use crate::iir::{Filter, peq_format_table};
use crate::preset::{Preset, build_preset};
use crate::read::load_filters;

/// Read a REW filter file and build the matching preset
pub fn load_preset(path: &Path, input_gain: f64) -> Result<Preset, ConvertError> {
    let filters = load_filters(path)?;
    log::info!("read {} filter(s) from {}", filters.len(), path.display());
    log_filters(&filters);
    Ok(build_preset(&filters, input_gain))
}

/// Convert a REW filter file into EasyEffects preset JSON
///
/// # Arguments
/// * `path` - Path to the REW filter file
/// * `input_gain` - Input gain in dB
///
/// # Returns
/// * The preset rendered as indented JSON
pub fn convert_file(path: &Path, input_gain: f64) -> Result<String, ConvertError> {
    let preset = load_preset(path, input_gain)?;
    Ok(preset.to_json_pretty()?)
}

fn log_filters(filters: &[Filter]) {
    if filters.is_empty() {
        log::warn!("no enabled peaking filter found, the preset has no band");
    } else if log::log_enabled!(log::Level::Debug) {
        log::debug!("filters:\n{}", peq_format_table(filters));
    }
}
