//! rew2ee - Convert Room EQ Wizard filters into EasyEffects presets
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::iir::Filter;

/// Equalizer processing mode
pub const EQ_MODE_IIR: &str = "IIR";
/// Filter design used for every band
pub const BAND_MODE_RLC_BT: &str = "RLC (BT)";
/// Band type of a peaking filter
pub const BAND_TYPE_BELL: &str = "Bell";
/// Band slope
pub const BAND_SLOPE_X1: &str = "x1";
/// Name of the equalizer plugin in the plugin chain
pub const PLUGIN_EQUALIZER: &str = "equalizer";

/// An EasyEffects output preset holding a stereo linked equalizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
    pub output: Output,
}

/// Output effects chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    pub blocklist: Vec<String>,
    pub equalizer: Equalizer,
    pub plugins_order: Vec<String>,
}

/// Equalizer plugin settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Equalizer {
    pub input_gain: f64,
    pub mode: String,
    pub num_bands: usize,
    pub output_gain: f64,
    pub split_channels: bool,
    pub left: Channel,
    pub right: Channel,
}

/// Bands of one channel, serialized as `{"band0": .., "band1": .., ...}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Channel(pub Vec<Band>);

impl Channel {
    pub fn bands(&self) -> &[Band] {
        &self.0
    }
}

impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // keys are emitted in band order, band9 comes before band10
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, band) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("band{i}"), band)?;
        }
        map.end()
    }
}

/// One equalizer band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    pub frequency: f64,
    pub gain: f64,
    pub q: f64,
    pub mode: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub slope: String,
    pub mute: bool,
    pub solo: bool,
}

impl From<&Filter> for Band {
    fn from(filter: &Filter) -> Self {
        Band {
            frequency: filter.freq,
            gain: filter.gain,
            q: filter.q,
            mode: BAND_MODE_RLC_BT.to_string(),
            kind: BAND_TYPE_BELL.to_string(),
            slope: BAND_SLOPE_X1.to_string(),
            mute: false,
            solo: false,
        }
    }
}

/// Build an EasyEffects preset from a list of filters
///
/// # Arguments
/// * `filters` - Filters in band order
/// * `input_gain` - Input gain in dB, usually negative to leave headroom
///
/// # Returns
/// * A preset with one band per filter, identical on the left and right channels
pub fn build_preset(filters: &[Filter], input_gain: f64) -> Preset {
    let bands: Vec<Band> = filters.iter().map(Band::from).collect();

    Preset {
        output: Output {
            blocklist: Vec::new(),
            equalizer: Equalizer {
                input_gain,
                mode: EQ_MODE_IIR.to_string(),
                num_bands: bands.len(),
                output_gain: 0.0,
                split_channels: false,
                left: Channel(bands.clone()),
                right: Channel(bands),
            },
            plugins_order: vec![PLUGIN_EQUALIZER.to_string()],
        },
    }
}

impl Preset {
    /// Render the preset as indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
