//! rew2ee - Convert Room EQ Wizard filters into EasyEffects presets
//! Command-line interface definitions
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

use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Default input gain, leaves some headroom for positive bands.
pub const DEFAULT_INPUT_GAIN: f64 = -2.0;

/// Convert Room EQ Wizard filter file to EasyEffects preset
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Room EQ filter file path
    pub file: PathBuf,

    /// Input gain for headroom (dB)
    #[arg(long, default_value_t = DEFAULT_INPUT_GAIN, allow_negative_numbers = true, value_parser = parse_finite_f64)]
    pub gain: f64,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level selected by the number of `-v` flags
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

// Custom value parser to reject nan and infinities
fn parse_finite_f64(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("invalid float: {s}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err("value must be a finite number".to_string())
    }
}
