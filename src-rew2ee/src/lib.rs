//! rew2ee - Convert Room EQ Wizard filters into EasyEffects presets
//!
//! The conversion is a single pipeline:
//!
//! - `read`: extract the peaking filters from a REW/EqualizerAPO text export
//! - `preset`: map the filters onto the EasyEffects equalizer schema
//! - `workflow`: glue both steps together and render JSON

// Re-export external crate functionality
pub use rew2ee_iir as iir;
pub use rew2ee_iir::{Filter, FilterSequence};

/// Command line interface definitions
pub mod cli;
/// Error type shared by the library
pub mod error;
/// EasyEffects preset model and builder
pub mod preset;
/// Filter file reading and parsing
pub mod read;
/// Conversion steps used by the binary
pub mod workflow;

// Re-export commonly used items
pub use cli::Args;
pub use error::ConvertError;
pub use preset::{Band, Preset, build_preset};
pub use read::*;
pub use workflow::*;
