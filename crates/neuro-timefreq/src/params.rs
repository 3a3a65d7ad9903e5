//! Pipeline configuration

use neuro_filter::FilterParameters;
use serde::{Deserialize, Serialize};

/// Parameters shared by all time-resolved extractors
///
/// Deserializes from partial documents; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFrequencyParameters {
    /// Bandpass design; edge artifacts are removed by default
    pub filter: FilterParameters,
    /// Zero-pad each valid run to a power of two before the Hilbert FFT
    pub pad_to_power_of_two: bool,
}

impl TimeFrequencyParameters {
    /// Replace the bandpass design parameters
    pub fn with_filter(mut self, filter: FilterParameters) -> Self {
        self.filter = filter;
        self
    }

    /// Enable or disable power-of-two zero padding in the Hilbert stage
    pub fn with_padding(mut self, pad_to_power_of_two: bool) -> Self {
        self.pad_to_power_of_two = pad_to_power_of_two;
        self
    }
}
