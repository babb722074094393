//! Volume-level data structures (spec §6 "Produced object").

use chrono::{DateTime, Utc};

use super::{InstrumentParameters, SweepData};

/// A fully decoded UF volume: everything [`crate::read_uf`] returns.
#[derive(Debug, Clone)]
pub struct VolumeData {
    pub metadata: VolumeMetadata,
    pub sweeps: Vec<SweepData>,
}

impl VolumeData {
    pub fn get_sweep(&self, index: usize) -> Option<&SweepData> {
        self.sweeps.get(index)
    }

    pub fn num_sweeps(&self) -> usize {
        self.sweeps.len()
    }
}

/// Volume-wide metadata, derived across all decoded rays (spec §6).
#[derive(Debug, Clone)]
pub struct VolumeMetadata {
    /// Trimmed ASCII, from the mandatory header's 8-byte `radar_name`.
    pub radar_name: String,
    /// Trimmed ASCII, from the mandatory header's 8-byte `site_name`.
    pub site_name: String,
    /// Degrees North, from ray 0 (spec §4.2 location reconstruction).
    pub latitude: f64,
    /// Degrees East, from ray 0.
    pub longitude: f64,
    /// Meters above sea level, from ray 0.
    pub altitude: f64,
    /// Earliest ray datetime in the volume.
    pub time_coverage_start: DateTime<Utc>,
    /// Latest ray datetime in the volume.
    pub time_coverage_end: DateTime<Utc>,
    /// `["sweep_0", "sweep_1", ...]`.
    pub sweep_group_names: Vec<String>,
    /// Degrees, one per sweep.
    pub sweep_fixed_angles: Vec<f64>,
    /// Ray 0's sweep-mode scan-type string (spec §4.3 "Sweep-mode mapping").
    pub scan_type: String,
    pub instrument_parameters: InstrumentParameters,
}
