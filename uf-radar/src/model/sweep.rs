//! Sweep-level data structures (spec §6 "Produced object").

use std::collections::HashMap;
use uf_radar_types::SweepMode;

use super::{Coordinates, MomentData};

/// One sweep's decoded moments and coordinates.
#[derive(Debug, Clone)]
pub struct SweepData {
    pub metadata: SweepMetadata,
    /// Keyed by the (possibly renamed) field name.
    pub moments: HashMap<String, MomentData>,
    pub coordinates: Coordinates,
}

impl SweepData {
    pub fn get_moment(&self, name: &str) -> Option<&MomentData> {
        self.moments.get(name)
    }

    pub fn moment_names(&self) -> Vec<&String> {
        self.moments.keys().collect()
    }

    pub fn num_rays(&self) -> usize {
        self.coordinates.num_rays()
    }

    pub fn num_gates(&self) -> usize {
        self.coordinates.num_gates()
    }
}

/// Per-sweep metadata (spec §4.3 "Sweep-mode mapping", "Nyquist absence rule").
#[derive(Debug, Clone, PartialEq)]
pub struct SweepMetadata {
    pub sweep_number: u32,
    /// Raw sweep-mode code, decoded.
    pub sweep_mode: SweepMode,
    /// Mapped label for this sweep's `sweep_mode` (spec §4.3 "Sweep-mode
    /// mapping": ppi→azimuth_surveillance, vpt→vertical_pointing,
    /// target→pointing; everything else passes through `sweep_mode`'s own
    /// scan-type string unchanged).
    pub sweep_mode_label: String,
    /// Degrees (ray 0 of the sweep).
    pub fixed_angle: f64,
    /// Degrees per second (ray 0 of the sweep).
    pub sweep_rate: f64,
    /// Lowercase polarization string (ray 0's first field).
    pub polarization_mode: String,
    /// `None` if any ray in the sweep has a velocity field lacking a
    /// nyquist entry in its FSI (spec §4.3's absence-propagation rule).
    pub nyquist_velocity: Option<f64>,
    /// Index into the volume's flat ray list of this sweep's first ray.
    pub sweep_start_ray_index: usize,
    /// Index into the volume's flat ray list of this sweep's last ray (inclusive).
    pub sweep_end_ray_index: usize,
}
