//! Per-field decoded moment data (spec §6 "Produced object").

use ndarray::Array2;

/// One radar moment (e.g. reflectivity, velocity) across a sweep's rays.
///
/// Carries the raw 16-bit counts alongside the scaled float matrix and an
/// explicit validity mask, rather than NaN-encoding missing gates, per
/// spec §4.3's dense-masked-matrix requirement.
#[derive(Debug, Clone)]
pub struct MomentData {
    /// Raw 2-character UF tag (e.g. "DZ", "VR"), or its renamed form if
    /// `ReadOptions::field_names` maps it.
    pub name: String,

    /// CF standard name, when the raw tag is recognized.
    pub standard_name: Option<String>,

    /// Long descriptive name, when the raw tag is recognized.
    pub long_name: Option<String>,

    /// Units; `"unknown"` for unrecognized tags (spec §6: unmapped fields
    /// are still included, just without friendlier naming).
    pub units: String,

    /// Raw, unscaled 16-bit counts, shape (nrays, ngates).
    pub raw: Array2<i16>,

    /// Scaled physical values, `raw as f32 / scale_factor`. Masked gates
    /// keep their scaled value; callers consult `mask` to know validity.
    pub data: Array2<f32>,

    /// `true` where the gate is missing (`raw` equaled the field's
    /// missing-data sentinel), `false` where it carries valid data.
    pub mask: Array2<bool>,

    /// Divisor applied to `raw` to produce `data` (from the field header).
    pub scale_factor: f64,

    /// The raw count value that marks a gate as missing (from the field header).
    pub missing_data_value: i16,
}

impl MomentData {
    /// Shape as (nrays, ngates).
    pub fn shape(&self) -> (usize, usize) {
        let shape = self.data.shape();
        (shape[0], shape[1])
    }
}
