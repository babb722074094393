//! Volume-level instrument parameters (spec §4.3).

/// Radar/antenna parameters derived from the decoded rays, following the
/// "ray 0 represents the volume" assumption (spec §9) for the values that
/// are taken from a single field header, while per-ray values (pulse width,
/// PRT, nyquist velocity) are kept per ray.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentParameters {
    /// Seconds, per ray.
    pub pulse_width: Vec<f64>,
    /// Degrees, from ray 0's first field.
    pub beam_width_h: f64,
    /// Degrees, from ray 0's first field.
    pub beam_width_v: f64,
    /// Hz, from ray 0's first field.
    pub bandwidth: f64,
    /// Meters, from ray 0's first field.
    pub wavelength: f64,
    /// Hz, derived from `wavelength`.
    pub frequency: f64,
    /// Seconds, per ray.
    pub prt: Vec<f64>,
    /// Per-ray Nyquist velocity (m/s). `None` for the whole vector if any
    /// ray's velocity field lacks the FSI nyquist entry (spec §4.3, §7).
    pub nyquist_velocity: Option<Vec<f64>>,
}
