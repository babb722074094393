/// Common types and constants shared across the UF radar decoder
///
/// These mirror the handful of small, fixed enumerations baked into the
/// Universal Format header structures (Appendix C of the 1980 AMS report),
/// kept in their own crate so that both the decoder and any downstream
/// consumer can depend on them without pulling in the rest of the decoder.

use serde::{Deserialize, Serialize};

/// Sweep mode, as carried in the mandatory header's `sweep_mode` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepMode {
    /// 0
    Calibration,
    /// 1 — plan position indicator (fixed elevation, varying azimuth)
    Ppi,
    /// 2
    Coplane,
    /// 3 — range height indicator (fixed azimuth, varying elevation)
    Rhi,
    /// 4 — vertically pointing
    Vpt,
    /// 5
    Target,
    /// 6
    Manual,
    /// 7
    Idle,
}

impl SweepMode {
    /// Decode the raw `sweep_mode` code. Unrecognized codes are not possible
    /// per the format (only 0-7 are defined), so this is total over `i16`
    /// by mapping anything out of range to `Idle`.
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => Self::Calibration,
            1 => Self::Ppi,
            2 => Self::Coplane,
            3 => Self::Rhi,
            4 => Self::Vpt,
            5 => Self::Target,
            6 => Self::Manual,
            _ => Self::Idle,
        }
    }

    /// The volume-level scan-type string (spec §4.3 "Sweep-mode mapping").
    pub fn scan_type(self) -> &'static str {
        match self {
            Self::Calibration => "calibration",
            Self::Ppi => "ppi",
            Self::Coplane => "coplane",
            Self::Rhi => "rhi",
            Self::Vpt => "vpt",
            Self::Target => "target",
            Self::Manual => "manual",
            Self::Idle => "idle",
        }
    }

    /// The further sweep-mode label used for the caller's per-sweep
    /// `sweep_mode` array: `ppi` becomes `azimuth_surveillance`, `vpt`
    /// becomes `vertical_pointing`, `target` becomes `pointing`; everything
    /// else passes through its scan-type string unchanged.
    pub fn sweep_mode_label(self) -> &'static str {
        match self {
            Self::Ppi => "azimuth_surveillance",
            Self::Vpt => "vertical_pointing",
            Self::Target => "pointing",
            other => other.scan_type(),
        }
    }
}

/// Antenna polarization, as carried in a field header's `polarization` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarization {
    /// 1
    Horizontal,
    /// 2
    Vertical,
    /// 3
    Circular,
    /// 4, and the liberal fallback for any unrecognized code
    Elliptical,
}

impl Polarization {
    /// Decode the raw `polarization` code. Unknown codes are not an error;
    /// per spec §4.3 / §7 they fall back to `Elliptical`. Returns whether
    /// the code was recognized so callers can log the fallback.
    pub fn from_code(code: i16) -> (Self, bool) {
        match code {
            1 => (Self::Horizontal, true),
            2 => (Self::Vertical, true),
            3 => (Self::Circular, true),
            4 => (Self::Elliptical, true),
            _ => (Self::Elliptical, false),
        }
    }

    /// The lowercase string used in `polarization_mode` / `SweepMetadata`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Circular => "circular",
            Self::Elliptical => "elliptical",
        }
    }
}

/// Standard CfRadial-style moment metadata, keyed by the UF file's raw
/// 2-character `data_type` tag. Used only to fill in friendlier `units` /
/// `standard_name` / `long_name` when a tag is recognized; unrecognized tags
/// are still decoded and exposed under their raw tag (spec §6:
/// "unmapped fields are still included").
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MomentMetadata {
    /// CF standard name
    pub standard_name: &'static str,
    /// Long descriptive name
    pub long_name: &'static str,
    /// Units
    pub units: &'static str,
}

impl MomentMetadata {
    /// Look up metadata for a raw UF field tag (e.g. "DZ", "VR", "SW").
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "DZ" | "CZ" => Some(Self {
                standard_name: "equivalent_reflectivity_factor",
                long_name: "Reflectivity",
                units: "dBZ",
            }),
            "VE" | "VR" | "VT" | "VL" | "VF" | "VP" => Some(Self {
                standard_name: "radial_velocity_of_scatterers_away_from_instrument",
                long_name: "Radial velocity",
                units: "m/s",
            }),
            "SW" => Some(Self {
                standard_name: "doppler_spectrum_width",
                long_name: "Spectrum width",
                units: "m/s",
            }),
            "ZD" | "ZDR" => Some(Self {
                standard_name: "differential_reflectivity_hv",
                long_name: "Differential reflectivity",
                units: "dB",
            }),
            "PH" | "PHI" => Some(Self {
                standard_name: "differential_phase_hv",
                long_name: "Differential propagation phase",
                units: "degrees",
            }),
            "KD" | "KDP" => Some(Self {
                standard_name: "specific_differential_phase_hv",
                long_name: "Specific differential phase",
                units: "degrees/km",
            }),
            "RH" | "RHO" => Some(Self {
                standard_name: "cross_correlation_ratio_hv",
                long_name: "Cross-correlation coefficient",
                units: "",
            }),
            "NC" => Some(Self {
                standard_name: "normalized_coherent_power",
                long_name: "Normalized coherent power",
                units: "",
            }),
            "SN" => Some(Self {
                standard_name: "signal_to_noise_ratio",
                long_name: "Signal-to-noise ratio",
                units: "dB",
            }),
            "DM" => Some(Self {
                standard_name: "power",
                long_name: "Received power",
                units: "dBm",
            }),
            _ => None,
        }
    }
}

/// The 2-character UF tags that carry an `FSI_VEL` field-specific suffix.
pub const VELOCITY_FIELD_TAGS: &[&str] = &["VF", "VE", "VR", "VT", "VP", "VL"];

/// The 2-character UF tag that carries an `FSI_DM` field-specific suffix.
pub const POWER_FIELD_TAG: &str = "DM";
