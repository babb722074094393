//! Field-specific suffix (FSI): a small, tag-discriminated structure that
//! immediately follows a [`super::FieldHeader`] for some field types.
//!
//! Modeled as a tagged enum rather than the mutable, conditionally-populated
//! struct the original reader builds up in place (spec §9): each field
//! record is built once, fully formed, with whichever suffix (or none)
//! belongs to its tag.

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

use crate::error::Result;
use uf_radar_types::{POWER_FIELD_TAG, VELOCITY_FIELD_TAGS};

/// The field-specific suffix that may follow a field header, chosen by the
/// field's 2-character `data_type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fsi {
    /// Velocity fields ("VF", "VE", "VR", "VT", "VP", "VL").
    Velocity {
        /// Nyquist velocity, scaled by the field's `scale_factor`.
        nyquist: i16,
        spare: i16,
    },
    /// Power/DM fields ("DM").
    Power {
        radar_constant: i16,
        noise_power: i16,
        receiver_gain: i16,
        peak_power: i16,
        antenna_gain: i16,
        pulse_duration: i16,
    },
    /// No suffix for this tag.
    None,
}

impl Fsi {
    /// Decode the suffix appropriate for `data_type`, if any, from the
    /// current read position (immediately after the field header).
    pub fn read_from<R: Read>(read: &mut R, data_type: &str) -> Result<Self> {
        if VELOCITY_FIELD_TAGS.contains(&data_type) {
            Ok(Self::Velocity {
                nyquist: read.read_i16::<BigEndian>()?,
                spare: read.read_i16::<BigEndian>()?,
            })
        } else if data_type == POWER_FIELD_TAG {
            Ok(Self::Power {
                radar_constant: read.read_i16::<BigEndian>()?,
                noise_power: read.read_i16::<BigEndian>()?,
                receiver_gain: read.read_i16::<BigEndian>()?,
                peak_power: read.read_i16::<BigEndian>()?,
                antenna_gain: read.read_i16::<BigEndian>()?,
                pulse_duration: read.read_i16::<BigEndian>()?,
            })
        } else {
            Ok(Self::None)
        }
    }

    /// Byte length this variant occupies on disk, given its tag.
    pub fn byte_len(data_type: &str) -> usize {
        if VELOCITY_FIELD_TAGS.contains(&data_type) {
            4
        } else if data_type == POWER_FIELD_TAG {
            12
        } else {
            0
        }
    }

    /// The nyquist velocity carried by a `Velocity` suffix, if this is one.
    pub fn nyquist(&self) -> Option<i16> {
        match self {
            Self::Velocity { nyquist, .. } => Some(*nyquist),
            _ => None,
        }
    }
}
