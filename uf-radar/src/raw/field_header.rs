//! Field position entries and field headers.

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

use crate::error::Result;

/// One entry of the per-record field position table: a 2-byte tag and a
/// 1-based word offset to that field's [`FieldHeader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPosition {
    /// 2-byte ASCII tag, e.g. "DZ", "VR", "SW".
    pub data_type: String,
    pub offset_field_header: i16,
}

impl FieldPosition {
    pub fn read_from<R: Read>(read: &mut R) -> Result<Self> {
        let mut tag = [0u8; 2];
        read.read_exact(&mut tag)?;
        Ok(Self {
            data_type: String::from_utf8_lossy(&tag).to_string(),
            offset_field_header: read.read_i16::<BigEndian>()?,
        })
    }

    pub const BYTE_LEN: usize = 4;
}

/// The 38-byte per-field header: where the raw samples live, how to scale
/// them, and the antenna parameters active while this field was collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHeader {
    /// 1-based word offset to the raw `i16` sample array.
    pub data_offset: i16,
    pub scale_factor: i16,
    pub range_start_km: i16,
    pub range_start_m: i16,
    pub range_spacing_m: i16,
    /// Number of range gates (samples) in this field.
    pub nbins: i16,
    pub pulse_width_m: i16,
    /// Degrees, scaled by 64.
    pub beam_width_h: i16,
    /// Degrees, scaled by 64.
    pub beam_width_v: i16,
    /// MHz, scaled by 16.
    pub bandwidth: i16,
    /// Raw polarization code; decode with
    /// [`uf_radar_types::Polarization::from_code`].
    pub polarization: i16,
    /// Centimeters, scaled by 64.
    pub wavelength_cm: i16,
    pub sample_size: i16,
    pub threshold_data: String,
    pub threshold_value: i16,
    pub scale: i16,
    pub edit_code: String,
    /// Despite the name, this is microseconds.
    pub prt_ms: i16,
    /// Must be 16; any other value is a format error.
    pub bits_per_bin: i16,
}

impl FieldHeader {
    pub fn read_from<R: Read>(read: &mut R) -> Result<Self> {
        let data_offset = read.read_i16::<BigEndian>()?;
        let scale_factor = read.read_i16::<BigEndian>()?;
        let range_start_km = read.read_i16::<BigEndian>()?;
        let range_start_m = read.read_i16::<BigEndian>()?;
        let range_spacing_m = read.read_i16::<BigEndian>()?;
        let nbins = read.read_i16::<BigEndian>()?;
        let pulse_width_m = read.read_i16::<BigEndian>()?;
        let beam_width_h = read.read_i16::<BigEndian>()?;
        let beam_width_v = read.read_i16::<BigEndian>()?;
        let bandwidth = read.read_i16::<BigEndian>()?;
        let polarization = read.read_i16::<BigEndian>()?;
        let wavelength_cm = read.read_i16::<BigEndian>()?;
        let sample_size = read.read_i16::<BigEndian>()?;
        let mut threshold_data_raw = [0u8; 2];
        read.read_exact(&mut threshold_data_raw)?;
        let threshold_value = read.read_i16::<BigEndian>()?;
        let scale = read.read_i16::<BigEndian>()?;
        let mut edit_code_raw = [0u8; 2];
        read.read_exact(&mut edit_code_raw)?;
        let prt_ms = read.read_i16::<BigEndian>()?;
        let bits_per_bin = read.read_i16::<BigEndian>()?;
        Ok(Self {
            data_offset,
            scale_factor,
            range_start_km,
            range_start_m,
            range_spacing_m,
            nbins,
            pulse_width_m,
            beam_width_h,
            beam_width_v,
            bandwidth,
            polarization,
            wavelength_cm,
            sample_size,
            threshold_data: String::from_utf8_lossy(&threshold_data_raw).to_string(),
            threshold_value,
            scale,
            edit_code: String::from_utf8_lossy(&edit_code_raw).to_string(),
            prt_ms,
            bits_per_bin,
        })
    }

    pub const BYTE_LEN: usize = 38;
}
