//! Mandatory header, optional header, and data header structures.

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

use crate::error::{Result, UfError};

/// Pull a fixed-size ASCII field out of the record and return it with
/// trailing spaces (and NULs) trimmed. Liberal decoding per spec §7: bytes
/// that are not valid ASCII are replaced rather than rejected.
fn read_ascii<R: Read>(read: &mut R, len: usize) -> Result<String> {
    let mut buf = vec![0u8; len];
    read.read_exact(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf)
        .trim_end_matches(['\0', ' '])
        .to_string())
}

/// The 90-byte mandatory header every UF record carries. Identifies a ray:
/// who recorded it, when, where the antenna was pointed, and where the rest
/// of the record's sections live.
#[derive(Debug, Clone, PartialEq)]
pub struct MandatoryHeader {
    /// Literal "UF".
    pub uf_string: String,
    /// Record length in 16-bit words, including headers and field data.
    pub record_length: i16,
    /// 1-based word offset to the optional header, or equal to
    /// `offset_local_use_header` if absent.
    pub offset_optional_header: i16,
    /// 1-based word offset to the local-use header (never decoded).
    pub offset_local_use_header: i16,
    /// 1-based word offset to the data header.
    pub offset_data_header: i16,
    pub record_number: i16,
    pub volume_number: i16,
    pub ray_number: i16,
    pub ray_record_number: i16,
    pub sweep_number: i16,
    /// 8-byte space-padded ASCII, trimmed.
    pub radar_name: String,
    /// 8-byte space-padded ASCII, trimmed.
    pub site_name: String,
    pub latitude_degrees: i16,
    pub latitude_minutes: i16,
    /// Seconds, scaled by 64.
    pub latitude_seconds: i16,
    pub longitude_degrees: i16,
    pub longitude_minutes: i16,
    /// Seconds, scaled by 64.
    pub longitude_seconds: i16,
    pub height_above_sea_level: i16,
    /// 2-digit in older files; see spec §4.2 for the windowing rule.
    pub year: i16,
    pub month: i16,
    pub day: i16,
    pub hour: i16,
    pub minute: i16,
    pub second: i16,
    pub time_zone: String,
    /// Degrees, scaled by 64.
    pub azimuth: i16,
    /// Degrees, scaled by 64.
    pub elevation: i16,
    /// Raw sweep-mode code (0-7); decode with
    /// [`uf_radar_types::SweepMode::from_code`].
    pub sweep_mode: i16,
    /// Degrees, scaled by 64.
    pub fixed_angle: i16,
    /// Degrees per second, scaled by 64.
    pub sweep_rate: i16,
    pub generation_year: i16,
    pub generation_month: i16,
    pub generation_day: i16,
    pub generation_facility_name: String,
    /// Sentinel raw value meaning "no measurement".
    pub missing_data_value: i16,
}

impl MandatoryHeader {
    /// Decode a mandatory header starting at the current read position.
    pub fn read_from<R: Read>(read: &mut R) -> Result<Self> {
        let uf_string = read_ascii(read, 2)?;
        if uf_string != "UF" {
            return Err(UfError::InvalidFormat(format!(
                "expected \"UF\" magic, found {uf_string:?}"
            )));
        }
        Ok(Self {
            uf_string,
            record_length: read.read_i16::<BigEndian>()?,
            offset_optional_header: read.read_i16::<BigEndian>()?,
            offset_local_use_header: read.read_i16::<BigEndian>()?,
            offset_data_header: read.read_i16::<BigEndian>()?,
            record_number: read.read_i16::<BigEndian>()?,
            volume_number: read.read_i16::<BigEndian>()?,
            ray_number: read.read_i16::<BigEndian>()?,
            ray_record_number: read.read_i16::<BigEndian>()?,
            sweep_number: read.read_i16::<BigEndian>()?,
            radar_name: read_ascii(read, 8)?,
            site_name: read_ascii(read, 8)?,
            latitude_degrees: read.read_i16::<BigEndian>()?,
            latitude_minutes: read.read_i16::<BigEndian>()?,
            latitude_seconds: read.read_i16::<BigEndian>()?,
            longitude_degrees: read.read_i16::<BigEndian>()?,
            longitude_minutes: read.read_i16::<BigEndian>()?,
            longitude_seconds: read.read_i16::<BigEndian>()?,
            height_above_sea_level: read.read_i16::<BigEndian>()?,
            year: read.read_i16::<BigEndian>()?,
            month: read.read_i16::<BigEndian>()?,
            day: read.read_i16::<BigEndian>()?,
            hour: read.read_i16::<BigEndian>()?,
            minute: read.read_i16::<BigEndian>()?,
            second: read.read_i16::<BigEndian>()?,
            time_zone: read_ascii(read, 2)?,
            azimuth: read.read_i16::<BigEndian>()?,
            elevation: read.read_i16::<BigEndian>()?,
            sweep_mode: read.read_i16::<BigEndian>()?,
            fixed_angle: read.read_i16::<BigEndian>()?,
            sweep_rate: read.read_i16::<BigEndian>()?,
            generation_year: read.read_i16::<BigEndian>()?,
            generation_month: read.read_i16::<BigEndian>()?,
            generation_day: read.read_i16::<BigEndian>()?,
            generation_facility_name: read_ascii(read, 8)?,
            missing_data_value: read.read_i16::<BigEndian>()?,
        })
    }

    /// Byte length of the mandatory header as laid out on disk.
    pub const BYTE_LEN: usize = 90;
}

/// The 28-byte optional header, present only when
/// `offset_optional_header != offset_local_use_header` and nonzero (spec §4.2,
/// §9's documented precedence).
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalHeader {
    pub project_name: String,
    pub baseline_azimuth: i16,
    pub baseline_elevation: i16,
    pub volume_hour: i16,
    pub volume_minute: i16,
    pub volume_second: i16,
    pub tape_name: String,
    pub flag: i16,
}

impl OptionalHeader {
    pub fn read_from<R: Read>(read: &mut R) -> Result<Self> {
        Ok(Self {
            project_name: read_ascii(read, 8)?,
            baseline_azimuth: read.read_i16::<BigEndian>()?,
            baseline_elevation: read.read_i16::<BigEndian>()?,
            volume_hour: read.read_i16::<BigEndian>()?,
            volume_minute: read.read_i16::<BigEndian>()?,
            volume_second: read.read_i16::<BigEndian>()?,
            tape_name: read_ascii(read, 8)?,
            flag: read.read_i16::<BigEndian>()?,
        })
    }

    pub const BYTE_LEN: usize = 28;
}

/// The 6-byte data header, immediately followed by `record_nfields`
/// [`super::FieldPosition`] entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataHeader {
    pub ray_nfields: i16,
    pub ray_nrecords: i16,
    pub record_nfields: i16,
}

impl DataHeader {
    pub fn read_from<R: Read>(read: &mut R) -> Result<Self> {
        Ok(Self {
            ray_nfields: read.read_i16::<BigEndian>()?,
            ray_nrecords: read.read_i16::<BigEndian>()?,
            record_nfields: read.read_i16::<BigEndian>()?,
        })
    }

    pub const BYTE_LEN: usize = 6;
}
