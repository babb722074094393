//! Per-record decoding: the `RayDecoder` layer (spec §4.2).
//!
//! A [`Ray`] is built once, fully formed, from a single in-memory record
//! byte slice of exact record length. All 1-based word offsets are
//! bounds-checked against the record before being dereferenced.

use byteorder::{BigEndian, ReadBytesExt};
use chrono::{DateTime, TimeZone, Utc};
use std::io::{Cursor, Seek, SeekFrom};

use crate::error::{Result, UfError};
use crate::raw::{
    word_offset_to_byte_index, DataHeader, FieldHeader, FieldPosition, Fsi, MandatoryHeader,
    OptionalHeader,
};
use crate::transforms::dms::dms_to_decimal_degrees;
use uf_radar_types::Polarization;

/// One field's fully-decoded position entry, header, optional suffix, and
/// raw samples — built as a single immutable value (spec §9).
#[derive(Debug, Clone)]
pub struct FieldRecord {
    pub position: FieldPosition,
    pub header: FieldHeader,
    pub fsi: Fsi,
    /// Raw signed 16-bit samples, length `header.nbins`.
    pub raw: Vec<i16>,
}

impl FieldRecord {
    /// Scale factor applied to `raw` to recover physical units.
    pub fn scale_factor(&self) -> f64 {
        self.header.scale_factor as f64
    }

    /// Decoded polarization, liberally falling back to `Elliptical` for an
    /// unrecognized code (spec §3, §7). Returns whether the raw code was
    /// recognized so the caller can log the fallback.
    pub fn polarization(&self) -> (Polarization, bool) {
        Polarization::from_code(self.header.polarization)
    }
}

/// One decoded UF record: one radar pulse at a given azimuth/elevation.
#[derive(Debug, Clone)]
pub struct Ray {
    pub mandatory_header: MandatoryHeader,
    pub optional_header: Option<OptionalHeader>,
    pub data_header: DataHeader,
    pub fields: Vec<FieldRecord>,
}

impl Ray {
    /// Decode one ray from an exact-length record byte slice (no padding).
    pub fn decode(record: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(record);

        let mandatory_header = MandatoryHeader::read_from(&mut cursor)?;

        // Open question resolved (spec §9): optional header is present only
        // when both formulations the source uses agree it is - nonzero and
        // distinct from the local-use header's offset.
        let optional_header_present = mandatory_header.offset_optional_header != 0
            && mandatory_header.offset_optional_header
                != mandatory_header.offset_local_use_header;

        let optional_header = if optional_header_present {
            let offset = seek_to_word(&mut cursor, record, mandatory_header.offset_optional_header,
                OptionalHeader::BYTE_LEN, "optional header")?;
            let _ = offset;
            Some(OptionalHeader::read_from(&mut cursor)?)
        } else {
            None
        };

        seek_to_word(
            &mut cursor,
            record,
            mandatory_header.offset_data_header,
            DataHeader::BYTE_LEN,
            "data header",
        )?;
        let data_header = DataHeader::read_from(&mut cursor)?;

        let mut positions = Vec::with_capacity(data_header.record_nfields.max(0) as usize);
        for _ in 0..data_header.record_nfields {
            positions.push(FieldPosition::read_from(&mut cursor)?);
        }

        let mut fields = Vec::with_capacity(positions.len());
        for position in positions {
            fields.push(decode_field(record, &position)?);
        }

        Ok(Self {
            mandatory_header,
            optional_header,
            data_header,
            fields,
        })
    }

    /// Reconstruct this ray's timestamp (spec §4.2 "Datetime reconstruction").
    ///
    /// The mandatory header's `year` is 2-digit in older files: values below
    /// 1900 are windowed to `year + 2000`.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        let h = &self.mandatory_header;
        let year = if h.year < 1900 {
            h.year as i32 + 2000
        } else {
            h.year as i32
        };
        Utc.with_ymd_and_hms(
            year,
            h.month as u32,
            h.day as u32,
            h.hour as u32,
            h.minute as u32,
            h.second as u32,
        )
        .single()
    }

    /// Reconstruct this ray's (latitude, longitude, altitude) (spec §4.2
    /// "Location reconstruction").
    pub fn location(&self) -> (f64, f64, f64) {
        let h = &self.mandatory_header;
        let lat = dms_to_decimal_degrees(h.latitude_degrees, h.latitude_minutes, h.latitude_seconds);
        let lon = dms_to_decimal_degrees(h.longitude_degrees, h.longitude_minutes, h.longitude_seconds);
        (lat, lon, h.height_above_sea_level as f64)
    }

    /// Azimuth in degrees (mandatory header value divided by 64).
    pub fn azimuth_deg(&self) -> f64 {
        self.mandatory_header.azimuth as f64 / 64.0
    }

    /// Elevation in degrees (mandatory header value divided by 64).
    pub fn elevation_deg(&self) -> f64 {
        self.mandatory_header.elevation as f64 / 64.0
    }

    /// Fixed angle in degrees (mandatory header value divided by 64).
    pub fn fixed_angle_deg(&self) -> f64 {
        self.mandatory_header.fixed_angle as f64 / 64.0
    }

    /// Sweep rate in degrees/second (mandatory header value divided by 64).
    pub fn sweep_rate_deg_per_sec(&self) -> f64 {
        self.mandatory_header.sweep_rate as f64 / 64.0
    }
}

/// Seek the cursor to the byte offset for a 1-based word offset, verifying
/// that `needed` bytes fit within `record` from there.
fn seek_to_word(
    cursor: &mut Cursor<&[u8]>,
    record: &[u8],
    word_offset: i16,
    needed: usize,
    what: &str,
) -> Result<usize> {
    let byte_index = word_offset_to_byte_index(word_offset).ok_or_else(|| {
        UfError::InvalidFormat(format!("{what} offset {word_offset} is not a valid 1-based word offset"))
    })?;
    if byte_index + needed > record.len() {
        return Err(UfError::InvalidFormat(format!(
            "{what} at byte {byte_index} (len {needed}) falls outside record of {} bytes",
            record.len()
        )));
    }
    cursor.seek(SeekFrom::Start(byte_index as u64))?;
    Ok(byte_index)
}

fn decode_field(record: &[u8], position: &FieldPosition) -> Result<FieldRecord> {
    let mut cursor = Cursor::new(record);
    seek_to_word(
        &mut cursor,
        record,
        position.offset_field_header,
        FieldHeader::BYTE_LEN,
        "field header",
    )?;
    let header = FieldHeader::read_from(&mut cursor)?;

    if header.bits_per_bin != 16 {
        return Err(UfError::InvalidFormat(format!(
            "field {:?} has bits_per_bin {} (only 16 is supported)",
            position.data_type, header.bits_per_bin
        )));
    }

    let fsi_len = Fsi::byte_len(&position.data_type);
    let fsi = if fsi_len > 0 {
        // The FSI immediately follows the field header, at the cursor's
        // current position after reading it.
        Fsi::read_from(&mut cursor, &position.data_type)?
    } else {
        Fsi::None
    };

    let nbins = header.nbins.max(0) as usize;
    let sample_bytes = nbins * 2;
    let data_offset = seek_to_word(
        &mut cursor,
        record,
        header.data_offset,
        sample_bytes,
        "field data",
    )?;
    let _ = data_offset;

    let mut raw = Vec::with_capacity(nbins);
    for _ in 0..nbins {
        raw.push(cursor.read_i16::<BigEndian>()?);
    }

    Ok(FieldRecord {
        position: position.clone(),
        header,
        fsi,
        raw,
    })
}
