//! Reader for Universal Format (UF) Doppler weather radar volume-scan files.
//!
//! `UF` is a legacy big-endian binary format for storing radar sweeps and
//! volumes as a sequence of fixed-layout records, one per ray. This crate
//! decodes a whole file or stream into a dense, typed, in-memory
//! [`VolumeData`] through the single entry point [`read_uf`].
//!
//! The pipeline has three layers: [`reader::FileReader`] frames the raw byte
//! stream into records, [`ray::Ray`] decodes one record's headers and field
//! samples, and the `backends::volume` assembler aggregates the decoded rays
//! into sweeps and a volume.

pub mod backends;
pub mod error;
pub mod model;
pub mod options;
pub mod ray;
pub mod raw;
pub mod reader;
pub mod transforms;

pub use error::{Result, UfError};
pub use model::{Coordinates, InstrumentParameters, MomentData, SweepData, SweepMetadata, VolumeData, VolumeMetadata};
pub use options::{ReadOptions, UfSource};

/// Decode a UF file or stream into a complete [`VolumeData`].
///
/// `source` is either a filesystem path or any readable byte stream;
/// `options` controls field renaming and exclusion (spec's "Options &
/// entry point").
pub fn read_uf(source: UfSource, options: ReadOptions) -> Result<VolumeData> {
    let reader = reader::FileReader::new(source.into_reader()?)?;
    let rays = reader.read_all_rays()?;
    backends::assemble(rays, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn push_i16(buf: &mut Vec<u8>, v: i16) {
        buf.extend_from_slice(&v.to_be_bytes());
    }

    fn push_ascii(buf: &mut Vec<u8>, s: &str, len: usize) {
        let mut bytes = s.as_bytes().to_vec();
        bytes.resize(len, b' ');
        buf.extend_from_slice(&bytes);
    }

    /// Build a single-ray, single-field, single-sweep UF record with no
    /// padding, matching spec's "Single-ray PPI" end-to-end scenario.
    fn single_ray_ppi_bytes() -> Vec<u8> {
        let samples: Vec<i16> = vec![100, 200, -32768, 400];
        let nbins = samples.len() as i16;

        // Layout (in words): mandatory header [1..45], data header [46..48],
        // field position [49..50], field header [51..69], samples [70..73].
        let offset_data_header: i16 = 46;
        let offset_field_header: i16 = 51;
        let data_offset: i16 = 51 + 19; // right after the 19-word (38-byte) field header

        let mut body = Vec::new();
        push_ascii(&mut body, "UF", 2);
        push_i16(&mut body, 0); // record_length, patched below
        push_i16(&mut body, offset_data_header); // offset_optional_header == offset_data_header's sibling: mark absent via equality to local-use header
        push_i16(&mut body, offset_data_header); // offset_local_use_header (equal -> optional header absent)
        push_i16(&mut body, offset_data_header);
        push_i16(&mut body, 1); // record_number
        push_i16(&mut body, 1); // volume_number
        push_i16(&mut body, 1); // ray_number
        push_i16(&mut body, 1); // ray_record_number
        push_i16(&mut body, 0); // sweep_number
        push_ascii(&mut body, "RADAR", 8);
        push_ascii(&mut body, "SITE", 8);
        push_i16(&mut body, 36); // latitude_degrees
        push_i16(&mut body, 30); // latitude_minutes
        push_i16(&mut body, 1920); // latitude_seconds (x64)
        push_i16(&mut body, -105); // longitude_degrees
        push_i16(&mut body, 0);
        push_i16(&mut body, 0);
        push_i16(&mut body, 1000); // height_above_sea_level
        push_i16(&mut body, 98); // year
        push_i16(&mut body, 1); // month
        push_i16(&mut body, 1); // day
        push_i16(&mut body, 0); // hour
        push_i16(&mut body, 0); // minute
        push_i16(&mut body, 0); // second
        push_ascii(&mut body, "UT", 2);
        push_i16(&mut body, 0); // azimuth
        push_i16(&mut body, 64); // elevation (1 degree)
        push_i16(&mut body, 1); // sweep_mode (ppi)
        push_i16(&mut body, 64); // fixed_angle
        push_i16(&mut body, 640); // sweep_rate
        push_i16(&mut body, 98); // generation_year
        push_i16(&mut body, 1); // generation_month
        push_i16(&mut body, 1); // generation_day
        push_ascii(&mut body, "TEST", 8);
        push_i16(&mut body, -32768); // missing_data_value
        assert_eq!(body.len(), 90);

        // data header
        push_i16(&mut body, 1); // ray_nfields
        push_i16(&mut body, 1); // ray_nrecords
        push_i16(&mut body, 1); // record_nfields
        assert_eq!(body.len(), 96);

        // field position
        push_ascii(&mut body, "DZ", 2);
        push_i16(&mut body, offset_field_header);
        assert_eq!(body.len(), 100);

        // field header
        push_i16(&mut body, data_offset);
        push_i16(&mut body, 10); // scale_factor
        push_i16(&mut body, 0); // range_start_km
        push_i16(&mut body, 0); // range_start_m
        push_i16(&mut body, 1000); // range_spacing_m
        push_i16(&mut body, nbins);
        push_i16(&mut body, 0); // pulse_width_m
        push_i16(&mut body, 64); // beam_width_h
        push_i16(&mut body, 64); // beam_width_v
        push_i16(&mut body, 16); // bandwidth
        push_i16(&mut body, 1); // polarization (horizontal)
        push_i16(&mut body, 640); // wavelength_cm
        push_i16(&mut body, 0); // sample_size
        push_ascii(&mut body, "  ", 2); // threshold_data
        push_i16(&mut body, 0); // threshold_value
        push_i16(&mut body, 0); // scale
        push_ascii(&mut body, "  ", 2); // edit_code
        push_i16(&mut body, 1000); // prt_ms
        push_i16(&mut body, 16); // bits_per_bin
        assert_eq!(body.len(), 138);

        for sample in samples {
            push_i16(&mut body, sample);
        }

        let record_length_words = (body.len() / 2) as i16;
        let len_bytes = record_length_words.to_be_bytes();
        body[2] = len_bytes[0];
        body[3] = len_bytes[1];

        body
    }

    #[test]
    fn reads_single_ray_ppi_end_to_end() {
        let bytes = single_ray_ppi_bytes();
        let volume = read_uf(
            UfSource::from_reader(Cursor::new(bytes)),
            ReadOptions::default(),
        )
        .unwrap();

        assert_eq!(volume.num_sweeps(), 1);
        let sweep = volume.get_sweep(0).unwrap();
        let moment = sweep.get_moment("DZ").unwrap();
        assert_eq!(moment.data.row(0).to_vec(), vec![10.0, 20.0, -3276.8, 40.0]);
        assert_eq!(moment.mask.row(0).to_vec(), vec![false, false, true, false]);
        assert_eq!(volume.metadata.radar_name, "RADAR");
    }

    #[test]
    fn padded_and_unpadded_decode_identically() {
        let plain = single_ray_ppi_bytes();
        let mut padded = vec![0u8, 0u8];
        padded.extend_from_slice(&plain);
        padded.extend_from_slice(&[0u8, 0u8]);

        let a = read_uf(UfSource::from_reader(Cursor::new(plain)), ReadOptions::default()).unwrap();
        let b = read_uf(UfSource::from_reader(Cursor::new(padded)), ReadOptions::default()).unwrap();

        assert_eq!(a.sweeps[0].coordinates.azimuth, b.sweeps[0].coordinates.azimuth);
        assert_eq!(
            a.sweeps[0].get_moment("DZ").unwrap().data,
            b.sweeps[0].get_moment("DZ").unwrap().data
        );
    }

    #[test]
    fn empty_input_is_invalid_format() {
        let err = read_uf(UfSource::from_reader(Cursor::new(Vec::new())), ReadOptions::default())
            .unwrap_err();
        assert!(matches!(err, UfError::InvalidFormat(_)));
    }

    #[test]
    fn wrong_magic_is_invalid_format() {
        let err = read_uf(
            UfSource::from_reader(Cursor::new(b"XXXXXXXX".to_vec())),
            ReadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, UfError::InvalidFormat(_)));
    }
}
