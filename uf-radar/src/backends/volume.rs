//! Volume-level aggregation from a flat ray list (spec §4.3).

use chrono::{DateTime, Utc};
use ndarray::Array2;
use std::collections::HashMap;

use crate::error::{Result, UfError};
use crate::model::{Coordinates, InstrumentParameters, MomentData, SweepData, SweepMetadata, VolumeData, VolumeMetadata};
use crate::options::ReadOptions;
use crate::ray::{FieldRecord, Ray};
use crate::reader::SweepIndex;
use uf_radar_types::{MomentMetadata, Polarization, SweepMode};

/// Speed of light, m/s.
const C: f64 = 2.99792458e8;

/// Aggregate decoded rays into the produced volume (spec §4.3).
pub fn assemble(rays: Vec<Ray>, options: &ReadOptions) -> Result<VolumeData> {
    if rays.is_empty() {
        return Err(UfError::InvalidFormat("no rays decoded".into()));
    }

    let datetimes = rays
        .iter()
        .map(|ray| {
            ray.datetime().ok_or_else(|| {
                UfError::InvalidFormat("ray carries a calendar date/time that cannot be represented".into())
            })
        })
        .collect::<Result<Vec<DateTime<Utc>>>>()?;

    let time_coverage_start = *datetimes.iter().min().unwrap();
    let time_coverage_end = *datetimes.iter().max().unwrap();

    let sweep_index = SweepIndex::build(&rays);
    let ray0 = &rays[0];

    let mut sweeps = Vec::with_capacity(sweep_index.nsweeps());
    let mut sweep_fixed_angles = Vec::with_capacity(sweep_index.nsweeps());

    for i in 0..sweep_index.nsweeps() {
        let start = sweep_index.first_ray_in_sweep[i];
        let end = sweep_index.last_ray_in_sweep[i];
        let sweep_rays = &rays[start..=end];
        let sweep_datetimes = &datetimes[start..=end];

        let sweep = assemble_sweep(
            sweep_index.sweep_numbers[i] as u32,
            sweep_rays,
            sweep_datetimes,
            time_coverage_start,
            start,
            end,
            options,
        )?;
        sweep_fixed_angles.push(sweep.metadata.fixed_angle);
        sweeps.push(sweep);
    }

    let instrument_parameters = assemble_instrument_parameters(&rays)?;

    let sweep_mode = SweepMode::from_code(ray0.mandatory_header.sweep_mode);
    let (lat, lon, alt) = ray0.location();

    let metadata = VolumeMetadata {
        radar_name: ray0.mandatory_header.radar_name.clone(),
        site_name: ray0.mandatory_header.site_name.clone(),
        latitude: lat,
        longitude: lon,
        altitude: alt,
        time_coverage_start,
        time_coverage_end,
        sweep_group_names: (0..sweeps.len()).map(|i| format!("sweep_{i}")).collect(),
        sweep_fixed_angles,
        scan_type: sweep_mode.scan_type().to_string(),
        instrument_parameters,
    };

    Ok(VolumeData { metadata, sweeps })
}

fn assemble_sweep(
    sweep_number: u32,
    sweep_rays: &[Ray],
    sweep_datetimes: &[DateTime<Utc>],
    volume_start: DateTime<Utc>,
    start_ray_index: usize,
    end_ray_index: usize,
    options: &ReadOptions,
) -> Result<SweepData> {
    let ray0 = &sweep_rays[0];
    let first_field = ray0
        .fields
        .first()
        .ok_or_else(|| UfError::InvalidFormat("ray carries no fields".into()))?;

    let time: Vec<f64> = sweep_datetimes
        .iter()
        .map(|dt| (*dt - volume_start).num_milliseconds() as f64 / 1000.0)
        .collect();

    let range_start_m = first_field.header.range_start_km as f64 * 1000.0
        + first_field.header.range_start_m as f64;
    let range_spacing_m = first_field.header.range_spacing_m as f64;
    let ngates_coord = first_field.raw.len();
    let range: Vec<f32> = (0..ngates_coord)
        .map(|i| (range_start_m + i as f64 * range_spacing_m) as f32)
        .collect();

    let azimuth: Vec<f32> = sweep_rays.iter().map(|r| r.azimuth_deg() as f32).collect();
    let elevation: Vec<f32> = sweep_rays.iter().map(|r| r.elevation_deg() as f32).collect();
    let time_units = format!("seconds since {}", volume_start.to_rfc3339());
    let coordinates = Coordinates::new(time, time_units, range, azimuth, elevation);

    let mut moments = HashMap::new();
    for position in &ray0.fields {
        let tag = position.position.data_type.as_str();
        let name = options.resolve_name(tag).to_string();
        if options.is_excluded(&name) {
            continue;
        }
        moments.insert(name.clone(), assemble_moment(&name, tag, ray0, sweep_rays)?);
    }

    let (polarization, recognized) = first_field.polarization();
    if !recognized {
        log::warn!(
            "sweep {sweep_number}: unrecognized polarization code {}, falling back to elliptical",
            first_field.header.polarization
        );
    }

    let nyquist_velocity = sweep_nyquist(sweep_rays);
    let sweep_mode = SweepMode::from_code(ray0.mandatory_header.sweep_mode);

    let metadata = SweepMetadata {
        sweep_number,
        sweep_mode,
        sweep_mode_label: sweep_mode.sweep_mode_label().to_string(),
        fixed_angle: ray0.fixed_angle_deg(),
        sweep_rate: ray0.sweep_rate_deg_per_sec(),
        polarization_mode: polarization.as_str().to_string(),
        nyquist_velocity,
        sweep_start_ray_index: start_ray_index,
        sweep_end_ray_index: end_ray_index,
    };

    Ok(SweepData {
        metadata,
        moments,
        coordinates,
    })
}

fn assemble_moment(name: &str, tag: &str, ray0: &Ray, sweep_rays: &[Ray]) -> Result<MomentData> {
    let ray0_field = find_field(ray0, tag)
        .ok_or_else(|| UfError::InvalidFormat(format!("field {tag:?} missing from ray 0 of its sweep")))?;

    let ngates = ray0_field.raw.len();
    let missing_data_value = ray0.mandatory_header.missing_data_value;
    let scale_factor = ray0_field.scale_factor();

    let mut raw = Array2::<i16>::from_elem((sweep_rays.len(), ngates), missing_data_value);
    for (row, ray) in sweep_rays.iter().enumerate() {
        let Some(field) = find_field(ray, tag) else {
            log::warn!("ray missing field {tag:?} present in sweep's first ray; row left as missing");
            continue;
        };
        let n = ngates.min(field.raw.len());
        raw.row_mut(row)
            .slice_mut(ndarray::s![..n])
            .assign(&ndarray::ArrayView1::from(&field.raw[..n]));
    }

    let data = raw.mapv(|v| v as f32 / scale_factor as f32);
    let mask = raw.mapv(|v| v == missing_data_value);

    let meta = MomentMetadata::from_tag(tag);

    Ok(MomentData {
        name: name.to_string(),
        standard_name: meta.map(|m| m.standard_name.to_string()),
        long_name: meta.map(|m| m.long_name.to_string()),
        units: meta.map(|m| m.units.to_string()).unwrap_or_else(|| "unknown".to_string()),
        raw,
        data,
        mask,
        scale_factor,
        missing_data_value,
    })
}

fn find_field<'a>(ray: &'a Ray, tag: &str) -> Option<&'a FieldRecord> {
    ray.fields.iter().find(|f| f.position.data_type == tag)
}

/// Per-ray nyquist velocity (scaled), `None` if the ray has no velocity
/// field or its FSI reports nyquist `0` (spec's "missing nyquist" fixture).
fn ray_nyquist(ray: &Ray) -> Option<f64> {
    let field = ray
        .fields
        .iter()
        .find(|f| matches!(f.fsi, crate::raw::Fsi::Velocity { .. }))?;
    let nyquist = field.fsi.nyquist()?;
    if nyquist == 0 {
        return None;
    }
    Some(nyquist as f64 / field.scale_factor())
}

/// Per-sweep nyquist accessor: absent if any ray in the sweep lacks it
/// (spec §4.3's absence-propagation rule).
fn sweep_nyquist(sweep_rays: &[Ray]) -> Option<f64> {
    let mut values = Vec::with_capacity(sweep_rays.len());
    for ray in sweep_rays {
        values.push(ray_nyquist(ray)?);
    }
    values.first().copied()
}

fn assemble_instrument_parameters(rays: &[Ray]) -> Result<InstrumentParameters> {
    let ray0 = &rays[0];
    let ray0_field = ray0
        .fields
        .first()
        .ok_or_else(|| UfError::InvalidFormat("ray carries no fields".into()))?;

    let pulse_width = rays
        .iter()
        .map(|r| {
            r.fields
                .first()
                .map(|f| f.header.pulse_width_m as f64 / C)
                .ok_or_else(|| UfError::InvalidFormat("ray carries no fields".into()))
        })
        .collect::<Result<Vec<f64>>>()?;

    let prt = rays
        .iter()
        .map(|r| {
            r.fields
                .first()
                .map(|f| f.header.prt_ms as f64 / 1.0e6)
                .ok_or_else(|| UfError::InvalidFormat("ray carries no fields".into()))
        })
        .collect::<Result<Vec<f64>>>()?;

    let mut nyquist_velocity = Some(Vec::with_capacity(rays.len()));
    for ray in rays {
        match (ray_nyquist(ray), &mut nyquist_velocity) {
            (Some(v), Some(acc)) => acc.push(v),
            _ => {
                nyquist_velocity = None;
            }
        }
        if nyquist_velocity.is_none() {
            log::debug!("volume-wide nyquist_velocity unavailable: at least one ray lacks it");
            break;
        }
    }

    let wavelength = ray0_field.header.wavelength_cm as f64 / 64.0 / 100.0;

    Ok(InstrumentParameters {
        pulse_width,
        beam_width_h: ray0_field.header.beam_width_h as f64 / 64.0,
        beam_width_v: ray0_field.header.beam_width_v as f64 / 64.0,
        bandwidth: ray0_field.header.bandwidth as f64 / 16.0 * 1.0e6,
        wavelength,
        frequency: C / wavelength,
        prt,
        nyquist_velocity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{DataHeader, FieldHeader, FieldPosition, Fsi, MandatoryHeader};

    fn field(tag: &str, raw: Vec<i16>, scale_factor: i16, polarization: i16) -> FieldRecord {
        FieldRecord {
            position: FieldPosition {
                data_type: tag.to_string(),
                offset_field_header: 0,
            },
            header: FieldHeader {
                data_offset: 0,
                scale_factor,
                range_start_km: 0,
                range_start_m: 0,
                range_spacing_m: 1000,
                nbins: raw.len() as i16,
                pulse_width_m: 0,
                beam_width_h: 64,
                beam_width_v: 64,
                bandwidth: 0,
                polarization,
                wavelength_cm: 0,
                sample_size: 0,
                threshold_data: String::new(),
                threshold_value: 0,
                scale: 0,
                edit_code: String::new(),
                prt_ms: 0,
                bits_per_bin: 16,
            },
            fsi: Fsi::None,
            raw,
        }
    }

    fn ray(sweep_number: i16, year: i16, azimuth: i16, fields: Vec<FieldRecord>) -> Ray {
        Ray {
            mandatory_header: MandatoryHeader {
                uf_string: "UF".to_string(),
                record_length: 0,
                offset_optional_header: 0,
                offset_local_use_header: 0,
                offset_data_header: 0,
                record_number: 0,
                volume_number: 1,
                ray_number: 0,
                ray_record_number: 0,
                sweep_number,
                radar_name: "RADAR".to_string(),
                site_name: "SITE".to_string(),
                latitude_degrees: 36,
                latitude_minutes: 30,
                latitude_seconds: 1920,
                longitude_degrees: -105,
                longitude_minutes: 0,
                longitude_seconds: 0,
                height_above_sea_level: 1000,
                year,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
                time_zone: "UT".to_string(),
                azimuth,
                elevation: 64,
                sweep_mode: 1,
                fixed_angle: 64,
                sweep_rate: 640,
                generation_year: year,
                generation_month: 1,
                generation_day: 1,
                generation_facility_name: String::new(),
                missing_data_value: -32768,
            },
            optional_header: None,
            data_header: DataHeader {
                ray_nfields: fields.len() as i16,
                ray_nrecords: 1,
                record_nfields: fields.len() as i16,
            },
            fields,
        }
    }

    #[test]
    fn single_ray_ppi_masks_and_scales() {
        let rays = vec![ray(
            0,
            98,
            0,
            vec![field("DZ", vec![100, 200, -32768, 400], 10, 1)],
        )];
        let volume = assemble(rays, &ReadOptions::default()).unwrap();
        let sweep = &volume.sweeps[0];
        let moment = sweep.get_moment("DZ").unwrap();
        assert_eq!(moment.data.row(0).to_vec(), vec![10.0, 20.0, -3276.8, 40.0]);
        assert_eq!(moment.mask.row(0).to_vec(), vec![false, false, true, false]);
    }

    #[test]
    fn year_before_1900_is_windowed() {
        let rays = vec![ray(0, 11, 0, vec![field("DZ", vec![1], 1, 1)])];
        let volume = assemble(rays, &ReadOptions::default()).unwrap();
        assert_eq!(volume.metadata.time_coverage_start.format("%Y").to_string(), "2011");
    }

    #[test]
    fn unknown_polarization_falls_back_to_elliptical() {
        let rays = vec![ray(0, 98, 0, vec![field("DZ", vec![1], 1, 99)])];
        let volume = assemble(rays, &ReadOptions::default()).unwrap();
        assert_eq!(volume.sweeps[0].metadata.polarization_mode, "elliptical");
    }
}
