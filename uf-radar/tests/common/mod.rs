//! Synthetic in-memory UF byte-buffer builders shared by the integration
//! tests (spec §8's end-to-end scenarios need no on-disk fixtures).

pub fn push_i16(buf: &mut Vec<u8>, v: i16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

pub fn push_ascii(buf: &mut Vec<u8>, s: &str, len: usize) {
    let mut bytes = s.as_bytes().to_vec();
    bytes.resize(len, b' ');
    buf.extend_from_slice(&bytes);
}

pub const VELOCITY_TAGS: &[&str] = &["VF", "VE", "VR", "VT", "VP", "VL"];

/// One field's worth of synthetic data for a [`RaySpec`].
pub struct FieldSpec {
    pub tag: &'static str,
    pub samples: Vec<i16>,
    pub scale_factor: i16,
    pub polarization: i16,
    /// Nyquist value for velocity-tagged fields; irrelevant otherwise.
    /// `0` reproduces spec's "missing nyquist" fixture.
    pub nyquist: i16,
}

impl FieldSpec {
    pub fn dz(samples: Vec<i16>, scale_factor: i16) -> Self {
        Self {
            tag: "DZ",
            samples,
            scale_factor,
            polarization: 1,
            nyquist: 0,
        }
    }

    pub fn velocity(samples: Vec<i16>, scale_factor: i16, nyquist: i16) -> Self {
        Self {
            tag: "VR",
            samples,
            scale_factor,
            polarization: 1,
            nyquist,
        }
    }

    fn fsi_len(&self) -> usize {
        if VELOCITY_TAGS.contains(&self.tag) {
            4
        } else {
            0
        }
    }
}

/// One synthetic ray's worth of header values and fields.
pub struct RaySpec {
    pub sweep_number: i16,
    pub year: i16,
    pub azimuth: i16,
    pub elevation: i16,
    pub missing_data_value: i16,
    pub fields: Vec<FieldSpec>,
}

impl Default for RaySpec {
    fn default() -> Self {
        Self {
            sweep_number: 0,
            year: 98,
            azimuth: 0,
            elevation: 64,
            missing_data_value: -32768,
            fields: vec![FieldSpec::dz(vec![100, 200, -32768, 400], 10)],
        }
    }
}

fn word_offset(byte_offset: usize) -> i16 {
    (byte_offset / 2 + 1) as i16
}

/// Encode one ray as an exact-length record (no padding).
pub fn ray_bytes(spec: &RaySpec) -> Vec<u8> {
    let nfields = spec.fields.len();
    let header_block_len: usize = spec.fields.iter().map(|f| 38 + f.fsi_len()).sum();
    let samples_start_byte = 90 + 6 + nfields * 4 + header_block_len;

    let mut body = Vec::new();

    // Mandatory header. The data header immediately follows it, and the
    // optional/local-use header offsets are made equal so the optional
    // header is treated as absent.
    let offset_data_header = word_offset(90);
    push_ascii(&mut body, "UF", 2);
    push_i16(&mut body, 0); // record_length, patched at the end
    push_i16(&mut body, offset_data_header);
    push_i16(&mut body, offset_data_header);
    push_i16(&mut body, offset_data_header);
    push_i16(&mut body, 1); // record_number
    push_i16(&mut body, 1); // volume_number
    push_i16(&mut body, 1); // ray_number
    push_i16(&mut body, 1); // ray_record_number
    push_i16(&mut body, spec.sweep_number);
    push_ascii(&mut body, "RADAR", 8);
    push_ascii(&mut body, "SITE", 8);
    push_i16(&mut body, 36);
    push_i16(&mut body, 30);
    push_i16(&mut body, 1920);
    push_i16(&mut body, -105);
    push_i16(&mut body, 0);
    push_i16(&mut body, 0);
    push_i16(&mut body, 1000);
    push_i16(&mut body, spec.year);
    push_i16(&mut body, 1);
    push_i16(&mut body, 1);
    push_i16(&mut body, 0);
    push_i16(&mut body, 0);
    push_i16(&mut body, 0);
    push_ascii(&mut body, "UT", 2);
    push_i16(&mut body, spec.azimuth);
    push_i16(&mut body, spec.elevation);
    push_i16(&mut body, 1); // sweep_mode: ppi
    push_i16(&mut body, 64); // fixed_angle
    push_i16(&mut body, 640); // sweep_rate
    push_i16(&mut body, spec.year);
    push_i16(&mut body, 1);
    push_i16(&mut body, 1);
    push_ascii(&mut body, "TEST", 8);
    push_i16(&mut body, spec.missing_data_value);
    assert_eq!(body.len(), 90);

    push_i16(&mut body, nfields as i16); // ray_nfields
    push_i16(&mut body, 1); // ray_nrecords
    push_i16(&mut body, nfields as i16); // record_nfields
    assert_eq!(body.len(), 96);

    let mut field_header_byte = 90 + 6 + nfields * 4;
    for field in &spec.fields {
        push_ascii(&mut body, field.tag, 2);
        push_i16(&mut body, word_offset(field_header_byte));
        field_header_byte += 38 + field.fsi_len();
    }
    assert_eq!(body.len(), 90 + 6 + nfields * 4);

    let mut sample_byte = samples_start_byte;
    for field in &spec.fields {
        push_i16(&mut body, word_offset(sample_byte));
        push_i16(&mut body, field.scale_factor);
        push_i16(&mut body, 0); // range_start_km
        push_i16(&mut body, 0); // range_start_m
        push_i16(&mut body, 1000); // range_spacing_m
        push_i16(&mut body, field.samples.len() as i16);
        push_i16(&mut body, 0); // pulse_width_m
        push_i16(&mut body, 64); // beam_width_h
        push_i16(&mut body, 64); // beam_width_v
        push_i16(&mut body, 16); // bandwidth
        push_i16(&mut body, field.polarization);
        push_i16(&mut body, 640); // wavelength_cm
        push_i16(&mut body, 0); // sample_size
        push_ascii(&mut body, "  ", 2); // threshold_data
        push_i16(&mut body, 0); // threshold_value
        push_i16(&mut body, 0); // scale
        push_ascii(&mut body, "  ", 2); // edit_code
        push_i16(&mut body, 1000); // prt_ms
        push_i16(&mut body, 16); // bits_per_bin

        if VELOCITY_TAGS.contains(&field.tag) {
            push_i16(&mut body, field.nyquist);
            push_i16(&mut body, 0); // spare
        }

        sample_byte += field.samples.len() * 2;
    }
    assert_eq!(body.len(), samples_start_byte);

    for field in &spec.fields {
        for &sample in &field.samples {
            push_i16(&mut body, sample);
        }
    }

    let record_length_words = (body.len() / 2) as i16;
    let len_bytes = record_length_words.to_be_bytes();
    body[2] = len_bytes[0];
    body[3] = len_bytes[1];

    body
}

/// Concatenate several rays into one file-like byte stream, wrapping each
/// record with `padding` bytes of (zeroed) pre- and post-padding.
pub fn file_bytes(specs: &[RaySpec], padding: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for spec in specs {
        out.extend(std::iter::repeat(0u8).take(padding));
        out.extend(ray_bytes(spec));
        out.extend(std::iter::repeat(0u8).take(padding));
    }
    out
}
