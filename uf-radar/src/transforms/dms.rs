//! Degrees/minutes/seconds → decimal degrees (spec §4.2, §9).
//!
//! The mandatory header stores latitude and longitude as a signed `degrees`
//! field plus unsigned-magnitude `minutes` and `seconds` (the latter scaled
//! by 64). The sign lives only on `degrees`; it must be carried through to
//! the minutes and seconds terms rather than added unconditionally, which is
//! what the reference Python implementation does and which breaks for any
//! site with negative latitude or longitude (spec §9's explicit correctness
//! callout).

/// Convert a UF degrees/minutes/scaled-seconds triple to decimal degrees.
///
/// `seconds64` is seconds scaled by 64 (e.g. `1920` means `30.0` seconds).
pub fn dms_to_decimal_degrees(degrees: i16, minutes: i16, seconds64: i16) -> f64 {
    let sign = if degrees < 0 { -1.0 } else { 1.0 };
    let seconds = seconds64 as f64 / 64.0;
    let magnitude = degrees.unsigned_abs() as f64
        + (minutes.unsigned_abs() as f64 + seconds.abs() / 60.0) / 60.0;
    sign * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_latitude() {
        let lat = dms_to_decimal_degrees(36, 30, 1920);
        assert!((lat - 36.508_333_333_333_33).abs() < 1e-9);
    }

    #[test]
    fn negative_latitude_carries_sign() {
        let lat = dms_to_decimal_degrees(-36, 30, 1920);
        let positive = dms_to_decimal_degrees(36, 30, 1920);
        assert!((lat + positive).abs() < 1e-9);
    }

    #[test]
    fn zero_is_exact() {
        assert_eq!(dms_to_decimal_degrees(0, 0, 0), 0.0);
    }
}
