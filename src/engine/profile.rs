/// Validation failure raised by a domain normalizer. Surfaced to the caller
/// as a user-facing message; never silently defaulted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidProfileError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("field '{field}' out of range: {detail}")]
    OutOfRange { field: &'static str, detail: String },
    #[error("orbit geometry invalid: perigee {perigee_km} km exceeds apogee {apogee_km} km")]
    OrbitGeometry { perigee_km: f64, apogee_km: f64 },
}

pub(crate) fn require_count_at_least(
    field: &'static str,
    value: u32,
    min: u32,
) -> Result<u32, InvalidProfileError> {
    if value < min {
        return Err(InvalidProfileError::OutOfRange {
            field,
            detail: format!("expected at least {min}, found {value}"),
        });
    }
    Ok(value)
}

pub(crate) fn require_positive(
    field: &'static str,
    value: f64,
) -> Result<f64, InvalidProfileError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(InvalidProfileError::OutOfRange {
            field,
            detail: format!("expected a positive number, found {value}"),
        });
    }
    Ok(value)
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: f64,
) -> Result<f64, InvalidProfileError> {
    if !value.is_finite() || value < 0.0 {
        return Err(InvalidProfileError::OutOfRange {
            field,
            detail: format!("expected a non-negative number, found {value}"),
        });
    }
    Ok(value)
}

/// Fractions such as a shared-launch mass allocation must sit in (0, 1].
pub(crate) fn require_fraction(
    field: &'static str,
    value: f64,
) -> Result<f64, InvalidProfileError> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(InvalidProfileError::OutOfRange {
            field,
            detail: format!("expected a fraction in (0, 1], found {value}"),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(require_positive("mass_kg", 0.0).is_err());
        assert!(require_positive("mass_kg", f64::NAN).is_err());
        assert_eq!(require_positive("mass_kg", 12.5), Ok(12.5));
    }

    #[test]
    fn count_floor_is_inclusive() {
        assert_eq!(require_count_at_least("satellite_count", 1, 1), Ok(1));
        assert!(require_count_at_least("satellite_count", 0, 1).is_err());
    }

    #[test]
    fn fraction_bounds_are_half_open() {
        assert!(require_fraction("launch_mass_fraction", 0.0).is_err());
        assert_eq!(require_fraction("launch_mass_fraction", 1.0), Ok(1.0));
        assert!(require_fraction("launch_mass_fraction", 1.01).is_err());
    }

    #[test]
    fn errors_render_field_context() {
        let err = require_non_negative("ground_station_count", -1.0).unwrap_err();
        assert!(err.to_string().contains("ground_station_count"));
    }
}
