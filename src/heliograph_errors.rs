use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeliographError {
    #[error("Location could not be resolved to coordinates: {0}")]
    LocationNotFound(String),

    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("Unable to decode geocoder response: {0}")]
    GeocoderResponse(String),

    #[error("Invalid time format pattern: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid date, expected YYYY-MM-DD: {0}")]
    InvalidDate(String),

    #[error("System time unavailable: {0}")]
    SystemTimeUnavailable(String),

    #[error("Sampling interval must be at least one minute, got {0}")]
    InvalidSampleInterval(u32),

    #[error("Sample series is empty")]
    EmptySeries,

    #[error("Sample series length mismatch: {times} times, {altitudes} altitudes, {epochs} epochs")]
    SeriesLengthMismatch {
        times: usize,
        altitudes: usize,
        epochs: usize,
    },

    #[error("Sample series is not strictly time-ascending at index {index}")]
    SeriesNotAscending { index: usize },
}

impl PartialEq for HeliographError {
    fn eq(&self, other: &Self) -> bool {
        use HeliographError::*;
        match (self, other) {
            (LocationNotFound(a), LocationNotFound(b)) => a == b,

            // Transport errors are not comparable: equal if same variant
            (UreqHttpError(_), UreqHttpError(_)) => true,

            (GeocoderResponse(a), GeocoderResponse(b)) => a == b,
            (InvalidTimeFormat(a), InvalidTimeFormat(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (SystemTimeUnavailable(a), SystemTimeUnavailable(b)) => a == b,
            (InvalidSampleInterval(a), InvalidSampleInterval(b)) => a == b,

            (EmptySeries, EmptySeries) => true,
            (
                SeriesLengthMismatch {
                    times: ta,
                    altitudes: aa,
                    epochs: ea,
                },
                SeriesLengthMismatch {
                    times: tb,
                    altitudes: ab,
                    epochs: eb,
                },
            ) => ta == tb && aa == ab && ea == eb,
            (SeriesNotAscending { index: a }, SeriesNotAscending { index: b }) => a == b,

            _ => false,
        }
    }
}
