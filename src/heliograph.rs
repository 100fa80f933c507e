//! # Heliograph: environment, ephemeris and the end-to-end computation
//!
//! This module defines the [`Heliograph`] struct, the central façade wiring
//! together:
//!
//! 1. **Environment state**: [`HeliographEnv`](crate::env_state::HeliographEnv),
//!    the shared HTTP client.
//! 2. **Ephemeris provider**: [`SolarEphemeris`](crate::ephemeris::SolarEphemeris),
//!    Nominatim geocoding plus the local solar model.
//! 3. The two-step pipeline: sample generation
//!    ([`generate_day_series`](crate::samples::generate_day_series)) followed
//!    by bracket extraction ([`extract`](crate::extractor::extract)).
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use heliograph::heliograph::{Heliograph, PhotoTimesRequest};
//! use heliograph::time::date_to_mjd;
//!
//! let env = Heliograph::new();
//! let request = PhotoTimesRequest::new("Reykjavik", date_to_mjd("2026-06-21").unwrap())
//!     .with_interval_minutes(5)
//!     .with_utc_offset_hours(0);
//! let photo_times = env.photo_times(&request).unwrap();
//! println!("{}", photo_times.show());
//! ```
//!
//! Custom providers (tests, offline ephemerides) go through
//! [`Heliograph::photo_times_with`], which never touches the network.

use crate::constants::MJD;
use crate::env_state::HeliographEnv;
use crate::ephemeris::{EphemerisProvider, SolarEphemeris};
use crate::extractor::{extract, PhotoTimes};
use crate::heliograph_errors::HeliographError;
use crate::samples::{generate_day_series, DaySeries};

/// The scalar parameters of one photo-times computation.
///
/// The reference date is an explicit MJD and the UTC offset an explicit hour
/// shift: the core never reads the process clock or time-zone state.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoTimesRequest {
    /// Free-form location query for the geocoder
    pub location: String,
    /// Sampling interval in minutes (default 1)
    pub interval_minutes: u32,
    /// strftime-style display pattern (default `"%H:%M"`)
    pub time_format: String,
    /// Hour shift from UTC defining the local day and display times (default 0)
    pub utc_offset_hours: i32,
    /// Any epoch within the requested day (MJD, UTC scale)
    pub reference_mjd: MJD,
}

impl PhotoTimesRequest {
    /// New request with default interval, format and offset.
    pub fn new(location: impl Into<String>, reference_mjd: MJD) -> Self {
        PhotoTimesRequest {
            location: location.into(),
            interval_minutes: 1,
            time_format: "%H:%M".to_string(),
            utc_offset_hours: 0,
            reference_mjd,
        }
    }

    pub fn with_interval_minutes(mut self, interval_minutes: u32) -> Self {
        self.interval_minutes = interval_minutes;
        self
    }

    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    pub fn with_utc_offset_hours(mut self, utc_offset_hours: i32) -> Self {
        self.utc_offset_hours = utc_offset_hours;
        self
    }
}

/// Central façade owning the production collaborators.
#[derive(Debug, Clone, Default)]
pub struct Heliograph {
    ephemeris: SolarEphemeris,
}

impl Heliograph {
    /// Construct a new [`Heliograph`] context with the production ephemeris
    /// provider behind a fresh HTTP environment.
    pub fn new() -> Self {
        Heliograph {
            ephemeris: SolarEphemeris::new(HeliographEnv::new()),
        }
    }

    /// Compute the day's photo times end to end.
    ///
    /// Arguments
    /// -----------------
    /// * `request`: the scalar parameters of the computation.
    ///
    /// Return
    /// ----------
    /// * The [`PhotoTimes`] record, or the first error of the pipeline
    ///   (location resolution, time format, series validation).
    pub fn photo_times(&self, request: &PhotoTimesRequest) -> Result<PhotoTimes, HeliographError> {
        Self::photo_times_with(&self.ephemeris, request)
    }

    /// Same as [`photo_times`](Heliograph::photo_times) against an arbitrary
    /// ephemeris provider.
    pub fn photo_times_with<P: EphemerisProvider>(
        provider: &P,
        request: &PhotoTimesRequest,
    ) -> Result<PhotoTimes, HeliographError> {
        let series = Self::day_series_with(provider, request)?;
        Ok(extract(&series))
    }

    /// Generate the day's sample series without extracting windows.
    pub fn day_series(&self, request: &PhotoTimesRequest) -> Result<DaySeries, HeliographError> {
        Self::day_series_with(&self.ephemeris, request)
    }

    /// Same as [`day_series`](Heliograph::day_series) against an arbitrary
    /// ephemeris provider.
    pub fn day_series_with<P: EphemerisProvider>(
        provider: &P,
        request: &PhotoTimesRequest,
    ) -> Result<DaySeries, HeliographError> {
        generate_day_series(
            provider,
            &request.location,
            request.interval_minutes,
            &request.time_format,
            request.utc_offset_hours,
            request.reference_mjd,
        )
    }
}

#[cfg(test)]
mod heliograph_tests {
    use super::*;
    use crate::constants::Degree;
    use crate::geocoding::Coordinates;

    /// Offline provider: fixed coordinates, altitude from a fixed table keyed
    /// by sample index.
    struct TableProvider {
        altitudes: Vec<Degree>,
    }

    impl EphemerisProvider for TableProvider {
        fn resolve(&self, location: &str) -> Result<Coordinates, HeliographError> {
            if location == "nowhere" {
                return Err(HeliographError::LocationNotFound(location.to_string()));
            }
            Ok(Coordinates {
                latitude: 0.0,
                longitude: 0.0,
                name: None,
            })
        }

        fn solar_altitudes(&self, _: &Coordinates, epochs_mjd: &[f64]) -> Vec<Degree> {
            epochs_mjd
                .iter()
                .enumerate()
                .map(|(i, _)| self.altitudes[i % self.altitudes.len()])
                .collect()
        }
    }

    #[test]
    fn test_request_builders() {
        let request = PhotoTimesRequest::new("Oslo", 60000.0)
            .with_interval_minutes(10)
            .with_time_format("%H")
            .with_utc_offset_hours(2);
        assert_eq!(request.interval_minutes, 10);
        assert_eq!(request.time_format, "%H");
        assert_eq!(request.utc_offset_hours, 2);
        assert_eq!(request.location, "Oslo");
    }

    #[test]
    fn test_unresolvable_location_propagates() {
        let provider = TableProvider { altitudes: vec![0.0] };
        let request = PhotoTimesRequest::new("nowhere", 60000.0);
        let err = Heliograph::photo_times_with(&provider, &request).unwrap_err();
        assert_eq!(err, HeliographError::LocationNotFound("nowhere".into()));
    }

    #[test]
    fn test_pipeline_produces_windows() {
        // Constant -30 degrees: permanent night, no other windows, no noon.
        let provider = TableProvider {
            altitudes: vec![-30.0],
        };
        let request = PhotoTimesRequest::new("somewhere", 60000.0).with_interval_minutes(60);
        let pt = Heliograph::photo_times_with(&provider, &request).unwrap();
        assert!(pt.night.morning.is_some());
        assert_eq!(pt.night.evening, None);
        assert_eq!(pt.high_noon, None);
        assert_eq!(pt.twilight, Default::default());
    }
}
