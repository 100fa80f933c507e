//! # Sample generation for one local calendar day
//!
//! This module builds the day's (formatted time, solar altitude) series that
//! the bracket extractor consumes.
//!
//! ## Overview
//!
//! [`generate_day_series`] resolves the location once through the ephemeris
//! provider, lays out a fixed-interval epoch grid covering one **local**
//! calendar day (local midnight to local midnight, the UTC offset supplied
//! explicitly by the caller), queries the provider for all altitudes in a
//! single batch call, shifts the epochs back by the UTC offset for display
//! and formats them with a strftime-style pattern.
//!
//! The result is a [`DaySeries`], the validated container enforcing the
//! series invariants once at construction: non-empty, parallel columns of
//! equal length, strictly time-ascending epochs. Extraction over a
//! constructed series is then total.

use std::str::FromStr;

use hifitime::efmt::{Format, Formatter};
use hifitime::{Epoch, TimeUnits};
use itertools::Itertools;

use crate::constants::{Degree, HOURS_PER_DAY, MINUTES_PER_DAY, MJD};
use crate::ephemeris::EphemerisProvider;
use crate::heliograph_errors::HeliographError;

/// One local calendar day of time-ascending solar-altitude samples.
///
/// The three columns are parallel: `times[i]` is the display rendering of
/// `epochs_mjd[i]`, and `altitudes[i]` the solar altitude there. Construction
/// through [`DaySeries::try_new`] is the only way to obtain a value, so every
/// `DaySeries` in existence satisfies the series invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySeries {
    times: Vec<String>,
    altitudes: Vec<Degree>,
    epochs_mjd: Vec<MJD>,
}

impl DaySeries {
    /// Build a validated series from its three parallel columns.
    ///
    /// Arguments
    /// -----------------
    /// * `times`: display strings, one per sample.
    /// * `altitudes`: solar altitudes in degrees, one per sample.
    /// * `epochs_mjd`: sample epochs (MJD, UTC scale), strictly ascending.
    ///
    /// Return
    /// ----------
    /// * The series, or the violated invariant as a [`HeliographError`]
    ///   (`EmptySeries`, `SeriesLengthMismatch`, `SeriesNotAscending`).
    pub fn try_new(
        times: Vec<String>,
        altitudes: Vec<Degree>,
        epochs_mjd: Vec<MJD>,
    ) -> Result<Self, HeliographError> {
        if times.is_empty() && altitudes.is_empty() && epochs_mjd.is_empty() {
            return Err(HeliographError::EmptySeries);
        }
        if times.len() != altitudes.len() || times.len() != epochs_mjd.len() {
            return Err(HeliographError::SeriesLengthMismatch {
                times: times.len(),
                altitudes: altitudes.len(),
                epochs: epochs_mjd.len(),
            });
        }
        if let Some(pos) = epochs_mjd
            .iter()
            .tuple_windows()
            .position(|(earlier, later)| earlier >= later)
        {
            return Err(HeliographError::SeriesNotAscending { index: pos + 1 });
        }

        Ok(DaySeries {
            times,
            altitudes,
            epochs_mjd,
        })
    }

    /// Formatted display time of each sample.
    pub fn times(&self) -> &[String] {
        &self.times
    }

    /// Solar altitude of each sample, in degrees.
    pub fn altitudes(&self) -> &[Degree] {
        &self.altitudes
    }

    /// Epoch of each sample (MJD, UTC scale).
    pub fn epochs_mjd(&self) -> &[MJD] {
        &self.epochs_mjd
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Generate the day's sample series through an ephemeris provider.
///
/// The grid starts at local midnight of the reference day (the UTC calendar
/// day of `reference_mjd`, shifted by `utc_offset_hours`) and steps by
/// `interval_minutes` over 24 hours, yielding `ceil(1440 / interval)`
/// samples. Altitudes are fetched in one batch call. Display times are the
/// grid epochs shifted back into local time and rendered with `time_format`.
///
/// Arguments
/// -----------------
/// * `provider`: the ephemeris collaborator.
/// * `location`: free-form location query, resolved once.
/// * `interval_minutes`: grid spacing in minutes, at least 1.
/// * `time_format`: strftime-style pattern, e.g. `"%H:%M"`.
/// * `utc_offset_hours`: hour shift from UTC for the local day and display.
/// * `reference_mjd`: any epoch within the requested day (MJD, UTC scale).
///
/// Return
/// ----------
/// * The validated [`DaySeries`], or the first failure encountered:
///   `InvalidSampleInterval`, `InvalidTimeFormat`, or whatever the provider
///   reports for an unresolvable location.
pub fn generate_day_series<P: EphemerisProvider>(
    provider: &P,
    location: &str,
    interval_minutes: u32,
    time_format: &str,
    utc_offset_hours: i32,
    reference_mjd: MJD,
) -> Result<DaySeries, HeliographError> {
    if interval_minutes == 0 {
        return Err(HeliographError::InvalidSampleInterval(interval_minutes));
    }
    let format = Format::from_str(time_format)
        .map_err(|e| HeliographError::InvalidTimeFormat(format!("{time_format} ({e})")))?;

    let coordinates = provider.resolve(location)?;

    // Local midnight of the reference day, as a display epoch. Rebuilt from
    // gregorian integers so that the minute grid below is exact; going
    // through a fractional-day f64 would cost sub-microsecond precision,
    // enough to truncate a formatted time into the previous minute.
    let (year, month, day, ..) = Epoch::from_mjd_utc(reference_mjd).to_gregorian_utc();
    let local_midnight = Epoch::from_gregorian_utc_at_midnight(year, month, day);
    let midnight_mjd = local_midnight.to_mjd_utc_days();

    let offset_days = utc_offset_hours as f64 / HOURS_PER_DAY;
    let sample_count = MINUTES_PER_DAY.div_ceil(interval_minutes) as usize;

    let mut epochs_mjd: Vec<MJD> = Vec::with_capacity(sample_count);
    let mut times: Vec<String> = Vec::with_capacity(sample_count);
    for k in 0..sample_count {
        let minutes = k as i64 * interval_minutes as i64;
        epochs_mjd.push(midnight_mjd - offset_days + minutes as f64 / MINUTES_PER_DAY as f64);
        let display_epoch = local_midnight + minutes.minutes();
        times.push(Formatter::new(display_epoch, format).to_string());
    }

    let altitudes = provider.solar_altitudes(&coordinates, &epochs_mjd);

    DaySeries::try_new(times, altitudes, epochs_mjd)
}
