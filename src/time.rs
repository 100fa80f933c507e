//! Date helpers around the Modified Julian Date representation used across
//! the crate. The core never reads the process clock or time-zone state; the
//! `mjd_now` convenience exists for callers (such as the demo CLI) that want
//! "today" as a reference date.

use hifitime::Epoch;

use crate::constants::MJD;
use crate::heliograph_errors::HeliographError;

/// Transformation from a calendar date in the format YYYY-MM-DD to a modified
/// julian date (MJD) at UTC midnight.
///
/// Arguments
/// -----------------
/// * `date`: a date string, e.g. `"2021-01-01"`.
///
/// Return
/// ----------
/// * The MJD of that day at 00:00:00 UTC, or
///   [`HeliographError::InvalidDate`] if the string does not parse.
pub fn date_to_mjd(date: &str) -> Result<MJD, HeliographError> {
    let invalid = || HeliographError::InvalidDate(date.to_string());

    let mut parts = date.splitn(3, '-');
    let year: i32 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    let month: u8 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    let day: u8 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;

    let epoch =
        Epoch::maybe_from_gregorian_utc(year, month, day, 0, 0, 0, 0).map_err(|_| invalid())?;
    Ok(epoch.to_mjd_utc_days())
}

/// Current epoch as a modified julian date (MJD, UTC scale).
///
/// Return
/// ----------
/// * The current MJD, or [`HeliographError::SystemTimeUnavailable`] if the
///   system clock cannot be read.
pub fn mjd_now() -> Result<MJD, HeliographError> {
    Epoch::now()
        .map(|e| e.to_mjd_utc_days())
        .map_err(|e| HeliographError::SystemTimeUnavailable(e.to_string()))
}
