//! # Low-precision solar position
//!
//! NOAA-style closed-form solar geometry: equation of time, solar
//! declination, hour angle from longitude-corrected local solar time, and the
//! resulting altitude above the horizon. Accuracy is a small fraction of a
//! degree, far below the width of any lighting bracket; no atmospheric
//! refraction is applied.
//!
//! All public entry points take epochs as Modified Julian Dates on the UTC
//! scale, the time representation used across the crate.

use hifitime::Epoch;

use crate::constants::{Degree, MJD};

/// Earth's axial tilt in degrees
const EARTH_AXIAL_TILT: f64 = 23.45;

/// Earth's rotation rate, degrees of hour angle per hour
const DEGREES_PER_HOUR: f64 = 15.0;

fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ]
}

/// Ordinal day of the year, 1-based.
fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let dim = days_in_months(year);
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    (sum + day) as i32
}

/// Fractional year angle B in radians for ordinal day `n`.
fn intermediate_angle_b(n: i32) -> f64 {
    ((n - 1) as f64 * (360.0 / 365.0)).to_radians()
}

/// Equation of time in minutes for ordinal day `n`.
fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    229.18
        * (0.000075 + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

/// Solar declination in degrees for ordinal day `n`.
fn solar_declination(n: i32) -> Degree {
    EARTH_AXIAL_TILT * (360.0 * ((284 + n) as f64 / 365.0)).to_radians().sin()
}

/// Correction from UTC to local solar time in hours, from the site longitude
/// (degrees, east-positive) and the equation of time (minutes).
fn solar_time_correction(longitude: Degree, eot_minutes: f64) -> f64 {
    (4.0 * longitude + eot_minutes) / 60.0
}

/// Hour angle in degrees: 0 at local solar noon, negative before.
fn hour_angle(local_solar_time: f64) -> Degree {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

/// Solar zenith angle in degrees from latitude, declination and hour angle
/// (all in degrees).
fn solar_zenith_angle(latitude: Degree, declination: Degree, hour_angle: Degree) -> Degree {
    let lat_rad = latitude.to_radians();
    let dec_rad = declination.to_radians();
    let ha_rad = hour_angle.to_radians();
    let cos_zenith = lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    cos_zenith.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Solar altitude above the horizon in degrees at one UTC epoch.
///
/// Arguments
/// -----------------
/// * `latitude`: site latitude in degrees, north-positive.
/// * `longitude`: site longitude in degrees, east-positive.
/// * `mjd_utc`: epoch as Modified Julian Date, UTC scale.
///
/// Return
/// ----------
/// * Altitude in degrees; negative below the horizon, maximum 90 at zenith.
pub(crate) fn solar_altitude_at(latitude: Degree, longitude: Degree, mjd_utc: MJD) -> Degree {
    let (year, month, day, hour, minute, second, nanos) =
        Epoch::from_mjd_utc(mjd_utc).to_gregorian_utc();

    let utc_hours = hour as f64
        + minute as f64 / 60.0
        + second as f64 / 3600.0
        + nanos as f64 / 3.6e12;

    let n = day_of_year(year, month as u32, day as u32);
    let eot = equation_of_time(n);
    let declination = solar_declination(n);
    let correction = solar_time_correction(longitude, eot);

    let local_solar_time = (utc_hours + correction).rem_euclid(24.0);
    let ha = hour_angle(local_solar_time);
    90.0 - solar_zenith_angle(latitude, declination, ha)
}
