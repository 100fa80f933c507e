//! # Bracket extraction
//!
//! The algorithmic core of the crate: partitioning one day of time-ascending
//! solar-altitude samples into the labeled lighting windows and detecting the
//! high-noon sample.
//!
//! ## Overview
//!
//! For each bracket of [`ALTITUDE_BRACKETS`](crate::constants::ALTITUDE_BRACKETS),
//! [`extract`] collects the indices whose altitude lies strictly inside the
//! bracket and decides how they map onto a morning and an evening window:
//!
//! - no hit: both windows absent;
//! - the run starts strictly after the daily peak: evening window only,
//!   spanning first to last hit;
//! - otherwise a single contiguous run is the morning window, while a
//!   discontinuous run is split at its **largest** index gap (first such gap
//!   on ties) into morning and evening windows.
//!
//! The daily peak (first index of the maximum altitude) is computed once and
//! shared by all brackets; it also drives the high-noon marker, reported only
//! when the peak altitude strictly exceeds the golden hour's upper edge.
//!
//! Extraction is a pure function over a validated [`DaySeries`]: no hidden
//! state, no I/O, identical output for identical input.

use itertools::Itertools;

use crate::constants::{
    AltitudeBracket, Degree, BLUE_HOUR, GOLDEN_HOUR, HIGH_NOON_THRESHOLD, NIGHT, TWILIGHT,
};
use crate::samples::DaySeries;

/// A closed span of display times, first to last matching sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSpan {
    pub start: String,
    pub end: String,
}

/// The up-to-two daily occurrences of one bracket.
///
/// When both are present, the morning window always ends before the evening
/// window begins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhotoWindow {
    /// Occurrence starting at or before the daily peak
    pub morning: Option<TimeSpan>,
    /// Occurrence after the daily peak
    pub evening: Option<TimeSpan>,
}

/// The sample of maximum solar altitude for the day.
#[derive(Debug, Clone, PartialEq)]
pub struct NoonMark {
    pub time: String,
    /// Peak altitude in degrees
    pub altitude: Degree,
}

/// One window per bracket plus the optional high-noon marker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhotoTimes {
    pub night: PhotoWindow,
    pub twilight: PhotoWindow,
    pub blue_hour: PhotoWindow,
    pub golden_hour: PhotoWindow,
    pub high_noon: Option<NoonMark>,
}

/// Extract the photo-time windows from one day of samples.
///
/// Arguments
/// -----------------
/// * `series`: the validated day series (non-empty, parallel columns,
///   strictly time-ascending).
///
/// Return
/// ----------
/// * The [`PhotoTimes`] record, each bracket field assigned directly from its
///   named bracket constant.
pub fn extract(series: &DaySeries) -> PhotoTimes {
    let times = series.times();
    let altitudes = series.altitudes();
    let peak = peak_index(altitudes);

    let window = |bracket: &AltitudeBracket| bracket_window(times, altitudes, peak, bracket);

    let high_noon = (altitudes[peak] > HIGH_NOON_THRESHOLD).then(|| NoonMark {
        time: times[peak].clone(),
        altitude: altitudes[peak],
    });

    PhotoTimes {
        night: window(&NIGHT),
        twilight: window(&TWILIGHT),
        blue_hour: window(&BLUE_HOUR),
        golden_hour: window(&GOLDEN_HOUR),
        high_noon,
    }
}

/// Index of the daily maximum altitude; the first such index on ties.
fn peak_index(altitudes: &[Degree]) -> usize {
    let mut peak = 0;
    for (i, altitude) in altitudes.iter().enumerate() {
        if *altitude > altitudes[peak] {
            peak = i;
        }
    }
    peak
}

/// Map one bracket's matching sample indices onto its morning/evening windows.
fn bracket_window(
    times: &[String],
    altitudes: &[Degree],
    peak: usize,
    bracket: &AltitudeBracket,
) -> PhotoWindow {
    let hits: Vec<usize> = altitudes
        .iter()
        .enumerate()
        .filter(|(_, altitude)| bracket.contains(**altitude))
        .map(|(i, _)| i)
        .collect();

    let (Some(&first), Some(&last)) = (hits.first(), hits.last()) else {
        return PhotoWindow::default();
    };

    if first > peak {
        // The whole run occurs after the daily peak.
        return PhotoWindow {
            morning: None,
            evening: Some(span(times, first, last)),
        };
    }

    // Largest index gap between consecutive hits; gaps of exactly one sample
    // mean the run is contiguous. First maximal gap wins on ties.
    let mut widest = 1;
    let mut split = None;
    for (k, (before, after)) in hits.iter().tuple_windows().enumerate() {
        let width = after - before;
        if width > widest {
            widest = width;
            split = Some(k);
        }
    }

    match split {
        None => PhotoWindow {
            morning: Some(span(times, first, last)),
            evening: None,
        },
        Some(k) => PhotoWindow {
            morning: Some(span(times, first, hits[k])),
            evening: Some(span(times, hits[k + 1], last)),
        },
    }
}

fn span(times: &[String], start: usize, end: usize) -> TimeSpan {
    TimeSpan {
        start: times[start].clone(),
        end: times[end].clone(),
    }
}
