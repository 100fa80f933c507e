use heliograph::constants::Degree;
use heliograph::ephemeris::EphemerisProvider;
use heliograph::geocoding::Coordinates;
use heliograph::heliograph::{Heliograph, PhotoTimesRequest};
use heliograph::heliograph_errors::HeliographError;
use heliograph::samples::generate_day_series;

/// Deterministic provider: a single-peak cosine altitude curve over the day,
/// bottoming at -50 degrees at local midnight and peaking at +30 at noon.
struct CosineDay;

impl EphemerisProvider for CosineDay {
    fn resolve(&self, location: &str) -> Result<Coordinates, HeliographError> {
        if location == "nowhere" {
            return Err(HeliographError::LocationNotFound(location.to_string()));
        }
        Ok(Coordinates {
            latitude: 45.0,
            longitude: 0.0,
            name: Some("Test Site".to_string()),
        })
    }

    fn solar_altitudes(&self, _: &Coordinates, epochs_mjd: &[f64]) -> Vec<Degree> {
        epochs_mjd
            .iter()
            .map(|mjd| -40.0 * (std::f64::consts::TAU * mjd.fract()).cos() - 10.0)
            .collect()
    }
}

/// Provider that violates the batch contract by returning one altitude short.
struct ShortProvider;

impl EphemerisProvider for ShortProvider {
    fn resolve(&self, _: &str) -> Result<Coordinates, HeliographError> {
        Ok(Coordinates {
            latitude: 0.0,
            longitude: 0.0,
            name: None,
        })
    }

    fn solar_altitudes(&self, _: &Coordinates, epochs_mjd: &[f64]) -> Vec<Degree> {
        vec![0.0; epochs_mjd.len() - 1]
    }
}

const REF_MJD: f64 = 60000.0; // 2023-02-25

#[test]
fn test_grid_sizing() {
    for (interval, expected) in [(1u32, 1440usize), (15, 96), (60, 24), (7, 206)] {
        let series = generate_day_series(&CosineDay, "site", interval, "%H:%M", 0, REF_MJD).unwrap();
        assert_eq!(series.len(), expected, "interval {interval}");
    }
}

#[test]
fn test_day_starts_at_local_midnight() {
    let series = generate_day_series(&CosineDay, "site", 1, "%H:%M", 0, REF_MJD + 0.7).unwrap();
    assert_eq!(series.times()[0], "00:00");
    assert_eq!(series.times()[1], "00:01");
    assert_eq!(series.times()[1439], "23:59");
}

#[test]
fn test_utc_offset_shifts_grid_but_not_display() {
    let utc = generate_day_series(&CosineDay, "site", 60, "%H:%M", 0, REF_MJD).unwrap();
    let east = generate_day_series(&CosineDay, "site", 60, "%H:%M", 5, REF_MJD).unwrap();

    // Display labels are local and identical.
    assert_eq!(utc.times(), east.times());

    // The underlying epochs move five hours earlier in UTC.
    let shift = utc.epochs_mjd()[0] - east.epochs_mjd()[0];
    assert!((shift - 5.0 / 24.0).abs() < 1e-9);
}

#[test]
fn test_zero_interval_rejected() {
    let err = generate_day_series(&CosineDay, "site", 0, "%H:%M", 0, REF_MJD).unwrap_err();
    assert_eq!(err, HeliographError::InvalidSampleInterval(0));
}

#[test]
fn test_unresolvable_location_fails_before_sampling() {
    let err = generate_day_series(&CosineDay, "nowhere", 1, "%H:%M", 0, REF_MJD).unwrap_err();
    assert_eq!(err, HeliographError::LocationNotFound("nowhere".into()));
}

#[test]
fn test_short_provider_batch_is_caught() {
    let err = generate_day_series(&ShortProvider, "site", 60, "%H:%M", 0, REF_MJD).unwrap_err();
    assert_eq!(
        err,
        HeliographError::SeriesLengthMismatch {
            times: 24,
            altitudes: 23,
            epochs: 24
        }
    );
}

#[test]
fn test_full_pipeline_on_cosine_day() {
    let request = PhotoTimesRequest::new("site", REF_MJD).with_interval_minutes(60);
    let pt = Heliograph::photo_times_with(&CosineDay, &request).unwrap();

    // Hourly altitudes -40*cos(15k deg) - 10: night through hour 5, twilight
    // at 6, golden hour at 7, above all brackets 8..=16, then mirrored.
    let span = |start: &str, end: &str| {
        Some(heliograph::extractor::TimeSpan {
            start: start.to_string(),
            end: end.to_string(),
        })
    };

    assert_eq!(pt.night.morning, span("00:00", "05:00"));
    assert_eq!(pt.night.evening, span("19:00", "23:00"));
    assert_eq!(pt.twilight.morning, span("06:00", "06:00"));
    assert_eq!(pt.twilight.evening, span("18:00", "18:00"));
    assert_eq!(pt.blue_hour.morning, None);
    assert_eq!(pt.blue_hour.evening, None);
    assert_eq!(pt.golden_hour.morning, span("07:00", "07:00"));
    assert_eq!(pt.golden_hour.evening, span("17:00", "17:00"));

    let noon = pt.high_noon.expect("peak of 30 degrees must be reported");
    assert_eq!(noon.time, "12:00");
    assert!((noon.altitude - 30.0).abs() < 1e-9);
}

#[test]
fn test_pipeline_is_deterministic() {
    let request = PhotoTimesRequest::new("site", REF_MJD).with_interval_minutes(30);
    let first = Heliograph::photo_times_with(&CosineDay, &request).unwrap();
    let second = Heliograph::photo_times_with(&CosineDay, &request).unwrap();
    assert_eq!(first, second);
}
