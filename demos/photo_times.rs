//! Terminal front end for the photo-times computation.
//!
//! Usage:
//!   photo_times "Reykjavik" -i 5 -z 0 -d 2026-06-21

use clap::Parser;

use heliograph::heliograph::{Heliograph, PhotoTimesRequest};
use heliograph::heliograph_errors::HeliographError;
use heliograph::time::{date_to_mjd, mjd_now};

#[derive(Parser)]
#[command(
    name = "photo_times",
    about = "Useful times to take photos for a location and day"
)]
struct Cli {
    /// Any location string the geocoder can resolve
    location: String,

    /// Time precision interval in minutes
    #[arg(short, long, default_value_t = 1)]
    interval: u32,

    /// Time format pattern
    #[arg(short, long, default_value = "%H:%M")]
    format: String,

    /// Hour shift from UTC
    #[arg(short = 'z', long, default_value_t = 0)]
    utc_offset: i32,

    /// Date to calculate for, YYYY-MM-DD; defaults to today
    #[arg(short, long)]
    date: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), HeliographError> {
    let cli = Cli::parse();

    let reference_mjd = match &cli.date {
        Some(date) => date_to_mjd(date)?,
        None => mjd_now()?,
    };

    let request = PhotoTimesRequest::new(cli.location.as_str(), reference_mjd)
        .with_interval_minutes(cli.interval)
        .with_time_format(cli.format.as_str())
        .with_utc_offset_hours(cli.utc_offset);

    let photo_times = Heliograph::new().photo_times(&request)?;

    let shown = photo_times.show();
    let shown = if cli.no_color { shown.plain() } else { shown };
    print!("{shown}");

    Ok(())
}
