//! # Terminal rendering of photo times
//!
//! A borrowing display adaptor over [`PhotoTimes`]: obtain it with
//! [`PhotoTimes::show`] and render through Rust formatting (`{}`), without
//! cloning or moving the result.
//!
//! Lines follow the chronological order of the day: night, twilight, blue
//! hour and golden hour mornings, high noon, then the same brackets in
//! reverse for the evening. Absent windows are skipped, labels are
//! right-aligned, and each line is colorized with a fixed ANSI palette
//! (disable with [`PhotoTimesDisplay::plain`] when piping output).

use std::fmt;

use crate::extractor::{NoonMark, PhotoTimes, TimeSpan};

const RESET: &str = "\x1b[0m";
const WHITE: &str = "\x1b[37m";
const MAGENTA: &str = "\x1b[35m";
const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";

/// Row content: either a bracket window or the noon marker.
enum Entry<'a> {
    Span(&'a TimeSpan),
    Noon(&'a NoonMark),
}

/// Display adaptor borrowing a [`PhotoTimes`].
pub struct PhotoTimesDisplay<'a> {
    photo_times: &'a PhotoTimes,
    color: bool,
}

impl PhotoTimes {
    /// Borrowing display adaptor, colorized by default.
    pub fn show(&self) -> PhotoTimesDisplay<'_> {
        PhotoTimesDisplay {
            photo_times: self,
            color: true,
        }
    }
}

impl PhotoTimesDisplay<'_> {
    /// Disable ANSI colors.
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }
}

impl fmt::Display for PhotoTimesDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pt = self.photo_times;

        let rows: [(&str, &str, Option<Entry>); 9] = [
            ("night", WHITE, pt.night.morning.as_ref().map(Entry::Span)),
            (
                "twilight",
                MAGENTA,
                pt.twilight.morning.as_ref().map(Entry::Span),
            ),
            (
                "blue hour",
                BLUE,
                pt.blue_hour.morning.as_ref().map(Entry::Span),
            ),
            (
                "golden hour",
                RED,
                pt.golden_hour.morning.as_ref().map(Entry::Span),
            ),
            ("high noon", YELLOW, pt.high_noon.as_ref().map(Entry::Noon)),
            (
                "golden hour",
                RED,
                pt.golden_hour.evening.as_ref().map(Entry::Span),
            ),
            (
                "blue hour",
                BLUE,
                pt.blue_hour.evening.as_ref().map(Entry::Span),
            ),
            (
                "twilight",
                MAGENTA,
                pt.twilight.evening.as_ref().map(Entry::Span),
            ),
            ("night", WHITE, pt.night.evening.as_ref().map(Entry::Span)),
        ];

        let width = rows.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0);

        for (name, color, entry) in rows {
            let Some(entry) = entry else { continue };
            let body = match entry {
                Entry::Span(span) => format!("{} - {}", span.start, span.end),
                Entry::Noon(noon) => format!("{}, {:.2} deg", noon.time, noon.altitude),
            };
            if self.color {
                writeln!(f, "{color}{name:>width$}: {body}{RESET}")?;
            } else {
                writeln!(f, "{name:>width$}: {body}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;
    use crate::extractor::PhotoWindow;

    fn window(m: Option<(&str, &str)>, e: Option<(&str, &str)>) -> PhotoWindow {
        let mk = |(start, end): (&str, &str)| TimeSpan {
            start: start.to_string(),
            end: end.to_string(),
        };
        PhotoWindow {
            morning: m.map(mk),
            evening: e.map(mk),
        }
    }

    fn full_day() -> PhotoTimes {
        PhotoTimes {
            night: window(Some(("00:00", "01:00")), Some(("23:00", "23:59"))),
            twilight: window(Some(("01:30", "02:00")), Some(("22:00", "22:30"))),
            blue_hour: window(Some(("02:10", "02:20")), Some(("21:40", "21:50"))),
            golden_hour: window(Some(("02:30", "03:00")), Some(("21:00", "21:30"))),
            high_noon: Some(NoonMark {
                time: "12:00".to_string(),
                altitude: 45.6789,
            }),
        }
    }

    #[test]
    fn test_plain_rendering_order_and_alignment() {
        let rendered = full_day().show().plain().to_string();
        let expected = concat!(
            "      night: 00:00 - 01:00\n",
            "   twilight: 01:30 - 02:00\n",
            "  blue hour: 02:10 - 02:20\n",
            "golden hour: 02:30 - 03:00\n",
            "  high noon: 12:00, 45.68 deg\n",
            "golden hour: 21:00 - 21:30\n",
            "  blue hour: 21:40 - 21:50\n",
            "   twilight: 22:00 - 22:30\n",
            "      night: 23:00 - 23:59\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_absent_entries_are_skipped() {
        let pt = PhotoTimes {
            night: window(Some(("00:00", "04:00")), None),
            ..PhotoTimes::default()
        };
        let rendered = pt.show().plain().to_string();
        assert_eq!(rendered, "      night: 00:00 - 04:00\n");
    }

    #[test]
    fn test_colored_rendering_wraps_lines() {
        let rendered = full_day().show().to_string();
        assert!(rendered.contains("\x1b[33m  high noon: 12:00, 45.68 deg\x1b[0m"));
        assert!(rendered.starts_with("\x1b[37m"));
    }
}
