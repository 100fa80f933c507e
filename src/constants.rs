//! # Constants and type definitions for Heliograph
//!
//! This module centralizes the **type aliases**, **day/grid constants** and the
//! **altitude bracket table** used throughout the `heliograph` library.
//!
//! ## Overview
//!
//! - Common type aliases (`Degree`, `MJD`)
//! - Sampling-grid constants for one calendar day
//! - The fixed, ascending-altitude bracket table defining the photographic
//!   lighting conditions
//!
//! The four brackets exist both as named constants ([`NIGHT`], [`TWILIGHT`],
//! [`BLUE_HOUR`], [`GOLDEN_HOUR`]) and as the explicit ordered table
//! [`ALTITUDE_BRACKETS`]. Consumers that need one specific bracket use the
//! named constant directly; consumers that scan all brackets iterate the
//! table. No code relies on declaration order matching between two separate
//! structures.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;

/// Modified Julian Date (days)
pub type MJD = f64;

// -------------------------------------------------------------------------------------------------
// Day and grid constants
// -------------------------------------------------------------------------------------------------

/// Number of minutes in a calendar day
pub const MINUTES_PER_DAY: u32 = 1440;

/// Number of hours in a calendar day
pub const HOURS_PER_DAY: f64 = 24.0;

// -------------------------------------------------------------------------------------------------
// Altitude brackets
// -------------------------------------------------------------------------------------------------

/// A named half-open solar-altitude range defining a lighting condition.
///
/// Membership is tested with **strict** inequalities on both sides
/// (`low < altitude < high`): a sample exactly on a shared edge (-18°, -6°,
/// -4° or 6°) belongs to neither neighboring bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeBracket {
    /// Human-readable label used by the presentation layer
    pub name: &'static str,
    /// Lower edge in degrees (excluded)
    pub low: Degree,
    /// Upper edge in degrees (excluded)
    pub high: Degree,
}

impl AltitudeBracket {
    /// True when `altitude` lies strictly inside this bracket.
    pub fn contains(&self, altitude: Degree) -> bool {
        self.low < altitude && altitude < self.high
    }
}

/// Sun well below the horizon, fully dark sky
pub const NIGHT: AltitudeBracket = AltitudeBracket {
    name: "night",
    low: -90.0,
    high: -18.0,
};

/// Astronomical through nautical twilight
pub const TWILIGHT: AltitudeBracket = AltitudeBracket {
    name: "twilight",
    low: -18.0,
    high: -6.0,
};

/// Deep blue ambient light shortly before sunrise / after sunset
pub const BLUE_HOUR: AltitudeBracket = AltitudeBracket {
    name: "blue hour",
    low: -6.0,
    high: -4.0,
};

/// Warm low-angle light around sunrise and sunset
pub const GOLDEN_HOUR: AltitudeBracket = AltitudeBracket {
    name: "golden hour",
    low: -4.0,
    high: 6.0,
};

/// All brackets in ascending altitude order.
pub const ALTITUDE_BRACKETS: [AltitudeBracket; 4] = [NIGHT, TWILIGHT, BLUE_HOUR, GOLDEN_HOUR];

/// Upper edge of the golden hour; the daily maximum must strictly exceed this
/// for a high-noon marker to be reported.
pub const HIGH_NOON_THRESHOLD: Degree = GOLDEN_HOUR.high;

#[cfg(test)]
mod bracket_tests {
    use super::*;

    #[test]
    fn test_brackets_are_contiguous_and_ascending() {
        for pair in ALTITUDE_BRACKETS.windows(2) {
            assert_eq!(pair[0].high, pair[1].low);
            assert!(pair[0].low < pair[0].high);
        }
        assert_eq!(ALTITUDE_BRACKETS[0].low, -90.0);
        assert_eq!(ALTITUDE_BRACKETS[3].high, 6.0);
    }

    #[test]
    fn test_strict_interior_membership() {
        assert!(NIGHT.contains(-30.0));
        assert!(TWILIGHT.contains(-12.0));
        assert!(BLUE_HOUR.contains(-5.0));
        assert!(GOLDEN_HOUR.contains(0.0));
        assert!(!NIGHT.contains(-90.0));
        assert!(!GOLDEN_HOUR.contains(10.0));
    }

    // Pins the edge policy: a sample exactly on a shared boundary is dropped
    // from both neighboring brackets.
    #[test]
    fn test_shared_edges_belong_to_no_bracket() {
        for edge in [-18.0, -6.0, -4.0, 6.0] {
            let owners = ALTITUDE_BRACKETS
                .iter()
                .filter(|b| b.contains(edge))
                .count();
            assert_eq!(owners, 0, "edge {edge} must be excluded on both sides");
        }
    }
}
