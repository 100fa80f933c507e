//! # Ephemeris provider seam
//!
//! The [`EphemerisProvider`] trait is the boundary between the core
//! computation and the outside world: resolving a location string to
//! coordinates and evaluating the solar altitude over a batch of epochs.
//!
//! The production implementation, [`SolarEphemeris`], geocodes through the
//! shared HTTP environment and evaluates altitudes locally with the
//! closed-form solar model in [`crate::solar`]. Tests substitute their own
//! deterministic provider so nothing touches the network.

use crate::constants::{Degree, MJD};
use crate::env_state::HeliographEnv;
use crate::geocoding::{resolve_location, Coordinates};
use crate::heliograph_errors::HeliographError;
use crate::solar::solar_altitude_at;

/// External collaborator supplying location resolution and solar altitudes.
pub trait EphemerisProvider {
    /// Resolve a free-form location string to geographic coordinates.
    ///
    /// Arguments
    /// -----------------
    /// * `location`: the location query.
    ///
    /// Return
    /// ----------
    /// * The resolved [`Coordinates`], or
    ///   [`HeliographError::LocationNotFound`] / a transport error if the
    ///   location cannot be resolved.
    fn resolve(&self, location: &str) -> Result<Coordinates, HeliographError>;

    /// Solar altitude above the horizon at each epoch, in grid order.
    ///
    /// Arguments
    /// -----------------
    /// * `coordinates`: the site.
    /// * `epochs_mjd`: time-ascending epochs, Modified Julian Date UTC.
    ///
    /// Return
    /// ----------
    /// * One altitude in degrees per input epoch, same order.
    fn solar_altitudes(&self, coordinates: &Coordinates, epochs_mjd: &[MJD]) -> Vec<Degree>;
}

/// Production provider: Nominatim geocoding plus the local solar model.
#[derive(Debug, Clone, Default)]
pub struct SolarEphemeris {
    env_state: HeliographEnv,
}

impl SolarEphemeris {
    pub fn new(env_state: HeliographEnv) -> Self {
        SolarEphemeris { env_state }
    }
}

impl EphemerisProvider for SolarEphemeris {
    fn resolve(&self, location: &str) -> Result<Coordinates, HeliographError> {
        resolve_location(location, &self.env_state)
    }

    fn solar_altitudes(&self, coordinates: &Coordinates, epochs_mjd: &[MJD]) -> Vec<Degree> {
        epochs_mjd
            .iter()
            .map(|mjd| solar_altitude_at(coordinates.latitude, coordinates.longitude, *mjd))
            .collect()
    }
}
