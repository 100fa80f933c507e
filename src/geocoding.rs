//! # Location resolution through the OpenStreetMap Nominatim API
//!
//! Turns a free-form location string (anything the geocoder can resolve, e.g.
//! `"Reykjavik"` or `"1600 Pennsylvania Ave"`) into geographic
//! [`Coordinates`]. One GET request per resolution, no caching.
//!
//! Failure taxonomy:
//! - transport / HTTP status problems surface as
//!   [`HeliographError::UreqHttpError`],
//! - a well-formed but empty result set surfaces as
//!   [`HeliographError::LocationNotFound`],
//! - an undecodable payload surfaces as [`HeliographError::GeocoderResponse`].

use serde::Deserialize;

use crate::constants::Degree;
use crate::env_state::HeliographEnv;
use crate::heliograph_errors::HeliographError;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Geographic coordinates of a resolved location.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    /// Geodetic latitude in degrees, positive north
    pub latitude: Degree,
    /// Geodetic longitude in degrees, positive east
    pub longitude: Degree,
    /// Display name reported by the geocoder, when available
    pub name: Option<String>,
}

/// One entry of the Nominatim search response. Latitude and longitude are
/// transmitted as strings.
#[derive(Debug, Deserialize, PartialEq)]
struct PlaceRecord {
    lat: String,
    lon: String,
    display_name: String,
}

/// Resolve a location string to coordinates.
///
/// Arguments
/// -----------------
/// * `location`: the free-form location query.
/// * `env_state`: shared environment providing the HTTP client.
///
/// Return
/// ----------
/// * The [`Coordinates`] of the best match, or a [`HeliographError`] if the
///   request fails or nothing matches.
pub(crate) fn resolve_location(
    location: &str,
    env_state: &HeliographEnv,
) -> Result<Coordinates, HeliographError> {
    let response_body = request_search(location, env_state)?;
    deserialize_search(&response_body, location)
}

/// Query the Nominatim search endpoint for the single best match.
fn request_search(location: &str, env_state: &HeliographEnv) -> Result<String, HeliographError> {
    env_state.get_with_params(
        NOMINATIM_URL,
        &[("q", location), ("format", "jsonv2"), ("limit", "1")],
    )
}

/// Decode the Nominatim JSON payload into [`Coordinates`].
///
/// Arguments
/// -----------------
/// * `body`: the raw JSON response body.
/// * `location`: the original query, used in the not-found error.
///
/// Return
/// ----------
/// * The parsed [`Coordinates`], [`HeliographError::LocationNotFound`] for an
///   empty result set, or [`HeliographError::GeocoderResponse`] if the payload
///   cannot be decoded.
fn deserialize_search(body: &str, location: &str) -> Result<Coordinates, HeliographError> {
    let places: Vec<PlaceRecord> = serde_json::from_str(body)
        .map_err(|e| HeliographError::GeocoderResponse(e.to_string()))?;

    let Some(place) = places.first() else {
        return Err(HeliographError::LocationNotFound(location.to_string()));
    };

    let latitude: Degree = place
        .lat
        .parse()
        .map_err(|_| HeliographError::GeocoderResponse(format!("bad latitude: {}", place.lat)))?;
    let longitude: Degree = place
        .lon
        .parse()
        .map_err(|_| HeliographError::GeocoderResponse(format!("bad longitude: {}", place.lon)))?;

    Ok(Coordinates {
        latitude,
        longitude,
        name: Some(place.display_name.clone()),
    })
}
