pub mod constants;
pub mod display;
pub mod env_state;
pub mod ephemeris;
pub mod extractor;
pub mod geocoding;
pub mod heliograph;
pub mod heliograph_errors;
pub mod samples;
mod solar;
pub mod time;
