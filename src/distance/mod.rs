//! Great-circle distance between partner coordinates.

mod haversine;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
