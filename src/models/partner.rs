//! Partner location record.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;

/// A partner storefront location.
///
/// Partners are identified by a stable slug (the path segment of their page)
/// and carry the coordinates used for geographic tour ordering. Records are
/// immutable once loaded into a [`PartnerDirectory`](super::PartnerDirectory).
///
/// # Examples
///
/// ```
/// use storefront_core::models::Partner;
///
/// let p = Partner::new("hacker-dojo", "Hacker Dojo", 37.3956, -122.0758, "Mountain View, California");
/// assert_eq!(p.slug(), "hacker-dojo");
/// assert_eq!(p.name(), "Hacker Dojo");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    slug: String,
    name: String,
    lat: f64,
    lon: f64,
    location: String,
}

impl Partner {
    /// Creates a new partner record.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            lat,
            lon,
            location: location.into(),
        }
    }

    /// Stable identifier, unique within a directory.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees (−90..90).
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees (−180..180).
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Free-text place description, e.g. "Santa Cruz, California".
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Great-circle distance to another partner in kilometers.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_core::models::Partner;
    ///
    /// let a = Partner::new("a", "A", 0.0, 0.0, "");
    /// let b = Partner::new("b", "B", 0.0, 0.0, "");
    /// assert_eq!(a.distance_to(&b), 0.0);
    /// ```
    pub fn distance_to(&self, other: &Partner) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_new() {
        let p = Partner::new("go-ask-alice", "Go Ask Alice", 36.9741, -122.0308, "Santa Cruz");
        assert_eq!(p.slug(), "go-ask-alice");
        assert_eq!(p.name(), "Go Ask Alice");
        assert_eq!(p.lat(), 36.9741);
        assert_eq!(p.lon(), -122.0308);
        assert_eq!(p.location(), "Santa Cruz");
    }

    #[test]
    fn test_distance_to_symmetric() {
        let a = Partner::new("a", "A", 37.7749, -122.4194, "San Francisco");
        let b = Partner::new("b", "B", 39.7392, -104.9903, "Denver");
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Partner::new("a", "A", 42.2190, -123.2770, "Williams");
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Partner::new("miss-tomato", "Miss Tomato", 37.7066, -122.4619, "Daly City");
        let json = serde_json::to_string(&p).expect("serialize");
        let back: Partner = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, p);
    }
}
