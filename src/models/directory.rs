//! Partner directory: the fixed slug-to-partner mapping.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use thiserror::Error;

use super::Partner;

/// Errors raised while populating a [`PartnerDirectory`].
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A partner was inserted with an empty slug.
    #[error("partner slug must not be empty")]
    EmptySlug,
    /// A partner was inserted under a slug that is already present.
    #[error("duplicate partner slug `{0}`")]
    DuplicateSlug(String),
    /// Latitude outside the valid degree range.
    #[error("partner `{slug}` has latitude {lat} outside -90..90")]
    LatitudeOutOfRange { slug: String, lat: f64 },
    /// Longitude outside the valid degree range.
    #[error("partner `{slug}` has longitude {lon} outside -180..180")]
    LongitudeOutOfRange { slug: String, lon: f64 },
    /// A JSON entry's key disagrees with the slug embedded in its record.
    #[error("entry key `{key}` does not match partner slug `{slug}`")]
    SlugMismatch { key: String, slug: String },
    /// The JSON document could not be parsed.
    #[error("invalid partner data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full set of known partners, keyed by slug.
///
/// Loaded once at startup from configuration data and treated as immutable by
/// the routing subsystem. Iteration follows insertion order; lookups are O(1).
///
/// Coordinate-range and slug-uniqueness validation happens here, at insert
/// time. The distance metric downstream trusts whatever the directory holds.
///
/// # Examples
///
/// ```
/// use storefront_core::models::{Partner, PartnerDirectory};
///
/// let mut dir = PartnerDirectory::new();
/// dir.insert(Partner::new("kikis-cocoa", "Kiki's Cocoa", 37.7749, -122.4194, "San Francisco"))?;
/// assert_eq!(dir.len(), 1);
/// assert!(dir.get("kikis-cocoa").is_some());
/// assert!(dir.get("unknown").is_none());
/// # Ok::<(), storefront_core::models::DirectoryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PartnerDirectory {
    partners: Vec<Partner>,
    index: HashMap<String, usize>,
}

impl PartnerDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from a list of partners.
    pub fn from_partners(partners: Vec<Partner>) -> Result<Self, DirectoryError> {
        let mut dir = Self::new();
        for partner in partners {
            dir.insert(partner)?;
        }
        Ok(dir)
    }

    /// Loads a directory from a JSON object mapping slug to partner record.
    ///
    /// Entries are inserted in slug order, so the resulting directory does not
    /// depend on the order the document happens to list them in. Each entry's
    /// key must agree with the slug inside the record.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_core::models::PartnerDirectory;
    ///
    /// let dir = PartnerDirectory::from_json(r#"{
    ///     "rpm-ninja": {
    ///         "slug": "rpm-ninja",
    ///         "name": "RPM Ninja",
    ///         "lat": 47.6062,
    ///         "lon": -122.3321,
    ///         "location": "Seattle, Washington"
    ///     }
    /// }"#)?;
    /// assert_eq!(dir.len(), 1);
    /// # Ok::<(), storefront_core::models::DirectoryError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let entries: BTreeMap<String, Partner> = serde_json::from_str(json)?;
        let mut dir = Self::new();
        for (key, partner) in entries {
            if key != partner.slug() {
                return Err(DirectoryError::SlugMismatch {
                    key,
                    slug: partner.slug().to_string(),
                });
            }
            dir.insert(partner)?;
        }
        debug!("loaded {} partners", dir.len());
        Ok(dir)
    }

    /// Inserts a partner, validating its slug and coordinates.
    pub fn insert(&mut self, partner: Partner) -> Result<(), DirectoryError> {
        if partner.slug().is_empty() {
            return Err(DirectoryError::EmptySlug);
        }
        if self.index.contains_key(partner.slug()) {
            return Err(DirectoryError::DuplicateSlug(partner.slug().to_string()));
        }
        if !(-90.0..=90.0).contains(&partner.lat()) {
            return Err(DirectoryError::LatitudeOutOfRange {
                slug: partner.slug().to_string(),
                lat: partner.lat(),
            });
        }
        if !(-180.0..=180.0).contains(&partner.lon()) {
            return Err(DirectoryError::LongitudeOutOfRange {
                slug: partner.slug().to_string(),
                lon: partner.lon(),
            });
        }
        self.index
            .insert(partner.slug().to_string(), self.partners.len());
        self.partners.push(partner);
        Ok(())
    }

    /// Looks up a partner by slug.
    pub fn get(&self, slug: &str) -> Option<&Partner> {
        self.index.get(slug).map(|&i| &self.partners[i])
    }

    /// Returns `true` if the slug is known.
    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    /// Number of partners.
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// Returns `true` if no partners are loaded.
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Iterates over partners in insertion order.
    pub fn partners(&self) -> impl Iterator<Item = &Partner> {
        self.partners.iter()
    }

    /// Iterates over slugs in insertion order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.partners.iter().map(|p| p.slug())
    }
}
