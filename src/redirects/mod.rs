//! Legacy URL redirect table.
//!
//! Maps paths from the old site onto their new homes: either a path on this
//! site or an absolute URL elsewhere. Lookups are exact-match and
//! case-sensitive; wildcard patterns are the out-of-scope not-found handler's
//! job.

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while building a [`RedirectTable`].
#[derive(Debug, Error)]
pub enum RedirectError {
    /// Sources must be site-absolute paths.
    #[error("redirect source `{0}` must start with `/`")]
    InvalidSource(String),
    /// Targets must be paths or http(s) URLs.
    #[error("redirect target `{target}` for `{src}` is neither a path nor an http(s) URL")]
    InvalidTarget { src: String, target: String },
    /// The same source was mapped twice.
    #[error("duplicate redirect source `{0}`")]
    DuplicateSource(String),
    /// The JSON document could not be parsed.
    #[error("invalid redirect data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where a legacy path redirects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// A path on this site.
    Internal(String),
    /// An absolute URL on another site.
    External(String),
}

impl RedirectTarget {
    /// The raw target string.
    pub fn as_str(&self) -> &str {
        match self {
            RedirectTarget::Internal(path) => path,
            RedirectTarget::External(url) => url,
        }
    }

    /// Returns `true` for off-site targets.
    pub fn is_external(&self) -> bool {
        matches!(self, RedirectTarget::External(_))
    }
}

/// Exact-match table from legacy paths to their targets.
///
/// # Examples
///
/// ```
/// use storefront_core::redirects::{RedirectTable, RedirectTarget};
///
/// let table = RedirectTable::from_pairs([
///     ("/recipes", "/cacao-espresso"),
///     ("/white-paper", "https://docs.example.com/white-paper"),
/// ])?;
///
/// assert_eq!(
///     table.resolve("/recipes"),
///     Some(&RedirectTarget::Internal("/cacao-espresso".to_string()))
/// );
/// assert!(table.resolve("/white-paper").expect("mapped").is_external());
/// assert_eq!(table.resolve("/recipes/anything"), None);
/// # Ok::<(), storefront_core::redirects::RedirectError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    entries: HashMap<String, RedirectTarget>,
}

impl RedirectTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from source/target pairs.
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self, RedirectError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut table = Self::new();
        for (source, target) in pairs {
            table.insert(source.into(), target.into())?;
        }
        Ok(table)
    }

    /// Loads a table from a JSON object mapping source path to target.
    pub fn from_json(json: &str) -> Result<Self, RedirectError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Self::from_pairs(entries)
    }

    /// Adds one mapping, classifying the target.
    ///
    /// Targets starting with `http://` or `https://` are external; targets
    /// starting with `/` are internal paths; anything else is rejected, as is
    /// a source that is not a site-absolute path or is already mapped.
    pub fn insert(&mut self, source: String, target: String) -> Result<(), RedirectError> {
        if !source.starts_with('/') {
            return Err(RedirectError::InvalidSource(source));
        }
        let classified = if target.starts_with("http://") || target.starts_with("https://") {
            RedirectTarget::External(target)
        } else if target.starts_with('/') {
            RedirectTarget::Internal(target)
        } else {
            return Err(RedirectError::InvalidTarget { src: source, target });
        };
        if self.entries.contains_key(&source) {
            return Err(RedirectError::DuplicateSource(source));
        }
        self.entries.insert(source, classified);
        Ok(())
    }

    /// Looks up a path. Exact match only, case-sensitive.
    pub fn resolve(&self, path: &str) -> Option<&RedirectTarget> {
        self.entries.get(path)
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
