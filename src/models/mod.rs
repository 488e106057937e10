//! Domain model types for the storefront.
//!
//! Provides the partner location record, the directory that holds the full
//! partner set for a session, and the tour derived from it.

mod directory;
mod partner;
mod tour;

pub use directory::{DirectoryError, PartnerDirectory};
pub use partner::Partner;
pub use tour::Tour;
