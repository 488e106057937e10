//! Previous/next partner lookup over the memoized tour.
//!
//! [`TourNavigator`] owns the partner directory, builds the tour lazily on
//! first use, and answers ring-adjacency queries with full partner records.
//! The page-routing layer extracts the current slug from the request path and
//! renders the result as links; this module supplies data only.

use log::debug;
use once_cell::sync::OnceCell;

use crate::models::{Partner, PartnerDirectory, Tour};
use crate::tour::nearest_neighbor_tour;

/// Tour-adjacent partners for a stop, resolved to full records.
///
/// Both neighbors always resolve for a stop on the tour: the ring wraps, and
/// a singleton tour neighbors itself on both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbors<'a> {
    /// Predecessor on the tour (the last stop, for the first).
    pub previous: &'a Partner,
    /// Successor on the tour (the first stop, for the last).
    pub next: &'a Partner,
}

/// Neighbor lookup service with a memoized tour.
///
/// The navigator is constructed with its partner directory; callers hold the
/// navigator itself, so several independent partner sets can coexist in one
/// process. The tour is built on first query and cached in a
/// single-assignment cell; the builder is pure, so redundant construction
/// would be wasteful but never wrong.
///
/// Mutating the directory through [`directory_mut`](Self::directory_mut) does
/// not touch the cached tour; queries keep answering from the cache until
/// [`invalidate`](Self::invalidate) is called.
///
/// # Examples
///
/// ```
/// use storefront_core::models::{Partner, PartnerDirectory};
/// use storefront_core::navigation::TourNavigator;
///
/// let mut dir = PartnerDirectory::new();
/// dir.insert(Partner::new("a", "A", 0.0, 10.0, ""))?;
/// dir.insert(Partner::new("b", "B", 0.0, 0.0, ""))?;
/// dir.insert(Partner::new("c", "C", 0.0, 20.0, ""))?;
///
/// let nav = TourNavigator::new(dir);
/// let n = nav.neighbors("a").expect("a is a known partner");
/// assert_eq!(n.previous.slug(), "b");
/// assert_eq!(n.next.slug(), "c");
/// assert!(nav.neighbors("does-not-exist").is_none());
/// # Ok::<(), storefront_core::models::DirectoryError>(())
/// ```
#[derive(Debug)]
pub struct TourNavigator {
    directory: PartnerDirectory,
    tour: OnceCell<Tour>,
}

impl TourNavigator {
    /// Creates a navigator over the given directory. The tour is not built
    /// until the first query.
    pub fn new(directory: PartnerDirectory) -> Self {
        Self {
            directory,
            tour: OnceCell::new(),
        }
    }

    /// The underlying partner directory.
    pub fn directory(&self) -> &PartnerDirectory {
        &self.directory
    }

    /// Mutable access to the directory, for composition and tests.
    ///
    /// Does not invalidate the cached tour; call [`invalidate`](Self::invalidate)
    /// after changing the partner set.
    pub fn directory_mut(&mut self) -> &mut PartnerDirectory {
        &mut self.directory
    }

    /// The memoized tour, building it on first call.
    pub fn tour(&self) -> &Tour {
        self.tour
            .get_or_init(|| nearest_neighbor_tour(&self.directory))
    }

    /// Previous and next partners for a slug, or `None` if the slug is not a
    /// known partner on the current tour.
    pub fn neighbors(&self, slug: &str) -> Option<Neighbors<'_>> {
        self.directory.get(slug)?;
        let (prev, next) = self.tour().neighbors_of(slug)?;
        Some(Neighbors {
            previous: self.directory.get(prev)?,
            next: self.directory.get(next)?,
        })
    }

    /// Discards the memoized tour; the next query rebuilds it from the
    /// current directory.
    pub fn invalidate(&mut self) {
        if self.tour.take().is_some() {
            debug!("tour cache invalidated");
        }
    }
}
