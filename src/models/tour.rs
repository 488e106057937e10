//! Cyclic tour over the partner set.

use std::collections::HashMap;

/// An ordered visiting sequence over partner slugs, treated as a ring.
///
/// A full tour contains every known slug exactly once; the last element's
/// successor is the first. A slug-to-position index makes previous/next
/// queries O(1).
///
/// # Examples
///
/// ```
/// use storefront_core::models::Tour;
///
/// let tour = Tour::from_order(vec!["b".into(), "a".into(), "c".into()]).expect("unique slugs");
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.neighbors_of("a"), Some(("b", "c")));
/// assert_eq!(tour.neighbors_of("b"), Some(("c", "a")));
/// assert_eq!(tour.neighbors_of("nope"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<String>,
    index: HashMap<String, usize>,
}

impl Tour {
    /// Creates an empty tour.
    pub fn empty() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a tour from an explicit visiting order.
    ///
    /// Returns `None` if any slug repeats.
    pub fn from_order(order: Vec<String>) -> Option<Self> {
        let mut index = HashMap::with_capacity(order.len());
        for (pos, slug) in order.iter().enumerate() {
            if index.insert(slug.clone(), pos).is_some() {
                return None;
            }
        }
        Some(Self { order, index })
    }

    /// Builds a tour from an order the caller has already deduplicated.
    pub(crate) fn from_unique_order(order: Vec<String>) -> Self {
        let index = order
            .iter()
            .enumerate()
            .map(|(pos, slug)| (slug.clone(), pos))
            .collect();
        Self { order, index }
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The visiting order.
    pub fn slugs(&self) -> &[String] {
        &self.order
    }

    /// Position of a slug in the tour, if present.
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.index.get(slug).copied()
    }

    /// Returns `true` if the slug is on the tour.
    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    /// Previous and next slugs for a stop, wrapping around the ring.
    ///
    /// For a tour of length 1 both neighbors are the stop itself. Returns
    /// `None` only when the slug is not on the tour.
    pub fn neighbors_of(&self, slug: &str) -> Option<(&str, &str)> {
        let pos = self.position(slug)?;
        let n = self.order.len();
        let prev = &self.order[(pos + n - 1) % n];
        let next = &self.order[(pos + 1) % n];
        Some((prev.as_str(), next.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tour_abc() -> Tour {
        Tour::from_order(vec!["a".into(), "b".into(), "c".into()]).expect("unique")
    }

    #[test]
    fn test_empty_tour() {
        let t = Tour::empty();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.neighbors_of("a"), None);
    }

    #[test]
    fn test_from_order_rejects_repeats() {
        assert!(Tour::from_order(vec!["a".into(), "a".into()]).is_none());
    }

    #[test]
    fn test_position_and_contains() {
        let t = tour_abc();
        assert_eq!(t.position("a"), Some(0));
        assert_eq!(t.position("c"), Some(2));
        assert_eq!(t.position("d"), None);
        assert!(t.contains("b"));
        assert!(!t.contains("d"));
    }

    #[test]
    fn test_neighbors_interior() {
        let t = tour_abc();
        assert_eq!(t.neighbors_of("b"), Some(("a", "c")));
    }

    #[test]
    fn test_neighbors_wrap_around() {
        let t = tour_abc();
        // First stop's predecessor is the last stop, and vice versa.
        assert_eq!(t.neighbors_of("a"), Some(("c", "b")));
        assert_eq!(t.neighbors_of("c"), Some(("b", "a")));
    }

    #[test]
    fn test_singleton_neighbors_self() {
        let t = Tour::from_order(vec!["only".into()]).expect("unique");
        assert_eq!(t.neighbors_of("only"), Some(("only", "only")));
    }

    #[test]
    fn test_two_stop_tour() {
        let t = Tour::from_order(vec!["a".into(), "b".into()]).expect("unique");
        assert_eq!(t.neighbors_of("a"), Some(("b", "b")));
        assert_eq!(t.neighbors_of("b"), Some(("a", "a")));
    }
}
