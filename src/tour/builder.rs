//! Greedy nearest-neighbor tour construction.
//!
//! The classic constructive heuristic for the traveling-salesman problem:
//! seed the tour deterministically, then always move to the closest unvisited
//! partner. Not optimal, but deterministic and O(n²), which is fine for a
//! partner set measured in tens.

use log::debug;

use crate::models::{Partner, PartnerDirectory, Tour};

/// Builds a visiting order over all partners in the directory.
///
/// The tour starts at the westernmost partner (minimum longitude) and greedily
/// extends to the nearest unvisited partner by great-circle distance. Ties,
/// both for the start and for equidistant candidates, break toward the
/// lexicographically smallest slug, so the result is stable regardless of the
/// order the directory was populated in.
///
/// Total over its input domain: any directory yields a permutation of its
/// slugs, and an empty directory yields an empty tour.
///
/// # Examples
///
/// ```
/// use storefront_core::models::{Partner, PartnerDirectory};
/// use storefront_core::tour::nearest_neighbor_tour;
///
/// let mut dir = PartnerDirectory::new();
/// dir.insert(Partner::new("a", "A", 0.0, 10.0, ""))?;
/// dir.insert(Partner::new("b", "B", 0.0, 0.0, ""))?;
/// dir.insert(Partner::new("c", "C", 0.0, 20.0, ""))?;
///
/// // Starts at the westernmost partner, then visits by proximity.
/// let tour = nearest_neighbor_tour(&dir);
/// assert_eq!(tour.slugs(), ["b", "a", "c"]);
/// # Ok::<(), storefront_core::models::DirectoryError>(())
/// ```
pub fn nearest_neighbor_tour(directory: &PartnerDirectory) -> Tour {
    let partners: Vec<&Partner> = directory.partners().collect();
    let n = partners.len();
    if n == 0 {
        return Tour::empty();
    }

    let start = (0..n)
        .min_by(|&a, &b| {
            partners[a]
                .lon()
                .partial_cmp(&partners[b].lon())
                .expect("longitude should not be NaN")
                .then_with(|| partners[a].slug().cmp(partners[b].slug()))
        })
        .expect("directory is non-empty");

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut order = Vec::with_capacity(n);
    order.push(partners[start].slug().to_string());
    let mut current = start;

    for _ in 1..n {
        let next = (0..n)
            .filter(|&i| !visited[i])
            .min_by(|&a, &b| {
                let da = partners[current].distance_to(partners[a]);
                let db = partners[current].distance_to(partners[b]);
                da.partial_cmp(&db)
                    .expect("distance should not be NaN")
                    .then_with(|| partners[a].slug().cmp(partners[b].slug()))
            })
            .expect("unvisited partner remains");
        visited[next] = true;
        order.push(partners[next].slug().to_string());
        current = next;
    }

    debug!("built tour over {} partners starting at `{}`", n, order[0]);
    Tour::from_unique_order(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn directory(entries: &[(&str, f64, f64)]) -> PartnerDirectory {
        let mut dir = PartnerDirectory::new();
        for &(slug, lat, lon) in entries {
            dir.insert(Partner::new(slug, slug.to_uppercase(), lat, lon, ""))
                .expect("valid partner");
        }
        dir
    }

    #[test]
    fn test_empty_directory_empty_tour() {
        let tour = nearest_neighbor_tour(&PartnerDirectory::new());
        assert!(tour.is_empty());
    }

    #[test]
    fn test_singleton() {
        let dir = directory(&[("solo", 10.0, 20.0)]);
        let tour = nearest_neighbor_tour(&dir);
        assert_eq!(tour.slugs(), ["solo"]);
    }

    #[test]
    fn test_starts_westernmost_then_nearest() {
        // b is westernmost; a (10° away) is nearer to b than c (20° away).
        let dir = directory(&[("a", 0.0, 10.0), ("b", 0.0, 0.0), ("c", 0.0, 20.0)]);
        let tour = nearest_neighbor_tour(&dir);
        assert_eq!(tour.slugs(), ["b", "a", "c"]);
    }

    #[test]
    fn test_neighbors_in_concrete_tour() {
        let dir = directory(&[("a", 0.0, 10.0), ("b", 0.0, 0.0), ("c", 0.0, 20.0)]);
        let tour = nearest_neighbor_tour(&dir);
        assert_eq!(tour.neighbors_of("a"), Some(("b", "c")));
        assert_eq!(tour.neighbors_of("b"), Some(("c", "a")));
        assert_eq!(tour.neighbors_of("c"), Some(("a", "b")));
    }

    #[test]
    fn test_start_tie_breaks_by_slug() {
        // Same longitude for both candidates; the smaller slug seeds the tour.
        let dir = directory(&[("zeta", 0.0, -5.0), ("alpha", 40.0, -5.0), ("mid", 20.0, 0.0)]);
        let tour = nearest_neighbor_tour(&dir);
        assert_eq!(tour.slugs()[0], "alpha");
    }

    #[test]
    fn test_nearest_tie_breaks_by_slug() {
        // north and south are equidistant from start; north wins on slug.
        let dir = directory(&[("start", 0.0, -10.0), ("south", -10.0, 0.0), ("north", 10.0, 0.0)]);
        let tour = nearest_neighbor_tour(&dir);
        assert_eq!(tour.slugs(), ["start", "north", "south"]);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let forward = directory(&[("a", 0.0, 10.0), ("b", 0.0, 0.0), ("c", 0.0, 20.0)]);
        let reverse = directory(&[("c", 0.0, 20.0), ("b", 0.0, 0.0), ("a", 0.0, 10.0)]);
        assert_eq!(
            nearest_neighbor_tour(&forward).slugs(),
            nearest_neighbor_tour(&reverse).slugs()
        );
    }

    proptest! {
        #[test]
        fn prop_tour_is_permutation(
            coords in proptest::collection::vec((-80.0f64..80.0, -170.0f64..170.0), 1..12)
        ) {
            let mut dir = PartnerDirectory::new();
            for (i, &(lat, lon)) in coords.iter().enumerate() {
                dir.insert(Partner::new(format!("p{i:02}"), format!("P{i}"), lat, lon, ""))
                    .expect("valid partner");
            }
            let tour = nearest_neighbor_tour(&dir);
            prop_assert_eq!(tour.len(), dir.len());
            let mut got: Vec<String> = tour.slugs().to_vec();
            got.sort();
            let mut want: Vec<String> = dir.slugs().map(str::to_string).collect();
            want.sort();
            prop_assert_eq!(got, want);
        }

        #[test]
        fn prop_deterministic(
            coords in proptest::collection::vec((-80.0f64..80.0, -170.0f64..170.0), 1..12)
        ) {
            let mut dir = PartnerDirectory::new();
            for (i, &(lat, lon)) in coords.iter().enumerate() {
                dir.insert(Partner::new(format!("p{i:02}"), format!("P{i}"), lat, lon, ""))
                    .expect("valid partner");
            }
            let first = nearest_neighbor_tour(&dir);
            let second = nearest_neighbor_tour(&dir);
            prop_assert_eq!(first.slugs(), second.slugs());
        }
    }
}
