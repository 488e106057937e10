//! # storefront-core
//!
//! Client-side storefront core logic: geographic partner tour navigation,
//! a shopping cart over a key-value blob store, checkout form validation,
//! and the legacy URL redirect table.
//!
//! The partner navigation subsystem is the algorithmic heart: partner pages
//! link to a "previous" and "next" partner ordered by geographic proximity.
//! The order is a closed tour built once per session with the greedy
//! nearest-neighbor heuristic over great-circle distances, then answered from
//! a memoized cache in O(1) per query.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Partner, PartnerDirectory, Tour)
//! - [`distance`] — Great-circle distance (haversine)
//! - [`tour`] — Greedy nearest-neighbor tour construction
//! - [`navigation`] — Memoized previous/next partner lookup
//! - [`cart`] — Shopping cart over a blob-store collaborator
//! - [`checkout`] — Shipping address validation
//! - [`redirects`] — Legacy URL redirect table
//! - [`config`] — Hostname-based environment detection

pub mod cart;
pub mod checkout;
pub mod config;
pub mod distance;
pub mod models;
pub mod navigation;
pub mod redirects;
pub mod tour;
