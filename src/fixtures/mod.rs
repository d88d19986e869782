//! Fixture loading.
//!
//! Fixtures are static JSON documents standing in for a backend. This
//! module reads them from disk or over HTTP and caches them per view.
//!
//! # Overview
//!
//! - [`FixtureClient`]: loads and deserializes a fixture from a [`FixtureSource`](crate::FixtureSource)
//! - [`FixtureCache`]: keeps one loaded document until explicitly invalidated
//! - [`FixtureError`]: everything that can go wrong while loading
//!
//! # Retry Behavior
//!
//! URL fetches retry 429 and 5xx responses with a fixed one second delay,
//! up to the configured number of tries. The default is a single try,
//! meaning no automatic retries. File reads are never retried.

mod cache;
mod client;
mod errors;

pub use cache::FixtureCache;
pub use client::{FixtureClient, CRATE_VERSION, RETRY_WAIT_TIME};
pub use errors::FixtureError;
