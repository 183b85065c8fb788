//! # Probe Markers
//!
//! Collision-resistant tokens embedded in the synthetic payloads the probe
//! sends, so repeated runs never produce the same test item URL.
//!
//! A marker is the Unix timestamp in seconds followed by a short random
//! suffix in Crockford's Base32 (e.g., `1767225600-7K2Q`).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{DateTime, Local, Utc};
use rand::Rng;

use crate::constants::{
    MARKER_RANDOM_LEN, TEST_COLLECTION_NAME_PREFIX, TEST_ITEM_URL_PREFIX,
};

/// Crockford's Base32 alphabet (excludes I, L, O, U for readability)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Returns `len` random Crockford Base32 characters.
fn random_suffix(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(CROCKFORD_ALPHABET[rng.random_range(0..CROCKFORD_ALPHABET.len())]))
        .collect()
}

/// Builds a marker for the given instant.
pub fn marker_at(now: DateTime<Utc>) -> String {
    format!("{}-{}", now.timestamp(), random_suffix(MARKER_RANDOM_LEN))
}

/// Builds a marker for the current instant.
pub fn marker() -> String {
    marker_at(Utc::now())
}

/// URL of the synthetic item added by the probe.
pub fn test_item_url(marker: &str) -> String {
    format!("{TEST_ITEM_URL_PREFIX}{marker}")
}

/// Description of the synthetic item, stamped with an ISO-8601 time.
pub fn test_item_description(now: DateTime<Local>) -> String {
    format!(
        "Test item added by API test script at {}",
        now.format("%Y-%m-%dT%H:%M:%S%.6f")
    )
}

/// Name of a collection created by the probe (`API Test Collection 20260101_120000`).
pub fn test_collection_name(now: DateTime<Local>) -> String {
    format!(
        "{TEST_COLLECTION_NAME_PREFIX} {}",
        now.format("%Y%m%d_%H%M%S")
    )
}
