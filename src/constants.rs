//! # Constants
//!
//! Centralized constants for magic values used throughout clipcheck.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// API Defaults
// =============================================================================

/// Environment variable holding the API bearer token.
pub const TOKEN_ENV_VAR: &str = "GLEAN_API_TOKEN";

/// Backend domain used when neither the CLI nor the config file sets one.
pub const DEFAULT_DOMAIN: &str = "linkedin-be.glean.com";

/// Collection checked when neither the CLI nor the config file sets one.
pub const DEFAULT_COLLECTION_ID: i64 = 14191;

/// REST base path appended to the domain.
pub const API_BASE_PATH: &str = "/rest/api/v1";

// =============================================================================
// API Endpoints
// =============================================================================

/// Lists every collection visible to the token.
pub const ENDPOINT_LIST_COLLECTIONS: &str = "listcollections";

/// Fetches one collection (query parameter `collectionId`).
pub const ENDPOINT_GET_COLLECTION: &str = "getcollection";

/// Appends items to a collection.
pub const ENDPOINT_ADD_COLLECTION_ITEMS: &str = "addcollectionitems";

/// Creates a new collection.
pub const ENDPOINT_CREATE_COLLECTION: &str = "createcollection";

// =============================================================================
// Report Display
// =============================================================================

/// Maximum number of collections printed by the listing check.
pub const LIST_PREVIEW_COUNT: usize = 10;

/// Truncation for collection descriptions in the listing.
pub const LIST_DESCRIPTION_TRUNCATE_LEN: usize = 100;

/// Truncation for the description shown by the single-collection check.
pub const DETAIL_DESCRIPTION_TRUNCATE_LEN: usize = 200;

/// Truncation for response bodies carried in failure messages.
pub const ERROR_BODY_TRUNCATE_LEN: usize = 200;

/// Truncation for failure messages repeated in the summary.
pub const SUMMARY_MESSAGE_TRUNCATE_LEN: usize = 100;

/// Width of the `=` rule around section headers.
pub const HEADER_RULE_WIDTH: usize = 60;

// =============================================================================
// Synthetic Payloads
// =============================================================================

/// URL prefix for the test item added to a collection.
pub const TEST_ITEM_URL_PREFIX: &str = "https://example.com/test-";

/// Name prefix for collections created by the probe.
pub const TEST_COLLECTION_NAME_PREFIX: &str = "API Test Collection";

/// Fixed description for collections created by the probe.
pub const TEST_COLLECTION_DESCRIPTION: &str = "Collection created by API test script for validation";

/// Number of random Crockford Base32 characters in a marker suffix.
pub const MARKER_RANDOM_LEN: usize = 4;

// =============================================================================
// File System
// =============================================================================

/// Configuration directory name (inside user's config directory).
pub const CONFIG_DIR: &str = "clipcheck";

/// Configuration file name (inside `CONFIG_DIR`).
pub const CONFIG_FILENAME: &str = "config";

/// Environment variable for the tracing filter.
pub const LOG_ENV_VAR: &str = "CLIPCHECK_LOG";
