//! # API Probe
//!
//! Diagnostic checks against the collections API. Each check issues one
//! request, prints what it found, and records a [`TestResult`].
//!
//! Checks never fail at the Rust level: HTTP errors, malformed bodies, and
//! transport failures all become failed results.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod driver;
pub mod result;

use chrono::Local;
use serde_json::Value;

pub use self::{
    driver::RunReport,
    result::{print_summary, Tally, TestResult},
};
use crate::{
    api::{
        AddCollectionItemsRequest, Collection, CollectionItemDescriptor, CreateCollectionRequest,
        CreateCollectionResponse, GetCollectionResponse, HttpResponse, ListCollectionsResponse,
        Transport,
    },
    config::ProbeConfig,
    constants::{
        DETAIL_DESCRIPTION_TRUNCATE_LEN, ENDPOINT_ADD_COLLECTION_ITEMS,
        ENDPOINT_CREATE_COLLECTION, ENDPOINT_GET_COLLECTION, ENDPOINT_LIST_COLLECTIONS,
        ERROR_BODY_TRUNCATE_LEN, LIST_DESCRIPTION_TRUNCATE_LEN, LIST_PREVIEW_COUNT,
        TEST_COLLECTION_DESCRIPTION,
    },
    marker, ui,
};

pub const TEST_CONNECTION: &str = "API Connection";
pub const TEST_LIST_COLLECTIONS: &str = "List Collections";
pub const TEST_COLLECTION_CHECK: &str = "Collection Check";
pub const TEST_COLLECTION_ACCESS: &str = "Collection Access";
pub const TEST_ADD_ITEM: &str = "Add Item";
pub const TEST_CREATE_COLLECTION: &str = "Create Collection";

/// Runs checks over a transport and keeps their results in execution order.
pub struct Probe<T> {
    config: ProbeConfig,
    transport: T,
    results: Vec<TestResult>,
}

impl<T: Transport> Probe<T> {
    pub const fn new(config: ProbeConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            results: Vec::new(),
        }
    }

    pub const fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Results recorded so far, oldest first.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Consumes the probe, returning its results.
    pub fn into_results(self) -> Vec<TestResult> {
        self.results
    }

    fn record(&mut self, test: &str, success: bool, message: impl Into<String>) {
        let message = message.into();
        ui::print_result(test, success, &message);
        tracing::info!(test, success, "check finished");
        self.results.push(TestResult::new(test, success, message));
    }

    /// Checks that the token authenticates. Gates every other check.
    pub fn test_connection(&mut self) -> bool {
        ui::print_header("Testing API Connection");

        match self.transport.get(ENDPOINT_LIST_COLLECTIONS, &[]) {
            Ok(response) => {
                let (success, message) = match response.status {
                    200 => (
                        true,
                        format!("Successfully connected to {}", self.config.domain()),
                    ),
                    401 => (false, "Invalid API token (401 Unauthorized)".to_string()),
                    403 => (
                        false,
                        "Token lacks required permissions (403 Forbidden)".to_string(),
                    ),
                    status => (false, format!("Unexpected status: {status}")),
                };
                self.record(TEST_CONNECTION, success, message);
                success
            }
            Err(err) => {
                self.record(TEST_CONNECTION, false, format!("Network error: {err}"));
                false
            }
        }
    }

    /// Lists visible collections and previews the first few.
    ///
    /// An empty list passes. Returns `None` when the check failed.
    pub fn list_collections(&mut self) -> Option<Vec<Collection>> {
        ui::print_header("Listing Collections");

        let response = match self.transport.get(ENDPOINT_LIST_COLLECTIONS, &[]) {
            Ok(response) => response,
            Err(err) => {
                self.record(TEST_LIST_COLLECTIONS, false, err.to_string());
                return None;
            }
        };

        if response.status != 200 {
            self.record(TEST_LIST_COLLECTIONS, false, error_message(&response));
            return None;
        }

        let collections = match response.json::<ListCollectionsResponse>() {
            Ok(parsed) => parsed.into_collections(),
            Err(err) => {
                self.record(TEST_LIST_COLLECTIONS, false, err.to_string());
                return None;
            }
        };

        if collections.is_empty() {
            self.record(
                TEST_LIST_COLLECTIONS,
                true,
                "No collections found (you may need to create one)",
            );
            return Some(collections);
        }

        self.record(
            TEST_LIST_COLLECTIONS,
            true,
            format!("Found {} collection(s)", collections.len()),
        );

        println!("\nYour Collections:");
        for line in collection_preview(&collections) {
            println!("{line}");
        }

        Some(collections)
    }

    /// Looks up one collection and records whether it is writable.
    ///
    /// Returns true when the collection was fetched, even if it is read-only.
    pub fn check_collection(&mut self, collection_id: i64) -> bool {
        ui::print_header(&format!("Checking Collection ID: {collection_id}"));

        let query = [("collectionId", collection_id.to_string())];
        let response = match self.transport.get(ENDPOINT_GET_COLLECTION, &query) {
            Ok(response) => response,
            Err(err) => {
                self.record(TEST_COLLECTION_CHECK, false, err.to_string());
                return false;
            }
        };

        match response.status {
            200 => {}
            404 => {
                self.record(
                    TEST_COLLECTION_CHECK,
                    false,
                    format!("Collection {collection_id} not found"),
                );
                return false;
            }
            _ => {
                self.record(TEST_COLLECTION_CHECK, false, error_message(&response));
                return false;
            }
        }

        let collection = match response.json::<GetCollectionResponse>() {
            Ok(parsed) => parsed.collection,
            Err(err) => {
                self.record(TEST_COLLECTION_CHECK, false, err.to_string());
                return false;
            }
        };

        println!("\nCollection Details:");
        for line in collection_details(&collection) {
            println!("{line}");
        }

        if collection.can_write() {
            self.record(
                TEST_COLLECTION_ACCESS,
                true,
                "You have write access to this collection",
            );
        } else {
            self.record(
                TEST_COLLECTION_ACCESS,
                false,
                "You don't have write access to this collection",
            );
        }

        true
    }

    /// Adds a uniquely named test item to a collection.
    pub fn test_add_item(&mut self, collection_id: i64) -> bool {
        ui::print_header(&format!("Testing Add Item to Collection {collection_id}"));

        let descriptor = CollectionItemDescriptor {
            url: marker::test_item_url(&marker::marker()),
            description: marker::test_item_description(Local::now()),
        };

        println!("\nSending test item:");
        println!("  URL: {}", descriptor.url);
        println!(
            "  Description: {}",
            ui::truncate_chars(&descriptor.description, LIST_DESCRIPTION_TRUNCATE_LEN)
        );

        let request = AddCollectionItemsRequest {
            collection_id,
            added_collection_item_descriptors: vec![descriptor],
        };

        let response = match to_json(&request).and_then(|body| {
            self.transport
                .post_json(ENDPOINT_ADD_COLLECTION_ITEMS, &body)
                .map_err(|e| e.to_string())
        }) {
            Ok(response) => response,
            Err(message) => {
                self.record(TEST_ADD_ITEM, false, message);
                return false;
            }
        };

        let (success, message) = match response.status {
            200 | 201 | 204 => (
                true,
                "Successfully added test item to collection".to_string(),
            ),
            400 => {
                let detail = if response.body.is_empty() {
                    "Bad request"
                } else {
                    response.body.as_str()
                };
                (
                    false,
                    format!(
                        "Bad request: {}",
                        ui::truncate_chars(detail, ERROR_BODY_TRUNCATE_LEN)
                    ),
                )
            }
            403 => (
                false,
                "Permission denied - check token has COLLECTIONS scope".to_string(),
            ),
            _ => (false, error_message(&response)),
        };

        self.record(TEST_ADD_ITEM, success, message);
        success
    }

    /// Creates a timestamped test collection, returning its id.
    pub fn create_test_collection(&mut self) -> Option<i64> {
        ui::print_header("Creating Test Collection");

        let request = CreateCollectionRequest {
            name: marker::test_collection_name(Local::now()),
            description: TEST_COLLECTION_DESCRIPTION.to_string(),
            pinned_metadata: Vec::new(),
        };

        println!("\nCreating collection: {}", request.name);

        let response = match to_json(&request).and_then(|body| {
            self.transport
                .post_json(ENDPOINT_CREATE_COLLECTION, &body)
                .map_err(|e| e.to_string())
        }) {
            Ok(response) => response,
            Err(message) => {
                self.record(TEST_CREATE_COLLECTION, false, message);
                return None;
            }
        };

        if !matches!(response.status, 200 | 201) {
            self.record(TEST_CREATE_COLLECTION, false, error_message(&response));
            return None;
        }

        match response.json::<CreateCollectionResponse>() {
            Ok(parsed) => {
                if let Some(id) = parsed.new_id() {
                    self.record(
                        TEST_CREATE_COLLECTION,
                        true,
                        format!("Created collection with ID: {id}"),
                    );
                    Some(id)
                } else {
                    self.record(
                        TEST_CREATE_COLLECTION,
                        false,
                        "Response missing collection ID",
                    );
                    None
                }
            }
            Err(err) => {
                self.record(TEST_CREATE_COLLECTION, false, err.to_string());
                None
            }
        }
    }
}

/// Preview lines for a collection listing: the first few entries, each with
/// an optional shortened description, then a count of the rest.
pub fn collection_preview(collections: &[Collection]) -> Vec<String> {
    let mut lines = Vec::new();
    for (idx, collection) in collections.iter().take(LIST_PREVIEW_COUNT).enumerate() {
        lines.push(format!(
            "  {}. ID: {} - Name: {}",
            idx + 1,
            display_or(collection.id, "None"),
            collection.name.as_deref().unwrap_or("None")
        ));
        if let Some(description) = collection.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!(
                "      Description: {}",
                ui::truncate_chars(description, LIST_DESCRIPTION_TRUNCATE_LEN)
            ));
        }
    }
    if collections.len() > LIST_PREVIEW_COUNT {
        lines.push(format!(
            "  ... and {} more",
            collections.len() - LIST_PREVIEW_COUNT
        ));
    }
    lines
}

/// Detail lines for a single collection.
pub fn collection_details(collection: &Collection) -> Vec<String> {
    vec![
        format!("  ID: {}", display_or(collection.id, "None")),
        format!("  Name: {}", collection.name.as_deref().unwrap_or("None")),
        format!(
            "  Description: {}",
            ui::truncate_chars(
                collection.description.as_deref().unwrap_or("N/A"),
                DETAIL_DESCRIPTION_TRUNCATE_LEN
            )
        ),
        format!("  Item Count: {}", display_or(collection.item_count, "Unknown")),
        format!("  Created: {}", timestamp_or_unknown(collection.created_ts.as_ref())),
        format!("  Updated: {}", timestamp_or_unknown(collection.updated_ts.as_ref())),
    ]
}

fn to_json<S: serde::Serialize>(value: &S) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// Failure message for an unexpected status: truncated body or `HTTP {status}`.
fn error_message(response: &HttpResponse) -> String {
    ui::body_or_status(&response.body, response.status, ERROR_BODY_TRUNCATE_LEN)
}

fn display_or<V: std::fmt::Display>(value: Option<V>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |v| v.to_string())
}

/// Timestamps arrive as strings or numbers; strings print without quotes.
fn timestamp_or_unknown(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "Unknown".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
