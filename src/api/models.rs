//! # Wire Models
//!
//! JSON request and response bodies for the collections endpoints.
//! Responses tolerate missing optional fields and ignore unknown ones.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A remote collection as returned by list/get/create.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub item_count: Option<i64>,

    /// Timestamps are passed through as-is (string or epoch number).
    #[serde(default)]
    pub created_ts: Option<Value>,

    #[serde(default)]
    pub updated_ts: Option<Value>,

    #[serde(default)]
    pub permissions: CollectionPermissions,
}

impl Collection {
    /// Whether the caller may add items to this collection.
    pub const fn can_write(&self) -> bool {
        self.permissions.can_write
    }
}

/// Permission flags attached to a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPermissions {
    #[serde(default)]
    pub can_write: bool,
}

/// Body of `listcollections`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCollectionsResponse {
    /// Absent and `null` both mean no collections.
    #[serde(default)]
    pub collections: Option<Vec<Collection>>,
}

impl ListCollectionsResponse {
    pub fn into_collections(self) -> Vec<Collection> {
        self.collections.unwrap_or_default()
    }
}

/// Body of `getcollection`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetCollectionResponse {
    #[serde(default)]
    pub collection: Collection,
}

/// Body of `createcollection`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCollectionResponse {
    #[serde(default)]
    pub collection: Option<Collection>,
}

impl CreateCollectionResponse {
    /// Id of the created collection, if the response carried one.
    pub fn new_id(&self) -> Option<i64> {
        self.collection.as_ref().and_then(|c| c.id)
    }
}

/// One item to add to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionItemDescriptor {
    pub url: String,
    pub description: String,
}

/// Body of `addcollectionitems`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCollectionItemsRequest {
    pub collection_id: i64,
    pub added_collection_item_descriptors: Vec<CollectionItemDescriptor>,
}

/// Body of `createcollection`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest {
    pub name: String,
    pub description: String,
    pub pinned_metadata: Vec<Value>,
}
