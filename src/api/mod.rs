//! # Collections API
//!
//! Transport seam and wire models for the collections REST API.
//!
//! The probe talks to the API only through [`Transport`], so the blocking
//! HTTP client can be swapped for a scripted one in tests.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod client;
pub mod models;

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use self::{
    client::HttpTransport,
    models::{
        AddCollectionItemsRequest, Collection, CollectionItemDescriptor, CollectionPermissions,
        CreateCollectionRequest, CreateCollectionResponse, GetCollectionResponse,
        ListCollectionsResponse,
    },
};

/// Failure below the HTTP status level: DNS, connect, timeout, body read.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be completed.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The token cannot be carried in an HTTP header.
    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// Any other transport failure, with its description.
    #[error("{0}")]
    Other(String),
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parses the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

/// Blocking request/response exchange against the API base path.
///
/// `path` is an endpoint name relative to the base (e.g., `listcollections`).
/// Any status code is a successful exchange; only transport failures are errors.
pub trait Transport {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<HttpResponse, TransportError>;

    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<HttpResponse, TransportError> {
        (**self).get(path, query)
    }

    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        (**self).post_json(path, body)
    }
}
