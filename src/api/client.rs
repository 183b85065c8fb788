//! # HTTP Transport
//!
//! Blocking `reqwest` client carrying the bearer token and JSON headers on
//! every request.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use reqwest::{
    blocking::{Client, RequestBuilder},
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};

use super::{HttpResponse, Transport, TransportError};

/// Transport backed by a blocking HTTP client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a client sending `Authorization: Bearer <token>` and JSON
    /// content negotiation headers to `base_url`.
    pub fn new(base_url: &str, token: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .default_headers(default_headers(token)?)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn send(
        &self,
        method: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<HttpResponse, TransportError> {
        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        tracing::debug!(method, path, status, bytes = body.len(), "api response");

        Ok(HttpResponse { status, body })
    }
}

fn default_headers(token: &str) -> Result<HeaderMap, TransportError> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| TransportError::InvalidToken)?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<HttpResponse, TransportError> {
        let request = self.client.get(self.url(path)).query(query);
        self.send("GET", path, request)
    }

    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        let request = self.client.post(self.url(path)).json(body);
        self.send("POST", path, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = default_headers("secret").unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer secret");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn test_token_with_newline_rejected() {
        assert!(matches!(
            default_headers("bad\ntoken"),
            Err(TransportError::InvalidToken)
        ));
    }

    #[test]
    fn test_url_joining() {
        let transport = HttpTransport::new("https://example.com/rest/api/v1/", "t").unwrap();
        assert_eq!(transport.base_url(), "https://example.com/rest/api/v1");
        assert_eq!(
            transport.url("listcollections"),
            "https://example.com/rest/api/v1/listcollections"
        );
        assert_eq!(
            transport.url("/getcollection"),
            "https://example.com/rest/api/v1/getcollection"
        );
    }
}
