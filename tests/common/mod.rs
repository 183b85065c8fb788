//! # Test Support
//!
//! Scripted transport that replays canned responses and records every
//! request the probe sends.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque};

use clipcheck::{HttpResponse, ProbeConfig, Transport, TransportError};

/// A request as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Get {
        path: String,
        query: Vec<(String, String)>,
    },
    Post {
        path: String,
        body: serde_json::Value,
    },
}

impl Sent {
    pub fn path(&self) -> &str {
        match self {
            Self::Get { path, .. } | Self::Post { path, .. } => path,
        }
    }
}

/// Transport answering from a queue of scripted replies.
///
/// Panics if the probe sends more requests than were scripted.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    sent: RefCell<Vec<Sent>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and body.
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queues a transport failure.
    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError::Other(message.to_string())));
        self
    }

    /// Requests sent so far, in order.
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.borrow().clone()
    }

    /// Endpoint paths requested so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .map(|s| s.path().to_string())
            .collect()
    }

    /// Number of scripted replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }

    fn next(&self) -> Result<HttpResponse, TransportError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("probe sent an unscripted request")
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(Sent::Get {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        });
        self.next()
    }

    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(Sent::Post {
            path: path.to_string(),
            body: body.clone(),
        });
        self.next()
    }
}

/// Configuration pointing at a fake domain.
pub fn test_config(collection_id: i64) -> ProbeConfig {
    ProbeConfig::new("test-token", "example-be.glean.com", collection_id)
}

/// Prompt that must never be consulted.
pub fn no_prompt(question: &str) -> anyhow::Result<Option<bool>> {
    panic!("unexpected prompt: {question}")
}
