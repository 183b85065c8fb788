//! # Probe Driver
//!
//! Runs the checks in their fixed order and prints the summary.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use super::{result::print_summary, Probe, Tally, TestResult};
use crate::{api::Transport, config::CreatePolicy, ui};

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The connectivity check failed and nothing else ran.
    pub aborted: bool,
    pub results: Vec<TestResult>,
    /// Id of a collection created during the run, if any.
    pub created_collection: Option<i64>,
}

impl RunReport {
    pub fn tally(&self) -> Tally {
        Tally::of(&self.results)
    }

    /// True when the run completed and every check passed.
    pub fn all_passed(&self) -> bool {
        !self.aborted && self.tally().all_passed()
    }
}

impl<T: Transport> Probe<T> {
    /// Runs the full suite.
    ///
    /// Order: connection (gates the rest), listing, target collection, then
    /// either the add-item check or the optional collection creation.
    /// `prompt` is consulted only under [`CreatePolicy::Ask`]; `Ok(None)`
    /// means no answer could be obtained and counts as "no".
    pub fn run_all<F>(mut self, prompt: F) -> Result<RunReport>
    where
        F: FnOnce(&str) -> Result<Option<bool>>,
    {
        self.print_banner();

        if !self.test_connection() {
            ui::print_notice("Cannot proceed without valid API connection");
            return Ok(RunReport {
                aborted: true,
                results: self.into_results(),
                created_collection: None,
            });
        }

        self.list_collections();

        let target = self.config().collection_id();
        let mut created_collection = None;

        if self.check_collection(target) {
            self.test_add_item(target);
        } else {
            ui::print_notice(&format!(
                "Skipping add item test - collection {target} not accessible"
            ));

            let create = match self.config().create_collection() {
                CreatePolicy::Yes => true,
                CreatePolicy::No => false,
                CreatePolicy::Ask => {
                    prompt("Would you like to create a test collection?")?.unwrap_or(false)
                }
            };

            if create {
                created_collection = self.create_test_collection();
                if let Some(id) = created_collection {
                    println!();
                    ui::print_success(&format!(
                        "You can update COLLECTION_ID to {id} in your extension"
                    ));
                }
            }
        }

        print_summary(self.results());

        Ok(RunReport {
            aborted: false,
            results: self.into_results(),
            created_collection,
        })
    }

    fn print_banner(&self) {
        let config = self.config();
        ui::print_header("GLEAN COLLECTIONS API TEST SUITE");
        println!("\nConfiguration:");
        println!("  Domain: {}", config.domain());
        println!("  Token: SET ({} chars)", config.token().chars().count());
        println!("  Target Collection: {}", config.collection_id());
        tracing::debug!(base_url = config.base_url(), "probe starting");
    }
}
