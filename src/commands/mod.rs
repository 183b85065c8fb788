//! # Commands
//!
//! CLI command implementations for clipcheck.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod check_emoji;
pub mod probe;

pub use self::{
    check_emoji::execute as check_emoji,
    probe::{execute as probe, ProbeArgs},
};
