//! # Aura Condense
//!
//! Optional text condensing for long justifications and evidence blocks.
//!
//! The tool works fully without it: every call site goes through
//! [`condense_or_original`], which returns the input unchanged on any
//! error (missing credentials included). Condensing failure is never
//! surfaced to the user.
//!
//! ## Features
//!
//! - `api`: the OpenAI-compatible HTTP backend

mod condenser;

pub use condenser::{condense_or_original, CondenseError, CondenseResult, Condenser, MockCondenser};

#[cfg(feature = "api")]
mod openai;
#[cfg(feature = "api")]
pub use openai::OpenAiCondenser;
