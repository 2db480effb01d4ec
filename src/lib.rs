//! `whisk` — a batch driver and passthrough wrapper for the external Whisper CLI.
//!
//! This crate provides:
//! - A passthrough mode that hands arguments to the external `whisper` executable untouched
//! - A batch mode that walks a directory and transcribes every eligible media file,
//!   pinning each transcript next to its source
//! - Pluggable seams (`Transcriber`, `Reporter`) so the batch policy is testable without
//!   spawning processes or capturing global logger state
//!
//! The library owns all of the policy; the `whisk` binary is a thin argument surface
//! over it.

// High-level API (most consumers should start here).
pub mod batch;
pub mod router;

// Per-file invocation model.
pub mod invocation;

// The process boundary in front of the external transcriber.
pub mod transcriber;

// Progress and skip event reporting.
pub mod reporter;

// File eligibility policy.
pub mod extensions;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

mod error;

pub use error::{Error, Result};
