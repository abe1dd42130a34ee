//! # wfkit-core — Foundational Types for wfkit
//!
//! Shared vocabulary for the wireframe metadata toolchain. Every other crate
//! in the workspace depends on `wfkit-core`; it depends on nothing internal.
//!
//! ## Contents
//!
//! - [`Issue`], [`Severity`], [`ValidationResult`] — the validator's output.
//!   Severity is a closed two-variant enum, and `valid` is derived from the
//!   error list so the two can never disagree.
//! - [`BusinessContextIndex`] — the known goal / persona / KPI ID sets built
//!   from a business-context export.
//! - [`WfkitError`] — operational errors (I/O, parsing, configuration).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `wfkit-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod context;
pub mod error;
pub mod issue;

pub use context::{BusinessContextIndex, ContextSummary, IdKind};
pub use error::WfkitError;
pub use issue::{Issue, Severity, ValidationResult};

/// The metadata schema version every current document should declare.
pub const SCHEMA_VERSION: &str = "2.0";

/// `projectType` value that permits an empty `variants` map.
pub const SINGLE_VARIANT_PROJECT: &str = "single-variant";
