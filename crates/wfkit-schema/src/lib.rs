//! # wfkit-schema — Metadata Validation
//!
//! Validates wireframe project metadata documents against the v2.0 metadata
//! schema.
//!
//! ## Validation (`validate`)
//!
//! [`validate`] runs every field, structure and reference check in one pass
//! and returns a [`ValidationResult`](wfkit_core::ValidationResult) holding
//! all errors and warnings. [`is_valid`] is the boolean form.
//!
//! Business-context references (`businessContextRef` on variants, the
//! top-level `businessContext` block) are cross-checked only when a
//! [`BusinessContextIndex`](wfkit_core::BusinessContextIndex) is passed in
//! [`ValidateOptions`].
//!
//! ## Reporting (`report`)
//!
//! [`render_report`] turns a result into bulleted text for terminals and CI
//! logs.
//!
//! ## Loading (`load`)
//!
//! [`load_document`] and [`load_business_context`] read JSON or YAML files.
//! Loading is the only part of the crate that touches the filesystem or logs.

pub mod load;
mod refs;
pub mod report;
pub mod validate;

pub use load::{load_business_context, load_document};
pub use report::{render_report, Report};
pub use validate::{is_valid, validate, ValidateOptions};
