//! Core intake logic for Formalogix.
//!
//! This crate contains the submission pipeline stages with ZERO web dependencies.
//! Form descriptors, validation rules, attachment storage and email rendering
//! live here; the HTTP layer only decodes requests and maps outcomes.
//!
//! # Modules
//!
//! - `submission` - Form descriptors, submitted fields and validation
//! - `attachment` - Optional upload handling with scoped temporary files
//! - `render` - HTML email rendering

pub mod attachment;
pub mod render;
pub mod submission;
