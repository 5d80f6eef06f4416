//! Common types used across the application.

pub mod mail;

pub use mail::{AttachmentRef, RenderedEmail};
