//! Shared configuration, errors, and mail delivery for Formalogix.
//!
//! This crate provides common pieces used across all other crates:
//! - Configuration management
//! - Application-wide error types
//! - Rendered email value types
//! - SMTP mail dispatch

pub mod config;
pub mod email;
pub mod error;
pub mod types;

pub use config::{AppConfig, CorsConfig, EmailConfig, ServerConfig, UploadConfig};
pub use email::{EmailError, Mailer, SmtpMailer};
pub use error::{AppError, AppResult};
pub use types::{AttachmentRef, RenderedEmail};
