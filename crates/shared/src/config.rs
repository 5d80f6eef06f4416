//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// SMTP delivery configuration.
    #[serde(default)]
    pub email: EmailConfig,
    /// Attachment limits.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Cross-origin policy.
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// SMTP relay configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP server host.
    #[serde(default)]
    pub smtp_host: String,
    /// SMTP server port. 465 uses implicit TLS, everything else STARTTLS.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP login.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// Envelope sender. Falls back to `smtp_username` when empty.
    #[serde(default)]
    pub from_email: String,
    /// Fixed recipient of every submission.
    #[serde(default)]
    pub recipient: String,
    /// SMTP dialog timeout in seconds.
    #[serde(default = "default_smtp_timeout")]
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: String::new(),
            recipient: String::new(),
            timeout_secs: default_smtp_timeout(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_timeout() -> u64 {
    30
}

impl EmailConfig {
    /// Address used in the `From` header.
    #[must_use]
    pub fn sender_address(&self) -> &str {
        if self.from_email.is_empty() {
            &self.smtp_username
        } else {
            &self.from_email
        }
    }
}

/// Attachment upload limits.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Maximum attachment size in bytes.
    #[serde(default = "default_max_attachment_bytes")]
    pub max_attachment_bytes: u64,
    /// Maximum size of a whole multipart request body.
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: u64,
    /// Accepted attachment content types.
    #[serde(default = "default_mime_types")]
    pub allowed_mime_types: Vec<String>,
    /// Directory for temporary attachment files.
    #[serde(default = "std::env::temp_dir")]
    pub temp_dir: PathBuf,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_attachment_bytes: default_max_attachment_bytes(),
            max_request_bytes: default_max_request_bytes(),
            allowed_mime_types: default_mime_types(),
            temp_dir: std::env::temp_dir(),
        }
    }
}

impl UploadConfig {
    /// Default max attachment size: 10MB.
    pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;
    /// Default bound on a whole request body, attachment included.
    pub const DEFAULT_MAX_REQUEST_BYTES: u64 = 10 * 1024 * 1024;

    /// Check if a MIME type is allowed.
    #[must_use]
    pub fn is_mime_type_allowed(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.iter().any(|t| t == mime_type)
    }

    /// Attachment limit in whole megabytes, for user-facing messages.
    #[must_use]
    pub fn max_attachment_megabytes(&self) -> u64 {
        self.max_attachment_bytes / (1024 * 1024)
    }
}

fn default_max_attachment_bytes() -> u64 {
    UploadConfig::DEFAULT_MAX_ATTACHMENT_BYTES
}

fn default_max_request_bytes() -> u64 {
    UploadConfig::DEFAULT_MAX_REQUEST_BYTES
}

fn default_mime_types() -> Vec<String> {
    vec![
        "application/pdf".to_string(),
        "image/jpeg".to_string(),
        "image/jpg".to_string(),
        "image/png".to_string(),
    ]
}

/// Cross-origin policy for the intake endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins. Entries like `https://*.pages.dev` match any subdomain.
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_origins(),
        }
    }
}

fn default_origins() -> Vec<String> {
    [
        "http://localhost:4321",
        "http://localhost:4322",
        "http://localhost:3000",
        "https://formalogix.com",
        "https://www.formalogix.com",
        "https://*.pages.dev",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl CorsConfig {
    /// Check whether a request origin may call the API.
    #[must_use]
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins
            .iter()
            .any(|pattern| origin_matches(pattern, origin))
    }
}

fn origin_matches(pattern: &str, origin: &str) -> bool {
    if pattern == origin {
        return true;
    }

    let Some((scheme, host)) = pattern.split_once("://") else {
        return false;
    };
    let Some(suffix) = host.strip_prefix("*.") else {
        return false;
    };

    origin
        .strip_prefix(scheme)
        .and_then(|rest| rest.strip_prefix("://"))
        .and_then(|rest| rest.strip_suffix(suffix))
        .is_some_and(|sub| sub.len() > 1 && sub.ends_with('.'))
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or a required
    /// SMTP setting is missing.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FORMALOGIX")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("upload.allowed_mime_types")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting needed to deliver mail is present.
    ///
    /// # Errors
    ///
    /// Returns a message error naming the first missing key.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let required = [
            ("email.smtp_host", &self.email.smtp_host),
            ("email.smtp_username", &self.email.smtp_username),
            ("email.smtp_password", &self.email.smtp_password),
            ("email.recipient", &self.email.recipient),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(config::ConfigError::Message(format!("{key} is required")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
