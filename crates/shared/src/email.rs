//! Mail dispatch for rendered submissions.
//!
//! Uses `lettre` for SMTP transport.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use tracing::debug;

use crate::config::EmailConfig;
use crate::error::AppError;
use crate::types::{AttachmentRef, RenderedEmail};

/// Port on which the relay expects implicit TLS instead of STARTTLS.
const SMTPS_PORT: u16 = 465;

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    BuildError(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    SendError(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
    /// Stored attachment could not be read back.
    #[error("Failed to read attachment: {0}")]
    Attachment(String),
}

impl From<EmailError> for AppError {
    fn from(err: EmailError) -> Self {
        Self::Delivery(err.to_string())
    }
}

/// Delivers a rendered email to the configured recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends `email` once. No retries.
    async fn dispatch(&self, email: &RenderedEmail) -> Result<(), EmailError>;
}

/// SMTP-backed [`Mailer`].
#[derive(Clone)]
pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    /// Creates a new SMTP mailer.
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Creates an encrypted SMTP transport.
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        let builder = if self.config.smtp_port == SMTPS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
        };

        builder
            .map_err(|e| EmailError::SendError(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .timeout(Some(Duration::from_secs(self.config.timeout_secs)))
            .build()
            .pipe(Ok)
    }

    /// Builds the MIME message for `email`, reading the attachment from disk.
    async fn compose(&self, email: &RenderedEmail) -> Result<Message, EmailError> {
        let from = format!("{} <{}>", email.sender_name, self.config.sender_address());

        let builder = Message::builder()
            .from(parse_mailbox(&from)?)
            .to(parse_mailbox(&self.config.recipient)?)
            .reply_to(parse_mailbox(&email.reply_to)?)
            .subject(email.subject.as_str());

        let html = SinglePart::html(email.html.clone());

        let message = match &email.attachment {
            Some(attachment) => builder.multipart(
                MultiPart::mixed()
                    .singlepart(html)
                    .singlepart(read_attachment(attachment).await?),
            ),
            None => builder.singlepart(html),
        };

        message.map_err(|e| EmailError::BuildError(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn dispatch(&self, email: &RenderedEmail) -> Result<(), EmailError> {
        let message = self.compose(email).await?;

        let transport = self.create_transport()?;
        transport
            .send(message)
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        debug!(subject = %email.subject, "SMTP relay accepted message");
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address
        .parse()
        .map_err(|e| EmailError::InvalidAddress(format!("{address}: {e}")))
}

async fn read_attachment(attachment: &AttachmentRef) -> Result<SinglePart, EmailError> {
    let content_type = ContentType::parse(&attachment.content_type)
        .map_err(|e| EmailError::BuildError(e.to_string()))?;
    let bytes = tokio::fs::read(&attachment.path)
        .await
        .map_err(|e| EmailError::Attachment(e.to_string()))?;

    Ok(Attachment::new(attachment.filename.clone()).body(bytes, content_type))
}

/// Pipe trait for fluent API.
trait Pipe: Sized {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

#[cfg(test)]
#[path = "email_tests.rs"]
mod tests;
