//! SMTP mailer using STARTTLS submission with authenticated login.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hubdigest_adapters::smtp::SmtpMailer;
//! use hubdigest_adapters::Mailer;
//! use hubdigest_types::Digest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mailer = SmtpMailer::builder()
//!         .relay("smtp.gmail.com")
//!         .port(587)
//!         .credentials("bot@example.com", "app-password")
//!         .build()?;
//!
//!     let digest = Digest::new("Daily", "<html></html>");
//!     mailer.deliver("me@example.com", &digest).await?;
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use hubdigest_types::Digest;

use crate::{AdapterError, Mailer};

/// Default SMTP relay host.
pub const DEFAULT_RELAY: &str = "smtp.gmail.com";

/// Default SMTP submission port.
pub const DEFAULT_PORT: u16 = 587;

/// Mailer that submits each digest as one HTML message over SMTP.
///
/// The transport is built once and shared by every delivery; each
/// [`Mailer::deliver`] call opens its own session.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    relay: String,
    port: u16,
}

impl SmtpMailer {
    /// Create a new builder for configuring the mailer.
    pub fn builder() -> SmtpMailerBuilder {
        SmtpMailerBuilder::default()
    }

    /// Assemble the message for one recipient.
    fn message(&self, recipient: &str, digest: &Digest) -> Result<Message, AdapterError> {
        let to: Mailbox = recipient.parse()?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(digest.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(digest.html.clone())?;

        Ok(message)
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("relay", &self.relay)
            .field("port", &self.port)
            .field("sender", &self.sender.to_string())
            .finish()
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn deliver(&self, recipient: &str, digest: &Digest) -> Result<(), AdapterError> {
        let message = self.message(recipient, digest)?;
        let response = self.transport.send(message).await?;
        debug!(
            "SMTP accepted message for {} ({})",
            recipient,
            response.code()
        );
        Ok(())
    }
}

/// Builder for SmtpMailer.
#[derive(Debug, Default)]
pub struct SmtpMailerBuilder {
    relay: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
}

impl SmtpMailerBuilder {
    /// Set the relay host (default: "smtp.gmail.com").
    pub fn relay(mut self, relay: impl Into<String>) -> Self {
        self.relay = Some(relay.into());
        self
    }

    /// Set the submission port (default: 587).
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the sender address and password. The address doubles as the
    /// SMTP login and the `From` header.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Build the mailer.
    pub fn build(self) -> Result<SmtpMailer, AdapterError> {
        let relay = self.relay.unwrap_or_else(|| DEFAULT_RELAY.to_string());
        let port = self.port.unwrap_or(DEFAULT_PORT);

        let username = self
            .username
            .ok_or_else(|| AdapterError::Address("sender address is not set".to_string()))?;
        let password = self.password.unwrap_or_default();
        let sender: Mailbox = username.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&relay)?
            .port(port)
            .credentials(Credentials::new(username, password))
            .build();

        Ok(SmtpMailer {
            transport,
            sender,
            relay,
            port,
        })
    }
}
