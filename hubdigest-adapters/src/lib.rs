//! # hubdigest-adapters
//!
//! Adapters for the two external collaborators of the hubdigest pipeline:
//! the registry that lists new items and the mail transport that delivers
//! the digest.
//!
//! Both sit behind traits ([`ItemSource`], [`Mailer`]) so the pipeline can
//! run against test doubles.
//!
//! ## Supported Collaborators
//!
//! - **Hugging Face Hub** (`registry` feature) - lists the newest models and
//!   datasets for a tag via the public HTTP API
//! - **SMTP** (`smtp` feature) - STARTTLS submission with login, one HTML
//!   message per recipient
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hubdigest_adapters::registry::RegistryAdapter;
//! use hubdigest_adapters::ItemSource;
//! use hubdigest_types::Category;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = RegistryAdapter::builder().tag("zh").build()?;
//!
//!     let datasets = adapter.fetch(Category::Dataset).await?;
//!
//!     println!("Fetched {} datasets", datasets.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod mailer;
mod source;

#[cfg(feature = "registry")]
pub mod registry;

#[cfg(feature = "smtp")]
pub mod smtp;

pub use error::AdapterError;
pub use mailer::Mailer;
pub use source::ItemSource;

// Re-export types for convenience
pub use hubdigest_types::{Category, Digest, RawCandidate};
