//! The rendered digest and the list of people it goes to.

use core::fmt;

/// A rendered digest: one subject line and one HTML body.
///
/// Built once per run and shared read-only by every delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub subject: String,
    pub html: String,
}

impl Digest {
    pub fn new(subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            html: html.into(),
        }
    }
}

/// Ordered list of destination addresses.
///
/// Empty entries are dropped on construction; duplicates are kept.
///
/// # Example
///
/// ```rust
/// use hubdigest_types::RecipientList;
///
/// let recipients = RecipientList::parse("a@example.com, ,b@example.com,");
/// assert_eq!(recipients.len(), 2);
/// assert_eq!(recipients.to_string(), "a@example.com, b@example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientList {
    addresses: Vec<String>,
}

impl RecipientList {
    /// Parse a comma-separated list of addresses.
    pub fn parse(raw: &str) -> Self {
        raw.split(',').collect()
    }

    /// Number of recipients.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether there is nobody to deliver to.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Iterate over addresses in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.addresses.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for RecipientList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let addresses = iter
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { addresses }
    }
}

impl fmt::Display for RecipientList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.addresses.join(", "))
    }
}
