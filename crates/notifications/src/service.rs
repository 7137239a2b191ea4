//! Mail service trait and shared settings.

use async_trait::async_trait;

use crate::Result;

/// Sender and recipient addresses used by every mail service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub from_address: String,
    pub to_address: String,
}

impl MailSettings {
    pub fn new(from_address: impl Into<String>, to_address: impl Into<String>) -> Self {
        Self {
            from_address: from_address.into(),
            to_address: to_address.into(),
        }
    }
}

impl Default for MailSettings {
    fn default() -> Self {
        Self::new("noreply@cityinfo.com", "admin@cityinfo.com")
    }
}

/// Trait for sending notification mails.
#[async_trait]
pub trait MailService: Send + Sync {
    /// Sends a mail with the given subject and message body.
    async fn send(&self, subject: &str, message: &str) -> Result<()>;
}
