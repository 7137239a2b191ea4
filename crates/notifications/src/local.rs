//! Mail service for development: writes the mail to the log.

use async_trait::async_trait;

use crate::{MailService, MailSettings, Result};

/// Logs mails at debug level instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct LocalMailService {
    settings: MailSettings,
}

impl LocalMailService {
    pub fn new(settings: MailSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &MailSettings {
        &self.settings
    }
}

#[async_trait]
impl MailService for LocalMailService {
    async fn send(&self, subject: &str, message: &str) -> Result<()> {
        tracing::debug!(
            from = %self.settings.from_address,
            to = %self.settings.to_address,
            subject,
            message,
            "mail sent with LocalMailService"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_always_succeeds() {
        let service = LocalMailService::new(MailSettings::new("a@example.com", "b@example.com"));
        assert!(service.send("Subject", "Body").await.is_ok());
        assert_eq!(service.settings().to_address, "b@example.com");
    }
}
