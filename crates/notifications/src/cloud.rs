//! Mail service used in production deployments.

use async_trait::async_trait;

use crate::{MailService, MailSettings, NotificationError, Result};

/// Production mail service.
///
/// Mails are recorded in the structured log at info level so they end up in
/// the deployment's log pipeline.
#[derive(Debug, Clone, Default)]
pub struct CloudMailService {
    settings: MailSettings,
}

impl CloudMailService {
    pub fn new(settings: MailSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &MailSettings {
        &self.settings
    }
}

#[async_trait]
impl MailService for CloudMailService {
    async fn send(&self, subject: &str, message: &str) -> Result<()> {
        if self.settings.to_address.is_empty() {
            return Err(NotificationError::Delivery(
                "no recipient address configured".to_string(),
            ));
        }

        tracing::info!(
            from = %self.settings.from_address,
            to = %self.settings.to_address,
            subject,
            message,
            "mail sent with CloudMailService"
        );
        Ok(())
    }
}
