//! Recording mail service for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::{MailService, NotificationError, Result};

/// A mail captured by [`InMemoryMailService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub subject: String,
    pub message: String,
}

/// In-memory mail service that records every mail it is asked to send.
#[derive(Debug, Clone)]
pub struct InMemoryMailService {
    sent: Arc<watch::Sender<Vec<SentMail>>>,
    fail_on_send: Arc<AtomicBool>,
}

impl InMemoryMailService {
    /// Creates a new in-memory mail service.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(watch::Sender::new(Vec::new())),
            fail_on_send: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Configures the service to fail every send call.
    pub fn set_fail_on_send(&self, fail: bool) {
        self.fail_on_send.store(fail, Ordering::SeqCst);
    }

    /// Returns all mails sent so far.
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.borrow().clone()
    }

    /// Returns the number of mails sent so far.
    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }

    /// Waits until at least `count` mails have been sent and returns them.
    pub async fn wait_for_sent(&self, count: usize) -> Vec<SentMail> {
        let mut rx = self.sent.subscribe();
        match rx.wait_for(|sent| sent.len() >= count).await {
            Ok(sent) => sent.clone(),
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => self.sent(),
        }
    }
}

impl Default for InMemoryMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for InMemoryMailService {
    async fn send(&self, subject: &str, message: &str) -> Result<()> {
        if self.fail_on_send.load(Ordering::SeqCst) {
            return Err(NotificationError::Delivery("mail server unreachable".to_string()));
        }

        self.sent.send_modify(|sent| {
            sent.push(SentMail {
                subject: subject.to_string(),
                message: message.to_string(),
            });
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_sent_mail() {
        let service = InMemoryMailService::new();
        service.send("Hello", "World").await.unwrap();

        assert_eq!(service.sent_count(), 1);
        assert_eq!(
            service.sent(),
            vec![SentMail {
                subject: "Hello".to_string(),
                message: "World".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn fail_on_send_records_nothing() {
        let service = InMemoryMailService::new();
        service.set_fail_on_send(true);

        assert!(service.send("Hello", "World").await.is_err());
        assert_eq!(service.sent_count(), 0);
    }

    #[tokio::test]
    async fn wait_for_sent_resolves_after_spawned_send() {
        let service = InMemoryMailService::new();
        let clone = service.clone();
        tokio::spawn(async move { clone.send("Later", "Eventually").await });

        let sent = tokio::time::timeout(
            std::time::Duration::from_secs(1),
            service.wait_for_sent(1),
        )
        .await
        .unwrap();
        assert_eq!(sent[0].subject, "Later");
    }
}
