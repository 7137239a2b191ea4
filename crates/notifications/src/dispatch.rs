//! Fire-and-forget notification dispatch.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::MailService;

/// Sends a mail on a background task.
///
/// The caller never observes the outcome: failures are logged and counted.
/// The returned handle is only useful to tests that want to await delivery.
pub fn dispatch(
    mail_service: Arc<dyn MailService>,
    subject: impl Into<String>,
    message: impl Into<String>,
) -> JoinHandle<()> {
    let subject = subject.into();
    let message = message.into();

    tokio::spawn(async move {
        match mail_service.send(&subject, &message).await {
            Ok(()) => {
                metrics::counter!("notifications_sent_total").increment(1);
            }
            Err(e) => {
                metrics::counter!("notifications_failed_total").increment(1);
                tracing::warn!(error = %e, %subject, "failed to send notification");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryMailService;

    #[tokio::test]
    async fn dispatch_delivers_in_background() {
        let service = InMemoryMailService::new();
        dispatch(Arc::new(service.clone()), "Subject", "Message")
            .await
            .unwrap();

        assert_eq!(service.sent_count(), 1);
        assert_eq!(service.sent()[0].message, "Message");
    }

    #[tokio::test]
    async fn dispatch_swallows_failures() {
        let service = InMemoryMailService::new();
        service.set_fail_on_send(true);

        let handle = dispatch(Arc::new(service.clone()), "Subject", "Message");
        assert!(handle.await.is_ok());
        assert_eq!(service.sent_count(), 0);
    }
}
