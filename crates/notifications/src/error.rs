use thiserror::Error;

/// Errors that can occur while sending a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// The mail could not be handed to the transport.
    #[error("Mail delivery failed: {0}")]
    Delivery(String),
}

/// Convenience type alias for notification results.
pub type Result<T> = std::result::Result<T, NotificationError>;
