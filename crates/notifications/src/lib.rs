//! Mail notifications for the CityInfo API.
//!
//! The API only ever sends one kind of mail (a point of interest was
//! deleted), and it does so fire-and-forget: [`dispatch`] spawns the send
//! and logs a failure instead of returning it. Which [`MailService`] is used
//! is decided once at startup.

pub mod cloud;
pub mod dispatch;
pub mod error;
pub mod local;
pub mod memory;
pub mod service;

pub use cloud::CloudMailService;
pub use dispatch::dispatch;
pub use error::{NotificationError, Result};
pub use local::LocalMailService;
pub use memory::{InMemoryMailService, SentMail};
pub use service::{MailService, MailSettings};
