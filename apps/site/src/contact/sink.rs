//! Delivery backend for accepted contact messages.
//!
//! `AppState` holds an `Arc<dyn ContactSink>`. `DiscardSink` is the only
//! backend: it records that a message arrived and drops it.

use async_trait::async_trait;
use tracing::info;

use crate::contact::form::ContactForm;
use crate::errors::AppError;

#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn deliver(&self, message: &ContactForm) -> Result<(), AppError>;

    /// Backend name, for logs.
    fn backend(&self) -> &'static str;
}

/// Accepts every message and keeps nothing.
pub struct DiscardSink;

#[async_trait]
impl ContactSink for DiscardSink {
    async fn deliver(&self, message: &ContactForm) -> Result<(), AppError> {
        // Message body and sender address stay out of the logs.
        info!(
            has_subject = !message.subject.trim().is_empty(),
            message_len = message.message.len(),
            "Contact message accepted and discarded"
        );
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "discard"
    }
}
