//! Sender that only writes to the log

use async_trait::async_trait;

use crate::application::NotificationMessage;
use crate::ports::{NotificationError, NotificationSender};

/// Logs each message instead of delivering it; for dry runs
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSender;

#[async_trait]
impl NotificationSender for LoggingSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError> {
        let params = serde_json::to_string(&message.params)
            .map_err(|e| NotificationError::Transport(e.to_string()))?;
        tracing::info!(
            template = ?message.template,
            recipient = %message.recipient,
            %params,
            "notification (dry run)"
        );
        Ok(())
    }
}
