use crate::error::{DeskError, DeskResult};
use std::sync::Arc;

/// Errors a listener may report while receiving a message
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rejected message: {0}")]
    Rejected(String),
}

/// A party interested in state changes
pub trait Listener: Send + Sync {
    fn name(&self) -> &str;

    fn receive(&self, message: &str) -> Result<(), ListenerError>;
}

/// Ordered registry of listeners
#[derive(Default)]
pub struct NotificationHub {
    listeners: Vec<Arc<dyn Listener>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener. Attaching the same listener twice delivers twice.
    pub fn attach(&mut self, listener: Arc<dyn Listener>) {
        tracing::debug!(listener = listener.name(), "listener attached");
        self.listeners.push(listener);
    }

    /// Deliver `message` to every listener in attach order
    ///
    /// The first failure stops delivery; later listeners do not see the message.
    pub fn notify(&self, message: &str) -> DeskResult<()> {
        for listener in &self.listeners {
            listener
                .receive(message)
                .map_err(|source| DeskError::Listener {
                    listener: listener.name().to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
