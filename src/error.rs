use crate::notify::ListenerError;

/// Result type for call-center operations
pub type DeskResult<T> = Result<T, DeskError>;

/// Errors raised while moving the desk between states
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    /// A listener failed; delivery to later listeners was abandoned
    #[error("Listener '{listener}' failed to receive notification: {source}")]
    Listener {
        listener: String,
        #[source]
        source: ListenerError,
    },

    #[error("Failed to write action report: {0}")]
    Io(#[from] std::io::Error),
}
