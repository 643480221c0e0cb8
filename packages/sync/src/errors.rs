use thiserror::Error;
use webcraft_editor::EditorError;
use webcraft_model::TemplateId;

use crate::in_flight::Operation;

/// Failures reported by a [`RemoteStore`](crate::RemoteStore)
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the AI generation endpoint
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Failed to get AI response: {0}")]
    Endpoint(String),

    #[error("Invalid AI response: {0}")]
    InvalidResponse(String),
}

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Sign in required")]
    Unauthenticated,

    #[error("{0} already in progress")]
    Busy(Operation),

    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("AI assistant is not configured")]
    AssistantUnavailable,

    #[error("Unknown template: {0}")]
    UnknownTemplate(TemplateId),

    /// Loading failed for a reason other than "no website yet"
    #[error("Failed to load website: {0}")]
    Load(#[source] StoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Dismissible message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            destructive: false,
        }
    }

    pub fn block_created() -> Self {
        Self::info(
            "Block Created!",
            "A new custom block has been added to your library.",
        )
    }
}

impl SyncError {
    /// Notification describing this failure
    pub fn notification(&self) -> Notification {
        match self {
            SyncError::Busy(_) => Notification::info("Please wait", self.to_string()),
            SyncError::Unauthenticated => Notification {
                title: "Authentication required".to_string(),
                description: "Sign in to save your website.".to_string(),
                destructive: true,
            },
            _ => Notification {
                title: "Error".to_string(),
                description: self.to_string(),
                destructive: true,
            },
        }
    }

    /// Whether repeating the same request later may succeed. Every load
    /// failure is offered as a retry, whatever the store reported.
    pub fn is_retryable(&self) -> bool {
        match self {
            SyncError::Busy(_) | SyncError::Load(_) => true,
            SyncError::Store(StoreError::Network(_) | StoreError::Io(_)) => true,
            SyncError::Assistant(AssistantError::Endpoint(_)) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(SyncError::from(StoreError::Network("timeout".into())).is_retryable());
        assert!(SyncError::Busy(Operation::Save).is_retryable());
        assert!(!SyncError::from(StoreError::Permission("rls".into())).is_retryable());
        assert!(!SyncError::EmptyPrompt.is_retryable());
    }

    #[test]
    fn test_load_failures_are_retryable() {
        assert!(SyncError::Load(StoreError::Permission("rls".into())).is_retryable());
        assert!(SyncError::Load(StoreError::Validation("bad row".into())).is_retryable());
        assert!(!SyncError::from(StoreError::Validation("bad row".into())).is_retryable());
    }

    #[test]
    fn test_load_failure_notification() {
        let note = SyncError::Load(StoreError::Permission("rls".into())).notification();
        assert_eq!(note.description, "Failed to load website: Permission denied: rls");
        assert!(note.destructive);
    }

    #[test]
    fn test_store_failure_notification() {
        let note = SyncError::from(StoreError::Network("connection reset".into())).notification();

        assert_eq!(note.title, "Error");
        assert_eq!(note.description, "Network error: connection reset");
        assert!(note.destructive);
    }

    #[test]
    fn test_busy_notification_is_not_destructive() {
        let note = SyncError::Busy(Operation::Publish).notification();
        assert!(!note.destructive);
        assert_eq!(note.description, "publish already in progress");
    }
}
