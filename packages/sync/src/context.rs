use webcraft_editor::ThemeSettings;
use webcraft_model::UserId;

use crate::errors::SyncError;

/// Ambient state of the signed-in user, passed explicitly to every remote
/// operation.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    pub user: Option<UserId>,
    /// Theme for documents created in this context
    pub theme: ThemeSettings,
}

impl UserContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: impl Into<UserId>) -> Self {
        Self {
            user: Some(user.into()),
            theme: ThemeSettings::default(),
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = ThemeSettings {
            theme: theme.into(),
        };
        self
    }

    pub fn require_user(&self) -> Result<&UserId, SyncError> {
        self.user.as_ref().ok_or(SyncError::Unauthenticated)
    }
}
