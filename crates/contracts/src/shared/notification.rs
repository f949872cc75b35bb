use serde::{Deserialize, Serialize};

/// Где возникла ошибка. Каждый источник даёт одно уведомление со своим префиксом.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSource {
    /// Request never produced a response.
    Network,
    /// Response arrived but was malformed or carried an `error` field.
    ErrorResponse,
    ImportParse,
    Clipboard,
    Uncaught,
    UnhandledRejection,
}

impl ErrorSource {
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            ErrorSource::Network => Some("Request failed"),
            // server-provided text is shown verbatim
            ErrorSource::ErrorResponse => None,
            ErrorSource::ImportParse => Some("Invalid JSON file"),
            ErrorSource::Clipboard => Some("Copy failed"),
            ErrorSource::Uncaught => Some("An error occurred"),
            ErrorSource::UnhandledRejection => Some("Network request failed"),
        }
    }

    pub fn message(self, detail: &str) -> String {
        match self.prefix() {
            Some(prefix) => format!("{}: {}", prefix, detail),
            None => detail.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Shown in a modal until dismissed.
    Error,
    /// Shown as a toast that hides itself.
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

pub const COPIED_MESSAGE: &str = "Copied to clipboard";

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn from_error(source: ErrorSource, detail: &str) -> Self {
        Self::error(source.message(detail))
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_detail() {
        let n = Notification::from_error(ErrorSource::ImportParse, "expected value at line 1 column 1");
        assert!(n.is_error());
        assert_eq!(n.message, "Invalid JSON file: expected value at line 1 column 1");

        let n = Notification::from_error(ErrorSource::Clipboard, "permission denied");
        assert_eq!(n.message, "Copy failed: permission denied");
    }

    #[test]
    fn test_error_response_is_verbatim() {
        let n = Notification::from_error(ErrorSource::ErrorResponse, "not authorized");
        assert_eq!(n.message, "not authorized");
    }

    #[test]
    fn test_success() {
        let n = Notification::success(COPIED_MESSAGE);
        assert_eq!(n.kind, NotificationKind::Success);
        assert!(!n.is_error());
    }
}
