// SPDX-License-Identifier: MPL-2.0
//! Transient notification model.
//!
//! The host renders notifications; this module only describes them. Severity
//! determines the default display duration, and a notification can override
//! it for messages that need more reading time (the activation greeting uses
//! a 6 second override).

use std::time::Duration;

/// Severity level determines default display duration and host styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (3s duration).
    #[default]
    Success,
    /// Informational message (3s duration).
    Info,
    /// Warning that doesn't block operation (5s duration).
    Warning,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl Severity {
    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A transient notification to be displayed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    text: String,
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given severity and resolved text.
    ///
    /// Localization happens before construction; the host receives the final
    /// display string.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            custom_dismiss_duration: None,
        }
    }

    /// Creates a success notification.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }

    /// Creates an info notification.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Creates a warning notification.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Creates an error notification.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Sets a custom display duration, overriding the severity default.
    #[must_use]
    pub fn display_for(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the resolved display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns how long the host should display this notification.
    ///
    /// A custom duration takes precedence over the severity default;
    /// `None` means the user must dismiss it manually.
    #[must_use]
    pub fn display_duration(&self) -> Option<Duration> {
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success = Severity::Success.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > success);
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn custom_duration_overrides_severity_default() {
        let n = Notification::success("Hello!!").display_for(Duration::from_secs(6));
        assert_eq!(n.display_duration(), Some(Duration::from_secs(6)));
    }

    #[test]
    fn default_duration_comes_from_severity() {
        let n = Notification::info("detected");
        assert_eq!(n.display_duration(), Some(Duration::from_secs(3)));
    }
}
