//! Observable session lifecycle types.

use std::fmt;

use crate::platform::PlatformError;

/// Lifecycle state of a motion session, as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    /// No subscription and no permission request in flight.
    Idle,
    /// A permission request has been issued and has not resolved yet.
    AwaitingPermission,
    /// The user declined motion access, or the request itself failed.
    PermissionDenied,
    /// Subscribed; raw samples are flowing into the filter.
    Listening,
    /// Something went wrong. Carries a renderable description; a delivery
    /// error in this state does not imply the subscription ended.
    Error(SessionError),
}

/// Remembered outcome of the permission flow.
///
/// Tracked separately from `SessionState`: a granted-but-idle session
/// reads `Granted` here while its state reports `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PermissionStatus {
    NotDetermined,
    Granted,
    Denied,
}

/// What went wrong, in a form the presentation layer can show directly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionError {
    /// The platform cannot deliver motion events.
    CapabilityUnsupported,
    /// Motion access was not granted before starting.
    PermissionDenied,
    /// The raw feed reported a fault for one delivery.
    Delivery(PlatformError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::CapabilityUnsupported => {
                write!(f, "motion events are not supported on this device")
            }
            SessionError::PermissionDenied => {
                write!(f, "permission to read motion sensors was denied")
            }
            SessionError::Delivery(err) => write!(f, "sensor delivery failed: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Delivery(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_renderable() {
        assert_eq!(
            SessionError::CapabilityUnsupported.to_string(),
            "motion events are not supported on this device"
        );
        assert_eq!(
            SessionError::Delivery(PlatformError::new("feed reset")).to_string(),
            "sensor delivery failed: feed reset"
        );
    }

    #[test]
    fn delivery_error_exposes_its_source() {
        use std::error::Error;

        let err = SessionError::Delivery(PlatformError::new("feed reset"));
        assert!(err.source().is_some());
        assert!(SessionError::PermissionDenied.source().is_none());
    }
}
