//! Capability surface the embedding must supply.
//!
//! The crate never talks to a real sensor API. Whatever hosts the session
//! (a browser shell, a mobile runtime, a test harness) implements
//! `MotionPlatform` and forwards deliveries from its raw feed into the
//! session's `on_sample` and `on_sensor_error` entry points.

use std::fmt;

/// Outcome the platform resolves a permission request to.
///
/// A request that fails outright is reported through the `Err` side of
/// `request_permission` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PermissionDecision {
    Granted,
    Denied,
}

/// Opaque failure reported by the platform, carrying whatever message the
/// underlying API produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformError(String);

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for PlatformError {}

/// What the session needs from the host platform.
///
/// `request_permission` resolves only when the user answers the prompt;
/// every other operation returns immediately. Platforms without an
/// explicit permission step report `permission_api_present` as false and
/// are treated as implicitly granted.
// The session core is single-threaded; its futures never cross threads.
#[allow(async_fn_in_trait)]
pub trait MotionPlatform {
    /// Token identifying one live subscription, handed back on
    /// `unsubscribe`.
    type Handle;

    /// Whether the platform can deliver motion events at all.
    fn motion_supported(&self) -> bool;

    /// Whether motion access is gated behind an explicit user prompt.
    fn permission_api_present(&self) -> bool;

    /// Prompts the user for motion access and waits for the decision.
    async fn request_permission(&mut self) -> Result<PermissionDecision, PlatformError>;

    /// Registers the raw feed and returns the subscription token.
    fn subscribe(&mut self) -> Self::Handle;

    /// Withdraws the subscription identified by `handle`.
    fn unsubscribe(&mut self, handle: Self::Handle);
}
