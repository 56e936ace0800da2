//! Permission-gated motion sensor sessions with rolling-average smoothing.
//!
//! The embedding supplies a [`MotionPlatform`] describing what the host can
//! do (capability check, permission prompt, raw feed subscription).
//! [`MotionSession`] drives that collaborator through the permission and
//! subscribe/unsubscribe lifecycle, feeds every delivered sample into a
//! bounded [`RollingAverage`], and exposes the smoothed reading together
//! with an observable [`SessionState`] for the presentation layer.

mod filter;
mod platform;
mod sample;
mod session;
mod state;

pub use filter::RollingAverage;
pub use platform::{MotionPlatform, PermissionDecision, PlatformError};
pub use sample::{AveragedReading, Sample};
pub use session::{MotionSession, SAMPLE_WINDOW};
pub use state::{PermissionStatus, SessionError, SessionState};
