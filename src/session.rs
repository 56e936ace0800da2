//! The motion session controller.

use log::{debug, warn};

use crate::filter::RollingAverage;
use crate::platform::{MotionPlatform, PermissionDecision, PlatformError};
use crate::sample::{AveragedReading, Sample};
use crate::state::{PermissionStatus, SessionError, SessionState};

/// Number of recent samples the session averages over.
pub const SAMPLE_WINDOW: usize = 10;

/// Drives the permission flow and the subscribe/unsubscribe lifecycle for
/// one motion sensor feed, smoothing every delivery through a rolling
/// average.
///
/// The session owns its platform collaborator and holds at most one live
/// subscription. `start` and `stop` are idempotent; delivery errors are
/// advisory and leave the subscription in place.
pub struct MotionSession<P: MotionPlatform> {
    platform: P,
    filter: RollingAverage<SAMPLE_WINDOW>,
    state: SessionState,
    permission: PermissionStatus,
    subscription: Option<P::Handle>,
}

impl<P: MotionPlatform> MotionSession<P> {
    /// Creates an idle session around the given platform.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            filter: RollingAverage::new(),
            state: SessionState::Idle,
            permission: PermissionStatus::NotDetermined,
            subscription: None,
        }
    }

    /// The injected platform collaborator.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Remembered permission outcome, including implicit grants on
    /// platforms without a permission prompt.
    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    /// Whether a subscription is live. Stays true through advisory
    /// delivery errors; only `stop` ends it.
    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    /// Mean over the most recent samples, or a zero reading before the
    /// first delivery. Keeps its last value after `stop`.
    pub fn current_reading(&self) -> AveragedReading {
        self.filter.current()
    }

    /// Asks the platform for motion access and records the outcome.
    ///
    /// Platforms without a permission API grant implicitly and resolve at
    /// once. While the platform's decision is pending the session reports
    /// `AwaitingPermission`. A request that fails outright counts as a
    /// denial. Requesting while already subscribed changes nothing.
    pub async fn request_permission(&mut self) -> PermissionStatus {
        if self.subscription.is_some() {
            return self.permission;
        }
        if !self.platform.permission_api_present() {
            debug!("no permission api present, treating motion access as granted");
            self.permission = PermissionStatus::Granted;
            return self.permission;
        }

        self.state = SessionState::AwaitingPermission;
        match self.platform.request_permission().await {
            Ok(PermissionDecision::Granted) => {
                debug!("motion permission granted");
                self.permission = PermissionStatus::Granted;
                self.state = SessionState::Idle;
            }
            Ok(PermissionDecision::Denied) => {
                warn!("motion permission denied by user");
                self.permission = PermissionStatus::Denied;
                self.state = SessionState::PermissionDenied;
            }
            Err(err) => {
                warn!("motion permission request failed: {err}");
                self.permission = PermissionStatus::Denied;
                self.state = SessionState::PermissionDenied;
            }
        }
        self.permission
    }

    /// Subscribes to the raw feed if capability and permission allow.
    ///
    /// Calling while already listening does nothing, so repeated starts
    /// never stack subscriptions. Rejections land in `SessionState::Error`
    /// without touching the platform.
    pub fn start(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        if !self.platform.motion_supported() {
            warn!("motion events are not supported on this platform");
            self.state = SessionState::Error(SessionError::CapabilityUnsupported);
            return;
        }
        if !self.permission_granted() {
            warn!("start rejected, motion permission not granted");
            self.state = SessionState::Error(SessionError::PermissionDenied);
            return;
        }

        let handle = self.platform.subscribe();
        self.subscription = Some(handle);
        // covers platforms without a permission prompt, where the grant
        // is implicit in reaching this point
        self.permission = PermissionStatus::Granted;
        self.state = SessionState::Listening;
        debug!("motion session listening");
    }

    /// Withdraws the subscription and returns to `Idle`. Does nothing when
    /// no subscription is live, so stopping twice is safe.
    pub fn stop(&mut self) {
        let Some(handle) = self.subscription.take() else {
            return;
        };
        self.platform.unsubscribe(handle);
        self.state = SessionState::Idle;
        debug!("motion session stopped");
    }

    /// Feed entry point for one raw sample. Deliveries arriving after
    /// `stop` are dropped.
    pub fn on_sample(&mut self, sample: Sample) {
        if self.subscription.is_none() {
            return;
        }
        self.filter.push(sample);
    }

    /// Feed entry point for a delivery fault. The fault is surfaced
    /// through `SessionState::Error` but the subscription stays live and
    /// later samples keep updating the reading.
    pub fn on_sensor_error(&mut self, error: PlatformError) {
        if self.subscription.is_none() {
            return;
        }
        warn!("sensor delivery error: {error}");
        self.state = SessionState::Error(SessionError::Delivery(error));
    }

    fn permission_granted(&self) -> bool {
        !self.platform.permission_api_present()
            || matches!(self.permission, PermissionStatus::Granted)
    }
}
