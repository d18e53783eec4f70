//! Submission state machine
//!
//! `Idle -> Submitting -> Success -> Idle`, or `Submitting -> Idle` on failure.
//! `Success` is transient and reads as `Idle` once the reset delay has passed.
//! A submit attempt while `Submitting` is ignored, never queued.

use std::time::{Duration, Instant};

/// Visible state of the submission UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
}

/// Tracks one form's submission state
#[derive(Debug, Clone)]
pub struct SubmissionTracker {
    state: SubmissionState,
    succeeded_at: Option<Instant>,
    reset_delay: Duration,
    last_error: Option<String>,
}

impl SubmissionTracker {
    #[must_use]
    pub const fn new(reset_delay: Duration) -> Self {
        Self {
            state: SubmissionState::Idle,
            succeeded_at: None,
            reset_delay,
            last_error: None,
        }
    }

    /// State as seen at `now`
    #[must_use]
    pub fn state_at(&self, now: Instant) -> SubmissionState {
        match (self.state, self.succeeded_at) {
            (SubmissionState::Success, Some(at)) if now.duration_since(at) >= self.reset_delay => {
                SubmissionState::Idle
            }
            (state, _) => state,
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state_at(Instant::now())
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Message of the last failed submission, cleared by the next attempt
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub const fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// Enter `Submitting`
    ///
    /// Returns `false`, changing nothing, when a submission is in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            log::debug!("Ignoring submit while another submission is in flight");
            return false;
        }
        self.state = SubmissionState::Submitting;
        self.succeeded_at = None;
        self.last_error = None;
        true
    }

    /// Complete the in-flight submission successfully
    pub fn succeed_at(&mut self, now: Instant) {
        if !self.is_submitting() {
            log::debug!("Ignoring success without a submission in flight");
            return;
        }
        self.state = SubmissionState::Success;
        self.succeeded_at = Some(now);
    }

    pub fn succeed(&mut self) {
        self.succeed_at(Instant::now());
    }

    /// Complete the in-flight submission with an error, back to `Idle`
    pub fn fail(&mut self, message: impl Into<String>) {
        if !self.is_submitting() {
            log::debug!("Ignoring failure without a submission in flight");
            return;
        }
        self.state = SubmissionState::Idle;
        self.last_error = Some(message.into());
    }

    /// Record a submission refused before it started, such as a validation failure
    ///
    /// The state is left alone; ignored while a submission is in flight.
    pub fn reject(&mut self, message: impl Into<String>) {
        if self.is_submitting() {
            log::debug!("Ignoring rejection while a submission is in flight");
            return;
        }
        self.last_error = Some(message.into());
    }

    /// Commit the automatic `Success -> Idle` revert if it is due
    ///
    /// Returns `true` when the state changed.
    pub fn settle_at(&mut self, now: Instant) -> bool {
        if self.state == SubmissionState::Success && self.state_at(now) == SubmissionState::Idle {
            self.state = SubmissionState::Idle;
            self.succeeded_at = None;
            return true;
        }
        false
    }

    pub fn settle(&mut self) -> bool {
        self.settle_at(Instant::now())
    }
}
