/// How long the success banner stays up before reverting to idle.
pub const SUCCESS_DISMISS_MS: i32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Contact form lifecycle. One submission may be in flight at a time; the
/// relay service owns all delivery guarantees, so there is no retry policy
/// and a failed attempt waits for the user to resubmit.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubmissionTracker {
    state: SubmissionState,
}

impl SubmissionTracker {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn in_flight(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Start a submission. Returns `false` while one is already pending,
    /// which is the double-submit guard.
    pub fn begin(&mut self) -> bool {
        if self.in_flight() {
            return false;
        }
        self.state = SubmissionState::Pending;
        true
    }

    /// Record the network outcome. Only meaningful while pending; a late or
    /// duplicate resolution is ignored.
    pub fn resolve(&mut self, success: bool) {
        if !self.in_flight() {
            return;
        }
        self.state = if success {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        };
    }

    /// Auto-dismiss of the success banner. Succeeded returns to idle;
    /// any other state is left alone.
    pub fn dismiss(&mut self) {
        if self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
        }
    }
}
