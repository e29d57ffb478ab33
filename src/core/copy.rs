//! Copy-to-clipboard state machine.
//!
//! Models the copy button lifecycle as an explicit finite-state machine
//! instead of ad hoc boolean + timeout-id fields. Transitions return a
//! [`TimerCmd`] telling the caller what to do with its single feedback
//! timer, which makes the "at most one pending timer" invariant
//! structural: the caller owns exactly one cancellable handle and only
//! touches it when a transition says so.
//!
//! The clipboard write itself is asynchronous and may resolve out of
//! order with later UI events; the `Copying` phase is the reentrancy
//! guard covering that window.

/// Copy button lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyPhase {
    /// At rest, ready to accept a copy request.
    #[default]
    Idle,
    /// Clipboard write in flight; further requests are dropped.
    Copying,
    /// "Copied!" indicator showing until the feedback timer fires.
    Feedback,
}

/// What the caller must do with its feedback timer after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCmd {
    /// Leave the timer alone.
    Keep,
    /// Cancel any pending timer and arm a fresh one.
    Arm,
    /// Cancel any pending timer.
    Cancel,
}

/// Outcome of a copy request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyStart {
    /// Begin the clipboard write with the rendered Markdown.
    Write,
    /// Nothing to copy; the caller notifies and stays at rest.
    Empty,
    /// A write is already in flight; silent no-op, not queued.
    Denied,
}

/// Finite-state machine driving the copy button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFsm {
    phase: CopyPhase,
}

impl CopyFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CopyPhase {
        self.phase
    }

    /// Handle a user copy request for the given rendered Markdown.
    ///
    /// Reentrancy guard: a request while a write is in flight is a
    /// silent no-op. A request during `Feedback` is allowed and starts
    /// a new write; its success re-arms the timer from scratch.
    pub fn request(&mut self, markdown: &str) -> CopyStart {
        if self.phase == CopyPhase::Copying {
            return CopyStart::Denied;
        }
        if markdown.trim().is_empty() {
            self.phase = CopyPhase::Idle;
            return CopyStart::Empty;
        }
        self.phase = CopyPhase::Copying;
        CopyStart::Write
    }

    /// The clipboard write resolved successfully.
    pub fn write_succeeded(&mut self) -> TimerCmd {
        self.phase = CopyPhase::Feedback;
        TimerCmd::Arm
    }

    /// The clipboard write rejected or threw.
    pub fn write_failed(&mut self) -> TimerCmd {
        self.phase = CopyPhase::Idle;
        TimerCmd::Cancel
    }

    /// The feedback timer elapsed.
    ///
    /// Ignored outside `Feedback`: a stale timer firing during a new
    /// in-flight write must not disturb the guard.
    pub fn timer_fired(&mut self) -> TimerCmd {
        if self.phase == CopyPhase::Feedback {
            self.phase = CopyPhase::Idle;
        }
        TimerCmd::Keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_with_content_starts_write() {
        let mut fsm = CopyFsm::new();
        assert_eq!(fsm.request("### code"), CopyStart::Write);
        assert_eq!(fsm.phase(), CopyPhase::Copying);
    }

    #[test]
    fn test_request_with_blank_markdown_is_empty() {
        let mut fsm = CopyFsm::new();
        assert_eq!(fsm.request("  \n"), CopyStart::Empty);
        assert_eq!(fsm.phase(), CopyPhase::Idle);
    }

    #[test]
    fn test_second_request_while_copying_is_denied() {
        let mut fsm = CopyFsm::new();
        assert_eq!(fsm.request("### code"), CopyStart::Write);
        // Write still in flight: exactly one write attempt happens.
        assert_eq!(fsm.request("### code"), CopyStart::Denied);
        assert_eq!(fsm.phase(), CopyPhase::Copying);
    }

    #[test]
    fn test_success_enters_feedback_and_arms_timer() {
        let mut fsm = CopyFsm::new();
        fsm.request("### code");
        assert_eq!(fsm.write_succeeded(), TimerCmd::Arm);
        assert_eq!(fsm.phase(), CopyPhase::Feedback);
    }

    #[test]
    fn test_failure_returns_to_idle_and_cancels() {
        let mut fsm = CopyFsm::new();
        fsm.request("### code");
        assert_eq!(fsm.write_failed(), TimerCmd::Cancel);
        assert_eq!(fsm.phase(), CopyPhase::Idle);
    }

    #[test]
    fn test_timer_fired_ends_feedback() {
        let mut fsm = CopyFsm::new();
        fsm.request("### code");
        fsm.write_succeeded();
        assert_eq!(fsm.timer_fired(), TimerCmd::Keep);
        assert_eq!(fsm.phase(), CopyPhase::Idle);
    }

    #[test]
    fn test_copy_during_feedback_rearms_single_timer() {
        let mut fsm = CopyFsm::new();
        fsm.request("### code");
        fsm.write_succeeded();
        // Second copy before the timer fires: allowed, and its success
        // asks for exactly one fresh timer (Arm implies cancel first).
        assert_eq!(fsm.request("### code"), CopyStart::Write);
        assert_eq!(fsm.write_succeeded(), TimerCmd::Arm);
        assert_eq!(fsm.phase(), CopyPhase::Feedback);
    }

    #[test]
    fn test_stale_timer_does_not_break_guard() {
        let mut fsm = CopyFsm::new();
        fsm.request("### code");
        fsm.write_succeeded();
        fsm.request("### code");
        // Old timer fires while the new write is in flight.
        fsm.timer_fired();
        assert_eq!(fsm.phase(), CopyPhase::Copying);
        assert_eq!(fsm.request("### code"), CopyStart::Denied);
    }
}
