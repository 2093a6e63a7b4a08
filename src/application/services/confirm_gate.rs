//! Confirmation step in front of destructive actions.

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
enum GateState<T> {
    Closed,
    Open(T),
    /// Confirmed; the request for the target has not settled yet.
    Settling(T),
}

/// Holds the record a destructive action targets until the user decides.
///
/// `Closed -> Open -> Settling -> Closed`, or `Open -> Closed` on cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmGate<T> {
    state: GateState<T>,
}

impl<T> Default for ConfirmGate<T> {
    fn default() -> Self {
        Self {
            state: GateState::Closed,
        }
    }
}

impl<T: Clone> ConfirmGate<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks for confirmation. Ignored while another request is settling.
    pub fn open(&mut self, target: T) -> bool {
        if self.is_settling() {
            debug!("Confirmation requested while settling, ignoring");
            return false;
        }
        self.state = GateState::Open(target);
        true
    }

    /// Accepts the pending action and returns it for execution.
    ///
    /// Returns `None` unless the gate is open, so each opening runs at most once.
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.state, GateState::Closed) {
            GateState::Open(target) => {
                self.state = GateState::Settling(target.clone());
                Some(target)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Closes the gate once the confirmed request has settled.
    pub fn settle(&mut self) {
        if self.is_settling() {
            self.state = GateState::Closed;
        }
    }

    /// Discards the pending target. Has no effect while settling.
    pub fn cancel(&mut self) {
        if matches!(self.state, GateState::Open(_)) {
            self.state = GateState::Closed;
        }
    }

    #[must_use]
    pub const fn target(&self) -> Option<&T> {
        match &self.state {
            GateState::Closed => None,
            GateState::Open(target) | GateState::Settling(target) => Some(target),
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !matches!(self.state, GateState::Closed)
    }

    #[must_use]
    pub const fn is_settling(&self) -> bool {
        matches!(self.state, GateState::Settling(_))
    }
}
