//! CallCenter - state transitions and state actions

use crate::error::DeskResult;
use crate::models::OperationalState;
use crate::notify::{Listener, NotificationHub};
use std::io::{self, Write};
use std::sync::Arc;

/// The call-center context
pub struct CallCenter {
    current: OperationalState,
    hub: NotificationHub,
    out: Box<dyn Write + Send>,
}

impl CallCenter {
    /// Idle call center reporting actions to stdout
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }

    /// Idle call center reporting actions to `out`
    pub fn with_output(out: impl Write + Send + 'static) -> Self {
        Self {
            current: OperationalState::Idle,
            hub: NotificationHub::new(),
            out: Box::new(out),
        }
    }

    pub fn attach(&mut self, listener: Arc<dyn Listener>) {
        self.hub.attach(listener);
    }

    pub fn current(&self) -> OperationalState {
        self.current
    }

    pub fn listener_count(&self) -> usize {
        self.hub.len()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Replace the current state and announce it
    ///
    /// Any state may follow any state.
    pub fn set_state(&mut self, state: OperationalState) -> DeskResult<()> {
        tracing::debug!(from = %self.current, to = %state, "state transition");
        self.current = state;
        self.hub.notify(&format!("State changed to {}", state.name()))
    }

    /// Run the action bound to the current state
    ///
    /// Work states report and then return to Idle, which is announced too.
    pub fn perform_action(&mut self) -> DeskResult<()> {
        let state = self.current;
        writeln!(self.out, "{}", state.action_report())?;
        self.out.flush()?;

        match state {
            OperationalState::Idle => Ok(()),
            OperationalState::RefillBooking
            | OperationalState::TransferProduct
            | OperationalState::ChangeRegulator => self.set_state(OperationalState::Idle),
        }
    }
}

impl Default for CallCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeskError;
    use crate::notify::{ConsoleListener, ListenerError, Transcript};

    fn center_with(listeners: &[&str]) -> (CallCenter, Transcript) {
        let transcript = Transcript::new();
        let mut center = CallCenter::with_output(transcript.clone());
        for name in listeners {
            center.attach(Arc::new(ConsoleListener::with_output(
                *name,
                transcript.clone(),
            )));
        }
        (center, transcript)
    }

    #[test]
    fn test_starts_idle_without_listeners() {
        let (center, transcript) = center_with(&[]);
        assert_eq!(center.current(), OperationalState::Idle);
        assert_eq!(center.listener_count(), 0);
        assert!(transcript.lines().is_empty());
    }

    #[test]
    fn test_set_state_notifies() {
        let (mut center, transcript) = center_with(&["Customer"]);

        center.set_state(OperationalState::ChangeRegulator).unwrap();

        assert_eq!(center.current(), OperationalState::ChangeRegulator);
        assert_eq!(
            transcript.lines(),
            vec!["Customer received message: State changed to ChangeRegulatorState"]
        );
    }

    #[test]
    fn test_set_state_accepts_any_transition() {
        let (mut center, _) = center_with(&["Customer"]);
        center.set_state(OperationalState::RefillBooking).unwrap();
        center.set_state(OperationalState::TransferProduct).unwrap();
        assert_eq!(center.current(), OperationalState::TransferProduct);
    }

    #[test]
    fn test_idle_action_only_reports() {
        let (mut center, transcript) = center_with(&["Customer"]);

        center.perform_action().unwrap();

        assert_eq!(center.current(), OperationalState::Idle);
        assert_eq!(transcript.lines(), vec!["Call Center is Idle"]);
    }

    #[test]
    fn test_work_action_reports_then_returns_to_idle() {
        let (mut center, transcript) = center_with(&["Customer"]);
        center.set_state(OperationalState::RefillBooking).unwrap();

        center.perform_action().unwrap();

        assert_eq!(center.current(), OperationalState::Idle);
        assert_eq!(
            transcript.lines(),
            vec![
                "Customer received message: State changed to RefillBookingState",
                "Refill Booking initiated",
                "Customer received message: State changed to IdleState",
            ]
        );
    }

    #[test]
    fn test_every_work_state_returns_to_idle() {
        for state in OperationalState::ALL.into_iter().filter(|s| s.is_work()) {
            let (mut center, transcript) = center_with(&["Customer", "Dealer"]);
            center.set_state(state).unwrap();
            center.perform_action().unwrap();

            assert_eq!(center.current(), OperationalState::Idle);
            let notifications = transcript
                .lines()
                .into_iter()
                .filter(|l| l.contains("received message"))
                .count();
            assert_eq!(notifications, 4, "two events to two listeners for {state}");
        }
    }

    struct Refusing;

    impl Listener for Refusing {
        fn name(&self) -> &str {
            "Refusing"
        }

        fn receive(&self, _message: &str) -> Result<(), ListenerError> {
            Err(ListenerError::Rejected("no".to_string()))
        }
    }

    #[test]
    fn test_listener_failure_propagates_from_set_state() {
        let (mut center, _) = center_with(&[]);
        center.attach(Arc::new(Refusing));

        let err = center.set_state(OperationalState::RefillBooking).unwrap_err();

        assert!(matches!(err, DeskError::Listener { .. }));
        // The state is replaced before listeners are told
        assert_eq!(center.current(), OperationalState::RefillBooking);
    }
}
