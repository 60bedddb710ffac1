use std::fmt;

/// Operational phase of the call center
///
/// Idle is both the starting state and the state every work state returns
/// to once its action has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OperationalState {
    #[default]
    Idle,
    RefillBooking,
    TransferProduct,
    ChangeRegulator,
}

impl OperationalState {
    /// Every state, idle first
    pub const ALL: [OperationalState; 4] = [
        OperationalState::Idle,
        OperationalState::RefillBooking,
        OperationalState::TransferProduct,
        OperationalState::ChangeRegulator,
    ];

    /// Name announced to listeners on every transition
    pub fn name(&self) -> &'static str {
        match self {
            OperationalState::Idle => "IdleState",
            OperationalState::RefillBooking => "RefillBookingState",
            OperationalState::TransferProduct => "TransferLPGState",
            OperationalState::ChangeRegulator => "ChangeRegulatorState",
        }
    }

    /// Line printed when the state's action runs
    pub fn action_report(&self) -> &'static str {
        match self {
            OperationalState::Idle => "Call Center is Idle",
            OperationalState::RefillBooking => "Refill Booking initiated",
            OperationalState::TransferProduct => "Transfer of LPG initiated",
            OperationalState::ChangeRegulator => "Change of Regulator initiated",
        }
    }

    /// True for states that perform work and then fall back to Idle
    pub fn is_work(&self) -> bool {
        !matches!(self, OperationalState::Idle)
    }
}

impl fmt::Display for OperationalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
