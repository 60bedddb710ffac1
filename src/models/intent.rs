//! Menu intents and choice parsing

use super::state::OperationalState;

/// Errors produced when a menu entry cannot be turned into an intent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// An integer outside the menu, kept as typed so oversized numbers fit
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Invalid choice: '{0}' is not a number")]
    MalformedInput(String),
}

/// A user-selected action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    RequestRefillBooking,
    RequestTransferProduct,
    RequestChangeRegulator,
    Quit,
}

impl Intent {
    /// Intents in menu order
    pub const ALL: [Intent; 4] = [
        Intent::RequestRefillBooking,
        Intent::RequestTransferProduct,
        Intent::RequestChangeRegulator,
        Intent::Quit,
    ];

    /// Menu number for this intent
    pub fn choice(&self) -> i64 {
        match self {
            Intent::RequestRefillBooking => 1,
            Intent::RequestTransferProduct => 2,
            Intent::RequestChangeRegulator => 3,
            Intent::Quit => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intent::RequestRefillBooking => "Refill Booking",
            Intent::RequestTransferProduct => "Transfer of LPG",
            Intent::RequestChangeRegulator => "Change of Regulator",
            Intent::Quit => "Quit",
        }
    }

    /// Work state entered for this intent; Quit never reaches the state machine
    pub fn target_state(&self) -> Option<OperationalState> {
        match self {
            Intent::RequestRefillBooking => Some(OperationalState::RefillBooking),
            Intent::RequestTransferProduct => Some(OperationalState::TransferProduct),
            Intent::RequestChangeRegulator => Some(OperationalState::ChangeRegulator),
            Intent::Quit => None,
        }
    }

    pub fn from_choice(choice: i64) -> Result<Self, MenuError> {
        Self::ALL
            .iter()
            .copied()
            .find(|intent| intent.choice() == choice)
            .ok_or_else(|| MenuError::InvalidChoice(choice.to_string()))
    }

    /// Parse one line of menu input
    pub fn parse(raw: &str) -> Result<Self, MenuError> {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(choice) => Self::from_choice(choice),
            Err(_) if is_integer(trimmed) => Err(MenuError::InvalidChoice(trimmed.to_string())),
            Err(_) => Err(MenuError::MalformedInput(trimmed.to_string())),
        }
    }
}

/// Optional sign followed by ASCII digits, of any length
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
