//! Intent dispatch: turns a menu intent into transitions on the call center

use crate::error::DeskResult;
use crate::models::Intent;
use crate::state::CallCenter;

/// What the front end should do after an intent has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle one intent
///
/// Work intents enter their state (first notification) and run its action,
/// which returns to Idle (second notification). Quit leaves the call center
/// untouched.
pub fn dispatch(center: &mut CallCenter, intent: Intent) -> DeskResult<Flow> {
    let Some(state) = intent.target_state() else {
        tracing::debug!("quit requested");
        return Ok(Flow::Quit);
    };

    tracing::debug!(intent = ?intent, "dispatching");
    center.set_state(state)?;
    center.perform_action()?;
    Ok(Flow::Continue)
}
