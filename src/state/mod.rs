//! Call-center state machine
//!
//! Holds the current operational state, announces every transition through
//! the notification hub and runs the action bound to the current state.

mod machine;

pub use machine::CallCenter;
