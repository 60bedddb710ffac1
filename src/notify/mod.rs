//! Notification hub
//!
//! Listeners registered here hear about every state change, synchronously
//! and in the order they were attached.

mod hub;
mod listener;

pub use hub::{Listener, ListenerError, NotificationHub};
pub use listener::{ConsoleListener, Transcript};
