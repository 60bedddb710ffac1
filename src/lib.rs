// LPG Desk - call-center workflow for gas-cylinder service
// Customers pick an action, the desk moves through its states and every
// registered listener hears about each change.

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod models;
pub mod notify;
pub mod state;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use dispatch::{dispatch, Flow};
pub use error::DeskError;
pub use models::{DeskConfig, Intent, MenuError, OperationalState};
pub use notify::{ConsoleListener, Listener, ListenerError, NotificationHub};
pub use state::CallCenter;
