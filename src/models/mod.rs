pub mod config;
pub mod intent;
pub mod state;

pub use config::{ConfigError, DeskConfig, CONFIG_FILE};
pub use intent::{Intent, MenuError};
pub use state::OperationalState;
