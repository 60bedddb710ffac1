pub mod init;
pub mod picker;
pub mod session;

pub use session::{Session, SessionEnd, SessionOptions};
