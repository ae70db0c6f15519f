pub mod session;
pub mod timer;
pub mod util;

pub use session::Session;
pub use timer::{Timer, TimerError, TimerState};
