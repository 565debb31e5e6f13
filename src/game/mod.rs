//! The playable game: a session that turns commands and clock advances
//! into state transitions and observer notifications.

pub mod observer;
pub mod prompt;
pub mod session;

pub use observer::{EventLog, GameEvent, GameObserver, NullObserver};
pub use prompt::Prompt;
pub use session::GeniusSession;
