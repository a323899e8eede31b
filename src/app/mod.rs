//! Application state and logic

mod event;
mod selector;
mod state;
mod viewport;

pub use event::{Event, Handler};
pub use selector::ModelSelectorState;
pub use state::{App, InputScreen, Mode, Screen};
pub use viewport::{ScrollLock, Viewport};
