//! Session controller: the single execution context that owns all state.

mod command;
mod controller;
mod handle;
mod view_state;

pub use command::SessionCommand;
pub use controller::SessionController;
pub use handle::SessionHandle;
pub use view_state::ViewState;
