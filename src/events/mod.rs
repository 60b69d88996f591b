pub mod pointer;
pub mod scroll;

pub use pointer::wire_magnetic_handlers;
pub use scroll::{wire_window_listeners, ScrollAware};
