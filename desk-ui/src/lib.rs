pub mod api;
pub mod components;
pub mod desktop;
pub mod desktop_window;
pub mod interop;
pub mod storage;

pub use api::*;
pub use components::*;
pub use desktop::*;
pub use desktop_window::*;
pub use interop::*;
