pub mod desktop;
pub mod error;
pub mod notify;
pub mod storage;
pub mod widgets;

pub use desktop::apps::{core_apps, get_app_icon};
pub use desktop::bounds::{clamp_bounds, is_mobile_viewport, maximized_bounds};
pub use desktop::{ShowDesktopSnapshot, WindowManager};
pub use error::{DeskError, DeskResult};
pub use notify::{Notifications, Toast, ToastLevel};
pub use storage::{load_json, load_or_default, save_json, KeyValueStore, MemoryStore};
