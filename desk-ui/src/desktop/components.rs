pub mod clock;
pub mod desktop_icons;
pub mod dock;
pub mod status_views;
pub mod toast_stack;
pub mod workspace_canvas;
