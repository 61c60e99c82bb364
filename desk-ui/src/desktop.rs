//! Desktop shell - window canvas, dock and toast stack

use dioxus::prelude::*;

mod actions;
mod components;
mod effects;
mod shell;
pub mod theme;
pub mod toasts;

pub use shell::DesktopShell;
pub use toasts::{use_toaster, Toaster};

#[component]
pub fn Desktop() -> Element {
    rsx! {
        DesktopShell {}
    }
}
