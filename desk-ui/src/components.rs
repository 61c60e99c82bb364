pub mod currency;
pub mod habits;
pub mod json_tools;
pub mod kanban;
pub mod mixer;
pub mod notepad;
pub mod password;
pub mod pomodoro;
pub mod styles;
pub mod todo;
pub mod uuid_slug;
pub mod video;
pub mod weather;

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::desktop::{use_toaster, Toaster};
use crate::interop::copy_to_clipboard;
use crate::storage::{load_widget, save_widget};

pub use currency::CurrencyView;
pub use habits::HabitsView;
pub use json_tools::JsonToolsView;
pub use kanban::KanbanView;
pub use mixer::MixerView;
pub use notepad::NotepadView;
pub use password::PasswordView;
pub use pomodoro::PomodoroView;
pub use todo::TodoView;
pub use uuid_slug::UuidSlugView;
pub use video::VideoView;
pub use weather::WeatherView;

/// Widget state seeded from browser storage and written back on every change.
pub fn use_persisted<T>(key: &'static str) -> Signal<T>
where
    T: Serialize + DeserializeOwned + Default + 'static,
{
    let state = use_signal(|| load_widget::<T>(key));
    let mut toaster = use_toaster();
    use_effect(move || {
        if let Err(e) = save_widget(key, &*state.read()) {
            toaster.error(format!("Could not save changes: {e}"));
        }
    });
    state
}

/// Copy `text` and report the outcome as a toast.
pub fn copy_with_toast(mut toaster: Toaster, text: String, label: &'static str) {
    spawn(async move {
        match copy_to_clipboard(&text).await {
            Ok(()) => toaster.success(format!("{label} copied")),
            Err(e) => toaster.error(format!("Copy failed: {e}")),
        }
    });
}
