//! Per-widget state and transforms. Pure logic functions, no RSX, no signals.

pub mod currency;
pub mod habits;
pub mod json_tools;
pub mod kanban;
pub mod mixer;
pub mod notepad;
pub mod password;
pub mod pomodoro;
pub mod todo;
pub mod uuid_slug;
pub mod video;
pub mod weather;
