use chrono::{Local, NaiveDate, Utc};
use desk_core::widgets::habits::{Habit, HabitTracker};
use dioxus::prelude::*;
use shared_types::STORAGE_KEY_HABITS;

use super::use_persisted;
use crate::desktop::{use_toaster, Toaster};

const RATE_WINDOW_DAYS: u32 = 30;

fn day_initial(day: NaiveDate) -> String {
    day.format("%a").to_string().chars().take(1).collect()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[component]
pub fn HabitsView() -> Element {
    let mut habits = use_persisted::<HabitTracker>(STORAGE_KEY_HABITS);
    let mut toaster = use_toaster();
    let mut draft = use_signal(String::new);

    // Older saves may hold unsorted or repeated days.
    use_effect(move || habits.write().normalize());

    let mut add_habit = move || match habits.write().add(&draft(), Utc::now()) {
        Ok(_) => draft.set(String::new()),
        Err(e) => toaster.error(e.to_string()),
    };

    let today = today();
    let rows = habits.read().habits.clone();

    rsx! {
        div { class: "widget",
            div { class: "widget-row",
                input {
                    class: "widget-input widget-grow",
                    placeholder: "New habit, e.g. Read 20 minutes",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            add_habit();
                        }
                    },
                }
                button { class: "widget-btn primary", onclick: move |_| add_habit(), "Add" }
            }

            if rows.is_empty() {
                p { class: "widget-muted", "No habits yet. Add one to start a streak." }
            }

            ul { class: "widget-list widget-grow",
                for habit in rows {
                    HabitRow {
                        key: "{habit.id}",
                        habit: habit.clone(),
                        today,
                        habits,
                        toaster,
                    }
                }
            }
        }
    }
}

#[component]
fn HabitRow(
    habit: Habit,
    today: NaiveDate,
    habits: Signal<HabitTracker>,
    toaster: Toaster,
) -> Element {
    let mut habits = habits;
    let mut toaster = toaster;
    let mut renaming = use_signal(|| None::<String>);

    let week = habit.week(today);
    let current = habit.current_streak(today);
    let longest = habit.longest_streak();
    let rate = (habit.completion_rate(RATE_WINDOW_DAYS, today) * 100.0).round();

    let id_for_rename = habit.id.clone();
    let id_for_delete = habit.id.clone();
    let original_name = habit.name.clone();

    let mut commit_rename = move || {
        let Some(name) = renaming() else {
            return;
        };
        match habits.write().rename(&id_for_rename, &name) {
            Ok(()) => renaming.set(None),
            Err(e) => toaster.error(e.to_string()),
        }
    };

    rsx! {
        li { class: "widget-card", style: "display: flex; flex-direction: column; gap: 0.5rem;",
            div { class: "widget-row",
                if let Some(name) = renaming() {
                    input {
                        class: "widget-input widget-grow",
                        value: "{name}",
                        autofocus: true,
                        oninput: move |e| renaming.set(Some(e.value())),
                        onkeydown: {
                            let mut commit_rename = commit_rename.clone();
                            move |e: KeyboardEvent| match e.key() {
                                Key::Enter => commit_rename(),
                                Key::Escape => renaming.set(None),
                                _ => {}
                            }
                        },
                        onblur: move |_| commit_rename(),
                    }
                } else {
                    strong {
                        class: "widget-grow",
                        title: "Double-click to rename",
                        ondoubleclick: move |_| renaming.set(Some(original_name.clone())),
                        "{habit.name}"
                    }
                }
                span { class: "widget-muted", title: "Current streak", "🔥 {current}" }
                span { class: "widget-muted", title: "Longest streak", "🏆 {longest}" }
                span { class: "widget-muted", title: "Last {RATE_WINDOW_DAYS} days", "{rate}%" }
                button {
                    class: "widget-btn icon danger",
                    "aria-label": "Delete habit",
                    onclick: move |_| {
                        habits.write().remove(&id_for_delete);
                    },
                    "×"
                }
            }
            div { class: "widget-row",
                for (day, done) in week {
                    button {
                        key: "{day}",
                        class: if done { "habit-day done" } else { "habit-day" },
                        title: "{day}",
                        onclick: {
                            let id = habit.id.clone();
                            move |_| {
                                if let Err(e) = habits.write().toggle(&id, day) {
                                    toaster.error(e.to_string());
                                }
                            }
                        },
                        {day_initial(day)}
                    }
                }
            }
        }
    }
}
