use chrono::Utc;
use desk_core::widgets::kanban::{Card, KanbanBoard, MoveDirection};
use dioxus::prelude::*;
use shared_types::STORAGE_KEY_KANBAN;

use super::use_persisted;
use crate::desktop::{use_toaster, Toaster};

#[component]
pub fn KanbanView() -> Element {
    let mut board = use_persisted::<KanbanBoard>(STORAGE_KEY_KANBAN);
    let mut toaster = use_toaster();
    let dragging = use_signal(|| None::<String>);

    let snapshot = board.read().clone();
    let total = snapshot.total();
    let last = snapshot.columns.len().saturating_sub(1);

    rsx! {
        div { class: "widget",
            div { class: "widget-row widget-muted",
                span { "{total} cards" }
                span { class: "widget-grow", "· drag cards between columns or use the arrows" }
                button {
                    class: "widget-btn",
                    onclick: move |_| {
                        let count = board.peek().columns.len();
                        if let Err(e) = board.write().add_column(&format!("Column {}", count + 1)) {
                            toaster.error(e.to_string());
                        }
                    },
                    "+ Column"
                }
            }
            div { class: "kanban-board",
                for (position, column) in snapshot.columns.into_iter().enumerate() {
                    KanbanColumn {
                        key: "{column.id}",
                        column_id: column.id.clone(),
                        title: column.title.clone(),
                        cards: column.cards,
                        first: position == 0,
                        last: position == last,
                        board,
                        dragging,
                        toaster,
                    }
                }
            }
        }
    }
}

#[component]
#[allow(clippy::too_many_arguments)]
fn KanbanColumn(
    column_id: String,
    title: String,
    cards: Vec<Card>,
    first: bool,
    last: bool,
    board: Signal<KanbanBoard>,
    dragging: Signal<Option<String>>,
    toaster: Toaster,
) -> Element {
    let mut board = board;
    let mut dragging = dragging;
    let mut toaster = toaster;
    let mut draft_title = use_signal(String::new);
    let mut draft_description = use_signal(String::new);
    let mut adding = use_signal(|| false);
    let mut drop_hover = use_signal(|| false);
    let mut renaming = use_signal(|| None::<String>);

    let id_for_add = column_id.clone();
    let mut add_card = move || {
        let result =
            board
                .write()
                .add_card(&id_for_add, &draft_title(), &draft_description(), Utc::now());
        match result {
            Ok(_) => {
                draft_title.set(String::new());
                draft_description.set(String::new());
                adding.set(false);
            }
            Err(e) => toaster.error(e.to_string()),
        }
    };

    let count = cards.len();

    rsx! {
        section {
            class: if drop_hover() { "kanban-column drop-target" } else { "kanban-column" },
            ondragover: move |e| {
                e.prevent_default();
                drop_hover.set(true);
            },
            ondragleave: move |_| drop_hover.set(false),
            ondrop: {
                let column_id = column_id.clone();
                move |e: Event<DragData>| {
                    e.prevent_default();
                    drop_hover.set(false);
                    let Some(card_id) = dragging.write().take() else {
                        return;
                    };
                    let end = board.peek().cards(&column_id).len();
                    if let Err(e) = board.write().move_card_to(&card_id, &column_id, end) {
                        toaster.error(e.to_string());
                    }
                }
            },

            if let Some(draft) = renaming() {
                div { class: "widget-row",
                    input {
                        class: "widget-input widget-grow",
                        value: "{draft}",
                        autofocus: true,
                        oninput: move |e| renaming.set(Some(e.value())),
                        onkeydown: {
                            let column_id = column_id.clone();
                            move |e: Event<KeyboardData>| match e.key() {
                                Key::Enter => {
                                    let Some(text) = renaming() else {
                                        return;
                                    };
                                    match board.write().rename_column(&column_id, &text) {
                                        Ok(()) => renaming.set(None),
                                        Err(e) => toaster.error(e.to_string()),
                                    }
                                }
                                Key::Escape => renaming.set(None),
                                _ => {}
                            }
                        },
                    }
                }
            } else {
                div { class: "widget-row",
                    strong {
                        class: "widget-grow",
                        title: "Double-click to rename",
                        ondoubleclick: {
                            let title = title.clone();
                            move |_| renaming.set(Some(title.clone()))
                        },
                        "{title}"
                    }
                    span { class: "widget-muted", "{count}" }
                    button {
                        class: "widget-btn icon",
                        "aria-label": "Add card",
                        onclick: move |_| adding.set(!adding()),
                        "+"
                    }
                    button {
                        class: "widget-btn icon danger",
                        "aria-label": "Delete column",
                        title: "Delete column and its cards",
                        onclick: {
                            let column_id = column_id.clone();
                            move |_| {
                                if let Some(removed) = board.write().remove_column(&column_id) {
                                    toaster.info(format!(
                                        "Deleted {} with {} cards",
                                        removed.title,
                                        removed.cards.len()
                                    ));
                                }
                            }
                        },
                        "×"
                    }
                }
            }

            if adding() {
                div { class: "widget-card", style: "display: flex; flex-direction: column; gap: 0.4rem;",
                    input {
                        class: "widget-input",
                        placeholder: "Title",
                        value: "{draft_title}",
                        autofocus: true,
                        oninput: move |e| draft_title.set(e.value()),
                        onkeydown: {
                            let mut add_card = add_card.clone();
                            move |e: Event<KeyboardData>| {
                                if e.key() == Key::Enter {
                                    add_card();
                                }
                            }
                        },
                    }
                    textarea {
                        class: "widget-textarea",
                        rows: "2",
                        placeholder: "Description (optional)",
                        value: "{draft_description}",
                        oninput: move |e| draft_description.set(e.value()),
                    }
                    div { class: "widget-row",
                        button { class: "widget-btn primary", onclick: move |_| add_card(), "Add" }
                        button { class: "widget-btn", onclick: move |_| adding.set(false), "Cancel" }
                    }
                }
            }

            div { class: "widget-list", style: "flex: 1;",
                for card in cards {
                    KanbanCard {
                        key: "{card.id}",
                        card: card.clone(),
                        first,
                        last,
                        board,
                        dragging,
                        toaster,
                    }
                }
            }
        }
    }
}

#[component]
fn KanbanCard(
    card: Card,
    first: bool,
    last: bool,
    board: Signal<KanbanBoard>,
    dragging: Signal<Option<String>>,
    toaster: Toaster,
) -> Element {
    let mut board = board;
    let mut dragging = dragging;
    let mut toaster = toaster;
    let mut editing = use_signal(|| false);
    let mut title = use_signal(|| card.title.clone());
    let mut description = use_signal(|| card.description.clone());

    let original_title = card.title.clone();
    let original_description = card.description.clone();
    let card_id = card.id.clone();
    let id_for_drag = card_id.clone();
    let id_for_save = card_id.clone();
    let id_for_left = card_id.clone();
    let id_for_right = card_id.clone();
    let id_for_delete = card_id;

    let mut shift = move |id: &str, direction: MoveDirection| {
        if let Err(e) = board.write().move_card(id, direction) {
            toaster.error(e.to_string());
        }
    };

    rsx! {
        div {
            class: "widget-card",
            draggable: "true",
            style: "cursor: grab; display: flex; flex-direction: column; gap: 0.35rem;",
            ondragstart: move |_| dragging.set(Some(id_for_drag.clone())),
            ondragend: move |_| dragging.set(None),

            if editing() {
                input {
                    class: "widget-input",
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                }
                textarea {
                    class: "widget-textarea",
                    rows: "3",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }
                div { class: "widget-row",
                    button {
                        class: "widget-btn primary",
                        onclick: move |_| {
                            match board.write().edit_card(&id_for_save, &title(), &description()) {
                                Ok(()) => editing.set(false),
                                Err(e) => toaster.error(e.to_string()),
                            }
                        },
                        "Save"
                    }
                    button { class: "widget-btn", onclick: move |_| editing.set(false), "Cancel" }
                }
            } else {
                strong {
                    ondoubleclick: move |_| editing.set(true),
                    "{card.title}"
                }
                if !card.description.is_empty() {
                    p { class: "widget-muted", style: "margin: 0; white-space: pre-wrap;", "{card.description}" }
                }
                div { class: "widget-row",
                    button {
                        class: "widget-btn icon",
                        disabled: first,
                        "aria-label": "Move left",
                        onclick: move |_| shift(&id_for_left, MoveDirection::Left),
                        "←"
                    }
                    button {
                        class: "widget-btn icon",
                        disabled: last,
                        "aria-label": "Move right",
                        onclick: move |_| shift(&id_for_right, MoveDirection::Right),
                        "→"
                    }
                    span { class: "widget-grow" }
                    button {
                        class: "widget-btn icon",
                        "aria-label": "Edit card",
                        onclick: move |_| {
                            title.set(original_title.clone());
                            description.set(original_description.clone());
                            editing.set(true);
                        },
                        "✎"
                    }
                    button {
                        class: "widget-btn icon danger",
                        "aria-label": "Delete card",
                        onclick: move |_| {
                            board.write().remove_card(&id_for_delete);
                        },
                        "×"
                    }
                }
            }
        }
    }
}
