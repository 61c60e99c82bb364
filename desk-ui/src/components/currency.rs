use chrono::Local;
use desk_core::widgets::currency::{
    convert, format_amount, parse_amount, CurrencyPair, COMMON_CURRENCIES,
};
use dioxus::prelude::*;
use shared_types::{ExchangeRates, STORAGE_KEY_CURRENCY};

use super::use_persisted;
use crate::api::fetch_rates;
use crate::desktop::use_toaster;

#[component]
pub fn CurrencyView() -> Element {
    let mut pair = use_persisted::<CurrencyPair>(STORAGE_KEY_CURRENCY);
    let mut toaster = use_toaster();
    let mut rates = use_signal(|| None::<ExchangeRates>);
    let mut loading = use_signal(|| false);
    let mut fetch_error = use_signal(|| None::<String>);
    let mut refresh = use_signal(|| 0u32);

    let base = use_memo(move || pair.read().from.clone());

    use_effect(move || {
        let base = base();
        let _ = refresh();
        loading.set(true);
        spawn(async move {
            match fetch_rates(&base).await {
                Ok(table) => {
                    fetch_error.set(None);
                    rates.set(Some(table));
                }
                Err(e) => {
                    toaster.error(format!("Exchange rates unavailable: {e}"));
                    fetch_error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let current = pair.read().clone();
    let result = match (parse_amount(&current.amount), rates.read().as_ref()) {
        (Err(e), _) => Err(e.to_string()),
        (Ok(_), None) => Ok(None),
        (Ok(amount), Some(table)) => convert(amount, &current.from, &current.to, table)
            .map(|value| Some((amount, value)))
            .map_err(|e| e.to_string()),
    };
    let unit_rate = rates
        .read()
        .as_ref()
        .and_then(|table| convert(1.0, &current.from, &current.to, table).ok());
    let updated = rates.read().as_ref().map(|table| {
        table
            .updated_at
            .with_timezone(&Local)
            .format("%b %-d, %H:%M")
            .to_string()
    });

    rsx! {
        div { class: "widget",
            input {
                class: "widget-input",
                inputmode: "decimal",
                placeholder: "Amount",
                value: "{current.amount}",
                oninput: move |e| pair.write().amount = e.value(),
            }
            div { class: "widget-row",
                CurrencySelect {
                    value: current.from.clone(),
                    on_change: move |code: String| pair.write().from = code,
                }
                button {
                    class: "widget-btn icon",
                    title: "Swap currencies",
                    onclick: move |_| pair.write().swap(),
                    "⇄"
                }
                CurrencySelect {
                    value: current.to.clone(),
                    on_change: move |code: String| pair.write().to = code,
                }
            }

            div { class: "widget-card",
                match result {
                    Err(message) => rsx! { p { class: "widget-error", "{message}" } },
                    Ok(None) if loading() => rsx! { p { class: "widget-muted", "Loading rates…" } },
                    Ok(None) => rsx! { p { class: "widget-muted", "Rates are not available yet." } },
                    Ok(Some((amount, value))) => rsx! {
                        div { class: "widget-muted", "{format_amount(amount)} {current.from} ="}
                        div { style: "font-size: 1.75rem; font-weight: 700;",
                            "{format_amount(value)} {current.to}"
                        }
                    },
                }
                if let Some(rate) = unit_rate {
                    div { class: "widget-muted widget-mono", style: "font-size: 0.8rem;",
                        "1 {current.from} = {rate:.4} {current.to}"
                    }
                }
            }

            div { class: "widget-row widget-muted", style: "font-size: 0.75rem;",
                span { class: "widget-grow",
                    if let Some(err) = fetch_error() {
                        span { class: "widget-error", "{err}" }
                    } else if let Some(when) = updated {
                        "Rates updated {when}"
                    }
                }
                button {
                    class: "widget-btn",
                    disabled: loading(),
                    onclick: move |_| refresh += 1,
                    "Refresh"
                }
            }
        }
    }
}

#[component]
fn CurrencySelect(value: String, on_change: EventHandler<String>) -> Element {
    let known = COMMON_CURRENCIES.iter().any(|(code, _)| *code == value);
    rsx! {
        select {
            class: "widget-select widget-grow",
            value: "{value}",
            onchange: move |e| on_change.call(e.value()),
            if !known {
                option { value: "{value}", "{value}" }
            }
            for (code, name) in COMMON_CURRENCIES.iter().copied() {
                option {
                    key: "{code}",
                    value: "{code}",
                    selected: code == value,
                    "{code} · {name}"
                }
            }
        }
    }
}
