use chrono::Local;
use desk_core::widgets::weather::{
    describe_weather_code, summary_line, validate_city, TemperatureUnit, WeatherPrefs,
};
use dioxus::prelude::*;
use shared_types::{WeatherReport, STORAGE_KEY_WEATHER};

use super::use_persisted;
use crate::api::fetch_weather;
use crate::desktop::use_toaster;

#[derive(Clone, PartialEq)]
enum Lookup {
    Idle,
    Loading,
    Ready(WeatherReport),
    Failed(String),
}

#[component]
pub fn WeatherView() -> Element {
    let mut prefs = use_persisted::<WeatherPrefs>(STORAGE_KEY_WEATHER);
    let mut toaster = use_toaster();
    let mut city = use_signal(|| prefs.peek().last_city.clone().unwrap_or_default());
    let mut lookup = use_signal(|| Lookup::Idle);

    let mut search = move || {
        if *lookup.peek() == Lookup::Loading {
            return;
        }
        let name = match validate_city(&city.peek()) {
            Ok(name) => name,
            Err(e) => {
                toaster.error(e.to_string());
                return;
            }
        };
        lookup.set(Lookup::Loading);
        spawn(async move {
            match fetch_weather(&name).await {
                Ok(report) => {
                    prefs.write().remember(&report.location);
                    city.set(report.location.clone());
                    lookup.set(Lookup::Ready(report));
                }
                Err(e) => {
                    toaster.error(format!("Weather lookup failed: {e}"));
                    lookup.set(Lookup::Failed(e));
                }
            }
        });
    };

    // Refresh the remembered city once on open.
    use_effect(move || {
        if prefs.peek().last_city.is_some() {
            search();
        }
    });

    let unit = prefs.read().unit;

    rsx! {
        div { class: "widget",
            div { class: "widget-row",
                input {
                    class: "widget-input widget-grow",
                    placeholder: "City, e.g. Berlin",
                    value: "{city}",
                    oninput: move |e| city.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            search();
                        }
                    },
                }
                button {
                    class: "widget-btn primary",
                    disabled: lookup() == Lookup::Loading,
                    onclick: move |_| search(),
                    "Search"
                }
                button {
                    class: "widget-btn",
                    title: "Switch temperature unit",
                    onclick: move |_| {
                        let next = prefs.peek().unit.toggled();
                        prefs.write().unit = next;
                    },
                    if unit == TemperatureUnit::Celsius { "°C" } else { "°F" }
                }
            }

            match lookup() {
                Lookup::Idle => rsx! {
                    p { class: "widget-muted", "Search for a city to see current conditions." }
                },
                Lookup::Loading => rsx! {
                    p { class: "widget-muted", "Loading weather…" }
                },
                Lookup::Failed(message) => rsx! {
                    div { class: "widget-card",
                        p { class: "widget-error", "{message}" }
                        button { class: "widget-btn", onclick: move |_| search(), "Try again" }
                    }
                },
                Lookup::Ready(report) => {
                    let (_, icon) = describe_weather_code(report.weather_code);
                    let headline = summary_line(&report, unit);
                    let feels_like = report.apparent_temperature_c.map(|t| unit.format(t));
                    let observed = report.observed_at.with_timezone(&Local).format("%H:%M").to_string();
                    rsx! {
                        div { class: "widget-card",
                            div { class: "widget-row",
                                span { style: "font-size: 3rem;", "{icon}" }
                                div {
                                    div { style: "font-size: 1.25rem; font-weight: 600;", "{headline}" }
                                    div { class: "widget-muted", "{report.description}" }
                                }
                            }
                        }
                        div { class: "widget-row", style: "flex-wrap: wrap;",
                            if let Some(feels) = feels_like {
                                div { class: "widget-stat",
                                    span { class: "widget-muted", "Feels like" }
                                    strong { "{feels}" }
                                }
                            }
                            if let Some(humidity) = report.humidity_pct {
                                div { class: "widget-stat",
                                    span { class: "widget-muted", "Humidity" }
                                    strong { "{humidity:.0}%" }
                                }
                            }
                            div { class: "widget-stat",
                                span { class: "widget-muted", "Wind" }
                                strong { "{report.wind_speed_kmh:.0} km/h" }
                            }
                        }
                        p { class: "widget-muted", style: "font-size: 0.75rem;", "Observed at {observed}" }
                    }
                }
            }
        }
    }
}
