use std::cell::Cell;
use std::rc::Rc;

use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Delay that lands the next redraw on a minute boundary.
fn ms_until_next_minute(time: NaiveTime) -> u32 {
    let elapsed = time.second() * 1000 + time.nanosecond() / 1_000_000;
    60_000 - elapsed.min(59_999)
}

fn clock_labels(now: NaiveDateTime) -> (String, String) {
    (
        now.format("%H:%M").to_string(),
        now.format("%a, %b %-d %Y").to_string(),
    )
}

#[component]
pub fn Clock(compact: bool) -> Element {
    let mut now = use_signal(Local::now);
    let alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let alive = alive.clone();
        use_drop(move || {
            alive.set(false);
        });
    }

    {
        let alive = alive.clone();
        use_effect(move || {
            let alive = alive.clone();
            spawn(async move {
                while alive.get() {
                    TimeoutFuture::new(ms_until_next_minute(Local::now().time())).await;
                    if !alive.get() {
                        break;
                    }
                    now.set(Local::now());
                }
            });
        });
    }

    let (time, date) = clock_labels(now().naive_local());

    rsx! {
        div {
            class: "dock-clock",
            style: "display: flex; flex-direction: column; align-items: flex-end; line-height: 1.15; color: var(--text-secondary, #9ca3af); flex-shrink: 0; font-variant-numeric: tabular-nums;",
            title: "{date}",
            span { style: "font-size: 0.85rem; color: var(--text-primary, #f9fafb);", "{time}" }
            if !compact {
                span { style: "font-size: 0.7rem;", "{date}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn waits_for_the_next_minute_boundary() {
        let t = NaiveTime::from_hms_milli_opt(9, 30, 15, 250).unwrap();
        assert_eq!(ms_until_next_minute(t), 44_750);
        let on_the_minute = NaiveTime::from_hms_opt(9, 31, 0).unwrap();
        assert_eq!(ms_until_next_minute(on_the_minute), 60_000);
        let last_ms = NaiveTime::from_hms_milli_opt(9, 31, 59, 999).unwrap();
        assert_eq!(ms_until_next_minute(last_ms), 1);
    }

    #[test]
    fn labels_show_time_and_date() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 4, 0)
            .unwrap();
        let (time, date) = clock_labels(at);
        assert_eq!(time, "07:04");
        assert_eq!(date, "Tue, Mar 5 2024");
    }
}
