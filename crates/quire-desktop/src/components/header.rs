//! Greeting header

use std::time::Duration;

use chrono::{Local, Timelike};
use dioxus::prelude::*;

use quire_core::util::{display_date, greeting_for_hour};

use crate::state::AppState;

const CLOCK_TICK: Duration = Duration::from_secs(30);

/// Sidebar toggler, time-of-day greeting and today's date
#[component]
pub fn Header() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut now = use_signal(Local::now);

    use_future(move || async move {
        loop {
            tokio::time::sleep(CLOCK_TICK).await;
            now.set(Local::now());
        }
    });

    let current = now();
    let greeting = greeting_for_hour(current.hour());
    let date = display_date(&current);

    rsx! {
        div {
            class: "header",
            style: "display: flex; align-items: flex-start; gap: 12px; padding: 24px 24px 8px;",
            button {
                class: "sidebar-toggler",
                title: "Toggle notebooks",
                style: "
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    padding: 4px 10px;
                    background: transparent;
                    color: {colors.text_primary};
                    font-size: 16px;
                    cursor: pointer;
                ",
                onclick: move |_| state.toggle_sidebar(),
                "☰"
            }
            div {
                h1 {
                    style: "margin: 0; font-size: 24px; font-weight: 600; color: {colors.text_primary};",
                    "{greeting}"
                }
                div {
                    style: "margin-top: 4px; font-size: 13px; color: {colors.text_muted};",
                    "{date}"
                }
            }
        }
    }
}
