//! Notification toasts for failed operations

use std::time::Duration;

use dioxus::prelude::*;

use quire_core::view::{Gesture, Notification};

use crate::state::AppState;

const TOAST_LIFETIME: Duration = Duration::from_secs(6);

#[component]
pub fn Notifications(items: Vec<Notification>) -> Element {
    rsx! {
        div {
            class: "notifications",
            style: "
                position: fixed;
                right: 16px;
                bottom: 16px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                z-index: 20;
            ",
            for item in items.iter() {
                Toast { key: "{item.id}", notification: item.clone() }
            }
        }
    }
}

/// One toast; dismisses itself after a few seconds
#[component]
fn Toast(notification: Notification) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let id = notification.id;

    use_future(move || async move {
        tokio::time::sleep(TOAST_LIFETIME).await;
        state.dispatch(Gesture::DismissNotification(id));
    });

    rsx! {
        div {
            class: "toast",
            style: "
                display: flex;
                align-items: flex-start;
                gap: 10px;
                max-width: 360px;
                padding: 10px 14px;
                border-left: 3px solid {colors.danger};
                border-radius: 6px;
                background: {colors.bg_card};
                color: {colors.text_primary};
                box-shadow: 0 6px 18px rgba(0, 0, 0, 0.18);
                font-size: 13px;
            ",
            span { style: "flex: 1;", "{notification.message}" }
            button {
                title: "Dismiss",
                style: "border: none; background: transparent; cursor: pointer; color: {colors.text_muted};",
                onclick: move |_| state.dispatch(Gesture::DismissNotification(id)),
                "✕"
            }
        }
    }
}
