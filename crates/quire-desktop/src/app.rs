//! Main application component

use dioxus::prelude::*;

use crate::state::{AppState, Startup};
use crate::theme::{resolve_theme, ResolvedTheme};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let (synchronizer, theme) = use_hook(|| {
        let startup = consume_context::<Startup>();
        (
            Signal::new(startup.synchronizer),
            Signal::new(resolve_theme(startup.theme)),
        )
    });
    let sidebar_open = use_signal(|| false);

    use_context_provider(|| AppState {
        synchronizer,
        theme,
        sidebar_open,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let theme_attr = match current_theme {
        ResolvedTheme::Light => "light",
        ResolvedTheme::Dark => "dark",
    };

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                margin: 0;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
