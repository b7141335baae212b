use leptos::prelude::*;

use super::context::use_ui;
use crate::style::SurfaceStyle;

/// Themed container. Background and text colors follow the active color mode.
#[component]
pub fn Surface(
    #[prop(into, default = Signal::stored(SurfaceStyle::default()))] appearance: Signal<SurfaceStyle>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ui = use_ui();
    view! {
        <div
            class=format!("transition-colors duration-300 {class}")
            style=move || appearance.get().to_css(ui.config().color_mode)
        >
            {children()}
        </div>
    }
}
