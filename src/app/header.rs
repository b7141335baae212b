use leptos::prelude::*;
use leptos_router::components::A;

use super::{context::use_ui, leaf::Icon};
use crate::icons::List;
use crate::theme::ThemeColor;

const NAV_LINKS: [(&str, &str); 3] = [
    ("/", "nav.home"),
    ("/projects", "nav.projects"),
    ("/contact", "nav.contact"),
];

#[component]
pub fn Header(on_open: Callback<()>) -> impl IntoView {
    let ui = use_ui();
    view! {
        <header
            class="sticky top-0 z-20 shadow-lg"
            style:background-color=move || ui.color(ThemeColor::Bg800)
        >
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <A href="/" attr:class="text-2xl font-bold">
                    <span style:color=move || ui.color(ThemeColor::Primary500)>"richard"</span>
                    ".dev"
                </A>
                <nav class="flex items-center gap-6">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, key)| {
                            view! {
                                <A href=href attr:class="hover:underline underline-offset-4">
                                    {move || ui.t(key)}
                                </A>
                            }
                        })
                        .collect_view()}
                    <button
                        type="button"
                        aria-label=move || ui.t("sidebar.openButtonLabel")
                        style:color=move || ui.color(ThemeColor::Primary500)
                        on:click=move |_| on_open.run(())
                    >
                        <Icon icon=&List size=32 />
                    </button>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let ui = use_ui();
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    view! {
        <footer class="py-6 text-center text-sm" style:color=move || ui.color(ThemeColor::Text800)>
            {move || ui.t_with("footer.builtAt", &[("date", built.as_str())])}
        </footer>
    }
}
