mod context;
mod header;
mod homepage;
mod leaf;
mod project_card;
mod projects;
mod sidebar;
mod surface;

pub use context::{provide_ui_context, use_ui, UiContext};
pub use project_card::{CardMode, ProjectCard};
pub use sidebar::Sidebar;
pub use surface::Surface;

use header::{Footer, Header};
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};
use projects::{ContactPage, NotFound, ProjectPage, ProjectsPage};

use crate::theme::ThemeColor;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en-US">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let ui = provide_ui_context();

    view! {
        <Html
            {..}
            lang=move || ui.config().locale.code()
            data-theme=move || ui.config().color_mode.as_str()
        />
        <Title formatter=|title| format!("Richard - {title}") />

        <Router>
            <Layout />
        </Router>
    }
}

#[component]
fn Layout() -> impl IntoView {
    let ui = use_ui();
    let (sidebar_open, set_sidebar_open) = signal(false);
    let pathname = use_location().pathname;

    // quick-switch navigation closes the panel
    Effect::watch(
        move || pathname.track(),
        move |_, _, _| set_sidebar_open.set(false),
        false,
    );

    let on_open = Callback::new(move |_: ()| set_sidebar_open.set(true));
    let on_close = Callback::new(move |_: ()| set_sidebar_open.set(false));

    view! {
        <div
            class="flex flex-col min-h-screen transition-colors duration-300"
            style:background-color=move || ui.color(ThemeColor::Bg800)
            style:color=move || ui.color(ThemeColor::SurfaceText)
        >
            <Header on_open />
            <div
                class="fixed inset-0 z-30 bg-black/50 transition-opacity duration-300"
                class:pointer-events-none=move || !sidebar_open.get()
                style:opacity=move || if sidebar_open.get() { "1" } else { "0" }
                on:click=move |_| set_sidebar_open.set(false)
            ></div>
            <aside
                class="fixed top-0 right-0 z-40 transition-transform duration-[400ms]"
                style:transform=move || {
                    if sidebar_open.get() { "translateX(0)" } else { "translateX(100%)" }
                }
                aria-hidden=move || (!sidebar_open.get()).to_string()
            >
                <Sidebar open=sidebar_open on_close />
            </aside>
            <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-7xl">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/project/:slug") view=ProjectPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </div>
    }
}
