use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{
    context::use_ui,
    leaf::{CustomTooltip, Icon, Placement},
    project_card::{CardMode, ProjectCard},
    surface::Surface,
};
use crate::data::{order_for_path, Project, PROJECTS};
use crate::i18n::Locale;
use crate::icons::{CloseX, MoonStars, Renderable, SunHorizon};
use crate::style::{Border, SurfaceStyle};
use crate::theme::{ColorMode, ThemeColor};

/// Slide-over panel with theme and language controls and the quick-switch list.
///
/// Mounting is up to the caller; `open` only fades the close button.
#[component]
pub fn Sidebar(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let ui = use_ui();
    let pathname = use_location().pathname;
    let (select_hovered, set_select_hovered) = signal(false);

    let close_label = Signal::derive(move || ui.t("sidebar.closeButtonLabel"));
    let theme_label = Signal::derive(move || {
        let theme = ui.t(&format!("themeName.{}", ui.config().color_mode));
        ui.t_with("sidebar.changeThemeButtonLabel", &[("theme", theme.as_str())])
    });

    let appearance = SurfaceStyle {
        border_left: Some(Border {
            width_px: 1,
            color: ThemeColor::Border500,
        }),
        ..SurfaceStyle::default()
    };

    view! {
        <Surface
            appearance
            class="flex flex-col relative gap-4 shrink-0 p-4 w-[min(90dvw,400px)] h-dvh overflow-y-auto"
        >
            <div class="flex justify-between">
                <CustomTooltip label=close_label placement=Placement::Left>
                    <button
                        type="button"
                        class="transition-opacity duration-[400ms]"
                        aria-label=move || close_label.get()
                        style:color=move || ui.color(ThemeColor::Primary500)
                        style:opacity=move || if open.get() { "1" } else { "0" }
                        on:click=move |_| on_close.run(())
                    >
                        <Icon icon=&CloseX size=36 />
                    </button>
                </CustomTooltip>
                <div class="flex flex-col items-end">
                    <div class="flex items-center gap-2" aria-hidden="true">
                        <span>{move || ui.t("sidebar.theme")}</span>
                        <CustomTooltip label=theme_label placement=Placement::Left>
                            <button
                                type="button"
                                aria-label=move || theme_label.get()
                                style:color=move || ui.color(ThemeColor::Primary500)
                                on:click=move |_| ui.toggle_color_mode()
                            >
                                {move || {
                                    let icon: &'static dyn Renderable = match ui.config().color_mode {
                                        ColorMode::Dark => &SunHorizon,
                                        ColorMode::Light => &MoonStars,
                                    };
                                    view! { <Icon icon size=36 /> }
                                }}
                            </button>
                        </CustomTooltip>
                    </div>
                    <label class="flex gap-2 items-center">
                        {move || ui.t("sidebar.language")}
                        <select
                            class="rounded-md border bg-transparent px-2 py-1"
                            prop:value=move || ui.config().locale.code()
                            style:border-color=move || {
                                if select_hovered.get() {
                                    ui.color(ThemeColor::Primary500)
                                } else {
                                    ui.color(ThemeColor::SelectBorder)
                                }
                            }
                            on:mouseenter=move |_| set_select_hovered.set(true)
                            on:mouseleave=move |_| set_select_hovered.set(false)
                            on:change=move |ev| {
                                match event_target_value(&ev).parse::<Locale>() {
                                    Ok(locale) => ui.set_locale(locale),
                                    Err(e) => log::warn!("{e}"),
                                }
                            }
                        >
                            {Locale::ALL
                                .into_iter()
                                .map(|locale| {
                                    view! {
                                        <option
                                            value=locale.code()
                                            selected=move || ui.config().locale == locale
                                        >
                                            {locale.code()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </div>
            </div>
            <hr style:border-color=move || ui.color(ThemeColor::Border500) />
            <div class="flex flex-col items-end text-right gap-2">
                <h2
                    class="text-2xl font-bold uppercase"
                    style:color=move || ui.color(ThemeColor::Primary500)
                >
                    {move || ui.t("quickSwitch.title")}
                </h2>
                <h3
                    class="text-sm font-bold max-w-[90%]"
                    style:color=move || ui.color(ThemeColor::Text800)
                >
                    {move || ui.t("quickSwitch.description")}
                </h3>
                <div class="flex gap-2">
                    <For
                        each=move || order_for_path(PROJECTS, &pathname.get())
                        key=|project| project.id
                        children=move |project: &'static Project| {
                            view! { <ProjectCard project mode=CardMode::QuickSwitch /> }
                        }
                    />
                </div>
            </div>
        </Surface>
    }
}
