use leptos::prelude::*;

use super::{context::use_ui, surface::Surface};
use crate::data::find_tech;
use crate::icons::Renderable;
use crate::style::SurfaceStyle;
use crate::theme::ThemeColor;

#[component]
pub fn Icon(
    icon: &'static dyn Renderable,
    #[prop(default = 32)] size: u32,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! { <span class=format!("inline-flex {class}") inner_html=icon.markup(size)></span> }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Top,
    Left,
}

impl Placement {
    fn class(self) -> &'static str {
        match self {
            Self::Top => "bottom-full left-1/2 -translate-x-1/2 mb-2",
            Self::Left => "right-full top-1/2 -translate-y-1/2 mr-2",
        }
    }
}

#[component]
pub fn CustomTooltip(
    #[prop(into)] label: Signal<String>,
    #[prop(optional)] placement: Placement,
    children: Children,
) -> impl IntoView {
    let ui = use_ui();
    view! {
        <span class="relative inline-flex group">
            {children()}
            <span
                role="tooltip"
                class=format!(
                    "pointer-events-none absolute z-10 whitespace-nowrap rounded-md px-2 py-1 text-sm opacity-0 group-hover:opacity-100 transition-opacity {}",
                    placement.class(),
                )
                style:background-color=move || ui.color(ThemeColor::Text800)
                style:color=move || ui.color(ThemeColor::Bg800)
            >
                {move || label.get()}
            </span>
        </span>
    }
}

#[component]
pub fn TechLogo(tag_name: &'static str) -> impl IntoView {
    let Some(tech) = find_tech(tag_name) else {
        log::warn!("no tech registered for tag {tag_name}");
        return None;
    };
    Some(view! {
        <CustomTooltip label=tech.name.to_string()>
            <Icon icon=tech.component size=32 />
            <span class="sr-only">{tech.name}</span>
        </CustomTooltip>
    })
}

#[component]
pub fn ContactInfoCard(
    icon: &'static dyn Renderable,
    #[prop(into)] title: Signal<String>,
    children: Children,
) -> impl IntoView {
    let ui = use_ui();
    let appearance = SurfaceStyle::default().padding(32, 16).radius(16);
    view! {
        <Surface
            appearance
            class="flex flex-col justify-center items-center w-full transition-transform duration-[400ms] hover:scale-[0.97]"
        >
            <span style:color=move || ui.color(ThemeColor::Primary500)>
                <Icon icon size=36 />
            </span>
            <h2 class="text-base font-bold" style:color=move || ui.color(ThemeColor::SurfaceText)>
                {move || title.get()}
            </h2>
            <div class="text-center text-sm mt-2 leading-6">{children()}</div>
        </Surface>
    }
}
