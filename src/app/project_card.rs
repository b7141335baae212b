use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
    NavigateOptions,
};

use super::{
    context::use_ui,
    leaf::{CustomTooltip, Icon, TechLogo},
    surface::Surface,
};
use crate::data::Project;
use crate::icons::{HandPalm, Handshake, Renderable};
use crate::style::{Border, SurfaceStyle};
use crate::theme::ThemeColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    /// Compact card inside the sidebar.
    QuickSwitch,
    ProjectList,
}

#[component]
pub fn ProjectCard(project: &'static Project, mode: CardMode) -> impl IntoView {
    let ui = use_ui();
    let pathname = use_location().pathname;
    let is_active = Memo::new(move |_| project.is_active(&pathname.get()));
    let (hovered, set_hovered) = signal(false);
    let quick = mode == CardMode::QuickSwitch;

    let appearance = Signal::derive(move || {
        let docked = quick && is_active.get();
        let border = if docked || hovered.get() {
            ThemeColor::Primary500
        } else {
            ThemeColor::Text800
        };
        SurfaceStyle {
            radius: Some(16),
            radius_top_right: Some(if docked { 0 } else { 16 }),
            border: Some(Border {
                width_px: 2,
                color: border,
            }),
            background: Some(if quick {
                ThemeColor::Bg500
            } else {
                ThemeColor::Bg800
            }),
            ..SurfaceStyle::default()
        }
    });

    let navigate = use_navigate();
    let on_click = move |_| {
        let path = pathname.get_untracked();
        if let Some(href) = project.navigation_target(&path) {
            navigate(href, NavigateOptions::default());
        }
    };

    view! {
        <div class="flex flex-col items-end h-full">
            {move || {
                (quick && is_active.get())
                    .then(|| {
                        view! {
                            <h2
                                class="px-2 pt-2 text-lg font-bold uppercase"
                                style:color=move || ui.color(ThemeColor::Bg800)
                                style:background-color=move || ui.color(ThemeColor::Primary500)
                            >
                                {move || ui.t("quickSwitch.youreHere")}
                            </h2>
                        }
                    })
            }}
            <div
                class="w-full h-full cursor-pointer"
                on:click=on_click
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
            >
                <Surface appearance class="flex flex-col w-full h-full">
                    <div class="p-8 pb-0 grow">
                        <A href=project.href>
                            <img src=project.img_src alt=project.img_alt />
                        </A>
                    </div>
                    <div class="flex flex-col p-4 gap-2">
                        <h2 class="text-center mt-2 text-lg font-bold">{project.name}</h2>
                        {(!quick).then(|| view! { <ProjectListDetails project /> })}
                    </div>
                </Surface>
            </div>
        </div>
    }
}

#[component]
fn ProjectListDetails(project: &'static Project) -> impl IntoView {
    let ui = use_ui();
    let collaboration_key = if project.is_solo {
        "projectCard.soloProject"
    } else {
        "projectCard.collaboration"
    };
    let collaboration_icon: &'static dyn Renderable = if project.is_solo {
        &HandPalm
    } else {
        &Handshake
    };
    let repo_label = Signal::derive(move || ui.t("projectCard.githubRepo"));
    let collaboration_label = Signal::derive(move || ui.t(collaboration_key));

    view! {
        <div class="flex justify-between items-center">
            <div class="flex gap-4">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <TechLogo tag_name=*tag /> })
                    .collect_view()}
            </div>
            <div class="flex gap-2">
                <CustomTooltip label=repo_label>
                    <a
                        href=project.github_link
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=move || repo_label.get()
                        on:click=|ev| ev.stop_propagation()
                    >
                        <img
                            class="w-8 hover:grayscale-[.4]"
                            src="/github-mark.svg"
                            alt="Github logo, Invertocat: a little cat in the middle of a circle, tail pointing left"
                        />
                    </a>
                </CustomTooltip>
                <CustomTooltip label=collaboration_label>
                    <span role="img" aria-label=move || collaboration_label.get()>
                        <Icon icon=collaboration_icon size=32 />
                    </span>
                </CustomTooltip>
            </div>
        </div>
    }
}
