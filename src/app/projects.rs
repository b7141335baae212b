use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{
    components::A,
    hooks::{use_location, use_params_map},
};

use super::{
    context::use_ui,
    leaf::{ContactInfoCard, Icon},
    project_card::{CardMode, ProjectCard},
    surface::Surface,
};
use crate::data::{find_project, order_for_path, Project, CONTACTS, PROJECTS};
use crate::icons::{HandPalm, Handshake, Renderable};
use crate::style::SurfaceStyle;
use crate::theme::ThemeColor;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ui = use_ui();
    let pathname = use_location().pathname;
    view! {
        <Title text="Projects" />
        <div class="max-w-6xl mx-auto w-full px-4">
            <h1
                class="text-3xl font-bold uppercase mt-8"
                style:color=move || ui.color(ThemeColor::Primary500)
            >
                {move || ui.t("projectsPage.title")}
            </h1>
            <p class="mb-8" style:color=move || ui.color(ThemeColor::Text800)>
                {move || ui.t("projectsPage.description")}
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || order_for_path(PROJECTS, &pathname.get())
                    key=|project| project.id
                    children=move |project: &'static Project| {
                        view! { <ProjectCard project mode=CardMode::ProjectList /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        match find_project(&slug).filter(|p| !p.is_meta) {
            Some(project) => Either::Left(view! { <ProjectDetails project /> }),
            None => {
                log::debug!("no project for slug {slug}");
                Either::Right(view! { <NotFound /> })
            }
        }
    }
}

#[component]
fn ProjectDetails(project: &'static Project) -> impl IntoView {
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
    let appearance = SurfaceStyle::default()
        .padding(32, 24)
        .radius(16)
        .border(2, ThemeColor::Text800);
    view! {
        <Title text=project.name />
        <div class="max-w-4xl mx-auto w-full px-4 my-8">
            <Surface appearance class="flex flex-col gap-6">
                <h1
                    class="text-3xl font-bold text-center"
                    style:color=move || ui.color(ThemeColor::Primary500)
                >
                    {project.name}
                </h1>
                <img class="rounded-lg" src=project.img_src alt=project.img_alt />
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div class="flex items-center gap-4">
                        <span>{move || ui.t("projectPage.builtWith")}</span>
                        {project
                            .techs()
                            .map(|tech| {
                                view! {
                                    <span class="inline-flex items-center gap-1">
                                        <Icon icon=tech.component size=24 />
                                        {tech.name}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center gap-2">
                        <Icon icon=collaboration_icon size=24 />
                        <span>{move || ui.t(collaboration_key)}</span>
                    </div>
                </div>
                <a
                    class="self-center underline underline-offset-4"
                    href=project.github_link
                    target="_blank"
                    rel="noopener noreferrer"
                    style:color=move || ui.color(ThemeColor::Primary500)
                >
                    {move || ui.t("projectPage.viewSource")}
                </a>
            </Surface>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let ui = use_ui();
    view! {
        <Title text="Contact" />
        <div class="max-w-4xl mx-auto w-full px-4">
            <h1
                class="text-3xl font-bold text-center uppercase my-8"
                style:color=move || ui.color(ThemeColor::Primary500)
            >
                {move || ui.t("contact.title")}
            </h1>
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                {CONTACTS
                    .iter()
                    .map(|contact| {
                        let title = Signal::derive(move || ui.t(contact.title_key));
                        view! {
                            <ContactInfoCard icon=contact.icon title>
                                <a
                                    href=contact.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:underline"
                                >
                                    {contact.label}
                                </a>
                            </ContactInfoCard>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    let ui = use_ui();
    view! {
        <Title text="404" />
        <div class="flex flex-col items-center gap-4 my-16">
            <h1 class="text-3xl font-bold">{move || ui.t("notFound.title")}</h1>
            <A href="/" attr:class="underline underline-offset-4">
                {move || ui.t("notFound.backHome")}
            </A>
        </div>
    }
}
