use leptos::prelude::*;
use leptos_meta::Title;

use super::{context::use_ui, surface::Surface};
use crate::style::SurfaceStyle;
use crate::theme::ThemeColor;

const IMG_HEIGHT: &str = "min(40vw, 300px)";

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = use_ui();
    let (cta_hovered, set_cta_hovered) = signal(false);
    let offset = format!("calc({IMG_HEIGHT} / 2)");
    let appearance = SurfaceStyle {
        padding_x: Some(24),
        padding_y: Some(24),
        margin_top: Some(48),
        max_width: Some(800),
        radius: Some(32),
        ..SurfaceStyle::default()
    };
    let highlight = move || ui.color(ThemeColor::Primary500);
    let translate = format!("translateY({offset})");
    let padding_bottom = offset.clone();

    view! {
        <Title text="Home" />
        <div style:padding-bottom=padding_bottom>
            <div style:transform=translate class="transition-transform duration-[400ms]">
                <Surface appearance class="relative mx-auto">
                    <img
                        class="absolute left-1/2 -translate-x-1/2 -translate-y-1/2 rounded-[48px] transition-transform duration-[400ms]"
                        style:height=IMG_HEIGHT
                        src="/pfp.jpg"
                        alt="Me using a hoodie, with messy hair and looking to the right"
                    />
                    <div class="flex flex-col" style:margin-top=offset.clone()>
                        <div class="flex flex-col text-center my-6">
                            <h1 class="text-2xl font-bold">
                                <span aria-hidden="true">"👋"</span>
                                " Hey there!"
                            </h1>
                            <h1 class="text-[32px] font-bold">
                                "I'm " <span style:color=highlight>"Richard"</span> "."
                            </h1>
                        </div>
                        <div class="flex flex-col text-center my-6 gap-4">
                            <h1 class="text-2xl font-bold leading-9">
                                "I'm a " <span style:color=highlight>"software developer"</span>
                                " with around 3 years of experience with Node, React, Vue and Express."
                            </h1>
                            <a
                                href="/projects"
                                class="self-center rounded-md px-4 py-2 font-semibold text-black transition-colors"
                                style:background-color=move || {
                                    if cta_hovered.get() {
                                        ui.color(ThemeColor::Primary300)
                                    } else {
                                        highlight()
                                    }
                                }
                                on:mouseenter=move |_| set_cta_hovered.set(true)
                                on:mouseleave=move |_| set_cta_hovered.set(false)
                            >
                                "Show me the projects"
                            </a>
                        </div>
                        <div
                            class="flex flex-col text-justify indent-8 leading-7"
                            style:color=move || ui.color(ThemeColor::Text800)
                        >
                            <p>
                                "I started learning programming around 2013, learning Javascript with ProcessingJS (a graphics library), and basic C for competitive programming. Since then I've moved mainly to C++ in competitive programming, and Typescript with Node and React for web development."
                            </p>
                            <p>
                                "I am passionate about development because I like learning and creating new things from the ground up. Translating ideas to a crazy fast logic-powered machine and seeing it understand me? WHAT. SIGN ME UP!!"
                            </p>
                        </div>
                    </div>
                </Surface>
            </div>
        </div>
    }
}
