use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::i18n::{translate, translate_with, Locale};
use crate::theme::{ThemeColor, UiConfig};

pub const UI_CONFIG_KEY: &str = "ui_config";

/// Color mode and locale shared by every component under [`App`](super::App).
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    config: Signal<UiConfig>,
    set_config: WriteSignal<UiConfig>,
}

impl UiContext {
    pub fn config(&self) -> UiConfig {
        self.config.get()
    }

    pub fn color(&self, color: ThemeColor) -> &'static str {
        self.config.get().color(color)
    }

    pub fn t(&self, key: &str) -> String {
        translate(self.config.get().locale, key)
    }

    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        translate_with(self.config.get().locale, key, params)
    }

    pub fn toggle_color_mode(&self) {
        let next = self.config.get_untracked().with_toggled_color_mode();
        log::debug!("color mode -> {}", next.color_mode);
        self.set_config.set(next);
    }

    pub fn set_locale(&self, locale: Locale) {
        let next = self.config.get_untracked().with_locale(locale);
        log::debug!("locale -> {locale}");
        self.set_config.set(next);
    }
}

pub fn provide_ui_context() -> UiContext {
    // The server always renders the default config, so the stored value is
    // applied only once hydration is done.
    #[cfg(feature = "hydrate")]
    let (config, set_config, _) = use_local_storage_with_options::<UiConfig, JsonSerdeWasmCodec>(
        UI_CONFIG_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );

    #[cfg(not(feature = "hydrate"))]
    let (config, set_config) = {
        let (config, set_config) = signal(UiConfig::default());
        (Signal::from(config), set_config)
    };

    let ctx = UiContext { config, set_config };
    provide_context(ctx);
    ctx
}

pub fn use_ui() -> UiContext {
    expect_context::<UiContext>()
}
