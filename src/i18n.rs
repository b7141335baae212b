use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, LazyLock},
};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Self::EnUs, Self::PtBr, Self::EsEs];
    pub const FALLBACK: Locale = Self::EnUs;

    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::PtBr => "pt-BR",
            Self::EsEs => "es-ES",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| SiteError::UnknownLocale(s.to_string()))
    }
}

#[derive(Embed)]
#[folder = "locales"]
struct LocaleAssets;

type Catalog = HashMap<String, String>;

static GLOBAL_CATALOG_CACHE: LazyLock<DashMap<Locale, Arc<Catalog>>> =
    LazyLock::new(DashMap::new);

fn flatten(prefix: &str, value: &Value, out: &mut Catalog) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

fn catalog(locale: Locale) -> Result<Arc<Catalog>, SiteError> {
    let cache = &*GLOBAL_CATALOG_CACHE;
    if let Some(c) = cache.get(&locale) {
        return Ok(c.clone());
    }
    let file = LocaleAssets::get(&format!("{}.json", locale.code()))
        .ok_or(SiteError::CatalogUnavailable(locale.code()))?;
    let value = serde_json::from_slice::<Value>(&file.data)
        .map_err(|_| SiteError::CatalogUnavailable(locale.code()))?;
    let mut flat = Catalog::new();
    flatten("", &value, &mut flat);
    let flat = Arc::new(flat);
    cache.insert(locale, flat.clone());
    Ok(flat)
}

fn lookup(locale: Locale, key: &str) -> Option<String> {
    match catalog(locale) {
        Ok(c) => c.get(key).cloned(),
        Err(e) => {
            log::error!("{e}");
            None
        }
    }
}

pub fn translate(locale: Locale, key: &str) -> String {
    translate_with(locale, key, &[])
}

/// Looks `key` up for `locale`, falling back to English and then to the key
/// itself. `{{name}}` placeholders are replaced from `params`.
pub fn translate_with(locale: Locale, key: &str, params: &[(&str, &str)]) -> String {
    let template = lookup(locale, key).or_else(|| {
        if locale == Locale::FALLBACK {
            return None;
        }
        log::warn!("missing {locale} translation for {key}");
        lookup(Locale::FALLBACK, key)
    });
    let Some(mut text) = template else {
        log::warn!("unknown translation key {key}");
        return key.to_string();
    };
    for (name, value) in params {
        text = text.replace(&format!("{{{{{name}}}}}"), value);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    // brand names are spelled the same in every language
    const UNTRANSLATED_KEYS: &[&str] = &["contact.github", "contact.linkedin"];

    #[test]
    fn every_catalog_has_the_same_keys() {
        let english = catalog(Locale::EnUs).expect("en-US catalog should load");
        let mut expected = english.keys().collect::<Vec<_>>();
        expected.sort();
        for locale in [Locale::PtBr, Locale::EsEs] {
            let other = catalog(locale).expect("catalog should load");
            let mut keys = other.keys().collect::<Vec<_>>();
            keys.sort();
            assert_eq!(keys, expected, "{locale}");
        }
    }

    #[test]
    fn switching_locale_translates_and_switching_back_restores() {
        let source = catalog(Locale::EnUs).expect("en-US catalog should load");
        let mut keys = source.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort();
        let english = keys
            .iter()
            .map(|k| translate(Locale::EnUs, k))
            .collect::<Vec<_>>();
        let portuguese = keys
            .iter()
            .map(|k| translate(Locale::PtBr, k))
            .collect::<Vec<_>>();
        for ((key, en), pt) in keys.iter().zip(&english).zip(&portuguese) {
            if UNTRANSLATED_KEYS.contains(key) {
                assert_eq!(en, pt, "{key}");
            } else {
                assert_ne!(en, pt, "{key}");
            }
        }
        assert_eq!(translate(Locale::PtBr, "sidebar.language"), "Idioma");
        let back = keys
            .iter()
            .map(|k| translate(Locale::EnUs, k))
            .collect::<Vec<_>>();
        assert_eq!(back, english);
    }

    #[test]
    fn interpolates_named_params() {
        let theme = translate(Locale::EsEs, "themeName.dark");
        assert_eq!(
            translate_with(
                Locale::EsEs,
                "sidebar.changeThemeButtonLabel",
                &[("theme", theme.as_str())]
            ),
            "Cambiar tema (actual: oscuro)"
        );
    }

    #[test]
    fn unknown_key_returns_key() {
        assert_eq!(translate(Locale::PtBr, "nope.missing"), "nope.missing");
    }

    #[test]
    fn parses_only_recognized_codes() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>(), Ok(locale));
        }
        assert_eq!(
            "fr-FR".parse::<Locale>(),
            Err(SiteError::UnknownLocale("fr-FR".to_string()))
        );
        assert!("en-us".parse::<Locale>().is_err());
    }

    #[test]
    fn flatten_joins_nested_keys() {
        let value = serde_json::json!({ "a": { "b": "x", "c": { "d": "y" } }, "n": 3 });
        let mut out = Catalog::new();
        flatten("", &value, &mut out);
        assert_eq!(out.get("a.b").map(String::as_str), Some("x"));
        assert_eq!(out.get("a.c.d").map(String::as_str), Some("y"));
        assert_eq!(out.get("n").map(String::as_str), Some("3"));
    }
}
