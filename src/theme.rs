use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(SiteError::UnknownColorMode(other.to_string())),
        }
    }
}

/// Semantic color keys. Each resolves to a concrete value per color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Bg800,
    Bg500,
    Primary500,
    Primary300,
    Text800,
    Border500,
    SurfaceBg,
    SurfaceText,
    SelectBorder,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 9] = [
        Self::Bg800,
        Self::Bg500,
        Self::Primary500,
        Self::Primary300,
        Self::Text800,
        Self::Border500,
        Self::SurfaceBg,
        Self::SurfaceText,
        Self::SelectBorder,
    ];

    pub fn resolve(self, mode: ColorMode) -> &'static str {
        use ColorMode::*;
        match (self, mode) {
            (Self::Bg800, Light) => "#e8e8ec",
            (Self::Bg800, Dark) => "#1c1c22",
            (Self::Bg500, Light) => "#f4f4f6",
            (Self::Bg500, Dark) => "#2a2a33",
            (Self::Primary500, Light) => "#0b8f72",
            (Self::Primary500, Dark) => "#3fd1a9",
            (Self::Primary300, Light) => "#2fb493",
            (Self::Primary300, Dark) => "#7de3c6",
            (Self::Text800, Light) => "#3b3b45",
            (Self::Text800, Dark) => "#c4c4cc",
            (Self::Border500, Light) => "#c9c9d1",
            (Self::Border500, Dark) => "#3d3d48",
            (Self::SurfaceBg, Light) => "#ffffff",
            (Self::SurfaceBg, Dark) => "#15151a",
            (Self::SurfaceText, Light) => "#18181b",
            (Self::SurfaceText, Dark) => "#f1f1f3",
            (Self::SelectBorder, Light) => "#2b2b2b",
            (Self::SelectBorder, Dark) => "#e2e2e2",
        }
    }
}

/// UI-wide presentation state. Setters hand back an updated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiConfig {
    pub color_mode: ColorMode,
    pub locale: Locale,
}

impl UiConfig {
    pub fn with_color_mode(self, color_mode: ColorMode) -> Self {
        Self { color_mode, ..self }
    }

    pub fn with_toggled_color_mode(self) -> Self {
        self.with_color_mode(self.color_mode.toggled())
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    pub fn color(&self, color: ThemeColor) -> &'static str {
        color.resolve(self.color_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_every_color() {
        let start = UiConfig::default();
        let before = ThemeColor::ALL.map(|c| start.color(c));
        let once = start.with_toggled_color_mode();
        let twice = once.with_toggled_color_mode();
        assert_eq!(twice, start);
        assert_eq!(ThemeColor::ALL.map(|c| twice.color(c)), before);
    }

    #[test]
    fn toggling_changes_mode_and_keeps_locale() {
        let start = UiConfig::default().with_locale(Locale::PtBr);
        let toggled = start.with_toggled_color_mode();
        assert_eq!(toggled.color_mode, ColorMode::Light);
        assert_eq!(toggled.locale, Locale::PtBr);
        assert_ne!(
            toggled.color(ThemeColor::SurfaceBg),
            start.color(ThemeColor::SurfaceBg)
        );
    }

    #[test]
    fn select_border_matches_mode() {
        assert_eq!(ThemeColor::SelectBorder.resolve(ColorMode::Light), "#2b2b2b");
        assert_eq!(ThemeColor::SelectBorder.resolve(ColorMode::Dark), "#e2e2e2");
    }

    #[test]
    fn color_mode_parses_own_names() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(mode.as_str().parse::<ColorMode>(), Ok(mode));
        }
        assert_eq!(
            "sepia".parse::<ColorMode>(),
            Err(SiteError::UnknownColorMode("sepia".to_string()))
        );
    }

    #[test]
    fn first_render_config_is_dark_english() {
        let cfg = UiConfig::default();
        assert_eq!(cfg.color_mode, ColorMode::Dark);
        assert_eq!(cfg.locale, Locale::EnUs);
        assert_eq!(cfg.color(ThemeColor::SurfaceBg), "#15151a");
    }

    #[test]
    fn config_serializes_with_wire_names() {
        let cfg = UiConfig::default().with_locale(Locale::EsEs);
        let json = serde_json::to_string(&cfg).expect("config should serialize");
        assert_eq!(json, r#"{"color_mode":"dark","locale":"es-ES"}"#);
        let back: UiConfig = serde_json::from_str(&json).expect("config should deserialize");
        assert_eq!(back, cfg);
    }
}
