use std::fmt::Write;

use crate::theme::{ColorMode, ThemeColor};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width_px: u32,
    pub color: ThemeColor,
}

/// Recognized visual options for a themed surface container.
/// Sizes are in pixels; `None` leaves the property to the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceStyle {
    pub padding_x: Option<u32>,
    pub padding_y: Option<u32>,
    pub margin_top: Option<u32>,
    pub max_width: Option<u32>,
    pub radius: Option<u32>,
    /// Overrides the top-right corner only, used to dock a label onto a card.
    pub radius_top_right: Option<u32>,
    pub border: Option<Border>,
    pub border_left: Option<Border>,
    pub background: Option<ThemeColor>,
    pub text: Option<ThemeColor>,
}

impl SurfaceStyle {
    pub fn padding(self, x: u32, y: u32) -> Self {
        Self {
            padding_x: Some(x),
            padding_y: Some(y),
            ..self
        }
    }

    pub fn radius(self, px: u32) -> Self {
        Self {
            radius: Some(px),
            ..self
        }
    }

    pub fn border(self, width_px: u32, color: ThemeColor) -> Self {
        Self {
            border: Some(Border { width_px, color }),
            ..self
        }
    }

    pub fn background(self, color: ThemeColor) -> Self {
        Self {
            background: Some(color),
            ..self
        }
    }

    pub fn to_css(&self, mode: ColorMode) -> String {
        let bg = self.background.unwrap_or(ThemeColor::SurfaceBg);
        let text = self.text.unwrap_or(ThemeColor::SurfaceText);
        let mut css = format!(
            "background-color: {}; color: {};",
            bg.resolve(mode),
            text.resolve(mode)
        );
        // writing to a String can't fail
        if let Some(y) = self.padding_y {
            let _ = write!(css, " padding-top: {y}px; padding-bottom: {y}px;");
        }
        if let Some(x) = self.padding_x {
            let _ = write!(css, " padding-left: {x}px; padding-right: {x}px;");
        }
        if let Some(m) = self.margin_top {
            let _ = write!(css, " margin-top: {m}px;");
        }
        if let Some(w) = self.max_width {
            let _ = write!(css, " max-width: {w}px;");
        }
        if let Some(r) = self.radius {
            let _ = write!(css, " border-radius: {r}px;");
        }
        if let Some(r) = self.radius_top_right {
            let _ = write!(css, " border-top-right-radius: {r}px;");
        }
        if let Some(b) = self.border {
            let _ = write!(
                css,
                " border: {}px solid {};",
                b.width_px,
                b.color.resolve(mode)
            );
        }
        if let Some(b) = self.border_left {
            let _ = write!(
                css,
                " border-left: {}px solid {};",
                b.width_px,
                b.color.resolve(mode)
            );
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_only_sets_themed_colors() {
        assert_eq!(
            SurfaceStyle::default().to_css(ColorMode::Dark),
            "background-color: #15151a; color: #f1f1f3;"
        );
        assert_eq!(
            SurfaceStyle::default().to_css(ColorMode::Light),
            "background-color: #ffffff; color: #18181b;"
        );
    }

    #[test]
    fn builder_options_are_emitted() {
        let css = SurfaceStyle::default()
            .padding(32, 16)
            .radius(16)
            .border(2, ThemeColor::SelectBorder)
            .to_css(ColorMode::Light);
        assert!(css.contains("padding-top: 16px; padding-bottom: 16px;"));
        assert!(css.contains("padding-left: 32px; padding-right: 32px;"));
        assert!(css.contains("border-radius: 16px;"));
        assert!(css.ends_with("border: 2px solid #2b2b2b;"));
    }

    #[test]
    fn explicit_background_overrides_surface_default() {
        let css = SurfaceStyle::default()
            .background(ThemeColor::Bg500)
            .to_css(ColorMode::Dark);
        assert!(css.starts_with("background-color: #2a2a33;"));
    }

    #[test]
    fn top_right_radius_follows_general_radius() {
        let style = SurfaceStyle {
            radius_top_right: Some(0),
            ..SurfaceStyle::default().radius(16)
        };
        let css = style.to_css(ColorMode::Dark);
        let general = css.find("border-radius: 16px").expect("radius should be set");
        let corner = css
            .find("border-top-right-radius: 0px")
            .expect("corner should be set");
        assert!(general < corner);
    }
}
