/// Anything that can produce a standalone inline SVG at a requested pixel size.
///
/// Colors are expressed as `currentColor` unless the icon is a brand mark, so
/// callers tint icons through the surrounding text color.
pub trait Renderable: Sync {
    fn markup(&self, size: u32) -> String;
}

fn svg(size: u32, view_box: &str, body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="{view_box}" aria-hidden="true">{body}</svg>"#
    )
}

pub struct ReactLogo;

impl Renderable for ReactLogo {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "-11.5 -10.23 23 20.46",
            concat!(
                r##"<circle r="2.05" fill="#61dafb"/>"##,
                r##"<g stroke="#61dafb" stroke-width="1" fill="none">"##,
                r#"<ellipse rx="11" ry="4.2"/>"#,
                r#"<ellipse rx="11" ry="4.2" transform="rotate(60)"/>"#,
                r#"<ellipse rx="11" ry="4.2" transform="rotate(120)"/>"#,
                "</g>"
            ),
        )
    }
}

pub struct NodeLogo;

impl Renderable for NodeLogo {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 32 32",
            concat!(
                r##"<path d="M16 2 28 9v14l-12 7-12-7V9z" fill="#539e43"/>"##,
                r##"<path d="M13 11v10M13 11l6 10M19 11v10" stroke="#fff" stroke-width="2" fill="none" stroke-linecap="round"/>"##
            ),
        )
    }
}

pub struct NextLogo;

impl Renderable for NextLogo {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 32 32",
            concat!(
                r#"<circle cx="16" cy="16" r="15" fill="currentColor"/>"#,
                r##"<path d="M11 22V10l11 14M21 10v8" stroke="#808080" stroke-width="2" fill="none" stroke-linecap="round"/>"##
            ),
        )
    }
}

pub struct RustLogo;

impl Renderable for RustLogo {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 32 32",
            concat!(
                r#"<circle cx="16" cy="16" r="13" stroke="currentColor" stroke-width="3" stroke-dasharray="3 2" fill="none"/>"#,
                r#"<path d="M11 22V10h6a3 3 0 0 1 0 6h-6m6 0 4 6" stroke="currentColor" stroke-width="2.5" fill="none" stroke-linejoin="round"/>"#
            ),
        )
    }
}

pub struct LeptosLogo;

impl Renderable for LeptosLogo {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 32 32",
            concat!(
                r##"<path d="M4 24c6-2 10-8 12-16 2 8 6 14 12 16" stroke="#ef3939" stroke-width="3" fill="none" stroke-linecap="round"/>"##,
                r##"<circle cx="16" cy="24" r="3" fill="#181139"/>"##
            ),
        )
    }
}

pub struct HandPalm;

impl Renderable for HandPalm {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 256 256",
            concat!(
                r#"<g fill="none" stroke="currentColor" stroke-width="16" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M168 132V60a20 20 0 0 1 40 0v92a80 80 0 0 1-160 0v-32a20 20 0 0 1 40 0"/>"#,
                r#"<path d="M128 124V44a20 20 0 0 1 40 0v80"/>"#,
                r#"<path d="M88 132V60a20 20 0 0 1 40 0v64"/>"#,
                "</g>"
            ),
        )
    }
}

pub struct Handshake;

impl Renderable for Handshake {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 256 256",
            concat!(
                r#"<g fill="none" stroke="currentColor" stroke-width="16" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M200 152l-40 40-64-16-56-40"/>"#,
                r#"<path d="M72 72 128 56l56 16 44 0v72h-28"/>"#,
                r#"<path d="M28 72h44v64H28z"/>"#,
                r#"<path d="M160 80l-48 48a20 20 0 0 0 28 28l20-20"/>"#,
                "</g>"
            ),
        )
    }
}

pub struct CloseX;

impl Renderable for CloseX {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 256 256",
            r#"<path d="M200 56 56 200M200 200 56 56" stroke="currentColor" stroke-width="16" stroke-linecap="round"/>"#,
        )
    }
}

pub struct MoonStars;

impl Renderable for MoonStars {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 256 256",
            concat!(
                r#"<path d="M216 144A88 88 0 1 1 112 40a72 72 0 0 0 104 104z" fill="currentColor"/>"#,
                r#"<path d="M192 40v48M168 64h48" stroke="currentColor" stroke-width="16" stroke-linecap="round"/>"#
            ),
        )
    }
}

pub struct SunHorizon;

impl Renderable for SunHorizon {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 256 256",
            concat!(
                r#"<path d="M68 160a60 60 0 0 1 120 0z" fill="currentColor"/>"#,
                r#"<path d="M16 160h224M128 40v24M48 80l16 16M208 80l-16 16M40 200h176" stroke="currentColor" stroke-width="16" stroke-linecap="round"/>"#
            ),
        )
    }
}

pub struct List;

impl Renderable for List {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 256 256",
            r#"<path d="M40 64h176M40 128h176M40 192h176" stroke="currentColor" stroke-width="16" stroke-linecap="round"/>"#,
        )
    }
}

pub struct Envelope;

impl Renderable for Envelope {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 256 256",
            r#"<path d="M32 56h192v144H32zM32 56l96 88 96-88" fill="none" stroke="currentColor" stroke-width="16" stroke-linejoin="round"/>"#,
        )
    }
}

pub struct GithubLogo;

impl Renderable for GithubLogo {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 256 256",
            concat!(
                r#"<g fill="none" stroke="currentColor" stroke-width="16" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M84 240v-32a36 36 0 0 1 8-24c-36-4-64-20-64-64a56 56 0 0 1 12-36 52 52 0 0 1 4-36s16-4 44 16a152 152 0 0 1 80 0c28-20 44-16 44-16a52 52 0 0 1 4 36 56 56 0 0 1 12 36c0 44-28 60-64 64a36 36 0 0 1 8 24v32"/>"#,
                r#"<path d="M84 208c-32 0-36-28-52-32"/>"#,
                "</g>"
            ),
        )
    }
}

pub struct LinkedinLogo;

impl Renderable for LinkedinLogo {
    fn markup(&self, size: u32) -> String {
        svg(
            size,
            "0 0 256 256",
            concat!(
                r#"<rect x="32" y="32" width="192" height="192" rx="16" fill="none" stroke="currentColor" stroke-width="16"/>"#,
                r#"<path d="M88 120v56M120 176v-56M120 144a28 28 0 0 1 56 0v32" fill="none" stroke="currentColor" stroke-width="16" stroke-linecap="round"/>"#,
                r#"<circle cx="88" cy="84" r="12" fill="currentColor"/>"#
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_carries_requested_size() {
        let icons: [&dyn Renderable; 4] = [&ReactLogo, &HandPalm, &CloseX, &SunHorizon];
        for icon in icons {
            let m = icon.markup(36);
            assert!(m.starts_with("<svg"));
            assert!(m.ends_with("</svg>"));
            assert!(m.contains(r#"width="36""#));
            assert!(m.contains(r#"height="36""#));
        }
    }

    #[test]
    fn ui_icons_follow_text_color() {
        let icons: [&dyn Renderable; 4] = [&CloseX, &MoonStars, &List, &Handshake];
        for icon in icons {
            assert!(icon.markup(24).contains("currentColor"));
        }
    }

    #[test]
    fn icons_are_hidden_from_screen_readers() {
        assert!(NodeLogo.markup(32).contains(r#"aria-hidden="true""#));
    }
}
