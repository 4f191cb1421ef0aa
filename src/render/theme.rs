use crate::models::Theme;

use super::RenderMode;

/// Fixed colours for one theme.
#[derive(Debug, PartialEq, Eq)]
pub struct ThemeStyle {
    pub theme: Theme,
    pub background: &'static str,
    pub foreground: &'static str,
    /// Only drawn around miniature previews.
    pub preview_border: Option<&'static str>,
}

static NAVY: ThemeStyle = ThemeStyle {
    theme: Theme::Navy,
    background: "linear-gradient(135deg, #0f172a, #334155)",
    foreground: "#ffffff",
    preview_border: None,
};

static MODERN: ThemeStyle = ThemeStyle {
    theme: Theme::Modern,
    background: "linear-gradient(135deg, #2563eb, #60a5fa)",
    foreground: "#ffffff",
    preview_border: None,
};

static MINIMAL: ThemeStyle = ThemeStyle {
    theme: Theme::Minimal,
    background: "#ffffff",
    foreground: "#0f172a",
    preview_border: Some("2px solid #e2e8f0"),
};

static DARK: ThemeStyle = ThemeStyle {
    theme: Theme::Dark,
    background: "#020617",
    foreground: "#ffffff",
    preview_border: None,
};

impl ThemeStyle {
    pub fn for_theme(theme: Theme) -> &'static ThemeStyle {
        match theme {
            Theme::Navy => &NAVY,
            Theme::Modern => &MODERN,
            Theme::Minimal => &MINIMAL,
            Theme::Dark => &DARK,
        }
    }

    /// Style bundle for a stored theme tag; unknown tags get navy.
    pub fn for_tag(tag: &str) -> &'static ThemeStyle {
        Self::for_theme(Theme::resolve(tag))
    }

    /// Inline CSS for the slide surface.
    pub fn css(&self, mode: RenderMode) -> String {
        let mut css = format!("background: {}; color: {};", self.background, self.foreground);
        if let (RenderMode::Preview, Some(border)) = (mode, self.preview_border) {
            css.push_str(" border: ");
            css.push_str(border);
            css.push(';');
        }
        css
    }
}
