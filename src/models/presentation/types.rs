use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to presentations created from the list screen.
pub const DEFAULT_TITLE: &str = "Untitled Presentation";

/// Visual themes. Stored as a free-text tag; anything unrecognized renders
/// as `Navy`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Navy,
    Modern,
    Minimal,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Navy, Theme::Modern, Theme::Minimal, Theme::Dark];

    /// Resolve a stored tag. Never fails.
    pub fn resolve(tag: &str) -> Theme {
        match tag {
            "navy" => Theme::Navy,
            "modern" => Theme::Modern,
            "minimal" => Theme::Minimal,
            "dark" => Theme::Dark,
            _ => Theme::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Navy => "navy",
            Theme::Modern => "modern",
            Theme::Minimal => "minimal",
            Theme::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Navy => "Navy",
            Theme::Modern => "Modern",
            Theme::Minimal => "Minimal",
            Theme::Dark => "Dark",
        }
    }
}

/// A named slide deck. Owns its slides through `slides.presentation_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Presentation {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub theme: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Presentation {
    pub fn theme(&self) -> Theme {
        Theme::resolve(&self.theme)
    }

    /// Apply an acknowledged patch to the local copy.
    pub fn apply(&mut self, patch: &PresentationPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(theme) = &patch.theme {
            self.theme = theme.clone();
        }
        self.updated_at = patch.updated_at;
    }

    /// "Mon D, YYYY" for the list screen.
    pub fn updated_label(&self) -> String {
        self.updated_at.format("%b %-d, %Y").to_string()
    }
}

/// Partial presentation update. `updated_at` is stamped by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl PresentationPatch {
    /// Empty patch stamped with the current time.
    pub fn now() -> Self {
        Self {
            title: None,
            description: None,
            theme: None,
            updated_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme.as_str().to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.theme.is_none()
    }
}

/// Form input from the editor header.
#[derive(Debug, Clone, Deserialize)]
pub struct PresentationForm {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub csrf_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
    pub csrf_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Presentation {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        Presentation {
            id: Uuid::new_v4(),
            title: DEFAULT_TITLE.to_string(),
            description: None,
            theme: "navy".to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn unknown_theme_falls_back_to_navy() {
        assert_eq!(Theme::resolve("modern"), Theme::Modern);
        assert_eq!(Theme::resolve("solarized"), Theme::Navy);
        assert_eq!(Theme::resolve(""), Theme::Navy);
        assert_eq!(Theme::resolve("DARK"), Theme::Navy);
        for theme in Theme::ALL {
            assert_eq!(Theme::resolve(theme.as_str()), theme);
        }
    }

    #[test]
    fn apply_merges_only_set_fields() {
        let mut p = sample();
        let patch = PresentationPatch::now().theme(Theme::Dark);
        p.apply(&patch);
        assert_eq!(p.title, DEFAULT_TITLE);
        assert_eq!(p.theme(), Theme::Dark);
        assert_eq!(p.updated_at, patch.updated_at);
    }

    #[test]
    fn updated_label_format() {
        assert_eq!(sample().updated_label(), "Mar 5, 2024");
    }

    #[test]
    fn empty_patch() {
        assert!(PresentationPatch::now().is_empty());
        assert!(!PresentationPatch::now().title("x").is_empty());
    }
}
