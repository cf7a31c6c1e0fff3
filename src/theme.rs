use crate::model::Status;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Colour of a progress bar. Only the status bucket matters, not the exact
    /// percentage.
    pub fn progress_color(self, status: Status) -> &'static str {
        match (self, status) {
            (Theme::Dark, Status::Completed) => "#50fa7b",
            (Theme::Dark, Status::InProgress) => "#f1fa8c",
            (Theme::Dark, Status::Started) => "#ffb86c",
            (Theme::Light, Status::Completed) => "#059669",
            (Theme::Light, Status::InProgress) => "#16a34a",
            (Theme::Light, Status::Started) => "#65a30d",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    /// Icon of the toggle button, which shows the theme it switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => MOON_ICON,
            Theme::Dark => SUN_ICON,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const MOON_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/></svg>"#;

pub const SUN_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/></svg>"#;

#[cfg(test)]
use std::collections::HashSet;

#[cfg(test)]
const STATUSES: [Status; 3] = [Status::Completed, Status::InProgress, Status::Started];

#[test]
fn test_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn test_toggle_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        let mut t = theme;
        t.toggle();
        assert_ne!(t, theme);
        t.toggle();
        assert_eq!(t, theme);
    }
}

#[test]
fn test_six_distinct_colors() {
    let colors = [Theme::Light, Theme::Dark]
        .into_iter()
        .flat_map(|t| STATUSES.map(|s| t.progress_color(s)))
        .collect::<HashSet<_>>();
    assert_eq!(colors.len(), 6);
}

#[test]
fn test_color_depends_on_bucket_only() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(
            theme.progress_color(Status::classify(0)),
            theme.progress_color(Status::classify(49))
        );
        assert_eq!(
            theme.progress_color(Status::classify(50)),
            theme.progress_color(Status::classify(99))
        );
        assert_eq!(
            theme.progress_color(Status::classify(100)),
            theme.progress_color(Status::classify(120))
        );
    }
    assert_eq!(Theme::Dark.progress_color(Status::Completed), "#50fa7b");
    assert_eq!(Theme::Light.progress_color(Status::Started), "#65a30d");
}

#[test]
fn test_parse() {
    assert_eq!(Theme::from_str("dark", false), Ok(Theme::Dark));
    assert_eq!(Theme::from_str("Light", true), Ok(Theme::Light));
    assert!(Theme::from_str("sepia", true).is_err());
}

#[test]
fn test_icon_offers_other_theme() {
    assert_eq!(Theme::Light.toggle_icon(), MOON_ICON);
    assert_eq!(Theme::Dark.toggle_icon(), SUN_ICON);
}
