use crate::config::Assets;
use crate::model::{Project, Status, catalog};
use crate::stats::{self, Statistics};
use crate::theme::Theme;
use tracing::debug;

/// View state of the board: the fixed project list and the theme flag.
#[derive(Clone, Debug)]
pub struct Dashboard {
    pub projects: Vec<Project>,
    theme: Theme,
}

/// Values derived from a project for the current theme.
#[derive(Debug)]
pub struct Card<'a> {
    pub project: &'a Project,
    pub status: Status,
    pub color: &'static str,
    pub width: String,
}

impl Dashboard {
    pub fn new(theme: Theme) -> Self {
        Self::with_projects(catalog::projects(), theme)
    }

    pub fn with_projects(projects: Vec<Project>, theme: Theme) -> Self {
        Self { projects, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        debug!(theme = %self.theme, "theme toggled");
    }

    pub fn cards(&self) -> Vec<Card<'_>> {
        self.projects
            .iter()
            .map(|project| {
                let status = project.status();
                Card {
                    project,
                    status,
                    color: self.theme.progress_color(status),
                    // Not clamped: a value above 100 overflows its container.
                    width: format!("{}%", project.progress),
                }
            })
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        stats::statistics(&self.projects)
    }

    pub fn logo<'a>(&self, assets: &'a Assets) -> &'a str {
        assets.logo_for(self.theme)
    }
}

#[test]
fn test_starts_with_requested_theme() {
    assert_eq!(Dashboard::new(Theme::default()).theme(), Theme::Light);
    assert_eq!(Dashboard::new(Theme::Dark).theme(), Theme::Dark);
}

#[test]
fn test_cards_follow_theme() {
    let mut dashboard = Dashboard::new(Theme::Light);
    let colors = |d: &Dashboard| d.cards().iter().map(|c| c.color).collect::<Vec<_>>();
    assert_eq!(
        colors(&dashboard),
        vec!["#059669", "#65a30d", "#16a34a", "#65a30d"]
    );
    dashboard.toggle_theme();
    assert!(dashboard.theme().is_dark());
    assert_eq!(
        colors(&dashboard),
        vec!["#50fa7b", "#ffb86c", "#f1fa8c", "#ffb86c"]
    );
}

#[test]
fn test_double_toggle_restores_cards() {
    let mut dashboard = Dashboard::new(Theme::Light);
    let before = format!("{:?}", dashboard.cards());
    dashboard.toggle_theme();
    assert_ne!(format!("{:?}", dashboard.cards()), before);
    dashboard.toggle_theme();
    assert_eq!(format!("{:?}", dashboard.cards()), before);
}

#[test]
fn test_card_values() {
    let dashboard = Dashboard::new(Theme::Light);
    let cards = dashboard.cards();
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0].status, Status::Completed);
    assert_eq!(cards[0].width, "100%");
    assert_eq!(cards[1].status, Status::Started);
    assert_eq!(cards[2].status, Status::InProgress);
    assert_eq!(cards[3].width, "30%");
}

#[test]
fn test_statistics_are_theme_independent() {
    let mut dashboard = Dashboard::new(Theme::Light);
    let before = dashboard.statistics();
    dashboard.toggle_theme();
    assert_eq!(dashboard.statistics(), before);
    assert_eq!(before.total, 4);
}

#[test]
fn test_logo_follows_theme() {
    let assets = Assets::default();
    let mut dashboard = Dashboard::new(Theme::Light);
    assert_eq!(dashboard.logo(&assets), "assets/logo.svg");
    dashboard.toggle_theme();
    assert_eq!(dashboard.logo(&assets), "assets/logo_white.png");
}
