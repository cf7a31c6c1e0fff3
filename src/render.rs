//! HTML rendering of the board.
//!
//! The page is rendered for the dashboard's current theme. Both palettes and
//! both logos are carried as data attributes so that the embedded script can
//! switch themes in the browser without a round trip.

use crate::config::Config;
use crate::dashboard::{Card, Dashboard};
use crate::stats::Statistics;
use crate::theme::Theme;
use std::fmt;

const STYLE: &str = include_str!("render/style.css");
const SCRIPT: &str = include_str!("render/toggle.js");

const LOGO_ALT: &str = "DIME";
const TOGGLE_LABEL: &str = "Alternar tema";
const PROGRESS_LABEL: &str = "Progresso";
const LAST_UPDATED: &str = "Atualizado recentemente";
const TOTAL_LABEL: &str = "Total de Projetos";
const AVERAGE_LABEL: &str = "Progresso Médio";
const ALMOST_DONE_LABEL: &str = "Quase Concluídos";

pub struct Page<'a> {
    dashboard: &'a Dashboard,
    config: &'a Config,
}

impl<'a> Page<'a> {
    pub fn new(dashboard: &'a Dashboard, config: &'a Config) -> Self {
        Self { dashboard, config }
    }

    fn header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let assets = &self.config.assets;
        writeln!(f, r#"<header class="header"><div class="header-content">"#)?;
        writeln!(
            f,
            r#"<div class="logo-section"><div class="logotipo"><img id="logo" src="{}" data-logo-light="{}" data-logo-dark="{}" alt="{LOGO_ALT}"></div></div>"#,
            Escaped(self.dashboard.logo(assets)),
            Escaped(&assets.logo),
            Escaped(&assets.logo_dark),
        )?;
        writeln!(
            f,
            r#"<button id="theme-toggle" class="theme-toggle" type="button" aria-label="{TOGGLE_LABEL}">{}</button>"#,
            self.dashboard.theme().toggle_icon()
        )?;
        writeln!(f, "</div></header>")
    }

    fn cards(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut other = self.dashboard.clone();
        other.toggle_theme();
        let (current, toggled) = (self.dashboard.cards(), other.cards());
        let (light, dark) = if self.dashboard.theme().is_dark() {
            (&toggled, &current)
        } else {
            (&current, &toggled)
        };
        writeln!(f, r#"<div class="projects-grid">"#)?;
        for ((card, light), dark) in current.iter().zip(light).zip(dark) {
            card_html(f, card, light.color, dark.color)?;
        }
        writeln!(f, "</div>")
    }
}

fn card_html(
    f: &mut fmt::Formatter,
    card: &Card,
    light_color: &str,
    dark_color: &str,
) -> fmt::Result {
    let project = card.project;
    writeln!(
        f,
        r#"<div class="project-card" data-project-id="{}">"#,
        project.id
    )?;
    writeln!(
        f,
        r#"<div class="project-header"><h3 class="project-name">{}</h3><p class="project-description">{}</p></div>"#,
        Escaped(&project.name),
        Escaped(&project.description)
    )?;
    writeln!(f, r#"<div class="progress-section">"#)?;
    writeln!(
        f,
        r#"<div class="progress-header"><span class="progress-label">{PROGRESS_LABEL}</span><span class="progress-percentage">{}%</span></div>"#,
        project.progress
    )?;
    writeln!(
        f,
        r#"<div class="progress-bar-container"><div class="progress-bar" style="width: {}; background-color: {};" data-color-light="{light_color}" data-color-dark="{dark_color}"><div class="progress-shine"></div></div></div>"#,
        card.width, card.color
    )?;
    writeln!(f, "</div>")?;
    writeln!(
        f,
        r#"<div class="project-footer"><span class="status-badge {}">{}</span><span class="last-updated">{LAST_UPDATED}</span></div>"#,
        card.status.css_class(),
        card.status.label()
    )?;
    writeln!(f, "</div>")
}

fn stats_html(f: &mut fmt::Formatter, stats: &Statistics) -> fmt::Result {
    let average = stats
        .average_progress
        .map_or_else(|| "-".to_owned(), |a| format!("{a}%"));
    writeln!(f, r#"<div class="stats-grid">"#)?;
    for (number, label) in [
        (stats.total.to_string(), TOTAL_LABEL),
        (average, AVERAGE_LABEL),
        (stats.almost_done.to_string(), ALMOST_DONE_LABEL),
    ] {
        writeln!(
            f,
            r#"<div class="stat-card"><div class="stat-number">{number}</div><div class="stat-label">{label}</div></div>"#
        )?;
    }
    writeln!(f, "</div>")
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let page = &self.config.page;
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="pt-BR">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="utf-8">"#)?;
        writeln!(
            f,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
        )?;
        writeln!(f, "<title>{}</title>", Escaped(&page.title))?;
        writeln!(f, "<style>\n{STYLE}</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(
            f,
            r#"<div id="app" class="app {}">"#,
            self.dashboard.theme().css_class()
        )?;
        self.header(f)?;
        writeln!(f, r#"<main class="main-content">"#)?;
        writeln!(
            f,
            r#"<div class="page-title"><h2>{}</h2><p>{}</p></div>"#,
            Escaped(&page.title),
            Escaped(&page.subtitle)
        )?;
        self.cards(f)?;
        stats_html(f, &self.dashboard.statistics())?;
        writeln!(f, "</main>")?;
        writeln!(
            f,
            r#"<footer class="footer"><div class="footer-content"><p>{}</p></div></footer>"#,
            Escaped(&page.footer)
        )?;
        writeln!(f, "</div>")?;
        for theme in [Theme::Light, Theme::Dark] {
            writeln!(
                f,
                r#"<template id="icon-{theme}">{}</template>"#,
                theme.toggle_icon()
            )?;
        }
        writeln!(f, "<script>\n{SCRIPT}</script>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

/// Text escaped for use in element content and quoted attribute values.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            f.write_str(match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            })?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

#[cfg(test)]
use crate::model::Project;

#[cfg(test)]
fn render(dashboard: &Dashboard) -> String {
    Page::new(dashboard, &Config::default()).to_string()
}

#[test]
fn test_escaping() {
    assert_eq!(
        Escaped(r#"<a href="x">Tom & Jerry's</a>"#).to_string(),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(Escaped("Liberaê").to_string(), "Liberaê");
    assert_eq!(Escaped("").to_string(), "");
}

#[test]
fn test_page_contents() {
    let html = render(&Dashboard::new(Theme::Light));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"class="app light-theme""#));
    assert_eq!(html.matches(r#"<div class="project-card""#).count(), 4);
    assert!(html.contains("Sistema de Visitantes - Liberaê (Beta)"));
    assert!(html.contains(r#"style="width: 100%; background-color: #059669;""#));
    assert!(html.contains(r#"style="width: 90%; background-color: #16a34a;""#));
    assert_eq!(
        html.matches(r#"style="width: 30%; background-color: #65a30d;""#)
            .count(),
        2
    );
    assert!(html.contains(r#"<span class="status-badge status-completed">Concluído</span>"#));
    assert!(html.contains(r#"<span class="status-badge status-progress">Em Andamento</span>"#));
    assert_eq!(
        html.matches(r#"<span class="status-badge status-started">Iniciado</span>"#)
            .count(),
        2
    );
    assert!(html.contains(
        r#"<div class="stat-number">4</div><div class="stat-label">Total de Projetos</div>"#
    ));
    assert!(html.contains(
        r#"<div class="stat-number">63%</div><div class="stat-label">Progresso Médio</div>"#
    ));
    assert!(html.contains(
        r#"<div class="stat-number">2</div><div class="stat-label">Quase Concluídos</div>"#
    ));
    assert!(html.contains("© 2025 DIME - Todos os direitos reservados."));
    assert!(html.contains(r#"src="assets/logo.svg""#));
    assert!(html.contains(r#"aria-label="Alternar tema""#));
}

#[test]
fn test_dark_page() {
    let html = render(&Dashboard::new(Theme::Dark));
    assert!(html.contains(r#"class="app dark-theme""#));
    assert!(html.contains(r#"style="width: 100%; background-color: #50fa7b;""#));
    assert!(html.contains(r#"src="assets/logo_white.png""#));
    assert!(html.contains(r##"data-color-light="#059669" data-color-dark="#50fa7b""##));
}

#[test]
fn test_both_palettes_are_embedded() {
    let light = render(&Dashboard::new(Theme::Light));
    assert!(light.contains(r##"data-color-light="#65a30d" data-color-dark="#ffb86c""##));
    assert!(light.contains(r#"data-logo-light="assets/logo.svg" data-logo-dark="assets/logo_white.png""#));
}

#[test]
fn test_toggle_twice_renders_identically() {
    let mut dashboard = Dashboard::new(Theme::Light);
    let before = render(&dashboard);
    dashboard.toggle_theme();
    assert_ne!(render(&dashboard), before);
    dashboard.toggle_theme();
    assert_eq!(render(&dashboard), before);
}

#[test]
fn test_escapes_project_text() {
    let dashboard = Dashboard::with_projects(
        vec![Project::new(1, "<b>bold</b>", "a & b", 10)],
        Theme::Light,
    );
    let html = render(&dashboard);
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(html.contains("a &amp; b"));
    assert!(!html.contains("<b>bold</b>"));
}

#[test]
fn test_empty_board() {
    let html = render(&Dashboard::with_projects(Vec::new(), Theme::Light));
    assert!(html.contains(
        r#"<div class="stat-number">-</div><div class="stat-label">Progresso Médio</div>"#
    ));
    assert!(!html.contains(r#"<div class="project-card""#));
}
