use crate::theme::Theme;
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub page: Page,
    pub assets: Assets,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Page {
    pub title: String,
    pub subtitle: String,
    pub footer: String,
    pub theme: Theme,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            title: "Projetos em Desenvolvimento".to_owned(),
            subtitle: "Acompanhe o progresso dos nossos projetos em tempo real".to_owned(),
            footer: "© 2025 DIME - Todos os direitos reservados.".to_owned(),
            theme: Theme::Light,
        }
    }
}

/// Logo locations, as referenced from the generated page.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Assets {
    pub logo: String,
    pub logo_dark: String,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            logo: "assets/logo.svg".to_owned(),
            logo_dark: "assets/logo_white.png".to_owned(),
        }
    }
}

impl Assets {
    pub fn logo_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.logo,
            Theme::Dark => &self.logo_dark,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot read configuration file {}", file_name.display()))?;
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Theme the page opens with. A command-line choice wins over the file.
    pub fn starting_theme(&self, cli: Option<Theme>) -> Theme {
        cli.unwrap_or(self.page.theme)
    }
}

#[cfg(test)]
use std::io::Write;

#[test]
fn test_empty_gives_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.page.title, "Projetos em Desenvolvimento");
    assert_eq!(config.page.theme, Theme::Light);
    assert_eq!(config.assets.logo_for(Theme::Light), "assets/logo.svg");
    assert_eq!(config.assets.logo_for(Theme::Dark), "assets/logo_white.png");
}

#[test]
fn test_overrides() {
    let config = Config::parse(
        r#"
        [page]
        theme = "dark"
        footer = "footer"

        [assets]
        logo_dark = "white.png"
        "#,
    )
    .unwrap();
    assert_eq!(config.page.theme, Theme::Dark);
    assert_eq!(config.page.footer, "footer");
    assert_eq!(
        config.page.subtitle,
        "Acompanhe o progresso dos nossos projetos em tempo real"
    );
    assert_eq!(config.assets.logo, "assets/logo.svg");
    assert_eq!(config.assets.logo_dark, "white.png");
}

#[test]
fn test_rejects_unknown_keys() {
    assert!(Config::parse("[page]\ncolour = \"red\"\n").is_err());
    assert!(Config::parse("[database]\n").is_err());
    assert!(Config::parse("[page]\ntheme = \"sepia\"\n").is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[page]\ntitle = \"Board\"").unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.page.title, "Board");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().starts_with("cannot read configuration file"));
}

#[test]
fn test_starting_theme() {
    let config = Config::parse("[page]\ntheme = \"dark\"\n").unwrap();
    assert_eq!(config.starting_theme(None), Theme::Dark);
    assert_eq!(config.starting_theme(Some(Theme::Light)), Theme::Light);
    assert_eq!(Config::default().starting_theme(None), Theme::Light);
    assert_eq!(Config::default().starting_theme(Some(Theme::Dark)), Theme::Dark);
}
