use crate::config::Assets;
use crate::model::{Project, ProjectId};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// Maximum meaningful progress value. Larger values are shown as is.
const FULL_PROGRESS: u32 = 100;

/// Projects whose progress exceeds 100%, reported but kept unchanged.
#[must_use]
pub fn check_progress_range(projects: &[Project]) -> Vec<ProjectId> {
    projects
        .iter()
        .filter(|p| p.progress > FULL_PROGRESS)
        .inspect(|p| warn!(project = %p, progress = p.progress, "progress exceeds 100%"))
        .map(|p| p.id)
        .collect()
}

#[must_use]
pub fn check_unique_ids(projects: &[Project]) -> Vec<ProjectId> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .filter(|p| !seen.insert(p.id))
        .inspect(|p| warn!(project = %p, "duplicate project identifier"))
        .map(|p| p.id)
        .collect()
}

/// Logos referenced by the page that cannot be found next to it. Remote
/// locations are not checked.
#[must_use]
pub fn check_assets(assets: &Assets, page_dir: &Path) -> Vec<String> {
    [&assets.logo, &assets.logo_dark]
        .into_iter()
        .filter(|logo| !logo.contains("://") && !logo.starts_with("data:"))
        .filter(|logo| !page_dir.join(logo.as_str()).exists())
        .inspect(|logo| warn!(asset = %logo, dir = %page_dir.display(), "logo not found, the page will show a broken image"))
        .cloned()
        .collect()
}

#[cfg(test)]
use crate::model::catalog;
#[cfg(test)]
use std::fs;

#[test]
fn test_catalog_is_clean() {
    let projects = catalog::projects();
    assert!(check_progress_range(&projects).is_empty());
    assert!(check_unique_ids(&projects).is_empty());
}

#[test]
fn test_out_of_range() {
    let projects = vec![
        Project::new(1, "a", "", 100),
        Project::new(2, "b", "", 101),
    ];
    assert_eq!(check_progress_range(&projects), vec![ProjectId(2)]);
}

#[test]
fn test_duplicates() {
    let projects = vec![
        Project::new(1, "a", "", 10),
        Project::new(2, "b", "", 20),
        Project::new(1, "c", "", 30),
    ];
    assert_eq!(check_unique_ids(&projects), vec![ProjectId(1)]);
}

#[test]
fn test_missing_assets() {
    let dir = tempfile::tempdir().unwrap();
    let assets = Assets::default();
    assert_eq!(
        check_assets(&assets, dir.path()),
        vec!["assets/logo.svg".to_owned(), "assets/logo_white.png".to_owned()]
    );
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/logo.svg"), "<svg/>").unwrap();
    assert_eq!(
        check_assets(&assets, dir.path()),
        vec!["assets/logo_white.png".to_owned()]
    );
}

#[test]
fn test_remote_assets_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let assets = Assets {
        logo: "https://example.com/logo.svg".to_owned(),
        logo_dark: "data:image/png;base64,AAAA".to_owned(),
    };
    assert!(check_assets(&assets, dir.path()).is_empty());
}
