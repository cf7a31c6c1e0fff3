use crate::model::Project;

/// Projects at or above this percentage count as almost done.
pub const ALMOST_DONE_THRESHOLD: u32 = 80;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Statistics {
    pub total: usize,
    /// Rounded mean progress, `None` when there is no project to average.
    pub average_progress: Option<u32>,
    pub almost_done: usize,
}

pub fn statistics(projects: &[Project]) -> Statistics {
    Statistics {
        total: projects.len(),
        average_progress: average_progress(projects),
        almost_done: projects
            .iter()
            .filter(|p| p.progress >= ALMOST_DONE_THRESHOLD)
            .count(),
    }
}

// Halves round up, so 62.5 gives 63.
#[allow(clippy::cast_possible_truncation)]
fn average_progress(projects: &[Project]) -> Option<u32> {
    if projects.is_empty() {
        return None;
    }
    let count = projects.len() as u64;
    let sum = projects.iter().map(|p| u64::from(p.progress)).sum::<u64>();
    Some(((2 * sum + count) / (2 * count)) as u32)
}

#[cfg(test)]
use crate::model::catalog;

#[cfg(test)]
fn with_progress(values: &[u32]) -> Vec<Project> {
    values
        .iter()
        .enumerate()
        .map(|(i, &p)| Project::new(i + 1, "p", "", p))
        .collect()
}

#[test]
fn test_catalog_statistics() {
    let stats = statistics(&catalog::projects());
    assert_eq!(
        stats,
        Statistics {
            total: 4,
            average_progress: Some(63),
            almost_done: 2,
        }
    );
}

#[test]
fn test_rounding() {
    assert_eq!(average_progress(&with_progress(&[1, 2])), Some(2));
    assert_eq!(average_progress(&with_progress(&[1, 1, 2])), Some(1));
    assert_eq!(average_progress(&with_progress(&[1, 2, 2])), Some(2));
    assert_eq!(average_progress(&with_progress(&[0])), Some(0));
}

#[test]
fn test_almost_done_boundary() {
    let stats = statistics(&with_progress(&[79, 80, 100, 130]));
    assert_eq!(stats.almost_done, 3);
    assert_eq!(stats.total, 4);
}

#[test]
fn test_empty() {
    assert_eq!(
        statistics(&[]),
        Statistics {
            total: 0,
            average_progress: None,
            almost_done: 0,
        }
    );
}
