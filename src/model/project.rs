use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProjectId(pub usize);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    /// Completion percentage. Meant to stay within 0..=100 but never enforced.
    pub progress: u32,
}

impl Project {
    pub fn new(id: usize, name: &str, description: &str, progress: u32) -> Self {
        Self {
            id: ProjectId(id),
            name: name.to_owned(),
            description: description.to_owned(),
            progress,
        }
    }

    pub fn status(&self) -> Status {
        Status::classify(self.progress)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

pub const COMPLETED_THRESHOLD: u32 = 100;
pub const IN_PROGRESS_THRESHOLD: u32 = 50;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    Completed,
    InProgress,
    Started,
}

impl Status {
    pub fn classify(progress: u32) -> Self {
        if progress >= COMPLETED_THRESHOLD {
            Status::Completed
        } else if progress >= IN_PROGRESS_THRESHOLD {
            Status::InProgress
        } else {
            Status::Started
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Completed => "Concluído",
            Status::InProgress => "Em Andamento",
            Status::Started => "Iniciado",
        }
    }

    /// Class of the status badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Status::Completed => "status-completed",
            Status::InProgress => "status-progress",
            Status::Started => "status-started",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[test]
fn test_classify() {
    for p in 0..50 {
        assert_eq!(Status::classify(p), Status::Started);
    }
    for p in 50..100 {
        assert_eq!(Status::classify(p), Status::InProgress);
    }
    for p in [100, 101, 250, u32::MAX] {
        assert_eq!(Status::classify(p), Status::Completed);
    }
}

#[test]
fn test_labels() {
    assert_eq!(Status::classify(100).label(), "Concluído");
    assert_eq!(Status::classify(99).label(), "Em Andamento");
    assert_eq!(Status::classify(50).label(), "Em Andamento");
    assert_eq!(Status::classify(49).label(), "Iniciado");
    assert_eq!(Status::classify(0).to_string(), "Iniciado");
}

#[test]
fn test_project_status() {
    let p = Project::new(7, "dummy", "", 90);
    assert_eq!(p.status(), Status::InProgress);
    assert_eq!(p.status().css_class(), "status-progress");
    let p = Project { progress: 100, ..p };
    assert_eq!(p.status().css_class(), "status-completed");
    assert_eq!(p.to_string(), "dummy (#7)");
}
