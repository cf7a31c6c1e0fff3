pub use self::project::{Project, ProjectId, Status};

pub mod catalog;
mod project;
