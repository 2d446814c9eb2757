//! Domain logic - pure classification and formatting, independent of git

pub mod classify;
pub mod commit;
pub mod document;
pub mod remote;
pub mod render;

pub use classify::{classify, destination, Classification, Destination};
pub use commit::{match_subject, Commit, CommitType, Label, ParsedCommit, SubjectMatch};
pub use document::{assemble, PrDocument, TaskInfo};
pub use remote::RepoUrl;
pub use render::render_line;
