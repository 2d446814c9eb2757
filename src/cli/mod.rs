//! Command workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{run_compose_workflow, ComposeArgs, Interaction, Outcome, WorkflowResult};
