//! Release workflow driven by the command line

pub mod orchestration;

pub use orchestration::{
    plan_release, run_release_workflow, write_changelog, ReleasePlan, WorkflowArgs, WorkflowMode,
    WorkflowResult,
};
