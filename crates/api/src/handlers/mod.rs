pub mod jobs;
pub mod workflow;
