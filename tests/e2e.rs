#[path = "e2e/common.rs"]
mod common;

#[path = "e2e/submission.rs"]
mod submission;

#[path = "e2e/deployment.rs"]
mod deployment;

#[path = "e2e/core_reads.rs"]
mod core_reads;
