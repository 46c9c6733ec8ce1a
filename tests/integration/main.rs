// Test code is allowed to panic on failure
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

//! Integration tests for webhook-inspector
//!
//! These tests require a running Kubernetes cluster accessible via kubeconfig.
//! Tests are marked with #[ignore] and must be run explicitly:
//!
//! ```bash
//! cargo test --test integration -- --ignored --test-threads=1
//! ```
//!
//! The tests use your existing kubeconfig (~/.kube/config or KUBECONFIG env var).
//! Fixture configurations use `failurePolicy: Ignore` and a namespace selector that
//! matches nothing, so they never affect admission in the cluster.

#[path = "../common/mod.rs"]
mod common;



pub use cluster::*;
pub use webhook_config::*;
