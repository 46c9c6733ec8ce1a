//! Read-only data model for validating admission webhooks

mod policy;
mod webhook;

pub use policy::*;
pub use webhook::*;
