//! Cluster access: credential loading and the webhook configuration source

mod config;
mod source;

pub use config::ClientOptions;
pub use source::{DEFAULT_PAGE_SIZE, KubeSource, WebhookConfigSource, fetch_with_deadline};
