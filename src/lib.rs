pub mod cli;
pub mod client;
pub mod error;
pub mod model;
pub mod report;

pub use client::{ClientOptions, KubeSource, WebhookConfigSource, fetch_with_deadline};
pub use error::{Error, Result};
pub use model::{Rule, WebhookConfiguration, WebhookEntry};
pub use report::{OutputFormat, ReportOptions, Verbosity, render, render_with};

use std::future::Future;
use std::time::Duration;

/// Run one fetch-and-render pass.
///
/// The source is queried once; the report is only rendered when the fetch completes
/// in full. Any fetch failure is returned unchanged and nothing is rendered.
pub async fn inspect<S, C>(
    source: &S,
    options: ReportOptions,
    timeout: Duration,
    cancel: C,
) -> Result<String>
where
    S: WebhookConfigSource + ?Sized,
    C: Future<Output = ()>,
{
    let configs = fetch_with_deadline(source, timeout, cancel).await?;
    tracing::debug!(
        count = configs.len(),
        verbosity = %options.verbosity,
        format = %options.format,
        "Rendering report"
    );
    render_with(&configs, options)
}
