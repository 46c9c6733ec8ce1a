//! Command-line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::client::{ClientOptions, DEFAULT_PAGE_SIZE};
use crate::report::{OutputFormat, ReportOptions, Verbosity};

/// Default fetch deadline in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// List the ValidatingWebhookConfigurations active in a cluster
#[derive(Debug, Parser)]
#[command(
    name = "webhook-inspector",
    version,
    about,
    after_help = "Client configs are shown as returned by the API server, except caBundle, \
                  which is shown as its size (\"<N bytes>\") rather than the certificate data."
)]
pub struct Args {
    /// Path to the kubeconfig file (defaults to KUBECONFIG, then ~/.kube/config, then in-cluster)
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current context
    #[arg(long, value_name = "NAME")]
    pub context: Option<String>,

    /// Level of detail: summary (names only) or detailed (every field)
    #[arg(short, long, default_value_t = Verbosity::Detailed)]
    pub verbosity: Verbosity,

    /// Output format: text or json
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Seconds to wait for the API server before giving up
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Objects requested per list call; 0 disables paging
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

impl Args {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            verbosity: self.verbosity,
            format: self.output,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
