//! Kubernetes client construction
//!
//! Resolves credentials from an explicit kubeconfig, a named context, or the usual
//! inference chain (KUBECONFIG, ~/.kube/config, in-cluster service account).

use std::path::PathBuf;

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Where to find cluster credentials
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    /// Explicit kubeconfig file; inferred when `None`
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use instead of the current one
    pub context: Option<String>,
}

impl ClientOptions {
    fn kubeconfig_options(&self) -> KubeConfigOptions {
        KubeConfigOptions {
            context: self.context.clone(),
            ..Default::default()
        }
    }

    /// Resolve the client configuration without connecting
    pub async fn load_config(&self) -> Result<Config> {
        match (&self.kubeconfig, &self.context) {
            (Some(path), _) => {
                debug!(path = %path.display(), "Reading kubeconfig");
                let kubeconfig = Kubeconfig::read_from(path)?;
                Ok(Config::from_custom_kubeconfig(kubeconfig, &self.kubeconfig_options()).await?)
            }
            (None, Some(context)) => {
                debug!(context = %context, "Using kubeconfig context");
                Ok(Config::from_kubeconfig(&self.kubeconfig_options()).await?)
            }
            (None, None) => Ok(Config::infer().await?),
        }
    }

    /// Build an authenticated client
    pub async fn connect(&self) -> Result<Client> {
        let config = self.load_config().await?;
        info!(cluster_url = %config.cluster_url, "Using Kubernetes API server");
        Client::try_from(config).map_err(Error::from)
    }
}
