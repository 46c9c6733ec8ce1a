//! Sources of ValidatingWebhookConfiguration snapshots

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use k8s_openapi::api::admissionregistration::v1::ValidatingWebhookConfiguration;
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::WebhookConfiguration;

/// Default number of objects requested per list page
pub const DEFAULT_PAGE_SIZE: u32 = 500;

/// Read-only provider of webhook configurations.
///
/// Implementations return the full collection in the order the backing store
/// reports it. They must not retry internally; retry policy belongs to the caller.
#[async_trait]
pub trait WebhookConfigSource: Send + Sync {
    /// Fetch every ValidatingWebhookConfiguration in the cluster
    async fn fetch_all_validating_webhook_configs(&self) -> Result<Vec<WebhookConfiguration>>;
}

/// Source backed by the Kubernetes API server
#[derive(Clone)]
pub struct KubeSource {
    api: Api<ValidatingWebhookConfiguration>,
    page_size: u32,
}

impl KubeSource {
    pub fn new(client: Client) -> Self {
        Self {
            api: Api::all(client),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Objects per list request; 0 fetches everything in one request
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    fn list_params(&self, continue_token: Option<&str>) -> ListParams {
        let mut params = ListParams::default();
        if self.page_size > 0 {
            params = params.limit(self.page_size);
        }
        if let Some(token) = continue_token {
            params = params.continue_token(token);
        }
        params
    }
}

#[async_trait]
impl WebhookConfigSource for KubeSource {
    async fn fetch_all_validating_webhook_configs(&self) -> Result<Vec<WebhookConfiguration>> {
        let api = &self.api;
        collect_pages(move |token: Option<String>| {
            let params = self.list_params(token.as_deref());
            async move {
                let list = api.list(&params).await.map_err(Error::from)?;
                Ok::<_, Error>((list.items, list.metadata.continue_))
            }
        })
        .await
    }
}

/// Drain a paged listing.
///
/// `fetch_page` receives the continue token of the previous page (`None` for the
/// first) and yields that page's items plus the next token. A missing or empty
/// token marks the last page. Pages are concatenated in the order received.
async fn collect_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<WebhookConfiguration>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<(Vec<ValidatingWebhookConfiguration>, Option<String>)>>,
{
    let mut configs = Vec::new();
    let mut continue_token: Option<String> = None;
    let mut pages = 0u32;

    loop {
        let (items, next) = fetch_page(continue_token.take()).await?;
        pages += 1;
        debug!(page = pages, items = items.len(), "Fetched list page");
        configs.extend(WebhookConfiguration::from_list(&items));

        match next.filter(|t| !t.is_empty()) {
            Some(token) => continue_token = Some(token),
            None => break,
        }
    }

    info!(
        count = configs.len(),
        pages, "Fetched ValidatingWebhookConfigurations"
    );
    Ok(configs)
}

/// Fetch from `source`, aborting when `timeout` elapses or `cancel` completes.
///
/// The in-flight request is dropped on abort; nothing is returned from a partial
/// fetch.
pub async fn fetch_with_deadline<S, C>(
    source: &S,
    timeout: Duration,
    cancel: C,
) -> Result<Vec<WebhookConfiguration>>
where
    S: WebhookConfigSource + ?Sized,
    C: Future<Output = ()>,
{
    tokio::select! {
        result = source.fetch_all_validating_webhook_configs() => result,
        _ = tokio::time::sleep(timeout) => Err(Error::DeadlineExceeded(timeout)),
        _ = cancel => Err(Error::Cancelled),
    }
}
