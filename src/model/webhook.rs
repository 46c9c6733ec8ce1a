//! Snapshot of ValidatingWebhookConfiguration objects as returned by the API server
//!
//! These types are a read-only projection of the `admissionregistration.k8s.io/v1`
//! objects. Every optional field stays an `Option` so the report can tell "not set"
//! apart from an empty value.

use k8s_openapi::api::admissionregistration::v1::{
    RuleWithOperations, ServiceReference, ValidatingWebhook, ValidatingWebhookConfiguration,
    WebhookClientConfig,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use serde::Serialize;

use super::policy::{FailurePolicy, MatchPolicy, Operation, Scope, SideEffects};

/// Name shown for an object that came back without `metadata.name`
pub const UNNAMED: &str = "<unnamed>";

/// One ValidatingWebhookConfiguration
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfiguration {
    pub name: String,
    pub webhooks: Vec<WebhookEntry>,
}

/// One admission hook within a configuration
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEntry {
    pub name: String,
    pub client_config: ClientConfig,
    pub admission_review_versions: Vec<String>,
    pub rules: Vec<Rule>,
    pub failure_policy: Option<FailurePolicy>,
    pub match_policy: Option<MatchPolicy>,
    pub namespace_selector: Option<LabelSelector>,
    pub object_selector: Option<LabelSelector>,
    pub side_effects: Option<SideEffects>,
    pub timeout_seconds: Option<i32>,
    pub match_conditions: Option<Vec<MatchCondition>>,
}

/// Admission trigger predicate
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub operations: Vec<Operation>,
    pub api_groups: Vec<String>,
    pub api_versions: Vec<String>,
    pub resources: Vec<String>,
    pub scope: Option<Scope>,
}

/// CEL expression that further filters requests sent to the webhook
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchCondition {
    pub name: String,
    pub expression: String,
}

/// Where the API server sends admission reviews
///
/// Rendered endpoint first; the CA bundle is reduced to its size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceRef>,
    /// Byte length of `caBundle`, when one is configured
    #[serde(
        rename = "caBundle",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_bundle_len"
    )]
    pub ca_bundle_len: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceRef {
    pub name: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
}

fn serialize_bundle_len<S: serde::Serializer>(
    len: &Option<usize>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match len {
        Some(n) => serializer.collect_str(&format_args!("<{} bytes>", n)),
        None => serializer.serialize_none(),
    }
}

impl From<&ValidatingWebhookConfiguration> for WebhookConfiguration {
    fn from(obj: &ValidatingWebhookConfiguration) -> Self {
        let name = obj
            .metadata
            .name
            .clone()
            .unwrap_or_else(|| UNNAMED.to_string());
        Self {
            name,
            webhooks: obj
                .webhooks
                .iter()
                .flatten()
                .map(WebhookEntry::from)
                .collect(),
        }
    }
}

impl From<ValidatingWebhookConfiguration> for WebhookConfiguration {
    fn from(obj: ValidatingWebhookConfiguration) -> Self {
        Self::from(&obj)
    }
}

impl From<&ValidatingWebhook> for WebhookEntry {
    fn from(hook: &ValidatingWebhook) -> Self {
        Self {
            name: hook.name.clone(),
            client_config: ClientConfig::from(&hook.client_config),
            admission_review_versions: hook.admission_review_versions.clone(),
            rules: hook.rules.iter().flatten().map(Rule::from).collect(),
            failure_policy: hook.failure_policy.as_deref().map(FailurePolicy::from),
            match_policy: hook.match_policy.as_deref().map(MatchPolicy::from),
            namespace_selector: hook.namespace_selector.clone(),
            object_selector: hook.object_selector.clone(),
            // Required by the v1 schema, but an empty string carries no value
            side_effects: Some(hook.side_effects.as_str())
                .filter(|s| !s.is_empty())
                .map(SideEffects::from),
            timeout_seconds: hook.timeout_seconds,
            match_conditions: hook.match_conditions.as_ref().map(|conds| {
                conds
                    .iter()
                    .map(|c| MatchCondition {
                        name: c.name.clone(),
                        expression: c.expression.clone(),
                    })
                    .collect()
            }),
        }
    }
}

impl From<&RuleWithOperations> for Rule {
    fn from(rule: &RuleWithOperations) -> Self {
        Self {
            operations: rule
                .operations
                .iter()
                .flatten()
                .map(|op| Operation::from(op.as_str()))
                .collect(),
            api_groups: rule.api_groups.clone().unwrap_or_default(),
            api_versions: rule.api_versions.clone().unwrap_or_default(),
            resources: rule.resources.clone().unwrap_or_default(),
            scope: rule.scope.as_deref().map(Scope::from),
        }
    }
}

impl From<&WebhookClientConfig> for ClientConfig {
    fn from(cfg: &WebhookClientConfig) -> Self {
        Self {
            url: cfg.url.clone(),
            service: cfg.service.as_ref().map(ServiceRef::from),
            ca_bundle_len: cfg.ca_bundle.as_ref().map(|b| b.0.len()),
        }
    }
}

impl From<&ServiceReference> for ServiceRef {
    fn from(svc: &ServiceReference) -> Self {
        Self {
            name: svc.name.clone(),
            namespace: svc.namespace.clone(),
            path: svc.path.clone(),
            port: svc.port,
        }
    }
}

impl WebhookConfiguration {
    /// Build the snapshot of a list response, keeping server order
    pub fn from_list<'a, I>(items: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a ValidatingWebhookConfiguration>,
    {
        items.into_iter().map(Self::from).collect()
    }
}
