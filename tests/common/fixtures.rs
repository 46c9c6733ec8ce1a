//! Test fixtures and builders for ValidatingWebhookConfiguration objects
//!
//! Builders produce the `k8s_openapi` objects the API server would return, so tests
//! exercise the same conversion path as a live fetch.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! let config = ConfigBuilder::new("pod-policy.example.com")
//!     .with_webhook(WebhookBuilder::new("check-pods").with_failure_policy("Fail"))
//!     .build();
//! ```

use std::collections::BTreeMap;

use k8s_openapi::ByteString;
use k8s_openapi::api::admissionregistration::v1::{
    RuleWithOperations, ServiceReference, ValidatingWebhook, ValidatingWebhookConfiguration,
    WebhookClientConfig,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::core::ObjectMeta;
use webhook_inspector::WebhookConfiguration;

// =============================================================================
// Convenience Functions for Simple Test Cases
// =============================================================================

/// The `pod-policy.example.com` / `check-pods` configuration
///
/// One CREATE rule on core/v1 pods, `Fail` policy, 10s timeout, no selectors.
pub fn pod_policy_config() -> ValidatingWebhookConfiguration {
    ConfigBuilder::new("pod-policy.example.com")
        .with_webhook(
            WebhookBuilder::new("check-pods")
                .with_rule(
                    RuleBuilder::new(&["CREATE"], &[""], &["v1"], &["pods"]).scope("Namespaced"),
                )
                .with_failure_policy("Fail")
                .with_timeout(10),
        )
        .build()
}

/// Model snapshot of [`pod_policy_config`]
pub fn pod_policy_snapshot() -> Vec<WebhookConfiguration> {
    vec![WebhookConfiguration::from(pod_policy_config())]
}

/// A configuration with the given number of minimal webhooks
pub fn config_with_webhooks(name: &str, webhooks: usize) -> WebhookConfiguration {
    let mut builder = ConfigBuilder::new(name);
    for i in 0..webhooks {
        builder = builder.with_webhook(WebhookBuilder::new(&format!("hook-{}", i)));
    }
    WebhookConfiguration::from(builder.build())
}

// =============================================================================
// ValidatingWebhookConfiguration Builder
// =============================================================================

/// Builder for ValidatingWebhookConfiguration test fixtures
pub struct ConfigBuilder {
    name: Option<String>,
    webhooks: Option<Vec<ValidatingWebhook>>,
}

#[allow(dead_code)]
impl ConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            webhooks: None,
        }
    }

    /// Object without `metadata.name`
    pub fn unnamed() -> Self {
        Self {
            name: None,
            webhooks: None,
        }
    }

    pub fn with_webhook(mut self, webhook: WebhookBuilder) -> Self {
        self.webhooks.get_or_insert_with(Vec::new).push(webhook.build());
        self
    }

    pub fn build(self) -> ValidatingWebhookConfiguration {
        ValidatingWebhookConfiguration {
            metadata: ObjectMeta {
                name: self.name,
                ..Default::default()
            },
            webhooks: self.webhooks,
        }
    }
}

// =============================================================================
// ValidatingWebhook Builder
// =============================================================================

/// Builder for a single webhook entry
///
/// Defaults to an in-cluster service endpoint, `admissionReviewVersions: [v1]`,
/// `sideEffects: None`, and nothing else set.
pub struct WebhookBuilder {
    webhook: ValidatingWebhook,
}

#[allow(dead_code)]
impl WebhookBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            webhook: ValidatingWebhook {
                name: name.to_string(),
                admission_review_versions: vec!["v1".to_string()],
                side_effects: "None".to_string(),
                client_config: WebhookClientConfig {
                    service: Some(ServiceReference {
                        namespace: "policy-system".to_string(),
                        name: "policy-webhook".to_string(),
                        path: Some("/validate".to_string()),
                        port: Some(443),
                    }),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.webhook.client_config = WebhookClientConfig {
            url: Some(url.to_string()),
            ..Default::default()
        };
        self
    }

    pub fn with_ca_bundle(mut self, bytes: usize) -> Self {
        self.webhook.client_config.ca_bundle = Some(ByteString(vec![b'x'; bytes]));
        self
    }

    pub fn with_rule(mut self, rule: RuleBuilder) -> Self {
        self.webhook
            .rules
            .get_or_insert_with(Vec::new)
            .push(rule.build());
        self
    }

    pub fn with_review_versions(mut self, versions: &[&str]) -> Self {
        self.webhook.admission_review_versions = versions.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_failure_policy(mut self, policy: &str) -> Self {
        self.webhook.failure_policy = Some(policy.to_string());
        self
    }

    pub fn with_match_policy(mut self, policy: &str) -> Self {
        self.webhook.match_policy = Some(policy.to_string());
        self
    }

    pub fn with_side_effects(mut self, side_effects: &str) -> Self {
        self.webhook.side_effects = side_effects.to_string();
        self
    }

    pub fn with_timeout(mut self, seconds: i32) -> Self {
        self.webhook.timeout_seconds = Some(seconds);
        self
    }

    pub fn with_namespace_selector(mut self, labels: &[(&str, &str)]) -> Self {
        self.webhook.namespace_selector = Some(label_selector(labels));
        self
    }

    pub fn with_object_selector(mut self, labels: &[(&str, &str)]) -> Self {
        self.webhook.object_selector = Some(label_selector(labels));
        self
    }

    pub fn build(self) -> ValidatingWebhook {
        self.webhook
    }
}

fn owned(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

fn label_selector(labels: &[(&str, &str)]) -> LabelSelector {
    if labels.is_empty() {
        return LabelSelector::default();
    }
    let match_labels: BTreeMap<String, String> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    LabelSelector {
        match_labels: Some(match_labels),
        ..Default::default()
    }
}

// =============================================================================
// Rule Builder
// =============================================================================

/// Builder for a rule with operations
pub struct RuleBuilder {
    rule: RuleWithOperations,
}

#[allow(dead_code)]
impl RuleBuilder {
    pub fn new(
        operations: &[&str],
        groups: &[&str],
        versions: &[&str],
        resources: &[&str],
    ) -> Self {
        Self {
            rule: RuleWithOperations {
                operations: owned(operations),
                api_groups: owned(groups),
                api_versions: owned(versions),
                resources: owned(resources),
                scope: None,
            },
        }
    }

    pub fn scope(mut self, scope: &str) -> Self {
        self.rule.scope = Some(scope.to_string());
        self
    }

    pub fn build(self) -> RuleWithOperations {
        self.rule
    }
}
