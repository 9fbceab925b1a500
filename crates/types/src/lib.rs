use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// HTTP methods documented by catalog endpoints.
///
/// The set is closed on purpose: the catalog only ever documents these five
/// verbs, and the example generators key rendering decisions off them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Returns the canonical upper-case verb, e.g. `"GET"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution environment selector for example generation.
///
/// Front ends hold one of these as selection state and pass it into the
/// generators on every render. Defaults to [`EnvKind::Sandbox`], matching the
/// initial state of the reference browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvKind {
    #[default]
    Sandbox,
    Production,
}

impl EnvKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for EnvKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvKind {
    type Err = ParseEnvKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandbox" => Ok(Self::Sandbox),
            "production" => Ok(Self::Production),
            _ => Err(ParseEnvKindError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEnvKindError;

impl fmt::Display for ParseEnvKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid environment; expected 'sandbox' or 'production'")
    }
}

impl Error for ParseEnvKindError {}

/// Unit used when a provider quotes parcel weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    G,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Kg => "kg",
            Self::G => "g",
        })
    }
}

/// A labeled credential shown in an environment panel (e.g. a sandbox client
/// id with its test value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub label: String,
    pub value: String,
}

/// One deployment context of a provider: a base URL plus the credentials that
/// belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Absolute URL prefix with no trailing slash; endpoint paths are
    /// concatenated onto it verbatim.
    pub base_url: String,
    /// Ordered credential pairs; may be empty when the provider issues
    /// credentials only through its own dashboard.
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

/// Severity/flavor of a callout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    Info,
    Warning,
    Tip,
}

/// An inline notice attached to a provider or an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callout {
    #[serde(rename = "type")]
    pub kind: CalloutKind,
    pub title: String,
    pub message: String,
}

/// A single documented request/response parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Field name as it appears on the wire (e.g. `"recipient_phone"`).
    pub field: String,
    /// Free-text type label (e.g. `"string"`, `"integer"`).
    pub r#type: String,
    /// Whether the provider requires this field.
    pub required: bool,
    /// Human-readable description.
    pub description: String,
}

/// One documented HTTP operation belonging to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Catalog-wide unique identifier, used as the anchor/lookup key.
    pub id: String,
    pub method: HttpMethod,
    /// URL path template. Path-parameter placeholders like `{city_id}` stay
    /// literal; the generators never substitute them.
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub path_params: Vec<Param>,
    #[serde(default)]
    pub query_params: Vec<Param>,
    #[serde(default)]
    pub body_params: Vec<Param>,
    /// Opaque example payload text rendered in the response tab.
    pub response_example: String,
    /// Opaque request payload text; when present it overrides the body
    /// synthesized from `body_params`.
    #[serde(default)]
    pub body_example: Option<String>,
    #[serde(default)]
    pub callouts: Vec<Callout>,
}

/// A named, ordered grouping of endpoints. Grouping is presentation-only and
/// has no effect on example generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointGroup {
    pub name: String,
    pub endpoints: Vec<Endpoint>,
}

/// A webhook event a provider can deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub name: String,
    pub description: String,
}

/// Webhook documentation block for a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhooks {
    pub events: Vec<WebhookEvent>,
    /// Opaque example of the delivered payload.
    pub payload_example: String,
    /// Header carrying the delivery signature, when the provider signs
    /// deliveries.
    #[serde(default)]
    pub signature_header: Option<String>,
    /// Ready-made command for exercising a webhook receiver; stored text,
    /// never generated.
    #[serde(default)]
    pub test_curl: Option<String>,
    #[serde(default)]
    pub test_note: Option<String>,
}

/// A delivery-status slug and what it means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDefinition {
    pub slug: String,
    pub meaning: String,
}

/// A catalog category grouping related providers (e.g. courier, payment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Opaque icon name resolved by the front end.
    pub icon: String,
}

/// A documented third-party API provider with its environments and endpoint
/// groups.
///
/// Providers are constructed once at catalog load and never mutated; every
/// field is plain data. `production` is always present while `sandbox` is
/// optional — some providers simply have no test environment, and callers
/// resolving a base URL must fall back via [`Provider::base_url_for`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    /// Accent color hex used by front ends.
    pub color: String,
    /// Free-text label describing the authentication scheme.
    pub auth_type: String,
    #[serde(default)]
    pub version: Option<String>,
    pub description: String,
    /// Single-character fallback glyph when the logo image is unavailable.
    pub logo_char: String,
    pub logo_url: String,
    /// Id of the [`Category`] this provider belongs to.
    pub category: String,
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub sandbox: Option<Environment>,
    pub production: Environment,
    pub groups: Vec<EndpointGroup>,
    #[serde(default)]
    pub webhooks: Option<Webhooks>,
    #[serde(default)]
    pub statuses: Vec<StatusDefinition>,
    #[serde(default)]
    pub callouts: Vec<Callout>,
}

impl Provider {
    /// Resolves the base URL for an environment selection.
    ///
    /// Selecting [`EnvKind::Sandbox`] on a provider without a sandbox quietly
    /// falls back to the production base URL; resolution never fails.
    pub fn base_url_for(&self, env: EnvKind) -> &str {
        match env {
            EnvKind::Sandbox => self
                .sandbox
                .as_ref()
                .map(|e| e.base_url.as_str())
                .unwrap_or(self.production.base_url.as_str()),
            EnvKind::Production => self.production.base_url.as_str(),
        }
    }

    /// Iterates every endpoint across all groups in declared order.
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.groups.iter().flat_map(|group| group.endpoints.iter())
    }

    /// Total number of documented endpoints across all groups.
    pub fn endpoint_count(&self) -> usize {
        self.groups.iter().map(|group| group.endpoints.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_round_trip_minimal() {
        let json = r#"{
            "id": "demo-list-orders",
            "method": "GET",
            "path": "/orders",
            "title": "List orders",
            "responseExample": "{}"
        }"#;

        let endpoint: Endpoint = serde_json::from_str(json).expect("deserialize Endpoint");
        assert_eq!(endpoint.id, "demo-list-orders");
        assert_eq!(endpoint.method, HttpMethod::Get);
        assert_eq!(endpoint.path, "/orders");
        assert!(endpoint.description.is_none());
        assert!(endpoint.path_params.is_empty());
        assert!(endpoint.query_params.is_empty());
        assert!(endpoint.body_params.is_empty());
        assert!(endpoint.body_example.is_none());
        assert!(endpoint.callouts.is_empty());

        let back = serde_json::to_string(&endpoint).expect("serialize Endpoint");
        let endpoint2: Endpoint = serde_json::from_str(&back).expect("round-trip deserialize");
        assert_eq!(endpoint2, endpoint);
    }

    #[test]
    fn method_and_env_labels() {
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(serde_json::to_string(&HttpMethod::Get).expect("serialize method"), "\"GET\"");

        assert_eq!("sandbox".parse::<EnvKind>().expect("parse sandbox"), EnvKind::Sandbox);
        assert_eq!("production".parse::<EnvKind>().expect("parse production"), EnvKind::Production);
        assert!("staging".parse::<EnvKind>().is_err());
        assert_eq!(EnvKind::default(), EnvKind::Sandbox);
    }

    #[test]
    fn callout_kind_uses_type_key() {
        let json = r#"{"type": "warning", "title": "Rate limits", "message": "60 requests/min"}"#;
        let callout: Callout = serde_json::from_str(json).expect("deserialize Callout");
        assert_eq!(callout.kind, CalloutKind::Warning);
        let back = serde_json::to_value(&callout).expect("serialize Callout");
        assert_eq!(back["type"], "warning");
    }

    fn provider_without_sandbox() -> Provider {
        let json = r##"{
            "id": "demo",
            "name": "Demo Courier",
            "color": "#8bc34a",
            "authType": "API Key",
            "description": "Test provider",
            "logoChar": "D",
            "logoUrl": "/logos/demo.svg",
            "category": "courier",
            "weightUnit": "kg",
            "production": { "baseUrl": "https://api.demo.example" },
            "groups": [
                {
                    "name": "Orders",
                    "endpoints": [
                        { "id": "demo-a", "method": "GET", "path": "/a", "title": "A", "responseExample": "{}" },
                        { "id": "demo-b", "method": "POST", "path": "/b", "title": "B", "responseExample": "{}" }
                    ]
                },
                {
                    "name": "Tracking",
                    "endpoints": [
                        { "id": "demo-c", "method": "GET", "path": "/c", "title": "C", "responseExample": "{}" }
                    ]
                }
            ]
        }"##;
        serde_json::from_str(json).expect("deserialize Provider")
    }

    #[test]
    fn provider_defaults_and_counts() {
        let provider = provider_without_sandbox();
        assert!(provider.sandbox.is_none());
        assert!(provider.webhooks.is_none());
        assert!(provider.statuses.is_empty());
        assert!(provider.version.is_none());
        assert_eq!(provider.endpoint_count(), 3);
        let ids: Vec<&str> = provider.endpoints().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["demo-a", "demo-b", "demo-c"]);
    }

    #[test]
    fn base_url_falls_back_to_production_without_sandbox() {
        let provider = provider_without_sandbox();
        assert_eq!(provider.base_url_for(EnvKind::Sandbox), "https://api.demo.example");
        assert_eq!(provider.base_url_for(EnvKind::Production), "https://api.demo.example");
    }
}
