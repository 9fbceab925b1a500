//! Per-provider header policies.
//!
//! Every generated example carries a fixed set of header lines determined by
//! the provider's authentication scheme. The schemes form a closed set, so
//! the policies live in one declarative table here instead of being spread
//! across the renderers. Adding a provider class means adding a table row;
//! the renderers never change.

use apihub_types::{Endpoint, HttpMethod};

/// When a header line is included in a generated example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderWhen {
    /// Included for every endpoint of the provider.
    Always,
    /// Omitted on the provider's own token-issuance and refresh endpoints,
    /// which cannot require the credential they mint.
    ExceptTokenEndpoints,
    /// Included only for methods that carry a JSON body (POST and PATCH).
    JsonBodyMethods,
}

/// One header line of a policy, in render order.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRule {
    pub name: &'static str,
    pub value: &'static str,
    pub when: HeaderWhen,
}

/// Declarative header policy for one provider identity.
#[derive(Debug, Clone, Copy)]
pub struct HeaderPolicy {
    provider_id: &'static str,
    /// Header lines in the order they appear in generated output.
    pub headers: &'static [HeaderRule],
    /// Endpoint ids exempt from [`HeaderWhen::ExceptTokenEndpoints`] rules.
    pub token_endpoints: &'static [&'static str],
}

const POLICIES: &[HeaderPolicy] = &[
    HeaderPolicy {
        provider_id: "pathao",
        headers: &[
            HeaderRule {
                name: "Authorization",
                value: "Bearer <ACCESS_TOKEN>",
                when: HeaderWhen::ExceptTokenEndpoints,
            },
            HeaderRule {
                name: "Content-Type",
                value: "application/json",
                when: HeaderWhen::Always,
            },
            HeaderRule {
                name: "Accept",
                value: "application/json",
                when: HeaderWhen::Always,
            },
        ],
        token_endpoints: &["pathao-issue-token", "pathao-refresh-token"],
    },
    HeaderPolicy {
        provider_id: "redx",
        headers: &[
            HeaderRule {
                name: "API-ACCESS-TOKEN",
                value: "Bearer <JWT_TOKEN>",
                when: HeaderWhen::Always,
            },
            HeaderRule {
                name: "Content-Type",
                value: "application/json",
                when: HeaderWhen::JsonBodyMethods,
            },
        ],
        token_endpoints: &[],
    },
    HeaderPolicy {
        provider_id: "steadfast",
        headers: &[
            HeaderRule {
                name: "Api-Key",
                value: "<YOUR_API_KEY>",
                when: HeaderWhen::Always,
            },
            HeaderRule {
                name: "Secret-Key",
                value: "<YOUR_SECRET_KEY>",
                when: HeaderWhen::Always,
            },
            HeaderRule {
                name: "Content-Type",
                value: "application/json",
                when: HeaderWhen::Always,
            },
        ],
        token_endpoints: &[],
    },
    HeaderPolicy {
        provider_id: "carrybee",
        headers: &[
            HeaderRule {
                name: "client-id",
                value: "<CLIENT_ID>",
                when: HeaderWhen::Always,
            },
            HeaderRule {
                name: "client-secret",
                value: "<CLIENT_SECRET>",
                when: HeaderWhen::Always,
            },
            HeaderRule {
                name: "client-context",
                value: "<CLIENT_CONTEXT>",
                when: HeaderWhen::Always,
            },
            HeaderRule {
                name: "Content-Type",
                value: "application/json",
                when: HeaderWhen::Always,
            },
            HeaderRule {
                name: "Accept",
                value: "application/json",
                when: HeaderWhen::Always,
            },
        ],
        token_endpoints: &[],
    },
];

/// Fallback for providers absent from the table.
const DEFAULT_POLICY: HeaderPolicy = HeaderPolicy {
    provider_id: "",
    headers: &[HeaderRule {
        name: "Content-Type",
        value: "application/json",
        when: HeaderWhen::Always,
    }],
    token_endpoints: &[],
};

/// Resolves the header policy for a provider id. Total: unknown providers
/// get the default JSON policy.
pub fn policy_for(provider_id: &str) -> &'static HeaderPolicy {
    POLICIES
        .iter()
        .find(|policy| policy.provider_id == provider_id)
        .unwrap_or(&DEFAULT_POLICY)
}

impl HeaderPolicy {
    /// Header lines that apply to one endpoint, in table order.
    pub fn headers_for<'a>(&'a self, endpoint: &'a Endpoint) -> impl Iterator<Item = &'a HeaderRule> {
        self.headers.iter().filter(move |rule| self.applies(rule, endpoint))
    }

    /// Whether the endpoint is one of the provider's own token calls.
    pub fn is_token_endpoint(&self, endpoint_id: &str) -> bool {
        self.token_endpoints.iter().any(|id| *id == endpoint_id)
    }

    /// Whether a fetch preamble for this endpoint carries a bearer
    /// Authorization line.
    pub fn fetch_bearer_line(&self, endpoint: &Endpoint) -> bool {
        self.headers
            .iter()
            .any(|rule| rule.when == HeaderWhen::ExceptTokenEndpoints)
            && !self.is_token_endpoint(&endpoint.id)
    }

    fn applies(&self, rule: &HeaderRule, endpoint: &Endpoint) -> bool {
        match rule.when {
            HeaderWhen::Always => true,
            HeaderWhen::ExceptTokenEndpoints => !self.is_token_endpoint(&endpoint.id),
            HeaderWhen::JsonBodyMethods => {
                matches!(endpoint.method, HttpMethod::Post | HttpMethod::Patch)
            }
        }
    }
}
