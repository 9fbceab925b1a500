//! cURL example rendering.

use apihub_types::{Endpoint, EnvKind, HttpMethod, Provider};
use heck::ToShoutySnakeCase;

use crate::policy::policy_for;

/// Methods rendered with an explicit `--request` flag.
///
/// curl infers GET, and POST when `--data` is present, so only the
/// remaining verbs are spelled out. Retargeting the renderer at another
/// HTTP tool means changing this predicate and nothing else.
fn explicit_method_flag(method: HttpMethod) -> bool {
    matches!(method, HttpMethod::Patch | HttpMethod::Put | HttpMethod::Delete)
}

/// Renders a ready-to-paste cURL invocation for one endpoint.
///
/// Total over the catalog domain: a missing sandbox falls back to the
/// production URL, providers without a header policy get the default JSON
/// headers, and absent optional fields are omitted rather than rendered as
/// placeholders. Output is deterministic for a given input triple.
pub fn curl_example(provider: &Provider, endpoint: &Endpoint, env: EnvKind) -> String {
    let mut url = format!("{}{}", provider.base_url_for(env), endpoint.path);
    if !endpoint.query_params.is_empty() {
        let query = endpoint
            .query_params
            .iter()
            .map(|param| format!("{}=<{}>", param.field, param.field.to_shouty_snake_case()))
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }

    let mut segments: Vec<String> = Vec::new();
    if explicit_method_flag(endpoint.method) {
        segments.push(format!("curl --location --request {} '{}'", endpoint.method, url));
    } else {
        segments.push(format!("curl --location '{}'", url));
    }

    for rule in policy_for(&provider.id).headers_for(endpoint) {
        segments.push(format!("--header '{}: {}'", rule.name, rule.value));
    }

    if let Some(body) = render_body(endpoint) {
        segments.push(format!("--data '{body}'"));
    }

    segments.join(" \\\n")
}

/// Payload for the `--data` section, if the endpoint declares one.
///
/// A curated `body_example` wins; otherwise a skeleton object is built from
/// the declared body parameters, one `"field": "value"` line each. Endpoints
/// with neither get no body section at all.
fn render_body(endpoint: &Endpoint) -> Option<String> {
    if let Some(example) = endpoint.body_example.as_deref() {
        return Some(example.to_string());
    }
    if endpoint.body_params.is_empty() {
        return None;
    }
    let fields = endpoint
        .body_params
        .iter()
        .map(|param| format!("  \"{}\": \"value\"", param.field))
        .collect::<Vec<_>>()
        .join(",\n");
    Some(format!("{{\n{fields}\n}}"))
}
