//! End-to-end rendering checks against the embedded catalog.
//!
//! These tests pin the generated output for real catalog entries, so a data
//! edit that breaks an example (a renamed endpoint id, a moved base URL)
//! fails here rather than in the UI.

use apihub_codegen::{curl_example, fetch_example};
use apihub_registry::{Catalog, Endpoint, EnvKind, Provider};

fn catalog() -> Catalog {
    Catalog::builtin().expect("embedded catalog validates")
}

fn entry<'a>(catalog: &'a Catalog, id: &str) -> (&'a Provider, &'a Endpoint) {
    catalog.endpoint(id).unwrap_or_else(|| panic!("endpoint {id} missing from embedded catalog"))
}

#[test]
fn every_endpoint_renders_in_both_environments() {
    let catalog = catalog();
    for provider in catalog.providers() {
        for endpoint in provider.endpoints() {
            for env in [EnvKind::Sandbox, EnvKind::Production] {
                let curl = curl_example(provider, endpoint, env);
                assert!(
                    curl.starts_with("curl --location"),
                    "{}: unexpected curl prefix: {curl}",
                    endpoint.id
                );
                assert!(
                    curl.contains(provider.base_url_for(env)),
                    "{}: curl does not target {env}",
                    endpoint.id
                );
                assert_eq!(curl, curl_example(provider, endpoint, env), "{}: curl not deterministic", endpoint.id);

                let js = fetch_example(provider, endpoint, env);
                assert!(
                    js.contains(&format!("fetch(\"{}{}\"", provider.base_url_for(env), endpoint.path)),
                    "{}: fetch does not target {env}",
                    endpoint.id
                );
                assert!(js.ends_with(".catch((error) => console.error(error));"), "{}", endpoint.id);
            }
        }
    }
}

#[test]
fn embedded_payload_examples_are_valid_json() {
    let catalog = catalog();
    for provider in catalog.providers() {
        for endpoint in provider.endpoints() {
            serde_json::from_str::<serde_json::Value>(&endpoint.response_example)
                .unwrap_or_else(|e| panic!("{}: bad response example: {e}", endpoint.id));
            if let Some(body) = endpoint.body_example.as_deref() {
                serde_json::from_str::<serde_json::Value>(body)
                    .unwrap_or_else(|e| panic!("{}: bad body example: {e}", endpoint.id));
            }
        }
        if let Some(webhooks) = provider.webhooks.as_ref() {
            serde_json::from_str::<serde_json::Value>(&webhooks.payload_example)
                .unwrap_or_else(|e| panic!("{}: bad webhook payload example: {e}", provider.id));
        }
    }
}

#[test]
fn pathao_token_endpoint_curls_without_authorization() {
    let catalog = catalog();
    let (provider, endpoint) = entry(&catalog, "pathao-issue-token");
    let curl = curl_example(provider, endpoint, EnvKind::Sandbox);
    assert!(curl.starts_with(
        "curl --location 'https://courier-api-sandbox.pathao.com/aladdin/api/v1/issue-token'"
    ));
    assert!(!curl.contains("Authorization"));
    // Curated body example is emitted verbatim.
    assert!(curl.contains("--data '{\n  \"client_id\": \"7N1aMJQbWm\","));
}

#[test]
fn pathao_order_endpoint_carries_the_full_bearer_header_set() {
    let catalog = catalog();
    let (provider, endpoint) = entry(&catalog, "pathao-create-order");
    let curl = curl_example(provider, endpoint, EnvKind::Production);
    assert!(curl.starts_with("curl --location 'https://api-hermes.pathao.com/aladdin/api/v1/orders'"));
    assert!(curl.contains("--header 'Authorization: Bearer <ACCESS_TOKEN>'"));
    assert!(curl.contains("--header 'Content-Type: application/json'"));
    assert!(curl.contains("--header 'Accept: application/json'"));

    let js = fetch_example(provider, endpoint, EnvKind::Production);
    assert!(js.contains("myHeaders.append(\"Authorization\", \"Bearer <TOKEN>\");"));
}

#[test]
fn redx_get_with_query_params_renders_placeholders_and_no_content_type() {
    let catalog = catalog();
    let (provider, endpoint) = entry(&catalog, "redx-areas");
    let curl = curl_example(provider, endpoint, EnvKind::Production);
    let expected = concat!(
        "curl --location 'https://openapi.redx.com.bd/v1.0.0-beta/areas",
        "?post_code=<POST_CODE>&district_name=<DISTRICT_NAME>&zone_id=<ZONE_ID>' \\\n",
        "--header 'API-ACCESS-TOKEN: Bearer <JWT_TOKEN>'"
    );
    assert_eq!(curl, expected);

    // The fetch variant drops the query string entirely.
    let js = fetch_example(provider, endpoint, EnvKind::Production);
    assert!(js.contains("fetch(\"https://openapi.redx.com.bd/v1.0.0-beta/areas\", requestOptions)"));
    assert!(!js.contains("post_code"));
}

#[test]
fn redx_patch_gets_explicit_method_and_content_type() {
    let catalog = catalog();
    let (provider, endpoint) = entry(&catalog, "redx-update-parcel");
    let curl = curl_example(provider, endpoint, EnvKind::Sandbox);
    assert!(curl.starts_with(
        "curl --location --request PATCH 'https://sandbox.redx.com.bd/v1.0.0-beta/parcel/update'"
    ));
    assert!(curl.contains("--header 'API-ACCESS-TOKEN: Bearer <JWT_TOKEN>'"));
    assert!(curl.contains("--header 'Content-Type: application/json'"));
}

#[test]
fn steadfast_sandbox_requests_fall_back_to_production() {
    let catalog = catalog();
    let (provider, endpoint) = entry(&catalog, "steadfast-create-order");
    assert!(provider.sandbox.is_none());
    let sandbox = curl_example(provider, endpoint, EnvKind::Sandbox);
    let production = curl_example(provider, endpoint, EnvKind::Production);
    assert_eq!(sandbox, production);
    assert!(sandbox.starts_with("curl --location 'https://portal.packzy.com/api/v1/create_order'"));
    assert!(sandbox.contains("--header 'Api-Key: <YOUR_API_KEY>'"));
    assert!(sandbox.contains("--header 'Secret-Key: <YOUR_SECRET_KEY>'"));
    // No curated example, so the body skeleton lists every declared field.
    assert!(sandbox.ends_with(concat!(
        "--data '{\n",
        "  \"invoice\": \"value\",\n",
        "  \"recipient_name\": \"value\",\n",
        "  \"recipient_phone\": \"value\",\n",
        "  \"recipient_address\": \"value\",\n",
        "  \"cod_amount\": \"value\",\n",
        "  \"note\": \"value\"\n",
        "}'"
    )));
}

#[test]
fn carrybee_delete_renders_identity_headers_and_no_body() {
    let catalog = catalog();
    let (provider, endpoint) = entry(&catalog, "carrybee-delete-order");
    let curl = curl_example(provider, endpoint, EnvKind::Production);
    let expected = concat!(
        "curl --location --request DELETE 'https://api.carrybee.com/v2/orders/{order_id}' \\\n",
        "--header 'client-id: <CLIENT_ID>' \\\n",
        "--header 'client-secret: <CLIENT_SECRET>' \\\n",
        "--header 'client-context: <CLIENT_CONTEXT>' \\\n",
        "--header 'Content-Type: application/json' \\\n",
        "--header 'Accept: application/json'"
    );
    assert_eq!(curl, expected);
}

#[test]
fn bkash_uses_the_default_json_policy() {
    let catalog = catalog();
    let (provider, endpoint) = entry(&catalog, "bkash-grant-token");
    let curl = curl_example(provider, endpoint, EnvKind::Sandbox);
    let expected = concat!(
        "curl --location 'https://tokenized.sandbox.bka.sh/v1.2.0-beta/tokenized/checkout/token/grant' \\\n",
        "--header 'Content-Type: application/json' \\\n",
        "--data '{\n  \"app_key\": \"value\",\n  \"app_secret\": \"value\"\n}'"
    );
    assert_eq!(curl, expected);
}
