//! JavaScript `fetch` example rendering.

use apihub_types::{Endpoint, EnvKind, Provider};

use crate::policy::policy_for;

/// Renders a JavaScript `fetch` snippet for one endpoint.
///
/// The shape mirrors what browser devtools emit: a `Headers` preamble, a
/// stringified body placeholder, a `requestOptions` literal, and a promise
/// chain. Two deliberate asymmetries with [`curl_example`] are part of the
/// output contract rather than accidents to unify: the URL never carries a
/// query string, and the bearer placeholder is `<TOKEN>` instead of
/// `<ACCESS_TOKEN>`.
///
/// [`curl_example`]: crate::curl::curl_example
pub fn fetch_example(provider: &Provider, endpoint: &Endpoint, env: EnvKind) -> String {
    let url = format!("{}{}", provider.base_url_for(env), endpoint.path);

    let mut out = String::new();
    out.push_str("const myHeaders = new Headers();\n");
    out.push_str("myHeaders.append(\"Content-Type\", \"application/json\");\n");
    if policy_for(&provider.id).fetch_bearer_line(endpoint) {
        out.push_str("myHeaders.append(\"Authorization\", \"Bearer <TOKEN>\");\n");
    }
    out.push('\n');

    // The body placeholder appears for every method, GET included.
    out.push_str("const raw = JSON.stringify({\n");
    out.push_str("  // body params...\n");
    out.push_str("});\n\n");

    out.push_str("const requestOptions = {\n");
    out.push_str(&format!("  method: \"{}\",\n", endpoint.method));
    out.push_str("  headers: myHeaders,\n");
    out.push_str("  body: raw,\n");
    out.push_str("  redirect: \"follow\"\n");
    out.push_str("};\n\n");

    out.push_str(&format!("fetch(\"{url}\", requestOptions)\n"));
    out.push_str("  .then((response) => response.json())\n");
    out.push_str("  .then((result) => console.log(result))\n");
    out.push_str("  .catch((error) => console.error(error));");
    out
}
