//! Verify descriptor behavior against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector describes constructor inputs plus the expected endpoint,
//! reconciled token, URL, and body parameters — or an expected error.
//! Comparing parsed query maps (not raw strings) avoids false negatives
//! from pair-ordering and percent-encoding differences.

use graph_core::{url_util, AccessToken, App, GraphError, GraphRequest, Params};

/// Convert a JSON object of string values into a parameter map.
fn params_from(value: &serde_json::Value) -> Params {
    value
        .as_object()
        .map(|object| {
            object
                .iter()
                .map(|(k, v)| (k.clone(), v.as_str().unwrap().to_string()))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn request_test_vectors() {
    let raw = include_str!("../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let app = case["app"]
            .as_object()
            .map(|a| App::new(a["id"].as_str().unwrap(), a["secret"].as_str().unwrap()));
        let access_token = case["access_token"].as_str().map(AccessToken::from);
        let method = case["method"].as_str().unwrap();
        let endpoint = case["endpoint"].as_str().unwrap();
        let params = params_from(&case["params"]);
        let etag = case["etag"].as_str().map(str::to_string);
        let graph_version = case["graph_version"].as_str();

        let result = GraphRequest::from_parts(
            app,
            access_token,
            method,
            endpoint,
            params,
            etag.clone(),
            graph_version,
        );

        if let Some(expected_error) = case["expected_error"].as_str() {
            let err = result.expect_err(name);
            match expected_error {
                "access_token_mismatch" => {
                    assert_eq!(err, GraphError::AccessTokenMismatch, "{name}")
                }
                other => panic!("{name}: unknown expected_error {other:?}"),
            }
            continue;
        }

        let request = result.unwrap_or_else(|e| panic!("{name}: {e}"));
        let expected = &case["expected"];

        assert_eq!(request.endpoint(), expected["endpoint"].as_str(), "{name}: endpoint");
        assert_eq!(
            request.access_token(),
            expected["access_token"].as_str(),
            "{name}: access token"
        );

        let url = request.url().unwrap_or_else(|e| panic!("{name}: {e}"));
        let path = url.split('?').next().unwrap();
        assert_eq!(path, expected["url_path"].as_str().unwrap(), "{name}: url path");
        assert_eq!(
            url_util::parse_query(&url),
            params_from(&expected["query"]),
            "{name}: query"
        );

        assert_eq!(
            request.post_params().unwrap_or_else(|e| panic!("{name}: {e}")),
            params_from(&expected["post_body"]),
            "{name}: post body"
        );

        if let Some(etag) = etag {
            assert!(
                request.headers().contains(&("If-None-Match".to_string(), etag)),
                "{name}: If-None-Match header"
            );
        }
    }
}
