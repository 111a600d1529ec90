use apikey_auth::{get_api_key, AuthError, HeaderSet};

struct Case {
    name: &'static str,
    headers: HeaderSet,
    expected_key: &'static str,
    expected_error: Option<AuthError>,
}

fn auth_header(value: &str) -> HeaderSet {
    [("Authorization", value)].into_iter().collect()
}

#[test]
fn get_api_key_table() {
    let cases = vec![
        Case {
            name: "valid api key",
            headers: auth_header("ApiKey my-secret-key"),
            expected_key: "my-secret-key",
            expected_error: None,
        },
        Case {
            name: "no authorization header",
            headers: HeaderSet::new(),
            expected_key: "",
            expected_error: Some(AuthError::NoAuthHeader),
        },
        Case {
            name: "malformed header - wrong prefix",
            headers: auth_header("Bearer my-secret-key"),
            expected_key: "",
            expected_error: Some(AuthError::MalformedHeader),
        },
        Case {
            name: "malformed header - not enough parts",
            headers: auth_header("ApiKey"),
            expected_key: "",
            expected_error: Some(AuthError::MalformedHeader),
        },
    ];

    for case in cases {
        let result = get_api_key(&case.headers);

        // Failures carry no key, so compare against the empty string
        let key = result
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .unwrap_or("");
        assert_eq!(key, case.expected_key, "{}: key", case.name);
        assert_eq!(result.err(), case.expected_error, "{}: error", case.name);
    }
}

#[test]
fn error_messages_match_wire_text() {
    let err = get_api_key(&auth_header("Bearer x")).unwrap_err();
    assert_eq!(err.to_string(), "malformed authorization header");

    let err = get_api_key(&HeaderSet::new()).unwrap_err();
    assert_eq!(err.to_string(), "no authorization header included");
}

#[test]
fn unrelated_headers_do_not_count() {
    let headers: HeaderSet = [("X-Api-Key", "ApiKey k"), ("Accept", "*/*")]
        .into_iter()
        .collect();

    assert_eq!(get_api_key(&headers).unwrap_err(), AuthError::NoAuthHeader);
}

#[test]
fn trailing_token_behavior_is_pinned() {
    let key = get_api_key(&auth_header("ApiKey key extra-stuff")).expect("valid header");
    assert_eq!(key.expose_secret(), "key");
}

#[test]
fn extracted_key_is_redacted_when_formatted() {
    let key = get_api_key(&auth_header("ApiKey sk-secret123")).expect("valid header");

    assert_eq!(format!("{:?}", key), "[REDACTED]");
    assert_eq!(format!("{}", key), "[REDACTED]");
    assert_eq!(key.into_inner(), "sk-secret123");
}

#[test]
fn rejections_map_to_unauthorized() {
    for value in ["", "Bearer x", "ApiKey"] {
        let err = get_api_key(&auth_header(value)).unwrap_err();
        assert_eq!(err.status_code(), 401);
    }
}
