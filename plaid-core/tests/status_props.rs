use plaid_core::{AuthResponse, RawResponse, parse_response};
use proptest::prelude::*;
use serde_json::json;

fn arb_error_status() -> impl Strategy<Value = u16> {
    (100u16..600).prop_filter("200 and 201 are not errors", |s| *s != 200 && *s != 201)
}

proptest! {
    #[test]
    fn any_other_status_is_api_error_with_that_code(
        status in arb_error_status(),
        message in "[a-zA-Z ]{0,24}",
    ) {
        let raw = RawResponse::json(status, &json!({"message": message}));
        let parsed = parse_response(&raw).unwrap();
        prop_assert_eq!(parsed.code(), status);
        match parsed {
            AuthResponse::ApiError(e) => prop_assert_eq!(e.message, Some(message)),
            other => prop_assert!(false, "unexpected variant {:?}", other),
        }
    }

    #[test]
    fn error_bodies_never_fail_to_normalize(status in arb_error_status(), body in ".{0,64}") {
        let raw = RawResponse::new(status, body);
        prop_assert!(parse_response(&raw).is_ok());
    }

    #[test]
    fn success_code_is_preserved(token in "[a-z0-9-]{1,32}") {
        let raw = RawResponse::json(200, &json!({"access_token": token}));
        let parsed = parse_response(&raw).unwrap();
        prop_assert!(parsed.is_success());
        prop_assert_eq!(parsed.access_token(), Some(token.as_str()));
    }
}
