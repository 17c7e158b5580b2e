//! Unit tests for service wire types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    const USER_ID: &str = "2b8f5a0e-2a9c-4f59-9d5e-1c4b0a6e7d21";

    fn session_json() -> serde_json::Value {
        json!({
            "access_token": "access-abc",
            "refresh_token": "refresh-def",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1760000000,
            "user": {
                "id": USER_ID,
                "email": "owner@acme.com",
                "aud": "authenticated",
                "role": "authenticated"
            }
        })
    }

    #[test]
    fn test_session_deserialization_ignores_extra_user_fields() {
        let session: Session = serde_json::from_value(session_json()).unwrap();
        assert_eq!(session.access_token, "access-abc");
        assert_eq!(session.refresh_token, "refresh-def");
        assert_eq!(session.expires_in, Some(3600));
        assert_eq!(session.user.id.to_string(), USER_ID);
        assert_eq!(session.user.email.as_deref(), Some("owner@acme.com"));
    }

    #[test]
    fn test_session_defaults_token_type() {
        let mut value = session_json();
        value.as_object_mut().unwrap().remove("token_type");

        let session: Session = serde_json::from_value(value).unwrap();
        assert_eq!(session.token_type, "bearer");
    }

    #[test]
    fn test_sign_up_with_session() {
        let sign_up: SignUp = serde_json::from_value(session_json()).unwrap();
        match sign_up {
            SignUp::Session(session) => assert_eq!(session.access_token, "access-abc"),
            other => panic!("Expected session, got {:?}", other),
        }
    }

    #[test]
    fn test_sign_up_pending_confirmation() {
        let body = json!({
            "id": USER_ID,
            "email": "new@acme.com",
            "confirmation_sent_at": "2026-10-18T10:00:00Z"
        });

        let sign_up: SignUp = serde_json::from_value(body).unwrap();
        match sign_up {
            SignUp::ConfirmationPending(user) => {
                assert_eq!(user.email.as_deref(), Some("new@acme.com"))
            }
            other => panic!("Expected pending confirmation, got {:?}", other),
        }
    }

    #[test]
    fn test_error_message_from_rest_body() {
        let body = r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value violates unique constraint \"projects_pkey\""}"#;
        assert_eq!(
            error_message_from_body(body, 409),
            "duplicate key value violates unique constraint \"projects_pkey\""
        );
    }

    #[test]
    fn test_error_message_from_auth_bodies() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(error_message_from_body(body, 400), "Invalid login credentials");

        let body = r#"{"code":422,"msg":"User already registered"}"#;
        assert_eq!(error_message_from_body(body, 422), "User already registered");
    }

    #[test]
    fn test_error_message_skips_blank_fields() {
        let body = r#"{"message":"","error":"unauthorized"}"#;
        assert_eq!(error_message_from_body(body, 401), "unauthorized");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_text() {
        assert_eq!(error_message_from_body("Bad Gateway", 502), "Bad Gateway");
        assert_eq!(
            error_message_from_body("", 503),
            "Request failed with status 503"
        );
        assert_eq!(
            error_message_from_body("{}", 500),
            "{}"
        );
    }
}
