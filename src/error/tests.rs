//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod autopilot_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = AutopilotError::from(json_error);

        match error {
            AutopilotError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = AutopilotError::from(io_error);

        match error {
            AutopilotError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let error = AutopilotError::from(header_error);

        match error {
            AutopilotError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_url_parse_error_conversion() {
        let parse_error = url::Url::parse("not a url").unwrap_err();
        let error = AutopilotError::from(parse_error);

        match error {
            AutopilotError::InvalidServiceUrl(_) => (),
            _ => panic!("Expected InvalidServiceUrl error variant"),
        }
    }

    #[test]
    fn test_missing_config_error() {
        let error = AutopilotError::MissingConfig {
            env_var: "SUPABASE_URL".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("SUPABASE_URL"));
        assert!(error_string.contains("not provided"));
    }

    #[test]
    fn test_api_error_displays_service_message_only() {
        let error = AutopilotError::Api {
            status: 409,
            message: "duplicate key value violates unique constraint".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn test_not_authenticated_message() {
        assert_eq!(
            AutopilotError::NotAuthenticated.to_string(),
            "Not authenticated"
        );
    }

    #[test]
    fn test_display_message_falls_back_when_empty() {
        let error = AutopilotError::Api {
            status: 500,
            message: "   ".to_string(),
        };
        assert_eq!(error.display_message(), GENERIC_FAILURE_MESSAGE);

        let error = AutopilotError::InvalidUrl {
            url: "nope".to_string(),
        };
        assert_eq!(error.display_message(), "Invalid URL: nope");
    }

    #[test]
    fn test_error_debug_format() {
        let error = AutopilotError::NoData;
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("NoData"));
    }
}
