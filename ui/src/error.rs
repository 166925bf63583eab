//! Maps failed API calls to user-facing messages and side effects.
//!
//! `classify` is the pure half: it decides what a failure means without
//! touching the toast surface, the session, or the router. The hooks apply
//! the returned disposition, emitting exactly one notification per call.

use std::collections::HashMap;

use payloads::ClientError;
use reqwest::StatusCode;

pub const AUTH_FAILED_MESSAGE: &str =
    "Authentication failed. Please login again.";
pub const AUTH_REQUIRED_MESSAGE: &str =
    "Authentication required. Please login.";
pub const NETWORK_MESSAGE: &str =
    "Network error. Please check your connection.";
pub const GENERIC_FORM_MESSAGE: &str =
    "Please check the form and try again.";
pub const FALLBACK_MESSAGE: &str =
    "Something went wrong. Please try again.";

/// What the UI should do with a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDisposition {
    /// Show one error toast with this message.
    Notify(String),
    /// Show the toast, delete the stored credential, and send the view to
    /// the sign-in route.
    AuthFailure(String),
    /// Route field errors to the form for inline display; no toast.
    FieldErrors(HashMap<String, String>),
    /// No credential was stored; redirect to the sign-in route.
    RequireLogin(String),
}

/// Fixed status-to-message table for responses without field errors.
fn canned_message(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::BAD_REQUEST => {
            Some("Invalid request. Please check the form and try again.")
        }
        StatusCode::FORBIDDEN => {
            Some("You do not have permission to perform this action.")
        }
        StatusCode::NOT_FOUND => Some("The requested resource was not found."),
        StatusCode::CONFLICT => Some("This conflicts with existing data."),
        StatusCode::UNPROCESSABLE_ENTITY => {
            Some("The submitted data could not be processed.")
        }
        StatusCode::TOO_MANY_REQUESTS => {
            Some("Too many requests. Please wait a moment and try again.")
        }
        StatusCode::INTERNAL_SERVER_ERROR => {
            Some("Something went wrong on the server. Please try again later.")
        }
        StatusCode::SERVICE_UNAVAILABLE => Some(
            "The service is temporarily unavailable. Please try again later.",
        ),
        _ => None,
    }
}

/// Decide what a failed call means.
///
/// `has_field_handler` is true when the caller can render field-level
/// errors inline (form submissions); only then does a 400 with an `errors`
/// map produce `FieldErrors`.
pub fn classify(
    error: &ClientError,
    has_field_handler: bool,
    fallback: Option<&str>,
) -> ErrorDisposition {
    match error {
        ClientError::MissingCredential => {
            ErrorDisposition::RequireLogin(AUTH_REQUIRED_MESSAGE.to_string())
        }
        ClientError::Network(_) => {
            ErrorDisposition::Notify(NETWORK_MESSAGE.to_string())
        }
        // A 2xx whose body did not decode: not a connectivity problem,
        // so the generic fallback applies.
        ClientError::Decode(_) => ErrorDisposition::Notify(
            fallback.unwrap_or(FALLBACK_MESSAGE).to_string(),
        ),
        ClientError::Api { status, body } => {
            if *status == StatusCode::BAD_REQUEST
                && let Some(errors) = &body.errors
                && !errors.is_empty()
            {
                if has_field_handler {
                    return ErrorDisposition::FieldErrors(errors.clone());
                }
                let message = body
                    .primary_message()
                    .unwrap_or(GENERIC_FORM_MESSAGE)
                    .to_string();
                return ErrorDisposition::Notify(message);
            }
            if *status == StatusCode::UNAUTHORIZED {
                return ErrorDisposition::AuthFailure(
                    AUTH_FAILED_MESSAGE.to_string(),
                );
            }
            if let Some(message) = canned_message(*status) {
                return ErrorDisposition::Notify(message.to_string());
            }
            let message = body
                .primary_message()
                .unwrap_or(fallback.unwrap_or(FALLBACK_MESSAGE))
                .to_string();
            ErrorDisposition::Notify(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::ErrorBody;

    fn api_error(status: StatusCode, text: &str) -> ClientError {
        ClientError::Api { status, body: ErrorBody::from_text(text) }
    }

    #[test]
    fn unauthorized_clears_credential_with_exact_message() {
        let error = api_error(StatusCode::UNAUTHORIZED, "");
        let disposition = classify(&error, false, None);
        assert_eq!(
            disposition,
            ErrorDisposition::AuthFailure(
                "Authentication failed. Please login again.".to_string()
            )
        );
    }

    #[test]
    fn unauthorized_ignores_server_message() {
        // The 401 side effect and message are fixed regardless of body.
        let error =
            api_error(StatusCode::UNAUTHORIZED, r#"{"message": "expired"}"#);
        assert!(matches!(
            classify(&error, true, None),
            ErrorDisposition::AuthFailure(_)
        ));
    }

    #[test]
    fn bad_request_with_field_errors_routes_to_form() {
        let error = api_error(
            StatusCode::BAD_REQUEST,
            r#"{"message": "Validation failed", "errors": {"email": "Email is required"}}"#,
        );
        let ErrorDisposition::FieldErrors(errors) =
            classify(&error, true, None)
        else {
            panic!("expected field errors");
        };
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Email is required")
        );
    }

    #[test]
    fn bad_request_field_errors_without_handler_shows_message() {
        let error = api_error(
            StatusCode::BAD_REQUEST,
            r#"{"message": "Validation failed", "errors": {"email": "bad"}}"#,
        );
        assert_eq!(
            classify(&error, false, None),
            ErrorDisposition::Notify("Validation failed".to_string())
        );
    }

    #[test]
    fn bad_request_field_errors_without_message_is_generic() {
        let error = api_error(
            StatusCode::BAD_REQUEST,
            r#"{"errors": {"email": "bad"}}"#,
        );
        assert_eq!(
            classify(&error, false, None),
            ErrorDisposition::Notify(GENERIC_FORM_MESSAGE.to_string())
        );
    }

    #[test]
    fn bad_request_without_field_errors_uses_canned_message() {
        let error = api_error(StatusCode::BAD_REQUEST, "whatever");
        assert_eq!(
            classify(&error, true, None),
            ErrorDisposition::Notify(
                "Invalid request. Please check the form and try again."
                    .to_string()
            )
        );
    }

    #[test]
    fn every_canned_status_has_a_message() {
        for code in [403u16, 404, 409, 422, 429, 500, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            let error = api_error(status, "");
            assert!(
                matches!(classify(&error, false, None),
                    ErrorDisposition::Notify(msg) if !msg.is_empty()),
                "no canned message for {code}"
            );
        }
    }

    #[test]
    fn unmapped_status_prefers_server_message() {
        let error = api_error(
            StatusCode::IM_A_TEAPOT,
            r#"{"message": "short and stout"}"#,
        );
        assert_eq!(
            classify(&error, false, None),
            ErrorDisposition::Notify("short and stout".to_string())
        );
    }

    #[test]
    fn unmapped_status_without_message_uses_fallback() {
        let error = api_error(StatusCode::IM_A_TEAPOT, "");
        assert_eq!(
            classify(&error, false, Some("Could not save the shoe.")),
            ErrorDisposition::Notify("Could not save the shoe.".to_string())
        );
        assert_eq!(
            classify(&error, false, None),
            ErrorDisposition::Notify(FALLBACK_MESSAGE.to_string())
        );
    }

    #[test]
    fn malformed_success_body_uses_fallback_message() {
        let error = ClientError::Decode("missing field `data`".to_string());
        assert_eq!(
            classify(&error, false, None),
            ErrorDisposition::Notify(FALLBACK_MESSAGE.to_string())
        );
        assert_eq!(
            classify(&error, false, Some("Could not load the dashboard.")),
            ErrorDisposition::Notify(
                "Could not load the dashboard.".to_string()
            )
        );
    }

    #[test]
    fn missing_credential_requires_login() {
        let disposition =
            classify(&ClientError::MissingCredential, false, None);
        assert_eq!(
            disposition,
            ErrorDisposition::RequireLogin(AUTH_REQUIRED_MESSAGE.to_string())
        );
    }
}
