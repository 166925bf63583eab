use std::future::Future;
use std::rc::Rc;

use payloads::{
    ApiClient, ClientError,
    requests::{FieldErrors, Validate},
    responses::Envelope,
};
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::error::{AUTH_REQUIRED_MESSAGE, ErrorDisposition, classify};
use crate::hooks::use_push_route;
use crate::{Route, get_api_client, session};

/// Whether a submission needs the credential token. Only the
/// password-reset request goes out without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAuth {
    Required,
    NotRequired,
}

/// Return type for form submission hooks.
pub struct SubmitHandle<R> {
    /// True only while the network round trip is in flight, so a submit
    /// button can disable itself precisely.
    pub is_submitting: bool,
    /// Inline validation messages, keyed by field. Client validation and
    /// server 400 field errors both land here.
    pub field_errors: FieldErrors,
    pub submit: Callback<R>,
}

/// Couples a validated request type to a single submit action.
///
/// Validation runs first; when it fails the call is never issued and the
/// field errors are exposed for inline display without a toast. On 2xx one
/// success toast is shown, preferring the server-supplied message over
/// `default_success`, and `on_success` receives the envelope's data (the
/// caller resets its fields there). Other failures go through the error
/// normalizer.
#[hook]
pub fn use_submit<R, T, F, Fut>(
    auth: SubmitAuth,
    default_success: &'static str,
    on_success: Callback<T>,
    submit_fn: F,
) -> SubmitHandle<R>
where
    R: Validate + 'static,
    T: 'static,
    F: Fn(ApiClient, R) -> Fut + 'static,
    Fut: Future<Output = Result<Envelope<T>, ClientError>> + 'static,
{
    let is_submitting = use_state(|| false);
    let field_errors = use_state(FieldErrors::default);
    let toast = use_toast();
    let push_route = use_push_route();

    let submit = {
        let is_submitting = is_submitting.clone();
        let field_errors = field_errors.clone();
        let toast = toast.clone();
        let push_route = push_route.clone();
        let submit_fn = Rc::new(submit_fn);

        use_callback((), move |request: R, _| {
            let errors = request.validate();
            if !errors.is_empty() {
                // Inline display only; no toast, no network call.
                field_errors.set(errors);
                return;
            }
            field_errors.set(FieldErrors::default());

            let is_submitting = is_submitting.clone();
            let field_errors = field_errors.clone();
            let toast = toast.clone();
            let push_route = push_route.clone();
            let on_success = on_success.clone();
            let submit_fn = submit_fn.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);

                let api_client = get_api_client();
                if auth == SubmitAuth::Required && api_client.token.is_none()
                {
                    toast.error(AUTH_REQUIRED_MESSAGE);
                    is_submitting.set(false);
                    push_route.emit(Route::Login);
                    return;
                }

                match submit_fn(api_client, request).await {
                    Ok(envelope) => {
                        let message = envelope
                            .message
                            .clone()
                            .unwrap_or_else(|| default_success.to_string());
                        toast.success(message);
                        on_success.emit(envelope.data);
                    }
                    Err(error) => {
                        tracing::warn!(%error, "submission failed");
                        match classify(&error, true, None) {
                            ErrorDisposition::FieldErrors(server_errors) => {
                                let mut merged = FieldErrors::default();
                                merged.extend_from_server(server_errors);
                                field_errors.set(merged);
                            }
                            ErrorDisposition::Notify(message) => {
                                toast.error(message);
                            }
                            ErrorDisposition::AuthFailure(message) => {
                                session::clear();
                                toast.error(message);
                                push_route.emit(Route::Login);
                            }
                            ErrorDisposition::RequireLogin(message) => {
                                toast.error(message);
                                push_route.emit(Route::Login);
                            }
                        }
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    SubmitHandle {
        is_submitting: *is_submitting,
        field_errors: (*field_errors).clone(),
        submit,
    }
}
