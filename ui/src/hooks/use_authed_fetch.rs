use std::future::Future;
use std::rc::Rc;

use payloads::{ApiClient, ClientError};
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::error::{AUTH_REQUIRED_MESSAGE, ErrorDisposition, classify};
use crate::hooks::use_push_route;
use crate::sequence::FetchSequence;
use crate::{Route, get_api_client, session};

/// Generic authenticated fetch hook return type.
pub struct AuthedFetchHandle<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub refetch: Callback<()>,
}

impl<T> AuthedFetchHandle<T> {
    /// True while the first fetch is still in flight.
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.data.is_none()
    }
}

/// Generic authenticated fetch hook composer.
///
/// Fetches automatically on mount and whenever `deps` change, and exposes
/// a manual `refetch`. Each invocation:
/// reads the credential token at call time; when it is absent, shows one
/// toast, navigates to the sign-in route, and returns without a network
/// call. Otherwise the fetch function receives a ready client and its
/// result lands in `data` verbatim. Failures go through the error
/// normalizer; the loading flag always ends false.
///
/// Calls are tagged with a monotonic sequence number so that when a newer
/// fetch overtakes an older one, the stale completion is discarded
/// (latest-request-wins).
#[hook]
pub fn use_authed_fetch<T, D, F, Fut>(
    deps: D,
    fetch_fn: F,
) -> AuthedFetchHandle<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let data = use_state(|| None::<T>);
    let is_loading = use_state(|| false);
    let seq = use_memo((), |_| FetchSequence::default());
    let toast = use_toast();
    let push_route = use_push_route();

    let refetch = {
        let data = data.clone();
        let is_loading = is_loading.clone();
        let seq = seq.clone();
        let toast = toast.clone();
        let push_route = push_route.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let is_loading = is_loading.clone();
            let seq = seq.clone();
            let toast = toast.clone();
            let push_route = push_route.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let api_client = get_api_client();
                if api_client.token.is_none() {
                    toast.error(AUTH_REQUIRED_MESSAGE);
                    is_loading.set(false);
                    push_route.emit(Route::Login);
                    return;
                }

                let ticket = seq.begin();
                let result = fetch_fn(api_client).await;

                // A newer call superseded this one; its completion owns
                // the state from here on.
                if !seq.should_apply(ticket) {
                    return;
                }

                match result {
                    Ok(payload) => data.set(Some(payload)),
                    Err(error) => {
                        tracing::warn!(%error, "fetch failed");
                        match classify(&error, false, None) {
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
                            // Never produced without a field handler.
                            ErrorDisposition::FieldErrors(_) => {}
                        }
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change. A fetch already in
    // flight is no reason to skip: overlapping calls are safe, the
    // newest ticket wins.
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    AuthedFetchHandle {
        data: (*data).clone(),
        is_loading: *is_loading,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
