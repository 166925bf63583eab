use std::future::Future;
use std::rc::Rc;

use payloads::{ApiClient, ClientError, ListQuery, responses::Pagination};
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::error::{AUTH_REQUIRED_MESSAGE, ErrorDisposition, classify};
use crate::hooks::use_push_route;
use crate::sequence::FetchSequence;
use crate::{Route, get_api_client, session};

/// Return type for paginated list hooks.
pub struct PaginatedListHandle<T> {
    pub items: Option<Vec<T>>,
    pub pagination: Pagination,
    pub search_term: String,
    pub is_loading: bool,
    /// Sets the search term; the list re-fetches page 1 with it.
    pub on_search: Callback<String>,
    /// Replaces the filter map and re-fetches page 1 with the current
    /// search term.
    pub on_filters_change: Callback<Vec<(String, String)>>,
    /// Fetches the given page with the current search term and filters.
    pub on_page_change: Callback<u32>,
    pub refetch: Callback<()>,
}

impl<T> PaginatedListHandle<T> {
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.items.is_none()
    }
}

/// Generalization of the authenticated fetch hook for list endpoints.
///
/// Owns page/limit/total state, the search term, and an arbitrary filter
/// map, and re-fetches when any of them changes. On success both the item
/// list and the pagination block are replaced wholesale from the response.
/// The missing-credential policy matches `use_authed_fetch`: one toast and
/// a redirect to the sign-in route.
#[hook]
pub fn use_paginated_list<T, F, Fut>(fetch_page: F) -> PaginatedListHandle<T>
where
    T: Clone + 'static,
    F: Fn(ApiClient, ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<(Vec<T>, Pagination), ClientError>> + 'static,
{
    let items = use_state(|| None::<Vec<T>>);
    let pagination = use_state(Pagination::default);
    let search_term = use_state(String::new);
    let filters = use_state(Vec::<(String, String)>::new);
    let is_loading = use_state(|| false);
    let seq = use_memo((), |_| FetchSequence::default());
    let toast = use_toast();
    let push_route = use_push_route();

    let run_fetch = {
        let items = items.clone();
        let pagination = pagination.clone();
        let is_loading = is_loading.clone();
        let seq = seq.clone();
        let toast = toast.clone();
        let push_route = push_route.clone();
        let fetch_page = Rc::new(fetch_page);

        use_callback((), move |query: ListQuery, _| {
            let items = items.clone();
            let pagination = pagination.clone();
            let is_loading = is_loading.clone();
            let seq = seq.clone();
            let toast = toast.clone();
            let push_route = push_route.clone();
            let fetch_page = fetch_page.clone();

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
                let result = fetch_page(api_client, query).await;

                if !seq.should_apply(ticket) {
                    return;
                }

                match result {
                    Ok((list, page_info)) => {
                        if !page_info.is_consistent() {
                            tracing::warn!(
                                ?page_info,
                                "server pagination block is inconsistent"
                            );
                        }
                        items.set(Some(list));
                        pagination.set(page_info);
                    }
                    Err(error) => {
                        tracing::warn!(%error, "list fetch failed");
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
                            ErrorDisposition::FieldErrors(_) => {}
                        }
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Initial fetch, and again whenever the search term changes.
    {
        let run_fetch = run_fetch.clone();
        let filters = filters.clone();
        use_effect_with((*search_term).clone(), move |search: &String| {
            run_fetch.emit(
                ListQuery::page(1)
                    .with_search(search.clone())
                    .with_filters((*filters).clone()),
            );
        });
    }

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |term: String| search_term.set(term))
    };

    let on_filters_change = {
        let filters = filters.clone();
        let search_term = search_term.clone();
        let run_fetch = run_fetch.clone();
        Callback::from(move |new_filters: Vec<(String, String)>| {
            filters.set(new_filters.clone());
            run_fetch.emit(
                ListQuery::page(1)
                    .with_search((*search_term).clone())
                    .with_filters(new_filters),
            );
        })
    };

    let on_page_change = {
        let filters = filters.clone();
        let search_term = search_term.clone();
        let run_fetch = run_fetch.clone();
        Callback::from(move |page: u32| {
            run_fetch.emit(
                ListQuery::page(page)
                    .with_search((*search_term).clone())
                    .with_filters((*filters).clone()),
            );
        })
    };

    let refetch = {
        let filters = filters.clone();
        let search_term = search_term.clone();
        let pagination = pagination.clone();
        let run_fetch = run_fetch.clone();
        Callback::from(move |_| {
            run_fetch.emit(
                ListQuery::page(pagination.page)
                    .with_search((*search_term).clone())
                    .with_filters((*filters).clone()),
            );
        })
    };

    PaginatedListHandle {
        items: (*items).clone(),
        pagination: *pagination,
        search_term: (*search_term).clone(),
        is_loading: *is_loading,
        on_search,
        on_filters_change,
        on_page_change,
        refetch,
    }
}
