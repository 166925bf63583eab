use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{PaginationControls, SearchBox};
use crate::hooks::{use_require_auth, use_users};

#[function_component]
pub fn UsersPage() -> Html {
    use_require_auth();
    let users = use_users();

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Sellers"}
            </h1>

            <SearchBox
                on_search={users.on_search.clone()}
                placeholder="Search by username or email..."
            />

            if users.is_initial_loading() {
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading sellers..."}
                </p>
            } else if let Some(items) = &users.items {
                if items.is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No sellers found"}
                    </p>
                } else {
                    <div class="bg-white dark:bg-neutral-800 rounded-lg shadow overflow-x-auto">
                        <table class="w-full text-sm text-left">
                            <thead>
                                <tr class="text-neutral-600 dark:text-neutral-400 border-b border-neutral-200 dark:border-neutral-700">
                                    <th class="px-4 py-3">{"Username"}</th>
                                    <th class="px-4 py-3">{"Email"}</th>
                                    <th class="px-4 py-3">{"Role"}</th>
                                    <th class="px-4 py-3">{"Listed"}</th>
                                    <th class="px-4 py-3">{"Joined"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for items.iter().map(|user| html! {
                                    <tr class="border-b border-neutral-100 dark:border-neutral-700/50">
                                        <td class="px-4 py-3">
                                            <Link<Route>
                                                to={Route::UserDetail { id: user.id.0 }}
                                                classes="font-medium underline"
                                            >
                                                {&user.username}
                                            </Link<Route>>
                                        </td>
                                        <td class="px-4 py-3">{&user.email}</td>
                                        <td class="px-4 py-3">{&user.role}</td>
                                        <td class="px-4 py-3">
                                            {if user.display_active { "Yes" } else { "No" }}
                                        </td>
                                        <td class="px-4 py-3">
                                            {format!("{}", user.created_at.strftime("%Y-%m-%d"))}
                                        </td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }

                <PaginationControls
                    pagination={users.pagination}
                    on_page_change={users.on_page_change.clone()}
                    is_loading={users.is_loading}
                />
            }
        </div>
    }
}
