use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::hooks::use_logout;
use crate::session::Session;

#[function_component]
pub fn Header() -> Html {
    let (session, _) = use_store::<Session>();
    let on_logout = use_logout();

    let nav_link_class = "text-sm font-medium text-neutral-600 \
                          dark:text-neutral-300 hover:text-neutral-900 \
                          dark:hover:text-neutral-100 transition-colors";

    html! {
        <header class="border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <Link<Route> to={Route::Dashboard} classes="text-lg font-bold">
                    {"FAN-STOCK"}
                </Link<Route>>

                if session.is_authenticated() {
                    <nav class="flex items-center gap-6">
                        <Link<Route> to={Route::Shoes} classes={nav_link_class}>
                            {"Inventory"}
                        </Link<Route>>
                        <Link<Route> to={Route::Sales} classes={nav_link_class}>
                            {"Sales"}
                        </Link<Route>>
                        <Link<Route> to={Route::Users} classes={nav_link_class}>
                            {"Sellers"}
                        </Link<Route>>
                        if let Some(user) = &session.user {
                            <span class="text-sm text-neutral-500 dark:text-neutral-400">
                                {&user.username}
                            </span>
                        }
                        <button onclick={on_logout} class={nav_link_class}>
                            {"Sign out"}
                        </button>
                    </nav>
                } else {
                    <Link<Route> to={Route::Login} classes={nav_link_class}>
                        {"Sign in"}
                    </Link<Route>>
                }
            </div>
        </header>
    }
}
