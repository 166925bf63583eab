use payloads::{UserId, requests, responses::UserProfile};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::FieldErrorText;
use crate::hooks::{
    SubmitAuth, use_require_auth, use_submit, use_user,
};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
     rounded-md shadow-sm bg-white dark:bg-neutral-700
     text-neutral-900 dark:text-neutral-100
     focus:outline-none focus:ring-2 focus:ring-neutral-500";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub user_id: UserId,
}

#[function_component]
pub fn UserDetailPage(props: &Props) -> Html {
    use_require_auth();
    let user_id = props.user_id;
    let user = use_user(user_id);

    let username = use_state(String::new);
    let email = use_state(String::new);
    let role = use_state(String::new);

    {
        let username = username.clone();
        let email = email.clone();
        let role = role.clone();
        use_effect_with(
            user.data.clone(),
            move |data: &Option<UserProfile>| {
                if let Some(profile) = data {
                    username.set(profile.username.clone());
                    email.set(profile.email.clone());
                    role.set(profile.role.clone());
                }
            },
        );
    }

    let update = {
        let refetch = user.refetch.clone();
        use_submit(
            SubmitAuth::Required,
            "Seller updated",
            Callback::from(move |_: UserProfile| refetch.emit(())),
            |api_client, request: requests::UpdateUser| async move {
                api_client.update_user(&request).await
            },
        )
    };

    let display = {
        let refetch = user.refetch.clone();
        use_submit(
            SubmitAuth::Required,
            "Display status updated",
            Callback::from(move |_: UserProfile| refetch.emit(())),
            |api_client, request: requests::UpdateDisplayStatus| async move {
                api_client.update_display_status(&request).await
            },
        )
    };

    let bind_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                role.set(select.value());
            }
        })
    };

    let on_update = {
        let username = username.clone();
        let email = email.clone();
        let role = role.clone();
        let submit = update.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(requests::UpdateUser {
                user_id,
                username: (*username).clone(),
                email: (*email).clone(),
                role: (*role).clone(),
            });
        })
    };

    if user.is_initial_loading() {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Loading seller..."}
            </p>
        };
    }

    let Some(profile) = &user.data else {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Seller not found"}
            </p>
        };
    };

    let on_toggle_display = {
        let submit = display.submit.clone();
        let display_active = profile.display_active;
        Callback::from(move |_: MouseEvent| {
            submit.emit(requests::UpdateDisplayStatus {
                user_id,
                display_active: !display_active,
            });
        })
    };

    html! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {&profile.username}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!(
                        "{} - joined {}",
                        profile.role,
                        profile.created_at.strftime("%Y-%m-%d")
                    )}
                </p>
            </div>

            <form onsubmit={on_update} class="space-y-6 bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Profile"}
                </h2>
                <div>
                    <label for="username" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Username"}
                    </label>
                    <input
                        type="text"
                        id="username"
                        class={INPUT_CLASS}
                        value={(*username).clone()}
                        oninput={bind_input(username.clone())}
                    />
                    <FieldErrorText errors={update.field_errors.clone()} field="username" />
                </div>
                <div>
                    <label for="email" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Email"}
                    </label>
                    <input
                        type="email"
                        id="email"
                        class={INPUT_CLASS}
                        value={(*email).clone()}
                        oninput={bind_input(email.clone())}
                    />
                    <FieldErrorText errors={update.field_errors.clone()} field="email" />
                </div>
                <div>
                    <label for="role" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Role"}
                    </label>
                    <select
                        id="role"
                        onchange={on_role_change}
                        class={INPUT_CLASS}
                    >
                        <option value="seller" selected={*role == "seller"}>
                            {"Seller"}
                        </option>
                        <option value="admin" selected={*role == "admin"}>
                            {"Admin"}
                        </option>
                    </select>
                </div>
                <button
                    type="submit"
                    disabled={update.is_submitting}
                    class="px-4 py-2 rounded-md text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors duration-200"
                >
                    if update.is_submitting { {"Saving..."} } else { {"Save changes"} }
                </button>
            </form>

            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6 flex items-center justify-between">
                <div>
                    <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {"Public listing"}
                    </h2>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {if profile.display_active {
                            "This seller is shown on public listings"
                        } else {
                            "This seller is hidden from public listings"
                        }}
                    </p>
                </div>
                <button
                    onclick={on_toggle_display}
                    disabled={display.is_submitting}
                    class="px-4 py-2 rounded-md text-sm font-medium border
                           border-neutral-300 dark:border-neutral-600
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if profile.display_active { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}
