use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::FieldErrorText;
use crate::hooks::{use_login, use_signup};

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    Signup,
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub mode: AuthMode,
}

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
     rounded-md shadow-sm bg-white dark:bg-neutral-700
     text-neutral-900 dark:text-neutral-100
     focus:outline-none focus:ring-2 focus:ring-neutral-500";

#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    let email_ref = use_node_ref();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let login = use_login();
    let signup = use_signup();

    let (field_errors, is_submitting) = match props.mode {
        AuthMode::Login => (login.field_errors.clone(), login.is_submitting),
        AuthMode::Signup => {
            (signup.field_errors.clone(), signup.is_submitting)
        }
    };

    let on_submit = {
        let email_ref = email_ref.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let mode = props.mode;
        let login_submit = login.submit.clone();
        let signup_submit = signup.submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let password = password_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            match mode {
                AuthMode::Login => {
                    login_submit.emit(requests::LoginCredentials {
                        email,
                        password,
                    });
                }
                AuthMode::Signup => {
                    let username = username_ref
                        .cast::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default();
                    signup_submit.emit(requests::Signup {
                        email,
                        username,
                        password,
                    });
                }
            }
        })
    };

    html! {
        <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
            <div class="mb-8 text-center">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                    {&props.title}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {&props.description}
                </p>
            </div>

            <form onsubmit={on_submit} class="space-y-6">
                <div>
                    <label for="email" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Email"}
                    </label>
                    <input
                        ref={email_ref}
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        class={INPUT_CLASS}
                        placeholder="Enter your email"
                    />
                    <FieldErrorText errors={field_errors.clone()} field="email" />
                </div>

                if props.mode == AuthMode::Signup {
                    <div>
                        <label for="username" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Username"}
                        </label>
                        <input
                            ref={username_ref}
                            type="text"
                            id="username"
                            name="username"
                            autocomplete="username"
                            class={INPUT_CLASS}
                            placeholder="Choose a username"
                        />
                        <FieldErrorText errors={field_errors.clone()} field="username" />
                    </div>
                }

                <div>
                    <label for="password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Password"}
                    </label>
                    <input
                        ref={password_ref}
                        type="password"
                        id="password"
                        name="password"
                        autocomplete={if props.mode == AuthMode::Signup { "new-password" } else { "current-password" }}
                        class={INPUT_CLASS}
                        placeholder={if props.mode == AuthMode::Signup { "Choose a password" } else { "Enter your password" }}
                    />
                    <FieldErrorText errors={field_errors} field="password" />
                </div>

                <button
                    type="submit"
                    disabled={is_submitting}
                    class="w-full flex justify-center py-2 px-4 border border-transparent
                           rounded-md shadow-sm text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors duration-200"
                >
                    if is_submitting {
                        {match props.mode {
                            AuthMode::Login => "Signing in...",
                            AuthMode::Signup => "Creating account...",
                        }}
                    } else {
                        {match props.mode {
                            AuthMode::Login => "Sign in",
                            AuthMode::Signup => "Create account",
                        }}
                    }
                </button>
            </form>

            if props.mode == AuthMode::Login {
                <div class="mt-6 text-center">
                    <Link<Route>
                        to={Route::ForgotPassword}
                        classes="text-sm text-neutral-600 dark:text-neutral-400 underline"
                    >
                        {"Forgot your password?"}
                    </Link<Route>>
                </div>
            }
        </div>
    }
}
