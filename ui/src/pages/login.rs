use yew::prelude::*;

use crate::components::LoginForm;
use crate::components::login_form::AuthMode;

#[function_component]
pub fn LoginPage() -> Html {
    let mode = use_state(|| AuthMode::Login);

    let toggle = {
        let mode = mode.clone();
        let next = match *mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        Callback::from(move |_: MouseEvent| mode.set(next))
    };

    let (title, description, toggle_text) = match *mode {
        AuthMode::Login => (
            "Sign in",
            "Sign in to manage your inventory",
            "Don't have an account? Create one",
        ),
        AuthMode::Signup => (
            "Create account",
            "Set up a seller account",
            "Already have an account? Sign in",
        ),
    };

    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] space-y-4">
            <LoginForm title={title} description={description} mode={*mode} />
            <button
                onclick={toggle}
                class="text-sm text-neutral-600 dark:text-neutral-400 underline"
            >
                {toggle_text}
            </button>
        </div>
    }
}
