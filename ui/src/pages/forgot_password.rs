use payloads::requests;
use payloads::responses::SuccessMessage;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::FieldErrorText;
use crate::hooks::{SubmitAuth, use_submit};

#[function_component]
pub fn ForgotPasswordPage() -> Html {
    let email_ref = use_node_ref();

    let on_success = {
        let email_ref = email_ref.clone();
        Callback::from(move |_: SuccessMessage| {
            if let Some(input) = email_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    let handle = use_submit(
        SubmitAuth::NotRequired,
        "Check your inbox for a reset link.",
        on_success,
        |api_client, request: requests::ForgotPassword| async move {
            api_client.forgot_password(&request).await
        },
    );

    let on_submit = {
        let email_ref = email_ref.clone();
        let submit = handle.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            submit.emit(requests::ForgotPassword { email });
        })
    };

    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] space-y-4">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Reset password"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Enter your email and we'll send you a reset link"}
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
                            class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                                   rounded-md shadow-sm bg-white dark:bg-neutral-700
                                   text-neutral-900 dark:text-neutral-100
                                   focus:outline-none focus:ring-2 focus:ring-neutral-500"
                            placeholder="Enter your email"
                        />
                        <FieldErrorText errors={handle.field_errors.clone()} field="email" />
                    </div>

                    <button
                        type="submit"
                        disabled={handle.is_submitting}
                        class="w-full flex justify-center py-2 px-4 border border-transparent
                               rounded-md shadow-sm text-sm font-medium text-white
                               bg-neutral-900 hover:bg-neutral-800
                               dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                               disabled:opacity-50 disabled:cursor-not-allowed
                               transition-colors duration-200"
                    >
                        if handle.is_submitting {
                            {"Sending..."}
                        } else {
                            {"Send reset link"}
                        }
                    </button>
                </form>
            </div>

            <Link<Route>
                to={Route::Login}
                classes="text-sm text-neutral-600 dark:text-neutral-400 underline"
            >
                {"Back to sign in"}
            </Link<Route>>
        </div>
    }
}
