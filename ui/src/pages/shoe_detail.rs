use payloads::{ShoeId, requests, responses::Shoe};
use rust_decimal::Decimal;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::Route;
use crate::components::FieldErrorText;
use crate::contexts::toast::use_toast;
use crate::error::{ErrorDisposition, classify};
use crate::hooks::{
    SubmitAuth, use_push_route, use_require_auth, use_shoe, use_submit,
};
use crate::{get_api_client, session};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
     rounded-md shadow-sm bg-white dark:bg-neutral-700
     text-neutral-900 dark:text-neutral-100
     focus:outline-none focus:ring-2 focus:ring-neutral-500";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub shoe_id: ShoeId,
}

#[function_component]
pub fn ShoeDetailPage(props: &Props) -> Html {
    use_require_auth();
    let shoe_id = props.shoe_id;
    let shoe = use_shoe(shoe_id);
    let toast = use_toast();
    let push_route = use_push_route();

    let name = use_state(String::new);
    let brand = use_state(String::new);
    let price = use_state(String::new);

    // Seed the edit form once the shoe arrives (and again after updates).
    {
        let name = name.clone();
        let brand = brand.clone();
        let price = price.clone();
        use_effect_with(shoe.data.clone(), move |data: &Option<Shoe>| {
            if let Some(shoe) = data {
                name.set(shoe.name.clone());
                brand.set(shoe.brand.clone());
                price.set(shoe.price.to_string());
            }
        });
    }

    let update = {
        let refetch = shoe.refetch.clone();
        use_submit(
            SubmitAuth::Required,
            "Shoe updated",
            Callback::from(move |_: Shoe| refetch.emit(())),
            |api_client, request: requests::UpdateShoe| async move {
                api_client.update_shoe(&request).await
            },
        )
    };

    let stock = {
        let refetch = shoe.refetch.clone();
        use_submit(
            SubmitAuth::Required,
            "Stock updated",
            Callback::from(move |_: Shoe| refetch.emit(())),
            |api_client, request: requests::UpdateSizeStock| async move {
                api_client.update_size_stock(&request).await
            },
        )
    };

    let size_ref = use_node_ref();
    let quantity_ref = use_node_ref();

    let bind = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_update = {
        let name = name.clone();
        let brand = brand.clone();
        let price = price.clone();
        let submit = update.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let parsed_price = price
                .trim()
                .parse::<Decimal>()
                .unwrap_or(Decimal::ZERO);
            submit.emit(requests::UpdateShoe {
                shoe_id,
                name: (*name).clone(),
                brand: (*brand).clone(),
                price: parsed_price,
            });
        })
    };

    let on_stock_update = {
        let size_ref = size_ref.clone();
        let quantity_ref = quantity_ref.clone();
        let submit = stock.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let size = size_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let quantity = quantity_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default()
                .trim()
                .parse::<u32>()
                .unwrap_or_default();
            submit.emit(requests::UpdateSizeStock {
                shoe_id,
                size,
                quantity,
            });
        })
    };

    let on_delete = {
        let toast = toast.clone();
        let push_route = push_route.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .map(|window| {
                    window
                        .confirm_with_message("Delete this shoe?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let toast = toast.clone();
            let push_route = push_route.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().delete_shoe(&shoe_id).await {
                    Ok(envelope) => {
                        let message = envelope
                            .message
                            .unwrap_or_else(|| "Shoe deleted".to_string());
                        toast.success(message);
                        push_route.emit(Route::Shoes);
                    }
                    Err(error) => {
                        tracing::warn!(%error, "delete failed");
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
            });
        })
    };

    if shoe.is_initial_loading() {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Loading shoe..."}
            </p>
        };
    }

    let Some(current) = &shoe.data else {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Shoe not found"}
            </p>
        };
    };

    html! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                        {&current.name}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!(
                            "{} - {} - {} units in stock",
                            current.brand, current.status,
                            current.total_stock()
                        )}
                    </p>
                </div>
                <button
                    onclick={on_delete}
                    class="px-4 py-2 rounded-md text-sm font-medium
                           text-red-700 dark:text-red-400 border
                           border-red-300 dark:border-red-700"
                >
                    {"Delete"}
                </button>
            </div>

            <form onsubmit={on_update} class="space-y-6 bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Details"}
                </h2>
                <div>
                    <label for="name" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Name"}
                    </label>
                    <input
                        type="text"
                        id="name"
                        class={INPUT_CLASS}
                        value={(*name).clone()}
                        oninput={bind(name.clone())}
                    />
                    <FieldErrorText errors={update.field_errors.clone()} field="name" />
                </div>
                <div>
                    <label for="brand" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Brand"}
                    </label>
                    <input
                        type="text"
                        id="brand"
                        class={INPUT_CLASS}
                        value={(*brand).clone()}
                        oninput={bind(brand.clone())}
                    />
                    <FieldErrorText errors={update.field_errors.clone()} field="brand" />
                </div>
                <div>
                    <label for="price" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Price"}
                    </label>
                    <input
                        type="text"
                        inputmode="decimal"
                        id="price"
                        class={INPUT_CLASS}
                        value={(*price).clone()}
                        oninput={bind(price.clone())}
                    />
                    <FieldErrorText errors={update.field_errors.clone()} field="price" />
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

            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6 space-y-4">
                <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Stock by size"}
                </h2>
                if current.sizes.is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No sizes recorded"}
                    </p>
                } else {
                    <table class="w-full text-sm text-left">
                        <thead>
                            <tr class="text-neutral-600 dark:text-neutral-400 border-b border-neutral-200 dark:border-neutral-700">
                                <th class="py-2">{"Size"}</th>
                                <th class="py-2">{"Quantity"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for current.sizes.iter().map(|entry| html! {
                                <tr class="border-b border-neutral-100 dark:border-neutral-700/50">
                                    <td class="py-2">{&entry.size}</td>
                                    <td class="py-2">{entry.quantity}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                }

                <form onsubmit={on_stock_update} class="flex gap-2 items-start">
                    <div class="flex-1">
                        <input ref={size_ref} type="text" class={INPUT_CLASS} placeholder="Size" />
                        <FieldErrorText errors={stock.field_errors.clone()} field="size" />
                    </div>
                    <input ref={quantity_ref} type="number" min="0" class={INPUT_CLASS} placeholder="Quantity" />
                    <button
                        type="submit"
                        disabled={stock.is_submitting}
                        class="px-4 py-2 rounded-md text-sm font-medium border
                               border-neutral-300 dark:border-neutral-600
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {"Set stock"}
                    </button>
                </form>
            </div>
        </div>
    }
}
