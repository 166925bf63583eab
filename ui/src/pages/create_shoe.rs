use payloads::requests;
use payloads::responses::Shoe;
use rust_decimal::Decimal;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::Route;
use crate::components::FieldErrorText;
use crate::hooks::{
    SubmitAuth, use_push_route, use_require_auth, use_submit,
};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
     rounded-md shadow-sm bg-white dark:bg-neutral-700
     text-neutral-900 dark:text-neutral-100
     focus:outline-none focus:ring-2 focus:ring-neutral-500";

#[function_component]
pub fn CreateShoePage() -> Html {
    use_require_auth();
    let push_route = use_push_route();

    let name_ref = use_node_ref();
    let brand_ref = use_node_ref();
    let price_ref = use_node_ref();
    let size_ref = use_node_ref();
    let quantity_ref = use_node_ref();
    let sizes = use_state(Vec::<requests::SizeQuantity>::new);

    let on_success = {
        let push_route = push_route.clone();
        Callback::from(move |_: Shoe| push_route.emit(Route::Shoes))
    };

    let handle = use_submit(
        SubmitAuth::Required,
        "Shoe created",
        on_success,
        |api_client, request: requests::CreateShoe| async move {
            api_client.create_shoe(&request).await
        },
    );

    let input_value = |node_ref: &NodeRef| {
        node_ref
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    };

    let on_add_size = {
        let size_ref = size_ref.clone();
        let quantity_ref = quantity_ref.clone();
        let sizes = sizes.clone();
        Callback::from(move |_: MouseEvent| {
            let size = input_value(&size_ref).trim().to_string();
            let quantity = input_value(&quantity_ref)
                .trim()
                .parse::<u32>()
                .unwrap_or_default();
            if size.is_empty() {
                return;
            }
            let mut next = (*sizes).clone();
            next.retain(|entry| entry.size != size);
            next.push(requests::SizeQuantity { size, quantity });
            sizes.set(next);

            if let Some(input) = size_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            if let Some(input) = quantity_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    let on_remove_size = {
        let sizes = sizes.clone();
        Callback::from(move |size: String| {
            let mut next = (*sizes).clone();
            next.retain(|entry| entry.size != size);
            sizes.set(next);
        })
    };

    let on_submit = {
        let name_ref = name_ref.clone();
        let brand_ref = brand_ref.clone();
        let price_ref = price_ref.clone();
        let sizes = sizes.clone();
        let submit = handle.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let price = input_value(&price_ref)
                .trim()
                .parse::<Decimal>()
                .unwrap_or(Decimal::ZERO);
            submit.emit(requests::CreateShoe {
                name: input_value(&name_ref),
                brand: input_value(&brand_ref),
                price,
                sizes: (*sizes).clone(),
            });
        })
    };

    html! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Add shoe"}
            </h1>

            <form onsubmit={on_submit} class="space-y-6 bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
                <div>
                    <label for="name" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Name"}
                    </label>
                    <input ref={name_ref} type="text" id="name" class={INPUT_CLASS} placeholder="Air Max 90" />
                    <FieldErrorText errors={handle.field_errors.clone()} field="name" />
                </div>

                <div>
                    <label for="brand" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Brand"}
                    </label>
                    <input ref={brand_ref} type="text" id="brand" class={INPUT_CLASS} placeholder="Nike" />
                    <FieldErrorText errors={handle.field_errors.clone()} field="brand" />
                </div>

                <div>
                    <label for="price" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Price"}
                    </label>
                    <input ref={price_ref} type="text" inputmode="decimal" id="price" class={INPUT_CLASS} placeholder="129.99" />
                    <FieldErrorText errors={handle.field_errors.clone()} field="price" />
                </div>

                <div>
                    <span class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Sizes"}
                    </span>
                    <div class="flex gap-2">
                        <input ref={size_ref} type="text" class={INPUT_CLASS} placeholder="Size, e.g. 42" />
                        <input ref={quantity_ref} type="number" min="0" class={INPUT_CLASS} placeholder="Quantity" />
                        <button
                            type="button"
                            onclick={on_add_size}
                            class="px-4 py-2 rounded-md text-sm font-medium border
                                   border-neutral-300 dark:border-neutral-600"
                        >
                            {"Add"}
                        </button>
                    </div>
                    <FieldErrorText errors={handle.field_errors.clone()} field="sizes" />

                    if !sizes.is_empty() {
                        <ul class="mt-3 space-y-1">
                            { for sizes.iter().map(|entry| {
                                let size = entry.size.clone();
                                let on_remove_size = on_remove_size.clone();
                                html! {
                                    <li class="flex items-center justify-between text-sm
                                               text-neutral-700 dark:text-neutral-300">
                                        <span>{format!("Size {}: {} units", entry.size, entry.quantity)}</span>
                                        <button
                                            type="button"
                                            onclick={Callback::from(move |_| on_remove_size.emit(size.clone()))}
                                            class="text-red-700 dark:text-red-400 underline"
                                        >
                                            {"Remove"}
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
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
                    if handle.is_submitting { {"Creating..."} } else { {"Create shoe"} }
                </button>
            </form>
        </div>
    }
}
