use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{PaginationControls, SearchBox};
use crate::hooks::{use_require_auth, use_shoes};

#[function_component]
pub fn ShoesPage() -> Html {
    use_require_auth();
    let shoes = use_shoes();

    let on_status_change = {
        let on_filters_change = shoes.on_filters_change.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>()
            else {
                return;
            };
            let status = select.value();
            let filters = if status.is_empty() {
                Vec::new()
            } else {
                vec![("status".to_string(), status)]
            };
            on_filters_change.emit(filters);
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Inventory"}
                </h1>
                <Link<Route>
                    to={Route::CreateShoe}
                    classes="px-4 py-2 rounded-md text-sm font-medium text-white
                             bg-neutral-900 hover:bg-neutral-800
                             dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                             transition-colors duration-200"
                >
                    {"Add shoe"}
                </Link<Route>>
            </div>

            <div class="flex flex-col sm:flex-row gap-2">
                <div class="flex-1">
                    <SearchBox
                        on_search={shoes.on_search.clone()}
                        placeholder="Search by name or brand..."
                    />
                </div>
                <select
                    onchange={on_status_change}
                    class="px-3 py-2 border border-neutral-300 dark:border-neutral-600
                           rounded-md shadow-sm bg-white dark:bg-neutral-700
                           text-neutral-900 dark:text-neutral-100"
                >
                    <option value="" selected={true}>{"All statuses"}</option>
                    <option value="available">{"Available"}</option>
                    <option value="low">{"Low stock"}</option>
                    <option value="out_of_stock">{"Out of stock"}</option>
                </select>
            </div>

            if shoes.is_initial_loading() {
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading shoes..."}
                </p>
            } else if let Some(items) = &shoes.items {
                if items.is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No shoes found"}
                    </p>
                } else {
                    <div class="bg-white dark:bg-neutral-800 rounded-lg shadow overflow-x-auto">
                        <table class="w-full text-sm text-left">
                            <thead>
                                <tr class="text-neutral-600 dark:text-neutral-400 border-b border-neutral-200 dark:border-neutral-700">
                                    <th class="px-4 py-3">{"Name"}</th>
                                    <th class="px-4 py-3">{"Brand"}</th>
                                    <th class="px-4 py-3">{"Price"}</th>
                                    <th class="px-4 py-3">{"Status"}</th>
                                    <th class="px-4 py-3">{"In stock"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for items.iter().map(|shoe| html! {
                                    <tr class="border-b border-neutral-100 dark:border-neutral-700/50">
                                        <td class="px-4 py-3">
                                            <Link<Route>
                                                to={Route::ShoeDetail { id: shoe.id.0 }}
                                                classes="font-medium underline"
                                            >
                                                {&shoe.name}
                                            </Link<Route>>
                                        </td>
                                        <td class="px-4 py-3">{&shoe.brand}</td>
                                        <td class="px-4 py-3">{format!("${}", shoe.price)}</td>
                                        <td class="px-4 py-3">{&shoe.status}</td>
                                        <td class="px-4 py-3">{shoe.total_stock()}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }

                <PaginationControls
                    pagination={shoes.pagination}
                    on_page_change={shoes.on_page_change.clone()}
                    is_loading={shoes.is_loading}
                />
            }
        </div>
    }
}
