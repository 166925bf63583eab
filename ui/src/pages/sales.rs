use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{PaginationControls, SearchBox};
use crate::hooks::{use_require_auth, use_sales_history};

#[function_component]
pub fn SalesPage() -> Html {
    use_require_auth();
    let sales = use_sales_history();

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Sales"}
            </h1>

            <SearchBox
                on_search={sales.on_search.clone()}
                placeholder="Search by shoe name..."
            />

            if sales.is_initial_loading() {
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading sales..."}
                </p>
            } else if let Some(items) = &sales.items {
                if items.is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No sales recorded"}
                    </p>
                } else {
                    <div class="bg-white dark:bg-neutral-800 rounded-lg shadow overflow-x-auto">
                        <table class="w-full text-sm text-left">
                            <thead>
                                <tr class="text-neutral-600 dark:text-neutral-400 border-b border-neutral-200 dark:border-neutral-700">
                                    <th class="px-4 py-3">{"Date"}</th>
                                    <th class="px-4 py-3">{"Shoe"}</th>
                                    <th class="px-4 py-3">{"Size"}</th>
                                    <th class="px-4 py-3">{"Quantity"}</th>
                                    <th class="px-4 py-3">{"Unit price"}</th>
                                    <th class="px-4 py-3">{"Total"}</th>
                                    <th class="px-4 py-3">{"Seller"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for items.iter().map(|sale| html! {
                                    <tr class="border-b border-neutral-100 dark:border-neutral-700/50">
                                        <td class="px-4 py-3">
                                            {format!("{}", sale.sold_at.strftime("%Y-%m-%d"))}
                                        </td>
                                        <td class="px-4 py-3">
                                            <Link<Route>
                                                to={Route::ShoeDetail { id: sale.shoe_id.0 }}
                                                classes="underline"
                                            >
                                                {&sale.shoe_name}
                                            </Link<Route>>
                                        </td>
                                        <td class="px-4 py-3">{&sale.size}</td>
                                        <td class="px-4 py-3">{sale.quantity}</td>
                                        <td class="px-4 py-3">{format!("${}", sale.unit_price)}</td>
                                        <td class="px-4 py-3">{format!("${}", sale.total)}</td>
                                        <td class="px-4 py-3">
                                            {sale.seller_name.clone().unwrap_or_else(|| "-".to_string())}
                                        </td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }

                <PaginationControls
                    pagination={sales.pagination}
                    on_page_change={sales.on_page_change.clone()}
                    is_loading={sales.is_loading}
                />
            }
        </div>
    }
}
