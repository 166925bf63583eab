use yew::prelude::*;

use crate::hooks::{
    use_annual_sales, use_dashboard_summary, use_monthly_sales,
    use_require_auth,
};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: i8) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|m| MONTH_NAMES.get(m))
        .copied()
        .unwrap_or("Unknown")
}

#[function_component]
pub fn DashboardPage() -> Html {
    let user = use_require_auth();
    let summary = use_dashboard_summary();
    let monthly = use_monthly_sales(None);
    let annual = use_annual_sales(None);

    let stat_card = |label: &str, value: String| {
        html! {
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {label.to_string()}
                </p>
                <p class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {value}
                </p>
            </div>
        }
    };

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Dashboard"}
                </h1>
                if let Some(user) = &user {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Welcome back, {}", user.username)}
                    </p>
                }
            </div>

            if summary.is_initial_loading() {
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading summary..."}
                </p>
            } else if let Some(summary) = &summary.data {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    {stat_card("Total sales", summary.total_sales.to_string())}
                    {stat_card(
                        "Total revenue",
                        format!("${}", summary.total_revenue),
                    )}
                    {stat_card("Shoes listed", summary.total_shoes.to_string())}
                    {stat_card(
                        "Low stock",
                        summary.low_stock_count.to_string(),
                    )}
                </div>
            }

            if let Some(monthly) = &monthly.data {
                <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
                    <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {format!(
                            "{} {}",
                            month_name(monthly.month), monthly.year
                        )}
                    </h2>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!(
                            "{} orders, ${} revenue",
                            monthly.orders, monthly.revenue
                        )}
                    </p>
                </div>
            }

            if let Some(annual) = &annual.data {
                <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
                    <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                        {format!("Sales in {}", annual.year)}
                    </h2>
                    <table class="w-full text-sm text-left">
                        <thead>
                            <tr class="text-neutral-600 dark:text-neutral-400 border-b border-neutral-200 dark:border-neutral-700">
                                <th class="py-2">{"Month"}</th>
                                <th class="py-2">{"Orders"}</th>
                                <th class="py-2">{"Revenue"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for annual.monthly.iter().map(|bucket| html! {
                                <tr class="border-b border-neutral-100 dark:border-neutral-700/50">
                                    <td class="py-2">{month_name(bucket.month)}</td>
                                    <td class="py-2">{bucket.orders}</td>
                                    <td class="py-2">{format!("${}", bucket.revenue)}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                    <p class="mt-4 text-sm text-neutral-600 dark:text-neutral-400">
                        {format!(
                            "{} orders, ${} revenue for the year",
                            annual.orders, annual.revenue
                        )}
                    </p>
                </div>
            }
        </div>
    }
}
