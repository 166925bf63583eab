use payloads::ApiClient;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod error;
pub mod hooks;
mod logs;
pub mod pages;
pub mod sequence;
pub mod session;

use components::layout::Header;
use components::toast::ToastContainer;
use contexts::toast::ToastProvider;
use hooks::use_session_restore;
use pages::{
    CreateShoePage, DashboardPage, ForgotPasswordPage, LoginPage,
    NotFoundPage, SalesPage, ShoeDetailPage, ShoesPage, UserDetailPage,
    UsersPage,
};

/// Backend base address - build-time configuration with a same-origin
/// fallback.
fn backend_address() -> String {
    option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        })
}

/// Global API client carrying the latest credential token at call time.
pub fn get_api_client() -> ApiClient {
    ApiClient {
        address: backend_address(),
        token: session::current_token(),
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AppShell />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[function_component]
fn AppShell() -> Html {
    use_session_restore();
    html! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Switch<Route> render={switch} />
            </main>
            <ToastContainer />
        </div>
    }
}

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/shoes")]
    Shoes,
    #[at("/shoes/new")]
    CreateShoe,
    #[at("/shoes/:id")]
    ShoeDetail { id: Uuid },
    #[at("/sales")]
    Sales,
    #[at("/users")]
    Users,
    #[at("/users/:id")]
    UserDetail { id: Uuid },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::Shoes => html! { <ShoesPage /> },
        Route::CreateShoe => html! { <CreateShoePage /> },
        Route::ShoeDetail { id } => {
            html! { <ShoeDetailPage shoe_id={payloads::ShoeId(id)} /> }
        }
        Route::Sales => html! { <SalesPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::UserDetail { id } => {
            html! { <UserDetailPage user_id={payloads::UserId(id)} /> }
        }
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
