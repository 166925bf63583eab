pub mod create_shoe;
pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod sales;
pub mod shoe_detail;
pub mod shoes;
pub mod user_detail;
pub mod users;

pub use create_shoe::CreateShoePage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use sales::SalesPage;
pub use shoe_detail::ShoeDetailPage;
pub use shoes::ShoesPage;
pub use user_detail::UserDetailPage;
pub use users::UsersPage;
