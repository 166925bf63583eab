pub mod use_annual_sales;
pub mod use_authed_fetch;
pub mod use_dashboard_summary;
pub mod use_login;
pub mod use_logout;
pub mod use_monthly_sales;
pub mod use_paginated_list;
pub mod use_push_route;
pub mod use_require_auth;
pub mod use_sales_history;
pub mod use_session_restore;
pub mod use_shoe;
pub mod use_shoes;
pub mod use_submit;
pub mod use_user;
pub mod use_users;

pub use use_annual_sales::use_annual_sales;
pub use use_authed_fetch::{AuthedFetchHandle, use_authed_fetch};
pub use use_dashboard_summary::use_dashboard_summary;
pub use use_login::{use_login, use_signup};
pub use use_logout::use_logout;
pub use use_monthly_sales::use_monthly_sales;
pub use use_paginated_list::{PaginatedListHandle, use_paginated_list};
pub use use_push_route::use_push_route;
pub use use_require_auth::use_require_auth;
pub use use_sales_history::use_sales_history;
pub use use_session_restore::use_session_restore;
pub use use_shoe::use_shoe;
pub use use_shoes::use_shoes;
pub use use_submit::{SubmitAuth, SubmitHandle, use_submit};
pub use use_user::use_user;
pub use use_users::use_users;
