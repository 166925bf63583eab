pub mod field_error;
pub mod layout;
pub mod login_form;
pub mod pagination_controls;
pub mod search_box;
pub mod toast;

pub use field_error::FieldErrorText;
pub use login_form::LoginForm;
pub use pagination_controls::PaginationControls;
pub use search_box::SearchBox;
