use std::collections::HashMap;

use crate::{ShoeId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const EMAIL_MAX_LEN: usize = 255;
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;
pub const SHOE_NAME_MAX_LEN: usize = 255;
pub const PASSWORD_MIN_LEN: usize = 6;

/// Field-keyed validation errors collected before a form submits.
///
/// A non-empty map blocks the submission; the consuming form renders the
/// messages inline next to their fields. No notification is emitted for
/// these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(HashMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Merges server-supplied field errors (a 400 response's `errors` map)
    /// into the same inline display path client validation uses.
    pub fn extend_from_server(&mut self, errors: HashMap<String, String>) {
        self.0.extend(errors);
    }
}

/// A request body that can be validated before it is submitted.
pub trait Validate {
    /// Returns field-level errors; an empty map means the request may be
    /// sent.
    fn validate(&self) -> FieldErrors;
}

/// Validation result for email addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidation {
    Valid,
    Required,
    TooLong,
    InvalidFormat,
}

impl EmailValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Required => Some("Email is required"),
            Self::TooLong => Some("Email must be at most 255 characters"),
            Self::InvalidFormat => Some("Please enter a valid email address"),
        }
    }
}

/// Validate an email address. Format checking is intentionally shallow;
/// the server owns the real rules.
pub fn validate_email(email: &str) -> EmailValidation {
    if email.is_empty() {
        return EmailValidation::Required;
    }
    if email.len() > EMAIL_MAX_LEN {
        return EmailValidation::TooLong;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return EmailValidation::InvalidFormat;
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return EmailValidation::InvalidFormat;
    }
    EmailValidation::Valid
}

fn push_email_errors(email: &str, errors: &mut FieldErrors) {
    if let Some(msg) = validate_email(email).error_message() {
        errors.insert("email", msg);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl Validate for LoginCredentials {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        push_email_errors(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signup {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl Validate for Signup {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        push_email_errors(&self.email, &mut errors);
        if self.username.len() < USERNAME_MIN_LEN {
            errors.insert(
                "username",
                "Username must be at least 3 characters",
            );
        } else if self.username.len() > USERNAME_MAX_LEN {
            errors.insert("username", "Username must be at most 30 characters");
        }
        if self.password.len() < PASSWORD_MIN_LEN {
            errors.insert(
                "password",
                "Password must be at least 6 characters",
            );
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPassword {
    pub email: String,
}

impl Validate for ForgotPassword {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        push_email_errors(&self.email, &mut errors);
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeQuantity {
    pub size: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateShoe {
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub sizes: Vec<SizeQuantity>,
}

impl Validate for CreateShoe {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        } else if self.name.len() > SHOE_NAME_MAX_LEN {
            errors.insert("name", "Name must be at most 255 characters");
        }
        if self.brand.trim().is_empty() {
            errors.insert("brand", "Brand is required");
        }
        if self.price <= Decimal::ZERO {
            errors.insert("price", "Price must be greater than zero");
        }
        if self.sizes.is_empty() {
            errors.insert("sizes", "At least one size is required");
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateShoe {
    pub shoe_id: ShoeId,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
}

impl Validate for UpdateShoe {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        if self.brand.trim().is_empty() {
            errors.insert("brand", "Brand is required");
        }
        if self.price <= Decimal::ZERO {
            errors.insert("price", "Price must be greater than zero");
        }
        errors
    }
}

/// Adjusts the stocked quantity of a single size of a shoe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSizeStock {
    pub shoe_id: ShoeId,
    pub size: String,
    pub quantity: u32,
}

impl Validate for UpdateSizeStock {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.size.trim().is_empty() {
            errors.insert("size", "Size is required");
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl Validate for UpdateUser {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        push_email_errors(&self.email, &mut errors);
        if self.username.len() < USERNAME_MIN_LEN {
            errors.insert(
                "username",
                "Username must be at least 3 characters",
            );
        }
        errors
    }
}

/// Toggles whether a seller appears on public listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDisplayStatus {
    pub user_id: UserId,
    pub display_active: bool,
}

impl Validate for UpdateDisplayStatus {
    fn validate(&self) -> FieldErrors {
        FieldErrors::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_required() {
        let form = ForgotPassword { email: String::new() };
        let errors = form.validate();
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn malformed_email_rejected() {
        assert_eq!(
            validate_email("not-an-email"),
            EmailValidation::InvalidFormat
        );
        assert_eq!(validate_email("a@b"), EmailValidation::InvalidFormat);
        assert!(validate_email("a@b.co").is_valid());
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginCredentials {
            email: "seller@fan-stock.example".into(),
            password: String::new(),
        };
        let errors = form.validate();
        assert_eq!(errors.get("email"), None);
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn valid_login_passes() {
        let form = LoginCredentials {
            email: "seller@fan-stock.example".into(),
            password: "supersecret".into(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn create_shoe_checks_price_and_sizes() {
        let form = CreateShoe {
            name: "Air Max 90".into(),
            brand: "Nike".into(),
            price: Decimal::ZERO,
            sizes: vec![],
        };
        let errors = form.validate();
        assert_eq!(
            errors.get("price"),
            Some("Price must be greater than zero")
        );
        assert_eq!(errors.get("sizes"), Some("At least one size is required"));
    }

    #[test]
    fn server_errors_merge_into_field_errors() {
        let mut errors = FieldErrors::default();
        errors.insert("name", "Name is required");
        let mut server = HashMap::new();
        server.insert("brand".to_string(), "Unknown brand".to_string());
        errors.extend_from_server(server);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("brand"), Some("Unknown brand"));
    }
}
