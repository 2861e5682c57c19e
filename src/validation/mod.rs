//! Declarative per-payload validation.
//!
//! Every rule for a payload runs to completion and failures accumulate, so a
//! client gets all violations in one 400 response instead of one at a time.

use crate::auth::Role;
use crate::error::{ApiError, FieldViolation};

pub const NAME_MIN: usize = 20;
pub const NAME_MAX: usize = 60;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 16;
pub const ADDRESS_MAX: usize = 400;
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Accumulates rule failures for a single request.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(self.0))
        }
    }
}

fn check_name(v: &mut Violations, field: &'static str, value: &str) {
    let len = value.trim().chars().count();
    if len < NAME_MIN || len > NAME_MAX {
        v.push(field, format!("Name must be between {} and {} characters", NAME_MIN, NAME_MAX));
    }
}

fn check_email(v: &mut Violations, field: &'static str, value: &str) {
    if !is_valid_email(value.trim()) {
        v.push(field, "Please provide a valid email");
    }
}

// Structural check only; deliverability is not our problem
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    }
}

fn check_password(v: &mut Violations, field: &'static str, value: &str) {
    let len = value.chars().count();
    if len < PASSWORD_MIN || len > PASSWORD_MAX {
        v.push(
            field,
            format!("Password must be between {} and {} characters", PASSWORD_MIN, PASSWORD_MAX),
        );
    }
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_special = value.chars().any(|c| SPECIAL_CHARS.contains(c));
    if !has_upper || !has_special {
        v.push(field, "Password must contain at least one uppercase letter and one special character");
    }
}

fn check_address(v: &mut Violations, field: &'static str, value: Option<&str>) {
    if let Some(address) = value {
        if address.chars().count() > ADDRESS_MAX {
            v.push(field, format!("Address cannot exceed {} characters", ADDRESS_MAX));
        }
    }
}

/// Rules for admin user creation and public signup. Returns the parsed role;
/// an absent role defaults to `user`.
pub fn new_user(
    name: &str,
    email: &str,
    password: &str,
    address: Option<&str>,
    role: Option<&str>,
) -> Result<Role, ApiError> {
    let mut v = Violations::new();
    check_name(&mut v, "name", name);
    check_email(&mut v, "email", email);
    check_password(&mut v, "password", password);
    check_address(&mut v, "address", address);

    let parsed = match role {
        None => Role::User,
        Some(raw) => match raw.parse::<Role>() {
            Ok(role) => role,
            Err(_) => {
                v.push("role", "Role must be one of admin, user, store_owner");
                Role::User
            }
        },
    };

    v.into_result()?;
    Ok(parsed)
}

/// Rules for admin store creation (the store's owner account is created from
/// the same payload, so the owner password is held to the password rules).
pub fn new_store(
    name: &str,
    email: &str,
    owner_password: &str,
    address: Option<&str>,
) -> Result<(), ApiError> {
    let mut v = Violations::new();
    check_name(&mut v, "name", name);
    check_email(&mut v, "email", email);
    check_password(&mut v, "ownerPassword", owner_password);
    check_address(&mut v, "address", address);
    v.into_result()
}

/// Rules for rating submission.
pub fn rating(value: i32) -> Result<(), ApiError> {
    let mut v = Violations::new();
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        v.push("rating", format!("Rating must be between {} and {}", RATING_MIN, RATING_MAX));
    }
    v.into_result()
}

/// Rules for password change.
pub fn password_change(current_password: &str, new_password: &str) -> Result<(), ApiError> {
    let mut v = Violations::new();
    if current_password.is_empty() {
        v.push("currentPassword", "Current password is required");
    }
    check_password(&mut v, "newPassword", new_password);
    v.into_result()
}

/// Rules for login.
pub fn login(email: &str, password: &str) -> Result<(), ApiError> {
    let mut v = Violations::new();
    check_email(&mut v, "email", email);
    if password.is_empty() {
        v.push("password", "Password is required");
    }
    v.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_NAME: &str = "A Perfectly Valid Store Name";
    const VALID_PASSWORD: &str = "Sup3rSecret!";

    #[test]
    fn valid_user_payload_passes_and_parses_role() {
        let role = new_user(VALID_NAME, "owner@example.com", VALID_PASSWORD, None, Some("store_owner"))
            .unwrap();
        assert_eq!(role, Role::StoreOwner);
    }

    #[test]
    fn missing_role_defaults_to_user() {
        let role = new_user(VALID_NAME, "a@b.co", VALID_PASSWORD, Some("12 Main St"), None).unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn violations_accumulate_instead_of_short_circuiting() {
        let err = new_user("short", "not-an-email", "weak", None, Some("wizard")).unwrap_err();
        match err {
            ApiError::Validation(violations) => {
                let fields: Vec<_> = violations.iter().map(|f| f.field).collect();
                assert!(fields.contains(&"name"));
                assert!(fields.contains(&"email"));
                assert!(fields.contains(&"password"));
                assert!(fields.contains(&"role"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn password_requires_uppercase_and_special() {
        let mut v = Violations::new();
        check_password(&mut v, "password", "alllowercase1");
        assert!(!v.is_empty());

        let mut v = Violations::new();
        check_password(&mut v, "password", "NoSpecials99");
        assert!(!v.is_empty());

        let mut v = Violations::new();
        check_password(&mut v, "password", VALID_PASSWORD);
        assert!(v.is_empty());
    }

    #[test]
    fn password_length_bounds() {
        let mut v = Violations::new();
        check_password(&mut v, "password", "Ab!x5");
        assert!(!v.is_empty());

        let mut v = Violations::new();
        check_password(&mut v, "password", "Abcdefghijklmno!x");
        assert!(!v.is_empty());
    }

    #[test]
    fn name_bounds_are_20_to_60() {
        let mut v = Violations::new();
        check_name(&mut v, "name", "Nineteen Characters");
        assert!(!v.is_empty());

        let mut v = Violations::new();
        check_name(&mut v, "name", &"x".repeat(61));
        assert!(!v.is_empty());

        let mut v = Violations::new();
        check_name(&mut v, "name", &"x".repeat(20));
        assert!(v.is_empty());
    }

    #[test]
    fn address_is_optional_but_bounded() {
        let mut v = Violations::new();
        check_address(&mut v, "address", None);
        assert!(v.is_empty());

        let mut v = Violations::new();
        check_address(&mut v, "address", Some(&"y".repeat(401)));
        assert!(!v.is_empty());
    }

    #[test]
    fn email_structure() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn rating_bounds() {
        assert!(rating(0).is_err());
        assert!(rating(6).is_err());
        for value in RATING_MIN..=RATING_MAX {
            assert!(rating(value).is_ok());
        }
    }

    #[test]
    fn password_change_requires_current() {
        let err = password_change("", "weak").unwrap_err();
        match err {
            ApiError::Validation(violations) => assert_eq!(violations.len(), 3),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
