//! Client-side form rules.
//!
//! Rule checks return a message string; an empty string means the value passes.

use std::sync::OnceLock;

use regex::Regex;

use super::entities::PermissionRoutes;

/// Minimum sub-admin password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A single password requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    Uppercase,
    Digit,
    SpecialCharacter,
    MinLength,
}

impl PasswordRule {
    /// All rules in the order they are reported.
    pub const ALL: [Self; 4] = [
        Self::Uppercase,
        Self::Digit,
        Self::SpecialCharacter,
        Self::MinLength,
    ];

    /// Returns whether `password` satisfies this rule.
    #[must_use]
    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            Self::Uppercase => password.chars().any(char::is_uppercase),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::SpecialCharacter => password
                .chars()
                .any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
        }
    }

    const fn requirement(self) -> &'static str {
        match self {
            Self::Uppercase => "one uppercase letter",
            Self::Digit => "one number",
            Self::SpecialCharacter => "one special character",
            Self::MinLength => "at least 6 characters",
        }
    }
}

/// Returns the rules `password` fails, in reporting order.
#[must_use]
pub fn failed_password_rules(password: &str) -> Vec<PasswordRule> {
    PasswordRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(password))
        .collect()
}

/// Validates a sub-admin password.
#[must_use]
pub fn validate_password(password: &str) -> String {
    if password.is_empty() {
        return "Password is required".to_string();
    }

    let missing: Vec<_> = failed_password_rules(password)
        .into_iter()
        .map(PasswordRule::requirement)
        .collect();

    if missing.is_empty() {
        String::new()
    } else {
        format!("Password must contain {}", missing.join(", "))
    }
}

/// Validates that at least one permission route is selected.
#[must_use]
pub fn validate_permissions(routes: PermissionRoutes) -> String {
    if routes.is_empty() {
        "Select at least one permission".to_string()
    } else {
        String::new()
    }
}

/// Validates an email address.
///
/// # Panics
///
/// Panics if the internal regex is invalid.
#[must_use]
pub fn validate_email(email: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex")
    });

    let email = email.trim();
    if email.is_empty() {
        "Email is required".to_string()
    } else if re.is_match(email) {
        String::new()
    } else {
        "Enter a valid email address".to_string()
    }
}

/// Validates a required free-text field.
#[must_use]
pub fn validate_required(label: &str, value: &str) -> String {
    if value.trim().is_empty() {
        format!("{label} is required")
    } else {
        String::new()
    }
}

/// Validates a positive integer field.
#[must_use]
pub fn validate_positive_number(label: &str, value: &str) -> String {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => String::new(),
        _ => format!("{label} must be a positive number"),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("secret1!" ; "missing_uppercase")]
    #[test_case("Secret!!" ; "missing_digit")]
    #[test_case("Secret11" ; "missing_special")]
    #[test_case("S1!a" ; "too_short")]
    fn test_weak_password_yields_message(password: &str) {
        assert!(!validate_password(password).is_empty());
    }

    #[test_case("Secret1!" ; "all_rules")]
    #[test_case("A1#bcd" ; "exactly_min_length")]
    fn test_strong_password_yields_empty_message(password: &str) {
        assert_eq!(validate_password(password), "");
    }

    #[test]
    fn test_message_lists_every_missing_rule() {
        let message = validate_password("abc");
        assert!(message.contains("uppercase"));
        assert!(message.contains("number"));
        assert!(message.contains("special"));
        assert!(message.contains("6 characters"));
    }

    #[test]
    fn test_failed_rules_order() {
        assert_eq!(
            failed_password_rules("abcdef"),
            vec![
                PasswordRule::Uppercase,
                PasswordRule::Digit,
                PasswordRule::SpecialCharacter
            ]
        );
    }

    #[test]
    fn test_permissions_required() {
        assert!(!validate_permissions(PermissionRoutes::empty()).is_empty());
        assert!(validate_permissions(PermissionRoutes::FAQS).is_empty());
    }

    #[test_case("ops@pawboard.io", true ; "valid")]
    #[test_case("ops@pawboard", false ; "no_tld")]
    #[test_case("ops pawboard.io", false ; "no_at")]
    #[test_case("", false ; "empty")]
    fn test_email(email: &str, valid: bool) {
        assert_eq!(validate_email(email).is_empty(), valid);
    }

    #[test]
    fn test_positive_number() {
        assert!(validate_positive_number("Coins", "25").is_empty());
        assert!(!validate_positive_number("Coins", "0").is_empty());
        assert!(!validate_positive_number("Coins", "ten").is_empty());
    }
}
