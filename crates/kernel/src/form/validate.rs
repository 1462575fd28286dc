//! Password rule evaluation.
//!
//! A candidate password and its confirmation are checked against a fixed,
//! ordered list of rules. The first rule that fails decides the outcome;
//! later rules are not evaluated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum number of characters a password must contain.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Characters accepted by the special character rule.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_-+={[}]|:;"'<,>."#;

/// Message reported for a password that passes every rule.
pub const VALID_MESSAGE: &str = "Password is valid";

/// A single password rule, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// At least this many characters.
    MinLength(usize),
    /// At least one `A-Z`.
    HasUppercase,
    /// At least one `a-z`.
    HasLowercase,
    /// At least one `0-9`.
    HasDigit,
    /// At least one character from [`SPECIAL_CHARACTERS`].
    HasSpecialChar,
    /// Password and confirmation must be identical.
    ConfirmationMismatch,
}

impl RuleId {
    /// All rules in the order they are evaluated.
    pub const ALL: [RuleId; 6] = [
        RuleId::MinLength(MIN_PASSWORD_LENGTH),
        RuleId::HasUppercase,
        RuleId::HasLowercase,
        RuleId::HasDigit,
        RuleId::HasSpecialChar,
        RuleId::ConfirmationMismatch,
    ];

    /// Machine name used in logs and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            RuleId::MinLength(_) => "min_length",
            RuleId::HasUppercase => "has_uppercase",
            RuleId::HasLowercase => "has_lowercase",
            RuleId::HasDigit => "has_digit",
            RuleId::HasSpecialChar => "has_special_char",
            RuleId::ConfirmationMismatch => "confirmation_mismatch",
        }
    }

    /// The message shown to the user when this rule fails.
    pub fn message(&self) -> String {
        match self {
            RuleId::MinLength(min) => format!("Password must be at least {min} characters"),
            RuleId::HasUppercase => {
                "Password must contain at least one uppercase letter".to_string()
            }
            RuleId::HasLowercase => {
                "Password must contain at least one lowercase letter".to_string()
            }
            RuleId::HasDigit => "Password must contain at least one number".to_string(),
            RuleId::HasSpecialChar => format!(
                "Password must contain at least one special character ({SPECIAL_CHARACTERS})"
            ),
            RuleId::ConfirmationMismatch => "Password does not match confirmation".to_string(),
        }
    }

    /// Whether the rule holds for the given pair.
    fn passes(&self, password: &str, confirmation: &str) -> bool {
        match self {
            RuleId::MinLength(min) => password.encode_utf16().count() >= *min,
            RuleId::HasUppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            RuleId::HasLowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            RuleId::HasDigit => password.chars().any(|c| c.is_ascii_digit()),
            RuleId::HasSpecialChar => password.chars().any(is_special_character),
            RuleId::ConfirmationMismatch => password == confirmation,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether a character belongs to the special character set.
pub fn is_special_character(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Outcome of classifying a password/confirmation pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    /// Nothing has been classified since the last edit.
    #[default]
    Unvalidated,

    /// Every rule passed.
    Valid { message: String },

    /// The first failing rule and its message.
    Invalid { reason: RuleId, message: String },
}

impl ValidationResult {
    /// Build the valid outcome.
    pub fn valid() -> Self {
        Self::Valid {
            message: VALID_MESSAGE.to_string(),
        }
    }

    /// Build an invalid outcome for the given rule.
    pub fn invalid(reason: RuleId) -> Self {
        Self::Invalid {
            message: reason.message(),
            reason,
        }
    }

    /// The user-facing message, if there is one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Unvalidated => None,
            ValidationResult::Valid { message } | ValidationResult::Invalid { message, .. } => {
                Some(message.as_str())
            }
        }
    }

    /// The failing rule, if any.
    pub fn reason(&self) -> Option<RuleId> {
        match self {
            ValidationResult::Invalid { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    pub fn is_validated(&self) -> bool {
        !matches!(self, ValidationResult::Unvalidated)
    }
}

/// Classify a password and its confirmation.
///
/// Rules are checked in [`RuleId::ALL`] order and the first failure is
/// returned. Only the confirmation rule looks at `confirmation`.
pub fn validate(password: &str, confirmation: &str) -> ValidationResult {
    RuleId::ALL
        .iter()
        .find(|rule| !rule.passes(password, confirmation))
        .map_or_else(ValidationResult::valid, |rule| {
            ValidationResult::invalid(*rule)
        })
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn reason(password: &str, confirmation: &str) -> Option<RuleId> {
        validate(password, confirmation).reason()
    }

    #[test]
    fn test_short_passwords_fail_min_length() {
        for password in ["", "a", "A1$", "aB3$e"] {
            assert_eq!(
                reason(password, password),
                Some(RuleId::MinLength(MIN_PASSWORD_LENGTH)),
                "{password:?}"
            );
        }
    }

    #[test]
    fn test_min_length_counts_utf16_units_not_bytes() {
        // Four UTF-16 units, seven bytes.
        assert_eq!(
            reason("ééAé", "ééAé"),
            Some(RuleId::MinLength(MIN_PASSWORD_LENGTH))
        );
        // Six characters pass the length rule even when multi-byte.
        assert_eq!(reason("ééééAa", "ééééAa"), Some(RuleId::HasDigit));
        // An astral character is two units: five chars, length six.
        let password = "aA1$\u{1F600}";
        assert_eq!(password.chars().count(), 5);
        assert!(validate(password, password).is_valid());
        // Four chars and five units is still short.
        assert_eq!(
            reason("aA\u{1F600}$", "aA\u{1F600}$"),
            Some(RuleId::MinLength(MIN_PASSWORD_LENGTH))
        );
    }

    #[test]
    fn test_missing_uppercase_wins_over_later_rules() {
        assert_eq!(reason("abcdef", "zzz"), Some(RuleId::HasUppercase));
        assert_eq!(reason("abc123$%", "abc123$%"), Some(RuleId::HasUppercase));
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        assert_eq!(reason("ÀÉÎabc1$", "ÀÉÎabc1$"), Some(RuleId::HasUppercase));
        assert_eq!(reason("ABCßø1$", "ABCßø1$"), Some(RuleId::HasLowercase));
    }

    #[test]
    fn test_each_special_character_is_accepted() {
        for c in SPECIAL_CHARACTERS.chars() {
            let password = format!("abcABC1{c}");
            assert!(validate(&password, &password).is_valid(), "{c:?}");
        }
    }

    #[test]
    fn test_other_symbols_are_not_special() {
        for c in ['?', '/', '~', '`', '\\', ' '] {
            let password = format!("abcABC1{c}");
            assert_eq!(
                reason(&password, &password),
                Some(RuleId::HasSpecialChar),
                "{c:?}"
            );
        }
    }

    #[test]
    fn test_confirmation_compared_exactly() {
        assert_eq!(
            reason("abcABC123$", "abcABC123$ "),
            Some(RuleId::ConfirmationMismatch)
        );
        assert_eq!(
            reason("abcABC123$", "ABCabc123$"),
            Some(RuleId::ConfirmationMismatch)
        );
    }

    #[test]
    fn test_no_maximum_length() {
        let password = format!("aA1${}", "x".repeat(10_000));
        assert!(validate(&password, &password).is_valid());
    }

    #[test]
    fn test_valid_message() {
        let result = validate("abcABC123$%", "abcABC123$%");
        assert_eq!(result, ValidationResult::valid());
        assert_eq!(result.message(), Some("Password is valid"));
        assert_eq!(result.reason(), None);
    }

    #[test]
    fn test_rule_messages() {
        assert_eq!(
            RuleId::MinLength(6).message(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            RuleId::HasSpecialChar.message(),
            "Password must contain at least one special character (!@#$%^&*()_-+={[}]|:;\"'<,>.)"
        );
    }

    #[test]
    fn test_rule_order() {
        let mut sorted = RuleId::ALL;
        sorted.sort();
        assert_eq!(sorted, RuleId::ALL);
    }

    #[test]
    fn test_unvalidated_has_no_message() {
        let result = ValidationResult::default();
        assert!(!result.is_validated());
        assert_eq!(result.message(), None);
    }

    #[test]
    fn test_result_serialization() {
        let json = serde_json::to_value(validate("abc", "abc")).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["reason"]["min_length"], 6);
        assert_eq!(json["message"], "Password must be at least 6 characters");

        let json = serde_json::to_value(ValidationResult::Unvalidated).unwrap();
        assert_eq!(json, serde_json::json!({"status": "unvalidated"}));
    }
}
