//! Validation rules for the registration form

use super::error::{ErrorSet, FieldValidationError};
use super::fields::{FieldName, FormFields};
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const NAME_MESSAGE: &str = "Name should contain only letters and spaces.";
pub const MOBILE_MESSAGE: &str = "Mobile should be a 10-digit number.";
pub const EMAIL_MESSAGE: &str = "Enter a valid email.";
pub const ADDRESS_MESSAGE: &str = "Address is required.";
pub const GENDER_MESSAGE: &str = "Select only one gender.";
pub const DOB_MESSAGE: &str = "Date of birth is required.";
pub const COURSE_MESSAGE: &str = "Select a course.";

pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_REGEX.is_match(mobile)
}

/// Loose `local@domain.tld` shape. Extra dots and segments are accepted.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// One field rule: the field it reports on, the check, and its message
struct Rule {
    field: FieldName,
    passes: fn(&FormFields) -> bool,
    message: &'static str,
}

const RULES: [Rule; 7] = [
    Rule {
        field: FieldName::Name,
        passes: |f| is_valid_name(&f.name),
        message: NAME_MESSAGE,
    },
    Rule {
        field: FieldName::Mobile,
        passes: |f| is_valid_mobile(&f.mobile),
        message: MOBILE_MESSAGE,
    },
    Rule {
        field: FieldName::Email,
        passes: |f| is_valid_email(&f.email),
        message: EMAIL_MESSAGE,
    },
    Rule {
        field: FieldName::Address,
        passes: |f| !f.address.is_empty(),
        message: ADDRESS_MESSAGE,
    },
    Rule {
        field: FieldName::Gender,
        passes: |f| f.gender.is_exclusive(),
        message: GENDER_MESSAGE,
    },
    Rule {
        field: FieldName::Dob,
        passes: |f| !f.dob.is_empty(),
        message: DOB_MESSAGE,
    },
    Rule {
        field: FieldName::Course,
        passes: |f| f.course.is_some(),
        message: COURSE_MESSAGE,
    },
];

/// Evaluate every rule against `fields`.
///
/// Rules are independent: a failure in one never skips another, so the
/// result holds one entry per failing field.
pub fn validate(fields: &FormFields) -> ErrorSet {
    RULES
        .iter()
        .filter(|rule| !(rule.passes)(fields))
        .map(|rule| FieldValidationError {
            field: rule.field,
            message: rule.message.to_string(),
        })
        .collect()
}
