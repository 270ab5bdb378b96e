//! Schemas for every form of the banking front end.
//!
//! Field names double as the keys of [`FormState`](crate::FormState) and of
//! [`ValidationErrors`](crate::ValidationErrors).

use crate::validation::{FieldSpec, Pattern, Rule, Schema, Transform};

/// A selectable value with its display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

pub const BANKS: &[Choice] = &[
    Choice { value: "Sky", label: "Sky Bank" },
    Choice { value: "Zenith", label: "Zenith Bank" },
    Choice { value: "Access", label: "Access Bank" },
    Choice { value: "First", label: "First Bank" },
    Choice { value: "UBA", label: "UBA" },
];

pub const NETWORKS: &[Choice] = &[
    Choice { value: "mtn", label: "MTN" },
    Choice { value: "glo", label: "GLO" },
    Choice { value: "airtel", label: "AIRTEL" },
    Choice { value: "9mobile", label: "9MOBILE" },
];

const BANK_VALUES: &[&str] = &["Sky", "Zenith", "Access", "First", "UBA"];
const NETWORK_VALUES: &[&str] = &["mtn", "glo", "airtel", "9mobile"];

/// Label of a choice value, falling back to the upper-cased value.
pub fn label_for(choices: &[Choice], value: &str) -> String {
    choices
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.label.to_string())
        .unwrap_or_else(|| value.to_uppercase())
}

pub mod transfer {
    pub const ACCOUNT_NUMBER: &str = "accountNumber";
    pub const BANK_NAME: &str = "bankName";
    pub const RECIPIENT_NAME: &str = "recipientName";
    pub const AMOUNT: &str = "amount";
    pub const NARRATION: &str = "narration";
}

pub fn transfer() -> Schema {
    use transfer::*;
    Schema::new(vec![
        FieldSpec::new(ACCOUNT_NUMBER)
            .required("Account number is required")
            .rule(Rule::ExactLen { len: 10, message: "Must be 10 digits" })
            .rule(Rule::Pattern { pattern: Pattern::Digits, message: "Must be 10 digits" }),
        FieldSpec::new(BANK_NAME)
            .required("Bank name is required")
            .rule(Rule::OneOf { values: BANK_VALUES, message: "Select a bank" }),
        FieldSpec::new(RECIPIENT_NAME)
            .transform(Transform::Trim)
            .required("Recipient name is required"),
        FieldSpec::new(AMOUNT)
            .transform(Transform::Trim)
            .required("Amount is required")
            .rule(Rule::Number { message: "Amount must be a number" })
            .rule(Rule::Min { min: 100.0, message: "₦100 - ₦1,000,000" })
            .rule(Rule::Max { max: 1_000_000.0, message: "₦100 - ₦1,000,000" })
            .rule(Rule::Integer { message: "Amount must be a whole number" }),
        FieldSpec::new(NARRATION),
    ])
}

pub mod airtime {
    pub const PHONE: &str = "phone";
    pub const NETWORK: &str = "network";
    pub const AMOUNT: &str = "amount";
}

pub fn airtime() -> Schema {
    use airtime::*;
    Schema::new(vec![
        FieldSpec::new(PHONE)
            .transform(Transform::Trim)
            .required("Phone number is required.")
            .rule(Rule::Pattern {
                pattern: Pattern::NigerianPhone,
                message: "Enter a valid Nigerian phone number.",
            }),
        FieldSpec::new(NETWORK)
            .required("Network is required.")
            .rule(Rule::OneOf { values: NETWORK_VALUES, message: "Invalid network." }),
        FieldSpec::new(AMOUNT)
            .transform(Transform::Trim)
            .required("Amount is required.")
            .rule(Rule::Number { message: "Amount must be a number." })
            .rule(Rule::Positive { message: "Amount must be positive." })
            .rule(Rule::Integer { message: "Amount must be a whole number." }),
    ])
}

pub mod card {
    pub const CARD_NUMBER: &str = "cardNumber";
    pub const EXPIRY: &str = "expiry";
    pub const CVV: &str = "cvv";
}

pub fn card() -> Schema {
    use card::*;
    Schema::new(vec![
        FieldSpec::new(CARD_NUMBER)
            .transform(Transform::StripWhitespace)
            .required("Card number is required")
            .rule(Rule::Pattern {
                pattern: Pattern::CardNumber,
                message: "Card number must be at least 12 digits",
            }),
        FieldSpec::new(EXPIRY)
            .required("Expiry date is required")
            .rule(Rule::Pattern { pattern: Pattern::Expiry, message: "Use MM/YY format" }),
        FieldSpec::new(CVV)
            .required("CVV is required")
            .rule(Rule::Pattern { pattern: Pattern::Cvv, message: "CVV must be 3 digits" }),
    ])
}

pub mod profile {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
}

pub fn profile() -> Schema {
    use profile::*;
    Schema::new(vec![
        FieldSpec::new(NAME).transform(Transform::Trim).required("Name is required."),
        FieldSpec::new(EMAIL)
            .transform(Transform::Trim)
            .required("Email is required.")
            .rule(Rule::Pattern { pattern: Pattern::Email, message: "Enter a valid email." }),
        FieldSpec::new(PHONE).transform(Transform::Trim).required("Phone is required."),
    ])
}

pub mod contact {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const MESSAGE: &str = "message";
}

pub fn contact() -> Schema {
    use contact::*;
    Schema::new(vec![
        FieldSpec::new(NAME).transform(Transform::Trim).required("Name is required."),
        FieldSpec::new(EMAIL)
            .required("Email is required.")
            .rule(Rule::Pattern { pattern: Pattern::Email, message: "Valid email required." }),
        FieldSpec::new(MESSAGE)
            .transform(Transform::Trim)
            .required("Message is required.")
            .rule(Rule::MinLen { len: 8, message: "Message must be 8+ characters." }),
    ])
}

pub mod password {
    pub const CURRENT: &str = "oldPw";
    pub const NEW: &str = "newPw";
    pub const CONFIRM: &str = "confirm";
}

pub fn password_change() -> Schema {
    use password::*;
    Schema::new(vec![
        FieldSpec::new(CURRENT).required("Current password is required"),
        FieldSpec::new(NEW)
            .required("New password is required")
            .rule(Rule::MinLen { len: 6, message: "New password must be at least 6 characters" }),
        FieldSpec::new(CONFIRM)
            .required("Confirm password is required")
            .rule(Rule::SameAs { field: NEW, message: "Passwords must match" }),
    ])
}

pub mod login {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
}

pub fn login() -> Schema {
    use login::*;
    Schema::new(vec![
        FieldSpec::new(EMAIL)
            .required("Email is required")
            .rule(Rule::Pattern { pattern: Pattern::Email, message: "Invalid email address" }),
        FieldSpec::new(PASSWORD)
            .required("Password is required")
            .rule(Rule::MinLen { len: 6, message: "Invalid password" }),
    ])
}

pub mod signup {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM: &str = "confirmPassword";
    pub const AGREE: &str = "agreeToTerms";
}

pub fn signup() -> Schema {
    use signup::*;
    Schema::new(vec![
        FieldSpec::new(FULL_NAME)
            .required("Full name is required")
            .rule(Rule::MinLen { len: 2, message: "At least 2 characters" }),
        FieldSpec::new(EMAIL)
            .required("Email is required")
            .rule(Rule::Pattern { pattern: Pattern::Email, message: "Invalid email address" }),
        FieldSpec::new(PASSWORD)
            .required("Password is required")
            .rule(Rule::MinLen { len: 6, message: "Password must be at least 6 characters" }),
        FieldSpec::new(CONFIRM)
            .required("Confirm password is required")
            .rule(Rule::SameAs { field: PASSWORD, message: "Passwords must match" }),
        FieldSpec::new(AGREE)
            .required("You must agree to the terms and privacy policy")
            .rule(Rule::Checked { message: "You must agree to the terms and privacy policy" }),
    ])
}
