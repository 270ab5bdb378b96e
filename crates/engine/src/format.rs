//! Input normalization and display helpers shared by the screens.

/// Keeps ASCII digits only.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Formats card input as typed: digits only, grouped by four, at most 19 digits.
pub fn format_card_input(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(19).collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Formats expiry input as typed: `0927` -> `09/27`.
pub fn format_expiry_input(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(4).collect();
    if digits.len() >= 3 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

pub fn format_cvv_input(raw: &str) -> String {
    digits_only(raw).chars().take(3).collect()
}

/// `4111 1111 1111 1234` -> `**** **** **** 1234`.
pub fn mask_card(number: &str) -> String {
    let digits = digits_only(number);
    let start = digits.len().saturating_sub(4);
    format!("**** **** **** {}", &digits[start..])
}

pub fn mask_account(number: &str) -> String {
    "•".repeat(number.chars().count().max(10))
}

/// Normalizes a Nigerian number to the international `+234` form.
///
/// Values that are not recognisably Nigerian are returned unchanged.
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() == 11 && digits.starts_with('0') {
        return format!("+234{}", &digits[1..]);
    }
    if digits.len() == 13 && digits.starts_with("234") {
        return format!("+{digits}");
    }
    if digits.len() == 10 && !digits.starts_with('0') {
        return format!("+234{digits}");
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_input_groups_by_four() {
        assert_eq!(format_card_input("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_input("4111-11"), "4111 11");
        assert_eq!(format_card_input("41111"), "4111 1");
    }

    #[test]
    fn expiry_input_inserts_slash() {
        assert_eq!(format_expiry_input("09"), "09");
        assert_eq!(format_expiry_input("092"), "09/2");
        assert_eq!(format_expiry_input("09/275"), "09/27");
    }

    #[test]
    fn masks_keep_last_four() {
        assert_eq!(mask_card("4111 1111 1111 1234"), "**** **** **** 1234");
        assert_eq!(mask_card("12"), "**** **** **** 12");
    }

    #[test]
    fn phone_normalizes_to_international() {
        assert_eq!(format_phone("08012345678"), "+2348012345678");
        assert_eq!(format_phone("+2348012345678"), "+2348012345678");
        assert_eq!(format_phone("8012345678"), "+2348012345678");
        assert_eq!(format_phone("1234"), "1234");
    }
}
