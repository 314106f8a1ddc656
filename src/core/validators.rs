use regex::Regex;
use std::sync::LazyLock;

static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());
static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap());
static CARD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9a-z]+$").unwrap());
static IDENTIFICATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{17}[0-9X]$").unwrap());
static CELLPHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+86[0-9]{11}$").unwrap());
static CAPTCHA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// Optional leading minus, then one or more decimal digits.
pub fn is_valid_integer(raw_value: &str) -> bool {
    INTEGER_RE.is_match(raw_value)
}

/// Optional leading minus, digits, optional fractional part.
pub fn is_valid_float(raw_value: &str) -> bool {
    FLOAT_RE.is_match(raw_value)
}

/// Lowercase-alphanumeric card token. The leading minus is accepted for
/// compatibility with existing tokens.
pub fn is_valid_card(raw_value: &str) -> bool {
    CARD_RE.is_match(raw_value)
}

/// 18-character national ID: 17 digits plus a digit or uppercase X checksum.
pub fn is_valid_identification(raw_value: &str) -> bool {
    IDENTIFICATION_RE.is_match(raw_value)
}

/// Mainland China mobile number with the mandatory +86 prefix.
pub fn is_valid_cellphone(raw_value: &str) -> bool {
    CELLPHONE_RE.is_match(raw_value)
}

/// Six-digit numeric verification code.
pub fn is_valid_captcha(raw_value: &str) -> bool {
    CAPTCHA_RE.is_match(raw_value)
}
