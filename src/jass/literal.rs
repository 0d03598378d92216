//! Literal decoders
//!
//! Pure functions from the raw text of a literal to its value. They return `None` on
//! malformed text or overflow and leave reporting to the grammar, which turns a `None` into
//! a labelled parse error.

/// Base-10 integer. Fails outside the `i32` range.
pub fn decode_decimal(text: &str) -> Option<i32> {
    if !all_digits(text, 10) {
        return None;
    }
    text.parse().ok()
}

/// Base-8 integer including its leading `0`. The value is read as unsigned 32-bit and
/// reinterpreted, so `037777777777` is `-1`.
pub fn decode_octal(text: &str) -> Option<i32> {
    if !all_digits(text, 8) {
        return None;
    }
    u32::from_str_radix(text, 8).ok().map(|value| value as i32)
}

/// Base-16 integer written as `$FF` or `0xFF`. Reinterpreted from unsigned 32-bit like octal.
pub fn decode_hexadecimal(text: &str) -> Option<i32> {
    let digits = hexadecimal_digits(text)?;
    if !all_digits(digits, 16) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(|value| value as i32)
}

fn hexadecimal_digits(text: &str) -> Option<&str> {
    if let Some(rest) = text.strip_prefix('$') {
        return Some(rest);
    }
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

fn all_digits(text: &str, radix: u32) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_digit(radix))
}

/// Floating point. Accepts `1.`, `.5` and `1.5`, nothing else.
pub fn decode_real(text: &str) -> Option<f32> {
    let (whole, fraction) = text.split_once('.')?;
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if !digits(whole) || !digits(fraction) {
        return None;
    }
    let normalized = format!(
        "{}.{}",
        if whole.is_empty() { "0" } else { whole },
        if fraction.is_empty() { "0" } else { fraction }
    );
    normalized.parse().ok()
}

/// The four characters between single quotes, packed little-endian: the first character is
/// the least significant byte.
pub fn decode_fourcc(text: &str) -> Option<i32> {
    let mut bytes = [0u8; 4];
    let mut count = 0;
    for c in text.chars() {
        if count == 4 || c == '\n' {
            return None;
        }
        bytes[count] = u8::try_from(u32::from(c)).ok()?;
        count += 1;
    }
    if count != 4 {
        return None;
    }
    Some(i32::from_le_bytes(bytes))
}

/// Inverse of [`decode_fourcc`]
pub fn fourcc_to_string(value: i32) -> String {
    value.to_le_bytes().iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Some(0))]
    #[case("42", Some(42))]
    #[case("2147483647", Some(i32::MAX))]
    #[case("2147483648", None)]
    #[case("+1", None)]
    #[case("12a", None)]
    #[case("", None)]
    fn test_decimal(#[case] text: &str, #[case] expected: Option<i32>) {
        assert_eq!(decode_decimal(text), expected);
    }

    #[rstest]
    #[case("0", Some(0))]
    #[case("017", Some(15))]
    #[case("037777777777", Some(-1))]
    #[case("0400000000000", None)]
    #[case("08", None)]
    fn test_octal(#[case] text: &str, #[case] expected: Option<i32>) {
        assert_eq!(decode_octal(text), expected);
    }

    #[rstest]
    #[case("$FF", Some(255))]
    #[case("0x10", Some(16))]
    #[case("0XaB", Some(171))]
    #[case("$FFFFFFFF", Some(-1))]
    #[case("$100000000", None)]
    #[case("$", None)]
    #[case("0x", None)]
    #[case("FF", None)]
    fn test_hexadecimal(#[case] text: &str, #[case] expected: Option<i32>) {
        assert_eq!(decode_hexadecimal(text), expected);
    }

    #[rstest]
    #[case("1.5", Some(1.5))]
    #[case("1.", Some(1.0))]
    #[case(".25", Some(0.25))]
    #[case(".", None)]
    #[case("1", None)]
    #[case("1.2.3", None)]
    fn test_real(#[case] text: &str, #[case] expected: Option<f32>) {
        assert_eq!(decode_real(text), expected);
    }

    #[test]
    fn test_fourcc_packs_little_endian() {
        let expected = i32::from_le_bytes([b'A', b'B', b'C', b'D']);
        assert_eq!(decode_fourcc("ABCD"), Some(expected));
        assert_eq!(expected, 0x4443_4241);
    }

    #[rstest]
    #[case("AB")]
    #[case("ABCDE")]
    #[case("")]
    #[case("AB\nD")]
    #[case("AB\u{100}D")]
    fn test_fourcc_rejects(#[case] text: &str) {
        assert_eq!(decode_fourcc(text), None);
    }

    proptest! {
        #[test]
        fn fourcc_round_trips(text in "[ -~]{4}") {
            let value = decode_fourcc(&text).unwrap();
            prop_assert_eq!(fourcc_to_string(value), text);
        }
    }
}
