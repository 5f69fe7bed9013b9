//! phone number auto-formatting (north american 3-3-4 grouping)

/// maximum digits kept from the input
pub const MAX_DIGITS: usize = 10;

/// strip non-digits, cap at ten digits, regroup progressively
///
/// - `"555"` -> `"555"`
/// - `"55512"` -> `"555-12"`
/// - `"(555) 123-4567 x9"` -> `"555-123-4567"`
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit_count(s: &str) -> usize {
        s.chars().filter(|c| c.is_ascii_digit()).count()
    }

    #[test]
    fn test_short_input_unformatted() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("5"), "5");
        assert_eq!(format_phone("555"), "555");
    }

    #[test]
    fn test_middle_bucket() {
        assert_eq!(format_phone("5551"), "555-1");
        assert_eq!(format_phone("555123"), "555-123");
    }

    #[test]
    fn test_full_bucket() {
        assert_eq!(format_phone("5551234"), "555-123-4");
        assert_eq!(format_phone("5551234567"), "555-123-4567");
    }

    #[test]
    fn test_strips_punctuation_and_letters() {
        assert_eq!(format_phone("(555) 123-4567"), "555-123-4567");
        assert_eq!(format_phone("tel: +1 555"), "155-5");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn test_truncates_to_ten_digits() {
        assert_eq!(format_phone("555123456789"), "555-123-4567");
        assert_eq!(format_phone("555-123-4567 ext 12"), "555-123-4567");
    }

    #[test]
    fn test_ignores_non_ascii_digits() {
        // arabic-indic digits are not accepted as phone digits
        assert_eq!(format_phone("٥٥٥123"), "123");
    }

    #[test]
    fn test_idempotent_and_bounded() {
        let samples = [
            "", "1", "12", "123", "1234", "12345", "123456", "1234567",
            "12345678", "123456789", "1234567890", "12345678901234",
            "(555) 867-5309", "555.867.5309", "+1-800-FLOWERS", "--9--",
        ];
        for s in samples {
            let once = format_phone(s);
            assert_eq!(format_phone(&once), once, "not idempotent for {:?}", s);
            assert!(digit_count(&once) <= MAX_DIGITS);

            let n = digit_count(&once);
            let dashes = once.matches('-').count();
            match n {
                0..=3 => assert_eq!(dashes, 0),
                4..=6 => {
                    assert_eq!(dashes, 1);
                    assert_eq!(once.find('-'), Some(3));
                }
                _ => {
                    assert_eq!(dashes, 2);
                    assert_eq!(&once[3..4], "-");
                    assert_eq!(&once[7..8], "-");
                }
            }
        }
    }
}
