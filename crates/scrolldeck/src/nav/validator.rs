//! Free-text entry in the slide-number field.

use super::NavError;
use super::commands::NavigationIntent;

/// Clean up the field text after a keystroke.
///
/// Non-digits are dropped. A value above `slide_count` shows `slide_count`,
/// a value below 1 shows `1`, and an empty field stays empty. Digits within
/// range are kept as typed.
pub fn sanitize(raw: &str, slide_count: usize) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() || slide_count == 0 {
        return String::new();
    }
    match digits.parse::<usize>() {
        Ok(0) => "1".to_string(),
        Ok(n) if n <= slide_count => digits,
        // Too large, including values that overflow usize.
        _ => slide_count.to_string(),
    }
}

/// Turn a committed field value into a jump, if it names a slide.
pub fn commit(text: &str, slide_count: usize) -> Result<NavigationIntent, NavError> {
    let trimmed = text.trim();
    let n: usize = trimmed
        .parse()
        .map_err(|_| NavError::invalid(trimmed, slide_count))?;
    if (1..=slide_count).contains(&n) {
        Ok(NavigationIntent::JumpTo(n))
    } else {
        Err(NavError::invalid(n, slide_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("5", "5")]
    #[case::strips_letters("a3b", "3")]
    #[case::strips_sign("-4", "4")]
    #[case::clamps_high("9", "7")]
    #[case::clamps_multi_digit("42", "7")]
    #[case::clamps_zero("0", "1")]
    #[case::clamps_zeros("000", "1")]
    #[case::keeps_leading_zero("07", "07")]
    #[case::empty("", "")]
    #[case::only_junk("abc", "")]
    #[case::overflow("99999999999999999999999999", "7")]
    fn sanitize_with_seven_slides(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize(raw, 7), expected);
    }

    #[test]
    fn sanitize_on_empty_deck_is_empty() {
        assert_eq!(sanitize("3", 0), "");
    }

    #[rstest]
    #[case("1", 1)]
    #[case("7", 7)]
    #[case(" 3 ", 3)]
    #[case("07", 7)]
    fn commit_in_range_jumps(#[case] text: &str, #[case] target: usize) {
        assert_eq!(commit(text, 7), Ok(NavigationIntent::JumpTo(target)));
    }

    #[rstest]
    #[case("0")]
    #[case("8")]
    #[case("")]
    #[case("two")]
    fn commit_out_of_range_is_invalid(#[case] text: &str) {
        assert!(matches!(
            commit(text, 7),
            Err(NavError::InvalidTarget { count: 7, .. })
        ));
    }
}
