//! Small formatters used by the renderer

use crate::places::Rating;

/// Text shown when a place has no rating
pub const NO_RATING: &str = "N/A";

/// Rating text, or `N/A` when there is none
pub fn format_rating(rating: &Rating) -> String {
    if rating.is_available() {
        rating.as_str().to_string()
    } else {
        NO_RATING.to_string()
    }
}

/// Emphasized open/closed label
pub fn open_now_label(open_now: bool) -> &'static str {
    if open_now {
        "<strong>Open Now</strong>"
    } else {
        "<strong>Closed</strong>"
    }
}

/// Uppercase the first letter of every word, leaving the rest untouched
///
/// A word starts after whitespace or ASCII punctuation. Underscores and
/// apostrophes do not break words, so "don't" stays "Don't".
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start {
            output.extend(c.to_uppercase());
        } else {
            output.push(c);
        }
        at_word_start = is_word_break(c);
    }

    output
}

fn is_word_break(c: char) -> bool {
    match c {
        '_' | '\'' => false,
        c if c.is_ascii_punctuation() => true,
        c => c.is_whitespace(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(&Rating::new("4.5")), "4.5");
        assert_eq!(format_rating(&Rating::new("4")), "4");
        assert_eq!(format_rating(&Rating::unavailable()), "N/A");
    }

    #[test]
    fn test_format_rating_passes_text_through() {
        assert_eq!(format_rating(&Rating::new("4.50")), "4.50");
    }

    #[test]
    fn test_open_now_label() {
        assert!(open_now_label(true).contains("Open Now"));
        assert!(open_now_label(false).contains("Closed"));
        assert!(!open_now_label(false).contains("Open"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("coffee shop"), "Coffee Shop");
        assert_eq!(title_case("Coffee Shop"), "Coffee Shop");
        assert_eq!(title_case("cafe"), "Cafe");
    }

    #[test]
    fn test_title_case_keeps_inner_casing() {
        assert_eq!(title_case("bBQ joint"), "BBQ Joint");
        assert_eq!(title_case("COFFEE shop"), "COFFEE Shop");
    }

    #[test]
    fn test_title_case_separators() {
        assert_eq!(title_case("  thai  food "), "  Thai  Food ");
        assert_eq!(title_case("dim-sum"), "Dim-Sum");
        assert_eq!(title_case("joe's diner"), "Joe's Diner");
        assert_eq!(title_case("fast_food"), "Fast_food");
        assert_eq!(title_case("crêpe café"), "Crêpe Café");
        assert_eq!(title_case(""), "");
    }
}
