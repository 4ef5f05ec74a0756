//! Display keys for groups
//!
//! Group keys are the cleaned heading text with every word of two or more ASCII
//! alphanumerics (and the lone word "i") capitalized. One-letter words other than "i"
//! stay as they are, so "a new hope" becomes "a New Hope".

use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b([a-z0-9]{2,}|i)\b").unwrap());

pub fn title_case(text: &str) -> String {
    TITLE_WORD
        .replace_all(text, |captures: &regex::Captures| {
            let word = &captures[0];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("backlog", "Backlog")]
    #[case("sprint 1", "Sprint 1")]
    #[case("a new hope", "a New Hope")]
    #[case("what i want", "What I Want")]
    #[case("v2 release", "V2 Release")]
    #[case("", "")]
    #[case("already Titled", "Already Titled")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }
}
