use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::PrimerError;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TextStyle {
    Bold,
    Italics,
    Underline,
    Strikethrough,
}

const STYLES: [(&str, TextStyle); 4] = [
    ("BOLD", TextStyle::Bold),
    ("ITALICS", TextStyle::Italics),
    ("UNDERLINE", TextStyle::Underline),
    ("STRIKETHROUGH", TextStyle::Strikethrough),
];

impl TextStyle {
    pub const ALL: [TextStyle; 4] = [
        TextStyle::Bold,
        TextStyle::Italics,
        TextStyle::Underline,
        TextStyle::Strikethrough,
    ];

    /// Case-insensitive lookup: `"bold"`, `"Bold"` and `"BOLD"` all match.
    ///
    /// The label is upper-cased with full Unicode rules before comparing,
    /// so `"ſtrikethrough"` (long s) matches too.
    pub fn lookup(label: &str) -> Result<Self, PrimerError> {
        let upper: String = label.to_uppercase();
        find(label, |name| name == upper)
    }

    /// Matches the upper-case name only.
    pub fn lookup_exact(label: &str) -> Result<Self, PrimerError> {
        find(label, |name| name == label)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TextStyle::Bold => "BOLD",
            TextStyle::Italics => "ITALICS",
            TextStyle::Underline => "UNDERLINE",
            TextStyle::Strikethrough => "STRIKETHROUGH",
        }
    }
}

fn find(label: &str, matches: impl Fn(&str) -> bool) -> Result<TextStyle, PrimerError> {
    match STYLES.iter().find(|(name, _)| matches(*name)) {
        Some((_, style)) => Ok(*style),
        None => {
            warn!(label, "unknown text style");
            Err(PrimerError::UnknownTextStyle(label.to_string()))
        }
    }
}

impl FromStr for TextStyle {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextStyle::lookup(s)
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("bold", TextStyle::Bold)]
    #[case("BOLD", TextStyle::Bold)]
    #[case("Italics", TextStyle::Italics)]
    #[case("uNdErLiNe", TextStyle::Underline)]
    #[case("strikethrough", TextStyle::Strikethrough)]
    #[case("ſtrikethrough", TextStyle::Strikethrough)]
    #[case("ıtalics", TextStyle::Italics)]
    fn lookup_should_ignore_case(#[case] label: &str, #[case] expected: TextStyle) {
        assert_eq!(TextStyle::lookup(label), Ok(expected));
    }

    #[rstest]
    #[case("xyz")]
    #[case("")]
    #[case(" bold")]
    #[case("italic")]
    fn lookup_should_fail_on_unknown_label(#[case] label: &str) {
        let err: PrimerError = TextStyle::lookup(label).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err, PrimerError::UnknownTextStyle(label.to_string()));
    }

    #[test]
    fn lookup_exact_should_require_upper_case() {
        assert_eq!(TextStyle::lookup_exact("BOLD"), Ok(TextStyle::Bold));
        assert!(TextStyle::lookup_exact("bold").is_err());
    }

    #[test]
    fn display_should_round_trip_through_from_str() {
        for style in TextStyle::ALL {
            assert_eq!(style.to_string().parse::<TextStyle>(), Ok(style));
        }
    }
}
