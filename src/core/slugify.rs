use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::slug::Slug;

/// What to do with letters outside ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnicodePolicy {
    /// Treat them like punctuation: they become separators.
    #[default]
    Separator,
    /// Map them to their closest ASCII spelling before slugifying.
    Transliterate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SlugOptions {
    #[serde(default)]
    pub unicode: UnicodePolicy,
    #[serde(default)]
    pub max_length: Option<usize>,
}

/// Stateless slug generator configured by `SlugOptions`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slugifier {
    options: SlugOptions,
}

impl Slugifier {
    pub fn new(options: SlugOptions) -> Result<Self> {
        if options.max_length == Some(0) {
            return Err(Error::validation_invalid_argument(
                "max_length",
                "Max length must be at least 1",
                Some("0".to_string()),
            ));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> SlugOptions {
        self.options
    }

    pub fn slugify(&self, input: &str) -> Result<Slug> {
        let source: Cow<'_, str> = match self.options.unicode {
            UnicodePolicy::Separator => Cow::Borrowed(input),
            UnicodePolicy::Transliterate => Cow::Owned(deunicode::deunicode(input)),
        };

        let mut out = String::with_capacity(source.len());
        let mut pending_dash = false;

        // Lowercasing runs first: a few non-ASCII letters lowercase into ASCII.
        for ch in source.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push(ch);
            } else {
                pending_dash = true;
            }
        }

        if out.is_empty() {
            return Err(Error::slug_empty_result(input));
        }

        if let Some(max) = self.options.max_length {
            let keep = truncated_len(&out, max);
            out.truncate(keep);
        }

        Ok(Slug::from_normalized(out))
    }
}

/// Slugify with default options.
pub fn slugify(input: &str) -> Result<Slug> {
    Slugifier::default().slugify(input)
}

/// Length to keep so the slug fits in `max` bytes, cutting at a hyphen when one fits.
fn truncated_len(slug: &str, max: usize) -> usize {
    if slug.len() <= max {
        return slug.len();
    }
    if slug.as_bytes()[max] == b'-' {
        return max;
    }
    match slug[..max].rfind('-') {
        Some(idx) => idx,
        None => max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::slug::is_valid;

    fn slug(input: &str) -> String {
        slugify(input).unwrap().into_string()
    }

    #[test]
    fn slugify_mixed_punctuation_and_digits() {
        assert_eq!(slug("NOW!!_ is the time 123"), "now-is-the-time-123");
    }

    #[test]
    fn slugify_basic_name() {
        assert_eq!(slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slug("a___b---c"), "a-b-c");
    }

    #[test]
    fn slugify_preserves_numbers() {
        assert_eq!(slug("123"), "123");
        assert_eq!(slug("Plugin v2"), "plugin-v2");
    }

    #[test]
    fn slugify_trims_whitespace() {
        assert_eq!(slug("  spaced  "), "spaced");
    }

    #[test]
    fn slugify_empty_fails() {
        let err = slugify("").unwrap_err();
        assert_eq!(err.code, ErrorCode::SlugEmptyResult);
    }

    #[test]
    fn slugify_whitespace_only_fails() {
        assert_eq!(slugify("   ").unwrap_err().code, ErrorCode::SlugEmptyResult);
    }

    #[test]
    fn slugify_only_special_fails() {
        assert_eq!(
            slugify("!!! ... ___").unwrap_err().code,
            ErrorCode::SlugEmptyResult
        );
    }

    #[test]
    fn separator_policy_splits_on_non_ascii() {
        assert_eq!(slug("Crème"), "cr-me");
        assert_eq!(slugify("日本語").unwrap_err().code, ErrorCode::SlugEmptyResult);
    }

    #[test]
    fn separator_policy_keeps_ascii_lowercase_forms() {
        // KELVIN SIGN lowercases to ASCII 'k'.
        assert_eq!(slug("\u{212A}m"), "km");
    }

    #[test]
    fn transliterate_policy_maps_accents() {
        let slugifier = Slugifier::new(SlugOptions {
            unicode: UnicodePolicy::Transliterate,
            max_length: None,
        })
        .unwrap();
        assert_eq!(
            slugifier.slugify("Crème Brûlée").unwrap().as_str(),
            "creme-brulee"
        );
    }

    #[test]
    fn max_length_cuts_at_separator() {
        let slugifier = Slugifier::new(SlugOptions {
            max_length: Some(12),
            ..SlugOptions::default()
        })
        .unwrap();
        assert_eq!(
            slugifier.slugify("the quick brown fox").unwrap().as_str(),
            "the-quick"
        );
    }

    #[test]
    fn max_length_exact_boundary_keeps_token() {
        let slugifier = Slugifier::new(SlugOptions {
            max_length: Some(9),
            ..SlugOptions::default()
        })
        .unwrap();
        assert_eq!(
            slugifier.slugify("the quick brown").unwrap().as_str(),
            "the-quick"
        );
    }

    #[test]
    fn max_length_hard_cuts_single_token() {
        let slugifier = Slugifier::new(SlugOptions {
            max_length: Some(4),
            ..SlugOptions::default()
        })
        .unwrap();
        assert_eq!(slugifier.slugify("abcdefgh").unwrap().as_str(), "abcd");
    }

    #[test]
    fn zero_max_length_rejected() {
        let err = Slugifier::new(SlugOptions {
            max_length: Some(0),
            ..SlugOptions::default()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn output_is_valid_and_idempotent() {
        for input in [
            "NOW!!_ is the time 123",
            "--Leading and trailing--",
            "Tabs\tand\nnewlines",
            "x",
            "ÀÉÎ mixed 42 ü",
        ] {
            let once = slug(input);
            assert!(is_valid(&once), "{once:?} from {input:?}");
            assert_eq!(slug(&once), once);
        }
    }
}
