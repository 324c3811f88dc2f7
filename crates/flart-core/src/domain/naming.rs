//! Name normalization.
//!
//! Every generated path and symbol is derived from one user-supplied name.
//! Two canonical renderings exist:
//!
//! | Form      | Example input     | Output            | Used for              |
//! |-----------|-------------------|-------------------|-----------------------|
//! | file form | `"UserHTTPModel"` | `user_http_model` | file and directory names |
//! | type form | `"home dashboard"`| `HomeDashboard`   | Dart class names      |
//!
//! Both functions are pure and total. [`EntityName`] ties them together so the
//! two forms always agree on word boundaries.

use std::fmt;

use crate::domain::error::DomainError;

const DELIMITER: char = '_';

/// Convert a free-form identifier to its lowercase, `_`-separated file form.
///
/// ## Rules
///
/// 1. Insert `_` before every `[A-Z][a-z]+` run that follows another character
///    (`"HTTPModel"` -> `"HTTP_Model"`)
/// 2. Insert `_` between `[a-z0-9]` and a following `[A-Z]`
///    (`"userHTTP"` -> `"user_HTTP"`)
/// 3. Collapse every run of non-ASCII-alphanumeric characters into a single
///    `_`, dropping leading and trailing ones
/// 4. Join a word that starts with a digit onto the word before it
///    (`"item_2fa"` -> `"item2fa"`), since the type form cannot keep that
///    boundary
/// 5. Lowercase
///
/// Applying it to its own output is a no-op.
///
/// ## Examples
///
/// | Input | Output |
/// |-------|--------|
/// | "UserProfile" | "user_profile" |
/// | "UserHTTPModel" | "user_http_model" |
/// | "home dashboard" | "home_dashboard" |
/// | "order--item" | "order_item" |
/// | "level_3_boss" | "level3_boss" |
pub fn to_file_form(name: &str) -> String {
    let split = split_camel_boundaries(&split_capitalized_words(name));

    let mut out = String::with_capacity(split.len());
    for word in split
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        if !out.is_empty() && !word.starts_with(|c: char| c.is_ascii_digit()) {
            out.push(DELIMITER);
        }
        out.push_str(&word.to_ascii_lowercase());
    }
    out
}

/// Convert a free-form identifier to its capitalized, delimiter-free type form.
///
/// Splits on any non-ASCII-alphanumeric character, drops empty words,
/// uppercases the first letter of each word and lowercases the rest.
///
/// Case transitions inside a word are *not* word boundaries here
/// (`"UserProfile"` -> `"Userprofile"`); run the input through
/// [`to_file_form`] first when they should be, as [`EntityName`] does.
pub fn to_type_form(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let (first, rest) = word.split_at(1);
            format!("{}{}", first.to_ascii_uppercase(), rest.to_ascii_lowercase())
        })
        .collect()
}

/// Pass 1: `(.)([A-Z][a-z]+)` -> `$1_$2`, leftmost and non-overlapping.
fn split_capitalized_words(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let starts_word = chars[i] != '\n'
            && chars.get(i + 1).is_some_and(char::is_ascii_uppercase)
            && chars.get(i + 2).is_some_and(char::is_ascii_lowercase);

        if starts_word {
            out.push(chars[i]);
            out.push(DELIMITER);
            out.push(chars[i + 1]);

            let mut j = i + 2;
            while j < chars.len() && chars[j].is_ascii_lowercase() {
                out.push(chars[j]);
                j += 1;
            }
            i = j;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

/// Pass 2: `([a-z0-9])([A-Z])` -> `$1_$2`, leftmost and non-overlapping.
fn split_camel_boundaries(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let boundary = (c.is_ascii_lowercase() || c.is_ascii_digit())
            && chars.get(i + 1).is_some_and(char::is_ascii_uppercase);

        out.push(c);
        if boundary {
            out.push(DELIMITER);
            out.push(chars[i + 1]);
            i += 2;
        } else {
            i += 1;
        }
    }

    out
}

/// A validated entity name with both canonical forms precomputed.
///
/// The type form is derived from the file form, so
/// `to_file_form(type_form) == file_form` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName {
    raw: String,
    file_form: String,
    type_form: String,
}

impl EntityName {
    /// Normalize and validate a user-supplied name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidName {
                name: raw,
                reason: "name cannot be empty".into(),
            });
        }

        if !trimmed.is_ascii() {
            return Err(DomainError::InvalidName {
                name: raw,
                reason: "Dart identifiers are ASCII".into(),
            });
        }

        let file_form = to_file_form(trimmed);
        if file_form.is_empty() {
            return Err(DomainError::InvalidName {
                name: raw,
                reason: "name must contain at least one letter or digit".into(),
            });
        }

        if file_form.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(DomainError::InvalidName {
                name: raw,
                reason: "Dart identifiers cannot start with a digit".into(),
            });
        }

        let type_form = to_type_form(&file_form);

        Ok(Self {
            raw: trimmed.to_string(),
            file_form,
            type_form,
        })
    }

    /// The name as the user typed it (trimmed).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn file_form(&self) -> &str {
        &self.file_form
    }

    pub fn type_form(&self) -> &str {
        &self.type_form
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_form_splits_camel_case() {
        assert_eq!(to_file_form("UserProfile"), "user_profile");
        assert_eq!(to_file_form("userProfile"), "user_profile");
        assert_eq!(to_file_form("user"), "user");
    }

    #[test]
    fn file_form_splits_acronym_runs() {
        assert_eq!(to_file_form("UserHTTPModel"), "user_http_model");
        assert_eq!(to_file_form("HTTPServer"), "http_server");
        assert_eq!(to_file_form("XMLHttpRequest"), "xml_http_request");
        assert_eq!(to_file_form("APIKey2FA"), "api_key2_fa");
    }

    #[test]
    fn file_form_normalizes_delimiters() {
        assert_eq!(to_file_form("home dashboard"), "home_dashboard");
        assert_eq!(to_file_form("order--item"), "order_item");
        assert_eq!(to_file_form("  padded name  "), "padded_name");
        assert_eq!(to_file_form("Home Dashboard"), "home_dashboard");
        assert_eq!(to_file_form("_leading_"), "leading");
    }

    #[test]
    fn file_form_keeps_digits_attached() {
        assert_eq!(to_file_form("Model2Go"), "model2_go");
        assert_eq!(to_file_form("v2Api"), "v2_api");
    }

    #[test]
    fn file_form_is_idempotent() {
        for input in [
            "UserProfile",
            "UserHTTPModel",
            "home dashboard",
            "already_snake",
            "Model2Go",
            "a-B-c",
            "item_2fa",
            "İstanbul",
        ] {
            let once = to_file_form(input);
            assert_eq!(to_file_form(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn file_form_joins_digit_led_words() {
        assert_eq!(to_file_form("item_2fa"), "item2fa");
        assert_eq!(to_file_form("user 2"), "user2");
        assert_eq!(to_file_form("level_3_boss"), "level3_boss");
        assert_eq!(to_file_form("2fa screen"), "2fa_screen");
    }

    #[test]
    fn file_form_is_total_on_odd_input() {
        assert_eq!(to_file_form(""), "");
        assert_eq!(to_file_form("---"), "");
        assert_eq!(to_file_form("A"), "a");
    }

    #[test]
    fn type_form_capitalizes_each_word() {
        assert_eq!(to_type_form("home dashboard"), "HomeDashboard");
        assert_eq!(to_type_form("user_profile"), "UserProfile");
        assert_eq!(to_type_form("ORDER-item"), "OrderItem");
    }

    #[test]
    fn type_form_drops_empty_words() {
        assert_eq!(to_type_form("a__b"), "AB");
        assert_eq!(to_type_form("  spaced   out "), "SpacedOut");
        assert_eq!(to_type_form(""), "");
    }

    #[test]
    fn type_form_does_not_split_case_transitions() {
        assert_eq!(to_type_form("UserProfile"), "Userprofile");
    }

    #[test]
    fn forms_round_trip_without_spurious_words() {
        for input in [
            "UserProfile",
            "UserHTTPModel",
            "home dashboard",
            "Model2Go",
            "item_2fa",
            "user 2",
            "level_3_boss",
        ] {
            let file = to_file_form(input);
            let ty = to_type_form(&file);
            assert_eq!(to_file_form(&ty), file, "round trip broke for {input:?}");
        }
    }

    #[test]
    fn entity_name_exposes_both_forms() {
        let name = EntityName::parse("UserProfile").unwrap();
        assert_eq!(name.file_form(), "user_profile");
        assert_eq!(name.type_form(), "UserProfile");
        assert_eq!(name.raw(), "UserProfile");
    }

    #[test]
    fn entity_name_handles_acronyms() {
        let name = EntityName::parse("UserHTTPModel").unwrap();
        assert_eq!(name.file_form(), "user_http_model");
        assert_eq!(name.type_form(), "UserHttpModel");
    }

    #[test]
    fn entity_name_rejects_empty_and_symbol_only() {
        assert!(matches!(
            EntityName::parse("   "),
            Err(DomainError::InvalidName { .. })
        ));
        assert!(matches!(
            EntityName::parse("!!!"),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn entity_name_rejects_non_ascii() {
        for input in ["ÉcoleName", "İstanbul", "café"] {
            match EntityName::parse(input) {
                Err(DomainError::InvalidName { reason, .. }) => {
                    assert!(reason.contains("ASCII"), "{input:?}: {reason}")
                }
                other => panic!("{input:?} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn entity_name_forms_agree_on_digit_words() {
        let name = EntityName::parse("level_3_boss").unwrap();
        assert_eq!(name.file_form(), "level3_boss");
        assert_eq!(name.type_form(), "Level3Boss");
        assert_eq!(to_file_form(name.type_form()), name.file_form());
    }

    #[test]
    fn entity_name_rejects_leading_digit() {
        assert!(EntityName::parse("2fa screen").is_err());
    }

    #[test]
    fn entity_name_display_uses_type_form() {
        let name = EntityName::parse("home dashboard").unwrap();
        assert_eq!(name.to_string(), "HomeDashboard");
    }
}
