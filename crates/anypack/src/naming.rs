//! Record field naming convention.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How a record field's declared name becomes its map key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldNaming {
    /// First character lower-cased (`Name` -> `name`).
    #[default]
    LowerFirst,
    /// Declared name used as-is.
    Verbatim,
}

impl FieldNaming {
    pub fn apply(self, name: &str) -> Cow<'_, str> {
        match self {
            FieldNaming::LowerFirst => uncapitalize(name),
            FieldNaming::Verbatim => Cow::Borrowed(name),
        }
    }
}

/// Lower-cases the first character of `name`, leaving the rest untouched.
pub fn uncapitalize(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let mut out = String::with_capacity(name.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowers_first_character_only() {
        assert_eq!(uncapitalize("Name"), "name");
        assert_eq!(uncapitalize("HTTPPort"), "hTTPPort");
        assert_eq!(uncapitalize("X"), "x");
    }

    #[test]
    fn borrows_when_already_lower() {
        assert!(matches!(uncapitalize("items"), Cow::Borrowed("items")));
        assert!(matches!(uncapitalize(""), Cow::Borrowed("")));
        assert!(matches!(uncapitalize("_id"), Cow::Borrowed("_id")));
    }

    #[test]
    fn handles_non_ascii() {
        assert_eq!(uncapitalize("Émile"), "émile");
    }

    #[test]
    fn verbatim_keeps_declared_name() {
        assert_eq!(FieldNaming::Verbatim.apply("Name"), "Name");
        assert_eq!(FieldNaming::LowerFirst.apply("Name"), "name");
    }
}
