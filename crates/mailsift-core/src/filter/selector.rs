//! Textual selector syntax for filters.
//!
//! | Selector          | Filter                         |
//! |-------------------|--------------------------------|
//! | `folder:<name>`   | folder membership (exact)      |
//! | `type:<flag>`     | flag type (ignores case)       |
//! | `star`, `trash`   | shorthands for `type:star` ... |
//! | `search:<query>`  | recipient substring            |
//! | `to:<query>`      | same as `search:`              |
//!
//! The prefix and the shorthand keywords ignore case. Everything after the
//! first `:` is kept verbatim, so folder names may contain colons. Values may
//! be empty; `folder:` and `type:` are valid and match nothing in practice,
//! which keeps every printed filter parseable.

use std::fmt;
use std::str::FromStr;

use super::predicate::{EmailFilter, FlagTypePredicate};
use crate::error::{Error, Result};

impl FromStr for EmailFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let keyword = s.trim();
        if keyword.eq_ignore_ascii_case(FlagTypePredicate::STAR) {
            return Ok(Self::star());
        }
        if keyword.eq_ignore_ascii_case(FlagTypePredicate::TRASH) {
            return Ok(Self::trash());
        }

        let (prefix, value) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidSelector(s.to_string()))?;

        match prefix.trim().to_lowercase().as_str() {
            "folder" => Ok(Self::folder(value)),
            "type" => Ok(Self::flag_type(value)),
            "search" | "to" => Ok(Self::search(value)),
            _ => Err(Error::InvalidSelector(s.to_string())),
        }
    }
}

impl fmt::Display for EmailFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder(p) => write!(f, "folder:{}", p.folder()),
            Self::FlagType(p) => write!(f, "type:{}", p.flag()),
            Self::Search(p) => write!(f, "search:{}", p.query()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_folder() {
        let filter: EmailFilter = "folder:Inbox".parse().unwrap();
        assert_eq!(filter, EmailFilter::folder("Inbox"));
    }

    #[test]
    fn test_parse_folder_keeps_colons_and_case() {
        let filter: EmailFilter = "FOLDER:Work:2024".parse().unwrap();
        assert_eq!(filter, EmailFilter::folder("Work:2024"));
    }

    #[test]
    fn test_parse_shorthands() {
        assert_eq!("star".parse::<EmailFilter>().unwrap(), EmailFilter::star());
        assert_eq!(" Trash ".parse::<EmailFilter>().unwrap(), EmailFilter::trash());
        assert_eq!(
            "type:important".parse::<EmailFilter>().unwrap(),
            EmailFilter::flag_type("important")
        );
    }

    #[test]
    fn test_parse_search() {
        assert_eq!(
            "search:x.com".parse::<EmailFilter>().unwrap(),
            EmailFilter::search("x.com")
        );
        assert_eq!(
            "to:bob".parse::<EmailFilter>().unwrap(),
            EmailFilter::search("bob")
        );
        // Empty query is allowed and matches every address
        assert_eq!(
            "search:".parse::<EmailFilter>().unwrap(),
            EmailFilter::search("")
        );
    }

    #[test]
    fn test_parse_invalid() {
        for selector in ["", "inbox", "colour:red", ":Inbox"] {
            let err = selector.parse::<EmailFilter>().unwrap_err();
            assert!(
                matches!(err, Error::InvalidSelector(ref s) if s == selector),
                "unexpected error for {selector:?}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_empty_values() {
        assert_eq!(
            "folder:".parse::<EmailFilter>().unwrap(),
            EmailFilter::folder("")
        );
        assert_eq!(
            "type:".parse::<EmailFilter>().unwrap(),
            EmailFilter::flag_type("")
        );
    }

    #[test]
    fn test_display_reparses() {
        for filter in [
            EmailFilter::folder(""),
            EmailFilter::flag_type(""),
            EmailFilter::folder("Inbox"),
            EmailFilter::folder("a:b"),
            EmailFilter::star(),
            EmailFilter::flag_type("Sent"),
            EmailFilter::search(""),
            EmailFilter::search("@x.com"),
        ] {
            let text = filter.to_string();
            assert_eq!(text.parse::<EmailFilter>().unwrap(), filter);
        }
    }
}
