//! Per-record predicates.

use crate::email::Email;

/// A pure yes/no test over one email record.
///
/// Implementations hold no mutable state, so evaluating the same record twice
/// always gives the same answer. A record missing the field a predicate looks
/// at does not match.
pub trait Predicate {
    /// Check whether `email` passes this predicate.
    fn evaluate(&self, email: &Email) -> bool;
}

impl<P: Predicate + ?Sized> Predicate for &P {
    fn evaluate(&self, email: &Email) -> bool {
        (**self).evaluate(email)
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    fn evaluate(&self, email: &Email) -> bool {
        (**self).evaluate(email)
    }
}

/// Matches records filed under one folder.
///
/// The comparison is exact and case-sensitive: `Inbox` does not match a
/// record filed under `inbox`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderPredicate {
    folder: String,
}

impl FolderPredicate {
    /// Create a predicate for `folder`.
    #[must_use]
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// The folder name matched against.
    #[must_use]
    pub fn folder(&self) -> &str {
        &self.folder
    }
}

impl Predicate for FolderPredicate {
    fn evaluate(&self, email: &Email) -> bool {
        email.is_in_folder(&self.folder)
    }
}

/// Matches records whose flag type equals a target, ignoring case.
///
/// Characters are compared one by one through both their upper and lower
/// case forms, so `\u{17f}tar` (long s) matches `star`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlagTypePredicate {
    flag: String,
}

impl FlagTypePredicate {
    /// Flag type of starred messages.
    pub const STAR: &'static str = "star";
    /// Flag type of trashed messages.
    pub const TRASH: &'static str = "trash";

    /// Create a predicate for an arbitrary flag type.
    #[must_use]
    pub fn new(flag: impl Into<String>) -> Self {
        Self { flag: flag.into() }
    }

    /// Predicate for starred messages.
    #[must_use]
    pub fn star() -> Self {
        Self::new(Self::STAR)
    }

    /// Predicate for trashed messages.
    #[must_use]
    pub fn trash() -> Self {
        Self::new(Self::TRASH)
    }

    /// The flag type as given at construction.
    #[must_use]
    pub fn flag(&self) -> &str {
        &self.flag
    }
}

impl Predicate for FlagTypePredicate {
    fn evaluate(&self, email: &Email) -> bool {
        email
            .kind()
            .is_some_and(|kind| eq_ignore_case(kind, &self.flag))
    }
}

/// Case-insensitive equality, character by character.
///
/// Two characters are equal if they are identical, if their uppercase forms
/// are, or if the lowercase forms of their uppercase forms are.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y
                || x.to_uppercase().eq(y.to_uppercase())
                || x.to_uppercase()
                    .flat_map(char::to_lowercase)
                    .eq(y.to_uppercase().flat_map(char::to_lowercase))
        })
}

/// Matches records whose recipient address contains a query, ignoring case.
///
/// An empty query matches every record that has a recipient address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubstringSearchPredicate {
    query: String,
    folded: String,
}

impl SubstringSearchPredicate {
    /// Create a predicate searching for `query`.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let folded = query.to_lowercase();
        Self { query, folded }
    }

    /// The query as given at construction.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl Predicate for SubstringSearchPredicate {
    fn evaluate(&self, email: &Email) -> bool {
        email
            .to_address()
            .is_some_and(|address| address.to_lowercase().contains(&self.folded))
    }
}

/// One filter of any supported kind.
///
/// This is the closed set of predicates a [`Pipeline`](super::Pipeline) is
/// built from. It can be parsed from and printed as a selector string such
/// as `folder:Inbox` or `star`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmailFilter {
    /// Folder membership.
    Folder(FolderPredicate),
    /// Flag type equality.
    FlagType(FlagTypePredicate),
    /// Recipient substring search.
    Search(SubstringSearchPredicate),
}

impl EmailFilter {
    /// Filter on folder membership.
    #[must_use]
    pub fn folder(folder: impl Into<String>) -> Self {
        Self::Folder(FolderPredicate::new(folder))
    }

    /// Filter on flag type.
    #[must_use]
    pub fn flag_type(flag: impl Into<String>) -> Self {
        Self::FlagType(FlagTypePredicate::new(flag))
    }

    /// Filter on starred messages.
    #[must_use]
    pub fn star() -> Self {
        Self::FlagType(FlagTypePredicate::star())
    }

    /// Filter on trashed messages.
    #[must_use]
    pub fn trash() -> Self {
        Self::FlagType(FlagTypePredicate::trash())
    }

    /// Filter on recipient address substring.
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search(SubstringSearchPredicate::new(query))
    }

    /// Short name of the filter kind, used in log output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Folder(_) => "folder",
            Self::FlagType(_) => "type",
            Self::Search(_) => "search",
        }
    }
}

impl Predicate for EmailFilter {
    fn evaluate(&self, email: &Email) -> bool {
        match self {
            Self::Folder(p) => p.evaluate(email),
            Self::FlagType(p) => p.evaluate(email),
            Self::Search(p) => p.evaluate(email),
        }
    }
}

impl From<FolderPredicate> for EmailFilter {
    fn from(p: FolderPredicate) -> Self {
        Self::Folder(p)
    }
}

impl From<FlagTypePredicate> for EmailFilter {
    fn from(p: FlagTypePredicate) -> Self {
        Self::FlagType(p)
    }
}

impl From<SubstringSearchPredicate> for EmailFilter {
    fn from(p: SubstringSearchPredicate) -> Self {
        Self::Search(p)
    }
}
