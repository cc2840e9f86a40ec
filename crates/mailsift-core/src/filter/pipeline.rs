//! Applying predicates to ordered sequences of records.

use tracing::{debug, trace};

use super::predicate::{
    EmailFilter, FlagTypePredicate, FolderPredicate, Predicate, SubstringSearchPredicate,
};
use crate::email::Email;
use crate::error::Result;

/// Apply one predicate, keeping matching records in their original order.
///
/// The input is left untouched; survivors are cloned into a new vector.
#[must_use]
pub fn apply_filter<P: Predicate + ?Sized>(emails: &[Email], predicate: &P) -> Vec<Email> {
    let kept: Vec<Email> = emails
        .iter()
        .filter(|email| predicate.evaluate(email))
        .cloned()
        .collect();
    trace!(input = emails.len(), output = kept.len(), "Applied predicate");
    kept
}

/// Records filed under exactly `folder`.
#[must_use]
pub fn filter_by_folder(emails: &[Email], folder: &str) -> Vec<Email> {
    apply_filter(emails, &FolderPredicate::new(folder))
}

/// Records whose flag type equals `flag`, ignoring case.
#[must_use]
pub fn filter_by_flag_type(emails: &[Email], flag: &str) -> Vec<Email> {
    apply_filter(emails, &FlagTypePredicate::new(flag))
}

/// Records whose recipient address contains `query`, ignoring case.
#[must_use]
pub fn search_by_recipient(emails: &[Email], query: &str) -> Vec<Email> {
    apply_filter(emails, &SubstringSearchPredicate::new(query))
}

/// An ordered chain of filters combined with logical AND.
///
/// Each filter is applied to the output of the previous one. Because every
/// filter keeps relative order, so does the whole chain. An empty pipeline
/// lets every record through.
///
/// # Example
///
/// ```
/// use mailsift_core::{Email, EmailFilter, Pipeline};
///
/// let emails = vec![
///     Email::new("a@x.com").with_type("Star").with_folder("Inbox"),
///     Email::new("b@x.com").with_type("trash"),
/// ];
///
/// let starred_inbox = Pipeline::new()
///     .then(EmailFilter::folder("Inbox"))
///     .then(EmailFilter::star());
///
/// let kept = starred_inbox.run(&emails);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].to_address(), Some("a@x.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    filters: Vec<EmailFilter>,
}

impl Pipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build a pipeline from selector strings such as `folder:Inbox`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`](crate::Error::InvalidSelector) for
    /// the first selector that does not parse.
    pub fn parse<S: AsRef<str>>(selectors: &[S]) -> Result<Self> {
        selectors
            .iter()
            .map(|s| s.as_ref().parse::<EmailFilter>())
            .collect()
    }

    /// Append a filter.
    #[must_use]
    pub fn then(mut self, filter: impl Into<EmailFilter>) -> Self {
        self.push(filter);
        self
    }

    /// Append a filter in place.
    pub fn push(&mut self, filter: impl Into<EmailFilter>) {
        self.filters.push(filter.into());
    }

    /// Filters in application order.
    #[must_use]
    pub fn filters(&self) -> &[EmailFilter] {
        &self.filters
    }

    /// Number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check whether the pipeline has no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter in turn and return the surviving records.
    #[must_use]
    pub fn run(&self, emails: &[Email]) -> Vec<Email> {
        let Some((first, rest)) = self.filters.split_first() else {
            return emails.to_vec();
        };

        let mut current = self.step(emails, first);
        for filter in rest {
            current = self.step(&current, filter);
        }
        current
    }

    /// Like [`run`](Self::run) but returns references instead of clones.
    #[must_use]
    pub fn select<'a>(&self, emails: &'a [Email]) -> Vec<&'a Email> {
        emails.iter().filter(|email| self.evaluate(email)).collect()
    }

    fn step(&self, emails: &[Email], filter: &EmailFilter) -> Vec<Email> {
        let kept = apply_filter(emails, filter);
        debug!(
            kind = filter.kind(),
            filter = %filter,
            input = emails.len(),
            output = kept.len(),
            stages = self.filters.len(),
            "Filter step"
        );
        kept
    }
}

impl Predicate for Pipeline {
    fn evaluate(&self, email: &Email) -> bool {
        self.filters.iter().all(|filter| filter.evaluate(email))
    }
}

impl FromIterator<EmailFilter> for Pipeline {
    fn from_iter<I: IntoIterator<Item = EmailFilter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl Extend<EmailFilter> for Pipeline {
    fn extend<I: IntoIterator<Item = EmailFilter>>(&mut self, iter: I) {
        self.filters.extend(iter);
    }
}
