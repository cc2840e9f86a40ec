//! Folder, flag and recipient filters over email records.
//!
//! This module provides:
//! - **Predicates**: [`FolderPredicate`], [`FlagTypePredicate`] and
//!   [`SubstringSearchPredicate`], each a pure test over one record
//! - **Pipeline**: apply a predicate to an ordered list, or chain several
//!   with [`Pipeline`]
//! - **Selectors**: parse filters from strings like `folder:Inbox`
//!
//! # Matching rules
//!
//! Folder names match exactly, case included. Flag types and recipient
//! searches ignore case. A record missing the field a filter looks at is
//! dropped; filtering never fails.
//!
//! # Example
//!
//! ```
//! use mailsift_core::filter::{filter_by_folder, filter_by_flag_type};
//! use mailsift_core::Email;
//!
//! let emails = vec![
//!     Email::new("a@x.com").with_type("Star").with_folder("Inbox"),
//!     Email::new("c@x.com").with_folder("Inbox"),
//! ];
//!
//! let inbox = filter_by_folder(&emails, "Inbox");
//! let starred = filter_by_flag_type(&inbox, "star");
//! assert_eq!(starred.len(), 1);
//! ```

mod pipeline;
mod predicate;
mod selector;

pub use pipeline::{
    Pipeline, apply_filter, filter_by_flag_type, filter_by_folder, search_by_recipient,
};
pub use predicate::{
    EmailFilter, FlagTypePredicate, FolderPredicate, Predicate, SubstringSearchPredicate,
};
