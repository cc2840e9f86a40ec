//! # mailsift-core
//!
//! Filtering and search over in-memory lists of email records.
//!
//! This crate provides:
//! - Email record model
//! - Folder, flag-type and recipient-search predicates
//! - An order-preserving pipeline that chains predicates with logical AND
//! - Saved views: named filter chains kept in a JSON configuration file
//!
//! Fetching, storing and paginating records is left to the caller. Filters
//! borrow a slice of records and hand back a new vector; they never mutate
//! their input and never fail on sparse records.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod email;
mod error;
pub mod filter;

pub use config::Config;
pub use email::{Email, Priority};
pub use error::{Error, Result};
pub use filter::{
    EmailFilter, FlagTypePredicate, FolderPredicate, Pipeline, Predicate,
    SubstringSearchPredicate, apply_filter, filter_by_flag_type, filter_by_folder,
    search_by_recipient,
};
