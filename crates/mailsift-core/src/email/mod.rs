//! Email records.
//!
//! Records are produced by whatever storage layer sits in front of this
//! crate. The filters only borrow them.

mod model;

pub use model::{Email, Priority};
