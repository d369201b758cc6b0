//! Version classification, normalization, comparison, and selection
//!
//! This is the core of the tool: everything else is plumbing around these
//! pure functions.

mod classify;
mod compare;
mod normalize;
mod select;

pub use classify::{is_calendar_date, is_release_tag};
pub use compare::{compare, compare_normalized};
pub use normalize::normalize;
pub use select::select_latest;
