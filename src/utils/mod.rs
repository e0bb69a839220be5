//! Shared helpers.

pub mod html;
mod plural;
pub mod url;

pub use plural::{plural_count, plural_s};
