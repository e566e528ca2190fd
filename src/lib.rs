//! Collection cards library
//!
//! Bounded text summaries and the card/page view models built on them.

pub mod error;
pub mod models;
pub mod summarize;
pub mod view;

pub use error::{Error, Result};
pub use summarize::{summarize, Summarizer};
