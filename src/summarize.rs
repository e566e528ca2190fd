//! Bounded-length text summaries.
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes, so
//! multi-byte text is never split in the middle of a character.

use tracing::debug;

use crate::error::{Error, Result};

/// Suffix appended to text that was cut short.
pub const ELLIPSIS: &str = "...";

/// How many characters before the cutoff are searched for a word boundary.
pub const DEFAULT_LOOKBACK: usize = 20;

/// Budget for collection names on cards.
pub const TITLE_BUDGET: usize = 80;

/// Budget for collection descriptions on cards.
pub const DESCRIPTION_BUDGET: usize = 320;

/// Summarize `text` to at most `budget` characters (plus the ellipsis) using the
/// default lookback window.
///
/// Fails with [`Error::InvalidArgument`] when `budget` is zero.
pub fn summarize(text: &str, budget: usize) -> Result<String> {
    Ok(Summarizer::new(budget)?.summarize(text))
}

/// A validated summarizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summarizer {
    budget: usize,
    lookback: usize,
}

impl Summarizer {
    pub fn new(budget: usize) -> Result<Self> {
        if budget == 0 {
            return Err(Error::InvalidArgument(
                "budget must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            budget,
            lookback: DEFAULT_LOOKBACK,
        })
    }

    /// Search `lookback` characters before the cutoff for a word boundary.
    /// A lookback of zero always cuts exactly at the budget.
    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback;
        self
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn lookback(&self) -> usize {
        self.lookback
    }

    pub fn summarize(&self, text: &str) -> String {
        let char_count = text.chars().count();
        if char_count <= self.budget || self.is_summary(text) {
            return text.to_string();
        }

        let body = self.cut(text);
        debug!(
            budget = self.budget,
            original = char_count,
            kept = body.chars().count(),
            "summarized text"
        );
        format!("{}{}", body, ELLIPSIS)
    }

    /// Text that already ends with the marker after a body within budget.
    fn is_summary(&self, text: &str) -> bool {
        text.strip_suffix(ELLIPSIS)
            .is_some_and(|body| body.chars().count() <= self.budget)
    }

    /// Returns the kept prefix of `text`, which must be longer than the budget.
    fn cut<'a>(&self, text: &'a str) -> &'a str {
        let head: Vec<(usize, char)> = text.char_indices().take(self.budget + 1).collect();
        let Some(&(hard_end, next)) = head.get(self.budget) else {
            return text;
        };
        let prefix = &text[..hard_end];
        let exact = non_blank_or(prefix.trim_end(), prefix);

        // The first dropped character is whitespace: the whole prefix is made of full words.
        if next.is_whitespace() {
            return exact;
        }

        let window_start = self.budget.saturating_sub(self.lookback);
        let boundary = head[window_start..self.budget]
            .iter()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|&(offset, _)| offset);

        match boundary {
            Some(end) => non_blank_or(text[..end].trim_end(), exact),
            None => exact,
        }
    }
}

fn non_blank_or<'a>(body: &'a str, fallback: &'a str) -> &'a str {
    if body.is_empty() {
        fallback
    } else {
        body
    }
}
