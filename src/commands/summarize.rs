use anyhow::{Context, Result};
use std::io::{self, Read};

use crate::summarize::Summarizer;

/// Summarize `text`, or stdin when `text` is `None` or `-`.
pub fn run(text: Option<&str>, budget: usize, lookback: usize) -> Result<()> {
    let input = match text {
        Some(t) if t != "-" => t.to_string(),
        _ => read_stdin()?,
    };

    println!("{}", render(&input, budget, lookback)?);
    Ok(())
}

pub fn render(text: &str, budget: usize, lookback: usize) -> Result<String> {
    let summarizer = Summarizer::new(budget)?.with_lookback(lookback);
    Ok(summarizer.summarize(text))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;

    // Only the newline terminating the input, not whitespace that belongs to the text
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}
