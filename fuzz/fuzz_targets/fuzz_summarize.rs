#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use collection_cards::summarize::{Summarizer, ELLIPSIS};

#[derive(Arbitrary, Debug)]
struct SummarizeInput {
    text: String,
    budget: u16,
    lookback: u8,
}

fuzz_target!(|input: SummarizeInput| {
    let budget = input.budget as usize;
    let summarizer = match Summarizer::new(budget) {
        Ok(s) => s.with_lookback(input.lookback as usize),
        Err(_) => {
            assert_eq!(budget, 0);
            return;
        }
    };

    let once = summarizer.summarize(&input.text);

    if input.text.chars().count() <= budget {
        assert_eq!(once, input.text);
    } else {
        assert!(once.ends_with(ELLIPSIS));
    }

    let body = once.strip_suffix(ELLIPSIS).unwrap_or(&once);
    assert!(input.text.starts_with(body));
    if once != input.text {
        assert!(body.chars().count() <= budget);
    }

    assert_eq!(summarizer.summarize(&once), once);
});
