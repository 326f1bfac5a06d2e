//! Word count application: punctuation is stripped, text is lowercased and
//! split on whitespace, and every token is tallied.
//!
//! Word characters are Unicode letters, combining marks, decimal digits and
//! `_`, so letters outside ASCII (`é`, `ß`, `ж`) are kept as part of words.
//! Connector punctuation (`‿`) and joiners (ZWJ) are stripped like any other
//! punctuation.

use std::{collections::BTreeMap, sync::OnceLock};

use log::debug;
use regex::Regex;

use crate::{mr::sequential, KeyValue};

fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    // Anything that is neither a word character nor whitespace.
    PUNCTUATION.get_or_init(|| {
        Regex::new(r"[^\p{Alphabetic}\p{M}\p{Nd}_\s]").expect("punctuation pattern compiles")
    })
}

/// Drops punctuation and lowercases what remains.
///
/// Punctuation is removed, not replaced by a space, so `don't` becomes `dont`.
/// Characters are lowercased one at a time, without the final-sigma context
/// rule, so `ΑΣ` and `ασ` normalize alike.
pub fn normalize(text: &str) -> String {
    punctuation()
        .replace_all(text, "")
        .chars()
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalizes `text` and splits it on runs of whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

pub fn map(input: &str) -> Vec<KeyValue> {
    normalize(input)
        .split_whitespace()
        .map(|x| KeyValue::new(x.to_owned(), 1))
        .collect()
}

pub fn reduce(_key: &str, values: &[usize]) -> usize {
    values.iter().sum()
}

/// Counts how often each normalized word occurs in `text`.
///
/// ```
/// let freqs = word_frequency::word_frequency("three, Three three!");
/// assert_eq!(freqs.get("three"), Some(&3));
/// assert_eq!(freqs.len(), 1);
/// ```
pub fn word_frequency(text: &str) -> BTreeMap<String, usize> {
    word_frequency_all(&[text])
}

/// Counts words across several texts as if they were one text.
pub fn word_frequency_all<S: AsRef<str>>(texts: &[S]) -> BTreeMap<String, usize> {
    let freqs = sequential::run(texts, map, reduce)
        .into_iter()
        .map(|kv| (kv.key, kv.value))
        .collect::<BTreeMap<String, usize>>();
    debug!(
        "Counted {} distinct word(s) in {} text(s)",
        freqs.len(),
        texts.len()
    );
    freqs
}

/// Orders entries by ascending count. Ties keep key order.
pub fn by_count(freqs: &BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries = freqs
        .iter()
        .map(|(word, &count)| (word.clone(), count))
        .collect::<Vec<_>>();
    entries.sort_by_key(|&(_, count)| count);
    entries
}
