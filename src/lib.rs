#![forbid(unsafe_code)]
pub mod app;
pub mod mr;

pub use app::wc::{by_count, word_frequency, word_frequency_all};

/// An intermediate pair emitted by a map function and folded by a reduce function.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct KeyValue {

    pub key: String,

    pub value: usize,
}

impl KeyValue {

    pub fn new(key: String, value: usize) -> Self {
        Self { key, value }
    }

}
